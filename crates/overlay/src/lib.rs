//! Decoration matchers and the annotation cache reconciler.
//!
//! This crate owns everything between validated annotations and the
//! editor's rendering primitives: the [`Surface`] seam hosts
//! implement, the per-category [`MatcherSet`] built from a theme, and
//! the [`Reconciler`] that caches annotation batches per document and
//! repaints on visibility, theme, result, and lifecycle events.
//!
//! # Architecture
//!
//! The reconciler never talks to an analysis backend. Backends hand
//! validated batches to [`Reconciler::set_annotations`]; the host
//! forwards visibility and document lifecycle events. Everything else
//! (which views to repaint, which styles to clear, when to release
//! handles) is derived from those two inputs plus the active theme.

/// Matcher construction and precedence partitioning.
pub mod matcher;
/// The annotation cache and repaint state machine.
pub mod reconciler;
/// The host-implemented rendering seam and identity newtypes.
pub mod surface;

pub use matcher::MatcherSet;
pub use reconciler::Reconciler;
pub use surface::{Decoration, DocumentId, RenderStyle, StyleId, Surface, ViewId, ViewInfo};
