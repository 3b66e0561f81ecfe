//! Analysis backends and the overlay session.
//!
//! This crate connects an analysis backend to the reconciler in
//! `tinct-overlay` without either side knowing about the other. Both
//! backends implement one capability, [`AnnotationSource`], and emit
//! [`SourceEvent`]s on a channel; the host drains that channel by
//! calling [`OverlaySession::pump`] from its event loop.
//!
//! # Event flow
//!
//! ```text
//! host events (open/change/close/visibility/config)
//!        │
//!        ▼
//! OverlaySession ──analyze──▶ AnnotationSource (streaming or local)
//!        ▲                          │
//!        └────── pump ◀── channel ◀─┘  (annotations, warnings,
//!                                        unavailability)
//! ```
//!
//! Results are applied strictly on the host's thread, so everything
//! downstream of the channel is single-threaded and lock-free.

/// Session configuration surface.
pub mod config;
/// The in-process synchronous analyzer adapter.
pub mod local;
/// Session lifecycle and the event pump.
pub mod session;
/// Backend event vocabulary and capability traits.
pub mod source;
/// The streaming language-server adapter.
pub mod streaming;

pub use config::{BackendKind, OverlayConfig, ServerSettings};
pub use local::{AnalysisReport, Analyzer, AnalyzerError, LocalSource};
pub use session::OverlaySession;
pub use source::{
	AnnotationSource, DiagnosticsSink, Severity, SourceEvent, SourceEventReceiver,
	SourceEventSender, Warning, source_channel,
};
pub use streaming::StreamingSource;
