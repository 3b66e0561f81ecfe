//! Core types for prose annotations: categories, spans, and batch
//! normalization.
//!
//! An annotation is a [`Category`] attached to a [`Span`] of document
//! text. Analysis backends deliver them in a raw wire shape
//! ([`RawAnnotation`], category as string code); [`normalize_batch`]
//! validates a whole backend batch at once so a single malformed item
//! never half-applies.

/// Annotation values, raw wire shape, and batch normalization.
pub mod annotation;
/// The fixed category registry with wire codes and hover texts.
pub mod category;
/// Line/character spans in UTF-16 column coordinates.
pub mod span;

pub use annotation::{Annotation, InvalidAnnotation, RawAnnotation, normalize_batch};
pub use category::Category;
pub use span::Span;
