//! Backend event vocabulary and capability traits.
//!
//! Backends never touch the reconciler. They emit [`SourceEvent`]s on
//! an unbounded channel, and the session applies them on the host's
//! thread. The channel is the only thing backends and the session
//! share.

use tinct_annotations::{Annotation, Span};
use tinct_overlay::DocumentId;
use tokio::sync::mpsc;

/// Severity of a pass-through warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
	/// The host should render this as an error.
	Error,
	/// The host should render this as a warning.
	Warning,
	/// Informational only.
	Info,
}

/// A non-annotation finding, forwarded verbatim to the host's
/// diagnostics display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
	/// Where the finding applies.
	pub span: Span,
	/// Human-readable description.
	pub message: String,
	/// How prominently the host should render it.
	pub severity: Severity,
}

/// Events backends emit toward the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceEvent {
	/// A validated annotation batch for one document. An empty batch
	/// clears the document's overlay.
	Annotations {
		/// The analyzed document.
		doc: DocumentId,
		/// The full replacement batch.
		batch: Vec<Annotation>,
	},
	/// Pass-through diagnostics for one document. An empty list clears
	/// previously published warnings.
	Warnings {
		/// The analyzed document.
		doc: DocumentId,
		/// The full replacement warning set.
		warnings: Vec<Warning>,
	},
	/// The backend cannot produce results at all.
	Unavailable {
		/// Why, for the log and the host's status display.
		reason: String,
	},
}

/// Sender half held by backends.
pub type SourceEventSender = mpsc::UnboundedSender<SourceEvent>;

/// Receiver half owned by the session.
pub type SourceEventReceiver = mpsc::UnboundedReceiver<SourceEvent>;

/// Creates the event channel a source constructor and
/// [`crate::OverlaySession::new`] take the two ends of.
pub fn source_channel() -> (SourceEventSender, SourceEventReceiver) {
	mpsc::unbounded_channel()
}

/// The one capability the session needs from an analysis backend.
///
/// [`analyze`](Self::analyze) submits a document snapshot; results
/// arrive later as [`SourceEvent`]s. The streaming backend ignores the
/// call because its client plumbing syncs documents itself.
pub trait AnnotationSource: Send + Sync {
	/// Requests (re)analysis of one document.
	fn analyze(&self, doc: &DocumentId, text: &str);
}

/// Where pass-through warnings land; implemented by the host.
pub trait DiagnosticsSink: Send + Sync {
	/// Replaces the published warnings for one document.
	fn publish(&self, doc: &DocumentId, warnings: Vec<Warning>);
}
