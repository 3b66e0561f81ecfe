//! Adapter for the in-process synchronous analyzer.
//!
//! The local backend runs one analysis pass per document snapshot,
//! directly on the calling thread, and delivers results through the
//! same event channel as the streaming backend so the session cannot
//! tell them apart.

use std::sync::Arc;

use thiserror::Error;
use tinct_annotations::{RawAnnotation, normalize_batch};
use tinct_overlay::DocumentId;
use tracing::{debug, warn};

use crate::source::{AnnotationSource, SourceEvent, SourceEventSender, Warning};

/// A single synchronous analysis pass over one document's text.
///
/// Implementations wrap whatever actually does the work (an embedded
/// module, an FFI call); they report spans in UTF-16 columns like the
/// streaming backend does.
pub trait Analyzer: Send + Sync {
	/// Analyzes a full document snapshot.
	fn analyze(&self, text: &str) -> Result<AnalysisReport, AnalyzerError>;
}

/// Everything one analysis pass produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisReport {
	/// Prose warnings for the host's diagnostics display.
	pub warnings: Vec<Warning>,
	/// Raw annotation measurements; the adapter validates them.
	pub measurements: Vec<RawAnnotation>,
}

/// The analyzer failed on one document. Earlier results stay valid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("analyzer failed: {0}")]
pub struct AnalyzerError(pub String);

/// Drives an [`Analyzer`] from document events.
pub struct LocalSource {
	analyzer: Arc<dyn Analyzer>,
	events: SourceEventSender,
}

impl LocalSource {
	/// Creates a source running `analyzer` for every snapshot.
	pub fn new(analyzer: Arc<dyn Analyzer>, events: SourceEventSender) -> Self {
		Self { analyzer, events }
	}
}

impl AnnotationSource for LocalSource {
	fn analyze(&self, doc: &DocumentId, text: &str) {
		let report = match self.analyzer.analyze(text) {
			Ok(report) => report,
			Err(err) => {
				warn!(doc = %doc, error = %err, "analysis failed, keeping previous annotations");
				return;
			}
		};
		match normalize_batch(report.measurements) {
			Ok(batch) => {
				debug!(doc = %doc, count = batch.len(), "analyzed document");
				let _ = self.events.send(SourceEvent::Annotations {
					doc: doc.clone(),
					batch,
				});
			}
			Err(err) => {
				warn!(doc = %doc, error = %err, "rejecting annotation batch from analyzer");
			}
		}
		let _ = self.events.send(SourceEvent::Warnings {
			doc: doc.clone(),
			warnings: report.warnings,
		});
	}
}
