//! Adapter for the streaming language-server backend.
//!
//! Process management and the protocol loop live in the host's client
//! plumbing; this adapter is the single entry point that plumbing
//! calls with published diagnostics. Hint-severity diagnostics carry
//! annotation measurements (their code is the category wire code, the
//! range is the span); every other severity belongs to the host's
//! diagnostics display and passes through unchanged.

use lsp_types::{Diagnostic, DiagnosticSeverity, NumberOrString, Uri};
use tinct_annotations::{Annotation, InvalidAnnotation, RawAnnotation, Span, normalize_batch};
use tinct_overlay::DocumentId;
use tracing::{debug, error, warn};

use crate::source::{AnnotationSource, Severity, SourceEvent, SourceEventSender, Warning};

/// Routes published diagnostics from the streaming server.
pub struct StreamingSource {
	events: SourceEventSender,
}

impl StreamingSource {
	/// Creates a source emitting on `events`.
	pub fn new(events: SourceEventSender) -> Self {
		Self { events }
	}

	/// Splits one published batch into annotation measurements and
	/// pass-through warnings.
	///
	/// Warnings are always forwarded, even when empty, so stale
	/// squiggles clear. A malformed measurement rejects the whole
	/// annotation batch (previous annotations stay up) but never the
	/// warnings.
	pub fn publish_diagnostics(&self, uri: &Uri, diagnostics: Vec<Diagnostic>) {
		let doc = DocumentId::new(uri.as_str());
		let (hints, rest): (Vec<_>, Vec<_>) = diagnostics
			.into_iter()
			.partition(|diagnostic| diagnostic.severity == Some(DiagnosticSeverity::HINT));

		let warnings = rest.into_iter().map(warning_from_diagnostic).collect();
		let _ = self.events.send(SourceEvent::Warnings {
			doc: doc.clone(),
			warnings,
		});

		match annotations_from_hints(hints) {
			Ok(batch) => {
				debug!(doc = %doc, count = batch.len(), "received annotation batch");
				let _ = self.events.send(SourceEvent::Annotations { doc, batch });
			}
			Err(err) => {
				warn!(doc = %doc, error = %err, "rejecting annotation batch from server");
			}
		}
	}

	/// Entry point for the plumbing when the server cannot run at all
	/// (missing binary, crash loop). The overlay stays empty; nothing
	/// panics.
	pub fn server_unavailable(&self, reason: impl Into<String>) {
		let reason = reason.into();
		error!(reason = %reason, "streaming backend unavailable");
		let _ = self.events.send(SourceEvent::Unavailable { reason });
	}
}

impl AnnotationSource for StreamingSource {
	fn analyze(&self, _doc: &DocumentId, _text: &str) {
		// Document sync is the client plumbing's job; results arrive
		// through publish_diagnostics.
	}
}

fn annotations_from_hints(hints: Vec<Diagnostic>) -> Result<Vec<Annotation>, InvalidAnnotation> {
	normalize_batch(hints.into_iter().map(|diagnostic| {
		let code = match diagnostic.code {
			Some(NumberOrString::String(code)) => code,
			Some(NumberOrString::Number(number)) => number.to_string(),
			None => String::new(),
		};
		RawAnnotation::new(code, span_from_range(diagnostic.range))
	}))
}

fn span_from_range(range: lsp_types::Range) -> Span {
	Span::new(
		range.start.line,
		range.start.character,
		range.end.line,
		range.end.character,
	)
}

fn warning_from_diagnostic(diagnostic: Diagnostic) -> Warning {
	let severity = match diagnostic.severity {
		Some(DiagnosticSeverity::ERROR) => Severity::Error,
		Some(DiagnosticSeverity::WARNING) => Severity::Warning,
		_ => Severity::Info,
	};
	Warning {
		span: span_from_range(diagnostic.range),
		message: diagnostic.message,
		severity,
	}
}

#[cfg(test)]
mod tests {
	use lsp_types::{Position, Range};
	use tinct_annotations::Category;

	use super::*;
	use crate::source::source_channel;

	fn make_diagnostic(
		severity: DiagnosticSeverity,
		code: Option<NumberOrString>,
		range: Range,
		message: &str,
	) -> Diagnostic {
		Diagnostic {
			range,
			severity: Some(severity),
			code,
			code_description: None,
			source: Some("tinct-lsp".into()),
			message: message.into(),
			related_information: None,
			tags: None,
			data: None,
		}
	}

	fn hint(code: &str, range: Range) -> Diagnostic {
		make_diagnostic(
			DiagnosticSeverity::HINT,
			Some(NumberOrString::String(code.into())),
			range,
			code,
		)
	}

	fn range(start_char: u32, end_char: u32) -> Range {
		Range::new(Position::new(0, start_char), Position::new(0, end_char))
	}

	fn doc_uri() -> Uri {
		"file:///tmp/draft.md".parse().unwrap()
	}

	#[test]
	fn hints_become_annotations_and_the_rest_passes_through() {
		let (tx, mut rx) = source_channel();
		let source = StreamingSource::new(tx);

		source.publish_diagnostics(
			&doc_uri(),
			vec![
				hint("be-verbs", range(0, 2)),
				make_diagnostic(
					DiagnosticSeverity::WARNING,
					None,
					range(10, 14),
					"passive voice",
				),
				hint("prepositions", range(5, 7)),
			],
		);

		let warnings = rx.try_recv().unwrap();
		assert_eq!(
			warnings,
			SourceEvent::Warnings {
				doc: DocumentId::new("file:///tmp/draft.md"),
				warnings: vec![Warning {
					span: Span::new(0, 10, 0, 14),
					message: "passive voice".into(),
					severity: Severity::Warning,
				}],
			}
		);

		let annotations = rx.try_recv().unwrap();
		let SourceEvent::Annotations { batch, .. } = annotations else {
			panic!("expected annotations, got {annotations:?}");
		};
		assert_eq!(
			batch,
			vec![
				Annotation::new(Category::BeVerb, Span::new(0, 0, 0, 2)),
				Annotation::new(Category::Preposition, Span::new(0, 5, 0, 7)),
			]
		);
	}

	#[test]
	fn empty_publishes_clear_both_streams() {
		let (tx, mut rx) = source_channel();
		let source = StreamingSource::new(tx);

		source.publish_diagnostics(&doc_uri(), Vec::new());

		assert!(matches!(
			rx.try_recv().unwrap(),
			SourceEvent::Warnings { warnings, .. } if warnings.is_empty()
		));
		assert!(matches!(
			rx.try_recv().unwrap(),
			SourceEvent::Annotations { batch, .. } if batch.is_empty()
		));
	}

	#[test]
	fn unknown_code_rejects_batch_but_not_warnings() {
		let (tx, mut rx) = source_channel();
		let source = StreamingSource::new(tx);

		source.publish_diagnostics(
			&doc_uri(),
			vec![
				make_diagnostic(DiagnosticSeverity::ERROR, None, range(0, 4), "typo"),
				hint("be-verbs", range(0, 2)),
				hint("weasel-words", range(5, 7)),
			],
		);

		// Warnings still arrive.
		assert!(matches!(
			rx.try_recv().unwrap(),
			SourceEvent::Warnings { warnings, .. } if warnings.len() == 1
		));
		// The annotation batch does not.
		assert!(rx.try_recv().is_err());
	}

	#[test]
	fn numeric_and_missing_codes_reject_the_batch() {
		let (tx, mut rx) = source_channel();
		let source = StreamingSource::new(tx);

		source.publish_diagnostics(
			&doc_uri(),
			vec![make_diagnostic(
				DiagnosticSeverity::HINT,
				Some(NumberOrString::Number(3)),
				range(0, 2),
				"",
			)],
		);
		let _warnings = rx.try_recv().unwrap();
		assert!(rx.try_recv().is_err());

		source.publish_diagnostics(
			&doc_uri(),
			vec![make_diagnostic(DiagnosticSeverity::HINT, None, range(0, 2), "")],
		);
		let _warnings = rx.try_recv().unwrap();
		assert!(rx.try_recv().is_err());
	}

	#[test]
	fn inverted_ranges_reject_the_batch() {
		let (tx, mut rx) = source_channel();
		let source = StreamingSource::new(tx);

		source.publish_diagnostics(&doc_uri(), vec![hint("be-verbs", range(4, 1))]);
		let _warnings = rx.try_recv().unwrap();
		assert!(rx.try_recv().is_err());
	}

	#[test]
	fn severity_mapping_for_pass_through() {
		let (tx, mut rx) = source_channel();
		let source = StreamingSource::new(tx);

		source.publish_diagnostics(
			&doc_uri(),
			vec![
				make_diagnostic(DiagnosticSeverity::ERROR, None, range(0, 1), "e"),
				make_diagnostic(DiagnosticSeverity::WARNING, None, range(1, 2), "w"),
				make_diagnostic(DiagnosticSeverity::INFORMATION, None, range(2, 3), "i"),
			],
		);

		let SourceEvent::Warnings { warnings, .. } = rx.try_recv().unwrap() else {
			panic!("expected warnings first");
		};
		let severities: Vec<Severity> = warnings.iter().map(|w| w.severity).collect();
		assert_eq!(severities, vec![Severity::Error, Severity::Warning, Severity::Info]);
	}

	#[test]
	fn unavailability_is_surfaced_as_an_event() {
		let (tx, mut rx) = source_channel();
		let source = StreamingSource::new(tx);

		source.server_unavailable("binary not found: tinct-lsp");
		assert_eq!(
			rx.try_recv().unwrap(),
			SourceEvent::Unavailable {
				reason: "binary not found: tinct-lsp".into()
			}
		);
	}

	#[test]
	fn analyze_is_a_no_op_for_the_streaming_backend() {
		let (tx, mut rx) = source_channel();
		let source = StreamingSource::new(tx);
		source.analyze(&DocumentId::new("file:///tmp/draft.md"), "some text");
		assert!(rx.try_recv().is_err());
	}
}
