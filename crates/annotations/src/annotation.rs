use thiserror::Error;

use crate::category::Category;
use crate::span::Span;

/// A validated annotation: one categorized span, ready for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Annotation {
	/// The category the span was classified as.
	pub category: Category,
	/// Where in the document the classification applies.
	pub span: Span,
}

impl Annotation {
	/// Creates a new annotation.
	pub const fn new(category: Category, span: Span) -> Self {
		Self { category, span }
	}
}

/// One raw result item as delivered by an analysis backend, before
/// validation. Both the streaming and the local backend reduce their
/// wire shapes to this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAnnotation {
	/// Category wire code; see [`Category::from_code`].
	pub code: String,
	/// The reported span, not yet checked for ordering.
	pub span: Span,
}

impl RawAnnotation {
	/// Creates a raw annotation from a wire code and span.
	pub fn new(code: impl Into<String>, span: Span) -> Self {
		Self {
			code: code.into(),
			span,
		}
	}

	/// Validates this item into an [`Annotation`].
	pub fn normalize(&self) -> Result<Annotation, InvalidAnnotation> {
		let Some(category) = Category::from_code(&self.code) else {
			return Err(InvalidAnnotation::UnknownCategory {
				code: self.code.clone(),
			});
		};
		if !self.span.is_ordered() {
			return Err(InvalidAnnotation::InvertedSpan { span: self.span });
		}
		Ok(Annotation::new(category, self.span))
	}
}

/// Reasons a backend result item fails validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidAnnotation {
	/// The category code is not one of the five known wire codes.
	#[error("unknown category code: {code:?}")]
	UnknownCategory {
		/// The unrecognized code as received.
		code: String,
	},

	/// The span ends before it starts.
	#[error("span end precedes its start: {span:?}")]
	InvertedSpan {
		/// The unordered span as received.
		span: Span,
	},
}

/// Validates a whole backend batch, preserving arrival order.
///
/// Rejects on the first invalid item: a batch either applies in full
/// or not at all, so a malformed result can never leave a document
/// half-annotated. Callers keep whatever they had cached before.
pub fn normalize_batch<I>(items: I) -> Result<Vec<Annotation>, InvalidAnnotation>
where
	I: IntoIterator<Item = RawAnnotation>,
{
	items.into_iter().map(|raw| raw.normalize()).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn raw(code: &str, span: Span) -> RawAnnotation {
		RawAnnotation::new(code, span)
	}

	#[test]
	fn normalizes_a_valid_batch_in_order() {
		let batch = vec![
			raw("be-verbs", Span::new(0, 0, 0, 2)),
			raw("prepositions", Span::new(0, 5, 0, 7)),
			raw("be-verbs", Span::new(1, 3, 1, 6)),
		];
		let annotations = normalize_batch(batch).unwrap();
		assert_eq!(
			annotations,
			vec![
				Annotation::new(Category::BeVerb, Span::new(0, 0, 0, 2)),
				Annotation::new(Category::Preposition, Span::new(0, 5, 0, 7)),
				Annotation::new(Category::BeVerb, Span::new(1, 3, 1, 6)),
			]
		);
	}

	#[test]
	fn unknown_code_rejects_the_whole_batch() {
		let batch = vec![
			raw("be-verbs", Span::new(0, 0, 0, 2)),
			raw("weasel-words", Span::new(0, 5, 0, 7)),
		];
		let err = normalize_batch(batch).unwrap_err();
		assert_eq!(
			err,
			InvalidAnnotation::UnknownCategory {
				code: "weasel-words".into()
			}
		);
	}

	#[test]
	fn inverted_span_rejects_the_whole_batch() {
		let bad = Span::new(2, 4, 2, 1);
		let batch = vec![
			raw("adjectives", Span::new(0, 0, 0, 3)),
			raw("adjectives", bad),
			raw("adjectives", Span::new(5, 0, 5, 3)),
		];
		let err = normalize_batch(batch).unwrap_err();
		assert_eq!(err, InvalidAnnotation::InvertedSpan { span: bad });
	}

	#[test]
	fn empty_spans_are_valid() {
		let annotations =
			normalize_batch(vec![raw("prepositions", Span::new(4, 2, 4, 2))]).unwrap();
		assert_eq!(annotations.len(), 1);
	}

	#[test]
	fn empty_batch_is_valid() {
		assert_eq!(normalize_batch(Vec::new()).unwrap(), Vec::new());
	}

	#[test]
	fn error_messages_are_lowercase_and_specific() {
		let err = InvalidAnnotation::UnknownCategory {
			code: "nope".into(),
		};
		assert_eq!(err.to_string(), "unknown category code: \"nope\"");
	}
}
