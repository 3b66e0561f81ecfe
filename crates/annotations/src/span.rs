/// A half-open range over document text in line/character coordinates.
///
/// Lines are zero-based. Character offsets count UTF-16 code units,
/// matching what both analysis backends emit, so spans pass through
/// the overlay untranslated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Span {
	/// Zero-based line of the first annotated character.
	pub start_line: u32,
	/// UTF-16 offset of the first annotated character.
	pub start_char: u32,
	/// Zero-based line of the end position (equal to `start_line` for
	/// single-line spans).
	pub end_line: u32,
	/// UTF-16 offset one past the last annotated character.
	pub end_char: u32,
}

impl Span {
	/// Creates a new span.
	pub const fn new(start_line: u32, start_char: u32, end_line: u32, end_char: u32) -> Self {
		Self {
			start_line,
			start_char,
			end_line,
			end_char,
		}
	}

	/// Whether the end position is at or after the start position.
	///
	/// Backends occasionally emit garbage ranges; an unordered span is
	/// invalid input and fails normalization.
	pub const fn is_ordered(&self) -> bool {
		if self.end_line != self.start_line {
			return self.end_line > self.start_line;
		}
		self.end_char >= self.start_char
	}

	/// Whether the span covers zero characters.
	pub const fn is_empty(&self) -> bool {
		self.start_line == self.end_line && self.start_char == self.end_char
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn ordered_spans() {
		assert!(Span::new(0, 0, 0, 2).is_ordered());
		assert!(Span::new(0, 5, 1, 0).is_ordered());
		assert!(Span::new(3, 4, 3, 4).is_ordered());
	}

	#[test]
	fn unordered_spans() {
		assert!(!Span::new(0, 2, 0, 0).is_ordered());
		assert!(!Span::new(2, 0, 1, 9).is_ordered());
	}

	#[test]
	fn emptiness() {
		assert!(Span::new(1, 1, 1, 1).is_empty());
		assert!(!Span::new(1, 1, 1, 2).is_empty());
		assert!(!Span::new(1, 1, 2, 1).is_empty());
	}
}
