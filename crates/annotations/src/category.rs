use std::fmt;

/// One stylistic classification the analysis engine can attach to a
/// span of prose.
///
/// Declaration order is precedence order: when one span could belong
/// to several categories, the earliest variant wins, and decoration
/// groups are emitted in this order. [`Category::ALL`] exposes the
/// same order as a slice for iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
	/// Nouns naming ideas rather than things ("tendency", "aspect").
	AbstractNoun,
	/// Hedging adjectives and adverbs common in academic prose.
	AcademicAdWord,
	/// Any other adjective or adverb.
	Adjective,
	/// Forms of "to be".
	BeVerb,
	/// Prepositions.
	Preposition,
}

impl Category {
	/// Every category, in precedence order.
	pub const ALL: [Category; 5] = [
		Category::AbstractNoun,
		Category::AcademicAdWord,
		Category::Adjective,
		Category::BeVerb,
		Category::Preposition,
	];

	/// Stable wire code used by both analysis backends.
	pub const fn code(self) -> &'static str {
		match self {
			Category::AbstractNoun => "abstract-nouns",
			Category::AcademicAdWord => "academic-ad-words",
			Category::Adjective => "adjectives",
			Category::BeVerb => "be-verbs",
			Category::Preposition => "prepositions",
		}
	}

	/// Parses a wire code. Returns `None` for anything that is not
	/// exactly one of the five known codes.
	pub fn from_code(code: &str) -> Option<Category> {
		match code {
			"abstract-nouns" => Some(Category::AbstractNoun),
			"academic-ad-words" => Some(Category::AcademicAdWord),
			"adjectives" => Some(Category::Adjective),
			"be-verbs" => Some(Category::BeVerb),
			"prepositions" => Some(Category::Preposition),
			_ => None,
		}
	}

	/// Human-readable text shown when hovering a decorated span.
	pub const fn hover_text(self) -> &'static str {
		match self {
			Category::AbstractNoun => "abstract noun",
			Category::AcademicAdWord => "academic adjective/adverb",
			Category::Adjective => "adjective/adverb",
			Category::BeVerb => "'be' verb",
			Category::Preposition => "preposition",
		}
	}
}

impl fmt::Display for Category {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.code())
	}
}
