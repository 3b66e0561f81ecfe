//! Category color themes for the annotation overlay.
//!
//! A [`Theme`] is a total mapping from [`Category`] to a hex color
//! string. Themes come from the built-in palette catalog or from
//! per-category user overrides; [`Theme::resolve`] validates
//! everything up front so that color lookup can never fail while
//! painting. When resolution fails the caller degrades to
//! [`Theme::neutral`] instead of dropping the overlay.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tinct_annotations::Category;
use tracing::debug;

/// The built-in palette catalog.
pub mod builtins;

/// One hex color per category; the payload of a constructed theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeColors {
	/// Color for abstract nouns.
	pub abstract_nouns: String,
	/// Color for academic adjectives/adverbs.
	pub academic_ad_words: String,
	/// Color for other adjectives/adverbs.
	pub adjectives: String,
	/// Color for forms of "to be".
	pub be_verbs: String,
	/// Color for prepositions.
	pub prepositions: String,
}

/// Index of each category's color within a flat palette list, used by
/// [`Theme::from_hex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteIndexes {
	/// Palette index for abstract nouns.
	pub abstract_nouns: usize,
	/// Palette index for academic adjectives/adverbs.
	pub academic_ad_words: usize,
	/// Palette index for other adjectives/adverbs.
	pub adjectives: usize,
	/// Palette index for forms of "to be".
	pub be_verbs: usize,
	/// Palette index for prepositions.
	pub prepositions: usize,
}

/// A named, total assignment of colors to categories.
///
/// Construction is the only place color coverage is checked; once a
/// `Theme` exists, [`Theme::color_for`] cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
	name: String,
	colors: ThemeColors,
}

impl Theme {
	/// Creates a theme from explicit per-category colors.
	pub fn new(name: impl Into<String>, colors: ThemeColors) -> Self {
		Self {
			name: name.into(),
			colors,
		}
	}

	/// The theme's name (palette name, `custom`, or `neutral`).
	pub fn name(&self) -> &str {
		&self.name
	}

	/// The hex color assigned to a category.
	pub fn color_for(&self, category: Category) -> &str {
		match category {
			Category::AbstractNoun => &self.colors.abstract_nouns,
			Category::AcademicAdWord => &self.colors.academic_ad_words,
			Category::Adjective => &self.colors.adjectives,
			Category::BeVerb => &self.colors.be_verbs,
			Category::Preposition => &self.colors.prepositions,
		}
	}

	/// Builds a theme from a flat list of hex colors, one per line,
	/// picking each category's color by index.
	///
	/// Lines are trimmed and prefixed with `#`, so palette blocks can
	/// be pasted verbatim from palette sites.
	pub fn from_hex(name: &str, hex: &str, indexes: PaletteIndexes) -> Result<Theme, ThemeError> {
		let palette: Vec<String> = hex
			.trim()
			.lines()
			.map(|line| format!("#{}", line.trim()))
			.collect();
		let pick = |category: Category, index: usize| -> Result<String, ThemeError> {
			palette
				.get(index)
				.cloned()
				.ok_or_else(|| ThemeError::PaletteIndexOutOfRange {
					palette: name.to_string(),
					category,
					index,
					len: palette.len(),
				})
		};
		Ok(Theme::new(
			name,
			ThemeColors {
				abstract_nouns: pick(Category::AbstractNoun, indexes.abstract_nouns)?,
				academic_ad_words: pick(Category::AcademicAdWord, indexes.academic_ad_words)?,
				adjectives: pick(Category::Adjective, indexes.adjectives)?,
				be_verbs: pick(Category::BeVerb, indexes.be_verbs)?,
				prepositions: pick(Category::Preposition, indexes.prepositions)?,
			},
		))
	}

	/// Resolves user settings into a theme.
	///
	/// With the custom flag set, all five per-category overrides must
	/// be present. Otherwise the named built-in palette is used; an
	/// unknown name falls back to the default palette.
	pub fn resolve(settings: &ThemeSettings) -> Result<Theme, ThemeError> {
		if settings.custom {
			return Self::custom(&settings.custom_colors);
		}
		match builtins::builtin(&settings.builtin) {
			Some(theme) => Ok(theme.clone()),
			None => {
				debug!(
					name = %settings.builtin,
					fallback = builtins::DEFAULT_PALETTE,
					"unknown builtin palette, using default"
				);
				Ok(builtins::builtin(builtins::DEFAULT_PALETTE)
					.cloned()
					.unwrap_or_else(Theme::neutral))
			}
		}
	}

	/// The degrade target when resolution fails: every category in one
	/// neutral gray, so annotations stay visible without category
	/// distinction.
	pub fn neutral() -> Theme {
		const NEUTRAL: &str = "#888888";
		Theme::new(
			"neutral",
			ThemeColors {
				abstract_nouns: NEUTRAL.into(),
				academic_ad_words: NEUTRAL.into(),
				adjectives: NEUTRAL.into(),
				be_verbs: NEUTRAL.into(),
				prepositions: NEUTRAL.into(),
			},
		)
	}

	fn custom(colors: &CustomColors) -> Result<Theme, ThemeError> {
		let mut missing = Vec::new();
		let mut require = |category: Category, value: &Option<String>| -> String {
			match value {
				Some(color) => color.clone(),
				None => {
					missing.push(category);
					String::new()
				}
			}
		};
		let colors = ThemeColors {
			abstract_nouns: require(Category::AbstractNoun, &colors.abstract_nouns),
			academic_ad_words: require(Category::AcademicAdWord, &colors.academic_ad_words),
			adjectives: require(Category::Adjective, &colors.adjectives),
			be_verbs: require(Category::BeVerb, &colors.be_verbs),
			prepositions: require(Category::Preposition, &colors.prepositions),
		};
		if !missing.is_empty() {
			return Err(ThemeError::IncompleteCustomTheme { missing });
		}
		Ok(Theme::new("custom", colors))
	}
}

/// Errors from theme construction and resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
	/// The custom flag is set but one or more category colors are
	/// absent.
	#[error(
		"custom theme enabled but missing colors for: {}",
		missing.iter().map(|c| c.code()).collect::<Vec<_>>().join(", ")
	)]
	IncompleteCustomTheme {
		/// The categories without an override, in precedence order.
		missing: Vec<Category>,
	},

	/// A palette index map points past the end of the color list.
	#[error("palette {palette:?} has {len} colors, index {index} for {category} is out of range")]
	PaletteIndexOutOfRange {
		/// Name of the palette being built.
		palette: String,
		/// The category whose index was invalid.
		category: Category,
		/// The out-of-range index.
		index: usize,
		/// Number of colors in the palette.
		len: usize,
	},
}

/// User-facing theme settings, deserialized from the host's
/// configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeSettings {
	/// Name of the built-in palette to use.
	#[serde(default = "default_builtin")]
	pub builtin: String,
	/// When set, `custom_colors` replaces the built-in palette.
	#[serde(default)]
	pub custom: bool,
	/// Per-category overrides for the custom theme.
	#[serde(default)]
	pub custom_colors: CustomColors,
}

fn default_builtin() -> String {
	builtins::DEFAULT_PALETTE.to_string()
}

impl Default for ThemeSettings {
	fn default() -> Self {
		Self {
			builtin: default_builtin(),
			custom: false,
			custom_colors: CustomColors::default(),
		}
	}
}

/// Optional per-category hex colors for a custom theme. Values are
/// passed to the rendering surface verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomColors {
	/// Override for abstract nouns.
	pub abstract_nouns: Option<String>,
	/// Override for academic adjectives/adverbs.
	pub academic_ad_words: Option<String>,
	/// Override for other adjectives/adverbs.
	pub adjectives: Option<String>,
	/// Override for forms of "to be".
	pub be_verbs: Option<String>,
	/// Override for prepositions.
	pub prepositions: Option<String>,
}
