//! Built-in palette catalog.
//!
//! Each palette is a flat hex block pasted from its palette page plus
//! an index map choosing one color per category. The catalog is built
//! once on first access; the index maps are checked by the catalog
//! integrity test.

use std::sync::LazyLock;

use crate::{PaletteIndexes, Theme};

/// Name of the palette used when settings name an unknown one.
pub const DEFAULT_PALETTE: &str = "fairydust-8";

static CATALOG: LazyLock<Vec<Theme>> = LazyLock::new(|| {
	vec![
		Theme::from_hex(
			"pastel-qt",
			"cb8175
			e2a97e
			f0cf8e
			f6edcd
			a8c8a6
			6d8d8a
			655057",
			PaletteIndexes {
				abstract_nouns: 2,
				academic_ad_words: 4,
				adjectives: 5,
				be_verbs: 0,
				prepositions: 6,
			},
		)
		.expect("pastel-qt: bad palette data"),
		Theme::from_hex(
			"fairydust-8",
			"f0dab1
			e39aac
			c45d9f
			634b7d
			6461c2
			2ba9b4
			93d4b5
			f0f6e8",
			PaletteIndexes {
				abstract_nouns: 0,
				academic_ad_words: 6,
				adjectives: 5,
				be_verbs: 2,
				prepositions: 4,
			},
		)
		.expect("fairydust-8: bad palette data"),
		Theme::from_hex(
			"curiosities",
			"46425e
			15788c
			00b9be
			ffeecc
			ffb0a3
			ff6973",
			PaletteIndexes {
				abstract_nouns: 3,
				academic_ad_words: 2,
				adjectives: 1,
				be_verbs: 5,
				prepositions: 4,
			},
		)
		.expect("curiosities: bad palette data"),
		Theme::from_hex(
			"hydrangea-11",
			"413652
			6f577e
			986f9c
			c090a7
			d4beb8
			eae4dd
			c9d4b8
			90c0a0
			6f919c
			62778c
			575f7e",
			PaletteIndexes {
				abstract_nouns: 4,
				academic_ad_words: 7,
				adjectives: 6,
				be_verbs: 3,
				prepositions: 8,
			},
		)
		.expect("hydrangea-11: bad palette data"),
		Theme::from_hex(
			"marumaru-gum",
			"fda9a9
			f3eded
			b9eedc
			96beb1
			82939b",
			PaletteIndexes {
				abstract_nouns: 1,
				academic_ad_words: 2,
				adjectives: 3,
				be_verbs: 0,
				prepositions: 4,
			},
		)
		.expect("marumaru-gum: bad palette data"),
		Theme::from_hex(
			"painted-parchment-9",
			"dda963
			c9814b
			25272a
			dbc1af
			cf6a4f
			e0b94a
			b2af5c
			a7a79e
			9b6970",
			PaletteIndexes {
				abstract_nouns: 0,
				academic_ad_words: 6,
				adjectives: 5,
				be_verbs: 4,
				prepositions: 7,
			},
		)
		.expect("painted-parchment-9: bad palette data"),
		Theme::from_hex(
			"sweethope",
			"615e85
			9c8dc2
			d9a3cd
			ebc3a7
			e0e0dc
			a3d1af
			90b4de
			717fb0",
			PaletteIndexes {
				abstract_nouns: 3,
				academic_ad_words: 5,
				adjectives: 4,
				be_verbs: 2,
				prepositions: 6,
			},
		)
		.expect("sweethope: bad palette data"),
	]
});

/// Looks up a built-in palette by name.
pub fn builtin(name: &str) -> Option<&'static Theme> {
	CATALOG.iter().find(|theme| theme.name() == name)
}

/// Names of every built-in palette, in catalog order.
pub fn builtin_names() -> impl Iterator<Item = &'static str> {
	CATALOG.iter().map(|theme| theme.name())
}
