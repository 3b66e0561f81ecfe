//! Per-category decoration matchers.
//!
//! A [`MatcherSet`] holds one style handle per category, created from
//! a theme in precedence order. Partitioning routes each annotation to
//! the first matcher of its category, so a span is never decorated by
//! two styles at once.

use tinct_annotations::{Annotation, Category};
use tinct_theme::Theme;
use tracing::debug;

use crate::surface::{Decoration, RenderStyle, StyleId, Surface};

/// One category's matcher: what it matches, the hover text it stamps
/// on decorations, and the style its matches render with.
#[derive(Debug, Clone, Copy)]
struct Matcher {
	category: Category,
	hover: &'static str,
	style: StyleId,
}

/// All matchers for the active theme, in precedence order.
#[derive(Debug)]
pub struct MatcherSet {
	matchers: Vec<Matcher>,
}

impl MatcherSet {
	/// Registers one foreground style per category with the surface.
	pub fn build(theme: &Theme, surface: &dyn Surface) -> Self {
		let matchers = Category::ALL
			.iter()
			.map(|&category| {
				let style = surface.create_style(&RenderStyle::Foreground {
					color: theme.color_for(category).to_string(),
				});
				Matcher {
					category,
					hover: category.hover_text(),
					style,
				}
			})
			.collect();
		debug!(theme = theme.name(), "built matcher set");
		Self { matchers }
	}

	/// Style handles in precedence order.
	pub fn styles(&self) -> impl Iterator<Item = StyleId> + '_ {
		self.matchers.iter().map(|matcher| matcher.style)
	}

	/// Groups annotations by style, keeping only styles that matched
	/// at least one annotation. Group order follows matcher
	/// precedence; within a group, arrival order is preserved.
	pub fn partition(&self, annotations: &[Annotation]) -> Vec<(StyleId, Vec<Decoration>)> {
		self.partition_dense(annotations)
			.into_iter()
			.filter(|(_, decorations)| !decorations.is_empty())
			.collect()
	}

	/// Like [`Self::partition`], but with a (possibly empty) group for
	/// every matcher, so a repaint overwrites styles whose category
	/// vanished from the latest batch.
	pub(crate) fn partition_dense(
		&self,
		annotations: &[Annotation],
	) -> Vec<(StyleId, Vec<Decoration>)> {
		let mut buckets: Vec<Vec<Decoration>> = vec![Vec::new(); self.matchers.len()];
		for annotation in annotations {
			// First matcher wins; anything unmatched is dropped.
			let Some(index) = self
				.matchers
				.iter()
				.position(|matcher| matcher.category == annotation.category)
			else {
				continue;
			};
			buckets[index].push(Decoration {
				span: annotation.span,
				hover: self.matchers[index].hover,
			});
		}
		self.matchers
			.iter()
			.zip(buckets)
			.map(|(matcher, decorations)| (matcher.style, decorations))
			.collect()
	}

	/// Releases every style handle. Call only once a replacement set
	/// has been applied to all visible views, so decorations swap
	/// without flicker.
	pub fn release(self, surface: &dyn Surface) {
		for matcher in &self.matchers {
			surface.release_style(matcher.style);
		}
	}
}

#[cfg(test)]
mod tests {
	use std::sync::atomic::{AtomicU64, Ordering};

	use parking_lot::Mutex;
	use tinct_annotations::{Annotation, Span};
	use tinct_theme::{Theme, ThemeSettings};

	use super::*;
	use crate::surface::{ViewId, ViewInfo};

	#[derive(Default)]
	struct RecordingSurface {
		next_style: AtomicU64,
		created: Mutex<Vec<(StyleId, RenderStyle)>>,
		released: Mutex<Vec<StyleId>>,
	}

	impl Surface for RecordingSurface {
		fn create_style(&self, style: &RenderStyle) -> StyleId {
			let id = StyleId(self.next_style.fetch_add(1, Ordering::Relaxed));
			self.created.lock().push((id, style.clone()));
			id
		}

		fn release_style(&self, style: StyleId) {
			self.released.lock().push(style);
		}

		fn visible_views(&self) -> Vec<ViewInfo> {
			Vec::new()
		}

		fn set_decorations(&self, _view: ViewId, _style: StyleId, _decorations: Vec<Decoration>) {}
	}

	fn default_theme() -> Theme {
		Theme::resolve(&ThemeSettings::default()).unwrap()
	}

	#[test]
	fn build_registers_one_foreground_style_per_category() {
		let surface = RecordingSurface::default();
		let theme = default_theme();
		let set = MatcherSet::build(&theme, &surface);

		assert_eq!(set.styles().count(), Category::ALL.len());
		let created = surface.created.lock();
		for (&category, (_, style)) in Category::ALL.iter().zip(created.iter()) {
			assert_eq!(
				*style,
				RenderStyle::Foreground {
					color: theme.color_for(category).to_string()
				}
			);
		}
	}

	#[test]
	fn partition_routes_each_annotation_to_exactly_one_group() {
		let surface = RecordingSurface::default();
		let set = MatcherSet::build(&default_theme(), &surface);

		// Deliberately out of precedence order.
		let batch = [
			Annotation::new(Category::Preposition, Span::new(0, 5, 0, 7)),
			Annotation::new(Category::BeVerb, Span::new(0, 0, 0, 2)),
			Annotation::new(Category::BeVerb, Span::new(1, 0, 1, 3)),
		];
		let groups = set.partition(&batch);

		// Group order is precedence order, not arrival order.
		let styles: Vec<StyleId> = set.styles().collect();
		assert_eq!(groups.len(), 2);
		assert_eq!(groups[0].0, styles[3]);
		assert_eq!(groups[1].0, styles[4]);

		assert_eq!(
			groups[0].1,
			vec![
				Decoration {
					span: Span::new(0, 0, 0, 2),
					hover: "'be' verb"
				},
				Decoration {
					span: Span::new(1, 0, 1, 3),
					hover: "'be' verb"
				},
			]
		);
		assert_eq!(groups[1].1.len(), 1);
		assert_eq!(groups[1].1[0].hover, "preposition");

		// No span shows up in more than one group.
		let total: usize = groups.iter().map(|(_, d)| d.len()).sum();
		assert_eq!(total, batch.len());
	}

	#[test]
	fn partition_of_empty_batch_is_empty() {
		let surface = RecordingSurface::default();
		let set = MatcherSet::build(&default_theme(), &surface);
		assert!(set.partition(&[]).is_empty());
	}

	#[test]
	fn dense_partition_keeps_empty_groups() {
		let surface = RecordingSurface::default();
		let set = MatcherSet::build(&default_theme(), &surface);

		let batch = [Annotation::new(Category::Adjective, Span::new(2, 1, 2, 4))];
		let groups = set.partition_dense(&batch);

		assert_eq!(groups.len(), Category::ALL.len());
		let non_empty: Vec<_> = groups.iter().filter(|(_, d)| !d.is_empty()).collect();
		assert_eq!(non_empty.len(), 1);
		assert_eq!(non_empty[0].1[0].hover, "adjective/adverb");
	}

	#[test]
	fn release_frees_every_style() {
		let surface = RecordingSurface::default();
		let set = MatcherSet::build(&default_theme(), &surface);
		let styles: Vec<StyleId> = set.styles().collect();

		set.release(&surface);
		assert_eq!(*surface.released.lock(), styles);
	}
}
