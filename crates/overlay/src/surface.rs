//! The rendering seam between the overlay engine and the host editor.
//!
//! The engine never draws; it describes styles and decoration sets,
//! and a host-implemented [`Surface`] maps those onto its own
//! decoration primitives. Style handles are opaque to the engine and
//! live until explicitly released.

use std::fmt;

use tinct_annotations::Span;
use url::Url;

/// Stable identity of a document across the whole engine.
///
/// Wraps the document's URI with one normalization pass, so two
/// differently-spelled URIs for the same document cannot split the
/// annotation cache. Strings that do not parse as URIs (scratch
/// buffers and the like) are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(String);

impl DocumentId {
	/// Creates an identity from a raw URI string.
	pub fn new(raw: impl Into<String>) -> Self {
		let raw = raw.into();
		match Url::parse(&raw) {
			Ok(url) => Self(url.into()),
			Err(_) => Self(raw),
		}
	}

	/// The canonical string form.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl From<&Url> for DocumentId {
	fn from(url: &Url) -> Self {
		Self(url.as_str().to_owned())
	}
}

impl fmt::Display for DocumentId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// Identifies one editor view (a document can be shown in several).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewId(pub u64);

impl fmt::Display for ViewId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "view#{}", self.0)
	}
}

/// Opaque handle to a style registered with the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StyleId(pub u64);

impl fmt::Display for StyleId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "style#{}", self.0)
	}
}

/// A visible view and the document it shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewInfo {
	/// The view.
	pub view: ViewId,
	/// The document rendered in it.
	pub document: DocumentId,
}

/// Visual treatment backing one style handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderStyle {
	/// Recolor the span's text.
	Foreground {
		/// Text color as a hex string.
		color: String,
	},
	/// Draw a dotted border around the span, leaving text color alone.
	Border {
		/// Border color as a hex string.
		color: String,
	},
}

/// One decorated span plus its hover text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoration {
	/// Where to decorate.
	pub span: Span,
	/// Text shown when hovering the span.
	pub hover: &'static str,
}

/// Rendering capabilities the host editor provides.
///
/// `set_decorations` replaces the full decoration set for one
/// (view, style) pair; the engine relies on that replace semantic to
/// clear styles by painting an empty list.
pub trait Surface: Send + Sync {
	/// Registers a style and returns its handle.
	fn create_style(&self, style: &RenderStyle) -> StyleId;
	/// Frees a style handle. Decorations painted with it disappear.
	fn release_style(&self, style: StyleId);
	/// Every currently visible view, with its document.
	fn visible_views(&self) -> Vec<ViewInfo>;
	/// Replaces the decorations of `style` in `view`.
	fn set_decorations(&self, view: ViewId, style: StyleId, decorations: Vec<Decoration>);
}
