//! The annotation cache and repaint state machine.
//!
//! One [`Reconciler`] tracks every open document: the batch it last
//! received, whether it is open at all, and whether the overlay is
//! enabled. Caching per document makes theme swaps and visibility
//! changes repaint instantly, with no request to any backend.
//!
//! # Document states
//!
//! A document is *unknown* (open, no batch yet: its views render
//! nothing), *cached* (open with a batch: views repaint from cache),
//! or *closed* (evicted: late results are dropped until it reopens).
//! Losing visibility changes none of this; only an explicit close
//! evicts.
//!
//! # Concurrency
//!
//! All mutation goes through `&mut self` on the host's event thread.
//! Backend completions are delivered as later events by the caller,
//! so out-of-order results reduce to the open-set check in
//! [`Reconciler::set_annotations`].

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tinct_annotations::Annotation;
use tinct_theme::Theme;
use tracing::debug;

use crate::matcher::MatcherSet;
use crate::surface::{DocumentId, Surface, ViewInfo};

/// Owns the annotation cache and drives every repaint.
pub struct Reconciler {
	surface: Arc<dyn Surface>,
	matchers: MatcherSet,
	cache: HashMap<DocumentId, Vec<Annotation>>,
	open: HashSet<DocumentId>,
	enabled: bool,
}

impl Reconciler {
	/// Creates a reconciler and registers the theme's styles.
	pub fn new(surface: Arc<dyn Surface>, theme: &Theme, enabled: bool) -> Self {
		let matchers = MatcherSet::build(theme, surface.as_ref());
		Self {
			surface,
			matchers,
			cache: HashMap::new(),
			open: HashSet::new(),
			enabled,
		}
	}

	/// Whether the overlay is currently painting.
	pub fn is_enabled(&self) -> bool {
		self.enabled
	}

	/// The cached batch for a document, if it has one.
	pub fn annotations(&self, doc: &DocumentId) -> Option<&[Annotation]> {
		self.cache.get(doc).map(Vec::as_slice)
	}

	/// Registers a document as open so its results are accepted.
	pub fn document_opened(&mut self, doc: DocumentId) {
		debug!(doc = %doc, "document opened");
		self.open.insert(doc);
	}

	/// Evicts a closed document. Results arriving afterwards are
	/// dropped until it reopens.
	pub fn document_closed(&mut self, doc: &DocumentId) {
		self.open.remove(doc);
		if self.cache.remove(doc).is_some() {
			debug!(doc = %doc, "cleared annotation cache for closed document");
		}
	}

	/// Replaces a document's batch wholesale and repaints every
	/// visible view showing it.
	///
	/// Results for documents that are not open are dropped: the open
	/// set is the existence check that keeps a stale backend response
	/// from resurrecting a closed document's overlay.
	pub fn set_annotations(&mut self, doc: &DocumentId, annotations: Vec<Annotation>) {
		if !self.open.contains(doc) {
			debug!(doc = %doc, count = annotations.len(), "dropping result for unopened document");
			return;
		}
		self.cache.insert(doc.clone(), annotations);
		for view in self.surface.visible_views() {
			if view.document == *doc {
				self.repaint(&view);
			}
		}
	}

	/// Repaints newly visible views from cache.
	///
	/// A visible document is open by definition, so this also returns
	/// a closed document to the unknown state when it reopens.
	pub fn visibility_changed(&mut self, views: &[ViewInfo]) {
		for view in views {
			if self.open.insert(view.document.clone()) {
				debug!(doc = %view.document, "registered open document from visibility");
			}
			self.repaint(view);
		}
	}

	/// Swaps the theme: builds the new styles, repaints every visible
	/// view with them, then releases the old styles. Ordering matters;
	/// releasing first would blank decorated views for a frame.
	pub fn theme_changed(&mut self, theme: &Theme) {
		let next = MatcherSet::build(theme, self.surface.as_ref());
		let old = std::mem::replace(&mut self.matchers, next);
		for view in self.surface.visible_views() {
			self.repaint(&view);
		}
		old.release(self.surface.as_ref());
	}

	/// Flips the overlay on or off and returns the new state.
	///
	/// Disabling clears every style on every visible view but keeps
	/// the cache, so re-enabling repaints without re-analysis.
	pub fn toggle_enabled(&mut self) -> bool {
		self.set_enabled(!self.enabled);
		self.enabled
	}

	/// Sets the enabled state, repainting visible views on change.
	pub fn set_enabled(&mut self, enabled: bool) {
		if self.enabled == enabled {
			return;
		}
		self.enabled = enabled;
		debug!(enabled, "overlay toggled");
		for view in self.surface.visible_views() {
			self.repaint(&view);
		}
	}

	/// Releases the active styles. Call on session teardown.
	pub fn dispose(self) {
		self.matchers.release(self.surface.as_ref());
	}

	fn repaint(&self, view: &ViewInfo) {
		if !self.enabled {
			for style in self.matchers.styles() {
				self.surface.set_decorations(view.view, style, Vec::new());
			}
			return;
		}
		// Unknown document: render nothing at all, not an empty
		// overlay.
		let Some(annotations) = self.cache.get(&view.document) else {
			return;
		};
		for (style, decorations) in self.matchers.partition_dense(annotations) {
			self.surface.set_decorations(view.view, style, decorations);
		}
	}
}
