//! The façade tying a backend, the reconciler and the host together.

use std::sync::Arc;

use tinct_overlay::{DocumentId, Reconciler, Surface, ViewInfo};
use tinct_theme::{Theme, ThemeSettings};
use tracing::{debug, error, info, warn};

use crate::config::OverlayConfig;
use crate::source::{
	AnnotationSource, DiagnosticsSink, SourceEvent, SourceEventReceiver,
};

/// One running overlay, from backend events to painted views.
///
/// The session owns the receiving half of the source channel; hosts
/// call [`OverlaySession::pump`] after delivering their own events so
/// backend results land on the same thread as everything else.
pub struct OverlaySession {
	reconciler: Reconciler,
	source: Arc<dyn AnnotationSource>,
	events: SourceEventReceiver,
	diagnostics: Arc<dyn DiagnosticsSink>,
	config: OverlayConfig,
	backend_error: Option<String>,
}

impl OverlaySession {
	/// Builds a session over `surface`, wired to an already constructed
	/// source and its event channel.
	pub fn new(
		surface: Arc<dyn Surface>,
		diagnostics: Arc<dyn DiagnosticsSink>,
		source: Arc<dyn AnnotationSource>,
		events: SourceEventReceiver,
		config: OverlayConfig,
	) -> Self {
		let theme = resolve_theme(&config.theme);
		info!(
			backend = ?config.backend,
			theme = theme.name(),
			enabled = config.enabled_by_default,
			"overlay session started"
		);
		let reconciler = Reconciler::new(surface, &theme, config.enabled_by_default);
		Self {
			reconciler,
			source,
			events,
			diagnostics,
			config,
			backend_error: None,
		}
	}

	/// Drains every queued backend event. Call after host callbacks and
	/// on whatever tick the host already has.
	pub fn pump(&mut self) {
		while let Ok(event) = self.events.try_recv() {
			self.handle_event(event);
		}
	}

	fn handle_event(&mut self, event: SourceEvent) {
		match event {
			SourceEvent::Annotations { doc, batch } => {
				self.reconciler.set_annotations(&doc, batch);
			}
			SourceEvent::Warnings { doc, warnings } => {
				self.diagnostics.publish(&doc, warnings);
			}
			SourceEvent::Unavailable { reason } => {
				error!(reason = %reason, "annotation backend unavailable");
				self.backend_error = Some(reason);
			}
		}
	}

	/// Registers a newly opened document and requests its first pass.
	pub fn document_opened(&mut self, doc: DocumentId, text: &str) {
		self.reconciler.document_opened(doc.clone());
		self.source.analyze(&doc, text);
	}

	/// Requests reanalysis after an edit. The previous overlay stays up
	/// until the new batch arrives.
	pub fn document_changed(&mut self, doc: &DocumentId, text: &str) {
		self.source.analyze(doc, text);
	}

	/// Drops the document's cached state.
	pub fn document_closed(&mut self, doc: &DocumentId) {
		self.reconciler.document_closed(doc);
	}

	/// Repaints the views the host now shows.
	pub fn visibility_changed(&mut self, views: &[ViewInfo]) {
		self.reconciler.visibility_changed(views);
	}

	/// Flips highlighting and returns the new state.
	pub fn toggle_enabled(&mut self) -> bool {
		let enabled = self.reconciler.toggle_enabled();
		info!(enabled, "highlighting toggled");
		enabled
	}

	/// Whether highlighting is currently painted.
	pub fn is_enabled(&self) -> bool {
		self.reconciler.is_enabled()
	}

	/// The last backend failure, if any. Cleared only by restarting the
	/// session with a fresh backend.
	pub fn backend_error(&self) -> Option<&str> {
		self.backend_error.as_deref()
	}

	/// Applies a changed configuration snapshot.
	pub fn update_config(&mut self, config: OverlayConfig) {
		if config.theme != self.config.theme {
			let theme = resolve_theme(&config.theme);
			debug!(theme = theme.name(), "theme configuration changed");
			self.reconciler.theme_changed(&theme);
		}
		if config.backend != self.config.backend {
			info!(backend = ?config.backend, "backend change takes effect on restart");
		}
		self.config = config;
	}

	/// Tears the overlay down, releasing every style on the surface.
	pub fn shutdown(self) {
		debug!("overlay session shutting down");
		self.reconciler.dispose();
	}
}

fn resolve_theme(settings: &ThemeSettings) -> Theme {
	match Theme::resolve(settings) {
		Ok(theme) => theme,
		Err(err) => {
			warn!(error = %err, "theme resolution failed, using neutral colors");
			Theme::neutral()
		}
	}
}
