//! Session configuration surface.
//!
//! One schema shared between the host's settings store and the
//! session. The session consumes the theme and enablement parts;
//! backend launch settings are carried for the host, which owns
//! process management.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tinct_theme::ThemeSettings;

/// Which analysis backend feeds the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
	/// The streaming language-server backend.
	#[default]
	Streaming,
	/// The in-process synchronous analyzer.
	Local,
}

/// Launch settings for the streaming backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
	/// Executable the host should launch.
	#[serde(default = "default_command")]
	pub command: String,
	/// Where the server writes its own log, if anywhere.
	#[serde(default)]
	pub log_file: Option<PathBuf>,
}

fn default_command() -> String {
	"tinct-lsp".to_string()
}

impl Default for ServerSettings {
	fn default() -> Self {
		Self {
			command: default_command(),
			log_file: None,
		}
	}
}

/// Complete overlay configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayConfig {
	/// Active analysis backend.
	#[serde(default)]
	pub backend: BackendKind,
	/// Streaming backend launch settings.
	#[serde(default)]
	pub server: ServerSettings,
	/// Whether the overlay starts enabled.
	#[serde(default = "default_enabled")]
	pub enabled_by_default: bool,
	/// Log routine repaint traffic, not only failures.
	#[serde(default)]
	pub verbose_logging: bool,
	/// Theme selection.
	#[serde(default)]
	pub theme: ThemeSettings,
}

fn default_enabled() -> bool {
	true
}

impl Default for OverlayConfig {
	fn default() -> Self {
		Self {
			backend: BackendKind::default(),
			server: ServerSettings::default(),
			enabled_by_default: default_enabled(),
			verbose_logging: false,
			theme: ThemeSettings::default(),
		}
	}
}

impl OverlayConfig {
	/// Tracing filter directive matching the verbosity setting, for
	/// hosts that build their subscriber from this configuration.
	pub fn tracing_directive(&self) -> &'static str {
		if self.verbose_logging {
			"tinct=debug"
		} else {
			"tinct=info"
		}
	}
}
