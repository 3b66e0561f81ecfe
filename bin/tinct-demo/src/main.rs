//! Tinct demo binary.
//!
//! Runs the whole overlay engine against a text file using the local
//! backend and prints the result as ANSI truecolor output, with a
//! word-list analyzer standing in for a real prose checker.

use std::collections::{BTreeMap, HashMap};
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use parking_lot::Mutex;
use tinct_annotations::{RawAnnotation, Span};
use tinct_engine::{
	AnalysisReport, Analyzer, AnalyzerError, BackendKind, DiagnosticsSink, LocalSource,
	OverlayConfig, OverlaySession, Severity, Warning, source_channel,
};
use tinct_overlay::{Decoration, DocumentId, RenderStyle, StyleId, Surface, ViewId, ViewInfo};
use tinct_theme::builtins::builtin_names;

const SAMPLE: &str = "\
The committee was clearly committed to the implementation of
significant improvement, and the community is very happy
with the quick decision.
";

const BE_VERBS: &[&str] = &["am", "are", "be", "been", "being", "is", "was", "were"];
const PREPOSITIONS: &[&str] = &["at", "by", "for", "from", "in", "of", "on", "to", "with"];
const ACADEMIC_AD_WORDS: &[&str] = &["furthermore", "moreover", "significant", "significantly"];
const ADJECTIVES: &[&str] = &["clearly", "happy", "quick", "really"];
const ABSTRACT_SUFFIXES: &[&str] = &["ity", "ment", "ness", "sion", "tion"];
const WEASEL_WORDS: &[&str] = &["clearly", "obviously", "very"];

/// Demo command line arguments.
#[derive(Parser, Debug)]
#[command(name = "tinct-demo")]
#[command(about = "Renders the tinct category overlay for a text file")]
struct Args {
	/// File to annotate; a built-in sample is used when omitted
	#[arg(value_name = "FILE")]
	file: Option<PathBuf>,

	/// Built-in palette to render with
	#[arg(short, long)]
	theme: Option<String>,

	/// List the built-in palettes and exit
	#[arg(long)]
	list_themes: bool,

	/// Verbose logging
	#[arg(short, long)]
	verbose: bool,
}

/// One word of a line, with half-open UTF-16 column bounds.
struct WordToken {
	start: u32,
	end: u32,
	text: String,
}

fn tokens(line: &str) -> Vec<WordToken> {
	let mut tokens = Vec::new();
	let mut current: Option<(u32, String)> = None;
	let mut col = 0u32;
	for ch in line.chars() {
		if ch.is_alphabetic() {
			match &mut current {
				Some((_, word)) => word.push(ch),
				None => current = Some((col, ch.to_string())),
			}
		} else if let Some((start, text)) = current.take() {
			tokens.push(WordToken {
				start,
				end: col,
				text,
			});
		}
		col += ch.len_utf16() as u32;
	}
	if let Some((start, text)) = current.take() {
		tokens.push(WordToken {
			start,
			end: col,
			text,
		});
	}
	tokens
}

fn categorize(word: &str) -> Option<&'static str> {
	if BE_VERBS.contains(&word) {
		Some("be-verbs")
	} else if PREPOSITIONS.contains(&word) {
		Some("prepositions")
	} else if ACADEMIC_AD_WORDS.contains(&word) {
		Some("academic-ad-words")
	} else if ADJECTIVES.contains(&word) {
		Some("adjectives")
	} else if ABSTRACT_SUFFIXES.iter().any(|suffix| word.ends_with(suffix)) {
		Some("abstract-nouns")
	} else {
		None
	}
}

/// Looks every word up in fixed category lists. A stand-in for a real
/// prose checker, but enough to light the overlay up.
struct WordListAnalyzer;

impl Analyzer for WordListAnalyzer {
	fn analyze(&self, text: &str) -> Result<AnalysisReport, AnalyzerError> {
		let mut report = AnalysisReport::default();
		for (line_no, line) in text.lines().enumerate() {
			let line_no = u32::try_from(line_no)
				.map_err(|_| AnalyzerError("document has too many lines".into()))?;
			for token in tokens(line) {
				let span = Span::new(line_no, token.start, line_no, token.end);
				let lower = token.text.to_lowercase();
				if WEASEL_WORDS.contains(&lower.as_str()) {
					report.warnings.push(Warning {
						span,
						message: format!("\"{}\" is a weasel word", token.text),
						severity: Severity::Warning,
					});
				}
				if let Some(code) = categorize(&lower) {
					report.measurements.push(RawAnnotation::new(code, span));
				}
			}
		}
		Ok(report)
	}
}

#[derive(Default)]
struct SurfaceState {
	next_style: u64,
	styles: HashMap<StyleId, RenderStyle>,
	views: Vec<ViewInfo>,
	painted: HashMap<ViewId, BTreeMap<StyleId, Vec<Decoration>>>,
}

impl SurfaceState {
	fn style_at(&self, view: ViewId, line: u32, col: u32) -> Option<&RenderStyle> {
		let painted = self.painted.get(&view)?;
		for (style, decorations) in painted {
			if decorations.iter().any(|d| covers(d.span, line, col)) {
				return self.styles.get(style);
			}
		}
		None
	}
}

/// Paints decorations over plain text with ANSI escapes; foreground
/// styles recolor, border styles underline.
#[derive(Default)]
struct AnsiSurface {
	state: Mutex<SurfaceState>,
}

impl AnsiSurface {
	fn show(&self, view: ViewId, doc: &DocumentId) {
		self.state.lock().views.push(ViewInfo {
			view,
			document: doc.clone(),
		});
	}

	fn render(&self, view: ViewId, text: &str) -> String {
		let state = self.state.lock();
		let mut out = String::new();
		for (line_no, line) in text.lines().enumerate() {
			// Spans address lines as u32; lines past that render unstyled.
			let line_no = u32::try_from(line_no).ok();
			let mut current: Option<&RenderStyle> = None;
			let mut col = 0u32;
			for ch in line.chars() {
				let style = line_no.and_then(|line| state.style_at(view, line, col));
				if style != current {
					if current.is_some() {
						out.push_str("\x1b[0m");
					}
					if let Some(style) = style {
						out.push_str(&escape_for(style));
					}
					current = style;
				}
				out.push(ch);
				col += ch.len_utf16() as u32;
			}
			if current.is_some() {
				out.push_str("\x1b[0m");
			}
			out.push('\n');
		}
		out
	}

	fn legend(&self, view: ViewId) -> String {
		let state = self.state.lock();
		let Some(painted) = state.painted.get(&view) else {
			return String::new();
		};
		let mut out = String::new();
		for (style, decorations) in painted {
			let (Some(first), Some(render)) = (decorations.first(), state.styles.get(style))
			else {
				continue;
			};
			let _ = writeln!(out, "{}\u{25a0}\x1b[0m {}", escape_for(render), first.hover);
		}
		out
	}
}

impl Surface for AnsiSurface {
	fn create_style(&self, style: &RenderStyle) -> StyleId {
		let mut state = self.state.lock();
		let id = StyleId(state.next_style);
		state.next_style += 1;
		state.styles.insert(id, style.clone());
		id
	}

	fn release_style(&self, style: StyleId) {
		let mut state = self.state.lock();
		state.styles.remove(&style);
		for painted in state.painted.values_mut() {
			painted.remove(&style);
		}
	}

	fn visible_views(&self) -> Vec<ViewInfo> {
		self.state.lock().views.clone()
	}

	fn set_decorations(&self, view: ViewId, style: StyleId, decorations: Vec<Decoration>) {
		self.state
			.lock()
			.painted
			.entry(view)
			.or_default()
			.insert(style, decorations);
	}
}

fn covers(span: Span, line: u32, col: u32) -> bool {
	if line < span.start_line || line > span.end_line {
		return false;
	}
	(line > span.start_line || col >= span.start_char)
		&& (line < span.end_line || col < span.end_char)
}

fn rgb(color: &str) -> (u8, u8, u8) {
	let hex = color.strip_prefix('#').unwrap_or(color);
	let channel =
		|i: usize| u8::from_str_radix(hex.get(i..i + 2).unwrap_or("88"), 16).unwrap_or(0x88);
	(channel(0), channel(2), channel(4))
}

fn escape_for(style: &RenderStyle) -> String {
	match style {
		RenderStyle::Foreground { color } => {
			let (r, g, b) = rgb(color);
			format!("\x1b[38;2;{r};{g};{b}m")
		}
		RenderStyle::Border { color } => {
			let (r, g, b) = rgb(color);
			format!("\x1b[4;38;2;{r};{g};{b}m")
		}
	}
}

/// Prints analyzer warnings the way a compiler would.
struct StderrSink;

impl DiagnosticsSink for StderrSink {
	fn publish(&self, _doc: &DocumentId, warnings: Vec<Warning>) {
		for warning in warnings {
			let level = match warning.severity {
				Severity::Error => "error",
				Severity::Warning => "warning",
				Severity::Info => "note",
			};
			eprintln!(
				"{level}: {} at {}:{}",
				warning.message,
				warning.span.start_line + 1,
				warning.span.start_char + 1
			);
		}
	}
}

fn setup_tracing(config: &OverlayConfig) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(config.tracing_directive()));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = Args::parse();

	if args.list_themes {
		for name in builtin_names() {
			println!("{name}");
		}
		return Ok(());
	}

	let mut config = OverlayConfig {
		backend: BackendKind::Local,
		verbose_logging: args.verbose,
		..OverlayConfig::default()
	};
	if let Some(theme) = args.theme {
		config.theme.builtin = theme;
	}

	setup_tracing(&config);

	let (text, doc) = match &args.file {
		Some(path) => (
			fs::read_to_string(path)?,
			DocumentId::new(format!("file://{}", path.display())),
		),
		None => (SAMPLE.to_string(), DocumentId::new("demo:sample")),
	};

	let surface = Arc::new(AnsiSurface::default());
	let (events, receiver) = source_channel();
	let source = Arc::new(LocalSource::new(Arc::new(WordListAnalyzer), events));
	let mut session = OverlaySession::new(
		surface.clone(),
		Arc::new(StderrSink),
		source,
		receiver,
		config,
	);

	let view = ViewId(0);
	surface.show(view, &doc);
	session.document_opened(doc, &text);
	session.pump();

	print!("{}", surface.render(view, &text));
	println!();
	print!("{}", surface.legend(view));

	session.shutdown();
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn tokens_track_utf16_columns() {
		let tokens = tokens("na\u{ef}ve \u{1f331} plan");
		assert_eq!(tokens[0].text, "na\u{ef}ve");
		assert_eq!(tokens[0].start, 0);
		assert_eq!(tokens[0].end, 5);
		// The sprout emoji is one char but two UTF-16 units wide.
		assert_eq!(tokens[1].text, "plan");
		assert_eq!(tokens[1].start, 9);
	}

	#[test]
	fn sample_text_exercises_every_category() {
		let report = WordListAnalyzer.analyze(SAMPLE).unwrap();
		let codes: std::collections::BTreeSet<&str> =
			report.measurements.iter().map(|m| m.code.as_str()).collect();
		assert_eq!(
			codes.into_iter().collect::<Vec<_>>(),
			[
				"abstract-nouns",
				"academic-ad-words",
				"adjectives",
				"be-verbs",
				"prepositions"
			]
		);
		assert_eq!(report.warnings.len(), 2);
	}

	#[test]
	fn covers_respects_half_open_spans() {
		let span = Span::new(0, 4, 0, 6);
		assert!(!covers(span, 0, 3));
		assert!(covers(span, 0, 4));
		assert!(covers(span, 0, 5));
		assert!(!covers(span, 0, 6));
	}

	#[test]
	fn rgb_parses_hex_colors() {
		assert_eq!(rgb("#c45d9f"), (0xc4, 0x5d, 0x9f));
		assert_eq!(rgb("junk"), (0x88, 0x88, 0x88));
	}

	#[test]
	fn render_styles_the_decorated_line_only() {
		let surface = AnsiSurface::default();
		let view = ViewId(0);
		let style = surface.create_style(&RenderStyle::Foreground {
			color: "#6461c2".into(),
		});
		surface.set_decorations(
			view,
			style,
			vec![Decoration {
				span: Span::new(1, 0, 1, 2),
				hover: "preposition",
			}],
		);

		let rendered = surface.render(view, "on target\nof course\n");
		assert!(rendered.contains("\x1b[38;2;100;97;194mof\x1b[0m"));
		assert!(!rendered.contains("\x1b[38;2;100;97;194mon"));
	}

	#[test]
	fn pipeline_paints_be_verbs_in_theme_color() {
		let surface = Arc::new(AnsiSurface::default());
		let (events, receiver) = source_channel();
		let source = Arc::new(LocalSource::new(Arc::new(WordListAnalyzer), events));
		let mut session = OverlaySession::new(
			surface.clone(),
			Arc::new(StderrSink),
			source,
			receiver,
			OverlayConfig {
				backend: BackendKind::Local,
				..OverlayConfig::default()
			},
		);

		let doc = DocumentId::new("demo:sample");
		let view = ViewId(0);
		surface.show(view, &doc);
		session.document_opened(doc, SAMPLE);
		session.pump();

		// fairydust-8 paints be-verbs #c45d9f.
		let rendered = surface.render(view, SAMPLE);
		assert!(rendered.contains("\x1b[38;2;196;93;159mwas\x1b[0m"));
		session.shutdown();
	}
}
