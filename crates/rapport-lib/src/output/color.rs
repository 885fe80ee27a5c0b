use std::io::IsTerminal;
use std::sync::OnceLock;

use crossterm::style::{Color, Colored, Stylize};

use crate::config::{ColorChoice, ConsoleConfig};

/// Severity of a reported message; each maps to one fixed color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorTag {
    Success,
    Info,
    Warning,
    Error,
}

impl ColorTag {
    pub const ALL: [ColorTag; 4] = [
        ColorTag::Success,
        ColorTag::Info,
        ColorTag::Warning,
        ColorTag::Error,
    ];

    pub fn color(self) -> Color {
        match self {
            ColorTag::Success => Color::Green,
            ColorTag::Info => Color::Blue,
            ColorTag::Warning => Color::Yellow,
            ColorTag::Error => Color::Red,
        }
    }
}

impl std::fmt::Display for ColorTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorTag::Success => write!(f, "success"),
            ColorTag::Info => write!(f, "info"),
            ColorTag::Warning => write!(f, "warning"),
            ColorTag::Error => write!(f, "error"),
        }
    }
}

/// Decorates message text for a given tag.
pub trait ColorSupport: Send + Sync {
    fn wrap(&self, text: &str, tag: ColorTag) -> String;
}

/// Wraps text in ANSI foreground color sequences.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiColorSupport;

impl ColorSupport for AnsiColorSupport {
    fn wrap(&self, text: &str, tag: ColorTag) -> String {
        text.with(tag.color()).to_string()
    }
}

/// Leaves text untouched, for pipes and terminals without ANSI support.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainPassthrough;

impl ColorSupport for PlainPassthrough {
    fn wrap(&self, text: &str, _tag: ColorTag) -> String {
        text.to_string()
    }
}

static ANSI: AnsiColorSupport = AnsiColorSupport;
static PLAIN: PlainPassthrough = PlainPassthrough;

static SELECTED: OnceLock<&'static dyn ColorSupport> = OnceLock::new();

/// Picks the color capability for a choice and whether stdout is a terminal.
pub fn select(choice: ColorChoice, is_terminal: bool) -> &'static dyn ColorSupport {
    match choice {
        ColorChoice::Never => &PLAIN,
        ColorChoice::Always => {
            // crossterm honours NO_COLOR on its own; an explicit choice overrides it.
            Colored::set_ansi_color_disabled(false);
            &ANSI
        }
        ColorChoice::Auto if is_terminal && ansi_available() => &ANSI,
        ColorChoice::Auto => &PLAIN,
    }
}

/// Selects the process-wide capability once. Returns `false` when one was
/// already selected, in which case the earlier selection stays in effect.
pub fn install(choice: ColorChoice) -> bool {
    let mut installed = false;
    SELECTED.get_or_init(|| {
        installed = true;
        probe(choice)
    });
    installed
}

/// Returns the process-wide capability, probing with the environment
/// configuration if nothing was installed yet.
pub fn support() -> &'static dyn ColorSupport {
    *SELECTED.get_or_init(|| probe(ConsoleConfig::get().color))
}

fn probe(choice: ColorChoice) -> &'static dyn ColorSupport {
    let is_terminal = std::io::stdout().is_terminal();
    let selected = select(choice, is_terminal);
    tracing::debug!(%choice, is_terminal, "Selected console color support");
    selected
}

#[cfg(windows)]
fn ansi_available() -> bool {
    crossterm::ansi_support::supports_ansi()
}

#[cfg(not(windows))]
fn ansi_available() -> bool {
    true
}

/// Removes ANSI CSI escape sequences (`ESC [ ... final`) from `text`.
pub fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' && chars.peek() == Some(&'[') {
            chars.next();
            for c in chars.by_ref() {
                if ('\u{40}'..='\u{7e}').contains(&c) {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}
