//! Terminal styling for the backup seed report.

use colored::Colorize;
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattingConfig {
    pub color: ColorMode,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
        }
    }
}

impl FormattingConfig {
    /// Honour `NO_COLOR`, `CLICOLOR=0` and `CLICOLOR_FORCE=1`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if lookup("NO_COLOR").is_some() {
            config.color = ColorMode::Never;
        }
        if lookup("CLICOLOR").as_deref() == Some("0") {
            config.color = ColorMode::Never;
        }
        if lookup("CLICOLOR_FORCE").as_deref() == Some("1") {
            config.color = ColorMode::Always;
        }

        config
    }

    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
        }
    }

    pub fn formatter(&self) -> Box<dyn OutputFormatter> {
        if self.color.should_use_color() {
            Box::new(ColoredFormatter::new(*self))
        } else {
            Box::new(PlainFormatter)
        }
    }
}

/// Roles a piece of report text can play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Signal,
    Backup,
    Emphasis,
    Muted,
}

pub trait OutputFormatter {
    fn paint(&self, text: &str, style: Style) -> String;

    /// Whether the formatter emits ANSI sequences.
    fn is_colored(&self) -> bool;
}

pub struct ColoredFormatter {
    config: FormattingConfig,
}

impl ColoredFormatter {
    pub fn new(config: FormattingConfig) -> Self {
        colored::control::set_override(config.color.should_use_color());
        Self { config }
    }
}

impl OutputFormatter for ColoredFormatter {
    fn paint(&self, text: &str, style: Style) -> String {
        if !self.is_colored() {
            return text.to_string();
        }
        match style {
            Style::Signal => text.green().to_string(),
            Style::Backup => text.yellow().to_string(),
            Style::Emphasis => text.bold().to_string(),
            Style::Muted => text.dimmed().to_string(),
        }
    }

    fn is_colored(&self) -> bool {
        self.config.color.should_use_color()
    }
}

pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn paint(&self, text: &str, _style: Style) -> String {
        text.to_string()
    }

    fn is_colored(&self) -> bool {
        false
    }
}

fn detect_color_support() -> bool {
    if env::var("TERM").is_ok_and(|term| term == "dumb") {
        return false;
    }
    std::io::stdout().is_terminal()
}
