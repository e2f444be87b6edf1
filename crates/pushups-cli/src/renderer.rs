//! Terminal rendering module for rich markdown output
//!
//! Uses termimad for rich markdown display with a plain text fallback for
//! `--no-color` and non-interactive use.

use std::io::{self, Write};

use anyhow::{Context, Result};
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to stdout
    pub fn render(&self, markdown: &str) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.render_to(&mut out, markdown)?;
        out.flush().context("Failed to flush output")
    }

    /// Print a prompt without a trailing newline
    pub fn prompt(&self, text: &str) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        if self.rich_enabled {
            write!(out, "\x1b[1m{text}\x1b[0m ")?;
        } else {
            write!(out, "{text} ")?;
        }
        out.flush().context("Failed to flush output")
    }

    fn render_to<W: Write>(&self, out: &mut W, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            write!(out, "{markdown}")?;
            return Ok(());
        }

        // Headers keep their hash marks; everything between them goes
        // through the skin in one piece so tables and lists lay out.
        let mut block = String::new();
        for line in markdown.lines() {
            if line.starts_with('#') {
                self.flush_block(out, &mut block)?;
                writeln!(out, "\x1b[34m{line}\x1b[0m")?;
            } else {
                block.push_str(line);
                block.push('\n');
            }
        }
        self.flush_block(out, &mut block)
    }

    fn flush_block<W: Write>(&self, out: &mut W, block: &mut String) -> Result<()> {
        if !block.is_empty() {
            write!(out, "{}", self.skin.term_text(block))?;
            block.clear();
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
