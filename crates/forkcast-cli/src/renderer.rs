//! Terminal rendering module for rich markdown output
//!
//! This module provides terminal rendering capabilities using termimad
//! for rich markdown display with optional fallback to plain text, plus the
//! notifier `forkcast notify watch` prints reminders with.

use std::io::Write;

use anyhow::Result;
use forkcast_core::{models::Reminder, notify::Notifier};
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

        skin.set_headers_fg(Color::Green);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::DarkGrey);
        skin.code_block.set_bg(Color::AnsiValue(238));
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            // Headers keep their hash marks so section levels stay visible
            for line in markdown.lines() {
                if line.starts_with('#') {
                    println!("\x1b[32m{line}\x1b[0m");
                } else {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        } else {
            print!("{markdown}");
        }
        std::io::stdout().flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Prints reminders to stdout with a terminal bell.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNotifier;

impl TerminalNotifier {
    fn format(reminder: &Reminder) -> String {
        format!("\x07{}\n{}\n", Reminder::TITLE, reminder.body())
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&self, reminder: &Reminder) {
        log::info!("{}: {}", Reminder::TITLE, reminder.body());
        print!("{}", Self::format(reminder));
        if let Err(e) = std::io::stdout().flush() {
            log::warn!("Failed to print reminder: {e}");
        }
    }
}
