//! Terminal display module
//!
//! Styled status lines, the verbose banner and run statistics.

use bytesize::ByteSize;
use colored::*;
use std::time::{Duration, Instant};

/// Color theme for the tool
pub mod theme {
    use colored::Color;

    pub const PRIMARY: Color = Color::Green;
    pub const ACCENT: Color = Color::Cyan;
    pub const WARNING: Color = Color::Yellow;
    pub const ERROR: Color = Color::Red;
}

/// Print the application banner
pub fn print_banner() {
    let banner = r#"
  _ __ (_) ___| | __      __ _  ___ _ __
 | '_ \| |/ __| |/ /____ / _` |/ _ \ '_ \
 | | | | | (__|   <_____| (_| |  __/ | | |
 |_| |_|_|\___|_|\_\     \__, |\___|_| |_|
                         |___/   n1ckn4m3 g3n
"#;

    println!("{}", banner.color(theme::PRIMARY));
}

/// Print a section header
pub fn print_header(text: &str) {
    println!("\n{} {}", "▶".color(theme::PRIMARY), text.color(theme::PRIMARY).bold());
}

/// Print an info message
pub fn print_info(text: &str) {
    println!("  {} {}", "ℹ".color(theme::ACCENT), text);
}

/// Print an error message
pub fn print_error(text: &str) {
    eprintln!("  {} {}", "✖".color(theme::ERROR), text.color(theme::ERROR));
}

/// Counters for one generator run
#[derive(Debug, Clone)]
pub struct RunStats {
    files: u64,
    bytes: u64,
    lines_read: u64,
    matched: u64,
    unique: u64,
    printed: u64,
    start_time: Instant,
}

impl Default for RunStats {
    fn default() -> Self {
        Self {
            files: 0,
            bytes: 0,
            lines_read: 0,
            matched: 0,
            unique: 0,
            printed: 0,
            start_time: Instant::now(),
        }
    }
}

impl RunStats {
    pub fn add_file(&mut self, size: u64) {
        self.files += 1;
        self.bytes += size;
    }

    pub fn add_line(&mut self) {
        self.lines_read += 1;
    }

    pub fn add_match(&mut self) {
        self.matched += 1;
    }

    pub fn add_unique(&mut self, count: u64) {
        self.unique += count;
    }

    pub fn set_printed(&mut self, count: u64) {
        self.printed = count;
    }

    pub fn files(&self) -> u64 {
        self.files
    }

    pub fn lines_read(&self) -> u64 {
        self.lines_read
    }

    pub fn matched(&self) -> u64 {
        self.matched
    }

    pub fn unique(&self) -> u64 {
        self.unique
    }

    pub fn printed(&self) -> u64 {
        self.printed
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Print final statistics
    pub fn print_summary(&self) {
        println!();
        println!("{}", "═".repeat(48).color(theme::PRIMARY));
        println!(
            "  {} {} ({})",
            "Word lists:   ".green(),
            self.files,
            ByteSize(self.bytes)
        );
        println!("  {} {}", "Lines read:   ".green(), format_number(self.lines_read));
        println!("  {} {}", "Matched:      ".green(), format_number(self.matched));
        println!(
            "  {} {}",
            "Duplicates:   ".color(theme::WARNING),
            format_number(self.matched.saturating_sub(self.unique))
        );
        println!(
            "  {} {}",
            "Nicknames:    ".green().bold(),
            format_number(self.printed).green().bold()
        );
        println!("  {} {}", "Duration:     ".green(), format_duration(self.elapsed()));
        println!("{}", "═".repeat(48).color(theme::PRIMARY));
    }
}

/// Format a number with thousand separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}

/// Format duration as human-readable string
pub fn format_duration(duration: Duration) -> String {
    let millis = duration.as_millis();

    if millis < 1000 {
        format!("{}ms", millis)
    } else {
        format!("{:.1}s", duration.as_secs_f64())
    }
}
