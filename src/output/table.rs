//
//  qiita-cli
//  output/table.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Table Output Formatting
//!
//! Utilities for tabular terminal output on top of `comfy_table`.
//!
//! ## Example
//!
//! ```rust,ignore
//! use qiita::output::TableBuilder;
//!
//! TableBuilder::new()
//!     .headers(["ID", "Items", "Followers"])
//!     .row(["Rust", "12000", "8000"])
//!     .row(["Go", "9000", "7000"])
//!     .print();
//! ```

use chrono::{DateTime, FixedOffset, Local};
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Builder for a table with an optional colored header.
pub struct TableBuilder {
    table: Table,
    color: bool,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self {
            table: create_table(),
            color: console::colors_enabled(),
        }
    }

    pub fn color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let headers: Vec<String> = headers.into_iter().map(|s| s.into()).collect();
        if self.color {
            let header_cells: Vec<Cell> = headers.iter().map(|h| Cell::new(h).fg(Color::Cyan)).collect();
            self.table.set_header(header_cells);
        } else {
            self.table.set_header(headers);
        }
        self
    }

    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Vec<String> = cells.into_iter().map(|s| s.into()).collect();
        self.table.add_row(row);
        self
    }

    pub fn rows<I, R, S>(mut self, rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for row in rows {
            let row: Vec<String> = row.into_iter().map(|s| s.into()).collect();
            self.table.add_row(row);
        }
        self
    }

    pub fn print(self) {
        println!("{}", self.table);
    }

    pub fn build(self) -> Table {
        self.table
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn format_bool(value: bool, color: bool) -> String {
    if color {
        use console::style;
        if value {
            style("Yes").green().to_string()
        } else {
            style("No").dim().to_string()
        }
    } else if value {
        "Yes".to_string()
    } else {
        "No".to_string()
    }
}

/// Formats a timestamp in local time, `YYYY-MM-DD HH:MM`.
pub fn format_timestamp(timestamp: &DateTime<FixedOffset>) -> String {
    timestamp.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

/// Shortens `s` to at most `max_chars` characters, ending in `...`.
///
/// Counts characters, not bytes; titles are often Japanese.
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else if max_chars > 3 {
        let kept: String = s.chars().take(max_chars - 3).collect();
        format!("{}...", kept)
    } else {
        s.chars().take(max_chars).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("Rustで始める非同期プログラミング", 10), "Rustで始め...");
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdef", 2), "ab");
    }

    #[test]
    fn test_format_bool_plain() {
        assert_eq!(format_bool(true, false), "Yes");
        assert_eq!(format_bool(false, false), "No");
    }
}
