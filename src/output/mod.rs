//
//  qiita-cli
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Output Module
//!
//! This module provides output formatting for the Qiita CLI:
//!
//! - **Table format**: Human-readable output for interactive terminal use
//! - **JSON format**: Machine-readable JSON output for scripting and automation
//!
//! ## Core Components
//!
//! - [`OutputFormat`]: The available output formats
//! - [`OutputWriter`]: Main entry point for writing formatted output
//! - [`TableOutput`]: Detail view of a single value
//! - [`TableRow`]: One row of a list table
//!
//! ## Example
//!
//! ```rust,ignore
//! use qiita::output::{OutputFormat, OutputWriter};
//!
//! let writer = OutputWriter::new(OutputFormat::Table);
//! writer.write_list(&items)?;
//! writer.write_success("Followed Rust");
//! ```

mod json;
mod table;

pub use json::*;
pub use table::*;

use std::str::FromStr;

use serde::Serialize;

/// Output format of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format '{}'", other)),
        }
    }
}

/// Writes command results in the selected format.
pub struct OutputWriter {
    format: OutputFormat,
    color: bool,
}

impl OutputWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: console::colors_enabled(),
        }
    }

    /// `--json` wins over the configured default.
    pub fn from_preferences(json_flag: bool, configured: Option<&str>) -> Self {
        let format = if json_flag {
            OutputFormat::Json
        } else {
            configured
                .and_then(|f| f.parse().ok())
                .unwrap_or_default()
        };
        Self::new(format)
    }

    pub fn color_enabled(&self) -> bool {
        self.color
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Writes a single value.
    pub fn write<T: Serialize + TableOutput>(&self, value: &T) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => write_json(value)?,
            OutputFormat::Table => value.print_table(self.color),
        }
        Ok(())
    }

    /// Writes a list as one table, or as a JSON array.
    pub fn write_list<T: Serialize + TableRow>(&self, values: &[T]) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => write_json(values)?,
            OutputFormat::Table => {
                if values.is_empty() {
                    self.write_info("No results");
                    return Ok(());
                }
                TableBuilder::new()
                    .color(self.color)
                    .headers(T::headers().iter().copied())
                    .rows(values.iter().map(|v| v.row(self.color)))
                    .print();
            }
        }
        Ok(())
    }

    pub fn write_warning(&self, msg: &str) {
        use console::style;
        if self.color {
            eprintln!("{} {}", style("warning:").yellow().bold(), msg);
        } else {
            eprintln!("warning: {}", msg);
        }
    }

    pub fn write_info(&self, msg: &str) {
        println!("{}", msg);
    }

    pub fn write_success(&self, msg: &str) {
        use console::style;
        if self.color {
            println!("{} {}", style("✓").green().bold(), msg);
        } else {
            println!("✓ {}", msg);
        }
    }
}

/// Detail view of a single value.
pub trait TableOutput {
    fn print_table(&self, color: bool);
}

/// A value shown as one row of a list table.
pub trait TableRow {
    fn headers() -> &'static [&'static str];

    fn row(&self, color: bool) -> Vec<String>;
}

pub fn print_field(key: &str, value: &str, color: bool) {
    use console::style;
    if color {
        println!("{}: {}", style(key).dim(), value);
    } else {
        println!("{}: {}", key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_flag_wins() {
        assert_eq!(OutputWriter::from_preferences(true, Some("table")).format(), OutputFormat::Json);
        assert_eq!(OutputWriter::from_preferences(false, Some("json")).format(), OutputFormat::Json);
        assert_eq!(OutputWriter::from_preferences(false, None).format(), OutputFormat::Table);
        assert_eq!(OutputWriter::from_preferences(false, Some("yaml")).format(), OutputFormat::Table);
    }
}
