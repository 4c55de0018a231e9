//
//  qiita-cli
//  config/file.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration File I/O
//!
//! Low-level file operations used by [`Config`](super::Config). Write
//! operations create parent directories; errors carry the offending path.

use std::path::Path;

use anyhow::{Context, Result};

/// Reads the raw content of a configuration file.
pub fn read_config_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))
}

/// Writes a configuration file, creating parent directories as needed.
pub fn write_config_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write config file {}", path.display()))?;
    Ok(())
}

pub fn config_exists(path: &Path) -> bool {
    path.exists()
}
