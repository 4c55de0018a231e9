//
//  qiita-cli
//  cli/config.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI configuration commands
//!
//! Get, set and list the settings of the configuration file, see
//! [`crate::config`] for the keys.

use anyhow::Result;
use clap::{Args, Subcommand};
use console::style;

use crate::config::{Config, KEYS};
use crate::output::TableBuilder;

use super::GlobalOptions;

#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Print the value of a setting
    Get(GetArgs),

    /// Change a setting
    Set(SetArgs),

    /// List all settings
    #[command(visible_alias = "ls")]
    List,

    /// Print the path of the configuration file
    Path,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Setting key, e.g. pagination.style
    pub key: String,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    /// Setting key, e.g. pagination.style
    pub key: String,

    /// New value
    pub value: String,
}

impl ConfigCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ConfigSubcommand::Get(args) => self.get(args, global),
            ConfigSubcommand::Set(args) => self.set(args, global),
            ConfigSubcommand::List => self.list(global),
            ConfigSubcommand::Path => self.path(global),
        }
    }

    fn get(&self, args: &GetArgs, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        if !KEYS.contains(&args.key.as_str()) {
            anyhow::bail!("Unknown config key '{}'. Valid keys: {}", args.key, KEYS.join(", "));
        }
        let value = config.get(&args.key);

        if global.json {
            let result = serde_json::json!({
                "key": args.key,
                "value": value,
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else if let Some(v) = value {
            println!("{}", v);
        }

        Ok(())
    }

    fn set(&self, args: &SetArgs, global: &GlobalOptions) -> Result<()> {
        let mut config = Config::load()?;
        config.set(&args.key, &args.value)?;
        config.save()?;

        let value = config.get(&args.key).unwrap_or_default();
        if global.json {
            let result = serde_json::json!({
                "success": true,
                "key": args.key,
                "value": value,
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!("{} Set {} = {}", style("✓").green(), style(&args.key).cyan(), value);
        }

        Ok(())
    }

    fn list(&self, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;

        if global.json {
            let map: serde_json::Map<String, serde_json::Value> = KEYS
                .iter()
                .map(|key| {
                    let value = config
                        .get(key)
                        .map(serde_json::Value::String)
                        .unwrap_or(serde_json::Value::Null);
                    (key.to_string(), value)
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&map)?);
        } else {
            TableBuilder::new()
                .headers(["Key", "Value"])
                .rows(KEYS.iter().map(|key| {
                    vec![key.to_string(), config.get(key).unwrap_or_else(|| "-".to_string())]
                }))
                .print();
        }

        Ok(())
    }

    fn path(&self, global: &GlobalOptions) -> Result<()> {
        let path = Config::config_path()?;
        if global.json {
            let result = serde_json::json!({
                "path": path.display().to_string(),
                "exists": path.exists(),
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!("{}", path.display());
        }
        Ok(())
    }
}
