//
//  qiita-cli
//  cli/auth.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Authentication commands for the Qiita CLI.
//!
//! Tokens are stored in the system keyring, one per host, so qiita.com and
//! each Qiita Team can be logged in at the same time.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use console::style;

use crate::auth::{
    looks_like_qiita_token, read_token_from_stdin, validate_token, verify_token, KeyringStore,
};
use crate::config::{host_of, team_id, Config};

use super::GlobalOptions;

/// Authenticate with Qiita.
#[derive(Args, Debug)]
pub struct AuthCommand {
    #[command(subcommand)]
    pub command: AuthSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AuthSubcommand {
    /// Log in to Qiita with an access token
    Login(LoginArgs),

    /// Log out of Qiita
    Logout(LogoutArgs),

    /// View authentication status
    Status(StatusArgs),

    /// Exchange an OAuth authorization code for an access token
    Token(TokenArgs),
}

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Read token from standard input
    #[arg(long)]
    pub with_token: bool,
}

#[derive(Args, Debug)]
pub struct LogoutArgs {
    /// Also revoke the token on the server
    #[arg(long)]
    pub revoke: bool,
}

#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Show the authentication token (masked)
    #[arg(long, short = 't')]
    pub show_token: bool,
}

#[derive(Args, Debug)]
pub struct TokenArgs {
    /// OAuth application client ID
    #[arg(long)]
    pub client_id: String,

    /// OAuth application client secret
    #[arg(long)]
    pub client_secret: String,

    /// Authorization code from the redirect
    #[arg(long)]
    pub code: String,

    /// Store the issued token in the keyring
    #[arg(long)]
    pub store: bool,
}

impl AuthCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            AuthSubcommand::Login(args) => login(args, global).await,
            AuthSubcommand::Logout(args) => logout(args, global).await,
            AuthSubcommand::Status(args) => status(args, global).await,
            AuthSubcommand::Token(args) => token(args, global).await,
        }
    }
}

async fn login(args: &LoginArgs, global: &GlobalOptions) -> Result<()> {
    let config = Config::load()?;
    let mut client = global.client(&config)?;
    let host = host_of(client.base_url());

    let token = if args.with_token {
        read_token_from_stdin()?
    } else if let Some(ref t) = global.token {
        t.clone()
    } else {
        println!("To create an access token:");
        println!("  1. Go to {}/settings/applications", client.base_url());
        println!("  2. Click 'Generate new token' and select the scopes you need");
        println!("  3. Run: echo <token> | qiita auth login --with-token");
        anyhow::bail!("No token given");
    };

    if !validate_token(&token) {
        anyhow::bail!("Invalid token format");
    }
    if !looks_like_qiita_token(&token) {
        global
            .writer(&config)
            .write_warning("token does not look like a Qiita access token");
    }

    client.set_token(&token);
    let user = verify_token(&client)
        .await
        .context("Failed to validate token")?
        .ok_or_else(|| anyhow::anyhow!("Token was rejected by {}", host))?;

    KeyringStore::new().store(&host, &token)?;
    println!("{} Logged in to {} as @{}", style("✓").green(), host, user.id);

    Ok(())
}

async fn logout(args: &LogoutArgs, global: &GlobalOptions) -> Result<()> {
    let config = Config::load()?;
    let client = global.client(&config)?;
    let host = host_of(client.base_url());
    let keyring = KeyringStore::new();

    let Some(stored) = keyring.get(&host)? else {
        println!("Not logged in to {}", host);
        return Ok(());
    };

    if args.revoke {
        client
            .delete_access_token(&stored)
            .await
            .context("Failed to revoke token")?;
    }

    keyring.delete(&host)?;
    println!("Logged out of {}", host);

    Ok(())
}

async fn status(args: &StatusArgs, global: &GlobalOptions) -> Result<()> {
    let config = Config::load()?;
    let client = global.client(&config)?;
    let host = host_of(client.base_url());

    let Some((token, source)) = global.token_for(&host)? else {
        println!("Not logged in to {}", host);
        println!();
        println!("Run 'qiita auth login' to authenticate");
        return Ok(());
    };

    let user = verify_token(&client).await?;

    if global.json {
        let result = serde_json::json!({
            "host": host,
            "source": source.to_string(),
            "active": user.is_some(),
            "user": user.as_ref().map(|u| u.id.clone()),
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("{}", host);
    if let Some(team) = team_id(client.base_url()) {
        println!("  Qiita Team: {}", team);
    }
    if let Some(ref user) = user {
        println!("  Logged in as: @{}", user.id);
    }
    println!(
        "  Status: {}",
        if user.is_some() {
            "Active"
        } else {
            "Invalid/Expired"
        }
    );
    println!("  Token source: {}", source);
    if args.show_token {
        println!("  Token: {}", mask_token(&token));
    }
    if let Some(user) = user {
        println!(
            "  Image uploads left this month: {} / {}",
            user.image_monthly_upload_remaining, user.image_monthly_upload_limit
        );
    }

    Ok(())
}

async fn token(args: &TokenArgs, global: &GlobalOptions) -> Result<()> {
    let config = Config::load()?;
    let client = global.client(&config)?;
    let host = host_of(client.base_url());

    let issued = client
        .fetch_access_token(&args.client_id, &args.client_secret, &args.code)
        .await
        .context("Failed to exchange authorization code")?;

    if args.store {
        KeyringStore::new().store(&host, &issued.token)?;
        eprintln!("{} Stored token for {}", style("✓").green(), host);
    }

    if global.json {
        println!("{}", serde_json::to_string_pretty(&issued)?);
    } else {
        // Just the token, for piping.
        println!("{}", issued.token);
    }

    Ok(())
}

fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 8 {
        "*".repeat(chars.len())
    } else {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_token() {
        assert_eq!(mask_token("abcd"), "****");
        assert_eq!(mask_token("ea5d0a593b2655e9568f144fb1826342292f5c6b"), "ea5d...5c6b");
    }
}
