//
//  qiita-cli
//  cli/user.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! User commands
//!
//! Profiles, posted and stocked items, and the follow graph. Commands that
//! take an optional user ID fall back to the authenticated user.

use anyhow::Result;
use clap::{Args, Subcommand};
use console::style;

use crate::api::common::PaginationOptions;
use crate::api::entities::User;
use crate::api::QiitaClient;
use crate::config::Config;
use crate::output::{print_field, truncate, TableOutput, TableRow};

use super::{take_pages, GlobalOptions};

/// Work with users
#[derive(Args, Debug)]
pub struct UserCommand {
    #[command(subcommand)]
    pub command: UserSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum UserSubcommand {
    /// View a user profile
    View(UserArgs),

    /// List items posted by a user
    Items(ListArgs),

    /// List items stocked by a user
    Stocks(ListArgs),

    /// List followers of a user
    Followers(ListArgs),

    /// List users a user follows
    Followees(ListArgs),

    /// List tags a user follows
    Tags(ListArgs),

    /// Follow a user
    Follow(TargetArgs),

    /// Unfollow a user
    Unfollow(TargetArgs),
}

#[derive(Args, Debug)]
pub struct UserArgs {
    /// User ID (defaults to you)
    pub user: Option<String>,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// User ID (defaults to you)
    pub user: Option<String>,

    /// Maximum number of entries to list
    #[arg(long, short = 'l', default_value = "20")]
    pub limit: usize,
}

#[derive(Args, Debug)]
pub struct TargetArgs {
    /// User ID
    pub user: String,
}

impl UserCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        let client = global.client(&config)?;
        let writer = global.writer(&config);

        match &self.command {
            UserSubcommand::View(args) => {
                let user = match &args.user {
                    Some(id) => client.fetch_user(id).await?,
                    None => client.fetch_authenticated_user().await?.user,
                };
                writer.write(&user)
            }
            UserSubcommand::Items(args) => {
                let id = resolve_user(&client, args.user.as_deref()).await?;
                let mut pages = client.fetch_user_items(&id, PaginationOptions::default());
                writer.write_list(&take_pages(&mut pages, args.limit).await?)
            }
            UserSubcommand::Stocks(args) => {
                let id = resolve_user(&client, args.user.as_deref()).await?;
                let mut pages = client.fetch_user_stocks(&id, PaginationOptions::default());
                writer.write_list(&take_pages(&mut pages, args.limit).await?)
            }
            UserSubcommand::Followers(args) => {
                let id = resolve_user(&client, args.user.as_deref()).await?;
                let mut pages = client.fetch_user_followers(&id, PaginationOptions::default());
                writer.write_list(&take_pages(&mut pages, args.limit).await?)
            }
            UserSubcommand::Followees(args) => {
                let id = resolve_user(&client, args.user.as_deref()).await?;
                let mut pages = client.fetch_user_followees(&id, PaginationOptions::default());
                writer.write_list(&take_pages(&mut pages, args.limit).await?)
            }
            UserSubcommand::Tags(args) => {
                let id = resolve_user(&client, args.user.as_deref()).await?;
                let mut pages = client.fetch_user_following_tags(&id, PaginationOptions::default());
                writer.write_list(&take_pages(&mut pages, args.limit).await?)
            }
            UserSubcommand::Follow(args) => {
                client.follow_user(&args.user).await?;
                writer.write_success(&format!("Following @{}", args.user));
                Ok(())
            }
            UserSubcommand::Unfollow(args) => {
                client.unfollow_user(&args.user).await?;
                writer.write_success(&format!("Unfollowed @{}", args.user));
                Ok(())
            }
        }
    }
}

async fn resolve_user(client: &QiitaClient, user: Option<&str>) -> Result<String> {
    match user {
        Some(id) => Ok(id.to_string()),
        None => Ok(client.fetch_authenticated_user().await?.user.id),
    }
}

impl TableRow for User {
    fn headers() -> &'static [&'static str] {
        &["User", "Name", "Items", "Followers"]
    }

    fn row(&self, color: bool) -> Vec<String> {
        let id = format!("@{}", self.id);
        let id = if color { style(id).cyan().to_string() } else { id };
        vec![
            id,
            truncate(self.name.as_deref().unwrap_or("-"), 30),
            self.items_count.to_string(),
            self.followers_count.to_string(),
        ]
    }
}

impl TableOutput for User {
    fn print_table(&self, color: bool) {
        let handle = format!("@{}", self.id);
        match (&self.name, color) {
            (Some(name), true) if !name.is_empty() => {
                println!("{} {}", style(name).bold(), style(handle).dim())
            }
            (Some(name), false) if !name.is_empty() => println!("{} {}", name, handle),
            (_, true) => println!("{}", style(handle).bold()),
            (_, false) => println!("{}", handle),
        }

        if let Some(ref description) = self.description {
            if !description.is_empty() {
                println!();
                println!("  {}", description.trim());
            }
        }
        println!();

        print_field("  Items", &self.items_count.to_string(), color);
        print_field("  Followers", &self.followers_count.to_string(), color);
        print_field("  Following", &self.followees_count.to_string(), color);

        let optional = [
            ("  Organization", &self.organization),
            ("  Location", &self.location),
            ("  Website", &self.website_url),
            ("  GitHub", &self.github_login_name),
            ("  Twitter", &self.twitter_screen_name),
        ];
        for (key, value) in optional {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                print_field(key, value, color);
            }
        }
    }
}
