//
//  qiita-cli
//  cli/tag.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Tag commands

use anyhow::Result;
use clap::{Args, Subcommand};
use console::style;
use serde::Serialize;

use crate::api::common::PaginationOptions;
use crate::api::entities::{SearchTagResult, Tag};
use crate::api::resources::{FetchTagsOptions, TagSort};
use crate::config::Config;
use crate::output::{format_bool, print_field, TableOutput, TableRow};

use super::{take_pages, GlobalOptions};

/// Work with tags
#[derive(Args, Debug)]
pub struct TagCommand {
    #[command(subcommand)]
    pub command: TagSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum TagSubcommand {
    /// List tags
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// View a tag
    View(TagArgs),

    /// Search tag names
    Search(SearchArgs),

    /// List items with a tag
    Items(ItemsArgs),

    /// Follow a tag
    Follow(TagArgs),

    /// Unfollow a tag
    Unfollow(TagArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Sort order: count or name
    #[arg(long, short = 's', default_value = "count")]
    pub sort: TagSort,

    /// Maximum number of tags to list
    #[arg(long, short = 'l', default_value = "20")]
    pub limit: usize,
}

#[derive(Args, Debug)]
pub struct TagArgs {
    /// Tag ID, e.g. Rust
    pub tag: String,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Part of a tag name
    pub query: String,
}

#[derive(Args, Debug)]
pub struct ItemsArgs {
    /// Tag ID, e.g. Rust
    pub tag: String,

    /// Maximum number of items to list
    #[arg(long, short = 'l', default_value = "20")]
    pub limit: usize,
}

#[derive(Debug, Serialize)]
struct TagDetail {
    #[serde(flatten)]
    tag: Tag,
    following: Option<bool>,
}

impl TableOutput for TagDetail {
    fn print_table(&self, color: bool) {
        if color {
            println!("{} {}", style("Tag").cyan().bold(), style(&self.tag.id).bold());
        } else {
            println!("Tag {}", self.tag.id);
        }
        println!();
        print_field("  Items", &self.tag.items_count.to_string(), color);
        print_field("  Followers", &self.tag.followers_count.to_string(), color);
        if let Some(following) = self.following {
            print_field("  Following", &format_bool(following, color), color);
        }
        if let Some(ref icon) = self.tag.icon_url {
            print_field("  Icon", icon, color);
        }
    }
}

impl TagCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            TagSubcommand::List(args) => self.list(args, global).await,
            TagSubcommand::View(args) => self.view(args, global).await,
            TagSubcommand::Search(args) => self.search(args, global).await,
            TagSubcommand::Items(args) => self.items(args, global).await,
            TagSubcommand::Follow(args) => self.follow(args, global, true).await,
            TagSubcommand::Unfollow(args) => self.follow(args, global, false).await,
        }
    }

    async fn list(&self, args: &ListArgs, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        let client = global.client(&config)?;

        let mut pages = client.fetch_tags(FetchTagsOptions {
            sort: Some(args.sort),
            ..Default::default()
        });
        let tags = take_pages(&mut pages, args.limit).await?;

        global.writer(&config).write_list(&tags)
    }

    async fn view(&self, args: &TagArgs, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        let client = global.client(&config)?;

        let tag = client.fetch_tag(&args.tag).await?;
        // Following status needs a token.
        let following = if client.token().is_some() {
            Some(client.is_following_tag(&args.tag).await?)
        } else {
            None
        };

        global.writer(&config).write(&TagDetail { tag, following })
    }

    async fn search(&self, args: &SearchArgs, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        let client = global.client(&config)?;

        let results = client.search_tags(&args.query).await?;
        global.writer(&config).write_list(&results)
    }

    async fn items(&self, args: &ItemsArgs, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        let client = global.client(&config)?;

        let mut pages = client.fetch_tagged_items(&args.tag, PaginationOptions::default());
        let items = take_pages(&mut pages, args.limit).await?;

        global.writer(&config).write_list(&items)
    }

    async fn follow(&self, args: &TagArgs, global: &GlobalOptions, follow: bool) -> Result<()> {
        let config = Config::load()?;
        let client = global.client(&config)?;
        let writer = global.writer(&config);

        if follow {
            client.follow_tag(&args.tag).await?;
            writer.write_success(&format!("Following {}", args.tag));
        } else {
            client.unfollow_tag(&args.tag).await?;
            writer.write_success(&format!("Unfollowed {}", args.tag));
        }
        Ok(())
    }
}

impl TableRow for Tag {
    fn headers() -> &'static [&'static str] {
        &["Tag", "Items", "Followers"]
    }

    fn row(&self, color: bool) -> Vec<String> {
        let id = if color {
            style(&self.id).cyan().to_string()
        } else {
            self.id.clone()
        };
        vec![id, self.items_count.to_string(), self.followers_count.to_string()]
    }
}

impl TableRow for SearchTagResult {
    fn headers() -> &'static [&'static str] {
        &["Tag", "Items", "Followers"]
    }

    fn row(&self, _color: bool) -> Vec<String> {
        vec![
            self.name.clone(),
            self.item_count.to_string(),
            self.follower_count.to_string(),
        ]
    }
}
