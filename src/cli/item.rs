//
//  qiita-cli
//  cli/item.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Item commands
//!
//! Search, read, post and stock Qiita items (articles).

use std::fs;

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use console::style;

use crate::api::common::PaginationOptions;
use crate::api::entities::{Comment, Item, Tagging};
use crate::api::resources::{CreateItemOptions, FetchItemsOptions};
use crate::config::Config;
use crate::output::{format_bool, format_timestamp, print_field, truncate, TableOutput, TableRow};

use super::{take_pages, GlobalOptions};

/// Work with items
#[derive(Args, Debug)]
pub struct ItemCommand {
    #[command(subcommand)]
    pub command: ItemSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ItemSubcommand {
    /// List or search items
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// View an item
    View(ViewArgs),

    /// Post a new item
    Create(CreateArgs),

    /// Delete an item
    Delete(ItemIdArgs),

    /// Stock an item
    Stock(ItemIdArgs),

    /// Remove an item from your stocks
    Unstock(ItemIdArgs),

    /// Comment on an item
    Comment(CommentArgs),

    /// List users who stocked an item
    Stockers(StockersArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Search query, e.g. "tag:rust stocks:>10"
    #[arg(long, short = 'q')]
    pub query: Option<String>,

    /// First page to fetch
    #[arg(long)]
    pub page: Option<u32>,

    /// Items per request (1 to 100)
    #[arg(long)]
    pub per_page: Option<u32>,

    /// Maximum number of items to list
    #[arg(long, short = 'l', default_value = "20")]
    pub limit: usize,
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Item ID
    pub id: String,

    /// Include comments
    #[arg(long, short = 'c')]
    pub comments: bool,

    /// Print the Markdown body
    #[arg(long, short = 'b')]
    pub body: bool,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Item title
    #[arg(long, short = 't')]
    pub title: String,

    /// Markdown body
    #[arg(long, short = 'b', conflicts_with = "body_file")]
    pub body: Option<String>,

    /// Read the body from a file
    #[arg(long, short = 'F')]
    pub body_file: Option<String>,

    /// Tags, comma separated; `name:version` adds a version
    #[arg(long, value_delimiter = ',', required = true)]
    pub tags: Vec<String>,

    /// Post as a limited share item
    #[arg(long)]
    pub private: bool,

    /// Qiita Team group to post into
    #[arg(long)]
    pub group: Option<String>,
}

#[derive(Args, Debug)]
pub struct ItemIdArgs {
    /// Item ID
    pub id: String,
}

#[derive(Args, Debug)]
pub struct CommentArgs {
    /// Item ID
    pub id: String,

    /// Comment body
    #[arg(long, short = 'b')]
    pub body: String,
}

#[derive(Args, Debug)]
pub struct StockersArgs {
    /// Item ID
    pub id: String,

    /// Maximum number of users to list
    #[arg(long, short = 'l', default_value = "20")]
    pub limit: usize,
}

impl ItemCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ItemSubcommand::List(args) => self.list(args, global).await,
            ItemSubcommand::View(args) => self.view(args, global).await,
            ItemSubcommand::Create(args) => self.create(args, global).await,
            ItemSubcommand::Delete(args) => self.delete(args, global).await,
            ItemSubcommand::Stock(args) => self.stock(args, global, true).await,
            ItemSubcommand::Unstock(args) => self.stock(args, global, false).await,
            ItemSubcommand::Comment(args) => self.comment(args, global).await,
            ItemSubcommand::Stockers(args) => self.stockers(args, global).await,
        }
    }

    async fn list(&self, args: &ListArgs, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        let client = global.client(&config)?;
        let writer = global.writer(&config);

        let mut pages = client.fetch_items(FetchItemsOptions {
            page: args.page,
            per_page: args.per_page,
            query: args.query.clone(),
        });
        let items = take_pages(&mut pages, args.limit).await?;

        writer.write_list(&items)
    }

    async fn view(&self, args: &ViewArgs, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        let client = global.client(&config)?;
        let writer = global.writer(&config);

        let item = client.fetch_item(&args.id).await?;
        let comments = if args.comments {
            client.fetch_item_comments(&args.id).await?
        } else {
            Vec::new()
        };

        if writer.is_json() {
            if args.comments {
                let result = serde_json::json!({ "item": item, "comments": comments });
                println!("{}", serde_json::to_string_pretty(&result)?);
                return Ok(());
            }
            return writer.write(&item);
        }

        writer.write(&item)?;

        if args.body {
            println!();
            println!("{}", item.body);
        }

        if !comments.is_empty() {
            println!();
            println!("{} ({})", style("Comments").bold(), comments.len());
            println!();
            for comment in &comments {
                comment.print_table(writer.color_enabled());
            }
        }

        Ok(())
    }

    async fn create(&self, args: &CreateArgs, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        let client = global.client(&config)?;
        let writer = global.writer(&config);

        let body = match (&args.body, &args.body_file) {
            (Some(body), _) => body.clone(),
            (None, Some(path)) => fs::read_to_string(path)?,
            (None, None) => bail!("Provide the body with --body or --body-file"),
        };

        let options = CreateItemOptions {
            title: args.title.clone(),
            body,
            tags: args.tags.iter().map(|t| parse_tagging(t)).collect(),
            coediting: None,
            group_url_name: args.group.clone(),
            private: args.private.then_some(true),
            tweet: None,
        };

        let item = client.create_item(&options).await?;
        if writer.is_json() {
            return writer.write(&item);
        }
        writer.write_success(&format!("Posted {}", item.url));
        Ok(())
    }

    async fn delete(&self, args: &ItemIdArgs, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        let client = global.client(&config)?;

        client.delete_item(&args.id).await?;
        global.writer(&config).write_success(&format!("Deleted item {}", args.id));
        Ok(())
    }

    async fn stock(&self, args: &ItemIdArgs, global: &GlobalOptions, stock: bool) -> Result<()> {
        let config = Config::load()?;
        let client = global.client(&config)?;
        let writer = global.writer(&config);

        if stock {
            client.stock_item(&args.id).await?;
            writer.write_success(&format!("Stocked {}", args.id));
        } else {
            client.unstock_item(&args.id).await?;
            writer.write_success(&format!("Unstocked {}", args.id));
        }
        Ok(())
    }

    async fn comment(&self, args: &CommentArgs, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        let client = global.client(&config)?;
        let writer = global.writer(&config);

        let comment = client.create_item_comment(&args.id, &args.body).await?;
        if writer.is_json() {
            return writer.write(&comment);
        }
        writer.write_success(&format!("Commented on {} ({})", args.id, comment.id));
        Ok(())
    }

    async fn stockers(&self, args: &StockersArgs, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        let client = global.client(&config)?;
        let writer = global.writer(&config);

        let mut pages = client.fetch_item_stockers(&args.id, PaginationOptions::default());
        let users = take_pages(&mut pages, args.limit).await?;

        writer.write_list(&users)
    }
}

/// `rust` or `rust:1.80`.
fn parse_tagging(input: &str) -> Tagging {
    match input.trim().split_once(':') {
        Some((name, version)) if !version.is_empty() => Tagging {
            name: name.to_string(),
            versions: vec![version.to_string()],
        },
        Some((name, _)) => Tagging::new(name),
        None => Tagging::new(input.trim()),
    }
}

fn tag_names(tags: &[Tagging]) -> String {
    tags.iter().map(|t| t.name.as_str()).collect::<Vec<_>>().join(", ")
}

impl TableRow for Item {
    fn headers() -> &'static [&'static str] {
        &["ID", "Title", "Author", "Likes", "Stocks", "Tags", "Updated"]
    }

    fn row(&self, _color: bool) -> Vec<String> {
        vec![
            self.id.clone(),
            truncate(&self.title, 40),
            format!("@{}", self.user.id),
            self.likes_count.to_string(),
            self.stocks_count.to_string(),
            truncate(&tag_names(&self.tags), 30),
            format_timestamp(&self.updated_at),
        ]
    }
}

impl TableOutput for Item {
    fn print_table(&self, color: bool) {
        if color {
            println!("{}", style(&self.title).bold());
        } else {
            println!("{}", self.title);
        }
        println!();
        print_field("  ID", &self.id, color);
        print_field("  Author", &format!("@{}", self.user.id), color);
        print_field("  Tags", &tag_names(&self.tags), color);
        print_field("  Likes", &self.likes_count.to_string(), color);
        print_field("  Stocks", &self.stocks_count.to_string(), color);
        print_field("  Comments", &self.comments_count.to_string(), color);
        if let Some(views) = self.page_views_count {
            print_field("  Views", &views.to_string(), color);
        }
        print_field("  Private", &format_bool(self.private, color), color);
        if let Some(ref group) = self.group {
            print_field("  Group", &group.name, color);
        }
        print_field("  Created", &format_timestamp(&self.created_at), color);
        print_field("  Updated", &format_timestamp(&self.updated_at), color);
        println!();
        print_field("  URL", &self.url, color);
    }
}

impl TableOutput for Comment {
    fn print_table(&self, color: bool) {
        let author = format!("@{}", self.user.id);
        let author = if color {
            style(author).cyan().bold().to_string()
        } else {
            author
        };

        println!("{} commented on {}:", author, format_timestamp(&self.created_at));
        println!();
        for line in self.body.lines() {
            println!("  {}", line);
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tagging() {
        assert_eq!(parse_tagging("Rust"), Tagging::new("Rust"));
        assert_eq!(parse_tagging(" Rust:1.80 ").versions, vec!["1.80".to_string()]);
        assert_eq!(parse_tagging("Rust:"), Tagging::new("Rust"));
    }

    #[test]
    fn test_tag_names() {
        let tags = vec![Tagging::new("Rust"), Tagging::new("CLI")];
        assert_eq!(tag_names(&tags), "Rust, CLI");
    }
}
