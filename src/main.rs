//
//  qiita-cli
//  main.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use qiita::cli::{Cli, Commands};
use qiita::exit_codes;

#[tokio::main]
async fn main() {
    // Initialize logging
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here too
            let code = if e.use_stderr() {
                exit_codes::USAGE
            } else {
                exit_codes::SUCCESS
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    match run(cli).await {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_codes::for_error(&e));
        }
    }
}

/// Initialize logging from `QIITA_DEBUG` (an `EnvFilter` directive)
fn init_logging() {
    let filter = EnvFilter::try_from_env("QIITA_DEBUG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Main command dispatcher
async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Auth(cmd) => cmd.run(&cli.global).await,
        Commands::Api(cmd) => cmd.run(&cli.global).await,
        Commands::Item(cmd) => cmd.run(&cli.global).await,
        Commands::Tag(cmd) => cmd.run(&cli.global).await,
        Commands::User(cmd) => cmd.run(&cli.global).await,
        Commands::Config(cmd) => cmd.run(&cli.global).await,
        Commands::Completion(cmd) => cmd.run(&cli.global).await,
        Commands::Version => {
            println!("{} version {}", qiita::APP_NAME, qiita::VERSION);
            Ok(())
        }
    }
}
