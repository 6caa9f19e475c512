// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity Board command line client
//!
//! Drives the sign-up board against a running activities API and prints the
//! resulting page.

use activity_board::{config::Config, view::Page, Board};
use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "activity-board", about = "Activity sign-up board client")]
struct Args {
    /// Base URL of the activities API (overrides ACTIVITY_BOARD_API_URL)
    #[arg(long)]
    api_url: Option<String>,
    /// Print the page markup instead of a plain summary
    #[arg(long)]
    html: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show all activities
    List,
    /// Sign a participant up for an activity
    Signup {
        #[arg(long)]
        email: String,
        #[arg(long)]
        activity: String,
    },
    /// Remove a participant from an activity
    Unregister {
        #[arg(long)]
        email: String,
        #[arg(long)]
        activity: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let mut config = Config::from_env()?;
    if let Some(api_url) = args.api_url {
        config = config.with_api_url(api_url);
    }
    tracing::info!(api_url = %config.api_url, "Starting Activity Board");

    let board = Board::from_config(&config);
    board.start().await;

    match args.command {
        Command::List => {}
        Command::Signup { email, activity } => {
            if !board.sign_up(&email, &activity).await {
                bail!("{activity} is not an activity on this board");
            }
        }
        Command::Unregister { email, activity } => {
            if !board.click_delete(&activity, &email).await {
                bail!("{email} is not listed under {activity}");
            }
            // The board itself only logs a failed removal.
            if board.is_listed(&activity, &email) {
                bail!("server did not remove {email} from {activity}");
            }
        }
    }

    let page = board.page().snapshot();
    if args.html {
        println!("{}", page.to_html());
    } else {
        print!("{}", summary(&page));
    }
    Ok(())
}

/// Plain text rendering of the page for terminals.
fn summary(page: &Page) -> String {
    let mut out = String::new();

    if page.message.is_visible() {
        let kind = page
            .message
            .kind()
            .map(|kind| kind.class_name())
            .unwrap_or("info");
        out.push_str(&format!("[{kind}] {}\n\n", page.message.text()));
    }

    if let Some(notice) = page.list.notice() {
        out.push_str(notice);
        out.push('\n');
        return out;
    }

    for card in page.list.cards() {
        out.push_str(&format!("{}\n", card.name));
        out.push_str(&format!("  {}\n", card.description));
        out.push_str(&format!("  Schedule: {}\n", card.schedule));
        out.push_str(&format!("  Availability: {}\n", card.availability_text()));
        if card.participants.is_empty() {
            out.push_str(&format!(
                "  {}\n",
                activity_board::view::page::EMPTY_PARTICIPANTS_TEXT
            ));
        }
        for item in &card.participants {
            out.push_str(&format!("  - {}\n", item.email));
        }
        out.push('\n');
    }
    out
}

/// Initialize structured JSON logging on stderr.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("activity_board=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
