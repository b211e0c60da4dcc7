//! # anon
//!
//! Submit posts and comments through an Arena Anonymous server, one per
//! cool-down window. The window is tracked in a local state file and is only
//! advisory: the server does not enforce it.

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use anon_core::{CooldownGate, CooldownState};
use anon_infra::{FileCooldownStore, SystemClock, run_countdown};

mod client;
mod submit;

use client::{ServiceClient, Submission};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Base URL of the Arena Anonymous server.
    #[arg(long, env = "ANON_SERVER_URL", default_value = "http://127.0.0.1:8080")]
    server: String,

    /// Where the last submission time is kept.
    #[arg(long, env = "ANON_STATE_FILE")]
    state_file: Option<PathBuf>,

    /// Cool-down window in seconds.
    #[arg(long, env = "ANON_COOLDOWN_SECS", default_value_t = 60)]
    cooldown_secs: u64,

    /// Wait out an active cool-down instead of refusing.
    #[arg(long)]
    wait: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a new thread.
    Post { content: String },
    /// Reply to the thread at POST_URL.
    Comment { post_url: String, content: String },
    /// Show the cool-down state.
    Status,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    let store_path = cli
        .state_file
        .clone()
        .unwrap_or_else(FileCooldownStore::default_path);
    let store = FileCooldownStore::new(&store_path);
    let mut gate = CooldownGate::new(SystemClock, store, Duration::from_secs(cli.cooldown_secs));

    let state = submit::restore_gate(&mut gate)
        .with_context(|| format!("reading {}", store_path.display()))?;

    let submission = match cli.command {
        Command::Status => {
            match state {
                CooldownState::Idle => println!("Ready to post."),
                CooldownState::CoolingDown { remaining_secs } => {
                    println!("Cooling down: {} seconds left.", remaining_secs)
                }
            }
            return Ok(());
        }
        Command::Post { content } => Submission::Post { content },
        Command::Comment { post_url, content } => Submission::Comment { post_url, content },
    };

    if cli.wait && state != CooldownState::Idle {
        run_countdown(&gate, |remaining| {
            eprint!("\rWaiting {:>2}s before posting...", remaining);
            let _ = std::io::stderr().flush();
        })
        .await;
        eprintln!();
    }

    let client = ServiceClient::new(&cli.server, REQUEST_TIMEOUT)?;
    let body = submit::submit_gated(&mut gate, &client, &submission).await?;

    println!("{}", serde_json::to_string_pretty(&body)?);
    eprintln!("Your post has been submitted successfully");

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
