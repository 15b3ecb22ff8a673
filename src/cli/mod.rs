// src/cli/mod.rs - CLI definition (clap derive)

pub mod convert;
pub mod grab;
pub mod jack;
pub mod news;
pub mod setup;
pub mod twitch;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "brightside",
    about = "Personal terminal assistant: convert, grab, news, Twitch chat, and the Jack dashboard",
    version
)]
pub struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert audio/video files (MP3 ↔ WAV, MP4 → MP3)
    Convert {
        /// File to convert
        file: String,
        /// Target format (mp3, wav)
        #[arg(short, long)]
        format: Option<String>,
    },
    /// Download videos, images, or files from the internet
    Grab {
        /// URL to download
        url: String,
    },
    /// Fetch latest news from RSS feeds
    News {
        /// Category to fetch (e.g. Tech, World, Hacker)
        category: String,
        /// Number of articles per feed
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Add a news source to a category
    NewsAdd { category: String, url: String },
    /// Remove a news source from a category
    NewsRemove { category: String, url: String },
    /// Connect to a Twitch chat and display messages in the terminal
    Twitch {
        /// Channel name (without #)
        channel: String,
    },
    /// Install dependencies and configure Brightside
    Setup {
        /// Reset the Brightside installation first
        #[arg(long)]
        reset: bool,
        /// Run without prompts
        #[arg(long)]
        silent: bool,
    },
    /// Launch the Brightside Jack terminal dashboard
    #[command(visible_alias = "dashboard")]
    Jack,
}
