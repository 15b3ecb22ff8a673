// src/cli/news.rs - RSS/Atom headlines by category
//
// Sources are a JSON map of category -> feed URLs. A missing or unreadable
// sources file means the built-in defaults.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crossterm::style::Stylize;

use crate::infra::config::NewsConfig;
use crate::infra::errors::BrightsideError;

pub type Sources = BTreeMap<String, Vec<String>>;

pub fn default_sources() -> Sources {
    let mut sources = Sources::new();
    sources.insert(
        "Tech".into(),
        vec![
            "https://www.theverge.com/rss/index.xml".into(),
            "https://www.wired.com/feed/rss".into(),
            "https://www.techradar.com/rss".into(),
            "https://rss.nytimes.com/services/xml/rss/nyt/Technology.xml".into(),
        ],
    );
    sources.insert(
        "World".into(),
        vec![
            "http://feeds.bbci.co.uk/news/world/rss.xml".into(),
            "https://rss.nytimes.com/services/xml/rss/nyt/World.xml".into(),
            "https://www.aljazeera.com/xml/rss/all.xml".into(),
        ],
    );
    sources.insert(
        "Hacker".into(),
        vec!["https://news.ycombinator.com/rss".into()],
    );
    sources
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    UnknownCategory,
    UnknownSource,
}

/// The sources file and its parsed contents.
#[derive(Debug, Clone)]
pub struct NewsSources {
    path: PathBuf,
    sources: Sources,
}

impl NewsSources {
    pub fn load(path: &Path) -> Self {
        let sources = match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str::<Sources>(&content) {
                Ok(sources) => sources,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "unreadable news sources, using defaults");
                    default_sources()
                }
            },
            Err(_) => default_sources(),
        };
        Self {
            path: path.to_path_buf(),
            sources,
        }
    }

    pub fn save(&self) -> Result<(), BrightsideError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(&self.sources)?;
        std::fs::write(&self.path, data)?;
        Ok(())
    }

    pub fn sources(&self) -> &Sources {
        &self.sources
    }

    pub fn categories(&self) -> Vec<&str> {
        self.sources.keys().map(String::as_str).collect()
    }

    /// Exact match first, then case-insensitive.
    pub fn resolve_category(&self, category: &str) -> Option<&str> {
        if let Some((name, _)) = self.sources.get_key_value(category) {
            return Some(name);
        }
        self.sources
            .keys()
            .find(|name| name.eq_ignore_ascii_case(category))
            .map(String::as_str)
    }

    pub fn feeds(&self, category: &str) -> &[String] {
        self.sources.get(category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Append to an existing category (matched like `resolve_category`),
    /// creating it under the given name when nothing matches.
    pub fn add(&mut self, category: &str, url: &str) {
        let name = self
            .resolve_category(category)
            .unwrap_or(category)
            .to_string();
        self.sources.entry(name).or_default().push(url.to_string());
    }

    pub fn remove(&mut self, category: &str, url: &str) -> RemoveOutcome {
        let Some(name) = self.resolve_category(category).map(str::to_string) else {
            return RemoveOutcome::UnknownCategory;
        };
        let Some(feeds) = self.sources.get_mut(&name) else {
            return RemoveOutcome::UnknownCategory;
        };
        let before = feeds.len();
        feeds.retain(|feed| feed != url);
        if feeds.len() == before {
            RemoveOutcome::UnknownSource
        } else {
            RemoveOutcome::Removed
        }
    }
}

/// Closest category name for a "did you mean" hint.
pub fn suggest_category<'a>(input: &str, categories: &[&'a str]) -> Option<&'a str> {
    let input = input.to_lowercase();
    categories
        .iter()
        .map(|c| (*c, strsim::jaro_winkler(&input, &c.to_lowercase())))
        .filter(|(_, score)| *score >= 0.8)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(c, _)| c)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Headline {
    pub title: String,
    pub link: String,
}

#[derive(Debug, Clone)]
pub struct FeedSummary {
    pub title: String,
    pub items: Vec<Headline>,
}

/// Parse an RSS or Atom document, keeping at most `limit` items.
pub fn parse_feed(body: &[u8], limit: usize) -> Result<FeedSummary, BrightsideError> {
    let feed = feed_rs::parser::parse(body)?;
    let title = feed
        .title
        .map(|t| t.content)
        .unwrap_or_else(|| "(untitled feed)".into());
    let items = feed
        .entries
        .into_iter()
        .take(limit)
        .map(|entry| Headline {
            title: entry
                .title
                .map(|t| t.content.trim().to_string())
                .unwrap_or_default(),
            link: entry
                .links
                .into_iter()
                .next()
                .map(|l| l.href)
                .unwrap_or_default(),
        })
        .collect();
    Ok(FeedSummary { title, items })
}

async fn fetch_feed(
    client: &reqwest::Client,
    url: &str,
    limit: usize,
) -> Result<FeedSummary, BrightsideError> {
    let body = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .bytes()
        .await?;
    parse_feed(&body, limit)
}

/// `brightside news <category> [--limit N]`
pub async fn run_news(
    category: &str,
    limit: Option<usize>,
    config: &NewsConfig,
) -> anyhow::Result<()> {
    let sources = NewsSources::load(&config.sources_path());
    let limit = limit.unwrap_or(config.default_limit);

    let Some(category) = sources.resolve_category(category) else {
        println!("❌ Invalid category. Available categories:");
        let categories = sources.categories();
        for name in &categories {
            println!("{}", format!(" - {name}").green().bold());
        }
        if let Some(hint) = suggest_category(category, &categories) {
            println!("Did you mean '{hint}'?");
        }
        return Ok(());
    };

    print!("\n📡 Fetching {category} news ");
    for _ in 0..3 {
        print!(".");
        let _ = std::io::Write::flush(&mut std::io::stdout());
        tokio::time::sleep(Duration::from_millis(500)).await;
    }
    println!("\n");

    let client = reqwest::Client::builder()
        .user_agent(concat!("brightside/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(20))
        .build()?;

    for url in sources.feeds(category) {
        let feed = match fetch_feed(&client, url, limit).await {
            Ok(feed) => feed,
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "feed fetch failed");
                println!("⚠️ Error fetching {url}: {e}");
                continue;
            }
        };

        println!("{}", format!("📰 {}", feed.title).blue().bold());
        for item in &feed.items {
            println!(
                "{} {}",
                format!("  🔹 {}", item.title).green().bold(),
                format!("({})", item.link).cyan().bold()
            );
        }
        println!(
            "{}",
            "-------------------------------------------------".dark_grey()
        );
    }

    Ok(())
}

/// `brightside news-add <category> <url>`
pub fn run_news_add(category: &str, url: &str, config: &NewsConfig) -> anyhow::Result<()> {
    let mut sources = NewsSources::load(&config.sources_path());
    sources.add(category, url);
    sources.save()?;
    println!("{}", "✅ Source added successfully!".green().bold());
    Ok(())
}

/// `brightside news-remove <category> <url>`
pub fn run_news_remove(category: &str, url: &str, config: &NewsConfig) -> anyhow::Result<()> {
    let mut sources = NewsSources::load(&config.sources_path());
    match sources.remove(category, url) {
        RemoveOutcome::UnknownCategory => println!("❌ Category not found!"),
        RemoveOutcome::UnknownSource => println!("⚠️ Source not found in {category}."),
        RemoveOutcome::Removed => {
            sources.save()?;
            println!("{}", "✅ Source removed successfully!".green().bold());
        }
    }
    Ok(())
}
