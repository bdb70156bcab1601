//! Folio CLI
//!
//! Checks and previews a `projects.json` outside the browser, using the same
//! store, filter and fragment rules as the site.
//!
//! ## Usage
//!
//! ```bash
//! # Sanity-check a data file before publishing
//! folio check public/data/projects.json
//!
//! # Category counts
//! folio categories https://example.com/data/projects.json
//!
//! # The order tiles will load in for one filter
//! folio list public/data/projects.json --category branding
//!
//! # Which filter a link would open with
//! folio route '#gallery/web' public/data/projects.json
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use folio_core::store::{duplicate_ids, parse_projects, visible_records};
use folio_core::{
    apply_filter, categories_of, layout_order, selection_from_fragment, CategorySelection,
    GalleryResult, HttpSource, ProjectRecord, ProjectSource, ProjectStore, SiteConfig,
};

/// Folio - portfolio gallery tools
#[derive(Parser)]
#[command(name = "folio")]
#[command(version = "0.1.0")]
#[command(about = "Check and preview a portfolio project list")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Site configuration file (JSON); defaults apply without it
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Fragment section bound to the gallery filter
    #[arg(long, global = true)]
    section: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a project list and print a summary
    Check {
        /// File path or http(s) URL
        source: String,

        /// Treat hidden projects as shown (like ?previewHidden)
        #[arg(long)]
        preview_hidden: bool,
    },

    /// Categories with project counts, in first-seen order
    Categories {
        /// File path or http(s) URL
        source: String,
    },

    /// Tiles in cascade order
    List {
        /// File path or http(s) URL
        source: String,

        /// Category slug to filter by
        #[arg(long)]
        category: Option<String>,

        /// Treat hidden projects as shown (like ?previewHidden)
        #[arg(long)]
        preview_hidden: bool,
    },

    /// Resolve a location fragment to the filter the page would start with
    Route {
        /// Fragment such as '#gallery/web'
        fragment: String,

        /// File path or http(s) URL
        source: String,
    },
}

/// `projects.json` on the local filesystem.
#[derive(Debug, Clone)]
struct FileSource {
    path: PathBuf,
}

impl FileSource {
    fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ProjectSource for FileSource {
    async fn fetch(&self) -> GalleryResult<String> {
        Ok(tokio::fs::read_to_string(&self.path).await?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// A source argument: URL or file path.
#[derive(Debug, Clone)]
enum Source {
    File(FileSource),
    Http(HttpSource),
}

impl Source {
    fn parse(raw: &str) -> Self {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            Source::Http(HttpSource::new(raw))
        } else {
            Source::File(FileSource::new(raw))
        }
    }
}

impl ProjectSource for Source {
    async fn fetch(&self) -> GalleryResult<String> {
        match self {
            Source::File(source) => source.fetch().await,
            Source::Http(source) => source.fetch().await,
        }
    }

    fn describe(&self) -> String {
        match self {
            Source::File(source) => source.describe(),
            Source::Http(source) => source.describe(),
        }
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn load_config(path: Option<&Path>, section: Option<String>) -> Result<SiteConfig> {
    let mut config = match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            serde_json::from_str::<SiteConfig>(&raw)
                .with_context(|| format!("Invalid config {}", path.display()))?
        }
        None => SiteConfig::default(),
    };
    if let Some(section) = section {
        config.section = section;
    }
    Ok(config)
}

async fn load_visible(source: &str, include_hidden: bool) -> Result<Vec<ProjectRecord>> {
    let store = ProjectStore::new(Source::parse(source)).include_hidden(include_hidden);
    store
        .load()
        .await
        .with_context(|| format!("Could not load projects from {}", source))
}

/// Comma-separated list, or "none".
fn list_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}

/// Category counts in first-seen order.
fn category_counts(records: &[ProjectRecord]) -> Vec<(String, usize)> {
    categories_of(records)
        .into_iter()
        .map(|slug| {
            let count = records
                .iter()
                .filter(|r| r.category() == Some(slug.as_str()))
                .count();
            (slug, count)
        })
        .collect()
}

/// One line of `folio list`.
fn tile_line(position: usize, record: &ProjectRecord) -> String {
    let media = record.media_items().len();
    let mut line = format!(
        "{:>3}. {}  [{}]  {} media",
        position,
        record.title,
        record.size.as_str(),
        media
    );
    if let Some(category) = record.category() {
        line.push_str(&format!("  #{}", category));
    }
    if record.cover_src().is_none() {
        line.push_str("  (no cover, will be skipped)");
    }
    if !record.visible {
        line.push_str("  (hidden)");
    }
    line
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let config = load_config(cli.config.as_deref(), cli.section)?;

    match cli.command {
        Commands::Check {
            source,
            preview_hidden,
        } => {
            let origin = Source::parse(&source);
            let body = origin
                .fetch()
                .await
                .with_context(|| format!("Could not fetch {}", origin.describe()))?;
            let all = parse_projects(&body)
                .with_context(|| format!("Invalid project list in {}", origin.describe()))?;

            let hidden = all.iter().filter(|r| !r.visible).count();
            let duplicates = duplicate_ids(&all);
            let shown = visible_records(all.clone(), preview_hidden || config.include_hidden);

            let without_cover: Vec<String> = shown
                .iter()
                .filter(|r| r.cover_src().is_none())
                .map(|r| r.title.clone())
                .collect();
            let without_media: Vec<String> = shown
                .iter()
                .filter(|r| !r.has_media())
                .map(|r| r.title.clone())
                .collect();

            println!("Source: {}", origin.describe());
            println!("Records: {}", all.len());
            println!("  Visible: {}", all.len() - hidden);
            println!("  Hidden: {}", hidden);
            println!("  Shown: {}", shown.len());
            println!("Categories: {}", list_or_none(&categories_of(&shown)));
            println!();
            println!("Duplicate ids: {}", list_or_none(&duplicates));
            println!("Without cover: {}", list_or_none(&without_cover));
            println!("Without gallery media: {}", list_or_none(&without_media));
        }

        Commands::Categories { source } => {
            let records = load_visible(&source, config.include_hidden).await?;
            let counts = category_counts(&records);

            if counts.is_empty() {
                println!("No categories found.");
            } else {
                println!("Categories ({}):", counts.len());
                for (slug, count) in counts {
                    println!(
                        "  {:<14} {:<16} {}",
                        slug,
                        config.categories.label_for(&slug),
                        count
                    );
                }
            }
        }

        Commands::List {
            source,
            category,
            preview_hidden,
        } => {
            let records = load_visible(&source, preview_hidden || config.include_hidden).await?;
            let selection = category
                .as_deref()
                .map(CategorySelection::from_slug)
                .unwrap_or_default();
            let tiles = layout_order(apply_filter(&records, &selection));

            println!(
                "Filter: {} ({} tiles)",
                config.categories.label_for(selection.slug()),
                tiles.len()
            );
            for (index, record) in tiles.iter().enumerate() {
                println!("{}", tile_line(index + 1, record));
            }
        }

        Commands::Route { fragment, source } => {
            let records = load_visible(&source, config.include_hidden).await?;
            let selection =
                selection_from_fragment(&fragment, &config.section, &config.categories, &records);
            let tiles = apply_filter(&records, &selection).len();

            println!("Fragment: {}", fragment);
            println!("Selection: {}", selection);
            println!("Label: {}", config.categories.label_for(selection.slug()));
            println!("Tiles: {}", tiles);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_parse_detects_urls() {
        assert!(matches!(
            Source::parse("https://example.com/data/projects.json"),
            Source::Http(_)
        ));
        assert!(matches!(Source::parse("data/projects.json"), Source::File(_)));
    }

    #[test]
    fn test_list_or_none() {
        assert_eq!(list_or_none(&[]), "none");
        assert_eq!(list_or_none(&["a".into(), "b".into()]), "a, b");
    }

    #[test]
    fn test_category_counts_first_seen_order() {
        let mut a = ProjectRecord::titled("A");
        a.category = Some("web".into());
        let mut b = ProjectRecord::titled("B");
        b.category = Some("branding".into());
        let mut c = ProjectRecord::titled("C");
        c.category = Some("web".into());

        assert_eq!(
            category_counts(&[a, b, c]),
            vec![("web".to_string(), 2), ("branding".to_string(), 1)]
        );
    }

    #[test]
    fn test_tile_line_flags_missing_cover() {
        let record = ProjectRecord::titled("Poster");
        let line = tile_line(1, &record);
        assert!(line.starts_with("  1. Poster  [default]  0 media"));
        assert!(line.contains("no cover"));
    }

    #[test]
    fn test_load_config_overrides_section() {
        let config = load_config(None, Some("work".into())).unwrap();
        assert_eq!(config.section, "work");
        assert_eq!(config.pacing_ms, 120);
    }
}
