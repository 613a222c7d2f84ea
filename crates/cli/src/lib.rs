//! # Page Forge CLI
//!
//! Command-line interface for Page Forge.
//!
//! This crate resolves, inspects and saves entity pages against a JSON page
//! store without a running editor.
//!
//! ## Commands
//!
//! - `resolve` - Print the initial form values for a page (or a new page)
//! - `fields` - List the fields the editor shows for a page
//! - `options` - Print entity, page type and "navigate to" options
//! - `save` - Submit an edited input into the store
//!

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use pageforge_core::Persistable;
use pageforge_ir::{
    EntityPageInput, FormField, ForgeConfig, PageForm, PageType, SelectOption, SidebarTab,
    StaticCatalog, WidgetKind, fetch_entity_options, load_store_or_default, page_options,
    page_type_options, save_store,
};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

// Re-export dependencies for use in main.rs
pub use pageforge_core;
pub use pageforge_ir;

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// CLI name
pub const NAME: &str = "pageforge";

// ============================================================================
// Arguments
// ============================================================================

#[derive(Debug, Parser)]
#[command(name = NAME, version, about = "Resolve, inspect and save entity pages")]
pub struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long, global = true, env = "PAGEFORGE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the initial form values for a page as JSON
    Resolve {
        /// Page store file
        #[arg(long)]
        store: PathBuf,

        /// Page id; omit to resolve a new page
        #[arg(long)]
        page: Option<String>,
    },

    /// List the fields the editor shows for a page
    Fields {
        #[arg(long)]
        store: PathBuf,

        #[arg(long)]
        page: Option<String>,

        /// Sidebar tab to list
        #[arg(long, value_enum, default_value_t = TabArg::Properties)]
        tab: TabArg,

        /// Switch the page type before listing, as the toggle would
        #[arg(long)]
        page_type: Option<PageType>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the select options the editor offers
    Options {
        /// Entity catalog file (JSON)
        #[arg(long)]
        catalog: PathBuf,

        /// Application whose entities are listed
        #[arg(long)]
        app: String,

        /// Page store for "navigate to" options
        #[arg(long)]
        store: Option<PathBuf>,

        /// Page being edited, left out of the "navigate to" options
        #[arg(long)]
        page: Option<String>,

        #[arg(long)]
        json: bool,
    },

    /// Submit an input file into the store and print the stored record
    Save {
        #[arg(long)]
        store: PathBuf,

        /// Input file (JSON), as produced by `resolve`
        #[arg(long)]
        input: PathBuf,
    },
}

/// Sidebar tab argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TabArg {
    Properties,
    Display,
}

impl From<TabArg> for SidebarTab {
    fn from(tab: TabArg) -> Self {
        match tab {
            TabArg::Properties => SidebarTab::Properties,
            TabArg::Display => SidebarTab::Display,
        }
    }
}

// ============================================================================
// Logging
// ============================================================================

/// Filter directive used when `RUST_LOG` is not set
pub fn log_directive(config: &ForgeConfig, verbose: bool) -> String {
    if verbose {
        "debug".to_string()
    } else {
        config.logging.level.to_ascii_lowercase()
    }
}

// ============================================================================
// Commands
// ============================================================================

/// Load the configuration named on the command line, else `pageforge.toml`
/// in the working directory, else the built-in one
pub fn load_config(cli: &Cli) -> Result<ForgeConfig> {
    load_config_from(cli, Path::new("."))
}

fn load_config_from(cli: &Cli, dir: &Path) -> Result<ForgeConfig> {
    let path = ForgeConfig::locate(cli.config.as_deref(), dir);
    if let Some(path) = &path {
        debug!(path = %path.display(), "using configuration file");
    }
    ForgeConfig::load_or_default(path.as_deref()).with_context(|| match &path {
        Some(path) => format!("loading configuration from {}", path.display()),
        None => "loading built-in configuration".to_string(),
    })
}

/// Run a parsed command, writing its output to `out`
pub async fn run<W: Write>(cli: &Cli, config: &ForgeConfig, out: &mut W) -> Result<()> {
    match &cli.command {
        Command::Resolve { store, page } => {
            let form = open_form(config, store, page.as_deref())?;
            write_json(out, form.values())
        }
        Command::Fields {
            store,
            page,
            tab,
            page_type,
            json,
        } => {
            let mut form = open_form(config, store, page.as_deref())?;
            form.select_tab((*tab).into());
            if let Some(page_type) = page_type {
                form.set_page_type(*page_type);
            }
            let fields = form.visible_fields();
            if *json {
                write_json(out, &fields)
            } else {
                write_fields(out, form.selected_tab(), &fields)
            }
        }
        Command::Options {
            catalog,
            app,
            store,
            page,
            json,
        } => {
            let options = collect_options(catalog, app, store.as_deref(), page.as_deref()).await?;
            if *json {
                write_json(out, &options)
            } else {
                write_options(out, &options)
            }
        }
        Command::Save { store, input } => {
            let source = tokio::fs::read_to_string(input)
                .await
                .with_context(|| format!("reading input {}", input.display()))?;
            let input: EntityPageInput = serde_json::from_str(&source)
                .with_context(|| format!("parsing input {}", input.display()))?;

            let mut pages = load_store_or_default(store)?;
            let record = pages.save(&input)?.clone();
            save_store(&pages, store)?;
            write_json(out, &record)
        }
    }
}

/// Form seeded from the store, for a new page when `page` is `None`
fn open_form(config: &ForgeConfig, store: &Path, page: Option<&str>) -> Result<PageForm> {
    let pages = load_store_or_default(store)?;
    let existing = page.map(|id| pages.require(id)).transpose()?;
    debug!(page = ?page, store = %store.display(), "opening form");
    Ok(PageForm::new(config.resolver(), existing))
}

/// Options offered by the editor's select widgets
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorOptions {
    pub entities: Vec<SelectOption>,
    pub page_types: Vec<SelectOption>,
    pub navigate_to: Vec<SelectOption>,
}

async fn collect_options(
    catalog: &Path,
    app: &str,
    store: Option<&Path>,
    page: Option<&str>,
) -> Result<EditorOptions> {
    let catalog = StaticCatalog::load_from_file(catalog)
        .with_context(|| format!("loading catalog {}", catalog.display()))?;
    let entities = fetch_entity_options(&catalog, app).await;

    let navigate_to = match store {
        Some(store) => page_options(&load_store_or_default(store)?.page_summaries(), page),
        None => Vec::new(),
    };

    Ok(EditorOptions {
        entities,
        page_types: page_type_options(),
        navigate_to,
    })
}

// ============================================================================
// Output
// ============================================================================

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn widget_name(widget: &WidgetKind) -> String {
    match widget {
        WidgetKind::Text => "text".to_string(),
        WidgetKind::TextArea { rows } => format!("textarea ({} rows)", rows),
        WidgetKind::EntitySelect => "entity select".to_string(),
        WidgetKind::PageTypeToggle => "page type toggle".to_string(),
        WidgetKind::Checkbox => "checkbox".to_string(),
        WidgetKind::PageSelect => "page select".to_string(),
        WidgetKind::FieldMultiSelect { entity_id } if entity_id.is_empty() => {
            "field multi-select (no entity)".to_string()
        }
        WidgetKind::FieldMultiSelect { entity_id } => {
            format!("field multi-select (entity {})", entity_id)
        }
    }
}

fn write_fields<W: Write>(out: &mut W, tab: SidebarTab, fields: &[FormField]) -> Result<()> {
    writeln!(out, "{}", tab.label().bold())?;
    for field in fields {
        writeln!(
            out,
            "  {} {} {}",
            format!("{:<32}", field.path).cyan(),
            format!("{:<16}", field.label),
            widget_name(&field.widget).dimmed()
        )?;
    }
    Ok(())
}

fn write_options<W: Write>(out: &mut W, options: &EditorOptions) -> Result<()> {
    let sections = [
        ("Entities", &options.entities),
        ("Page Types", &options.page_types),
        ("Navigate To", &options.navigate_to),
    ];
    for (title, items) in sections {
        writeln!(out, "{}", title.bold())?;
        if items.is_empty() {
            writeln!(out, "  {}", "(none)".dimmed())?;
        }
        for option in items {
            writeln!(out, "  {} {}", format!("{:<38}", option.value).cyan(), option.label)?;
        }
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pageforge_ir::{EntityPage, EntitySummary, PageStore, StoredListSettings, load_store};
    use serde_json::Value;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("pageforge").chain(args.iter().copied())).unwrap()
    }

    async fn run_to_string(cli: &Cli) -> String {
        let mut out = Vec::new();
        run(cli, &ForgeConfig::default(), &mut out).await.unwrap();
        String::from_utf8(out).unwrap()
    }

    fn seeded_store(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("pages.json");
        let store = PageStore::from_pages(vec![
            EntityPage::new("5")
                .with_name("Users")
                .with_page_type(PageType::List)
                .with_list_settings(StoredListSettings {
                    enable_search: Some(false),
                    ..Default::default()
                }),
            EntityPage::new("6").with_name("User Detail"),
        ]);
        save_store(&store, &path).unwrap();
        path
    }

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_log_directive() {
        let config = ForgeConfig::default();
        assert_eq!(log_directive(&config, false), "info");
        assert_eq!(log_directive(&config, true), "debug");
    }

    #[test]
    fn test_local_config_file_is_picked_up() {
        let dir = TempDir::new().unwrap();
        let cli = parse(&["resolve", "--store", "s.json"]);
        assert_eq!(load_config_from(&cli, dir.path()).unwrap(), ForgeConfig::default());

        std::fs::write(
            dir.path().join(pageforge_ir::config::CONFIG_FILE_NAME),
            "[logging]\nlevel = \"warn\"\n",
        )
        .unwrap();
        assert_eq!(load_config_from(&cli, dir.path()).unwrap().logging.level, "warn");
    }

    #[tokio::test]
    async fn test_malformed_store_reports_record_error() {
        let dir = TempDir::new().unwrap();
        let store = dir.path().join("pages.json");
        std::fs::write(
            &store,
            r#"{ "schemaVersion": 1, "pages": [{ "id": "5", "updatedAt": "yesterday" }] }"#,
        )
        .unwrap();
        let cli = parse(&["resolve", "--store", store.to_str().unwrap(), "--page", "5"]);

        let mut out = Vec::new();
        let err = run(&cli, &ForgeConfig::default(), &mut out).await.unwrap_err();
        assert!(format!("{err:#}").contains("invalid timestamp 'yesterday'"));
    }

    #[test]
    fn test_parse_page_type_argument() {
        let cli = parse(&["fields", "--store", "s.json", "--page-type", "single-record"]);
        match cli.command {
            Command::Fields { page_type, tab, .. } => {
                assert_eq!(page_type, Some(PageType::SingleRecord));
                assert_eq!(tab, TabArg::Properties);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_resolve_existing_page() {
        let dir = TempDir::new().unwrap();
        let store = seeded_store(&dir);
        let cli = parse(&["resolve", "--store", store.to_str().unwrap(), "--page", "5"]);

        let value: Value = serde_json::from_str(&run_to_string(&cli).await).unwrap();
        assert_eq!(value["pageType"], "List");
        assert_eq!(value["listSettings"]["enableSearch"], false);
        assert_eq!(value["listSettings"]["allowCreation"], true);
    }

    #[tokio::test]
    async fn test_resolve_new_page_without_store() {
        let dir = TempDir::new().unwrap();
        let store = dir.path().join("absent.json");
        let cli = parse(&["resolve", "--store", store.to_str().unwrap()]);

        let value: Value = serde_json::from_str(&run_to_string(&cli).await).unwrap();
        assert_eq!(value["id"], "");
        assert_eq!(value["pageType"], "SingleRecord");
        assert_eq!(value["singleRecordSettings"]["allowCreation"], true);
    }

    #[tokio::test]
    async fn test_resolve_unknown_page_fails() {
        let dir = TempDir::new().unwrap();
        let store = seeded_store(&dir);
        let cli = parse(&["resolve", "--store", store.to_str().unwrap(), "--page", "404"]);

        let mut out = Vec::new();
        let err = run(&cli, &ForgeConfig::default(), &mut out).await.unwrap_err();
        assert!(err.to_string().contains("Page not found: 404"));
    }

    #[tokio::test]
    async fn test_fields_follow_page_type_switch() {
        let dir = TempDir::new().unwrap();
        let store = seeded_store(&dir);
        let cli = parse(&[
            "fields",
            "--store",
            store.to_str().unwrap(),
            "--page",
            "5",
            "--page-type",
            "SingleRecord",
            "--json",
        ]);

        let value: Value = serde_json::from_str(&run_to_string(&cli).await).unwrap();
        let paths: Vec<&str> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["path"].as_str().unwrap())
            .collect();
        assert!(paths.contains(&"singleRecordSettings.allowUpdate"));
        assert!(!paths.iter().any(|p| p.starts_with("listSettings")));
    }

    #[tokio::test]
    async fn test_fields_table_lists_display_tab() {
        let dir = TempDir::new().unwrap();
        let store = seeded_store(&dir);
        let cli = parse(&["fields", "--store", store.to_str().unwrap(), "--tab", "display"]);

        let text = run_to_string(&cli).await;
        assert!(text.contains("showAllFields"));
        assert!(text.contains("showFieldList"));
    }

    #[tokio::test]
    async fn test_options() {
        let dir = TempDir::new().unwrap();
        let store = seeded_store(&dir);
        let catalog_path = dir.path().join("catalog.json");
        StaticCatalog::new()
            .with_entity("app-1", EntitySummary::new("e1", "Customer"))
            .save_to_file(&catalog_path)
            .unwrap();

        let cli = parse(&[
            "options",
            "--catalog",
            catalog_path.to_str().unwrap(),
            "--app",
            "app-1",
            "--store",
            store.to_str().unwrap(),
            "--page",
            "5",
            "--json",
        ]);

        let value: Value = serde_json::from_str(&run_to_string(&cli).await).unwrap();
        assert_eq!(value["entities"][0]["label"], "Customer");
        assert_eq!(value["pageTypes"][0]["label"], "Single Record");
        assert_eq!(value["navigateTo"].as_array().unwrap().len(), 1);
        assert_eq!(value["navigateTo"][0]["value"], "6");
    }

    #[tokio::test]
    async fn test_save_creates_then_updates() {
        let dir = TempDir::new().unwrap();
        let store = dir.path().join("pages.json");
        let input_path = dir.path().join("input.json");

        let mut input = ForgeConfig::default().resolver().resolve(None);
        input.name = "Orders".to_string();
        std::fs::write(&input_path, serde_json::to_string(&input).unwrap()).unwrap();

        let cli = parse(&[
            "save",
            "--store",
            store.to_str().unwrap(),
            "--input",
            input_path.to_str().unwrap(),
        ]);
        let created: Value = serde_json::from_str(&run_to_string(&cli).await).unwrap();
        let id = created["id"].as_str().unwrap().to_string();
        assert_eq!(created["blockType"], "EntityPage");

        input.id = id.clone();
        input.description = "All orders".to_string();
        std::fs::write(&input_path, serde_json::to_string(&input).unwrap()).unwrap();
        run_to_string(&cli).await;

        let pages = load_store(&store).unwrap();
        assert_eq!(pages.len(), 1);
        assert_eq!(
            pages.get(&id).unwrap().description.as_deref(),
            Some("All orders")
        );
    }
}
