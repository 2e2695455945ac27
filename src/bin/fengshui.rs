//! Command-line view of the feng shui checklist catalog.
//!
//! Prints categories and items, exports the catalog as a JSON document, and
//! validates catalog documents. `--catalog PATH` or `FENGSHUI_CATALOG` swaps
//! the built-in data for a document on disk.

use anyhow::{Context, Result, bail};
use fengshui_catalog::logging::init_cli_logger;
use fengshui_catalog::{Catalog, FengShuiItem, catalog_path_override, resolve_catalog};
use serde_json::json;
use std::env;
use std::path::{Path, PathBuf};

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse()?;
    init_cli_logger(cli.verbose);

    match cli.command {
        Command::Validate(path) => validate(&path),
        Command::Query(query) => {
            let path = catalog_path_override(cli.catalog.as_deref());
            let catalog = resolve_catalog(path.as_deref())?;
            answer(&catalog, query)
        }
    }
}

fn validate(path: &Path) -> Result<()> {
    let catalog = Catalog::load(path)?;
    println!(
        "{}: ok ({} categories, {} items)",
        path.display(),
        catalog.categories().count(),
        catalog.len()
    );
    Ok(())
}

fn answer(catalog: &Catalog, query: Query) -> Result<()> {
    match query {
        Query::Categories => {
            for category in catalog.categories() {
                println!("{category}");
            }
        }
        Query::List(None) => print_items(catalog.all_items()),
        Query::List(Some(key)) => print_items(catalog.by_category(&key)?),
        Query::Show(id) => {
            let Some(item) = catalog.find_by_id(&id) else {
                bail!("no item with id '{id}'");
            };
            let category = catalog
                .category_of(&id)
                .with_context(|| format!("item '{id}' has no category"))?;
            let value = json!({ "category": category, "item": item });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        Query::Export => {
            println!("{}", serde_json::to_string_pretty(&catalog.to_document())?);
        }
    }
    Ok(())
}

fn print_items(items: &[FengShuiItem]) {
    for item in items {
        println!("{}\t{}\t{}", item.id, item.score, item.label_key);
    }
}

struct Cli {
    catalog: Option<PathBuf>,
    verbose: bool,
    command: Command,
}

enum Command {
    Query(Query),
    Validate(PathBuf),
}

enum Query {
    Categories,
    List(Option<String>),
    Show(String),
    Export,
}

impl Cli {
    fn parse() -> Result<Self> {
        let mut args = env::args().skip(1);
        let mut catalog = None;
        let mut verbose = false;
        let mut positional = Vec::new();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--catalog" => {
                    let value = args.next().context("--catalog requires a path")?;
                    catalog = Some(PathBuf::from(value));
                }
                "--verbose" | "-v" => verbose = true,
                "--help" | "-h" => usage(0),
                flag if flag.starts_with('-') => bail!("unknown flag: {flag}"),
                other => positional.push(other.to_string()),
            }
        }

        let mut positional = positional.into_iter();
        let Some(name) = positional.next() else {
            usage(1);
        };
        let operand = positional.next();
        if let Some(extra) = positional.next() {
            bail!("unexpected argument: {extra}");
        }

        let command = match (name.as_str(), operand) {
            ("categories", None) => Command::Query(Query::Categories),
            ("list", category) => Command::Query(Query::List(category)),
            ("show", Some(id)) => Command::Query(Query::Show(id)),
            ("export", None) => Command::Query(Query::Export),
            ("validate", Some(path)) => Command::Validate(PathBuf::from(path)),
            ("show", None) => bail!("show requires an item id"),
            ("validate", None) => bail!("validate requires a path"),
            ("categories" | "export", Some(extra)) => bail!("unexpected argument: {extra}"),
            (other, _) => bail!("unknown command: {other}"),
        };

        Ok(Self {
            catalog,
            verbose,
            command,
        })
    }
}

fn usage(code: i32) -> ! {
    eprintln!(
        "Usage: fengshui [--catalog PATH] [--verbose] <command>\n\nCommands:\n  categories       List category keys in declaration order.\n  list [CATEGORY]  List items as id, score, label key (tab separated).\n  show ID          Print one item and its category as JSON.\n  export           Print the catalog as a JSON document.\n  validate PATH    Check a catalog document against the schema and id rules.\n\nEnvironment:\n  FENGSHUI_CATALOG  Catalog document used when --catalog is absent.\n  RUST_LOG          Log filter (logs go to stderr)."
    );
    std::process::exit(code);
}
