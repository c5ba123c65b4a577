//! Casino guide CLI.
//!
//! Reads `catalog.json` and `guide.toml` from the project root, then ranks,
//! filters or renders the comparison page.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};

use guide::catalog::CasinoRecord;
use guide::core::filter::{featured, filter_all};
use guide::core::projection::project;
use guide::core::ranking::rank;
use guide::core::sort_state::SortState;
use guide::core::types::{GameType, SortDirection, SortField};
use guide::exit_codes;
use guide::io::init::{InitOptions, init_project};
use guide::io::render::{PageRenderer, current_year};
use guide::validate::validate_project;
use guide::view::{ListingRequest, build_listing, load_project};

#[derive(Parser)]
#[command(
    name = "guide",
    version,
    about = "Rank and filter casinos for the comparison page"
)]
struct Cli {
    /// Project directory containing catalog.json and guide.toml.
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the sample catalog and default config.
    Init {
        /// Overwrite existing files.
        #[arg(short, long)]
        force: bool,
    },
    /// Check the catalog against its schema and invariants.
    Validate,
    /// Print every casino ordered by one field.
    Rank {
        #[command(flatten)]
        sort: SortArgs,
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Print the casinos matching every filter, in catalog order unless `--by` or `--order` is given.
    Filter {
        #[command(flatten)]
        filters: FilterArgs,
        #[command(flatten)]
        sort: SortArgs,
        #[arg(long)]
        json: bool,
    },
    /// Print featured casinos in catalog order.
    Featured {
        /// Show at most this many (defaults to `featured_limit` from config).
        #[arg(long)]
        limit: Option<usize>,
        #[arg(long)]
        json: bool,
    },
    /// Render the comparison page as HTML.
    Render {
        #[command(flatten)]
        filters: FilterArgs,
        #[command(flatten)]
        sort: SortArgs,
        /// Output file (stdout if omitted).
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Default)]
struct SortArgs {
    /// Sort field: rating, welcome-bonus, game-selection, payment-methods, payout-speed, min-deposit.
    #[arg(long = "by")]
    field: Option<SortField>,
    /// Sort direction: asc or desc.
    #[arg(long = "order")]
    direction: Option<SortDirection>,
}

impl SortArgs {
    fn is_set(&self) -> bool {
        self.field.is_some() || self.direction.is_some()
    }

    fn resolve(&self, default: SortState) -> SortState {
        match (self.field, self.direction) {
            (None, None) => default,
            (Some(field), direction) => {
                SortState::new(field, direction.unwrap_or(SortDirection::Descending))
            }
            (None, Some(direction)) => SortState::new(default.field, direction),
        }
    }
}

#[derive(Args, Debug, Default)]
struct FilterArgs {
    /// Require one of these game types (repeatable).
    #[arg(long = "game-type")]
    game_types: Vec<GameType>,
    /// Require one of these payment methods or categories (repeatable).
    #[arg(long = "payment")]
    payment_methods: Vec<String>,
    /// Minimum deposit a casino must require.
    #[arg(long)]
    min_deposit: Option<u32>,
    /// Case-insensitive substring of the casino name.
    #[arg(long)]
    search: Option<String>,
}

impl FilterArgs {
    fn apply(&self, request: &mut ListingRequest) {
        for tag in &self.game_types {
            if !request.criteria.game_types.contains(tag) {
                request.criteria.toggle_game_type(*tag);
            }
        }
        for method in &self.payment_methods {
            if !request.criteria.payment_methods.contains(method) {
                request.criteria.toggle_payment_method(method);
            }
        }
        if let Some(min_deposit) = self.min_deposit {
            request.criteria.set_min_deposit(min_deposit);
        }
        if let Some(search) = &self.search {
            request.criteria.set_search_query(search);
        }
    }
}

/// JSON row for `rank`/`filter --json`.
#[derive(Serialize)]
struct RankedRow<'a> {
    position: usize,
    key: Option<f64>,
    #[serde(flatten)]
    casino: &'a CasinoRecord,
}

fn main() {
    guide::logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    match cli.command {
        Command::Init { force } => cmd_init(&cli.root, force),
        Command::Validate => cmd_validate(&cli.root),
        Command::Rank { sort, json } => cmd_rank(&cli.root, &sort, json),
        Command::Filter {
            filters,
            sort,
            json,
        } => cmd_filter(&cli.root, &filters, &sort, json),
        Command::Featured { limit, json } => cmd_featured(&cli.root, limit, json),
        Command::Render { filters, sort, out } => {
            cmd_render(&cli.root, &filters, &sort, out.as_deref())
        }
    }
}

fn cmd_init(root: &Path, force: bool) -> Result<i32> {
    let paths = init_project(root, &InitOptions { force })?;
    println!("init: catalog={}", paths.catalog_path.display());
    println!("init: config={}", paths.config_path.display());
    Ok(exit_codes::OK)
}

fn cmd_validate(root: &Path) -> Result<i32> {
    let report = validate_project(root)?;
    println!(
        "ok: {} casinos ({} featured)",
        report.casinos, report.featured
    );
    Ok(exit_codes::OK)
}

fn cmd_rank(root: &Path, sort: &SortArgs, json: bool) -> Result<i32> {
    let project = load_project(root)?;
    let state = sort.resolve(project.config.sort);
    let ranked = rank(&project.catalog.casinos, state.field, state.direction);
    info!(field = %state.field, direction = %state.direction, count = ranked.len(), "ranked");
    print_records(&ranked, Some(state.field), json)?;
    Ok(exit_codes::OK)
}

fn cmd_filter(root: &Path, filters: &FilterArgs, sort: &SortArgs, json: bool) -> Result<i32> {
    let project = load_project(root)?;
    let mut request = ListingRequest::from_config(&project.config);
    filters.apply(&mut request);
    debug!(criteria = ?request.criteria, "filtering");
    let mut matched = filter_all(&project.catalog.casinos, &request.criteria);
    let mut key_field = None;
    if sort.is_set() {
        let state = sort.resolve(project.config.sort);
        matched = rank(&matched, state.field, state.direction);
        key_field = Some(state.field);
    }
    print_records(&matched, key_field, json)?;
    Ok(exit_code_for(&matched))
}

fn cmd_featured(root: &Path, limit: Option<usize>, json: bool) -> Result<i32> {
    let project = load_project(root)?;
    let shown = featured(
        &project.catalog.casinos,
        limit.or(project.config.featured_limit),
    );
    print_records(&shown, None, json)?;
    Ok(exit_codes::OK)
}

fn cmd_render(
    root: &Path,
    filters: &FilterArgs,
    sort: &SortArgs,
    out: Option<&Path>,
) -> Result<i32> {
    let project = load_project(root)?;
    let mut request = ListingRequest::from_config(&project.config);
    request.sort = sort.resolve(request.sort);
    filters.apply(&mut request);
    let listing = build_listing(&project.catalog.casinos, &request, &project.config);
    let html = PageRenderer::new()?.render(&listing, &project.config, current_year())?;
    match out {
        Some(path) => {
            fs::write(path, html).with_context(|| format!("write {}", path.display()))?;
            println!(
                "render: casinos={} out={}",
                listing.table.len(),
                path.display()
            );
        }
        None => print!("{}", html),
    }
    Ok(exit_codes::OK)
}

fn exit_code_for(records: &[CasinoRecord]) -> i32 {
    if records.is_empty() {
        exit_codes::NO_MATCH
    } else {
        exit_codes::OK
    }
}

fn print_records(records: &[CasinoRecord], key_field: Option<SortField>, json: bool) -> Result<()> {
    let key = |record: &CasinoRecord| {
        key_field
            .map(|field| project(record, field))
            .filter(|value| !value.is_nan())
    };
    if json {
        let rows: Vec<RankedRow<'_>> = records
            .iter()
            .enumerate()
            .map(|(index, casino)| RankedRow {
                position: index + 1,
                key: key(casino),
                casino,
            })
            .collect();
        let mut payload = serde_json::to_string_pretty(&rows).context("serialize json")?;
        payload.push('\n');
        print!("{}", payload);
        return Ok(());
    }
    for (index, record) in records.iter().enumerate() {
        let key_text = match (key_field, key(record)) {
            (None, _) => String::new(),
            (Some(field), Some(value)) => format!("\t{}={}", field, value),
            (Some(field), None) => format!("\t{}=n/a", field),
        };
        println!(
            "{}\t{}\t{}\t{:.1}{}",
            index + 1,
            record.id,
            record.name,
            record.rating,
            key_text
        );
    }
    Ok(())
}
