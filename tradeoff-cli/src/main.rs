use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::collections::HashSet;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use tradeoff_catalog::{builtin_mapping, load_catalog, priority_definitions, wasteful_definitions};
use tradeoff_core::{
    calculate_comparison, category_budget_total, find_best_comparison, format_comparison_headline,
    format_currency, generate_wizard_comparisons, parse_amount, BudgetItem, BudgetTier, Catalog,
    PriorityCategory, WastefulCategory,
};

mod config;
mod state;

use config::Config;

#[derive(Parser, Debug)]
#[command(name = "tradeoff", version, about = "What federal budget lines could fund instead")]
struct Cli {
    /// CSV of budget items merged over the built-in catalog
    #[arg(long, global = true)]
    budget_csv: Option<PathBuf>,

    /// CSV of comparison units merged over the built-in catalog
    #[arg(long, global = true)]
    units_csv: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// More logging (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List priority and wasteful categories with their resolved totals
    Categories,

    /// Rank "could fund" comparisons for chosen categories
    Wizard {
        /// Priority category (repeatable), e.g. education
        #[arg(long = "priority")]
        priorities: Vec<PriorityCategory>,

        /// Wasteful category (repeatable), e.g. defense
        #[arg(long = "wasteful")]
        wasteful: Vec<WastefulCategory>,

        /// Most important priority; must be one of --priority (defaults to
        /// config when selected, then the first --priority)
        #[arg(long)]
        top: Option<PriorityCategory>,
    },

    /// Most relatable comparison for one budget item
    Best {
        /// Budget item id, e.g. program-f35
        id: String,
    },

    /// Convert a dollar amount into units
    Compare {
        /// Amount such as 2.68B or "$65,000"
        #[arg(long)]
        amount: String,

        /// Comparison unit id, e.g. teacher-salary
        #[arg(long)]
        unit: String,
    },

    /// Print the budget hierarchy
    Tree {
        /// Start below this budget item instead of the top level
        #[arg(long)]
        root: Option<String>,

        /// List only items of one tier: department, program, current-event
        #[arg(long, conflicts_with = "root")]
        tier: Option<BudgetTier>,
    },

    /// Check that the category tables resolve against the catalog
    Validate,

    /// Manage ~/.tradeoff/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config file if none exists
    Init,
    /// Print the effective config
    Show,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cfg = config::load_config()?;
    let json = cli.json || cfg.output.json;

    let budget_csv = cli.budget_csv.or_else(|| cfg.catalog.budget_csv.clone());
    let units_csv = cli.units_csv.or_else(|| cfg.catalog.units_csv.clone());
    let catalog = load_catalog(budget_csv.as_deref(), units_csv.as_deref())
        .context("loading catalog")?;

    match cli.command {
        Command::Categories => categories(&catalog, json)?,

        Command::Wizard { priorities, wasteful, top } => {
            wizard(&catalog, &cfg, priorities, wasteful, top, json)?;
        }

        Command::Best { id } => best(&catalog, &id, json)?,

        Command::Compare { amount, unit } => {
            let dollars = parse_amount(&amount)?;
            let unit = catalog.require_unit(&unit)?;
            let result = calculate_comparison(dollars, unit)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{} = {}", format_currency(dollars), result.formatted);
            }
        }

        Command::Tree { root, tier } => {
            for line in tree_lines(&catalog, root.as_deref(), tier)? {
                println!("{line}");
            }
        }

        Command::Validate => validate(&catalog, json)?,

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => {
                println!("# {}", config::config_path()?.display());
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
        },
    }

    Ok(())
}

fn categories_json(catalog: &Catalog) -> serde_json::Value {
    let mapping = builtin_mapping();
    serde_json::json!({
        "priority": priority_definitions()
            .into_iter()
            .map(|d| {
                let unit_category = d
                    .id
                    .parse::<PriorityCategory>()
                    .ok()
                    .and_then(|c| mapping.unit_category(c).map(str::to_string));
                serde_json::json!({ "definition": d, "unitCategory": unit_category })
            })
            .collect::<Vec<_>>(),
        "wasteful": wasteful_definitions()
            .into_iter()
            .map(|d| {
                let total = d
                    .id
                    .parse::<WastefulCategory>()
                    .map(|c| category_budget_total(catalog, &mapping, c))
                    .unwrap_or(0.0);
                serde_json::json!({ "definition": d, "total": total })
            })
            .collect::<Vec<_>>(),
    })
}

fn categories(catalog: &Catalog, json: bool) -> Result<()> {
    let out = categories_json(catalog);
    if json {
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("## Priorities\n");
    for p in out["priority"].as_array().into_iter().flatten() {
        let d = &p["definition"];
        println!(
            "{} {:<16} {:<24} units: {}",
            d["icon"].as_str().unwrap_or_default(),
            d["id"].as_str().unwrap_or_default(),
            d["name"].as_str().unwrap_or_default(),
            p["unitCategory"].as_str().unwrap_or_default()
        );
    }

    println!("\n## Wasteful\n");
    for w in out["wasteful"].as_array().into_iter().flatten() {
        let d = &w["definition"];
        println!(
            "{} {:<24} {:<26} {}",
            d["icon"].as_str().unwrap_or_default(),
            d["id"].as_str().unwrap_or_default(),
            d["name"].as_str().unwrap_or_default(),
            format_currency(w["total"].as_f64().unwrap_or(0.0))
        );
    }
    Ok(())
}

/// Pick the top priority for a wizard run. It must be one of `priorities`:
/// an explicit `--top` outside them is an error, a configured one outside
/// them is ignored in favour of the first priority.
fn resolve_top_priority(
    explicit: Option<PriorityCategory>,
    configured: Option<&str>,
    priorities: &[PriorityCategory],
) -> Result<PriorityCategory> {
    let Some(first) = priorities.first().copied() else {
        bail!("no priorities selected (pass --priority <category>)");
    };

    if let Some(top) = explicit {
        if !priorities.contains(&top) {
            bail!("--top {top} is not one of the selected priorities");
        }
        return Ok(top);
    }

    if let Some(s) = configured {
        let top = s
            .parse::<PriorityCategory>()
            .context("config [wizard] top_priority")?;
        if priorities.contains(&top) {
            return Ok(top);
        }
        tracing::debug!(configured = %top, fallback = %first, "configured top priority not selected");
    }

    Ok(first)
}

fn wizard(
    catalog: &Catalog,
    cfg: &Config,
    mut priorities: Vec<PriorityCategory>,
    mut wasteful: Vec<WastefulCategory>,
    top: Option<PriorityCategory>,
    json: bool,
) -> Result<()> {
    if priorities.is_empty() {
        priorities = cfg
            .wizard
            .priorities
            .iter()
            .map(|s| s.parse::<PriorityCategory>())
            .collect::<Result<Vec<_>, _>>()
            .context("config [wizard] priorities")?;
    }
    if wasteful.is_empty() {
        wasteful = cfg
            .wizard
            .wasteful
            .iter()
            .map(|s| s.parse::<WastefulCategory>())
            .collect::<Result<Vec<_>, _>>()
            .context("config [wizard] wasteful")?;
    }

    let top = resolve_top_priority(top, cfg.wizard.top_priority.as_deref(), &priorities)?;

    let comparisons =
        generate_wizard_comparisons(catalog, &builtin_mapping(), &priorities, &wasteful, top);

    if json {
        println!("{}", serde_json::to_string_pretty(&comparisons)?);
        return Ok(());
    }

    if comparisons.is_empty() {
        println!("No comparisons for the selected categories.");
        return Ok(());
    }

    for (i, w) in comparisons.iter().enumerate() {
        let star = if w.is_top_priority { "*" } else { " " };
        println!(
            "{}{}. {} ({} | {} vs {})",
            star,
            i + 1,
            format_comparison_headline(w),
            format_currency(w.budget_item.amount),
            w.wasteful_category,
            w.priority_category,
        );
    }
    Ok(())
}

fn best(catalog: &Catalog, id: &str, json: bool) -> Result<()> {
    let item = catalog.require_budget_item(id)?;
    let best = find_best_comparison(item, &catalog.units);

    if json {
        println!("{}", serde_json::to_string_pretty(&best)?);
        return Ok(());
    }

    match best {
        Some(b) => println!(
            "{} ({}) = {} [score {}]",
            item.name,
            format_currency(item.amount),
            b.formatted,
            b.score
        ),
        None => println!("{}: no relatable comparison", item.name),
    }
    Ok(())
}

fn validate(catalog: &Catalog, json: bool) -> Result<()> {
    let issues = builtin_mapping().validate(catalog);
    if json {
        println!("{}", serde_json::to_string_pretty(&issues)?);
    } else if issues.is_empty() {
        println!(
            "Category mapping OK ({} budget items, {} units)",
            catalog.budget_items.len(),
            catalog.units.len()
        );
    } else {
        for issue in &issues {
            println!("- {issue}");
        }
    }

    if !issues.is_empty() {
        bail!("{} mapping issue(s)", issues.len());
    }
    Ok(())
}

/// Indented hierarchy lines; a flat listing when `tier` is set.
fn tree_lines(catalog: &Catalog, root: Option<&str>, tier: Option<BudgetTier>) -> Result<Vec<String>> {
    let mut lines = Vec::new();

    if let Some(tier) = tier {
        for item in catalog.by_tier(tier) {
            lines.push(item_line(item, 0));
        }
        return Ok(lines);
    }

    let mut seen = HashSet::new();
    match root {
        Some(id) => {
            let path = catalog.breadcrumb(id)?;
            let crumbs: Vec<&str> = path.iter().map(|b| b.name.as_str()).collect();
            lines.push(crumbs.join(" > "));
            lines.push(String::new());
            let item = catalog.require_budget_item(id)?;
            push_subtree(catalog, item, 0, &mut seen, &mut lines);
        }
        None => {
            for item in catalog.roots() {
                push_subtree(catalog, item, 0, &mut seen, &mut lines);
            }
        }
    }
    Ok(lines)
}

fn item_line(item: &BudgetItem, depth: usize) -> String {
    format!(
        "{}{} {} [{}]",
        "  ".repeat(depth),
        item.name,
        format_currency(item.amount),
        item.tier.as_str()
    )
}

fn push_subtree<'a>(
    catalog: &'a Catalog,
    item: &'a BudgetItem,
    depth: usize,
    seen: &mut HashSet<&'a str>,
    lines: &mut Vec<String>,
) {
    if !seen.insert(item.id.as_str()) {
        return;
    }
    lines.push(item_line(item, depth));
    for child in catalog.children_of(&item.id) {
        push_subtree(catalog, child, depth + 1, seen, lines);
    }
}
