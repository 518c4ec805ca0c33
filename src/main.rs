#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use std::fs;
use std::process;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use life_table::batch::{load_subscribers, render_batch};
use life_table::calendar::LifeStats;
use life_table::config::{load_config, AppConfig};
use life_table::i18n::Catalog;
use life_table::render::{FontSet, LifeTableRenderer, RenderRequest};
use life_table::{birthdate, summary};

use crate::cli::{BatchArgs, CatalogArgs, Cli, Command, InfoArgs, RenderArgs};

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.debug {
        tracing::Level::DEBUG
    } else if cli.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };

    // Logs go to stderr so stdout stays clean for captions and JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(log_level.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::debug!("life-table version {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(cli) {
        tracing::error!("{:#}", e);
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command {
        Command::Render(args) => render(config, args),
        Command::Info(args) => info(config, args),
        Command::Batch(args) => batch(config, args),
    }
}

fn render(mut config: AppConfig, args: RenderArgs) -> Result<()> {
    if let Some(font) = args.font {
        config.font_path = font;
    }
    if let Some(footer) = args.footer {
        config.footer = footer;
    }
    let today = reference_day(&args.catalog)?;
    let catalog = load_catalog(&mut config, &args.catalog)?;
    let lang = args.lang.unwrap_or_else(|| config.default_lang.clone());
    let birthdate = birthdate::parse(&args.birthdate, today)?;
    let mut rng = make_rng(args.seed);

    let renderer =
        LifeTableRenderer::new(&catalog, FontSet::load(&config.font_path)).with_footer(config.footer);
    let request = RenderRequest::new(birthdate, lang.as_str()).as_of(today);
    let image = renderer.render(&request, &mut rng)?;

    fs::write(&args.output, &image.png)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    tracing::info!(
        "Wrote {}x{} life table to {}",
        image.width,
        image.height,
        args.output.display()
    );

    if args.caption {
        let stats = LifeStats::compute(birthdate, today);
        println!("{}", summary::table_caption(&stats, &lang, &catalog, &mut rng));
    } else {
        println!("{}", args.output.display());
    }
    Ok(())
}

fn info(mut config: AppConfig, args: InfoArgs) -> Result<()> {
    let today = reference_day(&args.catalog)?;
    let birthdate = birthdate::parse(&args.birthdate, today)?;
    let stats = LifeStats::compute(birthdate, today);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    let catalog = load_catalog(&mut config, &args.catalog)?;
    let lang = args.lang.unwrap_or_else(|| config.default_lang.clone());
    let mut rng = make_rng(args.seed);

    println!("{}", summary::birthday_saved_message(birthdate, &lang, &catalog));
    println!();
    println!("{}", summary::table_caption(&stats, &lang, &catalog, &mut rng));
    Ok(())
}

fn batch(mut config: AppConfig, args: BatchArgs) -> Result<()> {
    if let Some(font) = args.font {
        config.font_path = font;
    }
    if let Some(dir) = args.output_dir {
        config.output_dir = dir;
    }
    let today = reference_day(&args.catalog)?;
    let catalog = load_catalog(&mut config, &args.catalog)?;
    let subscribers = load_subscribers(&args.subscribers)?;

    let renderer =
        LifeTableRenderer::new(&catalog, FontSet::load(&config.font_path)).with_footer(config.footer);
    let report = render_batch(&renderer, &subscribers, today, &config.output_dir, args.seed)?;

    println!("{}/{}", report.successful, report.total);
    if !report.failed.is_empty() {
        tracing::warn!("Failed subscribers: {:?}", report.failed);
    }
    Ok(())
}

fn load_catalog(config: &mut AppConfig, args: &CatalogArgs) -> Result<Catalog> {
    if let Some(locales) = &args.locales {
        config.locales_path.clone_from(locales);
    }
    if let Some(quotes) = &args.quotes {
        config.quotes_path.clone_from(quotes);
    }
    Catalog::load(&config.locales_path, &config.quotes_path).context("Failed to load string tables")
}

fn reference_day(args: &CatalogArgs) -> Result<NaiveDate> {
    match &args.today {
        Some(day) => NaiveDate::parse_from_str(day, "%Y-%m-%d")
            .with_context(|| format!("Invalid --today '{day}', expected YYYY-MM-DD")),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
