// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use kinship::catalog::{load_catalog, run_build};
use kinship::{Catalog, CatalogError, CatalogStats, RankError, SimilarityResult};

mod cli;
use cli::display::{
    mode_label, pad_left, pad_right, row, score_value, section_bot, section_mid, section_top,
    themed, truncate, BOLD, CYAN, DIM, GRAY,
};
use cli::{Cli, Commands};

fn main() {
    init_tracing();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("❌ {:#}", err);
        std::process::exit(exit_code(&err));
    }
}

/// Logs go to stderr so `--json` output on stdout stays machine-readable.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "kinship=info".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(log_colors(
                    std::env::var_os("NO_COLOR").is_some(),
                    atty::is(atty::Stream::Stderr),
                )),
        )
        .init();
}

/// Same rule as the table output: no escapes under `NO_COLOR` or into a pipe.
fn log_colors(no_color: bool, stderr_is_tty: bool) -> bool {
    !no_color && stderr_is_tty
}

/// 2 for bad arguments, 1 for everything else.
fn exit_code(err: &anyhow::Error) -> i32 {
    let invalid_argument = err.downcast_ref::<RankError>().is_some()
        || matches!(err.downcast_ref::<CatalogError>(), Some(CatalogError::Rank(_)));
    if invalid_argument {
        2
    } else {
        1
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Related {
            input,
            id,
            limit,
            mode,
            json,
        } => {
            let loaded = load_catalog(Path::new(&input))
                .with_context(|| format!("loading catalog from {}", input))?;
            let options = loaded.manifest.defaults.resolve(limit, mode.as_deref())?;
            let result = loaded.catalog.related(&id, &options)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_related(&loaded.catalog, &result);
            }
        }
        Commands::Build {
            input,
            output,
            limit,
            mode,
        } => {
            let summary = run_build(Path::new(&input), Path::new(&output), limit, mode.as_deref())
                .with_context(|| format!("building related lists for {}", input))?;

            eprintln!();
            eprintln!("✅ Build complete");
            eprintln!(
                "   {} documents │ {} links │ mode {} │ limit {}",
                summary.documents, summary.links, summary.options.mode, summary.options.limit
            );
            eprintln!("   {}", summary.path.display());
        }
        Commands::Inspect { input, json } => {
            let loaded = load_catalog(Path::new(&input))
                .with_context(|| format!("loading catalog from {}", input))?;
            let stats = loaded.catalog.stats();

            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                print_stats(&input, &stats);
            }
        }
    }
    Ok(())
}

fn print_related(catalog: &Catalog, result: &SimilarityResult) {
    let reference = catalog
        .get(&result.reference_id)
        .map(|doc| doc.display_title())
        .unwrap_or(result.reference_id.as_str());

    section_top("RELATED");
    row(&format!(
        " {} {}",
        themed(CYAN, &[BOLD], &truncate(reference, 56)),
        mode_label(result.mode.as_str())
    ));
    section_mid("RESULTS");

    if result.is_empty() {
        row(&themed(GRAY, &[DIM], " no related posts"));
    }
    for (rank, scored) in result.items.iter().enumerate() {
        let title = catalog
            .get(&scored.item.id)
            .map(|doc| doc.display_title())
            .unwrap_or(scored.item.id.as_str());
        row(&format!(
            " {} {}  {}  {}",
            pad_left(&format!("{}.", rank + 1), 3),
            score_value(scored.score),
            pad_right(&truncate(title, 40), 40),
            themed(GRAY, &[], &scored.item.published_at.format("%Y-%m-%d").to_string())
        ));
    }
    section_bot();
}

fn print_stats(input: &str, stats: &CatalogStats) {
    section_top("CATALOG");
    row(&format!(" {}", themed(CYAN, &[BOLD], &truncate(input, 60))));
    row(&format!(
        " {} items │ {} categories │ {} tags │ {} untagged",
        stats.items,
        stats.categories.len(),
        stats.tags.len(),
        stats.untagged
    ));
    if let (Some(oldest), Some(newest)) = (stats.oldest, stats.newest) {
        row(&format!(
            " {} → {}",
            oldest.format("%Y-%m-%d"),
            newest.format("%Y-%m-%d")
        ));
    }

    section_mid("CATEGORIES");
    for (category, count) in &stats.categories {
        row(&format!(" {} {}", pad_right(&truncate(category, 40), 40), pad_left(&count.to_string(), 6)));
    }

    section_mid("TOP TAGS");
    let mut tags: Vec<(&String, &usize)> = stats.tags.iter().collect();
    tags.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    for (tag, count) in tags.into_iter().take(15) {
        row(&format!(" {} {}", pad_right(&truncate(tag, 40), 40), pad_left(&count.to_string(), 6)));
    }
    section_bot();
}
