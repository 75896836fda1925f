// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the kinship command-line interface.
//!
//! Three subcommands: `related` to look up one post, `build` to write related
//! lists for a whole site, and `inspect` to summarize a catalog. `--limit` and
//! `--mode` override the manifest's defaults.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "kinship",
    about = "Related-content ranking by tag and category similarity",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the posts most related to one catalog entry
    Related {
        /// Catalog directory containing manifest.json and document files
        #[arg(short, long)]
        input: String,

        /// Id of the reference post
        id: String,

        /// Maximum number of related posts (default: manifest, then 3)
        #[arg(short, long, allow_negative_numbers = true)]
        limit: Option<i64>,

        /// Ranking mode: tag, category, or mixed (default: manifest, then mixed)
        #[arg(short, long)]
        mode: Option<String>,

        /// Print the result as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Rank every post and write related.json
    Build {
        /// Catalog directory containing manifest.json and document files
        #[arg(short, long)]
        input: String,

        /// Output directory for related.json
        #[arg(short, long)]
        output: String,

        /// Maximum number of related posts per entry
        #[arg(short, long, allow_negative_numbers = true)]
        limit: Option<i64>,

        /// Ranking mode: tag, category, or mixed
        #[arg(short, long)]
        mode: Option<String>,
    },

    /// Summarize a catalog: categories, tags, date range
    Inspect {
        /// Catalog directory containing manifest.json and document files
        #[arg(short, long)]
        input: String,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}
