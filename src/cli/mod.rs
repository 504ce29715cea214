// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the toolshelf command-line interface.
//!
//! Every subcommand reads one catalog snapshot and prints it. Data comes from
//! a static manifest directory, or from a hosted-store row export with the
//! directory as fallback when `--rows` is given. `--json` swaps the tables
//! for machine-readable output in the same order.

pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "toolshelf",
    about = "Search and rank an AI tool directory",
    version
)]
pub struct Cli {
    /// Catalog directory containing manifest.json
    #[arg(long, global = true, env = "TOOLSHELF_DATA", default_value = "data/catalog")]
    pub data: PathBuf,

    /// Hosted-store row export to use as the primary source
    ///
    /// When the export cannot be read, the catalog directory is used instead.
    /// Editorial pages always come from the catalog directory.
    #[arg(long, global = true, env = "TOOLSHELF_ROWS")]
    pub rows: Option<PathBuf>,

    /// Emit JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank listings against a query
    Search {
        /// Search query (may be empty)
        query: String,

        /// Only show hits in this category (agent, mcp-server, ...)
        #[arg(short, long)]
        category: Option<String>,

        /// Maximum number of hits to print
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// List listings in sponsorship order
    List {
        /// Only list this category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List featured listings
    Featured,

    /// Show one listing
    Show {
        /// Listing slug
        slug: String,
    },

    /// Show a head-to-head comparison
    Compare {
        /// Comparison slug (e.g. langchain-vs-llamaindex)
        slug: String,
    },

    /// Show a curated category page
    Category {
        /// Category page slug
        slug: String,
    },

    /// Show a "best of" roundup merging several category pages
    Best {
        /// Roundup slug (e.g. best-ai-agent-frameworks)
        slug: String,
    },

    /// Show the MCP servers that work with a platform
    Platform {
        /// Platform slug
        slug: String,
    },

    /// Print catalog statistics
    Stats,

    /// Validate a submission file and print the draft listing
    Validate {
        /// Path to a submission JSON file
        file: PathBuf,
    },
}
