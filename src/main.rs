// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::fs;
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};
use toolshelf::{
    format_stars, Catalog, CatalogError, Category, FallbackSource, Listing, ListingContext,
    ListingSource, ManifestSource, Query, ResolvedComparison, RowExportSource, SearchResults, Submission,
};
use tracing_subscriber::EnvFilter;

mod cli;
use cli::display::*;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}", error_line(&format!("{:#}", e)));
        process::exit(1);
    }
}

/// Logs go to stderr so `--json` output stays clean.
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "toolshelf=debug"
    } else {
        "toolshelf=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    if let Commands::Validate { file } = &cli.command {
        return run_validate(file, cli.json);
    }

    let catalog = load_catalog(&cli)?;
    let json = cli.json;

    match cli.command {
        Commands::Search {
            query,
            category,
            limit,
        } => {
            let query = Query::from_params(Some(query.as_str()), category.as_deref())?;
            let mut results = catalog.search(&query);
            results.hits.truncate(limit);
            if json {
                print_json(&results)
            } else {
                print_search(&results);
                Ok(())
            }
        }
        Commands::List { category } => {
            let listings = match category {
                Some(category) => {
                    let category: Category = category.parse()?;
                    catalog.listings_in_category(category)
                }
                None => catalog.all_by_sponsorship(),
            };
            emit_listings(json, "LISTINGS", &listings)
        }
        Commands::Featured => emit_listings(json, "FEATURED", &catalog.featured()),
        Commands::Show { slug } => {
            let context = catalog.listing_context(&slug)?;
            if json {
                print_json(&context)
            } else {
                print_listing(&context);
                Ok(())
            }
        }
        Commands::Compare { slug } => {
            let comparison = catalog
                .comparison(&slug)
                .ok_or_else(|| CatalogError::NotFound(format!("comparison '{}'", slug)))?;
            if json {
                print_json(&comparison)
            } else {
                print_comparison(&comparison);
                Ok(())
            }
        }
        Commands::Category { slug } => {
            let not_found = || CatalogError::NotFound(format!("category page '{}'", slug));
            let page = catalog.category_page(&slug).ok_or_else(not_found)?;
            let listings = catalog.category_listings(&slug).ok_or_else(not_found)?;
            if json {
                print_json(&serde_json::json!({ "page": page, "listings": listings }))
            } else {
                print_page_header(&page.title, &page.description);
                emit_listings(false, "TOOLS", &listings)
            }
        }
        Commands::Best { slug } => {
            let not_found = || CatalogError::NotFound(format!("roundup '{}'", slug));
            let listicle = catalog.listicle(&slug).ok_or_else(not_found)?;
            let listings = catalog.listicle_listings(&slug).ok_or_else(not_found)?;
            if json {
                print_json(&serde_json::json!({ "listicle": listicle, "listings": listings }))
            } else {
                print_page_header(&listicle.title, &listicle.description);
                emit_listings(false, "TOOLS", &listings)?;
                if let Some(section) = &listicle.custom_section {
                    print_page_header(&section.title, &section.body);
                }
                Ok(())
            }
        }
        Commands::Platform { slug } => {
            let not_found = || CatalogError::NotFound(format!("platform '{}'", slug));
            let platform = catalog.platform(&slug).ok_or_else(not_found)?;
            let listings = catalog.platform_listings(&slug).ok_or_else(not_found)?;
            if json {
                print_json(&serde_json::json!({ "platform": platform, "listings": listings }))
            } else {
                print_page_header(&platform.name, &platform.description);
                emit_listings(false, "MCP SERVERS", &listings)
            }
        }
        Commands::Stats => {
            if json {
                print_json(&catalog.stats())
            } else {
                print_stats(&catalog);
                Ok(())
            }
        }
        Commands::Validate { .. } => Ok(()),
    }
}

// ============================================================================
// Loading
// ============================================================================

fn load_catalog(cli: &Cli) -> Result<Catalog> {
    let manifest = ManifestSource::new(cli.data.clone());
    let loaded = match &cli.rows {
        Some(rows) => {
            let primary = RowExportSource::new(rows.clone()).with_pages(cli.data.clone());
            FallbackSource::new(primary, manifest).load()
        }
        None => manifest.load(),
    };
    loaded.with_context(|| format!("failed to load catalog from {}", cli.data.display()))
}

fn run_validate(file: &std::path::Path, json: bool) -> Result<()> {
    let content = fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let submission: Submission = serde_json::from_str(&content)
        .with_context(|| format!("invalid submission JSON in {}", file.display()))?;

    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
        .to_string();
    let draft = submission
        .into_draft(&suffix)
        .context("submission rejected")?;

    if json {
        return print_json(&draft);
    }
    println!(
        "{} draft '{}' ({}) pending review",
        themed(GREEN, &[BOLD], "ok:"),
        draft.slug,
        draft.category
    );
    Ok(())
}

// ============================================================================
// Output
// ============================================================================

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn emit_listings(json: bool, label: &str, listings: &[&Listing]) -> Result<()> {
    if json {
        return print_json(listings);
    }
    section_top(label);
    if listings.is_empty() {
        row(&hint(" no listings"));
    }
    for listing in listings {
        row(&listing_line(listing, None));
    }
    section_bot();
    Ok(())
}

/// One table line: score, featured mark, name, category, badge, blurb.
fn listing_line(listing: &Listing, score: Option<u32>) -> String {
    let score = score
        .map(|s| format!("{} ", score_value(s)))
        .unwrap_or_default();
    let head = format!(
        " {}{} {} {} ",
        score,
        featured_mark(listing.featured),
        pad_right(&strong(&truncate(&listing.name, 20)), 20),
        pad_right(&category_label(listing.category), 14),
    );
    let badge = tier_badge(listing.sponsored_tier);
    let badge = if badge.is_empty() {
        badge
    } else {
        format!("{} ", badge)
    };
    let room = BOX_WIDTH.saturating_sub(visible_len(&head) + visible_len(&badge) + 1);
    format!(
        "{}{}{}",
        head,
        badge,
        hint(&truncate(&listing.short_description, room))
    )
}

fn print_search(results: &SearchResults<'_>) {
    let label = if results.query.is_empty() {
        "ALL LISTINGS".to_string()
    } else {
        format!("RESULTS FOR \"{}\"", truncate(results.query.text.trim(), 40))
    };
    section_top(&label);
    if results.hits.is_empty() {
        row(&hint(" no matches"));
    }
    for hit in &results.hits {
        row(&listing_line(hit.listing, Some(hit.score)));
    }

    section_mid("CATEGORIES");
    let chips: Vec<String> = results
        .facets
        .iter()
        .map(|facet| format!("{} {}", category_label(facet.category), facet.count))
        .collect();
    row(&format!(" {} total  {}", results.total, chips.join("  ")));
    section_bot();
}

fn print_page_header(title: &str, description: &str) {
    title_box(title);
    for line in wrap(description, BOX_WIDTH - 2) {
        println!(" {}", line);
    }
}

fn print_listing(context: &ListingContext<'_>) {
    let listing = context.listing;
    title_box(&listing.name);

    section_top("OVERVIEW");
    row(&format!(
        " {}  {}  {}",
        category_label(listing.category),
        tier_badge(listing.sponsored_tier),
        featured_mark(listing.featured)
    ));
    for line in wrap(&listing.short_description, BOX_WIDTH - 2) {
        row(&format!(" {}", line));
    }
    row("");
    for line in wrap(&listing.description, BOX_WIDTH - 2) {
        row(&format!(" {}", hint(&line)));
    }

    section_mid("DETAILS");
    let pricing = match &listing.pricing {
        Some(text) => format!("{} ({})", pricing_label(listing.pricing_model), text),
        None => pricing_label(listing.pricing_model).to_string(),
    };
    detail("Pricing", &pricing);
    detail("Setup", setup_label(listing.setup_complexity));
    detail("Maturity", maturity_label(listing.maturity));
    if let Some(stars) = listing.github_stars {
        detail("Stars", &format_stars(stars));
    }
    detail("Website", &listing.website_url);
    if let Some(url) = &listing.github_url {
        detail("GitHub", url);
    }
    if let Some(url) = &listing.docs_url {
        detail("Docs", url);
    }
    if !listing.last_updated.is_empty() {
        detail("Updated", &listing.last_updated);
    }

    for (label, tags) in [
        ("SUBCATEGORIES", &listing.subcategories),
        ("USE CASES", &listing.use_cases),
        ("INTEGRATIONS", &listing.integrations),
    ] {
        if tags.is_empty() {
            continue;
        }
        section_mid(label);
        for line in wrap(&tags.join(", "), BOX_WIDTH - 2) {
            row(&format!(" {}", line));
        }
    }

    if !listing.pros.is_empty() {
        section_mid("PROS");
        for pro in &listing.pros {
            row(&format!(" {} {}", themed(GREEN, &[], "+"), truncate(pro, BOX_WIDTH - 4)));
        }
    }
    if !listing.cons.is_empty() {
        section_mid("CONS");
        for con in &listing.cons {
            row(&format!(" {} {}", themed(RED, &[], "-"), truncate(con, BOX_WIDTH - 4)));
        }
    }

    if !context.comparisons.is_empty() {
        section_mid("COMPARISONS");
        for page in &context.comparisons {
            row(&format!(" {}", page.slug));
        }
    }
    if !context.category_pages.is_empty() {
        section_mid("FEATURED IN");
        for page in &context.category_pages {
            row(&format!(" {} {}", pad_right(&page.title, 36), hint(&page.slug)));
        }
    }
    if !context.similar.is_empty() {
        section_mid("SIMILAR");
        for similar in &context.similar {
            row(&listing_line(similar, None));
        }
    }
    section_bot();
}

fn detail(label: &str, value: &str) {
    row(&format!(
        " {} {}",
        pad_right(&hint(label), 10),
        truncate(value, BOX_WIDTH - 13)
    ));
}

fn print_comparison(comparison: &ResolvedComparison<'_>) {
    let a = comparison.tool_a;
    let b = comparison.tool_b;
    title_box(&format!("{} vs {}", a.name, b.name));

    section_top("FEATURES");
    row(&format!(
        " {} {} {}",
        pad_right("", 18),
        pad_right(&strong(&truncate(&a.name, 29)), 30),
        strong(&truncate(&b.name, 29))
    ));
    for feature in &comparison.page.features {
        row(&format!(
            " {} {} {}",
            pad_right(&hint(&truncate(&feature.name, 18)), 18),
            pad_right(&truncate(&feature.tool_a, 29), 30),
            truncate(&feature.tool_b, 29)
        ));
    }

    section_mid("VERDICT");
    for line in wrap(&comparison.page.verdict, BOX_WIDTH - 2) {
        row(&format!(" {}", line));
    }
    section_bot();
}

fn print_stats(catalog: &Catalog) {
    let stats = catalog.stats();
    section_top("CATALOG");
    row(&format!(" {} listings", strong(&stats.total_listings.to_string())));
    row(&format!(" {} category pages", stats.total_categories));
    row(&format!(" {} comparisons", stats.total_comparisons));
    row(&format!(" {} roundups", stats.total_listicles));
    row(&format!(" {} MCP servers", stats.total_mcp_servers));
    row(&format!(
        " {} sponsored, {} featured",
        stats.sponsored, stats.featured
    ));
    section_mid("BY CATEGORY");
    for (category, count) in &stats.per_category {
        row(&format!(
            " {} {}",
            pad_right(&category_label(*category), 16),
            count
        ));
    }
    section_bot();
}
