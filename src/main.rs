use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use recipe_sift::{parse_markup, parse_payload, HtmlPassthrough, MarkupConverter, ParseOutcome};
use tracing::warn;

#[derive(Parser)]
#[command(name = "recipe_sift", about = "Heuristic recipe extractor for converted documents")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract a recipe from a single document
    Parse {
        file: PathBuf,
        /// Print the full outcome record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Extract recipes from many documents and print a summary table
    Batch { files: Vec<PathBuf> },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Parse { file, json } => {
            let bytes = std::fs::read(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let outcome = parse_payload(&HtmlPassthrough, &bytes).await;
            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                print_outcome(&file, &outcome);
            }
            Ok(())
        }
        Commands::Batch { files } => run_batch(files).await,
    }
}

async fn run_batch(files: Vec<PathBuf>) -> anyhow::Result<()> {
    use indicatif::{ProgressBar, ProgressStyle};
    use rayon::prelude::*;

    if files.is_empty() {
        println!("No input files.");
        return Ok(());
    }

    let t0 = Instant::now();

    // Phase 1: conversion (the async boundary), failures kept as rows
    let mut converted = Vec::with_capacity(files.len());
    for file in files {
        let bytes = std::fs::read(&file)
            .with_context(|| format!("reading {}", file.display()))?;
        let result = HtmlPassthrough.convert(&bytes).await;
        if let Err(e) = &result {
            warn!("Conversion failed for {}: {}", file.display(), e);
        }
        converted.push((file, result));
    }

    // Phase 2: parse in parallel
    let pb = ProgressBar::new(converted.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} ({per_sec})")?
            .progress_chars("=> "),
    );

    let outcomes: Vec<(PathBuf, ParseOutcome)> = converted
        .into_par_iter()
        .map(|(file, result)| {
            let outcome = match result {
                Ok(markup) => parse_markup(markup),
                Err(e) => ParseOutcome::failure(e.to_string()),
            };
            pb.inc(1);
            (file, outcome)
        })
        .collect();
    pb.finish_and_clear();

    println!(
        "{:>3} | {:<32} | {:>4} | {:>4} | {:>5}",
        "#", "Title", "Conf", "Ingr", "Steps"
    );
    println!("{}", "-".repeat(62));

    let mut ok = 0usize;
    let mut failed = 0usize;
    for (i, (file, outcome)) in outcomes.iter().enumerate() {
        match &outcome.recipe {
            Some(recipe) => {
                ok += 1;
                println!(
                    "{:>3} | {:<32} | {:>4} | {:>4} | {:>5}",
                    i + 1,
                    truncate(&recipe.title, 32),
                    outcome.confidence.overall,
                    recipe.ingredients.len(),
                    recipe.instructions.len()
                );
            }
            None => {
                failed += 1;
                println!(
                    "{:>3} | {:<32} | {:>4} | {:>4} | {:>5}",
                    i + 1,
                    truncate(&file.display().to_string(), 32),
                    "-",
                    "-",
                    "-"
                );
            }
        }
    }

    println!(
        "\nParsed {} documents ({} ok, {} failed) in {:.1}s",
        outcomes.len(),
        ok,
        failed,
        t0.elapsed().as_secs_f64()
    );
    Ok(())
}

fn print_outcome(file: &Path, outcome: &ParseOutcome) {
    if let Some(err) = &outcome.error {
        println!("{}: conversion failed: {}", file.display(), err);
        return;
    }
    let Some(recipe) = &outcome.recipe else {
        return;
    };

    println!("{}", recipe.title);
    println!("{}", "=".repeat(recipe.title.len().min(60)));
    if let Some(prep) = &recipe.prep_time {
        println!("Prep:   {prep}");
    }
    if let Some(cook) = &recipe.cook_time {
        println!("Cook:   {cook}");
    }
    if let Some(servings) = recipe.servings {
        println!("Serves: {servings}");
    }

    println!("\nIngredients ({}):", recipe.ingredients.len());
    for item in &recipe.ingredients {
        println!("  - {item}");
    }

    println!("\nSteps ({}):", recipe.instructions.len());
    for (i, step) in recipe.instructions.iter().enumerate() {
        println!("  {}. {}", i + 1, step);
    }

    if !recipe.notes.is_empty() {
        println!("\nNotes:\n{}", recipe.notes);
    }
    if !recipe.images.is_empty() {
        println!("\nImages: {}", recipe.images.len());
    }

    println!(
        "\nConfidence: overall {} (title {}, ingredients {}, instructions {})",
        outcome.confidence.overall,
        outcome.confidence.title,
        outcome.confidence.ingredients,
        outcome.confidence.instructions
    );
    for message in &outcome.parse_messages {
        println!("note: {message}");
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}
