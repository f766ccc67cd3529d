mod build;
mod cli;
mod config;
mod graph;
mod output;
mod parser;
mod paths;
mod query;
mod resolver;
mod store;
mod walker;

use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::Parser;

use cli::{Cli, Commands};
use config::ImportGraphConfig;
use store::GraphEnvelope;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build { path, verbose, json } => {
            let config = ImportGraphConfig::load(&path);
            let outcome = build::build_graph(&path, &config, verbose)?;
            store::save(&path, &outcome.graph)
                .with_context(|| format!("failed to persist graph under {}", path.display()))?;
            output::print_build_summary(&outcome.stats, json)?;
        }
        Commands::Expand { path, seeds, json } => {
            let envelope = load_graph(&path)?;
            let expanded: Vec<String> = query::expand::expand_seeds(&envelope.graph, &seeds)
                .into_iter()
                .collect();
            output::print_file_list(&expanded, json)?;
        }
        Commands::Deps { path, file, json } => {
            let envelope = load_graph(&path)?;
            let file = paths::normalize(&file);
            if !envelope.graph.contains_file(&file) {
                bail!("{file} is not in the graph; was it discovered during build?");
            }
            let callees = envelope.graph.callees(&file);
            let callers = envelope.graph.callers(&file);
            if json {
                let value = serde_json::json!({
                    "file": file,
                    "imports": callees,
                    "imported_by": callers,
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!("{file}");
                println!("  imports ({}):", callees.len());
                for callee in &callees {
                    println!("    {callee}");
                }
                println!("  imported by ({}):", callers.len());
                for caller in &callers {
                    println!("    {caller}");
                }
            }
        }
        Commands::Stats { path, json } => {
            let envelope = load_graph(&path)?;
            let stats = query::stats::GraphStats::compute(&envelope.graph);
            query::stats::print_graph_stats(&stats, json)?;
        }
    }

    Ok(())
}

/// Load the persisted graph for a project, or fail with a hint to build.
fn load_graph(path: &Path) -> Result<GraphEnvelope> {
    match store::load(path) {
        Some(envelope) => Ok(envelope),
        None => bail!(
            "no dependency graph found under {}; run `import-graph build {}` first",
            path.display(),
            path.display()
        ),
    }
}
