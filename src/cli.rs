use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// A static file-level import graph for Python and TypeScript/JavaScript codebases.
///
/// import-graph scans a project once, resolves import statements to project
/// files, and persists a dependency graph that later queries read without
/// touching source files again.
#[derive(Parser, Debug)]
#[command(
    name = "import-graph",
    version,
    about,
    long_about = None,
    propagate_version = true,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a project, resolve imports, and persist the dependency graph.
    ///
    /// Replaces any previously persisted graph for the project wholesale.
    Build {
        /// Path to the project root to scan.
        path: PathBuf,

        /// Print discovered files and resolved imports during the build.
        #[arg(short, long)]
        verbose: bool,

        /// Output the build summary as JSON instead of human-readable text.
        #[arg(long)]
        json: bool,
    },

    /// Expand a set of seed files by one dependency hop.
    ///
    /// Prints the seeds plus every file each seed directly imports or is
    /// directly imported by. Requires a previously built graph.
    Expand {
        /// Path to the project root (where the graph was built).
        path: PathBuf,

        /// Seed file paths, relative to the project root.
        #[arg(required = true)]
        seeds: Vec<String>,

        /// Output the expanded set as a JSON array.
        #[arg(long)]
        json: bool,
    },

    /// Show one file's direct dependencies and dependents.
    Deps {
        /// Path to the project root (where the graph was built).
        path: PathBuf,

        /// File path, relative to the project root.
        file: String,

        /// Output as JSON instead of human-readable text.
        #[arg(long)]
        json: bool,
    },

    /// Summary of the persisted graph: file counts by language, edges, isolated files.
    Stats {
        /// Path to the project root (where the graph was built).
        path: PathBuf,

        /// Output as JSON instead of human-readable text.
        #[arg(long)]
        json: bool,
    },
}
