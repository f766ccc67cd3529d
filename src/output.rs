use serde::Serialize;

/// Counters accumulated over one build run. Serializes directly as the
/// `--json` output shape.
#[derive(Debug, Default, Serialize)]
pub struct BuildStats {
    pub file_count: usize,
    pub python_files: usize,
    pub js_ts_files: usize,
    pub import_count: usize,
    pub resolved_imports: usize,
    pub external_imports: usize,
    pub edge_count: usize,
    pub skipped: usize,
    pub elapsed_secs: f64,
}

/// Print the post-build summary, human-readable or JSON.
pub fn print_build_summary(stats: &BuildStats, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(stats)?);
        return Ok(());
    }

    println!(
        "Indexed {} files ({} Python, {} JS/TS) in {:.2}s",
        stats.file_count, stats.python_files, stats.js_ts_files, stats.elapsed_secs
    );
    println!(
        "  {} imports found, {} resolved to project files, {} external",
        stats.import_count, stats.resolved_imports, stats.external_imports
    );
    println!("  {} dependency edges", stats.edge_count);
    if stats.skipped > 0 {
        eprintln!("warning: {} files skipped (unreadable or unparseable)", stats.skipped);
    }
    Ok(())
}

/// Print a list of file paths, one per line or as a JSON array.
pub fn print_file_list(files: &[String], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(files)?);
        return Ok(());
    }
    for file in files {
        println!("{file}");
    }
    Ok(())
}
