//! CLI binary for wordgraph: load a dictionary, then query word-ladder paths.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use wordgraph_core::config::WordGraphConfig;
use wordgraph_core::words;
use wordgraph_nav::processor::GraphProcessor;

#[derive(Parser)]
#[command(name = "wordgraph", about = "Shortest single-edit paths between dictionary words")]
struct Cli {
    /// Project root holding .wordgraph/config.toml (defaults to current directory)
    #[arg(short, long, global = true)]
    project: Option<PathBuf>,

    /// Dictionary file, one word per line
    #[arg(short, long)]
    dict: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the shortest path between two words
    Path {
        from: String,
        to: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the shortest distance (edge count) between two words, or -1
    Distance { from: String, to: String },

    /// List the words one edit away from a word
    Neighbors { word: String },

    /// Show graph statistics
    Info,
}

fn get_project_root(cli: &Cli) -> Result<PathBuf> {
    match &cli.project {
        Some(p) => Ok(p.clone()),
        None => std::env::current_dir().context("failed to get current directory"),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let project_root = get_project_root(&cli)?;
    let config = WordGraphConfig::load(&project_root)?;
    let processor = load_processor(&cli.dict, config)?;

    match cli.command {
        Commands::Path { from, to, json } => cmd_path(&processor, &from, &to, json),
        Commands::Distance { from, to } => cmd_distance(&processor, &from, &to),
        Commands::Neighbors { word } => cmd_neighbors(&processor, &word),
        Commands::Info => cmd_info(&processor, &cli.dict),
    }
}

/// Build the graph from the dictionary and precompute all shortest paths.
fn load_processor(dict: &Path, config: WordGraphConfig) -> Result<GraphProcessor> {
    use indicatif::{ProgressBar, ProgressStyle};

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    spinner.set_message(format!("Loading {}...", dict.display()));
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));

    let mut processor = GraphProcessor::with_config(config);
    let result = processor.populate_graph(dict);
    spinner.finish_and_clear();

    let count =
        result.with_context(|| format!("failed to build word graph from {}", dict.display()))?;
    tracing::debug!("graph ready: {} words", count);
    Ok(processor)
}

/// Normalize a query word the same way dictionary words were normalized.
fn query_word(processor: &GraphProcessor, raw: &str) -> Result<String> {
    words::normalize(raw, processor.config().words.case_fold)
        .with_context(|| format!("query word '{}' is blank", raw))
}

fn cmd_path(processor: &GraphProcessor, from: &str, to: &str, json: bool) -> Result<()> {
    let from = query_word(processor, from)?;
    let to = query_word(processor, to)?;
    let path = processor.shortest_path(&from, &to)?;
    let distance = processor.shortest_distance(&from, &to)?;

    if json {
        let value = serde_json::json!({
            "from": from,
            "to": to,
            "path": path,
            "distance": distance_or_sentinel(distance),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    if path.is_empty() {
        println!("No path from {} to {}.", from, to);
    } else {
        println!("{}", path.join(" -> "));
        println!("Distance: {}", path.len() - 1);
    }
    Ok(())
}

fn cmd_distance(processor: &GraphProcessor, from: &str, to: &str) -> Result<()> {
    let from = query_word(processor, from)?;
    let to = query_word(processor, to)?;
    let distance = processor.shortest_distance(&from, &to)?;
    println!("{}", distance_or_sentinel(distance));
    Ok(())
}

fn cmd_neighbors(processor: &GraphProcessor, word: &str) -> Result<()> {
    let word = query_word(processor, word)?;
    let Some(neighbors) = processor.graph().neighbors(&word) else {
        anyhow::bail!("'{}' is not in the dictionary", word);
    };

    let mut neighbors: Vec<&String> = neighbors.collect();
    neighbors.sort();
    if neighbors.is_empty() {
        println!("{} has no neighbors.", word);
    } else {
        println!("{} ({} neighbors):", word, neighbors.len());
        for n in neighbors {
            println!("  {}", n);
        }
    }
    Ok(())
}

fn cmd_info(processor: &GraphProcessor, dict: &Path) -> Result<()> {
    let graph = processor.graph();
    let isolated = graph
        .vertices()
        .filter(|v| graph.degree(v) == Some(0))
        .count();
    let snapshot = processor.snapshot()?;

    println!("Dictionary: {}", dict.display());
    println!("Words: {}", graph.vertex_count());
    println!("Edges: {}", graph.edge_count());
    println!("Isolated words: {}", isolated);
    println!("Reachable pairs: {}", snapshot.pair_count());
    println!(
        "Precompute: {}",
        if processor.config().precompute.parallel {
            "parallel"
        } else {
            "sequential"
        }
    );
    Ok(())
}

/// Caller-facing distance: the edge count, or -1 when there is no path.
fn distance_or_sentinel(distance: Option<usize>) -> i64 {
    distance.map_or(-1, |d| d as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_path_command() {
        let cli = Cli::try_parse_from([
            "wordgraph", "--dict", "words.txt", "path", "cat", "wheat", "--json",
        ])
        .unwrap();
        assert_eq!(cli.dict, PathBuf::from("words.txt"));
        match cli.command {
            Commands::Path { from, to, json } => {
                assert_eq!(from, "cat");
                assert_eq!(to, "wheat");
                assert!(json);
            }
            _ => panic!("expected path command"),
        }
    }

    #[test]
    fn test_dict_is_required() {
        assert!(Cli::try_parse_from(["wordgraph", "info"]).is_err());
    }

    #[test]
    fn test_distance_sentinel() {
        assert_eq!(distance_or_sentinel(Some(3)), 3);
        assert_eq!(distance_or_sentinel(None), -1);
    }

    #[test]
    fn test_query_word_uses_configured_case() {
        let processor = GraphProcessor::new();
        assert_eq!(query_word(&processor, " wheat ").unwrap(), "WHEAT");
        assert!(query_word(&processor, "   ").is_err());
    }
}
