use clap::Parser;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use anirec_features::load_and_process;
use anirec_recommend::{
    find_closest_titles, recommend, Recommendation, DEFAULT_CUTOFF, DEFAULT_SUGGESTIONS,
};

/// Content-based anime recommendations over a CSV dataset
#[derive(Parser, Debug)]
#[command(name = "anirec")]
#[command(about = "Content-based anime recommender", long_about = None)]
struct Args {
    /// Title to find similar anime for
    query: String,

    /// Path to the dataset CSV (columns: name, genre, type, episodes, rating)
    #[arg(short, long, default_value = "anime.csv")]
    data: PathBuf,

    /// Number of recommendations to return
    #[arg(short = 'n', long, default_value_t = 5)]
    top_n: usize,

    /// Print the result as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Log level
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let (table, matrix) = load_and_process(&args.data)?;
    info!(rows = table.len(), features = matrix.ncols(), "snapshot built");

    let result = recommend(&args.query, &table, &matrix, args.top_n);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    match result {
        Recommendation::Ranked(entries) => {
            println!("Recommendations for \"{}\":", args.query);
            for (rank, entry) in entries.iter().enumerate() {
                println!(
                    "{:>2}. {}  [{}] {} episode(s), rated {:.2}  (similarity {:.3})",
                    rank + 1,
                    entry.name,
                    entry.kind,
                    entry.episodes,
                    entry.rating,
                    entry.similarity,
                );
                if !entry.genres.is_empty() {
                    println!("      {}", entry.genres.join(", "));
                }
            }
        }
        Recommendation::NotFound { query } => {
            println!("{query} was not found.");
            let suggestions =
                find_closest_titles(&query, table.names(), DEFAULT_SUGGESTIONS, DEFAULT_CUTOFF);
            if !suggestions.is_empty() {
                println!("Did you mean:");
                for suggestion in suggestions {
                    println!("  - {suggestion}");
                }
            }
        }
    }

    Ok(())
}
