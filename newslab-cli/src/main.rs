//! NewsLab CLI — run the sentiment/return analysis from the shell.
//!
//! Commands:
//! - `run` — full pipeline over news + price CSVs, writes a JSON report
//!   and prints the Markdown summary
//! - `eda` — text analytics only (no price file needed), prints JSON

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use newslab_core::data::load_news_csv;
use newslab_core::text::{
    daily_article_counts, domain_breakdown, headline_length_stats, hour_histogram,
    publisher_activity, rolling_publisher_mix, top_phrases, TfidfParams,
};
use newslab_runner::{export_json, render_markdown, run_analysis, AnalysisConfig};

#[derive(Parser)]
#[command(
    name = "newslab",
    about = "NewsLab CLI — financial news sentiment vs price movement"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full analysis pipeline and write a JSON report.
    Run {
        /// Path to a TOML config file. Flags below override its values.
        #[arg(long)]
        config: Option<PathBuf>,

        /// News CSV path.
        #[arg(long)]
        news: Option<PathBuf>,

        /// Price CSV path.
        #[arg(long)]
        prices: Option<PathBuf>,

        /// Moving average window.
        #[arg(long)]
        ma_window: Option<usize>,

        /// Shift: correlate day-d sentiment with the day-(d+N) return.
        #[arg(long)]
        shift: Option<i64>,

        /// Output directory for the report JSON.
        #[arg(long, default_value = "reports")]
        out: PathBuf,
    },
    /// Text analytics only: headline stats, publishers, phrases.
    Eda {
        /// News CSV path.
        #[arg(long)]
        news: PathBuf,

        /// How many ranked phrases to print.
        #[arg(long, default_value_t = 20)]
        top_k: usize,

        /// Rolling window (active days) for the publisher mix.
        #[arg(long, default_value_t = 30)]
        mix_window: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            news,
            prices,
            ma_window,
            shift,
            out,
        } => cmd_run(config, news, prices, ma_window, shift, out),
        Commands::Eda {
            news,
            top_k,
            mix_window,
        } => cmd_eda(news, top_k, mix_window),
    }
}

fn cmd_run(
    config_path: Option<PathBuf>,
    news: Option<PathBuf>,
    prices: Option<PathBuf>,
    ma_window: Option<usize>,
    shift: Option<i64>,
    out: PathBuf,
) -> Result<()> {
    let mut config = match config_path {
        Some(path) => AnalysisConfig::from_toml_path(&path)?,
        None => AnalysisConfig::default(),
    };
    if let Some(news) = news {
        config.news_path = news;
    }
    if let Some(prices) = prices {
        config.prices_path = prices;
    }
    if let Some(window) = ma_window {
        config.ma_window = window;
    }
    if let Some(shift) = shift {
        config.sentiment_shift_days = shift;
    }

    let report = run_analysis(&config)?;

    std::fs::create_dir_all(&out)
        .with_context(|| format!("failed to create output dir {}", out.display()))?;
    let path = out.join(format!("newslab_{}.json", &report.run_id[..8]));
    std::fs::write(&path, export_json(&report)?)
        .with_context(|| format!("failed to write report to {}", path.display()))?;

    println!("{}", render_markdown(&report));
    println!("Report written to {}", path.display());
    Ok(())
}

fn cmd_eda(news: PathBuf, top_k: usize, mix_window: usize) -> Result<()> {
    let articles = load_news_csv(&news)?;
    let headlines: Vec<&str> = articles.iter().map(|a| a.headline.as_str()).collect();

    let summary = serde_json::json!({
        "news_rows": articles.len(),
        "headline_stats": headline_length_stats(&articles),
        "top_publishers": publisher_activity(&articles, 10),
        "top_domains": domain_breakdown(&articles, 10),
        "daily_articles": daily_article_counts(&articles),
        "publishing_hours": hour_histogram(&articles),
        "publisher_mix": rolling_publisher_mix(&articles, mix_window),
        "top_phrases": top_phrases(&headlines, &TfidfParams {
            top_k,
            ..TfidfParams::default()
        }),
    });

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
