//! Report export — JSON, CSV, and Markdown.
//!
//! All persisted reports carry a `schema_version` field; unknown versions
//! are rejected on load.

use anyhow::{bail, Context, Result};

use newslab_core::correlate::AlignedRow;

use crate::report::{AnalysisReport, SCHEMA_VERSION};

// ─── JSON export ────────────────────────────────────────────────────

/// Serialize an `AnalysisReport` to pretty JSON.
pub fn export_json(report: &AnalysisReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("failed to serialize AnalysisReport to JSON")
}

/// Deserialize an `AnalysisReport` from JSON, rejecting newer schema versions.
pub fn import_json(json: &str) -> Result<AnalysisReport> {
    let report: AnalysisReport =
        serde_json::from_str(json).context("failed to deserialize AnalysisReport from JSON")?;
    if report.schema_version > SCHEMA_VERSION {
        bail!(
            "unsupported schema version {} (max supported: {})",
            report.schema_version,
            SCHEMA_VERSION
        );
    }
    Ok(report)
}

// ─── CSV export ─────────────────────────────────────────────────────

/// Export the aligned daily rows as CSV.
///
/// Columns: date, ticker, close, daily_return, avg_polarity,
/// avg_subjectivity, article_count. Missing values are empty fields.
pub fn export_aligned_csv(rows: &[AlignedRow]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "date",
        "ticker",
        "close",
        "daily_return",
        "avg_polarity",
        "avg_subjectivity",
        "article_count",
    ])?;

    let fmt = |v: Option<f64>| v.map(|x| format!("{x:.6}")).unwrap_or_default();
    for row in rows {
        wtr.write_record([
            &row.date.to_string(),
            &row.ticker,
            &format!("{:.6}", row.close),
            &fmt(row.daily_return),
            &fmt(row.avg_polarity),
            &fmt(row.avg_subjectivity),
            &row.article_count.to_string(),
        ])?;
    }

    let bytes = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(bytes).context("CSV output was not valid UTF-8")
}

// ─── Markdown report ────────────────────────────────────────────────

/// Human-readable single-run summary.
pub fn render_markdown(report: &AnalysisReport) -> String {
    let mut out = format!(
        "# NewsLab Run Report\n\n\
Run ID: `{}`\n\n\
## Summary\n\
- News rows: {}\n\
- Price rows: {}\n\
- Tickers: {}\n\
- Overall polarity/return correlation: {}\n",
        report.run_id,
        report.news_rows,
        report.price_rows,
        report.tickers.join(", "),
        report
            .overall_correlation
            .map(|r| format!("{r:.4}"))
            .unwrap_or_else(|| "undefined".to_string()),
    );

    if !report.correlations_by_ticker.is_empty() {
        out.push_str(&format!(
            "\n## Correlations by Ticker (shift {} days)\n\n\
| Ticker | Correlation | Pairs |\n\
|--------|-------------|-------|\n",
            report.sentiment_shift_days
        ));
        for row in &report.correlations_by_ticker {
            out.push_str(&format!(
                "| {} | {} | {} |\n",
                row.ticker,
                row.correlation
                    .map(|r| format!("{r:+.4}"))
                    .unwrap_or_else(|| "n/a".to_string()),
                row.pair_count
            ));
        }
    }

    if !report.top_publishers.is_empty() {
        out.push_str("\n## Top Publishers\n\n| Publisher | Articles |\n|-----------|----------|\n");
        for p in &report.top_publishers {
            out.push_str(&format!("| {} | {} |\n", p.publisher, p.article_count));
        }
    }

    if !report.top_phrases.is_empty() {
        out.push_str("\n## Top Phrases\n\n| Phrase | TF-IDF |\n|--------|--------|\n");
        for phrase in &report.top_phrases {
            out.push_str(&format!("| {} | {:.3} |\n", phrase.term, phrase.score));
        }
    }

    if !report.topics.is_empty() {
        out.push_str("\n## Topics\n");
        for (i, topic) in report.topics.iter().enumerate() {
            out.push_str(&format!("- Topic {}: {}\n", i + 1, topic.join(", ")));
        }
    }

    out
}
