//! NewsLab Runner — pipeline orchestration, report assembly, export.
//!
//! This crate builds on `newslab-core` to provide:
//! - A serializable analysis configuration with a content-hash run id
//! - The load → score → aggregate → enrich → align → correlate pipeline
//! - A versioned, serializable analysis report
//! - JSON, CSV, and Markdown export

pub mod config;
pub mod export;
pub mod pipeline;
pub mod report;

pub use config::{AnalysisConfig, ConfigError, RunId};
pub use export::{export_aligned_csv, export_json, import_json, render_markdown};
pub use pipeline::{run_analysis, run_from_data, RunError};
pub use report::{AnalysisReport, SCHEMA_VERSION};
