//! CLI argument definitions for the IntelliFill toolkit.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use fill_model::DocumentStatus;

#[derive(Parser)]
#[command(
    name = "intellifill",
    version,
    about = "IntelliFill - map known data onto form fields and fill them",
    long_about = "Map known key/value data onto the fields of a target form,\n\
                  validate mapping sets before submission, resolve filled\n\
                  values, and browse fetched document lists."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow personal data-bag values to appear in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Auto-map data-bag keys onto a form's fields.
    Map(MapArgs),

    /// Resolve filled values for a form from a mapping set.
    Fill(FillArgs),

    /// Validate a mapping set against a form's required fields.
    Validate(ValidateArgs),

    /// Filter, sort and paginate a fetched document list.
    List(ListArgs),
}

#[derive(Parser)]
pub struct MapArgs {
    /// Path to the form schema JSON (array of form fields).
    #[arg(long = "form", value_name = "PATH")]
    pub form: PathBuf,

    /// Path to the data bag JSON (flat key/value object).
    #[arg(long = "data", value_name = "PATH")]
    pub data: PathBuf,

    /// Minimum acceptance score for fuzzy matches (0.0-1.0).
    #[arg(long = "threshold", value_name = "SCORE")]
    pub threshold: Option<f32>,

    /// Template identifier (default: form file stem).
    #[arg(long = "template", value_name = "ID")]
    pub template: Option<String>,

    /// Write the mapping set JSON to this path.
    #[arg(long = "out", value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Save the mapping set into this repository directory.
    #[arg(long = "repo", value_name = "DIR")]
    pub repo: Option<PathBuf>,
}

#[derive(Parser)]
pub struct FillArgs {
    /// Path to the form schema JSON.
    #[arg(long = "form", value_name = "PATH")]
    pub form: PathBuf,

    /// Path to the data bag JSON.
    #[arg(long = "data", value_name = "PATH")]
    pub data: PathBuf,

    /// Path to the mapping set JSON.
    #[arg(long = "mapping", value_name = "PATH")]
    pub mapping: PathBuf,

    /// Write the filled values JSON to this path.
    #[arg(long = "out", value_name = "PATH")]
    pub out: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Path to the form schema JSON.
    #[arg(long = "form", value_name = "PATH")]
    pub form: PathBuf,

    /// Path to the mapping set JSON.
    #[arg(long = "mapping", value_name = "PATH")]
    pub mapping: PathBuf,
}

#[derive(Parser)]
pub struct ListArgs {
    /// Path to the fetched records JSON (array of documents).
    #[arg(value_name = "RECORDS")]
    pub records: PathBuf,

    /// Keep records whose name or id contains this text.
    #[arg(long = "search", value_name = "TEXT")]
    pub search: Option<String>,

    /// Keep records with this status.
    #[arg(long = "status", value_name = "STATUS")]
    pub status: Option<DocumentStatus>,

    /// Keep records carrying this tag (repeatable; all must match).
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Sort by this field.
    #[arg(long = "sort-by", value_enum, value_name = "FIELD")]
    pub sort_by: Option<SortByArg>,

    /// Sort direction.
    #[arg(long = "direction", value_enum, default_value = "asc")]
    pub direction: DirectionArg,

    /// Page to display (1-based).
    #[arg(long = "page", default_value_t = 1)]
    pub page: usize,

    /// Records per page.
    #[arg(long = "page-size", default_value_t = 10)]
    pub page_size: usize,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

/// CLI sort field choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum SortByArg {
    Name,
    Created,
    Status,
    Id,
}

/// CLI sort direction choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum DirectionArg {
    Asc,
    Desc,
}
