//! CLI argument definitions for the graph import mapper.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "gim",
    version,
    about = "Graph import mapper - inspect and check import mapping templates",
    long_about = "Work with import mapping templates for graph destinations.\n\n\
                  Templates map import-file columns to graph attributes, with\n\
                  per-column translators, default values and key flags."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// List the built-in attribute translators.
    Translators,

    /// List import templates stored in a repository.
    List(ListArgs),

    /// Show one template's bindings in display order.
    Show(TemplateArgs),

    /// Check a template against the built-in translator registry.
    Check(TemplateArgs),
}

#[derive(Parser)]
pub struct ListArgs {
    /// Template repository directory.
    #[arg(long = "repo", value_name = "DIR", default_value = "templates")]
    pub repo: PathBuf,
}

#[derive(Parser)]
pub struct TemplateArgs {
    /// Template name.
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Template repository directory.
    #[arg(long = "repo", value_name = "DIR", default_value = "templates")]
    pub repo: PathBuf,
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
