use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Locate and normalize version tokens in free-form text
#[derive(Parser, Debug)]
#[clap(about, author, version)]
pub struct Opts {
    /// Replace the built-in version grammar
    #[clap(long, short, global = true)]
    pub regex: Option<String>,
    /// Read marker profiles and a grammar from a TOML file
    #[clap(long, short, global = true)]
    pub config: Option<PathBuf>,
    /// Print the version fields as JSON
    #[clap(long, global = true)]
    pub json: bool,
    #[clap(subcommand)]
    pub subcommands: SubCommands,
}

#[derive(Subcommand, Debug)]
pub enum SubCommands {
    /// Parse text that starts with a version
    Set { text: String },
    Detect(Detect),
    /// Build a version from a JSON field mapping
    FromJson { json: String },
}

/// Search text for a marker and parse the version following it
#[derive(Args, Debug)]
pub struct Detect {
    pub text: String,
    /// Marker to search for, may be repeated and is tried in order
    #[clap(long = "marker", short)]
    pub markers: Vec<String>,
    /// Append the markers of a profile from the configuration file
    #[clap(long, short)]
    pub profile: Option<String>,
}
