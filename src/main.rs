use anyhow::Result;
use clap::Parser;
use cli::{Opts, SubCommands};
use config::Config;
use tracing_subscriber::EnvFilter;
use version_detector::{println_with_prefix_and_fl, Version, VersionFactory};

mod cli;
mod config;

/// Print a detection result, either canonical or as a JSON field mapping
fn print_version(version: &Version, input: &str, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&version.to_array())?);
        return Ok(());
    }

    match version {
        Version::Found(fields) => println!("{}", fields),
        Version::NotFound => {
            println_with_prefix_and_fl!("no_version_found", text = input.to_string());
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let opts = Opts::parse();
    let config = Config::read(opts.config.as_deref())?;
    let factory = config.factory(opts.regex.as_deref())?;

    // Switch table
    match &opts.subcommands {
        SubCommands::Set { text } => print_version(&factory.set(text), text, opts.json)?,
        SubCommands::Detect(args) => {
            let markers = config.markers_for(&args.markers, args.profile.as_deref())?;
            if markers.is_empty() {
                println_with_prefix_and_fl!("info_no_markers");
            }
            print_version(
                &factory.detect_version(&args.text, &markers),
                &args.text,
                opts.json,
            )?
        }
        SubCommands::FromJson { json } => {
            print_version(&VersionFactory::from_json(json)?, json, opts.json)?
        }
    }

    Ok(())
}
