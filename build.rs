use clap::CommandFactory;
use clap_complete::{generate_to, Shell};
use std::{env, fs, io::Result};

include!("src/cli.rs");

const ROOT: &str = "completions";
const BIN: &str = "version-detector";

fn generate_completions() -> Result<()> {
    fs::create_dir_all(ROOT)?;
    let mut cmd = Opts::command();
    for shell in [Shell::Bash, Shell::Zsh, Shell::Fish] {
        generate_to(shell, &mut cmd, BIN, ROOT)?;
    }

    Ok(())
}

fn main() -> Result<()> {
    println!("cargo:rerun-if-env-changed=VD_GEN_COMPLETIONS");
    if env::var_os("VD_GEN_COMPLETIONS").is_some() {
        generate_completions()?;
    }

    Ok(())
}
