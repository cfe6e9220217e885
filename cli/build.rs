include!("src/cli.rs");

use clap::{CommandFactory, ValueEnum};
use clap_complete::Shell;
use clap_mangen::Man;
use std::env::var_os;
use std::fs::create_dir_all;
use std::io::{Error, ErrorKind, Result};

const BIN_NAME: &str = "oxclosure";

/// Writes shell completions and man pages of the CLI into `OUT_DIR`.
fn main() -> Result<()> {
    let out_dir = PathBuf::from(
        var_os("OUT_DIR").ok_or_else(|| Error::new(ErrorKind::NotFound, "OUT_DIR is not set"))?,
    );
    let mut command = Args::command().disable_help_subcommand(true);

    let completions = out_dir.join("complete");
    create_dir_all(&completions)?;
    for shell in Shell::value_variants() {
        clap_complete::generate_to(*shell, &mut command, BIN_NAME, &completions)?;
    }

    let man_pages = out_dir.join("man");
    create_dir_all(&man_pages)?;
    Man::new(command.clone()).generate_to(&man_pages)?;
    for subcommand in command.get_subcommands() {
        Man::new(subcommand.clone()).generate_to(&man_pages)?;
    }
    Ok(())
}
