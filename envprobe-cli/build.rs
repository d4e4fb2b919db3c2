//! Build script for envprobe-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("envprobe")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect the process environment and host")
        .long_about(
            "Command-line tool for querying executable paths, path resolution, environment \
             variables, and operating system identity",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .subcommands(vec![
            Command::new("report")
                .about("Print a full environment report")
                .long_about("Collect every query into one report, as labeled lines or JSON"),
            Command::new("exe")
                .about("Print the path of the current executable")
                .long_about("Display the absolute path of the running binary, or its directory"),
            Command::new("cwd")
                .about("Print the current working directory")
                .long_about("Display the working directory of this process"),
            Command::new("home")
                .about("Print the home directory of the current user")
                .long_about("Display the home directory of the user running this process"),
            Command::new("user")
                .about("Print the name of the current user")
                .long_about("Display the login name of the user running this process"),
            Command::new("os")
                .about("Print the operating system identity")
                .long_about("Display the kernel name, version, and product name of the host"),
            Command::new("paths")
                .about("Print the directories of the PATH variable")
                .long_about("Display every PATH directory on its own line, in search order"),
            Command::new("env")
                .about("Print the value of an environment variable")
                .long_about("Display the bare value of a variable, for use in scripts"),
            Command::new("resolve")
                .about("Resolve a path to its absolute form")
                .long_about("Make a path absolute and fold away dot segments"),
            Command::new("which")
                .about("Locate an executable on the PATH")
                .long_about("Search the PATH directories in order and print the first match"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    // Generate main envprobe.1 man page
    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("envprobe.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
