#![allow(dead_code)]

use crate::areas::repository::Repository;
use anyhow::Result;
use clap::{Parser, Subcommand};

mod areas;
mod artifacts;
mod commands;
mod error;

#[derive(Parser)]
#[command(
    name = "minigit",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A miniature version control system",
    long_about = "minigit tracks the history of the regular files in a single \
    working directory: content-addressed snapshots, named branches, movement \
    between historical snapshots, and line-oriented diffs between working, \
    staged and committed states.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command creates the .minigit layout in the current directory. \
        Re-running it on an existing repository reports and changes nothing."
    )]
    Init,
    #[command(
        name = "add",
        about = "Stage a file for the next commit",
        long_about = "This command hashes the file's current content, stores the blob and \
        records the entry in the staging index."
    )]
    Add {
        #[arg(index = 1, help = "The file to stage")]
        path: String,
    },
    #[command(
        name = "commit",
        about = "Record the staged changes as a new commit",
        long_about = "This command freezes the staging index into a new commit. The \
        remaining arguments joined with single spaces form the message."
    )]
    Commit {
        #[arg(required = true, num_args = 1.., help = "The commit message")]
        message: Vec<String>,
    },
    #[command(
        name = "log",
        about = "Show the commit history",
        long_about = "This command walks HEAD-rooted history following first parents and \
        decorates commits with the branches pointing at them."
    )]
    Log,
    #[command(
        name = "branch",
        about = "Create a new branch at HEAD",
        long_about = "This command creates a branch pointing at the current HEAD commit. \
        It errors if the branch exists or there are no commits yet."
    )]
    Branch {
        #[arg(index = 1, help = "The branch name")]
        name: String,
    },
    #[command(
        name = "checkout",
        about = "Switch branches or restore the working tree to a commit",
        long_about = "This command resolves the target as a branch name, a full commit \
        fingerprint or a unique fingerprint prefix of at least four characters, refuses \
        on a dirty working tree, and reconciles the working tree to the target snapshot."
    )]
    Checkout {
        #[arg(index = 1, help = "A branch name or commit fingerprint (prefix)")]
        target: String,
    },
    #[command(
        name = "status",
        about = "Show the working tree status",
        long_about = "This command shows staged changes, unstaged changes and untracked \
        files."
    )]
    Status,
    #[command(
        name = "diff",
        about = "Show changes between snapshots",
        long_about = "With no arguments, compares the working tree against the staging \
        index. With --staged (or --cached), compares the staging index against the HEAD \
        commit. With one commit, compares the working tree against it. With two commits, \
        compares them against each other."
    )]
    Diff {
        #[arg(long, help = "Compare the staging index against the HEAD commit")]
        staged: bool,
        #[arg(long, help = "Alias of --staged")]
        cached: bool,
        #[arg(num_args = 0..=2, help = "Commit fingerprints (or prefixes) to compare")]
        targets: Vec<String>,
    },
}

fn main() -> Result<()> {
    // usage errors exit with code 1, diagnostics on stderr
    let cli = Cli::try_parse().unwrap_or_else(|error| {
        let _ = error.print();
        match error.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                std::process::exit(0)
            }
            _ => std::process::exit(1),
        }
    });

    let pwd = std::env::current_dir()?;
    let writer = Box::new(std::io::stdout());

    match &cli.command {
        Commands::Init => Repository::new(pwd, writer)?.init()?,
        Commands::Add { path } => Repository::load(pwd, writer)?.add(path)?,
        Commands::Commit { message } => {
            Repository::load(pwd, writer)?.commit(&message.join(" "))?
        }
        Commands::Log => Repository::load(pwd, writer)?.log()?,
        Commands::Branch { name } => Repository::load(pwd, writer)?.branch(name)?,
        Commands::Checkout { target } => Repository::load(pwd, writer)?.checkout(target)?,
        Commands::Status => Repository::load(pwd, writer)?.status()?,
        Commands::Diff {
            staged,
            cached,
            targets,
        } => Repository::load(pwd, writer)?.diff(*staged || *cached, targets)?,
    }

    Ok(())
}
