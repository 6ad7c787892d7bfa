use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use lombok_strip::{
    expand_paths, load_file_list, run_files, EntryStatus, ExpandedPaths, FileEntry,
    ProcessOptions, Rewrite, RunReport,
};
use similar::{ChangeTag, TextDiff};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "lombok-strip")]
#[command(
    about = "Remove constructors and getters made redundant by Lombok annotations",
    long_about = None
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Strip redundant constructors and getters from Java files
    Apply {
        #[command(flatten)]
        input: InputArgs,

        /// Dry run - show what would be changed without modifying files
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Show unified diff of changes
        #[arg(short, long)]
        diff: bool,

        /// Record unreadable or unwritable files and continue instead of aborting
        #[arg(short, long)]
        keep_going: bool,

        /// Print the run report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Report files that still contain redundant members, without modifying them
    Check {
        #[command(flatten)]
        input: InputArgs,

        /// Print the run report as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Java files or directories to process (directories are searched for *.java)
    paths: Vec<PathBuf>,

    /// TOML manifest listing the files to process
    #[arg(short, long)]
    manifest: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Apply {
            input,
            dry_run,
            diff,
            keep_going,
            json,
        } => cmd_apply(
            input,
            ProcessOptions {
                dry_run,
                keep_going,
            },
            diff,
            json,
        ),

        Commands::Check { input, json } => cmd_check(input, json),
    }
}

/// Helper: Build the ordered file list, manifest entries first.
fn collect_inputs(input: &InputArgs) -> Result<ExpandedPaths> {
    let mut paths = Vec::new();

    if let Some(manifest) = &input.manifest {
        paths.extend(load_file_list(manifest)?);
    }
    paths.extend(input.paths.iter().cloned());

    if paths.is_empty() {
        anyhow::bail!(
            "{}\n  {}\n  {}",
            "No input files.".red(),
            "Pass Java files or directories: lombok-strip apply src/main/java",
            "Or list them in a manifest: lombok-strip apply --manifest strip.toml"
        );
    }

    Ok(expand_paths(&paths)?)
}

/// Helper: Show unified diff between original and modified content
fn display_diff(file: &Path, rewrite: &Rewrite) {
    println!(
        "\n{}",
        format!("--- {} (original)", file.display()).dimmed()
    );
    println!("{}", format!("+++ {} (stripped)", file.display()).dimmed());

    let diff = TextDiff::from_lines(&rewrite.original, &rewrite.updated);

    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Delete => format!("-{}", change).red(),
            ChangeTag::Insert => format!("+{}", change).green(),
            ChangeTag::Equal => format!(" {}", change).normal(),
        };
        print!("{}", sign);
    }
}

fn print_entry(entry: &FileEntry, dry_run: bool) {
    let path = entry.path.display();
    match &entry.status {
        EntryStatus::Modified {
            constructors,
            getters,
        } => {
            let verb = if dry_run { "Would modify" } else { "Modified" };
            println!(
                "{} {}: {} ({} constructors, {} getters)",
                "✓".green(),
                verb,
                path,
                constructors.len(),
                getters.len()
            );
        }
        EntryStatus::Skipped { reason } => {
            println!("  Skipped: {} {}", path, format!("({reason})").dimmed());
        }
        EntryStatus::NotFound => {
            println!("{} Not found: {}", "✗".red(), path);
        }
        EntryStatus::Failed { error } => {
            eprintln!("{} Failed: {}", "✗".red(), path);
            eprintln!("  Error: {}", error);
        }
    }
}

fn print_json(report: &RunReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// The totals count each file once, however often it was listed.
fn print_duplicates(duplicates: usize) {
    if duplicates > 0 {
        let noun = if duplicates == 1 { "path" } else { "paths" };
        println!(
            "  {} duplicate {} ignored",
            format!("{}", duplicates).dimmed(),
            noun
        );
    }
}

fn cmd_apply(input: InputArgs, options: ProcessOptions, show_diff: bool, json: bool) -> Result<()> {
    let inputs = collect_inputs(&input)?;

    if options.dry_run && !json {
        println!("{}", "[DRY RUN - no files will be written]".cyan());
    }

    let report = run_files(&inputs.files, &options, |entry, rewrite| {
        if json {
            return;
        }
        print_entry(entry, options.dry_run);
        if show_diff {
            if let Some(rewrite) = rewrite {
                display_diff(&entry.path, rewrite);
            }
        }
    })
    .context("aborting run")?;

    if json {
        print_json(&report)?;
    } else {
        println!();
        println!("{}", report.to_string().bold());
        println!("  {} members removed", report.members_removed());
        println!("  {} skipped", format!("{}", report.skipped()).yellow());
        println!("  {} not found", format!("{}", report.not_found()).cyan());
        print_duplicates(inputs.duplicates);
        if report.failed() > 0 {
            println!("  {} failed", format!("{}", report.failed()).red());
        }
    }

    if report.failed() > 0 {
        std::process::exit(1);
    }

    Ok(())
}

fn cmd_check(input: InputArgs, json: bool) -> Result<()> {
    let inputs = collect_inputs(&input)?;
    let options = ProcessOptions {
        dry_run: true,
        keep_going: false,
    };

    let report = run_files(&inputs.files, &options, |entry, _| {
        if json {
            return;
        }
        match &entry.status {
            EntryStatus::Modified {
                constructors,
                getters,
            } => {
                eprintln!("{} {}: redundant members", "✗".red(), entry.path.display());
                for name in constructors {
                    eprintln!("  constructor {}", name);
                }
                for name in getters {
                    eprintln!("  getter {}", name);
                }
            }
            EntryStatus::NotFound => {
                println!("{} Not found: {}", "⊘".cyan(), entry.path.display());
            }
            EntryStatus::Skipped { .. } | EntryStatus::Failed { .. } => {}
        }
    })
    .context("aborting check")?;

    let pending = report.modified();

    if json {
        print_json(&report)?;
    } else {
        println!();
        println!("{}", "Summary:".bold());
        println!("  {} files checked", report.attempted());
        print_duplicates(inputs.duplicates);
        println!("  {} need stripping", format!("{}", pending).red());
    }

    if pending > 0 {
        std::process::exit(1);
    }

    Ok(())
}
