//! Command-line front end checking gene trees for locus conflicts.

use clap::Parser;
use plect::newick::{parse_file, to_newick_with};
use plect::reconcile::{
    check_reconciliation, ConflictComponent, MappingMode, ReconcileOptions,
};
use serde::Serialize;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Checks whether gene trees are consistent with one evolutionary history
/// per species and locus.
///
/// Reads a Newick file with one or more semicolon-terminated gene trees,
/// runs the conflict-detection pipeline on each, and reports a verdict per
/// tree. Exits 0 if all trees are reconcilable, 1 if any tree conflicts,
/// and 2 on errors.
#[derive(Parser, Debug)]
#[command(name = "plect", version, about)]
struct Args {
    /// Newick file with one or more semicolon-terminated gene trees
    file: PathBuf,

    /// Leaf name mapping mode: sli, sil, sli_ or sil_
    /// (field order species-locus-individual or species-individual-locus,
    /// separated by '-' or '_')
    #[arg(short, long, default_value = "sli", verbatim_doc_comment)]
    mapping: String,

    /// List conflicting components for irreconcilable trees
    #[arg(long)]
    conflicts: bool,

    /// Re-emit each tree with per-vertex conflict flags as [&...] comments
    #[arg(long)]
    annotate: bool,

    /// Emit a JSON report instead of text output
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Per-tree entry of the `--json` report.
#[derive(Serialize)]
struct TreeReport {
    tree: usize,
    reconcilable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    conflicts: Option<Vec<ConflictComponent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    annotated: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}

fn run(args: &Args) -> Result<bool, Box<dyn Error>> {
    let mapping: MappingMode = args.mapping.parse()?;
    let trees = parse_file(&args.file)?;

    let mut options = ReconcileOptions::new();
    if args.conflicts || args.json {
        options = options.with_conflicts();
    }
    if args.annotate {
        options = options.with_annotation();
    }

    let mut all_reconcilable = true;
    let mut reports = Vec::new();

    for (number, tree) in trees.iter().enumerate() {
        let number = number + 1;
        let result = check_reconciliation(tree, mapping, &options)?;
        all_reconcilable &= result.is_reconcilable;

        let conflicts = result
            .conflicts
            .map(|set| set.into_iter().collect::<Vec<_>>());
        let annotated = result
            .flags
            .map(|flags| to_newick_with(tree, |vertex| flags.comment(vertex)));

        if args.json {
            reports.push(TreeReport {
                tree: number,
                reconcilable: result.is_reconcilable,
                conflicts,
                annotated,
            });
        } else {
            let verdict = if result.is_reconcilable {
                "reconcilable"
            } else {
                "conflicting"
            };
            println!("tree {number}: {verdict}");

            if args.conflicts {
                for component in conflicts.iter().flatten() {
                    println!("  conflict: {component}");
                }
            }
            if let Some(annotated) = annotated {
                println!("  {annotated}");
            }
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }

    Ok(all_reconcilable)
}

fn init_tracing(verbose: u8) {
    let default_directive = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
