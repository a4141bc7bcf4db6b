//! NullAway wiring CLI
//!
//! Entry point for the `nullaway-wire` command-line tool.

use clap::{Parser, Subcommand};
use nullaway_wire::pipeline::{self, PipelineConfig};
use nullaway_wire::{generate, validate, ProjectDescriptor};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "nullaway-wire")]
#[command(about = "Wires NullAway nullability checking into the compiler configuration", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pipeline and write the configure report
    Configure {
        /// Path to the project descriptor (default: nullaway.toml)
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,

        /// Override an option, e.g. --set severity=ERROR (repeatable)
        #[arg(long = "set", value_name = "OPTION=VALUE")]
        set: Vec<String>,

        /// Report output path
        #[arg(long, short = 'o', default_value = "nullaway-report.json")]
        out: PathBuf,

        /// Run everything but write nothing
        #[arg(long)]
        dry_run: bool,

        /// Print per-stage progress and every generated flag
        #[arg(long)]
        verbose: bool,
    },

    /// Print the flags that would be generated, without touching the build model
    Explain {
        /// Output in human-readable format instead of JSON
        #[arg(long)]
        human: bool,

        /// Path to the project descriptor (default: nullaway.toml)
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,

        /// Override an option, e.g. --set severity=ERROR (repeatable)
        #[arg(long = "set", value_name = "OPTION=VALUE")]
        set: Vec<String>,
    },

    /// Verify the descriptor's NullAway configuration
    Verify {
        /// Path to the project descriptor (default: nullaway.toml)
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Configure {
            config,
            set,
            out,
            dry_run,
            verbose,
        } => {
            run_configure(config, set, out, dry_run, verbose);
        }
        Commands::Explain { human, config, set } => {
            run_explain(human, config, set);
        }
        Commands::Verify { config } => {
            run_verify(config);
        }
    }
}

fn descriptor_path(config: Option<PathBuf>) -> PathBuf {
    config.unwrap_or_else(|| PathBuf::from("nullaway.toml"))
}

fn parse_overrides(set: &[String]) -> Result<Vec<(String, String)>, String> {
    set.iter()
        .map(|entry| match entry.split_once('=') {
            Some((key, value)) => Ok((key.to_string(), value.to_string())),
            None => Err(format!("invalid --set '{}' (expected OPTION=VALUE)", entry)),
        })
        .collect()
}

fn run_configure(
    config: Option<PathBuf>,
    set: Vec<String>,
    out: PathBuf,
    dry_run: bool,
    verbose: bool,
) {
    let overrides = match parse_overrides(&set) {
        Ok(overrides) => overrides,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let pipeline_config = PipelineConfig {
        descriptor_path: descriptor_path(config),
        overrides,
        verbose,
    };

    let report = match pipeline::run(&pipeline_config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(e.exit_code());
        }
    };

    if dry_run {
        println!(
            "Dry-run: NullAway configured with {} argument(s), nothing written",
            report.flags.len()
        );
        return;
    }

    if let Err(e) = report.write_to_file(&out) {
        eprintln!("Error writing report: {}", e);
        process::exit(1);
    }

    if report.injected {
        println!("NullAway configured with {} argument(s)", report.flags.len());
    } else {
        println!("NullAway is disabled (severity OFF); nothing injected");
    }
    println!("Wrote: {}", out.display());
}

fn run_explain(human: bool, config: Option<PathBuf>, set: Vec<String>) {
    let overrides = match parse_overrides(&set) {
        Ok(overrides) => overrides,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let path = descriptor_path(config);
    let (mut descriptor, _digest) = match ProjectDescriptor::from_file(&path) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error loading descriptor: {}", e);
            process::exit(1);
        }
    };

    for (key, value) in &overrides {
        if let Err(e) = descriptor.nullaway.apply_override(key, value) {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }

    if let Err(e) = validate(&descriptor.nullaway) {
        eprintln!("Configuration error: {}", e);
        process::exit(10);
    }

    let flags = generate(&descriptor.nullaway);

    if human {
        for flag in &flags {
            println!("{}", flag);
        }
    } else {
        match serde_json::to_string_pretty(&flags) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing output: {}", e);
                process::exit(1);
            }
        }
    }
}

fn run_verify(config: Option<PathBuf>) {
    let path = descriptor_path(config);

    let (descriptor, _digest) = match ProjectDescriptor::from_file(&path) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = validate(&descriptor.nullaway) {
        eprintln!("Configuration error: {}", e);
        process::exit(10);
    }

    let options = &descriptor.nullaway;
    println!("Configuration valid: {}", path.display());
    println!();
    if let Some(severity) = options.severity {
        println!("  Severity: {}", severity);
    }
    if options.only_null_marked == Some(true) {
        println!("  Annotated scope: @NullMarked only");
    }
    if !options.annotated_packages.is_empty() {
        println!("  Annotated packages: {}", options.annotated_packages.join(", "));
    }
    if options.jspecify_mode == Some(true) {
        println!("  JSpecify mode: on");
    }
    // The severity flag is always present; everything beyond it is an option.
    println!("  Options set: {}", generate(options).len() - 1);
}
