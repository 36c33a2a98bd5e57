//! Wordlist Mutator - Password variant generation for penetration testing
//!
//! Main entry point for the command-line application.

use clap::Parser;
use std::process;

use wordlist_mutator::cli::Args;
use wordlist_mutator::processor::{Mutator, MutatorConfig};
use wordlist_mutator::progress::{print_banner, print_error};

fn main() {
    // Parse command-line arguments
    let args = Args::parse();

    // Set up logging
    if args.verbose {
        std::env::set_var("RUST_LOG", "debug");
    } else if !args.quiet {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    // Run the application
    if let Err(e) = run(args) {
        print_error(&format!("{}", e));

        // Print chain of errors
        let mut source = e.source();
        while let Some(err) = source {
            print_error(&format!("  Caused by: {}", err));
            source = err.source();
        }

        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    // Print banner unless quiet mode
    if !args.quiet {
        print_banner();
    }

    // Validate arguments
    validate_args(&args)?;

    // Create mutator configuration
    let config = MutatorConfig::from_args(&args)?;

    // Create and run the mutator
    let mutator = Mutator::new(config);
    mutator.process(&args.input)?;

    Ok(())
}

/// Validate command-line arguments
fn validate_args(args: &Args) -> anyhow::Result<()> {
    // Check that input exists and is a file
    if !args.input.is_file() {
        anyhow::bail!("Input file does not exist: {:?}", args.input);
    }

    if args.max_variants == Some(0) {
        anyhow::bail!("--max-variants must be greater than zero");
    }

    if args.output_name.trim().is_empty() {
        anyhow::bail!("--output-name must not be empty");
    }

    Ok(())
}
