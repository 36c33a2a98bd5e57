//! Command-line interface definition for wordlist-mutator
//!
//! Provides argument parsing and validation for the variant generation tool.

use clap::Parser;
use std::path::PathBuf;

/// Password variant generator for penetration testing
///
/// Expand each seed word from a wordlist into a set of plausible password
/// variants via case enforcement, leetspeak, vowel mutation, padding, and
/// trailing symbols.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "wordlist-mutator",
    author = "m0h1nd4",
    version,
    about = "Password variant generator for penetration testing",
    long_about = r#"
╔══════════════════════════════════════════════════════════════════════════════╗
║                          WORDLIST-MUTATOR v1.0.0                             ║
║                    Password Variant Generation Engine                         ║
║                         For Penetration Testing                               ║
╚══════════════════════════════════════════════════════════════════════════════╝

Expand each seed word from a wordlist into a deduplicated set of plausible
password variants. The mutation pipeline applies, in order: case enforcement,
leetspeak substitution, vowel mutation, padding to a minimum of 8 characters,
trailing symbols, "@"-for-"a" substitution, and a final case-repair pass.

EXAMPLES:
    # Expand seeds.txt into ./output.txt
    wordlist-mutator seeds.txt

    # Write to a custom directory and filename
    wordlist-mutator seeds.txt -o ./dicts --output-name candidates.txt

    # Cap the expansion of each seed word (lossy, for huge seeds)
    wordlist-mutator seeds.txt --max-variants 50000

    # Show detailed statistics after the run
    wordlist-mutator seeds.txt --stats

MUTATION RULES:
    a -> 4, @        i -> 1, !        s -> 5
    e -> 3           o -> 0           t -> 7
    u -> v (vowel stage)
    pads: 123, 999, 777, 666, 333, 111, 420, 69, 42069, 6969, 321
          asdf, qwerty, xoxo, xo, xox (for numeric seeds)
    end symbols: ! #
"#,
    after_help = "For more information, visit: https://github.com/m0h1nd4/wordlist-mutator"
)]
pub struct Args {
    /// Input wordlist file (one seed word per line)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output directory (default: current directory)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Output filename
    #[arg(long, value_name = "NAME", default_value = "output.txt")]
    pub output_name: String,

    /// Cap the variant set of each seed word (keeps the lexicographically
    /// first N variants; off by default, changes output)
    #[arg(long, value_name = "NUM")]
    pub max_variants: Option<usize>,

    /// Show detailed statistics
    #[arg(long, default_value_t = false)]
    pub stats: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Verbose mode - detailed logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Dry run - show what would be done without writing files
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Buffer size for file operations (default: 8MB)
    #[arg(long, value_name = "SIZE", default_value = "8MB")]
    pub buffer_size: String,
}

impl Args {
    /// Parse buffer size string to bytes
    pub fn parse_buffer_size(&self) -> anyhow::Result<usize> {
        parse_size(&self.buffer_size)
    }

    /// Get output directory, defaulting to current directory
    pub fn get_output_dir(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Parse human-readable size string to bytes
fn parse_size(size_str: &str) -> anyhow::Result<usize> {
    let size_str = size_str.trim().to_uppercase();

    let (num_str, multiplier) = if size_str.ends_with("GB") {
        (&size_str[..size_str.len() - 2], 1024 * 1024 * 1024)
    } else if size_str.ends_with("MB") {
        (&size_str[..size_str.len() - 2], 1024 * 1024)
    } else if size_str.ends_with("KB") {
        (&size_str[..size_str.len() - 2], 1024)
    } else if size_str.ends_with("B") {
        (&size_str[..size_str.len() - 1], 1)
    } else {
        (size_str.as_str(), 1)
    };

    let num: usize = num_str
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid size format: '{}'", size_str))?;

    Ok(num * multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_for(input: &str) -> Args {
        Args {
            input: PathBuf::from(input),
            output: None,
            output_name: "output.txt".to_string(),
            max_variants: None,
            stats: false,
            quiet: false,
            verbose: false,
            dry_run: false,
            buffer_size: "8MB".to_string(),
        }
    }

    #[test]
    fn test_default_output_dir() {
        let args = args_for("seeds.txt");
        assert_eq!(args.get_output_dir(), PathBuf::from("."));
    }

    #[test]
    fn test_explicit_output_dir() {
        let mut args = args_for("seeds.txt");
        args.output = Some(PathBuf::from("/tmp/dicts"));
        assert_eq!(args.get_output_dir(), PathBuf::from("/tmp/dicts"));
    }

    #[test]
    fn test_parse_buffer_size() {
        let args = args_for("seeds.txt");
        assert_eq!(args.parse_buffer_size().unwrap(), 8 * 1024 * 1024);
    }

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("64MB").unwrap(), 64 * 1024 * 1024);
        assert_eq!(parse_size("8GB").unwrap(), 8 * 1024 * 1024 * 1024);
        assert_eq!(parse_size("1024KB").unwrap(), 1024 * 1024);
        assert_eq!(parse_size("512").unwrap(), 512);
        assert!(parse_size("lots").is_err());
    }

    #[test]
    fn test_positional_input() {
        let args = Args::parse_from(["wordlist-mutator", "seeds.txt"]);
        assert_eq!(args.input, PathBuf::from("seeds.txt"));
        assert_eq!(args.output_name, "output.txt");
        assert!(args.max_variants.is_none());
    }

    #[test]
    fn test_missing_input_is_usage_error() {
        assert!(Args::try_parse_from(["wordlist-mutator"]).is_err());
    }
}
