//! Core processing engine
//!
//! Reads the input wordlist line by line, expands each seed word through the
//! mutation pipeline, and writes the sorted, globally deduplicated union of
//! all variant sets to the output file.

use crate::cli::Args;
use crate::encoding::EncodedLineIterator;
use crate::generator::{cap_variants, generate_all_variants};
use crate::mutate::VariantSet;
use crate::output::{ensure_output_dir, OutputWriter};
use crate::progress::{
    create_bytes_progress_bar, print_bullet, print_header, print_info, print_success,
    ProcessingStats,
};

use bytesize::ByteSize;
use colored::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Mutator configuration
pub struct MutatorConfig {
    pub output_dir: PathBuf,
    pub output_name: String,
    pub max_variants: Option<usize>,
    pub buffer_size: usize,
    pub dry_run: bool,
    pub quiet: bool,
    pub verbose: bool,
    pub show_stats: bool,
}

impl MutatorConfig {
    pub fn from_args(args: &Args) -> anyhow::Result<Self> {
        Ok(Self {
            output_dir: args.get_output_dir(),
            output_name: args.output_name.clone(),
            max_variants: args.max_variants,
            buffer_size: args.parse_buffer_size()?,
            dry_run: args.dry_run,
            quiet: args.quiet,
            verbose: args.verbose,
            show_stats: args.stats,
        })
    }

    /// Full path of the output file
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_name)
    }
}

/// Main processing engine
pub struct Mutator {
    config: MutatorConfig,
    stats: Arc<ProcessingStats>,
}

impl Mutator {
    pub fn new(config: MutatorConfig) -> Self {
        Self {
            config,
            stats: Arc::new(ProcessingStats::new()),
        }
    }

    /// Process the input wordlist and write the variant dictionary
    pub fn process(&self, input: &Path) -> anyhow::Result<()> {
        let input_size = fs::metadata(input)?.len();
        self.stats.set_total_bytes(input_size);

        if !self.config.quiet {
            print_header("Processing wordlist...");
            print_info(&format!("Input:  {:?} ({})", input, ByteSize(input_size)));
            print_info(&format!("Output: {:?}", self.config.output_path()));
        }

        if self.config.dry_run {
            self.dry_run_report(input, input_size);
            return Ok(());
        }

        ensure_output_dir(&self.config.output_dir)?;

        let all_variants = self.expand_all(input)?;

        // Sort once at output time for determinism
        let mut sorted: Vec<String> = all_variants.into_iter().collect();
        sorted.sort_unstable();

        let output_path = self.config.output_path();
        let mut writer = OutputWriter::new(output_path.clone(), self.config.buffer_size)?;
        writer.write_all(sorted.iter().map(String::as_str))?;
        writer.flush()?;

        if !self.config.quiet {
            print_success(&format!(
                "Generated {} password variants -> {:?}",
                writer.lines_written(),
                output_path
            ));

            if self.config.show_stats {
                self.stats.print_summary();
            }
        }

        Ok(())
    }

    /// Expand every seed line into the global variant set
    fn expand_all(&self, input: &Path) -> anyhow::Result<VariantSet> {
        let mut lines = EncodedLineIterator::new(input)?;

        if self.config.verbose {
            log::debug!("Detected input encoding: {}", lines.encoding().name());
        }

        let pb = if self.config.quiet {
            indicatif::ProgressBar::hidden()
        } else {
            create_bytes_progress_bar(self.stats.get_total_bytes(), "Expanding seeds...")
        };

        let mut all_variants = VariantSet::default();
        let mut consumed = 0u64;

        while let Some(line_result) = lines.next() {
            let delta = lines.bytes_read() - consumed;
            consumed = lines.bytes_read();

            match line_result {
                Ok(line) => {
                    let seed = line.trim();
                    if seed.is_empty() {
                        self.stats.add_skipped();
                    } else {
                        self.stats.add_seed();
                        self.expand_seed(seed, &mut all_variants);
                    }
                }
                Err(e) => {
                    log::warn!("Failed to read line: {}", e);
                    self.stats.add_error();
                }
            }

            pb.inc(delta);
            self.stats.add_bytes(delta);
        }

        pb.finish_with_message("Complete".green().to_string());

        Ok(all_variants)
    }

    /// Expand one seed word and merge its variants into the global set
    fn expand_seed(&self, seed: &str, all_variants: &mut VariantSet) {
        let mut variants = generate_all_variants(seed);

        if let Some(limit) = self.config.max_variants {
            variants = cap_variants(variants, limit);
        }

        self.stats.add_variants(variants.len() as u64);

        if self.config.verbose {
            log::debug!("Seed {:?} expanded to {} variants", seed, variants.len());
        }

        let mut duplicates = 0u64;
        for v in variants {
            if !all_variants.insert(v) {
                duplicates += 1;
            }
        }
        self.stats.add_duplicates(duplicates);
    }

    /// Dry run report
    fn dry_run_report(&self, input: &Path, input_size: u64) {
        print_header("DRY RUN - No files will be written");

        println!("\n  {} Input:", "▶".green());
        print_bullet(&format!("{:?} ({})", input, ByteSize(input_size)));

        println!("\n  {} Output configuration:", "▶".green());
        print_bullet(&format!("Output file: {:?}", self.config.output_path()));
        print_bullet(&format!(
            "Buffer size: {}",
            ByteSize(self.config.buffer_size as u64)
        ));
        print_bullet(&format!(
            "Per-seed cap: {}",
            match self.config.max_variants {
                Some(n) => n.to_string(),
                None => "unlimited".to_string(),
            }
        ));
    }

    /// Get processing statistics
    pub fn stats(&self) -> Arc<ProcessingStats> {
        Arc::clone(&self.stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn test_config(dir: &TempDir) -> MutatorConfig {
        MutatorConfig {
            output_dir: dir.path().to_path_buf(),
            output_name: "output.txt".to_string(),
            max_variants: None,
            buffer_size: 64 * 1024,
            dry_run: false,
            quiet: true,
            verbose: false,
            show_stats: false,
        }
    }

    #[test]
    fn test_end_to_end_expansion() {
        let mut input = NamedTempFile::new().unwrap();
        writeln!(input, "cat").unwrap();
        writeln!(input).unwrap();
        writeln!(input, "   ").unwrap();
        writeln!(input, "1234").unwrap();

        let dir = TempDir::new().unwrap();
        let mutator = Mutator::new(test_config(&dir));
        mutator.process(input.path()).unwrap();

        let content = std::fs::read_to_string(dir.path().join("output.txt")).unwrap();
        let lines: Vec<&str> = content.lines().collect();

        // Sorted, duplicate-free, newline-terminated
        let mut resorted = lines.clone();
        resorted.sort_unstable();
        resorted.dedup();
        assert_eq!(lines, resorted);
        assert!(content.ends_with('\n'));

        assert!(lines.contains(&"cat42069!"));
        assert!(lines.contains(&"Cat42069!"));
        assert!(lines.contains(&"1234qwerty!"));

        let stats = mutator.stats();
        assert_eq!(stats.get_seed_words(), 2);
        assert_eq!(stats.get_skipped_lines(), 2);
        assert_eq!(lines.len() as u64, stats.get_generated_variants() - stats.get_duplicate_variants());
    }

    #[test]
    fn test_empty_input_writes_empty_file() {
        let input = NamedTempFile::new().unwrap();

        let dir = TempDir::new().unwrap();
        let mutator = Mutator::new(test_config(&dir));
        mutator.process(input.path()).unwrap();

        let content = std::fs::read_to_string(dir.path().join("output.txt")).unwrap();
        assert!(content.is_empty());
    }

    #[test]
    fn test_cross_line_dedup() {
        let mut input = NamedTempFile::new().unwrap();
        writeln!(input, "cat").unwrap();
        writeln!(input, "cat").unwrap();

        let dir = TempDir::new().unwrap();
        let mutator = Mutator::new(test_config(&dir));
        mutator.process(input.path()).unwrap();

        let content = std::fs::read_to_string(dir.path().join("output.txt")).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        let mut deduped = lines.clone();
        deduped.dedup();
        assert_eq!(lines, deduped);

        // The second identical seed contributes only duplicates
        let stats = mutator.stats();
        assert_eq!(stats.get_duplicate_variants() * 2, stats.get_generated_variants());
    }

    #[test]
    fn test_max_variants_cap() {
        let mut input = NamedTempFile::new().unwrap();
        writeln!(input, "cat").unwrap();

        let dir = TempDir::new().unwrap();
        let mut config = test_config(&dir);
        config.max_variants = Some(25);
        let mutator = Mutator::new(config);
        mutator.process(input.path()).unwrap();

        let content = std::fs::read_to_string(dir.path().join("output.txt")).unwrap();
        assert_eq!(content.lines().count(), 25);
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let mut input = NamedTempFile::new().unwrap();
        writeln!(input, "cat").unwrap();

        let dir = TempDir::new().unwrap();
        let mut config = test_config(&dir);
        config.dry_run = true;
        let mutator = Mutator::new(config);
        mutator.process(input.path()).unwrap();

        assert!(!dir.path().join("output.txt").exists());
    }
}
