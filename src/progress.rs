//! Progress display module
//!
//! Provides styled progress bars and statistics display for the pentesting aesthetic.

use bytesize::ByteSize;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Print the application banner
pub fn print_banner() {
    let banner = r#"
╔══════════════════════════════════════════════════════════════╗
║                                                              ║
║                     WORDLIST-MUTATOR v1.0.0                  ║
║                                                              ║
║              Password Variant Generation Engine              ║
║                   For Penetration Testing                    ║
║                                                              ║
╚══════════════════════════════════════════════════════════════╝
"#;

    println!("{}", banner.green());
}

/// Print a section header
pub fn print_header(text: &str) {
    println!("\n{} {}", "▶".green(), text.green().bold());
}

/// Print an info message
pub fn print_info(text: &str) {
    println!("  {} {}", "ℹ".cyan(), text);
}

/// Print a success message
pub fn print_success(text: &str) {
    println!("  {} {}", "✔".green(), text.green());
}

/// Print a warning message
pub fn print_warning(text: &str) {
    println!("  {} {}", "⚠".yellow(), text.yellow());
}

/// Print an error message
pub fn print_error(text: &str) {
    eprintln!("  {} {}", "✖".red(), text.red());
}

/// Print a bullet point
pub fn print_bullet(text: &str) {
    println!("  {} {}", "•".green(), text);
}

/// Create a bytes-based progress bar
pub fn create_bytes_progress_bar(total_bytes: u64, msg: &str) -> ProgressBar {
    let pb = ProgressBar::new(total_bytes);

    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.green/dim}] {bytes}/{total_bytes} ({bytes_per_sec}) {msg}")
            .unwrap()
            .progress_chars("█▓░")
    );

    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));

    pb
}

/// Create a styled spinner for indeterminate progress
pub fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();

    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ "),
    );

    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));

    pb
}

/// Processing statistics
#[derive(Debug)]
pub struct ProcessingStats {
    pub total_bytes: AtomicU64,
    pub processed_bytes: AtomicU64,
    pub seed_words: AtomicU64,
    pub skipped_lines: AtomicU64,
    pub generated_variants: AtomicU64,
    pub duplicate_variants: AtomicU64,
    pub error_lines: AtomicU64,
    pub start_time: Instant,
}

impl ProcessingStats {
    pub fn new() -> Self {
        Self {
            total_bytes: AtomicU64::new(0),
            processed_bytes: AtomicU64::new(0),
            seed_words: AtomicU64::new(0),
            skipped_lines: AtomicU64::new(0),
            generated_variants: AtomicU64::new(0),
            duplicate_variants: AtomicU64::new(0),
            error_lines: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    pub fn set_total_bytes(&self, size: u64) {
        self.total_bytes.store(size, Ordering::Relaxed);
    }

    pub fn add_bytes(&self, count: u64) {
        self.processed_bytes.fetch_add(count, Ordering::Relaxed);
    }

    pub fn add_seed(&self) {
        self.seed_words.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_skipped(&self) {
        self.skipped_lines.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_variants(&self, count: u64) {
        self.generated_variants.fetch_add(count, Ordering::Relaxed);
    }

    pub fn add_duplicates(&self, count: u64) {
        self.duplicate_variants.fetch_add(count, Ordering::Relaxed);
    }

    pub fn add_error(&self) {
        self.error_lines.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get_total_bytes(&self) -> u64 {
        self.total_bytes.load(Ordering::Relaxed)
    }

    pub fn get_processed_bytes(&self) -> u64 {
        self.processed_bytes.load(Ordering::Relaxed)
    }

    pub fn get_seed_words(&self) -> u64 {
        self.seed_words.load(Ordering::Relaxed)
    }

    pub fn get_skipped_lines(&self) -> u64 {
        self.skipped_lines.load(Ordering::Relaxed)
    }

    pub fn get_generated_variants(&self) -> u64 {
        self.generated_variants.load(Ordering::Relaxed)
    }

    pub fn get_duplicate_variants(&self) -> u64 {
        self.duplicate_variants.load(Ordering::Relaxed)
    }

    pub fn get_error_lines(&self) -> u64 {
        self.error_lines.load(Ordering::Relaxed)
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn variants_per_second(&self) -> f64 {
        let elapsed = self.elapsed().as_secs_f64();
        if elapsed > 0.0 {
            self.get_generated_variants() as f64 / elapsed
        } else {
            0.0
        }
    }

    /// Print final statistics
    pub fn print_summary(&self) {
        let elapsed = self.elapsed();
        let generated = self.get_generated_variants();
        let duplicates = self.get_duplicate_variants();
        let unique = generated.saturating_sub(duplicates);
        let errors = self.get_error_lines();

        println!();
        println!("{}", "═".repeat(60).green());
        println!("{}", "                    GENERATION COMPLETE".green().bold());
        println!("{}", "═".repeat(60).green());
        println!();

        println!(
            "  {} {}",
            "Data processed: ".green(),
            format!(
                "{} / {}",
                ByteSize(self.get_processed_bytes()),
                ByteSize(self.get_total_bytes())
            )
        );
        println!();

        println!(
            "  {} {}",
            "Seed words:     ".green(),
            format_number(self.get_seed_words())
        );
        println!(
            "  {} {}",
            "Skipped lines:  ".green(),
            format_number(self.get_skipped_lines())
        );
        println!(
            "  {} {}",
            "Variants:       ".green(),
            format_number(generated)
        );
        println!(
            "  {} {}",
            "Duplicates:     ".yellow(),
            format_number(duplicates)
        );
        println!(
            "  {} {}",
            "Unique output:  ".green().bold(),
            format_number(unique).green().bold()
        );

        if errors > 0 {
            println!(
                "  {} {}",
                "Errors:         ".red(),
                format_number(errors).red()
            );
        }

        println!();
        println!(
            "  {} {}",
            "Duration:       ".green(),
            format_duration(elapsed)
        );
        println!(
            "  {} {:.2} variants/sec",
            "Throughput:     ".green(),
            self.variants_per_second()
        );
        println!();
        println!("{}", "═".repeat(60).green());
    }
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a number with thousand separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}

/// Format duration as human-readable string
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();

    if secs < 60 {
        format!("{:.1}s", duration.as_secs_f64())
    } else if secs < 3600 {
        let mins = secs / 60;
        let secs = secs % 60;
        format!("{}m {}s", mins, secs)
    } else {
        let hours = secs / 3600;
        let mins = (secs % 3600) / 60;
        format!("{}h {}m", hours, mins)
    }
}
