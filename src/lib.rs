//! # Wordlist Mutator
//!
//! Password variant generation tool for penetration testing.
//!
//! ## Features
//!
//! - **Case enforcement**: Guarantees uppercase and lowercase forms of every seed
//! - **Leetspeak substitution**: Single-character swaps (a->4/@, e->3, i->1/!, o->0, s->5, t->7)
//! - **Vowel mutation**: A second substitution table including u->v
//! - **Padding**: Appends pad tokens until variants reach 8 characters
//! - **Trailing symbols**: Appends `!` and `#` to every padded form
//! - **Case repair**: Adds single-position case siblings for single-case variants
//! - **Encoding detection**: Lenient decoding of various input encodings
//! - **Deduplication**: Sorted, duplicate-free global output
//!
//! ## Usage
//!
//! ```bash
//! # Expand seeds.txt into ./output.txt
//! wordlist-mutator seeds.txt
//!
//! # Custom output location with statistics
//! wordlist-mutator seeds.txt -o ./dicts --output-name candidates.txt --stats
//! ```
//!
//! ## Example
//!
//! ```rust
//! use wordlist_mutator::generator::generate_all_variants;
//!
//! let variants = generate_all_variants("cat");
//! assert!(variants.contains("cat42069!"));
//! assert!(variants.contains("c@t42069!"));
//! ```

pub mod cli;
pub mod encoding;
pub mod generator;
pub mod mutate;
pub mod output;
pub mod processor;
pub mod progress;
pub mod rules;

pub use cli::Args;
pub use generator::generate_all_variants;
pub use mutate::VariantSet;
pub use processor::{Mutator, MutatorConfig};
