//! # Scrubber
//!
//! A one-shot batch tool that cleans up names in a directory tree.
//!
//! Every file and subdirectory under the configured root is visited
//! bottom-up. An entry is deleted when its name is on the deny-list or starts
//! with the `._` metadata prefix; otherwise the configured substrings are
//! stripped from its name, and a `_N` suffix is added before the extension if
//! the new name is already taken.
//!
//! ## Usage
//!
//! ### Command Line
//!
//! ```bash
//! # Process the current directory with the compiled-in lists
//! scrubber
//!
//! # Same, with per-operation logging on stderr
//! scrubber --verbose
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use scrubber_core::{Cleaner, CleanupConfig};
//!
//! let temp_dir = std::env::temp_dir().join("scrubber-doc-example");
//! std::fs::create_dir_all(&temp_dir)?;
//!
//! let cleaner = Cleaner::new(CleanupConfig {
//!     root: temp_dir.clone(),
//!     removals: vec!["draft_".to_string()],
//!     ..Default::default()
//! });
//! let result = cleaner.run_with_progress(|event| println!("{event}"))?;
//! for line in result.summary_lines() {
//!     println!("{line}");
//! }
//! # std::fs::remove_dir_all(&temp_dir)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Re-export core functionality
pub use scrubber_core::*;

// Re-export commonly used types
pub use scrubber_core::{
    CleanEvent, Cleaner, CleanupConfig, CleanupResult, EntryKind, FsError, NameAction,
    NamePolicy, RunPhase, TreeWalker,
};
