//! File collaborators for the assembly pipeline.
//!
//! Kept outside the core: the overlap graph, search, and merge never
//! touch the filesystem. The loader and saver exist so programs like
//! the bundled example can run the original end-to-end flow.

use crate::error::Result;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

/// Loads fragment values from a file, one per line.
///
/// Lines are trimmed; empty lines are skipped.
pub fn load_fragments<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut values = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            values.push(trimmed.to_string());
        }
    }

    Ok(values)
}

/// Saves the merged chain value to a file.
pub fn save_result<P: AsRef<Path>>(path: P, value: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(value.as_bytes())?;
    Ok(())
}
