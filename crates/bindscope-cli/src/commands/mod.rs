pub mod correlate;
pub mod models;
pub mod outcomes;

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::Path;

pub(crate) fn prepare_out_dir(out_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create output directory {}", out_dir.display()))
}

/// Lower-cased file stem with anything outside `[a-z0-9_-]` replaced by `_`.
pub(crate) fn file_stem(name: &str) -> String {
    name.chars()
        .map(|c| {
            let c = c.to_ascii_lowercase();
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// File stems that stay distinct within one run. A name whose stem is
/// already taken gets `_2`, `_3`, ... appended.
#[derive(Debug, Default)]
pub(crate) struct FileStems {
    used: HashSet<String>,
}

impl FileStems {
    pub(crate) fn claim(&mut self, name: &str) -> String {
        let base = file_stem(name);
        let mut stem = base.clone();
        let mut n = 1;
        while !self.used.insert(stem.clone()) {
            n += 1;
            stem = format!("{base}_{n}");
        }
        if n > 1 {
            tracing::warn!(name, stem = %stem, "output name collides with an earlier one");
        }
        stem
    }
}
