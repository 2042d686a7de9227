//! Loads host entries from a root config file and everything it includes.

use std::fs;
use std::path::{Path, PathBuf};

use hostbook_paths::{absolutize, expand_tilde};
use indexmap::IndexMap;
use registry::HostEntry;
use rustc_hash::FxBuildHasher;
use tracing::warn;

use crate::decode::{ConfigDecode, HostBlock, MapDirective};
use crate::include::IncludeResolver;

/// Characters that make a `Host` pattern a wildcard/negation rather than a
/// usable alias.
const WILDCARD_CHARS: &[char] = &['!', '*', '?', '[', ']'];

/// Loads and merges host entries, tagging each with its origin file.
///
/// The registry is rebuilt in full on every [`load`](Self::load); partial
/// success is the normal recovery path — a file that fails to read or
/// decode is logged and skipped, never fatal.
pub struct ConfigLoader<D, M> {
    decoder: D,
    mapper: M,
    home: PathBuf,
}

impl<D: ConfigDecode, M: MapDirective> ConfigLoader<D, M> {
    /// Loader using the process-level home directory.
    pub fn new(decoder: D, mapper: M) -> Self {
        Self {
            decoder,
            mapper,
            home: hostbook_paths::home_dir().clone(),
        }
    }

    /// Loader with an explicit home directory for tilde expansion.
    pub fn with_home(decoder: D, mapper: M, home: PathBuf) -> Self {
        Self {
            decoder,
            mapper,
            home,
        }
    }

    /// Load every entry reachable from `root`, in first-appearance order.
    ///
    /// The root file is processed first, then its resolved includes in
    /// depth-first order. On a primary-alias collision the first entry wins,
    /// which realizes "main config beats included config" precedence. The
    /// returned order is stable but not ranked; ranking is a separate step.
    pub fn load(&self, root: &Path) -> Vec<HostEntry> {
        let root = expand_tilde(&root.to_string_lossy(), &self.home);
        let root = absolutize(&root);

        let resolution = IncludeResolver::with_home(self.home.clone()).resolve(&root);
        if let Some(warning) = &resolution.warning {
            warn!("failed to resolve includes: {warning}");
        }

        let mut merged: IndexMap<String, HostEntry, FxBuildHasher> = IndexMap::default();

        let files = std::iter::once(root).chain(resolution.files);
        for (index, file) in files.enumerate() {
            let contents = match fs::read_to_string(&file) {
                Ok(c) => c,
                Err(err) => {
                    warn!(path = %file.display(), "failed to read config file: {err}");
                    continue;
                }
            };
            let blocks = match self.decoder.decode(&file, &contents) {
                Ok(b) => b,
                Err(err) => {
                    warn!(path = %file.display(), "failed to decode config file: {err}");
                    continue;
                }
            };

            let is_main = index == 0;
            for entry in self.entries_from_blocks(blocks, &file, is_main) {
                merged
                    .entry(entry.primary_alias.clone())
                    .or_insert(entry);
            }
        }

        merged.into_values().collect()
    }

    /// Turn decoded blocks into candidate entries with origin metadata.
    ///
    /// Wildcard-containing patterns are excluded from the alias set; a
    /// block left with no usable alias is dropped entirely.
    fn entries_from_blocks(
        &self,
        blocks: Vec<HostBlock>,
        file: &Path,
        is_main: bool,
    ) -> Vec<HostEntry> {
        let mut entries = Vec::with_capacity(blocks.len());
        for block in blocks {
            let aliases: Vec<String> = block
                .patterns
                .into_iter()
                .filter(|pattern| !pattern.contains(WILDCARD_CHARS))
                .collect();
            let Some(primary) = aliases.first().cloned() else {
                continue;
            };

            let mut entry = HostEntry::new(primary);
            entry.aliases = aliases;
            entry.source_file = file.to_path_buf();
            entry.readonly = !is_main;

            for (key, value) in &block.directives {
                self.mapper.apply(&mut entry, key, value);
            }
            entries.push(entry);
        }
        entries
    }
}
