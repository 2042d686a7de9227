//! The host entry domain type.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One connectable host in the registry.
///
/// Entries are rebuilt in full on every load; `source_file` records which
/// config file defined the entry, and `readonly` is set for entries that
/// did not originate in the root config file (they should not be edited in
/// place).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostEntry {
    /// Canonical short name. Unique across one load of the registry.
    pub primary_alias: String,
    /// Every non-wildcard name the same block matched under, primary first.
    pub aliases: Vec<String>,
    pub host: String,
    pub user: String,
    pub port: u16,
    pub identity_files: Vec<String>,
    /// Free-form labels; origin is up to the directive mapper.
    pub tags: Vec<String>,
    /// Set when the user pinned the entry; drives the default listing order.
    pub pinned_at: Option<DateTime<Utc>>,
    /// Absolute path of the config file that defined this entry.
    pub source_file: PathBuf,
    pub readonly: bool,
}

impl HostEntry {
    /// A fresh entry with connection defaults (port 22, nothing else set).
    pub fn new(primary_alias: impl Into<String>) -> Self {
        let primary_alias = primary_alias.into();
        Self {
            aliases: vec![primary_alias.clone()],
            primary_alias,
            host: String::new(),
            user: String::new(),
            port: 22,
            identity_files: Vec::new(),
            tags: Vec::new(),
            pinned_at: None,
            source_file: PathBuf::new(),
            readonly: false,
        }
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned_at.is_some()
    }
}
