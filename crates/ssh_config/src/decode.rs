//! External decoding capabilities consumed by the loader.
//!
//! The `Host` block grammar is owned outside this crate: a [`ConfigDecode`]
//! implementation turns one file's contents into host blocks, and a
//! [`MapDirective`] implementation populates entry attributes from block
//! directives. The loader only orchestrates which files feed the decoder
//! and how the resulting entries merge.

use std::path::Path;

use registry::HostEntry;

/// One decoded `Host` block: the patterns it matched under plus its
/// key/value directives in file order.
#[derive(Debug, Clone, Default)]
pub struct HostBlock {
    pub patterns: Vec<String>,
    pub directives: Vec<(String, String)>,
}

/// Decodes one config file's contents into host blocks.
pub trait ConfigDecode {
    fn decode(&self, path: &Path, contents: &str) -> anyhow::Result<Vec<HostBlock>>;
}

/// Populates a [`HostEntry`] attribute from one decoded directive.
///
/// Implementations must ignore keys they do not understand; the loader
/// feeds every directive of a block through the mapper in file order.
pub trait MapDirective {
    fn apply(&self, entry: &mut HostEntry, key: &str, value: &str);
}

/// Built-in mapper for the common OpenSSH client keys.
///
/// Handles `HostName`, `User`, `Port` and `IdentityFile` (repeatable),
/// compared case-insensitively. Unknown keys and an unparsable `Port` are
/// ignored, leaving the entry defaults in place.
#[derive(Debug, Default)]
pub struct StandardMapper;

impl MapDirective for StandardMapper {
    fn apply(&self, entry: &mut HostEntry, key: &str, value: &str) {
        match key.to_ascii_lowercase().as_str() {
            "hostname" => entry.host = value.to_string(),
            "user" => entry.user = value.to_string(),
            "port" => {
                if let Ok(port) = value.parse::<u16>() {
                    entry.port = port;
                }
            }
            "identityfile" => entry.identity_files.push(value.to_string()),
            _ => {}
        }
    }
}
