//! SSH client config ingestion for hostbook.
//!
//! Resolves `Include` directives recursively, decodes each discovered file
//! through an external [`ConfigDecode`] capability, and merges the decoded
//! host blocks into a flat registry with main-config-wins precedence.
//! This crate owns *which files* feed the decoder and *how* entries merge;
//! the `Host` block grammar itself stays behind the decode seam.

mod scan;

pub mod decode;
pub mod include;
pub mod loader;

pub use decode::{ConfigDecode, HostBlock, MapDirective, StandardMapper};
pub use include::{IncludeResolver, Resolution, ScanWarning};
pub use loader::ConfigLoader;
