//! Mutation-path field validation.
//!
//! Runs before any attempt to persist a user-supplied entry and fails fast
//! with a descriptive error. The read/ranking pipeline never validates;
//! whatever the config files say is loaded as-is.

use std::net::IpAddr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::entry::HostEntry;

static ALIAS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.-]+$").expect("alias pattern"));
static HOST_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9.-]+$").expect("host pattern"));

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidateError {
    #[error("alias is required")]
    AliasRequired,
    #[error("alias may contain letters, digits, dot, dash, underscore")]
    AliasCharset,
    #[error("host/IP is required")]
    HostRequired,
    #[error("host must not contain spaces")]
    HostSpaces,
    #[error("host contains invalid characters")]
    HostCharset,
    #[error("host must not start or end with a dot")]
    HostEdgeDot,
    #[error("host must not contain empty labels")]
    HostEmptyLabel,
    #[error("hostname labels must not start or end with a hyphen")]
    HostLabelHyphen,
    #[error("port must be between 1 and 65535")]
    PortRange,
}

/// Validate user-supplied entry fields before persistence.
///
/// Hosts that parse as IP addresses skip the hostname-shape checks.
pub fn validate_entry(entry: &HostEntry) -> Result<(), ValidateError> {
    if entry.primary_alias.trim().is_empty() {
        return Err(ValidateError::AliasRequired);
    }
    if !ALIAS_RE.is_match(&entry.primary_alias) {
        return Err(ValidateError::AliasCharset);
    }

    let host = entry.host.trim();
    if host.is_empty() {
        return Err(ValidateError::HostRequired);
    }
    if entry.host.parse::<IpAddr>().is_err() {
        validate_hostname(&entry.host)?;
    }

    if entry.port == 0 {
        return Err(ValidateError::PortRange);
    }
    Ok(())
}

fn validate_hostname(host: &str) -> Result<(), ValidateError> {
    if host.contains(' ') {
        return Err(ValidateError::HostSpaces);
    }
    if !HOST_RE.is_match(host) {
        return Err(ValidateError::HostCharset);
    }
    if host.starts_with('.') || host.ends_with('.') {
        return Err(ValidateError::HostEdgeDot);
    }
    for label in host.split('.') {
        if label.is_empty() {
            return Err(ValidateError::HostEmptyLabel);
        }
        if label.starts_with('-') || label.ends_with('-') {
            return Err(ValidateError::HostLabelHyphen);
        }
    }
    Ok(())
}
