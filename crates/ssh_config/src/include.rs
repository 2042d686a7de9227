//! Recursive resolution of OpenSSH `Include` directives.
//!
//! Given a root config file, produces the ordered, de-duplicated list of
//! every file reachable through `Include` lines: depth-first, pre-order,
//! root-adjacent first. This matches OpenSSH's effective processing order
//! closely enough for alias precedence.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use hostbook_paths::{absolutize, expand_tilde};
use rustc_hash::FxHashSet;
use thiserror::Error;
use tracing::debug;

use crate::scan::{split_fields, strip_inline_comment, unquote};

/// Non-fatal problem reading an include-bearing file mid-scan.
///
/// An unreadable file is *not* a warning (it resolves to "no includes",
/// like OpenSSH); this only covers I/O failures after the file was opened.
#[derive(Debug, Error)]
#[error("failed to scan {path}: {source}")]
pub struct ScanWarning {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Result of resolving a root file's include graph.
///
/// `files` never contains the root itself. When `warning` is set, `files`
/// still holds everything discovered before the failure.
#[derive(Debug)]
pub struct Resolution {
    pub files: Vec<PathBuf>,
    pub warning: Option<ScanWarning>,
}

/// Resolves `Include` directives against an injected home directory, so
/// tests can substitute a synthetic home for tilde expansion.
pub struct IncludeResolver {
    home: PathBuf,
}

impl Default for IncludeResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl IncludeResolver {
    /// Resolver using the process-level home directory.
    pub fn new() -> Self {
        Self {
            home: hostbook_paths::home_dir().clone(),
        }
    }

    /// Resolver with an explicit home directory for tilde expansion.
    pub fn with_home(home: PathBuf) -> Self {
        Self { home }
    }

    /// Resolve the include graph below `root`.
    ///
    /// The traversal keeps one visited set for the whole walk, seeded with
    /// the root: a path is opened at most once, which is both the cycle
    /// guard and the de-duplication mechanism. The walk itself is an
    /// explicit work stack rather than recursion, so deeply nested include
    /// chains cannot overflow the call stack; candidates are re-checked
    /// against the visited set when popped, which preserves the exact
    /// pre-order emission of the recursive formulation.
    pub fn resolve(&self, root: &Path) -> Resolution {
        let root = expand_tilde(&root.to_string_lossy(), &self.home);
        let root = absolutize(&root);

        let mut visited: FxHashSet<PathBuf> = FxHashSet::default();
        visited.insert(root.clone());

        let mut files = Vec::new();

        // Only the root file's scan failure surfaces as a warning; nested
        // files keep the lenient treatment.
        let (candidates, warning) = self.scan_candidates(&root);
        let warning = warning.map(|source| ScanWarning {
            path: root.clone(),
            source,
        });

        let mut stack: Vec<PathBuf> = candidates;
        stack.reverse();

        while let Some(candidate) = stack.pop() {
            if !visited.insert(candidate.clone()) {
                continue;
            }
            debug!(path = %candidate.display(), "resolved include");
            files.push(candidate.clone());

            let (children, _) = self.scan_candidates(&candidate);
            for child in children.into_iter().rev() {
                stack.push(child);
            }
        }

        Resolution { files, warning }
    }

    /// Scan one file for `Include` lines and expand every pattern into an
    /// ordered candidate path list. Candidates are absolute but not yet
    /// checked against the visited set.
    ///
    /// An unopenable file yields no candidates and no error.
    fn scan_candidates(&self, path: &Path) -> (Vec<PathBuf>, Option<std::io::Error>) {
        let mut file = match File::open(path) {
            Ok(f) => f,
            Err(_) => return (Vec::new(), None),
        };

        let mut contents = String::new();
        if let Err(err) = file.read_to_string(&mut contents) {
            return (Vec::new(), Some(err));
        }

        let base_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("/"));

        let mut candidates = Vec::new();

        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let line = strip_inline_comment(line);
            if line.is_empty() {
                continue;
            }

            let fields = split_fields(line);
            let Some(keyword) = fields.first() else {
                continue;
            };
            if !keyword.eq_ignore_ascii_case("Include") {
                continue;
            }

            for field in &fields[1..] {
                let pattern = unquote(field.trim());
                if pattern.is_empty() {
                    continue;
                }
                let mut pattern = expand_tilde(pattern, &self.home);
                if !pattern.is_absolute() {
                    pattern = base_dir.join(pattern);
                }

                // OpenSSH ignores unmatched or malformed includes.
                let matches = match glob::glob(&pattern.to_string_lossy()) {
                    Ok(paths) => paths,
                    Err(_) => continue,
                };
                for matched in matches.flatten() {
                    candidates.push(absolutize(&matched));
                }
            }
        }

        (candidates, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    fn resolver(dir: &TempDir) -> IncludeResolver {
        IncludeResolver::with_home(dir.path().to_path_buf())
    }

    #[test]
    fn no_includes_yields_empty_list() {
        let dir = TempDir::new().unwrap();
        let root = write(&dir, "config", "Host a\n  HostName a.example\n");
        let res = resolver(&dir).resolve(&root);
        assert!(res.files.is_empty());
        assert!(res.warning.is_none());
    }

    #[test]
    fn single_include() {
        let dir = TempDir::new().unwrap();
        let extra = write(&dir, "extra.conf", "");
        let root = write(&dir, "config", "Include extra.conf\n");
        let res = resolver(&dir).resolve(&root);
        assert_eq!(res.files, vec![extra]);
    }

    #[test]
    fn missing_root_is_silent() {
        let dir = TempDir::new().unwrap();
        let res = resolver(&dir).resolve(&dir.path().join("nope"));
        assert!(res.files.is_empty());
        assert!(res.warning.is_none());
    }

    #[test]
    fn unmatched_pattern_is_ignored() {
        let dir = TempDir::new().unwrap();
        let root = write(&dir, "config", "Include conf.d/*.conf\n");
        let res = resolver(&dir).resolve(&root);
        assert!(res.files.is_empty());
        assert!(res.warning.is_none());
    }

    #[test]
    fn mutual_includes_terminate() {
        let dir = TempDir::new().unwrap();
        let a = write(&dir, "a.conf", "Include b.conf\n");
        let b = write(&dir, "b.conf", "Include a.conf\n");
        let res = resolver(&dir).resolve(&a);
        assert_eq!(res.files, vec![b.clone()]);

        // Symmetric when started from the other side.
        let res = resolver(&dir).resolve(&b);
        assert_eq!(res.files, vec![a]);
    }

    #[test]
    fn preorder_depth_first_emission() {
        let dir = TempDir::new().unwrap();
        let deep = write(&dir, "deep.conf", "");
        let mid = write(&dir, "mid.conf", "Include deep.conf\n");
        let sibling = write(&dir, "sibling.conf", "");
        let root = write(&dir, "config", "Include mid.conf sibling.conf\n");
        let res = resolver(&dir).resolve(&root);
        assert_eq!(res.files, vec![mid, deep, sibling]);
    }

    #[test]
    fn later_sibling_already_claimed_by_subtree() {
        // Root lists b then c, but b pulls c in first; c must appear inside
        // b's subtree and not again at root level.
        let dir = TempDir::new().unwrap();
        let c = write(&dir, "c.conf", "");
        let e = write(&dir, "e.conf", "");
        let b = write(&dir, "b.conf", "Include c.conf\nInclude e.conf\n");
        let root = write(&dir, "config", "Include b.conf\nInclude c.conf\n");
        let res = resolver(&dir).resolve(&root);
        assert_eq!(res.files, vec![b, c, e]);
    }

    #[test]
    fn root_never_reappears() {
        let dir = TempDir::new().unwrap();
        let a = write(&dir, "a.conf", "Include config\n");
        let root = write(&dir, "config", "Include a.conf\n");
        let res = resolver(&dir).resolve(&root);
        assert_eq!(res.files, vec![a]);
    }

    #[test]
    fn tilde_patterns_use_injected_home() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("conf.d")).unwrap();
        let inc = dir.path().join("conf.d").join("work.conf");
        fs::write(&inc, "").unwrap();
        let root = write(&dir, "config", "Include ~/conf.d/work.conf\n");
        let res = resolver(&dir).resolve(&root);
        assert_eq!(res.files, vec![absolutize(&inc)]);
    }

    #[test]
    fn quoted_patterns_and_comments() {
        let dir = TempDir::new().unwrap();
        let extra = write(&dir, "extra.conf", "");
        let root = write(
            &dir,
            "config",
            "# leading comment\nInclude \"extra.conf\" # trailing\n",
        );
        let res = resolver(&dir).resolve(&root);
        assert_eq!(res.files, vec![extra]);
    }

    #[test]
    fn include_keyword_is_case_insensitive() {
        let dir = TempDir::new().unwrap();
        let extra = write(&dir, "extra.conf", "");
        let root = write(&dir, "config", "iNcLuDe extra.conf\n");
        let res = resolver(&dir).resolve(&root);
        assert_eq!(res.files, vec![extra]);
    }

    #[test]
    fn non_include_lines_are_skipped() {
        let dir = TempDir::new().unwrap();
        write(&dir, "extra.conf", "");
        let root = write(
            &dir,
            "config",
            "Host extra.conf\nIncludeX extra.conf\nHostName extra.conf\n",
        );
        let res = resolver(&dir).resolve(&root);
        assert!(res.files.is_empty());
    }

    #[test]
    fn glob_expansion_is_sorted_per_directory() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("conf.d")).unwrap();
        let b = dir.path().join("conf.d").join("b.conf");
        let a = dir.path().join("conf.d").join("a.conf");
        fs::write(&b, "").unwrap();
        fs::write(&a, "").unwrap();
        let root = write(&dir, "config", "Include conf.d/*.conf\n");
        let res = resolver(&dir).resolve(&root);
        assert_eq!(res.files, vec![absolutize(&a), absolutize(&b)]);
    }
}
