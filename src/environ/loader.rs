// gearenv: OpenShift Gear Environment Composer
//
// SPDX-FileCopyrightText: 2026 Gearenv Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Reads environment variable files into an [`Environ`].
//!
//! ```text
//! spec ".env"          --> ".env/*"        (implicit wildcard)
//! spec "gear/*/env"    --> "gear/*/env/*"
//! spec ".env/user_vars/*"                  (kept as-is)
//!        |
//!        v
//! expand_pattern: segment-wise glob over directory entries
//!        |
//!        v
//! per file: skip *.erb, skip non-files,
//!           name = base name, value = parsed content
//! ```
//!
//! A file that cannot be parsed is logged and skipped; it never aborts
//! the surrounding composition.

use std::ffi::OsStr;
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::warn;
use wax::Glob;
use wax::Program as _;

use super::TEMPLATE_EXT;
use super::container::Environ;
use crate::error::{GearEnvResult, SourceError};

const EXPORT_PREFIX: &str = "export ";

/// Load environment variables from a sequence of source specifications.
///
/// Each specification is a directory or glob pattern; a trailing wildcard
/// is appended when missing. Later specifications override earlier ones,
/// and within one expansion later files override earlier ones in
/// lexicographic order.
pub fn load<I>(specs: I) -> Environ
where
    I: IntoIterator,
    I::Item: AsRef<Path>,
{
    let mut env = Environ::new();
    for spec in specs {
        load_spec(&mut env, spec.as_ref());
    }
    env
}

/// Expand one source specification and fold its files into `env`.
fn load_spec(env: &mut Environ, spec: &Path) {
    let mut pattern = spec.to_string_lossy().into_owned();
    if !pattern.ends_with('*') {
        pattern.push_str("/*");
    }

    let entries = match expand_pattern(&pattern) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(spec = %spec.display(), error = %e, "skipping environment source");
            return;
        }
    };

    for entry in entries {
        if entry.extension().is_some_and(|ext| ext == TEMPLATE_EXT) {
            continue;
        }
        if !fs::metadata(&entry).is_ok_and(|meta| meta.is_file()) {
            continue;
        }
        let Some(name) = entry.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            continue;
        };

        match read_var_file(&entry) {
            Ok(value) => {
                env.set(name, value);
            }
            Err(e) => {
                warn!(path = %entry.display(), error = %e, "failed to process environment file");
            }
        }
    }
}

/// Parse a single variable file into its value.
///
/// Content is right-trimmed. An `export NAME=VALUE` line yields everything
/// after the first `=`, with at most one leading and one trailing quote
/// stripped; anything else is taken verbatim.
fn read_var_file(path: &Path) -> GearEnvResult<String> {
    let raw = fs::read_to_string(path).map_err(|source| SourceError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let contents = raw.trim_end();

    if let Some(assignment) = contents.strip_prefix(EXPORT_PREFIX) {
        let Some((_, value)) = assignment.split_once('=') else {
            return Err(SourceError::MissingAssignment {
                path: path.display().to_string(),
                content: contents.to_string(),
            }
            .into());
        };
        Ok(strip_quotes(value).to_string())
    } else {
        Ok(contents.to_string())
    }
}

/// Strip at most one leading and one trailing single or double quote.
fn strip_quotes(value: &str) -> &str {
    let value = value.strip_prefix(['\'', '"']).unwrap_or(value);
    value.strip_suffix(['\'', '"']).unwrap_or(value)
}

/// Expand a glob pattern into existing paths, segment by segment.
///
/// Wildcard segments match the sorted entries of each candidate directory.
/// Hidden entries only match when the segment itself starts with a dot.
fn expand_pattern(pattern: &str) -> GearEnvResult<Vec<PathBuf>> {
    let mut bases = vec![PathBuf::new()];

    for component in Path::new(pattern).components() {
        match component {
            Component::Normal(segment) if is_glob_segment(segment) => {
                let text = segment.to_string_lossy();
                let glob = Glob::new(&text).map_err(|e| SourceError::Pattern {
                    pattern: pattern.to_string(),
                    message: e.to_string(),
                })?;
                bases = expand_segment(&bases, &glob, text.starts_with('.'));
            }
            other => {
                for base in &mut bases {
                    base.push(other.as_os_str());
                }
            }
        }
    }

    bases.retain(|path| path.exists());
    Ok(bases)
}

/// Match one glob segment against the entries of every base directory.
fn expand_segment(bases: &[PathBuf], glob: &Glob<'_>, hidden_ok: bool) -> Vec<PathBuf> {
    let mut expanded = Vec::new();

    for base in bases {
        let dir = if base.as_os_str().is_empty() {
            Path::new(".")
        } else {
            base.as_path()
        };
        let Ok(entries) = fs::read_dir(dir) else {
            continue;
        };

        let mut names: Vec<String> = entries
            .filter_map(std::result::Result::ok)
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect();
        names.sort();

        for name in names {
            if !hidden_ok && name.starts_with('.') {
                continue;
            }
            if glob.is_match(name.as_str()) {
                expanded.push(base.join(&name));
            }
        }
    }

    expanded
}

fn is_glob_segment(segment: &OsStr) -> bool {
    segment
        .to_str()
        .is_some_and(|s| s.contains(['*', '?', '[', '{']))
}
