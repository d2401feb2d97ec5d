// gearenv: OpenShift Gear Environment Composer
//
// SPDX-FileCopyrightText: 2026 Gearenv Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Assembles search-path variables from cartridge-contributed elements.
//!
//! ```text
//! OPENSHIFT_<CART>_PATH_ELEMENT=/opt/cart/bin   (one per cartridge)
//!                  |
//!                  v
//! PATH = primary : others (lexicographic) : base
//!
//! LD_LIBRARY_PATH = others (lexicographic) : primary : base
//! ```

use regex::Regex;
use std::sync::OnceLock;

use super::container::Environ;

/// Search-path variables assembled from element keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPathVar {
    Path,
    LdLibraryPath,
}

impl SearchPathVar {
    /// The environment variable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Path => "PATH",
            Self::LdLibraryPath => "LD_LIBRARY_PATH",
        }
    }

    /// Pattern matching element keys contributed for this variable.
    fn element_pattern(self) -> &'static Regex {
        static PATH_ELEMENT: OnceLock<Regex> = OnceLock::new();
        static LD_LIBRARY_PATH_ELEMENT: OnceLock<Regex> = OnceLock::new();

        match self {
            Self::Path => PATH_ELEMENT.get_or_init(|| compile(r"^OPENSHIFT_.*_PATH_ELEMENT")),
            Self::LdLibraryPath => LD_LIBRARY_PATH_ELEMENT
                .get_or_init(|| compile(r"^OPENSHIFT_.*_LD_LIBRARY_PATH_ELEMENT")),
        }
    }
}

/// Replace `var` in `env` with its element fragments joined by `:`.
pub(crate) fn assemble(env: &mut Environ, var: SearchPathVar, primary_tag: Option<&str>) {
    let joined = collect_fragments(env, var, primary_tag).join(":");
    env.set(var.name(), joined);
}

/// Fragments for `var` in precedence order.
///
/// Element keys are scanned in lexicographic order. The primary cartridge's
/// element is pulled out of the scan and placed first for `PATH`, last for
/// `LD_LIBRARY_PATH`. Any base value the variable already had goes at the
/// very end, even when empty.
fn collect_fragments(env: &Environ, var: SearchPathVar, primary_tag: Option<&str>) -> Vec<String> {
    let base = env.get(var.name()).map(str::to_owned);
    let primary_key = primary_tag.map(|tag| format!("OPENSHIFT_{tag}_{}_ELEMENT", var.name()));

    let mut working = env.clone();
    if var == SearchPathVar::Path {
        // The PATH element pattern also matches LD_LIBRARY_PATH element
        // keys, so those are dropped before the scan.
        let exclude = ld_library_suffix();
        working.retain(|key, _| !exclude.is_match(key));
    }

    let pattern = var.element_pattern();
    let mut fragments: Vec<String> = working
        .iter()
        .filter(|&(key, _)| pattern.is_match(key) && Some(key) != primary_key.as_deref())
        .map(|(_, value)| value.to_owned())
        .collect();

    if let Some(primary_value) = primary_key.as_deref().and_then(|key| working.get(key)) {
        match var {
            SearchPathVar::Path => fragments.insert(0, primary_value.to_owned()),
            SearchPathVar::LdLibraryPath => fragments.push(primary_value.to_owned()),
        }
    }

    if let Some(base) = base {
        fragments.push(base);
    }

    fragments
}

fn ld_library_suffix() -> &'static Regex {
    static LD_LIBRARY_SUFFIX: OnceLock<Regex> = OnceLock::new();
    LD_LIBRARY_SUFFIX.get_or_init(|| compile(r"_LD_LIBRARY_PATH_ELEMENT$"))
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("element pattern compiles")
}
