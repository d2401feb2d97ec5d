// gearenv: OpenShift Gear Environment Composer
//
// SPDX-FileCopyrightText: 2026 Gearenv Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Gear environment composition.
//!
//! ```text
//! source dirs --> loader::load --> Environ (BTreeMap)
//!                                     |
//!                              Composer::for_gear
//!                                     |
//!   1. node-wide system dir           |
//!   2. gear .env + */env              v
//!   3. .env subdirs (not user_vars)  merge, later wins
//!   4. cartridge env/, primary last
//!   5. PATH / LD_LIBRARY_PATH assembly (elements)
//!   6. user_vars overrides
//! ```

pub mod composer;
pub mod container;
pub mod elements;
pub mod loader;


pub use composer::Composer;
pub use container::Environ;
pub use loader::load;

/// Node-wide environment directory loaded before any gear sources.
pub const SYSTEM_ENV_DIR: &str = "/etc/openshift/env";

/// Variable naming the primary cartridge's home directory.
pub const PRIMARY_CARTRIDGE_DIR_VAR: &str = "OPENSHIFT_PRIMARY_CARTRIDGE_DIR";

/// Name of the gear-local environment directory.
pub const DOT_ENV_DIR: &str = ".env";

/// Subdirectory of `.env` holding user-provided overrides.
pub const USER_VARS_DIR: &str = "user_vars";

/// Environment directory inside each cartridge.
pub const CARTRIDGE_ENV_DIR: &str = "env";

/// Extension of template files skipped by the loader.
pub const TEMPLATE_EXT: &str = "erb";
