// gearenv: OpenShift Gear Environment Composer
//
// SPDX-FileCopyrightText: 2026 Gearenv Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |           gather / load / config
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |   TOML, layered settings  |
//!              '-------------+-------------'
//!                            |
//!                            v
//!              ,---------------------------,
//!              |          environ          |
//!              |  loader -> composer ->    |
//!              |  search path elements     |
//!              '---------------------------'
//!
//!   +-----------------------------------------+
//!   |  foundation       error, logging        |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod environ;
pub mod error;
pub mod logging;
