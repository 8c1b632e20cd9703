// modrules: Module Build Rules Resolver
//
// SPDX-FileCopyrightText: 2026 modrules contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!        hosting build tool (caller)
//!                    |
//!         +----------+----------+
//!         v                     v
//!       config            TargetDescriptor
//!  TOML, layered           platform -> arch
//!  module baseline,
//!  [[components]]
//!         |                     |
//!         +----------+----------+
//!                    v
//!           resolver::resolve()
//!                    |
//!                    v
//!                BuildPlan
//!       deps / includes / libs / flags
//!
//!   +--------------------------------------+
//!   |  target      platforms, architecture |
//!   |  component   optional native deps    |
//!   +--------------------------------------+
//!   |  foundation  error, logging          |
//!   +--------------------------------------+
//! ```
//!
//! The crate has no CLI and performs no I/O of its own beyond reading
//! configuration files: it turns "target platform + optional component
//! availability" into a [`resolver::BuildPlan`] the hosting build tool
//! materializes into compiler and linker arguments.

pub mod component;
pub mod config;
pub mod error;
pub mod logging;
pub mod resolver;
pub mod target;
