// modrules: Module Build Rules Resolver
//
// SPDX-FileCopyrightText: 2026 modrules contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for modrules.
//!
//! ```text
//! Config: GlobalConfig, ModuleConfig, [[components]]
//! module baseline = dependencies + include paths emitted for every target
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::logging::LogLevel;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for stdout output (0-5).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-5).
    pub file_log_level: LogLevel,
    /// Path to log file.
    pub log_file: PathBuf,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: PathBuf::from("modrules.log"),
        }
    }
}

/// Baseline module descriptor: what the module needs on every target,
/// independent of platform or optional components.
///
/// The original build scripts hardcoded these lists; here they are
/// configuration so deployments can adjust them without touching the
/// resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModuleConfig {
    /// Module name, used for display only.
    pub name: String,
    /// Unconditional module dependencies (engine/runtime core modules).
    pub dependencies: Vec<String>,
    /// Unconditional public include paths.
    pub include_paths: Vec<PathBuf>,
}

impl Default for ModuleConfig {
    fn default() -> Self {
        Self {
            name: "module".to_string(),
            dependencies: vec![
                "Core".to_string(),
                "CoreUObject".to_string(),
                "Engine".to_string(),
                "InputCore".to_string(),
                "SensorLib".to_string(),
            ],
            include_paths: vec![
                PathBuf::from("Sensor/Public"),
                PathBuf::from("Sensor/Classes"),
            ],
        }
    }
}
