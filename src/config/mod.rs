// modrules: Module Build Rules Resolver
//
// SPDX-FileCopyrightText: 2026 modrules contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for modrules.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. TOML files passed to the loader
//! 3. MODRULES_* env vars
//! 4. set() overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! Nesting uses a double underscore so single underscores stay inside
//! field names:
//!
//! ```text
//! MODRULES_GLOBAL__LOG_FILE=plan.log  → global.log_file = "plan.log"
//! MODRULES_MODULE__NAME=mirror        → module.name = "mirror"
//! ```
//!
//! # Component Table
//!
//! ```toml
//! [[components]]
//! name = "Python"
//! install_root = "E:/Anaconda27"   # deployment-overridable
//! x64_suffix = "_64"
//! library = "libs/python27.lib"
//! platforms = ["Win32", "Win64"]
//! ```

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::component::OptionalComponent;
use crate::error::{ConfigError, RulesResult};
use crate::resolver::{self, BuildPlan};
use crate::target::{TargetDescriptor, TargetPlatform};

use loader::ConfigLoader;
use types::{GlobalConfig, ModuleConfig};

/// Complete library configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Baseline module descriptor.
    pub module: ModuleConfig,
    /// Optional component table.
    pub components: Vec<OptionalComponent>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            global: GlobalConfig::default(),
            module: ModuleConfig::default(),
            components: vec![OptionalComponent {
                name: "Python".to_string(),
                install_root: PathBuf::from("E:/Anaconda27"),
                x64_suffix: "_64".to_string(),
                library: PathBuf::from("libs/python27.lib"),
                platforms: [TargetPlatform::Win32, TargetPlatform::Win64]
                    .into_iter()
                    .collect(),
            }],
        }
    }
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use modrules::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file("config/default.toml")
    ///     .add_toml_file_optional("config/local.toml")
    ///     .with_env_prefix("MODRULES")
    ///     .build()?;
    /// # Ok::<(), modrules::error::RulesError>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file (simple API).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML,
    /// or does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> RulesResult<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match
    /// the `Config` structure.
    pub fn parse(content: &str) -> RulesResult<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Resolve a build plan for one target from this configuration.
    ///
    /// Convenience wrapper over [`resolver::resolve`]; may be called once
    /// per configured target platform, each call is independent.
    #[must_use]
    pub fn build_plan(&self, target: &TargetDescriptor) -> BuildPlan {
        resolver::resolve(target, &self.module, &self.components)
    }

    /// Validate the component table.
    ///
    /// # Errors
    ///
    /// Returns an error if any component entry is malformed or if two
    /// components would emit the same feature flag.
    pub fn validate(&self) -> RulesResult<()> {
        let mut flags = BTreeMap::new();

        for component in &self.components {
            component.validate()?;

            if let Some(previous) = flags.insert(component.feature_flag(), &component.name) {
                return Err(ConfigError::InvalidValue {
                    section: format!("components.{}", component.name),
                    key: "name".to_string(),
                    message: format!(
                        "feature flag '{}' already emitted by component '{previous}'",
                        component.feature_flag()
                    ),
                }
                .into());
            }
        }

        Ok(())
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_module_options(&mut options);
        self.format_component_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".into(),
            self.global.log_file.display().to_string(),
        );
    }

    fn format_module_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("module.name".into(), self.module.name.clone());
        options.insert(
            "module.dependencies".into(),
            self.module.dependencies.join(", "),
        );
        if !self.module.include_paths.is_empty() {
            options.insert(
                "module.include_paths".into(),
                self.module
                    .include_paths
                    .iter()
                    .map(|p| p.display().to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            );
        }
    }

    fn format_component_options(&self, options: &mut BTreeMap<String, String>) {
        for component in &self.components {
            let prefix = format!("components.{}", component.name);
            options.insert(
                format!("{prefix}.install_root"),
                component.install_root.display().to_string(),
            );
            options.insert(
                format!("{prefix}.library"),
                component.library.display().to_string(),
            );
            options.insert(
                format!("{prefix}.platforms"),
                component
                    .platforms
                    .iter()
                    .map(|p| p.as_str().to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            options.insert(format!("{prefix}.flag"), component.feature_flag());
        }
    }
}
