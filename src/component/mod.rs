// modrules: Module Build Rules Resolver
//
// SPDX-FileCopyrightText: 2026 modrules contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Optional native components.
//!
//! ```text
//! OptionalComponent
//!   name, install_root, x64_suffix, library, platforms
//!   derived: supports(), arch_install_root(), library_path(),
//!            feature_flag()  ->  WITH_<NAME>_BINDING
//! ```
//!
//! A component is a third-party native dependency (e.g. a scripting
//! runtime) whose availability is platform-conditional. Presence is
//! declared by the static platform table, never probed on disk: the
//! resolver composes paths without touching the filesystem.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::target::{Arch, TargetPlatform};

/// An optional, platform-conditional native dependency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OptionalComponent {
    /// Component name; also the stem of the feature-flag name.
    pub name: String,
    /// Base install root (deployment-specific, supplied by config).
    pub install_root: PathBuf,
    /// Suffix appended to the install root's final segment on 64-bit
    /// targets (e.g. `_64` turning `Anaconda27` into `Anaconda27_64`).
    pub x64_suffix: String,
    /// Library artifact path, relative to the arch-qualified root.
    pub library: PathBuf,
    /// Platforms the component is available on.
    pub platforms: BTreeSet<TargetPlatform>,
}

impl Default for OptionalComponent {
    fn default() -> Self {
        Self {
            name: String::new(),
            install_root: PathBuf::new(),
            x64_suffix: "_64".to_string(),
            library: PathBuf::new(),
            platforms: BTreeSet::new(),
        }
    }
}

impl OptionalComponent {
    /// Whether the component is available on the given platform.
    #[must_use]
    pub fn supports(&self, platform: TargetPlatform) -> bool {
        self.platforms.contains(&platform)
    }

    /// Architecture-qualified install root.
    ///
    /// On x64 the suffix is appended to the final path segment as a plain
    /// string; on x86 the base root is returned unchanged.
    #[must_use]
    pub fn arch_install_root(&self, arch: Arch) -> PathBuf {
        if !arch.is_64_bit() || self.x64_suffix.is_empty() {
            return self.install_root.clone();
        }

        let mut root = self.install_root.clone().into_os_string();
        root.push(&self.x64_suffix);
        PathBuf::from(root)
    }

    /// Full path to the library artifact for the given architecture.
    #[must_use]
    pub fn library_path(&self, arch: Arch) -> PathBuf {
        self.arch_install_root(arch).join(&self.library)
    }

    /// Feature-flag name surfaced to compiled code: `WITH_<NAME>_BINDING`,
    /// with the name uppercased and non-alphanumerics folded to `_`.
    #[must_use]
    pub fn feature_flag(&self) -> String {
        let stem: String = self
            .name
            .to_uppercase()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();
        format!("WITH_{stem}_BINDING")
    }

    /// Validate the component entry from configuration.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the name is empty or if the install root
    /// or library path is missing. An empty platform set is legal: it
    /// simply means the component is never enabled.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let section = format!("components.{}", self.name);

        if self.name.is_empty() {
            return Err(ConfigError::InvalidValue {
                section: "components".to_string(),
                key: "name".to_string(),
                message: "component name must not be empty".to_string(),
            });
        }
        if self.install_root.as_os_str().is_empty() {
            return Err(ConfigError::MissingKey {
                section,
                key: "install_root".to_string(),
            });
        }
        if self.library.as_os_str().is_empty() {
            return Err(ConfigError::MissingKey {
                section,
                key: "library".to_string(),
            });
        }

        Ok(())
    }
}
