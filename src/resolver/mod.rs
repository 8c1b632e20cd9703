// modrules: Module Build Rules Resolver
//
// SPDX-FileCopyrightText: 2026 modrules contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build plan resolution.
//!
//! ```text
//! resolve(target, baseline, components)
//!   1. seed deps + includes from the module baseline
//!   2. per component: platform membership test
//!   3. supported   -> push library path + arch-qualified include root
//!   4. always      -> WITH_<NAME>_BINDING = 1|0
//!   5. return BuildPlan
//! ```
//!
//! Resolution is a pure single pass: no filesystem probing, no shared
//! state, no failure path. A platform outside a component's table (or one
//! the crate does not recognize at all) disables the component instead of
//! erroring, so a missing optional dependency never blocks the base
//! module from building.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;
use tracing::{debug, trace};

use crate::component::OptionalComponent;
use crate::config::types::ModuleConfig;
use crate::target::TargetDescriptor;

/// The resolved build descriptor handed to the hosting build tool.
///
/// Produced fresh on every resolution; the caller treats it as a value
/// object: dependency names become link targets, include paths become
/// `-I`-style flags, library paths become link-library flags, and feature
/// flags become preprocessor definitions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildPlan {
    /// Required module dependencies (order-insensitive).
    pub module_dependencies: BTreeSet<String>,
    /// Include search paths, baseline first, then enabled components in
    /// table order.
    pub public_include_paths: Vec<PathBuf>,
    /// Library artifacts to link, enabled components in table order.
    pub additional_libraries: Vec<PathBuf>,
    /// Feature flags, one per component, always present with value 0 or 1.
    pub feature_flags: BTreeMap<String, u8>,
}

impl BuildPlan {
    /// Whether a feature flag is present and set to 1.
    #[must_use]
    pub fn is_enabled(&self, flag: &str) -> bool {
        self.feature_flags.get(flag) == Some(&1)
    }

    /// Render feature flags as `NAME=0|1` preprocessor definition lines.
    #[must_use]
    pub fn definitions(&self) -> Vec<String> {
        self.feature_flags
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect()
    }
}

/// Resolve a build plan for one target.
///
/// The baseline dependency and include lists are emitted unconditionally,
/// independent of platform or component availability. Each component then
/// contributes exactly one library path and one include root when its
/// platform-support check passes, and nothing (except its `=0` flag) when
/// it does not.
#[must_use]
pub fn resolve(
    target: &TargetDescriptor,
    baseline: &ModuleConfig,
    components: &[OptionalComponent],
) -> BuildPlan {
    debug!(
        target = %target,
        components = components.len(),
        "Resolving build plan"
    );

    let mut plan = BuildPlan {
        module_dependencies: baseline.dependencies.iter().cloned().collect(),
        public_include_paths: baseline.include_paths.clone(),
        ..BuildPlan::default()
    };

    for component in components {
        let supported = component.supports(target.platform());

        if supported {
            let root = component.arch_install_root(target.arch());

            trace!(
                component = %component.name,
                root = %root.display(),
                "Component enabled"
            );

            plan.additional_libraries
                .push(component.library_path(target.arch()));
            plan.public_include_paths.push(root);
        } else {
            trace!(
                component = %component.name,
                platform = %target.platform(),
                "Component not supported on target, disabled"
            );
        }

        // The flag is always emitted so compiled code can branch on
        // availability instead of missing the symbol entirely.
        plan.feature_flags
            .insert(component.feature_flag(), u8::from(supported));
    }

    plan
}
