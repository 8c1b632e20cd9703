// modrules: Module Build Rules Resolver
//
// SPDX-FileCopyrightText: 2026 modrules contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use super::Config;
use crate::target::TargetPlatform;
use std::path::PathBuf;

#[test]
fn test_default_config_has_python_component() {
    let config = Config::default();

    assert_eq!(config.components.len(), 1);
    let python = &config.components[0];
    assert_eq!(python.name, "Python");
    assert_eq!(python.install_root, PathBuf::from("E:/Anaconda27"));
    assert_eq!(python.feature_flag(), "WITH_PYTHON_BINDING");
    assert!(python.supports(TargetPlatform::Win32));
    assert!(python.supports(TargetPlatform::Win64));
    assert!(!python.supports(TargetPlatform::Linux));
}

#[test]
fn test_default_config_is_valid() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_default_module_baseline() {
    let module = super::types::ModuleConfig::default();

    assert_eq!(
        module.dependencies,
        vec!["Core", "CoreUObject", "Engine", "InputCore", "SensorLib"]
    );
    assert_eq!(
        module.include_paths,
        vec![
            PathBuf::from("Sensor/Public"),
            PathBuf::from("Sensor/Classes"),
        ]
    );
}

#[test]
fn test_parse_module_section() {
    let toml = r#"
[module]
name = "mirror"
dependencies = ["Core", "Engine"]
include_paths = ["Sensor/Public", "Sensor/Classes"]
"#;
    let config = Config::parse(toml).unwrap();

    assert_eq!(config.module.name, "mirror");
    assert_eq!(config.module.dependencies, vec!["Core", "Engine"]);
    assert_eq!(
        config.module.include_paths,
        vec![
            PathBuf::from("Sensor/Public"),
            PathBuf::from("Sensor/Classes"),
        ]
    );
}

#[test]
fn test_parse_component_table_replaces_default() {
    let toml = r#"
[[components]]
name = "NativeRuntime"
install_root = "/opt/runtime"
library = "lib/libruntime.a"
platforms = ["Linux", "Mac"]
"#;
    let config = Config::parse(toml).unwrap();

    assert_eq!(config.components.len(), 1);
    let component = &config.components[0];
    assert_eq!(component.name, "NativeRuntime");
    // x64_suffix keeps its field default when omitted
    assert_eq!(component.x64_suffix, "_64");
    assert!(component.supports(TargetPlatform::Linux));
    assert!(!component.supports(TargetPlatform::Win64));
}

#[test]
fn test_validate_rejects_empty_component_name() {
    let toml = r#"
[[components]]
install_root = "/opt/runtime"
library = "lib/libruntime.a"
"#;
    assert!(Config::parse(toml).is_err());
}

#[test]
fn test_validate_rejects_duplicate_flags() {
    let toml = r#"
[[components]]
name = "native runtime"
install_root = "/opt/a"
library = "a.lib"

[[components]]
name = "Native-Runtime"
install_root = "/opt/b"
library = "b.lib"
"#;
    // Both normalize to WITH_NATIVE_RUNTIME_BINDING
    assert!(Config::parse(toml).is_err());
}

#[test]
fn test_unknown_key_rejected() {
    let toml = r#"
[global]
verbosity = 3
"#;
    assert!(Config::parse(toml).is_err());
}

#[test]
fn test_format_options_is_sorted_and_complete() {
    let config = Config::default();
    let options = config.format_options();

    let mut sorted = options.clone();
    sorted.sort();
    assert_eq!(options, sorted);

    assert!(
        options
            .iter()
            .any(|o| o.contains("components.Python.flag") && o.contains("WITH_PYTHON_BINDING"))
    );
    assert!(options.iter().any(|o| o.contains("module.dependencies")));
}
