// modrules: Module Build Rules Resolver
//
// SPDX-FileCopyrightText: 2026 modrules contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading.
//!
//! Tests the Config module with realistic TOML configurations.

use modrules::config::Config;

// =============================================================================
// Loading from TOML strings
// =============================================================================

#[test]
fn config_parse_minimal() {
    let config = Config::parse("").unwrap();

    // Defaults survive an empty document
    assert_eq!(config.module.dependencies.len(), 5);
    assert_eq!(config.module.include_paths.len(), 2);
    assert_eq!(config.components.len(), 1);
    assert_eq!(config.components[0].name, "Python");
}

#[test]
fn config_parse_global_section() {
    let toml = r#"
[global]
output_log_level = 5
log_file = "plans.log"
"#;
    let config = Config::parse(toml).unwrap();
    assert_eq!(config.global.output_log_level.as_u8(), 5);
    assert_eq!(config.global.log_file.display().to_string(), "plans.log");
}

#[test]
fn config_parse_invalid_log_level() {
    let toml = r"
[global]
output_log_level = 42
";
    assert!(Config::parse(toml).is_err());
}

#[test]
fn config_parse_invalid_toml() {
    assert!(Config::parse("not [ valid toml").is_err());
}

// =============================================================================
// Builder Pattern
// =============================================================================

#[test]
fn config_builder_layered() {
    // Base layer
    let config = Config::builder()
        .add_toml_str(
            r#"
[module]
name = "base"
dependencies = ["Core"]
"#,
        )
        // Override layer
        .add_toml_str(
            r#"
[module]
name = "override"
"#,
        )
        .build()
        .unwrap();

    assert_eq!(config.module.name, "override");
    assert_eq!(config.module.dependencies, vec!["Core"]);
}

#[test]
fn config_builder_set_override() {
    let config = Config::builder()
        .add_toml_str(
            r#"
[module]
name = "from_file"
"#,
        )
        .set("module.name", "from_override")
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.module.name, "from_override");
}

#[test]
fn config_builder_env_override() {
    // Double-underscore separator: single underscores stay inside field
    // names, so global.log_file is addressable from the environment.
    unsafe { std::env::set_var("MODRULES_GLOBAL__LOG_FILE", "env-plan.log") };
    let result = Config::builder().with_env_prefix("MODRULES").build();
    unsafe { std::env::remove_var("MODRULES_GLOBAL__LOG_FILE") };

    let config = result.unwrap();
    assert_eq!(config.global.log_file.display().to_string(), "env-plan.log");
    // Untouched defaults survive alongside the override
    assert_eq!(config.global.output_log_level.as_u8(), 3);
}

#[test]
fn config_builder_missing_required_file() {
    let result = Config::builder()
        .add_toml_file("/definitely/not/here/modrules.toml")
        .build();
    assert!(result.is_err());
}

#[test]
fn config_builder_missing_optional_file() {
    let config = Config::builder()
        .add_toml_file_optional("/definitely/not/here/modrules.toml")
        .build()
        .unwrap();
    assert_eq!(config.components.len(), 1);
}

// =============================================================================
// Component table overrides
// =============================================================================

#[test]
fn config_component_root_override() {
    // A deployment can relocate a component's install root without
    // restating the rest of the entry.
    let config = Config::builder()
        .add_toml_str(
            r#"
[[components]]
name = "Python"
install_root = "D:/Python27"
library = "libs/python27.lib"
platforms = ["Win32", "Win64"]
"#,
        )
        .build()
        .unwrap();

    assert_eq!(
        config.components[0].install_root.display().to_string(),
        "D:/Python27"
    );
    assert_eq!(config.components[0].feature_flag(), "WITH_PYTHON_BINDING");
}

#[test]
fn config_format_options_display() {
    let options = Config::default().format_options();

    // Aligned "key = value" lines, sorted by key
    for line in &options {
        assert!(line.contains(" = "), "malformed option line: {line}");
    }
    let mut sorted = options.clone();
    sorted.sort();
    assert_eq!(options, sorted);
}
