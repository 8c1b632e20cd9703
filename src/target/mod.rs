// modrules: Module Build Rules Resolver
//
// SPDX-FileCopyrightText: 2026 modrules contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Target platform descriptors.
//!
//! ```text
//! TargetDescriptor { platform }
//!   platform: Win32 | Win64 | Linux | Mac | Android | IOS | Unknown
//!   arch:     implied by platform (Win32/Unknown -> x86, rest -> x64)
//! ```
//!
//! Platform parsing never fails: a name the crate does not recognize maps
//! to [`TargetPlatform::Unknown`], which no optional component supports.
//! That keeps resolution for exotic targets valid instead of erroring.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;

/// A build target platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TargetPlatform {
    Win32,
    Win64,
    Linux,
    Mac,
    Android,
    Ios,
    /// Any platform name the crate does not recognize.
    ///
    /// Never a member of a component's supported-platform set, so every
    /// optional component resolves to "disabled" on it.
    Unknown,
}

impl TargetPlatform {
    /// Parse a platform name (case-insensitive, infallible).
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "win32" => Self::Win32,
            "win64" => Self::Win64,
            "linux" => Self::Linux,
            "mac" => Self::Mac,
            "android" => Self::Android,
            "ios" => Self::Ios,
            _ => Self::Unknown,
        }
    }

    /// Canonical platform name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Win32 => "Win32",
            Self::Win64 => "Win64",
            Self::Linux => "Linux",
            Self::Mac => "Mac",
            Self::Android => "Android",
            Self::Ios => "IOS",
            Self::Unknown => "Unknown",
        }
    }

    /// Architecture implied by the platform.
    ///
    /// `Unknown` is treated as x86 so no "64" root suffix is ever derived
    /// for it; the choice is unobservable in plans since unknown platforms
    /// never contribute component paths.
    #[must_use]
    pub const fn arch(self) -> Arch {
        match self {
            Self::Win32 | Self::Unknown => Arch::X86,
            _ => Arch::X64,
        }
    }
}

impl std::fmt::Display for TargetPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TargetPlatform {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl Serialize for TargetPlatform {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TargetPlatform {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(Self::parse(&name))
    }
}

/// Target architecture (x86 or x64).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arch {
    X86,
    X64,
}

impl Arch {
    /// Whether the architecture is 64-bit.
    #[must_use]
    pub const fn is_64_bit(self) -> bool {
        matches!(self, Self::X64)
    }
}

impl std::fmt::Display for Arch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::X86 => write!(f, "x86"),
            Self::X64 => write!(f, "x64"),
        }
    }
}

/// The platform/architecture pair a build is being configured for.
///
/// Immutable input, supplied once per resolution call by the hosting
/// build tool. Architecture is derived from the platform rather than
/// stored, so the two can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetDescriptor {
    platform: TargetPlatform,
}

impl TargetDescriptor {
    /// Create a descriptor for the given platform.
    #[must_use]
    pub const fn new(platform: TargetPlatform) -> Self {
        Self { platform }
    }

    /// The target platform.
    #[must_use]
    pub const fn platform(&self) -> TargetPlatform {
        self.platform
    }

    /// The target architecture, implied by the platform.
    #[must_use]
    pub const fn arch(&self) -> Arch {
        self.platform.arch()
    }
}

impl From<TargetPlatform> for TargetDescriptor {
    fn from(platform: TargetPlatform) -> Self {
        Self::new(platform)
    }
}

impl std::fmt::Display for TargetDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.platform, self.arch())
    }
}
