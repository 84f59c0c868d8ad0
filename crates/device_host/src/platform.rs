//! Synchronous platform identity contracts and the fixed-value adapter.

use serde::{Deserialize, Serialize};

/// Operating-system family reported by the platform info host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OsFamily {
    /// Apple iOS / iPadOS.
    Ios,
    /// Android.
    Android,
    /// Desktop Windows.
    Windows,
    /// Desktop macOS.
    Macos,
    /// Browser-hosted runtime.
    Web,
    /// Family could not be determined.
    Unknown,
}

impl OsFamily {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ios => "ios",
            Self::Android => "android",
            Self::Windows => "windows",
            Self::Macos => "macos",
            Self::Web => "web",
            Self::Unknown => "unknown",
        }
    }
}

/// Opaque per-platform OS version, returned verbatim from the host.
///
/// Android hosts report a numeric API level; Apple hosts report a dotted version string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OsVersion {
    /// Numeric platform API level.
    Api(u32),
    /// Free-form version string.
    Text(String),
    /// Version could not be determined.
    Unknown,
}

impl std::fmt::Display for OsVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Api(level) => write!(f, "{level}"),
            Self::Text(version) => write!(f, "{version}"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Host service answering synchronous platform identity queries.
///
/// Both queries are infallible: a host that cannot determine a value answers with the
/// corresponding `Unknown` variant.
pub trait PlatformInfoService {
    /// Returns the current OS family.
    fn os_family(&self) -> OsFamily;

    /// Returns the platform version verbatim.
    fn os_version(&self) -> OsVersion;
}

/// Platform info adapter serving fixed values.
///
/// Doubles as the baseline adapter for hosts without platform introspection and as the
/// test fixture for facade assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticPlatformInfo {
    family: OsFamily,
    version: OsVersion,
}

impl Default for StaticPlatformInfo {
    fn default() -> Self {
        Self {
            family: OsFamily::Unknown,
            version: OsVersion::Unknown,
        }
    }
}

impl StaticPlatformInfo {
    /// Builds an adapter reporting the given family and version.
    pub const fn new(family: OsFamily, version: OsVersion) -> Self {
        Self { family, version }
    }

    /// iOS posture with a dotted version string.
    pub fn ios(version: impl Into<String>) -> Self {
        Self::new(OsFamily::Ios, OsVersion::Text(version.into()))
    }

    /// Android posture with a numeric API level.
    pub const fn android(api_level: u32) -> Self {
        Self::new(OsFamily::Android, OsVersion::Api(api_level))
    }
}

impl PlatformInfoService for StaticPlatformInfo {
    fn os_family(&self) -> OsFamily {
        self.family
    }

    fn os_version(&self) -> OsVersion {
        self.version.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_posture_is_unknown() {
        let platform = StaticPlatformInfo::default();
        assert_eq!(platform.os_family(), OsFamily::Unknown);
        assert_eq!(platform.os_version(), OsVersion::Unknown);
    }

    #[test]
    fn fixed_postures_report_verbatim() {
        let ios = StaticPlatformInfo::ios("17.2");
        assert_eq!(ios.os_family(), OsFamily::Ios);
        assert_eq!(ios.os_version(), OsVersion::Text("17.2".to_string()));

        let android = StaticPlatformInfo::android(34);
        assert_eq!(android.os_family(), OsFamily::Android);
        assert_eq!(android.os_version(), OsVersion::Api(34));
    }

    #[test]
    fn version_display_is_stable() {
        assert_eq!(OsVersion::Api(34).to_string(), "34");
        assert_eq!(OsVersion::Text("17.2".into()).to_string(), "17.2");
        assert_eq!(OsVersion::Unknown.to_string(), "unknown");
    }
}
