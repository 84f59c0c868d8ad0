//! Stateless OS identity facade.

use std::rc::Rc;

use device_host::{HostServices, OsFamily, OsVersion, PlatformInfoService};

/// Synchronous OS identity projections over an injected platform service.
#[derive(Clone)]
pub struct Os {
    platform: Rc<dyn PlatformInfoService>,
}

impl Os {
    /// Builds the facade over the given platform service.
    pub fn new(platform: Rc<dyn PlatformInfoService>) -> Self {
        Self { platform }
    }

    /// Builds the facade from a host bundle.
    pub fn from_host(host: &HostServices) -> Self {
        Self::new(host.platform.clone())
    }

    /// Returns whether the current platform family is iOS.
    pub fn is_ios(&self) -> bool {
        self.platform.os_family() == OsFamily::Ios
    }

    /// Returns whether the current platform family is Android.
    pub fn is_android(&self) -> bool {
        self.platform.os_family() == OsFamily::Android
    }

    /// Returns the platform version verbatim.
    pub fn version(&self) -> OsVersion {
        self.platform.os_version()
    }
}
