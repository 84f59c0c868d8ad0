//! Host service bundle injected into the state layer.

use std::rc::Rc;

use crate::{
    DeviceInfoService, NoopDeviceInfoService, NoopOrientationService, OrientationService,
    PlatformInfoService, StaticPlatformInfo,
};

/// Runtime-selected host service bundle.
///
/// All environment-specific adapter selection happens before this bundle crosses into the
/// state layer, which keeps stores and facades decoupled from native adapter details.
#[derive(Clone)]
pub struct HostServices {
    /// Synchronous platform identity service.
    pub platform: Rc<dyn PlatformInfoService>,
    /// Device identity service.
    pub device: Rc<dyn DeviceInfoService>,
    /// Screen-orientation service.
    pub orientation: Rc<dyn OrientationService>,
}

impl HostServices {
    /// Bundle of no-op adapters for unsupported targets and baseline tests.
    pub fn noop() -> Self {
        Self {
            platform: Rc::new(StaticPlatformInfo::default()),
            device: Rc::new(NoopDeviceInfoService),
            orientation: Rc::new(NoopOrientationService),
        }
    }
}
