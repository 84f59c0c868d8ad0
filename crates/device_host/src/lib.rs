//! Typed host-service contracts for platform, device, and orientation queries.
//!
//! This crate is the API-first boundary between the device/orientation state layer and the
//! native platform. It exposes the shared value enums, the host error type, and one service
//! trait per collaborator, each shipped with a no-op adapter and a scripted in-memory adapter.
//! Concrete native adapters live in consuming applications and are injected through
//! [`HostServices`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod device;
pub mod error;
pub mod host;
pub mod orientation;
pub mod platform;

pub use device::{
    DeviceCategory, DeviceInfoFuture, DeviceInfoService, MemoryDeviceInfoService,
    NoopDeviceInfoService,
};
pub use error::HostError;
pub use host::HostServices;
pub use orientation::{
    MemoryOrientationService, NoopOrientationService, Orientation, OrientationChangeCallback,
    OrientationChangeEvent, OrientationFuture, OrientationLock, OrientationService,
    SubscriptionId,
};
pub use platform::{OsFamily, OsVersion, PlatformInfoService, StaticPlatformInfo};
