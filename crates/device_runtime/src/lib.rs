//! Headless device and screen-orientation state over injected host services.
//!
//! Each component here is an explicitly constructed, cloneable handle around shared state:
//! the composition root builds a [`device_host::HostServices`] bundle, constructs the stores
//! it needs, and hands clones to consuming views. Stores are populated by a single async
//! `initialize` call and afterwards mutated only by explicit actions; the
//! [`listener::OrientationChangeListener`] bridges the host's push-based change events into
//! the orientation store for the lifetime of one activation.

pub mod device_info;
pub mod listener;
pub mod model;
pub mod orientation;
pub mod os;

pub use device_info::DeviceInfoStore;
pub use listener::OrientationChangeListener;
pub use model::{DeviceInfoState, OrientationState, OrientationStatePatch};
pub use orientation::{
    DefaultOrientationCallback, DefaultOrientationFuture, InitializeOptions,
    LockScreenOrientationOptions, OrientationStore,
};
pub use os::Os;
