//! Device form-factor store.

use std::{cell::RefCell, rc::Rc};

use device_host::{DeviceCategory, DeviceInfoService};

use crate::model::DeviceInfoState;

/// Injectable store holding the classified device form factor.
///
/// Cloned handles share the same state. The state stays unset until
/// [`initialize`](Self::initialize) settles; there is no background refresh afterwards.
#[derive(Clone)]
pub struct DeviceInfoStore {
    service: Rc<dyn DeviceInfoService>,
    state: Rc<RefCell<DeviceInfoState>>,
}

impl DeviceInfoStore {
    /// Builds a store over the given device info service.
    pub fn new(service: Rc<dyn DeviceInfoService>) -> Self {
        Self {
            service,
            state: Rc::new(RefCell::new(DeviceInfoState::default())),
        }
    }

    /// Returns a clone of the current state.
    pub fn snapshot(&self) -> DeviceInfoState {
        self.state.borrow().clone()
    }

    /// Queries and classifies the device category, writing state exactly once.
    ///
    /// A failed query classifies like an unknown category; the host error is neither
    /// surfaced nor logged and this call always completes.
    pub async fn initialize(&self) {
        let category = self
            .service
            .device_category()
            .await
            .unwrap_or(DeviceCategory::Unknown);

        let next = DeviceInfoState::from_category(category, self.service.model_name());
        self.state.replace(next);
    }
}
