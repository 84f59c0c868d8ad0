//! Device identity contracts and the no-op/scripted adapters.

use std::{
    cell::{Cell, RefCell},
    future::Future,
    pin::Pin,
    rc::Rc,
};

use serde::{Deserialize, Serialize};

use crate::error::HostError;

/// Object-safe boxed future used by [`DeviceInfoService`].
pub type DeviceInfoFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Device form-factor category reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceCategory {
    /// Category could not be determined.
    Unknown,
    /// Handset form factor.
    Phone,
    /// Tablet form factor.
    Tablet,
    /// Desktop or laptop form factor.
    Desktop,
    /// Television or set-top form factor.
    Tv,
}

impl DeviceCategory {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Phone => "phone",
            Self::Tablet => "tablet",
            Self::Desktop => "desktop",
            Self::Tv => "tv",
        }
    }
}

/// Host service answering device identity queries.
pub trait DeviceInfoService {
    /// Queries the device form-factor category.
    fn device_category(&self) -> DeviceInfoFuture<'_, Result<DeviceCategory, HostError>>;

    /// Returns the host-reported device model name, when the host exposes one.
    fn model_name(&self) -> Option<String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op device info adapter for hosts without device introspection.
pub struct NoopDeviceInfoService;

impl DeviceInfoService for NoopDeviceInfoService {
    fn device_category(&self) -> DeviceInfoFuture<'_, Result<DeviceCategory, HostError>> {
        Box::pin(async { Ok(DeviceCategory::Unknown) })
    }

    fn model_name(&self) -> Option<String> {
        None
    }
}

#[derive(Debug, Default)]
struct MemoryDeviceInfoInner {
    category: Option<Result<DeviceCategory, HostError>>,
    model_name: Option<String>,
}

/// Scripted in-memory device info adapter.
///
/// Serves a configured category result and records how often it was queried. Used as the
/// baseline host in examples and as the fixture for store tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryDeviceInfoService {
    inner: Rc<RefCell<MemoryDeviceInfoInner>>,
    category_queries: Rc<Cell<u32>>,
}

impl MemoryDeviceInfoService {
    /// Builds an adapter answering the category query with `category`.
    pub fn with_category(category: DeviceCategory) -> Self {
        let service = Self::default();
        service.set_category(Ok(category));
        service
    }

    /// Scripts the next category query result.
    pub fn set_category(&self, category: Result<DeviceCategory, HostError>) {
        self.inner.borrow_mut().category = Some(category);
    }

    /// Scripts the host-reported model name.
    pub fn set_model_name(&self, model_name: impl Into<String>) {
        self.inner.borrow_mut().model_name = Some(model_name.into());
    }

    /// Returns how many category queries the adapter has answered.
    pub fn category_query_count(&self) -> u32 {
        self.category_queries.get()
    }
}

impl DeviceInfoService for MemoryDeviceInfoService {
    fn device_category(&self) -> DeviceInfoFuture<'_, Result<DeviceCategory, HostError>> {
        Box::pin(async move {
            self.category_queries.set(self.category_queries.get() + 1);
            self.inner
                .borrow()
                .category
                .clone()
                .unwrap_or(Ok(DeviceCategory::Unknown))
        })
    }

    fn model_name(&self) -> Option<String> {
        self.inner.borrow().model_name.clone()
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn noop_service_answers_unknown() {
        let service = NoopDeviceInfoService;
        let service_obj: &dyn DeviceInfoService = &service;
        assert_eq!(
            block_on(service_obj.device_category()),
            Ok(DeviceCategory::Unknown)
        );
        assert_eq!(service_obj.model_name(), None);
    }

    #[test]
    fn memory_service_serves_scripted_results() {
        let service = MemoryDeviceInfoService::with_category(DeviceCategory::Tablet);
        service.set_model_name("Slate 11");
        let service_obj: &dyn DeviceInfoService = &service;

        assert_eq!(
            block_on(service_obj.device_category()),
            Ok(DeviceCategory::Tablet)
        );
        assert_eq!(service_obj.model_name(), Some("Slate 11".to_string()));
        assert_eq!(service.category_query_count(), 1);
    }

    #[test]
    fn memory_service_serves_scripted_failure() {
        let service = MemoryDeviceInfoService::default();
        service.set_category(Err(HostError::query("no provider")));

        assert_eq!(
            block_on(service.device_category()),
            Err(HostError::query("no provider"))
        );
        assert_eq!(service.category_query_count(), 1);
    }
}
