//! Screen-orientation contracts and the no-op/scripted adapters.

use std::{
    cell::RefCell,
    collections::BTreeMap,
    future::Future,
    pin::Pin,
    rc::Rc,
};

use serde::{Deserialize, Serialize};

use crate::error::HostError;

/// Object-safe boxed future used by [`OrientationService`] async methods.
pub type OrientationFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Physical screen orientation reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    /// Orientation could not be determined.
    Unknown,
    /// Portrait, device upright.
    PortraitUp,
    /// Portrait, device upside down.
    PortraitDown,
    /// Landscape, rotated counterclockwise from portrait-up.
    LandscapeLeft,
    /// Landscape, rotated clockwise from portrait-up.
    LandscapeRight,
}

impl Orientation {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::PortraitUp => "portrait-up",
            Self::PortraitDown => "portrait-down",
            Self::LandscapeLeft => "landscape-left",
            Self::LandscapeRight => "landscape-right",
        }
    }
}

/// Orientation lock mode accepted by the host's lock command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrientationLock {
    /// Platform default set of allowed orientations.
    Default,
    /// All four orientations allowed.
    All,
    /// Either portrait orientation.
    Portrait,
    /// Portrait-up only.
    PortraitUp,
    /// Portrait-down only.
    PortraitDown,
    /// Either landscape orientation.
    Landscape,
    /// Landscape-left only.
    LandscapeLeft,
    /// Landscape-right only.
    LandscapeRight,
}

/// Payload delivered to orientation-change subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrientationChangeEvent {
    /// Orientation the screen changed to.
    pub orientation: Orientation,
}

/// Opaque handle identifying one live orientation-change subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(pub u64);

/// Callback invoked by the host on each orientation change.
pub type OrientationChangeCallback = Rc<dyn Fn(OrientationChangeEvent)>;

/// Host service for screen-orientation queries, lock commands, and change events.
///
/// The async operations may fail with [`HostError`]; subscribe and unsubscribe are
/// synchronous and infallible. Unsubscribing with a handle that is no longer live is a
/// no-op.
pub trait OrientationService {
    /// Queries the current screen orientation.
    fn current_orientation(&self) -> OrientationFuture<'_, Result<Orientation, HostError>>;

    /// Locks the screen to the given orientation set.
    fn lock(&self, lock: OrientationLock) -> OrientationFuture<'_, Result<(), HostError>>;

    /// Releases any active orientation lock.
    fn unlock(&self) -> OrientationFuture<'_, Result<(), HostError>>;

    /// Registers an orientation-change callback and returns its subscription handle.
    fn subscribe(&self, callback: OrientationChangeCallback) -> SubscriptionId;

    /// Removes the subscription identified by `subscription`.
    fn unsubscribe(&self, subscription: SubscriptionId);
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op orientation adapter for hosts without orientation support.
///
/// Queries answer `Unknown`, commands succeed without effect, and subscriptions never
/// deliver events.
pub struct NoopOrientationService;

impl OrientationService for NoopOrientationService {
    fn current_orientation(&self) -> OrientationFuture<'_, Result<Orientation, HostError>> {
        Box::pin(async { Ok(Orientation::Unknown) })
    }

    fn lock(&self, _lock: OrientationLock) -> OrientationFuture<'_, Result<(), HostError>> {
        Box::pin(async { Ok(()) })
    }

    fn unlock(&self) -> OrientationFuture<'_, Result<(), HostError>> {
        Box::pin(async { Ok(()) })
    }

    fn subscribe(&self, _callback: OrientationChangeCallback) -> SubscriptionId {
        SubscriptionId(0)
    }

    fn unsubscribe(&self, _subscription: SubscriptionId) {}
}

#[derive(Default)]
struct MemoryOrientationInner {
    orientation: Option<Result<Orientation, HostError>>,
    lock_response: Option<HostError>,
    unlock_response: Option<HostError>,
    locked_mode: Option<OrientationLock>,
    next_subscription: u64,
    subscribers: BTreeMap<SubscriptionId, OrientationChangeCallback>,
    orientation_queries: u32,
    lock_calls: u32,
    unlock_calls: u32,
}

/// Scripted in-memory orientation adapter.
///
/// Serves configured query/command results, tracks subscribers, and delivers
/// [`emit_change`](Self::emit_change) events to every live subscription. Used as the
/// baseline host in examples and as the fixture for store and listener tests.
#[derive(Clone, Default)]
pub struct MemoryOrientationService {
    inner: Rc<RefCell<MemoryOrientationInner>>,
}

impl MemoryOrientationService {
    /// Builds an adapter answering the orientation query with `orientation`.
    pub fn with_orientation(orientation: Orientation) -> Self {
        let service = Self::default();
        service.set_orientation(Ok(orientation));
        service
    }

    /// Scripts the orientation query result.
    pub fn set_orientation(&self, orientation: Result<Orientation, HostError>) {
        self.inner.borrow_mut().orientation = Some(orientation);
    }

    /// Scripts the lock command to fail with `error`.
    pub fn fail_lock(&self, error: HostError) {
        self.inner.borrow_mut().lock_response = Some(error);
    }

    /// Scripts the unlock command to fail with `error`.
    pub fn fail_unlock(&self, error: HostError) {
        self.inner.borrow_mut().unlock_response = Some(error);
    }

    /// Delivers an orientation-change event to every live subscriber.
    pub fn emit_change(&self, orientation: Orientation) {
        // Snapshot callbacks before invoking so a subscriber may re-enter
        // subscribe/unsubscribe without holding the borrow.
        let callbacks: Vec<OrientationChangeCallback> =
            self.inner.borrow().subscribers.values().cloned().collect();
        let event = OrientationChangeEvent { orientation };
        for callback in callbacks {
            callback(event);
        }
    }

    /// Returns the number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    /// Returns the mode of the last successful lock command, if any.
    pub fn locked_mode(&self) -> Option<OrientationLock> {
        self.inner.borrow().locked_mode
    }

    /// Returns how many orientation queries the adapter has answered.
    pub fn orientation_query_count(&self) -> u32 {
        self.inner.borrow().orientation_queries
    }

    /// Returns how many lock commands the adapter has received.
    pub fn lock_call_count(&self) -> u32 {
        self.inner.borrow().lock_calls
    }

    /// Returns how many unlock commands the adapter has received.
    pub fn unlock_call_count(&self) -> u32 {
        self.inner.borrow().unlock_calls
    }
}

impl OrientationService for MemoryOrientationService {
    fn current_orientation(&self) -> OrientationFuture<'_, Result<Orientation, HostError>> {
        Box::pin(async move {
            let mut inner = self.inner.borrow_mut();
            inner.orientation_queries += 1;
            inner
                .orientation
                .clone()
                .unwrap_or(Ok(Orientation::Unknown))
        })
    }

    fn lock(&self, lock: OrientationLock) -> OrientationFuture<'_, Result<(), HostError>> {
        Box::pin(async move {
            let mut inner = self.inner.borrow_mut();
            inner.lock_calls += 1;
            if let Some(error) = inner.lock_response.clone() {
                return Err(error);
            }
            inner.locked_mode = Some(lock);
            Ok(())
        })
    }

    fn unlock(&self) -> OrientationFuture<'_, Result<(), HostError>> {
        Box::pin(async move {
            let mut inner = self.inner.borrow_mut();
            inner.unlock_calls += 1;
            if let Some(error) = inner.unlock_response.clone() {
                return Err(error);
            }
            inner.locked_mode = None;
            Ok(())
        })
    }

    fn subscribe(&self, callback: OrientationChangeCallback) -> SubscriptionId {
        let mut inner = self.inner.borrow_mut();
        inner.next_subscription += 1;
        let id = SubscriptionId(inner.next_subscription);
        inner.subscribers.insert(id, callback);
        id
    }

    fn unsubscribe(&self, subscription: SubscriptionId) {
        self.inner.borrow_mut().subscribers.remove(&subscription);
    }
}
