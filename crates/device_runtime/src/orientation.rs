//! Screen-orientation store and its typed action set.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

use device_host::{
    HostError, Orientation, OrientationFuture, OrientationLock, OrientationService,
};

use crate::model::{OrientationState, OrientationStatePatch};

/// Boxed pending result of the caller-supplied default-orientation callback.
pub type DefaultOrientationFuture = Pin<Box<dyn Future<Output = Result<(), HostError>>>>;

/// Zero-argument callback applying the application's default orientation.
pub type DefaultOrientationCallback = Rc<dyn Fn() -> DefaultOrientationFuture>;

fn noop_default_orientation() -> DefaultOrientationCallback {
    Rc::new(|| Box::pin(async { Ok(()) }))
}

/// Options accepted by [`OrientationStore::initialize`].
#[derive(Clone, Default)]
pub struct InitializeOptions {
    /// Callback stored for later [`OrientationStore::set_default_screen_orientation`]
    /// calls; a no-op resolved callback is stored when omitted.
    pub set_default_screen_orientation: Option<DefaultOrientationCallback>,
}

/// Options accepted by [`OrientationStore::lock_screen_orientation`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LockScreenOrientationOptions {
    /// Lock mode to request; [`OrientationLock::Default`] when omitted.
    pub orientation_lock: Option<OrientationLock>,
}

/// Injectable store tracking the current screen orientation.
///
/// Cloned handles share the same state. Queries recover to documented fallbacks while
/// commands return the host's pending result unmodified, so the consuming view decides how
/// to react to command failures.
#[derive(Clone)]
pub struct OrientationStore {
    service: Rc<dyn OrientationService>,
    state: Rc<RefCell<OrientationState>>,
    default_orientation: Rc<RefCell<DefaultOrientationCallback>>,
}

impl OrientationStore {
    /// Builds a store over the given orientation service.
    pub fn new(service: Rc<dyn OrientationService>) -> Self {
        Self {
            service,
            state: Rc::new(RefCell::new(OrientationState::default())),
            default_orientation: Rc::new(RefCell::new(noop_default_orientation())),
        }
    }

    /// Returns a clone of the current state.
    pub fn snapshot(&self) -> OrientationState {
        self.state.borrow().clone()
    }

    /// Queries the current orientation and writes state exactly once.
    ///
    /// A failed query falls back to [`Orientation::PortraitDown`] and this call always
    /// completes. The supplied default-orientation callback is stored as part of the same
    /// update.
    pub async fn initialize(&self, options: InitializeOptions) {
        let orientation = match self.service.current_orientation().await {
            Ok(orientation) => orientation,
            Err(err) => {
                log::debug!("orientation query failed, falling back to portrait-down: {err}");
                Orientation::PortraitDown
            }
        };

        *self.default_orientation.borrow_mut() = options
            .set_default_screen_orientation
            .unwrap_or_else(noop_default_orientation);
        self.state.replace(OrientationState::oriented(orientation));
    }

    /// Merges a partial update into the state without recomputation.
    ///
    /// Escape hatch used by the change listener; callers own the
    /// orientation/landscape consistency invariant.
    pub fn set_state(&self, patch: OrientationStatePatch) {
        self.state.borrow_mut().apply(patch);
    }

    /// Stores `orientation` and its recomputed landscape flag.
    pub fn set_screen_orientation(&self, orientation: Orientation) {
        self.state.replace(OrientationState::oriented(orientation));
    }

    /// Requests an orientation lock from the host.
    ///
    /// Uses the requested mode or [`OrientationLock::Default`]. Returns the host's pending
    /// result unmodified; rejections propagate to the caller.
    pub fn lock_screen_orientation(
        &self,
        options: LockScreenOrientationOptions,
    ) -> OrientationFuture<'_, Result<(), HostError>> {
        let lock = options.orientation_lock.unwrap_or(OrientationLock::Default);
        self.service.lock(lock)
    }

    /// Releases any active orientation lock.
    ///
    /// Returns the host's pending result unmodified; rejections propagate to the caller.
    pub fn unlock_screen_orientation(&self) -> OrientationFuture<'_, Result<(), HostError>> {
        self.service.unlock()
    }

    /// Invokes the stored default-orientation callback and returns its pending result.
    pub fn set_default_screen_orientation(&self) -> DefaultOrientationFuture {
        let callback = self.default_orientation.borrow().clone();
        callback()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use device_host::MemoryOrientationService;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    fn store_with(service: &MemoryOrientationService) -> OrientationStore {
        OrientationStore::new(Rc::new(service.clone()))
    }

    #[test]
    fn state_is_unset_before_initialize() {
        let store = store_with(&MemoryOrientationService::default());
        assert_eq!(store.snapshot(), OrientationState::default());
    }

    #[test]
    fn initialize_stores_queried_orientation() {
        let cases = [
            (Orientation::LandscapeLeft, true),
            (Orientation::LandscapeRight, true),
            (Orientation::PortraitUp, false),
            (Orientation::PortraitDown, false),
            (Orientation::Unknown, false),
        ];
        for (orientation, is_landscape) in cases {
            let service = MemoryOrientationService::with_orientation(orientation);
            let store = store_with(&service);

            block_on(store.initialize(InitializeOptions::default()));

            assert_eq!(service.orientation_query_count(), 1);
            assert_eq!(
                store.snapshot(),
                OrientationState {
                    screen_orientation: Some(orientation),
                    is_landscape: Some(is_landscape),
                },
                "orientation {}",
                orientation.as_str()
            );
        }
    }

    #[test]
    fn initialize_falls_back_to_portrait_down_on_failure() {
        let service = MemoryOrientationService::default();
        service.set_orientation(Err(HostError::query("no sensor")));
        let store = store_with(&service);

        block_on(store.initialize(InitializeOptions::default()));

        assert_eq!(service.orientation_query_count(), 1);
        assert_eq!(
            store.snapshot(),
            OrientationState {
                screen_orientation: Some(Orientation::PortraitDown),
                is_landscape: Some(false),
            }
        );
    }

    #[test]
    fn set_screen_orientation_recomputes_landscape() {
        let store = store_with(&MemoryOrientationService::default());
        for orientation in [
            Orientation::LandscapeLeft,
            Orientation::LandscapeRight,
            Orientation::PortraitUp,
            Orientation::PortraitDown,
            Orientation::Unknown,
        ] {
            store.set_screen_orientation(orientation);
            assert_eq!(store.snapshot(), OrientationState::oriented(orientation));
        }
    }

    #[test]
    fn set_state_merges_partial_updates() {
        let store = store_with(&MemoryOrientationService::default());
        store.set_state(OrientationStatePatch {
            screen_orientation: Some(Orientation::PortraitUp),
            is_landscape: None,
        });
        assert_eq!(
            store.snapshot(),
            OrientationState {
                screen_orientation: Some(Orientation::PortraitUp),
                is_landscape: None,
            }
        );
    }

    #[test]
    fn lock_defaults_to_default_mode() {
        let service = MemoryOrientationService::default();
        let store = store_with(&service);

        block_on(store.lock_screen_orientation(LockScreenOrientationOptions::default()))
            .expect("lock");

        assert_eq!(service.lock_call_count(), 1);
        assert_eq!(service.locked_mode(), Some(OrientationLock::Default));
    }

    #[test]
    fn lock_passes_requested_mode_through() {
        let service = MemoryOrientationService::default();
        let store = store_with(&service);

        block_on(store.lock_screen_orientation(LockScreenOrientationOptions {
            orientation_lock: Some(OrientationLock::LandscapeRight),
        }))
        .expect("lock");

        assert_eq!(service.locked_mode(), Some(OrientationLock::LandscapeRight));
    }

    #[test]
    fn lock_failure_propagates_to_caller() {
        let service = MemoryOrientationService::default();
        service.fail_lock(HostError::command("Mock error"));
        let store = store_with(&service);

        assert_eq!(
            block_on(store.lock_screen_orientation(LockScreenOrientationOptions::default())),
            Err(HostError::command("Mock error"))
        );
    }

    #[test]
    fn unlock_delegates_to_host() {
        let service = MemoryOrientationService::default();
        let store = store_with(&service);

        block_on(store.unlock_screen_orientation()).expect("unlock");

        assert_eq!(service.unlock_call_count(), 1);
    }

    #[test]
    fn unlock_failure_propagates_to_caller() {
        let service = MemoryOrientationService::default();
        service.fail_unlock(HostError::command("Mock error"));
        let store = store_with(&service);

        assert_eq!(
            block_on(store.unlock_screen_orientation()),
            Err(HostError::command("Mock error"))
        );
        assert_eq!(service.unlock_call_count(), 1);
    }

    #[test]
    fn default_orientation_callback_defaults_to_noop() {
        let store = store_with(&MemoryOrientationService::default());
        block_on(store.set_default_screen_orientation()).expect("noop default");
    }

    #[test]
    fn initialize_stores_supplied_default_orientation_callback() {
        let store = store_with(&MemoryOrientationService::default());
        let invocations = Rc::new(Cell::new(0u32));

        let counter = invocations.clone();
        let callback: DefaultOrientationCallback = Rc::new(move || {
            counter.set(counter.get() + 1);
            Box::pin(async { Ok(()) })
        });
        block_on(store.initialize(InitializeOptions {
            set_default_screen_orientation: Some(callback),
        }));
        assert_eq!(invocations.get(), 0);

        block_on(store.set_default_screen_orientation()).expect("default orientation");
        assert_eq!(invocations.get(), 1);
    }

    #[test]
    fn default_orientation_callback_failure_propagates() {
        let store = store_with(&MemoryOrientationService::default());
        let callback: DefaultOrientationCallback =
            Rc::new(|| Box::pin(async { Err(HostError::command("Mock error")) }));
        block_on(store.initialize(InitializeOptions {
            set_default_screen_orientation: Some(callback),
        }));

        assert_eq!(
            block_on(store.set_default_screen_orientation()),
            Err(HostError::command("Mock error"))
        );
    }

    #[test]
    fn cloned_handles_share_state() {
        let store = store_with(&MemoryOrientationService::default());
        let reader = store.clone();

        store.set_screen_orientation(Orientation::LandscapeLeft);

        assert_eq!(reader.snapshot().is_landscape, Some(true));
    }
}
