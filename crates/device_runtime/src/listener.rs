//! Scoped bridge from host orientation-change events into the orientation store.

use std::{cell::Cell, rc::Rc};

use device_host::{OrientationService, SubscriptionId};

use crate::{model::OrientationStatePatch, orientation::OrientationStore};

/// Observer registration bridging push-based orientation events into an
/// [`OrientationStore`].
///
/// A view that cares about live orientation changes acquires the listener with
/// [`start`](Self::start) on activation and releases it with [`stop`](Self::stop) on
/// deactivation; dropping the listener releases it on every remaining exit path. At most
/// one subscription is live per listener at any time.
pub struct OrientationChangeListener {
    service: Rc<dyn OrientationService>,
    store: OrientationStore,
    subscription: Cell<Option<SubscriptionId>>,
}

impl OrientationChangeListener {
    /// Builds a listener bridging `service` events into `store`.
    pub fn new(service: Rc<dyn OrientationService>, store: OrientationStore) -> Self {
        Self {
            service,
            store,
            subscription: Cell::new(None),
        }
    }

    /// Subscribes to host orientation-change events.
    ///
    /// Each event writes the event orientation and its recomputed landscape flag into the
    /// store. Starting an already-started listener releases the previous subscription
    /// first, so re-activation never leaks a duplicate.
    pub fn start(&self) {
        self.stop();

        let store = self.store.clone();
        let subscription = self.service.subscribe(Rc::new(move |event| {
            store.set_state(OrientationStatePatch::oriented(event.orientation));
        }));
        log::trace!("orientation change subscription {} started", subscription.0);
        self.subscription.set(Some(subscription));
    }

    /// Releases the live subscription, if any.
    ///
    /// No further store writes occur after this returns. Idempotent.
    pub fn stop(&self) {
        if let Some(subscription) = self.subscription.take() {
            self.service.unsubscribe(subscription);
            log::trace!("orientation change subscription {} stopped", subscription.0);
        }
    }

    /// Returns whether a subscription is currently live.
    pub fn is_active(&self) -> bool {
        self.subscription.get().is_some()
    }
}

impl Drop for OrientationChangeListener {
    fn drop(&mut self) {
        self.stop();
    }
}
