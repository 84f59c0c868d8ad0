//! Observable state shapes and pure classification helpers.

use device_host::{DeviceCategory, Orientation};
use serde::{Deserialize, Serialize};

/// Returns whether `orientation` is one of the two landscape orientations.
pub const fn is_landscape_orientation(orientation: Orientation) -> bool {
    matches!(
        orientation,
        Orientation::LandscapeLeft | Orientation::LandscapeRight
    )
}

/// Device form-factor state owned by [`crate::DeviceInfoStore`].
///
/// All fields are `None` until the store's `initialize` settles. After initialization at
/// most one of `is_phone`/`is_tablet` is `Some(true)`; both are `Some(false)` when the
/// category was unknown, a non-handheld form factor, or the query failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInfoState {
    /// Whether the device is a handset.
    pub is_phone: Option<bool>,
    /// Whether the device is a tablet.
    pub is_tablet: Option<bool>,
    /// Host-reported device model name, when available.
    pub model_name: Option<String>,
}

impl DeviceInfoState {
    /// Classifies a host-reported category into the observable flag pair.
    pub fn from_category(category: DeviceCategory, model_name: Option<String>) -> Self {
        Self {
            is_phone: Some(category == DeviceCategory::Phone),
            is_tablet: Some(category == DeviceCategory::Tablet),
            model_name,
        }
    }
}

/// Screen-orientation state owned by [`crate::OrientationStore`].
///
/// `is_landscape` is derived from `screen_orientation`; every typed mutation path
/// recomputes the pair together through [`OrientationState::oriented`]. The generic
/// [`OrientationStatePatch`] merge is the single unchecked path and its callers own the
/// invariant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrientationState {
    /// Last known screen orientation, `None` until first write.
    pub screen_orientation: Option<Orientation>,
    /// Whether the last known orientation is landscape, `None` until first write.
    pub is_landscape: Option<bool>,
}

impl OrientationState {
    /// Builds the state pair for a known orientation.
    pub fn oriented(orientation: Orientation) -> Self {
        Self {
            screen_orientation: Some(orientation),
            is_landscape: Some(is_landscape_orientation(orientation)),
        }
    }

    /// Merges a partial update, leaving `None` patch fields untouched.
    pub fn apply(&mut self, patch: OrientationStatePatch) {
        if let Some(orientation) = patch.screen_orientation {
            self.screen_orientation = Some(orientation);
        }
        if let Some(is_landscape) = patch.is_landscape {
            self.is_landscape = Some(is_landscape);
        }
    }
}

/// Partial [`OrientationState`] update accepted by the store's generic merge action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrientationStatePatch {
    /// New screen orientation, when present.
    pub screen_orientation: Option<Orientation>,
    /// New landscape flag, when present.
    pub is_landscape: Option<bool>,
}

impl OrientationStatePatch {
    /// Builds a consistent both-field patch for a known orientation.
    pub fn oriented(orientation: Orientation) -> Self {
        Self {
            screen_orientation: Some(orientation),
            is_landscape: Some(is_landscape_orientation(orientation)),
        }
    }
}
