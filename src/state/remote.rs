//! Remote Resource State
//!
//! Every page holds its fetched data as a [`Remote`] value: an explicit
//! Loading -> Ready | Failed result instead of a loading boolean, so a
//! late rejection can never be swallowed after the page already rendered.
//! [`MountGuard`] discards resolutions that land after the page unmounts.

use std::cell::Cell;
use std::rc::Rc;

use leptos::on_cleanup;

/// Three-state view of a remote resource.
#[derive(Clone, Debug, PartialEq)]
pub enum Remote<T> {
    /// Fetches are in flight; render the loading placeholder.
    Loading,
    /// Every fetch succeeded.
    Ready(T),
    /// At least one fetch failed; the page shows the message and a retry.
    Failed(String),
}

impl<T> Remote<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Remote::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Remote::Ready(data) => Some(data),
            _ => None,
        }
    }
}

/// Tracks whether the owning component is still mounted.
///
/// Cloned into spawned fetch futures; a future must check [`live`] before
/// writing any signal so a resolution arriving after unmount is dropped
/// rather than applied to a dead page.
///
/// [`live`]: MountGuard::live
#[derive(Clone, Debug)]
pub struct MountGuard(Rc<Cell<bool>>);

impl MountGuard {
    pub fn new() -> Self {
        MountGuard(Rc::new(Cell::new(true)))
    }

    /// Mark the owner as gone. Idempotent.
    pub fn release(&self) {
        self.0.set(false);
    }

    pub fn live(&self) -> bool {
        self.0.get()
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a [`MountGuard`] tied to the current reactive owner: it is
/// released automatically when the component unmounts.
pub fn use_mount_guard() -> MountGuard {
    let guard = MountGuard::new();
    let for_cleanup = guard.clone();
    on_cleanup(move || for_cleanup.release());
    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_accessors() {
        let loading: Remote<u32> = Remote::Loading;
        assert!(loading.is_loading());
        assert!(loading.ready().is_none());

        let ready = Remote::Ready(7u32);
        assert!(!ready.is_loading());
        assert_eq!(ready.ready(), Some(&7));

        let failed: Remote<u32> = Remote::Failed("Network error".into());
        assert!(!failed.is_loading());
        assert!(failed.ready().is_none());
    }

    #[test]
    fn released_guard_discards_late_resolutions() {
        let guard = MountGuard::new();
        let in_flight = guard.clone();
        assert!(in_flight.live());

        // Component unmounts while the fetch is pending.
        guard.release();

        // The resolution handler sees a dead guard and must not apply
        // its result.
        assert!(!in_flight.live());
    }

    #[test]
    fn guard_clones_share_state() {
        let guard = MountGuard::new();
        let a = guard.clone();
        let b = guard.clone();
        b.release();
        assert!(!a.live());
        assert!(!guard.live());
    }
}
