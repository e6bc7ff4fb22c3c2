//! Intersection-based infinite-scroll trigger.

use super::host::{ElementId, SubscriberId, VisibilityHost};

/// Default fraction of the sentinel's area that must be visible.
pub const DEFAULT_THRESHOLD: f32 = 0.1;

/// Watches a sentinel element's visibility and reports when it enters view.
///
/// The underlying host watch exists only while a target element is set, the
/// trigger is enabled, and the host supports visibility observation; any of
/// those going away tears the watch down. Retargeting unobserves the old
/// element before observing the new one. A host without the primitive makes
/// every operation a silent no-op.
///
/// [`IntersectionTrigger::on_visibility`] reports true only on transitions
/// into view, never continuously while the sentinel stays visible.
#[derive(Debug)]
pub struct IntersectionTrigger {
    id: SubscriberId,
    threshold: f32,
    enabled: bool,
    target: Option<ElementId>,
    watching: Option<ElementId>,
    was_intersecting: bool,
}

impl IntersectionTrigger {
    pub fn new(enabled: bool) -> Self {
        Self::with_threshold(enabled, DEFAULT_THRESHOLD)
    }

    pub fn with_threshold(enabled: bool, threshold: f32) -> Self {
        Self {
            id: SubscriberId::next(),
            threshold,
            enabled,
            target: None,
            watching: None,
            was_intersecting: false,
        }
    }

    pub fn is_watching(&self) -> bool {
        self.watching.is_some()
    }

    /// Sets or clears the watched element, reconciling the host watch.
    pub fn set_target(&mut self, host: &mut dyn VisibilityHost, target: Option<ElementId>) {
        self.target = target;
        self.reconcile(host);
    }

    /// Enables or disables the trigger, reconciling the host watch.
    pub fn set_enabled(&mut self, host: &mut dyn VisibilityHost, enabled: bool) {
        self.enabled = enabled;
        self.reconcile(host);
    }

    /// Tears down the host watch. Part of the owning view's dispose path.
    pub fn detach(&mut self, host: &mut dyn VisibilityHost) {
        self.target = None;
        self.reconcile(host);
    }

    /// Visibility callback from the host. Returns true when the handler
    /// should fire: a transition into view while enabled and watching.
    pub fn on_visibility(&mut self, intersecting: bool) -> bool {
        if self.watching.is_none() {
            return false;
        }
        let entered = intersecting && !self.was_intersecting;
        self.was_intersecting = intersecting;
        entered && self.enabled
    }

    /// Aligns the host watch with the desired (target, enabled) state.
    fn reconcile(&mut self, host: &mut dyn VisibilityHost) {
        if !host.supports_visibility() {
            return;
        }

        let desired = if self.enabled { self.target } else { None };
        if self.watching == desired {
            return;
        }

        if let Some(old) = self.watching.take() {
            host.unobserve(old, self.id);
        }
        if let Some(new) = desired {
            host.observe(new, self.threshold, self.id);
            self.watching = Some(new);
        }
        // A fresh watch reports the initial state as a transition.
        self.was_intersecting = false;
    }
}
