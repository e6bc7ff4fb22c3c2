//! Window-resize observation.

use super::host::{EventStream, EventSurface, SubscriberId};

/// Observes window resize events on an event surface.
///
/// Unlike [`ScrollObserver`](super::ScrollObserver) there is no frame
/// coalescing here; resize events are rare enough that each one is handled
/// directly, gated only by the enabled flag.
#[derive(Debug)]
pub struct ResizeObserver {
    id: SubscriberId,
    enabled: bool,
    bound: bool,
}

impl ResizeObserver {
    pub fn new(enabled: bool) -> Self {
        Self {
            id: SubscriberId::next(),
            enabled,
            bound: false,
        }
    }

    pub fn bind(&mut self, surface: &mut dyn EventSurface) {
        if self.bound {
            return;
        }
        surface.subscribe(EventStream::Resize, self.id);
        self.bound = true;
    }

    pub fn unbind(&mut self, surface: &mut dyn EventSurface) {
        if !self.bound {
            return;
        }
        surface.unsubscribe(EventStream::Resize, self.id);
        self.bound = false;
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Records a raw resize event. Returns true when the handler should run.
    pub fn notify_event(&mut self) -> bool {
        self.enabled && self.bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observe::mock::MockSurface;

    #[test]
    fn test_resize_events_are_not_coalesced() {
        let mut surface = MockSurface::new();
        let mut observer = ResizeObserver::new(true);
        observer.bind(&mut surface);

        assert!(observer.notify_event());
        assert!(observer.notify_event());
    }

    #[test]
    fn test_disabled_or_unbound_ignores_events() {
        let mut surface = MockSurface::new();
        let mut observer = ResizeObserver::new(true);
        assert!(!observer.notify_event());

        observer.bind(&mut surface);
        observer.set_enabled(false);
        assert!(!observer.notify_event());

        observer.set_enabled(true);
        observer.unbind(&mut surface);
        assert!(!observer.notify_event());
        assert_eq!(surface.subscriber_count(EventStream::Resize), 0);
    }
}
