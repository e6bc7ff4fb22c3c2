//! Frame-coalesced scroll/wheel observation.

use super::host::{EventStream, EventSurface, SubscriberId};

/// Observes scroll and wheel events on an event surface, delivering at most
/// one handler invocation per animation frame.
///
/// Raw events only mark a frame as pending; the owning view asks
/// [`ScrollObserver::on_animation_frame`] once per frame and runs its handler
/// when it returns true. This is trailing-edge coalescing: however many raw
/// events land within one frame, the handler sees exactly one tick.
///
/// Lifecycle is explicit: `bind` subscribes to the surface, `unbind` releases
/// the subscriptions and cancels any pending frame. An unbound or disabled
/// observer ignores raw events.
#[derive(Debug)]
pub struct ScrollObserver {
    id: SubscriberId,
    enabled: bool,
    bound: bool,
    frame_pending: bool,
}

impl ScrollObserver {
    pub fn new(enabled: bool) -> Self {
        Self {
            id: SubscriberId::next(),
            enabled,
            bound: false,
            frame_pending: false,
        }
    }

    /// Subscribes to the surface's scroll and wheel streams.
    pub fn bind(&mut self, surface: &mut dyn EventSurface) {
        if self.bound {
            return;
        }
        surface.subscribe(EventStream::Scroll, self.id);
        surface.subscribe(EventStream::Wheel, self.id);
        self.bound = true;
    }

    /// Releases the subscriptions and cancels any pending frame work.
    ///
    /// When the observed surface changes mid-lifetime, the caller unbinds
    /// from the old surface before binding to the new one.
    pub fn unbind(&mut self, surface: &mut dyn EventSurface) {
        if !self.bound {
            return;
        }
        surface.unsubscribe(EventStream::Scroll, self.id);
        surface.unsubscribe(EventStream::Wheel, self.id);
        self.bound = false;
        self.frame_pending = false;
    }

    /// Enables or disables event handling. Disabling also cancels a pending
    /// frame so no further invocation escapes.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.frame_pending = false;
        }
    }

    /// Records a raw scroll or wheel event.
    pub fn notify_event(&mut self) {
        if !self.enabled || !self.bound {
            return;
        }
        self.frame_pending = true;
    }

    /// Animation-frame tick. Returns true when the handler should run;
    /// consumes the pending flag so each scheduled frame fires once.
    pub fn on_animation_frame(&mut self) -> bool {
        std::mem::take(&mut self.frame_pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observe::mock::MockSurface;

    #[test]
    fn test_many_events_in_one_frame_fire_once() {
        let mut surface = MockSurface::new();
        let mut observer = ScrollObserver::new(true);
        observer.bind(&mut surface);

        for _ in 0..10 {
            observer.notify_event();
        }
        assert!(observer.on_animation_frame());
        // Same frame already consumed, nothing pending
        assert!(!observer.on_animation_frame());
    }

    #[test]
    fn test_events_in_separate_frames_fire_separately() {
        let mut surface = MockSurface::new();
        let mut observer = ScrollObserver::new(true);
        observer.bind(&mut surface);

        observer.notify_event();
        assert!(observer.on_animation_frame());

        observer.notify_event();
        observer.notify_event();
        assert!(observer.on_animation_frame());
    }

    #[test]
    fn test_disabled_observer_ignores_events() {
        let mut surface = MockSurface::new();
        let mut observer = ScrollObserver::new(true);
        observer.bind(&mut surface);

        observer.set_enabled(false);
        observer.notify_event();
        assert!(!observer.on_animation_frame());

        // Re-enabling resumes on the next qualifying event
        observer.set_enabled(true);
        observer.notify_event();
        assert!(observer.on_animation_frame());
    }

    #[test]
    fn test_disable_cancels_pending_frame() {
        let mut surface = MockSurface::new();
        let mut observer = ScrollObserver::new(true);
        observer.bind(&mut surface);

        observer.notify_event();
        observer.set_enabled(false);
        assert!(!observer.on_animation_frame());
    }

    #[test]
    fn test_bind_and_unbind_manage_subscriptions() {
        let mut surface = MockSurface::new();
        let mut observer = ScrollObserver::new(true);

        // Unbound observer ignores events
        observer.notify_event();
        assert!(!observer.on_animation_frame());

        observer.bind(&mut surface);
        assert_eq!(surface.subscriber_count(EventStream::Scroll), 1);
        assert_eq!(surface.subscriber_count(EventStream::Wheel), 1);

        observer.notify_event();
        observer.unbind(&mut surface);
        assert_eq!(surface.subscriber_count(EventStream::Scroll), 0);
        assert_eq!(surface.subscriber_count(EventStream::Wheel), 0);
        // Pending frame was cancelled on unbind
        assert!(!observer.on_animation_frame());
    }

    #[test]
    fn test_double_bind_does_not_duplicate_subscriptions() {
        let mut surface = MockSurface::new();
        let mut observer = ScrollObserver::new(true);
        observer.bind(&mut surface);
        observer.bind(&mut surface);
        assert_eq!(surface.subscriber_count(EventStream::Scroll), 1);
    }
}
