//! Host-environment traits the observers attach to.
//!
//! The virtualization core never talks to egui directly. It subscribes to
//! abstract event surfaces and visibility hosts; the egui adapter implements
//! these over the grid's scroll area, and tests substitute recording mocks.
//! Subscription bookkeeping is explicit so teardown is observable: after an
//! unsubscribe, the host must deliver nothing more to that subscriber.

use std::sync::atomic::{AtomicU64, Ordering};

/// Identifier of a subscriber registered on an event surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(pub u64);

impl SubscriberId {
    /// Allocates a process-unique subscriber id.
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Raw event streams a surface can deliver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventStream {
    Scroll,
    Wheel,
    Resize,
}

/// A scrollable surface delivering raw input events.
pub trait EventSurface {
    fn subscribe(&mut self, stream: EventStream, subscriber: SubscriberId);
    fn unsubscribe(&mut self, stream: EventStream, subscriber: SubscriberId);

    /// Current vertical scroll offset. 0 when no scrollable target exists.
    fn scroll_top(&self) -> f32;

    /// Height of the visible viewport in pixels.
    fn viewport_height(&self) -> f32;

    /// Jumps to the given vertical offset immediately (no animation).
    fn scroll_to(&mut self, offset: f32);
}

/// Identifier of a watchable element, e.g. the infinite-scroll sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub u64);

/// Host primitive reporting visibility transitions for watched elements.
pub trait VisibilityHost {
    /// False when the host lacks a visibility-observation primitive;
    /// intersection triggers then degrade to silent no-ops.
    fn supports_visibility(&self) -> bool;

    /// Starts watching `element`; the watcher is notified on transitions
    /// where at least `threshold` of the element's area is visible.
    fn observe(&mut self, element: ElementId, threshold: f32, watcher: SubscriberId);

    /// Stops watching `element`.
    fn unobserve(&mut self, element: ElementId, watcher: SubscriberId);
}
