//! Recording host mocks shared by observer and grid-view tests.

use std::collections::HashMap;

use super::host::{ElementId, EventStream, EventSurface, SubscriberId, VisibilityHost};

/// Event surface that records subscriptions and scroll-to calls.
pub struct MockSurface {
    subscribers: HashMap<EventStream, Vec<SubscriberId>>,
    pub scroll_top: f32,
    pub viewport_height: f32,
    pub scroll_to_calls: Vec<f32>,
}

impl MockSurface {
    pub fn new() -> Self {
        Self::with_viewport(800.0)
    }

    pub fn with_viewport(viewport_height: f32) -> Self {
        Self {
            subscribers: HashMap::new(),
            scroll_top: 0.0,
            viewport_height,
            scroll_to_calls: Vec::new(),
        }
    }

    pub fn subscriber_count(&self, stream: EventStream) -> usize {
        self.subscribers.get(&stream).map_or(0, |subs| subs.len())
    }

    pub fn total_subscriptions(&self) -> usize {
        self.subscribers.values().map(|subs| subs.len()).sum()
    }
}

impl EventSurface for MockSurface {
    fn subscribe(&mut self, stream: EventStream, subscriber: SubscriberId) {
        self.subscribers.entry(stream).or_default().push(subscriber);
    }

    fn unsubscribe(&mut self, stream: EventStream, subscriber: SubscriberId) {
        if let Some(subs) = self.subscribers.get_mut(&stream) {
            subs.retain(|s| *s != subscriber);
        }
    }

    fn scroll_top(&self) -> f32 {
        self.scroll_top
    }

    fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    fn scroll_to(&mut self, offset: f32) {
        self.scroll_top = offset;
        self.scroll_to_calls.push(offset);
    }
}

/// Visibility host that records observe/unobserve calls.
pub struct MockVisibilityHost {
    supported: bool,
    watches: Vec<(ElementId, SubscriberId)>,
    calls: Vec<String>,
}

impl MockVisibilityHost {
    pub fn new() -> Self {
        Self {
            supported: true,
            watches: Vec::new(),
            calls: Vec::new(),
        }
    }

    /// A host lacking the visibility primitive.
    pub fn unsupported() -> Self {
        Self {
            supported: false,
            ..Self::new()
        }
    }

    pub fn active_watch_count(&self) -> usize {
        self.watches.len()
    }

    pub fn call_log(&self) -> Vec<String> {
        self.calls.clone()
    }
}

impl VisibilityHost for MockVisibilityHost {
    fn supports_visibility(&self) -> bool {
        self.supported
    }

    fn observe(&mut self, element: ElementId, _threshold: f32, watcher: SubscriberId) {
        self.watches.push((element, watcher));
        self.calls.push(format!("observe({})", element.0));
    }

    fn unobserve(&mut self, element: ElementId, watcher: SubscriberId) {
        self.watches.retain(|(e, w)| !(*e == element && *w == watcher));
        self.calls.push(format!("unobserve({})", element.0));
    }
}
