//! egui adapters for the observer host traits.
//!
//! Bridges immediate-mode egui state to the event-driven observer model.
//! Each frame the movies panel feeds these adapters the current scroll
//! offset, viewport size, and wheel input; they synthesize the raw event
//! stream and visibility transitions the grid view's observers consume.
//! The two host primitives are separate objects, like the native scroll
//! listeners and the intersection observer they stand in for.

use std::collections::HashMap;

use eframe::egui;

use crate::observe::{ElementId, EventStream, EventSurface, SubscriberId, VisibilityHost};

/// Event surface backed by the grid's egui scroll area.
pub struct EguiGridSurface {
    subscriptions: HashMap<EventStream, Vec<SubscriberId>>,

    scroll_top: f32,
    viewport_height: f32,
    /// Offset to apply to the scroll area on the next frame (immediate jump)
    pending_scroll_jump: Option<f32>,

    /// Raw events synthesized this frame
    events: Vec<EventStream>,
}

impl EguiGridSurface {
    pub fn new() -> Self {
        Self {
            subscriptions: HashMap::new(),
            scroll_top: 0.0,
            viewport_height: 0.0,
            pending_scroll_jump: None,
            events: Vec::new(),
        }
    }

    /// Start-of-frame update: a viewport size change synthesizes a resize
    /// event, wheel input a wheel event.
    pub fn begin_frame(&mut self, viewport_height: f32, wheel_delta: f32) {
        if viewport_height != self.viewport_height {
            self.viewport_height = viewport_height;
            self.events.push(EventStream::Resize);
        }
        if wheel_delta != 0.0 {
            self.events.push(EventStream::Wheel);
        }
    }

    /// Post-render update with the scroll area's current offset; an offset
    /// change synthesizes a scroll event.
    pub fn set_scroll_offset(&mut self, offset: f32) {
        if offset != self.scroll_top {
            self.scroll_top = offset;
            self.events.push(EventStream::Scroll);
        }
    }

    /// Raw events synthesized since the last drain.
    pub fn drain_events(&mut self) -> Vec<EventStream> {
        std::mem::take(&mut self.events)
    }

    /// Pending immediate jump for the scroll area builder, if any.
    pub fn take_scroll_jump(&mut self) -> Option<f32> {
        self.pending_scroll_jump.take()
    }
}

impl Default for EguiGridSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSurface for EguiGridSurface {
    fn subscribe(&mut self, stream: EventStream, subscriber: SubscriberId) {
        self.subscriptions.entry(stream).or_default().push(subscriber);
    }

    fn unsubscribe(&mut self, stream: EventStream, subscriber: SubscriberId) {
        if let Some(subs) = self.subscriptions.get_mut(&stream) {
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
        self.pending_scroll_jump = Some(offset);
        self.scroll_top = offset;
        // A programmatic jump is still a scroll: the range recomputes from
        // the new offset on the next frame
        self.events.push(EventStream::Scroll);
    }
}

/// Visibility host backed by rect intersection against the scroll viewport.
pub struct EguiVisibilityHost {
    watches: HashMap<ElementId, (f32, SubscriberId)>,
    /// Last reported visibility ratio per watched element
    ratios: HashMap<ElementId, f32>,
    /// Whether the element was intersecting at the last poll
    states: HashMap<ElementId, bool>,
}

impl EguiVisibilityHost {
    pub fn new() -> Self {
        Self {
            watches: HashMap::new(),
            ratios: HashMap::new(),
            states: HashMap::new(),
        }
    }

    /// Reports how much of a watched element is visible this frame.
    /// `element_rect` None means the element is not in the render tree.
    pub fn update_element_visibility(
        &mut self,
        element: ElementId,
        element_rect: Option<egui::Rect>,
        viewport_rect: egui::Rect,
    ) {
        let ratio = element_rect.map_or(0.0, |rect| visible_ratio(rect, viewport_rect));
        self.ratios.insert(element, ratio);
    }

    /// Returns Some(now_intersecting) when the watched element's state
    /// crossed its threshold since the last poll.
    pub fn poll_visibility_transition(&mut self, element: ElementId) -> Option<bool> {
        let (threshold, _) = *self.watches.get(&element)?;
        let ratio = *self.ratios.get(&element)?;
        let intersecting = ratio >= threshold && ratio > 0.0;

        let previous = self.states.insert(element, intersecting);
        if previous == Some(intersecting) {
            None
        } else {
            Some(intersecting)
        }
    }
}

impl Default for EguiVisibilityHost {
    fn default() -> Self {
        Self::new()
    }
}

impl VisibilityHost for EguiVisibilityHost {
    fn supports_visibility(&self) -> bool {
        true
    }

    fn observe(&mut self, element: ElementId, threshold: f32, watcher: SubscriberId) {
        self.watches.insert(element, (threshold, watcher));
    }

    fn unobserve(&mut self, element: ElementId, _watcher: SubscriberId) {
        self.watches.remove(&element);
        self.ratios.remove(&element);
        self.states.remove(&element);
    }
}

/// Fraction of `rect`'s area that lies inside `viewport`.
fn visible_ratio(rect: egui::Rect, viewport: egui::Rect) -> f32 {
    let intersection = rect.intersect(viewport);
    if intersection.width() <= 0.0 || intersection.height() <= 0.0 {
        return 0.0;
    }
    let rect_area = rect.width() * rect.height();
    if rect_area <= 0.0 {
        return 0.0;
    }
    (intersection.width() * intersection.height()) / rect_area
}
