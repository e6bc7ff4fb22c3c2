//! Virtualized grid view coordination.
//!
//! `GridView` owns the observers and the visible-range state for the movie
//! grid and decides, from the catalog and metrics stores, what the panel
//! should render: which item window is mounted, whether the infinite-scroll
//! sentinel exists, and when the scroll position resets. It is deliberately
//! egui-free; the panel feeds it host events through the observer traits,
//! which keeps every windowing rule unit-testable against mock hosts.

use crate::domain::{visible_row_range, VisibleRange};
use crate::observe::{
    ElementId, EventStream, EventSurface, IntersectionTrigger, ResizeObserver, ScrollObserver,
    VisibilityHost,
};
use crate::state::GridMetricsState;

/// Element id of the infinite-scroll sentinel row.
pub const SENTINEL_ELEMENT: ElementId = ElementId(1);

/// Windowing state machine for the movie grid, one instance per mount.
pub struct GridView {
    scroll_observer: ScrollObserver,
    resize_observer: ResizeObserver,
    sentinel_trigger: IntersectionTrigger,

    /// Row window currently mounted; starts at {0, 0}
    visible_range: VisibleRange,
    /// Viewport height cached on mount and refreshed by resize events
    viewport_height: f32,
    /// Last observed row pitch, for immediate recomputation on change
    last_row_pitch: f32,
    /// Resize event waiting for the next frame tick
    resize_pending: bool,

    /// Latched once the first load finishes with items present; stays set
    /// for the mount's lifetime even if a filter later empties the list,
    /// so the sentinel does not flicker back through its gating
    initial_load_complete: bool,
    /// Filter revision already acted upon
    seen_filter_revision: u64,
    mounted: bool,
}

impl GridView {
    pub fn new() -> Self {
        Self {
            scroll_observer: ScrollObserver::new(true),
            resize_observer: ResizeObserver::new(true),
            sentinel_trigger: IntersectionTrigger::new(true),
            visible_range: VisibleRange::default(),
            viewport_height: 0.0,
            last_row_pitch: 0.0,
            resize_pending: false,
            initial_load_complete: false,
            seen_filter_revision: 0,
            mounted: false,
        }
    }

    // ===== Lifecycle =====

    /// Binds the observers and computes the initial range.
    pub fn mount(&mut self, surface: &mut dyn EventSurface, metrics: &GridMetricsState) {
        if self.mounted {
            return;
        }
        self.scroll_observer.bind(surface);
        self.resize_observer.bind(surface);
        self.viewport_height = surface.viewport_height();
        self.last_row_pitch = metrics.row_pitch();
        self.mounted = true;
        // One unconditional computation on mount
        self.recompute_range(surface, metrics);
    }

    /// Single dispose path: releases every host subscription and discards
    /// per-mount state. Safe to call on an unmounted view.
    pub fn unmount(&mut self, surface: &mut dyn EventSurface, host: &mut dyn VisibilityHost) {
        self.scroll_observer.unbind(surface);
        self.resize_observer.unbind(surface);
        self.sentinel_trigger.detach(host);
        self.visible_range = VisibleRange::default();
        self.initial_load_complete = false;
        self.resize_pending = false;
        self.mounted = false;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    // ===== Event intake =====

    /// Routes a raw host event to the owning observer.
    pub fn deliver_event(&mut self, stream: EventStream) {
        match stream {
            EventStream::Scroll | EventStream::Wheel => self.scroll_observer.notify_event(),
            EventStream::Resize => {
                if self.resize_observer.notify_event() {
                    self.resize_pending = true;
                }
            }
        }
    }

    /// Animation-frame tick: applies a pending resize, then at most one
    /// coalesced scroll recomputation.
    pub fn on_animation_frame(&mut self, surface: &dyn EventSurface, metrics: &GridMetricsState) {
        if self.resize_pending {
            self.resize_pending = false;
            self.viewport_height = surface.viewport_height();
            self.recompute_range(surface, metrics);
        }
        if self.scroll_observer.on_animation_frame() {
            self.recompute_range(surface, metrics);
        }
    }

    /// Pitch watch, called right after the measurement pass writes metrics.
    /// A pitch change recomputes immediately, outside the frame throttle,
    /// so metric transitions land in the same frame they occur.
    pub fn notice_row_pitch(&mut self, surface: &dyn EventSurface, metrics: &GridMetricsState) {
        let pitch = metrics.row_pitch();
        if pitch != self.last_row_pitch {
            self.last_row_pitch = pitch;
            self.recompute_range(surface, metrics);
        }
    }

    /// Reacts to a filter change: scrolls back to the top with an immediate
    /// jump. Returns true when a change was detected (caller refetches).
    pub fn check_filter_change(&mut self, surface: &mut dyn EventSurface, revision: u64) -> bool {
        if revision == self.seen_filter_revision {
            return false;
        }
        self.seen_filter_revision = revision;
        surface.scroll_to(0.0);
        true
    }

    fn recompute_range(&mut self, surface: &dyn EventSurface, metrics: &GridMetricsState) {
        // Zero pitch: keep the previous range (pre-measurement state)
        if let Some(range) =
            visible_row_range(surface.scroll_top(), self.viewport_height, metrics.row_pitch())
        {
            self.visible_range = range;
        }
    }

    // ===== Load state =====

    /// Latches `initial_load_complete` once a finished load left items.
    pub fn update_load_state(&mut self, is_loading: bool, item_count: usize) {
        if !self.initial_load_complete && !is_loading && item_count > 0 {
            self.initial_load_complete = true;
        }
    }

    pub fn initial_load_complete(&self) -> bool {
        self.initial_load_complete
    }

    // ===== Sentinel =====

    /// Whether the sentinel belongs in the render tree: initial load done,
    /// metrics trusted, items present, and more pages available.
    pub fn sentinel_should_mount(
        &self,
        metrics: &GridMetricsState,
        item_count: usize,
        can_load_more: bool,
    ) -> bool {
        self.initial_load_complete
            && !metrics.is_calculation_loading()
            && item_count > 0
            && can_load_more
    }

    /// Reconciles the sentinel watch with its gating conditions.
    pub fn sync_sentinel(&mut self, host: &mut dyn VisibilityHost, should_mount: bool) {
        self.sentinel_trigger
            .set_target(host, should_mount.then_some(SENTINEL_ELEMENT));
    }

    pub fn sentinel_watching(&self) -> bool {
        self.sentinel_trigger.is_watching()
    }

    /// Visibility callback for the sentinel. True means "load more now".
    pub fn on_sentinel_visibility(&mut self, intersecting: bool) -> bool {
        self.sentinel_trigger.on_visibility(intersecting)
    }

    // ===== Window queries =====

    pub fn visible_range(&self) -> VisibleRange {
        self.visible_range
    }

    /// Item indices to mount: the visible row window clamped to the data.
    pub fn visible_items(
        &self,
        metrics: &GridMetricsState,
        item_count: usize,
    ) -> std::ops::Range<usize> {
        let columns = metrics.columns_count();
        if columns == 0 {
            return 0..0;
        }
        self.visible_range
            .item_window(metrics.rows_count(), columns, item_count)
    }
}

impl Default for GridView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observe::mock::{MockSurface, MockVisibilityHost};

    fn measured_metrics() -> GridMetricsState {
        let mut metrics = GridMetricsState::new();
        metrics.set_row_height(100.0);
        metrics.set_vertical_gap(10.0);
        metrics.set_columns_count(3);
        metrics.set_column_width(200.0);
        metrics.set_horizontal_gap(16.0);
        metrics.set_rows_count(40);
        metrics.set_is_calculation_loading(false);
        metrics
    }

    fn mounted_view(surface: &mut MockSurface, metrics: &GridMetricsState) -> GridView {
        let mut view = GridView::new();
        view.mount(surface, metrics);
        view
    }

    #[test]
    fn test_mount_computes_initial_range() {
        let mut surface = MockSurface::with_viewport(800.0);
        let metrics = measured_metrics();
        let view = mounted_view(&mut surface, &metrics);

        // pitch 110, scroll 0: rows 0..=6
        assert_eq!(view.visible_range(), VisibleRange { start: 0, end: 6 });
    }

    #[test]
    fn test_scroll_events_recompute_once_per_frame() {
        let mut surface = MockSurface::with_viewport(800.0);
        let metrics = measured_metrics();
        let mut view = mounted_view(&mut surface, &metrics);

        surface.scroll_top = 1100.0;
        for _ in 0..20 {
            view.deliver_event(EventStream::Scroll);
            view.deliver_event(EventStream::Wheel);
        }
        view.on_animation_frame(&surface, &metrics);
        assert_eq!(view.visible_range(), VisibleRange { start: 10, end: 16 });
    }

    #[test]
    fn test_zero_pitch_retains_previous_range() {
        let mut surface = MockSurface::with_viewport(800.0);
        let metrics = measured_metrics();
        let mut view = mounted_view(&mut surface, &metrics);
        let before = view.visible_range();

        let unmeasured = GridMetricsState::new();
        surface.scroll_top = 5000.0;
        for _ in 0..5 {
            view.deliver_event(EventStream::Scroll);
            view.on_animation_frame(&surface, &unmeasured);
        }
        assert_eq!(view.visible_range(), before);
    }

    #[test]
    fn test_pitch_change_recomputes_immediately() {
        let mut surface = MockSurface::with_viewport(800.0);
        let mut metrics = GridMetricsState::new();
        let mut view = mounted_view(&mut surface, &metrics);
        assert_eq!(view.visible_range(), VisibleRange { start: 0, end: 0 });

        // Measurement lands: pitch 0 -> 110, no scroll event involved
        metrics.set_row_height(100.0);
        metrics.set_vertical_gap(10.0);
        view.notice_row_pitch(&surface, &metrics);
        assert_eq!(view.visible_range(), VisibleRange { start: 0, end: 6 });

        // Unchanged pitch does not recompute
        surface.scroll_top = 1100.0;
        view.notice_row_pitch(&surface, &metrics);
        assert_eq!(view.visible_range(), VisibleRange { start: 0, end: 6 });
    }

    #[test]
    fn test_resize_updates_cached_viewport_height() {
        let mut surface = MockSurface::with_viewport(800.0);
        let metrics = measured_metrics();
        let mut view = mounted_view(&mut surface, &metrics);

        surface.viewport_height = 1400.0;
        view.deliver_event(EventStream::Resize);
        view.on_animation_frame(&surface, &metrics);

        // midpoint 700 -> center row 6
        assert_eq!(view.visible_range(), VisibleRange { start: 3, end: 9 });
    }

    #[test]
    fn test_filter_change_scrolls_to_top_exactly_once() {
        let mut surface = MockSurface::with_viewport(800.0);
        let metrics = measured_metrics();
        let mut view = mounted_view(&mut surface, &metrics);
        surface.scroll_top = 900.0;

        assert!(view.check_filter_change(&mut surface, 1));
        assert_eq!(surface.scroll_to_calls, vec![0.0]);

        // Same revision: no further jump
        assert!(!view.check_filter_change(&mut surface, 1));
        assert_eq!(surface.scroll_to_calls.len(), 1);

        assert!(view.check_filter_change(&mut surface, 2));
        assert_eq!(surface.scroll_to_calls.len(), 2);
    }

    #[test]
    fn test_initial_load_latch_never_reverts() {
        let mut surface = MockSurface::new();
        let metrics = measured_metrics();
        let mut view = mounted_view(&mut surface, &metrics);

        view.update_load_state(true, 0);
        assert!(!view.initial_load_complete());

        view.update_load_state(false, 12);
        assert!(view.initial_load_complete());

        // A filter change empties the list: the latch stays set
        view.update_load_state(false, 0);
        assert!(view.initial_load_complete());
    }

    #[test]
    fn test_sentinel_gating_conditions() {
        let mut surface = MockSurface::new();
        let mut metrics = measured_metrics();
        let mut view = mounted_view(&mut surface, &metrics);
        view.update_load_state(false, 12);

        assert!(view.sentinel_should_mount(&metrics, 12, true));
        assert!(!view.sentinel_should_mount(&metrics, 12, false));
        assert!(!view.sentinel_should_mount(&metrics, 0, true));

        metrics.set_is_calculation_loading(true);
        assert!(!view.sentinel_should_mount(&metrics, 12, true));
    }

    #[test]
    fn test_sentinel_fires_load_more_on_entry() {
        let mut surface = MockSurface::new();
        let mut host = MockVisibilityHost::new();
        let metrics = measured_metrics();
        let mut view = mounted_view(&mut surface, &metrics);
        view.update_load_state(false, 12);

        view.sync_sentinel(&mut host, view.sentinel_should_mount(&metrics, 12, true));
        assert!(view.sentinel_watching());

        assert!(view.on_sentinel_visibility(true));
        assert!(!view.on_sentinel_visibility(true));

        // No more pages: the watch tears down and nothing fires
        view.sync_sentinel(&mut host, view.sentinel_should_mount(&metrics, 12, false));
        assert!(!view.sentinel_watching());
        assert!(!view.on_sentinel_visibility(true));
        assert_eq!(host.active_watch_count(), 0);
    }

    #[test]
    fn test_visible_items_clamps_to_data() {
        let mut surface = MockSurface::with_viewport(800.0);
        let mut metrics = measured_metrics();
        metrics.set_rows_count(3);
        let view = mounted_view(&mut surface, &metrics);

        // Raw range 0..=6 clamped to 3 rows of 3 columns, 8 items loaded
        assert_eq!(view.visible_items(&metrics, 8), 0..8);

        // No columns yet: nothing mounts
        let unmeasured = GridMetricsState::new();
        assert_eq!(view.visible_items(&unmeasured, 8), 0..0);
    }

    #[test]
    fn test_unmount_releases_everything() {
        let mut surface = MockSurface::new();
        let mut host = MockVisibilityHost::new();
        let metrics = measured_metrics();
        let mut view = mounted_view(&mut surface, &metrics);
        view.update_load_state(false, 5);
        view.sync_sentinel(&mut host, true);

        assert!(surface.total_subscriptions() > 0);
        view.unmount(&mut surface, &mut host);

        assert_eq!(surface.total_subscriptions(), 0);
        assert_eq!(host.active_watch_count(), 0);
        assert!(!view.initial_load_complete());

        // Synthetic events after unmount reach nothing
        view.deliver_event(EventStream::Scroll);
        view.on_animation_frame(&surface, &metrics);
        assert!(!view.on_sentinel_visibility(true));
        assert_eq!(view.visible_range(), VisibleRange { start: 0, end: 0 });
    }
}
