//! Leptos Reorder Utilities
//!
//! Drag-to-reorder for Leptos lists using the browser's native drag events.
//! One gesture is in flight at a time; the tracker records source and hover
//! indices across dragover events and commits a single move on drop.

use leptos::prelude::*;
use web_sys::DragEvent;

/// State of one drag gesture, from dragstart to drop or dragend.
///
/// Both indices are `None` outside a gesture. Drop and dragend are
/// mutually exclusive terminal events; either one clears the state.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct DragGesture {
    source: Option<usize>,
    target: Option<usize>,
}

impl DragGesture {
    /// Begin a gesture from the item at `index`
    pub fn start(&mut self, index: usize) {
        self.source = Some(index);
    }

    /// Update the hovered item. Fires repeatedly while hovering; the last
    /// hover before drop wins.
    pub fn hover(&mut self, index: usize) {
        self.target = Some(index);
    }

    /// Index the gesture started from, if one is active
    pub fn source(&self) -> Option<usize> {
        self.source
    }

    /// Index currently hovered, if any
    pub fn target(&self) -> Option<usize> {
        self.target
    }

    /// Terminal: drop. Returns the `(source, target)` pair to commit, or
    /// `None` when either index is missing or they are equal. Clears the
    /// gesture either way.
    pub fn finish(&mut self) -> Option<(usize, usize)> {
        let commit = match (self.source, self.target) {
            (Some(from), Some(to)) if from != to => Some((from, to)),
            _ => None,
        };
        self.cancel();
        commit
    }

    /// Terminal: the gesture ended without a drop. Clears all state,
    /// commits nothing.
    pub fn cancel(&mut self) {
        self.source = None;
        self.target = None;
    }
}

/// Handle to the gesture cell. A plain stored value, not a signal:
/// dragover fires continuously and must not schedule re-renders.
pub type GestureHandle = StoredValue<DragGesture>;

pub fn create_gesture() -> GestureHandle {
    StoredValue::new(DragGesture::default())
}

/// Create dragstart handler for the item at `index`
///
/// Signals a move to the platform and serializes the index into the drag
/// payload; the tracker keeps its own authoritative copy of the source.
pub fn make_on_drag_start(gesture: GestureHandle, index: usize) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        if let Some(dt) = ev.data_transfer() {
            dt.set_effect_allowed("move");
            let _ = dt.set_data("text", &index.to_string());
        }
        gesture.update_value(|g| g.start(index));
    }
}

/// Create dragover handler for the item at `index`
///
/// Must cancel the platform default, which would otherwise reject the drop.
pub fn make_on_drag_over(gesture: GestureHandle, index: usize) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        ev.prevent_default();
        gesture.update_value(|g| g.hover(index));
    }
}

/// Create drop handler; runs `on_move` with `(from, to)` when the gesture
/// commits. Missing or equal indices are a no-op, not an error.
pub fn make_on_drop(gesture: GestureHandle, on_move: Callback<(usize, usize)>) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        ev.prevent_default();
        if let Some((from, to)) = gesture.try_update_value(|g| g.finish()).flatten() {
            on_move.run((from, to));
        }
    }
}

/// Create dragend handler; fires when a gesture terminates without a
/// successful drop
pub fn make_on_drag_end(gesture: GestureHandle) -> impl Fn(DragEvent) + Copy + 'static {
    move |_ev: DragEvent| {
        gesture.update_value(|g| g.cancel());
    }
}

#[cfg(test)]
mod tests {
    use super::DragGesture;

    #[test]
    fn test_drop_commits_source_and_target() {
        let mut g = DragGesture::default();
        g.start(0);
        g.hover(2);
        assert_eq!(g.finish(), Some((0, 2)));
    }

    #[test]
    fn test_last_hover_wins() {
        let mut g = DragGesture::default();
        g.start(0);
        g.hover(1);
        g.hover(2);
        g.hover(1);
        assert_eq!(g.finish(), Some((0, 1)));
    }

    #[test]
    fn test_drop_on_self_is_noop() {
        let mut g = DragGesture::default();
        g.start(1);
        g.hover(1);
        assert_eq!(g.finish(), None);
    }

    #[test]
    fn test_drop_without_hover_is_noop() {
        let mut g = DragGesture::default();
        g.start(1);
        assert_eq!(g.finish(), None);
    }

    #[test]
    fn test_drop_without_start_is_noop() {
        let mut g = DragGesture::default();
        g.hover(2);
        assert_eq!(g.finish(), None);
    }

    #[test]
    fn test_finish_clears_state() {
        let mut g = DragGesture::default();
        g.start(0);
        g.hover(2);
        g.finish();
        assert_eq!(g, DragGesture::default());
        // A second drop with no new gesture commits nothing
        assert_eq!(g.finish(), None);
    }

    #[test]
    fn test_cancel_clears_state_after_hovers() {
        let mut g = DragGesture::default();
        g.start(1);
        g.hover(0);
        g.hover(0);
        g.cancel();
        assert_eq!(g.source(), None);
        assert_eq!(g.target(), None);
        assert_eq!(g.finish(), None);
    }
}
