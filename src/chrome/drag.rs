// --- DRAG / FULLSCREEN STATE ---
// Title-bar drag surface behavior: double-click toggles maximize, and dragging a
// maximized window restores it under the cursor after a short debounce.

use crate::geometry::Point;

pub const DEFAULT_DRAG_RESTORE_THRESHOLD: u32 = 3;

/// Vertical distance from the restored window's top edge to the cursor.
pub const RESTORE_CURSOR_OFFSET_Y: i32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowMode {
    #[default]
    Normal,
    Maximized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragAction {
    None,
    /// Hand the drag to the OS move loop.
    BeginMove,
    /// Keep receiving mouse moves while the button is held on a maximized window.
    CaptureMouse,
    Maximize,
    Restore,
    /// Restore, place the window's top-left at (`left`, `top`), then begin a move.
    RestoreAndMove { left: i32, top: i32 },
}

#[derive(Debug, Clone)]
pub struct DragRestoreTracker {
    mode: WindowMode,
    frames: u32,
    threshold: u32,
}

impl Default for DragRestoreTracker {
    fn default() -> Self {
        Self::new(DEFAULT_DRAG_RESTORE_THRESHOLD)
    }
}

impl DragRestoreTracker {
    pub fn new(threshold: u32) -> Self {
        Self {
            mode: WindowMode::Normal,
            frames: 0,
            threshold: threshold.max(1),
        }
    }

    pub fn mode(&self) -> WindowMode {
        self.mode
    }

    pub fn frames(&self) -> u32 {
        self.frames
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Explicit state change (maximize button, keyboard snap, system menu).
    pub fn set_mode(&mut self, mode: WindowMode) {
        self.mode = mode;
        self.frames = 0;
    }

    /// Flip between normal and maximized, returning the action that performs it.
    pub fn toggle(&mut self) -> DragAction {
        match self.mode {
            WindowMode::Normal => {
                self.set_mode(WindowMode::Maximized);
                DragAction::Maximize
            }
            WindowMode::Maximized => {
                self.set_mode(WindowMode::Normal);
                DragAction::Restore
            }
        }
    }

    pub fn on_button_down(&mut self, click_count: u32) -> DragAction {
        if click_count >= 2 {
            return self.toggle();
        }
        self.frames = 0;
        match self.mode {
            WindowMode::Normal => DragAction::BeginMove,
            WindowMode::Maximized => DragAction::CaptureMouse,
        }
    }

    /// One mouse-move on the drag surface. `cursor` is in screen coordinates and
    /// `restored_width` is the width the window will have once restored.
    pub fn on_mouse_move(
        &mut self,
        button_held: bool,
        cursor: Point,
        restored_width: i32,
    ) -> DragAction {
        if !button_held {
            self.frames = 0;
            return DragAction::None;
        }
        if self.mode != WindowMode::Maximized {
            return DragAction::None;
        }

        self.frames += 1;
        if self.frames < self.threshold {
            return DragAction::None;
        }

        self.set_mode(WindowMode::Normal);
        DragAction::RestoreAndMove {
            left: cursor.x - restored_width / 2,
            top: cursor.y - RESTORE_CURSOR_OFFSET_Y,
        }
    }

    pub fn on_button_up(&mut self) {
        self.frames = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn maximized(threshold: u32) -> DragRestoreTracker {
        let mut tracker = DragRestoreTracker::new(threshold);
        tracker.set_mode(WindowMode::Maximized);
        tracker
    }

    #[test]
    fn double_click_toggles() {
        let mut tracker = DragRestoreTracker::default();
        assert_eq!(tracker.on_button_down(2), DragAction::Maximize);
        assert_eq!(tracker.mode(), WindowMode::Maximized);
        assert_eq!(tracker.on_button_down(2), DragAction::Restore);
        assert_eq!(tracker.mode(), WindowMode::Normal);
    }

    #[test]
    fn single_click_on_normal_window_moves() {
        let mut tracker = DragRestoreTracker::default();
        assert_eq!(tracker.on_button_down(1), DragAction::BeginMove);
        assert_eq!(tracker.mode(), WindowMode::Normal);
        // Moves on a normal window never restore anything.
        for _ in 0..10 {
            let action = tracker.on_mouse_move(true, Point::new(10, 10), 800);
            assert_eq!(action, DragAction::None);
        }
        assert_eq!(tracker.frames(), 0);
    }

    #[test]
    fn restores_exactly_on_third_move() {
        let mut tracker = maximized(3);
        assert_eq!(tracker.on_button_down(1), DragAction::CaptureMouse);

        let cursor = Point::new(960, 12);
        assert_eq!(tracker.on_mouse_move(true, cursor, 800), DragAction::None);
        assert_eq!(tracker.mode(), WindowMode::Maximized);
        assert_eq!(tracker.on_mouse_move(true, cursor, 800), DragAction::None);
        assert_eq!(tracker.mode(), WindowMode::Maximized);
        assert_eq!(
            tracker.on_mouse_move(true, cursor, 800),
            DragAction::RestoreAndMove { left: 560, top: 7 }
        );
        assert_eq!(tracker.mode(), WindowMode::Normal);
        assert_eq!(tracker.frames(), 0);
    }

    #[test]
    fn release_before_threshold_resets_counter() {
        for presses in 0..3 {
            let mut tracker = maximized(3);
            tracker.on_button_down(1);
            for _ in 0..presses {
                tracker.on_mouse_move(true, Point::new(0, 0), 800);
            }
            tracker.on_button_up();
            assert_eq!(tracker.frames(), 0);
            assert_eq!(tracker.mode(), WindowMode::Maximized);
        }
    }

    #[test]
    fn move_without_button_resets_counter() {
        let mut tracker = maximized(3);
        tracker.on_button_down(1);
        tracker.on_mouse_move(true, Point::new(0, 0), 800);
        tracker.on_mouse_move(true, Point::new(0, 0), 800);
        assert_eq!(tracker.on_mouse_move(false, Point::new(0, 0), 800), DragAction::None);
        assert_eq!(tracker.frames(), 0);
        // Two more held moves are not enough after the reset.
        tracker.on_mouse_move(true, Point::new(0, 0), 800);
        assert_eq!(
            tracker.on_mouse_move(true, Point::new(0, 0), 800),
            DragAction::None
        );
        assert_eq!(tracker.mode(), WindowMode::Maximized);
    }

    #[test]
    fn explicit_state_change_resets_counter() {
        let mut tracker = maximized(3);
        tracker.on_mouse_move(true, Point::new(0, 0), 800);
        tracker.on_mouse_move(true, Point::new(0, 0), 800);
        tracker.set_mode(WindowMode::Maximized);
        assert_eq!(tracker.frames(), 0);
    }

    #[test]
    fn threshold_is_tunable() {
        let mut tracker = maximized(1);
        tracker.on_button_down(1);
        assert!(matches!(
            tracker.on_mouse_move(true, Point::new(100, 100), 200),
            DragAction::RestoreAndMove { left: 0, top: 95 }
        ));

        let mut tracker = maximized(5);
        for _ in 0..4 {
            assert_eq!(tracker.on_mouse_move(true, Point::new(0, 0), 10), DragAction::None);
        }
        assert!(matches!(
            tracker.on_mouse_move(true, Point::new(0, 0), 10),
            DragAction::RestoreAndMove { .. }
        ));
    }

    #[test]
    fn zero_threshold_is_raised_to_one() {
        assert_eq!(DragRestoreTracker::new(0).threshold(), 1);
    }
}
