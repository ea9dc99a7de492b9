// --- TITLE BAR LAYOUT ---
// Button placement and hit testing for the replicated title bar.

use super::drag::WindowMode;
use super::properties::ChromeAppearance;
use crate::geometry::{Point, Rect};

pub const DEFAULT_TITLE_BAR_HEIGHT: i32 = 30;
pub const DEFAULT_BUTTON_WIDTH: i32 = 45;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TitleButton {
    Minimize,
    Maximize,
    Close,
}

impl TitleButton {
    /// Segoe MDL2 Assets glyph for the button in the given window mode.
    pub fn glyph(self, mode: WindowMode) -> char {
        match (self, mode) {
            (TitleButton::Minimize, _) => '\u{E921}',
            (TitleButton::Maximize, WindowMode::Normal) => '\u{E922}',
            (TitleButton::Maximize, WindowMode::Maximized) => '\u{E923}',
            (TitleButton::Close, _) => '\u{E711}',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleBarHit {
    Button(TitleButton),
    Drag,
    Client,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitleBarMetrics {
    pub height: i32,
    pub button_width: i32,
}

impl Default for TitleBarMetrics {
    fn default() -> Self {
        Self {
            height: DEFAULT_TITLE_BAR_HEIGHT,
            button_width: DEFAULT_BUTTON_WIDTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleBarLayout {
    pub bar: Rect,
    pub drag: Rect,
    /// Left to right.
    pub buttons: Vec<(TitleButton, Rect)>,
}

impl TitleBarLayout {
    pub fn compute(client_width: i32, metrics: &TitleBarMetrics, appearance: &ChromeAppearance) -> Self {
        let width = client_width.max(0);
        let height = metrics.height.max(0);
        let button_width = metrics.button_width.max(DEFAULT_BUTTON_WIDTH);

        let visible: Vec<TitleButton> = [
            (TitleButton::Minimize, appearance.show_minimize_button),
            (TitleButton::Maximize, appearance.show_maximize_button),
            (TitleButton::Close, appearance.show_close_button),
        ]
        .into_iter()
        .filter_map(|(button, shown)| shown.then_some(button))
        .collect();

        // Right aligned; hidden buttons take no space.
        let mut x = (width - button_width * visible.len() as i32).max(0);
        let drag = Rect::new(0, 0, x, height);
        let mut buttons = Vec::with_capacity(visible.len());
        for button in visible {
            let right = (x + button_width).min(width);
            buttons.push((button, Rect::new(x, 0, right, height)));
            x = right;
        }

        Self {
            bar: Rect::new(0, 0, width, height),
            drag,
            buttons,
        }
    }

    pub fn hit_test(&self, p: Point) -> TitleBarHit {
        if !self.bar.contains(p) {
            return TitleBarHit::Client;
        }
        self.buttons
            .iter()
            .find(|(_, rect)| rect.contains(p))
            .map(|(button, _)| TitleBarHit::Button(*button))
            .unwrap_or(TitleBarHit::Drag)
    }

    pub fn button_rect(&self, button: TitleButton) -> Option<Rect> {
        self.buttons
            .iter()
            .find(|(b, _)| *b == button)
            .map(|(_, rect)| *rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_are_right_aligned_with_close_last() {
        let layout = TitleBarLayout::compute(800, &TitleBarMetrics::default(), &ChromeAppearance::default());
        let order: Vec<TitleButton> = layout.buttons.iter().map(|(b, _)| *b).collect();
        assert_eq!(order, [TitleButton::Minimize, TitleButton::Maximize, TitleButton::Close]);
        assert_eq!(layout.button_rect(TitleButton::Close), Some(Rect::new(755, 0, 800, 30)));
        assert_eq!(layout.button_rect(TitleButton::Maximize), Some(Rect::new(710, 0, 755, 30)));
        assert_eq!(layout.button_rect(TitleButton::Minimize), Some(Rect::new(665, 0, 710, 30)));
        assert_eq!(layout.drag, Rect::new(0, 0, 665, 30));
    }

    #[test]
    fn hidden_buttons_collapse() {
        let appearance = ChromeAppearance {
            show_maximize_button: false,
            show_minimize_button: false,
            ..Default::default()
        };
        let layout = TitleBarLayout::compute(800, &TitleBarMetrics::default(), &appearance);
        assert_eq!(layout.buttons.len(), 1);
        assert_eq!(layout.button_rect(TitleButton::Close), Some(Rect::new(755, 0, 800, 30)));
        assert_eq!(layout.button_rect(TitleButton::Maximize), None);
        assert_eq!(layout.drag.right, 755);
    }

    #[test]
    fn hit_testing() {
        let layout = TitleBarLayout::compute(800, &TitleBarMetrics::default(), &ChromeAppearance::default());
        assert_eq!(layout.hit_test(Point::new(10, 10)), TitleBarHit::Drag);
        assert_eq!(layout.hit_test(Point::new(799, 0)), TitleBarHit::Button(TitleButton::Close));
        assert_eq!(layout.hit_test(Point::new(700, 29)), TitleBarHit::Button(TitleButton::Minimize));
        assert_eq!(layout.hit_test(Point::new(720, 15)), TitleBarHit::Button(TitleButton::Maximize));
        assert_eq!(layout.hit_test(Point::new(10, 30)), TitleBarHit::Client);
        assert_eq!(layout.hit_test(Point::new(-1, 5)), TitleBarHit::Client);
    }

    #[test]
    fn button_width_never_below_minimum() {
        let metrics = TitleBarMetrics {
            height: 32,
            button_width: 20,
        };
        let layout = TitleBarLayout::compute(400, &metrics, &ChromeAppearance::default());
        let close = layout.button_rect(TitleButton::Close).unwrap();
        assert_eq!(close.width(), 45);
        assert_eq!(close.height(), 32);
    }

    #[test]
    fn narrow_window_clips_buttons() {
        let layout = TitleBarLayout::compute(100, &TitleBarMetrics::default(), &ChromeAppearance::default());
        assert_eq!(layout.drag.width(), 0);
        for (_, rect) in &layout.buttons {
            assert!(rect.right <= 100);
        }
    }

    #[test]
    fn maximize_glyph_follows_mode() {
        assert_eq!(TitleButton::Maximize.glyph(WindowMode::Normal), '\u{E922}');
        assert_eq!(TitleButton::Maximize.glyph(WindowMode::Maximized), '\u{E923}');
        assert_eq!(TitleButton::Close.glyph(WindowMode::Maximized), '\u{E711}');
    }
}
