//! Chrome configuration: appearance defaults and title-bar behavior.

use serde::{Deserialize, Serialize};

use crate::chrome::drag::DEFAULT_DRAG_RESTORE_THRESHOLD;
use crate::chrome::properties::ChromeAppearance;
use crate::chrome::title_bar::{DEFAULT_BUTTON_WIDTH, DEFAULT_TITLE_BAR_HEIGHT, TitleBarMetrics};
use crate::geometry::Point;

/// What the close button (and WM_CLOSE) does to the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CloseBehavior {
    #[default]
    Destroy,
    /// Keep the window alive and hide it, so it can be shown again.
    Hide,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromeConfig {
    pub appearance: ChromeAppearance,
    /// Request OS blur-behind for the window.
    pub blur: bool,
    /// Draw the replicated title bar. Without it the window is a plain
    /// blurred surface that still maximizes correctly.
    pub title_bar: bool,
    pub close_behavior: CloseBehavior,
    /// Consecutive held mouse moves before a maximized window is dragged out.
    pub drag_restore_threshold: u32,
    pub title_bar_height: i32,
    pub button_width: i32,
    pub min_track_size: Option<Point>,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            appearance: ChromeAppearance::default(),
            blur: true,
            title_bar: true,
            close_behavior: CloseBehavior::Destroy,
            drag_restore_threshold: DEFAULT_DRAG_RESTORE_THRESHOLD,
            title_bar_height: DEFAULT_TITLE_BAR_HEIGHT,
            button_width: DEFAULT_BUTTON_WIDTH,
            min_track_size: Some(Point::new(300, 200)),
        }
    }
}

impl ChromeConfig {
    /// Repair values a hand-edited file may have pushed out of range.
    pub fn normalized(mut self) -> Self {
        self.appearance = self.appearance.normalized();
        self.drag_restore_threshold = self.drag_restore_threshold.max(1);
        if self.title_bar_height <= 0 {
            self.title_bar_height = DEFAULT_TITLE_BAR_HEIGHT;
        }
        self.button_width = self.button_width.max(DEFAULT_BUTTON_WIDTH);
        self.min_track_size = self
            .min_track_size
            .map(|p| Point::new(p.x.max(0), p.y.max(0)));
        self
    }

    pub fn title_bar_metrics(&self) -> TitleBarMetrics {
        TitleBarMetrics {
            height: self.title_bar_height,
            button_width: self.button_width,
        }
    }
}
