// --- DEMO ROSTER ---
// The windows the demo opens and how each reacts to close.

use acrylic_chrome::config::{ChromeConfig, CloseBehavior};
use acrylic_chrome::geometry::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DemoRole {
    /// Owns the message loop; destroying it ends the demo.
    Main,
    /// Blur and maximize correction only, no title bar.
    Basic,
    /// Full chrome with the replicated title bar.
    Full,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DemoWindow {
    pub role: DemoRole,
    pub title: &'static str,
    pub bounds: Rect,
    pub config: ChromeConfig,
    pub visible_at_start: bool,
}

/// Main window plus the two child windows it shows and hides.
/// Children hide on close so they can be shown again.
pub fn demo_windows(base: &ChromeConfig) -> Vec<DemoWindow> {
    let main = ChromeConfig {
        close_behavior: CloseBehavior::Destroy,
        title_bar: true,
        ..base.clone()
    };
    let basic = ChromeConfig {
        close_behavior: CloseBehavior::Hide,
        title_bar: false,
        ..base.clone()
    };
    let full = ChromeConfig {
        close_behavior: CloseBehavior::Hide,
        title_bar: true,
        ..base.clone()
    };
    vec![
        DemoWindow {
            role: DemoRole::Main,
            title: "Acrylic Chrome",
            bounds: Rect::new(200, 200, 1000, 700),
            config: main,
            visible_at_start: true,
        },
        DemoWindow {
            role: DemoRole::Basic,
            title: "Basic acrylic window",
            bounds: Rect::new(260, 260, 740, 560),
            config: basic,
            visible_at_start: false,
        },
        DemoWindow {
            role: DemoRole::Full,
            title: "Acrylic window",
            bounds: Rect::new(320, 320, 960, 780),
            config: full,
            visible_at_start: false,
        },
    ]
}

/// Which child window a key on the main window shows or hides.
pub fn child_for_key(virtual_key: u16) -> Option<DemoRole> {
    match virtual_key {
        0x70 => Some(DemoRole::Basic), // F1
        0x71 => Some(DemoRole::Full),  // F2
        _ => None,
    }
}

pub fn quits_on_destroy(role: DemoRole) -> bool {
    role == DemoRole::Main
}
