// --- WINDOW DECORATION ---
// Acrylic chrome as a capability a plain window attaches: blur, maximize
// correction, bindable appearance and the replicated title bar.

pub mod drag;
pub mod paint;
pub mod properties;
pub mod title_bar;

#[cfg(target_os = "windows")]
pub mod native;

use crate::composition;
use crate::config::{ChromeConfig, CloseBehavior};
use crate::geometry::Point;
use crate::maximize::{self, GeometryCorrector};
use crate::win_types::{NativeWindow, WindowHandle};
use drag::{DragAction, DragRestoreTracker, WindowMode};
use properties::ChromeProperties;
use title_bar::{TitleBarHit, TitleBarLayout, TitleBarMetrics, TitleButton};

/// Something the host must do to the native window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromeAction {
    None,
    Minimize,
    Maximize,
    Restore,
    /// Ask the window to close; the host answers with `on_close_requested`.
    Close,
    Hide,
    Destroy,
    BeginMove,
    CaptureMouse,
    ReleaseMouse,
    RestoreAndMove { left: i32, top: i32 },
    Repaint,
}

impl From<DragAction> for ChromeAction {
    fn from(action: DragAction) -> Self {
        match action {
            DragAction::None => ChromeAction::None,
            DragAction::BeginMove => ChromeAction::BeginMove,
            DragAction::CaptureMouse => ChromeAction::CaptureMouse,
            DragAction::Maximize => ChromeAction::Maximize,
            DragAction::Restore => ChromeAction::Restore,
            DragAction::RestoreAndMove { left, top } => ChromeAction::RestoreAndMove { left, top },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecorationOptions {
    pub blur: bool,
    pub title_bar: bool,
    pub close_behavior: CloseBehavior,
}

impl From<&ChromeConfig> for DecorationOptions {
    fn from(config: &ChromeConfig) -> Self {
        Self {
            blur: config.blur,
            title_bar: config.title_bar,
            close_behavior: config.close_behavior,
        }
    }
}

pub struct WindowDecoration {
    properties: ChromeProperties,
    tracker: DragRestoreTracker,
    metrics: TitleBarMetrics,
    options: DecorationOptions,
    corrector: GeometryCorrector,
    handle: Option<WindowHandle>,
    blur_applied: bool,
    hook_installed: bool,
    client_width: i32,
    hovered: Option<TitleButton>,
    pressed: Option<TitleButton>,
    dragging: bool,
}

impl WindowDecoration {
    pub fn new(config: &ChromeConfig) -> Self {
        let config = config.clone().normalized();
        Self {
            properties: ChromeProperties::new(config.appearance.clone()),
            tracker: DragRestoreTracker::new(config.drag_restore_threshold),
            metrics: config.title_bar_metrics(),
            options: DecorationOptions::from(&config),
            corrector: GeometryCorrector::new(config.min_track_size),
            handle: None,
            blur_applied: false,
            hook_installed: false,
            client_width: 0,
            hovered: None,
            pressed: None,
            dragging: false,
        }
    }

    pub fn options(&self) -> DecorationOptions {
        self.options
    }

    pub fn properties(&self) -> &ChromeProperties {
        &self.properties
    }

    pub fn properties_mut(&mut self) -> &mut ChromeProperties {
        &mut self.properties
    }

    pub fn mode(&self) -> WindowMode {
        self.tracker.mode()
    }

    pub fn handle(&self) -> Option<WindowHandle> {
        self.handle
    }

    pub fn is_blur_applied(&self) -> bool {
        self.blur_applied
    }

    pub fn is_hook_installed(&self) -> bool {
        self.hook_installed
    }

    pub fn hovered(&self) -> Option<TitleButton> {
        self.hovered
    }

    pub fn pressed(&self) -> Option<TitleButton> {
        self.pressed
    }

    /// "Window handle now exists": request blur, once.
    pub fn on_handle_created(&mut self, window: &impl NativeWindow) {
        let handle = window.handle();
        self.handle = Some(handle);
        // A null handle is not a window yet; retry on the next attach.
        if self.options.blur && !self.blur_applied && !handle.is_null() {
            composition::enable_background_blur(handle);
            self.blur_applied = true;
        }
    }

    /// "Native message source attached": install the maximize correction, once.
    pub fn on_message_source_attached(&mut self, window: &impl NativeWindow) {
        let handle = window.handle();
        self.handle = Some(handle);
        if !self.hook_installed && !handle.is_null() {
            maximize::install_hook_with(handle, self.corrector);
            self.hook_installed = true;
        }
    }

    /// Both lifecycle steps for hosts that have a single creation callback.
    pub fn attach(&mut self, window: &impl NativeWindow) -> WindowHandle {
        self.on_handle_created(window);
        self.on_message_source_attached(window);
        window.handle()
    }

    pub fn resize(&mut self, client_width: i32) {
        self.client_width = client_width.max(0);
    }

    pub fn layout(&self) -> Option<TitleBarLayout> {
        self.options.title_bar.then(|| {
            TitleBarLayout::compute(self.client_width, &self.metrics, self.properties.values())
        })
    }

    fn hit_test(&self, p: Point) -> TitleBarHit {
        self.layout()
            .map(|layout| layout.hit_test(p))
            .unwrap_or(TitleBarHit::Client)
    }

    /// Left button pressed at client point `p`.
    pub fn on_button_down(&mut self, p: Point, click_count: u32) -> ChromeAction {
        match self.hit_test(p) {
            TitleBarHit::Button(button) => {
                self.pressed = Some(button);
                ChromeAction::CaptureMouse
            }
            TitleBarHit::Drag => {
                let action = self.tracker.on_button_down(click_count);
                self.dragging = action == DragAction::CaptureMouse;
                action.into()
            }
            TitleBarHit::Client => ChromeAction::None,
        }
    }

    /// Mouse moved to client point `p`. `cursor` is the same point in screen
    /// coordinates, `restored_width` the window width once un-maximized.
    pub fn on_mouse_move(
        &mut self,
        p: Point,
        button_held: bool,
        cursor: Point,
        restored_width: i32,
    ) -> ChromeAction {
        if self.dragging {
            let action = self.tracker.on_mouse_move(button_held, cursor, restored_width);
            if !button_held {
                self.dragging = false;
                return ChromeAction::ReleaseMouse;
            }
            if let DragAction::RestoreAndMove { .. } = action {
                self.dragging = false;
            }
            return action.into();
        }

        let hovered = match self.hit_test(p) {
            TitleBarHit::Button(button) => Some(button),
            _ => None,
        };
        if hovered != self.hovered {
            self.hovered = hovered;
            return ChromeAction::Repaint;
        }
        ChromeAction::None
    }

    /// Left button released at client point `p`. A title-bar button fires only
    /// when released over the button it was pressed on.
    pub fn on_button_up(&mut self, p: Point) -> ChromeAction {
        self.tracker.on_button_up();
        if self.dragging {
            self.dragging = false;
            return ChromeAction::ReleaseMouse;
        }

        let Some(pressed) = self.pressed.take() else {
            return ChromeAction::None;
        };
        if self.hit_test(p) != TitleBarHit::Button(pressed) {
            return ChromeAction::ReleaseMouse;
        }
        match pressed {
            TitleButton::Minimize => ChromeAction::Minimize,
            TitleButton::Maximize => self.tracker.toggle().into(),
            TitleButton::Close => ChromeAction::Close,
        }
    }

    pub fn on_mouse_leave(&mut self) -> ChromeAction {
        if self.hovered.take().is_some() {
            ChromeAction::Repaint
        } else {
            ChromeAction::None
        }
    }

    /// The window changed state outside the title bar (keyboard snap, system
    /// menu, or as a result of our own action).
    pub fn on_mode_changed(&mut self, mode: WindowMode) {
        if self.tracker.mode() != mode {
            self.tracker.set_mode(mode);
        }
        self.dragging = false;
    }

    pub fn on_close_requested(&self) -> ChromeAction {
        match self.options.close_behavior {
            CloseBehavior::Destroy => ChromeAction::Destroy,
            CloseBehavior::Hide => ChromeAction::Hide,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::win_types::LazyHandle;
    use std::cell::Cell;

    fn decoration() -> WindowDecoration {
        let mut deco = WindowDecoration::new(&ChromeConfig::default());
        deco.resize(800);
        deco
    }

    #[test]
    fn attach_realizes_handle_once() {
        let realized = Cell::new(0);
        let window = LazyHandle::new(|| {
            realized.set(realized.get() + 1);
            WindowHandle::NULL
        });
        let mut deco = decoration();
        deco.attach(&window);
        deco.attach(&window);
        assert_eq!(realized.get(), 1);
        assert_eq!(deco.handle(), Some(WindowHandle::NULL));
        assert!(!deco.is_blur_applied());
        assert!(!deco.is_hook_installed());
    }

    #[test]
    fn failed_creation_does_not_block_a_later_attach() {
        let mut deco = decoration();
        deco.attach(&WindowHandle::NULL);
        assert!(!deco.is_blur_applied());
        assert!(!deco.is_hook_installed());

        // A real window arrives later and still gets both native steps.
        let window = WindowHandle::from_raw(0x1000);
        assert_eq!(deco.attach(&window), window);
        assert!(deco.is_blur_applied());
        assert!(deco.is_hook_installed());
        assert_eq!(deco.handle(), Some(window));
    }

    #[test]
    fn double_click_on_drag_surface_toggles_maximize() {
        let mut deco = decoration();
        assert_eq!(deco.on_button_down(Point::new(100, 10), 2), ChromeAction::Maximize);
        assert_eq!(deco.mode(), WindowMode::Maximized);
        assert_eq!(deco.on_button_down(Point::new(100, 10), 2), ChromeAction::Restore);
        assert_eq!(deco.mode(), WindowMode::Normal);
    }

    #[test]
    fn drag_from_maximized_restores_under_cursor() {
        let mut deco = decoration();
        deco.on_mode_changed(WindowMode::Maximized);

        let p = Point::new(400, 10);
        assert_eq!(deco.on_button_down(p, 1), ChromeAction::CaptureMouse);
        assert_eq!(deco.on_mouse_move(p, true, Point::new(400, 10), 640), ChromeAction::None);
        assert_eq!(deco.on_mouse_move(p, true, Point::new(401, 10), 640), ChromeAction::None);
        assert_eq!(
            deco.on_mouse_move(p, true, Point::new(402, 11), 640),
            ChromeAction::RestoreAndMove { left: 82, top: 6 }
        );
        assert_eq!(deco.mode(), WindowMode::Normal);
    }

    #[test]
    fn release_during_maximized_drag_keeps_state() {
        let mut deco = decoration();
        deco.on_mode_changed(WindowMode::Maximized);
        let p = Point::new(400, 10);
        deco.on_button_down(p, 1);
        deco.on_mouse_move(p, true, p, 640);
        deco.on_mouse_move(p, true, p, 640);
        assert_eq!(deco.on_button_up(p), ChromeAction::ReleaseMouse);
        assert_eq!(deco.mode(), WindowMode::Maximized);

        // A new press starts counting from zero.
        deco.on_button_down(p, 1);
        deco.on_mouse_move(p, true, p, 640);
        assert_eq!(deco.on_mouse_move(p, true, p, 640), ChromeAction::None);
    }

    #[test]
    fn buttons_fire_on_release_over_same_button() {
        let mut deco = decoration();
        let close = Point::new(790, 10);
        let minimize = Point::new(680, 10);
        let maximize = Point::new(730, 10);

        assert_eq!(deco.on_button_down(close, 1), ChromeAction::CaptureMouse);
        assert_eq!(deco.on_button_up(close), ChromeAction::Close);

        deco.on_button_down(minimize, 1);
        assert_eq!(deco.on_button_up(minimize), ChromeAction::Minimize);

        deco.on_button_down(maximize, 1);
        assert_eq!(deco.on_button_up(maximize), ChromeAction::Maximize);
        assert_eq!(deco.mode(), WindowMode::Maximized);
        deco.on_button_down(maximize, 1);
        assert_eq!(deco.on_button_up(maximize), ChromeAction::Restore);

        // Pressed on close, released elsewhere: nothing fires.
        deco.on_button_down(close, 1);
        assert_eq!(deco.on_button_up(Point::new(100, 10)), ChromeAction::ReleaseMouse);
    }

    #[test]
    fn hover_changes_request_repaint() {
        let mut deco = decoration();
        let anywhere = Point::new(0, 0);
        assert_eq!(deco.on_mouse_move(Point::new(790, 10), false, anywhere, 0), ChromeAction::Repaint);
        assert_eq!(deco.hovered(), Some(TitleButton::Close));
        assert_eq!(deco.on_mouse_move(Point::new(791, 11), false, anywhere, 0), ChromeAction::None);
        assert_eq!(deco.on_mouse_move(Point::new(100, 200), false, anywhere, 0), ChromeAction::Repaint);
        assert_eq!(deco.hovered(), None);
        assert_eq!(deco.on_mouse_leave(), ChromeAction::None);
    }

    #[test]
    fn hidden_button_area_becomes_drag_surface() {
        let mut deco = decoration();
        deco.properties_mut().set_show_close_button(false);
        // Where close used to be is now the maximize button.
        deco.on_button_down(Point::new(790, 10), 1);
        assert_eq!(deco.on_button_up(Point::new(790, 10)), ChromeAction::Maximize);
    }

    #[test]
    fn without_title_bar_everything_is_client() {
        let config = ChromeConfig {
            title_bar: false,
            ..Default::default()
        };
        let mut deco = WindowDecoration::new(&config);
        deco.resize(800);
        assert!(deco.layout().is_none());
        assert_eq!(deco.on_button_down(Point::new(790, 10), 2), ChromeAction::None);
        assert_eq!(deco.mode(), WindowMode::Normal);
    }

    #[test]
    fn close_behavior() {
        assert_eq!(decoration().on_close_requested(), ChromeAction::Destroy);
        let config = ChromeConfig {
            close_behavior: CloseBehavior::Hide,
            ..Default::default()
        };
        assert_eq!(WindowDecoration::new(&config).on_close_requested(), ChromeAction::Hide);
    }

    #[test]
    fn drag_threshold_comes_from_config() {
        let config = ChromeConfig {
            drag_restore_threshold: 1,
            ..Default::default()
        };
        let mut deco = WindowDecoration::new(&config);
        deco.resize(800);
        deco.on_mode_changed(WindowMode::Maximized);
        let p = Point::new(10, 10);
        deco.on_button_down(p, 1);
        assert!(matches!(
            deco.on_mouse_move(p, true, p, 100),
            ChromeAction::RestoreAndMove { .. }
        ));
    }
}
