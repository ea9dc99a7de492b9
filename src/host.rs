// --- DEMO HOST ---
// A main window that shows and hides two acrylic child windows.
// F1/F2 on the main window toggle the children. Arrow keys tune opacity and
// noise, 1/2/3 toggle the title-bar buttons of the focused window.

use crate::demo::{child_for_key, demo_windows, quits_on_destroy, DemoRole, DemoWindow};
use acrylic_chrome::chrome::drag::WindowMode;
use acrylic_chrome::chrome::native::{
    apply_action, cursor_position, paint_decoration, point_from_lparam, restored_width,
    window_mode,
};
use acrylic_chrome::config::{save_config, ChromeConfig};
use acrylic_chrome::{log_info, ChromeAction, LazyHandle, WindowDecoration, WindowHandle};
use anyhow::{anyhow, Context};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use windows::core::*;
use windows::Win32::Foundation::*;
use windows::Win32::System::LibraryLoader::{GetModuleHandleW, GetProcAddress};
use windows::Win32::UI::Input::KeyboardAndMouse::*;
use windows::Win32::UI::WindowsAndMessaging::*;

const CLASS_NAME: PCWSTR = w!("AcrylicChromeDemo");
const MK_LBUTTON: usize = 0x0001;
const WM_MOUSELEAVE: u32 = 0x02A3;
const SIZE_RESTORED: usize = 0;
const SIZE_MAXIMIZED: usize = 2;
const OPACITY_STEP: f64 = 0.05;

thread_local! {
    static DECORATIONS: RefCell<HashMap<isize, WindowDecoration>> = RefCell::new(HashMap::new());
    static ROLES: RefCell<HashMap<isize, DemoRole>> = RefCell::new(HashMap::new());
    static TRACKING_LEAVE: RefCell<HashSet<isize>> = RefCell::new(HashSet::new());
    static CONFIG: RefCell<ChromeConfig> = RefCell::new(ChromeConfig::default());
}

/// Run `f` against the window's decoration. Returns `None` when the window
/// is not decorated yet or the decoration is already borrowed further up the
/// stack (a re-entrant message).
fn with_decoration<R>(hwnd: HWND, f: impl FnOnce(&mut WindowDecoration) -> R) -> Option<R> {
    DECORATIONS.with(|map| {
        let mut map = map.try_borrow_mut().ok()?;
        map.get_mut(&(hwnd.0 as isize)).map(f)
    })
}

fn role_of(hwnd: HWND) -> Option<DemoRole> {
    ROLES.with(|roles| roles.borrow().get(&(hwnd.0 as isize)).copied())
}

fn window_with_role(role: DemoRole) -> Option<WindowHandle> {
    ROLES.with(|roles| {
        roles
            .borrow()
            .iter()
            .find(|(_, r)| **r == role)
            .map(|(raw, _)| WindowHandle::from_raw(*raw))
    })
}

/// Show a message box on panic so a crash in the window procedure is visible.
pub fn setup_crash_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_else(|| "unknown location".to_string());
        let payload = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic payload".to_string()
        };
        let error_msg = format!("{}\n\n{}", payload, location);
        log_info!("[Demo] PANIC: {} at {}", payload, location);

        let wide_msg: Vec<u16> = error_msg.encode_utf16().chain(std::iter::once(0)).collect();
        unsafe {
            MessageBoxW(
                None,
                PCWSTR(wide_msg.as_ptr()),
                w!("acrylic-demo crashed"),
                MB_ICONERROR | MB_OK,
            );
        }
    }));
}

/// Per-monitor DPI awareness, so monitor work areas come back in real pixels.
pub fn init_dpi_awareness() {
    unsafe {
        if let Ok(user32) = GetModuleHandleW(w!("user32.dll")) {
            if let Some(set_context) = GetProcAddress(user32, s!("SetProcessDpiAwarenessContext")) {
                let func: unsafe extern "system" fn(isize) -> i32 = std::mem::transmute(set_context);
                // DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2
                let _ = func(-4);
            }
        }
    }
}

pub fn run(config: ChromeConfig) -> anyhow::Result<()> {
    let config = config.normalized();
    CONFIG.with(|c| *c.borrow_mut() = config.clone());

    unsafe {
        let instance = GetModuleHandleW(None).context("GetModuleHandleW failed")?;

        let wc = WNDCLASSW {
            style: CS_DBLCLKS | CS_HREDRAW | CS_VREDRAW,
            lpfnWndProc: Some(wnd_proc),
            hInstance: instance.into(),
            hCursor: LoadCursorW(None, IDC_ARROW).unwrap_or_default(),
            lpszClassName: CLASS_NAME,
            ..Default::default()
        };
        if RegisterClassW(&wc) == 0 {
            return Err(anyhow!("RegisterClassW failed: {:?}", GetLastError()));
        }

        let mut main = None;
        for window in demo_windows(&config) {
            // Children are owned by the main window and go down with it.
            let handle = create_decorated(instance.into(), &window, main)
                .with_context(|| format!("creating {:?} window", window.role))?;
            if window.role == DemoRole::Main {
                main = Some(handle);
            }
            if window.visible_at_start {
                let _ = ShowWindow(handle.hwnd(), SW_SHOW);
            }
        }

        let mut msg = MSG::default();
        while GetMessageW(&mut msg, None, 0, 0).as_bool() {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
    }

    Ok(())
}

fn create_decorated(
    instance: HINSTANCE,
    window: &DemoWindow,
    owner: Option<WindowHandle>,
) -> anyhow::Result<WindowHandle> {
    let title: Vec<u16> = window.title.encode_utf16().chain(std::iter::once(0)).collect();
    let bounds = window.bounds;
    let native = LazyHandle::new(|| unsafe {
        match CreateWindowExW(
            WS_EX_APPWINDOW,
            CLASS_NAME,
            PCWSTR(title.as_ptr()),
            WS_POPUP | WS_SYSMENU | WS_MINIMIZEBOX | WS_MAXIMIZEBOX,
            bounds.left,
            bounds.top,
            bounds.width(),
            bounds.height(),
            owner.map(|h| h.hwnd()),
            None,
            Some(instance),
            None,
        ) {
            Ok(hwnd) => WindowHandle::from(hwnd),
            Err(e) => {
                log_info!("[Demo] CreateWindowExW failed: {:?}", e);
                WindowHandle::NULL
            }
        }
    });

    let mut decoration = WindowDecoration::new(&window.config);
    let handle = decoration.attach(&native);
    if handle.is_null() {
        return Err(anyhow!("CreateWindowExW returned no window"));
    }

    let role = window.role;
    decoration.properties_mut().subscribe(move |property, values| {
        log_info!(
            "[Demo] {:?} {:?} changed (opacity {:.2}, noise {:.2})",
            role,
            property,
            values.acryl_opacity,
            values.noise_ratio
        );
        apply_action(handle, ChromeAction::Repaint);
    });

    let mut client = RECT::default();
    unsafe {
        let _ = GetClientRect(handle.hwnd(), &mut client);
    }
    decoration.resize(client.right - client.left);
    decoration.on_mode_changed(window_mode(handle));

    DECORATIONS.with(|map| map.borrow_mut().insert(handle.raw(), decoration));
    ROLES.with(|roles| roles.borrow_mut().insert(handle.raw(), role));
    log_info!("[Demo] {:?} window {:#x} decorated", role, handle.raw());
    Ok(handle)
}

fn toggle_visibility(handle: WindowHandle) {
    unsafe {
        let hwnd = handle.hwnd();
        if IsWindowVisible(hwnd).as_bool() {
            let _ = ShowWindow(hwnd, SW_HIDE);
        } else {
            let _ = ShowWindow(hwnd, SW_SHOW);
            let _ = SetForegroundWindow(hwnd);
        }
    }
}

fn track_mouse_leave(hwnd: HWND) {
    if !TRACKING_LEAVE.with(|t| t.borrow_mut().insert(hwnd.0 as isize)) {
        return;
    }
    let mut tme = TRACKMOUSEEVENT {
        cbSize: std::mem::size_of::<TRACKMOUSEEVENT>() as u32,
        dwFlags: TME_LEAVE,
        hwndTrack: hwnd,
        dwHoverTime: 0,
    };
    unsafe {
        let _ = TrackMouseEvent(&mut tme);
    }
}

fn on_key(hwnd: HWND, key: VIRTUAL_KEY) {
    if role_of(hwnd) == Some(DemoRole::Main) {
        if let Some(child) = child_for_key(key.0).and_then(window_with_role) {
            toggle_visibility(child);
            return;
        }
    }

    with_decoration(hwnd, |deco| {
        let values = deco.properties().values().clone();
        let props = deco.properties_mut();
        match key {
            VK_UP => props.set_acryl_opacity(values.acryl_opacity + OPACITY_STEP),
            VK_DOWN => props.set_acryl_opacity(values.acryl_opacity - OPACITY_STEP),
            VK_RIGHT => props.set_noise_ratio(values.noise_ratio + OPACITY_STEP),
            VK_LEFT => props.set_noise_ratio(values.noise_ratio - OPACITY_STEP),
            k if k.0 == b'1' as u16 => props.set_show_minimize_button(!values.show_minimize_button),
            k if k.0 == b'2' as u16 => props.set_show_maximize_button(!values.show_maximize_button),
            k if k.0 == b'3' as u16 => props.set_show_close_button(!values.show_close_button),
            _ => {}
        }
    });
}

/// Keep the main window's tuned appearance for the next run.
fn persist_appearance(hwnd: HWND) {
    let Some(appearance) = with_decoration(hwnd, |deco| deco.properties().values().clone()) else {
        return;
    };
    CONFIG.with(|c| {
        let mut config = c.borrow_mut();
        if config.appearance != appearance {
            config.appearance = appearance;
            save_config(&config);
        }
    });
}

unsafe extern "system" fn wnd_proc(hwnd: HWND, msg: u32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    let result = std::panic::catch_unwind(|| handle_message(hwnd, msg, wparam, lparam));
    match result {
        Ok(Some(lresult)) => lresult,
        Ok(None) => unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) },
        Err(_) => {
            log_info!("[Demo] panic while handling message {:#06x}", msg);
            LRESULT(0)
        }
    }
}

/// `None` hands the message to `DefWindowProcW`.
fn handle_message(hwnd: HWND, msg: u32, wparam: WPARAM, lparam: LPARAM) -> Option<LRESULT> {
    let handle = WindowHandle::from(hwnd);
    let action = match msg {
        WM_ERASEBKGND => return Some(LRESULT(1)),
        WM_PAINT => {
            with_decoration(hwnd, |deco| paint_decoration(handle, deco))?;
            return Some(LRESULT(0));
        }
        WM_SIZE => {
            let width = (lparam.0 & 0xFFFF) as i32;
            let mode = match wparam.0 {
                SIZE_MAXIMIZED => Some(WindowMode::Maximized),
                SIZE_RESTORED => Some(WindowMode::Normal),
                _ => None,
            };
            with_decoration(hwnd, |deco| {
                deco.resize(width);
                if let Some(mode) = mode {
                    deco.on_mode_changed(mode);
                }
            });
            ChromeAction::Repaint
        }
        WM_LBUTTONDOWN | WM_LBUTTONDBLCLK => {
            let clicks = if msg == WM_LBUTTONDBLCLK { 2 } else { 1 };
            let p = point_from_lparam(lparam);
            with_decoration(hwnd, |deco| deco.on_button_down(p, clicks))?
        }
        WM_MOUSEMOVE => {
            track_mouse_leave(hwnd);
            let p = point_from_lparam(lparam);
            let held = wparam.0 & MK_LBUTTON != 0;
            let cursor = cursor_position();
            let width = restored_width(handle);
            with_decoration(hwnd, |deco| deco.on_mouse_move(p, held, cursor, width))?
        }
        WM_LBUTTONUP => {
            let p = point_from_lparam(lparam);
            with_decoration(hwnd, |deco| deco.on_button_up(p))?
        }
        WM_MOUSELEAVE => {
            TRACKING_LEAVE.with(|t| t.borrow_mut().remove(&handle.raw()));
            with_decoration(hwnd, |deco| deco.on_mouse_leave())?
        }
        WM_KEYDOWN => {
            on_key(hwnd, VIRTUAL_KEY(wparam.0 as u16));
            return Some(LRESULT(0));
        }
        WM_CLOSE => {
            if role_of(hwnd) == Some(DemoRole::Main) {
                persist_appearance(hwnd);
            }
            // Hide keeps the window alive, so F1/F2 can bring it back.
            with_decoration(hwnd, |deco| deco.on_close_requested())?
        }
        WM_DESTROY => {
            DECORATIONS.with(|map| {
                if let Ok(mut map) = map.try_borrow_mut() {
                    map.remove(&handle.raw());
                }
            });
            TRACKING_LEAVE.with(|t| t.borrow_mut().remove(&handle.raw()));
            let role = ROLES.with(|roles| roles.borrow_mut().remove(&handle.raw()));
            if role.is_some_and(quits_on_destroy) {
                unsafe { PostQuitMessage(0) };
            }
            return Some(LRESULT(0));
        }
        _ => return None,
    };

    // Outside the borrow: most actions re-enter this procedure.
    apply_action(handle, action);
    Some(LRESULT(0))
}
