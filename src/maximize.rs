// --- MAXIMIZE GEOMETRY CORRECTION ---
// Borderless windows ignore the taskbar when maximized. A subclass procedure
// rewrites WM_GETMINMAXINFO so the maximized bounds equal the work area of the
// monitor the window is on.

use crate::geometry::{maximized_bounds, MinMaxInfo, MonitorWorkArea, Point};
use crate::win_types::WindowHandle;

pub const WM_GETMINMAXINFO: u32 = 0x0024;

/// Whether the filter consumed the message or the default handler must run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOutcome {
    Handled,
    PassThrough,
}

/// Per-window settings for the correction. Lives as long as the hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GeometryCorrector {
    pub min_track_size: Option<Point>,
}

impl GeometryCorrector {
    pub fn new(min_track_size: Option<Point>) -> Self {
        Self { min_track_size }
    }

    /// Filter one message. `locate_monitor` is only called for
    /// `WM_GETMINMAXINFO`, so the monitor configuration is read fresh for
    /// every maximize and never cached.
    pub fn filter(
        &self,
        msg: u32,
        info: Option<&mut MinMaxInfo>,
        locate_monitor: impl FnOnce() -> Option<MonitorWorkArea>,
    ) -> FilterOutcome {
        if msg != WM_GETMINMAXINFO {
            return FilterOutcome::PassThrough;
        }
        let Some(info) = info else {
            return FilterOutcome::PassThrough;
        };
        let Some(area) = locate_monitor() else {
            return FilterOutcome::PassThrough;
        };

        info.apply_maximized_bounds(maximized_bounds(&area));
        if let Some(min) = self.min_track_size {
            info.enforce_min_track_size(min);
        }
        FilterOutcome::Handled
    }
}

/// Install the correction on `handle`. Installing again on the same window
/// keeps the existing filter, so there is always exactly one.
pub fn install_hook(handle: WindowHandle) {
    install_hook_with(handle, GeometryCorrector::default());
}

pub fn install_hook_with(handle: WindowHandle, corrector: GeometryCorrector) {
    if handle.is_null() {
        crate::log_info!("[Maximize] Skipping hook install: window handle is null");
        return;
    }
    native::install(handle, corrector);
}

pub fn remove_hook(handle: WindowHandle) {
    if !handle.is_null() {
        native::remove(handle);
    }
}

pub fn is_hook_installed(handle: WindowHandle) -> bool {
    !handle.is_null() && native::is_installed(handle)
}

#[cfg(target_os = "windows")]
mod native {
    use super::{FilterOutcome, GeometryCorrector};
    use crate::geometry::{MinMaxInfo, MonitorWorkArea};
    use crate::win_types::WindowHandle;
    use windows::Win32::Foundation::*;
    use windows::Win32::Graphics::Gdi::*;
    use windows::Win32::UI::Shell::*;
    use windows::Win32::UI::WindowsAndMessaging::*;

    const SUBCLASS_ID: usize = 0x4143_524C; // "ACRL"

    pub fn install(handle: WindowHandle, corrector: GeometryCorrector) {
        if is_installed(handle) {
            return;
        }
        let data = Box::into_raw(Box::new(corrector)) as usize;
        unsafe {
            if !SetWindowSubclass(handle.hwnd(), Some(geometry_subclass_proc), SUBCLASS_ID, data)
                .as_bool()
            {
                drop(Box::from_raw(data as *mut GeometryCorrector));
                crate::log_info!("[Maximize] SetWindowSubclass failed for {:?}", handle);
            }
        }
    }

    pub fn is_installed(handle: WindowHandle) -> bool {
        let mut data = 0usize;
        unsafe {
            GetWindowSubclass(
                handle.hwnd(),
                Some(geometry_subclass_proc),
                SUBCLASS_ID,
                Some(&mut data as *mut usize),
            )
            .as_bool()
        }
    }

    pub fn remove(handle: WindowHandle) {
        let mut data = 0usize;
        unsafe {
            let hwnd = handle.hwnd();
            if !GetWindowSubclass(
                hwnd,
                Some(geometry_subclass_proc),
                SUBCLASS_ID,
                Some(&mut data as *mut usize),
            )
            .as_bool()
            {
                return;
            }
            if RemoveWindowSubclass(hwnd, Some(geometry_subclass_proc), SUBCLASS_ID).as_bool()
                && data != 0
            {
                drop(Box::from_raw(data as *mut GeometryCorrector));
            }
        }
    }

    fn locate_monitor(hwnd: HWND) -> Option<MonitorWorkArea> {
        unsafe {
            let monitor = MonitorFromWindow(hwnd, MONITOR_DEFAULTTONEAREST);
            if monitor.is_invalid() {
                return None;
            }
            let mut info = MONITORINFO {
                cbSize: std::mem::size_of::<MONITORINFO>() as u32,
                ..Default::default()
            };
            if !GetMonitorInfoW(monitor, &mut info).as_bool() {
                return None;
            }
            Some(MonitorWorkArea {
                work: info.rcWork.into(),
                monitor: info.rcMonitor.into(),
            })
        }
    }

    unsafe extern "system" fn geometry_subclass_proc(
        hwnd: HWND,
        msg: u32,
        wparam: WPARAM,
        lparam: LPARAM,
        _id: usize,
        ref_data: usize,
    ) -> LRESULT {
        if msg == WM_NCDESTROY {
            remove(hwnd.into());
            return unsafe { DefSubclassProc(hwnd, msg, wparam, lparam) };
        }

        // A panic must never unwind into the system message pump.
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            if ref_data == 0 || lparam.0 == 0 {
                return FilterOutcome::PassThrough;
            }
            let corrector = unsafe { &*(ref_data as *const GeometryCorrector) };
            if msg != super::WM_GETMINMAXINFO {
                return corrector.filter(msg, None, || None);
            }

            let raw = unsafe { &mut *(lparam.0 as *mut MINMAXINFO) };
            let mut info = MinMaxInfo::from(&*raw);
            let outcome = corrector.filter(msg, Some(&mut info), || locate_monitor(hwnd));
            if outcome == FilterOutcome::Handled {
                info.write_to(raw);
            }
            outcome
        }));

        match outcome {
            Ok(FilterOutcome::Handled) => LRESULT(0),
            _ => unsafe { DefSubclassProc(hwnd, msg, wparam, lparam) },
        }
    }
}

#[cfg(not(target_os = "windows"))]
mod native {
    use super::GeometryCorrector;
    use crate::win_types::WindowHandle;

    pub fn install(handle: WindowHandle, _corrector: GeometryCorrector) {
        crate::log_info!(
            "[Maximize] Geometry correction needs Windows, not hooking {:?}",
            handle
        );
    }

    pub fn is_installed(_handle: WindowHandle) -> bool {
        false
    }

    pub fn remove(_handle: WindowHandle) {}
}
