// --- WINDOW HANDLE TYPES ---
// Thread-safe handle wrapper and lazy handle realization.

use raw_window_handle::{HasWindowHandle, RawWindowHandle};
use std::cell::OnceCell;

/// Opaque identifier for a live native window.
///
/// Stored as the raw HWND value so it is `Copy + Send` and usable from
/// platform independent code. Valid only between window creation and
/// destruction; the platform owns the window, callers only borrow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WindowHandle(isize);

impl WindowHandle {
    pub const NULL: WindowHandle = WindowHandle(0);

    pub fn from_raw(value: isize) -> Self {
        Self(value)
    }

    /// Extract the Win32 handle from any windowing library that exposes
    /// `raw-window-handle`. Non-Win32 handles yield `None`.
    pub fn from_window(window: &impl HasWindowHandle) -> Option<Self> {
        let handle = window.window_handle().ok()?;
        match handle.as_raw() {
            RawWindowHandle::Win32(win32) => Some(Self(win32.hwnd.get())),
            _ => None,
        }
    }

    pub fn raw(self) -> isize {
        self.0
    }

    pub fn is_null(self) -> bool {
        self.0 == 0
    }

    #[cfg(target_os = "windows")]
    pub fn hwnd(self) -> windows::Win32::Foundation::HWND {
        windows::Win32::Foundation::HWND(self.0 as *mut core::ffi::c_void)
    }
}

#[cfg(target_os = "windows")]
impl From<windows::Win32::Foundation::HWND> for WindowHandle {
    fn from(hwnd: windows::Win32::Foundation::HWND) -> Self {
        Self(hwnd.0 as isize)
    }
}

/// Anything that can hand out its native window handle.
///
/// Implementors must realize the handle on demand rather than return a null
/// one, so that blur and hook installation are always callable once the
/// window object exists.
pub trait NativeWindow {
    fn handle(&self) -> WindowHandle;
}

impl NativeWindow for WindowHandle {
    fn handle(&self) -> WindowHandle {
        *self
    }
}

/// A window handle that is created on first access.
pub struct LazyHandle<F: Fn() -> WindowHandle> {
    cell: OnceCell<WindowHandle>,
    realize: F,
}

impl<F: Fn() -> WindowHandle> LazyHandle<F> {
    pub fn new(realize: F) -> Self {
        Self {
            cell: OnceCell::new(),
            realize,
        }
    }

    pub fn is_realized(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<F: Fn() -> WindowHandle> NativeWindow for LazyHandle<F> {
    fn handle(&self) -> WindowHandle {
        *self.cell.get_or_init(|| (self.realize)())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn lazy_handle_realizes_once() {
        let calls = Cell::new(0);
        let lazy = LazyHandle::new(|| {
            calls.set(calls.get() + 1);
            WindowHandle::from_raw(0x1234)
        });

        assert!(!lazy.is_realized());
        assert_eq!(lazy.handle(), WindowHandle::from_raw(0x1234));
        assert_eq!(lazy.handle(), WindowHandle::from_raw(0x1234));
        assert!(lazy.is_realized());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn null_handle() {
        assert!(WindowHandle::NULL.is_null());
        assert!(WindowHandle::default().is_null());
        assert!(!WindowHandle::from_raw(1).is_null());
    }
}
