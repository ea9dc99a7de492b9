// --- NATIVE CHROME OPS ---
// Applies chrome actions to an HWND and paints the acrylic surface.

use super::drag::WindowMode;
use super::paint::{highlight_button, render_surface};
use super::title_bar::TitleBarLayout;
use super::{ChromeAction, WindowDecoration};
use crate::geometry::Point;
use crate::win_types::WindowHandle;
use std::mem::size_of;
use windows::Win32::Foundation::*;
use windows::Win32::Graphics::Gdi::*;
use windows::Win32::UI::Input::KeyboardAndMouse::{ReleaseCapture, SetCapture};
use windows::Win32::UI::WindowsAndMessaging::*;
use windows::core::w;

/// Hand the current button press to the system move loop.
pub fn begin_native_move(handle: WindowHandle) {
    unsafe {
        let _ = ReleaseCapture();
        let _ = SendMessageW(
            handle.hwnd(),
            WM_NCLBUTTONDOWN,
            Some(WPARAM(HTCAPTION as usize)),
            Some(LPARAM(0)),
        );
    }
}

/// Execute `action`. Must be called after any borrow of the window's
/// decoration has ended: several of these calls re-enter the window procedure.
pub fn apply_action(handle: WindowHandle, action: ChromeAction) {
    if handle.is_null() {
        return;
    }
    let hwnd = handle.hwnd();
    unsafe {
        match action {
            ChromeAction::None => {}
            ChromeAction::Minimize => {
                let _ = ShowWindow(hwnd, SW_MINIMIZE);
            }
            ChromeAction::Maximize => {
                let _ = ReleaseCapture();
                let _ = ShowWindow(hwnd, SW_MAXIMIZE);
            }
            ChromeAction::Restore => {
                let _ = ReleaseCapture();
                let _ = ShowWindow(hwnd, SW_RESTORE);
            }
            ChromeAction::Close => {
                let _ = ReleaseCapture();
                let _ = PostMessageW(Some(hwnd), WM_CLOSE, WPARAM(0), LPARAM(0));
            }
            ChromeAction::Hide => {
                let _ = ShowWindow(hwnd, SW_HIDE);
            }
            ChromeAction::Destroy => {
                let _ = DestroyWindow(hwnd);
            }
            ChromeAction::BeginMove => begin_native_move(handle),
            ChromeAction::CaptureMouse => {
                SetCapture(hwnd);
            }
            ChromeAction::ReleaseMouse => {
                let _ = ReleaseCapture();
                let _ = InvalidateRect(Some(hwnd), None, false);
            }
            ChromeAction::RestoreAndMove { left, top } => {
                let _ = ShowWindow(hwnd, SW_RESTORE);
                let _ = SetWindowPos(
                    hwnd,
                    None,
                    left,
                    top,
                    0,
                    0,
                    SWP_NOSIZE | SWP_NOZORDER | SWP_NOACTIVATE,
                );
                begin_native_move(handle);
            }
            ChromeAction::Repaint => {
                let _ = InvalidateRect(Some(hwnd), None, false);
            }
        }
    }
}

pub fn cursor_position() -> Point {
    let mut pt = POINT::default();
    unsafe {
        let _ = GetCursorPos(&mut pt);
    }
    pt.into()
}

/// Width of the window in its restored (non-maximized) placement.
pub fn restored_width(handle: WindowHandle) -> i32 {
    let mut placement = WINDOWPLACEMENT {
        length: size_of::<WINDOWPLACEMENT>() as u32,
        ..Default::default()
    };
    unsafe {
        if GetWindowPlacement(handle.hwnd(), &mut placement).is_ok() {
            let r = placement.rcNormalPosition;
            return r.right - r.left;
        }
        let mut rect = RECT::default();
        let _ = GetWindowRect(handle.hwnd(), &mut rect);
        rect.right - rect.left
    }
}

pub fn window_mode(handle: WindowHandle) -> WindowMode {
    unsafe {
        if IsZoomed(handle.hwnd()).as_bool() {
            WindowMode::Maximized
        } else {
            WindowMode::Normal
        }
    }
}

/// Signed client coordinates packed in a mouse message's LPARAM.
pub fn point_from_lparam(lparam: LPARAM) -> Point {
    let x = (lparam.0 & 0xFFFF) as u16 as i16 as i32;
    let y = ((lparam.0 >> 16) & 0xFFFF) as u16 as i16 as i32;
    Point::new(x, y)
}

/// Paint the acrylic surface and title bar. Call from WM_PAINT.
pub fn paint_decoration(handle: WindowHandle, decoration: &WindowDecoration) {
    let hwnd = handle.hwnd();
    unsafe {
        let mut ps = PAINTSTRUCT::default();
        let hdc = BeginPaint(hwnd, &mut ps);
        let mut rect = RECT::default();
        let _ = GetClientRect(hwnd, &mut rect);
        let width = rect.right - rect.left;
        let height = rect.bottom - rect.top;

        if width > 0 && height > 0 {
            let mut pixels = render_surface(width, height, decoration.properties().values());
            let layout = decoration.layout();

            if let (Some(layout), Some(button)) = (layout.as_ref(), decoration.hovered()) {
                let pressed = decoration.pressed() == Some(button);
                highlight_button(&mut pixels, width, layout, button, pressed);
            }

            let bmi = BITMAPINFO {
                bmiHeader: BITMAPINFOHEADER {
                    biSize: size_of::<BITMAPINFOHEADER>() as u32,
                    biWidth: width,
                    biHeight: -height,
                    biPlanes: 1,
                    biBitCount: 32,
                    biCompression: BI_RGB.0 as u32,
                    ..Default::default()
                },
                ..Default::default()
            };
            SetDIBitsToDevice(
                hdc,
                0,
                0,
                width as u32,
                height as u32,
                0,
                0,
                0,
                height as u32,
                pixels.as_ptr() as *const core::ffi::c_void,
                &bmi,
                DIB_RGB_COLORS,
            );

            if let Some(layout) = layout.as_ref() {
                draw_button_glyphs(hdc, layout, decoration.mode());
            }
        }

        let _ = EndPaint(hwnd, &ps);
    }
}

unsafe fn draw_button_glyphs(hdc: HDC, layout: &TitleBarLayout, mode: WindowMode) {
    unsafe {
        let hfont = CreateFontW(
            14,
            0,
            0,
            0,
            FW_NORMAL.0 as i32,
            0,
            0,
            0,
            DEFAULT_CHARSET,
            OUT_DEFAULT_PRECIS,
            CLIP_DEFAULT_PRECIS,
            CLEARTYPE_QUALITY,
            (VARIABLE_PITCH.0 | FF_DONTCARE.0) as u32,
            w!("Segoe MDL2 Assets"),
        );
        let old_font = SelectObject(hdc, hfont.into());
        SetBkMode(hdc, TRANSPARENT);
        SetTextColor(hdc, COLORREF(0x0000_0000));

        for (button, rect) in &layout.buttons {
            let mut glyph: Vec<u16> = button.glyph(mode).encode_utf16(&mut [0u16; 2]).to_vec();
            let mut r: RECT = (*rect).into();
            DrawTextW(hdc, &mut glyph, &mut r, DT_CENTER | DT_VCENTER | DT_SINGLELINE);
        }

        SelectObject(hdc, old_font);
        let _ = DeleteObject(hfont.into());
    }
}
