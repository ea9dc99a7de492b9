// --- COMPOSITION ---
// Blur-behind through the undocumented SetWindowCompositionAttribute API.
//
// The export lives in user32.dll on Windows 10+ and has no public header, so it
// is resolved at runtime. Every failure here is swallowed: blur is cosmetic.

use crate::win_types::WindowHandle;

/// `WINDOWCOMPOSITIONATTRIB` values. Only the accent policy is used.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowCompositionAttribute {
    AccentPolicy = 19,
}

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccentState {
    Disabled = 0,
    EnableGradient = 1,
    EnableTransparentGradient = 2,
    EnableBlurBehind = 3,
    InvalidState = 4,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccentPolicy {
    pub accent_state: AccentState,
    pub accent_flags: u32,
    pub gradient_color: u32,
    pub animation_id: u32,
}

impl AccentPolicy {
    pub fn new(accent_state: AccentState) -> Self {
        Self {
            accent_state,
            accent_flags: 0,
            gradient_color: 0,
            animation_id: 0,
        }
    }
}

/// The envelope handed to the OS: attribute tag plus a pointer to, and the
/// size of, the attribute payload.
#[repr(C)]
#[derive(Debug)]
pub struct CompositionAttributeData {
    pub attribute: WindowCompositionAttribute,
    pub data: *mut core::ffi::c_void,
    pub size_of_data: usize,
}

impl CompositionAttributeData {
    /// Borrow `policy` for the lifetime of one call. The envelope must not
    /// outlive the buffer it points to.
    pub fn accent_policy(policy: &mut AccentPolicy) -> Self {
        Self {
            attribute: WindowCompositionAttribute::AccentPolicy,
            data: policy as *mut AccentPolicy as *mut core::ffi::c_void,
            size_of_data: std::mem::size_of::<AccentPolicy>(),
        }
    }
}

/// Request blur-behind compositing for `handle`. Best effort: unsupported OS
/// builds, unrealized handles and non-Windows targets are silently ignored.
pub fn enable_background_blur(handle: WindowHandle) {
    set_accent_state(handle, AccentState::EnableBlurBehind);
}

pub fn disable_background_blur(handle: WindowHandle) {
    set_accent_state(handle, AccentState::Disabled);
}

/// Apply an accent state to the window. The OS result is discarded.
pub fn set_accent_state(handle: WindowHandle, state: AccentState) {
    if handle.is_null() {
        crate::log_info!("[Composition] Skipping {:?}: window handle is null", state);
        return;
    }

    // Transient buffer, freed when `policy` drops at the end of this call.
    let mut policy = Box::new(AccentPolicy::new(state));
    let mut data = CompositionAttributeData::accent_policy(&mut policy);

    if !native::set_window_composition_attribute(handle, &mut data) {
        crate::log_info!(
            "[Composition] SetWindowCompositionAttribute unavailable, {:?} not applied",
            state
        );
    }
}

#[cfg(target_os = "windows")]
mod native {
    use super::CompositionAttributeData;
    use crate::win_types::WindowHandle;
    use windows::Win32::Foundation::HWND;
    use windows::Win32::System::LibraryLoader::{GetModuleHandleW, GetProcAddress};
    use windows::core::{s, w};

    type SetWindowCompositionAttributeFn =
        unsafe extern "system" fn(HWND, *mut CompositionAttributeData) -> i32;

    /// Look the export up in the already loaded user32. Windows own user32
    /// once any window exists, so the module reference count is left alone.
    pub(super) fn resolve() -> Option<SetWindowCompositionAttributeFn> {
        unsafe {
            let user32 = GetModuleHandleW(w!("user32.dll")).ok()?;
            let proc_addr = GetProcAddress(user32, s!("SetWindowCompositionAttribute"))?;
            Some(std::mem::transmute::<
                unsafe extern "system" fn() -> isize,
                SetWindowCompositionAttributeFn,
            >(proc_addr))
        }
    }

    /// Returns false only when the export could not be resolved. The call's
    /// own result is discarded.
    pub fn set_window_composition_attribute(
        handle: WindowHandle,
        data: &mut CompositionAttributeData,
    ) -> bool {
        let Some(func) = resolve() else {
            return false;
        };
        unsafe {
            let _ = func(handle.hwnd(), data as *mut CompositionAttributeData);
        }
        true
    }
}

#[cfg(not(target_os = "windows"))]
mod native {
    use super::CompositionAttributeData;
    use crate::win_types::WindowHandle;

    pub fn set_window_composition_attribute(
        _handle: WindowHandle,
        _data: &mut CompositionAttributeData,
    ) -> bool {
        false
    }
}
