//! Acrylic window chrome for borderless Win32 windows.
//!
//! Two native operations do the heavy lifting and are independent of each other:
//! [`composition::enable_background_blur`] turns on blur-behind compositing, and
//! [`maximize::install_hook`] keeps a maximized borderless window off the taskbar.
//! [`chrome::WindowDecoration`] bundles both with a replicated title bar and
//! bindable appearance properties.

pub mod chrome;
pub mod composition;
pub mod config;
pub mod debug_log;
pub mod geometry;
pub mod maximize;
pub mod win_types;

pub use chrome::{ChromeAction, DecorationOptions, WindowDecoration};
pub use composition::enable_background_blur;
pub use config::ChromeConfig;
pub use maximize::install_hook;
pub use win_types::{LazyHandle, NativeWindow, WindowHandle};
