//! Configuration module for acrylic-chrome.
//!
//! - `types`: `ChromeConfig` and its enums
//! - `io`: Config loading and saving

mod io;
mod types;

pub use io::{get_config_path, load_config, load_config_from, save_config, save_config_to};
pub use types::{ChromeConfig, CloseBehavior};
