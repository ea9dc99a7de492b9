use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

lazy_static::lazy_static! {
    static ref LOG_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());
}

pub fn log_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("acrylic-chrome");
    path.push("logs");
    path
}

/// Append one timestamped line to the session log.
/// Never fails: logging runs inside window procedures, so I/O errors are dropped.
pub fn log_debug(msg: &str) {
    // Unit tests only print; they must not touch the user's session log.
    if cfg!(test) {
        return;
    }
    let _lock = LOG_MUTEX.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let mut path = log_dir();
    let _ = std::fs::create_dir_all(&path);
    path.push("session.log");

    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let _ = writeln!(file, "[{}] {}", timestamp, msg);
    }
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        {
            let msg = format!($($arg)*);
            println!("{}", msg);
            $crate::debug_log::log_debug(&msg);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tests_leave_the_session_log_alone() {
        let path = log_dir().join("session.log");
        let marker = format!("log-marker-{}", std::process::id());
        crate::log_info!("{}", marker);
        log_debug(&marker);
        let contents = std::fs::read_to_string(&path).unwrap_or_default();
        assert!(!contents.contains(&marker));
    }
}
