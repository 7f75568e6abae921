//! Cross-platform logging module.
//!
//! Dispatches to the appropriate backend:
//! - Web: `web_sys::console`
//! - Native: `tracing` crate

/// Log an info message (platform-specific)
#[cfg(target_arch = "wasm32")]
pub fn log_info_impl(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log_info_impl(msg: &str) {
    tracing::info!("{}", msg);
}

/// Log a warning message (platform-specific)
#[cfg(target_arch = "wasm32")]
pub fn log_warn_impl(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log_warn_impl(msg: &str) {
    tracing::warn!("{}", msg);
}

/// Log an error message (platform-specific)
#[cfg(target_arch = "wasm32")]
pub fn log_error_impl(msg: &str) {
    web_sys::console::error_1(&msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log_error_impl(msg: &str) {
    tracing::error!("{}", msg);
}

/// Install the tracing subscriber for native embedders. No-op if a
/// subscriber is already set.
#[cfg(not(target_arch = "wasm32"))]
pub fn init() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("helvania_client=debug")),
        )
        .try_init();
}

/// Log an info message
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::logging::log_info_impl(&format!($($arg)*))
    };
}

/// Log a warning message
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::logging::log_warn_impl(&format!($($arg)*))
    };
}

/// Log an error message
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::logging::log_error_impl(&format!($($arg)*))
    };
}
