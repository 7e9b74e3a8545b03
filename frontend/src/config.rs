//! Build-time settings for the admin panel.

/// Base path of the employee REST API. Override at build time with
/// `WORKSPHERE_API_BASE=https://host/api/employees trunk build`.
pub const API_BASE: &str = match option_env!("WORKSPHERE_API_BASE") {
    Some(base) => base,
    None => "/api/employees",
};

/// How long a toast notification stays on screen.
pub const TOAST_MILLIS: u32 = 3000;
