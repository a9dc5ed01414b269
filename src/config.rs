use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose when running locally with trunk serve
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Milliseconds between automatic carousel advances.
pub const CAROUSEL_INTERVAL_MS: u32 = 5_000;

/// Scroll offset (px) below which the navbar never hides.
pub const NAVBAR_HIDE_OFFSET: f64 = 100.0;

pub const THEME_STORAGE_KEY: &str = "theme";

pub const SIGNUP_SUCCESS_RESET_MS: u32 = 3_000;
pub const SIGNUP_ERROR_RESET_MS: u32 = 2_000;

pub const RIPPLE_DURATION_MS: u32 = 600;
pub const THEME_TOGGLE_PRESS_MS: u32 = 150;
