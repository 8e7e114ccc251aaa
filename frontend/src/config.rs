use log::Level;

/// localStorage key holding the auth token.
pub const TOKEN_KEY: &str = "token";
/// localStorage key holding the serialized signed-in user.
pub const SESSION_KEY: &str = "usuario";

pub const DEFAULT_AVATAR: &str = "/assets/default-avatar.svg";

// Navbar switches to its solid background past this offset.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

pub const HERO_ROTATION_MS: u32 = 2_500;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
