//! Color constants mirrored by the CSS custom properties in `styles.rs`.
//!
//! Soft pink palette on a light background.

#![allow(dead_code)]

// === PINK (Brand, Links, Accents) ===
pub const PINK: &str = "#ff69b4";
pub const PINK_DEEP: &str = "#ff1493";
pub const PINK_LIGHT: &str = "#ffc0cb";
pub const PINK_GLOW: &str = "rgba(255, 105, 180, 0.3)";

// === SURFACES ===
pub const BACKGROUND: &str = "#fff5f8";
pub const SURFACE: &str = "#ffffff";
pub const NAVBAR_TOP: &str = "rgba(255, 255, 255, 0.95)";
pub const NAVBAR_SCROLLED: &str = "rgba(255, 255, 255, 0.98)";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#333333";
pub const TEXT_SECONDARY: &str = "#666666";

// === ROBOT ===
pub const ROBOT_BODY: &str = "#ffb6d9";
pub const ROBOT_EYE: &str = "#2d2d2d";

// === SEMANTIC ===
pub const SUCCESS: &str = "#4CAF50";
pub const DANGER: &str = "#f44336";
