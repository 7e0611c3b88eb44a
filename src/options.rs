//! Render Options - Typed Configuration With Documented Defaults
//!
//! One immutable record merged over defaults per render call. Every
//! recognized option is an enumerable, named field; unknown keys in a
//! JSON payload are rejected by serde rather than silently ignored.

use serde::{Deserialize, Serialize};

use crate::normalize::ChecksumPolicy;

/// Bar silhouette. `Notched` extends the guard bars below the others;
/// `Flat` draws every bar at the same height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarStyle {
    Notched,
    Flat,
}

impl Default for BarStyle {
    fn default() -> Self {
        Self::Notched
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RenderOptions {
    /// Width of a single module in pixels.
    #[serde(default = "default_module_width")]
    pub module_width: f64,

    /// Height of a regular bar in pixels.
    #[serde(default = "default_height")]
    pub height: f64,

    /// Extra height added to guard bars when the style is notched.
    #[serde(default = "default_guard_extend")]
    pub guard_extend: f64,

    /// Font size of the middle digit groups. Zero suppresses all digit
    /// text while leaving bar geometry untouched.
    #[serde(default = "default_font_size")]
    pub font_size: f64,

    /// Font size of the two small outer digits.
    #[serde(default = "default_small_digit_font_size")]
    pub small_digit_font_size: f64,

    /// Gap between the bottom of the bars and the digit row.
    #[serde(default = "default_text_margin")]
    pub text_margin: f64,

    /// Quiet zone on each side, in modules. GS1 recommends at least 9;
    /// no floor is enforced here.
    #[serde(default = "default_quiet_zone")]
    pub quiet_zone: f64,

    /// Gap between an outer digit and the quiet zone it sits against.
    #[serde(default = "default_outer_digit_gap")]
    pub outer_digit_gap: f64,

    #[serde(default)]
    pub padding_left: f64,
    #[serde(default)]
    pub padding_right: f64,
    #[serde(default)]
    pub padding_top: f64,
    #[serde(default)]
    pub padding_bottom: f64,

    #[serde(default = "default_background")]
    pub background: String,

    #[serde(default = "default_foreground")]
    pub foreground: String,

    /// Font family for digit text. Applies to vector output; the raster
    /// renderer uses its built-in digit glyphs.
    #[serde(default = "default_font")]
    pub font: String,

    #[serde(default)]
    pub style: BarStyle,

    #[serde(default)]
    pub checksum: ChecksumPolicy,
}

fn default_module_width() -> f64 { 2.0 }
fn default_height() -> f64 { 70.0 }
fn default_guard_extend() -> f64 { 10.0 }
fn default_font_size() -> f64 { 14.0 }
fn default_small_digit_font_size() -> f64 { 10.0 }
fn default_text_margin() -> f64 { 2.0 }
fn default_quiet_zone() -> f64 { 9.0 }
fn default_outer_digit_gap() -> f64 { 2.0 }
fn default_background() -> String { "#FFFFFF".to_string() }
fn default_foreground() -> String { "#000000".to_string() }
fn default_font() -> String { "monospace".to_string() }

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            module_width: default_module_width(),
            height: default_height(),
            guard_extend: default_guard_extend(),
            font_size: default_font_size(),
            small_digit_font_size: default_small_digit_font_size(),
            text_margin: default_text_margin(),
            quiet_zone: default_quiet_zone(),
            outer_digit_gap: default_outer_digit_gap(),
            padding_left: 0.0,
            padding_right: 0.0,
            padding_top: 0.0,
            padding_bottom: 0.0,
            background: default_background(),
            foreground: default_foreground(),
            font: default_font(),
            style: BarStyle::default(),
            checksum: ChecksumPolicy::default(),
        }
    }
}
