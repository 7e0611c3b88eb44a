//! Layout Engine - Geometry and the Shared Draw Plan
//!
//! Pure functions of the render options. Both renderers replay the same
//! draw plan, so bar and digit placement can never drift between the
//! raster and vector backends.

use crate::encode::{is_guard_module, Encoded, PATTERN_MODULES};
use crate::options::{BarStyle, RenderOptions};

/// Absolute geometry for one render call. Ephemeral, recomputed per call.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub total_width: f64,
    pub total_height: f64,
    /// Left edge of the first module.
    pub bars_x: f64,
    /// Top edge of the bars.
    pub bars_y: f64,
    pub bar_height: f64,
    pub guard_height: f64,
    pub barcode_width: f64,
    /// Quiet zone in pixels, per side.
    pub quiet_zone_px: f64,
    /// Space reserved for a small outer digit, per side, outside the
    /// quiet zone.
    pub outer_digit_space: f64,
    /// Baseline of the middle digit groups.
    pub text_baseline: f64,
    /// Baseline of the two small outer digits, centered against the
    /// main baseline.
    pub small_text_baseline: f64,
}

impl Layout {
    pub fn compute(opts: &RenderOptions) -> Self {
        let barcode_width = PATTERN_MODULES as f64 * opts.module_width;
        let guard_height = match opts.style {
            BarStyle::Notched => opts.height + opts.guard_extend,
            BarStyle::Flat => opts.height,
        };
        let quiet_zone_px = opts.quiet_zone * opts.module_width;
        let outer_digit_space = opts.small_digit_font_size * 0.7 + opts.outer_digit_gap;

        let bars_x = opts.padding_left + outer_digit_space + quiet_zone_px;
        let bars_y = opts.padding_top;

        let total_width = opts.padding_left
            + outer_digit_space
            + quiet_zone_px
            + barcode_width
            + quiet_zone_px
            + outer_digit_space
            + opts.padding_right;

        // The text row is reserved even when font_size is 0 and the
        // digits are suppressed.
        let total_height =
            opts.padding_top + guard_height + opts.text_margin + opts.font_size + opts.padding_bottom;

        let text_baseline = opts.padding_top + guard_height + opts.text_margin + opts.font_size;
        let small_text_baseline =
            text_baseline - (opts.font_size - opts.small_digit_font_size) / 2.0;

        Self {
            total_width,
            total_height,
            bars_x,
            bars_y,
            bar_height: opts.height,
            guard_height,
            barcode_width,
            quiet_zone_px,
            outer_digit_space,
            text_baseline,
            small_text_baseline,
        }
    }
}

/// Horizontal anchoring of a text run relative to its x coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Start,
    Center,
    End,
}

/// An abstract draw command. Coordinates are absolute; text y is the
/// alphabetic baseline.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Text {
        x: f64,
        baseline: f64,
        size: f64,
        align: TextAlign,
        text: String,
    },
}

/// Build the draw plan for an encoded symbol.
pub fn plan(encoded: &Encoded, opts: &RenderOptions) -> (Layout, Vec<DrawOp>) {
    let layout = Layout::compute(opts);
    let mut ops = Vec::with_capacity(PATTERN_MODULES);

    for (i, module) in encoded.pattern.bytes().enumerate() {
        if module != b'1' {
            continue;
        }
        let height = if is_guard_module(i) && opts.style == BarStyle::Notched {
            layout.guard_height
        } else {
            layout.bar_height
        };
        ops.push(DrawOp::Rect {
            x: layout.bars_x + i as f64 * opts.module_width,
            y: layout.bars_y,
            width: opts.module_width,
            height,
        });
    }

    if opts.font_size > 0.0 {
        push_text_ops(&mut ops, encoded, opts, &layout);
    }

    (layout, ops)
}

fn push_text_ops(ops: &mut Vec<DrawOp>, encoded: &Encoded, opts: &RenderOptions, layout: &Layout) {
    let digits: Vec<char> = encoded.full_code.chars().collect();
    let mw = opts.module_width;

    // Number-system digit, right-aligned against the left quiet zone.
    ops.push(DrawOp::Text {
        x: layout.bars_x - layout.quiet_zone_px - opts.outer_digit_gap,
        baseline: layout.small_text_baseline,
        size: opts.small_digit_font_size,
        align: TextAlign::End,
        text: digits[0].to_string(),
    });

    // Left group: digits 1-5, each centered in its 7-module cell after
    // the start guard.
    for (cell, d) in digits[1..6].iter().enumerate() {
        let cell_start = 3.0 + (cell as f64 + 1.0) * 7.0;
        ops.push(DrawOp::Text {
            x: layout.bars_x + (cell_start + 3.5) * mw,
            baseline: layout.text_baseline,
            size: opts.font_size,
            align: TextAlign::Center,
            text: d.to_string(),
        });
    }

    // Right group: digits 6-10, cells after the center guard.
    for (cell, d) in digits[6..11].iter().enumerate() {
        let cell_start = 50.0 + cell as f64 * 7.0;
        ops.push(DrawOp::Text {
            x: layout.bars_x + (cell_start + 3.5) * mw,
            baseline: layout.text_baseline,
            size: opts.font_size,
            align: TextAlign::Center,
            text: d.to_string(),
        });
    }

    // Check digit, left-aligned after the right quiet zone.
    ops.push(DrawOp::Text {
        x: layout.bars_x + layout.barcode_width + layout.quiet_zone_px + opts.outer_digit_gap,
        baseline: layout.small_text_baseline,
        size: opts.small_digit_font_size,
        align: TextAlign::Start,
        text: digits[11].to_string(),
    });
}
