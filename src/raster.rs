//! Raster Renderer - tiny-skia Pixmap Backend
//!
//! Bars are filled rectangles; digits come from a fixed 5x7 glyph table
//! scaled to the requested font size. The glyph table is constant data,
//! the same discipline as the encoder's L/R symbol tables. PNG encoding
//! is delegated to tiny-skia's png-format support.

use tiny_skia::{Color, Paint, Pixmap, Rect, Transform};

use crate::layout::{Layout, TextAlign};
use crate::options::RenderOptions;
use crate::render::{render_onto, RenderError, RenderTarget};

/// 5x7 digit glyphs, one row byte per scanline, bit 4 is the leftmost
/// column.
const DIGIT_GLYPHS: [[u8; 7]; 10] = [
    [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110], // 0
    [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110], // 1
    [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111], // 2
    [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110], // 3
    [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010], // 4
    [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110], // 5
    [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110], // 6
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000], // 7
    [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110], // 8
    [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100], // 9
];

const GLYPH_COLS: usize = 5;
const GLYPH_ROWS: usize = 7;

/// Parse `#RRGGBB` or `#RGB`. Unparseable strings yield `None` and the
/// caller falls back to the documented default for that role.
fn parse_color(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    let (r, g, b) = match hex.len() {
        3 => {
            let d = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
            (d(0)?, d(1)?, d(2)?)
        }
        6 => {
            let d = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            (d(0)?, d(2)?, d(4)?)
        }
        _ => return None,
    };
    Some(Color::from_rgba8(r, g, b, 255))
}

fn background_color(opts: &RenderOptions) -> Color {
    parse_color(&opts.background).unwrap_or_else(|| Color::from_rgba8(255, 255, 255, 255))
}

fn foreground_color(opts: &RenderOptions) -> Color {
    parse_color(&opts.foreground).unwrap_or_else(|| Color::from_rgba8(0, 0, 0, 255))
}

struct PixmapTarget<'a> {
    pixmap: &'a mut Pixmap,
}

impl PixmapTarget<'_> {
    fn fill(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color) {
        let mut paint = Paint::default();
        paint.set_color(color);
        paint.anti_alias = false;

        if let Some(rect) = Rect::from_xywh(x as f32, y as f32, width as f32, height as f32) {
            self.pixmap
                .as_mut()
                .fill_rect(rect, &paint, Transform::identity(), None);
        }
    }
}

impl RenderTarget for PixmapTarget<'_> {
    fn clear(&mut self, layout: &Layout, opts: &RenderOptions) -> Result<(), RenderError> {
        let width = layout.total_width.ceil() as u32;
        let height = layout.total_height.ceil() as u32;

        let mut fresh = Pixmap::new(width, height).ok_or_else(|| {
            RenderError::InvalidTarget(format!("cannot allocate a {}x{} surface", width, height))
        })?;
        fresh.fill(background_color(opts));
        *self.pixmap = fresh;
        Ok(())
    }

    fn fill_rect(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        opts: &RenderOptions,
    ) -> Result<(), RenderError> {
        self.fill(x, y, width, height, foreground_color(opts));
        Ok(())
    }

    fn place_text(
        &mut self,
        x: f64,
        baseline: f64,
        size: f64,
        align: TextAlign,
        text: &str,
        opts: &RenderOptions,
    ) -> Result<(), RenderError> {
        let color = foreground_color(opts);
        let dot = size / GLYPH_ROWS as f64;
        let glyph_width = GLYPH_COLS as f64 * dot;
        let advance = glyph_width + dot;

        let run_width = text.chars().count() as f64 * advance - dot;
        let start_x = match align {
            TextAlign::Start => x,
            TextAlign::Center => x - run_width / 2.0,
            TextAlign::End => x - run_width,
        };
        let top = baseline - size;

        for (i, ch) in text.chars().enumerate() {
            let Some(digit) = ch.to_digit(10) else { continue };
            let glyph = &DIGIT_GLYPHS[digit as usize];
            let gx = start_x + i as f64 * advance;

            for (row, bits) in glyph.iter().enumerate() {
                for col in 0..GLYPH_COLS {
                    if bits & (1 << (GLYPH_COLS - 1 - col)) != 0 {
                        self.fill(
                            gx + col as f64 * dot,
                            top + row as f64 * dot,
                            dot,
                            dot,
                            color,
                        );
                    }
                }
            }
        }
        Ok(())
    }
}

/// Render onto an existing pixmap, resizing it to the computed total
/// dimensions first.
pub fn render(pixmap: &mut Pixmap, code: &str, opts: &RenderOptions) -> Result<(), RenderError> {
    let mut target = PixmapTarget { pixmap };
    render_onto(&mut target, code, opts)
}

/// Render to PNG bytes.
pub fn to_image_blob(code: &str, opts: &RenderOptions) -> Result<Vec<u8>, RenderError> {
    let mut pixmap = Pixmap::new(1, 1)
        .ok_or_else(|| RenderError::InvalidTarget("cannot allocate a surface".to_string()))?;
    render(&mut pixmap, code, opts)?;

    pixmap
        .encode_png()
        .map_err(|e| RenderError::BlobEncodingFailure(e.to_string()))
}

/// Render to a `data:image/png;base64,...` URI.
pub fn to_image_data_url(code: &str, opts: &RenderOptions) -> Result<String, RenderError> {
    let png = to_image_blob(code, opts)?;
    Ok(format!(
        "data:image/png;base64,{}",
        base64::Engine::encode(&base64::engine::general_purpose::STANDARD, &png)
    ))
}
