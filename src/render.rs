//! Render Target Seam
//!
//! One capability interface over both output surfaces. The driver owns
//! the pipeline order (encode, plan, clear, replay); targets only
//! translate primitives to their backend.

use thiserror::Error;

use crate::encode::encode;
use crate::layout::{DrawOp, Layout, TextAlign};
use crate::normalize::CodeError;
use crate::options::RenderOptions;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invalid code: {0}")]
    Code(#[from] CodeError),

    #[error("Invalid render target: {0}")]
    InvalidTarget(String),

    #[error("Blob encoding failed: {0}")]
    BlobEncodingFailure(String),
}

/// A drawable output surface.
///
/// `clear` resizes the target to the computed total dimensions and wipes
/// any prior content; a failed render may therefore leave the target
/// resized but not fully drawn.
pub trait RenderTarget {
    fn clear(&mut self, layout: &Layout, opts: &RenderOptions) -> Result<(), RenderError>;

    fn fill_rect(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        opts: &RenderOptions,
    ) -> Result<(), RenderError>;

    fn place_text(
        &mut self,
        x: f64,
        baseline: f64,
        size: f64,
        align: TextAlign,
        text: &str,
        opts: &RenderOptions,
    ) -> Result<(), RenderError>;
}

/// Encode `code` and draw it onto `target`.
pub fn render_onto<T: RenderTarget>(
    target: &mut T,
    code: &str,
    opts: &RenderOptions,
) -> Result<(), RenderError> {
    let encoded = encode(code, opts.checksum)?;
    let (layout, ops) = crate::layout::plan(&encoded, opts);

    target.clear(&layout, opts)?;
    for op in &ops {
        match op {
            DrawOp::Rect { x, y, width, height } => {
                target.fill_rect(*x, *y, *width, *height, opts)?;
            }
            DrawOp::Text {
                x,
                baseline,
                size,
                align,
                text,
            } => {
                target.place_text(*x, *baseline, *size, *align, text, opts)?;
            }
        }
    }
    Ok(())
}
