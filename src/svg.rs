//! Vector Renderer - In-Memory SVG Container
//!
//! `SvgDocument` is the "vector markup sink": a mutable container that
//! is cleared and resized on every render and serialized to markup on
//! demand. Placement comes from the same draw plan as the raster path.

use std::fmt;

use crate::layout::{Layout, TextAlign};
use crate::options::RenderOptions;
use crate::render::{render_onto, RenderError, RenderTarget};

#[derive(Debug, Clone, PartialEq)]
pub enum SvgNode {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: String,
    },
    Text {
        x: f64,
        y: f64,
        size: f64,
        anchor: TextAlign,
        family: String,
        fill: String,
        content: String,
    },
}

/// An SVG document with explicit dimensions and a flat child list.
#[derive(Debug, Clone, Default)]
pub struct SvgDocument {
    width: f64,
    height: f64,
    nodes: Vec<SvgNode>,
}

impl SvgDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn children(&self) -> &[SvgNode] {
        &self.nodes
    }
}

fn anchor_name(align: TextAlign) -> &'static str {
    match align {
        TextAlign::Start => "start",
        TextAlign::Center => "middle",
        TextAlign::End => "end",
    }
}

impl fmt::Display for SvgDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            self.width, self.height, self.width, self.height
        )?;
        for node in &self.nodes {
            match node {
                SvgNode::Rect {
                    x,
                    y,
                    width,
                    height,
                    fill,
                } => writeln!(
                    f,
                    r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
                    x, y, width, height, fill
                )?,
                SvgNode::Text {
                    x,
                    y,
                    size,
                    anchor,
                    family,
                    fill,
                    content,
                } => writeln!(
                    f,
                    r#"  <text x="{}" y="{}" font-family="{}" font-size="{}" text-anchor="{}" fill="{}">{}</text>"#,
                    x,
                    y,
                    family,
                    size,
                    anchor_name(*anchor),
                    fill,
                    content
                )?,
            }
        }
        write!(f, "</svg>")
    }
}

impl RenderTarget for SvgDocument {
    fn clear(&mut self, layout: &Layout, opts: &RenderOptions) -> Result<(), RenderError> {
        self.nodes.clear();
        self.width = layout.total_width;
        self.height = layout.total_height;
        self.nodes.push(SvgNode::Rect {
            x: 0.0,
            y: 0.0,
            width: self.width,
            height: self.height,
            fill: opts.background.clone(),
        });
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
        self.nodes.push(SvgNode::Rect {
            x,
            y,
            width,
            height,
            fill: opts.foreground.clone(),
        });
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
        self.nodes.push(SvgNode::Text {
            x,
            y: baseline,
            size,
            anchor: align,
            family: opts.font.clone(),
            fill: opts.foreground.clone(),
            content: text.to_string(),
        });
        Ok(())
    }
}

/// Render into an existing document, clearing prior children and
/// resetting its dimensions first.
pub fn render_to_vector(
    doc: &mut SvgDocument,
    code: &str,
    opts: &RenderOptions,
) -> Result<(), RenderError> {
    render_onto(doc, code, opts)
}

/// Render a fresh document and serialize it to markup.
pub fn to_svg_string(code: &str, opts: &RenderOptions) -> Result<String, RenderError> {
    let mut doc = SvgDocument::new();
    render_to_vector(&mut doc, code, opts)?;
    Ok(doc.to_string())
}
