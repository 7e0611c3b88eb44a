//! UPC-A Barcode Engine
//!
//! # The Pipeline (Strictly Forward)
//! raw code -> Normalizer -> Symbol Encoder -> Layout Engine -> Renderer
//!
//! Everything is pure and stateless: each render is recomputed from its
//! own code and options, and the only mutation is the caller-supplied
//! output target. The L/R symbol tables and guard patterns are constant
//! data, never configuration.

pub mod checksum;
pub mod normalize;
pub mod encode;
pub mod options;
pub mod layout;
pub mod render;
pub mod raster;
pub mod svg;

pub use checksum::calculate_checksum;
pub use normalize::{format_upc, normalize, validate, ChecksumPolicy, CodeError};
pub use encode::{encode, is_guard_module, Encoded, PATTERN_MODULES};
pub use options::{BarStyle, RenderOptions};
pub use layout::{plan, DrawOp, Layout, TextAlign};
pub use render::{render_onto, RenderError, RenderTarget};
pub use raster::{render, to_image_blob, to_image_data_url};
pub use svg::{render_to_vector, to_svg_string, SvgDocument, SvgNode};

/// The pixel-drawable surface consumed by [`render`].
pub use tiny_skia::Pixmap;

pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");
