mod frame;
mod null_renderer;
mod primitives;
mod svg_backend;

pub use frame::{FrameLayer, LayeredPrimitive, Primitive, RenderFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{Color, LinePrimitive, Px, RectPrimitive, ShapeTag, TextPrimitive};
pub use svg_backend::{SVG_NAMESPACE, SvgRenderer};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code stays isolated from price generation and layout.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
