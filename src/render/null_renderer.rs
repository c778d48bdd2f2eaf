use crate::error::ChartResult;
use crate::render::{FrameLayer, RenderFrame, Renderer, ShapeTag};

/// No-op renderer used by tests and headless callers.
///
/// It still validates frame content and records per-kind counts so shape
/// accounting can be checked without parsing markup.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_line_count: usize,
    pub last_rect_count: usize,
    pub last_text_count: usize,
    pub last_grid_line_count: usize,
    pub last_wick_count: usize,
    pub last_body_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_line_count = frame.lines().count();
        self.last_rect_count = frame.rects().count();
        self.last_text_count = frame.texts().count();
        self.last_grid_line_count = frame.layer_count(FrameLayer::Grid);
        self.last_wick_count = frame.tagged_count(ShapeTag::CandleWick);
        self.last_body_count = frame.tagged_count(ShapeTag::CandleBody);
        Ok(())
    }
}
