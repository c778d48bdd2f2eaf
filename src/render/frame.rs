use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, LinePrimitive, RectPrimitive, ShapeTag, TextPrimitive};

/// Paint order of a frame. Primitives must be pushed in non-decreasing layer order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FrameLayer {
    Labels,
    Border,
    Grid,
    Series,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Line(LinePrimitive),
    Rect(RectPrimitive),
    Text(TextPrimitive),
}

impl Primitive {
    #[must_use]
    pub fn tag(&self) -> Option<ShapeTag> {
        match self {
            Self::Line(line) => line.tag,
            Self::Rect(rect) => rect.tag,
            Self::Text(_) => None,
        }
    }

    fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Line(line) => line.validate(),
            Self::Rect(rect) => rect.validate(),
            Self::Text(text) => text.validate(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayeredPrimitive {
    pub layer: FrameLayer,
    pub primitive: Primitive,
}

/// Backend-agnostic scene for one chart draw pass.
///
/// The background covers the whole viewport; primitives are painted in
/// insertion order on top of it.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub background: Color,
    pub primitives: Vec<LayeredPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport, background: Color) -> Self {
        Self {
            viewport,
            background,
            primitives: Vec::new(),
        }
    }

    pub fn push(&mut self, layer: FrameLayer, primitive: Primitive) {
        self.primitives.push(LayeredPrimitive { layer, primitive });
    }

    #[must_use]
    pub fn with_line(mut self, layer: FrameLayer, line: LinePrimitive) -> Self {
        self.push(layer, Primitive::Line(line));
        self
    }

    #[must_use]
    pub fn with_rect(mut self, layer: FrameLayer, rect: RectPrimitive) -> Self {
        self.push(layer, Primitive::Rect(rect));
        self
    }

    #[must_use]
    pub fn with_text(mut self, layer: FrameLayer, text: TextPrimitive) -> Self {
        self.push(layer, Primitive::Text(text));
        self
    }

    pub fn lines(&self) -> impl Iterator<Item = &LinePrimitive> {
        self.primitives.iter().filter_map(|p| match &p.primitive {
            Primitive::Line(line) => Some(line),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = &RectPrimitive> {
        self.primitives.iter().filter_map(|p| match &p.primitive {
            Primitive::Rect(rect) => Some(rect),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.primitives.iter().filter_map(|p| match &p.primitive {
            Primitive::Text(text) => Some(text),
            _ => None,
        })
    }

    #[must_use]
    pub fn layer_count(&self, layer: FrameLayer) -> usize {
        self.primitives.iter().filter(|p| p.layer == layer).count()
    }

    #[must_use]
    pub fn tagged_count(&self, tag: ShapeTag) -> usize {
        self.primitives
            .iter()
            .filter(|p| p.primitive.tag() == Some(tag))
            .count()
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        let mut previous = None;
        for item in &self.primitives {
            match previous {
                Some(prev) if item.layer < prev => {
                    return Err(ChartError::InvalidData(format!(
                        "{:?} primitive pushed after {prev:?} layer",
                        item.layer
                    )));
                }
                _ => previous = Some(item.layer),
            }
            item.primitive.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}
