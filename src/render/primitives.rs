use std::fmt;

use crate::error::{ChartError, ChartResult};

/// Opaque RGB color, written as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Builds a color from a packed `0xRRGGBB` value.
    #[must_use]
    pub const fn from_hex(rgb: u32) -> Self {
        Self::rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

/// Pixel coordinate with its output precision.
///
/// Layout values that are whole by construction (margins, rect edges) print
/// as integers; derived values print with two decimals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Px {
    Whole(i64),
    Fractional(f64),
}

impl Px {
    #[must_use]
    pub fn value(self) -> f64 {
        match self {
            Self::Whole(v) => v as f64,
            Self::Fractional(v) => v,
        }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.value().is_finite()
    }
}

impl From<i64> for Px {
    fn from(value: i64) -> Self {
        Self::Whole(value)
    }
}

impl From<f64> for Px {
    fn from(value: f64) -> Self {
        Self::Fractional(value)
    }
}

impl fmt::Display for Px {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Whole(v) => write!(f, "{v}"),
            Self::Fractional(v) => write!(f, "{v:.2}"),
        }
    }
}

/// Identifies candle shapes for downstream consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeTag {
    CandleWick,
    CandleBody,
}

impl ShapeTag {
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::CandleWick => "candle-wick",
            Self::CandleBody => "candle-body",
        }
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: Px,
    pub y1: Px,
    pub x2: Px,
    pub y2: Px,
    pub stroke_width: f64,
    pub color: Color,
    pub opacity: Option<f64>,
    pub tag: Option<ShapeTag>,
}

impl LinePrimitive {
    #[must_use]
    pub fn new(
        x1: impl Into<Px>,
        y1: impl Into<Px>,
        x2: impl Into<Px>,
        y2: impl Into<Px>,
        stroke_width: f64,
        color: Color,
    ) -> Self {
        Self {
            x1: x1.into(),
            y1: y1.into(),
            x2: x2.into(),
            y2: y2.into(),
            stroke_width,
            color,
            opacity: None,
            tag: None,
        }
    }

    #[must_use]
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    #[must_use]
    pub fn with_tag(mut self, tag: ShapeTag) -> Self {
        self.tag = Some(tag);
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(ChartError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        validate_opacity(self.opacity)
    }
}

/// Draw command for one axis-aligned rectangle.
///
/// `fill: None` leaves the interior transparent; a border is drawn only when
/// `border_width > 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPrimitive {
    pub x: Px,
    pub y: Px,
    pub width: Px,
    pub height: Px,
    pub fill: Option<Color>,
    pub border_width: f64,
    pub border_color: Color,
    pub corner_radius: f64,
    pub tag: Option<ShapeTag>,
}

impl RectPrimitive {
    #[must_use]
    pub fn filled(
        x: impl Into<Px>,
        y: impl Into<Px>,
        width: impl Into<Px>,
        height: impl Into<Px>,
        fill: Color,
    ) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            width: width.into(),
            height: height.into(),
            fill: Some(fill),
            border_width: 0.0,
            border_color: fill,
            corner_radius: 0.0,
            tag: None,
        }
    }

    #[must_use]
    pub fn outlined(
        x: impl Into<Px>,
        y: impl Into<Px>,
        width: impl Into<Px>,
        height: impl Into<Px>,
        border_color: Color,
        border_width: f64,
    ) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            width: width.into(),
            height: height.into(),
            fill: None,
            border_width,
            border_color,
            corner_radius: 0.0,
            tag: None,
        }
    }

    #[must_use]
    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius;
        self
    }

    #[must_use]
    pub fn with_tag(mut self, tag: ShapeTag) -> Self {
        self.tag = Some(tag);
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "rect position must be finite".to_owned(),
            ));
        }
        if !self.width.is_finite()
            || !self.height.is_finite()
            || self.width.value() < 0.0
            || self.height.value() < 0.0
        {
            return Err(ChartError::InvalidData(
                "rect size must be finite and >= 0".to_owned(),
            ));
        }
        if !self.border_width.is_finite() || self.border_width < 0.0 {
            return Err(ChartError::InvalidData(
                "rect border width must be finite and >= 0".to_owned(),
            ));
        }
        if !self.corner_radius.is_finite() || self.corner_radius < 0.0 {
            return Err(ChartError::InvalidData(
                "rect corner radius must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Draw command for one label in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: Px,
    pub y: Px,
    pub font_size_px: f64,
    pub font_family: &'static str,
    pub color: Color,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: impl Into<Px>,
        y: impl Into<Px>,
        font_size_px: f64,
        color: Color,
    ) -> Self {
        Self {
            text: text.into(),
            x: x.into(),
            y: y.into(),
            font_size_px,
            font_family: "monospace",
            color,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

fn validate_opacity(opacity: Option<f64>) -> ChartResult<()> {
    match opacity {
        Some(value) if !value.is_finite() || !(0.0..=1.0).contains(&value) => Err(
            ChartError::InvalidData("opacity must be finite and in [0, 1]".to_owned()),
        ),
        _ => Ok(()),
    }
}
