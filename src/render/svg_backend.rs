use std::fmt::Write;

use tracing::trace;

use crate::error::{ChartError, ChartResult};
use crate::render::{LinePrimitive, Primitive, RectPrimitive, RenderFrame, Renderer, TextPrimitive};

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Serializes frames into a standalone SVG document.
///
/// The root element carries the viewport size verbatim as `width`, `height`
/// and `viewBox`. Attribute values use single quotes.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    markup: String,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Markup produced by the last successful `render` call.
    #[must_use]
    pub fn markup(&self) -> &str {
        &self.markup
    }

    #[must_use]
    pub fn into_markup(self) -> String {
        self.markup
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        let mut out = String::with_capacity(256 + frame.primitives.len() * 160);
        write_document(&mut out, frame).map_err(|err| {
            ChartError::InvalidData(format!("failed to write svg markup: {err}"))
        })?;

        trace!(
            bytes = out.len(),
            primitives = frame.primitives.len(),
            "rendered svg frame"
        );
        self.markup = out;
        Ok(())
    }
}

fn write_document(out: &mut String, frame: &RenderFrame) -> std::fmt::Result {
    let width = frame.viewport.width;
    let height = frame.viewport.height;
    write!(
        out,
        "<svg xmlns='{SVG_NAMESPACE}' width='{width}' height='{height}' viewBox='0 0 {width} {height}'>"
    )?;
    write!(
        out,
        "<rect width='{width}' height='{height}' fill='{}'/>",
        frame.background
    )?;

    for item in &frame.primitives {
        match &item.primitive {
            Primitive::Line(line) => write_line(out, line)?,
            Primitive::Rect(rect) => write_rect(out, rect)?,
            Primitive::Text(text) => write_text(out, text)?,
        }
    }

    out.push_str("</svg>");
    Ok(())
}

fn write_line(out: &mut String, line: &LinePrimitive) -> std::fmt::Result {
    out.push_str("<line");
    if let Some(tag) = line.tag {
        write!(out, " class='{}'", tag.class_name())?;
    }
    write!(
        out,
        " x1='{}' y1='{}' x2='{}' y2='{}' stroke='{}' stroke-width='{}'",
        line.x1, line.y1, line.x2, line.y2, line.color, line.stroke_width
    )?;
    if let Some(opacity) = line.opacity {
        write!(out, " opacity='{opacity}'")?;
    }
    out.push_str("/>");
    Ok(())
}

fn write_rect(out: &mut String, rect: &RectPrimitive) -> std::fmt::Result {
    out.push_str("<rect");
    if let Some(tag) = rect.tag {
        write!(out, " class='{}'", tag.class_name())?;
    }
    write!(
        out,
        " x='{}' y='{}' width='{}' height='{}'",
        rect.x, rect.y, rect.width, rect.height
    )?;
    match rect.fill {
        Some(fill) => write!(out, " fill='{fill}'")?,
        None => out.push_str(" fill='none'"),
    }
    if rect.border_width > 0.0 {
        write!(
            out,
            " stroke='{}' stroke-width='{}'",
            rect.border_color, rect.border_width
        )?;
    }
    if rect.corner_radius > 0.0 {
        write!(out, " rx='{}'", rect.corner_radius)?;
    }
    out.push_str("/>");
    Ok(())
}

fn write_text(out: &mut String, text: &TextPrimitive) -> std::fmt::Result {
    write!(
        out,
        "<text x='{}' y='{}' fill='{}' font-size='{}' font-family='{}'>",
        text.x, text.y, text.color, text.font_size_px, text.font_family
    )?;
    push_escaped(out, &text.text);
    out.push_str("</text>");
    Ok(())
}

fn push_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&apos;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}
