use tracing::debug;

use crate::api::{DOWN_COLOR, RenderRequest, ThemePalette, UP_COLOR};
use crate::core::{ChartGeometry, PriceSeries};
use crate::render::{
    FrameLayer, LinePrimitive, Primitive, Px, RectPrimitive, RenderFrame, ShapeTag,
    TextPrimitive,
};

pub const GRID_LINE_COUNT: usize = 6;
pub const MIN_BODY_HEIGHT_PX: f64 = 1.8;

const TITLE_X: i64 = 24;
const TITLE_Y: i64 = 44;
const TITLE_FONT_SIZE: f64 = 24.0;
const SUBTITLE_Y: i64 = 74;
const SUBTITLE_FONT_SIZE: f64 = 16.0;
const BORDER_WIDTH: f64 = 1.0;
const GRID_LINE_WIDTH: f64 = 1.0;
const GRID_LINE_OPACITY: f64 = 0.55;
const WICK_WIDTH: f64 = 1.2;
const BODY_CORNER_RADIUS: f64 = 1.0;

/// Builds the chart scene for `series` laid out by `geometry`.
///
/// Paint order: title and subtitle, plot border, six evenly spaced grid
/// lines, then one wick and one body per candle in chronological order.
#[must_use]
pub fn compose_chart_frame(
    series: &PriceSeries,
    geometry: &ChartGeometry,
    request: &RenderRequest,
) -> RenderFrame {
    let palette = request.theme().palette();
    let mut frame = RenderFrame::new(request.viewport(), palette.background);

    append_labels(&mut frame, request, palette);
    append_border_and_grid(&mut frame, geometry, palette);
    append_candles(&mut frame, series, geometry);

    debug!(
        symbol = request.symbol(),
        timeframe = request.timeframe(),
        theme = request.theme().as_str(),
        candles = series.len(),
        primitives = frame.primitives.len(),
        "composed chart frame"
    );
    frame
}

fn append_labels(frame: &mut RenderFrame, request: &RenderRequest, palette: ThemePalette) {
    frame.push(
        FrameLayer::Labels,
        Primitive::Text(TextPrimitive::new(
            request.symbol(),
            TITLE_X,
            TITLE_Y,
            TITLE_FONT_SIZE,
            palette.foreground,
        )),
    );
    frame.push(
        FrameLayer::Labels,
        Primitive::Text(TextPrimitive::new(
            format!("timeframe {}", request.timeframe()),
            TITLE_X,
            SUBTITLE_Y,
            SUBTITLE_FONT_SIZE,
            palette.muted,
        )),
    );
}

fn append_border_and_grid(frame: &mut RenderFrame, geometry: &ChartGeometry, palette: ThemePalette) {
    let rect = geometry.rect;
    frame.push(
        FrameLayer::Border,
        Primitive::Rect(RectPrimitive::outlined(
            rect.left,
            rect.top,
            rect.width,
            rect.height,
            palette.grid,
            BORDER_WIDTH,
        )),
    );

    let spacing = rect.height as f64 / (GRID_LINE_COUNT - 1) as f64;
    for idx in 0..GRID_LINE_COUNT {
        let y = Px::Fractional(rect.top as f64 + spacing * idx as f64);
        frame.push(
            FrameLayer::Grid,
            Primitive::Line(
                LinePrimitive::new(rect.left, y, rect.right, y, GRID_LINE_WIDTH, palette.grid)
                    .with_opacity(GRID_LINE_OPACITY),
            ),
        );
    }
}

fn append_candles(frame: &mut RenderFrame, series: &PriceSeries, geometry: &ChartGeometry) {
    let half_body = geometry.body_width / 2.0;

    for (idx, candle) in series.iter().enumerate() {
        let center_x = geometry.candle_center_x(idx);
        let y_open = geometry.price_to_y(candle.open());
        let y_close = geometry.price_to_y(candle.close());
        let y_high = geometry.price_to_y(candle.high());
        let y_low = geometry.price_to_y(candle.low());
        let color = if candle.is_bullish() {
            UP_COLOR
        } else {
            DOWN_COLOR
        };

        frame.push(
            FrameLayer::Series,
            Primitive::Line(
                LinePrimitive::new(center_x, y_high, center_x, y_low, WICK_WIDTH, color)
                    .with_tag(ShapeTag::CandleWick),
            ),
        );
        frame.push(
            FrameLayer::Series,
            Primitive::Rect(
                RectPrimitive::filled(
                    center_x - half_body,
                    y_open.min(y_close),
                    geometry.body_width,
                    (y_close - y_open).abs().max(MIN_BODY_HEIGHT_PX),
                    color,
                )
                .with_corner_radius(BODY_CORNER_RADIUS)
                .with_tag(ShapeTag::CandleBody),
            ),
        );
    }
}
