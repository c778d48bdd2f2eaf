use serde::Serialize;

use crate::core::candlestick::PriceSeries;
use crate::core::types::Viewport;
use crate::error::{ChartError, ChartResult};

pub const CHART_MARGIN_LEFT: i64 = 52;
pub const CHART_MARGIN_RIGHT: i64 = 24;
pub const CHART_MARGIN_TOP: i64 = 96;
pub const CHART_MARGIN_BOTTOM: i64 = 30;
pub const MIN_CHART_WIDTH: i64 = 120;
pub const MIN_CHART_HEIGHT: i64 = 100;

/// Floor for the price span so a flat series still maps to finite pixels.
pub const MIN_PRICE_SPAN: f64 = 0.1;

pub const MIN_BODY_WIDTH_PX: f64 = 2.0;
pub const MAX_BODY_WIDTH_PX: f64 = 8.0;
const BODY_WIDTH_RATIO: f64 = 0.66;

pub const MIN_CANDLE_COUNT: usize = 18;
pub const MAX_CANDLE_COUNT: usize = 80;
const PX_PER_CANDLE: i64 = 14;

/// Plot rectangle inside the canvas, in whole pixels.
///
/// `right` and `bottom` are the canvas edges minus the fixed margins.
/// `width` and `height` are floored separately, so on canvases below
/// the minimum size `left + width` can be greater than `right`. Prices
/// are scaled from `bottom` by `height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartRect {
    pub left: i64,
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
    pub width: i64,
    pub height: i64,
}

impl ChartRect {
    /// Subtracts the fixed margins and floors the size at the minimum.
    #[must_use]
    pub fn for_viewport(viewport: Viewport) -> Self {
        let right = i64::from(viewport.width) - CHART_MARGIN_RIGHT;
        let bottom = i64::from(viewport.height) - CHART_MARGIN_BOTTOM;
        Self {
            left: CHART_MARGIN_LEFT,
            top: CHART_MARGIN_TOP,
            right,
            bottom,
            width: (right - CHART_MARGIN_LEFT).max(MIN_CHART_WIDTH),
            height: (bottom - CHART_MARGIN_TOP).max(MIN_CHART_HEIGHT),
        }
    }
}

/// Number of candles drawn for a given plot width: one per 14px, clamped to `18..=80`.
#[must_use]
pub fn candle_count_for_width(chart_width: i64) -> usize {
    let by_width = usize::try_from(chart_width / PX_PER_CANDLE).unwrap_or(0);
    by_width.clamp(MIN_CANDLE_COUNT, MAX_CANDLE_COUNT)
}

/// Price-to-pixel transform and per-candle layout for one render.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartGeometry {
    pub low_bound: f64,
    pub high_bound: f64,
    pub price_span: f64,
    pub rect: ChartRect,
    pub step: f64,
    pub body_width: f64,
}

impl ChartGeometry {
    /// Computes the geometry of `series` on a canvas of `viewport` size.
    ///
    /// Fails on an empty series or a zero-sized viewport rather than dividing by zero.
    pub fn compute(series: &PriceSeries, viewport: Viewport) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        let (low_bound, high_bound) = series.price_bounds().ok_or_else(|| {
            ChartError::InvalidData("cannot lay out an empty price series".to_owned())
        })?;

        let rect = ChartRect::for_viewport(viewport);
        let step = rect.width as f64 / series.len() as f64;

        Ok(Self {
            low_bound,
            high_bound,
            price_span: (high_bound - low_bound).max(MIN_PRICE_SPAN),
            rect,
            step,
            body_width: (step * BODY_WIDTH_RATIO).clamp(MIN_BODY_WIDTH_PX, MAX_BODY_WIDTH_PX),
        })
    }

    /// Maps a price to a y coordinate; higher prices sit nearer the top.
    #[must_use]
    pub fn price_to_y(&self, price: f64) -> f64 {
        let pct = (price - self.low_bound) / self.price_span;
        self.rect.bottom as f64 - pct * self.rect.height as f64
    }

    /// Horizontal center of the candle at `index`.
    #[must_use]
    pub fn candle_center_x(&self, index: usize) -> f64 {
        self.rect.left as f64 + (index as f64 + 0.5) * self.step
    }
}
