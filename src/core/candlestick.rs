use serde::Serialize;

use crate::error::{ChartError, ChartResult};

/// One synthetic OHLC candle.
///
/// Invariants:
/// - all values are finite and `low > 0`
/// - `high >= max(open, close)`
/// - `low <= min(open, close)`
///
/// Fields are private so a candle cannot change after construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Candle {
    open: f64,
    high: f64,
    low: f64,
    close: f64,
}

impl Candle {
    pub fn new(open: f64, high: f64, low: f64, close: f64) -> ChartResult<Self> {
        if !open.is_finite() || !high.is_finite() || !low.is_finite() || !close.is_finite() {
            return Err(ChartError::InvalidData(
                "ohlc values must be finite".to_owned(),
            ));
        }
        if low <= 0.0 {
            return Err(ChartError::InvalidData("ohlc low must be > 0".to_owned()));
        }
        if high < open.max(close) || low > open.min(close) {
            return Err(ChartError::InvalidData(
                "ohlc open/close must be within low/high range".to_owned(),
            ));
        }

        Ok(Self {
            open,
            high,
            low,
            close,
        })
    }

    /// Builds a candle whose invariants already hold by construction.
    pub(crate) fn from_walk(open: f64, high: f64, low: f64, close: f64) -> Self {
        debug_assert!(low > 0.0 && low <= open.min(close) && high >= open.max(close));
        Self {
            open,
            high,
            low,
            close,
        }
    }

    #[must_use]
    pub fn open(self) -> f64 {
        self.open
    }

    #[must_use]
    pub fn high(self) -> f64 {
        self.high
    }

    #[must_use]
    pub fn low(self) -> f64 {
        self.low
    }

    #[must_use]
    pub fn close(self) -> f64 {
        self.close
    }

    /// Returns `true` when close price is greater than or equal to open price.
    #[must_use]
    pub fn is_bullish(self) -> bool {
        self.close >= self.open
    }
}

/// Chronological candle series produced by one generation call.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct PriceSeries {
    candles: Vec<Candle>,
}

impl PriceSeries {
    pub(crate) fn from_candles(candles: Vec<Candle>) -> Self {
        Self { candles }
    }

    #[must_use]
    pub fn candles(&self) -> &[Candle] {
        &self.candles
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.candles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candle> {
        self.candles.iter()
    }

    /// Lowest low and highest high, or `None` for an empty series.
    #[must_use]
    pub fn price_bounds(&self) -> Option<(f64, f64)> {
        let first = self.candles.first()?;
        Some(self.candles.iter().fold(
            (first.low, first.high),
            |(low, high), candle| (low.min(candle.low), high.max(candle.high)),
        ))
    }
}

impl<'a> IntoIterator for &'a PriceSeries {
    type Item = &'a Candle;
    type IntoIter = std::slice::Iter<'a, Candle>;

    fn into_iter(self) -> Self::IntoIter {
        self.candles.iter()
    }
}
