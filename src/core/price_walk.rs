use tracing::trace;

use crate::core::candlestick::{Candle, PriceSeries};
use crate::core::random::{Lcg, RandomSource};

/// Floor applied to every close so the walk never approaches zero.
pub const MIN_CLOSE: f64 = 1.0;
/// Floor applied to every low after the down wick is subtracted.
pub const MIN_LOW: f64 = 0.1;

const MOVE_RANGE: u32 = 2001;
const MOVE_OFFSET: f64 = 1000.0;
const MOVE_DIVISOR: f64 = 620.0;
const WICK_RANGE: u32 = 700;
const WICK_DIVISOR: f64 = 420.0;

/// Opening price of the first candle: `80.0 + (seed mod 450) / 10.0`.
#[must_use]
pub fn initial_price(seed: u64) -> f64 {
    80.0 + (seed % 450) as f64 / 10.0
}

/// Expands a seed into `count` candles.
#[must_use]
pub fn generate_series(seed: u64, count: usize) -> PriceSeries {
    let mut rng = Lcg::from_seed(seed);
    generate_series_with(&mut rng, initial_price(seed), count)
}

/// Runs the walk against an explicit draw source.
///
/// Draws are consumed in a fixed order per candle: move, up wick, down wick.
pub fn generate_series_with<R: RandomSource>(
    rng: &mut R,
    start_price: f64,
    count: usize,
) -> PriceSeries {
    let mut candles = Vec::with_capacity(count);
    let mut price = start_price;

    for _ in 0..count {
        let price_move = (f64::from(rng.next_u32() % MOVE_RANGE) - MOVE_OFFSET) / MOVE_DIVISOR;
        let open = price;
        let close = (open + price_move).max(MIN_CLOSE);

        let wick_up = f64::from(rng.next_u32() % WICK_RANGE) / WICK_DIVISOR;
        let wick_down = f64::from(rng.next_u32() % WICK_RANGE) / WICK_DIVISOR;

        let high = open.max(close) + wick_up;
        let low = (open.min(close) - wick_down).max(MIN_LOW);

        candles.push(Candle::from_walk(open, high, low, close));
        price = close;
    }

    trace!(count, start_price, "generated price walk");
    PriceSeries::from_candles(candles)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedDraws(std::vec::IntoIter<u32>);

    impl RandomSource for FixedDraws {
        fn next_u32(&mut self) -> u32 {
            self.0.next().unwrap_or(0)
        }
    }

    #[test]
    fn draws_map_to_move_and_wicks_in_order() {
        // 1620 % 2001 -> move +1.0, 420 % 700 -> up 1.0, 210 % 700 -> down 0.5
        let mut draws = FixedDraws(vec![1620, 420, 210].into_iter());
        let series = generate_series_with(&mut draws, 100.0, 1);
        let candle = series.candles()[0];

        assert_eq!(candle.open(), 100.0);
        assert_eq!(candle.close(), 101.0);
        assert_eq!(candle.high(), 102.0);
        assert_eq!(candle.low(), 99.5);
    }

    #[test]
    fn close_and_low_floors_apply_near_zero() {
        // 0 % 2001 -> move -1000/620
        let mut draws = FixedDraws(vec![0, 0, 699].into_iter());
        let series = generate_series_with(&mut draws, 1.2, 1);
        let candle = series.candles()[0];

        assert_eq!(candle.close(), MIN_CLOSE);
        assert_eq!(candle.low(), MIN_LOW);
        assert_eq!(candle.high(), 1.2);
    }

    #[test]
    fn zero_count_yields_empty_series() {
        assert!(generate_series(42, 0).is_empty());
    }
}
