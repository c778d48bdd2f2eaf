pub mod candlestick;
pub mod geometry;
pub mod price_walk;
pub mod random;
pub mod seed;
pub mod types;

pub use candlestick::{Candle, PriceSeries};
pub use geometry::{ChartGeometry, ChartRect, candle_count_for_width};
pub use price_walk::{generate_series, generate_series_with, initial_price};
pub use random::{Lcg, RandomSource};
pub use seed::derive_seed;
pub use types::Viewport;
