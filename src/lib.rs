//! synth-chart: deterministic synthetic candlestick charts.
//!
//! A `(symbol, timeframe)` pair seeds a reproducible OHLC price walk, which is
//! laid out on a fixed-margin canvas and serialized as SVG markup. The markup
//! hash doubles as a stable artifact id.
//!
//! Pipeline: [`core::derive_seed`] → [`core::generate_series`] →
//! [`core::ChartGeometry`] → [`api::compose_chart_frame`] →
//! [`render::SvgRenderer`] → [`api::content_id`].

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{RenderRequest, RenderedChart, render_chart};
pub use error::{ChartError, ChartResult};
