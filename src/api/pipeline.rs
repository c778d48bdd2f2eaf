use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::{RenderRequest, compose_chart_frame, content_id};
use crate::core::{ChartGeometry, derive_seed, generate_series};
use crate::error::{ChartError, ChartResult};
use crate::render::{RenderFrame, Renderer, SvgRenderer};

pub const SVG_ARTIFACT_TYPE: &str = "image/svg+xml";

/// Final markup and its content id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedChart {
    markup: String,
    content_id: String,
}

impl RenderedChart {
    #[must_use]
    pub fn markup(&self) -> &str {
        &self.markup
    }

    #[must_use]
    pub fn content_id(&self) -> &str {
        &self.content_id
    }
}

/// Seeds, generates and lays out the series for `request`, returning the scene.
pub fn build_chart_frame(request: &RenderRequest) -> ChartResult<RenderFrame> {
    let seed = derive_seed(request.symbol(), request.timeframe());
    let count = request.candle_count();
    debug!(
        symbol = request.symbol(),
        timeframe = request.timeframe(),
        seed,
        count,
        "derived walk seed"
    );

    let series = generate_series(seed, count);
    let geometry = ChartGeometry::compute(&series, request.viewport())?;
    Ok(compose_chart_frame(&series, &geometry, request))
}

/// Runs the full pipeline with the SVG backend.
pub fn render_chart(request: &RenderRequest) -> ChartResult<RenderedChart> {
    let frame = build_chart_frame(request)?;
    let mut renderer = SvgRenderer::new();
    renderer.render(&frame)?;

    let markup = renderer.into_markup();
    let content_id = content_id(&markup);
    debug!(
        bytes = markup.len(),
        content_id = content_id.as_str(),
        "rendered chart"
    );
    Ok(RenderedChart { markup, content_id })
}

/// Response body handed back to the service boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderResponse {
    pub render_id: String,
    pub artifact_type: String,
    pub artifact: String,
    pub meta: RenderRequest,
}

impl RenderResponse {
    #[must_use]
    pub fn from_rendered(rendered: RenderedChart, request: &RenderRequest) -> Self {
        Self {
            render_id: rendered.content_id,
            artifact_type: SVG_ARTIFACT_TYPE.to_owned(),
            artifact: rendered.markup,
            meta: request.clone(),
        }
    }

    pub fn to_json(&self) -> ChartResult<String> {
        serde_json::to_string(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize render response: {e}"))
        })
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize render response: {e}"))
        })
    }
}
