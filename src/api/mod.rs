mod composer;
mod content_id;
mod pipeline;
mod request;
mod theme;

pub use composer::{GRID_LINE_COUNT, MIN_BODY_HEIGHT_PX, compose_chart_frame};
pub use content_id::content_id;
pub use pipeline::{
    RenderResponse, RenderedChart, SVG_ARTIFACT_TYPE, build_chart_frame, render_chart,
};
pub use request::{DEFAULT_HEIGHT, DEFAULT_WIDTH, RenderRequest};
pub use theme::{DOWN_COLOR, Theme, ThemePalette, UP_COLOR};
