use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::api::Theme;
use crate::core::{ChartRect, Viewport, candle_count_for_width};
use crate::error::{ChartError, ChartResult};

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 450;

/// Validated render parameters.
///
/// Built once at the boundary (directly or from a JSON payload) and passed
/// by reference through the pipeline; fields cannot change afterwards.
/// Serializes to the `meta` object echoed back to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct RenderRequest {
    symbol: String,
    timeframe: String,
    width: u32,
    height: u32,
    theme: Theme,
}

impl RenderRequest {
    /// Creates a request with default size and light theme.
    ///
    /// Symbol and timeframe are trimmed and must not be blank.
    pub fn new(symbol: &str, timeframe: &str) -> ChartResult<Self> {
        Ok(Self {
            symbol: require_text("symbol", symbol)?,
            timeframe: require_text("timeframe", timeframe)?,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            theme: Theme::Light,
        })
    }

    pub fn with_size(mut self, width: u32, height: u32) -> ChartResult<Self> {
        if width == 0 {
            return Err(ChartError::InvalidRange {
                field: "width",
                value: 0,
            });
        }
        if height == 0 {
            return Err(ChartError::InvalidRange {
                field: "height",
                value: 0,
            });
        }
        self.width = width;
        self.height = height;
        Ok(self)
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let value: Value = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse render payload: {e}"))
        })?;
        Self::from_json_value(&value)
    }

    /// Validates a loosely typed JSON payload.
    ///
    /// - `symbol`/`timeframe`: strings or numbers, trimmed, must not be blank;
    ///   absent or `null` is `MissingField`, booleans, arrays and objects are
    ///   `InvalidType`
    /// - `width`/`height`: integers, integral strings or numbers (truncated);
    ///   absent or `null` falls back to 800x450; must be in `1..=u32::MAX`
    /// - `theme`: any value; only `dark` changes the palette
    pub fn from_json_value(payload: &Value) -> ChartResult<Self> {
        let object = payload
            .as_object()
            .ok_or_else(|| ChartError::InvalidData("payload must be an object".to_owned()))?;

        let symbol = text_field(object, "symbol")?;
        let timeframe = text_field(object, "timeframe")?;
        let width = dimension_field(object, "width", DEFAULT_WIDTH)?;
        let height = dimension_field(object, "height", DEFAULT_HEIGHT)?;
        let theme = match object.get("theme") {
            Some(Value::String(name)) => Theme::from_name(name),
            _ => Theme::Light,
        };

        Self::new(&symbol, &timeframe)?
            .with_size(width, height)
            .map(|request| request.with_theme(theme))
    }

    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    #[must_use]
    pub fn timeframe(&self) -> &str {
        &self.timeframe
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    /// Candle count for this canvas, one per 14px of plot width within `18..=80`.
    #[must_use]
    pub fn candle_count(&self) -> usize {
        candle_count_for_width(ChartRect::for_viewport(self.viewport()).width)
    }
}

impl TryFrom<Value> for RenderRequest {
    type Error = ChartError;

    fn try_from(value: Value) -> ChartResult<Self> {
        Self::from_json_value(&value)
    }
}

fn require_text(field: &'static str, raw: &str) -> ChartResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ChartError::MissingField { field });
    }
    Ok(trimmed.to_owned())
}

fn text_field(object: &Map<String, Value>, field: &'static str) -> ChartResult<String> {
    match object.get(field) {
        None | Some(Value::Null) => Err(ChartError::MissingField { field }),
        Some(Value::String(text)) => require_text(field, text),
        Some(Value::Number(number)) => Ok(number.to_string()),
        Some(_) => Err(ChartError::InvalidType {
            field,
            expected: "a string",
        }),
    }
}

fn dimension_field(
    object: &Map<String, Value>,
    field: &'static str,
    default: u32,
) -> ChartResult<u32> {
    let invalid_type = || ChartError::InvalidType {
        field,
        expected: "an integer",
    };

    let value = match object.get(field) {
        None | Some(Value::Null) => return Ok(default),
        Some(Value::Number(number)) => match (number.as_i64(), number.as_u64(), number.as_f64()) {
            (Some(v), _, _) => v,
            (None, Some(_), _) => i64::MAX,
            (None, None, Some(v)) if v.is_finite() => v.trunc() as i64,
            _ => return Err(invalid_type()),
        },
        Some(Value::String(text)) => text.trim().parse::<i64>().map_err(|_| invalid_type())?,
        Some(_) => return Err(invalid_type()),
    };

    if value <= 0 {
        return Err(ChartError::InvalidRange { field, value });
    }
    u32::try_from(value).map_err(|_| ChartError::InvalidRange { field, value })
}
