use crate::geometry::Orientation;
use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Triangular arrow dimensions. `offset` is the fractional position of the
/// arrow along its edge, measured from the edge's start corner.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ArrowConfig {
    pub width: f32,
    pub length: f32,
    pub offset: f32,
}

impl Default for ArrowConfig {
    fn default() -> Self {
        Self {
            width: 16.0,
            length: 10.0,
            offset: 0.5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShadowConfig {
    pub enabled: bool,
    pub radius: f32,
    pub color: String,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            radius: 4.0,
            color: "rgba(0, 0, 0, 0.35)".to_string(),
            offset_x: 2.0,
            offset_y: 2.0,
        }
    }
}

impl ShadowConfig {
    /// The `(offset_x, offset_y, radius)` the geometry should reserve space
    /// for. A disabled shadow reserves nothing.
    pub fn effective(&self) -> (f32, f32, f32) {
        if self.enabled {
            (self.offset_x, self.offset_y, self.radius)
        } else {
            (0.0, 0.0, 0.0)
        }
    }
}

/// Full configuration surface of one bubble. Owned by the composing layer
/// for the bubble's lifetime; the geometry only ever reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BubbleConfig {
    pub orientation: Orientation,
    /// Fill override; falls back to the theme's bubble fill when unset.
    pub fill: Option<String>,
    pub corner_radius: f32,
    pub arrow: ArrowConfig,
    pub shadow: ShadowConfig,
    /// Gap between the bubble and the anchor when placing.
    pub margin: f32,
}

impl Default for BubbleConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::Bottom,
            fill: None,
            corner_radius: 8.0,
            arrow: ArrowConfig::default(),
            shadow: ShadowConfig::default(),
            margin: 8.0,
        }
    }
}

impl BubbleConfig {
    /// Clamp every numeric field into its valid range. This is the only
    /// place malformed input is handled; the geometry functions assume
    /// sanitized values and never validate. Bad numbers degrade toward
    /// "no arrow" / "no rounding" instead of failing.
    pub fn sanitized(mut self) -> Self {
        self.corner_radius = self.corner_radius.max(0.0);
        self.arrow.width = self.arrow.width.max(0.0);
        self.arrow.length = self.arrow.length.max(0.0);
        self.arrow.offset = self.arrow.offset.clamp(0.0, 1.0);
        self.shadow.radius = self.shadow.radius.max(0.0);
        self.margin = self.margin.max(0.0);
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    pub width: f32,
    pub height: f32,
    pub background: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 480.0,
            height: 320.0,
            background: "#FFFFFF".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub theme: Theme,
    pub bubble: BubbleConfig,
    pub render: RenderConfig,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct BubbleConfigFile {
    orientation: Option<String>,
    bubble_color: Option<String>,
    corner_radius: Option<f32>,
    arrow_width: Option<f32>,
    arrow_length: Option<f32>,
    arrow_offset: Option<f32>,
    shadow_enabled: Option<bool>,
    shadow_radius: Option<f32>,
    shadow_color: Option<String>,
    shadow_offset_x: Option<f32>,
    shadow_offset_y: Option<f32>,
    margin: Option<f32>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct RenderConfigFile {
    width: Option<f32>,
    height: Option<f32>,
    background: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    theme: Option<String>,
    bubble: Option<BubbleConfigFile>,
    render: Option<RenderConfigFile>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)?;
    let parsed: ConfigFile = serde_json::from_str(&contents)?;

    if let Some(theme_name) = parsed.theme.as_deref() {
        if theme_name == "dark" {
            config.theme = Theme::dark();
        } else if theme_name == "light" || theme_name == "default" {
            config.theme = Theme::light();
        }
    }

    if let Some(bubble) = parsed.bubble {
        // Unknown orientation tokens are ignored rather than rejected.
        if let Some(token) = bubble.orientation.as_deref() {
            if let Some(orientation) = Orientation::from_token(token) {
                config.bubble.orientation = orientation;
            }
        }
        if let Some(v) = bubble.bubble_color {
            config.bubble.fill = Some(v);
        }
        if let Some(v) = bubble.corner_radius {
            config.bubble.corner_radius = v;
        }
        if let Some(v) = bubble.arrow_width {
            config.bubble.arrow.width = v;
        }
        if let Some(v) = bubble.arrow_length {
            config.bubble.arrow.length = v;
        }
        if let Some(v) = bubble.arrow_offset {
            config.bubble.arrow.offset = v;
        }
        if let Some(v) = bubble.shadow_enabled {
            config.bubble.shadow.enabled = v;
        }
        if let Some(v) = bubble.shadow_radius {
            config.bubble.shadow.radius = v;
        }
        if let Some(v) = bubble.shadow_color {
            config.bubble.shadow.color = v;
        }
        if let Some(v) = bubble.shadow_offset_x {
            config.bubble.shadow.offset_x = v;
        }
        if let Some(v) = bubble.shadow_offset_y {
            config.bubble.shadow.offset_y = v;
        }
        if let Some(v) = bubble.margin {
            config.bubble.margin = v;
        }
    }

    if let Some(render) = parsed.render {
        if let Some(v) = render.width {
            config.render.width = v;
        }
        if let Some(v) = render.height {
            config.render.height = v;
        }
        if let Some(v) = render.background {
            config.render.background = v;
        }
    }

    config.bubble = config.bubble.sanitized();
    Ok(config)
}
