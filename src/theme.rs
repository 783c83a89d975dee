use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub background: String,
    pub bubble_fill: String,
    pub shadow_color: String,
    pub anchor_fill: String,
    pub anchor_border: String,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            background: "#FFFFFF".to_string(),
            bubble_fill: "#4C8BF5".to_string(),
            shadow_color: "rgba(0, 0, 0, 0.35)".to_string(),
            anchor_fill: "#EEF2F8".to_string(),
            anchor_border: "#C7D2E5".to_string(),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: "#1C2430".to_string(),
            bubble_fill: "#3B6FD4".to_string(),
            shadow_color: "rgba(0, 0, 0, 0.6)".to_string(),
            anchor_fill: "#2A3442".to_string(),
            anchor_border: "#44526A".to_string(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
