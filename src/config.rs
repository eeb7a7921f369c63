use egui::{Pos2, Vec2};
use serde::{Deserialize, Serialize};

/// Key under which editor settings live in eframe storage.
pub const CONFIG_KEY: &str = "eframe_design.config";

/// Editor settings. Scene content is never part of this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct EditorConfig {
    /// Logical canvas size in canvas units.
    pub canvas_size: [f32; 2],
    /// Display scale of the canvas inside the workspace.
    pub canvas_zoom: f32,
    /// Where newly created elements land before jitter.
    pub work_area_anchor: [f32; 2],
    /// Upper bound of the random offset added to each axis.
    pub placement_jitter: f32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            canvas_size: [800.0, 600.0],
            canvas_zoom: 0.8,
            work_area_anchor: [150.0, 150.0],
            placement_jitter: 50.0,
        }
    }
}

impl EditorConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json).map(Self::sanitized)
    }

    pub fn canvas_size(&self) -> Vec2 {
        Vec2::new(self.canvas_size[0], self.canvas_size[1])
    }

    pub fn anchor(&self) -> Pos2 {
        Pos2::new(self.work_area_anchor[0], self.work_area_anchor[1])
    }

    /// Replaces out-of-range values with defaults.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !self.canvas_size.iter().all(|v| v.is_finite() && *v > 0.0) {
            self.canvas_size = defaults.canvas_size;
        }
        if !(self.canvas_zoom.is_finite() && self.canvas_zoom > 0.0) {
            self.canvas_zoom = defaults.canvas_zoom;
        }
        if !self.work_area_anchor.iter().all(|v| v.is_finite()) {
            self.work_area_anchor = defaults.work_area_anchor;
        }
        if !(self.placement_jitter.is_finite() && self.placement_jitter >= 0.0) {
            self.placement_jitter = defaults.placement_jitter;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = EditorConfig::from_json(r#"{ "placement_jitter": 20.0 }"#).unwrap();
        assert_eq!(config.placement_jitter, 20.0);
        assert_eq!(config.canvas_size, [800.0, 600.0]);
        assert_eq!(config.anchor(), Pos2::new(150.0, 150.0));
    }

    #[test]
    fn test_invalid_values_are_replaced() {
        let config = EditorConfig::from_json(r#"{ "canvas_zoom": -1.0, "canvas_size": [0.0, 10.0] }"#)
            .unwrap();
        assert_eq!(config.canvas_zoom, 0.8);
        assert_eq!(config.canvas_size(), Vec2::new(800.0, 600.0));
    }
}
