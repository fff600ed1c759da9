use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_ROWS: u16 = 5;
pub const DEFAULT_COLS: u16 = 5;
pub const MAX_DIMENSION: u16 = 64;

/// Board size, in cells. The lattice has one more point along each axis.
///
/// Deserializable from a JS object such as `{ rows: 7, cols: 9 }`; missing
/// fields fall back to the 5x5 default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameConfig {
    pub rows: u16,
    pub cols: u16,
}

impl GameConfig {
    pub fn new(rows: u16, cols: u16) -> Self {
        Self { rows, cols }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::ZeroDimension {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.rows > MAX_DIMENSION || self.cols > MAX_DIMENSION {
            return Err(ConfigError::TooLarge {
                rows: self.rows,
                cols: self.cols,
                max: MAX_DIMENSION,
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}

/// Canvas geometry used by the presenter, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    pub grid_spacing: f64,
    pub marker_radius: f64,
    pub margin: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            grid_spacing: 50.0,
            marker_radius: 17.0,
            margin: 50.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_board_is_five_by_five() {
        let config = GameConfig::default();

        assert_eq!((config.rows, config.cols), (5, 5));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_and_oversized_dimensions_are_rejected() {
        assert_eq!(
            GameConfig::new(0, 3).validate(),
            Err(ConfigError::ZeroDimension { rows: 0, cols: 3 })
        );
        assert!(matches!(
            GameConfig::new(3, MAX_DIMENSION + 1).validate(),
            Err(ConfigError::TooLarge { .. })
        ));
    }

    #[test]
    fn partial_json_config_keeps_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{ "rows": 8 }"#).unwrap();
        assert_eq!(config, GameConfig::new(8, DEFAULT_COLS));

        let layout: LayoutConfig = serde_json::from_str(r#"{ "gridSpacing": 40 }"#).unwrap();
        assert_eq!(layout.grid_spacing, 40.0);
        assert_eq!(layout.marker_radius, 17.0);
    }
}
