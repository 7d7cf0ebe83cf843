use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            title: "PongChamp".into(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PaddleConfig {
    pub width: f32,
    pub height: f32,
    /// Vertical movement per simulation tick.
    pub step: f32,
    /// Distance from the right court edge to the player paddle's left edge.
    pub player_inset: f32,
    /// Distance from the left court edge to the opponent paddle's left edge.
    pub opponent_inset: f32,
}
impl Default for PaddleConfig {
    fn default() -> Self {
        Self {
            width: 20.0,
            height: 100.0,
            step: 5.0,
            player_inset: 60.0,
            opponent_inset: 30.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BallConfig {
    pub radius: f32,
    /// Per-axis displacement magnitude per simulation tick; only the sign
    /// ever changes at runtime.
    pub step: i32,
}
impl Default for BallConfig {
    fn default() -> Self {
        Self {
            radius: 10.0,
            step: 6,
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, Default, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub paddle: PaddleConfig,
    pub ball: BallConfig,
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    /// Validate the configuration returning a list of human-readable warning
    /// strings. These represent suspicious values but are not hard errors.
    /// Call at startup and log each warning with `warn!`.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.paddle.width <= 0.0 || self.paddle.height <= 0.0 {
            w.push("paddle dimensions must be > 0".into());
        }
        if self.paddle.height >= self.window.height {
            w.push(format!(
                "paddle height {} fills the whole court ({})",
                self.paddle.height, self.window.height
            ));
        }
        if self.paddle.step <= 0.0 {
            w.push("paddle.step must be > 0; paddles cannot move".into());
        }
        if self.paddle.player_inset + self.paddle.opponent_inset >= self.window.width {
            w.push("paddle insets overlap; paddles would swap sides".into());
        }
        if self.ball.radius <= 0.0 {
            w.push("ball.radius must be > 0".into());
        }
        if self.ball.step == 0 {
            w.push("ball.step is 0; the ball will never move".into());
        }
        if self.ball.step.unsigned_abs() as f32 > self.paddle.width {
            w.push(format!(
                "ball.step {} exceeds paddle width {}; the ball can pass through a paddle in one tick",
                self.ball.step, self.paddle.width
            ));
        }
        w
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_sample_config() {
        let sample = r#"(
            window: (width: 800.0, height: 600.0, title: "Test"),
            paddle: (
                width: 20.0,
                height: 100.0,
                step: 5.0,
                player_inset: 60.0,
                opponent_inset: 30.0,
            ),
            ball: (radius: 10.0, step: 6),
        )"#;
        let mut file = tempfile::NamedTempFile::new().expect("tmp file");
        file.write_all(sample.as_bytes()).unwrap();
        let cfg = GameConfig::load_from_file(file.path()).expect("parse config");
        assert_eq!(cfg.window.width, 800.0);
        assert_eq!(cfg.window.title, "Test");
        assert_eq!(cfg.paddle.height, 100.0);
        assert_eq!(cfg.ball.step, 6);
        assert!(
            cfg.validate().is_empty(),
            "expected no validation warnings for sample config"
        );
    }

    #[test]
    fn partial_config_fills_defaults() {
        let sample = r#"(window: (title: "Tiny"))"#;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(sample.as_bytes()).unwrap();
        let cfg = GameConfig::load_from_file(file.path()).expect("parse config");
        assert_eq!(cfg.window.title, "Tiny");
        assert_eq!(cfg.window.width, WindowConfig::default().width);
        assert_eq!(cfg.ball.radius, BallConfig::default().radius);
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = GameConfig::load_from_file("this/file/does/not/exist.ron");
        assert!(err.is_err());
    }

    #[test]
    fn validate_detects_warnings() {
        let bad = GameConfig {
            window: WindowConfig {
                width: -100.0,
                height: 0.0,
                title: "Bad".into(),
            },
            paddle: PaddleConfig {
                width: 2.0,
                height: 0.0,
                step: 0.0,
                player_inset: 500.0,
                opponent_inset: 500.0,
            },
            ball: BallConfig {
                radius: 0.0,
                step: 0,
            },
        };
        let warnings = bad.validate();
        let joined = warnings.join(" | ");
        assert!(joined.contains("window dimensions must be > 0"));
        assert!(joined.contains("paddle dimensions must be > 0"));
        assert!(joined.contains("paddle.step must be > 0"));
        assert!(joined.contains("paddle insets overlap"));
        assert!(joined.contains("ball.radius must be > 0"));
        assert!(joined.contains("ball.step is 0"));
        assert!(
            warnings.len() >= 6,
            "expected many warnings, got {}: {joined}",
            warnings.len()
        );
    }
}
