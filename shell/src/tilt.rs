//! Pointer-driven tilt and parallax transforms.
//!
//! These are stateless per-frame helpers for the hover effects on content
//! panels: the rendering layer calls them directly with the current
//! pointer position and formats the result into a CSS transform. They are
//! deliberately not part of the carousel engine.

use serde::{Deserialize, Serialize};

/// Tuning for the tilt effect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TiltConfig {
    /// Maximum rotation on either axis, in degrees
    pub max_tilt_deg: f64,
    /// Maximum parallax translation, in pixels
    pub parallax_depth: f64,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            max_tilt_deg: 10.0,
            parallax_depth: 20.0,
        }
    }
}

/// Rotation to apply to a tilted panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TiltTransform {
    pub rotate_x_deg: f64,
    pub rotate_y_deg: f64,
}

/// Normalize a pointer coordinate to `[-1, 1]` relative to the element
/// center. Degenerate extents and non-finite input collapse to 0.
fn normalized_offset(pointer: f64, extent: f64) -> f64 {
    if !pointer.is_finite() || !extent.is_finite() || extent <= 0.0 {
        return 0.0;
    }
    ((pointer / extent) * 2.0 - 1.0).clamp(-1.0, 1.0)
}

/// Rotation for a pointer at `(pointer_x, pointer_y)` inside an element of
/// `width` by `height`. Pointing at the center is flat; edges reach the
/// configured maximum tilt.
pub fn tilt_transform(
    pointer_x: f64,
    pointer_y: f64,
    width: f64,
    height: f64,
    config: &TiltConfig,
) -> TiltTransform {
    let nx = normalized_offset(pointer_x, width);
    let ny = normalized_offset(pointer_y, height);
    TiltTransform {
        // Vertical pointer motion rotates around the X axis, inverted so
        // the panel leans toward the cursor
        rotate_x_deg: -ny * config.max_tilt_deg,
        rotate_y_deg: nx * config.max_tilt_deg,
    }
}

/// Parallax translation opposing the pointer, scaled by the configured
/// depth. Returns `(dx, dy)` in pixels.
pub fn parallax_offset(
    pointer_x: f64,
    pointer_y: f64,
    width: f64,
    height: f64,
    config: &TiltConfig,
) -> (f64, f64) {
    let nx = normalized_offset(pointer_x, width);
    let ny = normalized_offset(pointer_y, height);
    (-nx * config.parallax_depth, -ny * config.parallax_depth)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_is_flat() {
        let transform = tilt_transform(200.0, 100.0, 400.0, 200.0, &TiltConfig::default());
        assert_eq!(transform.rotate_x_deg, 0.0);
        assert_eq!(transform.rotate_y_deg, 0.0);
    }

    #[test]
    fn corners_reach_max_tilt() {
        let config = TiltConfig::default();

        let transform = tilt_transform(400.0, 0.0, 400.0, 200.0, &config);
        assert_eq!(transform.rotate_y_deg, config.max_tilt_deg);
        assert_eq!(transform.rotate_x_deg, config.max_tilt_deg);

        let transform = tilt_transform(0.0, 200.0, 400.0, 200.0, &config);
        assert_eq!(transform.rotate_y_deg, -config.max_tilt_deg);
        assert_eq!(transform.rotate_x_deg, -config.max_tilt_deg);
    }

    #[test]
    fn pointer_outside_the_element_clamps() {
        let config = TiltConfig::default();
        let transform = tilt_transform(1_000.0, -500.0, 400.0, 200.0, &config);
        assert_eq!(transform.rotate_y_deg, config.max_tilt_deg);
        assert_eq!(transform.rotate_x_deg, config.max_tilt_deg);
    }

    #[test]
    fn degenerate_extents_are_flat() {
        let config = TiltConfig::default();
        let transform = tilt_transform(10.0, 10.0, 0.0, -5.0, &config);
        assert_eq!(transform.rotate_x_deg, 0.0);
        assert_eq!(transform.rotate_y_deg, 0.0);

        let transform = tilt_transform(f64::NAN, 10.0, 400.0, 200.0, &config);
        assert_eq!(transform.rotate_y_deg, 0.0);
    }

    #[test]
    fn parallax_opposes_the_pointer() {
        let config = TiltConfig::default();
        let (dx, dy) = parallax_offset(400.0, 200.0, 400.0, 200.0, &config);
        assert_eq!(dx, -config.parallax_depth);
        assert_eq!(dy, -config.parallax_depth);

        let (dx, dy) = parallax_offset(200.0, 100.0, 400.0, 200.0, &config);
        assert_eq!((dx, dy), (0.0, 0.0));
    }

    #[test]
    fn serialization_roundtrip() {
        let config = TiltConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("maxTiltDeg"));

        let parsed: TiltConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }
}
