use serde::{Deserialize, Serialize};

/// Default target aspect ratio: 16:9.
pub const TARGET_RATIO: f64 = 16.0 / 9.0;
/// Default tolerance for the ratio comparison (±2% of the target).
pub const TOLERANCE: f64 = 0.02;

/// Immutable classification policy: a target ratio and a relative tolerance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RatioPolicy {
    pub target: f64,
    pub tolerance: f64,
}

impl Default for RatioPolicy {
    fn default() -> Self {
        Self {
            target: TARGET_RATIO,
            tolerance: TOLERANCE,
        }
    }
}

/// Outcome of one ratio check. Recomputed per capture, never cached.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Decision {
    pub accepted: bool,
    pub ratio: f64,
}

impl RatioPolicy {
    /// Classifies a capture's dimensions against the target ratio.
    ///
    /// Orientation is folded by taking larger/smaller, so 1920×1080 and
    /// 1080×1920 produce the same ratio. A zero dimension means the capture
    /// cannot be trusted and is rejected rather than reported as an error.
    pub fn evaluate(&self, width: u32, height: u32) -> Decision {
        if width == 0 || height == 0 {
            return Decision {
                accepted: false,
                ratio: 0.0,
            };
        }

        let ratio = normalized_ratio(width, height);
        Decision {
            accepted: (ratio - self.target).abs() <= self.target * self.tolerance,
            ratio,
        }
    }
}

/// Aspect ratio normalized to always be >= 1.0 (larger over smaller).
fn normalized_ratio(width: u32, height: u32) -> f64 {
    let w = width as f64;
    let h = height as f64;
    if w > h {
        w / h
    } else {
        h / w
    }
}
