//! Motion preference resolution
//!
//! Animated components never read the customizer directly. They receive a
//! [`MotionPreference`] and derive durations from it.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Lowest motion intensity (animations off)
pub const MOTION_MIN: i32 = 0;

/// Highest motion intensity
pub const MOTION_MAX: i32 = 10;

/// Intensity a fresh customizer starts with
pub const MOTION_DEFAULT: i32 = 5;

/// Intensity at which baseline durations are used unchanged
pub const MOTION_NEUTRAL: i32 = 5;

/// Resolved motion contract handed to animated components
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotionPreference {
    /// The stored motion intensity, passed through
    pub scale: i32,
    /// False when intensity is zero or the system asks for reduced motion
    pub should_animate: bool,
    /// The system reduced-motion flag
    pub prefers_reduced_motion: bool,
}

impl MotionPreference {
    /// Combine a stored intensity with the system reduced-motion flag
    pub fn resolve(motion_intensity: i32, system_prefers_reduced_motion: bool) -> Self {
        Self {
            scale: motion_intensity,
            should_animate: motion_intensity > MOTION_MIN && !system_prefers_reduced_motion,
            prefers_reduced_motion: system_prefers_reduced_motion,
        }
    }

    /// Factor applied to baseline durations: `5 / scale`, or `0` when the scale is off
    ///
    /// Out-of-range scales are clamped to `[0, 10]` first.
    pub fn duration_multiplier(&self) -> f32 {
        let scale = self.scale.clamp(MOTION_MIN, MOTION_MAX);
        if scale == MOTION_MIN {
            0.0
        } else {
            MOTION_NEUTRAL as f32 / scale as f32
        }
    }

    /// Effective duration for an animation whose neutral duration is `baseline`
    ///
    /// Returns [`Duration::ZERO`] whenever the component should not animate.
    pub fn scale_duration(&self, baseline: Duration) -> Duration {
        let scale = self.scale.clamp(MOTION_MIN, MOTION_MAX);
        if !self.should_animate || scale == MOTION_MIN {
            return Duration::ZERO;
        }
        let (neutral, scale) = (MOTION_NEUTRAL as u32, scale as u32);
        match baseline.checked_mul(neutral) {
            Some(stretched) => stretched / scale,
            None => (baseline / scale).saturating_mul(neutral),
        }
    }
}

impl Default for MotionPreference {
    fn default() -> Self {
        Self::resolve(MOTION_DEFAULT, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_scenarios() {
        let p = MotionPreference::resolve(5, false);
        assert_eq!((p.scale, p.should_animate), (5, true));

        let p = MotionPreference::resolve(0, false);
        assert_eq!((p.scale, p.should_animate), (0, false));

        let p = MotionPreference::resolve(10, true);
        assert_eq!((p.scale, p.should_animate), (10, false));
        assert!(p.prefers_reduced_motion);

        let p = MotionPreference::resolve(0, true);
        assert_eq!((p.scale, p.should_animate), (0, false));
    }

    #[test]
    fn test_duration_scaling() {
        let baseline = Duration::from_millis(300);

        assert_eq!(
            MotionPreference::resolve(5, false).scale_duration(baseline),
            baseline
        );
        assert_eq!(
            MotionPreference::resolve(10, false).scale_duration(baseline),
            Duration::from_millis(150)
        );
        assert_eq!(
            MotionPreference::resolve(0, false).scale_duration(baseline),
            Duration::ZERO
        );
        assert_eq!(
            MotionPreference::resolve(10, true).scale_duration(baseline),
            Duration::ZERO
        );
    }

    #[test]
    fn test_huge_baseline_saturates() {
        assert_eq!(
            MotionPreference::resolve(1, false).scale_duration(Duration::MAX),
            Duration::MAX
        );
        assert_eq!(
            MotionPreference::resolve(10, false).scale_duration(Duration::MAX),
            (Duration::MAX / 10) * 5
        );
    }

    #[test]
    fn test_out_of_range_scale_is_clamped() {
        assert_eq!(MotionPreference::resolve(15, false).duration_multiplier(), 0.5);
        let negative = MotionPreference::resolve(-3, false);
        assert!(!negative.should_animate);
        assert_eq!(negative.duration_multiplier(), 0.0);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_string(&MotionPreference::resolve(7, false)).unwrap();
        assert_eq!(
            json,
            r#"{"scale":7,"shouldAnimate":true,"prefersReducedMotion":false}"#
        );
    }
}
