//! Entrance-animation data model
//!
//! Everything here is plain data. An [`AnimationSpec`] describes a single one-shot
//! transition (initial state, target state, delay, duration); the rendering layer
//! hands it to the browser, which owns all timing and interpolation.

use serde::{Deserialize, Serialize};

/// Neutral opacity used when a state leaves opacity unset
pub const NEUTRAL_OPACITY: f64 = 1.0;

/// Neutral vertical offset in pixels
pub const NEUTRAL_Y: f64 = 0.0;

/// Neutral scale factor
pub const NEUTRAL_SCALE: f64 = 1.0;

/// Errors raised when motion data is authored with values that have no visual meaning
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MotionError {
    #[error("Invalid stagger policy: {reason}")]
    InvalidPolicy { reason: String },

    #[error("Invalid transition timing: {reason}")]
    InvalidTiming { reason: String },

    #[error("Invalid visual state: {reason}")]
    InvalidVisualState { reason: String },
}

/// Snapshot of the animatable properties of an element.
///
/// Unset properties are left alone by the animation and resolve to their
/// neutral values (opacity 1, offset 0, scale 1).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct VisualState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    /// Vertical offset in pixels, negative is up
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
}

impl VisualState {
    pub const fn new() -> Self {
        Self {
            opacity: None,
            y: None,
            scale: None,
        }
    }

    pub const fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub const fn y(mut self, y: f64) -> Self {
        self.y = Some(y);
        self
    }

    pub const fn scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn resolved_opacity(&self) -> f64 {
        self.opacity.unwrap_or(NEUTRAL_OPACITY)
    }

    pub fn resolved_y(&self) -> f64 {
        self.y.unwrap_or(NEUTRAL_Y)
    }

    pub fn resolved_scale(&self) -> f64 {
        self.scale.unwrap_or(NEUTRAL_SCALE)
    }

    /// Check that opacity lies in [0, 1], scale is positive and all values are finite
    pub fn validate(&self) -> Result<(), MotionError> {
        if let Some(opacity) = self.opacity {
            if !opacity.is_finite() || !(0.0..=1.0).contains(&opacity) {
                return Err(MotionError::InvalidVisualState {
                    reason: format!("opacity must be within [0, 1], got {opacity}"),
                });
            }
        }
        if let Some(y) = self.y {
            if !y.is_finite() {
                return Err(MotionError::InvalidVisualState {
                    reason: format!("vertical offset must be finite, got {y}"),
                });
            }
        }
        if let Some(scale) = self.scale {
            if !scale.is_finite() || scale <= 0.0 {
                return Err(MotionError::InvalidVisualState {
                    reason: format!("scale must be positive, got {scale}"),
                });
            }
        }
        Ok(())
    }
}

/// Timing of a one-shot transition, in seconds from mount
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub delay: f64,
    pub duration: f64,
}

impl Transition {
    pub const fn new(delay: f64, duration: f64) -> Self {
        Self { delay, duration }
    }

    pub fn validate(&self) -> Result<(), MotionError> {
        if !self.delay.is_finite() || self.delay < 0.0 {
            return Err(MotionError::InvalidTiming {
                reason: format!("delay must be non-negative, got {}", self.delay),
            });
        }
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Err(MotionError::InvalidTiming {
                reason: format!("duration must be positive, got {}", self.duration),
            });
        }
        Ok(())
    }
}

/// One element's entrance: held at `initial` until the delay elapses, then
/// interpolated to `target` over the duration and held there for good.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawAnimationSpec")]
pub struct AnimationSpec {
    initial: VisualState,
    target: VisualState,
    transition: Transition,
}

/// Unchecked wire form; deserialization goes through [`AnimationSpec::new`]
#[derive(Deserialize)]
struct RawAnimationSpec {
    initial: VisualState,
    target: VisualState,
    transition: Transition,
}

impl TryFrom<RawAnimationSpec> for AnimationSpec {
    type Error = MotionError;

    fn try_from(raw: RawAnimationSpec) -> Result<Self, Self::Error> {
        Self::new(raw.initial, raw.target, raw.transition)
    }
}

impl AnimationSpec {
    /// Build a spec, rejecting states or timings with no visual meaning
    pub fn new(
        initial: VisualState,
        target: VisualState,
        transition: Transition,
    ) -> Result<Self, MotionError> {
        initial.validate()?;
        target.validate()?;
        transition.validate()?;
        Ok(Self::from_parts(initial, target, transition))
    }

    /// Assemble a spec from parts the caller has already validated
    pub(crate) const fn from_parts(
        initial: VisualState,
        target: VisualState,
        transition: Transition,
    ) -> Self {
        Self {
            initial,
            target,
            transition,
        }
    }

    pub fn initial(&self) -> &VisualState {
        &self.initial
    }

    pub fn target(&self) -> &VisualState {
        &self.target
    }

    pub fn transition(&self) -> &Transition {
        &self.transition
    }

    pub fn delay(&self) -> f64 {
        self.transition.delay
    }

    pub fn duration(&self) -> f64 {
        self.transition.duration
    }

    /// Seconds after mount at which the element reaches its target state
    pub fn settles_at(&self) -> f64 {
        self.transition.delay + self.transition.duration
    }

    /// Visual state `elapsed` seconds after mount, interpolated linearly.
    ///
    /// Only properties set on either end are reported. A NaN `elapsed` is
    /// treated as mount time.
    pub fn sample(&self, elapsed: f64) -> VisualState {
        let progress = if elapsed.is_nan() || elapsed <= self.transition.delay {
            0.0
        } else if elapsed >= self.settles_at() {
            1.0
        } else {
            (elapsed - self.transition.delay) / self.transition.duration
        };

        let lerp = |from: f64, to: f64| from + (to - from) * progress;
        let animated = |a: Option<f64>, b: Option<f64>| a.is_some() || b.is_some();

        VisualState {
            opacity: animated(self.initial.opacity, self.target.opacity).then(|| {
                lerp(
                    self.initial.resolved_opacity(),
                    self.target.resolved_opacity(),
                )
            }),
            y: animated(self.initial.y, self.target.y)
                .then(|| lerp(self.initial.resolved_y(), self.target.resolved_y())),
            scale: animated(self.initial.scale, self.target.scale)
                .then(|| lerp(self.initial.resolved_scale(), self.target.resolved_scale())),
        }
    }

    /// Inline CSS consumed by the `velix-motion-enter` keyframes.
    ///
    /// The fill mode `both` keeps the initial state during the delay and the
    /// target state after the animation ends.
    pub fn to_css_style(&self) -> String {
        format!(
            "--motion-from-opacity:{};--motion-to-opacity:{};\
             --motion-from-y:{}px;--motion-to-y:{}px;\
             --motion-from-scale:{};--motion-to-scale:{};\
             animation:velix-motion-enter {}ms ease-out {}ms both",
            css_number(self.initial.resolved_opacity()),
            css_number(self.target.resolved_opacity()),
            css_number(self.initial.resolved_y()),
            css_number(self.target.resolved_y()),
            css_number(self.initial.resolved_scale()),
            css_number(self.target.resolved_scale()),
            to_millis(self.transition.duration),
            to_millis(self.transition.delay),
        )
    }
}

fn to_millis(seconds: f64) -> i64 {
    (seconds * 1000.0).round() as i64
}

/// Format with at most three decimals and no trailing zeros
fn css_number(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    // avoid "-0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{rounded}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fade_up() -> AnimationSpec {
        AnimationSpec::new(
            VisualState::new().opacity(0.0).y(-20.0),
            VisualState::new().opacity(1.0).y(0.0),
            Transition::new(0.0, 0.8),
        )
        .unwrap()
    }

    #[test]
    fn test_visual_state_builder() {
        let state = VisualState::new().opacity(0.5).scale(0.9);

        assert_eq!(state.opacity, Some(0.5));
        assert_eq!(state.y, None);
        assert_eq!(state.scale, Some(0.9));
        assert_eq!(state.resolved_y(), NEUTRAL_Y);
    }

    #[test]
    fn test_visual_state_rejects_out_of_range_opacity() {
        let result = VisualState::new().opacity(1.5).validate();
        assert!(matches!(result, Err(MotionError::InvalidVisualState { .. })));

        let result = VisualState::new().opacity(-0.1).validate();
        assert!(matches!(result, Err(MotionError::InvalidVisualState { .. })));
    }

    #[test]
    fn test_visual_state_rejects_non_positive_scale() {
        assert!(VisualState::new().scale(0.0).validate().is_err());
        assert!(VisualState::new().scale(-1.0).validate().is_err());
        assert!(VisualState::new().scale(0.01).validate().is_ok());
    }

    #[test]
    fn test_visual_state_rejects_nan() {
        assert!(VisualState::new().y(f64::NAN).validate().is_err());
        assert!(VisualState::new().opacity(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_transition_validation() {
        assert!(Transition::new(0.0, 0.5).validate().is_ok());

        let negative_delay = Transition::new(-0.1, 0.5).validate();
        assert!(matches!(negative_delay, Err(MotionError::InvalidTiming { .. })));

        let zero_duration = Transition::new(0.0, 0.0).validate();
        assert!(matches!(zero_duration, Err(MotionError::InvalidTiming { .. })));

        let negative_duration = Transition::new(0.0, -0.5).validate();
        assert!(matches!(negative_duration, Err(MotionError::InvalidTiming { .. })));
    }

    #[test]
    fn test_spec_new_rejects_invalid_target() {
        let result = AnimationSpec::new(
            VisualState::new().opacity(0.0),
            VisualState::new().opacity(2.0),
            Transition::new(0.0, 0.5),
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_settles_at() {
        let spec = AnimationSpec::new(
            VisualState::new().opacity(0.0),
            VisualState::new().opacity(1.0),
            Transition::new(0.2, 0.8),
        )
        .unwrap();

        assert!((spec.settles_at() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_sample_holds_initial_state_during_delay() {
        let spec = AnimationSpec::new(
            VisualState::new().opacity(0.0),
            VisualState::new().opacity(1.0),
            Transition::new(0.4, 0.5),
        )
        .unwrap();

        assert_eq!(spec.sample(0.0).opacity, Some(0.0));
        assert_eq!(spec.sample(0.4).opacity, Some(0.0));
    }

    #[test]
    fn test_sample_interpolates_and_settles() {
        let spec = fade_up();

        let halfway = spec.sample(0.4);
        assert!((halfway.opacity.unwrap() - 0.5).abs() < 1e-9);
        assert!((halfway.y.unwrap() + 10.0).abs() < 1e-9);

        assert_eq!(spec.sample(0.8), *spec.target());
        assert_eq!(spec.sample(60.0), *spec.target());
    }

    #[test]
    fn test_sample_only_reports_animated_properties() {
        let spec = fade_up();
        assert_eq!(spec.sample(0.1).scale, None);
    }

    #[test]
    fn test_css_style_carries_states_and_timing() {
        let style = fade_up().to_css_style();

        assert!(style.contains("--motion-from-opacity:0;"));
        assert!(style.contains("--motion-to-opacity:1;"));
        assert!(style.contains("--motion-from-y:-20px;"));
        assert!(style.contains("--motion-to-y:0px;"));
        assert!(style.contains("--motion-from-scale:1;"));
        assert!(style.ends_with("animation:velix-motion-enter 800ms ease-out 0ms both"));
    }

    #[test]
    fn test_css_style_rounds_float_noise() {
        // 3 * 0.2 is not exactly 0.6 in binary floating point
        let spec = AnimationSpec::new(
            VisualState::new().scale(0.9),
            VisualState::new().scale(1.0),
            Transition::new(3.0 * 0.2, 0.5),
        )
        .unwrap();

        assert!(spec.to_css_style().contains("500ms ease-out 600ms both"));
        assert!(spec.to_css_style().contains("--motion-from-scale:0.9;"));
    }

    #[test]
    fn test_error_messages() {
        let err = MotionError::InvalidPolicy {
            reason: "interval must be non-negative".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid stagger policy: interval must be non-negative"
        );
    }

    #[test]
    fn test_sample_nan_elapsed_holds_initial_state() {
        let spec = fade_up();
        assert_eq!(spec.sample(f64::NAN), *spec.initial());
        assert_eq!(spec.sample(f64::INFINITY), *spec.target());
        assert_eq!(spec.sample(f64::NEG_INFINITY), *spec.initial());
    }

    #[test]
    fn test_deserialize_rejects_invalid_spec() {
        let json = r#"{"initial":{"opacity":5.0},"target":{"scale":-2.0},"transition":{"delay":-1.0,"duration":-0.5}}"#;
        assert!(serde_json::from_str::<AnimationSpec>(json).is_err());

        let json = r#"{"initial":{"opacity":0.0},"target":{"opacity":1.0},"transition":{"delay":-1.0,"duration":0.5}}"#;
        assert!(serde_json::from_str::<AnimationSpec>(json).is_err());
    }

    #[test]
    fn test_deserialize_valid_spec_goes_through_new() {
        let json = serde_json::to_string(&fade_up()).unwrap();
        let spec: AnimationSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(spec, fade_up());
    }

    #[test]
    fn test_visual_state_serializes_only_set_properties() {
        let json = serde_json::to_string(&VisualState::new().opacity(0.0)).unwrap();
        assert_eq!(json, r#"{"opacity":0.0}"#);
    }
}
