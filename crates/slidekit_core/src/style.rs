//! Render-ready style descriptors
//!
//! Engines derive an `AnimationStyle` from their state on every access. The
//! host applies it to the sliding track element: `width` and `left` position
//! the resting track, `transform` and `transition` describe the motion that is
//! currently in flight.

use std::fmt;
use std::time::Duration;

use serde::Serialize;

use crate::easing::Easing;

/// A horizontal length
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "unit", content = "value", rename_all = "snake_case")]
pub enum Length {
    Px(f32),
    Percent(f32),
}

impl Length {
    /// Numeric value regardless of unit
    pub fn value(&self) -> f32 {
        match *self {
            Length::Px(v) | Length::Percent(v) => v,
        }
    }

    pub fn is_px(&self) -> bool {
        matches!(self, Length::Px(_))
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // -0 would render as "-0px"
        let normalize = |v: f32| if v == 0.0 { 0.0 } else { v };
        match *self {
            Length::Px(v) => write!(f, "{}px", normalize(v)),
            Length::Percent(v) => write!(f, "{}%", normalize(v)),
        }
    }
}

/// A timed transition on the `transform` property
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Transition {
    #[serde(rename = "duration_ms", serialize_with = "serialize_millis")]
    pub duration: Duration,
    pub easing: Easing,
}

impl Transition {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    /// Eased progress after `elapsed` of this transition
    pub fn progress(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.easing.sample(t)
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "transform {}ms {}",
            self.duration.as_millis(),
            self.easing
        )
    }
}

fn serialize_millis<S: serde::Serializer>(
    duration: &Duration,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(duration.as_millis() as u64)
}

/// Style for the sliding track element
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AnimationStyle {
    /// Track width
    pub width: Length,
    /// Resting horizontal position of the track
    pub left: Length,
    /// `translateX` distance, if any
    pub transform: Option<Length>,
    /// Timed transition applied to the transform
    pub transition: Option<Transition>,
}

impl AnimationStyle {
    /// A resting style with no transform or transition
    pub fn resting(width: Length, left: Length) -> Self {
        Self {
            width,
            left,
            transform: None,
            transition: None,
        }
    }

    /// Check whether a timed transition is in flight
    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Render as CSS declarations, e.g. for an inline `style` attribute
    pub fn to_css(&self) -> String {
        let mut css = format!("width: {}; left: {};", self.width, self.left);
        if let Some(transition) = &self.transition {
            css.push_str(&format!(" transition: {};", transition));
        }
        if let Some(translate) = &self.transform {
            css.push_str(&format!(" transform: translateX({});", translate));
        }
        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_display() {
        assert_eq!(Length::Px(-50.0).to_string(), "-50px");
        assert_eq!(Length::Px(-0.0).to_string(), "0px");
        assert_eq!(Length::Percent(140.0).to_string(), "140%");
        assert_eq!(Length::Percent(12.5).to_string(), "12.5%");
    }

    #[test]
    fn test_transition_display() {
        let transition = Transition::new(Duration::from_millis(400), Easing::EASE_OUT_CIRC);
        assert_eq!(
            transition.to_string(),
            "transform 400ms cubic-bezier(0.075, 0.82, 0.165, 1)"
        );
    }

    #[test]
    fn test_zero_duration_transition_is_complete() {
        let transition = Transition::new(Duration::ZERO, Easing::Linear);
        assert_eq!(transition.progress(Duration::ZERO), 1.0);
    }

    #[test]
    fn test_style_to_css() {
        let resting = AnimationStyle::resting(Length::Px(600.0), Length::Px(-100.0));
        assert_eq!(resting.to_css(), "width: 600px; left: -100px;");
        assert!(!resting.is_animating());

        let moving = AnimationStyle {
            transform: Some(Length::Px(-50.0)),
            transition: Some(Transition::new(
                Duration::from_millis(400),
                Easing::EASE_OUT_CIRC,
            )),
            ..resting
        };
        assert_eq!(
            moving.to_css(),
            "width: 600px; left: -100px; transition: transform 400ms cubic-bezier(0.075, 0.82, 0.165, 1); transform: translateX(-50px);"
        );
    }

    #[test]
    fn test_style_serializes_to_json() {
        let style = AnimationStyle::resting(Length::Percent(140.0), Length::Percent(-20.0));
        let json = serde_json::to_value(style).unwrap();
        assert_eq!(json["width"]["unit"], "percent");
        assert_eq!(json["width"]["value"], 140.0);
        assert!(json["transition"].is_null());
    }
}
