//! Circular swipe slider with autoplay
//!
//! `SwipeSlide` shows one of `length` equal-width slides on a circular track.
//! Slides change by dragging past a threshold, by calling the navigation
//! methods, or on an autoplay timer. Moving from the last slide to the first
//! (and back) steps the short way around instead of rewinding the track.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use slidekit_core::SwipeDirection;
//! use slidekit_widgets::swipe_slide::{SwipeSlide, SwipeSlideConfig};
//!
//! let config = SwipeSlideConfig::new(5, Duration::from_secs(3), 100.0);
//! let mut slider = SwipeSlide::new(config).unwrap();
//!
//! // Drag 120px left on a 300px slide, then let go
//! slider.drag(-120.0, 300.0);
//! slider.release(-120.0, 300.0, SwipeDirection::Left);
//! assert_eq!(slider.active_index(), 1);
//!
//! slider.advance(Duration::from_millis(400));
//! assert_eq!(slider.current(), 1);
//! ```
//!
//! # Features
//!
//! - **Threshold commits**: Short drags snap back, long drags change slide
//! - **Drag limit**: Live offset is capped relative to the slide width
//! - **Autoplay**: Restarts its countdown after any interaction or settle
//! - **Instant jumps**: `slide_to` skips the transition entirely

use std::time::Duration;

use serde::{Deserialize, Serialize};

use slidekit_core::{
    AnimationStyle, ConfigError, Easing, GestureEvent, Length, StateTransitions, SwipeDirection,
    TimerId, TimerQueue, TimerService, TimerTask, Transition,
};

use crate::track;

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for a swipe slider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwipeSlideConfig {
    /// Number of slides (must be at least 1)
    pub length: usize,
    /// Autoplay delay in milliseconds
    pub interval_ms: u64,
    /// Slide width as a percentage of the viewport (0 = full width)
    pub child_width_percent: f32,
    /// Advance automatically every interval (default: true)
    pub auto_scroll: bool,
    /// Centre the current slide in the viewport (default: false)
    pub align_center: bool,
    /// Fraction of the slide width a swipe must travel to commit (default: 0.3)
    pub swipe_threshold: f32,
    /// Maximum live drag as a multiple of the slide width (default: 1.2)
    pub swipe_limit: f32,
    /// Length of a slide transition in milliseconds (default: 400)
    pub transition_ms: u64,
    /// Timing curve for slide changes
    pub smooth_easing: Easing,
    /// Timing curve for snapping back after a cancelled drag
    pub elastic_easing: Easing,
}

impl Default for SwipeSlideConfig {
    fn default() -> Self {
        Self {
            length: 1,
            interval_ms: 5_000,
            child_width_percent: 100.0,
            auto_scroll: true,
            align_center: false,
            swipe_threshold: 0.3,
            swipe_limit: 1.2,
            transition_ms: 400,
            smooth_easing: Easing::EASE_OUT_CIRC,
            elastic_easing: Easing::EASE_OUT_CIRC,
        }
    }
}

impl SwipeSlideConfig {
    pub fn new(length: usize, interval: Duration, child_width_percent: f32) -> Self {
        Self {
            length,
            interval_ms: interval.as_millis() as u64,
            child_width_percent,
            ..Default::default()
        }
    }

    /// Enable or disable autoplay
    pub fn auto_scroll(mut self, enabled: bool) -> Self {
        self.auto_scroll = enabled;
        self
    }

    /// Centre the current slide
    pub fn align_center(mut self, enabled: bool) -> Self {
        self.align_center = enabled;
        self
    }

    pub fn swipe_threshold(mut self, threshold: f32) -> Self {
        self.swipe_threshold = threshold;
        self
    }

    pub fn swipe_limit(mut self, limit: f32) -> Self {
        self.swipe_limit = limit;
        self
    }

    /// Set the slide transition duration
    pub fn transition(mut self, duration: Duration) -> Self {
        self.transition_ms = duration.as_millis() as u64;
        self
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    /// Reject values that would break the track arithmetic
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.length == 0 {
            return Err(ConfigError::EmptyTrack);
        }
        if !(0.0..=100.0).contains(&self.child_width_percent) {
            return Err(ConfigError::ChildWidthOutOfRange(self.child_width_percent));
        }
        for (name, value) in [
            ("swipe_threshold", self.swipe_threshold),
            ("swipe_limit", self.swipe_limit),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidRatio { name, value });
            }
        }
        Ok(())
    }
}

// ============================================================================
// Phase
// ============================================================================

/// What the slider is doing
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum SlidePhase {
    /// At rest on the current slide
    #[default]
    Idle,
    /// Following the pointer
    Dragging { offset: f32 },
    /// Returning to rest after a drag that did not commit
    SnappingBack,
    /// Heading for `to`, either animated or as an instant jump
    ///
    /// `offset` is the drag that led here, if any. Its sign picks which way
    /// the animation runs.
    Transitioning {
        to: usize,
        animate: bool,
        offset: Option<f32>,
    },
}

/// Events that move a `SlidePhase`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlideEvent {
    /// Pointer moved; carries the capped offset
    Drag(f32),
    /// Pointer released short of the threshold
    Cancel,
    /// A new target was requested
    Retarget { to: usize, animate: bool },
    /// The transition elapsed
    Settled,
}

impl StateTransitions for SlidePhase {
    type Event = SlideEvent;

    fn on_event(&self, event: SlideEvent) -> Option<Self> {
        use SlidePhase::*;

        match (*self, event) {
            // Dragging during a transition only updates its offset
            (Transitioning { to, animate, .. }, SlideEvent::Drag(offset)) => Some(Transitioning {
                to,
                animate,
                offset: Some(offset),
            }),
            (_, SlideEvent::Drag(offset)) => Some(Dragging { offset }),

            (Transitioning { to, animate, .. }, SlideEvent::Cancel) => Some(Transitioning {
                to,
                animate,
                offset: Some(0.0),
            }),
            (_, SlideEvent::Cancel) => Some(SnappingBack),

            // Retargeting keeps whatever drag offset is live
            (phase, SlideEvent::Retarget { to, animate }) => Some(Transitioning {
                to,
                animate,
                offset: phase.offset(),
            }),

            (Transitioning { .. }, SlideEvent::Settled) => Some(Idle),
            (_, SlideEvent::Settled) => None,
        }
    }
}

impl SlidePhase {
    /// Live drag offset in pixels
    ///
    /// `Some(0.0)` marks a cancelled drag snapping back.
    pub fn offset(&self) -> Option<f32> {
        match *self {
            SlidePhase::Idle => None,
            SlidePhase::Dragging { offset } => Some(offset),
            SlidePhase::SnappingBack => Some(0.0),
            SlidePhase::Transitioning { offset, .. } => offset,
        }
    }
}

fn same_offset(a: Option<f32>, b: Option<f32>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

// ============================================================================
// Swipe Slide
// ============================================================================

/// Swipe slider engine
///
/// Feed it gestures and navigation calls, drive time through `advance`, and
/// apply `animation_style` to the track after every change.
pub struct SwipeSlide<T: TimerService = TimerQueue> {
    config: SwipeSlideConfig,
    current: usize,
    phase: SlidePhase,
    settle_timer: Option<TimerId>,
    autoplay_timer: Option<TimerId>,
    timers: T,
}

impl SwipeSlide<TimerQueue> {
    /// Create a slider on its own virtual clock
    pub fn new(config: SwipeSlideConfig) -> Result<Self, ConfigError> {
        Self::with_timers(config, TimerQueue::new())
    }
}

impl<T: TimerService> SwipeSlide<T> {
    /// Create a slider on a host-provided timer service
    ///
    /// Autoplay starts counting immediately.
    pub fn with_timers(config: SwipeSlideConfig, timers: T) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut slider = Self {
            config,
            current: 0,
            phase: SlidePhase::Idle,
            settle_timer: None,
            autoplay_timer: None,
            timers,
        };
        slider.rearm_autoplay();
        Ok(slider)
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Head for the slide after the current one
    pub fn slide_to_next(&mut self) {
        let to = track::next_index(self.config.length, self.current);
        self.request(to, self.should_animate());
    }

    /// Head for the slide before the current one
    pub fn slide_to_prev(&mut self) {
        let to = track::previous_index(self.config.length, self.current);
        self.request(to, self.should_animate());
    }

    /// Jump straight to `index` without a transition
    ///
    /// Indices past the end wrap around the track.
    pub fn slide_to(&mut self, index: usize) {
        self.request(index % self.config.length, false);
    }

    fn request(&mut self, to: usize, animate: bool) {
        if to == self.target_index() && animate == self.should_animate() {
            return;
        }

        self.phase.apply(SlideEvent::Retarget { to, animate });
        tracing::debug!(
            "swipe slide {} -> {}{}",
            self.current,
            to,
            if animate { "" } else { " (instant)" }
        );

        let delay = if animate {
            self.config.transition_duration()
        } else {
            Duration::ZERO
        };
        if let Some(id) = self.settle_timer.take() {
            self.timers.cancel(id);
        }
        self.settle_timer = Some(self.timers.schedule(delay, TimerTask::Settle));
    }

    // =========================================================================
    // Gestures
    // =========================================================================

    /// Dispatch a gesture from the host's swipe source
    pub fn handle_gesture(&mut self, event: GestureEvent) {
        match event {
            GestureEvent::Move {
                delta_x,
                element_width,
            } => self.drag(delta_x, element_width),
            GestureEvent::Release {
                delta_x,
                element_width,
                direction,
            } => self.release(delta_x, element_width, direction),
        }
    }

    /// Follow the pointer, capped at `swipe_limit` slide widths
    pub fn drag(&mut self, delta_x: f32, element_width: f32) {
        if !delta_x.is_finite() || !element_width.is_finite() {
            return;
        }
        let limit = self.config.swipe_limit * element_width.max(0.0);
        let offset = delta_x.clamp(-limit, limit);

        let before = self.offset();
        self.phase.apply(SlideEvent::Drag(offset));
        tracing::trace!("swipe drag delta_x={:.1} offset={:.1}", delta_x, offset);

        if !same_offset(before, self.offset()) {
            self.rearm_autoplay();
        }
    }

    /// Commit or cancel the drag
    ///
    /// Travel along `direction` of at least `swipe_threshold` slide widths
    /// changes slide; anything shorter snaps back.
    pub fn release(&mut self, delta_x: f32, element_width: f32, direction: SwipeDirection) {
        let threshold = element_width * self.config.swipe_threshold;
        let travel = direction.net_travel(delta_x);

        if travel >= threshold {
            tracing::debug!(
                "swipe committed: {:?} travel={:.1} threshold={:.1}",
                direction,
                travel,
                threshold
            );
            match direction {
                SwipeDirection::Left => self.slide_to_next(),
                SwipeDirection::Right => self.slide_to_prev(),
            }
        } else {
            tracing::debug!(
                "swipe cancelled: travel={:.1} threshold={:.1}",
                travel,
                threshold
            );
            let before = self.offset();
            self.phase.apply(SlideEvent::Cancel);
            if !same_offset(before, self.offset()) {
                self.rearm_autoplay();
            }
        }
    }

    // =========================================================================
    // Autoplay
    // =========================================================================

    /// Turn autoplay on or off
    pub fn set_auto_scroll(&mut self, enabled: bool) {
        if self.config.auto_scroll != enabled {
            self.config.auto_scroll = enabled;
            self.rearm_autoplay();
        }
    }

    /// Change the autoplay delay; the countdown restarts
    pub fn set_interval(&mut self, interval: Duration) {
        let interval_ms = interval.as_millis() as u64;
        if self.config.interval_ms != interval_ms {
            self.config.interval_ms = interval_ms;
            self.rearm_autoplay();
        }
    }

    fn rearm_autoplay(&mut self) {
        if let Some(id) = self.autoplay_timer.take() {
            self.timers.cancel(id);
        }
        if self.config.auto_scroll {
            let interval = self.config.interval();
            self.autoplay_timer = Some(self.timers.schedule(interval, TimerTask::Autoplay));
        }
    }

    // =========================================================================
    // Timers
    // =========================================================================

    /// Advance the clock, running any settle or autoplay that came due
    pub fn advance(&mut self, elapsed: Duration) {
        let until = self.timers.now() + elapsed;
        while let Some((id, task)) = self.timers.pop_due(until) {
            self.fire(id, task);
        }
        self.timers.advance_clock(until);
    }

    fn fire(&mut self, id: TimerId, task: TimerTask) {
        match task {
            TimerTask::Settle if self.settle_timer == Some(id) => {
                self.settle_timer = None;
                self.settle();
            }
            TimerTask::Autoplay if self.autoplay_timer == Some(id) => {
                self.autoplay_timer = None;
                if self.config.auto_scroll {
                    tracing::debug!("swipe autoplay tick at {}", self.current);
                    self.slide_to_next();
                }
            }
            _ => tracing::trace!("swipe slide ignoring stale {:?} timer", task),
        }
    }

    fn settle(&mut self) {
        let before = (self.current, self.offset());

        self.current = self.target_index();
        self.phase.apply(SlideEvent::Settled);
        tracing::debug!("swipe slide settled at {}", self.current);

        if before.0 != self.current || !same_offset(before.1, self.offset()) {
            self.rearm_autoplay();
        }
    }

    // =========================================================================
    // Derived state
    // =========================================================================

    pub fn config(&self) -> &SwipeSlideConfig {
        &self.config
    }

    /// Timer service driving this slider
    pub fn timers(&self) -> &T {
        &self.timers
    }

    pub fn length(&self) -> usize {
        self.config.length
    }

    /// Settled slide index
    pub fn current(&self) -> usize {
        self.current
    }

    /// Requested slide index; equals `current` when nothing is pending
    pub fn target_index(&self) -> usize {
        match self.phase {
            SlidePhase::Transitioning { to, .. } => to,
            _ => self.current,
        }
    }

    /// Index to highlight in slide indicators
    ///
    /// Moves to the requested slide as soon as it is requested rather than
    /// when the transition settles.
    pub fn active_index(&self) -> usize {
        self.target_index()
    }

    pub fn phase(&self) -> SlidePhase {
        self.phase
    }

    /// Live drag offset in pixels, `None` when at rest
    pub fn offset(&self) -> Option<f32> {
        self.phase.offset()
    }

    /// Whether the pending change uses the timed transition
    pub fn should_animate(&self) -> bool {
        match self.phase {
            SlidePhase::Transitioning { animate, .. } => animate,
            _ => true,
        }
    }

    /// Style for the track element
    pub fn animation_style(&self) -> AnimationStyle {
        let config = &self.config;
        let width = track::container_width(config.child_width_percent, config.length);
        let left = track::left_offset(config.child_width_percent, self.current, config.align_center);

        let mut style = AnimationStyle {
            width: Length::Percent(width),
            left: Length::Percent(-left),
            transform: Some(Length::Percent(0.0)),
            transition: None,
        };

        let target = self.target_index();
        if self.should_animate() && target != self.current {
            let distance =
                track::translate_x_distance(config.length, self.current, target, self.offset());
            style.transition = Some(Transition::new(
                config.transition_duration(),
                config.smooth_easing,
            ));
            style.transform = Some(Length::Percent(distance));
        } else if let Some(offset) = self.offset() {
            if offset != 0.0 {
                style.transform = Some(Length::Px(offset));
            } else {
                style.transition = Some(Transition::new(
                    config.transition_duration(),
                    config.elastic_easing,
                ));
            }
        }
        style
    }
}

impl<T: TimerService> Drop for SwipeSlide<T> {
    fn drop(&mut self) {
        for id in [self.settle_timer.take(), self.autoplay_timer.take()]
            .into_iter()
            .flatten()
        {
            self.timers.cancel(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: Duration = Duration::from_millis(400);
    const WIDTH: f32 = 300.0;

    fn slider(length: usize) -> SwipeSlide {
        let config = SwipeSlideConfig::new(length, Duration::from_secs(3), 20.0);
        SwipeSlide::new(config).unwrap()
    }

    fn manual(length: usize) -> SwipeSlide {
        let config = SwipeSlideConfig::new(length, Duration::from_secs(3), 20.0).auto_scroll(false);
        SwipeSlide::new(config).unwrap()
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_config_validation() {
        let ok = SwipeSlideConfig::new(3, Duration::from_secs(1), 50.0);
        assert!(ok.validate().is_ok());

        assert_eq!(
            SwipeSlideConfig { length: 0, ..ok }.validate(),
            Err(ConfigError::EmptyTrack)
        );
        assert_eq!(
            SwipeSlideConfig {
                child_width_percent: 120.0,
                ..ok
            }
            .validate(),
            Err(ConfigError::ChildWidthOutOfRange(120.0))
        );
        assert!(matches!(
            ok.swipe_threshold(f32::NAN).validate(),
            Err(ConfigError::InvalidRatio {
                name: "swipe_threshold",
                ..
            })
        ));
        assert!(SwipeSlide::new(SwipeSlideConfig { length: 0, ..ok }).is_err());
    }

    #[test]
    fn test_config_from_toml() {
        let config: SwipeSlideConfig = toml::from_str(
            r#"
            length = 4
            interval_ms = 2000
            child_width_percent = 80.0
            align_center = true
            "#,
        )
        .unwrap();

        assert_eq!(config.length, 4);
        assert_eq!(config.interval(), Duration::from_secs(2));
        assert!(config.align_center);
        assert!(config.auto_scroll);
        assert_eq!(config.swipe_threshold, 0.3);
        assert_eq!(config.transition_duration(), STEP);
    }

    #[test]
    fn test_initial_style() {
        let slider = manual(5);
        let style = slider.animation_style();

        assert_eq!(style.width, Length::Percent(140.0));
        assert_eq!(style.left, Length::Percent(-20.0));
        assert_eq!(style.transform, Some(Length::Percent(0.0)));
        assert_eq!(style.transition, None);
        assert_eq!(slider.phase(), SlidePhase::Idle);
    }

    #[test]
    fn test_slide_to_next_animates_then_settles() {
        let mut slider = manual(5);
        slider.slide_to_next();

        assert_eq!(slider.active_index(), 1);
        assert_eq!(slider.current(), 0);
        let style = slider.animation_style();
        assert!(style.is_animating());
        assert!(approx(style.transform.unwrap().value(), -100.0 / 7.0));

        slider.advance(STEP);
        assert_eq!(slider.current(), 1);
        assert_eq!(slider.offset(), None);
        let style = slider.animation_style();
        assert_eq!(style.left, Length::Percent(-40.0));
        assert_eq!(style.transition, None);
    }

    #[test]
    fn test_slide_to_prev_wraps_the_short_way() {
        let mut slider = manual(5);
        slider.slide_to_prev();

        assert_eq!(slider.active_index(), 4);
        let translate = slider.animation_style().transform.unwrap().value();
        assert!(approx(translate, 100.0 / 7.0));

        slider.advance(STEP);
        assert_eq!(slider.current(), 4);
        assert_eq!(slider.animation_style().left, Length::Percent(-100.0));
    }

    #[test]
    fn test_slide_to_is_instant() {
        let mut slider = manual(5);
        slider.slide_to(3);

        assert!(!slider.should_animate());
        assert_eq!(slider.active_index(), 3);
        assert_eq!(slider.animation_style().transition, None);

        slider.advance(Duration::ZERO);
        assert_eq!(slider.current(), 3);
        assert!(slider.should_animate());
        assert_eq!(slider.phase(), SlidePhase::Idle);
    }

    #[test]
    fn test_slide_to_wraps_out_of_range() {
        let mut slider = manual(5);
        slider.slide_to(7);
        slider.advance(Duration::ZERO);
        assert_eq!(slider.current(), 2);
    }

    #[test]
    fn test_retarget_keeps_instant_jump() {
        let mut slider = manual(5);
        slider.slide_to(3);
        slider.slide_to_next();

        // Still relative to the settled slide, still instant
        assert_eq!(slider.active_index(), 1);
        assert!(!slider.should_animate());
        slider.advance(Duration::ZERO);
        assert_eq!(slider.current(), 1);
    }

    #[test]
    fn test_drag_follows_pointer_up_to_limit() {
        let mut slider = manual(5);
        slider.drag(-50.0, WIDTH);

        assert_eq!(slider.offset(), Some(-50.0));
        let style = slider.animation_style();
        assert_eq!(style.transform, Some(Length::Px(-50.0)));
        assert_eq!(style.transition, None);

        slider.drag(-1_000.0, WIDTH);
        assert_eq!(slider.offset(), Some(-360.0));
        slider.drag(1_000.0, WIDTH);
        assert_eq!(slider.offset(), Some(360.0));
    }

    #[test]
    fn test_short_drag_snaps_back() {
        let mut slider = manual(5);
        slider.drag(-50.0, WIDTH);
        slider.release(-50.0, WIDTH, SwipeDirection::Left);

        assert_eq!(slider.current(), 0);
        assert_eq!(slider.target_index(), 0);
        assert_eq!(slider.offset(), Some(0.0));
        assert_eq!(slider.phase(), SlidePhase::SnappingBack);

        let style = slider.animation_style();
        assert_eq!(style.transform, Some(Length::Percent(0.0)));
        assert_eq!(
            style.transition.map(|t| t.to_string()),
            Some("transform 400ms cubic-bezier(0.075, 0.82, 0.165, 1)".to_string())
        );
    }

    #[test]
    fn test_long_drag_commits() {
        let mut slider = manual(5);
        slider.drag(-120.0, WIDTH);
        slider.release(-120.0, WIDTH, SwipeDirection::Left);

        assert_eq!(slider.target_index(), track::next_index(5, 0));
        let translate = slider.animation_style().transform.unwrap().value();
        assert!(approx(translate, -100.0 / 7.0));

        slider.advance(STEP);
        assert_eq!(slider.current(), 1);
        assert_eq!(slider.offset(), None);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let config = SwipeSlideConfig::new(5, Duration::from_secs(3), 20.0)
            .auto_scroll(false)
            .swipe_threshold(0.5);

        let mut slider = SwipeSlide::new(config).unwrap();
        slider.release(-150.0, WIDTH, SwipeDirection::Left);
        assert_eq!(slider.target_index(), 1);

        let mut slider = SwipeSlide::new(config).unwrap();
        slider.release(-149.0, WIDTH, SwipeDirection::Left);
        assert_eq!(slider.target_index(), 0);
    }

    #[test]
    fn test_right_swipe_goes_back() {
        let mut slider = manual(5);
        slider.drag(100.0, WIDTH);
        slider.release(100.0, WIDTH, SwipeDirection::Right);
        assert_eq!(slider.target_index(), 4);

        // Drag offset sign picks the direction: rightward drag, track moves right
        let translate = slider.animation_style().transform.unwrap().value();
        assert!(translate > 0.0);
    }

    #[test]
    fn test_release_against_direction_cancels() {
        let mut slider = manual(5);
        slider.release(200.0, WIDTH, SwipeDirection::Left);
        assert_eq!(slider.target_index(), 0);
        assert_eq!(slider.offset(), Some(0.0));
    }

    #[test]
    fn test_gesture_events_dispatch() {
        let mut slider = manual(5);
        slider.handle_gesture(GestureEvent::Move {
            delta_x: -150.0,
            element_width: WIDTH,
        });
        assert_eq!(slider.offset(), Some(-150.0));

        slider.handle_gesture(GestureEvent::Release {
            delta_x: -150.0,
            element_width: WIDTH,
            direction: SwipeDirection::Left,
        });
        assert_eq!(slider.active_index(), 1);
    }

    #[test]
    fn test_autoplay_advances_on_interval() {
        let mut slider = slider(5);

        slider.advance(Duration::from_millis(2_999));
        assert_eq!(slider.active_index(), 0);
        slider.advance(Duration::from_millis(1));
        assert_eq!(slider.active_index(), 1);

        slider.advance(STEP);
        assert_eq!(slider.current(), 1);

        // Countdown restarted when the slide settled
        slider.advance(Duration::from_millis(2_999));
        assert_eq!(slider.active_index(), 1);
        slider.advance(Duration::from_millis(1));
        assert_eq!(slider.active_index(), 2);
    }

    #[test]
    fn test_autoplay_wraps_around() {
        let mut slider = slider(3);
        for _ in 0..3 {
            slider.advance(Duration::from_millis(3_000));
            slider.advance(STEP);
        }
        assert_eq!(slider.current(), 0);
    }

    #[test]
    fn test_drag_restarts_autoplay() {
        let mut slider = slider(5);
        slider.advance(Duration::from_millis(2_000));
        slider.drag(-30.0, WIDTH);

        slider.advance(Duration::from_millis(1_500));
        assert_eq!(slider.active_index(), 0);

        slider.release(-30.0, WIDTH, SwipeDirection::Left);
        slider.advance(Duration::from_millis(2_999));
        assert_eq!(slider.active_index(), 0);
        slider.advance(Duration::from_millis(1));
        assert_eq!(slider.active_index(), 1);
    }

    #[test]
    fn test_autoplay_disabled() {
        let mut slider = manual(5);
        assert_eq!(slider.timers().pending_count(), 0);

        slider.advance(Duration::from_secs(10));
        assert_eq!(slider.current(), 0);
    }

    #[test]
    fn test_toggle_autoplay_and_interval() {
        let mut slider = slider(5);
        slider.set_auto_scroll(false);
        assert_eq!(slider.timers().pending_count(), 0);
        slider.advance(Duration::from_secs(5));
        assert_eq!(slider.active_index(), 0);

        slider.set_auto_scroll(true);
        slider.set_interval(Duration::from_millis(500));
        slider.advance(Duration::from_millis(500));
        assert_eq!(slider.active_index(), 1);
    }

    #[test]
    fn test_timers_are_single_flight() {
        let mut slider = slider(5);
        for step in 0..40 {
            match step % 5 {
                0 => slider.slide_to_next(),
                1 => slider.drag(-(step as f32) * 10.0, WIDTH),
                2 => slider.slide_to_prev(),
                3 => slider.release(-(step as f32) * 10.0, WIDTH, SwipeDirection::Left),
                _ => slider.slide_to(step),
            }
            assert!(slider.timers().pending_count() <= 2);
            slider.advance(Duration::from_millis(150));

            assert!(slider.current() < slider.length());
            assert!(slider.target_index() < slider.length());
        }
    }

    #[test]
    fn test_single_slide_never_moves() {
        let mut slider = manual(1);
        slider.slide_to_next();
        slider.slide_to_prev();
        assert_eq!(slider.phase(), SlidePhase::Idle);

        slider.release(-300.0, WIDTH, SwipeDirection::Left);
        assert_eq!(slider.current(), 0);
    }

    #[test]
    fn test_align_center_style() {
        let config = SwipeSlideConfig::new(4, Duration::from_secs(3), 80.0)
            .auto_scroll(false)
            .align_center(true);
        let slider = SwipeSlide::new(config).unwrap();

        let style = slider.animation_style();
        assert_eq!(style.width, Length::Percent(480.0));
        assert_eq!(style.left, Length::Percent(-70.0));
    }

    #[test]
    fn test_phase_transitions() {
        let idle = SlidePhase::Idle;
        assert_eq!(
            idle.on_event(SlideEvent::Drag(-20.0)),
            Some(SlidePhase::Dragging { offset: -20.0 })
        );
        assert_eq!(idle.on_event(SlideEvent::Cancel), Some(SlidePhase::SnappingBack));
        assert_eq!(idle.on_event(SlideEvent::Settled), None);

        let dragging = SlidePhase::Dragging { offset: -20.0 };
        assert_eq!(
            dragging.on_event(SlideEvent::Retarget { to: 1, animate: true }),
            Some(SlidePhase::Transitioning {
                to: 1,
                animate: true,
                offset: Some(-20.0)
            })
        );

        let moving = SlidePhase::Transitioning {
            to: 1,
            animate: true,
            offset: None,
        };
        assert_eq!(
            moving.on_event(SlideEvent::Cancel),
            Some(SlidePhase::Transitioning {
                to: 1,
                animate: true,
                offset: Some(0.0)
            })
        );
        assert_eq!(moving.on_event(SlideEvent::Settled), Some(SlidePhase::Idle));
    }
}
