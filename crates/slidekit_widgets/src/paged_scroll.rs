//! Paged horizontal scrolling with previous/next buttons
//!
//! `PagedScroll` moves a row of variable-width children one child at a time.
//! The track never scrolls past the end of its content: the last step is
//! shortened so the final child lines up with the viewport's right edge, and
//! once that edge has been found the forward button is disabled.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use slidekit_core::StaticLayout;
//! use slidekit_widgets::paged_scroll::{PagedScroll, PagedScrollConfig};
//!
//! let mut scroll = PagedScroll::new(PagedScrollConfig::default());
//! scroll.measure(&StaticLayout::new(250.0, [100.0, 100.0, 100.0]));
//! scroll.advance(Duration::from_millis(400));
//!
//! scroll.scroll_right();
//! // Only 50px of content is hidden, so the step is shortened
//! assert_eq!(scroll.translate_x(), Some(-50.0));
//!
//! scroll.advance(Duration::from_millis(400));
//! assert_eq!(scroll.current_index(), 1);
//! assert!(!scroll.navigation().next);
//! ```
//!
//! # Features
//!
//! - **Edge clamping**: Translation never exceeds the scrollable distance
//! - **Sticky forward limit**: The last reachable index is locked on first contact
//! - **FSM-based phase**: Idle or Animating toward a target index
//! - **Re-measurement**: Geometry can be refreshed without losing the forward limit

use std::time::Duration;

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use slidekit_core::{
    AnimationStyle, Easing, LayoutSource, Length, StateTransitions, TimerId, TimerQueue,
    TimerService, TimerTask, Transition,
};

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for a paged scroll
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagedScrollConfig {
    /// Index shown after the first measurement (default: 0)
    pub start_index: usize,
    /// Length of one step's transition in milliseconds (default: 400)
    pub transition_ms: u64,
    /// Timing curve for each step
    pub easing: Easing,
}

impl Default for PagedScrollConfig {
    fn default() -> Self {
        Self {
            start_index: 0,
            transition_ms: 400,
            easing: Easing::EASE_OUT_CIRC,
        }
    }
}

impl PagedScrollConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the index shown after the first measurement
    pub fn start_index(mut self, index: usize) -> Self {
        self.start_index = index;
        self
    }

    /// Set the transition duration
    pub fn transition(mut self, duration: Duration) -> Self {
        self.transition_ms = duration.as_millis() as u64;
        self
    }

    /// Set the timing curve
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }
}

// ============================================================================
// Phase
// ============================================================================

/// What the track is doing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScrollPhase {
    /// At rest on the current index
    #[default]
    Idle,
    /// Transitioning toward `to`
    Animating { to: usize },
}

/// Events that move a `ScrollPhase`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollEvent {
    /// A new target was requested while resting on `from`
    Navigate { from: usize, to: usize },
    /// The transition elapsed
    Settled,
}

impl StateTransitions for ScrollPhase {
    type Event = ScrollEvent;

    fn on_event(&self, event: ScrollEvent) -> Option<Self> {
        match (*self, event) {
            // Idle -> Animating: a different index was requested
            (ScrollPhase::Idle, ScrollEvent::Navigate { from, to }) if from != to => {
                Some(ScrollPhase::Animating { to })
            }

            // Animating -> Idle: retargeted back onto the resting index
            (ScrollPhase::Animating { .. }, ScrollEvent::Navigate { from, to }) if from == to => {
                Some(ScrollPhase::Idle)
            }

            // Animating -> Animating: retargeted mid-flight
            (ScrollPhase::Animating { to: pending }, ScrollEvent::Navigate { to, .. })
                if pending != to =>
            {
                Some(ScrollPhase::Animating { to })
            }

            // Animating -> Idle: transition finished
            (ScrollPhase::Animating { .. }, ScrollEvent::Settled) => Some(ScrollPhase::Idle),

            _ => None,
        }
    }
}

impl ScrollPhase {
    pub fn is_animating(&self) -> bool {
        matches!(self, ScrollPhase::Animating { .. })
    }
}

/// How far forward scrolling may go
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ForwardLimit {
    /// The content edge has not been reached yet
    #[default]
    Unbounded,
    /// Forward scrolling stops at this index
    ///
    /// Locked the first time the edge is reached and kept across
    /// re-measurement until `invalidate_forward_limit` is called.
    LastAllowed(usize),
}

impl ForwardLimit {
    pub fn index(&self) -> Option<usize> {
        match *self {
            ForwardLimit::Unbounded => None,
            ForwardLimit::LastAllowed(index) => Some(index),
        }
    }
}

/// Which navigation buttons are enabled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Navigation {
    pub next: bool,
    pub prev: bool,
}

// ============================================================================
// Paged Scroll
// ============================================================================

/// Paged scroll engine
///
/// Drive it with `scroll_left` / `scroll_right`, feed elapsed time through
/// `advance`, and apply `animation_style` to the track after every change.
pub struct PagedScroll<T: TimerService = TimerQueue> {
    config: PagedScrollConfig,
    /// Child widths; `[0]` until measured
    widths: SmallVec<[f32; 16]>,
    container_width: f32,
    content_width: f32,
    measured: bool,
    current_index: usize,
    phase: ScrollPhase,
    forward_limit: ForwardLimit,
    settle_timer: Option<TimerId>,
    timers: T,
}

impl PagedScroll<TimerQueue> {
    /// Create a paged scroll on its own virtual clock
    pub fn new(config: PagedScrollConfig) -> Self {
        Self::with_timers(config, TimerQueue::new())
    }
}

impl<T: TimerService> PagedScroll<T> {
    /// Create a paged scroll on a host-provided timer service
    pub fn with_timers(config: PagedScrollConfig, timers: T) -> Self {
        Self {
            config,
            widths: smallvec![0.0],
            container_width: 0.0,
            content_width: 0.0,
            measured: false,
            current_index: 0,
            phase: ScrollPhase::Idle,
            forward_limit: ForwardLimit::Unbounded,
            settle_timer: None,
            timers,
        }
    }

    // =========================================================================
    // Measurement
    // =========================================================================

    /// Read container and child widths from the host layout
    ///
    /// Call once after the track is attached and before its first paint.
    /// Calling it again refreshes the geometry but keeps the forward limit;
    /// use `invalidate_forward_limit` if the old edge no longer applies.
    pub fn measure(&mut self, source: &impl LayoutSource) {
        let mut widths: SmallVec<[f32; 16]> = source
            .child_widths()
            .into_iter()
            .map(|w| if w.is_finite() { w.max(0.0) } else { 0.0 })
            .collect();
        if widths.is_empty() {
            widths.push(0.0);
        }

        let container = source.container_width();
        self.container_width = if container.is_finite() {
            container.max(0.0)
        } else {
            0.0
        };
        self.content_width = widths.iter().sum();
        self.widths = widths;

        let last = self.last_index();
        if self.measured {
            self.current_index = self.current_index.min(last);
            if let ScrollPhase::Animating { to } = self.phase {
                let from = self.current_index;
                self.phase.apply(ScrollEvent::Navigate {
                    from,
                    to: to.min(last),
                });
            }
        } else {
            self.current_index = self.config.start_index.min(last);
            self.measured = true;
        }

        tracing::debug!(
            "paged scroll measured: {} children, content={:.0}px, container={:.0}px, max scroll={:.0}px",
            self.widths.len(),
            self.content_width,
            self.container_width,
            self.max_left_scroll()
        );

        self.schedule_settle();
    }

    /// Forget the locked forward limit
    ///
    /// If the current index is already at the edge the limit is locked again
    /// straight away against the current geometry.
    pub fn invalidate_forward_limit(&mut self) {
        tracing::debug!("paged scroll forward limit cleared");
        self.forward_limit = ForwardLimit::Unbounded;
        self.lock_forward_limit_if_reached();
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Step back one child
    pub fn scroll_left(&mut self) {
        let target = self.current_index.saturating_sub(1);
        self.navigate(target);
    }

    /// Step forward one child, or onto the locked last index at the edge
    pub fn scroll_right(&mut self) {
        if !self.has_overflow() {
            return;
        }
        let target = match (self.max_left_reached(), self.forward_limit) {
            (true, ForwardLimit::LastAllowed(last)) => last,
            _ => self.current_index + 1,
        };
        self.navigate(target.min(self.last_index()));
    }

    fn navigate(&mut self, target: usize) {
        if target == self.target_index() {
            return;
        }

        let from = self.current_index;
        self.phase.apply(ScrollEvent::Navigate { from, to: target });
        tracing::debug!("paged scroll {} -> {}", from, target);

        self.schedule_settle();
    }

    // =========================================================================
    // Timers
    // =========================================================================

    /// Advance the clock, settling any transition that has elapsed
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
            _ => tracing::trace!("paged scroll ignoring stale {:?} timer", task),
        }
    }

    fn schedule_settle(&mut self) {
        if let Some(id) = self.settle_timer.take() {
            self.timers.cancel(id);
        }
        let delay = self.config.transition_duration();
        self.settle_timer = Some(self.timers.schedule(delay, TimerTask::Settle));
    }

    fn settle(&mut self) {
        self.current_index = self.target_index();
        self.phase.apply(ScrollEvent::Settled);
        self.lock_forward_limit_if_reached();

        tracing::debug!(
            "paged scroll settled at {} (position={:.0}px, max={:.0}px)",
            self.current_index,
            self.left_position(),
            self.max_left_scroll()
        );
    }

    fn lock_forward_limit_if_reached(&mut self) {
        if self.forward_limit == ForwardLimit::Unbounded && self.max_left_reached() {
            let last = (self.current_index + 1).min(self.last_index());
            self.forward_limit = ForwardLimit::LastAllowed(last);
            tracing::debug!("paged scroll forward limit locked at {}", last);
        }
    }

    // =========================================================================
    // Derived state
    // =========================================================================

    pub fn config(&self) -> &PagedScrollConfig {
        &self.config
    }

    /// Timer service driving this scroll
    pub fn timers(&self) -> &T {
        &self.timers
    }

    /// Settled index
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Requested index; equals `current_index` when idle
    pub fn target_index(&self) -> usize {
        match self.phase {
            ScrollPhase::Idle => self.current_index,
            ScrollPhase::Animating { to } => to,
        }
    }

    pub fn phase(&self) -> ScrollPhase {
        self.phase
    }

    pub fn forward_limit(&self) -> ForwardLimit {
        self.forward_limit
    }

    pub fn widths(&self) -> &[f32] {
        &self.widths
    }

    pub fn container_width(&self) -> f32 {
        self.container_width
    }

    pub fn content_width(&self) -> f32 {
        self.content_width
    }

    fn last_index(&self) -> usize {
        self.widths.len() - 1
    }

    /// Furthest the track can move left
    pub fn max_left_scroll(&self) -> f32 {
        (self.content_width - self.container_width).max(0.0)
    }

    /// Sum of the widths of the first `index` children
    pub fn cumulative_width(&self, index: usize) -> f32 {
        self.widths.iter().take(index).sum()
    }

    /// Resting offset of the track, never past `max_left_scroll`
    pub fn left_position(&self) -> f32 {
        self.max_left_scroll().min(self.settled_offset())
    }

    fn settled_offset(&self) -> f32 {
        self.cumulative_width(self.current_index)
    }

    /// Whether one more step forward would pass the content edge
    pub fn max_left_reached(&self) -> bool {
        self.cumulative_width(self.current_index + 1) > self.max_left_scroll()
    }

    /// Whether the content is wider than the viewport
    pub fn has_overflow(&self) -> bool {
        self.widths.len() > 1 && self.content_width > self.container_width
    }

    /// Which navigation buttons should be enabled
    pub fn navigation(&self) -> Navigation {
        let at_limit = self.forward_limit.index() == Some(self.current_index);
        Navigation {
            prev: self.current_index > 0,
            next: self.has_overflow() && !at_limit,
        }
    }

    /// Signed translate for the transition in flight, if any
    ///
    /// Negative moves the track left (forward). The distance is the width of
    /// the child being hidden or revealed, shortened so the track stops at
    /// the content edge.
    pub fn translate_x(&self) -> Option<f32> {
        let to = match self.phase {
            ScrollPhase::Animating { to } if to != self.current_index => to,
            _ => return None,
        };

        let width_at = |index: usize| self.widths.get(index).copied().unwrap_or(0.0);
        let left = self.settled_offset();
        let max = self.max_left_scroll();

        if to > self.current_index {
            let hidden = width_at(self.current_index);
            let distance = if left + hidden > max {
                (max - left).max(0.0)
            } else {
                hidden
            };
            Some(-distance)
        } else {
            let revealed = width_at(self.current_index - 1);
            let distance = if left > max {
                (max - self.cumulative_width(to)).max(0.0)
            } else {
                revealed
            };
            Some(distance)
        }
    }

    /// Style for the track element
    pub fn animation_style(&self) -> AnimationStyle {
        let mut style = AnimationStyle::resting(
            Length::Px(self.content_width),
            Length::Px(-self.left_position()),
        );

        if let Some(distance) = self.translate_x() {
            style.transition = Some(Transition::new(
                self.config.transition_duration(),
                self.config.easing,
            ));
            style.transform = Some(Length::Px(distance));
        }
        style
    }
}

impl<T: TimerService> Drop for PagedScroll<T> {
    fn drop(&mut self) {
        if let Some(id) = self.settle_timer.take() {
            self.timers.cancel(id);
        }
    }
}
