//! Slidekit Widgets
//!
//! Headless carousel engines. Each engine owns its navigation state and timers
//! and derives a style descriptor for the host to apply to its track element.
//!
//! # Engines
//!
//! - **`PagedScroll`**: Steps through variable-width children with prev/next
//!   buttons, never scrolling past the end of the content
//! - **`SwipeSlide`**: Circular slider of equal-width slides with drag-to-swipe
//!   and autoplay
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use slidekit_widgets::prelude::*;
//!
//! let mut slider = SwipeSlide::new(
//!     SwipeSlideConfig::new(3, Duration::from_secs(4), 100.0).auto_scroll(false),
//! )
//! .unwrap();
//!
//! slider.slide_to_prev();
//! assert_eq!(slider.active_index(), 2);
//!
//! // Host loop: advance time, then restyle the track
//! slider.advance(Duration::from_millis(16));
//! let css = slider.animation_style().to_css();
//! assert!(css.contains("transition"));
//! ```

pub mod paged_scroll;
pub mod swipe_slide;
pub mod track;

pub use paged_scroll::{
    ForwardLimit, Navigation, PagedScroll, PagedScrollConfig, ScrollEvent, ScrollPhase,
};
pub use swipe_slide::{SlideEvent, SlidePhase, SwipeSlide, SwipeSlideConfig};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::paged_scroll::{Navigation, PagedScroll, PagedScrollConfig};
    pub use crate::swipe_slide::{SwipeSlide, SwipeSlideConfig};
    pub use slidekit_core::{
        AnimationStyle, GestureEvent, GestureTracker, LayoutSource, Length, PointerKind,
        StaticLayout, SwipeDirection,
    };
}
