//! Slidekit Core
//!
//! Shared primitives for the Slidekit carousel engines:
//!
//! - **Timers**: Cancellable, single-flight scheduling against a virtual clock
//! - **Geometry**: Measured container and child widths supplied by the host
//! - **Gestures**: Uniform touch/mouse drag events and a pointer tracker
//! - **Styles**: Render-ready style descriptors with CSS-compatible output
//! - **State Machines**: A small transition trait for engine phases
//!
//! The engines themselves live in `slidekit_widgets`. Nothing here renders;
//! the host UI layer applies the produced styles to its own elements.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use slidekit_core::timer::{TimerQueue, TimerService, TimerTask};
//!
//! let mut timers = TimerQueue::new();
//! let id = timers.schedule(Duration::from_millis(400), TimerTask::Settle);
//!
//! assert!(timers.pop_due(Duration::from_millis(399)).is_none());
//! assert_eq!(
//!     timers.pop_due(Duration::from_millis(400)),
//!     Some((id, TimerTask::Settle))
//! );
//! ```

pub mod easing;
pub mod error;
pub mod fsm;
pub mod geometry;
pub mod gesture;
pub mod style;
pub mod timer;

pub use easing::Easing;
pub use error::ConfigError;
pub use fsm::StateTransitions;
pub use geometry::{LayoutSource, StaticLayout};
pub use gesture::{GestureEvent, GestureTracker, PointerKind, SwipeDirection};
pub use style::{AnimationStyle, Length, Transition};
pub use timer::{TimerId, TimerQueue, TimerService, TimerTask};
