//! Drive an engine through a scenario on a virtual clock

use std::time::Duration;

use anyhow::{bail, Result};
use serde::Serialize;
use tracing::debug;

use slidekit_core::{AnimationStyle, GestureEvent, GestureTracker, StaticLayout, SwipeDirection};
use slidekit_widgets::{Navigation, PagedScroll, SwipeSlide};

use crate::scenario::{EngineSpec, Scenario, Step};

/// Engine state after one step
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub step: usize,
    pub action: String,
    pub time_ms: u64,
    pub current: usize,
    pub target: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigation: Option<Navigation>,
    pub style: AnimationStyle,
    pub css: String,
}

enum Engine {
    Paged(PagedScroll),
    Swipe {
        slider: SwipeSlide,
        tracker: GestureTracker,
    },
}

impl Engine {
    fn build(spec: EngineSpec<'_>) -> Result<Self> {
        match spec {
            EngineSpec::Paged(paged) => {
                let mut scroll = PagedScroll::new(paged.config);
                scroll.measure(&paged.layout());
                Ok(Engine::Paged(scroll))
            }
            EngineSpec::Swipe(config) => Ok(Engine::Swipe {
                slider: SwipeSlide::new(*config)?,
                tracker: GestureTracker::new(),
            }),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Engine::Paged(_) => "paged",
            Engine::Swipe { .. } => "swipe",
        }
    }

    fn apply(&mut self, step: &Step) -> Result<()> {
        match (self, step) {
            (Engine::Paged(scroll), Step::Advance { ms }) => {
                scroll.advance(Duration::from_millis(*ms))
            }
            (Engine::Swipe { slider, .. }, Step::Advance { ms }) => {
                slider.advance(Duration::from_millis(*ms))
            }

            (Engine::Paged(scroll), Step::ScrollLeft) => scroll.scroll_left(),
            (Engine::Paged(scroll), Step::ScrollRight) => scroll.scroll_right(),
            (
                Engine::Paged(scroll),
                Step::Measure {
                    container_width,
                    child_widths,
                },
            ) => scroll.measure(&StaticLayout::new(*container_width, child_widths.clone())),
            (Engine::Paged(scroll), Step::InvalidateLimit) => scroll.invalidate_forward_limit(),

            (Engine::Swipe { slider, .. }, Step::Next) => slider.slide_to_next(),
            (Engine::Swipe { slider, .. }, Step::Prev) => slider.slide_to_prev(),
            (Engine::Swipe { slider, .. }, Step::SlideTo { index }) => slider.slide_to(*index),
            (Engine::Swipe { slider, .. }, Step::Drag { delta_x, width }) => {
                slider.drag(*delta_x, *width)
            }
            (
                Engine::Swipe { slider, .. },
                Step::Release {
                    delta_x,
                    width,
                    direction,
                },
            ) => {
                let direction = direction.unwrap_or_else(|| SwipeDirection::from_delta(*delta_x));
                slider.release(*delta_x, *width, direction)
            }
            (Engine::Swipe { tracker, .. }, Step::Press { x, width, pointer }) => {
                tracker.press(*x, *width, *pointer)
            }
            (Engine::Swipe { slider, tracker }, Step::Motion { x }) => {
                if let Some(event) = tracker.motion(*x) {
                    slider.handle_gesture(event);
                }
            }
            (Engine::Swipe { slider, tracker }, Step::Lift { x }) => {
                match tracker.lift(*x) {
                    Some(event @ GestureEvent::Release { .. }) => slider.handle_gesture(event),
                    _ => debug!("lift at {} was not a swipe", x),
                }
            }
            (Engine::Swipe { slider, .. }, Step::AutoScroll { enabled }) => {
                slider.set_auto_scroll(*enabled)
            }
            (Engine::Swipe { slider, .. }, Step::Interval { ms }) => {
                slider.set_interval(Duration::from_millis(*ms))
            }

            (engine, step) => bail!(
                "Step '{}' is not supported by the {} engine",
                step.label(),
                engine.name()
            ),
        }
        Ok(())
    }

    fn snapshot(&self, step: usize, action: String) -> Snapshot {
        use slidekit_core::TimerService;

        let (time, current, target, navigation, style) = match self {
            Engine::Paged(scroll) => (
                scroll.timers().now(),
                scroll.current_index(),
                scroll.target_index(),
                Some(scroll.navigation()),
                scroll.animation_style(),
            ),
            Engine::Swipe { slider, .. } => (
                slider.timers().now(),
                slider.current(),
                slider.active_index(),
                None,
                slider.animation_style(),
            ),
        };

        Snapshot {
            step,
            action,
            time_ms: time.as_millis() as u64,
            current,
            target,
            navigation,
            css: style.to_css(),
            style,
        }
    }
}

/// Run every step of `scenario`, returning the state after each one
///
/// The first snapshot is the initial state, labelled `mount`.
pub fn run(scenario: &Scenario) -> Result<Vec<Snapshot>> {
    let mut engine = Engine::build(scenario.engine()?)?;
    debug!(
        "running '{}' on the {} engine ({} steps)",
        scenario.display_name(),
        engine.name(),
        scenario.steps.len()
    );

    let mut snapshots = Vec::with_capacity(scenario.steps.len() + 1);
    snapshots.push(engine.snapshot(0, "mount".to_string()));

    for (index, step) in scenario.steps.iter().enumerate() {
        engine.apply(step)?;
        snapshots.push(engine.snapshot(index + 1, step.label()));
    }
    Ok(snapshots)
}
