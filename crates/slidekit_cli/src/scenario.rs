//! Scenario file handling
//!
//! A scenario pairs one engine configuration with a scripted list of steps:
//!
//! ```toml
//! name = "paged edge"
//!
//! [paged]
//! container_width = 250.0
//! child_widths = [100.0, 100.0, 100.0]
//!
//! [[steps]]
//! action = "scroll_right"
//!
//! [[steps]]
//! action = "advance"
//! ms = 400
//! ```

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use slidekit_core::{PointerKind, StaticLayout, SwipeDirection};
use slidekit_widgets::{PagedScrollConfig, SwipeSlideConfig};

// =============================================================================
// Scenario
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub paged: Option<PagedSpec>,
    #[serde(default)]
    pub swipe: Option<SwipeSlideConfig>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// Paged scroll setup: configuration plus the first measurement
#[derive(Debug, Deserialize)]
pub struct PagedSpec {
    #[serde(default)]
    pub config: PagedScrollConfig,
    pub container_width: f32,
    pub child_widths: Vec<f32>,
}

impl PagedSpec {
    pub fn layout(&self) -> StaticLayout {
        StaticLayout::new(self.container_width, self.child_widths.clone())
    }
}

/// Which engine a scenario drives
#[derive(Debug)]
pub enum EngineSpec<'a> {
    Paged(&'a PagedSpec),
    Swipe(&'a SwipeSlideConfig),
}

/// One scripted step
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    /// Let time pass
    Advance { ms: u64 },

    // Paged scroll
    ScrollLeft,
    ScrollRight,
    Measure {
        container_width: f32,
        child_widths: Vec<f32>,
    },
    InvalidateLimit,

    // Swipe slide
    Next,
    Prev,
    SlideTo { index: usize },
    Drag { delta_x: f32, width: f32 },
    Release {
        delta_x: f32,
        width: f32,
        #[serde(default)]
        direction: Option<SwipeDirection>,
    },
    Press {
        x: f32,
        width: f32,
        #[serde(default = "default_pointer")]
        pointer: PointerKind,
    },
    Motion { x: f32 },
    Lift { x: f32 },
    AutoScroll { enabled: bool },
    Interval { ms: u64 },
}

fn default_pointer() -> PointerKind {
    PointerKind::Touch
}

impl Step {
    /// Short label for output
    pub fn label(&self) -> String {
        match self {
            Step::Advance { ms } => format!("advance {}ms", ms),
            Step::ScrollLeft => "scroll_left".to_string(),
            Step::ScrollRight => "scroll_right".to_string(),
            Step::Measure {
                container_width,
                child_widths,
            } => format!("measure {}px / {} children", container_width, child_widths.len()),
            Step::InvalidateLimit => "invalidate_limit".to_string(),
            Step::Next => "next".to_string(),
            Step::Prev => "prev".to_string(),
            Step::SlideTo { index } => format!("slide_to {}", index),
            Step::Drag { delta_x, .. } => format!("drag {}px", delta_x),
            Step::Release { delta_x, .. } => format!("release {}px", delta_x),
            Step::Press { x, pointer, .. } => format!("press {:?} at {}", pointer, x),
            Step::Motion { x } => format!("motion to {}", x),
            Step::Lift { x } => format!("lift at {}", x),
            Step::AutoScroll { enabled } => format!("auto_scroll {}", enabled),
            Step::Interval { ms } => format!("interval {}ms", ms),
        }
    }
}

impl Scenario {
    /// Parse a scenario from TOML
    pub fn from_toml(source: &str) -> Result<Self> {
        let scenario: Scenario = toml::from_str(source).context("Failed to parse scenario")?;
        scenario.engine()?;
        Ok(scenario)
    }

    /// Load a scenario file
    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario {}", path.display()))?;
        Self::from_toml(&source).with_context(|| format!("Invalid scenario {}", path.display()))
    }

    /// The single engine this scenario configures
    pub fn engine(&self) -> Result<EngineSpec<'_>> {
        match (&self.paged, &self.swipe) {
            (Some(paged), None) => Ok(EngineSpec::Paged(paged)),
            (None, Some(swipe)) => {
                swipe.validate()?;
                Ok(EngineSpec::Swipe(swipe))
            }
            (Some(_), Some(_)) => bail!("Scenario configures both [paged] and [swipe]"),
            (None, None) => bail!("Scenario must configure either [paged] or [swipe]"),
        }
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("unnamed scenario")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_paged_scenario() {
        let scenario = Scenario::from_toml(
            r#"
            name = "edge"

            [paged]
            container_width = 250.0
            child_widths = [100.0, 100.0, 100.0]

            [paged.config]
            start_index = 1

            [[steps]]
            action = "scroll_right"

            [[steps]]
            action = "advance"
            ms = 400
            "#,
        )
        .unwrap();

        assert_eq!(scenario.display_name(), "edge");
        assert_eq!(scenario.steps.len(), 2);
        assert!(matches!(scenario.steps[1], Step::Advance { ms: 400 }));
        match scenario.engine().unwrap() {
            EngineSpec::Paged(spec) => {
                assert_eq!(spec.config.start_index, 1);
                assert_eq!(spec.config.transition_ms, 400);
                assert_eq!(spec.layout().child_widths.len(), 3);
            }
            other => panic!("expected paged engine, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_swipe_steps() {
        let scenario = Scenario::from_toml(
            r#"
            [swipe]
            length = 5
            interval_ms = 3000
            child_width_percent = 20.0

            [[steps]]
            action = "press"
            x = 200.0
            width = 300.0
            pointer = "mouse"

            [[steps]]
            action = "release"
            delta_x = -120.0
            width = 300.0
            direction = "left"
            "#,
        )
        .unwrap();

        assert!(matches!(
            scenario.steps[0],
            Step::Press {
                pointer: PointerKind::Mouse,
                ..
            }
        ));
        assert!(matches!(
            scenario.steps[1],
            Step::Release {
                direction: Some(SwipeDirection::Left),
                ..
            }
        ));
    }

    #[test]
    fn test_engine_must_be_unique() {
        let neither = Scenario::from_toml("name = \"empty\"");
        assert!(neither.is_err());

        let both = Scenario::from_toml(
            r#"
            [paged]
            container_width = 100.0
            child_widths = [50.0]

            [swipe]
            length = 2
            "#,
        );
        assert!(both.is_err());
    }

    #[test]
    fn test_invalid_swipe_config_rejected() {
        let result = Scenario::from_toml(
            r#"
            [swipe]
            length = 0
            "#,
        );
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("at least one slide"));
    }
}
