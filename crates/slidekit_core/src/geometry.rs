//! Measured geometry supplied by the host

/// Read-only access to measured pixel widths
///
/// Implemented by whatever owns the real layout. Measurement is expected to
/// happen once the track is attached, before its first paint.
pub trait LayoutSource {
    /// Width of the visible viewport
    fn container_width(&self) -> f32;

    /// Widths of the track's children, in order
    fn child_widths(&self) -> Vec<f32>;
}

/// A fixed set of measurements
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StaticLayout {
    pub container_width: f32,
    pub child_widths: Vec<f32>,
}

impl StaticLayout {
    pub fn new(container_width: f32, child_widths: impl Into<Vec<f32>>) -> Self {
        Self {
            container_width,
            child_widths: child_widths.into(),
        }
    }

    /// `count` children of equal width
    pub fn uniform(container_width: f32, child_width: f32, count: usize) -> Self {
        Self::new(container_width, vec![child_width; count])
    }
}

impl LayoutSource for StaticLayout {
    fn container_width(&self) -> f32 {
        self.container_width
    }

    fn child_widths(&self) -> Vec<f32> {
        self.child_widths.clone()
    }
}

impl<L: LayoutSource + ?Sized> LayoutSource for &L {
    fn container_width(&self) -> f32 {
        (**self).container_width()
    }

    fn child_widths(&self) -> Vec<f32> {
        (**self).child_widths()
    }
}
