//! Circular track arithmetic for the swipe slider
//!
//! The track holds `length + 2` equal slots: a copy of the last slide, every
//! slide in order, then a copy of the first. Widths and offsets are percentages
//! of the viewport. `length` must be non-zero everywhere in this module.

/// Index after `current`, wrapping to 0
pub fn next_index(length: usize, current: usize) -> usize {
    debug_assert!(length > 0);
    (current + 1) % length
}

/// Index before `current`, wrapping to `length - 1`
pub fn previous_index(length: usize, current: usize) -> usize {
    debug_assert!(length > 0);
    (current + length - 1) % length
}

/// One slot's share of the track, signed by `direction`
pub fn translate_x(length: usize, direction: f32) -> f32 {
    (100.0 * direction) / (length + 2) as f32
}

/// A child width of 0 means "fill the viewport"
fn slot_width(child_width: f32) -> f32 {
    if child_width == 0.0 {
        100.0
    } else {
        child_width
    }
}

/// Track width as a percentage of the viewport
pub fn container_width(child_width: f32, length: usize) -> f32 {
    slot_width(child_width) * (length + 2) as f32
}

/// Distance the track is shifted left to show `current`
///
/// Skips the leading clone slot. With `align_center` the slide is centred by
/// giving back half of the viewport it does not cover.
pub fn left_offset(child_width: f32, current: usize, align_center: bool) -> f32 {
    let offset = (current + 1) as f32 * slot_width(child_width);
    if align_center {
        offset - (100.0 - child_width) / 2.0
    } else {
        offset
    }
}

fn sign(value: f32) -> f32 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Percentage translate for one step from `current` toward `target`
///
/// Steps the short way around the circle: when the naive distance is more than
/// half the track, the motion runs the opposite way. A live drag `offset`, if
/// non-zero, decides the direction instead.
pub fn translate_x_distance(
    length: usize,
    current: usize,
    target: usize,
    offset: Option<f32>,
) -> f32 {
    let distance = current.abs_diff(target) as f32;
    let preferred = offset.map(sign).unwrap_or(0.0);
    let wraps = if distance > length as f32 / 2.0 {
        1.0
    } else {
        -1.0
    };
    let direction = wraps * sign(target as f32 - current as f32);

    let step = if preferred != 0.0 {
        preferred
    } else {
        direction
    };
    translate_x(length, step)
}

/// Slide index shown in each of the `length + 2` track slots
pub fn track_order(length: usize) -> Vec<usize> {
    if length == 0 {
        return Vec::new();
    }
    let mut order = Vec::with_capacity(length + 2);
    order.push(length - 1);
    order.extend(0..length);
    order.push(0);
    order
}
