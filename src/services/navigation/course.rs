use crate::models::constants::COURSE_VECTORS;
use crate::models::navigation_types::Course;
use crate::models::position::SectorPosition;

/// Unit step `(d_row, d_col)` for a course, interpolating linearly between
/// the two neighbouring dial headings.
pub fn unit_step(course: Course) -> (f64, f64) {
    let value = course.value();
    let r = value.floor() as usize;
    let next = (r + 1).min(COURSE_VECTORS.len() - 1);
    let frac = value - value.floor();
    let d_row = COURSE_VECTORS[r].0 + (COURSE_VECTORS[next].0 - COURSE_VECTORS[r].0) * frac;
    let d_col = COURSE_VECTORS[r].1 + (COURSE_VECTORS[next].1 - COURSE_VECTORS[r].1) * frac;
    (d_row, d_col)
}

/// Round half-up to the nearest whole sector.
pub fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

/// Heading on the 1-9 dial and straight-line distance between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bearing {
    pub direction: f64,
    pub distance: f64,
}

/// Bearing from one `(row, col)` point to another. `None` when they coincide.
///
/// The inverse of [`unit_step`]: following the returned direction from
/// `from` passes through `to`.
pub fn bearing(from: (f64, f64), to: (f64, f64)) -> Option<Bearing> {
    let d_col = to.1 - from.1;
    let up = from.0 - to.0;
    if d_col == 0.0 && up == 0.0 {
        return None;
    }

    // (dial, along, across): `along` runs toward the dial heading, `across`
    // toward the next heading counter-clockwise.
    let (dial, along, across) = if d_col > 0.0 && up >= 0.0 {
        (1.0, d_col, up)
    } else if up > 0.0 && d_col <= 0.0 {
        (3.0, up, -d_col)
    } else if d_col < 0.0 && up <= 0.0 {
        (5.0, -d_col, -up)
    } else {
        (7.0, -up, d_col)
    };

    let direction = if across <= along {
        dial + across / along
    } else {
        dial + 2.0 - along / across
    };

    Some(Bearing {
        direction,
        distance: (d_col * d_col + up * up).sqrt(),
    })
}

/// Bearing between two sectors of the same quadrant.
pub fn sector_bearing(from: SectorPosition, to: SectorPosition) -> Option<Bearing> {
    bearing(
        (from.row as f64, from.col as f64),
        (to.row as f64, to.col as f64),
    )
}
