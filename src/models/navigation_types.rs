//! Type-safe wrappers for navigation values

use std::fmt;

use super::constants::MAX_WARP;
use super::errors::{GameError, GameResult};

/// Course heading on the 1-9 dial.
///
/// - 1 = +column (right)
/// - 3 = -row (up)
/// - 5 = -column (left)
/// - 7 = +row (down)
/// - 2, 4, 6, 8 = diagonals
/// - Fractional values interpolate between neighbouring headings
///
/// Warp navigation keeps 9 as its own heading. Torpedo targeting folds
/// 9.x onto 1.x before validating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Course(f64);

impl Course {
    /// Course for the warp engines; must lie in `[1, 9]`.
    pub fn navigation(value: f64) -> GameResult<Self> {
        if (1.0..=9.0).contains(&value) {
            Ok(Course(value))
        } else {
            Err(GameError::InputRejected(
                "LT. SULU REPORTS, 'INCORRECT COURSE DATA, SIR!'".to_string(),
            ))
        }
    }

    /// Course for a photon torpedo. Anything in `[9, 10)` maps onto `[1, 2)`.
    pub fn torpedo(value: f64) -> GameResult<Self> {
        let value = if value.floor() == 9.0 { value - 8.0 } else { value };
        if (1.0..=9.0).contains(&value) {
            Ok(Course(value))
        } else {
            Err(GameError::InputRejected(
                "ENSIGN CHEKOV REPORTS,  'INCORRECT COURSE DATA, SIR!'".to_string(),
            ))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Warp factor, `0.0` to the current engine limit.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct WarpFactor(f64);

impl WarpFactor {
    /// Validate against the absolute range first, then the engines' current limit.
    pub fn new(value: f64, max_warp: f64) -> GameResult<Self> {
        if !(0.0..=MAX_WARP).contains(&value) {
            return Err(GameError::InputRejected(format!(
                "CHIEF ENGINEER SCOTT REPORTS, 'THE ENGINES WON'T TAKE WARP {:.1}!'",
                value
            )));
        }
        if value > max_warp {
            return Err(GameError::InputRejected(format!(
                "WARP ENGINES ARE DAMAGED.  MAXIMUM SPEED = WARP {:.1}",
                max_warp
            )));
        }
        Ok(WarpFactor(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Energy needed: warp * 8, rounded half-up.
    pub fn energy_cost(&self) -> i32 {
        (self.0 * 8.0 + 0.5).floor() as i32
    }

    /// Sector steps walked: 8 per whole warp unit plus one per tenth.
    pub fn step_count(&self) -> usize {
        let whole = self.0.trunc();
        // Guard against 4.6 - 4.0 = 0.5999...
        let tenths = ((self.0 - whole) * 10.0 + 1e-9).floor();
        let steps = whole as i64 * 8 + tenths as i64;
        steps.max(0) as usize
    }
}

impl fmt::Display for WarpFactor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}
