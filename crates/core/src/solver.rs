use std::num::FpCategory;

use log::debug;

use crate::error::{Error, Result};
use crate::line::Line;

/// The point where two lines cross.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    pub x: f64,
    pub y: f64,
}

/// Solves `m1*(x-x1) + y1 = m2*(x-x2) + y2` for the crossing point.
///
/// The gradient difference is classified exactly rather than compared against
/// a tolerance: only a true zero counts as parallel, and only a normal
/// difference is solved. A subnormal difference would overflow the division.
///
/// # Errors
///
/// Returns [`Error::ParallelLines`] if the gradients are equal, or
/// [`Error::InvalidIntersection`] if their difference is subnormal, infinite
/// or NaN.
pub fn intersect(first: &Line, second: &Line) -> Result<Intersection> {
    let gradient_diff = first.slope() - second.slope();

    match gradient_diff.classify() {
        FpCategory::Zero => return Err(Error::ParallelLines),
        FpCategory::Subnormal | FpCategory::Infinite | FpCategory::Nan => {
            debug!("Gradient difference cannot be solved: {gradient_diff:e}");
            return Err(Error::InvalidIntersection);
        }
        FpCategory::Normal => {}
    }

    let x = (second.offset_y() - first.offset_y() - second.slope() * second.offset_x()
        + first.slope() * first.offset_x())
        / gradient_diff;
    let y = first.y_at(x);

    debug!("Intersection at ({x}, {y}) with gradient difference {gradient_diff}");

    Ok(Intersection { x, y })
}
