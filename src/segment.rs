use serde::{Deserialize, Serialize};

/// One cubic piece of the spline, stored relative to its left endpoint `x`:
///
/// `S(t) = a + b*(t - x) + c*(t - x)^2 + d*(t - x)^3`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplineSegment {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    x: f64,
}

impl SplineSegment {
    pub(crate) fn new(a: f64, b: f64, c: f64, d: f64, x: f64) -> Self {
        SplineSegment { a, b, c, d, x }
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        let dx = x - self.x;
        ((self.d * dx + self.c) * dx + self.b) * dx + self.a
    }

    pub fn get_a(&self) -> f64 {
        self.a
    }

    pub fn get_b(&self) -> f64 {
        self.b
    }

    pub fn get_c(&self) -> f64 {
        self.c
    }

    pub fn get_d(&self) -> f64 {
        self.d
    }

    /// Left endpoint of the interval this segment covers.
    pub fn get_x(&self) -> f64 {
        self.x
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.a.is_finite() && self.b.is_finite() && self.c.is_finite() && self.d.is_finite()
    }
}
