use serde::{Deserialize, Serialize};

/// Point represents a knot through which the spline passes exactly.
/// - `x` - coordinate, strictly increasing within a knot set,
/// - `y` - coordinate, value the spline takes at `x`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// # Example
    /// ```
    /// use natural_spline::Point;
    ///
    /// let point = Point::new(1.0, 2.0);
    /// assert_eq!(point, Point::from((1.0, 2.0)));
    /// ```
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    pub fn get_x(&self) -> f64 {
        self.x
    }

    pub fn get_y(&self) -> f64 {
        self.y
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let point = Point::new(1.0, 2.5);

        assert_eq!(1.0, point.get_x());
        assert_eq!(2.5, point.get_y());
    }

    #[test]
    fn test_from_tuple() {
        let points: Vec<Point> = vec![(1.0, 2.0), (2.0, 3.0)].into_iter().map(Point::from).collect();

        assert_eq!(Point::new(1.0, 2.0), points[0]);
        assert_eq!(Point::new(2.0, 3.0), points[1]);
    }

    #[test]
    fn test_is_finite() {
        assert!(Point::new(0.0, -4.0).is_finite());
        assert!(!Point::new(f64::NAN, 1.0).is_finite());
        assert!(!Point::new(1.0, f64::NEG_INFINITY).is_finite());
    }

    #[test]
    fn test_json() {
        let points: Vec<Point> = serde_json::from_str(r#"[{"x": 1.0, "y": 2.0}, {"x": 2.0, "y": 3.5}]"#).unwrap();

        assert_eq!(vec![Point::new(1.0, 2.0), Point::new(2.0, 3.5)], points);
        assert_eq!(r#"{"x":1.0,"y":2.0}"#, serde_json::to_string(&points[0]).unwrap());
    }
}
