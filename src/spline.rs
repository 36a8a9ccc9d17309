use crate::{
    config::SplineConfig,
    error::SplineError,
    natural::natural_cubic_segments,
    point::Point,
    segment::SplineSegment,
};

/// Natural cubic spline through an ordered set of knots.
///
/// Segment `i` covers `[x_i, x_{i+1})`. The last segment also covers everything
/// above the last knot, so queries there are extrapolated with its cubic. Queries
/// below the first knot have no segment: [CubicSpline::evaluate] returns `0.0` for
/// them and [CubicSpline::try_evaluate] returns [SplineError::OutOfDomainLow].
///
/// The spline is immutable once fitted and can be shared between threads.
#[derive(Debug, Clone, PartialEq)]
pub struct CubicSpline {
    segments: Vec<SplineSegment>,
    min_x: f64,
    max_x: f64,
    is_knot_spacing_uniform: bool,
}

impl CubicSpline {
    /// Fits a natural cubic spline with the default [SplineConfig].
    /// # Example
    /// ```
    /// use natural_spline::{CubicSpline, Point};
    /// use assert_approx_eq::assert_approx_eq;
    ///
    /// let points = vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(2.0, 0.0)];
    /// let spline = CubicSpline::fit(&points).unwrap();
    ///
    /// assert_eq!(2, spline.segments().len());
    /// assert_approx_eq!(1.0, spline.evaluate(1.0), 1e-12);
    /// ```
    /// # Errors
    /// See [CubicSpline::fit_with_config].
    pub fn fit(points: &[Point]) -> Result<Self, SplineError> {
        Self::fit_with_config(points, &SplineConfig::default())
    }

    /// Fits a natural cubic spline. Points must be ordered by strictly increasing x.
    /// # Errors
    /// - [SplineError::InsufficientPoints] for fewer than 2 points,
    /// - [SplineError::NonFiniteValue] when a coordinate is NaN or infinite,
    /// - [SplineError::DuplicateX] when adjacent knots are closer than the configured minimum spacing,
    /// - [SplineError::NonIncreasingX] when a knot lies left of its predecessor,
    /// - [SplineError::NumericDegeneracy] when the solve overflows to a non-finite coefficient.
    /// ```
    /// use natural_spline::{CubicSpline, Point, SplineError};
    ///
    /// let points = vec![Point::new(0.0, 0.0), Point::new(2.0, 1.0), Point::new(1.0, 0.0)];
    /// let result = CubicSpline::fit(&points);
    ///
    /// assert!(matches!(result, Err(SplineError::NonIncreasingX { index: 2, .. })));
    /// ```
    pub fn fit_with_config(points: &[Point], config: &SplineConfig) -> Result<Self, SplineError> {
        if let Err(error) = check_points(points, config) {
            log::warn!("rejected knot set: {}", error);
            return Err(error);
        }

        let segments = natural_cubic_segments(points);
        if let Some(segment) = segments.iter().position(|s| !s.is_finite()) {
            let error = SplineError::NumericDegeneracy { segment };
            log::warn!("natural spline fit failed: {}", error);
            return Err(error);
        }

        let is_knot_spacing_uniform = is_knot_spacing_uniform(points, config.get_min_spacing());
        log::debug!(
            "fitted natural cubic spline: {} segments, uniform spacing: {}",
            segments.len(),
            is_knot_spacing_uniform
        );

        Ok(CubicSpline {
            segments,
            min_x: points[0].get_x(),
            max_x: points[points.len() - 1].get_x(),
            is_knot_spacing_uniform,
        })
    }

    /// Fits a natural cubic spline from parallel coordinate slices.
    /// # Errors
    /// [SplineError::UnequalLength] when `x` and `y` differ in length, otherwise as [CubicSpline::fit].
    pub fn from_xy(x: &[f64], y: &[f64]) -> Result<Self, SplineError> {
        if x.len() != y.len() {
            return Err(SplineError::UnequalLength { x_len: x.len(), y_len: y.len() });
        }
        let points: Vec<Point> = x.iter().zip(y).map(|(&x, &y)| Point::new(x, y)).collect();
        Self::fit(&points)
    }

    /// Evaluates the spline at `x`.
    ///
    /// Never fails: above the last knot the last segment is extrapolated, below the first
    /// knot (or for NaN) the result is `0.0`.
    /// # Example
    /// ```
    /// use natural_spline::{CubicSpline, Point};
    /// use assert_approx_eq::assert_approx_eq;
    ///
    /// let points = vec![Point::new(1.0, 2.0), Point::new(2.0, 3.0), Point::new(3.0, 5.0)];
    /// let spline = CubicSpline::fit(&points).unwrap();
    ///
    /// assert_approx_eq!(3.0, spline.evaluate(2.0), 1e-12);
    /// assert_eq!(0.0, spline.evaluate(0.5));
    /// ```
    pub fn evaluate(&self, x: f64) -> f64 {
        match self.find_segment_index(x) {
            Some(index) => self.segments[index].evaluate(x),
            None => {
                log::trace!("x = {} is below the first knot {}, returning 0", x, self.min_x);
                0.0
            }
        }
    }

    /// Same as [CubicSpline::evaluate], but reports queries without a segment.
    /// # Errors
    /// [SplineError::OutOfDomainLow] below the first knot, [SplineError::NanQuery] for NaN.
    pub fn try_evaluate(&self, x: f64) -> Result<f64, SplineError> {
        match self.find_segment_index(x) {
            Some(index) => Ok(self.segments[index].evaluate(x)),
            None => Err(self.no_segment_error(x)),
        }
    }

    /// Evaluates every element of `x_vector`. Results match [CubicSpline::evaluate] element-wise;
    /// sorted input is cheapest since the previous segment is tried first.
    pub fn evaluate_many(&self, x_vector: &[f64]) -> Vec<f64> {
        let mut index = 0;
        x_vector
            .iter()
            .map(|&x| match self.find_segment_index_with_hint(index, x) {
                Some(found) => {
                    index = found;
                    self.segments[found].evaluate(x)
                }
                None => 0.0,
            })
            .collect()
    }

    /// Checked counterpart of [CubicSpline::evaluate_many]; fails on the first query without a segment.
    pub fn try_evaluate_many(&self, x_vector: &[f64]) -> Result<Vec<f64>, SplineError> {
        let mut results = Vec::with_capacity(x_vector.len());
        let mut index = 0;

        for &x in x_vector {
            index = match self.find_segment_index_with_hint(index, x) {
                Some(found) => found,
                None => return Err(self.no_segment_error(x)),
            };
            results.push(self.segments[index].evaluate(x));
        }
        Ok(results)
    }

    pub fn segments(&self) -> &[SplineSegment] {
        &self.segments
    }

    /// First and last knot x-coordinates.
    pub fn domain(&self) -> (f64, f64) {
        (self.min_x, self.max_x)
    }

    fn no_segment_error(&self, x: f64) -> SplineError {
        if x.is_nan() {
            SplineError::NanQuery
        } else {
            SplineError::OutOfDomainLow { got: x, x_min: self.min_x }
        }
    }

    fn find_segment_index(&self, x: f64) -> Option<usize> {
        // false for NaN as well
        if !(x >= self.min_x) {
            return None;
        }
        if self.is_knot_spacing_uniform {
            Some(self.find_segment_index_uniform(x))
        } else {
            Some(self.find_segment_index_bisect(x))
        }
    }

    fn find_segment_index_bisect(&self, x: f64) -> usize {
        self.segments.partition_point(|s| s.get_x() <= x) - 1
    }

    fn find_segment_index_uniform(&self, x: f64) -> usize {
        let size = self.segments.len();
        let step = (self.max_x - self.min_x) / size as f64;
        let guess = ((x - self.min_x) / step).floor();

        let mut index = if guess >= (size - 1) as f64 { size - 1 } else { guess as usize };

        // rounding in the guess can land one segment off next to a knot
        while index > 0 && x < self.segments[index].get_x() {
            index -= 1;
        }
        while index + 1 < size && x >= self.segments[index + 1].get_x() {
            index += 1;
        }
        index
    }

    fn find_segment_index_with_hint(&self, index_hint: usize, x: f64) -> Option<usize> {
        if self.is_in_segment(index_hint, x) {
            Some(index_hint)
        } else if index_hint + 1 < self.segments.len() && self.is_in_segment(index_hint + 1, x) {
            Some(index_hint + 1)
        } else {
            self.find_segment_index(x)
        }
    }

    fn is_in_segment(&self, index: usize, x: f64) -> bool {
        self.segments[index].get_x() <= x
            && (index + 1 == self.segments.len() || x < self.segments[index + 1].get_x())
    }
}

fn check_points(points: &[Point], config: &SplineConfig) -> Result<(), SplineError> {
    if points.len() < 2 {
        return Err(SplineError::InsufficientPoints { got: points.len() });
    }

    if let Some(index) = points.iter().position(|p| !p.is_finite()) {
        return Err(SplineError::NonFiniteValue { index });
    }

    for (i, pair) in points.windows(2).enumerate() {
        let previous = pair[0].get_x();
        let current = pair[1].get_x();
        let spacing = current - previous;

        if spacing.abs() < config.get_min_spacing() {
            return Err(SplineError::DuplicateX { index: i + 1, x1: previous, x2: current });
        }
        if spacing < 0.0 {
            return Err(SplineError::NonIncreasingX { index: i + 1, previous, current });
        }
    }
    Ok(())
}

fn is_knot_spacing_uniform(points: &[Point], tolerance: f64) -> bool {
    let x_spacing_vec: Vec<f64> = points
        .windows(2)
        .map(|w| w[1].get_x() - w[0].get_x())
        .collect();

    x_spacing_vec
        .windows(2)
        .map(|spacing| (spacing[1] - spacing[0]).abs())
        .all(|difference| difference < tolerance)
}
