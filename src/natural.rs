use nalgebra::DVector;

use crate::{point::Point, segment::SplineSegment};

/// Working buffers of a single natural spline fit. Indices follow the knots:
/// `h`, `alpha` and `mu` have one entry per interval, `l` and `z` one per knot.
/// Entries that the recurrences never write stay at their boundary value 0
/// (`alpha[0]`, `mu[0]`, `z[0]`, `z[n]`).
struct TridiagonalSystem {
    h: DVector<f64>,
    alpha: DVector<f64>,
    l: DVector<f64>,
    mu: DVector<f64>,
    z: DVector<f64>,
}

impl TridiagonalSystem {
    fn new(points: &[Point]) -> Self {
        let number_of_intervals = points.len() - 1;

        let h = DVector::from_iterator(
            number_of_intervals,
            points.windows(2).map(|w| w[1].get_x() - w[0].get_x()),
        );

        let mut alpha = DVector::<f64>::zeros(number_of_intervals);
        for i in 1..number_of_intervals {
            alpha[i] = 3.0 / h[i] * (points[i + 1].get_y() - points[i].get_y())
                - 3.0 / h[i - 1] * (points[i].get_y() - points[i - 1].get_y());
        }

        let mut l = DVector::<f64>::zeros(number_of_intervals + 1);
        l[0] = 1.0;
        l[number_of_intervals] = 1.0;

        TridiagonalSystem {
            h,
            alpha,
            l,
            mu: DVector::zeros(number_of_intervals),
            z: DVector::zeros(number_of_intervals + 1),
        }
    }

    fn forward_elimination(&mut self, points: &[Point]) {
        for i in 1..self.h.len() {
            self.l[i] = 2.0 * (points[i + 1].get_x() - points[i - 1].get_x()) - self.h[i - 1] * self.mu[i - 1];
            self.mu[i] = self.h[i] / self.l[i];
            self.z[i] = (self.alpha[i] - self.h[i - 1] * self.z[i - 1]) / self.l[i];
        }
    }

    /// Second derivative halves `c[0..=n]`, with `c[0] = c[n] = 0`.
    fn back_substitution(&self) -> DVector<f64> {
        let number_of_intervals = self.h.len();
        let mut c = DVector::<f64>::zeros(number_of_intervals + 1);

        for j in (0..number_of_intervals).rev() {
            c[j] = self.z[j] - self.mu[j] * c[j + 1];
        }
        c
    }

    fn create_segments(&self, points: &[Point], c: &DVector<f64>) -> Vec<SplineSegment> {
        (0..self.h.len())
            .map(|j| {
                let h = self.h[j];
                let a = points[j].get_y();
                let b = (points[j + 1].get_y() - a) / h - h * (c[j + 1] + 2.0 * c[j]) / 3.0;
                let d = (c[j + 1] - c[j]) / (3.0 * h);
                SplineSegment::new(a, b, c[j], d, points[j].get_x())
            })
            .collect()
    }
}

/// Solves the natural cubic spline system for `points` and returns one segment per interval.
///
/// Expects at least 2 points with strictly increasing x. Validation happens in
/// [CubicSpline](crate::CubicSpline) before this is reached.
pub(crate) fn natural_cubic_segments(points: &[Point]) -> Vec<SplineSegment> {
    let mut system = TridiagonalSystem::new(points);
    system.forward_elimination(points);
    let c = system.back_substitution();
    system.create_segments(points, &c)
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use nalgebra::DMatrix;

    use super::*;

    fn sample_points() -> Vec<Point> {
        vec![
            Point::new(1.0, 2.0),
            Point::new(2.0, 3.0),
            Point::new(3.0, 5.0),
            Point::new(4.0, 7.0),
            Point::new(5.0, 11.0),
        ]
    }

    #[test]
    fn sample_coefficients() {
        let eps = 1e-12;
        let segments = natural_cubic_segments(&sample_points());

        assert_eq!(4, segments.len());

        let expected_b = [0.6964285714285714, 1.6071428571428572, 1.875, 2.892857142857143];
        let expected_c = [0.0, 0.9107142857142857, -0.6428571428571429, 1.6607142857142858];
        let expected_d = [0.30357142857142855, -0.5178571428571429, 0.7678571428571429, -0.5535714285714286];

        for (i, segment) in segments.iter().enumerate() {
            assert_eq!(sample_points()[i].get_y(), segment.get_a());
            assert_eq!(sample_points()[i].get_x(), segment.get_x());
            assert_approx_eq!(expected_b[i], segment.get_b(), eps);
            assert_approx_eq!(expected_c[i], segment.get_c(), eps);
            assert_approx_eq!(expected_d[i], segment.get_d(), eps);
        }
    }

    #[test]
    fn two_points_give_straight_line() {
        let points = vec![Point::new(-1.0, 4.0), Point::new(3.0, -2.0)];
        let segments = natural_cubic_segments(&points);

        assert_eq!(1, segments.len());
        assert_eq!(4.0, segments[0].get_a());
        assert_approx_eq!(-1.5, segments[0].get_b(), 1e-12);
        assert_eq!(0.0, segments[0].get_c());
        assert_eq!(0.0, segments[0].get_d());
    }

    #[test]
    fn collinear_points_have_no_curvature() {
        // y = 3x - 1 on non-uniform knots
        let points: Vec<Point> = [-2.0, 0.0, 0.3, 1.7, 4.2]
            .iter()
            .map(|&x| Point::new(x, 3.0 * x - 1.0))
            .collect();
        let segments = natural_cubic_segments(&points);

        for segment in segments.iter() {
            assert_approx_eq!(3.0, segment.get_b(), 1e-12);
            assert_approx_eq!(0.0, segment.get_c(), 1e-12);
            assert_approx_eq!(0.0, segment.get_d(), 1e-12);
        }
    }

    #[test]
    fn thomas_solve_matches_dense_lu() {
        let points = vec![
            Point::new(0.0, 1.0),
            Point::new(0.4, -1.0),
            Point::new(1.1, 0.5),
            Point::new(2.0, 0.0),
            Point::new(3.7, 3.0),
            Point::new(4.0, 1.0),
        ];
        let n = points.len() - 1;

        let mut system = TridiagonalSystem::new(&points);
        system.forward_elimination(&points);
        let c = system.back_substitution();

        let mut matrix = DMatrix::<f64>::zeros(n + 1, n + 1);
        let mut rhs = DVector::<f64>::zeros(n + 1);
        matrix[(0, 0)] = 1.0;
        matrix[(n, n)] = 1.0;
        for i in 1..n {
            matrix[(i, i - 1)] = system.h[i - 1];
            matrix[(i, i)] = 2.0 * (system.h[i - 1] + system.h[i]);
            matrix[(i, i + 1)] = system.h[i];
            rhs[i] = system.alpha[i];
        }
        let dense = matrix.lu().solve(&rhs).unwrap();

        for i in 0..=n {
            assert_approx_eq!(dense[i], c[i], 1e-10);
        }
    }

    #[test]
    fn independent_fits_do_not_share_state() {
        let first = natural_cubic_segments(&sample_points());
        let _other = natural_cubic_segments(&[Point::new(0.0, 100.0), Point::new(1.0, -50.0), Point::new(2.0, 7.0)]);
        let second = natural_cubic_segments(&sample_points());

        assert_eq!(first, second);
    }
}
