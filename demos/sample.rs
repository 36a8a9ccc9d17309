extern crate natural_spline;

use natural_spline::{CubicSpline, Point};

fn main() {
    env_logger::init();

    let points: Vec<Point> = vec![(1.0, 2.0), (2.0, 3.0), (3.0, 5.0), (4.0, 7.0), (5.0, 11.0)]
        .into_iter()
        .map(Point::from)
        .collect();
    let z = [1.5, 2.5, 3.5, 4.5];

    let spline = CubicSpline::fit(&points).unwrap();

    for (zi, yi) in z.iter().zip(spline.evaluate_many(&z)) {
        println!("Spline({:.2}) = {:.2}", zi, yi);
    }
}
