//! Geometric utility functions for distance calculations and spatial operations.

use geo::algorithm::Distance;
use geo::{Euclidean, Point};
use ndarray::Array1;

/// Calculates the Euclidean distance between two points.
///
/// # Arguments
///
/// * `a` - First point
/// * `b` - Second point
///
/// # Returns
///
/// The Euclidean distance between `a` and `b`.
pub fn point_distance(a: &Array1<f32>, b: &Array1<f32>) -> f32 {
    let pa = Point::new(a[0], a[1]);
    let pb = Point::new(b[0], b[1]);
    Euclidean.distance(pa, pb)
}

/// Offsets an origin point by polar coordinates.
///
/// The angle is measured from the positive x-axis; y grows downward, matching
/// the screen coordinate system.
///
/// # Arguments
///
/// * `origin` - Point to offset from
/// * `angle` - Direction in radians
/// * `radius` - Distance from the origin
///
/// # Returns
///
/// The offset point.
pub fn offset_polar(origin: &Array1<f32>, angle: f32, radius: f32) -> Array1<f32> {
    Array1::from_vec(vec![
        origin[0] + angle.cos() * radius,
        origin[1] + angle.sin() * radius,
    ])
}
