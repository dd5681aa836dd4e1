use crate::{Float,float};
use float::consts::PI;

pub const BIN_EPSILON: Float = 1e-9;

/// Reduces `alpha` into [0, 2pi). Angles within BIN_EPSILON of a multiple of 2pi become 0.
pub fn normalize_angle(alpha: Float) -> Float {
    let two_pi = 2.0*PI;
    match alpha.rem_euclid(two_pi) {
        reduced if reduced <= BIN_EPSILON || two_pi - reduced <= BIN_EPSILON => 0.0,
        reduced => reduced
    }
}

/// Vertex offset of the parabola through (-1,left), (0,center), (1,right), kept within [-0.5,0.5].
pub fn parabolic_interpolation(left: Float, center: Float, right: Float) -> Float {
    let denominator = 2.0*(left + right - 2.0*center);
    if denominator == 0.0 {
        return 0.0;
    }
    (-(right - left)/denominator).clamp(-0.5, 0.5)
}

/// Peak angle of circular histogram `bins` around `bin`. Bin k covers [k, k+1)*bin_range.
pub fn interpolated_angle(bins: &[Float], bin: usize) -> Float {
    let len = bins.len();
    assert!(bin < len);

    let left = bins[(len + bin - 1) % len];
    let center = bins[bin];
    let right = bins[(bin + 1) % len];
    let bin_range = 2.0*PI/(len as Float);

    normalize_angle((bin as Float + 0.5 + parabolic_interpolation(left, center, right))*bin_range)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_angles_wrap_around() {
        assert!((normalize_angle(-PI/2.0) - 1.5*PI).abs() < 1e-12);
        assert!((normalize_angle(5.0*PI) - PI).abs() < 1e-12);
    }

    #[test]
    fn symmetric_neighbours_keep_bin_center() {
        let bins = [0.0, 1.0, 4.0, 1.0];
        let expected = 2.5*PI/2.0;
        assert!((interpolated_angle(&bins, 2) - expected).abs() < 1e-12);
    }

    #[test]
    fn peak_leans_towards_larger_neighbour() {
        assert!(parabolic_interpolation(1.0, 4.0, 3.0) > 0.0);
        assert!(parabolic_interpolation(3.0, 4.0, 1.0) < 0.0);
        assert_eq!(parabolic_interpolation(2.0, 2.0, 2.0), 0.0);
    }

    #[test]
    fn first_bin_uses_last_bin_as_left_neighbour() {
        let bins = [4.0, 1.0, 0.0, 3.0];
        let angle = interpolated_angle(&bins, 0);
        // leaning left from the center of bin 0 stays inside bin 0
        assert!(angle > 0.0 && angle < 0.25*PI);
    }
}
