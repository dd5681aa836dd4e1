use log::debug;

use crate::Float;
use crate::image::{Image, border_effect::BorderEffect};
use crate::features::ImagePoint;


/// Pixels >= `threshold` that are strictly larger than every border sampled neighbour in the (2*shift+1)^2 window.
/// Points are returned in row-major scan order.
pub fn get_local_maximums(image: &Image, shift: usize, threshold: Float, border_effect: BorderEffect) -> Vec<ImagePoint> {

    let mut maximums: Vec<ImagePoint> = Vec::new();
    let shift_signed = shift as isize;

    for i in 0..image.height() {
        for j in 0..image.width() {

            let sample_value = image.buffer[(i,j)];
            if sample_value < threshold {
                continue;
            }

            if is_sample_maximum_in_neighbourhood(image, i as isize, j as isize, sample_value, shift_signed, border_effect) {
                maximums.push(ImagePoint::new(i, j, sample_value));
            }
        }
    }

    debug!("{} local maximums above {}", maximums.len(), threshold);
    maximums
}

fn is_sample_maximum_in_neighbourhood(image: &Image, i: isize, j: isize, sample: Float, shift: isize, border_effect: BorderEffect) -> bool {
    for di in -shift..shift+1 {
        for dj in -shift..shift+1 {
            if di == 0 && dj == 0 {
                continue;
            }
            if image.get_value(i + di, j + dj, border_effect) >= sample {
                return false;
            }
        }
    }
    true
}

/// Greedy radius-growing suppression. With the radius increasing from 0 up to the image diagonal,
/// point j is removed when some point i != j lies within the radius and `filter_value*v_i > v_j`.
/// The walk is index based: after a removal the scan continues at index i, which holds the next point
/// whenever j < i, with j starting again from 0. The result only depends on the input order.
/// Expects `filter_value <= 1`, a point never suppresses itself.
pub fn non_max_suppression(image: &Image, points: &Vec<ImagePoint>, limit_count: usize, filter_value: Float) -> Vec<ImagePoint> {

    let mut result = points.clone();
    let max_radius = ((image.height() as Float).powi(2) + (image.width() as Float).powi(2)).sqrt().ceil() as usize;

    let mut radius = 0;
    while result.len() > limit_count && radius <= max_radius {
        let radius_float = radius as Float;
        let mut i = 0;
        while i < result.len() && result.len() > limit_count {
            let dominated = (0..result.len()).find(|&j|
                j != i &&
                result[i].distance_to(&result[j]) <= radius_float &&
                filter_value*result[i].value > result[j].value
            );

            match dominated {
                Some(j) => {
                    result.remove(j);
                },
                None => i += 1
            };
        }
        radius += 1;
    }

    debug!("non max suppression kept {} of {} points, stopped at radius {}", result.len(), points.len(), radius);
    result
}
