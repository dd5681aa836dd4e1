use log::debug;

use crate::Float;
use crate::image::{Image, border_effect::BorderEffect};
use crate::filter::{sobel_x, sobel_y, kernel::Kernel, gauss_kernel::{GaussKernel, GaussKernelType}};
use crate::features::ImagePoint;
use crate::descriptor::angle::normalize_angle;
use crate::descriptor::orientation_histogram::Descriptor;

/// Gradient magnitude and direction in [0, 2pi) at (i,j).
pub fn gradient_and_orientation(x_gradient: &Image, y_gradient: &Image, i: isize, j: isize, border_effect: BorderEffect) -> (Float, Float) {
    let dx = x_gradient.get_value(i, j, border_effect);
    let dy = y_gradient.get_value(i, j, border_effect);
    ((dx.powi(2) + dy.powi(2)).sqrt(), normalize_angle(dy.atan2(dx)))
}

fn net_step(window_diameter: usize, size: usize) -> usize {
    (window_diameter as Float / size as Float).ceil() as usize
}

/// One descriptor per point. The 2r x 2r window starting at (row - r, column - r) is weighted by a full gauss kernel
/// of radius r and split into a size x size grid of cells.
pub fn basic_descriptors(image: &Image, points: &Vec<ImagePoint>, radius: usize, size: usize, orientations_count: usize, border_effect: BorderEffect) -> Vec<Descriptor> {
    let x_gradient = sobel_x(image, border_effect);
    let y_gradient = sobel_y(image, border_effect);
    let gauss_kernel = GaussKernel::new(radius, GaussKernelType::FULL);
    let weights = gauss_kernel.kernel();
    let window_diameter = 2*radius;
    let step = net_step(window_diameter, size);
    let radius_signed = radius as isize;

    let descriptors = points.iter().map(|point| {
        let mut descriptor = Descriptor::new(point.row, point.column, 0.0, size, orientations_count);
        for kernel_i in 0..window_diameter {
            for kernel_j in 0..window_diameter {
                let i = point.row as isize - radius_signed + kernel_i as isize;
                let j = point.column as isize - radius_signed + kernel_j as isize;
                let (magnitude, orientation) = gradient_and_orientation(&x_gradient, &y_gradient, i, j, border_effect);
                let weighted_magnitude = magnitude*weights.buffer[(kernel_i, kernel_j)];
                descriptor.add_value_on_angle_with_index(kernel_i/step, kernel_j/step, orientation, weighted_magnitude);
            }
        }
        descriptor.normalize();
        descriptor
    }).collect::<Vec<Descriptor>>();

    debug!("extracted {} basic descriptors for {} points", descriptors.len(), points.len());
    descriptors
}

/// Dominant gradient directions around `point` from a single cell histogram over the 2r x 2r window.
pub fn dominant_orientations(point: &ImagePoint, radius: usize, x_gradient: &Image, y_gradient: &Image, weights: &Image, dominant_orientation_bins: usize, second_threshold: Float, border_effect: BorderEffect) -> Vec<Float> {
    let mut histogram = Descriptor::orientation_histogram(dominant_orientation_bins);
    let radius_signed = radius as isize;

    for kernel_i in 0..2*radius {
        for kernel_j in 0..2*radius {
            let i = point.row as isize - radius_signed + kernel_i as isize;
            let j = point.column as isize - radius_signed + kernel_j as isize;
            let (magnitude, orientation) = gradient_and_orientation(x_gradient, y_gradient, i, j, border_effect);
            histogram.add_value_on_angle(orientation, magnitude*weights.buffer[(kernel_i, kernel_j)]);
        }
    }

    histogram.max_orientation_interpolated_angles(second_threshold)
}

/// One descriptor per point and dominant orientation. Dominant orientations come from a window of twice the radius.
/// The window is rotated by the orientation so that samples landing in the basic [-r, r-1]^2 window are binned
/// into the grid, with the orientation subtracted from every gradient direction.
pub fn rotation_invariant_descriptors(image: &Image, points: &Vec<ImagePoint>, radius: usize, size: usize, orientations_count: usize, dominant_orientation_bins: usize, second_threshold: Float, border_effect: BorderEffect) -> Vec<Descriptor> {
    let x_gradient = sobel_x(image, border_effect);
    let y_gradient = sobel_y(image, border_effect);
    let extra_radius = 2*radius;
    let extra_kernel = GaussKernel::new(extra_radius, GaussKernelType::FULL);
    let basic_kernel = GaussKernel::new(radius, GaussKernelType::FULL);
    let basic_weights = basic_kernel.kernel();
    let step = net_step(2*radius, size);
    let radius_signed = radius as isize;
    let extra_radius_signed = extra_radius as isize;

    let mut descriptors: Vec<Descriptor> = Vec::with_capacity(points.len());
    for point in points {
        let angles = dominant_orientations(point, extra_radius, &x_gradient, &y_gradient, extra_kernel.kernel(), dominant_orientation_bins, second_threshold, border_effect);
        for angle in angles {
            let mut descriptor = Descriptor::new(point.row, point.column, angle, size, orientations_count);
            let (sin_angle, cos_angle) = angle.sin_cos();

            for di in -extra_radius_signed..extra_radius_signed {
                for dj in -extra_radius_signed..extra_radius_signed {
                    let rotated_i = (di as Float*cos_angle - dj as Float*sin_angle).round() as isize;
                    let rotated_j = (di as Float*sin_angle + dj as Float*cos_angle).round() as isize;
                    if rotated_i < -radius_signed || rotated_i >= radius_signed || rotated_j < -radius_signed || rotated_j >= radius_signed {
                        continue;
                    }

                    let window_i = (rotated_i + radius_signed) as usize;
                    let window_j = (rotated_j + radius_signed) as usize;
                    let (magnitude, orientation) = gradient_and_orientation(&x_gradient, &y_gradient, point.row as isize + di, point.column as isize + dj, border_effect);
                    let weighted_magnitude = magnitude*basic_weights.buffer[(window_i, window_j)];
                    descriptor.add_value_on_angle_with_index(window_i/step, window_j/step, orientation - angle, weighted_magnitude);
                }
            }

            descriptor.normalize();
            descriptors.push(descriptor);
        }
    }

    debug!("extracted {} rotation invariant descriptors for {} points", descriptors.len(), points.len());
    descriptors
}
