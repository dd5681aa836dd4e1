use crate::image::{Image, hypot, image_encoding::ImageEncoding, border_effect::BorderEffect};
use crate::{Float, GradientDirection};
use self::{kernel::Kernel, sobel_kernel::SobelKernel, gauss_kernel::{GaussKernel, GaussKernelType}};

pub mod kernel;
pub mod sobel_kernel;
pub mod gauss_kernel;


pub fn convolution(image: &Image, filter_kernel: &dyn Kernel, border_effect: BorderEffect) -> Image {
    image.conv(filter_kernel.kernel(), border_effect)
}

pub fn sobel_x(image: &Image, border_effect: BorderEffect) -> Image {
    gradient(image, GradientDirection::HORIZONTAL, border_effect)
}

pub fn sobel_y(image: &Image, border_effect: BorderEffect) -> Image {
    gradient(image, GradientDirection::VERTICAL, border_effect)
}

/// Gradient magnitude sqrt(gx^2 + gy^2)
pub fn sobel(image: &Image, border_effect: BorderEffect) -> Image {
    hypot(&sobel_x(image, border_effect), &sobel_y(image, border_effect))
}

fn gradient(image: &Image, direction: GradientDirection, border_effect: BorderEffect) -> Image {
    let mut target = convolution(image, &SobelKernel::new(direction), border_effect);
    target.original_encoding = ImageEncoding::F64;
    target
}

pub fn gauss_radius(sigma: Float, height: usize, width: usize) -> usize {
    let radius = ((sigma + 0.5)*3.0).round() as usize;
    let max_radius = std::cmp::min(height, width)/2;
    std::cmp::max(std::cmp::min(radius, max_radius), 1)
}

/// Separable gaussian blur, a row pass followed by a column pass.
pub fn gauss(image: &Image, sigma: Float, border_effect: BorderEffect) -> Image {
    let radius = gauss_radius(sigma, image.height(), image.width());
    let row_kernel = GaussKernel::new(radius, GaussKernelType::ROW);
    let column_kernel = GaussKernel::new(radius, GaussKernelType::COLUMN);
    let blur_row = convolution(image, &row_kernel, border_effect);
    convolution(&blur_row, &column_kernel, border_effect)
}
