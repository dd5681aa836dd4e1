extern crate nalgebra as na;

use na::Matrix2;
use crate::Float;
use crate::image::{Image, scalar_multiply, image_encoding::ImageEncoding, border_effect::BorderEffect};
use crate::filter::{sobel_x, sobel_y, gauss};


pub fn harris_matrix(a: Float, b: Float, c: Float) -> Matrix2<Float> {
    Matrix2::new(a,b,
                b,c)
}

/// Eigenvalues (smaller, larger) of the symmetric structure tensor [[a,b],[b,c]]
pub fn structure_tensor_eigenvalues(harris_matrix: &Matrix2<Float>) -> (Float,Float) {
    let a = harris_matrix[(0,0)];
    let b = harris_matrix[(0,1)];
    let c = harris_matrix[(1,1)];
    let d = ((a-c).powi(2) + 4.0*b.powi(2)).sqrt();
    ((a + c - d)/2.0, (a + c + d)/2.0)
}

pub fn harris_response(harris_matrix: &Matrix2<Float>) -> Float {
    let (lambda_minus, lambda_plus) = structure_tensor_eigenvalues(harris_matrix);
    lambda_minus.abs().min(lambda_plus.abs())
}

/// Smaller eigenvalue of the gaussian smoothed structure tensor at every pixel.
pub fn harris(image: &Image, sigma: Float, border_effect: BorderEffect) -> Image {
    let x_gradient = sobel_x(image, border_effect);
    let y_gradient = sobel_y(image, border_effect);

    let a = gauss(&scalar_multiply(&x_gradient, &x_gradient), sigma, border_effect);
    let b = gauss(&scalar_multiply(&x_gradient, &y_gradient), sigma, border_effect);
    let c = gauss(&scalar_multiply(&y_gradient, &y_gradient), sigma, border_effect);

    let mut response = Image::empty(image.height(), image.width(), ImageEncoding::F64);
    for i in 0..image.height() {
        for j in 0..image.width() {
            let tensor = harris_matrix(a.buffer[(i,j)], b.buffer[(i,j)], c.buffer[(i,j)]);
            response.buffer[(i,j)] = harris_response(&tensor);
        }
    }

    response
}
