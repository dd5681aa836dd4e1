extern crate nalgebra as na;

use na::DMatrix;
use crate::{Float,float};
use crate::image::{Image, image_encoding::ImageEncoding};
use float::consts::PI;
use super::kernel::Kernel;

#[repr(u8)]
#[derive(Debug,Copy,Clone,PartialEq)]
pub enum GaussKernelType {
    FULL,
    ROW,
    COLUMN
}

pub struct GaussKernel {
    kernel: Image,
    sigma: Float
}

impl GaussKernel {
    fn sample(x: Float, y: Float, sigma: Float) -> Float {
        let variance = sigma.powi(2);
        let exponent = (-(x.powi(2) + y.powi(2))/(2.0*variance)).exp();
        exponent/(2.0*PI*variance)
    }

    /// Kernel of side 2*radius with sigma = side/3, rescaled so the weights sum to exactly 1.
    pub fn new(radius: usize, kernel_type: GaussKernelType) -> GaussKernel {
        assert!(radius > 0, "gauss kernel radius must be positive");

        let size = 2*radius;
        let sigma = size as Float/3.0;
        let center = size as Float/2.0;
        let (rows, cols) = match kernel_type {
            GaussKernelType::FULL => (size, size),
            GaussKernelType::ROW => (1, size),
            GaussKernelType::COLUMN => (size, 1)
        };

        let mut weights = DMatrix::<Float>::from_fn(rows, cols, |i, j| {
            let x = match kernel_type {
                GaussKernelType::ROW => 0.0,
                _ => center - i as Float
            };
            let y = match kernel_type {
                GaussKernelType::COLUMN => 0.0,
                _ => center - j as Float
            };
            GaussKernel::sample(x, y, sigma)
        });

        let sum = weights.sum();
        weights /= sum;

        GaussKernel {
            kernel: Image::from_matrix(&weights, ImageEncoding::F64),
            sigma
        }
    }

    pub fn sigma(&self) -> Float {
        self.sigma
    }
}

impl Kernel for GaussKernel {
    fn kernel(&self) -> &Image {
        &self.kernel
    }
}
