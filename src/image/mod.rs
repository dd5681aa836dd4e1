extern crate image as image_rs;
extern crate nalgebra as na;

use std::ops::Sub;
use image_rs::{GrayImage, RgbImage, Pixel, Luma};
use na::DMatrix;

use crate::Float;
use self::{image_encoding::ImageEncoding, border_effect::BorderEffect, grayscale::GrayscaleMode};

pub mod image_encoding;
pub mod border_effect;
pub mod grayscale;

/// Dense grid of samples. Rows of the matrix are image rows (i), columns are image columns (j).
#[derive(Debug,Clone)]
pub struct Image {
    pub buffer: DMatrix<Float>,
    pub original_encoding: ImageEncoding
}

impl Image {

    pub fn empty(height: usize, width: usize, image_encoding: ImageEncoding) -> Image {
        let buffer = DMatrix::<Float>::zeros(height,width);
        Image{ buffer, original_encoding: image_encoding}
    }

    pub fn from_matrix(matrix: &DMatrix<Float>, original_encoding: ImageEncoding) -> Image {
        Image{ buffer: matrix.clone(), original_encoding}
    }

    /// `data` is read in row-major order and must hold exactly `height*width` samples.
    pub fn from_row_slice(height: usize, width: usize, data: &[Float], original_encoding: ImageEncoding) -> Image {
        assert_eq!(data.len(), height*width, "data length {} does not match {}x{}", data.len(), height, width);
        Image{ buffer: DMatrix::<Float>::from_row_slice(height, width, data), original_encoding}
    }

    pub fn from_gray_image(image: &GrayImage) -> Image {
        let (width, height) = image.dimensions();
        let buffer = DMatrix::<Float>::from_fn(height as usize, width as usize, |i,j| {
            let pixel = image.get_pixel(j as u32, i as u32);
            pixel.channels()[0] as Float / 255.0
        });
        Image{ buffer, original_encoding: ImageEncoding::U8}
    }

    pub fn from_rgb_image(image: &RgbImage, grayscale_mode: GrayscaleMode) -> Image {
        let (width, height) = image.dimensions();
        let buffer = DMatrix::<Float>::from_fn(height as usize, width as usize, |i,j| {
            let channels = image.get_pixel(j as u32, i as u32).channels();
            grayscale_mode.luminance(channels[0], channels[1], channels[2])
        });
        Image{ buffer, original_encoding: ImageEncoding::U8}
    }

    pub fn to_image(&self) -> GrayImage {
        let (rows, cols) = self.buffer.shape();

        let mut gray_image = GrayImage::new(cols as u32, rows as u32);
        let max = self.buffer.max();
        let min = self.buffer.min();
        for c in 0..cols {
            for r in 0..rows {
                let val = self.buffer[(r, c)];
                let pixel_value = self.original_encoding.normalize_to_gray(max,min,val);
                gray_image.put_pixel(c as u32, r as u32, Luma([pixel_value]));
            }
        }
        gray_image
    }

    pub fn height(&self) -> usize {
        self.buffer.nrows()
    }

    pub fn width(&self) -> usize {
        self.buffer.ncols()
    }

    pub fn size(&self) -> usize {
        self.buffer.ncols()*self.buffer.nrows()
    }

    pub fn same_size(&self, other: &Image) -> bool {
        self.buffer.shape() == other.buffer.shape()
    }

    pub fn contains(&self, i: isize, j: isize) -> bool {
        i >= 0 && i < self.height() as isize && j >= 0 && j < self.width() as isize
    }

    pub fn get(&self, i: usize, j: usize) -> Float {
        assert!(i < self.height() && j < self.width(), "({},{}) is outside of image with (height,width): ({},{})", i, j, self.height(), self.width());
        self.buffer[(i,j)]
    }

    pub fn set(&mut self, i: usize, j: usize, value: Float) -> () {
        assert!(i < self.height() && j < self.width(), "({},{}) is outside of image with (height,width): ({},{})", i, j, self.height(), self.width());
        self.buffer[(i,j)] = value;
    }

    /// Samples at (i,j), resolving coordinates outside the image with `border_effect`.
    pub fn get_value(&self, i: isize, j: isize, border_effect: BorderEffect) -> Float {
        if self.contains(i, j) {
            return self.buffer[(i as usize, j as usize)];
        }

        match (border_effect.resolve(i, self.height()), border_effect.resolve(j, self.width())) {
            (Some(i_resolved), Some(j_resolved)) => self.buffer[(i_resolved, j_resolved)],
            _ => 0.0
        }
    }

    /// Linear rescale to [0,1]. A constant image maps to 0 everywhere.
    pub fn normalize(&self) -> Image {
        let min = self.buffer.min();
        let max = self.buffer.max();
        let range = match max - min {
            r if r == 0.0 => 1.0,
            r => r
        };
        Image{ buffer: self.buffer.map(|v| (v - min)/range), original_encoding: ImageEncoding::U8}
    }

    /// Fresh buffer of exactly height x width. The overlapping region is kept, new cells are 0.
    pub fn resized(&self, height: usize, width: usize) -> Image {
        Image{ buffer: self.buffer.clone().resize(height, width, 0.0), original_encoding: self.original_encoding}
    }

    pub fn downsample_half(&self) -> Image {
        let new_height = self.height()/2;
        let new_width = self.width()/2;

        let mut target = Image::empty(new_height, new_width, self.original_encoding);
        for i in 0..new_height {
            for j in 0..new_width {
                let block_sum = self.buffer[(2*i,2*j)] + self.buffer[(2*i+1,2*j)] + self.buffer[(2*i,2*j+1)] + self.buffer[(2*i+1,2*j+1)];
                target.buffer[(i,j)] = block_sum/4.0;
            }
        }

        target
    }

    /// Direct correlation with `kernel` centered at every pixel (offset = kernel dimension / 2).
    pub fn conv(&self, kernel: &Image, border_effect: BorderEffect) -> Image {
        let height = self.height();
        let width = self.width();
        let kernel_height = kernel.height();
        let kernel_width = kernel.width();
        let kernel_row_offset = (kernel_height/2) as isize;
        let kernel_column_offset = (kernel_width/2) as isize;

        let mut target = Image::empty(height, width, self.original_encoding);

        for i in 0..height {
            for j in 0..width {
                let mut acc = 0.0;
                for u in 0..kernel_height {
                    for v in 0..kernel_width {
                        let sample_i = i as isize + u as isize - kernel_row_offset;
                        let sample_j = j as isize + v as isize - kernel_column_offset;
                        acc += self.get_value(sample_i, sample_j, border_effect)*kernel.buffer[(u,v)];
                    }
                }
                target.buffer[(i,j)] = acc;
            }
        }

        target
    }

}

impl<'a> Sub<&'a Image> for &'a Image {
    type Output = Image;

    fn sub(self, other: &'a Image) -> Image {
        zip(self, other, |x,y| x - y)
    }
}

pub fn zip<F>(a: &Image, b: &Image, f: F) -> Image where F: Fn(Float,Float) -> Float {
    assert!(a.same_size(b), "image shapes differ: {:?} vs {:?}", a.buffer.shape(), b.buffer.shape());
    Image{ buffer: a.buffer.zip_map(&b.buffer, f), original_encoding: ImageEncoding::F64}
}

pub fn scalar_multiply(a: &Image, b: &Image) -> Image {
    zip(a, b, |x,y| x*y)
}

pub fn hypot(a: &Image, b: &Image) -> Image {
    zip(a, b, |x,y| (x*x + y*y).sqrt())
}

pub fn scalar_div(image: &Image, divider: Float) -> Image {
    Image{ buffer: image.buffer.map(|v| v/divider), original_encoding: image.original_encoding}
}
