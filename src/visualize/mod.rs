extern crate image as image_rs;

use image_rs::{RgbImage, Rgb};
use rand::Rng;

use crate::image::Image;
use crate::features::ImagePoint;
use crate::descriptor::orientation_histogram::Descriptor;
use crate::matching::DescriptorMatch;

pub mod plot;

const POINT_COLOR: Rgb<u8> = Rgb([255, 0, 0]);
const BACKGROUND_COLOR: Rgb<u8> = Rgb([255, 255, 255]);

fn to_rgb(image: &Image) -> RgbImage {
    let gray = image.to_image();
    RgbImage::from_fn(gray.width(), gray.height(), |x, y| {
        let v = gray.get_pixel(x, y).0[0];
        Rgb([v, v, v])
    })
}

fn put_pixel_checked(target: &mut RgbImage, row: isize, column: isize, color: Rgb<u8>) -> () {
    if row >= 0 && column >= 0 && (row as u32) < target.height() && (column as u32) < target.width() {
        target.put_pixel(column as u32, row as u32, color);
    }
}

// 3x3 square centered on (row, column), clipped at the canvas border
pub fn draw_square(target: &mut RgbImage, row: usize, column: usize, color: Rgb<u8>) -> () {
    for di in -1..2 {
        for dj in -1..2 {
            put_pixel_checked(target, row as isize + di, column as isize + dj, color);
        }
    }
}

pub fn draw_points(image: &Image, points: &Vec<ImagePoint>) -> RgbImage {
    let mut target = to_rgb(image);
    for point in points {
        draw_square(&mut target, point.row, point.column, POINT_COLOR);
    }
    target
}

/// Both images side by side on a white canvas, one randomly colored line per match.
pub fn display_matches<R: Rng>(image_a: &Image, descriptors_a: &Vec<Descriptor>, image_b: &Image, descriptors_b: &Vec<Descriptor>, matches: &Vec<DescriptorMatch>, rng: &mut R) -> RgbImage {
    let width = (image_a.width() + image_b.width()) as u32;
    let height = std::cmp::max(image_a.height(), image_b.height()) as u32;
    let column_offset = image_a.width();

    let mut target = RgbImage::from_pixel(width, height, BACKGROUND_COLOR);
    for (x, y, pixel) in to_rgb(image_a).enumerate_pixels() {
        target.put_pixel(x, y, *pixel);
    }
    for (x, y, pixel) in to_rgb(image_b).enumerate_pixels() {
        target.put_pixel(x + column_offset as u32, y, *pixel);
    }

    for descriptor_match in matches {
        let source = &descriptors_a[descriptor_match.source_index];
        let target_descriptor = &descriptors_b[descriptor_match.target_index];
        let color = Rgb([rng.gen::<u8>(), rng.gen::<u8>(), rng.gen::<u8>()]);

        let start = (source.row as isize, source.column as isize);
        let end = (target_descriptor.row as isize, (target_descriptor.column + column_offset) as isize);
        for (row, column) in line_bresenham(start, end) {
            put_pixel_checked(&mut target, row, column, color);
        }
    }

    target
}

// https://en.wikipedia.org/wiki/Bresenham%27s_line_algorithm
/// Integer raster of the segment between two (row, column) points, both ends included.
pub fn line_bresenham(point_a: (isize, isize), point_b: (isize, isize)) -> Vec<(isize, isize)> {
    let (mut y0, mut x0) = point_a;
    let (y1, x1) = point_b;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let mut points = Vec::with_capacity((dx - dy + 1) as usize);
    loop {
        points.push((y0, x0));
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2*err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
    points
}
