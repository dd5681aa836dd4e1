use crate::{Float,float};
use crate::image::{Image, image_encoding::ImageEncoding, border_effect::BorderEffect};

/// Minimum over the 8 unit shifts of the squared difference between the (2*shift+1)^2 window and its shifted copy.
pub fn moravec(image: &Image, shift: usize, border_effect: BorderEffect) -> Image {
    let height = image.height();
    let width = image.width();
    let shift_signed = shift as isize;
    let mut response = Image::empty(height, width, ImageEncoding::F64);

    for i in 0..height {
        for j in 0..width {
            let i_signed = i as isize;
            let j_signed = j as isize;
            let mut min_value = float::MAX;
            for u in -1..2isize {
                for v in -1..2isize {
                    if u == 0 && v == 0 {
                        continue;
                    }
                    let mut value: Float = 0.0;
                    for a in -shift_signed..shift_signed+1 {
                        for b in -shift_signed..shift_signed+1 {
                            let shifted = image.get_value(i_signed + u + a, j_signed + v + b, border_effect);
                            let original = image.get_value(i_signed + a, j_signed + b, border_effect);
                            value += (shifted - original).powi(2);
                        }
                    }
                    min_value = min_value.min(value);
                }
            }
            response.buffer[(i,j)] = min_value;
        }
    }

    response
}
