extern crate image as image_rs;

use std::path::Path;
use std::fs;
use color_eyre::eyre::{Result, WrapErr};
use log::info;

use crate::image::{Image, grayscale::GrayscaleMode};
use crate::Float;
use crate::pyramid::ScalePyramid;

/// Decodes any format supported by the image crate and converts it to luminance in [0,1].
pub fn load_image_as_gray(file_path: &Path, grayscale_mode: GrayscaleMode) -> Result<Image> {
    let rgb_image = image_rs::open(file_path).wrap_err_with(|| format!("could not decode image {}", file_path.display()))?.to_rgb8();
    let image = Image::from_rgb_image(&rgb_image, grayscale_mode);
    info!("loaded {} with (height,width): ({},{})", file_path.display(), image.height(), image.width());
    Ok(image)
}

pub fn save_image(image: &Image, file_path: &Path) -> Result<()> {
    image.to_image().save(file_path).wrap_err_with(|| format!("could not write image {}", file_path.display()))?;
    info!("wrote {}", file_path.display());
    Ok(())
}

pub fn pyramid_file_name(octave: usize, scale: usize, sigma: Float) -> String {
    format!("octave_{}_scale_{}_sigma_{:.4}.png", octave + 1, scale, sigma)
}

/// One png per (octave, scale) inside `folder`, which is created if missing.
pub fn save_pyramid(pyramid: &ScalePyramid, folder: &Path) -> Result<()> {
    fs::create_dir_all(folder).wrap_err_with(|| format!("could not create pyramid folder {}", folder.display()))?;
    for octave in 0..pyramid.octave_count() {
        for scale in 0..pyramid.scales_per_octave() {
            let file_name = pyramid_file_name(octave, scale, pyramid.get_sigma(octave, scale));
            save_image(pyramid.get_scale(octave, scale), &folder.join(file_name))?;
        }
    }
    Ok(())
}
