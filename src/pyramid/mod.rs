use log::{debug,warn};

use crate::Float;
use crate::image::{Image, border_effect::BorderEffect};
use crate::filter::gauss;
use crate::config::FeatureRuntimeParameters;
use self::octave::Octave;

pub mod octave;

pub const MIN_IMAGE_SIZE: usize = 32;

/// Gaussian scale space. Octave o, scale s holds the source blurred to `get_sigma(o,s)` relative
/// to that octave's resolution, every octave is half the size of the previous one.
#[derive(Debug,Clone)]
pub struct ScalePyramid {
    pub octaves: Vec<Octave>,
    scales_per_octave: usize
}

impl ScalePyramid {

    pub fn octave_count_for(height: usize, width: usize) -> usize {
        let min_dim = std::cmp::min(height, width);
        if min_dim == 0 {
            return 0;
        }
        let count = min_dim.ilog2() as isize - MIN_IMAGE_SIZE.ilog2() as isize + 1;
        std::cmp::max(count, 0) as usize
    }

    pub fn build(image: &Image, scales_per_octave: usize, base_sigma: Float, sigma: Float) -> ScalePyramid {
        ScalePyramid::build_with_border(image, scales_per_octave, base_sigma, sigma, BorderEffect::Copy)
    }

    pub fn from_runtime_parameters(image: &Image, runtime_parameters: &FeatureRuntimeParameters) -> ScalePyramid {
        ScalePyramid::build_with_border(image, runtime_parameters.scales_per_octave, runtime_parameters.base_sigma, runtime_parameters.sigma, runtime_parameters.border_effect)
    }

    pub fn build_with_border(image: &Image, scales_per_octave: usize, base_sigma: Float, sigma: Float, border_effect: BorderEffect) -> ScalePyramid {
        assert!(base_sigma <= sigma, "base sigma {} must not exceed sigma {}", base_sigma, sigma);
        assert!(scales_per_octave > 0, "at least one scale per octave is required");

        let octave_count = ScalePyramid::octave_count_for(image.height(), image.width());
        if octave_count == 0 {
            warn!("image of (height,width): ({},{}) is too small for a scale pyramid", image.height(), image.width());
        }

        let mut octaves: Vec<Octave> = Vec::with_capacity(octave_count);
        let mut octave_image = gauss(image, (sigma.powi(2) - base_sigma.powi(2)).sqrt(), border_effect);
        let mut octave_sigma = sigma;

        for _ in 0..octave_count {
            let (octave, next_image, next_sigma) = Octave::build_octave(&octave_image, scales_per_octave, octave_sigma, border_effect);
            octaves.push(octave);
            octave_image = next_image.downsample_half();
            octave_sigma = next_sigma/2.0;
        }

        debug!("built scale pyramid with {} octaves of {} scales", octaves.len(), scales_per_octave);
        ScalePyramid{octaves, scales_per_octave}
    }

    pub fn octave_count(&self) -> usize {
        self.octaves.len()
    }

    pub fn scales_per_octave(&self) -> usize {
        self.scales_per_octave
    }

    pub fn contains(&self, octave: usize, scale: usize) -> bool {
        octave < self.octave_count() && scale < self.scales_per_octave
    }

    pub fn get_scale(&self, octave: usize, scale: usize) -> &Image {
        assert!(self.contains(octave, scale), "(octave,scale): ({},{}) is not part of the pyramid", octave, scale);
        &self.octaves[octave].images[scale]
    }

    pub fn get_sigma(&self, octave: usize, scale: usize) -> Float {
        assert!(self.contains(octave, scale), "(octave,scale): ({},{}) is not part of the pyramid", octave, scale);
        self.octaves[octave].sigmas[scale]
    }
}
