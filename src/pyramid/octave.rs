use crate::image::{Image, border_effect::BorderEffect};
use crate::filter::gauss;
use crate::Float;

#[derive(Debug,Clone)]
pub struct Octave {
    pub images: Vec<Image>,
    pub sigmas: Vec<Float>
}

impl Octave {

    /// Returns the octave together with the image and sigma one step past its last scale,
    /// which seed the next octave.
    pub fn build_octave(base_image: &Image, s: usize, sigma_initial: Float, border_effect: BorderEffect) -> (Octave, Image, Float) {

        let k = Octave::generate_k(s);
        let mut images: Vec<Image> = Vec::with_capacity(s);
        let mut sigmas: Vec<Float> = Vec::with_capacity(s);

        let mut current_image = base_image.clone();
        let mut current_sigma = sigma_initial;

        for _ in 0..s {
            let new_sigma = current_sigma*k;
            let delta_sigma = (new_sigma.powi(2) - current_sigma.powi(2)).sqrt();
            let next_image = gauss(&current_image, delta_sigma, border_effect);

            images.push(current_image);
            sigmas.push(current_sigma);

            current_image = next_image;
            current_sigma = new_sigma;
        }

        (Octave {images,sigmas}, current_image, current_sigma)
    }

    fn generate_k(s: usize) -> Float {
        assert!(s > 0);
        let exp = 1.0/(s as Float);
        exp.exp2()
    }

    pub fn s(&self) -> usize {
        self.sigmas.len()
    }
}
