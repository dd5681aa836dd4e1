extern crate corner_vision;

use std::{env, path::Path};
use color_eyre::eyre::{Result, eyre};

use corner_vision::config::{FeatureRuntimeParameters, load_runtime_parameters};
use corner_vision::pyramid::ScalePyramid;
use corner_vision::io::{load_image_as_gray, save_pyramid};

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let image_path = args.get(1).ok_or_else(|| eyre!("usage: scale_pyramid <image> [runtime_parameters.yaml]"))?;
    let runtime_parameters = match args.get(2) {
        Some(path) => load_runtime_parameters(Path::new(path))?,
        None => FeatureRuntimeParameters::default()
    };

    let image = load_image_as_gray(Path::new(image_path), runtime_parameters.grayscale_mode)?;
    let pyramid = ScalePyramid::from_runtime_parameters(&image, &runtime_parameters);
    println!("{} octaves of {} scales", pyramid.octave_count(), pyramid.scales_per_octave());

    save_pyramid(&pyramid, Path::new("output/pyramid"))?;

    Ok(())
}
