extern crate corner_vision;

use std::{env, path::Path};
use color_eyre::eyre::{Result, eyre};

use corner_vision::config::{FeatureRuntimeParameters, load_runtime_parameters};
use corner_vision::filter::{sobel, sobel_x, sobel_y};
use corner_vision::io::{load_image_as_gray, save_image};

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let image_path = args.get(1).ok_or_else(|| eyre!("usage: sobel <image> [runtime_parameters.yaml]"))?;
    let runtime_parameters = match args.get(2) {
        Some(path) => load_runtime_parameters(Path::new(path))?,
        None => FeatureRuntimeParameters::default()
    };

    let image_out_folder = Path::new("output");
    std::fs::create_dir_all(image_out_folder)?;

    let image = load_image_as_gray(Path::new(image_path), runtime_parameters.grayscale_mode)?;
    let border_effect = runtime_parameters.border_effect;

    save_image(&sobel_x(&image, border_effect), &image_out_folder.join("sobel_x.png"))?;
    save_image(&sobel_y(&image, border_effect), &image_out_folder.join("sobel_y.png"))?;
    save_image(&sobel(&image, border_effect), &image_out_folder.join("sobel.png"))?;

    Ok(())
}
