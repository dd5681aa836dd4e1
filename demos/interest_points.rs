extern crate corner_vision;

use std::{env, path::Path};
use color_eyre::eyre::{Result, eyre};

use corner_vision::config::{FeatureRuntimeParameters, load_runtime_parameters};
use corner_vision::features::{CornerDetector, detect_interest_points};
use corner_vision::io::load_image_as_gray;
use corner_vision::visualize::draw_points;

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let image_path = args.get(1).ok_or_else(|| eyre!("usage: interest_points <image> [runtime_parameters.yaml]"))?;
    let runtime_parameters = match args.get(2) {
        Some(path) => load_runtime_parameters(Path::new(path))?,
        None => FeatureRuntimeParameters::default()
    };

    let image_out_folder = Path::new("output");
    std::fs::create_dir_all(image_out_folder)?;

    let image = load_image_as_gray(Path::new(image_path), runtime_parameters.grayscale_mode)?;

    for detector in [CornerDetector::Harris, CornerDetector::Moravec] {
        let detector_parameters = FeatureRuntimeParameters{detector, ..runtime_parameters.clone()};
        let points = detect_interest_points(&image, &detector_parameters);
        println!("{:?}: {} points", detector, points.len());

        let file_path = image_out_folder.join(format!("points_{}.png", detector_parameters));
        draw_points(&image, &points).save(&file_path)?;
    }

    Ok(())
}
