extern crate corner_vision;

use std::{env, path::Path};
use color_eyre::eyre::{Result, eyre};
use rand::{SeedableRng, rngs::SmallRng};

use corner_vision::config::{FeatureRuntimeParameters, load_runtime_parameters};
use corner_vision::features::detect_interest_points;
use corner_vision::descriptor::extract_descriptors;
use corner_vision::matching::match_descriptors;
use corner_vision::io::load_image_as_gray;
use corner_vision::visualize::{display_matches, plot::draw_orientation_histogram};

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let (path_a, path_b) = match (args.get(1), args.get(2)) {
        (Some(a), Some(b)) => (a, b),
        _ => return Err(eyre!("usage: descriptors <image_a> <image_b> [runtime_parameters.yaml]"))
    };
    let runtime_parameters = match args.get(3) {
        Some(path) => load_runtime_parameters(Path::new(path))?,
        None => FeatureRuntimeParameters::default()
    };

    let image_out_folder = Path::new("output");
    std::fs::create_dir_all(image_out_folder)?;

    let image_a = load_image_as_gray(Path::new(path_a), runtime_parameters.grayscale_mode)?;
    let image_b = load_image_as_gray(Path::new(path_b), runtime_parameters.grayscale_mode)?;

    let points_a = detect_interest_points(&image_a, &runtime_parameters);
    let points_b = detect_interest_points(&image_b, &runtime_parameters);
    let descriptors_a = extract_descriptors(&image_a, &points_a, &runtime_parameters);
    let descriptors_b = extract_descriptors(&image_b, &points_b, &runtime_parameters);

    let matches = match_descriptors(&descriptors_a, &descriptors_b, runtime_parameters.min_distance_threshold);
    println!("{} of {} descriptors matched", matches.len(), descriptors_a.len());

    let mut rng = SmallRng::seed_from_u64(0);
    let file_path = image_out_folder.join(format!("matches_{}.png", runtime_parameters));
    display_matches(&image_a, &descriptors_a, &image_b, &descriptors_b, &matches, &mut rng).save(&file_path)?;

    if let Some(descriptor) = descriptors_a.first() {
        draw_orientation_histogram(descriptor, image_out_folder, "first_descriptor.png").map_err(|e| eyre!("{}", e))?;
    }

    Ok(())
}
