use rand::{Rng, SeedableRng, rngs::SmallRng};

use corner_vision::Float;
use corner_vision::image::{Image, image_encoding::ImageEncoding, border_effect::BorderEffect, grayscale::GrayscaleMode};
use corner_vision::features::{ImagePoint, harris_corner::harris, detect_interest_points};
use corner_vision::extrema::{get_local_maximums, non_max_suppression};
use corner_vision::pyramid::ScalePyramid;
use corner_vision::descriptor::extract_descriptors;
use corner_vision::matching::match_descriptors;
use corner_vision::config::FeatureRuntimeParameters;
use corner_vision::io::{load_image_as_gray, save_image, save_pyramid, pyramid_file_name};
use corner_vision::visualize::{draw_points, display_matches, line_bresenham};

fn squares_image() -> Image {
    let mut image = Image::empty(48, 48, ImageEncoding::U8);
    for (top, left, side, value) in [(6, 8, 12, 1.0), (26, 24, 14, 0.6), (10, 30, 8, 0.8)] {
        for i in top..top+side {
            for j in left..left+side {
                image.set(i, j, value);
            }
        }
    }
    image
}

fn temp_folder(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("corner_vision_{}_{}", name, std::process::id()))
}

#[test]
fn single_bright_pixel_survives_as_the_only_corner() {
    let mut image = Image::empty(9, 9, ImageEncoding::U8);
    image.set(4, 4, 1.0);

    let response = harris(&image, 1.0, BorderEffect::Copy);
    let maximums = get_local_maximums(&response, 2, 0.01, BorderEffect::Copy);
    let points = non_max_suppression(&response, &maximums, 1, 0.9);

    assert_eq!(points.len(), 1);
    assert_eq!((points[0].row, points[0].column), (4, 4));
}

#[test]
fn detect_describe_and_match_against_itself() {
    let image = squares_image();
    let runtime_parameters = FeatureRuntimeParameters{gauss_kernel_radius: 4, ..FeatureRuntimeParameters::default()};

    let points = detect_interest_points(&image, &runtime_parameters);
    assert!(!points.is_empty());

    let descriptors = extract_descriptors(&image, &points, &runtime_parameters);
    assert_eq!(descriptors.len(), points.len());

    let matches = match_descriptors(&descriptors, &descriptors, runtime_parameters.min_distance_threshold);
    assert_eq!(matches.len(), descriptors.len());
    assert!(matches.iter().all(|m| m.distance == 0.0));
}

#[test]
fn gray_image_round_trip() {
    let folder = temp_folder("codec");
    std::fs::create_dir_all(&folder).unwrap();
    let path = folder.join("random.png");

    let mut rng = SmallRng::seed_from_u64(23);
    let data = (0..12*10).map(|_| rng.gen_range(0..256) as Float/255.0).collect::<Vec<Float>>();
    let image = Image::from_row_slice(12, 10, &data, ImageEncoding::U8);

    save_image(&image, &path).unwrap();
    let loaded = load_image_as_gray(&path, GrayscaleMode::PalNtsc).unwrap();
    std::fs::remove_dir_all(&folder).unwrap();

    assert!(loaded.same_size(&image));
    for (a, b) in loaded.buffer.iter().zip(image.buffer.iter()) {
        assert!((a - b).abs() <= 1.0/255.0 + 1e-9);
    }
}

#[test]
fn pyramid_is_written_per_level() {
    let folder = temp_folder("pyramid");
    let image = squares_image();
    let pyramid = ScalePyramid::build(&image, 2, 0.5, 1.6);

    save_pyramid(&pyramid, &folder).unwrap();
    let written = std::fs::read_dir(&folder).unwrap().count();
    let first_exists = folder.join(pyramid_file_name(0, 0, pyramid.get_sigma(0, 0))).exists();
    std::fs::remove_dir_all(&folder).unwrap();

    assert_eq!(written, pyramid.octave_count()*pyramid.scales_per_octave());
    assert!(first_exists);
    assert_eq!(pyramid_file_name(0, 1, 2.0), "octave_1_scale_1_sigma_2.0000.png");
}

#[test]
fn bresenham_lines_connect_end_points() {
    let line = line_bresenham((2, 1), (5, 9));
    assert_eq!(line.first(), Some(&(2, 1)));
    assert_eq!(line.last(), Some(&(5, 9)));
    assert_eq!(line.len(), 9);
    for pair in line.windows(2) {
        assert!((pair[1].0 - pair[0].0).abs() <= 1 && (pair[1].1 - pair[0].1).abs() <= 1);
    }

    assert_eq!(line_bresenham((3, 3), (3, 3)), vec![(3, 3)]);
    assert_eq!(line_bresenham((4, 0), (0, 0)).len(), 5);
}

#[test]
fn points_are_drawn_in_red() {
    let image = squares_image();
    let points = vec![ImagePoint::new(0, 0, 1.0), ImagePoint::new(20, 30, 1.0)];
    let drawn = draw_points(&image, &points);

    assert_eq!(drawn.dimensions(), (48, 48));
    assert_eq!(drawn.get_pixel(30, 20).0, [255, 0, 0]);
    assert_eq!(drawn.get_pixel(31, 21).0, [255, 0, 0]);
    assert_eq!(drawn.get_pixel(0, 0).0, [255, 0, 0]);
    assert_eq!(drawn.get_pixel(40, 2).0, [0, 0, 0]);
}

#[test]
fn matches_are_drawn_side_by_side() {
    let image_a = squares_image();
    let image_b = Image::empty(30, 20, ImageEncoding::U8);
    let runtime_parameters = FeatureRuntimeParameters{gauss_kernel_radius: 4, ..FeatureRuntimeParameters::default()};
    let points = detect_interest_points(&image_a, &runtime_parameters);
    let descriptors = extract_descriptors(&image_a, &points, &runtime_parameters);
    let matches = match_descriptors(&descriptors, &descriptors, 0.3);

    let mut rng = SmallRng::seed_from_u64(24);
    let canvas = display_matches(&image_a, &descriptors, &image_b, &vec![], &vec![], &mut rng);
    assert_eq!(canvas.dimensions(), (68, 48));
    assert_eq!(canvas.get_pixel(60, 40).0, [255, 255, 255]);
    assert_eq!(canvas.get_pixel(50, 10).0, [0, 0, 0]);

    let canvas_self = display_matches(&image_a, &descriptors, &image_a, &descriptors, &matches, &mut rng);
    assert_eq!(canvas_self.dimensions(), (96, 48));
}
