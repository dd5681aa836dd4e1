use rand::{Rng, SeedableRng, rngs::SmallRng};

use corner_vision::Float;
use corner_vision::image::{Image, image_encoding::ImageEncoding, border_effect::BorderEffect};
use corner_vision::features::ImagePoint;
use corner_vision::extrema::{get_local_maximums, non_max_suppression};

fn random_image(height: usize, width: usize, seed: u64) -> Image {
    let mut rng = SmallRng::seed_from_u64(seed);
    let data = (0..height*width).map(|_| rng.gen::<Float>()).collect::<Vec<Float>>();
    Image::from_row_slice(height, width, &data, ImageEncoding::F64)
}

#[test]
fn local_maximums_are_strict_and_above_threshold() {
    let image = random_image(30, 25, 8);
    let shift = 2;
    let threshold = 0.3;

    for border_effect in [BorderEffect::Zero, BorderEffect::Copy, BorderEffect::Reflect, BorderEffect::Cyclical] {
        let maximums = get_local_maximums(&image, shift, threshold, border_effect);
        assert!(!maximums.is_empty());

        for point in &maximums {
            assert!(point.value >= threshold);
            assert_eq!(point.value, image.get(point.row, point.column));
            for di in -2..3isize {
                for dj in -2..3isize {
                    if di == 0 && dj == 0 {
                        continue;
                    }
                    let neighbour = image.get_value(point.row as isize + di, point.column as isize + dj, border_effect);
                    assert!(point.value > neighbour);
                }
            }
        }
    }
}

#[test]
fn local_maximums_follow_scan_order() {
    let image = random_image(30, 30, 9);
    let maximums = get_local_maximums(&image, 1, 0.0, BorderEffect::Zero);
    let positions = maximums.iter().map(|p| (p.row, p.column)).collect::<Vec<(usize,usize)>>();
    let mut sorted = positions.clone();
    sorted.sort();
    assert_eq!(positions, sorted);
}

#[test]
fn plateaus_are_not_maximums() {
    let image = Image::from_row_slice(6, 6, &[0.5; 36], ImageEncoding::F64);
    assert!(get_local_maximums(&image, 1, 0.0, BorderEffect::Copy).is_empty());
}

#[test]
fn suppression_returns_limited_subset() {
    let image = random_image(40, 40, 10);
    let maximums = get_local_maximums(&image, 1, 0.0, BorderEffect::Copy);
    let limit = 15;
    assert!(maximums.len() > limit);

    let suppressed = non_max_suppression(&image, &maximums, limit, 0.9);

    assert!(suppressed.iter().all(|p| maximums.contains(p)));
    if suppressed.len() > limit {
        // only possible once every remaining pair is out of reach of the dominance test
        for a in &suppressed {
            for b in &suppressed {
                assert!(!(0.9*a.value > b.value));
            }
        }
    } else {
        assert!(suppressed.len() <= limit);
    }
}

#[test]
fn suppression_keeps_input_below_limit() {
    let image = Image::empty(10, 10, ImageEncoding::F64);
    let points = vec![ImagePoint::new(1, 1, 0.2), ImagePoint::new(1, 2, 0.9)];
    assert_eq!(non_max_suppression(&image, &points, 5, 0.9), points);
}

#[test]
fn suppression_removes_weaker_neighbour() {
    let image = Image::empty(10, 10, ImageEncoding::F64);
    let points = vec![ImagePoint::new(2, 2, 0.5), ImagePoint::new(2, 5, 1.0)];
    let suppressed = non_max_suppression(&image, &points, 1, 0.9);
    assert_eq!(suppressed, vec![ImagePoint::new(2, 5, 1.0)]);
}

#[test]
fn equal_responses_never_suppress_each_other() {
    let image = Image::empty(10, 10, ImageEncoding::F64);
    let points = vec![ImagePoint::new(2, 2, 0.7), ImagePoint::new(3, 3, 0.7)];
    assert_eq!(non_max_suppression(&image, &points, 1, 0.9).len(), 2);
}

#[test]
fn suppression_can_exhaust_radius_above_limit() {
    let image = Image::empty(4, 4, ImageEncoding::F64);
    let strong = ImagePoint::new(0, 0, 1.0);
    let weak = ImagePoint::new(0, 1, 0.5);
    let close_second = ImagePoint::new(0, 2, 0.95);

    let suppressed = non_max_suppression(&image, &vec![strong, weak, close_second], 1, 0.9);
    assert_eq!(suppressed, vec![strong, close_second]);
}

#[test]
fn suppression_continues_after_removing_earlier_point() {
    let image = Image::empty(10, 10, ImageEncoding::F64);
    let points = vec![
        ImagePoint::new(0, 0, 0.1),
        ImagePoint::new(0, 1, 1.0),
        ImagePoint::new(5, 5, 0.2),
        ImagePoint::new(5, 6, 0.8)];

    let suppressed = non_max_suppression(&image, &points, 2, 0.9);
    assert_eq!(suppressed, vec![ImagePoint::new(0, 1, 1.0), ImagePoint::new(5, 6, 0.8)]);
}

#[test]
fn suppression_walk_is_index_based() {
    let image = Image::empty(6, 6, ImageEncoding::F64);
    let points = vec![
        ImagePoint::new(0, 1, 0.0),
        ImagePoint::new(4, 0, 0.9),
        ImagePoint::new(1, 5, 0.0),
        ImagePoint::new(5, 4, 0.8),
        ImagePoint::new(4, 3, 0.3),
        ImagePoint::new(2, 0, 0.6)];

    // at radius 5, (4,0) removes (0,1) at index 0 and index 1 then holds (1,5),
    // so (5,4) gets to remove (1,5) before (4,0) is revisited
    let suppressed = non_max_suppression(&image, &points, 2, 0.9);
    assert_eq!(suppressed, vec![ImagePoint::new(4, 0, 0.9), ImagePoint::new(5, 4, 0.8)]);
}

#[test]
fn unit_filter_value_never_suppresses_a_point_by_itself() {
    let image = Image::empty(8, 8, ImageEncoding::F64);
    let points = vec![ImagePoint::new(1, 1, 0.4), ImagePoint::new(6, 6, 0.2), ImagePoint::new(3, 5, 0.9)];
    let suppressed = non_max_suppression(&image, &points, 1, 1.0);
    assert_eq!(suppressed, vec![ImagePoint::new(3, 5, 0.9)]);
}
