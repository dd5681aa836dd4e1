use serde::{Serialize, Deserialize};
use crate::Float;
use crate::image::Image;
use crate::config::FeatureRuntimeParameters;
use crate::extrema::{get_local_maximums, non_max_suppression};

pub mod harris_corner;
pub mod moravec;

/// Candidate keypoint: pixel location and detector response.
#[derive(Debug,Copy,Clone,PartialEq,Serialize,Deserialize)]
pub struct ImagePoint {
    pub row: usize,
    pub column: usize,
    pub value: Float
}

impl ImagePoint {
    pub fn new(row: usize, column: usize, value: Float) -> ImagePoint {
        ImagePoint{row, column, value}
    }

    pub fn distance_to(&self, other: &ImagePoint) -> Float {
        let row_delta = self.row as Float - other.row as Float;
        let column_delta = self.column as Float - other.column as Float;
        (row_delta.powi(2) + column_delta.powi(2)).sqrt()
    }
}

#[derive(Debug,Copy,Clone,PartialEq,Eq,Default,Serialize,Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CornerDetector {
    #[default]
    Harris,
    Moravec
}

pub fn corner_response(image: &Image, runtime_parameters: &FeatureRuntimeParameters) -> Image {
    match runtime_parameters.detector {
        CornerDetector::Harris => harris_corner::harris(image, runtime_parameters.harris_sigma, runtime_parameters.border_effect),
        CornerDetector::Moravec => moravec::moravec(image, runtime_parameters.moravec_shift, runtime_parameters.border_effect)
    }
}

/// Detector response -> local maximums -> non-max suppression down to `points_limit`
pub fn detect_interest_points(image: &Image, runtime_parameters: &FeatureRuntimeParameters) -> Vec<ImagePoint> {
    let response = corner_response(image, runtime_parameters);
    let local_maximums = get_local_maximums(&response, runtime_parameters.local_maximums_shift, runtime_parameters.local_maximums_threshold, runtime_parameters.border_effect);
    non_max_suppression(&response, &local_maximums, runtime_parameters.points_limit, runtime_parameters.nonmax_filter_value)
}
