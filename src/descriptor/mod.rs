use serde::{Serialize, Deserialize};

use crate::image::Image;
use crate::features::ImagePoint;
use crate::config::FeatureRuntimeParameters;
use self::orientation_histogram::Descriptor;

pub mod angle;
pub mod orientation_histogram;
pub mod local_image_descriptor;

#[derive(Debug,Copy,Clone,PartialEq,Eq,Default,Serialize,Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DescriptorKind {
    #[default]
    Basic,
    RotationInvariant
}

pub fn extract_descriptors(image: &Image, points: &Vec<ImagePoint>, runtime_parameters: &FeatureRuntimeParameters) -> Vec<Descriptor> {
    let radius = runtime_parameters.gauss_kernel_radius;
    let size = runtime_parameters.descriptor_size;
    let orientations_count = runtime_parameters.descriptor_orientations_count;
    let border_effect = runtime_parameters.border_effect;

    match runtime_parameters.descriptor_kind {
        DescriptorKind::Basic => local_image_descriptor::basic_descriptors(image, points, radius, size, orientations_count, border_effect),
        DescriptorKind::RotationInvariant => local_image_descriptor::rotation_invariant_descriptors(image, points, radius, size, orientations_count,
            runtime_parameters.dominant_orientation_bins, runtime_parameters.second_orientation_threshold, border_effect)
    }
}
