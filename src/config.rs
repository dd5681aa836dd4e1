use std::{fmt, fs, path::Path};
use color_eyre::eyre::{Result, WrapErr};
use log::info;
use serde::{Serialize, Deserialize};

use crate::Float;
use crate::image::{border_effect::BorderEffect, grayscale::GrayscaleMode};
use crate::features::CornerDetector;
use crate::descriptor::DescriptorKind;
use crate::descriptor::orientation_histogram::{DEFAULT_DESCRIPTOR_SIZE, DEFAULT_DESCRIPTOR_ORIENTATIONS_COUNT, DOMINANT_ORIENTATION_BINS, SECOND_MAIN_ORIENTATION_THRESHOLD};

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct FeatureRuntimeParameters {
    pub scales_per_octave: usize,
    pub base_sigma: Float,
    pub sigma: Float,
    pub points_limit: usize,
    pub moravec_shift: usize,
    pub harris_sigma: Float,
    pub local_maximums_shift: usize,
    pub local_maximums_threshold: Float,
    pub nonmax_filter_value: Float,
    pub gauss_kernel_radius: usize,
    pub dominant_orientation_bins: usize,
    pub second_orientation_threshold: Float,
    pub min_distance_threshold: Float,
    pub descriptor_size: usize,
    pub descriptor_orientations_count: usize,
    pub border_effect: BorderEffect,
    pub grayscale_mode: GrayscaleMode,
    pub detector: CornerDetector,
    pub descriptor_kind: DescriptorKind
}

impl Default for FeatureRuntimeParameters {
    fn default() -> FeatureRuntimeParameters {
        FeatureRuntimeParameters {
            scales_per_octave: 8,
            base_sigma: 0.5,
            sigma: 1.6,
            points_limit: 500,
            moravec_shift: 2,
            harris_sigma: 1.0,
            local_maximums_shift: 2,
            local_maximums_threshold: 0.01,
            nonmax_filter_value: 0.9,
            gauss_kernel_radius: 8,
            dominant_orientation_bins: DOMINANT_ORIENTATION_BINS,
            second_orientation_threshold: SECOND_MAIN_ORIENTATION_THRESHOLD,
            min_distance_threshold: 0.3,
            descriptor_size: DEFAULT_DESCRIPTOR_SIZE,
            descriptor_orientations_count: DEFAULT_DESCRIPTOR_ORIENTATIONS_COUNT,
            border_effect: BorderEffect::default(),
            grayscale_mode: GrayscaleMode::default(),
            detector: CornerDetector::default(),
            descriptor_kind: DescriptorKind::default()
        }
    }
}

impl fmt::Display for FeatureRuntimeParameters {

    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let detector = match self.detector {
            CornerDetector::Harris => format!("harris_s_{}", self.harris_sigma),
            CornerDetector::Moravec => format!("moravec_sh_{}", self.moravec_shift)
        };
        let descriptor = match self.descriptor_kind {
            DescriptorKind::Basic => String::from("basic"),
            DescriptorKind::RotationInvariant => format!("rot_{}_{}", self.dominant_orientation_bins, self.second_orientation_threshold)
        };
        write!(f, "{}_lm_{}_{}_nms_{}_{}_desc_{}_r_{}_{}x{}x{}",
            detector, self.local_maximums_shift, self.local_maximums_threshold, self.points_limit, self.nonmax_filter_value,
            descriptor, self.gauss_kernel_radius, self.descriptor_size, self.descriptor_size, self.descriptor_orientations_count)
    }

}

pub fn load_runtime_parameters(path: &Path) -> Result<FeatureRuntimeParameters> {
    let serialized = fs::read_to_string(path).wrap_err_with(|| format!("could not read runtime parameters from {}", path.display()))?;
    let runtime_parameters: FeatureRuntimeParameters = serde_yaml::from_str(&serialized).wrap_err_with(|| format!("{} is not a valid runtime parameter file", path.display()))?;
    info!("loaded runtime parameters {} from {}", runtime_parameters, path.display());
    Ok(runtime_parameters)
}

pub fn save_runtime_parameters(runtime_parameters: &FeatureRuntimeParameters, path: &Path) -> Result<()> {
    let serialized = serde_yaml::to_string(runtime_parameters).wrap_err("could not serialize runtime parameters")?;
    fs::write(path, serialized).wrap_err_with(|| format!("could not write runtime parameters to {}", path.display()))?;
    info!("saved runtime parameters to {}", path.display());
    Ok(())
}
