use log::{debug,warn};
use serde::{Serialize, Deserialize};

use crate::{Float,float};
use crate::descriptor::orientation_histogram::Descriptor;

#[derive(Debug,Copy,Clone,PartialEq,Serialize,Deserialize)]
pub struct DescriptorMatch {
    pub source_index: usize,
    pub target_index: usize,
    pub distance: Float
}

/// Nearest neighbour in `targets` for every source descriptor, kept if its distance is <= `threshold`.
/// Ties go to the lowest target index. Several sources may share one target.
pub fn match_descriptors(sources: &Vec<Descriptor>, targets: &Vec<Descriptor>, threshold: Float) -> Vec<DescriptorMatch> {
    if targets.is_empty() {
        warn!("no target descriptors to match {} sources against", sources.len());
        return Vec::new();
    }

    let matches = sources.iter().enumerate().filter_map(|(source_index, source)| {
        let (target_index, distance) = targets.iter()
            .map(|target| source.distance_to_descriptor(target))
            .enumerate()
            .fold((0, float::INFINITY), |best, (idx, distance)| match distance < best.1 {
                true => (idx, distance),
                false => best
            });

        match distance <= threshold {
            true => Some(DescriptorMatch{source_index, target_index, distance}),
            false => None
        }
    }).collect::<Vec<DescriptorMatch>>();

    debug!("accepted {} of {} matches under distance {}", matches.len(), sources.len(), threshold);
    matches
}
