use serde::{Serialize, Deserialize};
use crate::{float,Float};
use crate::descriptor::angle::{normalize_angle, interpolated_angle};

pub const DEFAULT_DESCRIPTOR_SIZE: usize = 4;
pub const DEFAULT_DESCRIPTOR_ORIENTATIONS_COUNT: usize = 8;
pub const DOMINANT_ORIENTATION_BINS: usize = 36;
pub const SECOND_MAIN_ORIENTATION_THRESHOLD: Float = 0.8;

/// size x size grid of circular orientation histograms anchored at (row, column).
/// A 1x1 grid is used as a plain orientation histogram.
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct Descriptor {
    pub row: usize,
    pub column: usize,
    pub angle: Float,
    size: usize,
    orientations_count: usize,
    bins: Vec<Float>
}

impl Descriptor {

    pub fn new(row: usize, column: usize, angle: Float, size: usize, orientations_count: usize) -> Descriptor {
        assert!(size > 0 && orientations_count > 0, "descriptor needs a non empty grid, got size {} with {} orientations", size, orientations_count);
        Descriptor {
            row,
            column,
            angle,
            size,
            orientations_count,
            bins: vec![0.0; size*size*orientations_count]
        }
    }

    pub fn with_default_shape(row: usize, column: usize, angle: Float) -> Descriptor {
        Descriptor::new(row, column, angle, DEFAULT_DESCRIPTOR_SIZE, DEFAULT_DESCRIPTOR_ORIENTATIONS_COUNT)
    }

    pub fn orientation_histogram(orientations_count: usize) -> Descriptor {
        Descriptor::new(0, 0, 0.0, 1, orientations_count)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn orientations_count(&self) -> usize {
        self.orientations_count
    }

    pub fn data_size(&self) -> usize {
        self.bins.len()
    }

    pub fn bins(&self) -> &[Float] {
        &self.bins
    }

    pub fn bin_range(&self) -> Float {
        2.0*float::consts::PI/(self.orientations_count as Float)
    }

    /// Splits `value` between the bin containing `angle` and the neighbour on the side the angle
    /// leans to, weighted by the distance to the bin centers.
    pub fn add_value_on_angle_with_index(&mut self, i: usize, j: usize, angle: Float, value: Float) -> () {
        assert!(i < self.size && j < self.size, "cell ({},{}) is outside of a {}x{} descriptor", i, j, self.size, self.size);

        let count = self.orientations_count;
        let position = normalize_angle(angle)/self.bin_range();
        let position_floor = position.floor();
        let offset = position - position_floor - 0.5;

        let first = (position_floor as usize) % count;
        let second = match offset {
            o if o >= 0.0 => (first + 1) % count,
            _ => (first + count - 1) % count
        };

        let second_weight = offset.abs();
        let first_weight = 1.0 - second_weight;

        let cell_start = (i*self.size + j)*count;
        self.bins[cell_start + first] += value*first_weight;
        self.bins[cell_start + second] += value*second_weight;
    }

    pub fn add_value_on_angle(&mut self, angle: Float, value: Float) -> () {
        self.add_value_on_angle_with_index(0, 0, angle, value);
    }

    pub fn norm(&self) -> Float {
        self.bins.iter().map(|v| v.powi(2)).sum::<Float>().sqrt()
    }

    /// Scales the bins to unit L2 norm. An all zero descriptor is left untouched.
    pub fn normalize(&mut self) -> () {
        let norm = self.norm();
        if norm > 0.0 {
            for v in self.bins.iter_mut() {
                *v /= norm;
            }
        }
    }

    pub fn distance_to_descriptor(&self, other: &Descriptor) -> Float {
        assert!(self.size == other.size && self.orientations_count == other.orientations_count,
            "descriptors of shape ({},{}) and ({},{}) are not comparable", self.size, self.orientations_count, other.size, other.orientations_count);

        self.bins.iter().zip(other.bins.iter()).map(|(a,b)| (a - b).powi(2)).sum::<Float>().sqrt()
    }

    /// Interpolated angle of the dominant bin, followed by the angle of the next best bin if that bin
    /// reaches `second_threshold` times the dominant value.
    pub fn max_orientation_interpolated_angles(&self, second_threshold: Float) -> Vec<Float> {
        assert_eq!(self.size, 1, "dominant orientations are only defined for a single cell histogram");

        let main_bin = max_bin(&self.bins, None);
        let max_value = self.bins[main_bin];
        let mut angles = vec![interpolated_angle(&self.bins, main_bin)];

        if self.bins.len() > 1 && max_value > 0.0 {
            let second_bin = max_bin(&self.bins, Some(main_bin));
            if self.bins[second_bin] >= max_value*second_threshold {
                angles.push(interpolated_angle(&self.bins, second_bin));
            }
        }

        angles
    }
}

// first index of the largest value, optionally ignoring one index
fn max_bin(bins: &[Float], excluded: Option<usize>) -> usize {
    let mut best: Option<usize> = None;
    for (idx, value) in bins.iter().enumerate() {
        if Some(idx) == excluded {
            continue;
        }
        best = match best {
            Some(best_idx) if bins[best_idx] >= *value => Some(best_idx),
            _ => Some(idx)
        };
    }
    best.unwrap_or(0)
}
