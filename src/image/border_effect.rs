use serde::{Serialize, Deserialize};

/// Rule for sampling coordinates that fall outside of an image.
#[derive(Debug,Copy,Clone,PartialEq,Eq,Default,Serialize,Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BorderEffect {
    Zero,
    #[default]
    Copy,
    Reflect,
    Cyclical
}

impl BorderEffect {

    /// Maps `idx` onto `0..dim`. `None` means the sample is 0.
    pub fn resolve(&self, idx: isize, dim: usize) -> Option<usize> {
        if dim == 0 {
            return None;
        }

        let dim_signed = dim as isize;
        if idx >= 0 && idx < dim_signed {
            return Some(idx as usize);
        }

        match self {
            BorderEffect::Zero => None,
            BorderEffect::Copy => Some(idx.clamp(0, dim_signed-1) as usize),
            BorderEffect::Reflect => {
                let mirrored = match idx {
                    i if i >= dim_signed => 2*(dim_signed-1) - i,
                    i => i.abs()
                };
                // mirrors once, anything still outside is clamped
                Some(mirrored.clamp(0, dim_signed-1) as usize)
            },
            BorderEffect::Cyclical => Some(idx.rem_euclid(dim_signed) as usize)
        }
    }
}
