use crate::Float;

#[repr(u8)]
#[derive(Debug,Copy,Clone,PartialEq)]
pub enum ImageEncoding {
    // Intensities in [0,1], exported as value*255
    U8,
    // Arbitrary range (gradients, responses), exported min/max stretched
    F64
}

impl ImageEncoding {
    // https://en.wikipedia.org/wiki/Normalization_(image_processing)
    pub fn normalize_to_gray(&self, max: Float, min : Float, value: Float) -> u8 {
        let range = 255 as Float; // 255 - 0
        match self {
            ImageEncoding::U8 => (value*range).clamp(0.0, range) as u8,
            ImageEncoding::F64 => {
                let dynamic_range = match max - min {
                    r if r > 0.0 => r,
                    _ => 1.0
                };
                ((value - min) * (range / dynamic_range)).clamp(0.0, range) as u8
            }
        }
    }
}
