use serde::{Serialize, Deserialize};
use crate::Float;

#[derive(Debug,Copy,Clone,PartialEq,Eq,Default,Serialize,Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GrayscaleMode {
    PalNtsc,
    #[default]
    SrgbHdtv
}

impl GrayscaleMode {
    /// Luminance of an 8 bit rgb triple scaled to [0,1]
    pub fn luminance(&self, red: u8, green: u8, blue: u8) -> Float {
        let (r, g, b) = (red as Float, green as Float, blue as Float);
        let weighted = match self {
            GrayscaleMode::PalNtsc => 0.299*r + 0.587*g + 0.114*b,
            GrayscaleMode::SrgbHdtv => 0.213*r + 0.715*g + 0.072*b
        };
        weighted/255.0
    }
}
