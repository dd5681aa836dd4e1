
pub mod image;
pub mod filter;
pub mod features;
pub mod extrema;
pub mod pyramid;
pub mod descriptor;
pub mod matching;
pub mod config;
pub mod io;
pub mod visualize;

macro_rules! define_float {
    ($f:tt) => {
        pub use std::$f as float;
        pub type Float = $f;
    }
}

define_float!(f64);

#[repr(u8)]
#[derive(Debug,Copy,Clone,PartialEq)]
pub enum GradientDirection {
    HORIZONTAL,
    VERTICAL
}
