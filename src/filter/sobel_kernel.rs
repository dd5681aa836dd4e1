use crate::image::{Image, image_encoding::ImageEncoding};
use crate::GradientDirection;
use super::kernel::Kernel;


pub struct SobelKernel {
    kernel: Image
}

impl SobelKernel {

    pub fn new(direction: GradientDirection) -> SobelKernel {
        let data = match direction {
            GradientDirection::HORIZONTAL => [
                -1.0, 0.0, 1.0,
                -2.0, 0.0, 2.0,
                -1.0, 0.0, 1.0],
            GradientDirection::VERTICAL => [
                -1.0, -2.0, -1.0,
                0.0, 0.0, 0.0,
                1.0, 2.0, 1.0]
        };

        SobelKernel {
            kernel: Image::from_row_slice(3, 3, &data, ImageEncoding::F64)
        }
    }
}

impl Kernel for SobelKernel {
    fn kernel(&self) -> &Image {
        &self.kernel
    }
}
