use crate::image::Image;

pub trait Kernel {
    // Filter
    fn kernel(&self) -> &Image;
    // Offset of the kernel center along the longer axis
    fn radius(&self) -> usize {
        let kernel = self.kernel();
        std::cmp::max(kernel.height(), kernel.width())/2
    }
}
