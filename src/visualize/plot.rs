extern crate plotters;

use std::path::Path;
use plotters::prelude::*;

use crate::{float,Float};
use crate::descriptor::orientation_histogram::Descriptor;

fn get_min_max(data: &[Float]) -> (Float,Float) {
    let (mut min, mut max) = data.iter().fold((float::MAX, float::MIN), |(min, max), &v| (min.min(v), max.max(v)));
    if data.is_empty() {
        min = 0.0;
        max = 0.0;
    }
    if (max - min) < 1e-5 {
        max = min + 1e-5;
    }
    (min,max)
}

/// Line graph of every bin of `descriptor`, flattened in (cell, orientation) order.
pub fn draw_orientation_histogram(descriptor: &Descriptor, output_folder: &Path, file_name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let data = descriptor.bins();
    let (min,max) = get_min_max(data);

    let path = output_folder.join(file_name);
    let root = BitMapBackend::new(&path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let caption = format!("({},{}) angle {:.3}", descriptor.row, descriptor.column, descriptor.angle);
    let mut chart = ChartBuilder::on(&root)
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 60)
        .caption(caption, ("sans-serif", 40))
        .build_cartesian_2d(0..data.len().saturating_sub(1), min..max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_desc("bin")
        .draw()?;

    chart.draw_series(
        LineSeries::new(
            (0..).zip(data.iter()).map(|(x, y)| (x, *y)),
            &RED,
        )
    )?;

    root.present()?;
    Ok(())
}
