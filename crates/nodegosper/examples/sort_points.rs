//! Minimal example: order a handful of points along the precise curve.

use std::error::Error;

use nodegosper::{PointCloud, curve_from_name};

fn main() -> Result<(), Box<dyn Error>> {
    // snips-start: example
    let raw = "3 4\n5 4\n5 6\n3 6\n4 5\n";
    let cloud = PointCloud::from_reader(raw.as_bytes(), None)?;

    let curve = curve_from_name("precise", 2, cloud.bbox())?;
    let sorted = curve.construct(cloud.points())?;

    for (rank, entry) in sorted.entries().enumerate() {
        let p = cloud
            .original(entry.index as usize)
            .ok_or("index out of range")?;
        println!("{rank}: point {} ({}, {}) code {:o}", entry.index, p.x, p.y, entry.code);
    }
    // snips-end: example

    Ok(())
}
