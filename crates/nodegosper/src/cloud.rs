//! Loading and normalisation of 2D point datasets.
//!
//! A dataset is plain text holding whitespace separated `x y` pairs. After
//! loading, points are translated so that the square bounding box of the
//! data is centred on the origin, and the box is grown by a small margin so
//! no point sits exactly on its boundary.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use log::debug;

use crate::{
    error::{self, Error},
    point::{BoundingBox, Point},
};

/// Margin added to every bound, relative to the longest side of the data.
const INSET: f64 = 0.001;

/// A normalised point collection and its bounding box.
#[derive(Clone, Debug, PartialEq)]
pub struct PointCloud {
    /// Points translated so the bounding box is centred on the origin.
    points: Vec<Point>,
    /// Square, origin centred bounding box with margin.
    bbox: BoundingBox,
    /// Translation subtracted from the raw coordinates.
    offset: Point,
}

impl PointCloud {
    /// Normalise raw points.
    ///
    /// Fails if there are no points, if any coordinate is NaN or infinite,
    /// or if all points coincide.
    pub fn from_points(mut points: Vec<Point>) -> error::Result<Self> {
        let Some(first) = points.first().copied() else {
            return Err(Error::Dataset("no points".to_string()));
        };
        if let Some(i) = points.iter().position(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return Err(Error::Dataset(format!(
                "point {i} has non-finite coordinates ({}, {})",
                points[i].x, points[i].y
            )));
        }

        let (mut min, mut max) = (first, first);
        for p in &points {
            min = Point::new(min.x.min(p.x), min.y.min(p.y));
            max = Point::new(max.x.max(p.x), max.y.max(p.y));
        }

        // Square the box on its longest side, anchored at the minimum.
        let side = (max.x - min.x).max(max.y - min.y);
        if !side.is_finite() {
            return Err(Error::Dataset(
                "coordinate extent overflows f64".to_string(),
            ));
        }
        if side <= 0.0 {
            return Err(Error::Dataset(format!(
                "all {} points coincide; the bounding box has no extent",
                points.len()
            )));
        }
        let max = Point::new(min.x + side, min.y + side);

        let offset = Point::new(0.5 * (max.x + min.x), 0.5 * (max.y + min.y));
        for p in &mut points {
            *p = *p - offset;
        }

        let margin = INSET * side;
        let bbox = BoundingBox::new(
            Point::new(min.x - offset.x - margin, min.y - offset.y - margin),
            Point::new(max.x - offset.x + margin, max.y - offset.y + margin),
        );

        Ok(Self {
            points,
            bbox,
            offset,
        })
    }

    /// Parse a dataset from a reader, keeping at most `limit` points.
    ///
    /// When `limit` is given the reader must hold at least that many points.
    pub fn from_reader<R: BufRead>(reader: R, limit: Option<usize>) -> error::Result<Self> {
        let mut values = Vec::new();
        let wanted = limit.map(|n| n.saturating_mul(2));
        'lines: for (lineno, line) in reader.lines().enumerate() {
            let line = line?;
            for token in line.split_whitespace() {
                if wanted.is_some_and(|w| values.len() >= w) {
                    break 'lines;
                }
                let v: f64 = token
                    .parse()
                    .ok()
                    .filter(|v: &f64| v.is_finite())
                    .ok_or_else(|| {
                        Error::Dataset(format!("line {}: invalid number '{token}'", lineno + 1))
                    })?;
                values.push(v);
            }
        }

        if values.len() % 2 != 0 {
            return Err(Error::Dataset(format!(
                "odd number of coordinates ({}); expected x y pairs",
                values.len()
            )));
        }
        if let Some(n) = limit {
            if values.len() / 2 < n {
                return Err(Error::Dataset(format!(
                    "expected {n} points, found {}",
                    values.len() / 2
                )));
            }
        }

        let points = values
            .chunks_exact(2)
            .map(|c| Point::new(c[0], c[1]))
            .collect();
        Self::from_points(points)
    }

    /// Load a dataset file, keeping at most `limit` points.
    pub fn load(path: &Path, limit: Option<usize>) -> error::Result<Self> {
        let file = File::open(path)?;
        let cloud = Self::from_reader(BufReader::new(file), limit)?;
        debug!("loaded {} points from {}", cloud.len(), path.display());
        Ok(cloud)
    }

    /// Normalised points.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Bounding box of the normalised points.
    pub fn bbox(&self) -> &BoundingBox {
        &self.bbox
    }

    /// Translation that was subtracted from the raw coordinates.
    pub fn offset(&self) -> Point {
        self.offset
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the cloud holds no points. Always false for a loaded cloud.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The `i`-th point in its original, un-normalised coordinates.
    pub fn original(&self, i: usize) -> Option<Point> {
        self.points.get(i).map(|&p| p + self.offset)
    }
}
