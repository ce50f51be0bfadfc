use crate::core::{DataSetError, Range};
use crate::dataset::Point;
use std::fmt;

/// Axis-aligned rectangle given by an inclusive range on each axis.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct BoundingBox {
    x: Range<i32>,
    y: Range<i32>,
}

impl BoundingBox {
    pub fn new(min_x: i32, max_x: i32, min_y: i32, max_y: i32) -> Result<BoundingBox, DataSetError> {
        Ok(BoundingBox {
            x: Range::new(min_x, max_x)?,
            y: Range::new(min_y, max_y)?,
        })
    }

    pub fn from_ranges(x: Range<i32>, y: Range<i32>) -> BoundingBox {
        BoundingBox { x, y }
    }

    pub fn from_point(point: Point) -> BoundingBox {
        BoundingBox {
            x: Range::singleton(point.x),
            y: Range::singleton(point.y),
        }
    }

    pub fn min_x(&self) -> i32 {
        self.x.min()
    }

    pub fn max_x(&self) -> i32 {
        self.x.max()
    }

    pub fn min_y(&self) -> i32 {
        self.y.min()
    }

    pub fn max_y(&self) -> i32 {
        self.y.max()
    }

    pub fn x_range(&self) -> Range<i32> {
        self.x
    }

    pub fn y_range(&self) -> Range<i32> {
        self.y
    }

    pub fn expand_to_include(&self, point: Point) -> BoundingBox {
        BoundingBox {
            x: self.x.expand_to(point.x),
            y: self.y.expand_to(point.y),
        }
    }

    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        self.x.contains(x) && self.y.contains(y)
    }

    pub fn contains_box(&self, other: &BoundingBox) -> bool {
        self.x.contains_range(&other.x) && self.y.contains_range(&other.y)
    }

    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.x.intersect(&other.x).is_some() && self.y.intersect(&other.y).is_some()
    }

    /// Whether `point` lies on one of the four edges, so that removing it could shrink
    /// the box.
    pub fn is_on_edge(&self, point: Point) -> bool {
        point.x == self.x.min() || point.x == self.x.max() || point.y == self.y.min() || point.y == self.y.max()
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x {} y {}", self.x, self.y)
    }
}
