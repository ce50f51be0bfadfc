//! Point sets with tracked bounding boxes.
//!
//! [`MutableDataSet`] owns its points. Moving it behind a [`SharedDataSet`] handle lets
//! callers hand out [`ImmutableDataSet`] views that follow later changes without copying.

pub mod point;
pub mod bounding_box;
pub mod points;
pub mod mutable;
pub mod immutable;

pub use self::bounding_box::BoundingBox;
pub use self::immutable::ImmutableDataSet;
pub use self::mutable::MutableDataSet;
pub use self::point::Point;
pub use self::points::Points;

use crate::core::DataSetError;
use parking_lot::RwLock;
use std::sync::Arc;

/// Shared ownership of a mutable data set; the backing store of live views.
pub type SharedDataSet = Arc<RwLock<MutableDataSet>>;

/// Read operations common to owned data sets and read-only views, plus mutators that
/// views reject.
pub trait DataSet {
    fn rgb(&self) -> u32;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The exact extent of the points; fails on an empty set.
    fn bounds(&self) -> Result<BoundingBox, DataSetError>;

    fn min_x(&self) -> Result<i32, DataSetError> {
        self.bounds().map(|bounds| bounds.min_x())
    }

    fn max_x(&self) -> Result<i32, DataSetError> {
        self.bounds().map(|bounds| bounds.max_x())
    }

    fn min_y(&self) -> Result<i32, DataSetError> {
        self.bounds().map(|bounds| bounds.min_y())
    }

    fn max_y(&self) -> Result<i32, DataSetError> {
        self.bounds().map(|bounds| bounds.max_y())
    }

    fn bounds_contain(&self, region: &BoundingBox) -> Result<bool, DataSetError> {
        self.bounds().map(|bounds| bounds.contains_box(region))
    }

    fn bounds_contain_point(&self, x: i32, y: i32) -> Result<bool, DataSetError> {
        self.bounds().map(|bounds| bounds.contains_point(x, y))
    }

    fn contains(&self, point: Point) -> bool;

    fn contains_all(&self, points: &[Point]) -> bool {
        points.iter().all(|point| self.contains(*point))
    }

    fn iter(&self) -> Points<'_>;

    /// Snapshot copy of the points.
    fn to_vec(&self) -> Vec<Point> {
        self.iter().collect()
    }

    /// Copies the points into `buffer`, which must be exactly `len()` long.
    fn copy_into(&self, buffer: &mut [Point]) -> Result<(), DataSetError> {
        let expected = self.len();
        if buffer.len() != expected {
            return Err(DataSetError::SizeMismatch {
                expected,
                actual: buffer.len(),
            });
        }
        for (slot, point) in buffer.iter_mut().zip(self.iter()) {
            *slot = point;
        }
        Ok(())
    }

    fn set_rgb(&mut self, rgb: u32) -> Result<(), DataSetError>;

    fn add(&mut self, point: Point) -> Result<bool, DataSetError>;

    fn add_all(&mut self, points: &[Point]) -> Result<bool, DataSetError>;

    fn remove(&mut self, point: Point) -> Result<bool, DataSetError>;

    fn clear(&mut self) -> Result<(), DataSetError>;
}
