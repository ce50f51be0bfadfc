use crate::core::DataSetError;
use crate::dataset::{BoundingBox, DataSet, Points, Point, SharedDataSet};
use parking_lot::RwLock;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, trace};

/// A set of points with a display colour and an incrementally maintained bounding box.
///
/// The box grows on insertion and is only rescanned when a removed point lay on one of
/// its edges. It is `None` exactly when the set is empty.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MutableDataSet {
    points: BTreeSet<Point>,
    rgb: u32,
    bounds: Option<BoundingBox>,
}

impl MutableDataSet {
    pub fn new() -> MutableDataSet {
        MutableDataSet::default()
    }

    pub fn with_rgb(rgb: u32) -> MutableDataSet {
        MutableDataSet {
            rgb,
            ..MutableDataSet::default()
        }
    }

    /// Inserts `point`, returning whether the set changed.
    pub fn add(&mut self, point: Point) -> bool {
        if !self.points.insert(point) {
            return false;
        }
        self.bounds = Some(match self.bounds {
            Some(bounds) => bounds.expand_to_include(point),
            None => BoundingBox::from_point(point),
        });
        true
    }

    pub fn add_all(&mut self, points: &[Point]) -> bool {
        let mut changed = false;
        for &point in points {
            changed |= self.add(point);
        }
        changed
    }

    pub fn remove(&mut self, point: Point) -> bool {
        if !self.points.remove(&point) {
            return false;
        }
        if self.bounds.map_or(false, |bounds| bounds.is_on_edge(point)) {
            self.recompute_bounds();
        }
        true
    }

    pub fn clear(&mut self) {
        debug!(points = self.points.len(), "clearing data set");
        self.points.clear();
        self.bounds = None;
    }

    pub fn set_rgb(&mut self, rgb: u32) {
        self.rgb = rgb;
    }

    /// Moves the set behind a shared handle that read-only views can follow.
    pub fn into_shared(self) -> SharedDataSet {
        Arc::new(RwLock::new(self))
    }

    pub(crate) fn points(&self) -> &BTreeSet<Point> {
        &self.points
    }

    fn recompute_bounds(&mut self) {
        self.bounds = self.points.iter().fold(None, |bounds: Option<BoundingBox>, &point| {
            Some(match bounds {
                Some(bounds) => bounds.expand_to_include(point),
                None => BoundingBox::from_point(point),
            })
        });
        trace!(points = self.points.len(), bounds = ?self.bounds, "rescanned data set bounds");
    }
}

impl DataSet for MutableDataSet {
    fn rgb(&self) -> u32 {
        self.rgb
    }

    fn len(&self) -> usize {
        self.points.len()
    }

    fn bounds(&self) -> Result<BoundingBox, DataSetError> {
        self.bounds.ok_or(DataSetError::EmptyDataSet)
    }

    fn contains(&self, point: Point) -> bool {
        self.points.contains(&point)
    }

    fn iter(&self) -> Points<'_> {
        Points::borrowed(self.points.iter())
    }

    fn set_rgb(&mut self, rgb: u32) -> Result<(), DataSetError> {
        MutableDataSet::set_rgb(self, rgb);
        Ok(())
    }

    fn add(&mut self, point: Point) -> Result<bool, DataSetError> {
        Ok(MutableDataSet::add(self, point))
    }

    fn add_all(&mut self, points: &[Point]) -> Result<bool, DataSetError> {
        Ok(MutableDataSet::add_all(self, points))
    }

    fn remove(&mut self, point: Point) -> Result<bool, DataSetError> {
        Ok(MutableDataSet::remove(self, point))
    }

    fn clear(&mut self) -> Result<(), DataSetError> {
        MutableDataSet::clear(self);
        Ok(())
    }
}

impl FromIterator<Point> for MutableDataSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> MutableDataSet {
        let mut data_set = MutableDataSet::new();
        data_set.extend(iter);
        data_set
    }
}

impl Extend<Point> for MutableDataSet {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        for point in iter {
            MutableDataSet::add(self, point);
        }
    }
}

impl<'a> IntoIterator for &'a MutableDataSet {
    type Item = Point;
    type IntoIter = Points<'a>;

    fn into_iter(self) -> Points<'a> {
        Points::borrowed(self.points.iter())
    }
}
