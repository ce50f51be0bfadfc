use crate::core::DataSetError;
use crate::dataset::{BoundingBox, DataSet, Points, Point, SharedDataSet};
use std::fmt;
use std::sync::Arc;

/// A read-only live view of a [`SharedDataSet`].
///
/// The view shares ownership of the backing set instead of copying it, and every read
/// locks the backing set and reports its state at that moment. Every mutator fails with
/// [`DataSetError::UnsupportedOperation`] and leaves the backing set untouched.
///
/// parking_lot locks are not reentrant: do not read through a view while holding a write
/// guard on its backing set on the same thread. The same goes the other way round for
/// [`iter`](DataSet::iter), whose iterator holds a read guard until it is dropped.
#[derive(Clone)]
pub struct ImmutableDataSet {
    backing: SharedDataSet,
}

impl ImmutableDataSet {
    pub fn new(backing: &SharedDataSet) -> ImmutableDataSet {
        ImmutableDataSet {
            backing: Arc::clone(backing),
        }
    }

    pub fn is_view_of(&self, backing: &SharedDataSet) -> bool {
        Arc::ptr_eq(&self.backing, backing)
    }
}

impl TryFrom<Option<SharedDataSet>> for ImmutableDataSet {
    type Error = DataSetError;

    fn try_from(backing: Option<SharedDataSet>) -> Result<ImmutableDataSet, DataSetError> {
        backing
            .map(|backing| ImmutableDataSet { backing })
            .ok_or(DataSetError::NullInput("backing data set"))
    }
}

impl DataSet for ImmutableDataSet {
    fn rgb(&self) -> u32 {
        self.backing.read().rgb()
    }

    fn len(&self) -> usize {
        self.backing.read().len()
    }

    fn bounds(&self) -> Result<BoundingBox, DataSetError> {
        self.backing.read().bounds()
    }

    fn contains(&self, point: Point) -> bool {
        self.backing.read().contains(point)
    }

    fn contains_all(&self, points: &[Point]) -> bool {
        self.backing.read().contains_all(points)
    }

    /// Iterates under a read guard on the backing set, held until the iterator is dropped.
    /// Writing to the backing set from the same thread while it is alive deadlocks.
    fn iter(&self) -> Points<'_> {
        Points::locked(self.backing.read())
    }

    fn to_vec(&self) -> Vec<Point> {
        self.backing.read().to_vec()
    }

    fn copy_into(&self, buffer: &mut [Point]) -> Result<(), DataSetError> {
        self.backing.read().copy_into(buffer)
    }

    fn set_rgb(&mut self, _rgb: u32) -> Result<(), DataSetError> {
        Err(DataSetError::UnsupportedOperation("set_rgb"))
    }

    fn add(&mut self, _point: Point) -> Result<bool, DataSetError> {
        Err(DataSetError::UnsupportedOperation("add"))
    }

    fn add_all(&mut self, _points: &[Point]) -> Result<bool, DataSetError> {
        Err(DataSetError::UnsupportedOperation("add_all"))
    }

    fn remove(&mut self, _point: Point) -> Result<bool, DataSetError> {
        Err(DataSetError::UnsupportedOperation("remove"))
    }

    fn clear(&mut self) -> Result<(), DataSetError> {
        Err(DataSetError::UnsupportedOperation("clear"))
    }
}

impl fmt::Debug for ImmutableDataSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ImmutableDataSet").field(&*self.backing.read()).finish()
    }
}
