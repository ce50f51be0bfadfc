use crate::core::DataSetError;
use crate::dataset::{MutableDataSet, Point};
use parking_lot::RwLockReadGuard;
use std::collections::btree_set;
use std::iter::FusedIterator;
use std::ops::Bound::{Excluded, Unbounded};

enum Source<'a> {
    Borrowed(btree_set::Iter<'a, Point>),
    // resumes after the last yielded point on every step, since the guard cannot lend
    // a long-lived set iterator out of itself
    Locked {
        guard: RwLockReadGuard<'a, MutableDataSet>,
        cursor: Option<Point>,
        exhausted: bool,
    },
}

/// Read-only, one-shot iteration over the points of a data set in ascending order.
///
/// Iteration never mutates its data set; [`Points::remove`] always fails.
pub struct Points<'a> {
    source: Source<'a>,
}

impl<'a> Points<'a> {
    pub(crate) fn borrowed(iter: btree_set::Iter<'a, Point>) -> Points<'a> {
        Points {
            source: Source::Borrowed(iter),
        }
    }

    pub(crate) fn locked(guard: RwLockReadGuard<'a, MutableDataSet>) -> Points<'a> {
        Points {
            source: Source::Locked {
                guard,
                cursor: None,
                exhausted: false,
            },
        }
    }

    /// Removing the point last yielded is not supported by data set iteration.
    pub fn remove(&mut self) -> Result<(), DataSetError> {
        Err(DataSetError::UnsupportedOperation("removal through a point iterator"))
    }
}

impl<'a> Iterator for Points<'a> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        match &mut self.source {
            Source::Borrowed(iter) => iter.next().copied(),
            Source::Locked {
                guard,
                cursor,
                exhausted,
            } => {
                if *exhausted {
                    return None;
                }
                let points = guard.points();
                let next = match cursor {
                    Some(last) => points.range((Excluded(*last), Unbounded)).next(),
                    None => points.iter().next(),
                }
                .copied();
                match next {
                    Some(point) => *cursor = Some(point),
                    None => *exhausted = true,
                }
                next
            }
        }
    }
}

impl<'a> FusedIterator for Points<'a> {}
