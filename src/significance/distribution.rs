//! Frequency distributions accepted by the ranking functions.

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// An occurrence count stored in a frequency map.
///
/// Counts are widened to `i64`; unsigned values beyond `i64::MAX` saturate.
pub trait Count: Copy {
    /// The count as `i64`
    fn to_count(self) -> i64;
}

macro_rules! impl_count {
    ($($ty:ty),*) => {
        $(
            impl Count for $ty {
                fn to_count(self) -> i64 {
                    i64::try_from(self).unwrap_or(i64::MAX)
                }
            }
        )*
    };
}

impl_count!(i8, i16, i32, i64, u8, u16, u32, u64, usize);

/// A multiset: a mapping from item to occurrence count.
///
/// Implemented for `HashMap` and `BTreeMap` with any [`Count`] value type.
/// Ranking functions only read from a distribution.
pub trait FrequencyDistribution<T> {
    /// Count of `item`, zero if absent
    fn count_of(&self, item: &T) -> i64;

    /// Every stored item with its count
    fn counts(&self) -> Box<dyn Iterator<Item = (&T, i64)> + '_>;
}

impl<T, C, S> FrequencyDistribution<T> for HashMap<T, C, S>
where
    T: Hash + Eq,
    C: Count,
    S: BuildHasher,
{
    fn count_of(&self, item: &T) -> i64 {
        self.get(item).map_or(0, |count| count.to_count())
    }

    fn counts(&self) -> Box<dyn Iterator<Item = (&T, i64)> + '_> {
        Box::new(self.iter().map(|(item, count)| (item, count.to_count())))
    }
}

impl<T, C> FrequencyDistribution<T> for BTreeMap<T, C>
where
    T: Ord,
    C: Count,
{
    fn count_of(&self, item: &T) -> i64 {
        self.get(item).map_or(0, |count| count.to_count())
    }

    fn counts(&self) -> Box<dyn Iterator<Item = (&T, i64)> + '_> {
        Box::new(self.iter().map(|(item, count)| (item, count.to_count())))
    }
}
