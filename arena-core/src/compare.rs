//! Generic comparator

use std::cmp::Ordering;

use crate::fighter::{Fighter, Stat};

/// Wraps an ordering function with max/min/sort helpers.
///
/// Ties resolve to the second argument in both `max` and `min`.
pub struct Comparator<T> {
    compare: Box<dyn Fn(&T, &T) -> Ordering + Send + Sync>,
}

impl<T> Comparator<T> {
    pub fn new<F>(compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        Self {
            compare: Box::new(compare),
        }
    }

    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.compare)(a, b)
    }

    /// `a` if strictly greater, else `b`
    pub fn max<'a>(&self, a: &'a T, b: &'a T) -> &'a T {
        if self.compare(a, b) == Ordering::Greater {
            a
        } else {
            b
        }
    }

    /// `a` if strictly less, else `b`
    pub fn min<'a>(&self, a: &'a T, b: &'a T) -> &'a T {
        if self.compare(a, b) == Ordering::Less {
            a
        } else {
            b
        }
    }

    /// Ascending, stable, sorted copy
    pub fn sort(&self, items: &[T]) -> Vec<T>
    where
        T: Clone,
    {
        let mut sorted = items.to_vec();
        sorted.sort_by(|a, b| self.compare(a, b));
        sorted
    }
}

impl<T: Ord + 'static> Default for Comparator<T> {
    fn default() -> Self {
        Self::new(|a: &T, b: &T| a.cmp(b))
    }
}

impl Comparator<Fighter> {
    /// Compare fighters by a single stat
    pub fn by_stat(stat: Stat) -> Self {
        Self::new(move |a: &Fighter, b: &Fighter| a.stat(stat).cmp(&b.stat(stat)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers() {
        let cmp: Comparator<i32> = Comparator::default();
        assert_eq!(*cmp.max(&5, &10), 10);
        assert_eq!(*cmp.min(&5, &10), 5);
        assert_eq!(cmp.sort(&[3, 1, 4, 1, 5]), vec![1, 1, 3, 4, 5]);
    }

    #[test]
    fn test_ties_resolve_to_second_argument() {
        let a = Fighter::new(1, "a", 50, 50, 50, 50);
        let b = Fighter::new(2, "b", 50, 50, 50, 50);
        let cmp = Comparator::by_stat(Stat::Speed);

        assert!(std::ptr::eq(cmp.max(&a, &b), &b));
        assert!(std::ptr::eq(cmp.min(&a, &b), &b));
    }

    #[test]
    fn test_by_stat() {
        let bulbasaur = Fighter::new(1, "bulbasaur", 45, 49, 49, 45);
        let charizard = Fighter::new(6, "charizard", 78, 84, 78, 100);

        let attack = Comparator::by_stat(Stat::Attack);
        assert_eq!(attack.max(&bulbasaur, &charizard).name, "charizard");
        assert_eq!(attack.min(&bulbasaur, &charizard).name, "bulbasaur");

        let speed = Comparator::by_stat(Stat::Speed);
        let sorted = speed.sort(&[charizard.clone(), bulbasaur.clone()]);
        assert_eq!(sorted, vec![bulbasaur, charizard]);
    }

    #[test]
    fn test_sort_is_stable_and_leaves_input_untouched() {
        let input = vec![
            Fighter::new(1, "first", 10, 0, 0, 0),
            Fighter::new(2, "second", 5, 0, 0, 0),
            Fighter::new(3, "third", 10, 0, 0, 0),
        ];
        let sorted = Comparator::by_stat(Stat::Hp).sort(&input);

        let names: Vec<&str> = sorted.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["second", "first", "third"]);
        assert_eq!(input[0].name, "first");
    }
}
