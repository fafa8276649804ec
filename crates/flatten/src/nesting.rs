#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An arbitrarily nested sequence
///
/// Either a single element or a list whose entries may themselves be lists.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Nested<T> {
    /// A non-sequence element
    Item(T),
    /// A sequence of nested values
    List(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// A flat list holding the given elements
    pub fn list_of(items: impl IntoIterator<Item = T>) -> Self {
        Nested::List(items.into_iter().map(Nested::Item).collect())
    }

    /// Returns true if this is a list
    pub fn is_list(&self) -> bool {
        matches!(self, Nested::List(_))
    }

    /// Returns true if this is a single element
    pub fn is_item(&self) -> bool {
        matches!(self, Nested::Item(_))
    }

    /// Levels of list nesting; an element has depth 0, `[]` and `[1]` depth 1
    pub fn depth(&self) -> usize {
        match self {
            Nested::Item(_) => 0,
            Nested::List(items) => 1 + items.iter().map(Nested::depth).max().unwrap_or(0),
        }
    }

    /// Collect every element in depth-first, left-to-right order
    ///
    /// A single element yields a one-element vector.
    pub fn into_vec(self) -> Vec<T> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(next) = stack.pop() {
            match next {
                Nested::Item(item) => out.push(item),
                Nested::List(items) => stack.extend(items.into_iter().rev()),
            }
        }
        out
    }
}

impl<T> From<Vec<Nested<T>>> for Nested<T> {
    fn from(items: Vec<Nested<T>>) -> Self {
        Nested::List(items)
    }
}

impl<T> Default for Nested<T> {
    fn default() -> Self {
        Nested::List(Vec::new())
    }
}

/// Build a [`Nested`] value from bracketed literals.
///
/// Each element must be a single token tree; wrap anything longer in
/// parentheses.
///
/// ```
/// use flatten::{nested, Nested};
///
/// let value = nested!([1, [2, 3], [[4]], (-5)]);
/// assert_eq!(value.depth(), 3);
/// assert_eq!(value.into_vec(), vec![1, 2, 3, 4, -5]);
/// ```
#[macro_export]
macro_rules! nested {
    ([$($inner:tt),* $(,)?]) => {
        $crate::Nested::List(vec![$($crate::nested!($inner)),*])
    };
    ($item:expr) => {
        $crate::Nested::Item($item)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_macro_builds_lists() {
        let value: Nested<i32> = nested!([1, [2, [3]]]);
        let expected = Nested::List(vec![
            Nested::Item(1),
            Nested::List(vec![Nested::Item(2), Nested::List(vec![Nested::Item(3)])]),
        ]);
        assert_eq!(value, expected);
    }

    #[test]
    fn test_depth() {
        assert_eq!(Nested::Item(1).depth(), 0);
        assert_eq!(Nested::<i32>::default().depth(), 1);
        assert_eq!(nested!([[], [[1]]]).depth(), 3);
    }

    #[test]
    fn test_into_vec() {
        assert_eq!(nested!([1, [2, [3, 4]], 5]).into_vec(), vec![1, 2, 3, 4, 5]);
        assert_eq!(Nested::Item("x").into_vec(), vec!["x"]);
        assert!(Nested::<u8>::default().into_vec().is_empty());
    }

    #[test]
    fn test_list_of() {
        assert_eq!(Nested::list_of([1, 2]), nested!([1, 2]));
        assert!(Nested::list_of(Vec::<u8>::new()).is_list());
        assert!(Nested::Item(0).is_item());
    }
}
