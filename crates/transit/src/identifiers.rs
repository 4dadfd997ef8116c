//! Typed handles for catalogue entities.
//!
//! Handles are indices into the catalogue's growth-only arenas. They are
//! `Copy`, never invalidated by later insertions, and only meaningful for the
//! catalogue that issued them.

use std::fmt;

macro_rules! impl_handle {
    ($name:ident, $label:literal) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name(usize);

        impl $name {
            pub(crate) fn from_index(index: usize) -> Self {
                Self(index)
            }

            /// Position of the entity in its arena.
            pub fn index(self) -> usize {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($label, "#{}"), self.0)
            }
        }
    };
}

impl_handle!(StopId, "stop");
impl_handle!(RouteId, "route");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_equality() {
        let id1 = StopId::from_index(3);
        let id2 = StopId::from_index(3);
        let id3 = id1;

        assert_eq!(id1, id2);
        assert_eq!(id1, id3);
        assert_ne!(id1, StopId::from_index(4));
    }

    #[test]
    fn test_handle_hash() {
        use std::collections::HashMap;

        let mut map = HashMap::new();
        map.insert(RouteId::from_index(7), 42);

        assert_eq!(map.get(&RouteId::from_index(7)), Some(&42));
        assert_eq!(map.get(&RouteId::from_index(8)), None);
    }

    #[test]
    fn test_handle_display() {
        assert_eq!(format!("{}", StopId::from_index(0)), "stop#0");
        assert_eq!(format!("{}", RouteId::from_index(12)), "route#12");
    }

    #[test]
    fn test_handle_ordering_follows_index() {
        let mut ids = vec![
            RouteId::from_index(2),
            RouteId::from_index(0),
            RouteId::from_index(1),
        ];
        ids.sort();
        assert_eq!(ids.iter().map(|id| id.index()).collect::<Vec<_>>(), vec![0, 1, 2]);
    }
}
