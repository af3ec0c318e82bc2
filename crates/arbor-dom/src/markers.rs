use std::fmt;

/// Marker flags the viewer adds to elements.
///
/// These correspond one to one with the marker classes the styling layer
/// keys on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    /// Collapsible lightweight node (more than one qualifying child).
    HasChildren,
    /// Initially visible node.
    Expanded,
    /// Normalized composite node.
    Container,
    /// Currently collapsed container.
    Collapsed,
}

impl Marker {
    const ALL: [Self; 4] = [Self::HasChildren, Self::Expanded, Self::Container, Self::Collapsed];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::HasChildren => "has-children",
            Self::Expanded => "expanded",
            Self::Container => "container",
            Self::Collapsed => "collapsed",
        }
    }

    const fn mask(self) -> u8 {
        1 << self as u8
    }
}

/// Compact set of [`Marker`] flags.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct Markers {
    bits: u8,
}

impl Markers {
    pub const EMPTY: Self = Self { bits: 0 };

    pub const fn contains(self, marker: Marker) -> bool {
        self.bits & marker.mask() != 0
    }

    pub fn insert(&mut self, marker: Marker) {
        self.bits |= marker.mask();
    }

    pub fn remove(&mut self, marker: Marker) {
        self.bits &= !marker.mask();
    }

    pub fn toggle(&mut self, marker: Marker) {
        self.bits ^= marker.mask();
    }

    /// Iterates contained markers in declaration order.
    pub fn iter(self) -> impl Iterator<Item = Marker> {
        Marker::ALL.into_iter().filter(move |&marker| self.contains(marker))
    }
}

impl fmt::Debug for Markers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(Marker::as_str)).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_remove_contains() {
        let mut markers = Markers::EMPTY;
        assert!(!markers.contains(Marker::Expanded));

        markers.insert(Marker::Expanded);
        markers.insert(Marker::HasChildren);
        assert!(markers.contains(Marker::Expanded));
        assert!(markers.contains(Marker::HasChildren));
        assert!(!markers.contains(Marker::Collapsed));

        markers.remove(Marker::Expanded);
        assert!(!markers.contains(Marker::Expanded));
        assert!(markers.contains(Marker::HasChildren));
    }

    #[test]
    fn toggle_round_trips() {
        let mut markers = Markers::EMPTY;
        markers.toggle(Marker::Collapsed);
        assert!(markers.contains(Marker::Collapsed));
        markers.toggle(Marker::Collapsed);
        assert!(!markers.contains(Marker::Collapsed));
    }

    #[test]
    fn insert_is_idempotent() {
        let mut markers = Markers::EMPTY;
        markers.insert(Marker::Container);
        let once = markers;
        markers.insert(Marker::Container);
        assert_eq!(once, markers);
    }
}
