use crate::area::Area;


/// Margin used by [`Containment::Padded`], 8 tiles of 16 units.
pub const PADDING: i32 = 8 * 16;


/// Anything placed at a point in the course that can also be pinned to an
/// area by ID.
pub trait Placement {
    fn position(&self) -> (u16, u16);

    fn area_hint(&self) -> u8;
}


/// How a point is matched against an area rectangle. Tool revisions
/// disagree on the margin, so both are available.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Containment {
    #[default]
    Strict,
    Padded,
}

impl Containment {
    pub fn margin(self) -> i32 {
        match self {
            Self::Strict => 0,
            Self::Padded => PADDING,
        }
    }

    /// The area-ID override wins regardless of coordinates.
    pub fn contains<P>(self, area: &Area, point: &P, area_id: u8) -> bool
    where
        P: Placement + ?Sized,
    {
        if point.area_hint() == area_id {
            return true;
        }

        let margin = self.margin();
        let (x, y) = point.position();

        within(x, area.offset_x, area.size_x, margin) && within(y, area.offset_y, area.size_y, margin)
    }
}

fn within(value: u16, offset: u16, size: u16, margin: i32) -> bool {
    let value = i32::from(value);
    let start = i32::from(offset);
    let end = start + i32::from(size);

    start - margin <= value && value <= end + margin
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::next_goto::NextGoto;

    fn point(x: u16, y: u16, area: u8) -> NextGoto {
        let mut next_goto = NextGoto::new(1, (x, y), (0, 0));
        next_goto.area = area;
        next_goto
    }

    #[test]
    fn strict_bounds_are_inclusive() {
        let area = Area::new(1, (100, 200), (50, 50));
        let strict = Containment::Strict;

        assert!(strict.contains(&area, &point(100, 200, 0), 1));
        assert!(strict.contains(&area, &point(150, 250, 0), 1));
        assert!(!strict.contains(&area, &point(99, 220, 0), 1));
        assert!(!strict.contains(&area, &point(120, 251, 0), 1));
    }

    #[test]
    fn padded_bounds_extend_both_sides() {
        let area = Area::new(1, (200, 200), (50, 50));
        let padded = Containment::Padded;

        assert!(padded.contains(&area, &point(72, 200, 0), 1));
        assert!(padded.contains(&area, &point(378, 378, 0), 1));
        assert!(!padded.contains(&area, &point(71, 200, 0), 1));
        assert!(!padded.contains(&area, &point(200, 379, 0), 1));
    }

    #[test]
    fn padding_does_not_wrap_near_origin() {
        let area = Area::new(1, (0, 0), (16, 16));

        assert!(Containment::Padded.contains(&area, &point(0, 144, 0), 1));
        assert!(!Containment::Strict.contains(&area, &point(0, 144, 0), 1));
    }

    #[test]
    fn area_hint_overrides_geometry() {
        let area = Area::new(4, (0, 0), (10, 10));

        assert!(Containment::Strict.contains(&area, &point(5000, 5000, 4), 4));
        assert!(!Containment::Strict.contains(&area, &point(5000, 5000, 3), 4));
    }
}
