use bitflags::bitflags;

bitflags! {
    /// The set of walls enclosing a cell.
    ///
    /// Each wall is a single bit on a nibble boundary, so `ALL` reads as `0x1111`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Walls: u16 {
        const TOP = 0x0001;
        const RIGHT = 0x0010;
        const BOTTOM = 0x0100;
        const LEFT = 0x1000;
        const ALL = 0x1111;
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum CompassPrimary {
    North,
    East,
    South,
    West,
}

impl CompassPrimary {
    /// Every direction, in the order neighbours are considered while carving.
    pub const ALL: [CompassPrimary; 4] = [CompassPrimary::North,
                                          CompassPrimary::East,
                                          CompassPrimary::South,
                                          CompassPrimary::West];

    /// The wall of a cell that faces this direction.
    pub fn wall(self) -> Walls {
        match self {
            CompassPrimary::North => Walls::TOP,
            CompassPrimary::East => Walls::RIGHT,
            CompassPrimary::South => Walls::BOTTOM,
            CompassPrimary::West => Walls::LEFT,
        }
    }

    pub fn opposite(self) -> CompassPrimary {
        match self {
            CompassPrimary::North => CompassPrimary::South,
            CompassPrimary::East => CompassPrimary::West,
            CompassPrimary::South => CompassPrimary::North,
            CompassPrimary::West => CompassPrimary::East,
        }
    }
}

/// One position in a maze, addressed by its row major index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    index: usize,
    walls: Walls,
    visited: bool,
    start: bool,
    end: bool,
}

impl Cell {
    /// A fully enclosed, unvisited cell.
    pub fn new(index: usize) -> Cell {
        Cell {
            index,
            walls: Walls::ALL,
            visited: false,
            start: false,
            end: false,
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn walls(&self) -> Walls {
        self.walls
    }

    /// Are all of the given walls present?
    #[inline]
    pub fn has_wall(&self, walls: Walls) -> bool {
        self.walls.contains(walls)
    }

    #[inline]
    pub fn is_visited(&self) -> bool {
        self.visited
    }

    #[inline]
    pub fn is_start(&self) -> bool {
        self.start
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        self.end
    }

    /// Add any combination of walls to the cell.
    pub fn add_wall(&mut self, walls: Walls) {
        self.walls |= walls;
    }

    /// Remove any combination of walls from the cell.
    pub fn remove_wall(&mut self, walls: Walls) {
        self.walls &= !walls;
    }

    pub(crate) fn mark_visited(&mut self) {
        self.visited = true;
    }

    pub(crate) fn set_start(&mut self, start: bool) {
        self.start = start;
    }

    pub(crate) fn set_end(&mut self, end: bool) {
        self.end = end;
    }
}

#[cfg(test)]
mod tests {

    use quickcheck::quickcheck;

    use super::*;

    fn open_cell() -> Cell {
        let mut cell = Cell::new(0);
        cell.remove_wall(Walls::ALL);
        cell
    }

    #[test]
    fn cell_has_index_on_construction() {
        let cell = Cell::new(69);
        assert_eq!(cell.index(), 69);
    }

    #[test]
    fn new_cell_is_enclosed_and_unmarked() {
        let cell = Cell::new(3);
        assert_eq!(cell.walls(), Walls::ALL);
        assert!(!cell.is_visited());
        assert!(!cell.is_start());
        assert!(!cell.is_end());
    }

    #[test]
    fn wall_bit_values() {
        assert_eq!(Walls::TOP.bits(), 0x0001);
        assert_eq!(Walls::RIGHT.bits(), 0x0010);
        assert_eq!(Walls::BOTTOM.bits(), 0x0100);
        assert_eq!(Walls::LEFT.bits(), 0x1000);
        assert_eq!(Walls::ALL.bits(), 0x1111);
        assert_eq!(Walls::TOP | Walls::RIGHT | Walls::BOTTOM | Walls::LEFT, Walls::ALL);
    }

    #[test]
    fn add_top_wall() {
        let mut cell = open_cell();
        assert!(!cell.has_wall(Walls::TOP));
        cell.add_wall(Walls::TOP);
        assert!(cell.has_wall(Walls::TOP));
        assert!(!cell.has_wall(Walls::BOTTOM));
    }

    #[test]
    fn add_all_walls() {
        let mut cell = open_cell();
        assert!(!cell.walls().intersects(Walls::ALL));
        cell.add_wall(Walls::ALL);
        assert!(cell.has_wall(Walls::TOP));
        assert!(cell.has_wall(Walls::RIGHT));
        assert!(cell.has_wall(Walls::BOTTOM));
        assert!(cell.has_wall(Walls::LEFT));
    }

    #[test]
    fn remove_single_wall() {
        let mut cell = Cell::new(0);
        cell.remove_wall(Walls::TOP);
        assert!(!cell.has_wall(Walls::TOP));
        assert!(cell.has_wall(Walls::RIGHT));
        assert!(cell.has_wall(Walls::BOTTOM));
        assert!(cell.has_wall(Walls::LEFT));
    }

    #[test]
    fn remove_all_walls_from_partial_set() {
        let mut cell = open_cell();
        cell.add_wall(Walls::TOP | Walls::RIGHT);
        assert!(cell.walls().intersects(Walls::ALL));
        cell.remove_wall(Walls::ALL);
        assert!(cell.walls().is_empty());
    }

    #[test]
    fn all_walls_idempotent() {
        let mut cell = Cell::new(0);
        cell.remove_wall(Walls::ALL);
        assert_eq!(cell.walls().bits(), 0);
        cell.remove_wall(Walls::ALL);
        assert_eq!(cell.walls().bits(), 0);

        cell.add_wall(Walls::ALL);
        assert_eq!(cell.walls(), Walls::ALL);
        cell.add_wall(Walls::ALL);
        assert_eq!(cell.walls(), Walls::ALL);
    }

    #[test]
    fn directions_map_to_mirrored_walls() {
        for dir in CompassPrimary::ALL.iter() {
            assert_eq!(dir.opposite().opposite(), *dir);
            assert_ne!(dir.wall(), dir.opposite().wall());
        }
        assert_eq!(CompassPrimary::North.opposite().wall(), Walls::BOTTOM);
        assert_eq!(CompassPrimary::East.opposite().wall(), Walls::LEFT);
    }

    #[test]
    fn wall_mutation_laws() {
        fn removed_walls_absent(initial: u16, target: u16) -> bool {
            let mut cell = open_cell();
            cell.add_wall(Walls::from_bits_truncate(initial));
            let target = Walls::from_bits_truncate(target);
            cell.remove_wall(target);
            (cell.walls() & target).is_empty()
        }
        fn added_walls_present(initial: u16, target: u16) -> bool {
            let mut cell = open_cell();
            cell.add_wall(Walls::from_bits_truncate(initial));
            let target = Walls::from_bits_truncate(target);
            cell.add_wall(target);
            (cell.walls() & target) == target
        }
        fn other_walls_untouched(initial: u16, target: u16) -> bool {
            let initial = Walls::from_bits_truncate(initial);
            let target = Walls::from_bits_truncate(target);
            let mut cell = open_cell();
            cell.add_wall(initial);
            cell.remove_wall(target);
            cell.walls() == initial - target
        }
        quickcheck(removed_walls_absent as fn(u16, u16) -> bool);
        quickcheck(added_walls_present as fn(u16, u16) -> bool);
        quickcheck(other_walls_untouched as fn(u16, u16) -> bool);
    }
}
