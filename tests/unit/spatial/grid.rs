//! Tests for grid occupancy queries, wall mutation and endpoint relocation

#[cfg(test)]
mod tests {
    use gridpath::GridError;
    use gridpath::spatial::{Cell, Coordinate, Grid};

    // Tests a new grid is fully open with no endpoints
    #[test]
    fn test_new_grid_is_open() {
        let grid = Grid::new(4, 6);

        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.cols(), 6);
        assert_eq!(grid.dimensions(), (4, 6));
        assert_eq!(grid.len(), 24);
        assert_eq!(grid.wall_count(), 0);
        assert_eq!(grid.source(), None);
        assert_eq!(grid.target(), None);
        assert_eq!(grid.cell(Coordinate::new(3, 5)), Some(&Cell::default()));
    }

    // Tests bounds checks on both axes
    #[test]
    fn test_is_in_bounds() {
        let grid = Grid::new(3, 5);

        assert!(grid.is_in_bounds(Coordinate::new(0, 0)));
        assert!(grid.is_in_bounds(Coordinate::new(2, 4)));
        assert!(!grid.is_in_bounds(Coordinate::new(3, 0)));
        assert!(!grid.is_in_bounds(Coordinate::new(0, 5)));
    }

    // Tests passability requires bounds and no wall
    #[test]
    fn test_is_passable() {
        let mut grid = Grid::new(3, 3);
        let wall = Coordinate::new(1, 1);
        assert_eq!(grid.set_wall(wall, true).ok(), Some(true));

        assert!(!grid.is_passable(wall));
        assert!(grid.is_passable(Coordinate::new(0, 0)));
        assert!(!grid.is_passable(Coordinate::new(3, 3)));
    }

    // Tests out-of-bounds mutation is rejected without side effects
    #[test]
    fn test_out_of_bounds_mutation_is_rejected() {
        let mut grid = Grid::new(2, 2);
        let outside = Coordinate::new(2, 0);

        assert!(matches!(
            grid.set_wall(outside, true),
            Err(GridError::OutOfBounds { dimensions: (2, 2), .. })
        ));
        assert!(grid.set_source(outside).is_err());
        assert!(grid.set_target(outside).is_err());
        assert!(grid.toggle_wall(outside).is_err());
        assert_eq!(grid.wall_count(), 0);
        assert_eq!(grid.source(), None);
    }

    // Tests set_wall reports whether the cell changed
    #[test]
    fn test_set_wall_reports_change() {
        let mut grid = Grid::new(3, 3);
        let coord = Coordinate::new(2, 1);

        assert_eq!(grid.set_wall(coord, true).ok(), Some(true));
        assert_eq!(grid.set_wall(coord, true).ok(), Some(false));
        assert_eq!(grid.set_wall(coord, false).ok(), Some(true));
        assert_eq!(grid.set_wall(coord, false).ok(), Some(false));
    }

    // Tests walls are never placed on the source or target
    #[test]
    fn test_endpoints_cannot_be_walled() {
        let mut grid = Grid::new(3, 3);
        let source = Coordinate::new(0, 0);
        let target = Coordinate::new(2, 2);
        assert!(grid.set_source(source).is_ok());
        assert!(grid.set_target(target).is_ok());

        assert_eq!(grid.set_wall(source, true).ok(), Some(false));
        assert_eq!(grid.toggle_wall(target).ok(), Some(false));
        assert!(!grid.is_wall(source));
        assert!(!grid.is_wall(target));
    }

    // Tests moving the source clears the old flag and removes a wall under the new cell
    #[test]
    fn test_set_source_relocates_and_unwalls() {
        let mut grid = Grid::new(3, 3);
        let first = Coordinate::new(0, 0);
        let second = Coordinate::new(1, 2);
        assert!(grid.set_source(first).is_ok());
        assert_eq!(grid.set_wall(second, true).ok(), Some(true));

        assert!(grid.set_source(second).is_ok());

        assert_eq!(grid.source(), Some(second));
        assert!(grid.is_source(second));
        assert!(!grid.is_source(first));
        assert!(grid.cell(first).is_some_and(|cell| !cell.source));
        assert!(grid.cell(second).is_some_and(|cell| cell.source && !cell.wall));
    }

    // Tests the target relocates independently of the source
    #[test]
    fn test_set_target_keeps_source() {
        let mut grid = Grid::new(3, 3);
        let source = Coordinate::new(1, 1);
        assert!(grid.set_source(source).is_ok());
        assert!(grid.set_target(Coordinate::new(0, 2)).is_ok());
        assert!(grid.set_target(Coordinate::new(2, 0)).is_ok());

        assert_eq!(grid.source(), Some(source));
        assert_eq!(grid.target(), Some(Coordinate::new(2, 0)));
        assert!(grid.cell(Coordinate::new(0, 2)).is_some_and(|cell| !cell.target));
        let targets = (0..3)
            .flat_map(|row| (0..3).map(move |col| Coordinate::new(row, col)))
            .filter(|&coord| grid.is_target(coord))
            .count();
        assert_eq!(targets, 1);
    }

    // Tests source and target may share a cell
    #[test]
    fn test_source_and_target_can_share_cell() {
        let mut grid = Grid::new(2, 2);
        let shared = Coordinate::new(1, 1);
        assert!(grid.set_source(shared).is_ok());
        assert!(grid.set_target(shared).is_ok());

        assert!(grid.is_endpoint(shared));
        assert!(grid.cell(shared).is_some_and(|cell| cell.source && cell.target));
    }

    // Tests toggling flips an ordinary cell twice
    #[test]
    fn test_toggle_wall() {
        let mut grid = Grid::new(2, 2);
        let coord = Coordinate::new(0, 1);

        assert_eq!(grid.toggle_wall(coord).ok(), Some(true));
        assert!(grid.is_wall(coord));
        assert_eq!(grid.toggle_wall(coord).ok(), Some(true));
        assert!(!grid.is_wall(coord));
    }

    // Tests clearing walls keeps endpoints in place
    #[test]
    fn test_clear_walls_keeps_endpoints() {
        let mut grid = Grid::new(3, 3);
        assert!(grid.set_source(Coordinate::new(0, 0)).is_ok());
        assert!(grid.set_target(Coordinate::new(2, 2)).is_ok());
        for col in 0..3 {
            assert!(grid.set_wall(Coordinate::new(1, col), true).is_ok());
        }
        assert_eq!(grid.wall_count(), 3);

        grid.clear_walls();

        assert_eq!(grid.wall_count(), 0);
        assert_eq!(grid.source(), Some(Coordinate::new(0, 0)));
        assert_eq!(grid.target(), Some(Coordinate::new(2, 2)));
    }

    // Tests the wall iterator yields row-major coordinates
    #[test]
    fn test_walls_iterates_row_major() {
        let mut grid = Grid::new(3, 3);
        for coord in [Coordinate::new(2, 0), Coordinate::new(0, 2), Coordinate::new(1, 1)] {
            assert!(grid.set_wall(coord, true).is_ok());
        }

        let walls: Vec<Coordinate> = grid.walls().collect();
        assert_eq!(
            walls,
            vec![
                Coordinate::new(0, 2),
                Coordinate::new(1, 1),
                Coordinate::new(2, 0),
            ]
        );
    }

    // Tests linear indexing and border detection
    #[test]
    fn test_index_and_border() {
        let grid = Grid::new(4, 5);

        assert_eq!(grid.index_of(Coordinate::new(2, 3)), Some(13));
        assert_eq!(grid.index_of(Coordinate::new(4, 0)), None);
        assert!(grid.is_border(Coordinate::new(0, 2)));
        assert!(grid.is_border(Coordinate::new(3, 2)));
        assert!(grid.is_border(Coordinate::new(2, 4)));
        assert!(!grid.is_border(Coordinate::new(2, 2)));
        assert!(!grid.is_border(Coordinate::new(9, 9)));
    }

    // Tests a zero-sized grid answers queries without panicking
    #[test]
    fn test_empty_grid() {
        let mut grid = Grid::new(0, 0);

        assert!(grid.is_empty());
        assert!(!grid.is_passable(Coordinate::new(0, 0)));
        assert!(grid.set_wall(Coordinate::new(0, 0), true).is_err());
        assert_eq!(grid.walls().count(), 0);
    }
}
