//! Tests for breadth-first search order, path shape and unreachable targets

#[cfg(test)]
mod tests {
    use gridpath::algorithm::search::{SearchOutcome, breadth_first_search, reconstruct_path};
    use gridpath::spatial::{Coordinate, Grid};
    use std::collections::HashMap;

    fn walled(rows: usize, cols: usize, walls: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(rows, cols);
        for &(row, col) in walls {
            assert!(grid.set_wall(Coordinate::new(row, col), true).is_ok());
        }
        grid
    }

    // Tests the open 5x5 corner-to-corner case
    #[test]
    fn test_open_grid_shortest_path() {
        let grid = Grid::new(5, 5);
        let source = Coordinate::new(0, 0);
        let target = Coordinate::new(4, 4);

        let outcome = breadth_first_search(&grid, source, target);

        assert!(outcome.found());
        assert_eq!(outcome.path.len(), 9);
        assert_eq!(outcome.distance(), Some(8));
        assert_eq!(outcome.path.first(), Some(&target));
        assert_eq!(outcome.path.last(), Some(&source));
        assert_eq!(outcome.visited.last(), Some(&target));
        assert_eq!(
            outcome.visited.get(..3),
            Some(&[source, Coordinate::new(0, 1), Coordinate::new(1, 0)][..])
        );
    }

    // Tests right is preferred over down when paths tie
    #[test]
    fn test_tie_break_follows_neighbour_order() {
        let grid = Grid::new(2, 2);

        let outcome = breadth_first_search(&grid, Coordinate::new(0, 0), Coordinate::new(1, 1));

        assert_eq!(
            outcome.path,
            vec![
                Coordinate::new(1, 1),
                Coordinate::new(0, 1),
                Coordinate::new(0, 0),
            ]
        );
        assert_eq!(
            outcome.path_from_source().collect::<Vec<_>>(),
            vec![
                Coordinate::new(0, 0),
                Coordinate::new(0, 1),
                Coordinate::new(1, 1),
            ]
        );
    }

    // Tests a full wall column leaves only the source side explored
    #[test]
    fn test_unreachable_target() {
        let grid = walled(3, 3, &[(0, 1), (1, 1), (2, 1)]);

        let outcome = breadth_first_search(&grid, Coordinate::new(0, 0), Coordinate::new(0, 2));

        assert!(!outcome.found());
        assert_eq!(outcome.distance(), None);
        assert_eq!(
            outcome.visited,
            vec![
                Coordinate::new(0, 0),
                Coordinate::new(1, 0),
                Coordinate::new(2, 0),
            ]
        );
    }

    // Tests source equal to target
    #[test]
    fn test_source_is_target() {
        let grid = Grid::new(3, 3);
        let cell = Coordinate::new(1, 1);

        let outcome = breadth_first_search(&grid, cell, cell);

        assert_eq!(outcome.visited, vec![cell]);
        assert_eq!(outcome.path, vec![cell]);
        assert_eq!(outcome.distance(), Some(0));
    }

    // Tests the search detours around a wall
    #[test]
    fn test_path_avoids_walls() {
        let grid = walled(3, 3, &[(0, 1), (1, 1)]);

        let outcome = breadth_first_search(&grid, Coordinate::new(0, 0), Coordinate::new(0, 2));

        assert_eq!(outcome.distance(), Some(6));
        assert!(outcome.path.iter().all(|&coord| !grid.is_wall(coord)));
        assert!(outcome.path.contains(&Coordinate::new(2, 1)));
    }

    // Tests an out-of-bounds source yields nothing
    #[test]
    fn test_out_of_bounds_source() {
        let grid = Grid::new(2, 2);

        let outcome = breadth_first_search(&grid, Coordinate::new(5, 5), Coordinate::new(0, 0));

        assert_eq!(outcome, SearchOutcome::default());
    }

    // Tests an out-of-bounds target explores the whole component
    #[test]
    fn test_out_of_bounds_target() {
        let grid = Grid::new(2, 3);

        let outcome = breadth_first_search(&grid, Coordinate::new(0, 0), Coordinate::new(9, 9));

        assert!(!outcome.found());
        assert_eq!(outcome.visited.len(), 6);
    }

    // Tests parent links are followed back to the root
    #[test]
    fn test_reconstruct_path() {
        let parents = HashMap::from([
            (Coordinate::new(0, 1), Coordinate::new(0, 0)),
            (Coordinate::new(0, 2), Coordinate::new(0, 1)),
        ]);

        assert_eq!(
            reconstruct_path(&parents, Coordinate::new(0, 2)),
            vec![
                Coordinate::new(0, 2),
                Coordinate::new(0, 1),
                Coordinate::new(0, 0),
            ]
        );
        assert_eq!(
            reconstruct_path(&parents, Coordinate::new(4, 4)),
            vec![Coordinate::new(4, 4)]
        );
    }
}
