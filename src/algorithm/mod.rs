/// Cell bitset used as the search visited set
pub mod bitset;
/// Owned board state with the pathfinding and maze triggers
pub mod board;
/// Recursive-division maze generation
pub mod maze;
/// Injectable random choice for reproducible generation
pub mod random;
/// Breadth-first search with path reconstruction
pub mod search;
