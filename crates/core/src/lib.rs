pub mod generator;
pub mod graph;
pub mod solver;
pub mod traits;

pub use generator::{RandomGraphGenerator, WeightRange};
pub use graph::{DistanceMatrix, Graph};
pub use solver::{FloydWarshallSolver, ShortestPaths};
pub use traits::ShortestPathSolver;
