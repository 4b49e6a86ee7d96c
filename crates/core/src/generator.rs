use rand::Rng;

use super::graph::Graph;
use common::error::Error;

/// Inclusive bounds for randomly drawn integer edge weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightRange {
    min: i64,
    max: i64,
}

impl WeightRange {
    /// Weights in `[-99, 100]`. Negative weights make negative cycles possible.
    pub const SIGNED: WeightRange = WeightRange { min: -99, max: 100 };

    /// Weights in `[1, 100]`. Graphs drawn from this range never contain a
    /// negative cycle.
    pub const POSITIVE: WeightRange = WeightRange { min: 1, max: 100 };

    /// # Errors
    /// Returns `Error::InvalidWeightRange` if `min > max`.
    pub fn new(min: i64, max: i64) -> Result<Self, Error> {
        if min > max {
            return Err(Error::InvalidWeightRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn contains(&self, weight: f64) -> bool {
        weight.fract() == 0.0 && weight >= self.min as f64 && weight <= self.max as f64
    }

    /// True when the range can yield a negative weight.
    pub fn allows_negative(&self) -> bool {
        self.min < 0
    }
}

impl Default for WeightRange {
    fn default() -> Self {
        Self::SIGNED
    }
}

/// Produces random directed weighted graphs with a given edge density.
///
/// Every ordered pair `(i, j)` with `i != j` independently receives an edge with
/// probability `density`; its weight is a uniform integer from the configured
/// [`WeightRange`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomGraphGenerator {
    weights: WeightRange,
}

impl RandomGraphGenerator {
    pub fn new(weights: WeightRange) -> Self {
        Self { weights }
    }

    pub fn weight_range(&self) -> WeightRange {
        self.weights
    }

    /// Generates a graph using a fresh thread-local random source.
    ///
    /// # Errors
    /// See [`RandomGraphGenerator::generate_with`].
    pub fn generate(&self, num_vertices: usize, density: f64) -> Result<Graph, Error> {
        self.generate_with(num_vertices, density, &mut rand::rng())
    }

    /// Generates a graph drawing every random value from `rng`.
    ///
    /// Pairs are visited in row-major order; each off-diagonal pair consumes one
    /// `f64` draw in `[0, 1)`, followed by one weight draw when an edge is placed.
    /// Replaying the same seeded `rng` therefore reproduces the same graph.
    ///
    /// # Errors
    /// Returns `Error::InvalidVertexCount` if `num_vertices` is zero, or
    /// `Error::InvalidDensity` if `density` is NaN or outside `[0, 1]`.
    pub fn generate_with<R>(
        &self,
        num_vertices: usize,
        density: f64,
        rng: &mut R,
    ) -> Result<Graph, Error>
    where
        R: Rng + ?Sized,
    {
        if !(0.0..=1.0).contains(&density) {
            return Err(Error::InvalidDensity(density));
        }

        let mut graph = Graph::empty(num_vertices)?;
        let weight_range = self.weights.min..=self.weights.max;

        for from in 0..num_vertices {
            for to in 0..num_vertices {
                if from == to {
                    continue;
                }

                if rng.random::<f64>() < density {
                    let weight = rng.random_range(weight_range.clone());
                    graph.set_edge(from, to, weight as f64);
                }
            }
        }

        Ok(graph)
    }
}
