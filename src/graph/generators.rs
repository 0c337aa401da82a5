use crate::graph::AdjacencyMatrix;
use rand::prelude::*;

/// Generates a random dense matrix with `n` vertices
///
/// Each ordered pair `(i, j)` with `i != j` gets an edge with probability `density`
/// and a uniform weight in `1..=max_weight`. The diagonal stays empty.
pub fn generate_random_matrix<R: Rng>(
    n: usize,
    density: f64,
    max_weight: u64,
    rng: &mut R,
) -> AdjacencyMatrix<u64> {
    assert!(n > 0, "n must be positive");
    assert!(max_weight > 0, "max_weight must be positive");
    assert!(!density.is_nan(), "density must be a number");
    let density = density.clamp(0.0, 1.0);

    let mut edges = Vec::new();
    for i in 0..n {
        for j in 0..n {
            if i != j && rng.gen_bool(density) {
                edges.push((i, j, rng.gen_range(1..=max_weight)));
            }
        }
    }

    // Endpoints and weights are in range by construction
    AdjacencyMatrix::from_edges(n, edges).expect("generated edges are valid")
}

/// Same as [`generate_random_matrix`] but driven by a seeded `StdRng`
pub fn generate_seeded_matrix(
    n: usize,
    density: f64,
    max_weight: u64,
    seed: u64,
) -> AdjacencyMatrix<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_random_matrix(n, density, max_weight, &mut rng)
}

/// Generates a 4-connected `width`×`height` grid with unit weights in both directions
pub fn generate_grid(width: usize, height: usize) -> AdjacencyMatrix<u64> {
    assert!(width > 0 && height > 0, "grid dimensions must be positive");

    let index = |x: usize, y: usize| -> usize { y * width + x };
    let mut edges = Vec::new();
    for y in 0..height {
        for x in 0..width {
            let current = index(x, y);
            if x + 1 < width {
                edges.push((current, index(x + 1, y), 1));
                edges.push((index(x + 1, y), current, 1));
            }
            if y + 1 < height {
                edges.push((current, index(x, y + 1), 1));
                edges.push((index(x, y + 1), current, 1));
            }
        }
    }

    AdjacencyMatrix::from_edges(width * height, edges).expect("grid edges are valid")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn seeded_matrices_are_reproducible() {
        let a = generate_seeded_matrix(12, 0.3, 20, 7);
        let b = generate_seeded_matrix(12, 0.3, 20, 7);
        assert_eq!(a, b);
    }

    #[test]
    fn random_matrix_has_empty_diagonal() {
        let graph = generate_seeded_matrix(10, 1.0, 5, 1);
        for v in 0..graph.vertex_count() {
            assert_eq!(graph.weight_of(v, v), 0);
        }
        assert_eq!(graph.edge_count(), 10 * 9);
    }

    #[test]
    fn grid_edges() {
        let grid = generate_grid(3, 2);
        assert_eq!(grid.vertex_count(), 6);
        // 2 rows of 2 horizontal links + 3 vertical links, both directions
        assert_eq!(grid.edge_count(), 2 * (2 * 2 + 3));
        assert!(grid.has_edge(0, 1) && grid.has_edge(1, 0));
        assert!(grid.has_edge(1, 4));
        assert!(!grid.has_edge(0, 4));
    }
}
