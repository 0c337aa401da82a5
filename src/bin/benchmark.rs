use std::env;
use std::time::Instant;

use chrono::{DateTime, Utc};
use log::{info, warn};
use serde::Serialize;

use matrix_sssp::algorithm::{bellman_ford::BellmanFord, dijkstra::Dijkstra, ShortestPathAlgorithm};
use matrix_sssp::graph::generators::generate_seeded_matrix;
use matrix_sssp::graph::{AdjacencyMatrix, Graph};
use matrix_sssp::FrontierKind;

/// Largest graph the Bellman-Ford cross-check runs on
const REFERENCE_LIMIT: usize = 400;

#[derive(Debug, Clone)]
struct BenchmarkConfig {
    sizes: Vec<usize>,
    density: f64,
    max_weight: u64,
    seed: u64,
    frontiers: Vec<FrontierKind>,
    json: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        BenchmarkConfig {
            sizes: vec![100, 250, 500, 1_000, 2_000],
            density: 0.05,
            max_weight: 100,
            seed: 42,
            frontiers: FrontierKind::ALL.to_vec(),
            json: false,
        }
    }
}

impl BenchmarkConfig {
    fn from_args<I>(args: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = BenchmarkConfig::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            let mut value = |name: &str| {
                args.next()
                    .ok_or_else(|| format!("missing value for {}", name))
            };
            match arg.as_str() {
                "--frontier" => {
                    let kind = value("--frontier")?
                        .parse::<FrontierKind>()
                        .map_err(|e| e.to_string())?;
                    config.frontiers = vec![kind];
                }
                "--seed" => {
                    config.seed = value("--seed")?
                        .parse()
                        .map_err(|e| format!("invalid --seed: {}", e))?;
                }
                "--density" => {
                    config.density = value("--density")?
                        .parse()
                        .map_err(|e| format!("invalid --density: {}", e))?;
                }
                "--sizes" => {
                    config.sizes = value("--sizes")?
                        .split(',')
                        .map(|s| s.trim().parse::<usize>())
                        .collect::<Result<_, _>>()
                        .map_err(|e| format!("invalid --sizes: {}", e))?;
                }
                "--json" => config.json = true,
                other => return Err(format!("unknown argument '{}'", other)),
            }
        }
        if !(0.0..=1.0).contains(&config.density) {
            return Err(format!("--density must be within 0..=1, got {}", config.density));
        }
        if config.sizes.iter().any(|&n| n == 0) {
            return Err("graph sizes must be positive".to_string());
        }
        Ok(config)
    }
}

#[derive(Debug, Serialize)]
struct RunReport {
    vertices: usize,
    edges: usize,
    frontier: FrontierKind,
    millis: f64,
    reachable: usize,
    matches_reference: Option<bool>,
}

#[derive(Debug, Serialize)]
struct BenchmarkReport {
    generated_at: DateTime<Utc>,
    seed: u64,
    density: f64,
    runs: Vec<RunReport>,
}

/// Seed for the `index`-th generated graph
fn graph_seed(base: u64, index: usize) -> u64 {
    base.wrapping_add(index as u64)
}

// Function to benchmark one frontier on a graph
fn benchmark_frontier(
    kind: FrontierKind,
    graph: &AdjacencyMatrix<u64>,
    reference: Option<&[u64]>,
) -> Result<RunReport, matrix_sssp::Error> {
    let dijkstra = Dijkstra::new().with_frontier(kind);

    let start = Instant::now();
    let result = dijkstra.compute_shortest_paths(graph, 0)?;
    let duration = start.elapsed();

    let matches_reference = reference.map(|expected| expected == result.distances.as_slice());
    if matches_reference == Some(false) {
        warn!("{} frontier disagrees with Bellman-Ford on {} vertices", kind, graph.vertex_count());
    }
    info!(
        "{} frontier: {} reachable vertices in {:?}",
        kind,
        result.reachable_count(),
        duration
    );

    Ok(RunReport {
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        frontier: kind,
        millis: duration.as_secs_f64() * 1_000.0,
        reachable: result.reachable_count(),
        matches_reference,
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let config = BenchmarkConfig::from_args(env::args().skip(1))?;
    info!("Benchmark configuration: {:?}", config);

    let mut runs = Vec::new();
    for (i, &size) in config.sizes.iter().enumerate() {
        let graph = generate_seeded_matrix(size, config.density, config.max_weight, graph_seed(config.seed, i));

        let reference = if size <= REFERENCE_LIMIT {
            Some(BellmanFord::new().compute_shortest_paths(&graph, 0)?.distances)
        } else {
            None
        };

        for &kind in &config.frontiers {
            runs.push(benchmark_frontier(kind, &graph, reference.as_deref())?);
        }
    }

    if config.json {
        let report = BenchmarkReport {
            generated_at: Utc::now(),
            seed: config.seed,
            density: config.density,
            runs,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("=====================================================");
    println!("Dijkstra frontier benchmark (density {}, seed {})", config.density, config.seed);
    println!("=====================================================");
    println!(
        "{:<10} | {:<10} | {:<10} | {:<12} | {:<10} | {:<10}",
        "Vertices", "Edges", "Frontier", "Time (ms)", "Reachable", "Reference"
    );
    println!("-----------------------------------------------------");
    for run in &runs {
        let reference = match run.matches_reference {
            Some(true) => "ok",
            Some(false) => "MISMATCH",
            None => "-",
        };
        println!(
            "{:<10} | {:<10} | {:<10} | {:<12.3} | {:<10} | {:<10}",
            run.vertices, run.edges, run.frontier, run.millis, run.reachable, reference
        );
    }

    if runs.iter().any(|r| r.matches_reference == Some(false)) {
        return Err("frontier results disagree with the reference solver".into());
    }
    Ok(())
}
