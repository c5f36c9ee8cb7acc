//! Throughput benchmark for the sparse generation engine

use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;
use sparse_life::domain::{Algorithm, Cell, CellSet, ConwayRule, presets, step};

/// Average milliseconds per generation over `iterations`, plus the final population
fn benchmark(start: &CellSet, algorithm: Algorithm, iterations: u32) -> (f64, usize, usize) {
    let rule = ConwayRule;
    let mut cells = start.clone();
    let mut evaluated = 0;

    let timer = Instant::now();
    for _ in 0..iterations {
        let (next, stats) = step(&cells, &rule, algorithm);
        evaluated += stats.candidates;
        cells = next;
    }
    let ms = timer.elapsed().as_secs_f64() * 1000.0 / iterations as f64;
    (ms, cells.len(), evaluated / iterations as usize)
}

fn soup(radius: i64, seed: u64) -> CellSet {
    let mut rng = StdRng::seed_from_u64(seed);
    CellSet::random_region(&mut rng, Cell::new(-radius, -radius), Cell::new(radius, radius), 0.3)
}

fn main() {
    println!("=== Sparse Life Benchmark ===\n");

    let radii = [16, 64, 128, 256, 512];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>12} {:>12} {:>10}",
        "Start pop", "Evaluated", "Sparse ms", "Par ms", "End pop", "Speedup");
    println!("{:-<74}", "");

    for (i, radius) in radii.into_iter().enumerate() {
        let start = soup(radius, i as u64);
        let (serial_ms, end_pop, evaluated) = benchmark(&start, Algorithm::Sparse, iterations);
        let (par_ms, _, _) = benchmark(&start, Algorithm::SparseParallel, iterations);

        println!(
            "{:>10} {:>12} {:>12.2} {:>12.2} {:>12} {:>9.1}x",
            start.len(),
            evaluated,
            serial_ms,
            par_ms,
            end_pop,
            serial_ms / par_ms.max(f64::EPSILON)
        );
    }

    println!("\n=== Distance does not matter ===\n");

    // Two gliders a trillion cells apart cost the same as two side by side
    let mut far = CellSet::new();
    presets::glider().place_on(&mut far, Cell::new(0, 0));
    presets::glider().place_on(&mut far, Cell::new(1_000_000_000_000, 0));
    let (far_ms, _, far_eval) = benchmark(&far, Algorithm::Sparse, 1000);

    let mut near = CellSet::new();
    presets::glider().place_on(&mut near, Cell::new(0, 0));
    presets::glider().place_on(&mut near, Cell::new(10, 0));
    let (near_ms, _, near_eval) = benchmark(&near, Algorithm::Sparse, 1000);

    println!("Near gliders: {:.4} ms/gen, {} cells evaluated", near_ms, near_eval);
    println!("Far gliders:  {:.4} ms/gen, {} cells evaluated", far_ms, far_eval);
}
