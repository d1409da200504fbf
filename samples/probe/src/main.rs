//! Builds a labeled point index over a synthetic cloud and probes it with a
//! single radius query, the same traffic a renderer would generate when
//! culling faces around a focus point.

mod cli;

use std::collections::HashSet;
use std::time::Instant;

use clap::Parser;
use loctree::{BuildParams, Octree};
use nalgebra::Point3;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn main() {
    let args = cli::Cli::parse();
    cli::initialize_tracing(&args.log_filter, args.log_format);

    let mut rng = StdRng::seed_from_u64(args.seed);
    let points: Vec<Point3<f32>> = (0..args.points)
        .map(|_| Point3::new(rng.random(), rng.random(), rng.random()))
        .collect();
    let labels: Vec<u32> = (0..args.points)
        .map(|_| rng.random_range(0..args.labels.max(1)))
        .collect();

    let params = BuildParams {
        max_depth: args.max_depth,
        min_node_points: args.min_node_points,
    };
    let started = Instant::now();
    let tree = match Octree::from_labeled_points(&points, &labels, params) {
        Ok(tree) => tree,
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(1);
        }
    };
    tracing::info!(
        points = tree.len(),
        nodes = tree.node_count(),
        height = tree.height(),
        elapsed = ?started.elapsed(),
        "index built"
    );

    let started = Instant::now();
    let matched = tree.query_radius(&args.query, args.radius);
    tracing::info!(
        labels = matched.len(),
        elapsed = ?started.elapsed(),
        "query finished"
    );

    let mut sorted: Vec<u32> = matched.iter().copied().collect();
    sorted.sort_unstable();
    println!("{sorted:?}");

    if args.check {
        let scanned: HashSet<u32> = points
            .iter()
            .zip(&labels)
            .filter(|(p, _)| {
                let d = *p - args.query;
                d.x * d.x + d.y * d.y + d.z * d.z < args.radius * args.radius
            })
            .map(|(_, label)| *label)
            .collect();
        if scanned == matched {
            tracing::info!("brute-force scan agrees");
        } else {
            tracing::error!(
                expected = scanned.len(),
                got = matched.len(),
                "brute-force scan disagrees"
            );
            std::process::exit(1);
        }
    }
}
