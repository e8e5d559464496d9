//! Generate the reference vectors and compare them with another implementation
//!
//! Usage: `validate_reference [OUTPUT_DIR] [REFERENCE_DIR]`
//!
//! Set `RUST_LOG=debug` to see per-vector generation and comparison logs.

use anyhow::{Context, Result};
use dist_catalog::{reference_catalog, RenormalizationEngine};
use dist_special::{default_divergence_grid, log_domain_divergence};
use dist_vectors::{
    reference_cases, CrossImplementationComparator, DirectoryStore, ReferenceVectorGenerator,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let output = args.next().unwrap_or_else(|| "reference_vectors".to_string());
    let reference = args.next();

    println!("Distribution Reference Validation");
    println!("=================================\n");

    let catalog = reference_catalog()?;
    let engine = RenormalizationEngine::default();
    println!("Truncation scaling factors:");
    for (name, result) in engine.renormalize_all(catalog) {
        match result {
            Ok(report) => println!("  {name:<12} {:.6}", report.total),
            Err(e) => println!("  {name:<12} {e}"),
        }
    }

    let cases = reference_cases()?;
    let mut store = DirectoryStore::create(&output)
        .with_context(|| format!("failed to create output directory {output}"))?;
    let written = ReferenceVectorGenerator::new().generate_all(&cases, &mut store)?;
    println!("\nWrote {} vectors to {output}", written.len());

    if let Some(dir) = reference {
        let external = DirectoryStore::open(&dir)
            .with_context(|| format!("failed to open reference directory {dir}"))?;
        let comparator = CrossImplementationComparator::new(&store, &external);
        println!("\nDiscrepancies against {dir}:");
        for (name, result) in comparator.compare_all(&cases) {
            match result {
                Ok(diff) => match diff.max_abs() {
                    Some(max) => println!("  {name:<18} max |diff| = {max:.3e}"),
                    None => println!("  {name:<18} no finite entries"),
                },
                Err(e) => println!("  {name:<18} {e}"),
            }
        }
    }

    let grid = default_divergence_grid();
    let divergence = log_domain_divergence(&grid)?;
    match divergence.max_abs() {
        Some(max) => println!("\nNemes approximation over {grid}: max divergence = {max:.3e}"),
        None => println!("\nNemes approximation over {grid}: no finite divergence"),
    }

    Ok(())
}
