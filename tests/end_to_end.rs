//! Full validation run through the facade crate

use dist_check::prelude::*;
use tempfile::TempDir;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

#[test]
fn test_validation_run() -> anyhow::Result<()> {
    init_tracing();

    // Renormalization: every distribution but the zero-width Bernoulli set
    let catalog = reference_catalog()?;
    let engine = RenormalizationEngine::default();
    let reports = engine.renormalize_all(catalog);
    let usable = reports.iter().filter(|(_, r)| r.is_ok()).count();
    assert_eq!(usable, catalog.len() - 1);

    // Reference vectors on disk, compared against a second run
    let cases = reference_cases()?;
    let generator = ReferenceVectorGenerator::new();
    let ours = TempDir::new()?;
    let theirs = TempDir::new()?;
    let mut local = DirectoryStore::open(ours.path())?;
    let mut external = DirectoryStore::open(theirs.path())?;
    generator.generate_all(&cases, &mut local)?;
    generator.generate_all(&cases, &mut external)?;

    let comparator = CrossImplementationComparator::new(&local, &external);
    for (name, result) in comparator.compare_all(&cases) {
        let diff = result?;
        assert!(diff.max_abs().map_or(true, |m| m == 0.0), "{name}");
    }

    // Nemes sweep stays within rounding error
    let divergence = log_domain_divergence(&dist_check::dist_special::default_divergence_grid())?;
    assert_eq!(divergence.len(), 1000);
    let max = divergence.max_abs().unwrap_or(f64::INFINITY);
    assert!(max < 1e-9, "max divergence {max}");
    Ok(())
}

#[test]
fn test_errors_share_one_taxonomy() {
    let catalog = reference_catalog().unwrap();
    let engine = RenormalizationEngine::default();
    assert!(matches!(
        engine.renormalize_named(catalog, "bernoulli"),
        Err(Error::Configuration(_))
    ));
    assert!(matches!(catalog.lookup("zipf"), Err(Error::NotFound(_))));
    assert!(matches!(log_domain(0.0), Err(Error::Domain(_))));
    assert!(matches!(closed_form(-1.0), Err(Error::Domain(_))));
}
