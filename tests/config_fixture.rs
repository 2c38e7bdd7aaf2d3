//! Fixture-driven integration test.
//!
//! Loads a generator configuration from a YAML fixture, generates a range of
//! records, writes them as JSON lines the way an export collaborator would,
//! and checks that reading them back and regenerating give the same records.

use idemgen::{GeneratorConfig, IdempotentGenerator, RawRecord};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use tempfile::TempDir;

const FIXTURE: &str = "tests/fixtures/generator_config.yaml";
const RECORD_COUNT: u64 = 500;

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter("idemgen_core=info,idemgen_generator=debug")
        .with_test_writer()
        .try_init()
        .ok();
}

#[test]
fn test_fixture_config_loads() -> anyhow::Result<()> {
    init_tracing();

    let config = GeneratorConfig::from_file(FIXTURE)?;
    config.validate()?;

    assert_eq!(config.profile_space_size, 1000);
    assert_eq!(config.buckets.len(), 3);
    assert_eq!(config.pools.first_names.weights, Some(vec![4, 3, 2, 1]));
    assert_eq!(config.date_spread.span_millis(), Some(30 * 86_400_000));
    Ok(())
}

#[test]
fn test_jsonl_export_roundtrip() -> anyhow::Result<()> {
    init_tracing();

    let generator = IdempotentGenerator::new(GeneratorConfig::from_file(FIXTURE)?)?;
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("records.jsonl");

    tracing::info!("Writing {} records to {}", RECORD_COUNT, path.display());
    let mut writer = BufWriter::new(File::create(&path)?);
    for record in generator.iterate(0, RECORD_COUNT) {
        serde_json::to_writer(&mut writer, &record?)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;

    let reader = BufReader::new(File::open(&path)?);
    let mut count = 0u64;
    for (index, line) in reader.lines().enumerate() {
        let parsed: RawRecord = serde_json::from_str(&line?)?;
        assert_eq!(parsed, generator.record_by_index(index as u64)?);
        count += 1;
    }
    assert_eq!(count, RECORD_COUNT);
    Ok(())
}

#[test]
fn test_fixture_pools_respected() -> anyhow::Result<()> {
    init_tracing();

    let generator = IdempotentGenerator::new(GeneratorConfig::from_file(FIXTURE)?)?;
    let spread = generator.config().date_spread;
    let pools = &generator.config().pools;

    for record in generator.iterate(1_000, RECORD_COUNT) {
        let record = record?;
        assert!(record.profile_id < 1000);
        assert!(pools.cities.values.contains(&record.city));
        assert!(pools.channels.values.contains(&record.channel));
        assert!(pools.points_of_sale.values.contains(&record.point_of_sale));
        assert!(record.timestamp >= spread.start && record.timestamp < spread.end);
    }
    Ok(())
}
