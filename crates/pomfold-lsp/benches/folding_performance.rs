//! Folding Performance Benchmarks
//!
//! Thresholds:
//! - Tag a 500-dependency POM: <5ms
//! - Folding ranges for a 500-dependency POM: <10ms

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pomfold_core::tag;
use pomfold_lsp::config::Settings;
use pomfold_lsp::structural::FoldingAnalyzer;
use std::time::Duration;

/// Generate a POM with `count` dependencies, each with one exclusion
fn generate_pom(count: usize) -> String {
    let mut content = String::from(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
  <modelVersion>4.0.0</modelVersion>
  <parent>
    <groupId>com.example</groupId>
    <artifactId>parent</artifactId>
    <version>1.0.0</version>
  </parent>
  <dependencies>
"#,
    );

    for i in 0..count {
        content.push_str(&format!(
            r#"    <dependency>
      <groupId>com.example.group{i}</groupId>
      <artifactId>artifact-{i}</artifactId>
      <version>{i}.0.0</version>
      <scope>test</scope>
      <exclusions>
        <exclusion>
          <groupId>org.excluded</groupId>
          <artifactId>excluded-{i}</artifactId>
        </exclusion>
      </exclusions>
    </dependency>
"#
        ));
    }

    content.push_str("  </dependencies>\n</project>\n");
    content
}

/// Benchmark raw tagging throughput
fn bench_tagging(c: &mut Criterion) {
    let mut group = c.benchmark_group("tagging");
    group.warm_up_time(Duration::from_millis(200));
    group.measurement_time(Duration::from_secs(2));

    for count in [10, 100, 500] {
        let pom = generate_pom(count);
        group.bench_with_input(BenchmarkId::new("tag", count), &pom, |b, pom| {
            b.iter(|| {
                let regions = tag(black_box(pom)).unwrap();
                black_box(regions)
            });
        });
    }

    group.finish();
}

/// Benchmark folding range generation including line conversion
fn bench_folding(c: &mut Criterion) {
    let mut group = c.benchmark_group("folding");
    group.warm_up_time(Duration::from_millis(200));
    group.measurement_time(Duration::from_secs(2));

    let settings = Settings::default();
    for count in [10, 100, 500] {
        let pom = generate_pom(count);
        group.bench_with_input(BenchmarkId::new("ranges", count), &pom, |b, pom| {
            b.iter(|| {
                let ranges = FoldingAnalyzer::generate_ranges_with(black_box(pom), &settings.folding);
                black_box(ranges)
            });
        });
    }

    group.finish();
}

/// Benchmark settings parsing
fn bench_configuration(c: &mut Criterion) {
    let mut group = c.benchmark_group("configuration");
    group.warm_up_time(Duration::from_millis(100));
    group.measurement_time(Duration::from_secs(1));

    let sample_toml = r#"
[documents]
file_names = ["pom.xml", ".flattened-pom.xml"]

[folding]
collapsed_text = true
min_lines = 2
exclude = ["exclusion"]
"#;

    group.bench_function("parse_settings", |b| {
        b.iter(|| {
            let settings = Settings::from_toml_str(black_box(sample_toml)).unwrap();
            black_box(settings)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_tagging, bench_folding, bench_configuration);
criterion_main!(benches);
