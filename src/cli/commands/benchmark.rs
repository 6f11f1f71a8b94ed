use super::explain_failure;
use crate::benchmarks::PerformanceComparison;
use crate::catalog::catalog_for;
use crate::core::BenchmarkConfig;
use crate::record::SampleRecord;
use crate::services::{ConsoleBenchmarkReporter, DefaultBenchmarkConfig};
use crate::strategies::StrategyKind;
use anyhow::Result;
use std::path::Path;

/// 4つのアクセス戦略をベンチマークし、統計サマリーを表示する
pub fn execute_benchmark(
    config: DefaultBenchmarkConfig,
    strategies: &[StrategyKind],
    json_report: Option<&Path>,
    quiet: bool,
) -> Result<()> {
    config.validate()?;
    if strategies.is_empty() {
        anyhow::bail!("計測する戦略が指定されていません");
    }

    let catalog = catalog_for::<SampleRecord>();
    let record = SampleRecord::sample();

    println!("🚀 メンバーアクセス戦略の比較");
    println!(
        "⚙️  設定: {} iterations × {} samples (warmup {})",
        config.iterations(),
        config.sample_count(),
        config.warmup_iterations()
    );

    let reporter = if quiet {
        ConsoleBenchmarkReporter::quiet()
    } else {
        ConsoleBenchmarkReporter::new()
    };

    let mut comparison = PerformanceComparison::new(config, reporter);
    comparison
        .run_full_comparison(strategies, &record, &catalog)
        .map_err(explain_failure)?;

    println!();
    comparison.print_summary();

    if let Some(path) = json_report {
        comparison.export_json_report(path)?;
        println!("📄 詳細レポートを出力しました: {}", path.display());
    }

    Ok(())
}
