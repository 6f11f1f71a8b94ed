//! アクセス戦略のパフォーマンス測定
//!
//! 戦略ごとに繰り返し呼び出して時間を計り、平均・誤差・標準偏差を報告する

use crate::catalog::MemberCatalog;
use crate::core::{
    BenchmarkConfig, BenchmarkReporter, MemberCategory, Record, Statistics, StrategyMeasurement,
    ValidationError,
};
use crate::strategies::StrategyKind;
use anyhow::Context;
use std::hint::black_box;
use std::path::Path;
use std::time::Instant;

/// パフォーマンス比較テストスイート
pub struct PerformanceComparison<C, P>
where
    C: BenchmarkConfig,
    P: BenchmarkReporter,
{
    config: C,
    reporter: P,
    results: Vec<StrategyMeasurement>,
}

impl<C, P> PerformanceComparison<C, P>
where
    C: BenchmarkConfig,
    P: BenchmarkReporter,
{
    pub fn new(config: C, reporter: P) -> Self {
        Self {
            config,
            reporter,
            results: Vec::new(),
        }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn results(&self) -> &[StrategyMeasurement] {
        &self.results
    }

    /// 計測回数が0の設定を拒否する
    fn check_counts(&self) -> anyhow::Result<(usize, usize)> {
        let iterations = self.config.iterations();
        if iterations == 0 {
            return Err(ValidationError::new("iterations", "1以上である必要があります").into());
        }
        let sample_count = self.config.sample_count();
        if sample_count == 0 {
            return Err(ValidationError::new("sample_count", "1以上である必要があります").into());
        }
        Ok((iterations, sample_count))
    }

    /// 1戦略・1カテゴリを計測
    ///
    /// アクセサが失敗した場合はその時点で計測を中断する
    pub fn measure_strategy<R: Record>(
        &mut self,
        strategy: StrategyKind,
        record: &R,
        catalog: &MemberCatalog<R>,
        category: MemberCategory,
    ) -> anyhow::Result<StrategyMeasurement> {
        let (iterations, sample_count) = self.check_counts()?;

        for _ in 0..self.config.warmup_iterations() {
            black_box(strategy.render(black_box(record), catalog, category)?);
        }

        let mut samples = Vec::with_capacity(sample_count);

        for _ in 0..sample_count {
            let start = Instant::now();
            for _ in 0..iterations {
                black_box(strategy.render(black_box(record), catalog, category)?);
            }
            samples.push(start.elapsed().as_nanos() as f64 / iterations as f64);
        }

        let measurement = StrategyMeasurement {
            strategy: strategy.name().to_string(),
            category,
            iterations,
            samples: sample_count,
            statistics: Statistics::from_samples(&samples),
        };

        tracing::debug!(
            strategy = strategy.name(),
            %category,
            mean_ns = measurement.statistics.mean,
            "strategy measured"
        );

        if self.config.enable_reporting() {
            self.reporter.report_measurement(&measurement);
        }
        self.results.push(measurement.clone());

        Ok(measurement)
    }

    /// 全体的なパフォーマンス比較実行
    ///
    /// フィールド、プロパティの順に、指定された各戦略を計測する
    pub fn run_full_comparison<R: Record>(
        &mut self,
        strategies: &[StrategyKind],
        record: &R,
        catalog: &MemberCatalog<R>,
    ) -> anyhow::Result<()> {
        self.check_counts()?;
        let total_runs = strategies.len() * MemberCategory::ALL.len();

        for category in MemberCategory::ALL {
            if !StrategyKind::verify_consistent(strategies, record, catalog, category)? {
                tracing::warn!(%category, "strategies disagree; timings are not comparable");
            }
        }

        tracing::info!(
            record_type = R::TYPE_NAME,
            total_runs,
            iterations = self.config.iterations(),
            samples = self.config.sample_count(),
            "benchmark started"
        );

        if self.config.enable_reporting() {
            self.reporter.report_started(total_runs);
        }

        for category in MemberCategory::ALL {
            for &strategy in strategies {
                self.measure_strategy(strategy, record, catalog, category)?;
            }
        }

        if self.config.enable_reporting() {
            self.reporter.report_completed(total_runs);
        }

        tracing::info!(total_runs, "benchmark finished");
        Ok(())
    }

    /// 結果サマリー表を生成
    pub fn summary_table(&self) -> String {
        let mut table = String::new();
        table.push_str(&format!(
            "| {:<22} | {:<9} | {:>14} | {:>12} | {:>12} |\n",
            "Method", "Members", "Mean", "Error", "StdDev"
        ));
        table.push_str(&format!(
            "|{}|{}|{}|{}|{}|\n",
            "-".repeat(24),
            "-".repeat(11),
            "-".repeat(16),
            "-".repeat(14),
            "-".repeat(14)
        ));

        for measurement in &self.results {
            let stats = &measurement.statistics;
            table.push_str(&format!(
                "| {:<22} | {:<9} | {:>11.2} ns | {:>9.2} ns | {:>9.2} ns |\n",
                measurement.strategy,
                measurement.category.as_str(),
                stats.mean,
                stats.error,
                stats.std_dev
            ));
        }

        table
    }

    /// 結果サマリーの表示
    pub fn print_summary(&self) {
        println!("📊 パフォーマンス比較サマリー");
        println!("{}", "=".repeat(60));
        print!("{}", self.summary_table());
    }

    /// JSON形式でのレポート出力
    pub fn export_json_report(&self, path: &Path) -> anyhow::Result<()> {
        let report = serde_json::json!({
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "iterations": self.config.iterations(),
            "samples": self.config.sample_count(),
            "results": self.results,
        });

        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(path, json)
            .with_context(|| format!("レポートを書き込めません: {}", path.display()))?;

        tracing::info!(path = %path.display(), "benchmark report exported");
        Ok(())
    }
}
