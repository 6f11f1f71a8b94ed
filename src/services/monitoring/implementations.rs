// 進捗監視の具象実装

use crate::core::{BenchmarkReporter, StrategyMeasurement};

/// コンソール出力による進捗報告実装
#[derive(Debug, Default, Clone)]
pub struct ConsoleBenchmarkReporter {
    quiet: bool,
}

impl ConsoleBenchmarkReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet() -> Self {
        Self { quiet: true }
    }
}

impl BenchmarkReporter for ConsoleBenchmarkReporter {
    fn report_started(&self, total_runs: usize) {
        if !self.quiet {
            println!("🚀 Starting {total_runs} benchmark runs...");
        }
    }

    fn report_measurement(&self, measurement: &StrategyMeasurement) {
        if !self.quiet {
            println!(
                "📊 {} ({}): {:.2} ns/op ± {:.2}",
                measurement.strategy,
                measurement.category,
                measurement.statistics.mean,
                measurement.statistics.error
            );
        }
    }

    fn report_completed(&self, total_runs: usize) {
        if !self.quiet {
            println!("✅ Completed! Runs: {total_runs}");
        }
    }
}

/// 何もしない進捗報告実装（テスト・criterion用）
#[derive(Debug, Default, Clone)]
pub struct NoOpBenchmarkReporter;

impl NoOpBenchmarkReporter {
    pub fn new() -> Self {
        Self
    }
}

impl BenchmarkReporter for NoOpBenchmarkReporter {
    fn report_started(&self, _total_runs: usize) {
        // 何もしない
    }

    fn report_measurement(&self, _measurement: &StrategyMeasurement) {
        // 何もしない
    }

    fn report_completed(&self, _total_runs: usize) {
        // 何もしない
    }
}
