// ベンチマーク設定の具象実装

use crate::core::{BenchmarkConfig, ValidationError, ValidationResult};

/// デフォルト設定実装
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultBenchmarkConfig {
    iterations: usize,
    warmup_iterations: usize,
    sample_count: usize,
    enable_reporting: bool,
}

impl DefaultBenchmarkConfig {
    pub fn new(iterations: usize) -> Self {
        Self {
            iterations,
            ..Self::default()
        }
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_warmup_iterations(mut self, warmup_iterations: usize) -> Self {
        self.warmup_iterations = warmup_iterations;
        self
    }

    pub fn with_sample_count(mut self, sample_count: usize) -> Self {
        self.sample_count = sample_count;
        self
    }

    pub fn with_reporting(mut self, enable: bool) -> Self {
        self.enable_reporting = enable;
        self
    }

    /// 設定の妥当性をチェック
    ///
    /// ウォームアップは0回でもよい
    pub fn validate(&self) -> ValidationResult<()> {
        if self.iterations == 0 {
            return Err(ValidationError::new("iterations", "1以上である必要があります"));
        }
        if self.sample_count == 0 {
            return Err(ValidationError::new("sample_count", "1以上である必要があります"));
        }
        Ok(())
    }
}

impl Default for DefaultBenchmarkConfig {
    fn default() -> Self {
        Self {
            iterations: 10_000,
            warmup_iterations: 1_000,
            sample_count: 20,
            enable_reporting: true,
        }
    }
}

impl BenchmarkConfig for DefaultBenchmarkConfig {
    fn iterations(&self) -> usize {
        self.iterations
    }

    fn warmup_iterations(&self) -> usize {
        self.warmup_iterations
    }

    fn sample_count(&self) -> usize {
        self.sample_count
    }

    fn enable_reporting(&self) -> bool {
        self.enable_reporting
    }
}
