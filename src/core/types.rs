// 計測結果に関連するデータ型定義

use super::traits::MemberCategory;
use serde::{Deserialize, Serialize};

/// サンプル列の統計量（単位: ns/op）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub mean: f64,
    /// 99.9%信頼区間の半幅
    pub error: f64,
    /// 標本標準偏差
    pub std_dev: f64,
}

impl Statistics {
    /// サンプルから統計量を計算
    ///
    /// サンプルが2個未満の場合、誤差と標準偏差は0とする
    pub fn from_samples(samples: &[f64]) -> Self {
        if samples.is_empty() {
            return Self {
                mean: 0.0,
                error: 0.0,
                std_dev: 0.0,
            };
        }

        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;

        if samples.len() < 2 {
            return Self {
                mean,
                error: 0.0,
                std_dev: 0.0,
            };
        }

        let variance = samples
            .iter()
            .map(|sample| (sample - mean).powi(2))
            .sum::<f64>()
            / (n - 1.0);
        let std_dev = variance.sqrt();
        let error = student_t_999(samples.len() - 1) * std_dev / n.sqrt();

        Self {
            mean,
            error,
            std_dev,
        }
    }
}

/// 両側99.9%のt分布臨界値
///
/// 表にない自由度は範囲の下端の値を使う（区間は広めになる）
fn student_t_999(degrees_of_freedom: usize) -> f64 {
    match degrees_of_freedom {
        0 => 0.0,
        1 => 636.619,
        2 => 31.599,
        3 => 12.924,
        4 => 8.610,
        5 => 6.869,
        6 => 5.959,
        7 => 5.408,
        8 => 5.041,
        9 => 4.781,
        10 => 4.587,
        11..=15 => 4.437,
        16..=20 => 4.015,
        21..=30 => 3.819,
        31..=60 => 3.646,
        61..=120 => 3.460,
        _ => 3.291,
    }
}

/// 1戦略・1カテゴリ分の計測結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyMeasurement {
    pub strategy: String,
    pub category: MemberCategory,
    pub iterations: usize,
    pub samples: usize,
    pub statistics: Statistics,
}
