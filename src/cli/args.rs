use crate::strategies::StrategyKind;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "member_access")]
#[command(about = "Reads record members by name and benchmarks four access strategies")]
#[command(version)]
pub struct Cli {
    /// Run the access strategies under the benchmark harness instead of the demo
    #[arg(long)]
    pub benchmark: bool,

    /// Strategy invocations per timed sample
    #[arg(short, long, default_value = "10000")]
    pub iterations: usize,

    /// Number of timed samples per strategy
    #[arg(short, long, default_value = "20")]
    pub samples: usize,

    /// Untimed invocations before sampling
    #[arg(short, long, default_value = "1000")]
    pub warmup: usize,

    /// Strategies to benchmark (all when omitted)
    #[arg(long = "strategy", value_enum)]
    pub strategies: Vec<StrategyKind>,

    /// Write the measurements to a JSON report
    #[arg(long)]
    pub json_report: Option<PathBuf>,

    /// Suppress per-strategy progress lines
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Parse arguments, accepting the legacy `/benchmark` spelling
    pub fn parse_normalized<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self::parse_from(normalize_args(args))
    }

    /// Selected strategies, in declaration order when none were given
    pub fn selected_strategies(&self) -> Vec<StrategyKind> {
        if self.strategies.is_empty() {
            StrategyKind::ALL.to_vec()
        } else {
            self.strategies.clone()
        }
    }
}

/// 値を取るオプション（直後のトークンは読み替えない）
const VALUE_OPTIONS: &[&str] = &[
    "-i",
    "--iterations",
    "-s",
    "--samples",
    "-w",
    "--warmup",
    "--strategy",
    "--json-report",
];

/// 単独の引数として現れた `/benchmark` を `--benchmark` に読み替える
///
/// オプションの値と `--` 以降はそのまま渡す
pub fn normalize_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut normalized: Vec<String> = args.next().into_iter().collect();
    let mut expects_value = false;
    let mut options_ended = false;

    for arg in args {
        let standalone = !expects_value && !options_ended;
        expects_value = standalone && VALUE_OPTIONS.contains(&arg.as_str());

        if standalone && arg == "--" {
            options_ended = true;
        }

        if standalone && arg.eq_ignore_ascii_case("/benchmark") {
            normalized.push("--benchmark".to_string());
        } else {
            normalized.push(arg);
        }
    }

    normalized
}
