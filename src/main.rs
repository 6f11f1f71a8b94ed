use anyhow::Result;
use member_access::cli::{execute_benchmark, execute_demo, Cli};
use member_access::services::DefaultBenchmarkConfig;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse_normalized(std::env::args());

    if cli.benchmark {
        let config = DefaultBenchmarkConfig::new(cli.iterations)
            .with_sample_count(cli.samples)
            .with_warmup_iterations(cli.warmup)
            .with_reporting(true);
        execute_benchmark(
            config,
            &cli.selected_strategies(),
            cli.json_report.as_deref(),
            cli.quiet,
        )
    } else {
        execute_demo()
    }
}
