use anyhow::Context;
use pso_solver::prelude::*;
use tracing_subscriber::EnvFilter;

/// Usage: `pso_solver [objective] [runs] [seed]`
///
/// `objective` is one of `booth`, `cross-in-tray`, `holder-table`,
/// `mccormick` or `eggholder` (default). Set `RUST_LOG=info` or
/// `RUST_LOG=debug` for per-run or per-iteration diagnostics on stderr.
fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);

    let benchmark: Benchmark = args.next().as_deref().unwrap_or("eggholder").parse()?;
    let mut config = PsoConfig::for_benchmark(benchmark);

    if let Some(runs) = args.next() {
        let runs = runs
            .parse::<usize>()
            .with_context(|| format!("invalid run count `{runs}`"))?;
        config = config.with_num_runs(runs);
    }
    if let Some(seed) = args.next() {
        let seed = seed
            .parse::<u64>()
            .with_context(|| format!("invalid seed `{seed}`"))?;
        config = config.with_seed(seed);
    }

    let optimizer = Optimizer::new(benchmark, config)?.with_objective_name(benchmark.name());
    let summary = optimizer.run_many()?;
    summary.print_report();

    Ok(())
}
