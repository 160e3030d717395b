//! Batches of independent runs.
//!
//! Every config in a sweep gets its own `Sim` (own table, own RNG), so runs
//! never share state.  With the `parallel` feature the runs are spread over
//! Rayon's thread pool; results come back in input order either way.

use dp_core::{SimConfig, StrategyKind};
use tracing::info;

use crate::{NoopObserver, RunSummary, SimResult, initialize};

/// Run every config to its `max_ticks` and collect the final summaries.
pub fn sweep(configs: &[SimConfig]) -> Vec<SimResult<RunSummary>> {
    info!(runs = configs.len(), "sweep started");

    #[cfg(not(feature = "parallel"))]
    {
        configs.iter().map(run_one).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        configs.par_iter().map(run_one).collect()
    }
}

/// Run `base` once per built-in strategy, same seed and parameters.
pub fn compare_strategies(base: &SimConfig) -> Vec<(StrategyKind, SimResult<RunSummary>)> {
    let configs: Vec<SimConfig> = StrategyKind::ALL
        .into_iter()
        .map(|strategy| SimConfig { strategy, ..base.clone() })
        .collect();
    StrategyKind::ALL.into_iter().zip(sweep(&configs)).collect()
}

fn run_one(config: &SimConfig) -> SimResult<RunSummary> {
    initialize(config.clone())?.run_to_end(&mut NoopObserver)
}
