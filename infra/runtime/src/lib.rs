//! # Runtime
//!
//! Named [Tokio](https://tokio.rs) runtime profiles for the workspace binaries.
//!
//! * [`RuntimeProfile::HighPerformance`]: the server profile, bigger stacks and long-lived idle threads.
//! * [`RuntimeProfile::MemoryEfficient`]: half the workers and small stacks, for tools and tests.
//! * [`RuntimeProfile::Default`]: auto-detected workers and a 3 `MiB` stack.
//!
//! Worker count comes from `TOKIO_WORKER_THREADS` when set to `1..=1024`,
//! otherwise from the available parallelism.
//!
//! ```rust,ignore
//! #[pantry_runtime::main(high_performance)]
//! async fn main() -> anyhow::Result<()> {
//!     Ok(())
//! }
//! ```

pub use anyhow::Result;
pub use pantry_derive::main;

use anyhow::Context;
use std::sync::OnceLock;
use std::thread::available_parallelism;
use std::time::Duration;
use tokio::runtime::{Builder, Runtime};
use tracing::debug;

const FALLBACK_WORKER_THREADS: usize = 4;
const MAX_WORKER_THREADS: usize = 1024;
const MIN_STACK_SIZE: usize = 1024 * 1024;
const MAX_STACK_SIZE: usize = 16 * 1024 * 1024;
const DEFAULT_THREAD_NAME: &str = "pantry-worker";

static DETECTED_WORKERS: OnceLock<usize> = OnceLock::new();

fn detected_workers() -> usize {
    *DETECTED_WORKERS.get_or_init(|| {
        std::env::var("TOKIO_WORKER_THREADS")
            .ok()
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .filter(|n| (1..=MAX_WORKER_THREADS).contains(n))
            .unwrap_or_else(|| {
                available_parallelism().map_or(FALLBACK_WORKER_THREADS, std::num::NonZero::get)
            })
    })
}

/// A named starting point for [`RuntimeConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RuntimeProfile {
    #[default]
    Default,
    HighPerformance,
    MemoryEfficient,
}

/// Settings applied to the multi-threaded Tokio builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub worker_threads: usize,
    pub stack_size: usize,
    pub thread_name: String,
    pub thread_keep_alive: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::from_profile(RuntimeProfile::Default)
    }
}

impl RuntimeConfig {
    #[must_use]
    pub fn from_profile(profile: RuntimeProfile) -> Self {
        let workers = detected_workers();
        let (worker_threads, stack_mib, name, keep_alive_secs) = match profile {
            RuntimeProfile::Default => (workers, 3, DEFAULT_THREAD_NAME, 60),
            RuntimeProfile::HighPerformance => (workers, 4, "pantry-hp", 300),
            RuntimeProfile::MemoryEfficient => ((workers / 2).max(1), 2, "pantry-mem", 30),
        };

        Self {
            worker_threads,
            stack_size: stack_mib * 1024 * 1024,
            thread_name: name.to_owned(),
            thread_keep_alive: Duration::from_secs(keep_alive_secs),
        }
    }

    #[must_use]
    pub fn with_worker_threads(mut self, threads: usize) -> Self {
        self.worker_threads = threads.clamp(1, MAX_WORKER_THREADS);
        self
    }

    #[must_use]
    pub fn with_stack_size(mut self, size: usize) -> Self {
        self.stack_size = size.clamp(MIN_STACK_SIZE, MAX_STACK_SIZE);
        self
    }

    #[must_use]
    pub fn with_thread_name(mut self, name: impl Into<String>) -> Self {
        self.thread_name = name.into();
        self
    }

    /// Clamps every knob into its valid range and restores a blank thread name.
    fn normalized(&self) -> Self {
        let thread_name = if self.thread_name.trim().is_empty() {
            DEFAULT_THREAD_NAME.to_owned()
        } else {
            self.thread_name.clone()
        };

        Self {
            worker_threads: self.worker_threads.clamp(1, MAX_WORKER_THREADS),
            stack_size: self.stack_size.clamp(MIN_STACK_SIZE, MAX_STACK_SIZE),
            thread_name,
            thread_keep_alive: self.thread_keep_alive,
        }
    }
}

/// Builds a multi-threaded runtime with all drivers (I/O, time, signals) enabled.
///
/// # Errors
/// Returns an error if the OS refuses to spawn the worker threads.
pub fn build_runtime(config: &RuntimeConfig) -> Result<Runtime> {
    let config = config.normalized();
    debug!(config = ?config, "Building tokio runtime");

    Builder::new_multi_thread()
        .worker_threads(config.worker_threads)
        .thread_name(&config.thread_name)
        .thread_stack_size(config.stack_size)
        .thread_keep_alive(config.thread_keep_alive)
        .enable_all()
        .build()
        .context("Failed to initialize tokio runtime")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_knobs_are_clamped() {
        let config = RuntimeConfig::default().with_worker_threads(0).with_stack_size(1);
        assert_eq!(config.worker_threads, 1);
        assert_eq!(config.stack_size, MIN_STACK_SIZE);

        let config = RuntimeConfig::default().with_worker_threads(5000).with_stack_size(usize::MAX);
        assert_eq!(config.worker_threads, MAX_WORKER_THREADS);
        assert_eq!(config.stack_size, MAX_STACK_SIZE);
    }

    #[test]
    fn memory_efficient_never_exceeds_default_workers() {
        let lean = RuntimeConfig::from_profile(RuntimeProfile::MemoryEfficient);
        let default = RuntimeConfig::from_profile(RuntimeProfile::Default);

        assert!(lean.worker_threads >= 1);
        assert!(lean.worker_threads <= default.worker_threads);
        assert!(lean.stack_size < default.stack_size);
    }

    #[test]
    fn blank_thread_name_is_restored() {
        let config = RuntimeConfig::default().with_thread_name("   ").normalized();
        assert_eq!(config.thread_name, DEFAULT_THREAD_NAME);
    }

    #[test]
    fn runtime_executes_futures() -> Result<()> {
        let config = RuntimeConfig::from_profile(RuntimeProfile::MemoryEfficient).with_worker_threads(1);
        let runtime = build_runtime(&config)?;

        let value = runtime.block_on(async { 21 * 2 });
        assert_eq!(value, 42);
        Ok(())
    }
}
