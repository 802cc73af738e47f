//! WorkerPool - fixed-size pool running batches of independent jobs.
//!
//! Every batch call returns only once all of its jobs have finished, which is
//! the barrier between relaxation passes. Without the `parallel` feature jobs
//! run inline on the caller's thread, in order.

use crate::core::Result;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

pub struct WorkerPool {
    threads: usize,
    // None on wasm32: the global pool set up by `init_thread_pool` is used.
    #[cfg(feature = "parallel")]
    pool: Option<rayon::ThreadPool>,
}

impl WorkerPool {
    /// Pool with `threads` workers (at least one).
    pub fn new(threads: usize) -> Result<Self> {
        let threads = threads.max(1);

        #[cfg(all(feature = "parallel", not(target_arch = "wasm32")))]
        {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .thread_name(|i| format!("ballpit-worker-{}", i))
                .build()?;
            log::debug!("worker pool started with {} threads", threads);
            Ok(Self { threads, pool: Some(pool) })
        }
        #[cfg(all(feature = "parallel", target_arch = "wasm32"))]
        {
            Ok(Self { threads, pool: None })
        }
        #[cfg(not(feature = "parallel"))]
        {
            Ok(Self { threads })
        }
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    /// Run every job and sum the results. Blocks until all jobs are done.
    pub fn run_all<J, R, F>(&self, jobs: Vec<J>, f: F) -> R
    where
        J: Send,
        R: Send + std::iter::Sum<R>,
        F: Fn(J) -> R + Sync + Send,
    {
        #[cfg(feature = "parallel")]
        {
            match &self.pool {
                Some(pool) => pool.install(|| jobs.into_par_iter().map(&f).sum()),
                None => jobs.into_par_iter().map(&f).sum(),
            }
        }
        #[cfg(not(feature = "parallel"))]
        {
            jobs.into_iter().map(f).sum()
        }
    }

    /// Apply `f` to every item. Blocks until all items are done.
    pub fn for_each_mut<T, F>(&self, items: &mut [T], f: F)
    where
        T: Send,
        F: Fn(&mut T) + Sync + Send,
    {
        #[cfg(feature = "parallel")]
        {
            match &self.pool {
                Some(pool) => pool.install(|| items.par_iter_mut().for_each(&f)),
                None => items.par_iter_mut().for_each(&f),
            }
        }
        #[cfg(not(feature = "parallel"))]
        {
            items.iter_mut().for_each(f);
        }
    }
}
