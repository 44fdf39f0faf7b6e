use std::collections::VecDeque;
use std::sync::Mutex;
use std::thread;

use crate::error::SeqError;
use crate::seq::Seq;

// ---------------------------------------------------------------------------
// WorkerPool
// ---------------------------------------------------------------------------

/// An executor that evaluates a function over a batch of inputs in parallel.
///
/// Implement this to back [`Seq::par_map_with`] with anything — a process
/// pool, a shared long-lived thread pool, a remote execution service. The one
/// hard contract: **results come back in input order**, one per input,
/// regardless of completion order.
///
/// # Function constraints
///
/// Workers may run in isolated contexts, so the dispatched function must be
/// stateless: `Fn + Send + Sync` rules out mutable captures, and functions
/// should also be pure — a function reading ambient mutable state gets no
/// defined semantics from this contract.
///
/// # Error Handling
///
/// A pool that cannot start, or any worker evaluation that fails, fails the
/// whole call with [`SeqError::Pool`]. Partial results are never returned and
/// there is no automatic fallback to sequential execution.
pub trait WorkerPool {
    /// Evaluate `f` over `items`, returning results in input order.
    fn run<T, S, F>(&self, f: F, items: Vec<T>) -> Result<Vec<S>, SeqError>
    where
        T: Send,
        S: Send,
        F: Fn(T) -> S + Send + Sync;
}

// ---------------------------------------------------------------------------
// ThreadPool — the default pool
// ---------------------------------------------------------------------------

/// A scoped-thread pool spun up for the duration of one call.
///
/// Work units are tagged with their input index and pulled from a shared
/// queue; each result lands in the slot for its index, so output order is
/// input order no matter which worker finishes first.
pub struct ThreadPool {
    threads: usize,
}

impl ThreadPool {
    /// A pool with exactly `threads` workers.
    ///
    /// # Errors
    ///
    /// [`SeqError::Pool`] when `threads` is zero.
    pub fn new(threads: usize) -> Result<Self, SeqError> {
        if threads == 0 {
            return Err(SeqError::Pool("thread count must be non-zero".into()));
        }
        Ok(Self { threads })
    }
}

impl Default for ThreadPool {
    /// One worker per logical CPU core, with a safe fallback.
    fn default() -> Self {
        Self {
            threads: num_cpus(),
        }
    }
}

impl WorkerPool for ThreadPool {
    fn run<T, S, F>(&self, f: F, items: Vec<T>) -> Result<Vec<S>, SeqError>
    where
        T: Send,
        S: Send,
        F: Fn(T) -> S + Send + Sync,
    {
        let len = items.len();
        if len == 0 {
            return Ok(Vec::new());
        }

        // Index-tagged queue and one result slot per input. Completion order
        // is unspecified; the index correlation is what fixes output order.
        let queue: Mutex<VecDeque<(usize, T)>> =
            Mutex::new(items.into_iter().enumerate().collect());
        let slots: Vec<Mutex<Option<S>>> =
            (0..len).map(|_| Mutex::new(None)).collect();
        let workers = self.threads.min(len);

        let f = &f;
        let queue = &queue;
        let slots_ref = &slots;

        let worker_panicked = thread::scope(|scope| -> Result<bool, SeqError> {
            let mut handles = Vec::with_capacity(workers);
            for _ in 0..workers {
                let handle = thread::Builder::new()
                    .spawn_scoped(scope, move || loop {
                        let job = match queue.lock() {
                            Ok(mut q) => q.pop_front(),
                            // Queue poisoned: a sibling panicked, stop pulling.
                            Err(_) => None,
                        };
                        let Some((i, item)) = job else { break };
                        let result = f(item);
                        if let Ok(mut slot) = slots_ref[i].lock() {
                            *slot = Some(result);
                        }
                    })
                    .map_err(|e| {
                        SeqError::Pool(format!("failed to spawn worker: {e}"))
                    })?;
                handles.push(handle);
            }
            // Join every handle — leaving a panicked thread unjoined would
            // re-raise its panic when the scope closes.
            let mut panicked = false;
            for handle in handles {
                if handle.join().is_err() {
                    panicked = true;
                }
            }
            Ok(panicked)
        })?;

        if worker_panicked {
            return Err(SeqError::Pool(
                "worker panicked during evaluation".into(),
            ));
        }

        let mut out = Vec::with_capacity(len);
        for slot in slots {
            let value = slot
                .into_inner()
                .ok()
                .flatten()
                .ok_or_else(|| SeqError::Pool("missing worker result".into()))?;
            out.push(value);
        }
        Ok(out)
    }
}

// ---------------------------------------------------------------------------
// Seq integration
// ---------------------------------------------------------------------------

impl<T: Clone + Send> Seq<T> {
    /// [`map`](Seq::map) evaluated on the default [`ThreadPool`].
    ///
    /// Semantically identical to `map(f)` — same results, same order — with
    /// element evaluations dispatched across worker threads. The call blocks
    /// until every result is back.
    ///
    /// # Errors
    ///
    /// [`SeqError::Pool`] if the pool cannot start or any worker evaluation
    /// panics. No partial result is returned.
    ///
    /// # Example
    ///
    /// ```rust
    /// use seqex::seq;
    ///
    /// let doubled = seq([1, 2, 3]).par_map(|x| x * 2).unwrap();
    /// assert_eq!(doubled.to_vec(), vec![2, 4, 6]);
    /// ```
    pub fn par_map<S, F>(&self, f: F) -> Result<Seq<S>, SeqError>
    where
        S: Send,
        F: Fn(T) -> S + Send + Sync,
    {
        self.par_map_with(&ThreadPool::default(), f)
    }

    /// [`par_map`](Seq::par_map) on a caller-supplied [`WorkerPool`].
    pub fn par_map_with<P, S, F>(&self, pool: &P, f: F) -> Result<Seq<S>, SeqError>
    where
        P: WorkerPool,
        S: Send,
        F: Fn(T) -> S + Send + Sync,
    {
        pool.run(f, self.items.clone()).map(Seq::from)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Get the logical CPU count, with a safe fallback.
fn num_cpus() -> usize {
    thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
}
