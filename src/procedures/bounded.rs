/*!
Bounded execution of a solve.

# Overview

A solve may take (practically) unbounded time, and so each solve is run in isolation:

1. The solve is moved to a fresh, named, worker thread, with a stack large enough for deep recursion.
2. The calling thread waits on a channel for the result of the solve, up to the time limit.
3. If the time limit passes, the [interrupt](crate::generic::interrupt) of the solve is raised, and the calling thread waits a short grace period for the worker to stop.
4. If the worker does not stop during the grace period, the worker is detached.

So, the harness never blocks indefinitely when given a time limit.
The time of a solve which times out is the time limit, as any wait for the worker is not part of the solve.
And, as a solve which passes the time limit is reported as a timeout regardless of whether the worker stops, a timeout is never mistaken for unsatisfiability.

```none
  caller                                   worker
    | --- spawn ----------------------------> |
    |                                         | catch_unwind(job)
    | <== recv_timeout(limit) ==== result === |
    |
    | on timeout:
    |   raise interrupt ----------------------> (checked cooperatively)
    |   recv_timeout(grace), else detach
```

# Faults

A panic on the worker is caught at the boundary of the worker and reported as [Bounded::Fault], as is any error returned by the job other than an interrupt.

# Example

```rust
# use std::time::Duration;
# use trio_sat::procedures::bounded::{isolate, Bounded, Limits};
let limits = Limits {
    time_limit: Some(Duration::from_millis(50)),
    ..Default::default()
};

let spin = isolate(&limits, |interrupt| {
    while !interrupt.is_raised() {
        std::thread::yield_now();
    }
    Ok(())
});
assert!(matches!(spin, Ok(Bounded::Timeout)));

let quick = isolate(&limits, |_| Ok(2 + 2));
assert!(matches!(quick, Ok(Bounded::Done(4))));
```
*/

use std::{
    panic::{self, AssertUnwindSafe},
    thread,
    time::{Duration, Instant},
};

use crossbeam::channel::{bounded, RecvTimeoutError};

use crate::{
    config::{Algorithm, Config},
    context::Counters,
    generic::interrupt::Interrupt,
    misc::log::targets::{self},
    procedures::solve::{solve_formula, Solution},
    reports::{Inconclusive, Report},
    structures::{formula::Formula, literal::IntLiteral},
    types::err::{self},
};

/// The name given to each worker thread.
pub const WORKER_NAME: &str = "trio_worker";

/// The result of a job run in isolation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Bounded<T> {
    /// The job finished with the value.
    Done(T),

    /// The job did not finish within the time limit.
    Timeout,

    /// The job panicked, or failed for a reason other than an interrupt.
    Fault,
}

/// Limits on a job run in isolation.
#[derive(Clone, Copy, Debug)]
pub struct Limits {
    /// The time to wait for a result, or no limit.
    pub time_limit: Option<Duration>,

    /// The time to wait for an interrupted job to stop.
    pub grace: Duration,

    /// The stack size of the worker, in bytes.
    pub stack_size: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits::from(&Config::default())
    }
}

impl From<&Config> for Limits {
    fn from(config: &Config) -> Self {
        Limits {
            time_limit: config.time_limit(),
            grace: config.grace.value,
            stack_size: config.worker_stack.value,
        }
    }
}

/// Runs the job on a worker thread, within the limits.
///
/// The job is given an interrupt, raised when the time limit passes.
/// An error is returned only if the worker could not be spawned.
pub fn isolate<T, F>(limits: &Limits, job: F) -> Result<Bounded<T>, err::SolveError>
where
    T: Send + 'static,
    F: FnOnce(&Interrupt) -> Result<T, err::SolveError> + Send + 'static,
{
    let interrupt = Interrupt::default();
    let worker_interrupt = interrupt.clone();

    let (tx, rx) = bounded::<thread::Result<Result<T, err::SolveError>>>(1);

    let handle = thread::Builder::new()
        .name(WORKER_NAME.to_string())
        .stack_size(limits.stack_size)
        .spawn(move || {
            let result = panic::catch_unwind(AssertUnwindSafe(|| job(&worker_interrupt)));
            // The receiver is gone if the worker was detached.
            let _ = tx.send(result);
        })
        .map_err(|e| {
            log::error!(target: targets::HARNESS, "Failed to spawn worker: {e}");
            err::SolveError::Spawn
        })?;

    let received = match limits.time_limit {
        Some(limit) => rx.recv_timeout(limit),
        None => rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
    };

    match received {
        Ok(result) => {
            let _ = handle.join();
            Ok(settle(result))
        }

        Err(RecvTimeoutError::Timeout) => {
            log::info!(target: targets::HARNESS, "Time limit reached, raising interrupt.");
            interrupt.raise();

            match rx.recv_timeout(limits.grace) {
                Ok(_) => {
                    let _ = handle.join();
                    log::debug!(target: targets::HARNESS, "Worker stopped after interrupt.");
                }
                Err(_) => {
                    log::warn!(target: targets::HARNESS, "Worker did not stop within {:?}, detaching.", limits.grace);
                    drop(handle);
                }
            }

            Ok(Bounded::Timeout)
        }

        Err(RecvTimeoutError::Disconnected) => {
            log::error!(target: targets::HARNESS, "Worker ended without a result.");
            let _ = handle.join();
            Ok(Bounded::Fault)
        }
    }
}

/// The bounded result of a job which returned (or panicked) before the time limit.
fn settle<T>(result: thread::Result<Result<T, err::SolveError>>) -> Bounded<T> {
    match result {
        Ok(Ok(value)) => Bounded::Done(value),

        Ok(Err(err::SolveError::Interrupted)) => Bounded::Timeout,

        Ok(Err(e)) => {
            log::error!(target: targets::HARNESS, "Solve failed: {e:?}");
            Bounded::Fault
        }

        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_default();
            log::error!(target: targets::HARNESS, "Worker panicked: {message}");
            Bounded::Fault
        }
    }
}

/// The outcome of a bounded solve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    /// The report of the solve.
    pub report: Report,

    /// Wall-clock time from the start of the solve to the report.
    ///
    /// On a timeout this is the time limit, and so excludes the grace period.
    pub elapsed: Duration,

    /// On a satisfiable search, the literals assigned true, ordered by atom.
    pub model: Option<Vec<IntLiteral>>,

    /// Counts from the solve, if the solve finished.
    pub counters: Option<Counters>,
}

/// Determines the satisfiability of the formula by the algorithm, within the time limit.
///
/// Other than the algorithm and time limit, the default configuration is used.
/// A time limit of `None` waits indefinitely, while a time limit of zero times out immediately.
pub fn run_bounded(
    formula: &Formula,
    algorithm: Algorithm,
    time_limit: Option<Duration>,
) -> Outcome {
    let mut config = Config::default();
    config.algorithm.value = algorithm;

    let limits = Limits {
        time_limit,
        ..Limits::from(&config)
    };
    run_within(formula, &config, &limits)
}

/// Determines the satisfiability of the formula, as configured.
pub fn run_bounded_with(config: &Config, formula: &Formula) -> Outcome {
    run_within(formula, config, &Limits::from(config))
}

fn run_within(formula: &Formula, config: &Config, limits: &Limits) -> Outcome {
    let start = Instant::now();

    let job_formula = formula.clone();
    let job_config = config.clone();
    let bounded = isolate(limits, move |interrupt| {
        solve_formula(&job_formula, &job_config, interrupt)
    });

    let elapsed = start.elapsed();

    let outcome = match bounded {
        Ok(Bounded::Done(Solution {
            satisfiable,
            model,
            counters,
        })) => Outcome {
            report: Report::from(satisfiable),
            elapsed,
            model,
            counters: Some(counters),
        },

        Ok(Bounded::Timeout) => Outcome {
            report: Report::Inconclusive(Inconclusive::Timeout),
            elapsed: limits.time_limit.map_or(elapsed, |limit| elapsed.min(limit)),
            model: None,
            counters: None,
        },

        Ok(Bounded::Fault) | Err(_) => Outcome {
            report: Report::Inconclusive(Inconclusive::Fault),
            elapsed,
            model: None,
            counters: None,
        },
    };

    log::info!(target: targets::HARNESS, "{} in {:.2}s", outcome.report, outcome.elapsed.as_secs_f64());
    outcome
}
