/*!
A flag to interrupt a solve, shared between the thread running the solve and the thread waiting on it.

Procedures check the flag at points where stopping is cheap (each round of propagation, each node of a search, each round of resolution, etc.) and return early once the flag is raised.

```rust
# use trio_sat::generic::interrupt::Interrupt;
let interrupt = Interrupt::default();
let handle = interrupt.clone();

assert!(interrupt.check().is_ok());
handle.raise();
assert!(interrupt.is_raised());
assert!(interrupt.check().is_err());
```
*/

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use crate::types::err::{self};

/// A shared flag, raised to interrupt a solve.
#[derive(Clone, Debug, Default)]
pub struct Interrupt {
    flag: Arc<AtomicBool>,
}

impl Interrupt {
    /// Raises the flag, for every clone of the interrupt.
    pub fn raise(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// True if the flag has been raised, false otherwise.
    pub fn is_raised(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }

    /// An error if the flag has been raised.
    pub fn check(&self) -> Result<(), err::SolveError> {
        match self.is_raised() {
            true => Err(err::SolveError::Interrupted),
            false => Ok(()),
        }
    }
}
