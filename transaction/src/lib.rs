//! Optic Transaction
//!
//! Atomic scopes, deferred commit hooks and validation-error aggregation.
//!
//! Responsibilities:
//! - Provide the reentrant atomic boundary (run_atomic)
//! - Queue commit hooks and run them in FIFO order on success (on_commit)
//! - Track the context path of nested scopes (with_context)
//! - Intercept validation failures, record them into the error tree and
//!   keep sibling operations running
//! - Surface one aggregated error for the whole transaction attempt

mod coordinator;
mod error;

pub use coordinator::{Coordinator, Hook, TransactionState};
pub use error::{TransactionError, TransactionResult};
