//! The transaction coordinator.

use optic_core::{ErrorTree, PathStep};

use crate::error::{TransactionError, TransactionResult};

/// A deferred zero-argument commit action.
pub type Hook = Box<dyn FnOnce()>;

/// Transaction state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionState {
    /// No transaction is active.
    Idle,
    /// A top-level atomic scope is open.
    InTransaction,
}

impl Default for TransactionState {
    fn default() -> Self {
        TransactionState::Idle
    }
}

/// Coordinator for one logical call stack.
///
/// Holds the hook queue, the context path and the pending error tree of
/// the currently open transaction. Create one per call stack and thread
/// it through explicitly; the handle is deliberately not shareable
/// across threads (hooks are plain `FnOnce()` without `Send`).
///
/// Nested [`run_atomic`](Coordinator::run_atomic) calls are reentrant:
/// they share the enclosing boundary's hook queue and error tree rather
/// than opening a boundary of their own.
#[derive(Default)]
pub struct Coordinator {
    state: TransactionState,
    hooks: Vec<Hook>,
    context_path: Vec<PathStep>,
    pending: Option<ErrorTree>,
}

impl Coordinator {
    /// Create a new idle coordinator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a transaction is active.
    pub fn is_active(&self) -> bool {
        self.state == TransactionState::InTransaction
    }

    /// Get the current transaction state.
    pub fn state(&self) -> TransactionState {
        self.state
    }

    /// Execute `action` as a transaction.
    ///
    /// When a transaction is already active the action runs in place and
    /// its result is returned unchanged; commit handling belongs to the
    /// enclosing boundary. At the top level: on success with no recorded
    /// validation failures every queued hook runs in registration order;
    /// with recorded failures the hooks are discarded and one
    /// [`TransactionError::Aggregated`] carrying the whole error tree is
    /// returned; on any other error the hooks are discarded and the
    /// error propagates unchanged.
    ///
    /// # Panics
    ///
    /// Panics if hooks from a previous transaction are still queued.
    /// That can only happen through a bug in the coordinator's caller
    /// (e.g. leaking the handle mid-transaction) and is not recoverable.
    pub fn run_atomic<T>(
        &mut self,
        action: impl FnOnce(&mut Self) -> TransactionResult<T>,
    ) -> TransactionResult<T> {
        if self.is_active() {
            // Already in a transaction.
            return action(self);
        }

        assert!(
            self.hooks.is_empty(),
            "must not have leftover hooks when entering a transaction"
        );

        // A fail-fast exit may have left a stale tree behind.
        self.pending = None;

        self.state = TransactionState::InTransaction;
        let result = action(self);
        self.state = TransactionState::Idle;

        let value = match result {
            Ok(value) => value,
            Err(err) => {
                // Cancel queued hooks and propagate unchanged. No
                // aggregation happens for errors that reach this point.
                self.hooks.clear();
                return Err(err);
            }
        };

        if let Some(errors) = self.pending.take() {
            self.hooks.clear();
            return Err(TransactionError::Aggregated { errors });
        }

        // No errors, run hooks in registration order.
        let hooks = std::mem::take(&mut self.hooks);
        for hook in hooks {
            hook();
        }

        Ok(value)
    }

    /// Execute the given hook as soon as the transaction is committed.
    pub fn on_commit(&mut self, hook: impl FnOnce() + 'static) -> TransactionResult<()> {
        if !self.is_active() {
            return Err(TransactionError::NoActiveTransaction);
        }
        self.hooks.push(Box::new(hook));
        Ok(())
    }

    /// Run `block` under the given context step.
    ///
    /// Inside a transaction, a [`TransactionError::Validation`] raised by
    /// the block is recorded at the current context path and swallowed,
    /// returning `Ok(None)` so sibling operations keep running. Every
    /// other error propagates. The step is popped on every exit path.
    ///
    /// Outside a transaction the block runs with no path tracking and
    /// any failure propagates unmodified.
    pub fn with_context<T>(
        &mut self,
        step: impl Into<PathStep>,
        block: impl FnOnce(&mut Self) -> TransactionResult<T>,
    ) -> TransactionResult<Option<T>> {
        self.scoped(Some(step.into()), block)
    }

    /// Like [`with_context`](Coordinator::with_context) but records
    /// intercepted validation failures at the current path without
    /// pushing a step.
    pub fn capture<T>(
        &mut self,
        block: impl FnOnce(&mut Self) -> TransactionResult<T>,
    ) -> TransactionResult<Option<T>> {
        self.scoped(None, block)
    }

    fn scoped<T>(
        &mut self,
        step: Option<PathStep>,
        block: impl FnOnce(&mut Self) -> TransactionResult<T>,
    ) -> TransactionResult<Option<T>> {
        if !self.is_active() {
            return block(self).map(Some);
        }

        let pushed = step.is_some();
        if let Some(step) = step {
            self.context_path.push(step);
        }

        let outcome = match block(self) {
            Ok(value) => Ok(Some(value)),
            Err(TransactionError::Validation { message }) => {
                self.record_validation(message);
                Ok(None)
            }
            Err(other) => Err(other),
        };

        if pushed {
            self.context_path.pop();
        }
        outcome
    }

    /// Preserve a validation failure until the end of the transaction.
    fn record_validation(&mut self, message: String) {
        self.pending
            .get_or_insert_with(ErrorTree::new)
            .add(&self.context_path, message);
    }
}
