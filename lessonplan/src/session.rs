//! Single-slot request state
//!
//! Generation and export are each a single in-flight remote interaction at a
//! time. Instead of an ad hoc busy boolean, the slot is a small state
//! machine: `begin` refuses while a request is outstanding, and the returned
//! guard releases the slot when it goes out of scope no matter how the call
//! ended, so an early `?` return can never leave the slot stuck in flight.

use thiserror::Error;

/// Lifecycle of the slot's most recent request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestState {
    /// No request has run yet, or the slot was reset
    #[default]
    Idle,

    /// A request is outstanding; a second one cannot start
    InFlight,

    /// The last request completed and its result was recorded
    Succeeded,

    /// The last request ended without `succeed` being called
    Failed,
}

/// Attempted to start a request while one is outstanding
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("a request is already in progress")]
pub struct SlotBusy;

/// Gate for one remote interaction at a time
#[derive(Debug, Default)]
pub struct RequestSlot {
    state: RequestState,
}

impl RequestSlot {
    /// Create an idle slot
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state
    pub fn state(&self) -> RequestState {
        self.state
    }

    /// Mark the slot in flight and hand back the release guard.
    ///
    /// Fails only when a request is already outstanding; a slot in any
    /// terminal state can start a fresh request.
    pub fn begin(&mut self) -> Result<RequestGuard<'_>, SlotBusy> {
        if self.state == RequestState::InFlight {
            return Err(SlotBusy);
        }
        self.state = RequestState::InFlight;
        Ok(RequestGuard {
            slot: self,
            succeeded: false,
        })
    }
}

/// Releases the slot on drop, recording how the request ended
#[derive(Debug)]
pub struct RequestGuard<'a> {
    slot: &'a mut RequestSlot,
    succeeded: bool,
}

impl RequestGuard<'_> {
    /// Record a successful completion and release the slot
    pub fn succeed(mut self) {
        self.succeeded = true;
    }
}

impl Drop for RequestGuard<'_> {
    fn drop(&mut self) {
        self.slot.state = if self.succeeded {
            RequestState::Succeeded
        } else {
            RequestState::Failed
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_starts_idle() {
        let slot = RequestSlot::new();
        assert_eq!(slot.state(), RequestState::Idle);
    }

    #[test]
    fn test_begin_refuses_while_in_flight() {
        // Arrange: leak a guard so the slot stays in flight
        let mut slot = RequestSlot::new();
        let guard = slot.begin().unwrap();
        std::mem::forget(guard);

        // Act + Assert: the second submission is rejected
        assert!(matches!(slot.begin(), Err(SlotBusy)));
        assert_eq!(slot.state(), RequestState::InFlight);
    }

    #[test]
    fn test_success_path_records_succeeded() {
        // Arrange
        let mut slot = RequestSlot::new();

        // Act: run a request to completion
        let guard = slot.begin().unwrap();
        guard.succeed();

        // Assert
        assert_eq!(slot.state(), RequestState::Succeeded);
    }

    #[test]
    fn test_dropped_guard_releases_as_failed() {
        // Arrange
        let mut slot = RequestSlot::new();

        // Act: the guard falls out of scope without succeed, as it would on
        // an early `?` return
        {
            let _guard = slot.begin().unwrap();
        }

        // Assert: released, recorded as failed
        assert_eq!(slot.state(), RequestState::Failed);
    }

    #[test]
    fn test_slot_is_reusable_after_failure() {
        let mut slot = RequestSlot::new();
        {
            let _guard = slot.begin().unwrap();
        }
        assert_eq!(slot.state(), RequestState::Failed);

        let guard = slot.begin().unwrap();
        guard.succeed();
        assert_eq!(slot.state(), RequestState::Succeeded);
    }
}
