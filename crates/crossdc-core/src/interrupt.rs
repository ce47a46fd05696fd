//! Per-thread interrupt status
//!
//! Blocking coordination calls are cancelled cooperatively: another part of
//! the program sets the calling thread's interrupt flag, the blocked client
//! notices it, clears it, and fails with
//! [`CoordinationError::Interrupted`](crate::coordination::CoordinationError::Interrupted).
//! Whoever turns that failure into an error of its own must call
//! [`interrupt_current`] again so the signal is not lost to code further up
//! the stack.
//!
//! The flag is thread-local. Nothing here wakes a thread that is already
//! parked; clients poll the flag at their own blocking points.

use std::cell::Cell;

thread_local! {
    static INTERRUPTED: Cell<bool> = const { Cell::new(false) };
}

/// Set the interrupt flag of the current thread.
pub fn interrupt_current() {
    INTERRUPTED.with(|flag| flag.set(true));
}

/// Returns the current thread's interrupt flag without clearing it.
pub fn is_interrupted() -> bool {
    INTERRUPTED.with(Cell::get)
}

/// Returns and clears the current thread's interrupt flag.
pub fn take_interrupt() -> bool {
    INTERRUPTED.with(|flag| flag.replace(false))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_lifecycle() {
        assert!(!is_interrupted());

        interrupt_current();
        assert!(is_interrupted());
        assert!(is_interrupted(), "reading does not clear");

        assert!(take_interrupt());
        assert!(!is_interrupted());
        assert!(!take_interrupt());
    }

    #[test]
    fn test_flag_is_per_thread() {
        interrupt_current();

        let other = std::thread::spawn(is_interrupted).join().unwrap();
        assert!(!other);

        assert!(take_interrupt());
    }
}
