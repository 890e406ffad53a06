//! Tests for fault classification and restart policy.

use std::cell::Cell;

use myrtio_ring_composer::{Fault, NetworkFault, Recovery, RetryBudget, Supervisor};

#[test]
fn transient_fault_is_retried_without_restart() {
    let restarts = Cell::new(0);
    let mut supervisor = Supervisor::new(|| restarts.set(restarts.get() + 1));

    let recovery = supervisor.handle(Fault::Network(NetworkFault::Transient));

    assert_eq!(recovery, Recovery::Retry);
    assert_eq!(restarts.get(), 0);
    assert_eq!(supervisor.transient_faults(), 1);
}

#[test]
fn permanent_fault_invokes_restart() {
    let restarts = Cell::new(0);
    let mut supervisor = Supervisor::new(|| restarts.set(restarts.get() + 1));

    let recovery = supervisor.handle(Fault::Network(NetworkFault::Permanent));

    assert_eq!(recovery, Recovery::Restart);
    assert_eq!(restarts.get(), 1);
}

#[test]
fn fatal_fault_invokes_restart() {
    let restarts = Cell::new(0);
    let mut supervisor = Supervisor::new(|| restarts.set(restarts.get() + 1));

    assert_eq!(supervisor.handle(Fault::Fatal), Recovery::Restart);
    assert_eq!(restarts.get(), 1);
}

#[test]
fn budget_exhaustion_turns_retries_into_restart() {
    let restarts = Cell::new(0);
    let mut supervisor = Supervisor::new(|| restarts.set(restarts.get() + 1));
    let mut budget = RetryBudget::new(2);

    let first = supervisor.handle(Fault::Network(budget.fail()));
    let second = supervisor.handle(Fault::Network(budget.fail()));

    assert_eq!(first, Recovery::Retry);
    assert_eq!(second, Recovery::Restart);
    assert_eq!(restarts.get(), 1);
}

#[test]
fn retry_budget_escalates_after_max_attempts() {
    let mut budget = RetryBudget::new(3);

    assert_eq!(budget.fail(), NetworkFault::Transient);
    assert_eq!(budget.fail(), NetworkFault::Transient);
    assert_eq!(budget.fail(), NetworkFault::Permanent);
}

#[test]
fn retry_budget_reset_forgets_failures() {
    let mut budget = RetryBudget::new(2);
    budget.fail();
    budget.reset();

    assert_eq!(budget.failures(), 0);
    assert_eq!(budget.fail(), NetworkFault::Transient);
}
