//! Fault supervision
//!
//! Faults raised by the network side are classified as transient or
//! permanent. Transient faults are retried by the caller; permanent and
//! fatal faults restart the device through an injected callback, after
//! which every state reverts to its startup default.

/// Network fault severity
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NetworkFault {
    /// Dropped connection, failed accept, single failed association
    Transient,
    /// Radio cannot be configured or association keeps failing
    Permanent,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fault {
    Network(NetworkFault),
    /// Unrecoverable fault outside the network path
    Fatal,
}

/// Outcome of handling a fault
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Recovery {
    /// Keep going, the caller retries
    Retry,
    /// The restart callback was invoked
    Restart,
}

/// Top-level fault handler
pub struct Supervisor<R: FnMut()> {
    restart: R,
    transient_faults: u32,
}

impl<R: FnMut()> Supervisor<R> {
    pub fn new(restart: R) -> Self {
        Self {
            restart,
            transient_faults: 0,
        }
    }

    /// Classify `fault`, restarting on anything that is not transient
    #[must_use]
    pub fn handle(&mut self, fault: Fault) -> Recovery {
        match fault {
            Fault::Network(NetworkFault::Transient) => {
                self.transient_faults = self.transient_faults.saturating_add(1);
                log::warn!(
                    "supervisor: transient network fault ({} so far), retrying",
                    self.transient_faults
                );
                Recovery::Retry
            }
            Fault::Network(NetworkFault::Permanent) | Fault::Fatal => {
                log::error!("supervisor: {:?}, restarting", fault);
                (self.restart)();
                Recovery::Restart
            }
        }
    }

    /// Number of transient faults seen since startup
    pub fn transient_faults(&self) -> u32 {
        self.transient_faults
    }
}

/// Counts consecutive failed attempts and escalates once a budget is spent
#[derive(Debug)]
pub struct RetryBudget {
    max_attempts: u32,
    failures: u32,
}

impl RetryBudget {
    pub const fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            failures: 0,
        }
    }

    /// Record a failed attempt and classify it
    pub fn fail(&mut self) -> NetworkFault {
        self.failures = self.failures.saturating_add(1);
        if self.failures >= self.max_attempts {
            NetworkFault::Permanent
        } else {
            NetworkFault::Transient
        }
    }

    /// Forget previous failures after a successful attempt
    pub fn reset(&mut self) {
        self.failures = 0;
    }

    pub fn failures(&self) -> u32 {
        self.failures
    }
}
