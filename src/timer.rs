use crate::{error::positive, Result};

/// Production and decay time constants of a node. Both must be positive,
/// which [crate::Circuit::validate] checks before a run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timer {
    pub tau_emit: f64,
    pub tau_decay: f64,
}

impl Timer {
    pub fn new(tau_emit: f64, tau_decay: f64) -> Self {
        Self {
            tau_emit,
            tau_decay,
        }
    }

    pub fn validate(&self) -> Result<()> {
        positive("tau_emit", self.tau_emit)?;
        positive("tau_decay", self.tau_decay)?;
        Ok(())
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}
