//! Canonical circuit descriptions.

pub mod and_tree;
pub mod latch;
pub mod real_nor;
pub mod tautology;
pub mod xor;

use clap::ValueEnum;

use crate::{node::Transition, stimulus};

/// Time constant of both edges of an [StepKind::ExpStep] input.
pub const EXPSTEP_TAU: f64 = 0.5;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum StepKind {
    #[default]
    Heaviside,
    ExpStep,
}

/// A single input pulse of `width` starting at `start + delay`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pulse {
    pub start: f64,
    pub width: f64,
    pub delay: f64,
}

impl Pulse {
    pub fn new(start: f64, width: f64, delay: f64) -> Self {
        Self {
            start,
            width,
            delay,
        }
    }

    pub fn transition(&self, kind: StepKind) -> Transition {
        let stop = self.start + self.width;
        match kind {
            StepKind::Heaviside => Box::new(stimulus::heaviside(self.start, stop, self.delay)),
            StepKind::ExpStep => Box::new(stimulus::expstep(
                self.start,
                stop,
                EXPSTEP_TAU,
                EXPSTEP_TAU,
                self.delay,
            )),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_util {
    use crate::{noise::NoiseSource, Circuit, NodeId};

    pub fn run(circuit: &mut Circuit, tmax: f64) {
        let steps = circuit.steps_for(tmax).unwrap();
        circuit
            .run(steps, 0.0, &mut NoiseSource::seeded(0))
            .unwrap();
    }

    pub fn at(circuit: &Circuit, node_id: NodeId, time: f64) -> f64 {
        let t = (time / circuit.dt()).round() as usize;
        circuit.output(node_id).unwrap()[t]
    }

    pub fn peak(circuit: &Circuit, node_id: NodeId, from: f64, to: f64) -> f64 {
        let dt = circuit.dt();
        let from = (from / dt).round() as usize;
        let to = (to / dt).round() as usize;
        circuit.output(node_id).unwrap()[from..to]
            .iter()
            .cloned()
            .fold(f64::MIN, f64::max)
    }
}

#[cfg(test)]
mod test {
    use super::{Pulse, StepKind};

    #[test]
    fn pulse_kinds() {
        let pulse = Pulse::new(5.0, 3.0, 1.0);
        let heaviside = pulse.transition(StepKind::Heaviside);
        assert_eq!(heaviside(7.0, 0.0, 0.01), 1.0);
        assert_eq!(heaviside(9.5, 0.0, 0.01), 0.0);

        let expstep = pulse.transition(StepKind::ExpStep);
        let rising = expstep(7.0, 0.0, 0.01);
        assert!((rising - 0.02).abs() < 1e-12);
        assert_eq!(expstep(9.5, 0.5, 0.01), 0.5 - 0.01);
    }
}
