use clap::ValueEnum;

use crate::{circuit_builder::CircuitBuilder, combinator::Combinator, stimulus, NodeId, Result};

use super::{Pulse, StepKind};

/// Which of the two latch inputs receive a pulse; the others stay at 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Signals {
    A,
    B,
    #[default]
    Both,
}

impl Signals {
    fn a(self) -> bool {
        matches!(self, Signals::A | Signals::Both)
    }

    fn b(self) -> bool {
        matches!(self, Signals::B | Signals::Both)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct LatchParams {
    pub start: f64,
    pub pulse_a: f64,
    pub pulse_b: f64,
    pub delay_a: f64,
    pub delay_b: f64,
    pub step: StepKind,
    pub signals: Signals,
}

impl Default for LatchParams {
    fn default() -> Self {
        Self {
            start: 8.0,
            pulse_a: 3.0,
            pulse_b: 3.0,
            delay_a: 0.0,
            delay_b: 0.0,
            step: StepKind::Heaviside,
            signals: Signals::Both,
        }
    }
}

/// Set/reset latch of two cross-coupled NORs. P starts high and Q low; a
/// pulse on A flips the latch to Q, a pulse on B flips it back to P.
pub struct SrLatch {
    pub a: NodeId,
    pub b: NodeId,
    pub p: NodeId,
    pub q: NodeId,
}

impl SrLatch {
    pub fn new(builder: &mut CircuitBuilder, params: &LatchParams) -> Result<Self> {
        let a = if params.signals.a() {
            let pulse = Pulse::new(params.start, params.pulse_a, params.delay_a);
            builder.input("A", "grey", pulse.transition(params.step))
        } else {
            builder.input("A", "grey", stimulus::constant(0.0))
        };
        let b = if params.signals.b() {
            let pulse = Pulse::new(params.start, params.pulse_b, params.delay_b);
            builder.input("B", "darkgrey", pulse.transition(params.step))
        } else {
            builder.input("B", "darkgrey", stimulus::constant(0.0))
        };

        let p = builder.gate_spec(Combinator::Nor, &[a]).with_initial(1.0);
        let p = builder.add_gate("P: A !| Q", "cyan", p)?;
        let q = builder.gate_spec(Combinator::Nor, &[b]).with_initial(0.0);
        let q = builder.add_gate("Q: B !| P", "blue", q)?;
        builder.push_input(p, q)?;
        builder.push_input(q, p)?;

        builder.show(&[a, b, p, q])?;
        Ok(Self { a, b, p, q })
    }
}
