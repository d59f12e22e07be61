use clap::ValueEnum;

use crate::{
    circuit_builder::CircuitBuilder, combinator::Combinator, timer::Timer, NodeId, Result,
};

use super::{Pulse, StepKind};

/// How the NOR represses its output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Mechanism {
    /// DNA-binding repressor proteins
    #[default]
    Protein,
    /// CRISPR interference
    Crispri,
}

impl Mechanism {
    /// Measured kinetics, in hours.
    pub fn timer(self) -> Timer {
        match self {
            Mechanism::Protein => Timer::new(36.0 / 60.0, 35.0 / 60.0),
            Mechanism::Crispri => Timer::new(35.0 / 60.0, 47.0 / 60.0),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct RealNorParams {
    pub start: f64,
    pub pulse_a: f64,
    pub pulse_b: f64,
    pub delay_ab: f64,
    pub step: StepKind,
    pub mechanism: Mechanism,
}

impl Default for RealNorParams {
    fn default() -> Self {
        Self {
            start: 5.0,
            pulse_a: 3.0,
            pulse_b: 3.0,
            delay_ab: 0.0,
            step: StepKind::Heaviside,
            mechanism: Mechanism::Protein,
        }
    }
}

pub struct RealNor {
    pub a: NodeId,
    pub b: NodeId,
    pub nor: NodeId,
}

impl RealNor {
    pub fn new(builder: &mut CircuitBuilder, params: &RealNorParams) -> Result<Self> {
        let input = |width: f64, delay: f64| {
            Pulse::new(params.start, width, delay).transition(params.step)
        };
        let a = builder.input("A", "grey", input(params.pulse_a, 0.0));
        let b = builder.input("B", "darkgrey", input(params.pulse_b, params.delay_ab));

        let mut nor = builder.gate_spec(Combinator::Nor, &[a, b]);
        nor.timer = params.mechanism.timer();
        let nor = builder.add_gate("A NOR B", "red", nor)?;

        builder.show(&[a, b, nor])?;
        Ok(Self { a, b, nor })
    }
}

#[cfg(test)]
mod test {
    use super::{Mechanism, RealNor, RealNorParams};
    use crate::{
        circuit_builder::CircuitBuilder,
        components::test_util::{at, run},
    };

    #[test]
    fn represses_during_pulse() {
        for mechanism in [Mechanism::Protein, Mechanism::Crispri] {
            let mut builder = CircuitBuilder::default();
            let params = RealNorParams {
                mechanism,
                ..Default::default()
            };
            let nor = RealNor::new(&mut builder, &params).unwrap();
            let mut circuit = builder.build();
            run(&mut circuit, 20.0);

            let gate = circuit.node(nor.nor).unwrap().as_gate().unwrap();
            assert_eq!(gate.timer, mechanism.timer());
            assert!(at(&circuit, nor.nor, 4.9) > 0.7, "{mechanism:?}");
            assert!(at(&circuit, nor.nor, 7.9) < 0.1, "{mechanism:?}");
            assert!(at(&circuit, nor.nor, 19.0) > 0.7, "{mechanism:?}");
        }
    }
}
