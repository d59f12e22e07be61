use crate::{circuit_builder::CircuitBuilder, NodeId, Result};

use super::{Pulse, StepKind};

#[derive(Clone, Copy, Debug)]
pub struct TautologyParams {
    pub start: f64,
    pub pulse: f64,
    pub step: StepKind,
}

impl Default for TautologyParams {
    fn default() -> Self {
        Self {
            start: 10.0,
            pulse: 3.0,
            step: StepKind::Heaviside,
        }
    }
}

/// `A & !A` and `A | !A`, which digital logic keeps constant but which
/// glitch on every edge of A because `!A` lags behind A. The `=A` variants
/// delay A by one gate to line both operands up.
pub struct Tautology {
    pub a: NodeId,
    pub contradiction: NodeId,
    pub contradiction_buffered: NodeId,
    pub tautology: NodeId,
    pub tautology_buffered: NodeId,
}

impl Tautology {
    pub fn new(builder: &mut CircuitBuilder, params: &TautologyParams) -> Result<Self> {
        let pulse = Pulse::new(params.start, params.pulse, 0.0);
        let a = builder.input("A", "grey", pulse.transition(params.step));
        let a_eq = builder.same("=A", "green", &[a])?;
        let a_not = builder.not("!A", "orange", &[a])?;

        let contradiction = builder.and("A & !A", "red", &[a, a_not])?;
        let tautology = builder.or("A | !A", "red", &[a, a_not])?;
        let contradiction_buffered = builder.and("=A & !A", "blue", &[a_eq, a_not])?;
        let tautology_buffered = builder.or("=A | !A", "blue", &[a_eq, a_not])?;

        builder.show(&[
            a,
            contradiction,
            contradiction_buffered,
            tautology,
            tautology_buffered,
        ])?;
        Ok(Self {
            a,
            contradiction,
            contradiction_buffered,
            tautology,
            tautology_buffered,
        })
    }
}

#[cfg(test)]
mod test {
    use super::{Tautology, TautologyParams};
    use crate::{
        circuit_builder::CircuitBuilder,
        components::test_util::{at, run},
    };

    #[test]
    fn settles_to_constants() {
        let mut builder = CircuitBuilder::default();
        let tautology = Tautology::new(&mut builder, &TautologyParams::default()).unwrap();
        let mut circuit = builder.build();
        run(&mut circuit, 30.0);

        assert_eq!(at(&circuit, tautology.a, 11.0), 1.0);
        for time in [9.0, 25.0] {
            assert!(at(&circuit, tautology.contradiction, time) < 0.1);
            assert!(at(&circuit, tautology.contradiction_buffered, time) < 0.1);
            assert!(at(&circuit, tautology.tautology, time) > 0.9);
            assert!(at(&circuit, tautology.tautology_buffered, time) > 0.9);
        }
    }
}
