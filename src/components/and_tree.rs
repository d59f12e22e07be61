use crate::{circuit_builder::CircuitBuilder, NodeId, Result};

use super::{Pulse, StepKind};

#[derive(Clone, Copy, Debug)]
pub struct ThreeWayAndParams {
    pub start: f64,
    pub pulse_a: f64,
    pub pulse_b: f64,
    pub pulse_c: f64,
    pub delay_ab: f64,
    pub delay_ac: f64,
    pub step: StepKind,
}

impl Default for ThreeWayAndParams {
    fn default() -> Self {
        Self {
            start: 5.0,
            pulse_a: 3.0,
            pulse_b: 3.0,
            pulse_c: 3.0,
            delay_ab: 0.0,
            delay_ac: 0.0,
            step: StepKind::Heaviside,
        }
    }
}

/// `(A & B) & C` next to `(A & B) & =C`, where `=C` passes C through one
/// more gate so that both branches feeding the last AND have the same depth.
pub struct ThreeWayAnd {
    pub a: NodeId,
    pub b: NodeId,
    pub c: NodeId,
    pub and: NodeId,
    pub and_balanced: NodeId,
}

impl ThreeWayAnd {
    pub fn new(builder: &mut CircuitBuilder, params: &ThreeWayAndParams) -> Result<Self> {
        let input = |width: f64, delay: f64| {
            Pulse::new(params.start, width, delay).transition(params.step)
        };
        let a = builder.input("A", "grey", input(params.pulse_a, 0.0));
        let b = builder.input("B", "darkgrey", input(params.pulse_b, params.delay_ab));
        let c = builder.input("C", "lightgray", input(params.pulse_c, params.delay_ac));

        let a_b = builder.and("A & B", "", &[a, b])?;
        let c_eq = builder.same("=C", "", &[c])?;
        let and = builder.and("(A & B) & C", "red", &[a_b, c])?;
        let and_balanced = builder.and("(A & B) & =C", "blue", &[a_b, c_eq])?;

        builder.show(&[a, b, c, and, and_balanced])?;
        Ok(Self {
            a,
            b,
            c,
            and,
            and_balanced,
        })
    }
}

#[cfg(test)]
mod test {
    use super::{ThreeWayAnd, ThreeWayAndParams};
    use crate::{
        circuit_builder::CircuitBuilder,
        components::test_util::{at, peak, run},
    };

    #[test]
    fn all_three_high() {
        let mut builder = CircuitBuilder::default();
        let and = ThreeWayAnd::new(&mut builder, &ThreeWayAndParams::default()).unwrap();
        let mut circuit = builder.build();
        run(&mut circuit, 20.0);

        assert_eq!(at(&circuit, and.a, 6.0), 1.0);
        assert!(peak(&circuit, and.and, 5.0, 9.0) > 0.5);
        assert!(peak(&circuit, and.and_balanced, 5.0, 10.0) > 0.5);
        assert!(at(&circuit, and.and, 4.5) < 0.05);
        assert!(at(&circuit, and.and, 19.0) < 0.05);
    }

    #[test]
    fn c_too_late() {
        let mut builder = CircuitBuilder::default();
        let params = ThreeWayAndParams {
            delay_ac: 6.0,
            ..Default::default()
        };
        let and = ThreeWayAnd::new(&mut builder, &params).unwrap();
        let mut circuit = builder.build();
        run(&mut circuit, 20.0);

        assert_eq!(at(&circuit, and.c, 12.0), 1.0);
        assert!(peak(&circuit, and.and, 0.0, 20.0) < 0.2);
    }
}
