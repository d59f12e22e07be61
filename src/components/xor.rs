use crate::{circuit_builder::CircuitBuilder, NodeId, Result};

use super::{Pulse, StepKind};

#[derive(Clone, Copy, Debug)]
pub struct XorParams {
    pub start: f64,
    pub pulse_a: f64,
    pub pulse_b: f64,
    pub delay: f64,
    pub step: StepKind,
}

impl Default for XorParams {
    fn default() -> Self {
        Self {
            start: 10.0,
            pulse_a: 3.0,
            pulse_b: 3.0,
            delay: 0.0,
            step: StepKind::Heaviside,
        }
    }
}

/// XOR built from NORs: `((A !| B) !| A) + ((A !| B) !| B)`, the two half
/// branches summed by a merge gate. `A =^ B` feeds the second layer with
/// buffered copies `=A`, `=B` instead of the raw inputs.
pub struct Xor {
    pub a: NodeId,
    pub b: NodeId,
    pub xor: NodeId,
    pub xor_buffered: NodeId,
}

impl Xor {
    pub fn new(builder: &mut CircuitBuilder, params: &XorParams) -> Result<Self> {
        let input = |width: f64, delay: f64| {
            Pulse::new(params.start, width, delay).transition(params.step)
        };
        let a = builder.input("A", "grey", input(params.pulse_a, 0.0));
        let b = builder.input("B", "darkgrey", input(params.pulse_b, params.delay));

        let a_eq = builder.same("=A", "green", &[a])?;
        let b_eq = builder.same("=B", "green", &[b])?;
        let a_b_nor = builder.nor("A !| B", "orange", &[a, b])?;
        let a_half = builder.nor("(A !| B) !| A", "", &[a_b_nor, a])?;
        let b_half = builder.nor("(A !| B) !| B", "", &[a_b_nor, b])?;
        let a_eq_half = builder.nor("(A !| B) !| =A", "", &[a_b_nor, a_eq])?;
        let b_eq_half = builder.nor("(A !| B) !| =B", "", &[a_b_nor, b_eq])?;
        let xor = builder.merge("A ^ B", "red", a_half, b_half)?;
        let xor_buffered = builder.merge("A =^ B", "blue", a_eq_half, b_eq_half)?;

        builder.show(&[a, b, xor, xor_buffered])?;
        Ok(Self {
            a,
            b,
            xor,
            xor_buffered,
        })
    }
}

#[cfg(test)]
mod test {
    use super::{Xor, XorParams};
    use crate::{
        circuit_builder::CircuitBuilder,
        components::test_util::{at, peak, run},
    };

    #[test]
    fn separate_pulses() {
        let mut builder = CircuitBuilder::default();
        let params = XorParams {
            pulse_a: 5.0,
            pulse_b: 5.0,
            delay: 8.0,
            ..Default::default()
        };
        let xor = Xor::new(&mut builder, &params).unwrap();
        let mut circuit = builder.build();
        run(&mut circuit, 30.0);

        assert_eq!(at(&circuit, xor.a, 12.0), 1.0);
        assert_eq!(at(&circuit, xor.b, 20.0), 1.0);
        assert!(at(&circuit, xor.xor, 9.5) < 0.1);
        assert!(peak(&circuit, xor.xor, 10.0, 17.0) > 0.7);
        assert!(peak(&circuit, xor.xor, 18.0, 25.0) > 0.7);
        assert!(peak(&circuit, xor.xor_buffered, 10.0, 25.0) > 0.5);
    }
}
