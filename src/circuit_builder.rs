use crate::{
    combinator::Combinator,
    cutoff::Cutoff,
    node::{Gate, Input, NodeId},
    timer::Timer,
    Circuit, Result,
};

/// Wires a [Circuit] with a shared default [Cutoff] and [Timer], so that a
/// circuit description can be re-run with a different response curve.
#[derive(Debug)]
pub struct CircuitBuilder {
    circuit: Circuit,
    cutoff: Cutoff,
    timer: Timer,
}

impl Default for CircuitBuilder {
    fn default() -> Self {
        Self::new(crate::circuit::DT)
    }
}

macro_rules! gate_fn_gen {
    ( $gate_lowercase:ident, $gate_uppercase:ident ) => {
        pub fn $gate_lowercase(
            &mut self,
            name: &str,
            color: &str,
            inputs: &[NodeId],
        ) -> Result<NodeId> {
            let combinator = Combinator::$gate_uppercase(self.cutoff);
            self.gate(name, color, combinator, inputs)
        }
    };
}

impl CircuitBuilder {
    pub fn new(dt: f64) -> Self {
        Self {
            circuit: Circuit::new(dt),
            cutoff: Cutoff::default(),
            timer: Timer::default(),
        }
    }

    pub fn with_cutoff(mut self, cutoff: Cutoff) -> Self {
        self.cutoff = cutoff;
        self
    }

    pub fn with_timer(mut self, timer: Timer) -> Self {
        self.timer = timer;
        self
    }

    pub fn input<F>(&mut self, name: &str, color: &str, transition: F) -> NodeId
    where
        F: Fn(f64, f64, f64) -> f64 + 'static,
    {
        self.circuit.add_input(name, color, Input::new(transition))
    }

    pub fn gate(
        &mut self,
        name: &str,
        color: &str,
        combinator: Combinator,
        inputs: &[NodeId],
    ) -> Result<NodeId> {
        let gate = Gate::new(combinator, self.timer, inputs);
        self.circuit.add_gate(name, color, gate)
    }

    /// Adds a fully specified gate, for a custom timer or a seeded initial value.
    pub fn add_gate(&mut self, name: &str, color: &str, gate: Gate) -> Result<NodeId> {
        self.circuit.add_gate(name, color, gate)
    }

    pub fn gate_spec(&self, combinator: fn(Cutoff) -> Combinator, inputs: &[NodeId]) -> Gate {
        Gate::new(combinator(self.cutoff), self.timer, inputs)
    }

    gate_fn_gen!(not, Not);
    gate_fn_gen!(same, Same);
    gate_fn_gen!(and, And);
    gate_fn_gen!(or, Or);
    gate_fn_gen!(nand, Nand);
    gate_fn_gen!(nor, Nor);

    pub fn merge(&mut self, name: &str, color: &str, a: NodeId, b: NodeId) -> Result<NodeId> {
        self.gate(name, color, Combinator::Merge, &[a, b])
    }

    pub fn push_input(&mut self, gate: NodeId, upstream: NodeId) -> Result<()> {
        self.circuit.push_input(gate, upstream)
    }

    pub fn show(&mut self, nodes: &[NodeId]) -> Result<()> {
        for node_id in nodes {
            self.circuit.show(*node_id)?;
        }
        Ok(())
    }

    pub fn build(self) -> Circuit {
        self.circuit
    }
}

#[cfg(test)]
mod test {
    use super::CircuitBuilder;
    use crate::{combinator::Combinator, cutoff::Cutoff, stimulus::constant, timer::Timer};

    #[test]
    fn gates_share_builder_defaults() {
        let cutoff = Cutoff::new(2.0, 0.1, 0.5, 3.0);
        let timer = Timer::new(0.5, 2.0);
        let mut builder = CircuitBuilder::default()
            .with_cutoff(cutoff)
            .with_timer(timer);
        let a = builder.input("A", "grey", constant(1.0));
        let b = builder.input("B", "grey", constant(0.0));
        let and = builder.and("A & B", "red", &[a, b]).unwrap();
        let merged = builder.merge("A + B", "blue", a, b).unwrap();
        builder.show(&[a, b, and]).unwrap();
        let circuit = builder.build();

        let gate = circuit.node(and).unwrap().as_gate().unwrap();
        assert_eq!(gate.combinator, Combinator::And(cutoff));
        assert_eq!(gate.timer, timer);
        assert_eq!(gate.inputs(), &[a, b]);
        let merge = circuit.node(merged).unwrap().as_gate().unwrap();
        assert_eq!(merge.combinator, Combinator::Merge);

        let names: Vec<&str> = circuit.shown().map(|(_, node)| node.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "A & B"]);
    }

    #[test]
    fn seeded_gate() {
        let mut builder = CircuitBuilder::default();
        let a = builder.input("A", "grey", constant(0.0));
        let gate = builder.gate_spec(Combinator::Same, &[a]).with_initial(1.0);
        let p = builder.add_gate("P", "cyan", gate).unwrap();
        let circuit = builder.build();
        assert_eq!(circuit.output(p).unwrap(), &[1.0]);
    }
}
