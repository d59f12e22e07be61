use tracing::{debug, warn};

use crate::{
    node::{Gate, Input, Node, NodeId, NodeKind, Step},
    noise::NoiseSource,
    error::positive,
    Error, Result,
};

/// Time step shared by every node of a circuit unless configured otherwise.
pub const DT: f64 = 0.01;

/// Arena of nodes advanced on a shared clock.
///
/// Gates only ever read their upstream nodes one step back, which is what
/// lets two gates reference each other: a cycle partner is asked for an index
/// that is already computed or computable without re-entering the caller.
#[derive(Debug)]
pub struct Circuit {
    dt: f64,
    nodes: Vec<Node>,
    shown: Vec<NodeId>,
}

impl Default for Circuit {
    fn default() -> Self {
        Self::new(DT)
    }
}

impl Circuit {
    pub fn new(dt: f64) -> Self {
        Self {
            dt,
            nodes: Vec::new(),
            shown: Vec::new(),
        }
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    fn push_node(&mut self, node: Node) -> NodeId {
        let node_id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        node_id
    }

    pub fn add_input(
        &mut self,
        name: impl Into<String>,
        color: impl Into<String>,
        input: Input,
    ) -> NodeId {
        let first = input.next(0.0, 0.0, self.dt);
        self.push_node(Node::new(
            name.into(),
            color.into(),
            first,
            NodeKind::Input(input),
        ))
    }

    pub fn add_gate(
        &mut self,
        name: impl Into<String>,
        color: impl Into<String>,
        gate: Gate,
    ) -> Result<NodeId> {
        for input in gate.inputs() {
            self.node(*input)?;
        }
        let first = gate.initial;
        Ok(self.push_node(Node::new(
            name.into(),
            color.into(),
            first,
            NodeKind::Gate(gate),
        )))
    }

    /// Appends `upstream` to the inputs of `gate` after construction, which is
    /// how feedback loops are closed.
    pub fn push_input(&mut self, gate: NodeId, upstream: NodeId) -> Result<()> {
        self.node(upstream)?;
        let node = self
            .nodes
            .get_mut(gate.index())
            .ok_or(Error::UnknownNode(gate))?;
        match &mut node.kind {
            NodeKind::Gate(gate) => {
                gate.inputs.push(upstream);
                Ok(())
            }
            NodeKind::Input(_) => Err(Error::NotAGate(node.name.clone())),
        }
    }

    /// Adds a node to the list visited by [Circuit::run] and presented
    /// afterwards, in insertion order.
    pub fn show(&mut self, node_id: NodeId) -> Result<()> {
        self.node(node_id)?;
        self.shown.push(node_id);
        Ok(())
    }

    pub fn node(&self, node_id: NodeId) -> Result<&Node> {
        self.nodes
            .get(node_id.index())
            .ok_or(Error::UnknownNode(node_id))
    }

    pub fn output(&self, node_id: NodeId) -> Result<&[f64]> {
        Ok(self.node(node_id)?.output())
    }

    pub fn shown(&self) -> impl Iterator<Item = (NodeId, &Node)> + '_ {
        self.shown
            .iter()
            .map(|node_id| (*node_id, &self.nodes[node_id.index()]))
    }

    /// Checks the time step, every gate's time constants, and that every gate
    /// has as many inputs as its combinator takes.
    pub fn validate(&self) -> Result<()> {
        positive("dt", self.dt)?;
        for node in self.nodes.iter() {
            if let NodeKind::Gate(gate) = &node.kind {
                if let Err(err) = gate.timer.validate() {
                    warn!(node = %node.name, %err, "gate has invalid time constants");
                    return Err(err);
                }
                let expected = gate.combinator.arity();
                let got = gate.inputs.len();
                if expected != got {
                    warn!(node = %node.name, expected, got, "gate has wrong number of inputs");
                    return Err(Error::Arity {
                        node: node.name.clone(),
                        combinator: gate.combinator.name(),
                        expected,
                        got,
                    });
                }
            }
        }
        debug!(nodes = self.nodes.len(), "circuit validated");
        Ok(())
    }

    /// Number of steps covering `tmax` units of simulated time.
    pub fn steps_for(&self, tmax: f64) -> Result<usize> {
        let tmax = positive("tmax", tmax)?;
        let dt = positive("dt", self.dt)?;
        Ok((tmax / dt).floor() as usize)
    }

    pub fn times(&self, steps: usize) -> impl Iterator<Item = f64> {
        let dt = self.dt;
        (0..steps).map(move |t| t as f64 * dt)
    }

    /// Value of `node_id` at step `t`, computing any missing history first.
    /// The whole graph is checked with [Circuit::validate] beforehand.
    pub fn value_at(
        &mut self,
        node_id: NodeId,
        t: Step,
        sigma: f64,
        noise: &mut NoiseSource,
    ) -> Result<f64> {
        self.node(node_id)?;
        self.validate()?;
        Ok(self.extend(node_id, t, sigma, noise))
    }

    fn extend(&mut self, node_id: NodeId, t: Step, sigma: f64, noise: &mut NoiseSource) -> f64 {
        let dt = self.dt;
        loop {
            let node = &self.nodes[node_id.index()];
            if let Some(value) = node.output.get(t) {
                return *value;
            }
            let t2 = node.output.len();
            let last = node.output[t2 - 1];
            let upstream = match &node.kind {
                NodeKind::Gate(gate) => gate.inputs.clone(),
                NodeKind::Input(_) => Vec::new(),
            };
            let values: Vec<f64> = upstream
                .into_iter()
                .map(|input| self.extend(input, t2 - 1, sigma, noise))
                .collect();
            let node = &mut self.nodes[node_id.index()];
            let next = match &node.kind {
                NodeKind::Input(input) => input.next(t2 as f64 * dt, last, dt),
                NodeKind::Gate(gate) => gate.next(last, &values, dt, noise.sample() * sigma),
            };
            node.output.push(next);
        }
    }

    /// Advances every shown node through `steps` steps, replaying `noise` from
    /// its start.
    pub fn run(&mut self, steps: usize, sigma: f64, noise: &mut NoiseSource) -> Result<()> {
        self.validate()?;
        noise.reset();
        debug!(steps, sigma, shown = self.shown.len(), "running circuit");
        let shown = self.shown.clone();
        for t in 0..steps {
            for node_id in shown.iter() {
                self.extend(*node_id, t, sigma, noise);
            }
        }
        debug!(drawn = noise.cursor(), "circuit run finished");
        Ok(())
    }
}
