use std::fmt::{self, Debug};

use crate::{combinator::Combinator, timer::Timer};

/// Upper bound of a gate's accumulator.
pub const GATE_CEILING: f64 = 1000.0;

/// Discrete time index.
pub type Step = usize;

/// Handle to a node stored in a [crate::Circuit].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// `f(sim_time, last_value, dt) -> new_value`
pub type Transition = Box<dyn Fn(f64, f64, f64) -> f64>;

/// Exogenous node driven by a transition rule.
pub struct Input {
    transition: Transition,
}

impl Input {
    pub fn new<F>(transition: F) -> Self
    where
        F: Fn(f64, f64, f64) -> f64 + 'static,
    {
        Self {
            transition: Box::new(transition),
        }
    }

    pub fn next(&self, sim_time: f64, last: f64, dt: f64) -> f64 {
        (self.transition)(sim_time, last, dt)
    }
}

impl Debug for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Input").finish_non_exhaustive()
    }
}

/// Internal node combining its upstream nodes through a [Combinator].
#[derive(Clone, Debug)]
pub struct Gate {
    pub combinator: Combinator,
    pub timer: Timer,
    pub(crate) inputs: Vec<NodeId>,
    pub initial: f64,
}

impl Gate {
    pub fn new(combinator: Combinator, timer: Timer, inputs: &[NodeId]) -> Self {
        Self {
            combinator,
            timer,
            inputs: inputs.to_vec(),
            initial: 0.0,
        }
    }

    pub fn with_initial(mut self, initial: f64) -> Self {
        self.initial = initial;
        self
    }

    pub fn inputs(&self) -> &[NodeId] {
        &self.inputs
    }

    /// One explicit Euler step of production/decay, clamped to `[0, GATE_CEILING]`.
    /// `inputs` are the upstream values at the previous step. A NaN step reads as 0.
    pub fn next(&self, last: f64, inputs: &[f64], dt: f64, noise: f64) -> f64 {
        let response = self.combinator.response(inputs);
        let up = response * dt / self.timer.tau_emit;
        let down = last * dt / self.timer.tau_decay;
        let next = last + up - down + noise;
        if next.is_nan() {
            0.0
        } else {
            next.clamp(0.0, GATE_CEILING)
        }
    }
}

#[derive(Debug)]
pub(crate) enum NodeKind {
    Input(Input),
    Gate(Gate),
}

/// A time series participant of a circuit.
#[derive(Debug)]
pub struct Node {
    pub name: String,
    pub color: String,
    pub(crate) output: Vec<f64>,
    pub(crate) kind: NodeKind,
}

impl Node {
    pub(crate) fn new(name: String, color: String, first: f64, kind: NodeKind) -> Self {
        Self {
            name,
            color,
            output: vec![first],
            kind,
        }
    }

    /// Every value computed so far; index `t` is step `t`.
    pub fn output(&self) -> &[f64] {
        &self.output
    }

    pub fn as_gate(&self) -> Option<&Gate> {
        match &self.kind {
            NodeKind::Gate(gate) => Some(gate),
            NodeKind::Input(_) => None,
        }
    }
}
