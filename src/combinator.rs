use crate::{cutoff::Cutoff, presets::PresetTable, Result};

/// Logic behavior of a gate.
///
/// Every variant except [Combinator::Merge] maps its inputs to an activation
/// and passes it through its own [Cutoff]. The activations are framed so that
/// an activation near 0 means "output high".
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Combinator {
    Not(Cutoff),
    Same(Cutoff),
    And(Cutoff),
    Or(Cutoff),
    Nand(Cutoff),
    Nor(Cutoff),
    /// Linear sum of two branches, bypassing any cutoff.
    Merge,
}

macro_rules! default_fn_gen {
    ( $lowercase:ident, $uppercase:ident ) => {
        pub fn $lowercase() -> Self {
            Self::$uppercase(Cutoff::default())
        }
    };
}

impl Combinator {
    default_fn_gen!(not, Not);
    default_fn_gen!(same, Same);
    default_fn_gen!(and, And);
    default_fn_gen!(or, Or);
    default_fn_gen!(nand, Nand);
    default_fn_gen!(nor, Nor);

    /// Builds a cutoff-backed combinator from a named preset, e.g.
    /// `Combinator::from_name(Combinator::Nor, &presets, "PhlF")`.
    pub fn from_name(
        variant: fn(Cutoff) -> Self,
        presets: &PresetTable,
        key: &str,
    ) -> Result<Self> {
        Ok(variant(Cutoff::from_name(presets, key)?))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Not(_) => "Not",
            Self::Same(_) => "Same",
            Self::And(_) => "And",
            Self::Or(_) => "Or",
            Self::Nand(_) => "Nand",
            Self::Nor(_) => "Nor",
            Self::Merge => "Merge",
        }
    }

    pub fn arity(&self) -> usize {
        match self {
            Self::Not(_) | Self::Same(_) => 1,
            Self::And(_) | Self::Or(_) | Self::Nand(_) | Self::Nor(_) | Self::Merge => 2,
        }
    }

    pub fn cutoff(&self) -> Option<&Cutoff> {
        match self {
            Self::Not(cutoff)
            | Self::Same(cutoff)
            | Self::And(cutoff)
            | Self::Or(cutoff)
            | Self::Nand(cutoff)
            | Self::Nor(cutoff) => Some(cutoff),
            Self::Merge => None,
        }
    }

    /// # Panics
    /// On [Combinator::Merge], and when `inputs.len()` differs from [Combinator::arity].
    pub fn activation(&self, inputs: &[f64]) -> f64 {
        match (self, inputs) {
            (Self::Not(_), [x]) => *x,
            (Self::Same(_), [x]) => 1.0 - x,
            (Self::And(_), [x, y]) => 1.0 - x * y,
            (Self::Or(_), [x, y]) => (1.0 - x) * (1.0 - y),
            (Self::Nand(_), [x, y]) => x * y,
            (Self::Nor(_), [x, y]) => 1.0 - (1.0 - x) * (1.0 - y),
            (Self::Merge, _) => panic!("Merge has no activation"),
            _ => self.wrong_arity(inputs.len()),
        }
    }

    /// # Panics
    /// When `inputs.len()` differs from [Combinator::arity].
    pub fn response(&self, inputs: &[f64]) -> f64 {
        match (self, inputs) {
            (Self::Merge, [x, y]) => x + y,
            (Self::Merge, _) => self.wrong_arity(inputs.len()),
            (_, _) => match self.cutoff() {
                Some(cutoff) => cutoff.steady_state_clamp(self.activation(inputs)),
                None => unreachable!(),
            },
        }
    }

    fn wrong_arity(&self, got: usize) -> ! {
        panic!("{} takes {} inputs, got {got}", self.name(), self.arity())
    }
}
