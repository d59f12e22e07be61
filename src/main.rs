use std::{io, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use genelogic::{
    circuit_builder::CircuitBuilder,
    components::{
        and_tree::{ThreeWayAnd, ThreeWayAndParams},
        latch::{LatchParams, Signals, SrLatch},
        real_nor::{Mechanism, RealNor, RealNorParams},
        tautology::{Tautology, TautologyParams},
        xor::{Xor, XorParams},
        StepKind,
    },
    config::SimConfig,
    cutoff::Cutoff,
    noise::NoiseSource,
    presets::PresetTable,
    trace,
};

/// Simulates an analog genetic logic circuit and writes every displayed
/// node's trajectory to stdout as CSV.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to config TOML; defaults apply when it does not exist
    #[arg(long, default_value = "genelogic.toml")]
    config: PathBuf,

    /// Simulated horizon (overrides config)
    #[arg(long)]
    tmax: Option<f64>,

    /// Time step (overrides config)
    #[arg(long)]
    dt: Option<f64>,

    /// Noise standard deviation per gate step (overrides config)
    #[arg(long)]
    sigma: Option<f64>,

    /// Noise seed (overrides config)
    #[arg(long)]
    seed: Option<u64>,

    /// CSV table of named response curves
    #[arg(long, requires = "cutoff")]
    presets: Option<PathBuf>,

    /// Preset used for every gate's response curve
    #[arg(long, requires = "presets")]
    cutoff: Option<String>,

    #[command(subcommand)]
    circuit: CircuitCommand,
}

#[derive(Subcommand, Debug)]
enum CircuitCommand {
    /// (A & B) & C and (A & B) & =C
    And {
        #[arg(long)]
        start: Option<f64>,
        #[arg(long)]
        pulse_a: Option<f64>,
        #[arg(long)]
        pulse_b: Option<f64>,
        #[arg(long)]
        pulse_c: Option<f64>,
        #[arg(long)]
        delay_ab: Option<f64>,
        #[arg(long)]
        delay_ac: Option<f64>,
        #[arg(long, value_enum)]
        step: Option<StepKind>,
    },
    /// Cross-coupled NOR set/reset latch
    Latch {
        #[arg(long)]
        start: Option<f64>,
        #[arg(long)]
        pulse_a: Option<f64>,
        #[arg(long)]
        pulse_b: Option<f64>,
        #[arg(long)]
        delay_a: Option<f64>,
        #[arg(long)]
        delay_b: Option<f64>,
        #[arg(long, value_enum)]
        step: Option<StepKind>,
        #[arg(long, value_enum)]
        signals: Option<Signals>,
    },
    /// NOR-based XOR
    Xor {
        #[arg(long)]
        start: Option<f64>,
        #[arg(long)]
        pulse_a: Option<f64>,
        #[arg(long)]
        pulse_b: Option<f64>,
        #[arg(long)]
        delay: Option<f64>,
        #[arg(long, value_enum)]
        step: Option<StepKind>,
    },
    /// A & !A and A | !A
    Tautology {
        #[arg(long)]
        start: Option<f64>,
        #[arg(long)]
        pulse: Option<f64>,
        #[arg(long, value_enum)]
        step: Option<StepKind>,
    },
    /// Single NOR with measured kinetics
    RealNor {
        #[arg(long)]
        start: Option<f64>,
        #[arg(long)]
        pulse_a: Option<f64>,
        #[arg(long)]
        pulse_b: Option<f64>,
        #[arg(long)]
        delay_ab: Option<f64>,
        #[arg(long, value_enum)]
        step: Option<StepKind>,
        #[arg(long, value_enum)]
        mechanism: Option<Mechanism>,
    },
}

fn set<T>(field: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *field = value;
    }
}

impl CircuitCommand {
    fn build(self, builder: &mut CircuitBuilder) -> genelogic::Result<()> {
        match self {
            CircuitCommand::And {
                start,
                pulse_a,
                pulse_b,
                pulse_c,
                delay_ab,
                delay_ac,
                step,
            } => {
                let mut params = ThreeWayAndParams::default();
                set(&mut params.start, start);
                set(&mut params.pulse_a, pulse_a);
                set(&mut params.pulse_b, pulse_b);
                set(&mut params.pulse_c, pulse_c);
                set(&mut params.delay_ab, delay_ab);
                set(&mut params.delay_ac, delay_ac);
                set(&mut params.step, step);
                ThreeWayAnd::new(builder, &params)?;
            }
            CircuitCommand::Latch {
                start,
                pulse_a,
                pulse_b,
                delay_a,
                delay_b,
                step,
                signals,
            } => {
                let mut params = LatchParams::default();
                set(&mut params.start, start);
                set(&mut params.pulse_a, pulse_a);
                set(&mut params.pulse_b, pulse_b);
                set(&mut params.delay_a, delay_a);
                set(&mut params.delay_b, delay_b);
                set(&mut params.step, step);
                set(&mut params.signals, signals);
                SrLatch::new(builder, &params)?;
            }
            CircuitCommand::Xor {
                start,
                pulse_a,
                pulse_b,
                delay,
                step,
            } => {
                let mut params = XorParams::default();
                set(&mut params.start, start);
                set(&mut params.pulse_a, pulse_a);
                set(&mut params.pulse_b, pulse_b);
                set(&mut params.delay, delay);
                set(&mut params.step, step);
                Xor::new(builder, &params)?;
            }
            CircuitCommand::Tautology { start, pulse, step } => {
                let mut params = TautologyParams::default();
                set(&mut params.start, start);
                set(&mut params.pulse, pulse);
                set(&mut params.step, step);
                Tautology::new(builder, &params)?;
            }
            CircuitCommand::RealNor {
                start,
                pulse_a,
                pulse_b,
                delay_ab,
                step,
                mechanism,
            } => {
                let mut params = RealNorParams::default();
                set(&mut params.start, start);
                set(&mut params.pulse_a, pulse_a);
                set(&mut params.pulse_b, pulse_b);
                set(&mut params.delay_ab, delay_ab);
                set(&mut params.step, step);
                set(&mut params.mechanism, mechanism);
                RealNor::new(builder, &params)?;
            }
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays clean for CSV
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config = SimConfig::load(&args.config)
        .with_context(|| format!("loading config {}", args.config.display()))?;
    set(&mut config.tmax, args.tmax);
    set(&mut config.dt, args.dt);
    set(&mut config.sigma, args.sigma);
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.validate().context("invalid simulation settings")?;

    let cutoff = match (&args.presets, &args.cutoff) {
        (Some(path), Some(name)) => {
            let presets = PresetTable::load(path).context("loading presets")?;
            Cutoff::from_name(&presets, name)?
        }
        _ => Cutoff::default(),
    };

    let mut builder = CircuitBuilder::new(config.dt).with_cutoff(cutoff);
    args.circuit
        .build(&mut builder)
        .context("building circuit")?;
    let mut circuit = builder.build();

    let mut noise = match config.seed {
        Some(seed) => NoiseSource::seeded(seed),
        None => NoiseSource::from_entropy(),
    };
    let steps = circuit.steps_for(config.tmax)?;
    info!(
        nodes = circuit.num_nodes(),
        steps,
        dt = config.dt,
        sigma = config.sigma,
        "simulating"
    );
    circuit.run(steps, config.sigma, &mut noise)?;

    trace::write_csv(&circuit, steps, io::stdout().lock()).context("writing trace")?;
    Ok(())
}
