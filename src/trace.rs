use std::io::{self, Write};

use crate::Circuit;

/// Writes the shown nodes of a run as CSV: a `time` column followed by one
/// column per node, one row per step.
pub fn write_csv<W: Write>(circuit: &Circuit, steps: usize, mut out: W) -> io::Result<()> {
    write!(out, "time")?;
    for (_, node) in circuit.shown() {
        write!(out, ",\"{}\"", node.name.replace('"', "\"\""))?;
    }
    writeln!(out)?;

    for (t, time) in circuit.times(steps).enumerate() {
        write!(out, "{time}")?;
        for (_, node) in circuit.shown() {
            match node.output().get(t) {
                Some(value) => write!(out, ",{value}")?,
                None => write!(out, ",")?,
            }
        }
        writeln!(out)?;
    }
    out.flush()
}

#[cfg(test)]
mod test {
    use super::write_csv;
    use crate::{circuit_builder::CircuitBuilder, noise::NoiseSource, stimulus::constant};

    #[test]
    fn one_row_per_step() {
        let mut builder = CircuitBuilder::new(0.5);
        let a = builder.input("A", "grey", constant(1.0));
        let not = builder.not("\"not\" A", "red", &[a]).unwrap();
        builder.show(&[a, not]).unwrap();
        let mut circuit = builder.build();
        circuit.run(3, 0.0, &mut NoiseSource::seeded(0)).unwrap();

        let mut out = Vec::new();
        write_csv(&circuit, 3, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "time,\"A\",\"\"\"not\"\" A\"");
        assert_eq!(lines[1], "0,1,0");
        assert!(lines[3].starts_with("1,1,"));
    }
}
