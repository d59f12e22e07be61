//! Transition rules for [crate::node::Input]s.

/// Idealized pulse: 1 strictly inside `(start + delay, stop + delay)`, else 0.
pub fn heaviside(start: f64, stop: f64, delay: f64) -> impl Fn(f64, f64, f64) -> f64 {
    move |t, _last, _dt| {
        if start + delay < t && t < stop + delay {
            1.0
        } else {
            0.0
        }
    }
}

/// Smoothed pulse with the same production/decay kinetics as a gate.
pub fn expstep(
    start: f64,
    stop: f64,
    tau_emit: f64,
    tau_decay: f64,
    delay: f64,
) -> impl Fn(f64, f64, f64) -> f64 {
    move |t, last, dt| {
        let on = start + delay <= t && t <= stop + delay;
        let up = if on { dt / tau_emit } else { 0.0 };
        let down = last * dt / tau_decay;
        last + up - down
    }
}

pub fn constant(level: f64) -> impl Fn(f64, f64, f64) -> f64 {
    move |_t, _last, _dt| level
}
