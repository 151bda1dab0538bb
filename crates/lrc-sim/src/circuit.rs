//! Series LRC circuit driven by a voltage step.

use crate::error::{SimError, SimResult};
use crate::model::TransientModel;
use lrc_core::units::{Capacitance, Inductance, Resistance, Voltage};
use lrc_core::{Tolerances, ensure_finite, ensure_positive};
use nalgebra::Vector2;
use uom::si::capacitance::farad;
use uom::si::electric_potential::volt;
use uom::si::electrical_resistance::ohm;
use uom::si::inductance::henry;

/// Circuit state: `[current (A), dI/dt (A/s)]`.
pub type LrcState = Vector2<f64>;

/// Voltage source that is off before `onset` and holds `amplitude` after.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepSource {
    pub amplitude: f64,
    pub onset: f64,
}

impl Default for StepSource {
    fn default() -> Self {
        Self {
            amplitude: 1.0,
            onset: 0.0,
        }
    }
}

impl StepSource {
    pub fn new(amplitude: Voltage, onset: f64) -> Self {
        Self {
            amplitude: amplitude.get::<volt>(),
            onset,
        }
    }

    #[inline]
    pub fn voltage(&self, t: f64) -> f64 {
        if t >= self.onset { self.amplitude } else { 0.0 }
    }
}

/// Series inductor, resistor and capacitor with zero initial conditions.
///
/// Dynamics: `dI/dt = w`, `dw/dt = (V(t) - R w - I / C) / L`.
#[derive(Clone, Debug)]
pub struct SeriesLrc {
    inductance: f64,
    resistance: f64,
    capacitance: f64,
    source: StepSource,
    initial: LrcState,
}

impl SeriesLrc {
    /// Values in henry, ohm and farad.
    pub fn new(
        inductance: f64,
        resistance: f64,
        capacitance: f64,
        source: StepSource,
    ) -> SimResult<Self> {
        ensure_positive(inductance, "inductance")?;
        ensure_positive(capacitance, "capacitance")?;
        ensure_finite(resistance, "resistance")?;
        if resistance < 0.0 {
            return Err(SimError::NonPhysical {
                what: "resistance must be non-negative",
            });
        }
        ensure_finite(source.amplitude, "step amplitude")?;
        ensure_finite(source.onset, "step onset")?;

        Ok(Self {
            inductance,
            resistance,
            capacitance,
            source,
            initial: LrcState::zeros(),
        })
    }

    pub fn from_quantities(
        inductance: Inductance,
        resistance: Resistance,
        capacitance: Capacitance,
        source: StepSource,
    ) -> SimResult<Self> {
        Self::new(
            inductance.get::<henry>(),
            resistance.get::<ohm>(),
            capacitance.get::<farad>(),
            source,
        )
    }

    /// Start from a non-zero `[I, dI/dt]`.
    pub fn with_initial_state(mut self, initial: LrcState) -> Self {
        self.initial = initial;
        self
    }

    pub fn inductance(&self) -> f64 {
        self.inductance
    }

    pub fn resistance(&self) -> f64 {
        self.resistance
    }

    pub fn capacitance(&self) -> f64 {
        self.capacitance
    }

    pub fn source(&self) -> StepSource {
        self.source
    }

    /// Value `I` settles to once the step has been applied: `C * V0`.
    pub fn steady_state_current(&self) -> f64 {
        self.capacitance * self.source.amplitude
    }
}

impl TransientModel for SeriesLrc {
    type State = LrcState;

    fn initial_state(&self) -> LrcState {
        self.initial
    }

    fn rhs(&mut self, t: f64, x: &LrcState) -> SimResult<LrcState> {
        let (i, w) = (x[0], x[1]);
        let dw = (self.source.voltage(t) - self.resistance * w - i / self.capacitance)
            / self.inductance;
        Ok(LrcState::new(w, dw))
    }

    fn add(&self, a: &LrcState, b: &LrcState) -> LrcState {
        a + b
    }

    fn scale(&self, a: &LrcState, scale: f64) -> LrcState {
        a * scale
    }

    fn error_norm(&self, err: &LrcState, a: &LrcState, b: &LrcState, tol: Tolerances) -> f64 {
        let weights = a.abs().sup(&b.abs()) * tol.rel + LrcState::repeat(tol.abs);
        err.component_div(&weights).norm() / (err.len() as f64).sqrt()
    }
}
