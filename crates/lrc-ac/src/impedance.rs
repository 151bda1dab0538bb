//! Series impedance evaluation.

use crate::error::{AcError, AcResult};
use lrc_core::units::{Capacitance, Frequency, Inductance, Resistance, hz};
use lrc_core::{LrcError, ensure_positive};
use num_complex::Complex64;
use std::f64::consts::PI;
use uom::si::capacitance::farad;
use uom::si::electrical_resistance::ohm;
use uom::si::inductance::henry;

/// Validated circuit values in henry, ohm and farad.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesLrcParams {
    inductance: f64,
    resistance: f64,
    capacitance: f64,
}

impl SeriesLrcParams {
    pub fn new(inductance: f64, resistance: f64, capacitance: f64) -> AcResult<Self> {
        ensure_positive(inductance, "inductance").map_err(non_physical)?;
        ensure_positive(capacitance, "capacitance").map_err(non_physical)?;
        if !resistance.is_finite() || resistance < 0.0 {
            return Err(AcError::NonPhysical {
                what: "resistance",
                value: resistance,
            });
        }
        Ok(Self {
            inductance,
            resistance,
            capacitance,
        })
    }

    pub fn from_quantities(
        inductance: Inductance,
        resistance: Resistance,
        capacitance: Capacitance,
    ) -> AcResult<Self> {
        Self::new(
            inductance.get::<henry>(),
            resistance.get::<ohm>(),
            capacitance.get::<farad>(),
        )
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

    /// Impedance at `f` hertz. `f` must be strictly positive.
    pub fn impedance(&self, f: f64) -> AcResult<Complex64> {
        if !f.is_finite() || f <= 0.0 {
            return Err(AcError::InvalidFrequency { value: f });
        }
        let omega = 2.0 * PI * f;
        let z_l = Complex64::new(0.0, omega * self.inductance);
        let z_c = Complex64::new(0.0, omega * self.capacitance).inv();
        Ok(Complex64::new(self.resistance, 0.0) + z_l + z_c)
    }

    pub fn resonant_frequency(&self) -> f64 {
        1.0 / (2.0 * PI * (self.inductance * self.capacitance).sqrt())
    }

    pub fn resonant_frequency_quantity(&self) -> Frequency {
        hz(self.resonant_frequency())
    }
}

fn non_physical(e: LrcError) -> AcError {
    match e {
        LrcError::NonPositive { what, value } | LrcError::NonFinite { what, value } => {
            AcError::NonPhysical { what, value }
        }
        other => AcError::Core(other),
    }
}

/// `R + j 2 pi f L + 1 / (j 2 pi f C)`.
pub fn series_impedance(f: f64, inductance: f64, resistance: f64, capacitance: f64) -> AcResult<Complex64> {
    SeriesLrcParams::new(inductance, resistance, capacitance)?.impedance(f)
}

pub fn impedance_magnitude(f: f64, inductance: f64, resistance: f64, capacitance: f64) -> AcResult<f64> {
    Ok(series_impedance(f, inductance, resistance, capacitance)?.norm())
}

/// `|Z(f)|` for every frequency, in grid order.
pub fn frequency_response(
    inductance: f64,
    resistance: f64,
    capacitance: f64,
    freqs: &[f64],
) -> AcResult<Vec<f64>> {
    let params = SeriesLrcParams::new(inductance, resistance, capacitance)?;
    freqs
        .iter()
        .map(|&f| params.impedance(f).map(|z| z.norm()))
        .collect()
}

/// `1 / (2 pi sqrt(L C))`.
pub fn resonant_frequency(inductance: f64, capacitance: f64) -> AcResult<f64> {
    ensure_positive(inductance, "inductance").map_err(non_physical)?;
    ensure_positive(capacitance, "capacitance").map_err(non_physical)?;
    Ok(1.0 / (2.0 * PI * (inductance * capacitance).sqrt()))
}
