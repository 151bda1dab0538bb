//! Scenario validation logic.

use crate::schema::{AmDef, MethodDef, ResonanceDef, SCENARIO_VERSION, Scenario, StepDef, SweepDef};
use lrc_core::Grid;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

fn invalid(field: &str, value: impl ToString, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn positive(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, value, "must be finite and strictly positive"))
    }
}

fn finite(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, value, "must be finite"))
    }
}

fn resistances(field: &str, values: &[f64]) -> Result<(), ValidationError> {
    if values.is_empty() {
        return Err(invalid(field, "[]", "at least one resistance is required"));
    }
    for r in values {
        if !r.is_finite() || *r < 0.0 {
            return Err(invalid(field, r, "resistances must be finite and non-negative"));
        }
    }
    Ok(())
}

fn frequency_grid(field: &str, grid: &Grid) -> Result<(), ValidationError> {
    positive(&format!("{field}.start"), grid.start)?;
    grid.validate()
        .map_err(|e| invalid(field, grid, &e.to_string()))
}

const MIN_DPI: u32 = 20;
const MAX_DPI: u32 = 1200;

pub fn validate_scenario(scenario: &Scenario) -> Result<(), ValidationError> {
    if scenario.version > SCENARIO_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: scenario.version,
        });
    }

    validate_step(&scenario.step)?;
    validate_sweep(&scenario.sweep)?;
    validate_am(&scenario.am)?;
    validate_resonance(&scenario.resonance)?;

    let out = &scenario.output;
    if !(MIN_DPI..=MAX_DPI).contains(&out.dpi) {
        return Err(invalid(
            "output.dpi",
            out.dpi,
            "must be between 20 and 1200",
        ));
    }
    Ok(())
}

fn validate_step(step: &StepDef) -> Result<(), ValidationError> {
    positive("step.inductance_h", step.inductance_h)?;
    positive("step.capacitance_f", step.capacitance_f)?;
    resistances("step.resistances_ohm", &step.resistances_ohm)?;
    finite("step.step_voltage_v", step.step_voltage_v)?;
    finite("step.step_onset_s", step.step_onset_s)?;
    finite("step.t_start_s", step.t_start_s)?;
    finite("step.t_end_s", step.t_end_s)?;
    if step.t_end_s <= step.t_start_s {
        return Err(invalid("step.t_end_s", step.t_end_s, "must be after t_start_s"));
    }
    if step.samples < 2 {
        return Err(invalid("step.samples", step.samples, "at least 2 samples"));
    }
    if let MethodDef::Rk45 { rtol, atol } = step.method {
        positive("step.method.rtol", rtol)?;
        if !atol.is_finite() || atol < 0.0 {
            return Err(invalid("step.method.atol", atol, "must be finite and non-negative"));
        }
    }
    Ok(())
}

fn validate_sweep(sweep: &SweepDef) -> Result<(), ValidationError> {
    positive("sweep.inductance_h", sweep.inductance_h)?;
    positive("sweep.capacitance_f", sweep.capacitance_f)?;
    resistances("sweep.resistances_ohm", &sweep.resistances_ohm)?;
    frequency_grid("sweep.frequency", &sweep.frequency)
}

fn validate_am(am: &AmDef) -> Result<(), ValidationError> {
    finite("am.t_start_s", am.t_start_s)?;
    finite("am.t_end_s", am.t_end_s)?;
    if am.t_end_s <= am.t_start_s {
        return Err(invalid("am.t_end_s", am.t_end_s, "must be after t_start_s"));
    }
    if am.samples < 2 {
        return Err(invalid("am.samples", am.samples, "at least 2 samples"));
    }
    positive("am.message_hz", am.message_hz)?;
    positive("am.carrier_hz", am.carrier_hz)?;
    finite("am.modulation_index", am.modulation_index)?;

    let fs = (am.samples - 1) as f64 / (am.t_end_s - am.t_start_s);
    if am.carrier_hz >= fs / 2.0 {
        return Err(invalid(
            "am.carrier_hz",
            am.carrier_hz,
            "carrier must be below the Nyquist frequency of the time grid",
        ));
    }
    if am.message_hz >= am.carrier_hz {
        return Err(invalid(
            "am.message_hz",
            am.message_hz,
            "message must be slower than the carrier",
        ));
    }
    Ok(())
}

fn validate_resonance(res: &ResonanceDef) -> Result<(), ValidationError> {
    positive("resonance.inductance_h", res.inductance_h)?;
    if !res.resistance_ohm.is_finite() || res.resistance_ohm < 0.0 {
        return Err(invalid(
            "resonance.resistance_ohm",
            res.resistance_ohm,
            "must be finite and non-negative",
        ));
    }
    positive("resonance.capacitance_min_f", res.capacitance_min_f)?;
    positive("resonance.capacitance_max_f", res.capacitance_max_f)?;
    positive("resonance.capacitance_step_f", res.capacitance_step_f)?;
    if res.capacitance_max_f <= res.capacitance_min_f {
        return Err(invalid(
            "resonance.capacitance_max_f",
            res.capacitance_max_f,
            "must be greater than capacitance_min_f",
        ));
    }
    let init = res.capacitance_init_f;
    if !(res.capacitance_min_f..=res.capacitance_max_f).contains(&init) {
        return Err(invalid(
            "resonance.capacitance_init_f",
            init,
            "must lie inside the capacitance range",
        ));
    }
    positive("resonance.impedance_max_ohm", res.impedance_max_ohm)?;
    frequency_grid("resonance.frequency", &res.frequency)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lrc_core::GridSpacing;

    #[test]
    fn default_scenario_is_valid() {
        assert_eq!(validate_scenario(&Scenario::default()), Ok(()));
    }

    #[test]
    fn dpi_outside_range_rejected() {
        let mut s = Scenario::default();
        s.output.dpi = 0;
        let err = validate_scenario(&s).unwrap_err();
        assert!(err.to_string().contains("output.dpi"));
        s.output.dpi = 5000;
        assert!(validate_scenario(&s).is_err());
        s.output.dpi = 72;
        assert_eq!(validate_scenario(&s), Ok(()));
    }

    #[test]
    fn zero_inductance_rejected() {
        let mut s = Scenario::default();
        s.step.inductance_h = 0.0;
        let err = validate_scenario(&s).unwrap_err();
        assert!(err.to_string().contains("step.inductance_h"));
    }

    #[test]
    fn empty_resistances_rejected() {
        let mut s = Scenario::default();
        s.sweep.resistances_ohm.clear();
        assert!(validate_scenario(&s).is_err());
    }

    #[test]
    fn zero_frequency_start_rejected() {
        let mut s = Scenario::default();
        s.sweep.frequency = Grid {
            start: 0.0,
            end: 10.0,
            points: 100,
            spacing: GridSpacing::Linear,
        };
        let err = validate_scenario(&s).unwrap_err();
        assert!(err.to_string().contains("sweep.frequency.start"));
    }

    #[test]
    fn carrier_above_nyquist_rejected() {
        let mut s = Scenario::default();
        s.am.samples = 100;
        assert!(validate_scenario(&s).is_err());
    }

    #[test]
    fn initial_capacitance_outside_range_rejected() {
        let mut s = Scenario::default();
        s.resonance.capacitance_init_f = 12.0;
        assert!(validate_scenario(&s).is_err());
    }

    #[test]
    fn future_version_rejected() {
        let s = Scenario {
            version: SCENARIO_VERSION + 1,
            ..Scenario::default()
        };
        assert_eq!(
            validate_scenario(&s),
            Err(ValidationError::UnsupportedVersion {
                version: SCENARIO_VERSION + 1
            })
        );
    }
}
