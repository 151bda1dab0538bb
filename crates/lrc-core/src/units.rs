// lrc-core/src/units.rs

use uom::si::f64::{
    Capacitance as UomCapacitance, ElectricCurrent as UomElectricCurrent,
    ElectricPotential as UomElectricPotential, ElectricalResistance as UomElectricalResistance,
    Frequency as UomFrequency, Inductance as UomInductance, Time as UomTime,
};

// Public canonical unit types (SI, f64)
pub type Capacitance = UomCapacitance;
pub type Current = UomElectricCurrent;
pub type Frequency = UomFrequency;
pub type Inductance = UomInductance;
pub type Resistance = UomElectricalResistance;
pub type Time = UomTime;
pub type Voltage = UomElectricPotential;

#[inline]
pub fn henry(v: f64) -> Inductance {
    use uom::si::inductance::henry;
    Inductance::new::<henry>(v)
}

#[inline]
pub fn farad(v: f64) -> Capacitance {
    use uom::si::capacitance::farad;
    Capacitance::new::<farad>(v)
}

#[inline]
pub fn ohm(v: f64) -> Resistance {
    use uom::si::electrical_resistance::ohm;
    Resistance::new::<ohm>(v)
}

#[inline]
pub fn volt(v: f64) -> Voltage {
    use uom::si::electric_potential::volt;
    Voltage::new::<volt>(v)
}

#[inline]
pub fn amp(v: f64) -> Current {
    use uom::si::electric_current::ampere;
    Current::new::<ampere>(v)
}

#[inline]
pub fn hz(v: f64) -> Frequency {
    use uom::si::frequency::hertz;
    Frequency::new::<hertz>(v)
}

#[inline]
pub fn s(v: f64) -> Time {
    use uom::si::time::second;
    Time::new::<second>(v)
}

/// Natural frequency 1 / (2 pi sqrt(L C)) of an LC pair.
pub fn natural_frequency(l: Inductance, c: Capacitance) -> Frequency {
    use uom::si::capacitance::farad;
    use uom::si::inductance::henry;
    let lc = l.get::<henry>() * c.get::<farad>();
    hz(1.0 / (2.0 * std::f64::consts::PI * lc.sqrt()))
}

/// Boundary between under- and overdamping, 2 sqrt(L / C).
pub fn critical_resistance(l: Inductance, c: Capacitance) -> Resistance {
    use uom::si::capacitance::farad;
    use uom::si::inductance::henry;
    ohm(2.0 * (l.get::<henry>() / c.get::<farad>()).sqrt())
}
