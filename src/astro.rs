//! Low-precision astronomical primitives for the lunisolar and solar-Hijri
//! calendars.
//!
//! Formulas follow Meeus, *Astronomical Algorithms*: chapter 25 for the
//! apparent solar longitude and chapter 49 for the true new moon. Moments are
//! Julian Ephemeris Days (JDE, dynamical time) held in `f64`; they only turn
//! into calendar days through [`civil_day`], the single rounding rule shared by
//! every converter.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::jdn::Jdn;

/// JDE of the J2000.0 epoch.
pub const J2000: f64 = 2_451_545.0;
/// Mean length of a synodic month in days.
pub const MEAN_SYNODIC_MONTH: f64 = 29.530_588_861;
/// Mean length of a tropical year in days.
pub const MEAN_TROPICAL_YEAR: f64 = 365.2422;
/// JDE of the mean new moon of lunation 0 (2000-01-06).
const LUNATION_ZERO: f64 = 2_451_550.097_66;
/// A solar-longitude refinement stops once the correction drops below this
/// many days (about 0.09 s).
const SOLAR_TERM_TOLERANCE: f64 = 1e-6;

/// A fixed offset east of UTC at which calendar days are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UtcOffset {
    minutes: i32,
}

impl UtcOffset {
    pub const UTC: Self = Self::from_minutes(0);

    /// For Beijing time (UTC+8) `minutes` is +480.
    pub const fn from_minutes(minutes: i32) -> Self {
        Self { minutes }
    }

    pub const fn minutes(self) -> i32 {
        self.minutes
    }

    /// The offset as a fraction of a day.
    pub fn days(self) -> f64 {
        f64::from(self.minutes) / 1440.0
    }
}

fn sin_deg(degrees: f64) -> f64 {
    (degrees * PI / 180.0).sin()
}

/// Julian centuries of dynamical time since J2000.0.
pub fn julian_centuries(jde: f64) -> f64 {
    (jde - J2000) / 36_525.0
}

/// Estimated TT - UT in days, from the Morrison & Stephenson long-term
/// parabola.
pub fn delta_t(jde: f64) -> f64 {
    let year = (jde - 2_451_544.5) / 365.2425 + 2000.0;
    let u = (year - 1820.0) / 100.0;
    (-20.0 + 32.0 * u * u) / 86_400.0
}

/// The civil day containing a moment, for a clock running `zone` ahead of
/// UTC. This is the only place where a moment becomes a calendar day: the
/// local Julian Date is rounded half up, i.e. the day starts at local midnight.
pub fn civil_day(jde: f64, zone: UtcOffset) -> Jdn {
    Jdn::new((jde - delta_t(jde) + zone.days() + 0.5).floor() as i64)
}

/// Local time of day of a moment as a fraction of a day (`0.5` is noon).
pub fn local_day_fraction(jde: f64, zone: UtcOffset) -> f64 {
    let local = jde - delta_t(jde) + zone.days() + 0.5;
    local - local.floor()
}

/// JDE of local midnight starting the given civil day.
pub fn start_of_day(day: Jdn, zone: UtcOffset) -> f64 {
    let approx = day.get() as f64 - 0.5 - zone.days();
    approx + delta_t(approx)
}

/// Apparent geocentric longitude of the Sun in degrees, `0.0..360.0`.
///
/// ```
/// use calendrium::astro::solar_longitude;
///
/// // Meeus example 25.a: 1992 October 13.0 TD
/// let lon = solar_longitude(2_448_908.5);
/// assert!((lon - 199.908_94).abs() < 0.001);
/// ```
pub fn solar_longitude(jde: f64) -> f64 {
    let t = julian_centuries(jde);
    let l0 = 280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t * t;
    let m = 357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t * t;
    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * sin_deg(m)
        + (0.019_993 - 0.000_101 * t) * sin_deg(2.0 * m)
        + 0.000_289 * sin_deg(3.0 * m);
    let omega = 125.04 - 1934.136 * t;
    (l0 + c - 0.005_69 - 0.004_78 * sin_deg(omega)).rem_euclid(360.0)
}

/// First moment at or after `jde` when the apparent solar longitude equals
/// `target` degrees (equinoxes, solstices, solar terms).
///
/// Newton-style refinement as in Meeus chapter 27. Returns `None` when the
/// correction has not settled within `max_iterations` steps.
pub fn solar_longitude_after(target: f64, jde: f64, max_iterations: u32) -> Option<f64> {
    let mut estimate =
        jde + (target - solar_longitude(jde)).rem_euclid(360.0) * MEAN_TROPICAL_YEAR / 360.0;
    for iteration in 0..max_iterations {
        let diff = (target - solar_longitude(estimate) + 180.0).rem_euclid(360.0) - 180.0;
        let correction = 58.0 * sin_deg(diff);
        estimate += correction;
        if correction.abs() < SOLAR_TERM_TOLERANCE {
            tracing::trace!(target, iterations = iteration + 1, "solar longitude converged");
            return Some(estimate);
        }
    }
    None
}

/// JDE of the true new moon of lunation `k` (k = 0 is 2000-01-06).
pub fn new_moon(k: i64) -> f64 {
    let k = k as f64;
    let t = k / 1236.85;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let jde = LUNATION_ZERO + MEAN_SYNODIC_MONTH * k + 0.000_154_37 * t2 - 0.000_000_150 * t3
        + 0.000_000_000_73 * t4;
    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t2;
    let m = 2.5534 + 29.105_356_70 * k - 0.000_001_4 * t2 - 0.000_000_11 * t3;
    let mp = 201.5643 + 385.816_935_28 * k + 0.010_758_2 * t2 + 0.000_012_38 * t3
        - 0.000_000_058 * t4;
    let f = 160.7108 + 390.670_502_84 * k - 0.001_611_8 * t2 - 0.000_002_27 * t3
        + 0.000_000_011 * t4;
    let omega = 124.7746 - 1.563_755_88 * k + 0.002_067_2 * t2 + 0.000_002_15 * t3;

    let periodic = -0.407_20 * sin_deg(mp)
        + 0.172_41 * e * sin_deg(m)
        + 0.016_08 * sin_deg(2.0 * mp)
        + 0.010_39 * sin_deg(2.0 * f)
        + 0.007_39 * e * sin_deg(mp - m)
        - 0.005_14 * e * sin_deg(mp + m)
        + 0.002_08 * e * e * sin_deg(2.0 * m)
        - 0.001_11 * sin_deg(mp - 2.0 * f)
        - 0.000_57 * sin_deg(mp + 2.0 * f)
        + 0.000_56 * e * sin_deg(2.0 * mp + m)
        - 0.000_42 * sin_deg(3.0 * mp)
        + 0.000_42 * e * sin_deg(m + 2.0 * f)
        + 0.000_38 * e * sin_deg(m - 2.0 * f)
        - 0.000_24 * e * sin_deg(2.0 * mp - m)
        - 0.000_17 * sin_deg(omega)
        - 0.000_07 * sin_deg(mp + 2.0 * m)
        + 0.000_04 * sin_deg(2.0 * mp - 2.0 * f)
        + 0.000_04 * sin_deg(3.0 * m)
        + 0.000_03 * sin_deg(mp + m - 2.0 * f)
        + 0.000_03 * sin_deg(2.0 * mp + 2.0 * f)
        - 0.000_03 * sin_deg(mp + m + 2.0 * f)
        + 0.000_03 * sin_deg(mp - m + 2.0 * f)
        - 0.000_02 * sin_deg(mp - m - 2.0 * f)
        - 0.000_02 * sin_deg(3.0 * mp + m)
        + 0.000_02 * sin_deg(4.0 * mp);

    // Planetary arguments
    let planetary: [(f64, f64); 14] = [
        (0.000_325, 299.77 + 0.107_408 * k - 0.009_173 * t2),
        (0.000_165, 251.88 + 0.016_321 * k),
        (0.000_164, 251.83 + 26.651_886 * k),
        (0.000_126, 349.42 + 36.412_478 * k),
        (0.000_110, 84.66 + 18.206_239 * k),
        (0.000_062, 141.74 + 53.303_771 * k),
        (0.000_060, 207.14 + 2.453_732 * k),
        (0.000_056, 154.84 + 7.306_860 * k),
        (0.000_047, 34.52 + 27.261_239 * k),
        (0.000_042, 207.19 + 0.121_824 * k),
        (0.000_040, 291.34 + 1.844_379 * k),
        (0.000_037, 161.72 + 24.198_154 * k),
        (0.000_035, 239.56 + 25.513_099 * k),
        (0.000_023, 331.55 + 3.592_518 * k),
    ];
    let additional: f64 = planetary
        .iter()
        .map(|&(coefficient, argument)| coefficient * sin_deg(argument))
        .sum();

    jde + periodic + additional
}

/// Index of the last lunation whose new moon falls on or before `day`.
///
/// The true new moon never strays more than about 14 hours from the mean one,
/// so two lunations either side of the mean estimate always bracket it.
pub fn lunation_on_or_before(day: Jdn, zone: UtcOffset) -> i64 {
    let estimate = ((start_of_day(day, zone) - LUNATION_ZERO) / MEAN_SYNODIC_MONTH).floor() as i64;
    (estimate - 2..=estimate + 2)
        .rev()
        .find(|&k| civil_day(new_moon(k), zone) <= day)
        .unwrap_or(estimate - 3)
}

/// The civil day of the last new moon on or before `day`.
pub fn new_moon_before(day: Jdn, zone: UtcOffset) -> Jdn {
    civil_day(new_moon(lunation_on_or_before(day, zone)), zone)
}

/// The civil day of the first new moon strictly after `day`.
pub fn new_moon_after(day: Jdn, zone: UtcOffset) -> Jdn {
    civil_day(new_moon(lunation_on_or_before(day, zone) + 1), zone)
}
