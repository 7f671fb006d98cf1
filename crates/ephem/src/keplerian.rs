//! Closed-form planetary positions from mean Keplerian elements.
//!
//! Elements and linear rates come from JPL's "Keplerian Elements for Approximate
//! Positions of the Major Planets" (Standish), table valid for 1800 AD – 2050 AD.
//! Angles are in degrees, rates per Julian century from J2000 (TDB). The "earth"
//! entry is the Earth–Moon barycentre.

use std::f64::consts::{PI, TAU};

use solar_core::planar::PlanarPosition;
use tracing::trace;

use crate::bodies::normalize_body_name;
use crate::{EphemerisError, EphemerisProvider, Epoch};

const PROVIDER: &str = "keplerian";

/// 1800-01-01 00:00 TDB.
const VALID_FROM_JD: f64 = 2_378_496.5;
/// 2051-01-01 00:00 TDB.
const VALID_UNTIL_JD: f64 = 2_470_172.5;

const KEPLER_TOLERANCE: f64 = 1e-12;
const KEPLER_MAX_ITERATIONS: usize = 30;

/// Planets covered by the element table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Planet {
    Mercury,
    Venus,
    EarthMoonBarycenter,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

/// Value at J2000 and rate per Julian century.
#[derive(Debug, Clone, Copy)]
struct Element(f64, f64);

impl Element {
    fn at(self, centuries: f64) -> f64 {
        self.0 + self.1 * centuries
    }
}

#[derive(Debug, Clone, Copy)]
struct MeanElements {
    /// Semi-major axis (AU).
    a: Element,
    /// Eccentricity.
    e: Element,
    /// Inclination (deg).
    i: Element,
    /// Mean longitude (deg).
    mean_longitude: Element,
    /// Longitude of perihelion (deg).
    long_perihelion: Element,
    /// Longitude of the ascending node (deg).
    long_node: Element,
}

impl Planet {
    pub const ALL: [Planet; 8] = [
        Planet::Mercury,
        Planet::Venus,
        Planet::EarthMoonBarycenter,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Uranus,
        Planet::Neptune,
    ];

    /// Resolve a configured body name; `"<planet> barycenter"` maps to the planet.
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = normalize_body_name(name);
        let base = normalized
            .strip_suffix(" barycenter")
            .unwrap_or(&normalized);
        match base {
            "mercury" => Some(Self::Mercury),
            "venus" => Some(Self::Venus),
            "earth" | "emb" | "earth-moon" | "earth moon" => Some(Self::EarthMoonBarycenter),
            "mars" => Some(Self::Mars),
            "jupiter" => Some(Self::Jupiter),
            "saturn" => Some(Self::Saturn),
            "uranus" => Some(Self::Uranus),
            "neptune" => Some(Self::Neptune),
            _ => None,
        }
    }

    fn elements(self) -> MeanElements {
        match self {
            Self::Mercury => MeanElements {
                a: Element(0.387_099_27, 0.000_000_37),
                e: Element(0.205_635_93, 0.000_019_06),
                i: Element(7.004_979_02, -0.005_947_49),
                mean_longitude: Element(252.250_323_50, 149_472.674_111_75),
                long_perihelion: Element(77.457_796_28, 0.160_476_89),
                long_node: Element(48.330_765_93, -0.125_340_81),
            },
            Self::Venus => MeanElements {
                a: Element(0.723_335_66, 0.000_003_90),
                e: Element(0.006_776_72, -0.000_041_07),
                i: Element(3.394_676_05, -0.000_788_90),
                mean_longitude: Element(181.979_099_50, 58_517.815_387_29),
                long_perihelion: Element(131.602_467_18, 0.002_683_29),
                long_node: Element(76.679_842_55, -0.277_694_18),
            },
            Self::EarthMoonBarycenter => MeanElements {
                a: Element(1.000_002_61, 0.000_005_62),
                e: Element(0.016_711_23, -0.000_043_92),
                i: Element(-0.000_015_31, -0.012_946_68),
                mean_longitude: Element(100.464_571_66, 35_999.372_449_81),
                long_perihelion: Element(102.937_681_93, 0.323_273_64),
                long_node: Element(0.0, 0.0),
            },
            Self::Mars => MeanElements {
                a: Element(1.523_710_34, 0.000_018_47),
                e: Element(0.093_394_10, 0.000_078_82),
                i: Element(1.849_691_42, -0.008_131_31),
                mean_longitude: Element(-4.553_432_05, 19_140.302_684_99),
                long_perihelion: Element(-23.943_629_59, 0.444_410_88),
                long_node: Element(49.559_538_91, -0.292_573_43),
            },
            Self::Jupiter => MeanElements {
                a: Element(5.202_887_00, -0.000_116_07),
                e: Element(0.048_386_24, -0.000_132_53),
                i: Element(1.304_396_95, -0.001_837_14),
                mean_longitude: Element(34.396_440_51, 3_034.746_127_75),
                long_perihelion: Element(14.728_479_83, 0.212_526_68),
                long_node: Element(100.473_909_09, 0.204_691_06),
            },
            Self::Saturn => MeanElements {
                a: Element(9.536_675_94, -0.001_250_60),
                e: Element(0.053_861_79, -0.000_509_91),
                i: Element(2.485_991_87, 0.001_936_09),
                mean_longitude: Element(49.954_244_23, 1_222.493_622_01),
                long_perihelion: Element(92.598_878_31, -0.418_972_16),
                long_node: Element(113.662_424_48, -0.288_677_94),
            },
            Self::Uranus => MeanElements {
                a: Element(19.189_164_64, -0.001_961_76),
                e: Element(0.047_257_44, -0.000_043_97),
                i: Element(0.772_637_83, -0.002_429_39),
                mean_longitude: Element(313.238_104_51, 428.482_027_85),
                long_perihelion: Element(170.954_276_30, 0.408_052_81),
                long_node: Element(74.016_925_03, 0.042_405_89),
            },
            Self::Neptune => MeanElements {
                a: Element(30.069_922_76, 0.000_262_91),
                e: Element(0.008_590_48, 0.000_051_05),
                i: Element(1.770_043_47, 0.000_353_72),
                mean_longitude: Element(-55.120_029_69, 218.459_453_25),
                long_perihelion: Element(44.964_762_27, -0.322_414_64),
                long_node: Element(131.784_225_74, -0.005_086_64),
            },
        }
    }

    /// Heliocentric ecliptic (x, y) in AU at `centuries` Julian centuries past J2000.
    pub fn position_at(self, centuries: f64) -> PlanarPosition {
        let el = self.elements();
        let a = el.a.at(centuries);
        let e = el.e.at(centuries);
        let incl = el.i.at(centuries).to_radians();
        let long_peri = el.long_perihelion.at(centuries);
        let node = el.long_node.at(centuries);

        let arg_peri = (long_peri - node).to_radians();
        let mean_anomaly = wrap_pi((el.mean_longitude.at(centuries) - long_peri).to_radians());
        let ecc_anomaly = solve_kepler(mean_anomaly, e);

        // Perifocal coordinates, x towards perihelion.
        let xp = a * (ecc_anomaly.cos() - e);
        let yp = a * (1.0 - e * e).sqrt() * ecc_anomaly.sin();

        let node = node.to_radians();
        let (sw, cw) = arg_peri.sin_cos();
        let (so, co) = node.sin_cos();
        let ci = incl.cos();

        let x = (cw * co - sw * so * ci) * xp + (-sw * co - cw * so * ci) * yp;
        let y = (cw * so + sw * co * ci) * xp + (-sw * so + cw * co * ci) * yp;
        PlanarPosition::new(x, y)
    }
}

/// Solve Kepler's equation `M = E − e·sin E` for `E` by Newton–Raphson.
pub fn solve_kepler(mean_anomaly: f64, eccentricity: f64) -> f64 {
    let mut ecc_anomaly = mean_anomaly + eccentricity * mean_anomaly.sin();
    for _ in 0..KEPLER_MAX_ITERATIONS {
        let f = ecc_anomaly - eccentricity * ecc_anomaly.sin() - mean_anomaly;
        let fp = 1.0 - eccentricity * ecc_anomaly.cos();
        let delta = f / fp;
        ecc_anomaly -= delta;
        if delta.abs() < KEPLER_TOLERANCE {
            break;
        }
    }
    ecc_anomaly
}

fn wrap_pi(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped > PI { wrapped - TAU } else { wrapped }
}

/// Analytic ephemeris backed by the mean-element table.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeplerianEphemeris;

impl KeplerianEphemeris {
    pub fn new() -> Self {
        Self
    }

    /// First and last epochs the element table is valid for.
    pub fn coverage(&self) -> (Epoch, Epoch) {
        (
            Epoch::from_julian_date_tdb(VALID_FROM_JD),
            Epoch::from_julian_date_tdb(VALID_UNTIL_JD),
        )
    }

    fn check_coverage(&self, epoch: &Epoch) -> Result<(), EphemerisError> {
        let jd = epoch.julian_date_tdb();
        if !(VALID_FROM_JD..=VALID_UNTIL_JD).contains(&jd) {
            return Err(EphemerisError::OutOfRange {
                jd,
                start_jd: VALID_FROM_JD,
                end_jd: VALID_UNTIL_JD,
                provider: PROVIDER,
            });
        }
        Ok(())
    }
}

impl EphemerisProvider for KeplerianEphemeris {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    fn position(&self, body: &str, epoch: &Epoch) -> Result<PlanarPosition, EphemerisError> {
        self.check_coverage(epoch)?;
        if normalize_body_name(body) == "sun" {
            return Ok(PlanarPosition::ORIGIN);
        }
        let planet = Planet::from_name(body).ok_or_else(|| EphemerisError::UnknownBody {
            body: body.to_string(),
            provider: PROVIDER,
        })?;
        let position = planet.position_at(epoch.julian_centuries_tdb());
        trace!(body, jd = epoch.julian_date_tdb(), x = position.x, y = position.y, "keplerian position");
        Ok(position)
    }
}
