//! Background star field.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Points scattered uniformly over the square `[-limit, limit]²`.
#[derive(Debug, Clone, PartialEq)]
pub struct StarField {
    points: Vec<(f64, f64)>,
}

impl StarField {
    pub fn random<R: Rng>(count: usize, limit: f64, rng: &mut R) -> Self {
        let limit = limit.abs();
        let points = (0..count)
            .map(|_| (rng.gen_range(-limit..=limit), rng.gen_range(-limit..=limit)))
            .collect();
        Self { points }
    }

    /// Deterministic when `seed` is set, otherwise seeded from the OS.
    pub fn seeded(count: usize, limit: f64, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::random(count, limit, &mut rng)
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_stay_inside_the_viewport() {
        let field = StarField::seeded(500, 40.0, Some(7));
        assert_eq!(field.len(), 500);
        assert!(
            field
                .points()
                .iter()
                .all(|&(x, y)| x.abs() <= 40.0 && y.abs() <= 40.0)
        );
    }

    #[test]
    fn same_seed_same_sky() {
        assert_eq!(
            StarField::seeded(20, 10.0, Some(42)),
            StarField::seeded(20, 10.0, Some(42))
        );
    }
}
