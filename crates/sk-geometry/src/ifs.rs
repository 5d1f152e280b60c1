//! Iterated function systems rendered with the chaos game.

use rand::Rng;
use serde::{Deserialize, Serialize};
use sk_core::{Result, SketchError};
use sk_math::Point2;

/// `x' = a·x + b·y + e`, `y' = c·x + d·y + f`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffineMap {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl AffineMap {
    pub const fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    pub fn apply(&self, p: Point2) -> Point2 {
        Point2::new(
            self.a * p.x + self.b * p.y + self.e,
            self.c * p.x + self.d * p.y + self.f,
        )
    }
}

/// A set of affine maps, each picked with probability proportional to its weight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ifs {
    maps: Vec<AffineMap>,
    cumulative: Vec<f64>,
}

impl Ifs {
    pub fn new(weighted: Vec<(AffineMap, f64)>) -> Result<Self> {
        if weighted.is_empty() {
            return Err(SketchError::invalid("IFS needs at least one map"));
        }
        if let Some((_, w)) = weighted.iter().find(|(_, w)| !(*w > 0.0) || !w.is_finite()) {
            return Err(SketchError::invalid(format!("IFS weight must be positive, got {}", w)));
        }

        let total: f64 = weighted.iter().map(|(_, w)| w).sum();
        let mut acc = 0.0;
        let mut maps = Vec::with_capacity(weighted.len());
        let mut cumulative = Vec::with_capacity(weighted.len());
        for (map, w) in weighted {
            acc += w / total;
            maps.push(map);
            cumulative.push(acc);
        }
        Ok(Self { maps, cumulative })
    }

    /// Barnsley's fern: stem 1%, two leaflets 7% each, successive fronds 85%.
    pub fn barnsley_fern() -> Self {
        Self {
            maps: vec![
                AffineMap::new(0.0, 0.0, 0.0, 0.16, 0.0, 0.0),
                AffineMap::new(0.2, -0.26, 0.23, 0.22, 0.0, 1.6),
                AffineMap::new(-0.15, 0.28, 0.26, 0.24, 0.0, 0.44),
                AffineMap::new(0.85, 0.04, -0.04, 0.85, 0.0, 1.6),
            ],
            cumulative: vec![0.01, 0.08, 0.15, 1.0],
        }
    }

    pub fn maps(&self) -> &[AffineMap] {
        &self.maps
    }

    /// The map selected by a uniform sample `r` in `[0, 1)`.
    pub fn choose(&self, r: f64) -> &AffineMap {
        let idx = self
            .cumulative
            .iter()
            .position(|&c| r < c)
            .unwrap_or(self.maps.len() - 1);
        &self.maps[idx]
    }

    /// Run the chaos game from `start`, returning every visited point.
    pub fn iterate<R: Rng>(&self, rng: &mut R, start: Point2, count: usize) -> Vec<Point2> {
        let mut p = start;
        (0..count)
            .map(|_| {
                p = self.choose(rng.gen::<f64>()).apply(p);
                p
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_choose_thresholds() {
        let fern = Ifs::barnsley_fern();
        assert_eq!(fern.choose(0.005), &fern.maps()[0]);
        assert_eq!(fern.choose(0.05), &fern.maps()[1]);
        assert_eq!(fern.choose(0.10), &fern.maps()[2]);
        assert_eq!(fern.choose(0.5), &fern.maps()[3]);
        assert_eq!(fern.choose(0.999_999), &fern.maps()[3]);
    }

    #[test]
    fn test_fern_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let points = Ifs::barnsley_fern().iterate(&mut rng, Point2::ZERO, 20_000);
        assert_eq!(points.len(), 20_000);
        for p in points {
            assert!(p.x > -2.2 && p.x < 2.7, "x out of range: {:?}", p);
            assert!(p.y >= 0.0 && p.y < 10.0, "y out of range: {:?}", p);
        }
    }

    #[test]
    fn test_seeded_runs_repeat() {
        let fern = Ifs::barnsley_fern();
        let a = fern.iterate(&mut StdRng::seed_from_u64(42), Point2::ZERO, 500);
        let b = fern.iterate(&mut StdRng::seed_from_u64(42), Point2::ZERO, 500);
        assert_eq!(a, b);
    }

    #[test]
    fn test_weights_normalized() {
        let square = |e, f| AffineMap::new(0.5, 0.0, 0.0, 0.5, e, f);
        let ifs = Ifs::new(vec![(square(0.0, 0.0), 2.0), (square(0.5, 0.0), 2.0)]).unwrap();
        assert_eq!(ifs.choose(0.49), &ifs.maps()[0]);
        assert_eq!(ifs.choose(0.51), &ifs.maps()[1]);
    }

    #[test]
    fn test_rejects_bad_weights() {
        let m = AffineMap::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        assert!(Ifs::new(vec![]).is_err());
        assert!(Ifs::new(vec![(m, 0.0)]).is_err());
        assert!(Ifs::new(vec![(m, f64::NAN)]).is_err());
    }
}
