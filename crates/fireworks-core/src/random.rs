use rand::Rng;

/// Half-open interval `[min, max)` sampled uniformly.
///
/// Sampling scales a unit draw instead of using `gen_range`, so a collapsed
/// range (`min == max`) simply yields `min` rather than panicking.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RandomRange {
    pub min: f64,
    pub max: f64,
}

impl RandomRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        random_between(rng, self.min, self.max)
    }

    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value < self.max
    }

    pub fn is_ordered(&self) -> bool {
        self.min <= self.max
    }

    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }
}

#[inline]
pub fn random_between<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    rng.gen::<f64>() * (max - min) + min
}
