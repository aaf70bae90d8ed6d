use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

pub trait NormalDraw {
    fn draw(&mut self, mean: f64, std_dev: f64) -> f64;

    fn draw_n(&mut self, count: usize, mean: f64, std_dev: f64) -> Vec<f64> {
        (0..count).map(|_| self.draw(mean, std_dev)).collect()
    }
}

/// Draws from `N(mean, std_dev^2)` as `mean + std_dev * z`.
///
/// The parameters are not validated: a negative `std_dev` mirrors the draw
/// around the mean and a zero `std_dev` always yields `mean`.
pub struct NormalSampler<R: Rng> {
    rng: R,
}

impl<R: Rng> NormalSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> NormalDraw for NormalSampler<R> {
    fn draw(&mut self, mean: f64, std_dev: f64) -> f64 {
        let z: f64 = StandardNormal.sample(&mut self.rng);
        mean + std_dev * z
    }
}
