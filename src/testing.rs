use rand::Rng;
use rand::SeedableRng;
use rand::distr::StandardUniform;
use rand::rngs::StdRng;

use crate::table::SampleTable;

/// Seed shared by every randomized table test
const SEED: u64 = 0x5EED_0F_5A7;

/// Deterministic generator, so random tables are the same on every run
pub fn rng_fixed_seed() -> StdRng {
    StdRng::seed_from_u64(SEED)
}

/// `n` uniform samples on `[0, 1)`; used for saturations and table values
pub fn randn<T>(rng: &mut StdRng, n: usize) -> Vec<T>
where
    StandardUniform: rand::distr::Distribution<T>,
{
    std::iter::repeat_with(|| rng.random::<T>())
        .take(n)
        .collect()
}

/// Random table on `[0, 1)` with `n` sorted abscissae and random values
pub fn random_table(rng: &mut StdRng, n: usize) -> SampleTable<f64> {
    let mut xs = randn::<f64>(rng, n);
    xs.sort_unstable_by(|x, y| x.total_cmp(y));
    let ys = randn::<f64>(rng, n);
    SampleTable::new(xs, ys).unwrap()
}
