#![allow(clippy::all)] // Clippy will attempt to remove black_box() internals

use criterion::*;
use pwlaw::utils::{corey_table, linspace, tabulate};
use pwlaw::{
    Curve1D, ExplicitFluidState, Linear, LinearHoldLast, MaterialLaw, PiecewiseLinearParams,
    PiecewiseLinearTwoPhase, TwoPhaseTraits,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

fn gen_law(nsamples: usize) -> PiecewiseLinearTwoPhase<f64> {
    let pcnw = tabulate(0.1, 1.0, nsamples, |sw| 1e4 * (1.0 - sw).powi(3) + 100.0).unwrap();
    let krw = corey_table(0.1, 1.0, 1.0, 3.0, nsamples, true).unwrap();
    let krn = corey_table(0.1, 0.9, 0.8, 2.0, nsamples, false).unwrap();
    PiecewiseLinearTwoPhase::new(
        TwoPhaseTraits::wetting_first(),
        PiecewiseLinearParams::new(pcnw, krw, krn),
    )
}

/// Observation points covering the table and some extrapolation on either side,
/// shuffled so that consecutive queries do not land in the same segment
fn gen_obs(size: usize) -> Vec<f64> {
    let mut obs = linspace(-0.2, 1.2, size);
    obs.shuffle(&mut StdRng::seed_from_u64(0));
    obs
}

fn bench_curves(c: &mut Criterion) {
    let mut group = c.benchmark_group("Curve1D");
    for nsamples in [4, 64, 1024] {
        let law = gen_law(nsamples);
        for size in [1_000, 100_000] {
            let obs = gen_obs(size);
            let mut out = vec![0.0; size];
            group.throughput(Throughput::Elements(size as u64));

            group.bench_with_input(
                BenchmarkId::new(format!("Linear {nsamples} samples"), size),
                &size,
                |b, _| {
                    let curve = Linear::new(&law.params().pcnw);
                    b.iter(|| black_box(curve.eval(&obs, &mut out).unwrap()))
                },
            );

            group.bench_with_input(
                BenchmarkId::new(format!("LinearHoldLast {nsamples} samples"), size),
                &size,
                |b, _| {
                    let curve = LinearHoldLast::new(&law.params().krw);
                    b.iter(|| black_box(curve.eval(&obs, &mut out).unwrap()))
                },
            );

            group.bench_with_input(
                BenchmarkId::new(format!("LinearHoldLast deriv {nsamples} samples"), size),
                &size,
                |b, _| {
                    let curve = LinearHoldLast::new(&law.params().krn);
                    b.iter(|| black_box(curve.deriv(&obs, &mut out).unwrap()))
                },
            );
        }
    }
    group.finish();
}

fn bench_law(c: &mut Criterion) {
    let mut group = c.benchmark_group("PiecewiseLinearTwoPhase");
    let law = gen_law(64);
    let size = 10_000;
    let states: Vec<ExplicitFluidState<f64>> = gen_obs(size)
        .into_iter()
        .map(|sw| {
            let mut fs = ExplicitFluidState::new(2, 1);
            fs.set_saturations(&[sw, 1.0 - sw]).unwrap();
            fs
        })
        .collect();
    group.throughput(Throughput::Elements(size as u64));

    group.bench_function("capillary_pressures + relative_permeabilities", |b| {
        let mut pc = [0.0; 2];
        let mut kr = [0.0; 2];
        b.iter(|| {
            for fs in states.iter() {
                law.capillary_pressures(&mut pc, fs).unwrap();
                law.relative_permeabilities(&mut kr, fs).unwrap();
                black_box((pc, kr));
            }
        })
    });

    group.bench_function("saturation derivatives", |b| {
        let mut dpc = [0.0; 2];
        let mut dkr = [0.0; 2];
        b.iter(|| {
            for fs in states.iter() {
                for phase in 0..2 {
                    law.d_capillary_pressures_d_saturation(&mut dpc, fs, phase)
                        .unwrap();
                    law.d_relative_permeabilities_d_saturation(&mut dkr, fs, phase)
                        .unwrap();
                    black_box((dpc, dkr));
                }
            }
        })
    });
    group.finish();
}

criterion_group!(benches, bench_curves, bench_law);
criterion_main!(benches);
