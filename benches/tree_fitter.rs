use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, SeedableRng};
use rtforest::bagging::{self, BaggedParamsBuilder};
use rtforest::test_data::setup_data_synthetic;
use rtforest::tree::{self, TreeParams};
use rtforest::{FittedModel, RandomTreeFitter};

fn bench_tree_fitter(c: &mut Criterion) {
    let (x, y) = setup_data_synthetic(2000, 42);

    let mut group = c.benchmark_group("RandomTreeFitter");

    group.bench_function("fit_tree", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| tree::fit(x.view(), y.view(), &TreeParams::default(), &mut rng))
    });

    let params = BaggedParamsBuilder::new(TreeParams::default())
        .leaf_size(5)
        .n_bags(15)
        .build();
    group.bench_function("fit_bagged", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| bagging::fit::<RandomTreeFitter, _>(x.view(), y.view(), &params, &mut rng))
    });

    let mut rng = StdRng::seed_from_u64(42);
    let (_, model) = bagging::fit::<RandomTreeFitter, _>(x.view(), y.view(), &params, &mut rng)
        .expect("bench data is valid");
    group.bench_function("predict_bagged", |b| {
        b.iter(|| model.predict(black_box(x.view())))
    });
    group.finish();
}

criterion_group!(benches, bench_tree_fitter);
criterion_main!(benches);
