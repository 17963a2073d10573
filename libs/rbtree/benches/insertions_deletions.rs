use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::seq::SliceRandom;
use rbtree::{RBTree, natural_order};

fn rb(inserts: &[usize], deletes: &[usize]) {
    let mut tree: RBTree<usize> = RBTree::default();

    for i in inserts {
        tree.insert(*i, natural_order, &());
    }

    for i in deletes {
        tree.delete(i, natural_order, &());
    }
}

fn rb_search(tree: &RBTree<usize>, searches: &[usize]) -> usize {
    searches
        .iter()
        .filter(|i| tree.find(*i, natural_order, &()).is_some())
        .count()
}

fn bench_insertions_deletions(c: &mut Criterion) {
    let mut group = c.benchmark_group("Insertions & Deletions");
    for n in [100, 300, 500, 700, 900, 1100] {
        let mut rng = rand::rng();

        let mut nums = (0..n).collect::<Vec<_>>();
        nums.shuffle(&mut rng);
        let inserts = nums.clone();
        nums.shuffle(&mut rng);
        let deletes = nums;

        group.bench_with_input(
            BenchmarkId::new("Red-Black", n),
            &(&inserts, &deletes),
            |b, (inserts, deletes)| b.iter(|| rb(inserts, deletes)),
        );
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut rng = rand::rng();

    let mut nums = (0..700).collect::<Vec<_>>();
    nums.shuffle(&mut rng);

    let mut tree = RBTree::default();
    for i in &nums {
        tree.insert(*i, natural_order, &());
    }
    nums.shuffle(&mut rng);

    c.bench_function("Search", |b| b.iter(|| rb_search(&tree, &nums)));
}

criterion_group!(benches, bench_insertions_deletions, bench_search);
criterion_main!(benches);
