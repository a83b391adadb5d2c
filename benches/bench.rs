use std::hint::black_box;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use taskheap::{MaxHeapPQ, Task, TaskId, distribution::Distribution, heapsort, quicksort};

const SIZE: usize = 10_000;

fn bench_sorts(c: &mut Criterion) {
    let mut rng = fastrand::Rng::with_seed(1);

    for distribution in Distribution::ALL {
        let data = distribution.generate(SIZE, &mut rng);

        c.bench_function(&format!("heapsort_{}", distribution), |b| {
            b.iter_batched_ref(
                || data.clone(),
                |v| heapsort(black_box(v.as_mut_slice())),
                BatchSize::SmallInput,
            )
        });

        c.bench_function(&format!("quicksort_{}", distribution), |b| {
            b.iter_batched_ref(
                || data.clone(),
                |v| quicksort(black_box(v.as_mut_slice())),
                BatchSize::SmallInput,
            )
        });
    }
}

fn bench_priority_queue(c: &mut Criterion) {
    let mut rng = fastrand::Rng::with_seed(2);
    let priorities = Distribution::Random.generate(SIZE, &mut rng);
    let tasks: Vec<Task> = priorities
        .iter()
        .enumerate()
        .map(|(i, &p)| Task::new(i as TaskId, p))
        .collect();

    c.bench_function("pq_insert_extract", |b| {
        b.iter_batched(
            || tasks.clone(),
            |tasks| {
                let mut pq = MaxHeapPQ::with_capacity(tasks.len());
                for task in tasks {
                    pq.insert(task).expect("ids are unique");
                }
                while let Some(task) = pq.extract_max() {
                    black_box(task);
                }
            },
            BatchSize::SmallInput,
        )
    });

    c.bench_function("pq_key_updates", |b| {
        b.iter_batched(
            || MaxHeapPQ::try_from_tasks(tasks.clone()).expect("ids are unique"),
            |mut pq| {
                for (i, &p) in priorities.iter().enumerate() {
                    let id = i as TaskId;
                    if i % 2 == 0 {
                        pq.increase_key(id, p + SIZE as i64);
                    } else {
                        pq.decrease_key(id, p - SIZE as i64);
                    }
                }
                black_box(pq)
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_sorts, bench_priority_queue);
criterion_main!(benches);
