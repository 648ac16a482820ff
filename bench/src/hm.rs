use crate::utils;
use std::collections::HashMap;
use std::time::{Duration, Instant};

fn bench_add(len: usize) -> (HashMap<i64, i64>, Vec<i64>, Duration) {
    let mut m = HashMap::new();
    let data = utils::randvec::<i64>(len);
    let begin = Instant::now();
    for k in &data {
        m.insert(*k, *k);
    }
    (m, data, begin.elapsed())
}

fn bench_find(m: &HashMap<i64, i64>, d: &Vec<i64>) -> Duration {
    let begin = Instant::now();
    for k in d {
        m.get(k).unwrap();
    }
    begin.elapsed()
}

fn bench_remove(m: &mut HashMap<i64, i64>, d: &Vec<i64>) -> Duration {
    let begin = Instant::now();
    for k in d {
        m.remove(k).unwrap();
    }
    begin.elapsed()
}

pub(crate) fn run(size: usize) {
    let (mut m, d, add) = bench_add(size);
    let find = bench_find(&m, &d);
    let rm = bench_remove(&mut m, &d);
    println!(
        "add: {}, find: {}, remove: {}",
        utils::to_ms(add),
        utils::to_ms(find),
        utils::to_ms(rm)
    );
}
