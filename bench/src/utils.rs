use rand::Rng;
use std::collections::HashSet;
use std::hash::Hash;
use std::iter::FromIterator;
use std::time::Duration;

pub(crate) trait Rand: Sized {
    fn rand<R: Rng>(r: &mut R) -> Self;
}

impl Rand for i64 {
    fn rand<R: Rng>(r: &mut R) -> Self {
        r.gen()
    }
}

pub(crate) fn random<T: Rand>() -> T {
    let mut rng = rand::thread_rng();
    T::rand(&mut rng)
}

// keys must be distinct so every remove hits
pub(crate) fn randvec<T>(len: usize) -> Vec<T>
where
    T: Ord + Clone + Hash + Rand,
{
    let mut v: HashSet<T> = HashSet::with_capacity(len);
    while v.len() < len {
        v.insert(random());
    }
    Vec::from_iter(v.into_iter())
}

pub(crate) fn to_ms(t: Duration) -> u64 {
    t.as_secs() * 1000 + ((t.subsec_nanos() / 1000000) as u64)
}
