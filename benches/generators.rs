use rand::prelude::{Rng, SeedableRng};
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

const STRING_SIZE: usize = 100;

#[allow(dead_code)]
pub(crate) fn gen_random_usizes(n: usize, seed: u64) -> Vec<usize> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let dist = rand::distributions::Uniform::new_inclusive(1usize, 40_000_000usize);
    (0..n).map(|_| rng.sample(dist)).collect()
}

/// Priorities with many repeats so tie-breaking by insertion order is exercised
#[allow(dead_code)]
pub(crate) fn gen_random_priorities(n: usize, seed: u64) -> Vec<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let dist = rand::distributions::Uniform::new_inclusive(-1_000i64, 1_000i64);
    (0..n).map(|_| rng.sample(dist)).collect()
}

/// Unique task ids in random order
#[allow(dead_code)]
pub(crate) fn gen_shuffled_tasks(n: usize, seed: u64) -> Vec<usize> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut res: Vec<usize> = (0..n).collect();
    res.shuffle(&mut rng);
    res
}

#[allow(dead_code)]
pub(crate) fn get_random_strings(n: usize, seed: u64) -> Vec<String> {
    let alphabet: Vec<char> = (0u8..0x7f)
        .filter(|x| x.is_ascii_alphanumeric())
        .map(|x| x as char)
        .collect();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            alphabet[..]
                .choose_multiple(&mut rng, STRING_SIZE)
                .collect::<String>()
        })
        .collect()
}

#[allow(dead_code)]
pub(crate) fn choose_some<T>(vals: &[T], num: usize, seed: u64) -> Vec<T>
where
    T: Clone,
{
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    vals.choose_multiple(&mut rng, num).cloned().collect()
}
