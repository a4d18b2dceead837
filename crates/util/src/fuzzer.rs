use std::cell::RefCell;

use rand::{rngs::OsRng, seq::SliceRandom, Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Seeded generator of random test data.
///
/// Uses the xoshiro256** PRNG, so two fuzzers built from the same seed
/// produce the same sequence.
///
/// # Examples
///
/// ```
/// use unique_words_util::Fuzzer;
///
/// let a = Fuzzer::new(Some(7));
/// let b = Fuzzer::new(Some(7));
/// assert_eq!(a.random_word(1, 8), b.random_word(1, 8));
///
/// let n = a.random_int(1, 10);
/// assert!((1..=10).contains(&n));
/// ```
pub struct Fuzzer {
    /// The seed the PRNG was initialized with.
    pub seed: u64,
    rng: RefCell<Xoshiro256StarStar>,
}

impl Fuzzer {
    /// Create a fuzzer; without a seed one is drawn from `OsRng`.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| OsRng.next_u64());
        Self {
            seed,
            rng: RefCell::new(Xoshiro256StarStar::seed_from_u64(seed)),
        }
    }

    /// Random integer in `[min, max]`.
    pub fn random_int(&self, min: i64, max: i64) -> i64 {
        self.rng.borrow_mut().gen_range(min..=max)
    }

    /// Random `f64` in `[0, 1)`.
    pub fn random(&self) -> f64 {
        self.rng.borrow_mut().gen::<f64>()
    }

    /// Random element of `elements`, `None` when it is empty.
    pub fn pick<'a, T>(&self, elements: &'a [T]) -> Option<&'a T> {
        elements.choose(&mut *self.rng.borrow_mut())
    }

    /// Lowercase ASCII word with a length in `[min_len, max_len]`.
    pub fn random_word(&self, min_len: usize, max_len: usize) -> String {
        let mut rng = self.rng.borrow_mut();
        let len = rng.gen_range(min_len..=max_len.max(min_len));
        (0..len)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect()
    }

    /// Random permutation of `0..n`.
    pub fn shuffled(&self, n: usize) -> Vec<usize> {
        let mut out: Vec<usize> = (0..n).collect();
        out.shuffle(&mut *self.rng.borrow_mut());
        out
    }
}
