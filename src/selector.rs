//! Seeded quiz selection.
//!
//! One generator is built per call from the seed string and consumed in a fixed
//! order: first the pool-level shuffle, then one option shuffle per selected
//! question, in selection order. That order is what makes a seed reproducible.
//!
//! Pinned algorithm:
//! - seed string -> 64-bit FNV-1a over its UTF-8 bytes
//! - generator   -> `ChaCha12Rng::seed_from_u64` (rand_chacha, value-stable)
//! - shuffle     -> Fisher–Yates from the back; index `j` in `[0, i]` drawn from
//!                  `next_u32` by widening multiply with rejection

use chrono::NaiveDate;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha12Rng;

use crate::domain::{Question, QuizResult, ShuffledQuestion};

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Default seed for a given day: `YYYYMMDD`.
pub fn daily_seed(date: NaiveDate) -> String {
  date.format("%Y%m%d").to_string()
}

/// Restrict a requested count to `[1, pool_len]`. An empty pool yields 0.
pub fn clamp_count(requested: i64, pool_len: usize) -> usize {
  if pool_len == 0 {
    return 0;
  }
  let max = i64::try_from(pool_len).unwrap_or(i64::MAX);
  requested.clamp(1, max) as usize
}

/// Build the generator for a seed. Same string, same stream.
pub fn rng_for_seed(seed: &str) -> ChaCha12Rng {
  ChaCha12Rng::seed_from_u64(fnv1a_64(seed.as_bytes()))
}

/// In-place Fisher–Yates. Every permutation is equally likely and the draws
/// depend only on the generator's `next_u32` stream.
pub fn shuffle<T>(items: &mut [T], rng: &mut ChaCha12Rng) {
  for i in (1..items.len()).rev() {
    let bound = u32::try_from(i + 1).unwrap_or(u32::MAX);
    items.swap(i, below(rng, bound) as usize);
  }
}

/// Uniform value in `[0, bound)`, `bound > 0`.
fn below(rng: &mut ChaCha12Rng, bound: u32) -> u32 {
  let zone = (bound << bound.leading_zeros()).wrapping_sub(1);
  loop {
    let wide = u64::from(rng.next_u32()) * u64::from(bound);
    if wide as u32 <= zone {
      return (wide >> 32) as u32;
    }
  }
}

/// Pick `count` questions from `pool` and shuffle each one's options, all
/// driven by `seed`.
pub fn select(pool: &[Question], count: i64, seed: &str) -> QuizResult {
  let count = clamp_count(count, pool.len());
  let mut rng = rng_for_seed(seed);

  let mut order: Vec<usize> = (0..pool.len()).collect();
  shuffle(&mut order, &mut rng);

  let questions = order
    .into_iter()
    .take(count)
    .map(|i| shuffle_question(&pool[i], &mut rng))
    .collect();

  QuizResult { seed: seed.to_string(), count, questions }
}

/// Permute a question's options and remap `correct_index` to follow the
/// correct option. `q.correct_index` must be in range (`pool::parse_pool`
/// rejects questions where it is not).
pub fn shuffle_question(q: &Question, rng: &mut ChaCha12Rng) -> ShuffledQuestion {
  debug_assert!(
    q.correct_index < q.options.len(),
    "answer {} out of range for {} options",
    q.correct_index,
    q.options.len()
  );
  let mut tagged: Vec<(usize, &String)> = q.options.iter().enumerate().collect();
  shuffle(&mut tagged, rng);

  // Unreachable for validated questions, every original index is present.
  let correct_index = tagged
    .iter()
    .position(|(orig, _)| *orig == q.correct_index)
    .unwrap_or_default();

  ShuffledQuestion {
    text: q.text.clone(),
    options: tagged.into_iter().map(|(_, text)| text.clone()).collect(),
    correct_index,
    explanation: q.explanation.clone(),
  }
}

fn fnv1a_64(bytes: &[u8]) -> u64 {
  bytes.iter().fold(FNV_OFFSET, |hash, b| (hash ^ u64::from(*b)).wrapping_mul(FNV_PRIME))
}
