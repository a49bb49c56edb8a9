use std::sync::Mutex;

use rand::{rngs::StdRng, Rng, SeedableRng};

/// Decides how a closed-question batch is divided between single-correct and
/// multi-correct questions when the caller allows, but does not force,
/// multiple correct answers.
#[cfg_attr(test, mockall::automock)]
pub trait AnswerMixPolicy: Send + Sync {
    /// Returns (single_amount, multiple_amount) with the two summing to `total`.
    fn split_single_multiple(&self, total: u32) -> (u32, u32);
}

/// Production policy: single-correct count drawn uniformly from [0, total].
pub struct UniformMixPolicy;

impl AnswerMixPolicy for UniformMixPolicy {
    fn split_single_multiple(&self, total: u32) -> (u32, u32) {
        let single_amount = rand::thread_rng().gen_range(0..=total);
        (single_amount, total - single_amount)
    }
}

/// Same draw as [`UniformMixPolicy`] but from a seeded generator, so tests
/// can pin the split.
pub struct SeededMixPolicy {
    rng: Mutex<StdRng>,
}

impl SeededMixPolicy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl AnswerMixPolicy for SeededMixPolicy {
    fn split_single_multiple(&self, total: u32) -> (u32, u32) {
        let mut rng = self.rng.lock().expect("mix policy rng lock poisoned");
        let single_amount = rng.gen_range(0..=total);
        (single_amount, total - single_amount)
    }
}
