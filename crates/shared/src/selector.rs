use rand::seq::SliceRandom;

use crate::models::{Problem, SelectionCriteria};

/// Pick up to `criteria.count` problems from the catalog, uniformly at
/// random without replacement.
///
/// Difficulty is mandatory; the tag is best-effort. When fewer than `count`
/// problems match both, the tag constraint is dropped and the pool is every
/// problem at the requested difficulty. An empty result is valid output.
pub fn pick_problems(catalog: &[Problem], criteria: &SelectionCriteria) -> Vec<Problem> {
    let matching: Vec<&Problem> = catalog
        .iter()
        .filter(|p| p.level == criteria.difficulty && p.tags.iter().any(|t| t == &criteria.tag))
        .collect();

    let pool = if matching.len() < criteria.count {
        catalog
            .iter()
            .filter(|p| p.level == criteria.difficulty)
            .collect()
    } else {
        matching
    };

    let mut rng = rand::thread_rng();
    pool.choose_multiple(&mut rng, criteria.count)
        .map(|p| (*p).clone())
        .collect()
}
