//! Shared state threaded through the generation phases.

use rand::seq::IndexedRandom;
use rand::Rng;
use std::collections::HashSet;

/// Fallback id returned when sampling from an empty id list. Generation order
/// guarantees the lists are populated before dependents sample them; the
/// fallback only keeps a misordered call from panicking.
pub const FALLBACK_ID: i32 = 1;

/// In-memory tracking state for one seeding run.
///
/// Id lists record the primary keys handed out per entity, in creation order,
/// for foreign-key sampling by dependent phases. The sets enforce the
/// uniqueness constraints that are not delegated to the store.
#[derive(Debug, Default)]
pub struct SeedContext {
    pub customer_ids: Vec<i32>,
    pub movie_ids: Vec<i32>,
    pub actor_ids: Vec<i32>,
    pub director_ids: Vec<i32>,
    pub advisory_ids: Vec<i32>,
    pub category_ids: Vec<i32>,

    pub used_emails: HashSet<String>,
    pub wishlist_pairs: HashSet<(i32, i32)>,
    pub movie_director_pairs: HashSet<(i32, i32)>,
    pub movie_advisory_pairs: HashSet<(i32, i32)>,
}

impl SeedContext {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Pick a random id from `ids`, or [`FALLBACK_ID`] if the list is empty.
pub fn sample_id<R: Rng>(rng: &mut R, ids: &[i32]) -> i32 {
    ids.choose(rng).copied().unwrap_or(FALLBACK_ID)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sample_id_draws_from_list() {
        let mut rng = StdRng::seed_from_u64(42);
        let ids = vec![3, 7, 11];
        for _ in 0..50 {
            assert!(ids.contains(&sample_id(&mut rng, &ids)));
        }
    }

    #[test]
    fn test_sample_id_empty_list_falls_back() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(sample_id(&mut rng, &[]), FALLBACK_ID);
    }
}
