use std::collections::HashMap;

use itertools::Itertools;

use crate::model::condition::Score;
use crate::model::entity::Id;
use crate::model::instance::Instance;

type Key = u32;

/// Ingredient sets re-keyed to dense integers, with a stamp buffer for
/// counting distinct ingredients of a group without allocating.
pub struct IngredientCache {
    dishes: Vec<Vec<Key>>,
    stamps: Vec<u32>,
    epoch: u32,
}

impl IngredientCache {
    pub fn create(instance: &Instance) -> IngredientCache {
        let mut keys: HashMap<&str, Key> = HashMap::new();
        let dishes = instance
            .dishes()
            .iter()
            .map(|dish| {
                dish.ingredients
                    .iter()
                    .map(|ingredient| {
                        let next = keys.len() as Key;
                        *keys.entry(ingredient.as_str()).or_insert(next)
                    })
                    .sorted_unstable()
                    .dedup()
                    .collect_vec()
            })
            .collect_vec();
        IngredientCache {
            dishes,
            stamps: vec![0; keys.len()],
            epoch: 0,
        }
    }

    pub fn ingredient_count(&self) -> usize {
        self.stamps.len()
    }

    /// Size of the union of the members' ingredient sets.
    pub fn distinct_count(&mut self, members: &[Id]) -> usize {
        self.advance_epoch();
        let mut count = 0;
        for id in members {
            for key in &self.dishes[*id] {
                let stamp = &mut self.stamps[*key as usize];
                if *stamp != self.epoch {
                    *stamp = self.epoch;
                    count += 1;
                }
            }
        }
        count
    }

    pub fn group_score(&mut self, members: &[Id]) -> Score {
        let distinct = self.distinct_count(members) as Score;
        distinct * distinct
    }

    fn advance_epoch(&mut self) {
        if self.epoch == u32::MAX {
            self.stamps.iter_mut().for_each(|stamp| *stamp = 0);
            self.epoch = 0;
        }
        self.epoch += 1;
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Instance {
        Instance::new(2, 1, 1, vec![vec!["a", "b"], vec!["b", "c"], vec!["a", "c"], vec!["d"], vec![]])
    }

    #[test]
    fn counts_union_of_ingredients() {
        let mut cache = IngredientCache::create(&sample());
        assert_eq!(cache.ingredient_count(), 4);
        assert_eq!(cache.distinct_count(&[0, 1]), 3);
        assert_eq!(cache.distinct_count(&[0, 1, 2]), 3);
        assert_eq!(cache.distinct_count(&[0, 3]), 3);
        assert_eq!(cache.distinct_count(&[3, 4]), 1);
        assert_eq!(cache.distinct_count(&[4]), 0);
    }

    #[test]
    fn group_score_is_squared_count() {
        let mut cache = IngredientCache::create(&sample());
        assert_eq!(cache.group_score(&[0, 1, 2, 3]), 16);
        assert_eq!(cache.group_score(&[0, 2]), 9);
    }

    #[test]
    fn epoch_wraps_cleanly() {
        let mut cache = IngredientCache::create(&sample());
        cache.epoch = u32::MAX - 1;
        assert_eq!(cache.distinct_count(&[0]), 2);
        assert_eq!(cache.distinct_count(&[0, 1]), 3);
        assert_eq!(cache.epoch, 1);
        assert_eq!(cache.distinct_count(&[1, 2]), 3);
    }
}
