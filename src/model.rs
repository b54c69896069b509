pub mod entity {
    use std::collections::HashSet;

    pub type Id = usize;
    pub type Ingredient = String;

    #[derive(Debug, Clone, PartialEq)]
    pub struct Dish {
        pub id: Id,
        pub ingredients: HashSet<Ingredient>,
    }

    impl Dish {
        pub fn new<I, S>(id: Id, ingredients: I) -> Dish
        where
            I: IntoIterator<Item = S>,
            S: Into<Ingredient>,
        {
            Dish {
                id,
                ingredients: ingredients.into_iter().map(Into::into).collect(),
            }
        }
    }
}


pub mod condition {
    pub type Score = u64;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum GroupSize {
        Two,
        Three,
        Four,
    }

    impl GroupSize {
        /// Order in which a trial tries to form groups.
        pub const PRIORITY: [GroupSize; 3] = [GroupSize::Two, GroupSize::Three, GroupSize::Four];

        pub fn len(self) -> usize {
            match self {
                GroupSize::Two => 2,
                GroupSize::Three => 3,
                GroupSize::Four => 4,
            }
        }

        pub fn from_len(len: usize) -> Option<GroupSize> {
            match len {
                2 => Some(GroupSize::Two),
                3 => Some(GroupSize::Three),
                4 => Some(GroupSize::Four),
                _ => None,
            }
        }
    }

    /// Slot budgets, counted in dishes rather than in groups.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Quota {
        pub two: usize,
        pub three: usize,
        pub four: usize,
    }

    impl Quota {
        /// Converts per-size group-count limits into slot budgets (`2*p2`, `3*p3`, `4*p4`).
        pub fn from_group_limits(p2: usize, p3: usize, p4: usize) -> Quota {
            Quota {
                two: p2.saturating_mul(2),
                three: p3.saturating_mul(3),
                four: p4.saturating_mul(4),
            }
        }

        pub fn get(&self, size: GroupSize) -> usize {
            match size {
                GroupSize::Two => self.two,
                GroupSize::Three => self.three,
                GroupSize::Four => self.four,
            }
        }

        pub fn get_mut(&mut self, size: GroupSize) -> &mut usize {
            match size {
                GroupSize::Two => &mut self.two,
                GroupSize::Three => &mut self.three,
                GroupSize::Four => &mut self.four,
            }
        }

        /// Upper bound on the number of groups of `size` a plan may hold.
        pub fn max_groups(&self, size: GroupSize) -> usize {
            self.get(size) / size.len()
        }
    }
}


pub mod group {
    use super::condition::{GroupSize, Score};
    use super::entity::Id;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Group {
        pub members: Vec<Id>,
    }

    impl Group {
        pub fn size(&self) -> Option<GroupSize> {
            GroupSize::from_len(self.members.len())
        }
    }

    /// Best-of-trial output: groups bucketed by size, each bucket in construction order.
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct Plan {
        pub groups2: Vec<Group>,
        pub groups3: Vec<Group>,
        pub groups4: Vec<Group>,
        pub score: Score,
    }

    impl Plan {
        pub fn empty() -> Plan {
            Plan::default()
        }

        pub fn groups(&self, size: GroupSize) -> &[Group] {
            match size {
                GroupSize::Two => &self.groups2,
                GroupSize::Three => &self.groups3,
                GroupSize::Four => &self.groups4,
            }
        }

        pub(crate) fn push(&mut self, size: GroupSize, group: Group, gain: Score) {
            let bucket = match size {
                GroupSize::Two => &mut self.groups2,
                GroupSize::Three => &mut self.groups3,
                GroupSize::Four => &mut self.groups4,
            };
            bucket.push(group);
            self.score += gain;
        }

        pub fn group_count(&self) -> usize {
            self.groups2.len() + self.groups3.len() + self.groups4.len()
        }

        pub fn is_empty(&self) -> bool {
            self.group_count() == 0
        }

        /// Size-2 groups first, then size-3, then size-4.
        pub fn iter(&self) -> impl Iterator<Item = &Group> {
            self.groups2.iter().chain(&self.groups3).chain(&self.groups4)
        }

        pub fn used_dishes(&self) -> impl Iterator<Item = Id> + '_ {
            self.iter().flat_map(|group| group.members.iter().copied())
        }
    }
}


pub mod instance {
    use std::collections::HashSet;

    use super::condition::{GroupSize, Quota};
    use super::entity::{Dish, Id, Ingredient};

    /// One problem instance. Read-only once built.
    #[derive(Debug, Clone, PartialEq)]
    pub struct Instance {
        dishes: Vec<Dish>,
        quota: Quota,
    }

    impl Instance {
        /// Builds an instance from raw per-size group-count limits and one ingredient
        /// list per dish. Dish ids are the list positions.
        pub fn new<L, I, S>(p2: usize, p3: usize, p4: usize, ingredient_lists: L) -> Instance
        where
            L: IntoIterator<Item = I>,
            I: IntoIterator<Item = S>,
            S: Into<Ingredient>,
        {
            let dishes = ingredient_lists
                .into_iter()
                .enumerate()
                .map(|(id, ingredients)| Dish::new(id, ingredients))
                .collect();
            Instance {
                dishes,
                quota: Quota::from_group_limits(p2, p3, p4),
            }
        }

        pub fn dish_count(&self) -> usize {
            self.dishes.len()
        }

        pub fn dishes(&self) -> &[Dish] {
            &self.dishes
        }

        pub fn ingredients_of(&self, id: Id) -> Option<&HashSet<Ingredient>> {
            self.dishes.get(id).map(|dish| &dish.ingredients)
        }

        pub fn quota(&self, size: GroupSize) -> usize {
            self.quota.get(size)
        }

        pub fn quotas(&self) -> Quota {
            self.quota
        }
    }
}
