//! Multi-start randomized greedy construction.
//!
//! Each trial shuffles the dish order, then walks it front to back forming
//! groups under the strict size-priority policy of [`Remaining::next_action`].
//! The best plan over all trials is kept; ties keep the earlier plan.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};

use crate::action::{Action, Index, Remaining};
use crate::cache::IngredientCache;
use crate::model::condition::Quota;
use crate::model::entity::Id;
use crate::model::group::{Group, Plan};
use crate::model::instance::Instance;

/// Trial budget used by the reference driver.
pub const DEFAULT_TRIAL_COUNT: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    pub trial_count: usize,
}

impl Default for Params {
    fn default() -> Self {
        Params { trial_count: DEFAULT_TRIAL_COUNT }
    }
}

struct State {
    best: Plan,
    n_trials: usize,
    n_improvements: usize,
}

impl State {
    fn new() -> State {
        State { best: Plan::empty(), n_trials: 0, n_improvements: 0 }
    }

    fn offer(&mut self, plan: Plan) {
        self.n_trials += 1;
        if plan.score > self.best.score {
            debug!(event = "improved", trial = self.n_trials, score = plan.score);
            self.best = plan;
            self.n_improvements += 1;
        }
    }
}

/// Holds the dish order between trials; every call reshuffles it in place.
struct PermutationGenerator {
    order: Vec<Id>,
}

impl PermutationGenerator {
    fn new(len: usize) -> PermutationGenerator {
        PermutationGenerator { order: (0..len).collect() }
    }

    fn next<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &[Id] {
        self.order.shuffle(rng);
        &self.order
    }
}

/// Runs `trial_count` independent trials and returns the best plan found.
///
/// Deterministic for a given `rng` state. With `trial_count == 0`, or when no
/// trial scores above zero, the result is the empty plan with score 0.
pub fn solve<R: Rng + ?Sized>(instance: &Instance, trial_count: usize, rng: &mut R) -> Plan {
    info!(
        event = "solve_start",
        dish_count = instance.dish_count(),
        trial_count,
    );

    let mut cache = IngredientCache::create(instance);
    let mut generator = PermutationGenerator::new(instance.dish_count());
    let mut state = State::new();
    for _ in 0..trial_count {
        let order = generator.next(rng);
        state.offer(construct(order, instance.quotas(), &mut cache));
    }

    info!(
        event = "solve_end",
        score = state.best.score,
        groups = state.best.group_count(),
        trials = state.n_trials,
        improvements = state.n_improvements,
    );
    state.best
}

pub fn solve_with<R: Rng + ?Sized>(instance: &Instance, params: &Params, rng: &mut R) -> Plan {
    solve(instance, params.trial_count, rng)
}

/// One trial: greedily cut `order` into groups, smallest allowed size first,
/// until neither the tail nor the slot budgets allow another group.
pub fn construct(order: &[Id], quota: Quota, cache: &mut IngredientCache) -> Plan {
    let mut remaining = Remaining::new(quota);
    let mut plan = Plan::empty();
    let mut cursor: Index = 0;
    while let Action::Form(size) = remaining.next_action(cursor, order.len()) {
        let members = order[cursor..cursor + size.len()].to_vec();
        let gain = cache.group_score(&members);
        plan.push(size, Group { members }, gain);
        remaining.consume(size);
        cursor += size.len();
    }
    plan
}
