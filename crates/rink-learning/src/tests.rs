//! Unit tests for rink-learning.

use rink_core::{AgentId, AgentRng, ChoiceId, Rewards, RinkConfig};

use crate::{
    ChoicePolicy, EpsilonGreedy, LearningEngine, LearningError, Outcome, Tally, UniformRandom,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn engine(agents: usize, choices: usize) -> LearningEngine {
    LearningEngine::new(agents, choices, Rewards::default(), EpsilonGreedy::default()).unwrap()
}

fn greedy_engine(agents: usize, choices: usize) -> LearningEngine {
    LearningEngine::new(agents, choices, Rewards::default(), EpsilonGreedy::greedy()).unwrap()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
}

// ── Construction ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod construction_tests {
    use super::*;

    #[test]
    fn zero_choices_rejected() {
        let result = LearningEngine::new(3, 0, Rewards::default(), UniformRandom);
        assert!(result.is_err());
    }

    #[test]
    fn zero_agents_rejected() {
        let result = LearningEngine::new(0, 3, Rewards::default(), UniformRandom);
        assert!(result.is_err());
    }

    #[test]
    fn out_of_range_epsilon_rejected() {
        for epsilon in [f64::NAN, 1.5, -0.1, f64::INFINITY] {
            let result = LearningEngine::new(2, 3, Rewards::default(), EpsilonGreedy::new(epsilon));
            assert!(
                matches!(result, Err(LearningError::Config(_))),
                "epsilon {epsilon} accepted"
            );
        }
    }

    #[test]
    fn bad_tie_tolerance_rejected() {
        for tie_tolerance in [-1e-10, f64::NAN] {
            let policy = EpsilonGreedy { tie_tolerance, ..EpsilonGreedy::default() };
            let result = LearningEngine::new(2, 3, Rewards::default(), policy);
            assert!(result.is_err(), "tie tolerance {tie_tolerance} accepted");
        }
    }

    #[test]
    fn boundary_epsilons_accepted() {
        for epsilon in [0.0, 1.0] {
            let result = LearningEngine::new(2, 3, Rewards::default(), EpsilonGreedy::new(epsilon));
            assert!(result.is_ok(), "epsilon {epsilon} rejected");
        }
    }

    #[test]
    fn fresh_state_is_zeroed() {
        let e = engine(3, 4);
        for agent in AgentId::range(3) {
            assert_eq!(e.propensities(agent), &[0.0; 4]);
            assert_eq!(e.counts(agent), &[0; 4]);
            assert!(e.history(agent).is_empty());
        }
        assert_eq!(e.average_propensities(), vec![0.0; 4]);
    }

    #[test]
    fn from_config_uses_exploration_and_rewards() {
        let config = RinkConfig {
            agent_count:  5,
            choice_count: 3,
            exploration:  0.2,
            rewards:      Rewards { success: 2.0, failure: -1.0 },
            ..RinkConfig::default()
        };
        let e = LearningEngine::from_config(&config).unwrap();
        assert_eq!(e.agent_count(), 5);
        assert_eq!(e.choice_count(), 3);
        assert_eq!(e.policy().epsilon, 0.2);
        assert_eq!(e.rewards().failure, -1.0);
    }
}

// ── Incremental-mean update ───────────────────────────────────────────────────

#[cfg(test)]
mod learn_tests {
    use super::*;

    #[test]
    fn count_tracks_learn_calls() {
        let mut e = engine(1, 3);
        let mut tally = e.new_tally();
        for _ in 0..7 {
            e.learn(AgentId(0), ChoiceId(1), Outcome::Success, &mut tally);
        }
        e.learn(AgentId(0), ChoiceId(2), Outcome::Collision, &mut tally);
        assert_eq!(e.counts(AgentId(0)), &[0, 7, 1]);
    }

    #[test]
    fn constant_reward_is_its_own_mean() {
        let mut e = engine(1, 2);
        let mut tally = e.new_tally();
        for _ in 0..25 {
            e.learn(AgentId(0), ChoiceId(0), Outcome::Collision, &mut tally);
            e.learn(AgentId(0), ChoiceId(1), Outcome::Success, &mut tally);
        }
        assert!(close(e.propensities(AgentId(0))[0], -5.0));
        assert!(close(e.propensities(AgentId(0))[1], 1.0));
    }

    #[test]
    fn propensity_is_running_mean() {
        let mut e = engine(1, 1);
        let mut tally = e.new_tally();
        e.learn(AgentId(0), ChoiceId(0), Outcome::Success, &mut tally);
        assert!(close(e.propensities(AgentId(0))[0], 1.0));
        e.learn(AgentId(0), ChoiceId(0), Outcome::Collision, &mut tally);
        assert!(close(e.propensities(AgentId(0))[0], -2.0));
        e.learn(AgentId(0), ChoiceId(0), Outcome::Success, &mut tally);
        assert!(close(e.propensities(AgentId(0))[0], -1.0));
    }

    #[test]
    fn agents_do_not_share_rows() {
        let mut e = engine(2, 2);
        let mut tally = e.new_tally();
        e.learn(AgentId(0), ChoiceId(1), Outcome::Collision, &mut tally);
        assert_eq!(e.propensities(AgentId(1)), &[0.0, 0.0]);
        assert_eq!(e.counts(AgentId(1)), &[0, 0]);
    }

    #[test]
    fn history_records_choice_and_reward() {
        let mut e = engine(1, 3);
        let mut tally = e.new_tally();
        e.learn(AgentId(0), ChoiceId(2), Outcome::Success, &mut tally);
        e.learn(AgentId(0), ChoiceId(0), Outcome::Collision, &mut tally);
        let h = e.history(AgentId(0));
        assert_eq!(h.len(), 2);
        assert_eq!(h[0].choice, ChoiceId(2));
        assert_eq!(h[0].reward, 1.0);
        assert_eq!(h[1].choice, ChoiceId(0));
        assert_eq!(h[1].reward, -5.0);
    }

    #[test]
    fn custom_rewards_are_used() {
        let mut e =
            LearningEngine::new(1, 1, Rewards { success: 3.0, failure: -0.5 }, UniformRandom)
                .unwrap();
        let mut tally = e.new_tally();
        e.learn(AgentId(0), ChoiceId(0), Outcome::Collision, &mut tally);
        assert!(close(e.propensities(AgentId(0))[0], -0.5));
    }

    #[test]
    fn outcomes_counted_per_choice() {
        let mut e = engine(2, 3);
        let mut tally = e.new_tally();
        e.learn(AgentId(0), ChoiceId(1), Outcome::Success, &mut tally);
        e.learn(AgentId(1), ChoiceId(1), Outcome::Collision, &mut tally);
        e.learn(AgentId(0), ChoiceId(2), Outcome::Collision, &mut tally);
        assert_eq!(tally.successes(), &[0, 1, 0]);
        assert_eq!(tally.collisions(), &[0, 1, 1]);
        assert_eq!(tally.total_collisions(), 2);
        assert_eq!(tally.total_successes(), 1);
    }
}

// ── End-of-sweep snapshots ────────────────────────────────────────────────────

#[cfg(test)]
mod snapshot_tests {
    use super::*;

    fn sweep(e: &mut LearningEngine, tally: &mut Tally, outcome: Outcome) {
        for agent in AgentId::range(e.agent_count()) {
            e.learn(agent, ChoiceId(0), outcome, tally);
        }
    }

    #[test]
    fn one_snapshot_per_sweep() {
        let mut e = engine(4, 2);
        let mut tally = e.new_tally();
        for _ in 0..9 {
            sweep(&mut e, &mut tally, Outcome::Success);
        }
        assert_eq!(tally.snapshot_count(), 9);
    }

    #[test]
    fn only_last_agent_triggers_snapshot() {
        let mut e = engine(3, 2);
        let mut tally = e.new_tally();
        e.learn(AgentId(0), ChoiceId(0), Outcome::Success, &mut tally);
        e.learn(AgentId(1), ChoiceId(0), Outcome::Success, &mut tally);
        assert_eq!(tally.snapshot_count(), 0);
        e.learn(AgentId(2), ChoiceId(1), Outcome::Collision, &mut tally);
        assert_eq!(tally.snapshot_count(), 1);
    }

    #[test]
    fn snapshot_is_population_mean() {
        let mut e = engine(2, 2);
        let mut tally = e.new_tally();
        e.learn(AgentId(0), ChoiceId(0), Outcome::Success, &mut tally);
        e.learn(AgentId(1), ChoiceId(1), Outcome::Collision, &mut tally);
        assert_eq!(tally.average_propensities(), &[vec![0.5, -2.5]]);
        assert_eq!(tally.propensity_series(ChoiceId(1)), vec![-2.5]);
    }

    #[test]
    fn propensity_series_follows_snapshots() {
        let mut e = engine(1, 1);
        let mut tally = e.new_tally();
        sweep(&mut e, &mut tally, Outcome::Success);
        sweep(&mut e, &mut tally, Outcome::Collision);
        sweep(&mut e, &mut tally, Outcome::Collision);
        let series = tally.propensity_series(ChoiceId(0));
        assert_eq!(series.len(), 3);
        assert!(close(series[0], 1.0));
        assert!(close(series[1], -2.0));
        assert!(close(series[2], -3.0));
    }
}

// ── Choice policies ───────────────────────────────────────────────────────────

#[cfg(test)]
mod policy_tests {
    use super::*;

    #[test]
    fn choose_counts_selections() {
        let e = engine(1, 3);
        let mut tally = e.new_tally();
        let mut rng = AgentRng::new(1, AgentId(0));
        for _ in 0..50 {
            e.choose(AgentId(0), &mut rng, &mut tally);
        }
        assert_eq!(tally.choices().iter().sum::<u64>(), 50);
    }

    #[test]
    fn fresh_agent_chooses_uniformly() {
        // All propensities tie at zero, so pure exploitation is a uniform
        // draw over the tie set.
        let e = greedy_engine(1, 4);
        let mut tally = e.new_tally();
        let mut rng = AgentRng::new(123, AgentId(0));
        for _ in 0..4_000 {
            e.choose(AgentId(0), &mut rng, &mut tally);
        }
        for &n in tally.choices() {
            assert!((850..=1150).contains(&n), "counts not uniform: {:?}", tally.choices());
        }
    }

    #[test]
    fn greedy_picks_the_best_choice() {
        let mut e = greedy_engine(1, 5);
        let mut tally = e.new_tally();
        e.learn(AgentId(0), ChoiceId(3), Outcome::Success, &mut tally);
        let mut rng = AgentRng::new(5, AgentId(0));
        for _ in 0..200 {
            assert_eq!(e.choose(AgentId(0), &mut rng, &mut tally), ChoiceId(3));
        }
    }

    #[test]
    fn greedy_avoids_penalised_choices() {
        let mut e = greedy_engine(1, 3);
        let mut tally = e.new_tally();
        e.learn(AgentId(0), ChoiceId(0), Outcome::Collision, &mut tally);
        let mut rng = AgentRng::new(5, AgentId(0));
        for _ in 0..200 {
            assert_ne!(e.choose(AgentId(0), &mut rng, &mut tally), ChoiceId(0));
        }
    }

    #[test]
    fn near_ties_are_broken_randomly() {
        let policy = EpsilonGreedy::greedy();
        let row = [1.0, 1.0 + 1e-12, 0.5];
        let mut rng = AgentRng::new(9, AgentId(0));
        let mut seen = [0u32; 3];
        for _ in 0..400 {
            seen[policy.select(&row, &mut rng).index()] += 1;
        }
        assert!(seen[0] > 100 && seen[1] > 100, "tie set not shared: {seen:?}");
        assert_eq!(seen[2], 0);
    }

    #[test]
    fn differences_above_tolerance_are_not_ties() {
        let policy = EpsilonGreedy::greedy();
        let row = [1.0, 1.0 + 1e-6];
        let mut rng = AgentRng::new(9, AgentId(0));
        for _ in 0..100 {
            assert_eq!(policy.select(&row, &mut rng), ChoiceId(1));
        }
    }

    #[test]
    fn exploration_sometimes_leaves_the_best_choice() {
        let policy = EpsilonGreedy::new(0.05);
        let row = [5.0, 0.0, 0.0, 0.0];
        let mut rng = AgentRng::new(77, AgentId(0));
        let off_best = (0..10_000)
            .filter(|_| policy.select(&row, &mut rng) != ChoiceId(0))
            .count();
        // Expected 10 000 × 0.05 × 3/4 = 375.
        assert!((250..=500).contains(&off_best), "got {off_best}");
    }

    #[test]
    fn uniform_random_ignores_propensities() {
        let row = [100.0, -100.0];
        let mut rng = AgentRng::new(3, AgentId(0));
        let picked_low = (0..1_000)
            .filter(|_| UniformRandom.select(&row, &mut rng) == ChoiceId(1))
            .count();
        assert!((400..=600).contains(&picked_low), "got {picked_low}");
    }

    #[test]
    fn selections_are_in_range() {
        let policy = EpsilonGreedy::new(0.5);
        let row = [0.0; 6];
        let mut rng = AgentRng::new(11, AgentId(0));
        for _ in 0..1_000 {
            assert!(policy.select(&row, &mut rng).index() < 6);
        }
    }
}

#[cfg(test)]
mod outcome_tests {
    use super::*;

    #[test]
    fn from_moved() {
        assert_eq!(Outcome::from_moved(true), Outcome::Success);
        assert_eq!(Outcome::from_moved(false), Outcome::Collision);
        assert!(Outcome::Success.is_success());
        assert!(!Outcome::Collision.is_success());
    }

    #[test]
    fn default_rewards_are_asymmetric() {
        let r = Rewards::default();
        assert_eq!(Outcome::Success.reward(&r), 1.0);
        assert_eq!(Outcome::Collision.reward(&r), -5.0);
    }
}
