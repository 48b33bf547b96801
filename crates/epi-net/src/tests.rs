//! Unit and integration tests for epi-net.

use epi_core::{Category, PersonId, SimRng, StateId, StateSet};
use indexmap::IndexMap;

use crate::{
    CategoricalDistribution, DegreeSpec, DegreeTarget, FriendshipTable, Individual, NetError,
    Network, NetworkBuilder,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// The four composite categories from the canonical configuration:
/// faculty × year.
fn four_categories() -> Vec<Category> {
    vec![
        Category::new(["SCI", "1"]),
        Category::new(["SCI", "2"]),
        Category::new(["HUM", "1"]),
        Category::new(["HUM", "2"]),
    ]
}

fn equal_distribution(categories: &[Category]) -> CategoricalDistribution {
    let p = 1.0 / categories.len() as f64;
    CategoricalDistribution::from_pairs(categories.iter().cloned().map(|c| (c, p))).unwrap()
}

/// Network of `n` single-category individuals with no edges, for hand-built
/// topologies.
fn blank_network(n: usize, symmetric: bool) -> Network {
    let category = Category::single("A");
    let ids: Vec<PersonId> = (0..n).map(|i| PersonId(i as u32)).collect();
    let mut partition = IndexMap::new();
    partition.insert(category.clone(), ids.clone());
    Network {
        individuals: ids
            .iter()
            .map(|&id| Individual::new(id, category.clone(), StateId::SUSCEPTIBLE))
            .collect(),
        partition,
        infectious: Vec::new(),
        states: StateSet::sir(),
        symmetric,
    }
}

/// Hand-built two-category network: individual 0 (cat A) linked to 1 (cat A)
/// and 2 (cat B), symmetric.
fn mixed_pair_network() -> Network {
    let cat_a = Category::single("A");
    let cat_b = Category::single("B");
    let mut partition = IndexMap::new();
    partition.insert(cat_a.clone(), vec![PersonId(0), PersonId(1)]);
    partition.insert(cat_b.clone(), vec![PersonId(2)]);
    let mut network = Network {
        individuals: vec![
            Individual::new(PersonId(0), cat_a.clone(), StateId::SUSCEPTIBLE),
            Individual::new(PersonId(1), cat_a, StateId::SUSCEPTIBLE),
            Individual::new(PersonId(2), cat_b, StateId::SUSCEPTIBLE),
        ],
        partition,
        infectious: Vec::new(),
        states: StateSet::sir(),
        symmetric: true,
    };
    network.add_edge(PersonId(0), PersonId(1), 1.0);
    network.add_edge(PersonId(0), PersonId(2), 1.0);
    network
}

// ── CategoricalDistribution ───────────────────────────────────────────────────

#[cfg(test)]
mod distribution {
    use super::*;

    #[test]
    fn must_sum_to_one() {
        let result = CategoricalDistribution::from_pairs([
            (Category::single("A"), 0.5),
            (Category::single("B"), 0.4),
        ]);
        assert!(matches!(result, Err(NetError::DistributionSum { .. })));
    }

    #[test]
    fn tolerates_tiny_rounding() {
        let result = CategoricalDistribution::from_pairs([
            (Category::single("A"), 0.1 + 0.2),
            (Category::single("B"), 0.7),
        ]);
        assert!(result.is_ok());
    }

    #[test]
    fn negative_probability_rejected() {
        let result = CategoricalDistribution::from_pairs([
            (Category::single("A"), -0.5),
            (Category::single("B"), 1.5),
        ]);
        assert!(matches!(result, Err(NetError::Config(_))));
    }

    #[test]
    fn empty_rejected() {
        assert!(CategoricalDistribution::new(Vec::new()).is_err());
    }

    #[test]
    fn duplicate_category_rejected() {
        let result = CategoricalDistribution::from_pairs([
            (Category::single("A"), 0.5),
            (Category::single("A"), 0.5),
        ]);
        assert!(matches!(result, Err(NetError::Config(_))));
    }

    #[test]
    fn single_category_always_selected() {
        let dist =
            CategoricalDistribution::from_pairs([(Category::single("A"), 1.0)]).unwrap();
        let mut rng = SimRng::new(5);
        for _ in 0..50 {
            assert_eq!(dist.sample(&mut rng), &Category::single("A"));
        }
    }

    #[test]
    fn zero_probability_category_never_selected() {
        // A leading zero-probability category: the lower-inclusive boundary
        // rule sends every draw (including 0.0) past it.
        let dist = CategoricalDistribution::from_pairs([
            (Category::single("never"), 0.0),
            (Category::single("always"), 1.0),
        ])
        .unwrap();
        let mut rng = SimRng::new(11);
        for _ in 0..200 {
            assert_eq!(dist.sample(&mut rng), &Category::single("always"));
        }
    }

    #[test]
    fn zero_probability_category_still_declared() {
        let dist = CategoricalDistribution::from_pairs([
            (Category::single("A"), 1.0),
            (Category::single("B"), 0.0),
        ])
        .unwrap();
        assert!(dist.contains(&Category::single("B")));
        assert_eq!(dist.len(), 2);
    }
}

// ── Degree targets ────────────────────────────────────────────────────────────

#[cfg(test)]
mod degree {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn fixed_consumes_no_draws() {
        let mut a = SimRng::new(21);
        let mut b = SimRng::new(21);
        let target = DegreeTarget::Fixed(5);
        for _ in 0..10 {
            assert_eq!(target.realize(&mut a), 5);
        }
        let x: u64 = a.random();
        let y: u64 = b.random();
        assert_eq!(x, y, "Fixed targets must not advance the stream");
    }

    #[test]
    fn poisson_target_roughly_respects_mean() {
        let mut rng = SimRng::new(8);
        let target = DegreeTarget::Poisson(6.0);
        let total: u64 = (0..2000).map(|_| u64::from(target.realize(&mut rng))).sum();
        let mean = total as f64 / 2000.0;
        assert!((mean - 6.0).abs() < 0.3, "sample mean {mean} too far from 6.0");
    }

    #[test]
    fn custom_sampler_is_called() {
        let mut rng = SimRng::new(0);
        let target = DegreeTarget::Custom(Arc::new(|_rng: &mut SimRng| 7));
        assert_eq!(target.realize(&mut rng), 7);
    }

    #[test]
    fn per_category_missing_key() {
        let mut table = IndexMap::new();
        table.insert(Category::single("A"), DegreeTarget::Fixed(3));
        let spec = DegreeSpec::PerCategory(table);
        assert!(spec.target_for(&Category::single("A")).is_ok());
        assert!(matches!(
            spec.target_for(&Category::single("B")),
            Err(NetError::MissingDegree(_))
        ));
    }

    #[test]
    fn uniform_applies_to_every_category() {
        let spec = DegreeSpec::fixed(4);
        for category in four_categories() {
            assert!(spec.target_for(&category).is_ok());
        }
    }
}

// ── Friendship table ──────────────────────────────────────────────────────────

#[cfg(test)]
mod friendship {
    use super::*;

    #[test]
    fn forward_lookup() {
        let mut table = FriendshipTable::new();
        table.insert(Category::single("A"), Category::single("B"), 0.4);
        assert_eq!(
            table.lookup(&Category::single("A"), &Category::single("B"), false),
            Some(0.4)
        );
    }

    #[test]
    fn reverse_lookup_only_when_symmetric() {
        let mut table = FriendshipTable::new();
        table.insert(Category::single("A"), Category::single("B"), 0.4);
        assert_eq!(
            table.lookup(&Category::single("B"), &Category::single("A"), true),
            Some(0.4)
        );
        assert_eq!(
            table.lookup(&Category::single("B"), &Category::single("A"), false),
            None
        );
    }

    #[test]
    fn forward_entry_wins_over_reverse() {
        let mut table = FriendshipTable::new();
        table.insert(Category::single("A"), Category::single("B"), 0.4);
        table.insert(Category::single("B"), Category::single("A"), 0.9);
        assert_eq!(
            table.lookup(&Category::single("A"), &Category::single("B"), true),
            Some(0.4)
        );
    }

    #[test]
    fn uniform_covers_all_unordered_pairs() {
        let categories = four_categories();
        let table = FriendshipTable::uniform(&categories, 0.3);
        // 4 self-pairs + 6 cross pairs.
        assert_eq!(table.len(), 10);
        for a in &categories {
            for b in &categories {
                assert_eq!(table.lookup(a, b, true), Some(0.3), "missing ({a}, {b})");
            }
        }
    }
}

// ── Partitioned synthesis ─────────────────────────────────────────────────────

#[cfg(test)]
mod synthesis {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn partition_counts_sum_to_population() {
        let categories = four_categories();
        let mut rng = SimRng::new(42);
        let network = NetworkBuilder::new(200)
            .distribution(equal_distribution(&categories))
            .degrees(DegreeSpec::fixed(0))
            .build(&mut rng)
            .unwrap();

        let total: usize = network.partition_counts().iter().map(|(_, n)| n).sum();
        assert_eq!(total, 200);
        for person in &network.individuals {
            assert!(categories.contains(&person.category));
        }
        // Declared order is preserved in the partition index.
        let declared: Vec<&Category> = network.partition.keys().collect();
        assert_eq!(declared, categories.iter().collect::<Vec<_>>());
    }

    #[test]
    fn zero_degree_target_produces_no_edges() {
        let categories = four_categories();
        let mut rng = SimRng::new(1);
        let network = NetworkBuilder::new(50)
            .distribution(equal_distribution(&categories))
            .degrees(DegreeSpec::fixed(0))
            .build(&mut rng)
            .unwrap();
        assert_eq!(network.edge_count(), 0);
    }

    #[test]
    fn symmetric_edges_are_mirrored() {
        let categories = four_categories();
        let mut rng = SimRng::new(7);
        let network = NetworkBuilder::new(60)
            .distribution(equal_distribution(&categories))
            .degrees(DegreeSpec::poisson(4.0))
            .friendships(FriendshipTable::uniform(&categories, 0.8))
            .build(&mut rng)
            .unwrap();

        assert!(network.edge_count() > 0);
        for person in &network.individuals {
            for (&other, &weight) in &person.contacts {
                let reciprocal = network.individuals[other.index()].contacts.get(&person.id);
                assert_eq!(
                    reciprocal,
                    Some(&weight),
                    "edge {} → {} has no mirror",
                    person.id,
                    other
                );
            }
        }
    }

    #[test]
    fn asymmetric_fixed_target_caps_initiated_degree() {
        // Without mirroring, an individual's degree only grows when it is
        // the initiator, so the advisory target becomes a hard cap.
        let category = Category::single("A");
        let mut rng = SimRng::new(13);
        let mut table = FriendshipTable::new();
        table.insert(category.clone(), category.clone(), 1.0);
        let network = NetworkBuilder::new(80)
            .distribution(
                CategoricalDistribution::from_pairs([(category, 1.0)]).unwrap(),
            )
            .degrees(DegreeSpec::fixed(3))
            .friendships(table)
            .symmetric(false)
            .build(&mut rng)
            .unwrap();

        assert!(network.edge_count() > 0);
        for person in &network.individuals {
            assert!(person.degree() <= 3, "{} exceeds its target", person.id);
        }
    }

    #[test]
    fn zero_friendship_probability_terminates_normally() {
        let category = Category::single("A");
        let mut table = FriendshipTable::new();
        table.insert(category.clone(), category.clone(), 0.0);
        let mut rng = SimRng::new(3);
        let network = NetworkBuilder::new(30)
            .distribution(
                CategoricalDistribution::from_pairs([(category, 1.0)]).unwrap(),
            )
            .degrees(DegreeSpec::fixed(2))
            .friendships(table)
            .build(&mut rng)
            .unwrap();
        assert_eq!(network.edge_count(), 0);
    }

    #[test]
    fn saturated_config_exhausts_attempts() {
        // Two individuals, target degree 1, certain friendship: the first
        // edge saturates both, every further draw is a degree skip, and the
        // budget of 2 can never complete.
        let category = Category::single("A");
        let mut table = FriendshipTable::new();
        table.insert(category.clone(), category.clone(), 1.0);
        let mut rng = SimRng::new(99);
        let result = NetworkBuilder::new(2)
            .distribution(
                CategoricalDistribution::from_pairs([(category, 1.0)]).unwrap(),
            )
            .degrees(DegreeSpec::fixed(1))
            .friendships(table)
            .build(&mut rng);
        assert!(matches!(result, Err(NetError::AttemptsExhausted { .. })));
    }

    #[test]
    fn missing_friendship_pair_errors_when_asymmetric() {
        // Only the (A, A) pair is declared; the first eligible candidate
        // pair touching category B has no probability to consult.
        let cat_a = Category::single("A");
        let cat_b = Category::single("B");
        let mut table = FriendshipTable::new();
        table.insert(cat_a.clone(), cat_a.clone(), 1.0);
        let mut rng = SimRng::new(17);
        let result = NetworkBuilder::new(40)
            .distribution(
                CategoricalDistribution::from_pairs([(cat_a, 0.5), (cat_b, 0.5)]).unwrap(),
            )
            .degrees(DegreeSpec::fixed(2))
            .friendships(table)
            .symmetric(false)
            .build(&mut rng);
        assert!(matches!(result, Err(NetError::MissingFriendship(_, _))));
    }

    #[test]
    fn missing_degree_category_errors() {
        let cat_a = Category::single("A");
        let cat_b = Category::single("B");
        let mut targets = IndexMap::new();
        targets.insert(cat_a.clone(), DegreeTarget::Fixed(2));
        let mut rng = SimRng::new(0);
        let result = NetworkBuilder::new(10)
            .distribution(
                CategoricalDistribution::from_pairs([(cat_a, 0.5), (cat_b, 0.5)]).unwrap(),
            )
            .degrees(DegreeSpec::PerCategory(targets))
            .build(&mut rng);
        assert!(matches!(result, Err(NetError::MissingDegree(_))));
    }

    #[test]
    fn undeclared_degree_category_rejected() {
        let cat_a = Category::single("A");
        let mut targets = IndexMap::new();
        targets.insert(cat_a.clone(), DegreeTarget::Fixed(2));
        targets.insert(Category::single("ghost"), DegreeTarget::Fixed(2));
        let mut rng = SimRng::new(0);
        let result = NetworkBuilder::new(10)
            .distribution(CategoricalDistribution::from_pairs([(cat_a, 1.0)]).unwrap())
            .degrees(DegreeSpec::PerCategory(targets))
            .build(&mut rng);
        assert!(matches!(result, Err(NetError::Config(_))));
    }

    #[test]
    fn undeclared_friendship_category_rejected() {
        let cat_a = Category::single("A");
        let mut table = FriendshipTable::new();
        table.insert(cat_a.clone(), Category::single("ghost"), 0.5);
        let mut rng = SimRng::new(0);
        let result = NetworkBuilder::new(10)
            .distribution(CategoricalDistribution::from_pairs([(cat_a, 1.0)]).unwrap())
            .degrees(DegreeSpec::fixed(0))
            .friendships(table)
            .build(&mut rng);
        assert!(matches!(result, Err(NetError::Config(_))));
    }

    #[test]
    fn out_of_range_friendship_probability_rejected() {
        let cat_a = Category::single("A");
        let mut table = FriendshipTable::new();
        table.insert(cat_a.clone(), cat_a.clone(), 1.5);
        let mut rng = SimRng::new(0);
        let result = NetworkBuilder::new(10)
            .distribution(CategoricalDistribution::from_pairs([(cat_a, 1.0)]).unwrap())
            .degrees(DegreeSpec::fixed(1))
            .friendships(table)
            .build(&mut rng);
        assert!(matches!(result, Err(NetError::Config(_))));
    }

    #[test]
    fn population_of_one_with_positive_budget_rejected() {
        let cat_a = Category::single("A");
        let mut rng = SimRng::new(0);
        let result = NetworkBuilder::new(1)
            .distribution(CategoricalDistribution::from_pairs([(cat_a.clone(), 1.0)]).unwrap())
            .degrees(DegreeSpec::fixed(1))
            .friendships(FriendshipTable::uniform(&[cat_a], 1.0))
            .build(&mut rng);
        assert!(matches!(result, Err(NetError::Config(_))));
    }

    #[test]
    fn required_inputs_enforced() {
        let mut rng = SimRng::new(0);
        assert!(NetworkBuilder::new(0).build(&mut rng).is_err());
        assert!(NetworkBuilder::new(10).build(&mut rng).is_err());
        assert!(
            NetworkBuilder::new(10)
                .distribution(
                    CategoricalDistribution::from_pairs([(Category::single("A"), 1.0)]).unwrap()
                )
                .build(&mut rng)
                .is_err()
        );
    }

    #[test]
    fn mixed_target_kinds_build() {
        // Fixed, Poisson, and closure targets side by side, as in the
        // canonical configuration.
        let categories = four_categories();
        let mut targets = IndexMap::new();
        targets.insert(categories[0].clone(), DegreeTarget::Fixed(5));
        targets.insert(categories[1].clone(), DegreeTarget::Fixed(5));
        targets.insert(categories[2].clone(), DegreeTarget::Custom(Arc::new(|_| 5)));
        targets.insert(categories[3].clone(), DegreeTarget::Poisson(5.0));
        let mut rng = SimRng::new(4);
        let network = NetworkBuilder::new(100)
            .distribution(equal_distribution(&categories))
            .degrees(DegreeSpec::PerCategory(targets))
            .friendships(FriendshipTable::uniform(&categories, 0.5))
            .build(&mut rng)
            .unwrap();
        assert_eq!(network.population(), 100);
        assert!(network.edge_count() > 0);
    }

    #[test]
    fn same_seed_reproduces_network() {
        fn edge_list(network: &Network) -> Vec<(u32, u32)> {
            network
                .individuals
                .iter()
                .flat_map(|p| p.contacts.keys().map(move |o| (p.id.0, o.0)))
                .collect()
        }

        let categories = four_categories();
        let build = |seed: u64| {
            let mut rng = SimRng::new(seed);
            NetworkBuilder::new(80)
                .distribution(equal_distribution(&categories))
                .degrees(DegreeSpec::poisson(4.0))
                .friendships(FriendshipTable::uniform(&categories, 0.6))
                .build(&mut rng)
                .unwrap()
        };

        let first = build(1234);
        let second = build(1234);
        assert_eq!(edge_list(&first), edge_list(&second));
        let cats = |n: &Network| {
            n.individuals.iter().map(|p| p.category.clone()).collect::<Vec<_>>()
        };
        assert_eq!(cats(&first), cats(&second));
    }
}

// ── Uniform/Poisson synthesis ─────────────────────────────────────────────────

#[cfg(test)]
mod uniform_random {
    use super::*;

    #[test]
    fn all_edges_reciprocal() {
        let categories = four_categories();
        let mut rng = SimRng::new(6);
        let network =
            Network::uniform_random(50, 3.0, &categories, StateSet::sir(), &mut rng).unwrap();

        assert!(network.symmetric);
        assert!(network.edge_count() > 0);
        for person in &network.individuals {
            for &other in person.contacts.keys() {
                assert!(
                    network.individuals[other.index()].contacts.contains_key(&person.id),
                    "edge {} → {} has no reciprocal",
                    person.id,
                    other
                );
            }
        }
    }

    #[test]
    fn no_self_loops() {
        let categories = four_categories();
        let mut rng = SimRng::new(2);
        let network =
            Network::uniform_random(40, 5.0, &categories, StateSet::sir(), &mut rng).unwrap();
        for person in &network.individuals {
            assert!(!person.contacts.contains_key(&person.id));
        }
    }

    #[test]
    fn categories_drawn_from_list() {
        let categories = four_categories();
        let mut rng = SimRng::new(10);
        let network =
            Network::uniform_random(120, 1.0, &categories, StateSet::sir(), &mut rng).unwrap();
        for person in &network.individuals {
            assert!(categories.contains(&person.category));
        }
        let total: usize = network.partition_counts().iter().map(|(_, n)| n).sum();
        assert_eq!(total, 120);
    }

    #[test]
    fn zero_mean_produces_no_edges() {
        let categories = four_categories();
        let mut rng = SimRng::new(0);
        let network =
            Network::uniform_random(20, 0.0, &categories, StateSet::sir(), &mut rng).unwrap();
        assert_eq!(network.edge_count(), 0);
    }

    #[test]
    fn invalid_inputs_rejected() {
        let categories = four_categories();
        let mut rng = SimRng::new(0);
        assert!(Network::uniform_random(0, 3.0, &categories, StateSet::sir(), &mut rng).is_err());
        assert!(Network::uniform_random(10, 3.0, &[], StateSet::sir(), &mut rng).is_err());
        assert!(
            Network::uniform_random(10, -1.0, &categories, StateSet::sir(), &mut rng).is_err()
        );
        let dupes = vec![Category::single("A"), Category::single("A")];
        assert!(Network::uniform_random(10, 3.0, &dupes, StateSet::sir(), &mut rng).is_err());
    }
}

// ── Network operations ────────────────────────────────────────────────────────

#[cfg(test)]
mod network_ops {
    use super::*;

    #[test]
    fn add_edge_rejects_self_loop() {
        let mut network = blank_network(3, true);
        network.add_edge(PersonId(1), PersonId(1), 1.0);
        assert_eq!(network.edge_count(), 0);
    }

    #[test]
    fn remove_edge_mirrors_when_symmetric() {
        let mut network = blank_network(3, true);
        network.add_edge(PersonId(0), PersonId(1), 1.0);
        assert_eq!(network.edge_count(), 2);
        assert!(network.remove_edge(PersonId(0), PersonId(1)));
        assert_eq!(network.edge_count(), 0);
    }

    #[test]
    fn remove_edge_one_sided_when_asymmetric() {
        let mut network = blank_network(3, false);
        network.add_edge(PersonId(0), PersonId(1), 1.0);
        network.add_edge(PersonId(1), PersonId(0), 1.0);
        assert!(network.remove_edge(PersonId(0), PersonId(1)));
        assert_eq!(network.degree(PersonId(0)), 0);
        assert_eq!(network.degree(PersonId(1)), 1, "reverse edge must survive");
    }

    #[test]
    fn remove_missing_edge_returns_false() {
        let mut network = blank_network(3, true);
        assert!(!network.remove_edge(PersonId(0), PersonId(2)));
    }

    #[test]
    fn duplicate_contact_deduplicates() {
        let mut network = blank_network(2, true);
        network.add_edge(PersonId(0), PersonId(1), 1.0);
        network.add_edge(PersonId(0), PersonId(1), 2.0);
        assert_eq!(network.degree(PersonId(0)), 1);
        assert_eq!(
            network.individuals[0].contacts.get(&PersonId(1)),
            Some(&2.0)
        );
    }

    #[test]
    fn contact_categories_census() {
        let network = mixed_pair_network();
        let census = network.contact_categories(PersonId(0));
        assert_eq!(census.get(&Category::single("A")), Some(&1));
        assert_eq!(census.get(&Category::single("B")), Some(&1));
        assert!(network.contact_categories(PersonId(1)).len() == 1);
    }

    #[test]
    fn clone_is_a_deep_copy() {
        let original = mixed_pair_network();
        let mut copy = original.clone();

        copy.remove_edge(PersonId(0), PersonId(1));
        copy.individuals[2].state = StateId::INFECTIOUS;
        copy.infectious.push(PersonId(2));

        assert_eq!(original.degree(PersonId(0)), 2);
        assert_eq!(original.individuals[2].state, StateId::SUSCEPTIBLE);
        assert!(original.infectious.is_empty());
    }
}

// ── Intervention operators ────────────────────────────────────────────────────

#[cfg(test)]
mod interventions {
    use super::*;
    use crate::{remove_cross_category_edges, remove_random_edges};

    #[test]
    fn zero_rate_removes_nothing() {
        let mut network = mixed_pair_network();
        let before = network.edge_count();
        let mut rng = SimRng::new(1);
        assert_eq!(remove_random_edges(&mut network, 0.0, &mut rng), 0);
        assert_eq!(remove_cross_category_edges(&mut network, 0.0, &mut rng), 0);
        assert_eq!(network.edge_count(), before);
    }

    #[test]
    fn removal_events_counted_once_per_pair() {
        let categories = four_categories();
        let mut rng = SimRng::new(33);
        let mut network =
            Network::uniform_random(40, 4.0, &categories, StateSet::sir(), &mut rng).unwrap();

        let before = network.edge_count();
        let removed = remove_random_edges(&mut network, 1.0, &mut rng);
        // Symmetric network: each removal event drops two directed edges.
        assert_eq!(network.edge_count(), before - 2 * removed);
    }

    #[test]
    fn huge_rate_empties_the_network() {
        let categories = four_categories();
        let mut rng = SimRng::new(12);
        let mut network =
            Network::uniform_random(30, 3.0, &categories, StateSet::sir(), &mut rng).unwrap();

        let undirected = network.edge_count() / 2;
        let removed = remove_random_edges(&mut network, 500.0, &mut rng);
        assert_eq!(removed, undirected);
        assert_eq!(network.edge_count(), 0);
    }

    #[test]
    fn preferential_spares_same_category_edges() {
        let mut network = mixed_pair_network();
        let mut rng = SimRng::new(5);
        let removed = remove_cross_category_edges(&mut network, 500.0, &mut rng);

        // Only the A–B edge goes; the A–A edge is sampled but spared.
        assert_eq!(removed, 1);
        assert!(network.individuals[0].contacts.contains_key(&PersonId(1)));
        assert!(network.individuals[1].contacts.contains_key(&PersonId(0)));
        assert!(!network.individuals[0].contacts.contains_key(&PersonId(2)));
        assert!(!network.individuals[2].contacts.contains_key(&PersonId(0)));
    }
}
