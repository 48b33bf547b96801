//! Fluent builder for partitioned network synthesis.

use epi_core::{PersonId, SimRng, StateId, StateSet};
use indexmap::IndexMap;

use crate::{
    CategoricalDistribution, DegreeSpec, FriendshipTable, Individual, NetError, NetResult, Network,
    individual::DEFAULT_WEIGHT,
};

/// Attempt guard multiplier: synthesis fails once the distinct-pair draws
/// exceed this multiple of the edge budget.
const ATTEMPT_MULTIPLIER: u64 = 5;

/// Fluent builder for [`Network`] via partitioned rejection sampling.
///
/// # Required inputs
///
/// - population size (in [`new`](Self::new))
/// - [`CategoricalDistribution`] — how the population partitions
/// - [`DegreeSpec`] — per-category (or uniform) target degrees
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default            |
/// |-------------------|--------------------|
/// | `.friendships(t)` | empty table        |
/// | `.symmetric(f)`   | `true`             |
/// | `.states(s)`      | `StateSet::sir()`  |
///
/// # Example
///
/// ```rust,ignore
/// let network = NetworkBuilder::new(500)
///     .distribution(distribution)
///     .degrees(DegreeSpec::poisson(5.0))
///     .friendships(friendships)
///     .build(&mut rng)?;
/// ```
///
/// # Algorithm
///
/// `build` partitions all individuals, computes an edge budget as the sum
/// over declared categories of member count × realized target degree, then
/// repeatedly draws candidate pairs uniformly from the whole population:
/// a pair whose initiator is still under its degree target consumes one
/// budget unit and creates the edge with the pair's friendship probability.
/// The result is a rejection-sampled approximation of the targets weighted
/// by category affinity, not an exact configuration-model realization.
pub struct NetworkBuilder {
    population:   usize,
    distribution: Option<CategoricalDistribution>,
    degrees:      Option<DegreeSpec>,
    friendships:  FriendshipTable,
    symmetric:    bool,
    states:       StateSet,
}

impl NetworkBuilder {
    /// Create a builder for a population of the given size.
    pub fn new(population: usize) -> Self {
        Self {
            population,
            distribution: None,
            degrees:      None,
            friendships:  FriendshipTable::new(),
            symmetric:    true,
            states:       StateSet::sir(),
        }
    }

    /// Supply the categorical distribution the population partitions by.
    pub fn distribution(mut self, distribution: CategoricalDistribution) -> Self {
        self.distribution = Some(distribution);
        self
    }

    /// Supply the degree targets.
    pub fn degrees(mut self, degrees: DegreeSpec) -> Self {
        self.degrees = Some(degrees);
        self
    }

    /// Supply the category-pair friendship probabilities.
    ///
    /// If not called, the table is empty and any eligible candidate pair
    /// fails with [`NetError::MissingFriendship`] — fine only when the edge
    /// budget is zero.
    pub fn friendships(mut self, friendships: FriendshipTable) -> Self {
        self.friendships = friendships;
        self
    }

    /// Whether edges are mirrored (default `true`).
    pub fn symmetric(mut self, symmetric: bool) -> Self {
        self.symmetric = symmetric;
        self
    }

    /// Supply the state set (default [`StateSet::sir`]).
    pub fn states(mut self, states: StateSet) -> Self {
        self.states = states;
        self
    }

    /// Validate inputs, partition the population, and synthesize the edges.
    pub fn build(self, rng: &mut SimRng) -> NetResult<Network> {
        let NetworkBuilder {
            population,
            distribution,
            degrees,
            friendships,
            symmetric,
            states,
        } = self;

        // ── Validate configuration ────────────────────────────────────────
        if population == 0 {
            return Err(NetError::Config("population must be positive".to_string()));
        }
        let distribution = distribution.ok_or_else(|| {
            NetError::Config("a categorical distribution is required".to_string())
        })?;
        let degrees = degrees
            .ok_or_else(|| NetError::Config("a degree specification is required".to_string()))?;

        // Every declared category must resolve to a validated target.
        match &degrees {
            DegreeSpec::Uniform(target) => target.validate()?,
            DegreeSpec::PerCategory(table) => {
                for (category, target) in table {
                    if !distribution.contains(category) {
                        return Err(NetError::Config(format!(
                            "degree target references undeclared category {category}"
                        )));
                    }
                    target.validate()?;
                }
            }
        }
        for (category, _) in distribution.iter() {
            degrees.target_for(category)?;
        }

        // Friendship probabilities must be in range and reference declared
        // categories only.
        for (a, b, p) in friendships.iter() {
            if !p.is_finite() || !(0.0..=1.0).contains(&p) {
                return Err(NetError::Config(format!(
                    "friendship probability {p} for ({a}, {b}) is not in [0, 1]"
                )));
            }
            for category in [a, b] {
                if !distribution.contains(category) {
                    return Err(NetError::Config(format!(
                        "friendship table references undeclared category {category}"
                    )));
                }
            }
        }

        // ── Partition the population ──────────────────────────────────────
        let mut partition: IndexMap<_, Vec<PersonId>> = distribution
            .iter()
            .map(|(category, _)| (category.clone(), Vec::new()))
            .collect();
        let mut individuals = Vec::with_capacity(population);
        for i in 0..population {
            let id = PersonId(i as u32);
            let category = distribution.sample(rng).clone();
            partition.entry(category.clone()).or_default().push(id);
            individuals.push(Individual::new(id, category, StateId::SUSCEPTIBLE));
        }

        // ── Edge budget ───────────────────────────────────────────────────
        //
        // Random targets are realized once per declared category here
        // (empty categories included), and realized again per candidate
        // pair in the loop below.
        let mut budget: u64 = 0;
        for (category, _) in distribution.iter() {
            let members = partition[category].len() as u64;
            let target = degrees.target_for(category)?.realize(rng);
            budget += u64::from(target) * members;
        }
        if budget > 0 && population < 2 {
            return Err(NetError::Config(
                "population of 1 cannot form edges (positive edge budget)".to_string(),
            ));
        }

        let mut network = Network {
            individuals,
            partition,
            infectious: Vec::new(),
            states,
            symmetric,
        };

        // ── Rejection-sampling edge loop ──────────────────────────────────
        //
        // `completed` counts budget-consuming attempts: distinct pair,
        // initiator under target, friendship resolved, coin flipped —
        // whether or not the coin created the edge.  `attempts` counts
        // every distinct-pair draw and guards against degenerate or
        // unsatisfiable configurations.
        let mut attempts: u64 = 0;
        let mut completed: u64 = 0;
        while completed < budget {
            let a = rng.gen_range(0..population);
            let b = rng.gen_range(0..population);
            if a == b {
                continue;
            }
            attempts += 1;
            if attempts > budget * ATTEMPT_MULTIPLIER {
                return Err(NetError::AttemptsExhausted { attempts, budget });
            }

            let initiator = &network.individuals[a];
            let target = degrees.target_for(&initiator.category)?.realize(rng);
            if initiator.degree() >= target as usize {
                continue;
            }

            let other = &network.individuals[b];
            let p = friendships
                .lookup(&initiator.category, &other.category, symmetric)
                .ok_or_else(|| {
                    NetError::MissingFriendship(initiator.category.clone(), other.category.clone())
                })?;
            if rng.uniform() < p {
                network.add_edge(PersonId(a as u32), PersonId(b as u32), DEFAULT_WEIGHT);
            }
            completed += 1;
        }

        Ok(network)
    }
}
