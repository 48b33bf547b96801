//! The `Epidemic` struct and its day loop.

use epi_core::{PersonId, SimRng, StateId};
use epi_net::Network;

use crate::{CurveRecorder, DayCount, EpidemicParams, RunObserver, SimError, SimResult};

/// Number of extra recovery-threshold days drawn uniformly each check.
const RECOVERY_JITTER_DAYS: u32 = 5;

// ── Stop reason ───────────────────────────────────────────────────────────────

/// Why a [`Epidemic::run_days`] loop returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The requested span of days was simulated.
    Completed,
    /// The active infectious count exceeded `params.infection_ceiling`.
    CeilingExceeded,
}

// ── Epidemic ──────────────────────────────────────────────────────────────────

/// The epidemic engine.
///
/// Owns a [`Network`] and drives the three-phase day loop:
///
/// 1. **Transmission**: each actively infectious person offers infection to
///    every susceptible contact with probability
///    `transmission_rate × edge weight`.  Newly infected people flip to the
///    infectious state immediately but do not transmit until activated.
/// 2. **Recovery**: the same person then draws a recovery threshold of
///    `Poisson(recovery_days) + Uniform{0..=4}` days; once the days already
///    spent infectious exceed the draw, the person recovers for good.
/// 3. **Activation**: infections contracted today either join the active
///    set or, on staggered days (0-based day index divisible by 5 or 6),
///    are parked in the backlog until the next non-staggered day.
///
/// Create via [`Epidemic::new`]; mutate the public fields between days to
/// apply interventions.
pub struct Epidemic {
    /// The contact network.  Interventions edit this directly.
    pub network: Network,

    /// Run parameters, validated at construction.
    pub params: EpidemicParams,

    /// Number of days simulated so far (0 before the first
    /// [`advance_day`][Epidemic::advance_day]).
    pub day: u32,

    /// Infections contracted on staggered days, waiting to join the active
    /// set.  Backlogged people are already in the infectious state; they
    /// just don't transmit or age yet.
    pub backlog: Vec<PersonId>,

    /// The engine's deterministic stream.  Branches get children of it.
    rng: SimRng,

    /// Branches spawned so far, used as the child seed offset.
    branches: u32,
}

impl Epidemic {
    // ── Construction ──────────────────────────────────────────────────────

    /// Wrap a network in an engine, validating the parameters.
    ///
    /// The network may already contain infectious individuals; they are
    /// adopted as the active set.  An empty network is rejected so that
    /// [`introduce_infection`][Epidemic::introduce_infection] always has
    /// someone to pick.
    pub fn new(network: Network, params: EpidemicParams, rng: SimRng) -> SimResult<Epidemic> {
        params.validate()?;
        if network.population() == 0 {
            return Err(SimError::Config("network has no individuals".into()));
        }
        Ok(Epidemic {
            network,
            params,
            day: 0,
            backlog: Vec::new(),
            rng,
            branches: 0,
        })
    }

    // ── Seeding ───────────────────────────────────────────────────────────

    /// Infect one person chosen uniformly at random, returning their id.
    ///
    /// If the chosen person is not susceptible nothing changes; the id is
    /// still returned so callers can log the pick.
    pub fn introduce_infection(&mut self) -> PersonId {
        let i = self.rng.gen_range(0..self.network.population());
        let id = PersonId(i as u32);
        self.activate(id);
        id
    }

    /// Infect a specific person.
    ///
    /// Errors if `id` is not in the network.  A person who is already
    /// infectious or recovered is left untouched.
    pub fn introduce_infection_at(&mut self, id: PersonId) -> SimResult<()> {
        if id.index() >= self.network.population() {
            return Err(SimError::UnknownPerson(id));
        }
        self.activate(id);
        Ok(())
    }

    /// Flip a susceptible person to infectious and add them to the active
    /// set.  Introduced infections skip the backlog.
    fn activate(&mut self, id: PersonId) {
        let person = &mut self.network.individuals[id.index()];
        if person.state != StateId::SUSCEPTIBLE {
            return;
        }
        person.state = StateId::INFECTIOUS;
        person.days_in_state = 0;
        self.network.infectious.push(id);
    }

    // ── Day loop ──────────────────────────────────────────────────────────

    /// Simulate one day and return the active infectious count at its end.
    pub fn advance_day(&mut self) -> usize {
        // ── Phase 0: snapshot the active set ──────────────────────────────
        //
        // Infections staged during this day must not transmit or age until
        // a later day, so the day operates on the set as it stood at dawn.
        let active = std::mem::take(&mut self.network.infectious);
        let mut survivors: Vec<PersonId> = Vec::with_capacity(active.len());
        let mut staged: Vec<PersonId> = Vec::new();

        for &person in &active {
            // ── Phase 1: offer infection to susceptible contacts ──────────
            //
            // The contact list is copied out first so neighbor states can
            // be written while it is walked.  Non-susceptible neighbors
            // consume no draw.
            let contacts: Vec<(PersonId, f32)> = self.network.individuals[person.index()]
                .contacts
                .iter()
                .map(|(&other, &weight)| (other, weight))
                .collect();
            for (other, weight) in contacts {
                if self.network.individuals[other.index()].state != StateId::SUSCEPTIBLE {
                    continue;
                }
                let p = f64::from(weight) * self.params.transmission_rate;
                if self.rng.uniform() < p {
                    let neighbor = &mut self.network.individuals[other.index()];
                    neighbor.state = StateId::INFECTIOUS;
                    neighbor.days_in_state = 0;
                    staged.push(other);
                }
            }

            // ── Phase 2: recovery check ───────────────────────────────────
            //
            // The threshold is redrawn at every check, so a long infection
            // keeps rerolling rather than being pinned to its first draw.
            let threshold = self.rng.poisson(self.params.recovery_days)
                + u64::from(self.rng.gen_range(0..RECOVERY_JITTER_DAYS));
            let me = &mut self.network.individuals[person.index()];
            if u64::from(me.days_in_state) > threshold {
                me.state = StateId::RECOVERED;
                me.days_in_state = 0;
            } else {
                me.days_in_state += 1;
                survivors.push(person);
            }
        }

        // ── Phase 3: merge today's infections into the active set ─────────
        //
        // On staggered days the staged infections are parked; otherwise any
        // parked backlog joins first, then today's.
        if self.activation_deferred() {
            self.backlog.extend(staged);
        } else {
            survivors.append(&mut self.backlog);
            survivors.extend(staged);
        }
        self.network.infectious = survivors;

        self.day += 1;
        self.network.infectious.len()
    }

    /// Whether infections contracted today are parked in the backlog.
    ///
    /// Checked against the 0-based index of the day being simulated, i.e.
    /// before the day counter increments.  Day 0 is always staggered.
    fn activation_deferred(&self) -> bool {
        self.params.staggered_activation && (self.day % 6 == 0 || self.day % 5 == 0)
    }

    // ── Running ───────────────────────────────────────────────────────────

    /// Run up to `days` days, stopping early if the active count exceeds
    /// the configured infection ceiling.
    ///
    /// Calls observer hooks at every day boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run_days<O: RunObserver>(&mut self, days: u32, observer: &mut O) -> StopReason {
        for _ in 0..days {
            observer.on_day_start(self.day + 1);
            let active = self.advance_day();
            observer.on_day_end(self.day, active);

            if self.params.infection_ceiling.is_some_and(|cap| active > cap) {
                observer.on_run_end(self.day, StopReason::CeilingExceeded);
                return StopReason::CeilingExceeded;
            }
        }
        observer.on_run_end(self.day, StopReason::Completed);
        StopReason::Completed
    }

    /// Run up to `days` days and collect the epidemic curve.
    pub fn run_collect(&mut self, days: u32) -> (Vec<DayCount>, StopReason) {
        let mut recorder = CurveRecorder::new();
        let reason = self.run_days(days, &mut recorder);
        (recorder.series, reason)
    }

    /// Actively infectious people right now (backlog excluded).
    #[inline]
    pub fn active_count(&self) -> usize {
        self.network.infectious.len()
    }

    // ── Interventions ─────────────────────────────────────────────────────

    /// Cut an average of `k` contacts per person, drawing the deletion
    /// randomness from the engine's own stream.
    ///
    /// Delegates to [`epi_net::remove_random_edges`]; call the free
    /// function directly to drive deletions from a separate stream.
    pub fn remove_random_edges(&mut self, k: f64) -> usize {
        epi_net::remove_random_edges(&mut self.network, k, &mut self.rng)
    }

    /// Like [`remove_random_edges`][Epidemic::remove_random_edges], but a
    /// sampled contact is only cut when its far endpoint belongs to a
    /// different category.
    pub fn remove_cross_category_edges(&mut self, k: f64) -> usize {
        epi_net::remove_cross_category_edges(&mut self.network, k, &mut self.rng)
    }

    // ── Branching ─────────────────────────────────────────────────────────

    /// Deep-copy the epidemic into an independent what-if branch.
    ///
    /// The branch gets its own network, backlog, and a child RNG stream, so
    /// running it never perturbs this engine.  Successive calls produce
    /// branches with distinct streams.
    pub fn branch(&mut self) -> Epidemic {
        self.branches += 1;
        let rng = self.rng.child(u64::from(self.branches));
        self.branch_with_rng(rng)
    }

    /// Like [`branch`][Epidemic::branch] but with a caller-chosen stream,
    /// for reproducing a specific branch in isolation.
    pub fn branch_with_rng(&self, rng: SimRng) -> Epidemic {
        Epidemic {
            network: self.network.clone(),
            params: self.params.clone(),
            day: self.day,
            backlog: self.backlog.clone(),
            rng,
            branches: 0,
        }
    }
}
