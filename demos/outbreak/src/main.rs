//! outbreak — campus epidemic demo for the epi-graph framework.
//!
//! Synthesizes a 500-person contact network partitioned by faculty and
//! year, seeds one infection, burns in for 10 days, then compares a
//! do-nothing baseline against cutting cross-category contacts.  Swap
//! POPULATION for ~50 K and the same pipeline models a whole university.

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use indexmap::IndexMap;

use epi_core::{Category, SimRng, StateId};
use epi_net::{
    CategoricalDistribution, DegreeSpec, DegreeTarget, FriendshipTable, Network, NetworkBuilder,
};
use epi_output::{GraphExport, curve_csv, edge_list_csv};
use epi_sim::{DayCount, Epidemic, EpidemicParams};

// ── Constants ─────────────────────────────────────────────────────────────────

const POPULATION:    usize = 500;
const SEED:          u64   = 42;
const BURN_IN_DAYS:  u32   = 10;
const COMPARE_DAYS:  u32   = 50;
const TRANSMISSION:  f64   = 0.08; // per contact per day
const RECOVERY_DAYS: f64   = 4.0;
const CUT_MEAN:      f64   = 3.0;  // mean cross-category contacts cut per person

// ── Campus mix ────────────────────────────────────────────────────────────────

fn campus_categories() -> Vec<(Category, f64)> {
    vec![
        (Category::new(["SCI", "1"]), 0.30),
        (Category::new(["SCI", "2"]), 0.20),
        (Category::new(["HUM", "1"]), 0.30),
        (Category::new(["HUM", "2"]), 0.20),
    ]
}

/// One degree target per category: first-years mix more than second-years,
/// and one target is a closure to show the pluggable form.
fn campus_degrees(categories: &[(Category, f64)]) -> DegreeSpec {
    let mut targets = IndexMap::new();
    targets.insert(categories[0].0.clone(), DegreeTarget::Fixed(5));
    targets.insert(categories[1].0.clone(), DegreeTarget::Poisson(4.0));
    targets.insert(
        categories[2].0.clone(),
        DegreeTarget::Custom(Arc::new(|rng: &mut SimRng| 3 + rng.gen_range(0..5u32))),
    );
    targets.insert(categories[3].0.clone(), DegreeTarget::Poisson(5.0));
    DegreeSpec::PerCategory(targets)
}

/// Assortative friendship probabilities: same faculty and year mix most,
/// cross-faculty least.
fn campus_friendships(categories: &[(Category, f64)]) -> FriendshipTable {
    let mut table = FriendshipTable::new();
    for (i, (a, _)) in categories.iter().enumerate() {
        for (b, _) in &categories[i..] {
            let same_faculty = a.parts()[0] == b.parts()[0];
            let same_year = a.parts()[1] == b.parts()[1];
            let p = match (same_faculty, same_year) {
                (true, true)   => 0.70,
                (true, false)  => 0.40,
                (false, true)  => 0.15,
                (false, false) => 0.05,
            };
            table.insert(a.clone(), b.clone(), p);
        }
    }
    table
}

// ── Reporting helpers ─────────────────────────────────────────────────────────

fn peak(series: &[DayCount]) -> usize {
    series.iter().map(|p| p.infectious).max().unwrap_or(0)
}

/// (susceptible, infectious, recovered) counts.
fn state_census(network: &Network) -> (usize, usize, usize) {
    let mut counts = (0, 0, 0);
    for person in &network.individuals {
        match person.state {
            StateId::SUSCEPTIBLE => counts.0 += 1,
            StateId::INFECTIOUS  => counts.1 += 1,
            _                    => counts.2 += 1,
        }
    }
    counts
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== outbreak — epi-graph campus epidemic ===");
    println!(
        "Population: {POPULATION}  |  Days: {BURN_IN_DAYS} + {COMPARE_DAYS}  |  Seed: {SEED}"
    );
    println!();

    // 1. Assemble the campus mix.
    let categories = campus_categories();
    let distribution = CategoricalDistribution::from_pairs(categories.iter().cloned())?;
    let degrees = campus_degrees(&categories);
    let friendships = campus_friendships(&categories);

    // 2. Synthesize the contact network.
    let mut rng = SimRng::new(SEED);
    let t0 = Instant::now();
    let network = NetworkBuilder::new(POPULATION)
        .distribution(distribution)
        .degrees(degrees)
        .friendships(friendships)
        .build(&mut rng)?;
    println!(
        "Synthesized {} people, {} contacts in {:.3} s",
        network.population(),
        network.edge_count() / 2,
        t0.elapsed().as_secs_f64()
    );

    println!();
    println!("{:<10} {:>6}", "Category", "Count");
    println!("{}", "-".repeat(17));
    for (category, count) in network.partition_counts() {
        println!("{:<10} {:>6}", category.to_string(), count);
    }
    println!();

    // 3. Wrap the network in an engine and seed one infection.
    let params = EpidemicParams::new(TRANSMISSION, RECOVERY_DAYS);
    let mut epidemic = Epidemic::new(network, params, rng.child(1))?;
    let patient_zero = epidemic.introduce_infection();
    println!("Patient zero: {patient_zero}, contact mix:");
    for (category, count) in epidemic.network.contact_categories(patient_zero) {
        println!("  {:<10} {count}", category.to_string());
    }
    println!();

    // 4. Burn in before the intervention decision point.
    let t1 = Instant::now();
    let (burn_in_curve, _) = epidemic.run_collect(BURN_IN_DAYS);
    println!(
        "Burn-in: day {} with {} infectious",
        epidemic.day,
        epidemic.active_count()
    );

    // 5. Branch into baseline and intervention runs.
    let mut baseline = epidemic.branch();
    let mut intervention = epidemic.branch();
    let removed = intervention.remove_cross_category_edges(CUT_MEAN);
    println!(
        "Intervention: cut {} cross-category contacts ({} remain)",
        removed,
        intervention.network.edge_count() / 2
    );
    println!();

    // 6. Run both branches over the comparison window.
    let (baseline_curve, _) = baseline.run_collect(COMPARE_DAYS);
    let (intervention_curve, _) = intervention.run_collect(COMPARE_DAYS);
    let elapsed = t1.elapsed();

    // 7. Write outputs.
    std::fs::create_dir_all("output/outbreak")?;
    std::fs::write("output/outbreak/edge_list.csv", edge_list_csv(&baseline.network)?)?;
    for (path, tail) in [
        ("output/outbreak/curve_baseline.csv", &baseline_curve),
        ("output/outbreak/curve_intervention.csv", &intervention_curve),
    ] {
        // Each file carries the shared burn-in prefix so the curves align.
        let mut curve = burn_in_curve.clone();
        curve.extend(tail);
        std::fs::write(path, curve_csv(&curve)?)?;
    }
    let graph = GraphExport::from_network(&baseline.network);
    println!(
        "Wrote output/outbreak/ (graph: {} nodes, {} links)",
        graph.nodes.len(),
        graph.links.len()
    );
    println!("Simulated {} branch-days in {:.3} s", 2 * COMPARE_DAYS, elapsed.as_secs_f64());
    println!();

    // 8. Comparison table.
    println!(
        "{:<14} {:>6} {:>7} {:>12} {:>12}",
        "Scenario", "Peak", "Final", "Recovered", "Susceptible"
    );
    println!("{}", "-".repeat(55));
    for (name, curve, engine) in [
        ("baseline", &baseline_curve, &baseline),
        ("cut contacts", &intervention_curve, &intervention),
    ] {
        let (susceptible, infectious, recovered) = state_census(&engine.network);
        println!(
            "{:<14} {:>6} {:>7} {:>12} {:>12}",
            name,
            peak(curve),
            infectious,
            recovered,
            susceptible
        );
    }

    Ok(())
}
