//! Comparative what-if runs over independent epidemic branches.

use crate::{DayCount, Epidemic};

/// Branch `base` `count` times, let `setup` edit each branch (apply an
/// intervention, tweak parameters), then run every branch for `days` days
/// and return the epidemic curves in branch order.
///
/// `setup` receives the branch index as its second argument so a single
/// closure can configure a whole sweep.  Branch 0 with a no-op setup is the
/// baseline to compare against.
///
/// Branching and setup run sequentially so the branches draw their child
/// streams in a stable order; the runs themselves are independent and, with
/// the `parallel` Cargo feature, execute on Rayon's thread pool.
pub fn run_branches<F>(
    base:  &mut Epidemic,
    count: usize,
    days:  u32,
    mut setup: F,
) -> Vec<Vec<DayCount>>
where
    F: FnMut(&mut Epidemic, usize),
{
    let mut branches: Vec<Epidemic> = (0..count).map(|_| base.branch()).collect();
    for (i, branch) in branches.iter_mut().enumerate() {
        setup(branch, i);
    }

    #[cfg(not(feature = "parallel"))]
    {
        branches
            .iter_mut()
            .map(|branch| branch.run_collect(days).0)
            .collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        branches
            .par_iter_mut()
            .map(|branch| branch.run_collect(days).0)
            .collect()
    }
}
