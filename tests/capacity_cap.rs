//! Scenario 5 (spec.md §8): a capacity-capped process over a subset `S`
//! with capacity `K` returns its base rate while `sum(count(S)) < K` and
//! zero once the sum reaches `K`. `K - 1` is permitted; `K` is not.

mod common;

use common::{AgentProcess, Kind, Populations};
use stochsim::process::Process;

#[test]
fn rate_drops_to_zero_exactly_at_capacity() {
    let populations = Populations::new(vec![0, 0]);
    let capped = AgentProcess::new(
        0,
        Kind::CapacityCapped {
            base_rate: 5.0,
            subset: vec![0, 1],
            capacity: 10,
        },
        populations.clone(),
    );

    // count = 0: well under capacity.
    assert_eq!(capped.rate().value(), 5.0);

    // count = K - 1 = 9: still permitted.
    populations.add(0, 6);
    populations.add(1, 3);
    assert_eq!(populations.get(0) + populations.get(1), 9);
    assert_eq!(capped.rate().value(), 5.0);

    // count = K = 10: rate drops to zero.
    populations.add(1, 1);
    assert_eq!(populations.get(0) + populations.get(1), 10);
    assert_eq!(capped.rate().value(), 0.0);

    // count > K: stays zero.
    populations.add(0, 5);
    assert_eq!(capped.rate().value(), 0.0);
}
