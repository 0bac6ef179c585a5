mod common;

use common::*;
use pulsesim::{CycleAnalyzer, NetworkError};

#[test]
fn test_coprime_branches_multiply() {
    init_logging();
    let mut dispatcher = dispatcher(&counter_chains(&[3, 4, 5, 7]));
    let analysis = CycleAnalyzer::new("rx").analyze(&mut dispatcher).unwrap();

    assert_eq!(analysis.presses, 420);
    assert_eq!(analysis.hub, "hub");
    let periods: Vec<(String, u64)> = analysis
        .branches
        .iter()
        .map(|b| (b.name.clone(), b.period))
        .collect();
    assert_eq!(
        periods,
        vec![
            ("i0".to_string(), 3),
            ("i1".to_string(), 4),
            ("i2".to_string(), 5),
            ("i3".to_string(), 7),
        ]
    );
    assert!(analysis.branches.iter().all(|b| b.confirmed));
    // Verification waits for the slowest branch to fire twice
    assert_eq!(analysis.simulated_presses, 14);
}

#[test]
fn test_shared_factors_use_lcm_not_product() {
    init_logging();
    let mut dispatcher = dispatcher(&counter_chains(&[4, 6]));
    let analysis = CycleAnalyzer::new("rx").analyze(&mut dispatcher).unwrap();
    assert_eq!(analysis.presses, 12);
}

#[test]
fn test_without_verification_first_fire_is_enough() {
    init_logging();
    let mut dispatcher = dispatcher(&counter_chains(&[3, 4, 5, 7]));
    let analysis = CycleAnalyzer::new("rx")
        .with_verify_periods(false)
        .analyze(&mut dispatcher)
        .unwrap();
    assert_eq!(analysis.presses, 420);
    assert_eq!(analysis.simulated_presses, 7);
    assert!(analysis.branches.iter().all(|b| !b.confirmed));
}

#[test]
fn test_analysis_matches_brute_force() {
    init_logging();
    let text = counter_chains(&[3, 5]);

    let analysis = CycleAnalyzer::new("rx").analyze(&mut dispatcher(&text)).unwrap();
    let brute = dispatcher(&text).presses_until_low("rx", 100).unwrap();

    assert_eq!(analysis.presses, 15);
    assert_eq!(brute, analysis.presses);
}

#[test]
fn test_stops_when_target_goes_low_before_verification() {
    init_logging();
    // rx goes low on press 4, before i1 could fire a second time on press 8
    let mut dispatcher = dispatcher(&counter_chains(&[2, 4]));
    let analysis = CycleAnalyzer::new("rx").analyze(&mut dispatcher).unwrap();

    assert_eq!(analysis.presses, 4);
    assert_eq!(analysis.simulated_presses, 4);
    let measured: Vec<(u64, bool)> = analysis
        .branches
        .iter()
        .map(|b| (b.period, b.confirmed))
        .collect();
    assert_eq!(measured, vec![(2, true), (4, false)]);
}

#[test]
fn test_press_limit() {
    init_logging();
    let mut dispatcher = dispatcher(&counter_chains(&[3, 4, 5, 7]));
    let err = CycleAnalyzer::new("rx")
        .with_max_presses(5)
        .analyze(&mut dispatcher)
        .unwrap_err();
    assert_eq!(err, NetworkError::PressLimitExceeded { limit: 5 });
    assert_eq!(dispatcher.presses(), 5);
}

#[test]
fn test_latched_branch_next_to_clean_counter() {
    init_logging();
    // i stays high into the hub after firing on press 4
    let counter = counter_chains(&[3]);
    let mut lines: Vec<&str> = counter
        .lines()
        .filter(|line| !line.starts_with("broadcaster"))
        .collect();
    lines.extend(["broadcaster -> b0_0, a", "%a -> b", "%b -> i", "&i -> hub"]);
    let text = lines.join("\n");

    let err = CycleAnalyzer::new("rx").analyze(&mut dispatcher(&text)).unwrap_err();
    assert_eq!(
        err,
        NetworkError::LatchedBranch {
            branch: "i".to_string(),
            press: 4,
        }
    );
    assert_eq!(dispatcher(&text).presses_until_low("rx", 100).unwrap(), 6);
}
