use crate::core::config::SimulationConfig;
use crate::core::cycle_analyzer::{combine_periods, gcd, lcm, lcm_all, BranchPeriod, CycleAnalyzer};
use crate::core::description::parse_description;
use crate::core::dispatcher::Dispatcher;
use crate::core::errors::NetworkError;
use crate::core::network::Network;

/// Period-3 counter `i0` plus a chain `a -> b -> i` whose inverter fires on
/// press 4 and keeps sending high into the hub.
const LATCHED: &str = "%b0_0 -> b0_1, c0
%b0_1 -> c0
&c0 -> b0_0, i0
&i0 -> hub
&hub -> rx
broadcaster -> b0_0, a
%a -> b
%b -> i
&i -> hub";

/// `a` pulses high then low into the hub on odd presses, `b` on even ones.
const ODD_AND_EVEN: &str = "broadcaster -> z
%z -> n, b, r1
&n -> a, p
&p -> q
&q -> a
&r1 -> r2
&r2 -> b
%a -> hub
%b -> hub
&hub -> rx";

fn dispatcher(text: &str) -> Dispatcher {
    Dispatcher::new(Network::new(parse_description(text).unwrap(), "broadcaster").unwrap())
}

fn period(name: &str, period: u64) -> BranchPeriod {
    BranchPeriod {
        name: name.to_string(),
        period,
        confirmed: true,
    }
}

#[test]
fn test_gcd_and_lcm() {
    assert_eq!(gcd(12, 18), 6);
    assert_eq!(gcd(7, 5), 1);
    assert_eq!(gcd(0, 9), 9);
    assert_eq!(lcm(4, 6), Some(12));
    assert_eq!(lcm(0, 6), Some(0));
    assert_eq!(lcm_all(vec![3, 4, 5, 7]), Some(420));
    assert_eq!(lcm_all(Vec::new()), Some(1));
    assert_eq!(lcm(u64::MAX, u64::MAX - 1), None);
}

#[test]
fn test_combine_periods() {
    assert_eq!(combine_periods(&[period("x", 4), period("y", 6)]), Ok(12));
    assert_eq!(combine_periods(&[]), Ok(1));
}

#[test]
fn test_combined_period_overflow() {
    let periods = [period("x", u64::MAX), period("y", u64::MAX - 1)];
    assert_eq!(combine_periods(&periods), Err(NetworkError::PeriodOverflow));
}

#[test]
fn test_latched_branch_is_rejected() {
    // i0 fires cleanly on presses 3 and 6, but i stays high after press 4
    // so rx actually goes low on press 6, not lcm(3, 4)
    let mut analyzed = dispatcher(LATCHED);
    let err = CycleAnalyzer::new("rx").analyze(&mut analyzed).unwrap_err();
    assert_eq!(
        err,
        NetworkError::LatchedBranch {
            branch: "i".to_string(),
            press: 4,
        }
    );
    assert_eq!(analyzed.presses(), 4);

    let mut pressed = dispatcher(LATCHED);
    assert_eq!(pressed.presses_until_low("rx", 100).unwrap(), 6);
}

#[test]
fn test_aperiodic_branch_is_reported() {
    let err = CycleAnalyzer::new("rx")
        .analyze(&mut dispatcher(ODD_AND_EVEN))
        .unwrap_err();
    assert_eq!(
        err,
        NetworkError::AperiodicBranch {
            branch: "a".to_string(),
            first: 1,
            second: 3,
        }
    );

    let mut unverified = dispatcher(ODD_AND_EVEN);
    let analysis = CycleAnalyzer::new("rx")
        .with_verify_periods(false)
        .analyze(&mut unverified)
        .unwrap();
    assert_eq!(analysis.presses, 2);
    assert_eq!(analysis.simulated_presses, 2);
}

#[test]
fn test_target_seen_while_measuring() {
    // A lone branch drives the hub low on its first fire
    let text = "broadcaster -> a\n%a -> hub\n&hub -> rx";
    let mut dispatcher = dispatcher(text);
    let analysis = CycleAnalyzer::new("rx").analyze(&mut dispatcher).unwrap();

    assert_eq!(analysis.presses, 1);
    assert_eq!(analysis.simulated_presses, 1);
    assert_eq!(analysis.branches.len(), 1);
    assert!(!analysis.branches[0].confirmed);
}

#[test]
fn test_requires_unpressed_network() {
    let mut dispatcher = dispatcher(LATCHED);
    dispatcher.press_button().unwrap();
    let err = CycleAnalyzer::new("rx").analyze(&mut dispatcher).unwrap_err();
    assert!(matches!(err, NetworkError::InvalidOperation(_)));
}

#[test]
fn test_topology_checks() {
    let analyzer = CycleAnalyzer::new("rx");

    let unreachable = dispatcher("broadcaster -> a\n%a -> out");
    assert_eq!(
        analyzer.find_branches(unreachable.network()).unwrap_err(),
        NetworkError::UnreachableTarget("rx".to_string())
    );

    let two_feeders = dispatcher("broadcaster -> a, b\n%a -> rx\n%b -> rx");
    assert!(matches!(
        analyzer.find_branches(two_feeders.network()).unwrap_err(),
        NetworkError::UnsupportedTopology(_)
    ));

    let flip_flop_feeder = dispatcher("broadcaster -> a\n%a -> rx");
    assert!(matches!(
        analyzer.find_branches(flip_flop_feeder.network()).unwrap_err(),
        NetworkError::UnsupportedTopology(_)
    ));

    let orphan_hub = dispatcher("broadcaster -> a\n%a -> out\n&hub -> rx");
    assert!(matches!(
        analyzer.find_branches(orphan_hub.network()).unwrap_err(),
        NetworkError::UnsupportedTopology(_)
    ));
}

#[test]
fn test_from_config() {
    let config = SimulationConfig::default()
        .with_target("done")
        .with_max_presses(3)
        .with_verify_periods(false);
    let text = "broadcaster -> a\n%a -> a2\n%a2 -> hub\n&hub -> done";
    let analyzer = CycleAnalyzer::from_config(&config);

    let (hub, branches) = analyzer.find_branches(dispatcher(text).network()).unwrap();
    assert_eq!(hub, "hub");
    assert_eq!(branches, vec!["a2".to_string()]);

    let analysis = analyzer.analyze(&mut dispatcher(text)).unwrap();
    assert_eq!(analysis.target, "done");
    assert_eq!(analysis.presses, 2);
}
