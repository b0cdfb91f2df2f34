//! Properties of signal status classification and the aggregate verdict.

use proptest::prelude::*;

use decision_sims::adapters::ScriptedRandom;
use decision_sims::domain::signals::{
    Signal, SignalAggregator, SignalDashboard, SignalRole, SignalStatus, SimulationSettings,
    StatusCounts, Verdict,
};

fn role_strategy() -> impl Strategy<Value = SignalRole> {
    prop_oneof![
        Just(SignalRole::Success),
        Just(SignalRole::Kill),
        Just(SignalRole::Leading),
    ]
}

fn status_strategy() -> impl Strategy<Value = SignalStatus> {
    prop_oneof![
        Just(SignalStatus::Red),
        Just(SignalStatus::Yellow),
        Just(SignalStatus::Green),
    ]
}

/// A 0..100 signal whose status is forced by its value.
fn signal_with_status(role: SignalRole, status: SignalStatus) -> Signal {
    let value = match status {
        SignalStatus::Green => 90.0,
        SignalStatus::Yellow => 60.0,
        SignalStatus::Red => 10.0,
    };
    Signal::builder("Forced", role)
        .value(value)
        .thresholds(80.0, 50.0)
        .build()
        .unwrap()
}

proptest! {
    #[test]
    fn status_is_monotonic_when_higher_is_better(
        yellow in 0.0f64..50.0,
        gap in 0.0f64..50.0,
        a in 0.0f64..100.0,
        b in 0.0f64..100.0,
    ) {
        let green = yellow + gap;
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let mut signal = Signal::builder("S", SignalRole::Success)
            .thresholds(green, yellow)
            .build()
            .unwrap();

        signal.set_value(low).unwrap();
        let low_status = SignalAggregator::classify_status(&signal);
        signal.set_value(high).unwrap();
        let high_status = SignalAggregator::classify_status(&signal);

        prop_assert!(low_status <= high_status);
    }

    #[test]
    fn status_is_monotonic_when_lower_is_better(
        green in 0.0f64..50.0,
        gap in 0.0f64..50.0,
        a in 0.0f64..100.0,
        b in 0.0f64..100.0,
    ) {
        let yellow = green + gap;
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let mut signal = Signal::builder("S", SignalRole::Kill)
            .thresholds(green, yellow)
            .higher_is_better(false)
            .build()
            .unwrap();

        signal.set_value(low).unwrap();
        let low_status = SignalAggregator::classify_status(&signal);
        signal.set_value(high).unwrap();
        let high_status = SignalAggregator::classify_status(&signal);

        prop_assert!(low_status >= high_status);
    }

    #[test]
    fn two_red_kill_signals_always_stop(
        others in proptest::collection::vec((role_strategy(), status_strategy()), 0..10),
    ) {
        let mut signals = vec![
            signal_with_status(SignalRole::Kill, SignalStatus::Red),
            signal_with_status(SignalRole::Kill, SignalStatus::Red),
        ];
        signals.extend(others.into_iter().map(|(role, status)| signal_with_status(role, status)));

        prop_assert_eq!(SignalAggregator::aggregate(&signals).recommendation, Verdict::Stop);
    }

    #[test]
    fn four_greens_without_red_persist(green in 4u32..20, yellow in 0u32..20) {
        let counts = StatusCounts { green, yellow, red: 0, kill_red: 0 };
        let decision = SignalAggregator::decide(&counts);
        prop_assert_eq!(decision.recommendation, Verdict::Persist);
        prop_assert!(decision.confidence.value() >= 90 && decision.confidence.value() <= 95);
    }

    #[test]
    fn confidence_stays_in_percentage_range(
        green in 0u32..50,
        yellow in 0u32..50,
        red in 0u32..50,
        kill_share in 0.0f64..=1.0,
    ) {
        let kill_red = (f64::from(red) * kill_share).floor() as u32;
        let counts = StatusCounts { green, yellow, red, kill_red };
        let decision = SignalAggregator::decide(&counts);
        prop_assert!(decision.confidence.value() >= 50);
        prop_assert!(decision.confidence.value() <= 95);
    }

    #[test]
    fn simulation_keeps_every_signal_in_range(
        samples in proptest::collection::vec(0.0f64..1.0, 1..50),
        frames in 0u32..400,
    ) {
        let mut dashboard = SignalDashboard::new(SimulationSettings::default()).unwrap();
        let mut rng = ScriptedRandom::new(samples);
        dashboard.toggle_simulation();
        for _ in 0..frames {
            dashboard.on_frame(&mut rng);
        }
        for signal in dashboard.signals() {
            let (min, max) = signal.range();
            prop_assert!(signal.value() >= min && signal.value() <= max);
        }
    }
}
