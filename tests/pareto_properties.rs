//! Soundness and completeness of the Pareto frontier.

use proptest::prelude::*;

use decision_sims::domain::tradeoff::{ParetoFilter, PivotMatrix, Scored};
use decision_sims::ports::Recommender;

fn points() -> impl Strategy<Value = Vec<(f64, f64)>> {
    // Coarse grid so ties are common.
    proptest::collection::vec((0u8..=10, 0u8..=10), 0..12).prop_map(|raw| {
        raw.into_iter()
            .map(|(x, y)| (f64::from(x), f64::from(y)))
            .collect()
    })
}

#[test]
fn default_matrix_example_frontier() {
    let options = vec![(3.0, 3.0), (8.0, 7.0), (7.0, 5.0), (5.0, 2.0), (6.0, 4.0)];
    let frontier: Vec<(f64, f64)> = ParetoFilter::frontier(&options)
        .unwrap()
        .into_iter()
        .copied()
        .collect();

    assert_eq!(frontier, vec![(5.0, 2.0), (6.0, 4.0), (7.0, 5.0), (8.0, 7.0)]);

    let dominated = ParetoFilter::find_dominated(&options).unwrap();
    assert_eq!(dominated.len(), 1);
    assert_eq!(*dominated[0].item, (3.0, 3.0));
}

#[test]
fn matrix_recommendation_matches_filter() {
    let matrix = PivotMatrix::default();
    let expected: Vec<_> = ParetoFilter::frontier(matrix.options())
        .unwrap()
        .into_iter()
        .map(|o| *o.id())
        .collect();
    assert_eq!(matrix.recommend(), expected);
}

proptest! {
    #[test]
    fn frontier_points_are_not_dominated(items in points()) {
        let frontier = ParetoFilter::frontier(&items).unwrap();
        for point in &frontier {
            prop_assert!(!items.iter().any(|other| ParetoFilter::dominates(other, *point)));
        }
    }

    #[test]
    fn excluded_points_are_dominated_by_a_frontier_point(items in points()) {
        let frontier = ParetoFilter::frontier(&items).unwrap();
        for (index, point) in items.iter().enumerate() {
            let on_frontier = frontier.iter().any(|f| std::ptr::eq(*f, &items[index]));
            if !on_frontier {
                prop_assert!(
                    frontier.iter().any(|f| ParetoFilter::dominates(*f, point)),
                    "{:?} excluded without a dominating frontier point",
                    point
                );
            }
        }
    }

    #[test]
    fn frontier_is_sorted_by_benefit(items in points()) {
        let frontier = ParetoFilter::frontier(&items).unwrap();
        prop_assert!(frontier.windows(2).all(|w| w[0].benefit() <= w[1].benefit()));
    }

    #[test]
    fn duplicated_point_keeps_both_copies(x in 0u8..=10, y in 0u8..=10, items in points()) {
        let twin = (f64::from(x), f64::from(y));
        let mut all = items;
        all.push(twin);
        all.push(twin);

        let frontier = ParetoFilter::frontier(&all).unwrap();
        let copies = frontier.iter().filter(|p| ***p == twin).count();
        prop_assert!(copies == 0 || copies >= 2);
    }
}
