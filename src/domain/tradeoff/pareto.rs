//! Pareto Filter - Dominance detection over benefit/cost scored items.

use std::cmp::Ordering;

use super::Scored;
use crate::domain::foundation::{DomainError, ValidationError};

/// An item together with the first item found to dominate it.
#[derive(Debug, Clone, PartialEq)]
pub struct Dominated<'a, T> {
    pub item: &'a T,
    pub dominated_by: &'a T,
    pub explanation: String,
}

/// Pareto frontier computation: maximise benefit, minimise cost.
pub struct ParetoFilter;

impl ParetoFilter {
    /// Checks if `a` dominates `b`.
    ///
    /// `a` dominates `b` if:
    /// 1. `a` has at least the benefit and at most the cost of `b`
    /// 2. `a` is strictly better on at least one of the two
    ///
    /// Identical scores never dominate each other.
    pub fn dominates<A: Scored + ?Sized, B: Scored + ?Sized>(a: &A, b: &B) -> bool {
        let at_least_equal = a.benefit() >= b.benefit() && a.cost() <= b.cost();
        let strictly_better = a.benefit() > b.benefit() || a.cost() < b.cost();
        at_least_equal && strictly_better
    }

    /// Items not dominated by any other item, in ascending benefit order.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if any score is NaN or infinite
    ///
    /// # Edge Cases
    /// - Empty input: Returns empty Vec
    /// - Ties on both scores: both items stay on the frontier
    pub fn frontier<T: Scored>(items: &[T]) -> Result<Vec<&T>, DomainError> {
        Self::ensure_finite(items)?;
        Ok(Self::non_dominated(items))
    }

    /// Frontier over items already known to carry finite scores.
    ///
    /// Sorting is stable, so ties on benefit keep their input order.
    pub(crate) fn non_dominated<T: Scored>(items: &[T]) -> Vec<&T> {
        let mut frontier: Vec<&T> = items
            .iter()
            .filter(|candidate| !items.iter().any(|other| Self::dominates(other, *candidate)))
            .collect();

        frontier.sort_by(|a, b| {
            a.benefit()
                .partial_cmp(&b.benefit())
                .unwrap_or(Ordering::Equal)
        });
        frontier
    }

    /// Finds every dominated item, each with its first dominator in input
    /// order.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if any score is NaN or infinite
    pub fn find_dominated<T: Scored>(items: &[T]) -> Result<Vec<Dominated<'_, T>>, DomainError> {
        Self::ensure_finite(items)?;
        Ok(Self::dominated_unchecked(items))
    }

    pub(crate) fn dominated_unchecked<T: Scored>(items: &[T]) -> Vec<Dominated<'_, T>> {
        let mut dominated = Vec::new();

        if items.len() < 2 {
            return dominated;
        }

        for candidate in items {
            if let Some(dominator) = items.iter().find(|other| Self::dominates(*other, candidate)) {
                dominated.push(Dominated {
                    item: candidate,
                    dominated_by: dominator,
                    explanation: Self::explain_dominance(dominator, candidate),
                });
            }
        }

        dominated
    }

    /// Generates explanation for why `a` dominates `b`.
    fn explain_dominance<T: Scored>(a: &T, b: &T) -> String {
        let mut better_on = Vec::new();
        if a.benefit() > b.benefit() {
            better_on.push(format!("benefit ({} > {})", a.benefit(), b.benefit()));
        }
        if a.cost() < b.cost() {
            better_on.push(format!("cost ({} < {})", a.cost(), b.cost()));
        }

        format!(
            "At least as good on benefit and cost, strictly better on: {}",
            better_on.join(", ")
        )
    }

    fn ensure_finite<T: Scored>(items: &[T]) -> Result<(), DomainError> {
        for (index, item) in items.iter().enumerate() {
            if !item.benefit().is_finite() || !item.cost().is_finite() {
                return Err(DomainError::from(ValidationError::not_finite(format!(
                    "items[{}]",
                    index
                ))));
            }
        }
        Ok(())
    }
}
