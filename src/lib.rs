//! Decision Sims - Decision logic behind interactive decision-making MicroSims
//!
//! This crate implements the rule-based engines that the visualisations
//! render: a questionnaire that recommends an AI or non-AI approach, a
//! signal dashboard that votes STOP / PIVOT / PERSIST, a benefit/cost matrix
//! with its Pareto frontier, and a LOOP problem-framing workspace.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
