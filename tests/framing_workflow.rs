//! End-to-end walk through the LOOP framing workspace.

use decision_sims::domain::foundation::ErrorCode;
use decision_sims::domain::framing::{
    AlternativeTag, LoopStep, LoopWorkspace, Priority, StepState, SAMPLE_PROBLEMS,
};
use decision_sims::domain::signals::SignalRole;

#[test]
fn frame_a_problem_from_scratch() {
    let mut workspace = LoopWorkspace::new();

    workspace.set_outcome(
        "Support tickets take three days to resolve.",
        "Resolve 80% of tickets within one day.",
    );
    assert!(workspace.outcome().is_defined());
    assert!(workspace.next());

    workspace.add_component("Ticket Triage", Priority::High).unwrap();
    workspace.add_component("Knowledge Base", Priority::Medium).unwrap();
    assert!(workspace.next());

    let bot = workspace.add_alternative("Support Chatbot", AlternativeTag::Ai).unwrap();
    let macros = workspace.add_alternative("Canned Replies", AlternativeTag::NonAi).unwrap();
    let assist = workspace.add_alternative("Agent Assist", AlternativeTag::Hybrid).unwrap();
    assert!(workspace.next());
    assert_eq!(workspace.current_step(), LoopStep::TradeOffs);

    workspace.select_alternative(&bot).unwrap();
    workspace.place_selected(0.9, 0.8).unwrap();
    workspace.place(&macros, 0.1, 0.3).unwrap();
    workspace.place(&assist, 0.5, 0.8).unwrap();

    let frontier: Vec<&str> = workspace.frontier().iter().map(|a| a.name.as_str()).collect();
    assert_eq!(frontier, vec!["Canned Replies", "Agent Assist"]);
    assert!(workspace.next());

    workspace.add_signal("Resolution Time", SignalRole::Kill, 48.0, " h").unwrap();
    workspace.add_signal("CSAT", SignalRole::Success, 4.5, "/5").unwrap();
    assert_eq!(workspace.signals_by_role(SignalRole::Kill).count(), 1);

    assert!(workspace.is_last());
    assert!(!workspace.next());
    assert!(workspace
        .indicators()
        .iter()
        .take(4)
        .all(|(_, state)| *state == StepState::Completed));
}

#[test]
fn every_sample_loads_into_a_clean_workspace() {
    for sample in &SAMPLE_PROBLEMS {
        let mut workspace = LoopWorkspace::new();
        workspace.load_sample(sample.key).unwrap();

        assert_eq!(workspace.outcome().problem, sample.problem);
        assert_eq!(workspace.components().len(), sample.components.len());
        assert_eq!(workspace.alternatives().len(), sample.alternatives.len());
        assert_eq!(workspace.unplaced().len(), sample.alternatives.len());
        assert!(workspace.frontier().is_empty());
    }
}

#[test]
fn removed_alternative_cannot_be_placed() {
    let mut workspace = LoopWorkspace::new();
    workspace.load_sample("inventory-optimization").unwrap();
    let first = workspace.alternatives()[0].id;
    let last = workspace.alternatives()[3].id;
    workspace.place(&last, 0.2, 0.6).unwrap();

    workspace.remove_alternative(&first).unwrap();
    assert_eq!(
        workspace.place(&first, 0.5, 0.5).unwrap_err().code,
        ErrorCode::AlternativeNotFound
    );
    assert!(workspace.placement_of(&last).is_some());
}
