//! Demo runner: drives each decision engine over its default data set and
//! prints a JSON report to stdout. Logs go to stderr.

use anyhow::Result;
use serde_json::{json, Value};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*};

use decision_sims::adapters::ThreadRandom;
use decision_sims::config::AppConfig;
use decision_sims::domain::framing::LoopWorkspace;
use decision_sims::domain::questionnaire::QuestionnaireSession;
use decision_sims::domain::signals::{SignalAggregator, SignalDashboard};
use decision_sims::domain::tradeoff::PivotMatrix;
use decision_sims::ports::Recommender;

/// Frames of simulated dashboard activity.
const SIMULATED_FRAMES: u32 = 120;

fn main() -> Result<()> {
    let config = AppConfig::load()?;
    init_tracing(&config)?;

    info!("Running decision sims demo");

    let report = json!({
        "questionnaire": questionnaire_report()?,
        "signals": signals_report(&config)?,
        "matrix": matrix_report(&config)?,
        "framing": framing_report()?,
    });

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn init_tracing(config: &AppConfig) -> Result<()> {
    let registry = tracing_subscriber::registry().with(config.logging.env_filter()?);
    if config.logging.json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?;
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()?;
    }
    Ok(())
}

fn questionnaire_report() -> Result<Value> {
    let mut session = QuestionnaireSession::new();
    for answer in [3, 2, 2, 2] {
        session.select_option(answer)?;
    }

    Ok(json!({
        "answers": session.answers(),
        "recommendation": session.recommend(),
        "info": session.recommendation_info(),
    }))
}

fn signals_report(config: &AppConfig) -> Result<Value> {
    let mut dashboard = SignalDashboard::new(config.signals.simulation()?)?;
    let initial = dashboard.recommend();

    let mut rng = ThreadRandom::new();
    dashboard.toggle_simulation();
    for _ in 0..SIMULATED_FRAMES {
        dashboard.on_frame(&mut rng);
    }

    let signals: Vec<Value> = dashboard
        .signals()
        .iter()
        .map(|s| {
            json!({
                "name": s.name(),
                "role": s.role(),
                "value": s.value(),
                "unit": s.unit(),
                "status": SignalAggregator::classify_status(s),
            })
        })
        .collect();

    Ok(json!({
        "initial": initial,
        "after_simulation": dashboard.recommend(),
        "frames": dashboard.frame(),
        "signals": signals,
    }))
}

fn matrix_report(config: &AppConfig) -> Result<Value> {
    let matrix = PivotMatrix::new(config.matrix.limits()?);

    let options: Vec<Value> = matrix
        .options()
        .iter()
        .map(|o| {
            json!({
                "name": o.name(),
                "x": o.x(),
                "y": o.y(),
                "quadrant": matrix.quadrant_of(o.id()),
            })
        })
        .collect();
    let frontier: Vec<&str> = matrix.frontier().iter().map(|o| o.name()).collect();
    let dominated: Vec<Value> = matrix
        .dominated()
        .iter()
        .map(|d| {
            json!({
                "option": d.item.name(),
                "dominated_by": d.dominated_by.name(),
                "explanation": d.explanation,
            })
        })
        .collect();

    Ok(json!({
        "title": matrix.title(),
        "options": options,
        "frontier": frontier,
        "dominated": dominated,
    }))
}

fn framing_report() -> Result<Value> {
    let mut workspace = LoopWorkspace::new();
    workspace.load_sample("customer-churn")?;

    // (effort, impact) per alternative, in sample order
    let positions = [(0.8, 0.9), (0.3, 0.5), (0.5, 0.7), (0.6, 0.4)];
    let ids: Vec<_> = workspace.alternatives().iter().map(|a| a.id).collect();
    for (id, (x, y)) in ids.iter().zip(positions) {
        workspace.place(id, x, y)?;
    }
    while workspace.next() {}

    let frontier: Vec<&str> = workspace.frontier().iter().map(|a| a.name.as_str()).collect();
    Ok(json!({
        "step": workspace.current_step().to_string(),
        "outcome": workspace.outcome(),
        "components": workspace.components(),
        "frontier": frontier,
    }))
}
