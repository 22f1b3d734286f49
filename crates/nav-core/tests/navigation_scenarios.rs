use nav_core::{CoreEngineError, FlowBuilderInit, FlowController, NavEventKind, StepStatus, Transition};

#[test]
fn booking_scenario_skip_then_terminal() {
    let mut flow = FlowController::new(vec!["search", "seatSelection", "payment", "confirmation"]).unwrap();

    assert_eq!(*flow.start(), "search");
    assert_eq!(*flow.advance(Some(&"payment")).unwrap(), "payment");
    assert_eq!(flow.cursor(), 2);
    assert_eq!(*flow.advance(None).unwrap(), "confirmation");
    assert_eq!(flow.cursor(), 3);
    assert_eq!(*flow.advance(None).unwrap(), "confirmation");
    assert_eq!(flow.cursor(), 3);

    let snap = flow.snapshot().expect("replay");
    assert_eq!(snap.skipped(), vec!["seatSelection"]);
    assert_eq!(snap.steps[1].status, StepStatus::Pending);
    assert!(snap.terminal_reached);

    let transitions: Vec<Transition> = flow.events()
                                           .iter()
                                           .filter_map(|e| match &e.kind {
                                               NavEventKind::StepEntered { transition, .. } => Some(*transition),
                                               _ => None,
                                           })
                                           .collect();
    assert_eq!(transitions, vec![Transition::Skip, Transition::Next]);
}

#[test]
fn single_step_scenario() {
    let mut flow = FlowBuilderInit::new().first_step("search").build();
    assert_eq!(*flow.start(), "search");
    assert_eq!(*flow.advance(None).unwrap(), "search");
    assert!(flow.is_at_end());
}

#[test]
fn empty_scenario_is_a_configuration_error() {
    let res = FlowController::<&'static str>::new(Vec::new());
    assert!(matches!(res, Err(CoreEngineError::EmptyFlow)));
}

#[test]
fn events_serialize_to_json() {
    let mut flow = FlowController::new(vec!["search", "payment"]).unwrap();
    flow.next();
    let json = serde_json::to_value(flow.events()).expect("events serialize");
    assert_eq!(json[1]["kind"]["StepEntered"]["step_id"], "payment");
    assert_eq!(json[1]["kind"]["StepEntered"]["transition"], "next");
}
