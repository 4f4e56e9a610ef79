//! Multi-pass sessions: plans accumulate, earlier passes win.

use injector::base::type_name;
use injector::config::ResolverConfig;
use injector::model::{FieldDecl, ProgramModel, TypeDecl, Visibility};
use injector::resolve::{
    DiagnosticCollector, DiscoveryPass, PassSummary, PlanOrigin, ResolutionSession,
};

use crate::helpers::diagnostic_helpers::*;
use crate::helpers::model_fixtures::*;
use crate::helpers::plan_assertions::*;
use crate::helpers::resolve_helpers::*;

fn two_round_model() -> ProgramModel {
    ProgramModel::new()
        .with(injected("gen.First", &[("shared", "gen.Shared")]))
        .with(trivial("gen.Shared"))
        .with(injected("gen.Second", &[("shared", "gen.Shared"), ("extra", "gen.Extra")]))
        .with(trivial("gen.Extra"))
}

#[test]
fn test_order_preserved_across_passes() {
    let model = two_round_model();

    let (plans, sink) = resolve_in_passes(&model, &[&["gen.First"], &["gen.Second"]]);

    assert_eq!(
        plan_order(&plans),
        ["gen.First", "gen.Shared", "gen.Second", "gen.Extra"]
    );
    assert_no_diagnostics(&sink);
}

#[test]
fn test_type_resolved_earlier_is_not_replanned() {
    // `gen.Shared` is resolved optimistically in pass 0; its later marked
    // constructor does not replace that plan.
    let model = ProgramModel::new()
        .with(injected("gen.First", &[("shared", "gen.Shared")]))
        .with(trivial("gen.Shared"));
    let later = ProgramModel::new().with(injected("gen.Shared", &[]));

    let mut session = ResolutionSession::new(&ResolverConfig::default()).unwrap();
    let mut sink = DiagnosticCollector::new();
    session.run_pass(&DiscoveryPass::all(&model), &mut sink);
    let summary = session.run_pass(&DiscoveryPass::all(&later), &mut sink);
    let plans = session.finish();

    assert_eq!(summary.plans_added, 0);
    assert_eq!(plan_order(&plans), ["gen.First", "gen.Shared"]);
    assert_origin(get_plan(&plans, "gen.Shared"), PlanOrigin::Optimistic);
}

#[test]
fn test_repeating_a_pass_adds_nothing() {
    let model = service_graph();
    let mut session = ResolutionSession::new(&ResolverConfig::default()).unwrap();
    let mut sink = DiagnosticCollector::new();

    let first = session.run_pass(&DiscoveryPass::all(&model), &mut sink);
    let reported = sink.len();
    let second = session.run_pass(&DiscoveryPass::all(&model), &mut sink);

    assert_eq!(
        first,
        PassSummary {
            pass_index: 0,
            plans_added: 3
        }
    );
    assert_eq!(
        second,
        PassSummary {
            pass_index: 1,
            plans_added: 0
        }
    );
    assert_eq!(sink.len(), reported);
}

#[test]
fn test_later_pass_sees_types_generated_since() {
    // Pass 0 only sees the host; its field type is unknown until pass 1.
    let host = ProgramModel::new().with(field_host("gen.Host", "gen.Generated"));
    let grown = ProgramModel::new()
        .with(field_host("gen.Host", "gen.Generated"))
        .with(trivial("gen.Generated"));

    let mut session = ResolutionSession::new(&ResolverConfig::default()).unwrap();
    let mut sink = DiagnosticCollector::new();

    let first = session.run_pass(&DiscoveryPass::all(&host), &mut sink);
    assert_eq!(first.plans_added, 0);
    assert!(!session.is_resolved("gen.Generated"));

    let second = session.run_pass(&DiscoveryPass::over(&grown, [type_name("gen.Host")]), &mut sink);
    assert_eq!(second.plans_added, 1);
    assert_eq!(session.passes(), 2);
    assert_no_diagnostics(&sink);
}

#[test]
fn test_diagnostics_reported_per_pass() {
    let model = ProgramModel::new().with(
        TypeDecl::class("gen.Host")
            .with_field(FieldDecl::new("dep", "gen.Dep").marked())
            .with_visibility(Visibility::Package),
    );

    let (plans, sink) = resolve_in_passes(&model, &[&["gen.Host"], &["gen.Host"]]);

    assert!(plans.is_empty());
    assert_eq!(errors(&sink).len(), 2);
}

#[test]
fn test_empty_pass_changes_nothing() {
    let model = two_round_model();

    let (plans, _) = resolve_in_passes(&model, &[&[], &["gen.First"], &[]]);

    assert_eq!(plan_order(&plans), ["gen.First", "gen.Shared"]);
}

#[test]
fn test_same_pass_boundaries_give_same_map() {
    let model = two_round_model()
        .with(field_host("gen.Panel", "gen.Widget"))
        .with(trivial("gen.Widget"));
    let passes: &[&[&str]] = &[&["gen.Second", "gen.Panel"], &["gen.First"]];

    let (first, first_sink) = resolve_in_passes(&model, passes);
    let (second, second_sink) = resolve_in_passes(&model, passes);

    assert_eq!(
        plan_order(&first),
        ["gen.Second", "gen.Shared", "gen.Extra", "gen.Widget", "gen.First"]
    );
    assert!(first.iter().eq(second.iter()));
    assert_eq!(first_sink.len(), second_sink.len());
}
