//! Visibility gate, optimistic shape gate, scope flags, idempotence and
//! determinism.

use rstest::rstest;

use injector::model::{
    ConstructorDecl, DependencyKind, FieldDecl, MethodDecl, ParamDecl, ProgramModel, TypeDecl,
    Visibility,
};
use injector::resolve::{PlanOrigin, codes};

use crate::helpers::diagnostic_helpers::*;
use crate::helpers::model_fixtures::*;
use crate::helpers::plan_assertions::*;
use crate::helpers::resolve_helpers::*;

// =============================================================================
// VISIBILITY GATE
// =============================================================================

#[rstest]
#[case(Visibility::Package)]
#[case(Visibility::Protected)]
#[case(Visibility::Private)]
fn test_non_public_owner_never_gets_explicit_plan(#[case] owner_visibility: Visibility) {
    let model = ProgramModel::new()
        .with(
            TypeDecl::class("com.Hidden")
                .with_visibility(owner_visibility)
                .with_constructor(ConstructorDecl::new().marked().param("b", "com.B")),
        )
        .with(trivial("com.B"));

    let (plans, sink) = resolve_model(&model);

    assert_no_plan(&plans, "com.Hidden");
    assert_no_plan(&plans, "com.B");
    assert!(has_diagnostic(&sink, codes::NON_PUBLIC_OWNER, "com.Hidden"));
}

#[rstest]
#[case(Visibility::Package)]
#[case(Visibility::Private)]
fn test_non_public_owner_fields_and_methods_are_rejected(#[case] owner_visibility: Visibility) {
    let model = ProgramModel::new()
        .with(
            TypeDecl::class("com.Hidden")
                .with_visibility(owner_visibility)
                .with_field(FieldDecl::new("f", "com.F").marked())
                .with_method(MethodDecl::new("wire").marked().param("m", "com.M")),
        )
        .with(trivial("com.F"))
        .with(trivial("com.M"));

    let (plans, sink) = resolve_model(&model);

    assert!(plans.is_empty());
    assert_eq!(errors(&sink).len(), 2);
    assert!(errors(&sink).iter().all(|d| d.code == codes::NON_PUBLIC_OWNER));
}

#[test]
fn test_private_field_reported_even_when_type_already_resolved() {
    let model = ProgramModel::new()
        .with(injected("com.B", &[]))
        .with(
            TypeDecl::class("com.Host").with_field(
                FieldDecl::new("b", "com.B")
                    .marked()
                    .with_visibility(Visibility::Private),
            ),
        );

    let (plans, sink) = resolve_model(&model);

    assert_eq!(plan_order(&plans), ["com.B"]);
    assert!(has_diagnostic(&sink, codes::PRIVATE_FIELD, "com.Host"));
}

#[test]
fn test_private_constructor_rejected_others_continue() {
    let model = ProgramModel::new()
        .with(
            TypeDecl::class("com.Bad").with_constructor(
                ConstructorDecl::new()
                    .marked()
                    .with_visibility(Visibility::Private),
            ),
        )
        .with(injected("com.Good", &[]));

    let (plans, sink) = resolve_model(&model);

    assert_eq!(plan_order(&plans), ["com.Good"]);
    assert!(has_diagnostic(&sink, codes::PRIVATE_CONSTRUCTOR, "com.Bad"));
}

// =============================================================================
// OPTIMISTIC SHAPE GATE
// =============================================================================

#[rstest]
#[case::two_no_arg_constructors(
    TypeDecl::class("com.Dep")
        .with_constructor(ConstructorDecl::new())
        .with_constructor(ConstructorDecl::new().with_visibility(Visibility::Package)),
    codes::AMBIGUOUS_CONSTRUCTORS
)]
#[case::single_constructor_with_parameter(
    TypeDecl::class("com.Dep").with_constructor(ConstructorDecl::new().param("x", "com.X")),
    codes::NO_DEFAULT_CONSTRUCTOR
)]
#[case::private_no_arg_constructor(
    TypeDecl::class("com.Dep")
        .with_constructor(ConstructorDecl::new().with_visibility(Visibility::Private)),
    codes::PRIVATE_DEFAULT_CONSTRUCTOR
)]
fn test_undecidable_shape_warns_and_skips(#[case] dependency: TypeDecl, #[case] code: &str) {
    let model = ProgramModel::new()
        .with(field_host("com.Host", "com.Dep"))
        .with(dependency);

    let (plans, sink) = resolve_model(&model);

    assert_no_plan(&plans, "com.Dep");
    assert_eq!(warnings(&sink).len(), 1);
    assert!(errors(&sink).is_empty());
    assert!(has_diagnostic(&sink, code, "com.Dep"));
}

#[rstest]
#[case::field(field_host("com.Host", "com.Dep"))]
#[case::constructor_parameter(injected("com.Host", &[("dep", "com.Dep")]))]
#[case::method_parameter(
    TypeDecl::class("com.Host")
        .with_method(MethodDecl::new("wire").marked().param("dep", "com.Dep"))
)]
fn test_single_public_no_arg_constructor_always_resolved(#[case] host: TypeDecl) {
    let model = ProgramModel::new().with(host).with(trivial("com.Dep"));

    let (plans, sink) = resolve_model(&model);

    let plan = get_plan(&plans, "com.Dep");
    assert_origin(plan, PlanOrigin::Optimistic);
    assert!(plan.is_default_constructed());
    assert_no_diagnostics(&sink);
}

#[test]
fn test_wrapped_dependencies_resolve_their_target() {
    let model = ProgramModel::new()
        .with(
            TypeDecl::class("com.Host").with_constructor(
                ConstructorDecl::new()
                    .marked()
                    .with_param(ParamDecl::new("lazy", "com.L").with_kind(DependencyKind::Lazy))
                    .with_param(
                        ParamDecl::new("provider", "com.P")
                            .with_kind(DependencyKind::Provider)
                            .with_qualifier("primary"),
                    ),
            ),
        )
        .with(trivial("com.L"))
        .with(trivial("com.P"));

    let (plans, _) = resolve_model(&model);

    assert_eq!(plan_order(&plans), ["com.Host", "com.L", "com.P"]);
    let host = get_plan(&plans, "com.Host");
    assert_eq!(host.parameters[0].kind, DependencyKind::Lazy);
    assert_eq!(host.parameters[1].qualifier.as_deref(), Some("primary"));
}

// =============================================================================
// SCOPE FLAGS
// =============================================================================

#[rstest]
#[case::explicit(injected("com.Scoped", &[]), PlanOrigin::Explicit)]
#[case::optimistic(trivial("com.Scoped"), PlanOrigin::Optimistic)]
fn test_scope_flags_independent_of_origin(#[case] scoped: TypeDecl, #[case] origin: PlanOrigin) {
    let model = ProgramModel::new()
        .with(field_host("com.Host", "com.Scoped"))
        .with(
            scoped
                .annotated("javax.inject.Singleton")
                .annotated("ProvidesSingleton"),
        );

    let (plans, _) = resolve_model(&model);

    let plan = get_plan(&plans, "com.Scoped");
    assert_origin(plan, origin);
    assert!(plan.is_singleton_scoped);
    assert!(plan.is_eager_singleton);
}

// =============================================================================
// IDEMPOTENCE & DETERMINISM
// =============================================================================

#[test]
fn test_type_reached_many_ways_has_one_plan() {
    let model = ProgramModel::new()
        .with(injected("com.Shared", &[]))
        .with(injected("com.A", &[("s", "com.Shared")]))
        .with(field_host("com.B", "com.Shared"))
        .with(
            TypeDecl::class("com.C")
                .with_method(MethodDecl::new("wire").marked().param("s", "com.Shared")),
        );

    let (plans, sink) = resolve_model(&model);

    assert_eq!(plan_order(&plans), ["com.Shared", "com.A"]);
    assert_origin(get_plan(&plans, "com.Shared"), PlanOrigin::Explicit);
    assert_no_diagnostics(&sink);
}

#[test]
fn test_two_runs_are_identical() {
    let model = service_graph()
        .with(trivial("app.Extra"))
        .with(field_host("app.Panel", "app.Extra"));

    let (first, first_sink) = resolve_model(&model);
    let (second, second_sink) = resolve_model(&model);

    assert!(first.iter().eq(second.iter()));
    assert_eq!(plan_order(&first), plan_order(&second));
    assert_eq!(first_sink.len(), second_sink.len());
}
