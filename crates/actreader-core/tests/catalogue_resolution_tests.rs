#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use actreader_core::catalogue::MAX_ANCESTOR_HOPS;
use actreader_core::{ClassFacts, PropertyFacts};
use common::{activity, catalogue, display_names, prop, ROOT};

#[test]
fn test_inherited_property_decorated_relative_to_namespace() {
    let cat = catalogue(vec![
        activity("NS.Base").with_property(prop("PropName", "System.String")),
        ClassFacts::new("NS.Derived")
            .with_base("NS.Base")
            .with_property(prop("Extra", "System.Int32")),
    ]);

    assert_eq!(display_names(&cat, "NS.Derived"), vec!["Base::PropName", "Extra"]);

    let derived = cat.get_class("NS.Derived").unwrap();
    let inherited = &cat.properties(derived)[0];
    assert_eq!(inherited.owning_class, "NS.Base");
    assert_eq!(inherited.resolved_for, "NS.Derived");
    assert!(inherited.is_inherited());
}

#[test]
fn test_inherited_property_from_other_namespace_keeps_full_name() {
    let cat = catalogue(vec![
        activity("Other.Base").with_property(prop("PropName", "System.String")),
        ClassFacts::new("NS.Derived").with_base("Other.Base"),
    ]);

    assert_eq!(display_names(&cat, "NS.Derived"), vec!["Other.Base::PropName"]);
}

#[test]
fn test_class_without_namespace_decorates_with_full_ancestor_name() {
    let cat = catalogue(vec![
        activity("NS.Base").with_property(prop("PropName", "System.String")),
        ClassFacts::new("Derived").with_base("NS.Base"),
    ]);

    assert_eq!(display_names(&cat, "Derived"), vec!["NS.Base::PropName"]);
}

#[test]
fn test_virtual_override_suppresses_ancestor_entry() {
    let cat = catalogue(vec![
        activity("NS.Base")
            .with_property(prop("Text", "System.String").virtual_getter())
            .with_property(prop("Plain", "System.String")),
        ClassFacts::new("NS.Derived")
            .with_base("NS.Base")
            .with_property(prop("Text", "System.String"))
            .with_property(prop("Plain", "System.String")),
    ]);

    // Non-virtual shadowing is not an override and keeps both entries.
    assert_eq!(
        display_names(&cat, "NS.Derived"),
        vec!["Base::Plain", "Plain", "Text"]
    );
}

#[test]
fn test_override_declared_on_intermediate_ancestor_is_not_detected() {
    let cat = catalogue(vec![
        activity("NS.Base").with_property(prop("Text", "System.String").virtual_getter()),
        ClassFacts::new("NS.Middle")
            .with_base("NS.Base")
            .with_property(prop("Text", "System.String").virtual_getter()),
        ClassFacts::new("NS.Leaf").with_base("NS.Middle"),
    ]);

    assert_eq!(
        display_names(&cat, "NS.Leaf"),
        vec!["Base::Text", "Middle::Text"]
    );
}

#[test]
fn test_root_class_properties_are_not_inherited() {
    let cat = catalogue(vec![
        ClassFacts::new(ROOT).with_property(prop("DisplayName", "System.String")),
        activity("NS.Widget").with_property(prop("Size", "System.Int32")),
    ]);

    assert_eq!(display_names(&cat, "NS.Widget"), vec!["Size"]);
}

#[test]
fn test_ineligible_properties_are_invisible() {
    let mut read_only = prop("ReadOnly", "System.String");
    read_only.has_setter = false;
    let mut shared = prop("Shared", "System.String");
    shared.is_static = true;

    let cat = catalogue(vec![activity("NS.Widget")
        .with_property(read_only)
        .with_property(shared)
        .with_property(prop("Visible", "System.Boolean"))]);

    assert_eq!(display_names(&cat, "NS.Widget"), vec!["Visible"]);
}

#[test]
fn test_resolved_set_sorted_ordinally() {
    let cat = catalogue(vec![activity("NS.Widget")
        .with_property(prop("beta", "System.String"))
        .with_property(prop("Alpha", "System.String"))
        .with_property(prop("Beta", "System.String"))]);

    assert_eq!(display_names(&cat, "NS.Widget"), vec!["Alpha", "Beta", "beta"]);
}

#[test]
fn test_property_set_is_memoized() {
    let cat = catalogue(vec![activity("NS.Widget").with_property(prop("Size", "System.Int32"))]);
    let widget = cat.get_class("NS.Widget").unwrap();

    let first = cat.properties(widget);
    let second = cat.properties(widget);

    assert!(std::ptr::eq(first, second));
}

#[test]
fn test_generic_arity_is_stripped_for_ancestor_lookup() {
    let cat = catalogue(vec![
        activity("NS.Holder`1").with_property(prop("Value", "T")),
        ClassFacts::new("NS.IntHolder").with_base("NS.Holder`1"),
    ]);

    let holder = cat.get_class("NS.IntHolder").unwrap();
    assert!(cat.is_activity(holder));
    assert_eq!(display_names(&cat, "NS.IntHolder"), vec!["Holder::Value"]);
}

#[test]
fn test_unresolvable_ancestor_is_not_activity() {
    let cat = catalogue(vec![ClassFacts::new("NS.Orphan")
        .with_base("Missing.Base")
        .with_property(prop("Own", "System.String"))]);

    let orphan = cat.get_class("NS.Orphan").unwrap();
    assert!(!cat.is_activity(orphan));
    assert_eq!(display_names(&cat, "NS.Orphan"), vec!["Own"]);
}

#[test]
fn test_cycle_terminates_and_is_not_activity() {
    let cat = catalogue(vec![
        ClassFacts::new("NS.A")
            .with_base("NS.B")
            .with_property(prop("InA", "System.String")),
        ClassFacts::new("NS.B")
            .with_base("NS.A")
            .with_property(prop("InB", "System.String")),
    ]);

    let a = cat.get_class("NS.A").unwrap();
    assert!(!cat.is_activity(a));
    // The walk comes back round to NS.A itself before the hop bound stops it.
    assert_eq!(display_names(&cat, "NS.A"), vec!["A::InA", "B::InB", "InA"]);
}

#[test]
fn test_activity_check_is_bounded() {
    // NS.C00 -> NS.C01 -> ... -> NS.C30 -> ROOT
    let mut classes = Vec::new();
    for i in 0..=MAX_ANCESTOR_HOPS {
        let base = if i == MAX_ANCESTOR_HOPS {
            ROOT.to_string()
        } else {
            format!("NS.C{:02}", i + 1)
        };
        classes.push(
            ClassFacts::new(format!("NS.C{:02}", i))
                .with_base(base)
                .with_property(PropertyFacts::new(format!("P{:02}", i), "System.Int32")),
        );
    }
    let cat = catalogue(classes);

    let near = cat.get_class("NS.C01").unwrap();
    let far = cat.get_class("NS.C00").unwrap();
    assert!(cat.is_activity(near));
    assert!(!cat.is_activity(far));

    // C00 sees the properties of exactly 30 ancestors plus its own.
    assert_eq!(cat.properties(far).len(), MAX_ANCESTOR_HOPS + 1);
}

#[test]
fn test_select_by_package_returns_activities_only() {
    let cat = catalogue(vec![
        activity("NS.Click"),
        ClassFacts::new("NS.Helper"),
        activity("NS.Abstract").with_visibility(true, true),
    ]);

    let names: Vec<_> = cat
        .select_by_package("Test.Activities.dll")
        .map(|c| c.simple_name().to_string())
        .collect();
    assert_eq!(names, vec!["NS.Abstract", "NS.Click"]);
    assert_eq!(cat.select_by_package("Other.dll").count(), 0);
}
