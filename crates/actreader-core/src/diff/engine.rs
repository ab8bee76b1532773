//! Ordered merge-diff engine.
//!
//! Both levels walk two ordinally sorted sequences in lock-step. Entries
//! present on one side only are reported as such; equal keys are compared
//! (recursing into properties at class level) and both cursors advance.

use crate::catalogue::Catalogue;
use crate::diff::model::{DiffEvent, DiffSink, TypeSensitivity};
use crate::model::{ClassEntry, PropertyEntry};
use crate::{log_op_end, log_op_start};
use std::cmp::Ordering;
use std::time::Instant;

/// Catalogue comparator for one type sensitivity mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassComparator {
    sensitivity: TypeSensitivity,
}

impl ClassComparator {
    pub fn new(sensitivity: TypeSensitivity) -> Self {
        Self { sensitivity }
    }

    pub fn sensitivity(&self) -> TypeSensitivity {
        self.sensitivity
    }

    /// Diff two catalogues, returning the number of difference events
    ///
    /// Only public, concrete activity classes take part; each side's
    /// accessibility is judged against its own catalogue.
    pub fn compare_catalogues<S>(&self, first: &Catalogue, second: &Catalogue, sink: &mut S) -> usize
    where
        S: DiffSink + ?Sized,
    {
        let start = Instant::now();
        log_op_start!(
            "compare_catalogues",
            first_classes = first.len(),
            second_classes = second.len()
        );

        let mut left = first.classes().peekable();
        let mut right = second.classes().peekable();
        let mut differences = 0;

        while let (Some(&l), Some(&r)) = (left.peek(), right.peek()) {
            if !first.is_accessible_activity(l) {
                tracing::trace!(class_name = l.simple_name(), "skipping inaccessible class");
                left.next();
                continue;
            }
            if !second.is_accessible_activity(r) {
                tracing::trace!(class_name = r.simple_name(), "skipping inaccessible class");
                right.next();
                continue;
            }
            match l.simple_name().cmp(r.simple_name()) {
                Ordering::Less => {
                    differences += only_in_first(first, l, sink);
                    left.next();
                }
                Ordering::Greater => {
                    differences += only_in_second(second, r, sink);
                    right.next();
                }
                Ordering::Equal => {
                    differences += self.compare_classes(first, l, second, r, sink);
                    left.next();
                    right.next();
                }
            }
        }

        for l in left.filter(|c| first.is_accessible_activity(c)) {
            differences += only_in_first(first, l, sink);
        }
        for r in right.filter(|c| second.is_accessible_activity(c)) {
            differences += only_in_second(second, r, sink);
        }

        log_op_end!(
            "compare_catalogues",
            duration_ms = start.elapsed().as_millis() as u64,
            differences = differences
        );
        differences
    }

    /// Diff the resolved property sets of one class in two catalogues
    ///
    /// The classes are compared unconditionally, accessible or not.
    pub fn compare_classes<S>(
        &self,
        first: &Catalogue,
        first_class: &ClassEntry,
        second: &Catalogue,
        second_class: &ClassEntry,
        sink: &mut S,
    ) -> usize
    where
        S: DiffSink + ?Sized,
    {
        self.compare_properties(
            first.properties(first_class),
            second.properties(second_class),
            sink,
        )
    }

    /// Merge two property sequences sorted by display name
    pub fn compare_properties<S>(
        &self,
        first: &[PropertyEntry],
        second: &[PropertyEntry],
        sink: &mut S,
    ) -> usize
    where
        S: DiffSink + ?Sized,
    {
        let mut left = first.iter().peekable();
        let mut right = second.iter().peekable();
        let mut differences = 0;

        while let (Some(&l), Some(&r)) = (left.peek(), right.peek()) {
            match l.display_name.cmp(&r.display_name) {
                Ordering::Less => {
                    sink.on_event(DiffEvent::PropertyOnlyInFirst { property: l });
                    differences += 1;
                    left.next();
                }
                Ordering::Greater => {
                    sink.on_event(DiffEvent::PropertyOnlyInSecond { property: r });
                    differences += 1;
                    right.next();
                }
                Ordering::Equal => {
                    if self.sensitivity.compares_types() && l.type_full_name != r.type_full_name {
                        sink.on_event(DiffEvent::PropertyOnlyInFirst { property: l });
                        sink.on_event(DiffEvent::PropertyOnlyInSecond { property: r });
                        differences += 2;
                    } else {
                        sink.on_event(DiffEvent::PropertyMatch { property: l });
                    }
                    left.next();
                    right.next();
                }
            }
        }

        for l in left {
            sink.on_event(DiffEvent::PropertyOnlyInFirst { property: l });
            differences += 1;
        }
        for r in right {
            sink.on_event(DiffEvent::PropertyOnlyInSecond { property: r });
            differences += 1;
        }
        differences
    }
}

fn only_in_first<S>(catalogue: &Catalogue, class: &ClassEntry, sink: &mut S) -> usize
where
    S: DiffSink + ?Sized,
{
    sink.on_event(DiffEvent::ClassOnlyInFirst {
        class,
        properties: catalogue.properties(class),
    });
    1
}

fn only_in_second<S>(catalogue: &Catalogue, class: &ClassEntry, sink: &mut S) -> usize
where
    S: DiffSink + ?Sized,
{
    sink.on_event(DiffEvent::ClassOnlyInSecond {
        class,
        properties: catalogue.properties(class),
    });
    1
}
