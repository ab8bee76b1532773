use actreader_core::errors::{ActReaderError, ExError, ExErrorKind, TypeNameError};
use actreader_core::TypeNameSimplifier;

#[test]
fn test_class_not_found_verifiable_by_kind() {
    let err = ActReaderError::ClassNotFound {
        class_name: "NS.Unknown".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::NotFound);
    assert_eq!(ex_err.code(), "ERR_NOT_FOUND");
    assert_eq!(ex_err.entity_id(), Some("NS.Unknown"));
}

#[test]
fn test_type_name_error_reports_violation_and_offset() {
    let err = TypeNameSimplifier::default()
        .try_simplify("Acme.Box`1<")
        .unwrap_err();

    assert_eq!(err, TypeNameError::TemplateTypeMissing { offset: 11 });
    assert_eq!(err.offset(), Some(11));
    assert!(err.to_string().contains("Template type is missing"));
}

#[test]
fn test_error_kind_code_mapping() {
    let kinds = vec![
        (ExErrorKind::InvalidInput, "ERR_INVALID_INPUT"),
        (ExErrorKind::NotFound, "ERR_NOT_FOUND"),
        (ExErrorKind::InvalidConfig, "ERR_INVALID_CONFIG"),
        (ExErrorKind::InvalidSnapshot, "ERR_INVALID_SNAPSHOT"),
        (ExErrorKind::UnsupportedInput, "ERR_UNSUPPORTED_INPUT"),
        (ExErrorKind::Io, "ERR_IO"),
        (ExErrorKind::Serialization, "ERR_SERIALIZATION"),
    ];

    for (kind, expected_code) in kinds {
        assert_eq!(kind.code(), expected_code);
    }
}

#[test]
fn test_source_chain_rendered_in_display() {
    let inner = ExError::new(ExErrorKind::Io).with_message("file vanished");
    let outer = ExError::new(ExErrorKind::InvalidSnapshot)
        .with_op("load_snapshot")
        .with_path("old/Acme.json")
        .with_source(inner);

    assert_eq!(outer.source_error().map(ExError::kind), Some(ExErrorKind::Io));
    let text = outer.to_string();
    assert!(text.starts_with("[ERR_INVALID_SNAPSHOT] in operation 'load_snapshot'"));
    assert!(text.contains("(path: old/Acme.json)"));
    assert!(text.ends_with("<- [ERR_IO]: file vanished"));
}
