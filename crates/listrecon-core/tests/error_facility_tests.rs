use listrecon_core::errors::{EditStage, ExError, ExErrorKind, ReconError};
use listrecon_core::{ItemId, Path};

#[test]
fn test_path_out_of_range_carries_path() {
    let err = ReconError::PathOutOfRange {
        stage: EditStage::MoveTo,
        path: Path::new(2, 5),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::PathOutOfRange);
    assert_eq!(ex_err.code(), "ERR_PATH_OUT_OF_RANGE");
    assert_eq!(ex_err.path(), Some(Path::new(2, 5)));
    assert!(ex_err.message().contains("move.to"));
}

#[test]
fn test_slot_conflict_distinct_from_out_of_range() {
    let err = ReconError::SlotConflict {
        stage: EditStage::Remove,
        path: Path::new(0, 0),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::SlotConflict);
    assert_ne!(ex_err.kind(), ExErrorKind::PathOutOfRange);
    assert_eq!(ex_err.path(), Some(Path::new(0, 0)));
}

#[test]
fn test_section_errors_carry_section() {
    let ex_err: ExError = ReconError::SectionLengthMismatch {
        section: 3,
        expected: 4,
        actual: 2,
    }
    .into();
    assert_eq!(ex_err.kind(), ExErrorKind::SectionLengthMismatch);
    assert_eq!(ex_err.section(), Some(3));
    assert!(ex_err.message().contains("Expected 4 items"));

    let ex_err: ExError = ReconError::SectionRangeNotAtTail {
        start: 0,
        end: 1,
        section_count: 2,
    }
    .into();
    assert_eq!(ex_err.kind(), ExErrorKind::SectionRangeNotAtTail);
    assert_eq!(ex_err.section(), Some(0));
}

#[test]
fn test_content_errors_carry_item_id() {
    let ex_err: ExError = ReconError::ContentMismatch {
        path: Path::new(1, 1),
        expected: ItemId::new("want"),
        found: ItemId::new("got"),
    }
    .into();
    assert_eq!(ex_err.kind(), ExErrorKind::ContentMismatch);
    assert_eq!(ex_err.item_id(), Some(&ItemId::new("got")));
    assert!(ex_err.message().contains("want"));

    let ex_err: ExError = ReconError::StaleVersion {
        path: Path::new(0, 2),
        id: ItemId::new("old"),
    }
    .into();
    assert_eq!(ex_err.kind(), ExErrorKind::ContentMismatch);
    assert_eq!(ex_err.item_id(), Some(&ItemId::new("old")));
}

#[test]
fn test_error_kind_code_mapping() {
    let kinds = vec![
        (ExErrorKind::SectionRangeNotAtTail, "ERR_SECTION_RANGE_NOT_AT_TAIL"),
        (ExErrorKind::SectionCountMismatch, "ERR_SECTION_COUNT_MISMATCH"),
        (ExErrorKind::PathOutOfRange, "ERR_PATH_OUT_OF_RANGE"),
        (ExErrorKind::SlotConflict, "ERR_SLOT_CONFLICT"),
        (ExErrorKind::SectionLengthMismatch, "ERR_SECTION_LENGTH_MISMATCH"),
        (ExErrorKind::ContentMismatch, "ERR_CONTENT_MISMATCH"),
        (ExErrorKind::InvalidInput, "ERR_INVALID_INPUT"),
        (ExErrorKind::Io, "ERR_IO"),
        (ExErrorKind::Serialization, "ERR_SERIALIZATION"),
    ];

    for (kind, expected_code) in kinds {
        assert_eq!(kind.code(), expected_code);
    }
}

#[test]
fn test_ex_error_builder_and_display() {
    let err = ExError::new(ExErrorKind::InvalidInput)
        .with_op("replay")
        .with_section(1)
        .with_message("generation 2 is not a list of sections");

    assert_eq!(err.op(), Some("replay"));
    assert_eq!(
        err.to_string(),
        "[ERR_INVALID_INPUT] in operation 'replay': generation 2 is not a list of sections (section: 1)"
    );
}

#[test]
fn test_recon_error_display() {
    let err = ReconError::SectionCountMismatch {
        expected: 3,
        actual: 2,
    };
    assert_eq!(
        err.to_string(),
        "Section count mismatch: expected 3, edit-set yields 2"
    );
}
