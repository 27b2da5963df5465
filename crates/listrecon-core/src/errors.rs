use listrecon_core_types::{ItemId, Path};
use thiserror::Error;

/// Result type alias using ReconError
pub type Result<T> = std::result::Result<T, ReconError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Reconciliation itself never fails; every kind below describes a way an
/// edit-set can be inconsistent with the generations it is applied to, or a
/// failure at the tooling boundary (reading and writing generations).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Edit-set application
    SectionRangeNotAtTail,
    SectionCountMismatch,
    PathOutOfRange,
    SlotConflict,
    SectionLengthMismatch,
    ContentMismatch,

    // Integration/IO
    InvalidInput,
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::SectionRangeNotAtTail => "ERR_SECTION_RANGE_NOT_AT_TAIL",
            ExErrorKind::SectionCountMismatch => "ERR_SECTION_COUNT_MISMATCH",
            ExErrorKind::PathOutOfRange => "ERR_PATH_OUT_OF_RANGE",
            ExErrorKind::SlotConflict => "ERR_SLOT_CONFLICT",
            ExErrorKind::SectionLengthMismatch => "ERR_SECTION_LENGTH_MISMATCH",
            ExErrorKind::ContentMismatch => "ERR_CONTENT_MISMATCH",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// This error type provides a structured representation of errors with
/// classification fields for programmatic handling and rich context for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    item_id: Option<ItemId>,
    path: Option<Path>,
    section: Option<usize>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            item_id: None,
            path: None,
            section: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add item id context
    pub fn with_item_id(mut self, id: ItemId) -> Self {
        self.item_id = Some(id);
        self
    }

    /// Add path context
    pub fn with_path(mut self, path: Path) -> Self {
        self.path = Some(path);
        self
    }

    /// Add section context
    pub fn with_section(mut self, section: usize) -> Self {
        self.section = Some(section);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the item id context, if any
    pub fn item_id(&self) -> Option<&ItemId> {
        self.item_id.as_ref()
    }

    /// Get the path context, if any
    pub fn path(&self) -> Option<Path> {
        self.path
    }

    /// Get the section context, if any
    pub fn section(&self) -> Option<usize> {
        self.section
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(path) = self.path {
            write!(f, " (path: {})", path)?;
        }
        if let Some(section) = self.section {
            write!(f, " (section: {})", section)?;
        }
        if let Some(id) = &self.item_id {
            write!(f, " (item_id: {})", id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Which part of an edit-set an error was found in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditStage {
    Remove,
    Add,
    MoveFrom,
    MoveTo,
    Update,
}

impl std::fmt::Display for EditStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EditStage::Remove => "remove",
            EditStage::Add => "add",
            EditStage::MoveFrom => "move.from",
            EditStage::MoveTo => "move.to",
            EditStage::Update => "update",
        };
        f.write_str(name)
    }
}

/// Errors raised while applying an edit-set to a mirror of a generation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReconError {
    /// A section range does not start at the current end of the section list
    #[error("Section range {start}..{end} is not at the tail ({section_count} sections)")]
    SectionRangeNotAtTail {
        start: usize,
        end: usize,
        section_count: usize,
    },

    /// Section edits do not produce the expected number of sections
    #[error("Section count mismatch: expected {expected}, edit-set yields {actual}")]
    SectionCountMismatch { expected: usize, actual: usize },

    /// A path does not address an existing position
    #[error("{stage} path {path} is out of range")]
    PathOutOfRange { stage: EditStage, path: Path },

    /// Two edits claim the same position
    #[error("{stage} path {path} targets a position already claimed")]
    SlotConflict { stage: EditStage, path: Path },

    /// Survivors plus insertions do not fill a section exactly
    #[error("Section {section} length mismatch: expected {expected}, edit-set yields {actual}")]
    SectionLengthMismatch {
        section: usize,
        expected: usize,
        actual: usize,
    },

    /// The mirrored result disagrees with the generation it should reproduce
    #[error("Content mismatch at {path}: expected {expected}, found {found}")]
    ContentMismatch {
        path: Path,
        expected: ItemId,
        found: ItemId,
    },

    /// The mirrored item has the right id but an outdated version
    #[error("Stale version of {id} at {path}: missing update")]
    StaleVersion { path: Path, id: ItemId },
}

/// Conversion from ReconError to ExError
impl From<ReconError> for ExError {
    fn from(err: ReconError) -> Self {
        match err {
            ReconError::SectionRangeNotAtTail {
                start,
                end,
                section_count,
            } => ExError::new(ExErrorKind::SectionRangeNotAtTail)
                .with_section(start)
                .with_message(format!(
                    "Section range {}..{} is not at the tail of {} sections",
                    start, end, section_count
                )),

            ReconError::SectionCountMismatch { expected, actual } => {
                ExError::new(ExErrorKind::SectionCountMismatch).with_message(format!(
                    "Expected {} sections, edit-set yields {}",
                    expected, actual
                ))
            }

            ReconError::PathOutOfRange { stage, path } => {
                ExError::new(ExErrorKind::PathOutOfRange)
                    .with_path(path)
                    .with_message(format!("{} path is out of range", stage))
            }

            ReconError::SlotConflict { stage, path } => ExError::new(ExErrorKind::SlotConflict)
                .with_path(path)
                .with_message(format!("{} path targets a claimed position", stage)),

            ReconError::SectionLengthMismatch {
                section,
                expected,
                actual,
            } => ExError::new(ExErrorKind::SectionLengthMismatch)
                .with_section(section)
                .with_message(format!(
                    "Expected {} items, edit-set yields {}",
                    expected, actual
                )),

            ReconError::ContentMismatch {
                path,
                expected,
                found,
            } => ExError::new(ExErrorKind::ContentMismatch)
                .with_path(path)
                .with_item_id(found)
                .with_message(format!("Expected item {}", expected)),

            ReconError::StaleVersion { path, id } => ExError::new(ExErrorKind::ContentMismatch)
                .with_path(path)
                .with_item_id(id)
                .with_message("Item kept an outdated version"),
        }
    }
}
