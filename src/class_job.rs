//! Class/job icon derivation
//!
//! Jobs with a nonzero job index use the job icon range at 62400. Base
//! classes and a few early jobs carry no usable icon reference and are
//! mapped through a legacy table into the 62300 range.

use crate::types::{ClassJobRecord, IconId};

/// Base of the icon range addressed by job index
pub const JOB_ICON_BASE: IconId = 62400;

/// Base of the legacy class icon range
pub const CLASS_ICON_BASE: IconId = 62300;

/// Legacy row id to icon offset mapping. Keep verbatim: the entries do not
/// follow a formula.
const LEGACY_CLASS_OFFSETS: [(u32, IconId); 20] = [
    (1, 1),
    (2, 2),
    (3, 3),
    (4, 4),
    (5, 5),
    (6, 6),
    (7, 7),
    (8, 10),
    (9, 11),
    (10, 12),
    (11, 13),
    (12, 14),
    (13, 15),
    (14, 16),
    (15, 17),
    (16, 18),
    (17, 19),
    (18, 20),
    (26, 8),
    (29, 9),
];

/// Offset into the legacy class range for a row, 0 when the row is unknown
pub fn legacy_offset(row_id: u32) -> IconId {
    LEGACY_CLASS_OFFSETS
        .iter()
        .find(|(row, _)| *row == row_id)
        .map(|(_, offset)| *offset)
        .unwrap_or(0)
}

/// Icon identifier for a class/job row
pub fn class_job_icon(record: &ClassJobRecord) -> IconId {
    if record.job_index != 0 {
        JOB_ICON_BASE + IconId::from(record.job_index)
    } else {
        CLASS_ICON_BASE + legacy_offset(record.row_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(row_id: u32) -> ClassJobRecord {
        ClassJobRecord { row_id, job_index: 0 }
    }

    #[test]
    fn test_job_index_takes_precedence() {
        let record = ClassJobRecord { row_id: 19, job_index: 1 };
        assert_eq!(class_job_icon(&record), 62401);

        // Row id is ignored once a job index is present
        let record = ClassJobRecord { row_id: 8, job_index: 12 };
        assert_eq!(class_job_icon(&record), 62412);
    }

    #[test]
    fn test_legacy_table() {
        assert_eq!(class_job_icon(&class(1)), 62301);
        assert_eq!(class_job_icon(&class(7)), 62307);
        assert_eq!(class_job_icon(&class(8)), 62310);
        assert_eq!(class_job_icon(&class(18)), 62320);
        assert_eq!(class_job_icon(&class(26)), 62308);
        assert_eq!(class_job_icon(&class(29)), 62309);
    }

    #[test]
    fn test_unknown_rows_fall_back_to_base() {
        assert_eq!(legacy_offset(0), 0);
        assert_eq!(legacy_offset(19), 0);
        assert_eq!(class_job_icon(&class(99)), CLASS_ICON_BASE);
    }
}
