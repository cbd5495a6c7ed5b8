// SPDX-FileCopyrightText: 2025 The rowset authors
// SPDX-License-Identifier: MIT

//! Property tests for result set copying and comparison.

use proptest::prelude::any;
use proptest::{prop_assert, prop_assert_eq, proptest};
use rowset_core::{Mixed, Record, ResultSet, row_equal, row_same};
use rowset_utils_test::{arb_mixed, arb_result_set, arb_result_set_with_range};

proptest! {
    #[test]
    fn copy_matches_source_slice((source, start, length) in arb_result_set_with_range(12)) {
        let copy = source.copy(start, length);
        prop_assert_eq!(copy.count(), length);
        for i in 0..length {
            prop_assert!(row_equal(&copy, i, &source, start + i));
            prop_assert!(row_same(&copy, i, &source, start + i));
        }
    }

    #[test]
    fn copy_survives_source_release((source, start, length) in arb_result_set_with_range(12)) {
        let expected = source.rows()[start..start + length].to_vec();
        let copy = source.copy(start, length);
        source.release();
        prop_assert_eq!(copy.ref_count(), 1);
        prop_assert_eq!(copy.rows(), &expected[..]);
    }

    #[test]
    fn try_copy_rejects_ranges_past_the_end(rs in arb_result_set(8), extra in 1usize..4) {
        let count = rs.count();
        prop_assert!(rs.try_copy(0, count + extra).is_err());
        prop_assert!(rs.try_copy(count + extra, 0).is_err());
    }

    #[test]
    fn rows_with_distinct_ids_are_never_same(rs in arb_result_set(8)) {
        for i in 0..rs.count() {
            for j in 0..rs.count() {
                prop_assert_eq!(rs.row_same(i, &rs, j), i == j);
            }
        }
    }

    #[test]
    fn row_equal_implies_row_same(a in arb_mixed(), b in arb_mixed()) {
        let left = ResultSet::from_rows(vec![a]);
        let right = ResultSet::from_rows(vec![b]);
        if left.row_equal(0, &right, 0) {
            prop_assert!(left.row_same(0, &right, 0));
        }
    }

    #[test]
    fn changing_code_keeps_identity(row in arb_mixed(), code in any::<i64>()) {
        let changed: Mixed = Mixed { code: Some(code), ..row.clone() };
        let before = ResultSet::from_rows(vec![row.clone()]);
        let after = ResultSet::from_rows(vec![changed]);
        prop_assert!(before.row_same(0, &after, 0));
        prop_assert_eq!(before.row_equal(0, &after, 0), row.code == Some(code));
    }

    #[test]
    fn generated_rows_conform_to_schema(row in arb_mixed()) {
        prop_assert!(row.conforms());
        prop_assert_eq!(row.values().count(), Mixed::COLUMNS.len());
    }
}
