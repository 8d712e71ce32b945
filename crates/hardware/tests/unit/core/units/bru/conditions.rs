//! Branch condition evaluation.

use mipsim_core::core::units::bru::{BranchCond, Bru};
use rstest::rstest;

const NEG: u32 = -1i32 as u32;
const MIN: u32 = 0x8000_0000;

#[rstest]
#[case(BranchCond::Eq, 5, 5, true)]
#[case(BranchCond::Eq, 5, 6, false)]
#[case(BranchCond::Ne, 5, 6, true)]
#[case(BranchCond::Ne, NEG, NEG, false)]
#[case(BranchCond::Lez, 0, 0, true)]
#[case(BranchCond::Lez, NEG, 0, true)]
#[case(BranchCond::Lez, 1, 0, false)]
#[case(BranchCond::Gtz, 1, 0, true)]
#[case(BranchCond::Gtz, 0, 0, false)]
#[case(BranchCond::Gtz, MIN, 0, false)]
#[case(BranchCond::Ltz, MIN, 0, true)]
#[case(BranchCond::Ltz, 0, 0, false)]
#[case(BranchCond::Gez, 0, 0, true)]
#[case(BranchCond::Gez, 0x7FFF_FFFF, 0, true)]
#[case(BranchCond::Gez, NEG, 0, false)]
fn condition_outcomes(#[case] cond: BranchCond, #[case] a: u32, #[case] b: u32, #[case] taken: bool) {
    assert_eq!(Bru::taken(cond, a, b), taken);
}

#[test]
fn zero_compare_forms_ignore_rt() {
    for b in [0, 1, NEG, MIN] {
        assert!(Bru::taken(BranchCond::Ltz, NEG, b));
        assert!(!Bru::taken(BranchCond::Gtz, 0, b));
    }
}
