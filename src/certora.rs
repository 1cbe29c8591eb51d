use crate::add;

use cvlr::prelude::*;

/// Verifies that `add` computes the wrapping sum of its operands.
#[rule]
pub fn rule_add_is_correct() {
    let x: i32 = nondet();
    let y: i32 = nondet();
    let result = add(x, y);
    cvlr_assert_eq!(result, x.wrapping_add(y));
}

/// Verifies that `add` is commutative.
#[rule]
pub fn rule_add_commutes() {
    let x: i32 = nondet();
    let y: i32 = nondet();
    cvlr_assert_eq!(add(x, y), add(y, x));
}

/// Verifies that zero is the additive identity for `add`.
#[rule]
pub fn rule_add_zero_identity() {
    let x: i32 = nondet();
    cvlr_assert_eq!(add(x, 0), x);
    cvlr_assert_eq!(add(0, x), x);
}
