use crate::add;

use cvlr::prelude::*;

/// Verifies that `add` correctly computes the sum of two numbers.
#[rule]
pub fn rule_add_is_correct() {
    let x: u64 = nondet();
    let y: u64 = nondet();
    cvlr_assume!(x <= u64::MAX - y);
    let result = add(x, y);
    cvlr_assert_eq!(result, x + y);
}

/// Verifies that operand order does not change the sum.
#[rule]
pub fn rule_add_commutes() {
    let x: u64 = nondet();
    let y: u64 = nondet();
    cvlr_assume!(x <= u64::MAX - y);
    cvlr_assert_eq!(add(x, y), add(y, x));
}

#[rule]
pub fn rule_add_zero_is_identity() {
    let x: u64 = nondet();
    cvlr_assert_eq!(add(x, 0u64), x);
    cvlr_assert_eq!(add(0u64, x), x);
}
