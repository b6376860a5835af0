//! End-to-end test: a non-negative counter taken through accepted writes,
//! rejected writes, and an operator result that escapes the validator.

use entity_core::{Entity, ValidationRejected};

fn counter() -> Entity<i64> {
    Entity::with_validator(5, |v| *v >= 0)
}

#[test]
fn counter_rejects_then_accepts() {
    let mut c = counter();

    assert!(!c.set(-1));
    assert_eq!(*c.get(), 5);

    assert!(c.set(3));
    assert_eq!(*c.get(), 3);

    assert!(c.increment());
    assert_eq!(*c.get(), 4);
}

#[test]
fn negated_copy_has_fresh_validator() {
    let mut c = counter();
    c.set(3);
    c.increment();

    let mut flipped = &c * -1;
    assert_eq!(*flipped.get(), -4);
    assert!(flipped.set(-4));
    assert_eq!(*flipped.get(), -4);

    // The original still refuses the same value.
    assert!(!c.set(-4));
    assert_eq!(*c.get(), 4);
}

#[test]
fn compound_assign_loses_outcome_update_keeps_it() {
    let mut c = counter();

    c -= 10;
    assert_eq!(*c.get(), 5);

    let outcome = c.try_update(|v| v - 10);
    assert_eq!(outcome, Err(ValidationRejected::new(-5)));
    assert_eq!(*c.get(), 5);

    assert!(c.update(|v| v - 5));
    assert_eq!(*c.get(), 0);
}

#[test]
fn validator_swapped_mid_life() {
    let mut c = counter();
    c.set_validator(|v| v % 2 == 0);

    // Current odd value survives the swap.
    assert_eq!(*c.get(), 5);
    assert!(c.increment());
    assert_eq!(*c.get(), 6);
    assert!(!c.increment());
    assert_eq!(*c.get(), 6);
}

#[test]
fn postfix_snapshot_keeps_prior_state() {
    let mut c = counter();
    let before = c.post_decrement();
    assert_eq!(*before.get(), 5);
    assert_eq!(*c.get(), 4);
    assert_eq!(before.shadow, 5);
}
