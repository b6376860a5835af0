//! End-to-end test: non-numeric element types.

use std::collections::{BTreeMap, HashSet};

use entity_core::{Entity, Validator};

#[test]
fn bounded_string() {
    let mut name = Entity::with_validator(String::from("ada"), |s| s.len() <= 8);

    assert!(!name.update(|s| format!("{s}-lovelace")));
    assert_eq!(name.as_str(), "ada");

    assert!(name.update(|s| format!("{s}-l")));
    assert_eq!(name.as_str(), "ada-l");
    assert_eq!(name.shadow, "ada-l");

    let err = name.try_set(String::from("augusta ada")).unwrap_err();
    assert_eq!(err.into_candidate(), "augusta ada");
    assert_eq!(name.to_string(), "ada-l");
}

#[test]
fn float_range() {
    let mut ratio = Entity::with_validator(0.5f64, |r| (0.0..=1.0).contains(r));
    ratio *= 1.5;
    assert_eq!(*ratio.get(), 0.75);
    ratio *= 2.0;
    assert_eq!(*ratio.get(), 0.75);
    assert!(ratio.set(1.0));
    assert!(!ratio.set(f64::NAN));
}

#[test]
fn boolean_complement_and_logic() {
    let on = Entity::new(true);
    let off = !&on;
    assert!(!*off.get());
    assert!(on.logical_or(&off));
    assert!(!on.logical_and(&off));
    assert!(off.logical_not());
}

#[test]
fn map_lookup_forwards() {
    let mut table = BTreeMap::new();
    table.insert("alpha", 1);
    table.insert("beta", 2);
    let e = Entity::new(table);

    assert_eq!(e["beta"], 2);
    assert_eq!(e.len(), 2);
}

#[test]
fn entities_hash_like_their_values() {
    let mut seen = HashSet::new();
    seen.insert(Entity::new(1u32));
    seen.insert(Entity::with_validator(1u32, |_| false));
    seen.insert(Entity::new(2u32));
    assert_eq!(seen.len(), 2);
}

#[test]
fn shared_validator_across_instances() {
    let even = Validator::new(|v: &u64| v % 2 == 0);
    let mut a = Entity::new(0u64);
    let mut b = Entity::new(10u64);
    a.replace_validator(even.clone());
    b.replace_validator(even);

    assert!(!a.set(3));
    assert!(b.set(12));
    assert!(a.validator().ptr_eq(&b.validator()));
}

#[test]
fn sorting_orders_by_value() {
    let mut v = vec![Entity::new(3i32), Entity::new(-1), Entity::new(2)];
    v.sort();
    let values: Vec<i32> = v.iter().map(|e| *e.get()).collect();
    assert_eq!(values, vec![-1, 2, 3]);
}
