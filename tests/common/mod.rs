// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use konieczny::{BooleanMat, Element, Konieczny, KoniecznyAdapter, PartialPerm, Transformation};
use std::collections::HashSet;
use tracing_subscriber::EnvFilter;

/// Install a subscriber honouring `RUST_LOG`, once per test binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn transf(images: &[u8]) -> Transformation {
    Transformation::new(images.to_vec()).unwrap()
}

/// `None` entries, written as `-1`, are undefined points.
pub fn pperm(images: &[i8]) -> PartialPerm {
    PartialPerm::new(
        images
            .iter()
            .map(|&i| u8::try_from(i).ok())
            .collect(),
    )
    .unwrap()
}

pub fn bmat(entries: &[&[u8]]) -> BooleanMat {
    BooleanMat::from_entries(entries).unwrap()
}

/// Every element of the semigroup generated by `gens`, by breadth-first
/// right multiplication.
pub fn brute_force<E: Element>(gens: &[E]) -> Vec<E> {
    let mut seen: HashSet<E> = gens.iter().cloned().collect();
    let mut elements: Vec<E> = seen.iter().cloned().collect();
    let mut i = 0;
    while i < elements.len() {
        for g in gens {
            let y = E::product(&elements[i], g);
            if seen.insert(y.clone()) {
                elements.push(y);
            }
        }
        i += 1;
    }
    elements.sort();
    elements
}

/// Elements `x` with some `y` in `elements` such that `x * y * x == x`.
pub fn brute_force_regular<E: Element>(elements: &[E]) -> usize {
    elements
        .iter()
        .filter(|x| {
            elements
                .iter()
                .any(|y| E::product(&E::product(x, y), x) == **x)
        })
        .count()
}

/// Compare every count against a brute-force enumeration and check that
/// each element lies in exactly one D-class.
pub fn check_against_brute_force<E: KoniecznyAdapter>(gens: &[E]) {
    let elements = brute_force(gens);
    let mut s = Konieczny::new(gens.to_vec()).unwrap();

    assert_eq!(s.size().unwrap(), elements.len(), "size of {:?}", gens);
    assert_eq!(
        s.number_of_idempotents().unwrap(),
        elements.iter().filter(|x| x.is_idempotent()).count(),
        "idempotents of {:?}",
        gens
    );
    assert_eq!(
        s.number_of_regular_elements().unwrap(),
        brute_force_regular(&elements),
        "regular elements of {:?}",
        gens
    );

    for x in &elements {
        assert!(s.contains(x).unwrap(), "{:?} missing from {:?}", x, gens);
        let classes = s
            .d_classes()
            .unwrap()
            .iter()
            .filter(|d| d.contains_element(x))
            .count();
        assert_eq!(classes, 1, "{:?} in {} D-classes", x, classes);
    }

    let total: usize = s.d_classes().unwrap().iter().map(|d| d.size()).sum();
    assert_eq!(total, elements.len());
}
