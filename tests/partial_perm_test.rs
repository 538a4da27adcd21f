// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

mod common;

use common::{check_against_brute_force, init_tracing, pperm};
use konieczny::{Konieczny, PartialPerm};

fn symmetric_inverse_monoid(n: u8) -> Vec<PartialPerm> {
    let points: Vec<i8> = (0..n as i8).collect();
    let mut swap = points.clone();
    swap.swap(0, 1);
    let mut cycle = points.clone();
    cycle.rotate_left(1);
    let mut restrict = points;
    restrict[0] = -1;
    vec![pperm(&swap), pperm(&cycle), pperm(&restrict)]
}

#[test]
fn test_symmetric_inverse_monoid() {
    init_tracing();
    // |I_n| = sum over k of C(n, k)^2 k!
    for (n, size) in [(3, 34), (4, 209), (5, 1546)] {
        let mut s = Konieczny::new(symmetric_inverse_monoid(n)).unwrap();
        assert_eq!(s.size().unwrap(), size);
        assert_eq!(s.number_of_idempotents().unwrap(), 1 << n);
        assert_eq!(s.number_of_d_classes().unwrap(), n as usize + 1);
        assert_eq!(s.number_of_regular_elements().unwrap(), size);
    }
}

#[test]
fn test_empty_map_is_found() {
    let mut s = Konieczny::new(symmetric_inverse_monoid(3)).unwrap();
    let empty = pperm(&[-1, -1, -1]);
    assert!(s.contains(&empty).unwrap());
    let d = s.d_class_of_element(&empty).unwrap();
    assert_eq!(d.rank(), 0);
    assert_eq!(d.size(), 1);
}

#[test]
fn test_brute_force_comparisons() {
    let cases = vec![
        vec![pperm(&[1, 2, -1])],
        vec![pperm(&[1, 2, 3, -1]), pperm(&[0, -1, 2, 3])],
        vec![pperm(&[2, -1, 0, 1]), pperm(&[-1, 3, 1, 2])],
        vec![pperm(&[1, 0, -1, -1]), pperm(&[-1, 2, 3, 1])],
    ];
    for gens in &cases {
        check_against_brute_force(gens);
    }
}
