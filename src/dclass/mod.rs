// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! D-classes.
//!
//! A D-class is described by a representative `rep`, its H-class, and two
//! lists of coset representatives:
//! - left reps `rep * left_mults[i]`, one per L-class in the R-class of `rep`
//! - right reps `right_mults[j] * rep`, one per R-class in the L-class of `rep`
//!
//! with inverse multipliers taking each back to `rep`. Every element of the
//! class is `right_mults[j] * h * left_mults[i]` for exactly one triple, so
//! the size is `|H| * |left reps| * |right reps|`.
//!
//! Tables are filled in by `init`, exactly once, after which the class is
//! read only.

pub mod non_regular;
pub mod regular;

pub use non_regular::NonRegularDClass;
pub use regular::RegularDClass;

use crate::adapters::KoniecznyAdapter;
use std::collections::HashSet;

/// Tables shared by both kinds of D-class.
#[derive(Debug, Clone)]
pub struct DClassData<E> {
    rep: E,
    rank: usize,
    computed: bool,
    h_class: Vec<E>,
    h_set: HashSet<E>,
    left_reps: Vec<E>,
    left_mults: Vec<E>,
    left_mults_inv: Vec<E>,
    right_reps: Vec<E>,
    right_mults: Vec<E>,
    right_mults_inv: Vec<E>,
}

impl<E: KoniecznyAdapter> DClassData<E> {
    fn new(rep: E) -> Self {
        Self {
            rank: E::rank(&rep),
            rep,
            computed: false,
            h_class: Vec::new(),
            h_set: HashSet::new(),
            left_reps: Vec::new(),
            left_mults: Vec::new(),
            left_mults_inv: Vec::new(),
            right_reps: Vec::new(),
            right_mults: Vec::new(),
            right_mults_inv: Vec::new(),
        }
    }

    fn set_h_class(&mut self, h_class: Vec<E>) {
        self.h_set = h_class.iter().cloned().collect();
        self.h_class = h_class;
    }

    /// Is `right_mults_inv[j] * x * left_mults_inv[i]` in the H-class of `rep`?
    fn h_class_contains(&self, x: &E, i: usize, j: usize) -> bool {
        let y = E::product(&E::product(&self.right_mults_inv[j], x), &self.left_mults_inv[i]);
        self.h_set.contains(&y)
    }
}

#[derive(Debug, Clone)]
pub enum DClass<E: KoniecznyAdapter> {
    Regular(RegularDClass<E>),
    NonRegular(NonRegularDClass<E>),
}

impl<E: KoniecznyAdapter> DClass<E> {
    fn data(&self) -> &DClassData<E> {
        match self {
            DClass::Regular(d) => &d.data,
            DClass::NonRegular(d) => &d.data,
        }
    }

    pub fn rep(&self) -> &E {
        &self.data().rep
    }

    pub fn rank(&self) -> usize {
        self.data().rank
    }

    pub fn is_regular(&self) -> bool {
        matches!(self, DClass::Regular(_))
    }

    pub fn is_computed(&self) -> bool {
        self.data().computed
    }

    pub fn as_regular(&self) -> Option<&RegularDClass<E>> {
        match self {
            DClass::Regular(d) => Some(d),
            DClass::NonRegular(_) => None,
        }
    }

    pub fn as_non_regular(&self) -> Option<&NonRegularDClass<E>> {
        match self {
            DClass::Regular(_) => None,
            DClass::NonRegular(d) => Some(d),
        }
    }

    pub fn size(&self) -> usize {
        let data = self.data();
        data.h_class.len() * data.left_reps.len() * data.right_reps.len()
    }

    pub fn h_class(&self) -> &[E] {
        &self.data().h_class
    }

    pub fn left_reps(&self) -> &[E] {
        &self.data().left_reps
    }

    pub fn left_mults(&self) -> &[E] {
        &self.data().left_mults
    }

    pub fn left_mults_inv(&self) -> &[E] {
        &self.data().left_mults_inv
    }

    pub fn right_reps(&self) -> &[E] {
        &self.data().right_reps
    }

    pub fn right_mults(&self) -> &[E] {
        &self.data().right_mults
    }

    pub fn right_mults_inv(&self) -> &[E] {
        &self.data().right_mults_inv
    }

    pub fn number_of_l_classes(&self) -> usize {
        self.data().left_reps.len()
    }

    pub fn number_of_r_classes(&self) -> usize {
        self.data().right_reps.len()
    }

    pub fn number_of_h_classes(&self) -> usize {
        self.number_of_l_classes() * self.number_of_r_classes()
    }

    /// Zero for non-regular classes.
    pub fn number_of_idempotents(&self) -> usize {
        match self {
            DClass::Regular(d) => d.number_of_idempotents(),
            DClass::NonRegular(_) => 0,
        }
    }

    /// Membership test for an element already known to lie in the semigroup.
    pub fn contains(&self, x: &E) -> bool {
        match self {
            DClass::Regular(d) => d.contains(x),
            DClass::NonRegular(d) => d.contains(x),
        }
    }

    pub fn contains_with_rank(&self, x: &E, rank: usize) -> bool {
        rank == self.rank() && self.contains(x)
    }

    /// Membership test for an arbitrary element of the right degree.
    pub fn contains_element(&self, x: &E) -> bool {
        match self {
            DClass::Regular(d) => d.contains_element(x),
            DClass::NonRegular(d) => d.contains(x),
        }
    }

    /// Products of coset representatives and generators that leave this class.
    ///
    /// With `use_left_reps`, each left rep is right-multiplied by each
    /// generator; otherwise each right rep is left-multiplied. The result is
    /// sorted and free of duplicates.
    pub fn covering_reps(&self, gens: &[E], use_left_reps: bool) -> Vec<E> {
        let data = self.data();
        let mut out = Vec::new();
        if use_left_reps {
            for w in &data.left_reps {
                for g in gens {
                    let x = E::product(w, g);
                    if !self.contains(&x) {
                        out.push(x);
                    }
                }
            }
        } else {
            for z in &data.right_reps {
                for g in gens {
                    let x = E::product(g, z);
                    if !self.contains(&x) {
                        out.push(x);
                    }
                }
            }
        }
        out.sort_unstable();
        out.dedup();
        out
    }
}
