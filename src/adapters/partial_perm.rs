// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Partial permutations: Lambda is the image, Rho the domain.

use crate::adapters::KoniecznyAdapter;
use crate::element::{PartialPerm, PointSet};
use crate::orbit::{Action, Side};

/// Right action: the image of a set.
#[derive(Debug, Default, Clone)]
pub struct PartialImageAction;

impl Action<PartialPerm, PointSet> for PartialImageAction {
    const SIDE: Side = Side::Right;

    fn act(&mut self, res: &mut PointSet, pt: &PointSet, x: &PartialPerm) {
        *res = PointSet::empty();
        for i in pt.iter() {
            if let Some(j) = x.apply(i) {
                res.insert(j);
            }
        }
    }
}

/// Left action: the preimage of a set.
#[derive(Debug, Default, Clone)]
pub struct DomainAction;

impl Action<PartialPerm, PointSet> for DomainAction {
    const SIDE: Side = Side::Left;

    fn act(&mut self, res: &mut PointSet, pt: &PointSet, x: &PartialPerm) {
        *res = PointSet::empty();
        for (i, image) in x.images().iter().enumerate() {
            if image.is_some_and(|j| pt.contains(j as usize)) {
                res.insert(i);
            }
        }
    }
}

impl KoniecznyAdapter for PartialPerm {
    type Lambda = PointSet;
    type Rho = PointSet;
    type LambdaAction = PartialImageAction;
    type RhoAction = DomainAction;

    fn lambda(x: &Self) -> PointSet {
        let mut image = PointSet::empty();
        for &j in x.images().iter().flatten() {
            image.insert(j as usize);
        }
        image
    }

    fn rho(x: &Self) -> PointSet {
        let mut domain = PointSet::empty();
        for (i, image) in x.images().iter().enumerate() {
            if image.is_some() {
                domain.insert(i);
            }
        }
        domain
    }

    fn rank(x: &Self) -> usize {
        x.rank()
    }

    fn is_group_index(rho: &PointSet, lambda: &PointSet) -> bool {
        rho == lambda
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Element;

    fn pperm(images: &[Option<u8>]) -> PartialPerm {
        PartialPerm::new(images.to_vec()).unwrap()
    }

    #[test]
    fn test_lambda_and_rho() {
        let x = pperm(&[Some(2), None, Some(0), None]);
        assert_eq!(PartialPerm::lambda(&x), PointSet::from_points(&[0, 2]));
        assert_eq!(PartialPerm::rho(&x), PointSet::from_points(&[0, 2]));
        let y = pperm(&[None, Some(3), Some(0), None]);
        assert_eq!(PartialPerm::lambda(&y), PointSet::from_points(&[0, 3]));
        assert_eq!(PartialPerm::rho(&y), PointSet::from_points(&[1, 2]));
        assert_eq!(PartialPerm::rank(&y), 2);
    }

    #[test]
    fn test_actions_agree_with_products() {
        let elements = [
            pperm(&[Some(2), None, Some(0), None]),
            pperm(&[None, Some(3), Some(0), None]),
            pperm(&[Some(1), Some(2), Some(3), Some(0)]),
            pperm(&[Some(0), Some(1), None, Some(2)]),
        ];
        let mut image = PartialImageAction;
        let mut domain = DomainAction;
        let mut pt = PointSet::empty();
        for x in &elements {
            for y in &elements {
                let xy = PartialPerm::product(x, y);
                image.act(&mut pt, &PartialPerm::lambda(x), y);
                assert_eq!(pt, PartialPerm::lambda(&xy));
                domain.act(&mut pt, &PartialPerm::rho(y), x);
                assert_eq!(pt, PartialPerm::rho(&xy));
            }
        }
    }

    #[test]
    fn test_is_group_index() {
        let a = PointSet::from_points(&[0, 2]);
        let b = PointSet::from_points(&[0, 3]);
        assert!(PartialPerm::is_group_index(&a, &a));
        assert!(!PartialPerm::is_group_index(&a, &b));
        assert!(PartialPerm::is_group_index(
            &PointSet::empty(),
            &PointSet::empty()
        ));
    }
}
