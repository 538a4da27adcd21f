// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Transformations: Lambda is the image, Rho the kernel.
//!
//! The kernel is stored as a normalised labelling: point `i` gets the label
//! of its kernel class, with labels numbered in order of first appearance.
//! Two transformations have the same kernel iff their labellings are equal.

use crate::adapters::KoniecznyAdapter;
use crate::element::{PointSet, Transformation};
use crate::orbit::{Action, Side};

/// Right action of a transformation on image sets.
#[derive(Debug, Default, Clone)]
pub struct ImageAction;

impl Action<Transformation, PointSet> for ImageAction {
    const SIDE: Side = Side::Right;

    fn act(&mut self, res: &mut PointSet, pt: &PointSet, x: &Transformation) {
        *res = PointSet::empty();
        for i in pt.iter() {
            res.insert(x.apply(i));
        }
    }
}

/// Left action of a transformation on kernel labellings.
#[derive(Debug, Default, Clone)]
pub struct KernelAction {
    lookup: Vec<u8>,
}

impl Action<Transformation, Vec<u8>> for KernelAction {
    const SIDE: Side = Side::Left;

    fn act(&mut self, res: &mut Vec<u8>, pt: &Vec<u8>, x: &Transformation) {
        normalise_into(
            res,
            &mut self.lookup,
            x.images().iter().map(|&i| pt[i as usize]),
        );
    }
}

/// Relabel `labels` in order of first appearance.
fn normalise_into(
    res: &mut Vec<u8>,
    lookup: &mut Vec<u8>,
    labels: impl ExactSizeIterator<Item = u8>,
) {
    let n = labels.len();
    lookup.clear();
    lookup.resize(n, u8::MAX);
    res.clear();
    let mut next = 0u8;
    for label in labels {
        let slot = &mut lookup[label as usize];
        if *slot == u8::MAX {
            *slot = next;
            next += 1;
        }
        res.push(*slot);
    }
}

impl KoniecznyAdapter for Transformation {
    type Lambda = PointSet;
    type Rho = Vec<u8>;
    type LambdaAction = ImageAction;
    type RhoAction = KernelAction;

    fn lambda(x: &Self) -> PointSet {
        let mut image = PointSet::empty();
        for &i in x.images() {
            image.insert(i as usize);
        }
        image
    }

    fn rho(x: &Self) -> Vec<u8> {
        let mut res = Vec::with_capacity(x.images().len());
        normalise_into(&mut res, &mut Vec::new(), x.images().iter().copied());
        res
    }

    fn rank(x: &Self) -> usize {
        x.rank()
    }

    /// The image must be a transversal of the kernel.
    fn is_group_index(rho: &Vec<u8>, lambda: &PointSet) -> bool {
        let classes = rho.iter().max().map_or(0, |&m| m as usize + 1);
        if lambda.len() != classes {
            return false;
        }
        let mut seen = PointSet::empty();
        for i in lambda.iter() {
            let label = rho[i] as usize;
            if seen.contains(label) {
                return false;
            }
            seen.insert(label);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Element;

    fn transf(images: &[u8]) -> Transformation {
        Transformation::new(images.to_vec()).unwrap()
    }

    #[test]
    fn test_lambda_and_rho() {
        let x = transf(&[2, 2, 0, 4, 0]);
        assert_eq!(Transformation::lambda(&x), PointSet::from_points(&[0, 2, 4]));
        assert_eq!(Transformation::rho(&x), vec![0, 0, 1, 2, 1]);
        assert_eq!(Transformation::rank(&x), 3);
    }

    #[test]
    fn test_actions_agree_with_products() {
        let elements = [
            transf(&[2, 2, 0, 4, 0]),
            transf(&[1, 2, 3, 4, 0]),
            transf(&[0, 0, 2, 3, 4]),
            transf(&[4, 3, 3, 1, 0]),
        ];
        let mut image = ImageAction;
        let mut kernel = KernelAction::default();
        let mut lambda = PointSet::empty();
        let mut rho = Vec::new();
        for x in &elements {
            for y in &elements {
                let xy = Transformation::product(x, y);
                image.act(&mut lambda, &Transformation::lambda(x), y);
                assert_eq!(lambda, Transformation::lambda(&xy));
                kernel.act(&mut rho, &Transformation::rho(y), x);
                assert_eq!(rho, Transformation::rho(&xy));
            }
        }
    }

    #[test]
    fn test_is_group_index() {
        let rho = Transformation::rho(&transf(&[0, 0, 1]));
        assert!(Transformation::is_group_index(
            &rho,
            &PointSet::from_points(&[0, 2])
        ));
        assert!(Transformation::is_group_index(
            &rho,
            &PointSet::from_points(&[1, 2])
        ));
        assert!(!Transformation::is_group_index(
            &rho,
            &PointSet::from_points(&[0, 1])
        ));
        assert!(!Transformation::is_group_index(
            &rho,
            &PointSet::from_points(&[0])
        ));
    }

    #[test]
    fn test_units() {
        assert!(Transformation::is_unit(&transf(&[1, 2, 0])));
        assert!(!Transformation::is_unit(&transf(&[1, 1, 0])));
    }
}
