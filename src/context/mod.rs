// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Engine context combining MEMO and DYNAMIC state.
//!
//! The KoniecznyContext combines:
//! - Tier 1 (MEMO): the generators and the enumerated Lambda and Rho orbits
//! - Tier 2 (DYNAMIC): group-index memo tables and statistics
//!
//! D-classes read Tier 1 and fill in Tier 2 while they compute their tables.
//!
//! # Memory Model
//!
//! ```text
//! KoniecznyContext {
//!     memo: OrbitMemo,           // Tier 1: fixed after the first step
//!     groups: GroupIndices,      // Tier 2: grows as D-classes are built
//!     statistics: Statistics,    // Tier 2: counters
//! }
//! ```

pub mod dynamic;
pub mod memoized;

pub use dynamic::GroupIndices;
pub use memoized::{LambdaOrbit, OrbitMemo, RhoOrbit};

use crate::adapters::KoniecznyAdapter;
use crate::element::idempotent_power;
use crate::errors::Result;
use crate::statistics::Statistics;

pub struct KoniecznyContext<E: KoniecznyAdapter> {
    /// Orbit data (Tier 1)
    pub memo: OrbitMemo<E>,
    /// Group-index memo (Tier 2)
    pub groups: GroupIndices,
    /// Counters (Tier 2)
    pub statistics: Statistics,
}

impl<E: KoniecznyAdapter> KoniecznyContext<E> {
    pub fn new(gens: Vec<E>, one: E) -> Self {
        Self {
            memo: OrbitMemo::new(gens, one),
            groups: GroupIndices::new(),
            statistics: Statistics::new(),
        }
    }

    /// A Lambda position, in the SCC of `Lambda(x)`, partnering `Rho(x)`.
    ///
    /// `x` must be an element of the semigroup; `None` means `x` is not regular.
    pub fn find_group_index(&mut self, x: &E) -> Result<Option<usize>> {
        let rho_pos = self.memo.rho_position(x)?;
        let lambda_pos = self.memo.lambda_position(x)?;
        let lambda_scc = self.memo.lambda_orb.scc_id(lambda_pos);
        Ok(self
            .groups
            .lambda_partner(&self.memo, &mut self.statistics, rho_pos, lambda_scc))
    }

    pub fn is_regular_element(&mut self, x: &E) -> Result<bool> {
        Ok(self.find_group_index(x)?.is_some())
    }

    /// An idempotent in the D-class of `x`, or `None` if `x` is not regular.
    pub fn find_idem(&mut self, x: &E) -> Result<Option<E>> {
        if x.is_idempotent() {
            return Ok(Some(x.clone()));
        }
        let Some(i) = self.find_group_index(x)? else {
            return Ok(None);
        };
        let pos = self.memo.lambda_position(x)?;
        let lambda_orb = &self.memo.lambda_orb;
        // R-related to x, with Lambda value lambda_orb[i]: a group H-class.
        let y = E::product(
            &E::product(x, lambda_orb.multiplier_to_scc_root(pos)),
            lambda_orb.multiplier_from_scc_root(i),
        );
        Ok(Some(idempotent_power(&y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{Element, Transformation};
    use crate::statistics::Counters;

    fn transf(images: &[u8]) -> Transformation {
        Transformation::new(images.to_vec()).unwrap()
    }

    fn t4_context() -> KoniecznyContext<Transformation> {
        let gens = vec![
            transf(&[1, 0, 2, 3]),
            transf(&[1, 2, 3, 0]),
            transf(&[0, 0, 2, 3]),
        ];
        let mut ctx = KoniecznyContext::new(gens, Transformation::identity(4));
        ctx.memo.enumerate();
        ctx
    }

    #[test]
    fn test_orbit_sizes() {
        let ctx = t4_context();
        assert!(ctx.memo.is_enumerated());
        assert_eq!(ctx.memo.lambda_orb.len(), 15);
        assert_eq!(ctx.memo.rho_orb.len(), 15);
    }

    #[test]
    fn test_every_element_of_full_monoid_is_regular() {
        let mut ctx = t4_context();
        for x in [
            transf(&[0, 0, 0, 0]),
            transf(&[3, 1, 1, 3]),
            transf(&[2, 0, 1, 1]),
        ] {
            assert!(ctx.is_regular_element(&x).unwrap());
        }
    }

    #[test]
    fn test_find_idem_is_d_related() {
        let mut ctx = t4_context();
        let x = transf(&[1, 3, 3, 1]);
        assert!(!x.is_idempotent());
        let e = ctx.find_idem(&x).unwrap().unwrap();
        assert!(e.is_idempotent());
        assert_eq!(e.rank(), x.rank());
        // R-related to x: same kernel.
        assert_eq!(Transformation::rho(&e), Transformation::rho(&x));
    }

    #[test]
    fn test_group_index_memo() {
        let mut ctx = t4_context();
        let x = transf(&[2, 0, 1, 1]);
        ctx.find_group_index(&x).unwrap();
        let misses = ctx.statistics.get(Counters::GroupIndexMisses);
        ctx.find_group_index(&x).unwrap();
        assert_eq!(
            ctx.statistics.get(Counters::GroupIndexMisses),
            misses
        );
        assert_eq!(ctx.groups.cached_lookups().0, 1);
    }
}
