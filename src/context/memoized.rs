// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Orbit data (Tier 1: MEMO).
//!
//! The working generators and the Lambda and Rho orbits. Built once on the
//! first step of a run and never changed afterwards.

use crate::adapters::KoniecznyAdapter;
use crate::errors::{KoniecznyError, OrbitKind, Result};
use crate::orbit::Orbit;
use tracing::info;

pub type LambdaOrbit<E> =
    Orbit<E, <E as KoniecznyAdapter>::Lambda, <E as KoniecznyAdapter>::LambdaAction>;
pub type RhoOrbit<E> = Orbit<E, <E as KoniecznyAdapter>::Rho, <E as KoniecznyAdapter>::RhoAction>;

pub struct OrbitMemo<E: KoniecznyAdapter> {
    /// Working generators, the adjoined identity included.
    pub gens: Vec<E>,
    pub one: E,
    pub lambda_orb: LambdaOrbit<E>,
    pub rho_orb: RhoOrbit<E>,
}

impl<E: KoniecznyAdapter> OrbitMemo<E> {
    /// Seed both orbits with the values of the identity. Nothing is
    /// enumerated until [`enumerate`](Self::enumerate).
    pub fn new(gens: Vec<E>, one: E) -> Self {
        let degree = one.degree();
        let mut lambda_orb = LambdaOrbit::<E>::new(degree);
        let mut rho_orb = RhoOrbit::<E>::new(degree);
        lambda_orb.add_seed(E::lambda(&one));
        rho_orb.add_seed(E::rho(&one));
        for x in &gens {
            lambda_orb.add_generator(x.clone());
            rho_orb.add_generator(x.clone());
        }
        Self {
            gens,
            one,
            lambda_orb,
            rho_orb,
        }
    }

    pub fn enumerate(&mut self) {
        if self.is_enumerated() {
            return;
        }
        self.lambda_orb.enumerate();
        self.rho_orb.enumerate();
        info!(
            lambda_points = self.lambda_orb.len(),
            lambda_sccs = self.lambda_orb.number_of_sccs(),
            rho_points = self.rho_orb.len(),
            rho_sccs = self.rho_orb.number_of_sccs(),
            "orbits enumerated"
        );
    }

    pub fn is_enumerated(&self) -> bool {
        self.lambda_orb.is_done() && self.rho_orb.is_done()
    }

    /// Position of `Lambda(x)` in the Lambda orbit.
    pub fn lambda_position(&self, x: &E) -> Result<usize> {
        self.lambda_orb
            .position(&E::lambda(x))
            .ok_or(KoniecznyError::ValueNotInOrbit {
                orbit: OrbitKind::Lambda,
            })
    }

    /// Position of `Rho(x)` in the Rho orbit.
    pub fn rho_position(&self, x: &E) -> Result<usize> {
        self.rho_orb
            .position(&E::rho(x))
            .ok_or(KoniecznyError::ValueNotInOrbit {
                orbit: OrbitKind::Rho,
            })
    }
}
