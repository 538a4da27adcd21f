// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Resumable D-class enumeration.
//!
//! [`Konieczny`] finds the D-classes of the semigroup generated by a list of
//! elements without enumerating the elements themselves. Each D-class is
//! described by a representative and its coset tables, see
//! [`dclass`](crate::dclass).
//!
//! # Architecture
//!
//! The engine is a state machine advanced by [`Konieczny::step`], one work
//! item at a time:
//! 1. Enumerate the Lambda and Rho orbits (first step only)
//! 2. Create the top D-class from the identity and queue its covering reps
//! 3. Take the queue of the largest pending rank, regular before non-regular
//! 4. Drop candidates already inside a known class of that rank
//! 5. Turn the last remaining candidate into a new D-class, queue its
//!    covering reps and drop the other candidates it contains
//! 6. When no rank remains, the enumeration is finished
//!
//! The identity is adjoined to the generators when none of them is a unit.
//! In that case the top class is not part of the semigroup and is left out
//! of every count and query.
//!
//! Because all state lives in the engine, a run may be interrupted by a
//! deadline or a predicate and later resumed where it stopped.
//!
//! # Example
//!
//! ```
//! use konieczny::element::Transformation;
//! use konieczny::engine::Konieczny;
//!
//! let gens = vec![
//!     Transformation::new(vec![1, 0, 2]).unwrap(),
//!     Transformation::new(vec![1, 2, 0]).unwrap(),
//!     Transformation::new(vec![0, 0, 2]).unwrap(),
//! ];
//! let mut s = Konieczny::new(gens).unwrap();
//! assert_eq!(s.size().unwrap(), 27);
//! assert_eq!(s.number_of_idempotents().unwrap(), 10);
//! ```

pub mod worklist;

pub use worklist::{Batch, Candidate, StepResult, Worklist};

use crate::adapters::KoniecznyAdapter;
use crate::config::KoniecznyConfig;
use crate::context::KoniecznyContext;
use crate::dclass::{DClass, NonRegularDClass, RegularDClass};
use crate::errors::{KoniecznyError, Result};
use crate::statistics::{Counters, Statistics};
use std::time::{Duration, Instant};
use tracing::{debug, info, trace};

pub struct Konieczny<E: KoniecznyAdapter> {
    config: KoniecznyConfig,
    number_of_generators: usize,
    degree: usize,
    adjoined_identity: bool,
    ctx: KoniecznyContext<E>,
    /// D-classes in discovery order; the top class is always first.
    classes: Vec<DClass<E>>,
    /// Indices into `classes` of the regular classes.
    regular: Vec<usize>,
    /// For each class, the classes whose covering reps landed in it.
    d_rels: Vec<Vec<usize>>,
    worklist: Worklist<E>,
    batch: Option<Batch<E>>,
    started: bool,
    finished: bool,
}

impl<E: KoniecznyAdapter> Konieczny<E> {
    pub fn new(gens: Vec<E>) -> Result<Self> {
        Self::with_config(gens, KoniecznyConfig::default())
    }

    pub fn with_config(gens: Vec<E>, config: KoniecznyConfig) -> Result<Self> {
        let degree = gens
            .first()
            .ok_or(KoniecznyError::EmptyGenerators)?
            .degree();
        for (index, x) in gens.iter().enumerate() {
            if x.degree() != degree {
                return Err(KoniecznyError::DegreeMismatch {
                    index,
                    expected: degree,
                    found: x.degree(),
                });
            }
        }
        for x in &gens {
            E::validate(x)?;
        }

        let one = E::identity(degree);
        let adjoined_identity = !gens.iter().any(E::is_unit);
        let number_of_generators = gens.len();
        let mut working = gens;
        if adjoined_identity {
            working.push(one.clone());
        }

        Ok(Self {
            config,
            number_of_generators,
            degree,
            adjoined_identity,
            ctx: KoniecznyContext::new(working, one),
            classes: Vec::new(),
            regular: Vec::new(),
            d_rels: Vec::new(),
            worklist: Worklist::default(),
            batch: None,
            started: false,
            finished: false,
        })
    }

    /// Do one work item.
    pub fn step(&mut self) -> Result<StepResult> {
        if self.finished {
            return Ok(StepResult::Finished);
        }
        if !self.started {
            self.start()?;
            return Ok(StepResult::Continue);
        }
        if let Some(batch) = self.batch.as_mut() {
            let rank = batch.rank;
            let regular = batch.regular;
            match batch.reps.pop() {
                Some(candidate) => self.process_candidate(candidate, regular)?,
                None => {
                    self.batch = None;
                    self.worklist.finish_batch(rank);
                }
            }
            return Ok(StepResult::Continue);
        }
        match self.worklist.take_batch() {
            Some(batch) => {
                self.filter_batch(batch);
                Ok(StepResult::Continue)
            }
            None => {
                self.finish();
                Ok(StepResult::Finished)
            }
        }
    }

    fn start(&mut self) -> Result<()> {
        self.ctx.memo.enumerate();
        let one = self.ctx.memo.one.clone();
        let top = self.regular_class(one)?;
        let reps = Self::covering_candidates(&self.config, &mut self.ctx, &top)?;
        self.commit_class(top, reps);
        self.started = true;
        Ok(())
    }

    /// Drop the candidates of `batch` that lie in a known class of its rank.
    fn filter_batch(&mut self, mut batch: Batch<E>) {
        let before = batch.reps.len();
        let rank = batch.rank;
        let Self {
            classes, d_rels, ..
        } = &mut *self;
        batch.reps.retain(|(x, source)| {
            match classes
                .iter()
                .position(|d| d.contains_with_rank(x, rank))
            {
                Some(idx) => {
                    add_d_rel(&mut d_rels[idx], *source);
                    false
                }
                None => true,
            }
        });
        let absorbed = before - batch.reps.len();
        self.ctx
            .statistics
            .add(Counters::AbsorbedReps, absorbed as u64);
        trace!(
            rank = batch.rank,
            regular = batch.regular,
            remaining = batch.reps.len(),
            absorbed,
            "batch taken"
        );
        self.batch = Some(batch);
    }

    fn process_candidate(&mut self, (x, source): Candidate<E>, regular: bool) -> Result<()> {
        let d = if regular {
            let idem = self
                .ctx
                .find_idem(&x)?
                .ok_or(KoniecznyError::NotIdempotent)?;
            self.regular_class(idem)?
        } else {
            self.non_regular_class(x)?
        };
        let reps = Self::covering_candidates(&self.config, &mut self.ctx, &d)?;
        let idx = self.commit_class(d, reps);
        add_d_rel(&mut self.d_rels[idx], source);

        let class = &self.classes[idx];
        let d_rel = &mut self.d_rels[idx];
        if let Some(batch) = self.batch.as_mut() {
            let before = batch.reps.len();
            let rank = batch.rank;
            batch.reps.retain(|(y, source)| {
                if class.contains_with_rank(y, rank) {
                    add_d_rel(d_rel, *source);
                    false
                } else {
                    true
                }
            });
            let absorbed = before - batch.reps.len();
            self.ctx
                .statistics
                .add(Counters::AbsorbedReps, absorbed as u64);
        }
        Ok(())
    }

    fn regular_class(&mut self, idem: E) -> Result<DClass<E>> {
        let mut d = RegularDClass::new(idem)?;
        d.init(&mut self.ctx)?;
        Ok(DClass::Regular(d))
    }

    fn non_regular_class(&self, rep: E) -> Result<DClass<E>> {
        let mut d = NonRegularDClass::new(rep)?;
        d.init(&self.classes, &self.regular)?;
        Ok(DClass::NonRegular(d))
    }

    /// The products of `d` with a generator that fall outside `d`, each
    /// with its rank and regularity.
    fn covering_candidates(
        config: &KoniecznyConfig,
        ctx: &mut KoniecznyContext<E>,
        d: &DClass<E>,
    ) -> Result<Vec<(usize, bool, E)>> {
        let use_left_reps = config.use_left_reps(ctx.memo.lambda_orb.len(), ctx.memo.rho_orb.len());
        let reps = d.covering_reps(&ctx.memo.gens, use_left_reps);
        let mut out = Vec::with_capacity(reps.len());
        for x in reps {
            let regular = ctx.is_regular_element(&x)?;
            out.push((E::rank(&x), regular, x));
        }
        trace!(rank = d.rank(), count = out.len(), use_left_reps, "covering reps");
        Ok(out)
    }

    /// Record a fully built class and queue its covering reps.
    ///
    /// Classes are only recorded here, once every fallible step for the class
    /// has succeeded. A failure leaves no partial class behind.
    fn commit_class(&mut self, d: DClass<E>, reps: Vec<(usize, bool, E)>) -> usize {
        let idx = self.classes.len();
        debug!(
            index = idx,
            rank = d.rank(),
            regular = d.is_regular(),
            size = d.size(),
            l_classes = d.number_of_l_classes(),
            r_classes = d.number_of_r_classes(),
            "D-class created"
        );
        if d.is_regular() {
            self.regular.push(idx);
            self.ctx.statistics.increment(Counters::RegularDClasses);
        } else {
            self.ctx.statistics.increment(Counters::NonRegularDClasses);
        }
        self.classes.push(d);
        self.d_rels.push(Vec::new());
        self.ctx
            .statistics
            .add(Counters::CoveringReps, reps.len() as u64);
        for (rank, regular, x) in reps {
            self.worklist.push(rank, regular, (x, idx));
        }
        idx
    }

    fn finish(&mut self) {
        self.finished = true;
        info!(
            d_classes = self.current_number_of_d_classes(),
            regular_d_classes = self.current_number_of_regular_d_classes(),
            size = self.current_size(),
            "enumeration finished"
        );
    }

    /// Run until finished, or until `stop` returns true.
    ///
    /// `stop` is consulted before the first work item and then every
    /// `check_interval` work items.
    pub fn run_until<F>(&mut self, mut stop: F) -> Result<()>
    where
        F: FnMut(&Self) -> bool,
    {
        let interval = self.config.check_interval.max(1);
        loop {
            if self.finished || stop(self) {
                return Ok(());
            }
            for _ in 0..interval {
                if self.step()? == StepResult::Finished {
                    return Ok(());
                }
            }
        }
    }

    /// Run until finished, or until `limit` has elapsed.
    pub fn run_for(&mut self, limit: Duration) -> Result<()> {
        let deadline = Instant::now() + limit;
        self.run_until(|_| Instant::now() >= deadline)
    }

    pub fn run(&mut self) -> Result<()> {
        self.run_until(|_| false)
    }

    fn top(&self) -> usize {
        usize::from(self.adjoined_identity)
    }

    // ---- queries that complete the enumeration first ----

    pub fn size(&mut self) -> Result<usize> {
        self.run()?;
        Ok(self.current_size())
    }

    pub fn number_of_idempotents(&mut self) -> Result<usize> {
        self.run()?;
        Ok(self.current_number_of_idempotents())
    }

    pub fn number_of_d_classes(&mut self) -> Result<usize> {
        self.run()?;
        Ok(self.current_number_of_d_classes())
    }

    pub fn number_of_regular_d_classes(&mut self) -> Result<usize> {
        self.run()?;
        Ok(self.current_number_of_regular_d_classes())
    }

    pub fn number_of_l_classes(&mut self) -> Result<usize> {
        self.run()?;
        Ok(self.current_number_of_l_classes())
    }

    pub fn number_of_r_classes(&mut self) -> Result<usize> {
        self.run()?;
        Ok(self.current_number_of_r_classes())
    }

    pub fn number_of_h_classes(&mut self) -> Result<usize> {
        self.run()?;
        Ok(self.current_number_of_h_classes())
    }

    pub fn number_of_regular_elements(&mut self) -> Result<usize> {
        self.run()?;
        Ok(self.current_number_of_regular_elements())
    }

    pub fn d_classes(&mut self) -> Result<&[DClass<E>]> {
        self.run()?;
        Ok(self.current_d_classes())
    }

    pub fn regular_d_classes(&mut self) -> Result<impl Iterator<Item = &DClass<E>>> {
        self.run()?;
        Ok(self.current_regular_d_classes())
    }

    /// Is `x` an element of the semigroup? Elements of another degree never are.
    pub fn contains(&mut self, x: &E) -> Result<bool> {
        if x.degree() != self.degree {
            return Ok(false);
        }
        self.run()?;
        Ok(self.current_d_class_of_element(x).is_some())
    }

    pub fn d_class_of_element(&mut self, x: &E) -> Result<&DClass<E>> {
        if x.degree() != self.degree {
            return Err(KoniecznyError::NotInSemigroup);
        }
        self.run()?;
        self.current_d_class_of_element(x)
            .ok_or(KoniecznyError::NotInSemigroup)
    }

    /// Is `x` regular in the semigroup? `x` must be an element of it.
    pub fn is_regular_element(&mut self, x: &E) -> Result<bool> {
        if !self.contains(x)? {
            return Err(KoniecznyError::NotInSemigroup);
        }
        self.ctx.is_regular_element(x)
    }

    /// An idempotent D-related to `x`, or `None` if `x` is not regular.
    pub fn find_idem(&mut self, x: &E) -> Result<Option<E>> {
        if !self.contains(x)? {
            return Err(KoniecznyError::NotInSemigroup);
        }
        self.ctx.find_idem(x)
    }

    // ---- queries on what has been found so far ----

    pub fn current_d_classes(&self) -> &[DClass<E>] {
        self.classes.get(self.top()..).unwrap_or(&[])
    }

    pub fn current_regular_d_classes(&self) -> impl Iterator<Item = &DClass<E>> {
        let top = self.top();
        self.regular
            .iter()
            .filter(move |&&idx| idx >= top)
            .map(move |&idx| &self.classes[idx])
    }

    pub fn current_size(&self) -> usize {
        self.current_d_classes().iter().map(DClass::size).sum()
    }

    pub fn current_number_of_idempotents(&self) -> usize {
        self.current_regular_d_classes()
            .map(DClass::number_of_idempotents)
            .sum()
    }

    pub fn current_number_of_d_classes(&self) -> usize {
        self.current_d_classes().len()
    }

    pub fn current_number_of_regular_d_classes(&self) -> usize {
        self.current_regular_d_classes().count()
    }

    pub fn current_number_of_l_classes(&self) -> usize {
        self.current_d_classes()
            .iter()
            .map(DClass::number_of_l_classes)
            .sum()
    }

    pub fn current_number_of_r_classes(&self) -> usize {
        self.current_d_classes()
            .iter()
            .map(DClass::number_of_r_classes)
            .sum()
    }

    pub fn current_number_of_h_classes(&self) -> usize {
        self.current_d_classes()
            .iter()
            .map(DClass::number_of_h_classes)
            .sum()
    }

    pub fn current_number_of_regular_elements(&self) -> usize {
        self.current_regular_d_classes().map(DClass::size).sum()
    }

    /// The known D-class containing `x`, if any.
    pub fn current_d_class_of_element(&self, x: &E) -> Option<&DClass<E>> {
        if x.degree() != self.degree || !self.ctx.memo.is_enumerated() {
            return None;
        }
        self.ctx.memo.lambda_position(x).ok()?;
        self.ctx.memo.rho_position(x).ok()?;
        let rank = E::rank(x);
        self.current_d_classes()
            .iter()
            .find(|d| d.rank() == rank && d.contains_element(x))
    }

    // ---- accessors ----

    /// The generators as given, without any adjoined identity.
    pub fn generators(&self) -> &[E] {
        &self.ctx.memo.gens[..self.number_of_generators]
    }

    /// The generators the orbits and covering reps are built from: those
    /// given, followed by the identity when it was adjoined.
    pub fn working_generators(&self) -> &[E] {
        &self.ctx.memo.gens
    }

    pub fn number_of_generators(&self) -> usize {
        self.number_of_generators
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn adjoined_identity(&self) -> bool {
        self.adjoined_identity
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn finished(&self) -> bool {
        self.finished
    }

    pub fn config(&self) -> &KoniecznyConfig {
        &self.config
    }

    pub fn statistics(&self) -> &Statistics {
        &self.ctx.statistics
    }

    /// Every class found so far, the top class included, in discovery order.
    pub fn all_d_classes(&self) -> &[DClass<E>] {
        &self.classes
    }

    /// For each class of [`all_d_classes`](Self::all_d_classes), the indices
    /// of the classes immediately above it that were seen to cover it.
    pub fn d_rels(&self) -> &[Vec<usize>] {
        &self.d_rels
    }

    pub fn d_class(&self, index: usize) -> Result<&DClass<E>> {
        self.classes
            .get(index)
            .ok_or(KoniecznyError::IndexOutOfRange {
                index,
                len: self.classes.len(),
            })
    }
}

fn add_d_rel(d_rel: &mut Vec<usize>, source: usize) {
    if !d_rel.contains(&source) {
        d_rel.push(source);
    }
}
