// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Actions of semigroup elements on orbit points.

/// Which side elements act from.
///
/// A right action satisfies `pt·(xy) = (pt·x)·y`, a left action
/// `(xy)·pt = x·(y·pt)`. The side fixes the order in which generators along
/// a path are multiplied together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// An action of elements `E` on points `P`.
///
/// Implementations may keep scratch buffers in `self`; `act` is called once
/// per point and generator during enumeration.
pub trait Action<E, P>: Default {
    const SIDE: Side;

    /// Write the image of `pt` under `x` into `res`.
    fn act(&mut self, res: &mut P, pt: &P, x: &E);
}
