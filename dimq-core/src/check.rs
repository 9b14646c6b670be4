//! Build-time dimension checks.
//!
//! Each check is an associated constant evaluated when a generic function is instantiated with concrete dimensions.
//! A failing assertion aborts compilation of the calling crate, so the conditions below never reach runtime in
//! statically typed code.

use crate::dimension::Dimension;
use core::marker::PhantomData;

pub(crate) struct SameDimension<A, B>(PhantomData<(A, B)>);

impl<A: Dimension, B: Dimension> SameDimension<A, B> {
    pub(crate) const OK: () = assert!(
        A::VECTOR.matches(&B::VECTOR),
        "incompatible dimensions: both operands must have the same dimension vector"
    );
}

pub(crate) struct ExactRoot<A>(PhantomData<A>);

impl<A: Dimension> ExactRoot<A> {
    pub(crate) const OK: () = assert!(
        A::VECTOR.has_exact_root(),
        "non-exact root: every exponent must be divisible by two"
    );
}
