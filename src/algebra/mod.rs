// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exact arithmetic over the Eisenstein integers.
//!
//! This module contains the value types the search works with:
//! - Eisen: elements `a + b·ζ₆` of the ring ℤ[ζ₆]
//! - RotationSet: the six units ζ₆⁰ … ζ₆⁵
//! - EisenFlow: fixed-length vectors of ring elements

pub mod eisen;
pub mod errors;
pub mod flow;
pub mod units;

pub use eisen::{Eisen, Operand};
pub use errors::AlgebraError;
pub use flow::EisenFlow;
pub use units::{eisen_pow, RotationSet, NROTATIONS, ZETA6_POWERS};
