#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
//! Core balance-simulation logic (display-agnostic).
//!
//! This crate provides the engine behind a simulated laboratory balance:
//! drag weights, dishes, and specimen boxes onto a pan and read a mass off
//! the display. The visual surface is a collaborator; it forwards input
//! events to `Balance` and renders `readout()` / `status()` afterwards.
//!
//! ## Architecture
//!
//! - **Objects**: tagged object kinds and the nominal mass table (`objects`)
//! - **Pan**: at-most-once membership bookkeeping (`pan`)
//! - **Geometry**: trapezoidal drop-zone test (`geometry`)
//! - **Gestures**: mouse/touch unification and drag sessions (`gesture`)
//! - **Timer**: cancellable calibration long-press (`timer`)
//! - **Controller**: the power/zero/calibration state machine (`balance`)
//!
//! ## Fixed-Point Arithmetic
//!
//! Mass internals operate in **centigrams** (cg, 1 cg = 0.01 g) using `i32`
//! for deterministic behavior; the readout rounds to one decimal. See
//! `units::quantize_to_cg`.

pub mod balance;
pub mod display;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod objects;
pub mod pan;
pub mod timer;
pub mod units;

pub use balance::{Balance, BalanceBuilder};
pub use display::{Readout, StatusMessage};
pub use error::{BuildError, Result};
pub use geometry::{PanZone, Point, Rect};
pub use gesture::{DragSession, PointerInput};
pub use objects::{MassTable, ObjectId, ObjectKind, SpecimenTag};
pub use pan::PanContents;
