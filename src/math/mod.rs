//! # Math Helpers
//!
//! Integer and fixed-point building blocks used by the rasterizers.
//!
//! ## Modules
//!
//! - `fixed`: `Fixed`, a signed 16.16 fixed-point number
//! - `sign`: `unit_step`, the -1/0/+1 step used to walk toward a signed delta
//! - `trig`: `TrigTable`, the precomputed `sin(acos(x))` table behind circles
//!   and ellipses
//!
//! Nothing here touches a framebuffer.

pub mod fixed;
pub mod sign;
pub mod trig;

pub use fixed::Fixed;
pub use sign::unit_step;
pub use trig::{TrigTable, TRIG_TABLE_LEN};
