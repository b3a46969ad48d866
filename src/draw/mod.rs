//! # Drawing Primitives
//!
//! Rasterizers implemented as extra methods on [`PixelSurface`], so every
//! pixel they produce goes through `set_pixel`.
//!
//! ## Modules
//!
//! - `line`: vertical, horizontal and Bresenham lines
//! - `rect`: outlined, filled and two-color rectangles built from lines
//! - `circle`: table-driven circle outline and fill
//! - `ellipse`: table-driven ellipse outline and fill
//!
//! ## Conventions
//!
//! Shapes take a start point and a signed extent (`run` along x, `rise`
//! along y); both endpoints are drawn, so a run of 4 covers 5 pixels and a
//! negative run walks left. Every shape also has an `_absolute` form taking
//! two endpoints. Circles and ellipses need a [`TrigTable`]; through
//! [`GraphicsContext`] it is supplied automatically.
//!
//! A pixel that fails the bounds check aborts the shape and the error is
//! returned; pixels drawn before it stay drawn.
//!
//! [`PixelSurface`]: crate::surface::PixelSurface
//! [`TrigTable`]: crate::math::TrigTable
//! [`GraphicsContext`]: crate::context::GraphicsContext

pub mod circle;
pub mod ellipse;
pub mod line;
pub mod rect;
