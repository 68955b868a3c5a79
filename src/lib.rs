//! Conway's Game of Life on a fixed-size toroidal board.
//!
//! [`simulation::GridSimulation`] owns the two generation buffers and is the only
//! stateful piece; [`controller`] paces and steers it, [`renderer`] draws it.

pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod grid;
pub mod renderer;
pub mod simulation;
pub mod utils;

pub use error::{LifeError, RenderError, Result};
pub use grid::{Cell, Grid};
pub use simulation::{GridSimulation, SimRng};
