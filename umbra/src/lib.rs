#![cfg_attr(not(feature = "std"), no_std)]

//! 2D visibility by ray casting.
//!
//! A [`Scene`] holds a closed rectangular border plus any number of user drawn
//! [`Segment`]s. A fan of [`Ray`]s cast from a point inside it yields, for every
//! ray, the nearest point where it meets an obstacle.

extern crate alloc;

mod error;
mod fan;
mod intersection;
mod obstacle;
mod ray;
mod scene;
mod segment;
mod vector;

pub use nalgebra;

pub use error::*;
pub use fan::*;
pub use intersection::*;
pub use obstacle::*;
pub use ray::*;
pub use scene::*;
pub use segment::*;
pub use vector::*;
