//! A compliant rope between two bodies, for games.
//!
//! `tether` models a one-sided distance constraint: two bodies may move
//! freely while they are closer than the rope's rest length, and the end
//! body is pulled back by a spring force once they drift further apart.
//! The rest length can be lengthened or shortened at runtime within fixed
//! bounds, and the start body can be reeled along the rope axis.
//!
//! # Features
//!
//! - **Stretch correction**: spring force on dynamic bodies, direct
//!   displacement on kinematic ones
//! - **Adjustable length**: debounced, clamped rest-length changes from held commands
//! - **Manual pull**: constant-force reeling of the start body, gated by the bounds
//! - **Engine agnostic**: bring your own bodies via `KinematicBody` / `DynamicBody`
//! - **Rope systems**: `RopeSystem` owns point masses and anchors and links them by handle
//! - **Observable**: monitor rope steps via the `RopeObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! # Step order
//!
//! [`RopeConstraint::step`] runs, in this fixed order: rest-length
//! adjustment, manual pull, stretch correction.
//!
//! ```
//! use tether::{Anchor, Body, NoOpObserver, PointMass, RopeCommands, RopeConfig, RopeConstraint, Vec3};
//!
//! let mut rope = RopeConstraint::new(&RopeConfig::<f32>::default()).unwrap();
//! let mut hook = Anchor::new(Vec3::new(0.0, 0.0, 0.0));
//! let mut weight = PointMass::new(Vec3::new(10.0, 0.0, 0.0), 1.0);
//!
//! let endpoints = rope.step(
//!     1.0 / 50.0,
//!     RopeCommands::idle(),
//!     Some(&mut Body::Kinematic(&mut hook)),
//!     Some(&mut Body::Dynamic(&mut weight)),
//!     &mut NoOpObserver,
//! );
//! assert!(endpoints.is_some());
//! assert_eq!(weight.force.x, -250.0);
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod body;
pub mod constraint;
pub mod length;
pub mod pull;
pub mod solver;
pub mod command;
pub mod system;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::{Vec, Vec2, Vec3};
pub use body::{Anchor, Body, BodyResponse, DynamicBody, KinematicBody, PointMass};
pub use constraint::RopeConstraint;
pub use length::{Direction, LengthAdjustment};
pub use solver::{RopeEndpoints, SolveOutcome, Tension};
pub use command::RopeCommands;
pub use system::{BodyId, BodySlot, RopeId, RopeSystem};
pub use config::{RopeConfig, SystemConfig};
pub use observer::{RopeObserver, NoOpObserver};
pub use error::RopeError;
