//! Simulation module
//!
//! All gameplay logic lives here:
//! - Frame-driven: one `Game::process(delta, ..)` per rendered frame
//! - Seeded RNG only (serve side)
//! - Stable iteration order (left groups before right, wall outward)
//! - No drawing or platform code beyond the `Canvas` and `KeyInput` ports

pub mod aabb;
pub mod collision;
pub mod entity;
pub mod ledger;
pub mod paddle_group;
pub mod state;
pub mod tick;

pub use aabb::Aabb;
pub use collision::{BoundaryContact, bounce_direction, boundary_contact, reflect_off_wall};
pub use entity::{Ball, Entity, Goal, Paddle};
pub use ledger::{LedgerState, PointLedger, PointRecord, ScoredBy};
pub use paddle_group::{Collider, PaddleGroup, Side};
pub use state::{Game, GamePhase, Score};
