//! Agent routing: the reasoning-strategy seam and the per-request loop.

pub mod box_strategy;
pub mod router;
pub mod strategy;
