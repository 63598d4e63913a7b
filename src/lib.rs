//! Best-fit placement policy for 2-D stock cutting: scores every feasible
//! position on every sheet and returns the single best placement per call.

pub mod grid;
pub mod policy;
pub mod render;
pub mod score;
pub mod types;
