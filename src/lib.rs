//! Aegis Tactics - turn-based tactical combat resolver
//!
//! Resolves squad-vs-squad encounters: shield-first damage absorption,
//! injury outcomes, procedural battlefields, and turn/round progression.
//! Rendering, input capture, and meta-game persistence are external
//! collaborators; this crate owns only encounter-scoped state.

pub mod battlefield;
pub mod combat;
pub mod core;
