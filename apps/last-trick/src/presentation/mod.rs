//! Presentation collaborators: pacing, asset paths and text rendering.
//! Nothing here mutates game state.

pub mod assets;
pub mod pacing;
pub mod text;
