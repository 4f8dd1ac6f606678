// CLASSIFICATION: COMMUNITY
// Filename: mod.rs v1.0
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! Built-in passes. Native passes work on any dialect; integrated passes
//! understand the `toy` dialect.

pub mod const_fold;
pub mod deadcode;
pub mod double_literal;
pub mod nop;
pub mod pass_registry;
pub mod strip_location;
pub mod verify;

pub use const_fold::FoldConstants;
pub use deadcode::DeadCode;
pub use double_literal::DoubleLiteral;
pub use nop::Nop;
pub use pass_registry::{integrated_passes, native_passes, standard_registry};
pub use strip_location::StripLocation;
pub use verify::Verify;
