//! HTML rendering via maud compile-time templates.
//!
//! Pure functions from profile data to markup; no handler logic here.

pub mod card;
pub mod components;
pub mod forms;
