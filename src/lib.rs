// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Tests may unwrap freely
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

//! Point-of-interest camera focus controller for interactive 3D scenes.
//!
//! Focal lets a user click one of several points of interest in a scene,
//! flies the camera to that target's preset pose, and flies it back on a
//! second click or a back action, while idle auto-rotation and hover
//! feedback keep working alongside. It never touches an actual engine
//! camera: it produces [`camera::Pose`] values and an
//! [`camera::OrbitPolicy`] for a render binding to apply.
//!
//! # Key entry points
//!
//! - [`engine::FocusEngine`] - the controller facade (`execute` + `update`)
//! - [`focus::FocusStateMachine`] - single-focus click/back state machine
//! - [`camera::CameraTweener`] - spring or eased fly-to interpolation
//! - [`hover::HoverScaleController`] - per-target hover scale pulse
//! - [`camera::OrbitGate`] - orbit-controls policy by focus and device
//! - [`input::InputProcessor`] - raw pointer/key/resize events to commands
//! - [`options::Options`] - TOML-backed configuration
//!
//! # Frame loop
//!
//! Pointer and key events are converted to [`engine::FocusCommand`]s and
//! applied between frames. Once per frame the binding calls
//! [`engine::FocusEngine::update`] with the elapsed time and copies the
//! returned pose onto its camera.

pub mod camera;
pub mod engine;
pub mod error;
pub mod focus;
pub mod hover;
pub mod input;
pub mod options;
pub mod util;

pub use engine::{FocusCommand, FocusEngine, FrameOutput};
pub use error::FocalError;
