//! Shared test utilities for the kubext workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`project`]: [`TestProject`], a temporary project directory with
//!   properties and documents
//! - [`logger`]: [`RecordingLogger`], which captures advisories

pub mod logger;
pub mod project;

pub use kubext_core::StaticProbe;
pub use logger::RecordingLogger;
pub use project::TestProject;
