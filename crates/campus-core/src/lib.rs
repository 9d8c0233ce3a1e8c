//! Client-side interaction core for the training institute site.
//!
//! Two independent pieces live here: the job application wizard and the
//! content rotation engine. The backend is reached only through the
//! [`content::ContentSource`] and [`wizard::ApplicationGateway`] seams.

pub mod api;
pub mod config;
pub mod content;
pub mod error;
pub mod rotation;
pub mod session;
pub mod telemetry;
pub mod validation;
pub mod wizard;
