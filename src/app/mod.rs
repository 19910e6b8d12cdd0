//! Client state and the controller that drives the upload and analyze flows

pub mod controller;
pub mod state;

pub use controller::{Controller, UploadLimits};
pub use state::{AppState, Pending, Phase};
