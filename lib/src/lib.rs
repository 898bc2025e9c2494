//! SnapMenu Core Library
//!
//! This library provides the menu data model and the application logic
//! around it: the closed set of editing operations, the contract for the
//! AI extraction collaborator, and the state machine that drives the
//! upload → processing → editor → preview → share flow.
//!
//! The URL codec that publishes a menu lives in the `snapmenu-sharelink`
//! crate; this crate knows nothing about tokens or addresses.

pub mod edit;
pub mod extraction;
pub mod flow;
pub mod log_utils;
pub mod menu;

pub use edit::EditError;
pub use extraction::{ExtractionError, MenuExtractor, MenuImage};
pub use flow::{AppFlow, AppStep, FlowError};
pub use menu::{MenuCategory, MenuDocument, MenuItem};
