//! sidemenu - Elm-style side panel controller
//!
//! This crate provides the state machine, gesture interpretation and
//! transition engine for a three-panel layout with slide-out side menus,
//! plus a small runtime that drives any host toolkit through traits.

pub mod commands;
pub mod config;
pub mod config_paths;
pub mod layout;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod script;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::Preferences;
pub use messages::Msg;
pub use model::MenuModel;
pub use runtime::SideMenu;
