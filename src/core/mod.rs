//! Core business logic layer
//!
//! This module contains the setup state machine, value cycling and key
//! dispatch. NO imports from frontend/ or rendering code.
//! Core updates data structures in the data layer, frontends read and render.

pub mod app_core;
pub mod dispatcher;
pub mod effect;
pub mod input_router;
pub mod key_roles;
pub mod navigation;
pub mod password_form;
pub mod value_cycle;

pub use app_core::AppCore;
pub use dispatcher::dispatch_key;
pub use effect::{Effect, Notice};
pub use key_roles::KeyRole;
pub use navigation::{NavEvent, Session};
