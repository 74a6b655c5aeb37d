//! Host-facing interfaces
//!
//! The launcher itself is host independent. Everything it needs from the
//! surrounding environment (property bags, builds, user notification) comes
//! through the traits defined here.

pub mod host;
pub mod property_source;

pub use host::{DebuggerMode, Host, SelectedProject};
pub use property_source::{FromPropertyValue, PropertySource, PropertyValue, get_value};
