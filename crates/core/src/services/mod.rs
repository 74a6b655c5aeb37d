//! Service implementations of the host interfaces

pub mod map_property_source;

pub use map_property_source::MapPropertySource;
