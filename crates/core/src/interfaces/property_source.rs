//! String-keyed property bag interface
//!
//! Host property bags are dynamically typed and may fail on any lookup.
//! [`get_value`] is the only way the rest of the crate reads them: every
//! failure collapses into `None`.

use crate::error::PropertyError;
use tracing::debug;

/// Property key: explicit program to start ("Start external program")
pub const START_PROGRAM: &str = "StartProgram";
/// Property key: project directory
pub const FULL_PATH: &str = "FullPath";
/// Property key: build output directory, relative to the project directory
pub const OUTPUT_PATH: &str = "OutputPath";
/// Property key: file name of the build artifact
pub const OUTPUT_FILE_NAME: &str = "OutputFileName";
/// Property key: explicit working directory for the started program
pub const START_WORKING_DIRECTORY: &str = "StartWorkingDirectory";
/// Property key: argument string for the started program
pub const START_ARGUMENTS: &str = "StartArguments";

/// A dynamically typed value held by a host property bag
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    String(String),
    Bool(bool),
    Integer(i64),
    /// A value of a shape no property accessor understands (lists, objects, floats)
    Unsupported(&'static str),
    Null,
}

impl PropertyValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            PropertyValue::String(_) => "string",
            PropertyValue::Bool(_) => "bool",
            PropertyValue::Integer(_) => "integer",
            PropertyValue::Unsupported(kind) => *kind,
            PropertyValue::Null => "null",
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::String(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::String(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        PropertyValue::Integer(value)
    }
}

/// Trait for string-keyed property lookups
pub trait PropertySource {
    /// Look up a property by name.
    ///
    /// Implementations report absent keys as [`PropertyError::Missing`] and
    /// host failures as [`PropertyError::Unavailable`].
    fn property(&self, name: &str) -> Result<PropertyValue, PropertyError>;
}

impl<P: PropertySource + ?Sized> PropertySource for &P {
    fn property(&self, name: &str) -> Result<PropertyValue, PropertyError> {
        (**self).property(name)
    }
}

impl<P: PropertySource + ?Sized> PropertySource for Box<P> {
    fn property(&self, name: &str) -> Result<PropertyValue, PropertyError> {
        (**self).property(name)
    }
}

/// Conversion from a [`PropertyValue`] into a concrete type
pub trait FromPropertyValue: Sized {
    const TYPE_NAME: &'static str;

    /// Returns `None` when the value has a different type.
    fn from_property_value(value: PropertyValue) -> Option<Self>;
}

impl FromPropertyValue for String {
    const TYPE_NAME: &'static str = "string";

    fn from_property_value(value: PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl FromPropertyValue for bool {
    const TYPE_NAME: &'static str = "bool";

    fn from_property_value(value: PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::Bool(b) => Some(b),
            _ => None,
        }
    }
}

impl FromPropertyValue for i64 {
    const TYPE_NAME: &'static str = "integer";

    fn from_property_value(value: PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::Integer(i) => Some(i),
            _ => None,
        }
    }
}

/// Read a typed property, or `None` if it is missing, unreadable, null or of another type
pub fn get_value<T, S>(source: &S, name: &str) -> Option<T>
where
    T: FromPropertyValue,
    S: PropertySource + ?Sized,
{
    match lookup(source, name) {
        Ok(value) => value,
        Err(e) => {
            debug!("Ignoring property lookup failure: {}", e);
            None
        }
    }
}

fn lookup<T, S>(source: &S, name: &str) -> Result<Option<T>, PropertyError>
where
    T: FromPropertyValue,
    S: PropertySource + ?Sized,
{
    let value = source.property(name)?;
    if value == PropertyValue::Null {
        return Ok(None);
    }

    let found = value.type_name();
    T::from_property_value(value)
        .map(Some)
        .ok_or_else(|| PropertyError::TypeMismatch {
            name: name.to_string(),
            expected: T::TYPE_NAME,
            found,
        })
}
