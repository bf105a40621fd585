//! Configuration for response mapping.
//!
//! - [`MappingOptions`]: How tolerant the handler is of odd response bodies

mod options;

pub use options::MappingOptions;
