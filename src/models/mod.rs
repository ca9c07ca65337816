//! Normalized, strongly-typed payload records.
//!
//! These are the outputs of the validators. They serialize with camelCase
//! keys and omit optional fields that were not supplied, so a serialized
//! record can be fed back through validation unchanged.

pub mod communication_info;
pub mod person;

pub use communication_info::CommunicationInfo;
pub use person::Person;
