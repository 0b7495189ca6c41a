//! String-keyed parameter storage and the typed accessors layered over it.

pub mod param;
pub mod store;
pub mod value;

pub use param::Param;
pub use store::{ParameterStore, SECURE_PREFIX, is_secure_key};
pub use value::{ParamEnum, ParamValue};
