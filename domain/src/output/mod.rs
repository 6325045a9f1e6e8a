//! Model output domain
//!
//! Turning raw provider text into a JSON payload, and judging whether that
//! payload has the shape the prompt asked for.

mod kind;
pub mod shape;
pub mod validator;

pub use kind::OutputKind;
pub use shape::{ShapeCheck, ShapeIssue, check_shape};
pub use validator::parse_model_output;
