pub mod validator;

pub use validator::{validate, Verdict};
