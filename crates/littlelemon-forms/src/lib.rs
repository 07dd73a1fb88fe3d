//! Form handling and validation for the Little Lemon site.
//!
//! A form is described once, declaratively, as a [`FormSchema`]: an ordered
//! list of [`FieldSpec`]s, each carrying its required-message and validation
//! rules. One routine — [`FormSchema::validate`] — consumes the schema
//! against a snapshot of field values and produces [`ValidationErrors`],
//! a map of at most one human-readable message per failing field.
//!
//! Validation is synchronous and deterministic: no I/O, no retries. A field
//! failure is always recoverable by correcting the input and revalidating.
//!
//! ## Example
//!
//! ```
//! use littlelemon_forms::{FieldSpec, FormSchema, MinLengthValidator};
//! use std::collections::HashMap;
//!
//! let schema = FormSchema::new(vec![
//!     FieldSpec::new("name", "Full Name")
//!         .required("Name is required")
//!         .validator(MinLengthValidator::new(2, "Name must be at least 2 characters")),
//! ]);
//!
//! let mut values = HashMap::new();
//! values.insert("name", "J".to_string());
//! let errors = schema.validate(&values);
//! assert_eq!(errors.message("name"), Some("Name must be at least 2 characters"));
//! ```

pub mod error;
pub mod schema;
pub mod validators;

pub use error::{FieldError, FieldResult};
pub use schema::{FieldSpec, FormSchema, ValidationErrors};
pub use validators::{
	ChoiceValidator, EmailValidator, MinLengthValidator, PhoneValidator, RangeValidator, Validator,
};
