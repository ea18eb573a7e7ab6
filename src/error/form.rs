use thiserror::Error;

/// Input rejected before any request is made.
///
/// These mirror the checks a browser performs for `required`, `type="email"`,
/// `type="number"` and `type="date"` inputs; there is no business-rule validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Please fill out the {0} field.")]
    Missing(&'static str),
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please enter a number for {field}, got {value:?}.")]
    InvalidNumber { field: &'static str, value: String },
    #[error("Please enter a date as YYYY-MM-DD for {field}, got {value:?}.")]
    InvalidDate { field: &'static str, value: String },
}
