/// Check a value before it is used.
///
/// Implemented by the scheme checks in [`crate::scheme::validation`]: one
/// validator looks at the file path, another at the parsed palette. Each
/// returns its own error type, which converts into [`crate::AppError`].
///
/// `T` may be unsized, so `Validator<Path>` and `Validator<str>` work.
///
/// ```no_run
/// use hueshift::validation::Validator;
/// use std::path::Path;
///
/// struct JsonOnly;
///
/// impl Validator<Path> for JsonOnly {
///     type Error = String;
///
///     fn validate(&self, input: &Path) -> Result<(), Self::Error> {
///         match input.extension().and_then(|ext| ext.to_str()) {
///             Some("json") => Ok(()),
///             _ => Err(format!("{} is not a .json file", input.display())),
///         }
///     }
/// }
/// ```
pub trait Validator<T: ?Sized> {
    type Error;

    fn validate(&self, input: &T) -> Result<(), Self::Error>;
}
