//!
//! Ready-made modifiers.
//!
//! A modifier receives the argument tuple and the result of the subject,
//! and produces the output of the composed function.
//!

/// Output the subject's result unchanged.
///
/// The composed function then behaves exactly like the subject.
pub fn keep_result<Args, R>(_args: Args, result: R) -> R {
    result
}

/// Output the argument tuple, after the subject has run.
pub fn keep_args<Args, R>(args: Args, _result: R) -> Args {
    args
}

/// Output both the argument tuple and the subject's result.
pub fn keep_both<Args, R>(args: Args, result: R) -> (Args, R) {
    (args, result)
}

/// Convert the subject's result into another type.
///
/// The target type is picked by the caller, typically with a turbofish:
///
/// ```
/// use recompose::modifier::convert_result;
///
/// let widened = recompose::compose1(|x: u8| x, convert_result::<_, _, u64>);
///
/// assert_eq!(widened(200), 200u64);
/// ```
pub fn convert_result<Args, R, U>(_args: Args, result: R) -> U
where
    R: Into<U>,
{
    result.into()
}
