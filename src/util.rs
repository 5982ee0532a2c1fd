/// Numeric helpers.
///
/// Formatting of evaluation results for the output sink.
pub mod num;
