/// Expression errors.
///
/// Defines every failure that can occur while tokenizing, converting or
/// evaluating a single expression. These errors are local to one input line
/// and never abort a batch.
pub mod expr_error;
/// Batch errors.
///
/// Contains the errors that terminate a whole run, such as a missing input
/// file or a failed write to the output sink.
pub mod batch_error;

pub use batch_error::BatchError;
pub use expr_error::ExprError;
