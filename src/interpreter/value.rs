/// Runtime values and their kinds.
///
/// Defines the `Value` enum pushed on the operand stack and bound to
/// variables, the `Kind` tag every value carries, and the two text renderings
/// used by `str` and by program output.
pub mod core;
