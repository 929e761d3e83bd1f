// =============================================================================
// Signals Module
// =============================================================================
//
// Rule-based buy-signal scoring over the annotated series. Pure functions;
// the evaluator never mutates its input and holds no state between calls.

pub mod buy_signal;

pub use buy_signal::evaluate_signal;
