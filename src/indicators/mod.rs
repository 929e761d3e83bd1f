// =============================================================================
// Technical Indicators Module
// =============================================================================
//
// Pure, side-effect-free series transforms. The Bollinger engine maps a daily
// price series to a parallel annotated series; it never fails on valid input.

pub mod bollinger;

pub use bollinger::compute_indicators;
