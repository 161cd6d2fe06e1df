/// Data analysis for the pressure alert service.
///
/// Submodules:
/// - `trend` — per-day trend analysis: extrema, first threshold breach,
///   intraday range check, and direction-reversal counting.

pub mod trend;
