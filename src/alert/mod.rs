/// Alerting for the pressure alert service.
///
/// Submodules:
/// - `compose` — turns an `AnalysisResult` into the titled, time-annotated
///   notification payload handed to the host automation shell.

pub mod compose;
