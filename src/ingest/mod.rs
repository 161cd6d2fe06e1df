/// Data ingestion from the external forecast provider.
///
/// Submodules:
/// - `open_meteo` — Open-Meteo forecast API: URL construction, JSON
///   parsing, and the blocking fetch.
/// - `fixtures` (test only) — representative API response payloads.

pub mod open_meteo;

#[cfg(test)]
pub(crate) mod fixtures;
