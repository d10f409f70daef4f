/// Collector module
///
/// This module groups all logic responsible for:
/// - Driving the paginated fetch loop
/// - Accumulating channel records and their names
/// - Triggering a snapshot write after every page
///
/// The collector layer acts as the orchestration layer between:
/// - The page source (HTTP transport)
/// - The SnapshotStore (persistence layer)
///
/// Design notes:
/// - Transport and persistence details MUST NOT live here
/// - Collection state is owned by the Collector value; there is
///   no global or shared mutable state anywhere in the run
pub mod runner;

pub use runner::{Collector, RunOutcome, RunReport};
