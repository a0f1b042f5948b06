/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
No log implementation is provided. For details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to unit propagation.
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to decisions.
    pub const DECISION: &str = "decision";

    /// Logs related to conflict analysis.
    pub const ANALYSIS: &str = "analysis";

    /// Logs related to backjumping.
    pub const BACKJUMP: &str = "backjump";

    /// Logs related to preprocessing.
    pub const PREPROCESSING: &str = "preprocessing";

    /// Logs related to the implication graph.
    pub const GRAPH: &str = "graph";
}
