//! Events that trigger state transitions

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Power-up sequence started
    InitStarted,
    /// Final settle delay of the power-up sequence elapsed
    InitCompleted,
    /// A bus failure aborted the power-up sequence
    InitFailed,
}
