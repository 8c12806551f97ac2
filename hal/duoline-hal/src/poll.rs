//! Completion polling policies
//!
//! Bus masters built on status-flag peripherals spin until the hardware
//! raises a completion flag. These policies decide how long that spin
//! may last and what counts as a failed transfer.

use crate::i2c::BusError;

/// How long a master may spin waiting for a completion flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PollPolicy {
    /// Spin forever. A stuck peripheral hangs the caller.
    Unbounded,
    /// Give up after this many unsuccessful polls
    ///
    /// A budget of zero fails without sampling the flag.
    Bounded(u32),
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl PollPolicy {
    /// Default budget
    ///
    /// A 9-bit transfer at 100 kHz completes in well under a thousand
    /// polls on any core clock this targets.
    pub const DEFAULT: Self = Self::Bounded(100_000);

    /// Spin until `ready` returns true or the budget runs out
    pub fn wait<F>(&self, mut ready: F) -> Result<(), BusError>
    where
        F: FnMut() -> bool,
    {
        match *self {
            PollPolicy::Unbounded => loop {
                if ready() {
                    return Ok(());
                }
                core::hint::spin_loop();
            },
            PollPolicy::Bounded(polls) => {
                for _ in 0..polls {
                    if ready() {
                        return Ok(());
                    }
                    core::hint::spin_loop();
                }
                Err(BusError::NotResponding)
            }
        }
    }
}

/// Whether the acknowledge bit is checked after each byte
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AckPolicy {
    /// Treat acknowledged and not-acknowledged transfers alike
    #[default]
    Ignore,
    /// Report a missing acknowledge as [`BusError::Nack`]
    Require,
}

impl AckPolicy {
    /// Map the peripheral's acknowledge status to a result
    pub fn check(&self, acknowledged: bool) -> Result<(), BusError> {
        match self {
            AckPolicy::Require if !acknowledged => Err(BusError::Nack),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_succeeds_on_last_poll() {
        let mut polls = 0;
        let result = PollPolicy::Bounded(5).wait(|| {
            polls += 1;
            polls == 5
        });
        assert_eq!(result, Ok(()));
        assert_eq!(polls, 5);
    }

    #[test]
    fn test_bounded_gives_up() {
        let mut polls = 0;
        let result = PollPolicy::Bounded(3).wait(|| {
            polls += 1;
            false
        });
        assert_eq!(result, Err(BusError::NotResponding));
        assert_eq!(polls, 3);
    }

    #[test]
    fn test_zero_budget_never_samples() {
        let mut sampled = false;
        let result = PollPolicy::Bounded(0).wait(|| {
            sampled = true;
            true
        });
        assert_eq!(result, Err(BusError::NotResponding));
        assert!(!sampled);
    }

    #[test]
    fn test_unbounded_returns_once_ready() {
        let mut polls = 0u32;
        let result = PollPolicy::Unbounded.wait(|| {
            polls += 1;
            polls > 10_000
        });
        assert_eq!(result, Ok(()));
        assert_eq!(polls, 10_001);
    }

    #[test]
    fn test_ack_policy() {
        assert_eq!(AckPolicy::Ignore.check(false), Ok(()));
        assert_eq!(AckPolicy::Ignore.check(true), Ok(()));
        assert_eq!(AckPolicy::Require.check(true), Ok(()));
        assert_eq!(AckPolicy::Require.check(false), Err(BusError::Nack));
        assert_eq!(AckPolicy::default(), AckPolicy::Ignore);
    }
}
