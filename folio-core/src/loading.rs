//! Intro loading sequence timing.
//!
//! The page opens on a full-screen loader that walks through a fixed set of
//! status lines before fading into the content. This module owns the lines
//! and their schedule; the page drives the actual timers.

/// One loader status line and when to show it, as an absolute delay from
/// sequence start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingStep {
    pub text: &'static str,
    pub delay_ms: u32,
}

/// The loader status lines in display order.
pub const LOADING_SEQUENCE: [LoadingStep; 5] = [
    LoadingStep {
        text: "Initializing Neural Networks...",
        delay_ms: 0,
    },
    LoadingStep {
        text: "Loading ML Models... 25%",
        delay_ms: 1_000,
    },
    LoadingStep {
        text: "Training Algorithms... 50%",
        delay_ms: 2_000,
    },
    LoadingStep {
        text: "Aspiring Data Scientist... 75%",
        delay_ms: 3_000,
    },
    LoadingStep {
        text: "Machine Learning Expert... 100%",
        delay_ms: 4_000,
    },
];

/// Hold on the last status line before the fade starts.
pub const FINAL_HOLD_MS: u32 = 800;

/// Duration of the loader fade-out.
pub const FADE_OUT_MS: u32 = 800;

/// Waits between consecutive steps, derived from the absolute delays.
///
/// The first wait is the first step's own delay. Delays must be
/// non-decreasing; a step scheduled before its predecessor gets a zero wait.
pub fn step_waits() -> Vec<u32> {
    let mut waits = Vec::with_capacity(LOADING_SEQUENCE.len());
    let mut previous = 0u32;
    for step in LOADING_SEQUENCE {
        waits.push(step.delay_ms.saturating_sub(previous));
        previous = step.delay_ms;
    }
    waits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_runs_to_completion_marker() {
        assert_eq!(LOADING_SEQUENCE.len(), 5);
        assert_eq!(LOADING_SEQUENCE[0].text, "Initializing Neural Networks...");
        assert_eq!(LOADING_SEQUENCE[4].text, "Machine Learning Expert... 100%");
        assert!(
            LOADING_SEQUENCE.windows(2).all(|w| w[0].delay_ms <= w[1].delay_ms),
            "Delays must be non-decreasing"
        );
    }

    #[test]
    fn step_waits_recover_absolute_delays() {
        let waits = step_waits();
        assert_eq!(waits.len(), LOADING_SEQUENCE.len());
        assert_eq!(waits[0], 0, "First step shows immediately");
        assert_eq!(
            waits.iter().sum::<u32>(),
            LOADING_SEQUENCE[4].delay_ms,
            "Waits must sum to the last step's absolute delay"
        );
        assert_eq!(waits, [0, 1_000, 1_000, 1_000, 1_000]);
    }
}
