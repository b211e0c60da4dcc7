//! One-second countdown driven by a tokio interval.

use std::time::Duration;

use tokio::time::MissedTickBehavior;

use anon_core::CooldownGate;
use anon_core::ports::{Clock, CooldownStore};

/// Tick once per second, reporting the remaining cool-down to `on_tick`,
/// until it reaches zero. The first tick fires immediately.
///
/// Remaining time is recomputed from the gate's clock on every tick, so a
/// delayed tick never drifts the countdown. Dropping the future stops it.
pub async fn run_countdown<C, S, F>(gate: &CooldownGate<C, S>, mut on_tick: F)
where
    C: Clock,
    S: CooldownStore,
    F: FnMut(u64),
{
    let mut interval = tokio::time::interval(Duration::from_secs(1));
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        interval.tick().await;

        let remaining = gate.remaining_secs();
        on_tick(remaining);

        if remaining == 0 {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cooldown::InMemoryCooldownStore;
    use anon_core::cooldown::DEFAULT_WINDOW;
    use anon_core::ports::ManualClock;

    const NOW: i64 = 1_700_000_000_000;

    #[tokio::test(start_paused = true)]
    async fn counts_down_to_zero_then_stops() {
        let clock = ManualClock::at(NOW);
        let store = InMemoryCooldownStore::with_last_post(NOW - 57_000);
        let mut gate = CooldownGate::new(clock.clone(), store, DEFAULT_WINDOW);
        gate.restore().unwrap();

        let mut seen = Vec::new();
        run_countdown(&gate, |remaining| {
            seen.push(remaining);
            clock.advance_ms(1_000);
        })
        .await;

        assert_eq!(seen, vec![3, 2, 1, 0]);
    }

    #[tokio::test(start_paused = true)]
    async fn idle_gate_reports_zero_once() {
        let gate = CooldownGate::new(
            ManualClock::at(NOW),
            InMemoryCooldownStore::new(),
            DEFAULT_WINDOW,
        );

        let mut ticks = 0;
        run_countdown(&gate, |remaining| {
            assert_eq!(remaining, 0);
            ticks += 1;
        })
        .await;

        assert_eq!(ticks, 1);
    }
}
