//! Plays one full game with the autopilot, either flat out or on the
//! real-time loop thread.

use log::info;

use safari_core::commands::PlayerCommand;
use safari_core::constants::DT;
use safari_core::error::SimError;
use safari_core::state::GameReport;
use safari_sim::assets::SpriteManifest;
use safari_sim::engine::{GameEngine, SimConfig};

use crate::autopilot::Autopilot;
use crate::game_loop::TICK_DURATION;
use crate::state::{AppState, ControlError};

/// Run the engine on this thread as fast as it goes until the game ends.
pub fn play_headless(
    config: SimConfig,
    assets: SpriteManifest,
    pilot: &Autopilot,
) -> Result<GameReport, SimError> {
    let mut engine = GameEngine::new(config, Box::new(assets))?;
    engine.queue_command(PlayerCommand::StartGame);

    loop {
        let snapshot = engine.tick(DT)?;
        if let Some(report) = snapshot.report {
            return Ok(report);
        }
        if let Some(command) = pilot.decide(&snapshot) {
            engine.queue_command(command);
        }
    }
}

/// Drive the game loop thread through the shared state, one poll per tick.
pub fn play_realtime(
    state: &AppState,
    config: SimConfig,
    assets: SpriteManifest,
    pilot: &Autopilot,
) -> Result<GameReport, ControlError> {
    state.start_simulation(config, assets)?;
    state.send_command(PlayerCommand::StartGame)?;
    info!("playing in real time");

    loop {
        std::thread::sleep(TICK_DURATION);
        if !state.is_running() {
            return Err(ControlError::LoopStopped);
        }

        let Some(snapshot) = state.get_snapshot()? else {
            continue;
        };
        if let Some(report) = snapshot.report {
            state.shutdown()?;
            return Ok(report);
        }
        if let Some(command) = pilot.decide(&snapshot) {
            state.send_command(command)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use safari_core::constants::{GAME_DURATION_SECS, MAX_SHOTS_TOTAL};
    use safari_core::enums::SpriteKind;

    #[test]
    fn test_headless_game_ends_with_report() {
        let report = play_headless(
            SimConfig::default(),
            SpriteManifest::complete(),
            &Autopilot::default(),
        )
        .unwrap();

        assert!(report.elapsed_secs <= GAME_DURATION_SECS + 1e-6);
        assert!(report.shots_fired <= MAX_SHOTS_TOTAL);
        assert!(
            report.rhino_kills + report.bizon_kills + report.gazelle_kills <= report.shots_fired,
            "one bullet scores at most once"
        );
    }

    #[test]
    fn test_headless_is_deterministic() {
        let config = SimConfig {
            seed: 777,
            ..Default::default()
        };
        let pilot = Autopilot::default();
        let a = play_headless(config, SpriteManifest::complete(), &pilot).unwrap();
        let b = play_headless(config, SpriteManifest::complete(), &pilot).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_headless_surfaces_missing_sprite() {
        let assets = SpriteManifest::complete().without(SpriteKind::Barrier);
        let err = play_headless(SimConfig::default(), assets, &Autopilot::default()).unwrap_err();
        assert_eq!(err, SimError::MissingSprite(SpriteKind::Barrier));
    }

    #[test]
    fn test_realtime_short_game() {
        let state = AppState::new();
        let config = SimConfig {
            game_duration_secs: 0.2,
            ..Default::default()
        };
        let report =
            play_realtime(&state, config, SpriteManifest::complete(), &Autopilot::default())
                .unwrap();
        assert!(!report.victory);
        assert!(!state.is_running());
    }
}
