#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::constants::*;
    use crate::enums::*;
    use crate::error::SimError;
    use crate::events::AudioEvent;
    use crate::state::{GameReport, GameStateSnapshot};
    use crate::types::{Position, SimTime, Velocity};

    /// PlayerCommand is a tagged union on the wire.
    #[test]
    fn test_player_command_wire_format() {
        let json = serde_json::to_string(&PlayerCommand::Fire).unwrap();
        assert_eq!(json, r#"{"type":"Fire"}"#);

        let back: PlayerCommand = serde_json::from_str(r#"{"type":"StartGame"}"#).unwrap();
        assert_eq!(back, PlayerCommand::StartGame);
    }

    #[test]
    fn test_audio_event_wire_format() {
        let event = AudioEvent::TargetHit {
            species: Species::Rhino,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"type":"TargetHit","species":"Rhino"}"#);

        let back: AudioEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_default_snapshot_is_rules_screen() {
        let snap = GameStateSnapshot::default();
        assert_eq!(snap.phase, GamePhase::Rules);
        assert!(snap.actors.is_empty());
        assert!(snap.bullets.is_empty());
        assert!(snap.report.is_none());

        let json = serde_json::to_string(&snap).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
    }

    #[test]
    fn test_report_serde() {
        let report = GameReport {
            victory: true,
            rhino_kills: 1,
            bizon_kills: 4,
            gazelle_kills: 8,
            shots_fired: 15,
            elapsed_secs: 42.5,
        };
        let json = serde_json::to_string(&report).unwrap();
        let back: GameReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn test_lane_species_mapping() {
        assert_eq!(LaneKind::Rhino.species(), Some(Species::Rhino));
        assert_eq!(LaneKind::Bizon.species(), Some(Species::Bizon));
        assert_eq!(LaneKind::Gazelle.species(), Some(Species::Gazelle));
        assert_eq!(LaneKind::Palm.species(), None);
        assert_eq!(LaneKind::Barrier.species(), None);
    }

    #[test]
    fn test_every_lane_has_a_sprite() {
        for lane in LaneKind::ALL {
            let sprite = SpriteKind::from(lane);
            assert!(SpriteKind::ALL.contains(&sprite));
        }
    }

    #[test]
    fn test_missing_sprite_message() {
        let err = SimError::MissingSprite(SpriteKind::Bullet);
        assert_eq!(err.to_string(), "sprite Bullet is not loaded");
    }

    #[test]
    fn test_position_offset() {
        let p = Position::new(100.0, 50.0).offset(20.0, -20.0);
        assert_eq!(p, Position::new(120.0, 30.0));
        assert_eq!(Velocity::horizontal(-5.0), Velocity::new(-5.0, 0.0));
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..TICK_RATE {
            time.advance(DT);
        }
        assert_eq!(time.tick, TICK_RATE as u64);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-9);
    }

    /// The tuning table has to be internally consistent for the game to be winnable.
    #[test]
    fn test_constants_consistency() {
        let intervals = [
            (RHINO_SPAWN_INTERVAL_MIN, RHINO_SPAWN_INTERVAL_MAX),
            (BIZON_SPAWN_INTERVAL_MIN, BIZON_SPAWN_INTERVAL_MAX),
            (GAZELLE_SPAWN_INTERVAL_MIN, GAZELLE_SPAWN_INTERVAL_MAX),
            (PALM_SPAWN_INTERVAL_MIN, PALM_SPAWN_INTERVAL_MAX),
            (BARRIER_SPAWN_INTERVAL_MIN, BARRIER_SPAWN_INTERVAL_MAX),
        ];
        for (min, max) in intervals {
            assert!(min > 0 && min <= max, "bad interval {min}..{max}");
        }

        for speed in [
            RHINO_SPEED,
            BIZON_SPEED,
            GAZELLE_SPEED,
            PALM_SPEED,
            BARRIER_SPEED,
        ] {
            assert!(speed > 0.0);
        }

        assert_eq!(BULLET_SPEED_X.abs(), BULLET_SPEED_Y.abs(), "45 degree shot");
        assert!(MIN_TIME_SINCE_LAST_SHOT > 0.0);
        assert!(GAME_DURATION_SECS > 0.0);
        assert!(
            VICTORY_RHINO + VICTORY_BIZON + VICTORY_GAZELLE <= MAX_SHOTS_TOTAL,
            "quotas must be reachable with the ammo ceiling"
        );
        assert!(FIELD_LEFT_X < FIELD_RIGHT_X);
    }
}
