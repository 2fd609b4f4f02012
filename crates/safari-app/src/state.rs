//! Application state shared between the caller and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use thiserror::Error;

use safari_core::commands::PlayerCommand;
use safari_core::state::GameStateSnapshot;
use safari_sim::assets::SpriteManifest;
use safari_sim::SimConfig;

use crate::game_loop;

/// Commands sent from the front end to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

#[derive(Debug, Error)]
pub enum ControlError {
    #[error("simulation already running")]
    AlreadyRunning,
    #[error("simulation not started")]
    NotStarted,
    #[error("game loop has stopped")]
    LoopStopped,
    #[error("shared state lock poisoned")]
    Poisoned,
    #[error("failed to spawn game loop thread: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Shared application state.
///
/// - `mpsc::Sender` sits behind a `Mutex` so the state is `Sync`
/// - `Arc<Mutex<...>>` holds the latest snapshot, shared with the loop thread
pub struct AppState {
    /// `None` before `start_simulation` is called.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Updated by the game loop thread after each tick.
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    loop_thread: Mutex<Option<JoinHandle<()>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            loop_thread: Mutex::new(None),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn the game loop thread if it is not already running.
    pub fn start_simulation(
        &self,
        config: SimConfig,
        assets: SpriteManifest,
    ) -> Result<(), ControlError> {
        let mut thread = self.loop_thread.lock().map_err(|_| ControlError::Poisoned)?;
        if thread.is_some() {
            return Err(ControlError::AlreadyRunning);
        }

        let (cmd_tx, handle) =
            game_loop::spawn_game_loop(config, assets, self.latest_snapshot.clone())?;

        let mut tx_lock = self.command_tx.lock().map_err(|_| ControlError::Poisoned)?;
        *tx_lock = Some(cmd_tx);
        *thread = Some(handle);
        Ok(())
    }

    /// Forward a player command to the simulation.
    pub fn send_command(&self, command: PlayerCommand) -> Result<(), ControlError> {
        let tx_lock = self.command_tx.lock().map_err(|_| ControlError::Poisoned)?;
        match tx_lock.as_ref() {
            Some(tx) => tx
                .send(GameLoopCommand::PlayerCommand(command))
                .map_err(|_| ControlError::LoopStopped),
            None => Err(ControlError::NotStarted),
        }
    }

    /// The latest snapshot (for polling / initial state).
    pub fn get_snapshot(&self) -> Result<Option<GameStateSnapshot>, ControlError> {
        let lock = self
            .latest_snapshot
            .lock()
            .map_err(|_| ControlError::Poisoned)?;
        Ok(lock.clone())
    }

    pub fn is_running(&self) -> bool {
        self.loop_thread
            .lock()
            .map(|thread| thread.as_ref().is_some_and(|h| !h.is_finished()))
            .unwrap_or(false)
    }

    /// Stop the loop and wait for the thread to exit.
    pub fn shutdown(&self) -> Result<(), ControlError> {
        if let Some(tx) = self
            .command_tx
            .lock()
            .map_err(|_| ControlError::Poisoned)?
            .take()
        {
            // The loop may already be gone; joining below is what matters.
            let _ = tx.send(GameLoopCommand::Shutdown);
        }
        let handle = self
            .loop_thread
            .lock()
            .map_err(|_| ControlError::Poisoned)?
            .take();
        if let Some(handle) = handle {
            handle.join().map_err(|_| ControlError::LoopStopped)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new();
        assert!(state.command_tx.lock().unwrap().is_none());
        assert!(state.latest_snapshot.lock().unwrap().is_none());
        assert!(!state.is_running());
    }

    #[test]
    fn test_send_before_start_fails() {
        let state = AppState::new();
        assert!(matches!(
            state.send_command(PlayerCommand::StartGame),
            Err(ControlError::NotStarted)
        ));
    }

    #[test]
    fn test_start_twice_fails() {
        let state = AppState::new();
        state
            .start_simulation(SimConfig::default(), SpriteManifest::complete())
            .unwrap();
        assert!(matches!(
            state.start_simulation(SimConfig::default(), SpriteManifest::complete()),
            Err(ControlError::AlreadyRunning)
        ));
        state.shutdown().unwrap();
        assert!(!state.is_running());
    }
}
