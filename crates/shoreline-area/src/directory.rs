//! Routing layer: maps area ids to running area actors.

use std::collections::HashMap;

use shoreline_protocol::{
    AreaId, AreaModel, CommandOutcome, CommandRequest, CommandResponse, PlayerId, PlayerInfo,
};

use crate::{AreaError, AreaHandle, AreaSubscriber, InteractableArea, spawn_area};

/// Default bound for each area's command channel.
pub const DEFAULT_CHANNEL_SIZE: usize = 64;

/// Owns the handle for every live area and routes command envelopes to the
/// right actor by interactable id.
///
/// The directory itself holds no game state; it is safe to share behind an
/// `Arc` because every mutation happens inside the area actors.
#[derive(Default)]
pub struct AreaDirectory {
    areas: HashMap<AreaId, AreaHandle>,
}

impl AreaDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns an actor for `area` and registers its handle.
    pub fn spawn<A: InteractableArea>(&mut self, area: A) -> AreaHandle {
        let handle = spawn_area(area, DEFAULT_CHANNEL_SIZE);
        self.register(handle.clone());
        handle
    }

    /// Registers an already-running area. A handle registered under an id
    /// that is already taken replaces the previous one.
    pub fn register(&mut self, handle: AreaHandle) {
        self.areas.insert(handle.area_id().clone(), handle);
    }

    /// The handle for `id`, if an area is registered under it.
    pub fn get(&self, id: &AreaId) -> Option<&AreaHandle> {
        self.areas.get(id)
    }

    /// Ids of every registered area.
    pub fn area_ids(&self) -> impl Iterator<Item = &AreaId> {
        self.areas.keys()
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    /// Dispatches one command envelope and produces the matching response
    /// envelope. Never fails: every error becomes a
    /// [`CommandOutcome::Error`] carried back under the request's
    /// `command_id`.
    pub async fn handle_request(
        &self,
        player: &PlayerInfo,
        request: CommandRequest,
    ) -> CommandResponse {
        let outcome = match self.areas.get(&request.interactable_id) {
            Some(handle) => match handle.send_command(player.clone(), request.command).await {
                Ok(payload) => CommandOutcome::Payload(payload),
                Err(err) => CommandOutcome::Error(err.to_string()),
            },
            None => {
                let err = AreaError::NotFound(request.interactable_id.clone());
                tracing::debug!(player_id = %player.id, %err, "command for unknown area");
                CommandOutcome::Error(err.to_string())
            }
        };

        CommandResponse {
            command_id: request.command_id,
            interactable_id: request.interactable_id,
            outcome,
        }
    }

    /// Adds `player` as occupant and subscriber of the area.
    ///
    /// # Errors
    /// [`AreaError::NotFound`] for an unknown id, [`AreaError::Unavailable`]
    /// when the actor is gone.
    pub async fn enter(
        &self,
        id: &AreaId,
        player: PlayerInfo,
        sender: AreaSubscriber,
    ) -> Result<AreaModel, AreaError> {
        let handle = self
            .areas
            .get(id)
            .ok_or_else(|| AreaError::NotFound(id.clone()))?;
        handle.enter(player, sender).await
    }

    /// Removes `player_id` from the area's roster and subscriber set.
    pub async fn exit(&self, id: &AreaId, player_id: PlayerId) -> Result<(), AreaError> {
        let handle = self
            .areas
            .get(id)
            .ok_or_else(|| AreaError::NotFound(id.clone()))?;
        handle.exit(player_id).await
    }

    /// The current snapshot of one area.
    pub async fn snapshot(&self, id: &AreaId) -> Result<AreaModel, AreaError> {
        let handle = self
            .areas
            .get(id)
            .ok_or_else(|| AreaError::NotFound(id.clone()))?;
        handle.snapshot().await
    }

    /// Snapshots of every registered area, for the initial world sync.
    pub async fn snapshot_all(&self) -> Vec<AreaModel> {
        let mut models = Vec::with_capacity(self.areas.len());
        for handle in self.areas.values() {
            if let Ok(model) = handle.snapshot().await {
                models.push(model);
            }
        }
        models
    }

    /// Asks every area actor to stop. Handles stay registered; subsequent
    /// commands get [`AreaError::Unavailable`].
    pub async fn shutdown_all(&self) {
        for handle in self.areas.values() {
            let _ = handle.shutdown().await;
        }
    }
}
