//! Area actor: an isolated Tokio task that owns one interactable area.
//!
//! Commands arrive on an mpsc channel and are handled to completion in
//! arrival order; the `oneshot` in each request is the reply channel back
//! to the caller. Subscribers receive a fresh snapshot after every
//! successful command, in the order the commands completed.

use std::collections::HashMap;

use shoreline_protocol::{AreaCommand, AreaId, AreaModel, PlayerId, PlayerInfo, ResponsePayload};
use tokio::sync::{mpsc, oneshot};

use crate::AreaError;

/// The capability set every area variant implements. The actor wraps an
/// implementation and serializes access to it.
pub trait InteractableArea: Send + 'static {
    /// The area's unique id (its name on the town map).
    fn id(&self) -> &AreaId;

    /// Adds a player to the occupant roster.
    fn add_occupant(&mut self, player: PlayerInfo);

    /// Removes a player from the occupant roster.
    fn remove_occupant(&mut self, player: PlayerId);

    /// The externally visible snapshot.
    fn snapshot(&self) -> AreaModel;

    /// Handles one command. `Ok(None)` is an empty success.
    ///
    /// # Errors
    /// Any [`AreaError`]; the actor converts it into a reply for the
    /// caller and leaves subscribers untouched.
    fn handle_command(
        &mut self,
        player: &PlayerInfo,
        command: AreaCommand,
    ) -> Result<Option<ResponsePayload>, AreaError>;
}

// Boxed areas are spawnable too, so heterogeneous sets can be built up
// front and handed to the directory in one pass.
impl InteractableArea for Box<dyn InteractableArea> {
    fn id(&self) -> &AreaId {
        (**self).id()
    }

    fn add_occupant(&mut self, player: PlayerInfo) {
        (**self).add_occupant(player);
    }

    fn remove_occupant(&mut self, player: PlayerId) {
        (**self).remove_occupant(player);
    }

    fn snapshot(&self) -> AreaModel {
        (**self).snapshot()
    }

    fn handle_command(
        &mut self,
        player: &PlayerInfo,
        command: AreaCommand,
    ) -> Result<Option<ResponsePayload>, AreaError> {
        (**self).handle_command(player, command)
    }
}

/// Channel sender for delivering snapshots to one subscriber.
pub type AreaSubscriber = mpsc::UnboundedSender<AreaModel>;

/// Requests sent to an area actor through its channel.
pub(crate) enum AreaRequest {
    /// Handle a command on behalf of a player.
    Command {
        player: PlayerInfo,
        command: AreaCommand,
        reply: oneshot::Sender<Result<Option<ResponsePayload>, AreaError>>,
    },

    /// A player entered the area: add them to the roster and start
    /// pushing snapshots to `sender`.
    Enter {
        player: PlayerInfo,
        sender: AreaSubscriber,
        reply: oneshot::Sender<AreaModel>,
    },

    /// A player stepped out of the area.
    Exit { player_id: PlayerId },

    /// Request the current snapshot.
    Snapshot { reply: oneshot::Sender<AreaModel> },

    /// Shut down the actor.
    Shutdown,
}

/// Handle to a running area actor. Cheap to clone — it's just an
/// `mpsc::Sender` wrapper plus the area's id.
#[derive(Clone)]
pub struct AreaHandle {
    area_id: AreaId,
    sender: mpsc::Sender<AreaRequest>,
}

impl AreaHandle {
    /// The id of the area this handle talks to.
    pub fn area_id(&self) -> &AreaId {
        &self.area_id
    }

    /// Sends a command and waits for the area's reply.
    pub async fn send_command(
        &self,
        player: PlayerInfo,
        command: AreaCommand,
    ) -> Result<Option<ResponsePayload>, AreaError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.sender
            .send(AreaRequest::Command {
                player,
                command,
                reply: reply_tx,
            })
            .await
            .map_err(|_| AreaError::Unavailable(self.area_id.clone()))?;
        reply_rx
            .await
            .map_err(|_| AreaError::Unavailable(self.area_id.clone()))?
    }

    /// Registers a player as an occupant and subscriber. Returns the
    /// snapshot current at the moment of entry.
    pub async fn enter(
        &self,
        player: PlayerInfo,
        sender: AreaSubscriber,
    ) -> Result<AreaModel, AreaError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.sender
            .send(AreaRequest::Enter {
                player,
                sender,
                reply: reply_tx,
            })
            .await
            .map_err(|_| AreaError::Unavailable(self.area_id.clone()))?;
        reply_rx
            .await
            .map_err(|_| AreaError::Unavailable(self.area_id.clone()))
    }

    /// Removes a player from the occupant roster (fire-and-forget).
    pub async fn exit(&self, player_id: PlayerId) -> Result<(), AreaError> {
        self.sender
            .send(AreaRequest::Exit { player_id })
            .await
            .map_err(|_| AreaError::Unavailable(self.area_id.clone()))
    }

    /// Requests the current snapshot.
    pub async fn snapshot(&self) -> Result<AreaModel, AreaError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.sender
            .send(AreaRequest::Snapshot { reply: reply_tx })
            .await
            .map_err(|_| AreaError::Unavailable(self.area_id.clone()))?;
        reply_rx
            .await
            .map_err(|_| AreaError::Unavailable(self.area_id.clone()))
    }

    /// Tells the area to shut down.
    pub async fn shutdown(&self) -> Result<(), AreaError> {
        self.sender
            .send(AreaRequest::Shutdown)
            .await
            .map_err(|_| AreaError::Unavailable(self.area_id.clone()))
    }
}

/// The internal actor state. Runs inside a Tokio task.
struct AreaActor<A: InteractableArea> {
    area: A,
    subscribers: HashMap<PlayerId, AreaSubscriber>,
    receiver: mpsc::Receiver<AreaRequest>,
}

impl<A: InteractableArea> AreaActor<A> {
    async fn run(mut self) {
        tracing::info!(area_id = %self.area.id(), "area actor started");

        while let Some(request) = self.receiver.recv().await {
            match request {
                AreaRequest::Command {
                    player,
                    command,
                    reply,
                } => {
                    let tag = command.tag();
                    let result = self.area.handle_command(&player, command);
                    match &result {
                        // Successful state changes go to every subscriber;
                        // failures go only to the caller.
                        Ok(_) => self.broadcast(),
                        Err(err) => tracing::debug!(
                            area_id = %self.area.id(),
                            player_id = %player.id,
                            command = tag,
                            %err,
                            "command rejected"
                        ),
                    }
                    let _ = reply.send(result);
                }
                AreaRequest::Enter {
                    player,
                    sender,
                    reply,
                } => {
                    tracing::info!(
                        area_id = %self.area.id(),
                        player_id = %player.id,
                        "player entered area"
                    );
                    self.subscribers.insert(player.id, sender);
                    self.area.add_occupant(player);
                    self.broadcast();
                    let _ = reply.send(self.area.snapshot());
                }
                AreaRequest::Exit { player_id } => {
                    tracing::info!(
                        area_id = %self.area.id(),
                        %player_id,
                        "player left area"
                    );
                    self.subscribers.remove(&player_id);
                    self.area.remove_occupant(player_id);
                    self.broadcast();
                }
                AreaRequest::Snapshot { reply } => {
                    let _ = reply.send(self.area.snapshot());
                }
                AreaRequest::Shutdown => {
                    tracing::info!(area_id = %self.area.id(), "area shutting down");
                    break;
                }
            }
        }

        tracing::info!(area_id = %self.area.id(), "area actor stopped");
    }

    /// Pushes the current snapshot to every subscriber. Silently drops
    /// receivers that are gone (player disconnected).
    fn broadcast(&self) {
        let snapshot = self.area.snapshot();
        for sender in self.subscribers.values() {
            let _ = sender.send(snapshot.clone());
        }
    }
}

/// Spawns an area actor task and returns a handle to communicate with it.
///
/// `channel_size` bounds the command channel; senders wait when it fills.
pub fn spawn_area<A: InteractableArea>(area: A, channel_size: usize) -> AreaHandle {
    let area_id = area.id().clone();
    let (tx, rx) = mpsc::channel(channel_size);

    let actor = AreaActor {
        area,
        subscribers: HashMap::new(),
        receiver: rx,
    };

    tokio::spawn(actor.run());

    AreaHandle {
        area_id,
        sender: tx,
    }
}
