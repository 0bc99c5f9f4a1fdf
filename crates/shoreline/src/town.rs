//! The `Town` service: wires a directory of area actors from declarative
//! area definitions and exposes the command boundary.

use shoreline_area::{
    AreaDirectory, AreaSubscriber, FishingArea, InteractableArea, TradingArea,
};
use shoreline_protocol::{
    AreaId, AreaModel, BoundingBox, Codec, CommandRequest, CommandResponse, JsonCodec, PlayerId,
    PlayerInfo,
};

use crate::ShorelineError;

/// A declarative area description, typically read from the town's map
/// data. `Town::new` turns each definition into a running area actor.
#[derive(Debug, Clone, PartialEq)]
pub enum AreaDefinition {
    /// A region hosting the two-party trading game.
    Trading { id: AreaId, bounds: BoundingBox },
    /// A region hosting fish generation and the trophy display.
    Fishing { id: AreaId, bounds: BoundingBox },
}

impl AreaDefinition {
    /// The id this definition will register under.
    pub fn id(&self) -> &AreaId {
        match self {
            Self::Trading { id, .. } | Self::Fishing { id, .. } => id,
        }
    }
}

/// One shared world: a set of interactable areas plus the codec used at
/// the transport seam.
///
/// All mutable state lives inside the area actors, so a `Town` can be
/// shared behind an `Arc` and driven from many connection tasks at once.
pub struct Town {
    directory: AreaDirectory,
    codec: JsonCodec,
}

impl Town {
    /// Builds the town, spawning one actor per definition.
    ///
    /// # Errors
    /// [`ShorelineError::Area`] when a definition is malformed (degenerate
    /// bounding box), [`ShorelineError::Validation`] when the stock fish
    /// catalog fails to validate. Nothing is spawned on error.
    pub fn new(
        definitions: impl IntoIterator<Item = AreaDefinition>,
    ) -> Result<Self, ShorelineError> {
        // Validate every definition before spawning any actor.
        let mut areas: Vec<Box<dyn InteractableArea>> = Vec::new();
        for definition in definitions {
            match definition {
                AreaDefinition::Trading { id, bounds } => {
                    areas.push(Box::new(TradingArea::new(id, bounds)?));
                }
                AreaDefinition::Fishing { id, bounds } => {
                    areas.push(Box::new(FishingArea::new(id, bounds)?));
                }
            }
        }

        let mut directory = AreaDirectory::new();
        for area in areas {
            directory.spawn(area);
        }
        tracing::info!(areas = directory.len(), "town started");

        Ok(Self {
            directory,
            codec: JsonCodec,
        })
    }

    /// Registers an extra area built outside the definition set, e.g. a
    /// trading area wired to a custom [`shoreline_area::ResultSink`].
    pub fn register<A: InteractableArea>(&mut self, area: A) {
        self.directory.spawn(area);
    }

    /// Number of registered areas.
    pub fn area_count(&self) -> usize {
        self.directory.len()
    }

    /// Dispatches one command envelope. Always produces a response
    /// correlated to the request; errors arrive as the response's error
    /// string, never as a `Result`.
    pub async fn handle_command(
        &self,
        player: &PlayerInfo,
        request: CommandRequest,
    ) -> CommandResponse {
        self.directory.handle_request(player, request).await
    }

    /// The byte-level command boundary for the transport seam: decodes a
    /// [`CommandRequest`], dispatches it, and encodes the response.
    ///
    /// # Errors
    /// [`ShorelineError::Protocol`] when the bytes do not decode to a
    /// request or the response fails to encode. Dispatch itself never
    /// fails; area errors travel inside the encoded response.
    pub async fn handle_raw(
        &self,
        player: &PlayerInfo,
        bytes: &[u8],
    ) -> Result<Vec<u8>, ShorelineError> {
        let request: CommandRequest = self.codec.decode(bytes)?;
        let response = self.handle_command(player, request).await;
        Ok(self.codec.encode(&response)?)
    }

    /// Adds `player` to an area's roster and snapshot feed. Returns the
    /// snapshot current at the moment of entry.
    ///
    /// # Errors
    /// Unknown area id, or an actor that is gone.
    pub async fn enter_area(
        &self,
        id: &AreaId,
        player: PlayerInfo,
        sender: AreaSubscriber,
    ) -> Result<AreaModel, ShorelineError> {
        Ok(self.directory.enter(id, player, sender).await?)
    }

    /// Removes `player_id` from an area's roster and snapshot feed.
    pub async fn exit_area(&self, id: &AreaId, player_id: PlayerId) -> Result<(), ShorelineError> {
        Ok(self.directory.exit(id, player_id).await?)
    }

    /// The current snapshot of one area.
    pub async fn snapshot(&self, id: &AreaId) -> Result<AreaModel, ShorelineError> {
        Ok(self.directory.snapshot(id).await?)
    }

    /// Snapshots of every area, for a client's initial world sync.
    pub async fn snapshot_all(&self) -> Vec<AreaModel> {
        self.directory.snapshot_all().await
    }

    /// Stops every area actor.
    pub async fn shutdown(&self) {
        tracing::info!("town shutting down");
        self.directory.shutdown_all().await;
    }
}
