//! The fishing area: weighted fish generation plus a trophy display.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shoreline_fishing::{FishSpawner, spawn_weighted, stock_spawners};
use shoreline_protocol::{
    AreaCommand, AreaId, AreaModel, BoundingBox, CatchableFish, PlayerId, PlayerInfo,
    ResponsePayload,
};

use crate::{AreaError, InteractableArea};

/// A bounded region where occupants cast lines for randomized fish and
/// show off their best catch.
pub struct FishingArea {
    id: AreaId,
    bounds: BoundingBox,
    occupants: Vec<PlayerInfo>,
    /// The species catalog. Spawners carry their own sampling state, so
    /// the set is mutated by every cast.
    spawners: Vec<FishSpawner>,
    /// Fish occupants have chosen to display.
    inventory: Vec<CatchableFish>,
    /// Heaviest fish ever stored here.
    best_fish: Option<CatchableFish>,
    rng: StdRng,
}

impl FishingArea {
    /// Creates a fishing area stocked with the default catalog.
    ///
    /// # Errors
    /// [`AreaError::MalformedArea`] for a degenerate bounding box;
    /// validation errors from the catalog itself.
    pub fn new(id: AreaId, bounds: BoundingBox) -> Result<Self, AreaError> {
        let spawners = stock_spawners()?;
        Self::with_spawners(id, bounds, spawners)
    }

    /// Creates a fishing area with a custom species catalog.
    pub fn with_spawners(
        id: AreaId,
        bounds: BoundingBox,
        spawners: Vec<FishSpawner>,
    ) -> Result<Self, AreaError> {
        if bounds.is_degenerate() {
            return Err(AreaError::MalformedArea(id));
        }
        Ok(Self {
            id,
            bounds,
            occupants: Vec::new(),
            spawners,
            inventory: Vec::new(),
            best_fish: None,
            rng: StdRng::from_os_rng(),
        })
    }

    /// Same, but with a deterministic generator. Test seam.
    pub fn with_seed(
        id: AreaId,
        bounds: BoundingBox,
        spawners: Vec<FishSpawner>,
        seed: u64,
    ) -> Result<Self, AreaError> {
        let mut area = Self::with_spawners(id, bounds, spawners)?;
        area.rng = StdRng::seed_from_u64(seed);
        Ok(area)
    }

    /// The region of the map this area covers.
    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    fn cast_line(&mut self) -> Result<Option<ResponsePayload>, AreaError> {
        let draw: f64 = self.rng.random();
        let fish = spawn_weighted(&mut self.spawners, draw, &mut self.rng)?;
        Ok(Some(ResponsePayload::FishCaught { fish }))
    }

    fn store_fish(&mut self, fish: CatchableFish) -> Result<Option<ResponsePayload>, AreaError> {
        let heavier = match &self.best_fish {
            None => true,
            Some(best) => fish.weight > best.weight,
        };
        if heavier {
            self.best_fish = Some(fish.clone());
        }
        self.inventory.push(fish);
        Ok(None)
    }
}

impl InteractableArea for FishingArea {
    fn id(&self) -> &AreaId {
        &self.id
    }

    fn add_occupant(&mut self, player: PlayerInfo) {
        if !self.occupants.iter().any(|o| o.id == player.id) {
            self.occupants.push(player);
        }
    }

    fn remove_occupant(&mut self, player: PlayerId) {
        self.occupants.retain(|o| o.id != player);
    }

    fn snapshot(&self) -> AreaModel {
        AreaModel::FishingArea {
            id: self.id.clone(),
            occupants: self.occupants.iter().map(|o| o.id).collect(),
            best_fish: self.best_fish.clone(),
            inventory: self.inventory.clone(),
        }
    }

    fn handle_command(
        &mut self,
        _player: &PlayerInfo,
        command: AreaCommand,
    ) -> Result<Option<ResponsePayload>, AreaError> {
        match command {
            AreaCommand::CastLine => self.cast_line(),
            AreaCommand::StoreFish { fish } => self.store_fish(fish),
            other => Err(AreaError::UnsupportedCommand(other.tag())),
        }
    }
}
