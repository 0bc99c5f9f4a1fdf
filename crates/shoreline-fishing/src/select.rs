//! Cumulative-rarity selection over a set of spawners.

use rand::Rng;
use shoreline_protocol::CatchableFish;

use crate::{FishSpawner, ValidationError};

/// Picks one spawner by cumulative rarity and returns its spawned fish.
///
/// The selection step is deterministic for a fixed `draw`: rarities are
/// summed in list order, `draw` is scaled by the total, and the first
/// spawner whose running sum reaches the scaled draw wins (ties go to the
/// earlier entry). Only the fish's numeric attributes are randomized, via
/// the winning spawner's own sampling.
///
/// # Errors
/// - [`ValidationError::NoSpawners`] for an empty set
/// - [`ValidationError::DrawOutOfRange`] unless `0 <= draw <= 1`
pub fn spawn_weighted<R: Rng + ?Sized>(
    spawners: &mut [FishSpawner],
    draw: f64,
    rng: &mut R,
) -> Result<CatchableFish, ValidationError> {
    if spawners.is_empty() {
        return Err(ValidationError::NoSpawners);
    }
    if !(0.0..=1.0).contains(&draw) {
        return Err(ValidationError::DrawOutOfRange);
    }

    let mut cumulative = Vec::with_capacity(spawners.len());
    let mut total = 0.0;
    for spawner in spawners.iter() {
        total += spawner.rarity();
        cumulative.push(total);
    }

    let scaled = draw * total;
    let mut winner = spawners.len() - 1;
    for (index, bound) in cumulative.iter().enumerate() {
        if scaled <= *bound {
            winner = index;
            break;
        }
    }

    let fish = spawners[winner].spawn(rng);
    tracing::debug!(species = %fish.name, draw, scaled, "fish spawned");
    Ok(fish)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BoundedNumber;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn spawner(name: &str, rarity: f64) -> FishSpawner {
        FishSpawner::new(
            name,
            rarity,
            5.0,
            BoundedNumber::new(1.0, 10.0).unwrap(),
            BoundedNumber::new(1.0, 10.0).unwrap(),
        )
        .unwrap()
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(31)
    }

    #[test]
    fn test_empty_set_fails_for_any_draw() {
        for draw in [0.0, 0.5, 1.0] {
            let result = spawn_weighted(&mut [], draw, &mut rng());
            assert_eq!(result, Err(ValidationError::NoSpawners));
        }
    }

    #[test]
    fn test_out_of_domain_draw_fails() {
        let mut spawners = vec![spawner("salmon", 50.0)];
        for draw in [-0.01, 1.01, 7.0] {
            let result = spawn_weighted(&mut spawners, draw, &mut rng());
            assert_eq!(result, Err(ValidationError::DrawOutOfRange));
        }
    }

    // With rarities [20, 1] the cumulative bounds are [20, 21]:
    //   draw 0.94 → 19.74 ≤ 20 → first spawner
    //   draw 0.99 → 20.79 > 20 → second spawner
    #[test]
    fn test_cumulative_boundaries() {
        let mut spawners = vec![spawner("common", 20.0), spawner("rare", 1.0)];

        let fish = spawn_weighted(&mut spawners, 0.94, &mut rng()).unwrap();
        assert_eq!(fish.name, "common");

        let fish = spawn_weighted(&mut spawners, 0.99, &mut rng()).unwrap();
        assert_eq!(fish.name, "rare");
    }

    #[test]
    fn test_draw_extremes_pick_first_and_last() {
        let mut spawners = vec![spawner("common", 20.0), spawner("rare", 1.0)];

        let fish = spawn_weighted(&mut spawners, 0.0, &mut rng()).unwrap();
        assert_eq!(fish.name, "common");

        let fish = spawn_weighted(&mut spawners, 1.0, &mut rng()).unwrap();
        assert_eq!(fish.name, "rare");
    }

    #[test]
    fn test_tie_on_a_boundary_goes_to_the_earlier_entry() {
        // Equal rarities: cumulative [10, 20], draw 0.5 scales to exactly
        // 10, which the first spawner already satisfies.
        let mut spawners = vec![spawner("first", 10.0), spawner("second", 10.0)];
        let fish = spawn_weighted(&mut spawners, 0.5, &mut rng()).unwrap();
        assert_eq!(fish.name, "first");
    }

    #[test]
    fn test_single_spawner_always_wins() {
        let mut spawners = vec![spawner("only", 3.0)];
        for draw in [0.0, 0.3, 1.0] {
            let fish = spawn_weighted(&mut spawners, draw, &mut rng()).unwrap();
            assert_eq!(fish.name, "only");
        }
    }
}
