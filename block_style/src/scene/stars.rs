//! Star instances: bobbing animation and the per-instance network cache.

use std::collections::HashMap;
use std::sync::Arc;

use bevy::prelude::*;

use crate::scene::StyleState;
use crate::star::StarInstance;

/// Resting height of every star group.
pub const BOB_BASELINE: f32 = -1.75;

/// Root of one star instance; tube segments are its children. The instance
/// itself lives in [`StarNetworkCache`] under this entity.
#[derive(Component, Clone, Copy, Debug)]
pub struct StarBody {
    pub index: usize,
}

/// One extruded Bézier of a star.
#[derive(Component, Clone, Copy, Debug)]
pub struct StarSegment {
    pub index: usize,
}

/// Curve networks keyed by the entity that displays them. Built once when
/// the star spawns, dropped when it despawns.
#[derive(Resource, Default)]
pub struct StarNetworkCache {
    instances: HashMap<Entity, Arc<StarInstance>>,
}

impl StarNetworkCache {
    pub fn insert(&mut self, entity: Entity, instance: Arc<StarInstance>) {
        self.instances.insert(entity, instance);
    }

    pub fn get(&self, entity: Entity) -> Option<&Arc<StarInstance>> {
        self.instances.get(&entity)
    }

    pub fn evict(&mut self, entity: Entity) -> Option<Arc<StarInstance>> {
        self.instances.remove(&entity)
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

/// Vertical offset of a star at time `t`.
pub fn bob_height(t: f32, phase: f32, amplitude: f32) -> f32 {
    BOB_BASELINE + (t + phase).sin() * amplitude
}

pub fn star_bob_system(
    time: Res<Time>,
    state: Res<StyleState>,
    cache: Res<StarNetworkCache>,
    mut stars: Query<(Entity, &mut Transform), With<StarBody>>,
) {
    let amplitude = state.0.options().bob_amplitude();
    let t = time.elapsed_secs();
    for (entity, mut transform) in &mut stars {
        let Some(instance) = cache.get(entity) else {
            continue;
        };
        transform.translation.y = bob_height(t, instance.phase, amplitude);
    }
}

pub fn evict_removed_stars(
    mut removed: RemovedComponents<StarBody>,
    mut cache: ResMut<StarNetworkCache>,
) {
    for entity in removed.read() {
        cache.evict(entity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::star::{StarNetwork, StarTopology};

    fn instance() -> Arc<StarInstance> {
        let topology = StarTopology::new(7, [2, 3, 4]).unwrap();
        Arc::new(StarInstance {
            phase: 1.5,
            network: StarNetwork::build(topology).unwrap(),
        })
    }

    #[test]
    fn bob_reads_phase_from_the_cache() {
        let mut app = App::new();
        app.init_resource::<StarNetworkCache>()
            .init_resource::<StyleState>()
            .init_resource::<Time>()
            .add_systems(Update, star_bob_system);

        let cached = app
            .world_mut()
            .spawn((StarBody { index: 0 }, Transform::default()))
            .id();
        let uncached = app
            .world_mut()
            .spawn((StarBody { index: 1 }, Transform::default()))
            .id();
        app.world_mut()
            .resource_mut::<StarNetworkCache>()
            .insert(cached, instance());
        app.update();

        let amplitude = app.world().resource::<StyleState>().0.options().bob_amplitude();
        let phase = app.world().resource::<StarNetworkCache>().get(cached).unwrap().phase;
        assert_eq!(phase, 1.5);
        let y = app.world().get::<Transform>(cached).unwrap().translation.y;
        assert_eq!(y, bob_height(0.0, phase, amplitude));
        assert_ne!(y, 0.0);

        // No cached instance, no animation.
        let y = app.world().get::<Transform>(uncached).unwrap().translation.y;
        assert_eq!(y, 0.0);
    }

    #[test]
    fn despawned_stars_leave_the_cache() {
        let mut app = App::new();
        app.init_resource::<StarNetworkCache>()
            .add_systems(Update, evict_removed_stars);

        let entity = app.world_mut().spawn(StarBody { index: 0 }).id();
        app.world_mut()
            .resource_mut::<StarNetworkCache>()
            .insert(entity, instance());
        app.update();
        assert_eq!(app.world().resource::<StarNetworkCache>().len(), 1);

        app.world_mut().despawn(entity);
        app.update();
        assert!(app.world().resource::<StarNetworkCache>().is_empty());
    }
}
