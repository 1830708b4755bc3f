//! Movement domain: ground probing against avian colliders.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    GameLayer, GroundProbeSet, GroundQuery, GroundTransition, LocomotionConfig, LocomotionState,
    Player, ProbeShape,
};

/// Ground query backed by avian spatial queries on the `Ground` layer.
pub(crate) struct AvianGroundQuery<'a, 'w, 's> {
    spatial_query: &'a SpatialQuery<'w, 's>,
    filter: SpatialQueryFilter,
    probe: Probe,
}

enum Probe {
    Ray { distance: f32 },
    Circle { shape: Collider },
}

impl<'a, 'w, 's> AvianGroundQuery<'a, 'w, 's> {
    pub(crate) fn new(spatial_query: &'a SpatialQuery<'w, 's>, shape: ProbeShape) -> Self {
        // Filter to only hit Ground layer entities
        let filter = SpatialQueryFilter::from_mask(GameLayer::Ground);
        let probe = match shape {
            ProbeShape::Ray { distance } => Probe::Ray { distance },
            ProbeShape::Circle { radius } => Probe::Circle {
                shape: Collider::circle(radius),
            },
        };

        Self {
            spatial_query,
            filter,
            probe,
        }
    }
}

impl GroundQuery for AvianGroundQuery<'_, '_, '_> {
    fn hits_ground(&self, origin: Vec2) -> bool {
        match &self.probe {
            Probe::Ray { distance } => self
                .spatial_query
                .cast_ray(origin, Dir2::NEG_Y, *distance, true, &self.filter)
                .is_some(),
            Probe::Circle { shape } => !self
                .spatial_query
                .shape_intersections(shape, origin, 0.0, &self.filter)
                .is_empty(),
        }
    }
}

/// Frame-rate ground transition detection.
pub(crate) fn detect_ground(
    time: Res<Time>,
    spatial_query: SpatialQuery,
    config: Res<LocomotionConfig>,
    mut query: Query<(&Transform, &mut LocomotionState), With<Player>>,
) {
    let now = time.elapsed_secs_f64();
    let ground = AvianGroundQuery::new(&spatial_query, config.probe);

    for (transform, mut state) in &mut query {
        let probes = GroundProbeSet::at(
            transform.translation.truncate(),
            &config.probe_offsets,
            state.facing,
        );
        let grounded = probes.is_grounded(&ground);
        if grounded == state.grounded {
            continue;
        }

        match state.on_frame(now, &config, grounded) {
            Some(GroundTransition::Left) => {
                debug!(
                    "Left ground: coyote window until {:?}",
                    state.coyote.deadline()
                );
            }
            Some(GroundTransition::Landed) => {
                debug!("Landed: coyote usable again");
            }
            None => {}
        }
    }
}
