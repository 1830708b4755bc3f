//! Debug overlay: ground probe gizmos (dev-tools only).

use bevy::prelude::*;

use crate::movement::{GroundProbeSet, LocomotionConfig, LocomotionState, Player, ProbeShape};

const PROBE_COLOR: Color = Color::srgb(1.0, 0.92, 0.016);
const PROBE_ROLL_COLOR: Color = Color::srgb(0.3, 0.9, 0.3);

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, draw_ground_probes);
    }
}

/// Draw each probe as it is queried: a downward segment for rays, a circle for overlaps.
/// The front probe, which decides whether a roll stops at an edge, is green while rolling.
fn draw_ground_probes(
    mut gizmos: Gizmos,
    config: Res<LocomotionConfig>,
    query: Query<(&Transform, &LocomotionState), With<Player>>,
) {
    for (transform, state) in &query {
        let probes = GroundProbeSet::at(
            transform.translation.truncate(),
            &config.probe_offsets,
            state.facing,
        );

        for point in probes.points() {
            let color = if point == probes.front && state.rolling {
                PROBE_ROLL_COLOR
            } else {
                PROBE_COLOR
            };

            match config.probe {
                ProbeShape::Ray { distance } => {
                    gizmos.line_2d(point, point + Vec2::NEG_Y * distance, color);
                }
                ProbeShape::Circle { radius } => {
                    gizmos.circle_2d(point, radius, color);
                }
            }
        }
    }
}
