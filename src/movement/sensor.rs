//! Movement domain: three-point ground probing.

use bevy::prelude::*;

use crate::movement::{Facing, ProbeOffsets};

/// Point test against ground colliders.
pub trait GroundQuery {
    fn hits_ground(&self, origin: Vec2) -> bool;
}

/// Ground contact as seen by the locomotion tick.
///
/// Facing is passed in because the front probe mirrors with the body and
/// facing can change earlier in the same tick.
pub trait GroundSensor {
    fn is_grounded(&self, facing: Facing) -> bool;
    fn is_ground_ahead(&self, facing: Facing) -> bool;
}

/// World positions of the back, middle and front probes for one query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundProbeSet {
    pub back: Vec2,
    pub middle: Vec2,
    pub front: Vec2,
}

impl GroundProbeSet {
    pub fn at(position: Vec2, offsets: &ProbeOffsets, facing: Facing) -> Self {
        let mirror = |offset: Vec2| position + Vec2::new(offset.x * facing.sign(), offset.y);
        Self {
            back: mirror(offsets.back),
            middle: mirror(offsets.middle),
            front: mirror(offsets.front),
        }
    }

    pub fn points(&self) -> [Vec2; 3] {
        [self.back, self.middle, self.front]
    }

    pub fn is_grounded(&self, query: &impl GroundQuery) -> bool {
        self.points().into_iter().any(|p| query.hits_ground(p))
    }

    pub fn is_ground_ahead(&self, query: &impl GroundQuery) -> bool {
        query.hits_ground(self.front)
    }
}

/// Probes around a body position, rebuilt for every query.
pub struct BodySensor<'q, Q> {
    pub position: Vec2,
    pub offsets: ProbeOffsets,
    pub query: &'q Q,
}

impl<Q: GroundQuery> BodySensor<'_, Q> {
    fn probes(&self, facing: Facing) -> GroundProbeSet {
        GroundProbeSet::at(self.position, &self.offsets, facing)
    }
}

impl<Q: GroundQuery> GroundSensor for BodySensor<'_, Q> {
    fn is_grounded(&self, facing: Facing) -> bool {
        self.probes(facing).is_grounded(self.query)
    }

    fn is_ground_ahead(&self, facing: Facing) -> bool {
        self.probes(facing).is_ground_ahead(self.query)
    }
}
