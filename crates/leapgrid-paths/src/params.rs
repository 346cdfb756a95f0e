//! The physics parameter record and velocity quantization.

use crate::error::PathError;

/// Vertical physics of the agent, as supplied by the caller.
///
/// Y grows down, so gravity is usually positive and a jump impulse
/// negative. Velocities are in cells per reference tick (see
/// [`PhysicsConfig::reference_tick_ms`](crate::PhysicsConfig)).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhysicsParams {
    /// Velocity change per reference tick.
    pub gravity_y: f32,
    /// Velocity the agent has right after leaving the ground.
    pub jump_impulse_y: f32,
    /// Upper bound of the vertical speed in either direction.
    pub max_velocity_y: f32,
    /// Duration of one simulated tick.
    pub time_step_ms: f32,
    /// Number of velocity levels on each side of zero.
    pub velocity_granularity: i32,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            gravity_y: 1.0,
            jump_impulse_y: -5.0,
            max_velocity_y: 5.0,
            time_step_ms: 16.0,
            velocity_granularity: 5,
        }
    }
}

impl PhysicsParams {
    /// Reject parameters that leave the velocity space or the tick
    /// undefined.
    pub fn validate(&self) -> Result<(), PathError> {
        if self.velocity_granularity <= 0 {
            return Err(PathError::params(format!(
                "velocity_granularity must be positive, got {}",
                self.velocity_granularity
            )));
        }
        if !self.time_step_ms.is_finite() || self.time_step_ms <= 0.0 {
            return Err(PathError::params(format!(
                "time_step_ms must be positive, got {}",
                self.time_step_ms
            )));
        }
        if !self.max_velocity_y.is_finite() || self.max_velocity_y <= 0.0 {
            return Err(PathError::params(format!(
                "max_velocity_y must be positive, got {}",
                self.max_velocity_y
            )));
        }
        if !self.gravity_y.is_finite() {
            return Err(PathError::params(format!(
                "gravity_y must be finite, got {}",
                self.gravity_y
            )));
        }
        if !self.jump_impulse_y.is_finite() {
            return Err(PathError::params(format!(
                "jump_impulse_y must be finite, got {}",
                self.jump_impulse_y
            )));
        }
        Ok(())
    }

    /// Width of one velocity level.
    #[inline]
    pub fn bucket(&self) -> f32 {
        self.max_velocity_y / self.velocity_granularity as f32
    }

    /// The velocity a level stands for.
    #[inline]
    pub fn level_velocity(&self, level: i32) -> f32 {
        level as f32 * self.bucket()
    }

    /// Clamp `v` to the speed limit and snap it to the nearest level.
    /// Halfway values round away from zero.
    pub fn quantize(&self, v: f32) -> i32 {
        let v = v.clamp(-self.max_velocity_y, self.max_velocity_y);
        let level = (v / self.bucket()).round() as i32;
        level.clamp(-self.velocity_granularity, self.velocity_granularity)
    }

    /// Level reached from velocity `v` after a change of `dv`.
    ///
    /// Like `quantize(v + dv)`, except that a nonzero `dv` too small to
    /// cross half a level still moves one level in its direction, so weak
    /// gravity or a short tick is never rounded away.
    pub fn accelerate(&self, v: f32, dv: f32) -> i32 {
        let level = self.quantize(v + dv);
        if dv != 0.0 && level == self.quantize(v) {
            let nudged = level + dv.signum() as i32;
            return nudged.clamp(-self.velocity_granularity, self.velocity_granularity);
        }
        level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(PhysicsParams::default().validate().is_ok());
    }

    #[test]
    fn rejects_degenerate_params() {
        let base = PhysicsParams::default();
        let bad = [
            PhysicsParams {
                velocity_granularity: 0,
                ..base
            },
            PhysicsParams {
                velocity_granularity: -3,
                ..base
            },
            PhysicsParams {
                time_step_ms: 0.0,
                ..base
            },
            PhysicsParams {
                time_step_ms: -16.0,
                ..base
            },
            PhysicsParams {
                time_step_ms: f32::INFINITY,
                ..base
            },
            PhysicsParams {
                max_velocity_y: 0.0,
                ..base
            },
            PhysicsParams {
                gravity_y: f32::NAN,
                ..base
            },
            PhysicsParams {
                jump_impulse_y: f32::NEG_INFINITY,
                ..base
            },
        ];
        for p in bad {
            assert!(
                matches!(p.validate(), Err(PathError::InvalidParams(_))),
                "{p:?} should be rejected"
            );
        }
    }

    #[test]
    fn quantize_snaps_and_clamps() {
        let p = PhysicsParams {
            max_velocity_y: 6.0,
            velocity_granularity: 3,
            ..Default::default()
        };
        assert_eq!(p.bucket(), 2.0);
        assert_eq!(p.quantize(0.0), 0);
        assert_eq!(p.quantize(0.9), 0);
        assert_eq!(p.quantize(1.0), 1);
        assert_eq!(p.quantize(-1.0), -1);
        assert_eq!(p.quantize(3.2), 2);
        assert_eq!(p.quantize(100.0), 3);
        assert_eq!(p.quantize(-100.0), -3);
        assert_eq!(p.level_velocity(-2), -4.0);
    }

    #[test]
    fn small_accelerations_still_change_level() {
        let p = PhysicsParams::default();
        assert_eq!(p.accelerate(0.0, 0.25), 1);
        assert_eq!(p.accelerate(-5.0, 0.4), -4);
        assert_eq!(p.accelerate(-4.0, 0.4), -3);
        assert_eq!(p.accelerate(3.0, -0.1), 2);
        // Large steps round as usual, the clamp still holds.
        assert_eq!(p.accelerate(-5.0, 1.0), -4);
        assert_eq!(p.accelerate(0.0, 2.6), 3);
        assert_eq!(p.accelerate(5.0, 0.25), 5);
        assert_eq!(p.accelerate(2.0, 0.0), 2);
    }
}
