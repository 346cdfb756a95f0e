//! Tunables for the search core and the physics model.

use crate::error::PathError;

/// Options shared by every search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Allow 8-way movement on plain grids. Ignored by the physics search.
    pub diagonal: bool,
    /// Hard cap on expanded nodes. `0` means unlimited.
    pub max_expansions: usize,
    /// When the cap is hit, return the path to the expanded node closest to
    /// the goal instead of an empty path.
    pub partial_on_limit: bool,
}

/// Options of the physics-constrained search.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PhysicsConfig {
    pub search: SearchConfig,
    /// Extra cost added to every jump, on top of the per-tick cost.
    pub jump_penalty: i32,
    /// A state within this many cells of the goal on both axes counts as
    /// arrived.
    pub goal_tolerance: i32,
    /// Tick length in milliseconds the velocity units are expressed in.
    /// Gravity and velocities are scaled by `time_step_ms / reference_tick_ms`.
    pub reference_tick_ms: f32,
    /// Agent height in cells. The body extends upwards from its position.
    pub body_height: i32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            search: SearchConfig::default(),
            jump_penalty: 1,
            goal_tolerance: 0,
            reference_tick_ms: 16.0,
            body_height: 1,
        }
    }
}

impl PhysicsConfig {
    /// Reject settings the physics model cannot work with.
    pub fn validate(&self) -> Result<(), PathError> {
        if self.jump_penalty < 0 {
            return Err(PathError::params(format!(
                "jump_penalty must not be negative, got {}",
                self.jump_penalty
            )));
        }
        if self.goal_tolerance < 0 {
            return Err(PathError::params(format!(
                "goal_tolerance must not be negative, got {}",
                self.goal_tolerance
            )));
        }
        if !self.reference_tick_ms.is_finite() || self.reference_tick_ms <= 0.0 {
            return Err(PathError::params(format!(
                "reference_tick_ms must be positive, got {}",
                self.reference_tick_ms
            )));
        }
        if self.body_height < 1 {
            return Err(PathError::params(format!(
                "body_height must be at least 1, got {}",
                self.body_height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(PhysicsConfig::default().validate().is_ok());
        let cfg = SearchConfig::default();
        assert!(!cfg.diagonal);
        assert_eq!(cfg.max_expansions, 0);
    }

    #[test]
    fn rejects_bad_physics_config() {
        let bad = [
            PhysicsConfig {
                jump_penalty: -1,
                ..Default::default()
            },
            PhysicsConfig {
                goal_tolerance: -2,
                ..Default::default()
            },
            PhysicsConfig {
                reference_tick_ms: 0.0,
                ..Default::default()
            },
            PhysicsConfig {
                reference_tick_ms: f32::NAN,
                ..Default::default()
            },
            PhysicsConfig {
                body_height: 0,
                ..Default::default()
            },
        ];
        for cfg in bad {
            assert!(
                matches!(cfg.validate(), Err(PathError::InvalidParams(_))),
                "{cfg:?} should be rejected"
            );
        }
    }
}
