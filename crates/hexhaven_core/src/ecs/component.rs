//! # Component Types
//!
//! Components are plain data records attached to entities through sparse
//! sets. They carry no behavior. Fixed-layout numeric components derive
//! `Pod`/`Zeroable` so their storage can be treated as raw bytes by tooling.

use crate::calendar::Calendar;
use bytemuck::{Pod, Zeroable};

/// World-space position of an entity.
///
/// Tiles receive their position once at world build time; movable entities
/// (the camera, agents) mutate theirs in place.
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Position {
    /// X coordinate in world space.
    pub x: f32,
    /// Y coordinate in world space.
    pub y: f32,
    /// Rotation in radians.
    pub rotation: f32,
}

impl Position {
    /// Creates a position with no rotation.
    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            rotation: 0.0,
        }
    }
}

/// Procedurally generated attributes of a terrain tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct TileAttributes {
    /// Terrain height, roughly in `[-1, 1]`.
    pub height: f32,
    /// Average temperature. Reserved for biome classification.
    pub temperature: f32,
    /// Average humidity. Reserved for biome classification.
    pub humidity: f32,
}

/// Identifier for a sprite in the (external) content pipeline.
///
/// The kernel only stores the id; texture loading and drawing happen outside
/// this workspace.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(transparent)]
pub struct SpriteId(u16);

impl SpriteId {
    /// The base hexagon tile sprite.
    pub const HEXAGON: Self = Self(0);
    /// The pine tree object sprite.
    pub const PINE_TREE: Self = Self(1);

    /// Creates a sprite id from a raw content-pipeline index.
    #[inline]
    #[must_use]
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// Returns the raw index.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

/// RGBA tint applied to a sprite.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
#[repr(C)]
pub struct Tint {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Tint {
    /// No tint.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Debug tint for the map origin.
    pub const RED: Self = Self::rgb(255, 0, 0);
    /// Debug tint for every tenth column.
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    /// Debug tint for every tenth row, and for trees.
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    /// Debug tint where tenth column and tenth row cross.
    pub const YELLOW: Self = Self::rgb(255, 255, 0);

    /// Creates an opaque tint.
    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

impl Default for Tint {
    fn default() -> Self {
        Self::WHITE
    }
}

/// How an entity should look when drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Appearance {
    /// Which sprite to draw.
    pub sprite: SpriteId,
    /// Tint applied to the sprite.
    pub tint: Tint,
}

impl Appearance {
    /// Creates an appearance with an explicit tint.
    #[inline]
    #[must_use]
    pub const fn new(sprite: SpriteId, tint: Tint) -> Self {
        Self { sprite, tint }
    }
}

/// Coarse life stage of an agent, derived from its age in years.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum AgeStage {
    /// 0 to 5 years.
    #[default]
    Baby,
    /// 6 to 12 years.
    Child,
    /// 13 to 17 years.
    Adolescent,
    /// 18 to 69 years.
    Adult,
    /// 70 years and beyond.
    Elder,
}

impl AgeStage {
    /// Classifies an age in whole years into a life stage.
    #[must_use]
    pub const fn from_years(years: u64) -> Self {
        match years {
            0..=5 => Self::Baby,
            6..=12 => Self::Child,
            13..=17 => Self::Adolescent,
            18..=69 => Self::Adult,
            _ => Self::Elder,
        }
    }
}

/// Birth date and current life stage of an agent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Lifecycle {
    /// The in-game date this agent was born.
    pub birthday: Calendar,
    /// Life stage as of the last lifecycle pass.
    pub stage: AgeStage,
}

impl Lifecycle {
    /// Creates a lifecycle for an agent born on `birthday`.
    #[inline]
    #[must_use]
    pub const fn born_on(birthday: Calendar) -> Self {
        Self {
            birthday,
            stage: AgeStage::Baby,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_stage_thresholds() {
        assert_eq!(AgeStage::from_years(0), AgeStage::Baby);
        assert_eq!(AgeStage::from_years(5), AgeStage::Baby);
        assert_eq!(AgeStage::from_years(6), AgeStage::Child);
        assert_eq!(AgeStage::from_years(13), AgeStage::Adolescent);
        assert_eq!(AgeStage::from_years(18), AgeStage::Adult);
        assert_eq!(AgeStage::from_years(69), AgeStage::Adult);
        assert_eq!(AgeStage::from_years(70), AgeStage::Elder);
        assert_eq!(AgeStage::from_years(200), AgeStage::Elder);
    }

    #[test]
    fn test_component_layout_is_pod() {
        // Pod components must have no implicit padding.
        assert_eq!(std::mem::size_of::<Position>(), 12);
        assert_eq!(std::mem::size_of::<TileAttributes>(), 12);
        assert_eq!(std::mem::size_of::<Appearance>(), 6);
    }
}
