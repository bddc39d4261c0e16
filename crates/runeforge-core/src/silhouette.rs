//! Body anchors shared by part and equipment routines
//!
//! Every routine that needs to know where the torso, arms, hands or legs sit
//! reads them from a [`BodySilhouette`] instead of branching on the body type
//! itself. Coordinates are logical units on the 48-unit character grid.

use crate::character::CharacterConfig;
use crate::style::{BodyType, ChestStyle, LegStyle};

/// Resolved anchor geometry for one `(body, chest, legs)` combination
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodySilhouette {
    /// Warrior archetype (long, thick arms)
    pub warrior: bool,
    /// Broad torso: warrior body or broad chest
    pub wide: bool,
    pub muscular_legs: bool,

    pub torso_x: f64,
    pub torso_w: f64,
    pub torso_y: f64,
    pub torso_h: f64,

    pub arm_left_x: f64,
    pub arm_right_x: f64,
    pub arm_w: f64,
    pub arm_y: f64,
    pub arm_len: f64,
    /// Row where the bare hand starts
    pub hand_y: f64,
    /// Height of the bare hand block
    pub hand_h: f64,

    /// Right hand x used to place held weapons
    pub weapon_x: f64,

    pub leg_left_x: f64,
    pub leg_right_x: f64,
    pub leg_w: f64,
    pub leg_y: f64,
    pub leg_h: f64,
}

impl BodySilhouette {
    /// Compute anchors from typed styles. Missing styles fall back to the
    /// narrow scout arms and normal legs.
    pub fn new(body: Option<BodyType>, chest: Option<ChestStyle>, legs: Option<LegStyle>) -> Self {
        let warrior = body == Some(BodyType::Warrior);
        let wide = warrior || chest == Some(ChestStyle::Broad);
        let muscular_legs = legs == Some(LegStyle::Muscular);

        let (torso_x, torso_w) = if wide { (11.0, 26.0) } else { (14.0, 20.0) };
        let (arm_left_x, arm_right_x, arm_w, arm_len, hand_y) = if warrior {
            (6.0, 37.0, 5.0, 14.0, 35.0)
        } else {
            (10.0, 34.0, 4.0, 12.0, 33.0)
        };
        let (leg_left_x, leg_w) = if muscular_legs { (14.0, 8.0) } else { (16.0, 6.0) };

        Self {
            warrior,
            wide,
            muscular_legs,
            torso_x,
            torso_w,
            torso_y: 21.0,
            torso_h: 12.0,
            arm_left_x,
            arm_right_x,
            arm_w,
            arm_y: 21.0,
            arm_len,
            hand_y,
            hand_h: 3.0,
            weapon_x: if warrior { 42.0 } else { 38.0 },
            leg_left_x,
            leg_right_x: 26.0,
            leg_w,
            leg_y: 33.0,
            leg_h: 10.0,
        }
    }

    /// Anchors for a character configuration
    pub fn of(config: &CharacterConfig) -> Self {
        Self::new(config.body(), config.chest(), config.legs())
    }

    /// Both arm x positions, left then right
    pub fn arm_xs(&self) -> [f64; 2] {
        [self.arm_left_x, self.arm_right_x]
    }

    /// Both leg x positions, left then right
    pub fn leg_xs(&self) -> [f64; 2] {
        [self.leg_left_x, self.leg_right_x]
    }

    /// Lowest row of the upper arm; gloves stay below it
    pub fn elbow_y(&self) -> f64 {
        self.arm_y + self.arm_len / 2.0
    }
}

impl Default for BodySilhouette {
    fn default() -> Self {
        Self::of(&CharacterConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warrior_anchors() {
        let s = BodySilhouette::default();
        assert!(s.warrior && s.wide);
        assert_eq!((s.torso_x, s.torso_w), (11.0, 26.0));
        assert_eq!(s.arm_xs(), [6.0, 37.0]);
        assert_eq!(s.hand_y, 35.0);
        assert_eq!(s.weapon_x, 42.0);
    }

    #[test]
    fn test_scout_anchors() {
        let s = BodySilhouette::of(&CharacterConfig::scout());
        assert!(!s.warrior && !s.wide);
        assert_eq!((s.torso_x, s.torso_w), (14.0, 20.0));
        assert_eq!(s.arm_xs(), [10.0, 34.0]);
        assert_eq!(s.weapon_x, 38.0);
    }

    #[test]
    fn test_broad_scout_is_wide_with_scout_arms() {
        let s = BodySilhouette::new(Some(BodyType::Scout), Some(ChestStyle::Broad), None);
        assert!(s.wide && !s.warrior);
        assert_eq!(s.arm_w, 4.0);
        assert_eq!(s.leg_xs(), [16.0, 26.0]);
    }

    #[test]
    fn test_muscular_legs() {
        let s = BodySilhouette::new(None, None, Some(LegStyle::Muscular));
        assert_eq!((s.leg_left_x, s.leg_w), (14.0, 8.0));
    }
}
