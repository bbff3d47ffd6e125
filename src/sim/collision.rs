//! Collision response for boxes in a rectangular field
//!
//! Ball-paddle contact uses the ball's bounding square, so every test here is a
//! box test. Checks run once per frame on the post-integration positions; a very
//! fast ball on a long frame can step clean over a thin collider.

use glam::Vec2;

use super::aabb::Aabb;
use super::paddle_group::Side;
use crate::consts::BOUNCE_RANGE_DEGREES;

/// Ball heading after striking a paddle
///
/// The impact offset from the paddle centre, divided by the paddle's height, maps
/// linearly onto a return angle of up to 90 degrees: a centred hit comes back
/// flat, an edge hit comes back steep. `side` is the side that owns the paddle.
///
/// A ball much taller than a collider segment can strike beyond one full
/// height from its centre; the offset is capped so the ball never returns
/// toward the paddle's own wall.
pub fn bounce_direction(ball_y: f32, paddle_y: f32, paddle_height: f32, side: Side) -> Vec2 {
    let scalar = ((ball_y - paddle_y) / paddle_height).clamp(-1.0, 1.0);
    let phi = (scalar * BOUNCE_RANGE_DEGREES).to_radians();
    // cos is non-negative over +/-90 degrees; abs drops f32 rounding at the cap
    Vec2::new(phi.cos().abs() * side.bounce_sign(), phi.sin())
}

/// Ball contact with the field boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryContact {
    /// Past the top wall
    Top,
    /// Past the bottom wall
    Bottom,
    /// Out past the left wall; right side scores
    LeftGoal,
    /// Out past the right wall; left side scores
    RightGoal,
}

impl BoundaryContact {
    /// Side awarded the point, if any
    pub fn scorer(&self) -> Option<Side> {
        match self {
            BoundaryContact::LeftGoal => Some(Side::Right),
            BoundaryContact::RightGoal => Some(Side::Left),
            _ => None,
        }
    }
}

/// First boundary the ball has crossed, checked top, bottom, left, right
///
/// Only one contact is reported per frame, so a ball in a corner bounces off the
/// wall before it can score.
pub fn boundary_contact(ball: &Aabb, field: &Aabb) -> Option<BoundaryContact> {
    if ball.top() < field.top() {
        Some(BoundaryContact::Top)
    } else if ball.bottom() > field.bottom() {
        Some(BoundaryContact::Bottom)
    } else if ball.left() < field.left() {
        Some(BoundaryContact::LeftGoal)
    } else if ball.right() > field.right() {
        Some(BoundaryContact::RightGoal)
    } else {
        None
    }
}

/// Force the vertical component away from the wall that was hit
pub fn reflect_off_wall(direction: Vec2, contact: BoundaryContact) -> Vec2 {
    match contact {
        BoundaryContact::Top => Vec2::new(direction.x, direction.y.abs()),
        BoundaryContact::Bottom => Vec2::new(direction.x, -direction.y.abs()),
        _ => direction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_hit_returns_flat() {
        assert_eq!(bounce_direction(200.0, 200.0, 100.0, Side::Left), Vec2::new(1.0, 0.0));
        assert_eq!(bounce_direction(200.0, 200.0, 100.0, Side::Right), Vec2::new(-1.0, 0.0));
    }

    #[test]
    fn test_edge_hit_returns_near_vertical() {
        // s = +1: impact a full paddle height below centre
        let dir = bounce_direction(300.0, 200.0, 100.0, Side::Left);
        assert!(dir.x.abs() < 1e-6);
        assert!((dir.y - 1.0).abs() < 1e-6);
        let angle = dir.y.atan2(dir.x).to_degrees();
        assert!((angle - 90.0).abs() < 1e-3);

        // s = -1 from the right paddle
        let dir = bounce_direction(100.0, 200.0, 100.0, Side::Right);
        assert!(dir.x.abs() < 1e-6);
        assert!((dir.y + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_offset_beyond_paddle_is_capped() {
        // Impact 1.5 heights below centre still leaves heading away from the left wall
        let dir = bounce_direction(350.0, 200.0, 100.0, Side::Left);
        assert!(dir.x >= 0.0);
        assert_eq!(dir, bounce_direction(300.0, 200.0, 100.0, Side::Left));

        let dir = bounce_direction(0.0, 200.0, 100.0, Side::Right);
        assert!(dir.x <= 0.0);
        assert!((dir.y + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_bounce_angle_is_proportional() {
        // Quarter height below centre: 22.5 degrees downward, heading right
        let dir = bounce_direction(225.0, 200.0, 100.0, Side::Left);
        let angle = dir.y.atan2(dir.x).to_degrees();
        assert!((angle - 22.5).abs() < 1e-3);
        assert!(dir.x > 0.0);

        // Same impact on the right paddle mirrors horizontally
        let mirrored = bounce_direction(225.0, 200.0, 100.0, Side::Right);
        assert!((mirrored.x + dir.x).abs() < 1e-6);
        assert_eq!(mirrored.y, dir.y);
    }

    #[test]
    fn test_boundary_priority() {
        let field = Aabb::new(0.0, 0.0, 400.0, 400.0);

        let inside = Aabb::new(100.0, 100.0, 12.0, 12.0);
        assert_eq!(boundary_contact(&inside, &field), None);

        // Top-left corner: the wall wins over the goal
        let corner = Aabb::new(-2.0, -2.0, 12.0, 12.0);
        assert_eq!(boundary_contact(&corner, &field), Some(BoundaryContact::Top));

        let bottom = Aabb::new(100.0, 390.0, 12.0, 12.0);
        assert_eq!(boundary_contact(&bottom, &field), Some(BoundaryContact::Bottom));

        let left = Aabb::new(-1.0, 100.0, 12.0, 12.0);
        assert_eq!(boundary_contact(&left, &field), Some(BoundaryContact::LeftGoal));
        assert_eq!(BoundaryContact::LeftGoal.scorer(), Some(Side::Right));

        let right = Aabb::new(389.0, 100.0, 12.0, 12.0);
        assert_eq!(boundary_contact(&right, &field), Some(BoundaryContact::RightGoal));
        assert_eq!(BoundaryContact::RightGoal.scorer(), Some(Side::Left));

        // Flush against a wall is still inside
        let flush = Aabb::new(0.0, 0.0, 12.0, 12.0);
        assert_eq!(boundary_contact(&flush, &field), None);
    }

    #[test]
    fn test_reflect_off_wall() {
        let up = Vec2::new(1.0, -0.5);
        assert_eq!(reflect_off_wall(up, BoundaryContact::Top), Vec2::new(1.0, 0.5));
        // Already heading down: unchanged
        let down = Vec2::new(1.0, 0.5);
        assert_eq!(reflect_off_wall(down, BoundaryContact::Top), down);
        assert_eq!(reflect_off_wall(down, BoundaryContact::Bottom), Vec2::new(1.0, -0.5));
        assert_eq!(reflect_off_wall(down, BoundaryContact::LeftGoal), down);
    }
}
