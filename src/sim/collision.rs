//! Collision detection and response
//!
//! All tests run against the ball's previous position (where it stood at the
//! start of the tick), never the post-motion one. Responses write the current
//! position and velocity; integration happens afterwards in the tick.
//!
//! Being discrete, a fast enough ball can step over a thin brick or the
//! paddle within a single tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::state::{Ball, BrickGrid, GameState, Paddle};
use crate::consts::*;
use crate::normalize_fast;

/// A face of a rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Top,
    Right,
    Bottom,
}

/// How the ball met a brick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrickContact {
    /// Single face struck: one velocity axis reflected
    Edge(Side),
    /// Equidistant from two faces: both axes reflected, snapped to the corner
    Corner { horizontal: Side, vertical: Side },
    /// Overlap without an approach direction: no bounce
    Glancing,
}

/// Outcome of a brick-grid collision pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrickHit {
    pub index: usize,
    pub row: usize,
    pub col: usize,
    pub contact: BrickContact,
}

/// Outcome of an arena boundary pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArenaContact {
    /// Bounced off the left or right wall
    pub side_wall: bool,
    /// Bounced off the top wall
    pub ceiling: bool,
    /// Fell out the bottom; a life was taken and the ball re-docked
    pub ball_lost: bool,
}

impl ArenaContact {
    pub fn bounced(&self) -> bool {
        self.side_wall || self.ceiling
    }
}

/// Bounce off the paddle
///
/// The new direction points from the paddle's bottom-mid to one radius above
/// the ball, so hits toward the paddle ends leave at steeper angles.
/// Returns whether the paddle was hit.
pub fn resolve_paddle(ball: &mut Ball, paddle: &Paddle) -> bool {
    if !paddle.rect.overlaps_circle(ball.prev_pos, ball.radius) {
        return false;
    }

    let contact = Vec2::new(ball.pos.x, ball.pos.y - ball.radius);
    let dir = contact - paddle.bottom_mid();
    ball.vel = if dir.length_squared() > f32::EPSILON {
        normalize_fast(dir)
    } else {
        // Contact point sits exactly on the pivot
        Vec2::new(0.0, -1.0)
    };
    ball.speed += PADDLE_HIT_SPEEDUP;

    log::debug!("Paddle hit: vel={:?} speed={}", ball.vel, ball.speed);
    true
}

/// Bounce off a single brick the ball is known to overlap
///
/// Faces are "approached" when the previous position lies outside that face
/// and the velocity points toward it. When two adjacent faces are approached,
/// the ball is deflected by the face it is farther outside of; if both
/// distances agree within [`CORNER_EPSILON`], both axes flip and the ball
/// snaps diagonally off the corner.
pub fn resolve_brick(ball: &mut Ball, brick: &Rect) -> BrickContact {
    let prev = ball.prev_pos;
    let r = ball.radius;

    let left = prev.x < brick.left() && ball.vel.x > APPROACH_EPSILON;
    let top = prev.y < brick.top() && ball.vel.y > APPROACH_EPSILON;
    let right = prev.x > brick.right() && ball.vel.x < -APPROACH_EPSILON;
    let bottom = prev.y > brick.bottom() && ball.vel.y < -APPROACH_EPSILON;

    let horizontal = if left {
        Some((Side::Left, brick.left() - prev.x, brick.left() - r))
    } else if right {
        Some((Side::Right, prev.x - brick.right(), brick.right() + r))
    } else {
        None
    };
    let vertical = if top {
        Some((Side::Top, brick.top() - prev.y, brick.top() - r))
    } else if bottom {
        Some((Side::Bottom, prev.y - brick.bottom(), brick.bottom() + r))
    } else {
        None
    };

    let contact = match (horizontal, vertical) {
        (Some((h_side, dx, snap_x)), Some((v_side, dy, snap_y))) => {
            if dy < dx - CORNER_EPSILON {
                ball.vel.x = -ball.vel.x;
                ball.pos.x = snap_x;
                BrickContact::Edge(h_side)
            } else if dy > dx + CORNER_EPSILON {
                ball.vel.y = -ball.vel.y;
                ball.pos.y = snap_y;
                BrickContact::Edge(v_side)
            } else {
                ball.vel = -ball.vel;
                ball.pos = Vec2::new(snap_x, snap_y);
                BrickContact::Corner {
                    horizontal: h_side,
                    vertical: v_side,
                }
            }
        }
        (Some((side, _, snap_x)), None) => {
            ball.vel.x = -ball.vel.x;
            ball.pos.x = snap_x;
            BrickContact::Edge(side)
        }
        (None, Some((side, _, snap_y))) => {
            ball.vel.y = -ball.vel.y;
            ball.pos.y = snap_y;
            BrickContact::Edge(side)
        }
        (None, None) => BrickContact::Glancing,
    };

    ball.speed += BRICK_HIT_SPEEDUP;
    contact
}

/// Find the first live brick under the ball, knock it out and bounce
pub fn resolve_bricks(
    ball: &mut Ball,
    bricks: &mut BrickGrid,
    state: &mut GameState,
) -> Option<BrickHit> {
    let index = bricks.first_hit(ball.prev_pos, ball.radius)?;
    let rect = bricks.brick(index)?.rect;

    bricks.destroy(index);
    state.points += POINTS_PER_BRICK;

    let contact = resolve_brick(ball, &rect);
    let (row, col) = bricks.cell(index);
    log::debug!(
        "Brick ({row}, {col}) destroyed: {contact:?}, {} remaining",
        bricks.remaining()
    );

    Some(BrickHit {
        index,
        row,
        col,
        contact,
    })
}

/// Keep the ball inside the arena
///
/// Side walls and top/bottom are checked independently, so an arena corner
/// flips both axes in one call. Leaving through the bottom costs a life and
/// [`LIFE_LOST_PENALTY`] points, and re-docks the ball.
pub fn resolve_arena(
    ball: &mut Ball,
    paddle: &mut Paddle,
    state: &mut GameState,
    arena: Vec2,
) -> ArenaContact {
    let mut contact = ArenaContact::default();
    let r = ball.radius;

    if ball.prev_pos.x < r {
        ball.vel.x = -ball.vel.x;
        ball.pos.x = r;
        contact.side_wall = true;
    } else if ball.prev_pos.x > arena.x - r {
        ball.vel.x = -ball.vel.x;
        ball.pos.x = arena.x - r;
        contact.side_wall = true;
    }

    if ball.prev_pos.y < r {
        ball.vel.y = -ball.vel.y;
        ball.pos.y = r;
        contact.ceiling = true;
    } else if ball.prev_pos.y > arena.y - r {
        paddle.lives = paddle.lives.saturating_sub(1);
        state.points -= LIFE_LOST_PENALTY;
        ball.dock(paddle);
        contact.ball_lost = true;
        log::debug!(
            "Ball lost: {} lives left, {} points",
            paddle.lives,
            state.points
        );
    }

    contact
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flying_ball(prev: Vec2, vel: Vec2) -> Ball {
        let mut ball = Ball::docked(&Paddle::default());
        ball.enabled = true;
        ball.speed = BALL_SPEED;
        ball.prev_pos = prev;
        ball.pos = prev;
        ball.vel = vel;
        ball
    }

    const BRICK: Rect = Rect::new(100.0, 100.0, 50.0, 20.0);

    #[test]
    fn test_brick_left_edge() {
        let mut ball = flying_ball(Vec2::new(93.0, 110.0), Vec2::new(1.0, 0.0));
        let contact = resolve_brick(&mut ball, &BRICK);
        assert_eq!(contact, BrickContact::Edge(Side::Left));
        assert_eq!(ball.vel, Vec2::new(-1.0, 0.0));
        assert_eq!(ball.pos.x, 92.0);
        assert_eq!(ball.speed, BALL_SPEED + BRICK_HIT_SPEEDUP);
    }

    #[test]
    fn test_brick_bottom_edge() {
        let v = normalize_fast(Vec2::new(0.3, -1.0));
        let mut ball = flying_ball(Vec2::new(120.0, 126.0), v);
        let contact = resolve_brick(&mut ball, &BRICK);
        assert_eq!(contact, BrickContact::Edge(Side::Bottom));
        assert_eq!(ball.vel.x, v.x);
        assert_eq!(ball.vel.y, -v.y);
        assert_eq!(ball.pos.y, 128.0);
    }

    #[test]
    fn test_brick_top_edge() {
        let v = normalize_fast(Vec2::new(-0.4, 1.0));
        let mut ball = flying_ball(Vec2::new(125.0, 94.0), v);
        let contact = resolve_brick(&mut ball, &BRICK);
        assert_eq!(contact, BrickContact::Edge(Side::Top));
        assert_eq!(ball.vel, Vec2::new(v.x, -v.y));
        assert_eq!(ball.pos, Vec2::new(125.0, 92.0));
    }

    #[test]
    fn test_brick_right_edge() {
        let mut ball = flying_ball(Vec2::new(154.0, 105.0), Vec2::new(-1.0, 0.0));
        let contact = resolve_brick(&mut ball, &BRICK);
        assert_eq!(contact, BrickContact::Edge(Side::Right));
        assert_eq!(ball.vel, Vec2::new(1.0, 0.0));
        assert_eq!(ball.pos, Vec2::new(158.0, 105.0));
    }

    #[test]
    fn test_brick_top_left_exact_corner() {
        // Equidistant (4, 4) from the left and top faces, moving down-right
        let v = normalize_fast(Vec2::new(1.0, 1.0));
        let mut ball = flying_ball(Vec2::new(96.0, 96.0), v);
        let contact = resolve_brick(&mut ball, &BRICK);
        assert_eq!(
            contact,
            BrickContact::Corner {
                horizontal: Side::Left,
                vertical: Side::Top
            }
        );
        assert_eq!(ball.vel, -v);
        assert_eq!(ball.pos, Vec2::new(92.0, 92.0));
    }

    #[test]
    fn test_brick_top_left_resolves_to_top() {
        // Farther above the top (6) than left of the left face (2): top bounce
        let v = normalize_fast(Vec2::new(1.0, 1.0));
        let mut ball = flying_ball(Vec2::new(98.0, 94.0), v);
        let contact = resolve_brick(&mut ball, &BRICK);
        assert_eq!(contact, BrickContact::Edge(Side::Top));
        assert_eq!(ball.vel, Vec2::new(v.x, -v.y));
        assert_eq!(ball.pos.y, 92.0);
        assert_eq!(ball.pos.x, 98.0);
    }

    #[test]
    fn test_brick_bottom_right_resolves_to_right() {
        let v = normalize_fast(Vec2::new(-1.0, -1.0));
        let mut ball = flying_ball(Vec2::new(155.0, 121.0), v);
        let contact = resolve_brick(&mut ball, &BRICK);
        assert_eq!(contact, BrickContact::Edge(Side::Right));
        assert_eq!(ball.vel, Vec2::new(-v.x, v.y));
        assert_eq!(ball.pos.x, 158.0);
    }

    #[test]
    fn test_brick_receding_is_glancing() {
        // Left of the brick but moving away: nothing to reflect
        let mut ball = flying_ball(Vec2::new(95.0, 110.0), Vec2::new(-1.0, 0.0));
        let contact = resolve_brick(&mut ball, &BRICK);
        assert_eq!(contact, BrickContact::Glancing);
        assert_eq!(ball.vel, Vec2::new(-1.0, 0.0));
        assert_eq!(ball.pos, Vec2::new(95.0, 110.0));
        assert_eq!(ball.speed, BALL_SPEED + BRICK_HIT_SPEEDUP);
    }

    #[test]
    fn test_resolve_bricks_scores() {
        let mut grid = BrickGrid::default();
        let mut state = GameState::default();
        let target = grid.get(7, 6).unwrap().rect;
        let mut ball = flying_ball(
            Vec2::new(target.center().x, target.bottom() + 5.0),
            Vec2::new(0.0, -1.0),
        );

        let hit = resolve_bricks(&mut ball, &mut grid, &mut state).unwrap();
        assert_eq!((hit.row, hit.col), (7, 6));
        assert_eq!(hit.contact, BrickContact::Edge(Side::Bottom));
        assert_eq!(grid.remaining(), 103);
        assert_eq!(state.points, 1);
        assert!(!grid.get(7, 6).unwrap().enabled);
        assert_eq!(ball.vel, Vec2::new(0.0, 1.0));
    }

    #[test]
    fn test_resolve_bricks_miss() {
        let mut grid = BrickGrid::default();
        let mut state = GameState::default();
        let mut ball = flying_ball(Vec2::new(400.0, 300.0), Vec2::new(0.0, -1.0));
        assert!(resolve_bricks(&mut ball, &mut grid, &mut state).is_none());
        assert_eq!(grid.remaining(), 104);
        assert_eq!(state.points, 0);
    }

    #[test]
    fn test_paddle_center_hit_goes_straight_up() {
        let paddle = Paddle::default();
        let mut ball = flying_ball(Vec2::new(400.0, 404.0), Vec2::new(0.0, 1.0));
        assert!(resolve_paddle(&mut ball, &paddle));
        assert!(ball.vel.x.abs() < 1e-6);
        assert!((ball.vel.y + 1.0).abs() < 1e-4);
        assert_eq!(ball.speed, BALL_SPEED + PADDLE_HIT_SPEEDUP);
    }

    #[test]
    fn test_paddle_edge_hit_angles_out() {
        let paddle = Paddle::default();
        let mut ball = flying_ball(Vec2::new(440.0, 404.0), Vec2::new(0.0, 1.0));
        assert!(resolve_paddle(&mut ball, &paddle));
        assert!(ball.vel.x > 0.0);
        assert!(ball.vel.y < 0.0);
        assert!((ball.vel.length() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_paddle_miss() {
        let paddle = Paddle::default();
        let mut ball = flying_ball(Vec2::new(400.0, 300.0), Vec2::new(0.0, 1.0));
        assert!(!resolve_paddle(&mut ball, &paddle));
        assert_eq!(ball.vel, Vec2::new(0.0, 1.0));
        assert_eq!(ball.speed, BALL_SPEED);
    }

    #[test]
    fn test_arena_left_wall_clamps_to_radius() {
        let mut paddle = Paddle::default();
        let mut state = GameState::default();
        let v = normalize_fast(Vec2::new(-1.0, -1.0));
        let mut ball = flying_ball(Vec2::new(5.0, 200.0), v);
        ball.pos = Vec2::new(3.0, 198.0);

        let contact = resolve_arena(&mut ball, &mut paddle, &mut state, Vec2::new(800.0, 450.0));
        assert!(contact.side_wall);
        assert!(!contact.ceiling);
        assert_eq!(ball.pos.x, BALL_RADIUS);
        assert_eq!(ball.vel.x, -v.x);
        assert_eq!(ball.vel.y, v.y);
    }

    #[test]
    fn test_arena_left_wall_reflects_inbound_ball() {
        // Already past the wall but heading back in: still reflected and clamped
        let mut paddle = Paddle::default();
        let mut state = GameState::default();
        let v = normalize_fast(Vec2::new(1.0, 0.5));
        let mut ball = flying_ball(Vec2::new(4.0, 200.0), v);
        ball.pos = Vec2::new(7.0, 201.5);

        let contact = resolve_arena(&mut ball, &mut paddle, &mut state, Vec2::new(800.0, 450.0));
        assert!(contact.side_wall);
        assert!(ball.vel.x < 0.0);
        assert_eq!(ball.vel, Vec2::new(-v.x, v.y));
        assert_eq!(ball.pos.x, BALL_RADIUS);
        assert_eq!(ball.pos.y, 201.5);
    }

    #[test]
    fn test_arena_right_wall_only() {
        let mut paddle = Paddle::default();
        let mut state = GameState::default();
        let v = normalize_fast(Vec2::new(1.0, 1.0));
        let mut ball = flying_ball(Vec2::new(796.0, 300.0), v);
        ball.pos = Vec2::new(799.0, 303.0);

        let contact = resolve_arena(&mut ball, &mut paddle, &mut state, Vec2::new(800.0, 450.0));
        assert!(contact.side_wall);
        assert!(!contact.ceiling && !contact.ball_lost);
        assert_eq!(ball.vel, Vec2::new(-v.x, v.y));
        assert_eq!(ball.pos, Vec2::new(800.0 - BALL_RADIUS, 303.0));
        assert_eq!(paddle.lives, MAX_LIVES);
    }

    #[test]
    fn test_arena_corner_flips_both_axes() {
        let mut paddle = Paddle::default();
        let mut state = GameState::default();
        let v = normalize_fast(Vec2::new(1.0, -1.0));
        let mut ball = flying_ball(Vec2::new(795.0, 4.0), v);

        let contact = resolve_arena(&mut ball, &mut paddle, &mut state, Vec2::new(800.0, 450.0));
        assert!(contact.side_wall && contact.ceiling);
        assert_eq!(ball.vel, -v);
        assert_eq!(ball.pos, Vec2::new(792.0, 8.0));
    }

    #[test]
    fn test_arena_bottom_costs_life() {
        let mut paddle = Paddle::default();
        paddle.rect.x = 200.0;
        let mut state = GameState { points: 3, game_over: false };
        let mut ball = flying_ball(Vec2::new(300.0, 445.0), Vec2::new(0.0, 1.0));

        let contact = resolve_arena(&mut ball, &mut paddle, &mut state, Vec2::new(800.0, 450.0));
        assert!(contact.ball_lost);
        assert!(!contact.bounced());
        assert_eq!(paddle.lives, MAX_LIVES - 1);
        assert_eq!(state.points, -7);
        assert!(ball.is_docked());
        assert_eq!(ball.pos, Vec2::new(250.0, PADDLE_Y - BALL_DOCK_OFFSET));
    }

    #[test]
    fn test_arena_inside_untouched() {
        let mut paddle = Paddle::default();
        let mut state = GameState::default();
        let mut ball = flying_ball(Vec2::new(400.0, 200.0), Vec2::new(0.0, 1.0));
        let contact = resolve_arena(&mut ball, &mut paddle, &mut state, Vec2::new(800.0, 450.0));
        assert_eq!(contact, ArenaContact::default());
        assert_eq!(ball.vel, Vec2::new(0.0, 1.0));
    }
}
