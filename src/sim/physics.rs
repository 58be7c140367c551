//! Fixed timestep ball physics
//!
//! Integration, rolling friction, cushion reflection and elastic ball/ball
//! collisions. The game state hands the full ball slice over once per tick;
//! this module mutates positions and velocities in place and never adds or
//! removes balls.

use glam::Vec2;

use super::state::Ball;
use crate::consts::{FRICTION, STOP_THRESHOLD, TABLE_HEIGHT, TABLE_WIDTH};

/// Advance every ball by one fixed timestep, then resolve collisions.
pub fn step(balls: &mut [Ball], dt: f32) {
    for ball in balls.iter_mut() {
        if ball.vel == Vec2::ZERO {
            continue;
        }

        ball.pos += ball.vel * dt;
        apply_friction(ball);

        // Axis-aligned cushion reflection. No position correction here: a
        // ball may briefly sit past the edge before the inverted velocity
        // brings it back (accepted approximation).
        if ball.pos.x - ball.radius < 0.0 || ball.pos.x + ball.radius > TABLE_WIDTH {
            ball.vel.x = -ball.vel.x;
        }
        if ball.pos.y - ball.radius < 0.0 || ball.pos.y + ball.radius > TABLE_HEIGHT {
            ball.vel.y = -ball.vel.y;
        }
    }

    resolve_ball_collisions(balls);
}

/// Rolling friction: scale velocity down each tick, snapping to a dead stop
/// once the per-tick decay falls under [`STOP_THRESHOLD`] so balls never
/// crawl asymptotically.
fn apply_friction(ball: &mut Ball) {
    let damped = ball.vel * FRICTION;
    if (damped - ball.vel).length() < STOP_THRESHOLD {
        ball.vel = Vec2::ZERO;
    } else {
        ball.vel = damped;
    }
}

/// Check every unique pair for overlap and resolve. O(n²), fine at 16 balls.
fn resolve_ball_collisions(balls: &mut [Ball]) {
    for i in 0..balls.len() {
        for j in i + 1..balls.len() {
            let (head, tail) = balls.split_at_mut(j);
            let a = &mut head[i];
            let b = &mut tail[0];

            let distance = (a.pos - b.pos).length();
            if distance < a.radius + b.radius {
                resolve_elastic(a, b);

                // Push the pair apart by half the overlap each. For exactly
                // coincident centers the axis is undefined; fall back to +X
                // so the pair still comes apart deterministically.
                let overlap = a.radius + b.radius - distance;
                let axis = (b.pos - a.pos).try_normalize().unwrap_or(Vec2::X);
                let separation = axis * (overlap / 2.0);
                a.pos -= separation;
                b.pos += separation;
            }
        }
    }
}

/// Two-body elastic collision along the line of centers (conserves momentum
/// and kinetic energy).
fn resolve_elastic(a: &mut Ball, b: &mut Ball) {
    let diff = a.pos - b.pos;
    let dist_sq = diff.dot(diff);
    // Coincident centers: the collision normal is undefined, leave
    // velocities alone and let separation handle the pair
    if dist_sq == 0.0 {
        return;
    }

    let along = (a.vel - b.vel).dot(diff) / dist_sq;
    let total_mass = a.mass + b.mass;

    a.vel -= diff * (2.0 * b.mass / total_mass * along);
    b.vel += diff * (2.0 * a.mass / total_mass * along);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use proptest::prelude::*;

    fn ball_at(x: f32, y: f32, vx: f32, vy: f32) -> Ball {
        let mut ball = Ball::new(0, Vec2::new(x, y), [0.5, 0.5, 0.5]);
        ball.vel = Vec2::new(vx, vy);
        ball
    }

    fn kinetic_energy(balls: &[Ball]) -> f32 {
        balls
            .iter()
            .map(|b| 0.5 * b.mass * b.vel.length_squared())
            .sum()
    }

    #[test]
    fn test_stationary_ball_stays_put() {
        let mut balls = vec![ball_at(600.0, 400.0, 0.0, 0.0)];
        step(&mut balls, SIM_DT);
        assert_eq!(balls[0].pos, Vec2::new(600.0, 400.0));
        assert_eq!(balls[0].vel, Vec2::ZERO);
    }

    #[test]
    fn test_friction_reaches_exact_zero() {
        let mut balls = vec![ball_at(600.0, 400.0, 50.0, 0.0)];
        let mut stopped_after = None;
        for tick in 0..1000 {
            step(&mut balls, SIM_DT);
            if balls[0].vel == Vec2::ZERO {
                stopped_after = Some(tick);
                break;
            }
        }
        // Threshold snap guarantees termination, not asymptotic decay
        let stopped_after = stopped_after.expect("ball never stopped");
        assert!(stopped_after > 100, "stopped suspiciously early");
        // And it stays stopped
        step(&mut balls, SIM_DT);
        assert_eq!(balls[0].vel, Vec2::ZERO);
    }

    #[test]
    fn test_cushion_inverts_velocity() {
        // Heading right into the right cushion
        let mut balls = vec![ball_at(TABLE_WIDTH - 15.0, 400.0, 200.0, 0.0)];
        step(&mut balls, SIM_DT);
        assert!(balls[0].vel.x < 0.0, "x velocity should have flipped");
        assert!((balls[0].vel.x.abs() - 200.0 * FRICTION).abs() < 1e-3);
        assert_eq!(balls[0].vel.y, 0.0);
    }

    #[test]
    fn test_head_on_equal_mass_transfer() {
        // Canonical billiards check: full momentum transfer between equal
        // masses along the line of centers
        let mut a = ball_at(0.0, 0.0, 100.0, 0.0);
        let mut b = ball_at(30.0, 0.0, 0.0, 0.0);
        resolve_elastic(&mut a, &mut b);
        assert!(a.vel.length() < 1e-4);
        assert!((b.vel.x - 100.0).abs() < 1e-3);
        assert!(b.vel.y.abs() < 1e-4);
    }

    #[test]
    fn test_step_collision_transfers_and_separates() {
        let mut balls = vec![
            ball_at(570.0, 400.0, 100.0, 0.0),
            ball_at(600.0, 400.0, 0.0, 0.0),
        ];
        step(&mut balls, SIM_DT);

        // Struck ball carries (almost) all the speed, friction already took
        // its 0.5% from the incoming ball this tick
        assert!(balls[0].vel.length() < 1e-2);
        assert!((balls[1].vel.x - 100.0 * FRICTION).abs() < 0.1);

        // And the pair no longer overlaps
        let gap = (balls[1].pos - balls[0].pos).length();
        assert!(gap >= balls[0].radius + balls[1].radius - 1e-3);
    }

    #[test]
    fn test_overlapping_resting_balls_get_pushed_apart() {
        let mut balls = vec![
            ball_at(600.0, 400.0, 0.0, 0.0),
            ball_at(610.0, 400.0, 0.0, 0.0),
        ];
        step(&mut balls, SIM_DT);
        let gap = (balls[1].pos - balls[0].pos).length();
        assert!((gap - 40.0).abs() < 1e-3);
        // Pure overlap correction, no velocity invented
        assert_eq!(balls[0].vel, Vec2::ZERO);
        assert_eq!(balls[1].vel, Vec2::ZERO);
    }

    #[test]
    fn test_coincident_centers_separate_along_x() {
        let mut balls = vec![
            ball_at(600.0, 400.0, 0.0, 0.0),
            ball_at(600.0, 400.0, 0.0, 0.0),
        ];
        step(&mut balls, SIM_DT);
        let delta = balls[1].pos - balls[0].pos;
        assert!((delta.length() - 40.0).abs() < 1e-3);
        assert_eq!(delta.y, 0.0);
        assert!(delta.x > 0.0);
        // Nothing blew up into NaN
        assert!(balls[0].pos.is_finite() && balls[1].pos.is_finite());
    }

    proptest! {
        #[test]
        fn prop_kinetic_energy_never_increases(
            vx in -400.0f32..400.0,
            vy in -400.0f32..400.0,
        ) {
            let mut balls = vec![ball_at(600.0, 400.0, vx, vy)];
            let mut prev = kinetic_energy(&balls);
            for _ in 0..200 {
                step(&mut balls, SIM_DT);
                let now = kinetic_energy(&balls);
                prop_assert!(now <= prev + 1e-2);
                prev = now;
            }
        }

        #[test]
        fn prop_balls_settle_inside_the_table(
            x in 40.0f32..(TABLE_WIDTH - 40.0),
            y in 40.0f32..(TABLE_HEIGHT - 40.0),
            vx in -800.0f32..800.0,
            vy in -800.0f32..800.0,
        ) {
            let mut balls = vec![ball_at(x, y, vx, vy)];
            for _ in 0..3000 {
                step(&mut balls, SIM_DT);
            }
            let ball = &balls[0];
            prop_assert_eq!(ball.vel, Vec2::ZERO);
            // Resting position stays on the table (tiny slack for the
            // penetration a bounce is allowed to leave behind)
            prop_assert!(ball.pos.x >= ball.radius - 1.0);
            prop_assert!(ball.pos.x <= TABLE_WIDTH - ball.radius + 1.0);
            prop_assert!(ball.pos.y >= ball.radius - 1.0);
            prop_assert!(ball.pos.y <= TABLE_HEIGHT - ball.radius + 1.0);
        }
    }
}
