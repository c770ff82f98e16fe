// Pairwise collision response for marbles. Overlapping marbles get nudged
// apart by their separation vector; this is not momentum conserving.

use crate::particle::Particle;

/// Velocity cap applied after every pair evaluation.
pub const MARBLE_MAX_SPEED: f64 = 0.02;

/// Nudges velocities of overlapping particles apart and bounces them off the
/// edges of the unit square. Positions are left for the container to integrate.
pub fn resolve(particles: &mut [Particle], max_speed: f64) {
    for i in 0..particles.len() {
        let (head, tail) = particles.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            let separation = a.pos - b.pos;
            if separation.length() < a.size + b.size {
                a.vel += separation;
                b.vel -= separation;
            }
            a.vel.limit(max_speed);
            b.vel.limit(max_speed);
        }
        reflect_at_bounds(a);
    }
}

fn reflect_at_bounds(particle: &mut Particle) {
    let (pos, size) = (particle.pos, particle.size);
    if pos.x + size > 1.0 || pos.x - size < 0.0 {
        particle.vel.x = -particle.vel.x;
    }
    if pos.y + size > 1.0 || pos.y - size < 0.0 {
        particle.vel.y = -particle.vel.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::particle::ParticleKind;
    use crate::vector::Vector2;

    const EPS: f64 = 1e-12;

    fn marble(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
        Particle::new(
            Vector2::new(x, y),
            Vector2::new(vx, vy),
            0.05,
            Color::WHITE,
            500,
            ParticleKind::Marble {
                acceleration: Vector2::ZERO,
            },
        )
    }

    #[test]
    fn overlapping_marbles_are_pushed_apart_and_capped() {
        let mut marbles = vec![marble(0.50, 0.5, 0.0, 0.0), marble(0.56, 0.5, 0.0, 0.0)];
        let before: Vec<Vector2> = marbles.iter().map(|m| m.vel).collect();
        resolve(&mut marbles, MARBLE_MAX_SPEED);

        assert_ne!(marbles[0].vel, before[0]);
        assert_ne!(marbles[1].vel, before[1]);
        // the left marble moves left, the right one moves right
        assert!(marbles[0].vel.x < 0.0);
        assert!(marbles[1].vel.x > 0.0);
        for m in &marbles {
            assert!(m.vel.length() <= MARBLE_MAX_SPEED + EPS);
        }
    }

    #[test]
    fn separated_marbles_only_get_clamped() {
        let mut marbles = vec![marble(0.2, 0.5, 0.03, 0.04), marble(0.8, 0.5, 0.001, 0.0)];
        resolve(&mut marbles, MARBLE_MAX_SPEED);
        assert!((marbles[0].vel.length() - MARBLE_MAX_SPEED).abs() < EPS);
        assert!((marbles[0].vel.angle() - Vector2::new(0.03, 0.04).angle()).abs() < EPS);
        assert_eq!(marbles[1].vel, Vector2::new(0.001, 0.0));
    }

    #[test]
    fn tight_cluster_never_exceeds_the_cap() {
        let mut marbles: Vec<Particle> = (0..10)
            .map(|i| marble(0.5 + i as f64 * 0.001, 0.5, 0.0, 0.0))
            .collect();
        for _ in 0..10 {
            resolve(&mut marbles, MARBLE_MAX_SPEED);
            for m in &marbles {
                assert!(m.vel.length() <= MARBLE_MAX_SPEED + EPS);
            }
        }
    }

    #[test]
    fn boundary_flips_only_the_violating_axis() {
        let mut marbles = vec![marble(0.97, 0.5, 0.01, 0.005)];
        resolve(&mut marbles, MARBLE_MAX_SPEED);
        assert_eq!(marbles[0].vel, Vector2::new(-0.01, 0.005));

        let mut marbles = vec![marble(0.5, 0.02, 0.01, -0.005)];
        resolve(&mut marbles, MARBLE_MAX_SPEED);
        assert_eq!(marbles[0].vel, Vector2::new(0.01, 0.005));
    }

    #[test]
    fn corner_flips_both_axes() {
        let mut marbles = vec![marble(0.99, 0.99, 0.01, 0.01)];
        resolve(&mut marbles, MARBLE_MAX_SPEED);
        assert_eq!(marbles[0].vel, Vector2::new(-0.01, -0.01));
    }

    #[test]
    fn empty_and_single_sets_are_fine() {
        let mut none: Vec<Particle> = Vec::new();
        resolve(&mut none, MARBLE_MAX_SPEED);
        assert!(none.is_empty());

        let mut one = vec![marble(0.5, 0.5, 0.01, 0.0)];
        resolve(&mut one, MARBLE_MAX_SPEED);
        assert_eq!(one[0].vel, Vector2::new(0.01, 0.0));
    }

    #[test]
    fn every_pair_is_evaluated_once() {
        // three marbles in a row, each overlapping its neighbours only
        let mut marbles = vec![
            marble(0.40, 0.5, 0.0, 0.0),
            marble(0.49, 0.5, 0.0, 0.0),
            marble(0.58, 0.5, 0.0, 0.0),
        ];
        resolve(&mut marbles, 1.0);
        // middle marble: +d from the first pair, then -d' from the second
        let d01 = 0.40 - 0.49;
        let d12 = 0.49 - 0.58;
        assert!((marbles[0].vel.x - d01).abs() < EPS);
        assert!((marbles[1].vel.x - (-d01 + d12)).abs() < EPS);
        assert!((marbles[2].vel.x - (-d12)).abs() < EPS);
    }
}
