pub const FOLLOW_FACTOR: f64 = 0.1;
pub const HOVER_SCALE: f64 = 1.5;
pub const REST_SCALE: f64 = 1.0;
pub const TILT_DIVISOR: f64 = 10.0;

#[derive(Clone, Copy, Debug, Default)]
pub struct CursorFollower {
    pub x: f64,
    pub y: f64,
}

impl CursorFollower {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step_toward(&mut self, target_x: f64, target_y: f64) -> (f64, f64) {
        self.x += (target_x - self.x) * FOLLOW_FACTOR;
        self.y += (target_y - self.y) * FOLLOW_FACTOR;
        (self.x, self.y)
    }
}

pub fn outline_transform(hovering: bool) -> String {
    let scale = if hovering { HOVER_SCALE } else { REST_SCALE };
    format!("translate(-50%, -50%) scale({scale})")
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltAngles {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

pub fn tilt_angles(local_x: f64, local_y: f64, width: f64, height: f64) -> TiltAngles {
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    TiltAngles {
        rotate_x: (local_y - center_y) / TILT_DIVISOR,
        rotate_y: (center_x - local_x) / TILT_DIVISOR,
    }
}

pub fn tilt_transform(angles: TiltAngles) -> String {
    format!(
        "perspective(1000px) rotateX({}deg) rotateY({}deg) translateY(-10px)",
        angles.rotate_x, angles.rotate_y
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distance(follower: &CursorFollower, x: f64, y: f64) -> f64 {
        ((x - follower.x).powi(2) + (y - follower.y).powi(2)).sqrt()
    }

    #[test]
    fn follower_distance_shrinks_geometrically() {
        let mut follower = CursorFollower::new();
        let (target_x, target_y) = (100.0, 0.0);

        let mut previous = distance(&follower, target_x, target_y);
        for _ in 0..10 {
            follower.step_toward(target_x, target_y);
            let current = distance(&follower, target_x, target_y);
            assert!((current - previous * 0.9).abs() < 1e-9);
            previous = current;
        }
    }

    #[test]
    fn follower_never_overshoots_a_stationary_target() {
        let mut follower = CursorFollower::new();

        for _ in 0..1_000 {
            let (x, y) = follower.step_toward(200.0, 120.0);
            assert!(x <= 200.0);
            assert!(y <= 120.0);
        }
        assert!(distance(&follower, 200.0, 120.0) < 1e-6);
    }

    #[test]
    fn follower_approaches_from_above_without_oscillation() {
        let mut follower = CursorFollower { x: 500.0, y: 300.0 };

        for _ in 0..1_000 {
            let (x, y) = follower.step_toward(100.0, 50.0);
            assert!(x >= 100.0);
            assert!(y >= 50.0);
        }
    }

    #[test]
    fn outline_scales_up_over_interactive_elements() {
        assert_eq!(outline_transform(true), "translate(-50%, -50%) scale(1.5)");
        assert_eq!(outline_transform(false), "translate(-50%, -50%) scale(1)");
    }

    #[test]
    fn pointer_at_card_center_produces_no_tilt() {
        let angles = tilt_angles(150.0, 100.0, 300.0, 200.0);

        assert_eq!(angles, TiltAngles { rotate_x: 0.0, rotate_y: 0.0 });
    }

    #[test]
    fn tilt_leans_toward_the_pointer() {
        // Bottom-right corner: positive rotate_x, negative rotate_y.
        let angles = tilt_angles(300.0, 200.0, 300.0, 200.0);

        assert_eq!(angles.rotate_x, 10.0);
        assert_eq!(angles.rotate_y, -15.0);
    }

    #[test]
    fn tilt_transform_keeps_the_hover_lift() {
        let transform = tilt_transform(TiltAngles {
            rotate_x: 2.5,
            rotate_y: -3.0,
        });

        assert_eq!(
            transform,
            "perspective(1000px) rotateX(2.5deg) rotateY(-3deg) translateY(-10px)"
        );
    }
}
