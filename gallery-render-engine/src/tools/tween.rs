use crate::engine::camera::rig::MainCamera;
use crate::tools::navigation::NavigationController;
use bevy::prelude::*;
use std::time::Duration;

/// A single in-flight camera position animation. At most one exists at a
/// time; starting a new tween replaces the old one outright, so the last
/// writer wins on the shared camera translation.
#[derive(Debug, Clone)]
pub struct CameraTween {
    from: Vec3,
    to: Vec3,
    timer: Timer,
    generation: u64,
}

impl CameraTween {
    pub fn new(from: Vec3, to: Vec3, duration_secs: f32, generation: u64) -> Self {
        Self {
            from,
            to,
            timer: Timer::from_seconds(duration_secs, TimerMode::Once),
            generation,
        }
    }

    pub fn tick(&mut self, delta: Duration) {
        self.timer.tick(delta);
    }

    /// Current interpolated position. Completion snaps to the exact
    /// destination so viewing-pose comparisons hold afterwards.
    pub fn sample(&self) -> Vec3 {
        if self.timer.finished() {
            return self.to;
        }
        self.from
            .lerp(self.to, ease_in_out_quad(self.timer.fraction()))
    }

    pub fn finished(&self) -> bool {
        self.timer.finished()
    }

    pub fn destination(&self) -> Vec3 {
        self.to
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Quadratic ease-in-out over normalised time.
pub fn ease_in_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u / 2.0
    }
}

/// Per-frame advance of the active tween. The only writer of the camera
/// translation, which keeps the shared pose single-owner.
pub fn advance_camera_tween(
    time: Res<Time>,
    mut nav: ResMut<NavigationController>,
    mut cameras: Query<&mut Transform, With<MainCamera>>,
) {
    let Ok(mut transform) = cameras.single_mut() else {
        return;
    };
    let Some(tween) = nav.active_mut() else {
        return;
    };

    tween.tick(time.delta());
    transform.translation = tween.sample();
    if tween.finished() {
        transform.translation = tween.destination();
        nav.clear_active();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn easing_hits_endpoints_and_midpoint() {
        assert_eq!(ease_in_out_quad(0.0), 0.0);
        assert_eq!(ease_in_out_quad(1.0), 1.0);
        assert!((ease_in_out_quad(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn easing_is_monotone() {
        let mut last = 0.0;
        for step in 0..=100 {
            let eased = ease_in_out_quad(step as f32 / 100.0);
            assert!(eased >= last);
            last = eased;
        }
    }

    #[test]
    fn sample_snaps_to_destination_when_finished() {
        let mut tween = CameraTween::new(Vec3::ZERO, Vec3::new(10.0, 0.0, -10.0), 1.0, 1);
        tween.tick(Duration::from_millis(400));
        let midway = tween.sample();
        assert!(midway.x > 0.0 && midway.x < 10.0);
        assert!(!tween.finished());

        tween.tick(Duration::from_millis(700));
        assert!(tween.finished());
        assert_eq!(tween.sample(), Vec3::new(10.0, 0.0, -10.0));
    }
}
