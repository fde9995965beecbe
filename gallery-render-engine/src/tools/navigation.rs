use crate::engine::camera::look_controls::LookState;
use crate::engine::camera::rig::MainCamera;
use crate::engine::scene::exhibits::{ExhibitRoot, PickVolume, SceneNodeTag};
use crate::engine::scene::registry::ProjectRegistry;
use crate::tools::picking::{PointerTracker, pick_nearest};
use crate::tools::tween::CameraTween;
use bevy::prelude::*;
use constants::navigation_settings::{
    CONFIRM_BUMP_HEIGHT, POSE_EPSILON, REDIRECT_DELAY_SECS, TWEEN_DURATION_SECS, VIEWING_OFFSET,
};

/// A page redirect scheduled by a confirmed exhibit click. It only fires if
/// its generation still matches the controller's; any tween started in the
/// meantime invalidates it.
#[derive(Debug, Clone)]
pub struct PendingRedirect {
    pub url: String,
    pub timer: Timer,
    pub generation: u64,
}

/// Owner of the camera tween, the tween generation counter, and any pending
/// redirect. One per application.
#[derive(Resource, Default)]
pub struct NavigationController {
    active: Option<CameraTween>,
    generation: u64,
    pending_redirect: Option<PendingRedirect>,
}

impl NavigationController {
    /// Start a tween, superseding whichever one was running. Returns the
    /// new generation so callers can tie follow-up actions to it.
    pub fn start_tween(&mut self, from: Vec3, to: Vec3) -> u64 {
        self.generation += 1;
        self.active = Some(CameraTween::new(
            from,
            to,
            TWEEN_DURATION_SECS,
            self.generation,
        ));
        self.generation
    }

    pub fn schedule_redirect(&mut self, url: String, generation: u64) {
        self.pending_redirect = Some(PendingRedirect {
            url,
            timer: Timer::from_seconds(REDIRECT_DELAY_SECS, TimerMode::Once),
            generation,
        });
    }

    pub fn active_mut(&mut self) -> Option<&mut CameraTween> {
        self.active.as_mut()
    }

    pub fn clear_active(&mut self) {
        self.active = None;
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn has_pending_redirect(&self) -> bool {
        self.pending_redirect.is_some()
    }

    /// Tick the pending redirect. Returns the URL exactly once when the
    /// delay elapses and the scheduling interaction was not superseded.
    pub fn take_due_redirect(&mut self, delta: std::time::Duration) -> Option<String> {
        let pending = self.pending_redirect.as_mut()?;
        pending.timer.tick(delta);
        if !pending.timer.finished() {
            return None;
        }
        let pending = self.pending_redirect.take()?;
        if pending.generation == self.generation {
            Some(pending.url)
        } else {
            None
        }
    }
}

/// What a click asks the camera to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClickOutcome {
    /// Move in front of an exhibit's viewing pose.
    Focus { destination: Vec3 },
    /// Already at the viewing pose: nudge upward and confirm navigation.
    Confirm { destination: Vec3 },
    /// Background click: head back to the origin plane, height preserved.
    ReturnToOrigin { destination: Vec3 },
}

/// Lateral viewing offset for an exhibit at `exhibit_x`. Exhibits on the +x
/// side are viewed from -5, mirrored exhibits from +5.
pub fn viewing_offset(exhibit_x: f32) -> f32 {
    if exhibit_x > 0.0 {
        VIEWING_OFFSET
    } else {
        -VIEWING_OFFSET
    }
}

/// Whether the camera currently sits at the exhibit's viewing pose. Tween
/// completion snaps exactly, so the epsilon only absorbs float noise.
pub fn at_viewing_pose(camera: Vec3, exhibit: Vec3) -> bool {
    (camera.x + viewing_offset(exhibit.x) - exhibit.x).abs() <= POSE_EPSILON
        && (camera.z - exhibit.z).abs() <= POSE_EPSILON
}

/// Decide the camera's response to a pick. `exhibit` is the ROOT group
/// position of the clicked exhibit, or `None` for untagged geometry.
pub fn resolve_click(camera: Vec3, exhibit: Option<Vec3>) -> ClickOutcome {
    match exhibit {
        Some(exhibit) => {
            if at_viewing_pose(camera, exhibit) {
                ClickOutcome::Confirm {
                    destination: Vec3::new(camera.x, camera.y + CONFIRM_BUMP_HEIGHT, camera.z),
                }
            } else {
                let offset = viewing_offset(exhibit.x);
                ClickOutcome::Focus {
                    destination: Vec3::new(exhibit.x - offset, camera.y, exhibit.z),
                }
            }
        }
        None => ClickOutcome::ReturnToOrigin {
            destination: Vec3::new(0.0, camera.y, 0.0),
        },
    }
}

/// Click handler: build the pick ray from the last pointer position, find
/// the nearest volume, resolve it through the scene node tags, and steer
/// the camera. Clicks that hit nothing at all do nothing.
pub fn handle_gallery_clicks(
    mouse: Res<ButtonInput<MouseButton>>,
    look: Res<LookState>,
    pointer: Res<PointerTracker>,
    cameras: Query<(&Camera, &GlobalTransform, &Transform), With<MainCamera>>,
    volumes: Query<(Entity, &GlobalTransform, &PickVolume)>,
    tags: Query<&SceneNodeTag>,
    roots: Query<&Transform, (With<ExhibitRoot>, Without<MainCamera>)>,
    registry: Res<ProjectRegistry>,
    mut nav: ResMut<NavigationController>,
) {
    if !mouse.just_pressed(MouseButton::Left) || look.locked {
        return;
    }
    let Some(cursor) = pointer.position else {
        return;
    };
    let Ok((camera, camera_global, camera_transform)) = cameras.single() else {
        return;
    };
    let Ok(ray) = camera.viewport_to_world(camera_global, cursor) else {
        return;
    };

    let Some(hit) = pick_nearest(ray.origin, *ray.direction, volumes.iter()) else {
        return;
    };

    let exhibit_position = tags.get(hit.entity).ok().and_then(|tag| {
        roots
            .get(tag.exhibit_root())
            .ok()
            .map(|transform| (tag.exhibit_root(), transform.translation))
    });

    let camera_position = camera_transform.translation;
    match resolve_click(camera_position, exhibit_position.map(|(_, pos)| pos)) {
        ClickOutcome::Focus { destination } => {
            nav.start_tween(camera_position, destination);
        }
        ClickOutcome::Confirm { destination } => {
            let generation = nav.start_tween(camera_position, destination);
            if let Some((root, _)) = exhibit_position {
                if let Some(exhibit) = registry.by_root(root) {
                    info!("confirmed exhibit '{}'", exhibit.display_name);
                    nav.schedule_redirect(exhibit.target_url.clone(), generation);
                }
            }
        }
        ClickOutcome::ReturnToOrigin { destination } => {
            nav.start_tween(camera_position, destination);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn positive_side_exhibit_focuses_from_minus_five() {
        let camera = Vec3::new(0.0, 5.0, 0.0);
        let exhibit = Vec3::new(15.0, 6.0, -10.0);
        let outcome = resolve_click(camera, Some(exhibit));
        assert_eq!(
            outcome,
            ClickOutcome::Focus {
                destination: Vec3::new(10.0, 5.0, -10.0)
            }
        );
    }

    #[test]
    fn negative_side_exhibit_focuses_from_plus_five() {
        let camera = Vec3::new(0.0, 5.0, 0.0);
        let exhibit = Vec3::new(-10.0, 6.0, 10.0);
        let outcome = resolve_click(camera, Some(exhibit));
        assert_eq!(
            outcome,
            ClickOutcome::Focus {
                destination: Vec3::new(-5.0, 5.0, 10.0)
            }
        );
    }

    #[test]
    fn click_at_viewing_pose_confirms_with_bump() {
        let exhibit = Vec3::new(15.0, 6.0, -10.0);
        let camera = Vec3::new(10.0, 5.0, -10.0);
        assert!(at_viewing_pose(camera, exhibit));
        let outcome = resolve_click(camera, Some(exhibit));
        assert_eq!(
            outcome,
            ClickOutcome::Confirm {
                destination: Vec3::new(10.0, 6.0, -10.0)
            }
        );
    }

    #[test]
    fn background_click_returns_to_origin_preserving_height() {
        let camera = Vec3::new(10.0, 7.5, -10.0);
        let outcome = resolve_click(camera, None);
        assert_eq!(
            outcome,
            ClickOutcome::ReturnToOrigin {
                destination: Vec3::new(0.0, 7.5, 0.0)
            }
        );
    }

    #[test]
    fn redirect_fires_once_after_delay() {
        let mut nav = NavigationController::default();
        let generation = nav.start_tween(Vec3::ZERO, Vec3::Y);
        nav.schedule_redirect("https://example.com".into(), generation);

        assert_eq!(nav.take_due_redirect(Duration::from_millis(100)), None);
        assert_eq!(
            nav.take_due_redirect(Duration::from_millis(700)),
            Some("https://example.com".to_string())
        );
        assert_eq!(nav.take_due_redirect(Duration::from_millis(700)), None);
    }

    #[test]
    fn superseding_tween_cancels_pending_redirect() {
        let mut nav = NavigationController::default();
        let generation = nav.start_tween(Vec3::ZERO, Vec3::Y);
        nav.schedule_redirect("https://example.com".into(), generation);

        // User clicks elsewhere before the delay elapses.
        nav.start_tween(Vec3::Y, Vec3::ZERO);
        assert_eq!(nav.take_due_redirect(Duration::from_secs(2)), None);
        assert!(!nav.has_pending_redirect());
    }

    #[test]
    fn starting_a_tween_supersedes_the_previous_one() {
        let mut nav = NavigationController::default();
        nav.start_tween(Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0));
        nav.start_tween(Vec3::ZERO, Vec3::new(-5.0, 0.0, 0.0));
        let tween = nav.active_mut().unwrap();
        assert_eq!(tween.destination(), Vec3::new(-5.0, 0.0, 0.0));
        assert_eq!(tween.generation(), 2);
    }
}
