use crate::engine::scene::exhibits::PickVolume;
use bevy::prelude::*;

/// Last known cursor position in window coordinates. Updated every frame so
/// the click handler can cast its ray without re-querying the window.
#[derive(Resource, Default)]
pub struct PointerTracker {
    pub position: Option<Vec2>,
}

pub fn track_pointer(
    mut cursor_moved: EventReader<CursorMoved>,
    mut pointer: ResMut<PointerTracker>,
) {
    for cursor in cursor_moved.read() {
        pointer.position = Some(cursor.position);
    }
}

/// One ray/volume intersection, nearest-first ordering by `distance`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    pub entity: Entity,
    pub distance: f32,
}

/// Intersect the ray against every pick volume and keep the closest hit in
/// front of the ray origin.
pub fn pick_nearest<'a>(
    origin: Vec3,
    direction: Vec3,
    volumes: impl IntoIterator<Item = (Entity, &'a GlobalTransform, &'a PickVolume)>,
) -> Option<PickHit> {
    let mut nearest: Option<PickHit> = None;
    for (entity, transform, volume) in volumes {
        let Some(distance) = ray_volume_intersection(origin, direction, volume, transform) else {
            continue;
        };
        if nearest.is_none_or(|hit| distance < hit.distance) {
            nearest = Some(PickHit { entity, distance });
        }
    }
    nearest
}

/// Distance along the ray to an oriented pick volume: transform the ray
/// into the volume's local space, then intersect the shape there.
pub fn ray_volume_intersection(
    origin: Vec3,
    direction: Vec3,
    volume: &PickVolume,
    transform: &GlobalTransform,
) -> Option<f32> {
    let inverse = transform.compute_matrix().inverse();
    let local_origin = inverse.transform_point3(origin);
    let local_direction = inverse.transform_vector3(direction);
    match *volume {
        PickVolume::Cuboid { size } => {
            let half = size * 0.5;
            ray_aabb_entry(local_origin, local_direction, -half, half)
        }
        PickVolume::Cone { radius, height } => {
            ray_cone_entry(local_origin, local_direction, radius, height)
        }
    }
}

/// Slab-method ray/AABB intersection. Returns the entry distance, or the
/// exit distance when the origin lies inside the box.
fn ray_aabb_entry(origin: Vec3, direction: Vec3, min: Vec3, max: Vec3) -> Option<f32> {
    let mut t_enter = f32::NEG_INFINITY;
    let mut t_exit = f32::INFINITY;

    for axis in 0..3 {
        let o = origin[axis];
        let d = direction[axis];
        if d.abs() < 1e-8 {
            // Ray parallel to this slab; must already be between its planes.
            if o < min[axis] || o > max[axis] {
                return None;
            }
            continue;
        }
        let t0 = (min[axis] - o) / d;
        let t1 = (max[axis] - o) / d;
        let (near, far) = if t0 <= t1 { (t0, t1) } else { (t1, t0) };
        t_enter = t_enter.max(near);
        t_exit = t_exit.min(far);
        if t_enter > t_exit {
            return None;
        }
    }

    if t_exit < 0.0 {
        None
    } else if t_enter >= 0.0 {
        Some(t_enter)
    } else {
        Some(t_exit)
    }
}

/// Nearest distance along the ray to a finite cone centred at the local
/// origin, apex up at `+height/2`, base disk at `-height/2`. Lateral
/// surface and base cap both count; the mirror cone above the apex does
/// not. Used for the floor so rays passing above its sloped surface reach
/// the geometry behind it.
fn ray_cone_entry(origin: Vec3, direction: Vec3, radius: f32, height: f32) -> Option<f32> {
    let apex_y = height * 0.5;
    // Radius grows by `k` per unit below the apex.
    let k = radius / height;
    let m0 = apex_y - origin.y;

    let a = direction.x * direction.x + direction.z * direction.z
        - k * k * direction.y * direction.y;
    let b = 2.0
        * (origin.x * direction.x + origin.z * direction.z + k * k * m0 * direction.y);
    let c = origin.x * origin.x + origin.z * origin.z - k * k * m0 * m0;

    let mut nearest: Option<f32> = None;
    let mut consider = |t: f32| {
        if t < 0.0 {
            return;
        }
        let y = origin.y + t * direction.y;
        if y < -apex_y - 1e-4 || y > apex_y + 1e-4 {
            return;
        }
        if nearest.is_none_or(|best| t < best) {
            nearest = Some(t);
        }
    };

    if a.abs() < 1e-8 {
        if b.abs() > 1e-8 {
            consider(-c / b);
        }
    } else {
        let discriminant = b * b - 4.0 * a * c;
        if discriminant >= 0.0 {
            let root = discriminant.sqrt();
            consider((-b - root) / (2.0 * a));
            consider((-b + root) / (2.0 * a));
        }
    }

    // Base cap.
    if direction.y.abs() > 1e-8 {
        let t = (-apex_y - origin.y) / direction.y;
        if t >= 0.0 {
            let x = origin.x + t * direction.x;
            let z = origin.z + t * direction.z;
            if x * x + z * z <= radius * radius {
                consider(t);
            }
        }
    }

    nearest
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_volume() -> PickVolume {
        PickVolume::Cuboid {
            size: Vec3::splat(2.0),
        }
    }

    fn floor_volume() -> (PickVolume, GlobalTransform) {
        (
            PickVolume::Cone {
                radius: 80.0,
                height: 10.0,
            },
            GlobalTransform::from_translation(Vec3::new(0.0, -5.0, 0.0)),
        )
    }

    #[test]
    fn ray_hits_box_ahead() {
        let volume = unit_volume();
        let transform = GlobalTransform::from_translation(Vec3::new(0.0, 0.0, -10.0));
        let t = ray_volume_intersection(Vec3::ZERO, Vec3::NEG_Z, &volume, &transform);
        assert!((t.unwrap() - 9.0).abs() < 1e-4);
    }

    #[test]
    fn ray_misses_box_to_the_side() {
        let volume = unit_volume();
        let transform = GlobalTransform::from_translation(Vec3::new(5.0, 0.0, -10.0));
        assert!(ray_volume_intersection(Vec3::ZERO, Vec3::NEG_Z, &volume, &transform).is_none());
    }

    #[test]
    fn box_behind_ray_is_ignored() {
        let volume = unit_volume();
        let transform = GlobalTransform::from_translation(Vec3::new(0.0, 0.0, 10.0));
        assert!(ray_volume_intersection(Vec3::ZERO, Vec3::NEG_Z, &volume, &transform).is_none());
    }

    #[test]
    fn origin_inside_box_reports_exit() {
        let volume = PickVolume::Cuboid {
            size: Vec3::splat(4.0),
        };
        let transform = GlobalTransform::IDENTITY;
        let t = ray_volume_intersection(Vec3::ZERO, Vec3::NEG_Z, &volume, &transform);
        assert!((t.unwrap() - 2.0).abs() < 1e-4);
    }

    #[test]
    fn rotated_box_is_hit_in_local_space() {
        let volume = PickVolume::Cuboid {
            size: Vec3::new(4.0, 2.0, 0.2),
        };
        let transform = GlobalTransform::from(
            Transform::from_xyz(0.0, 0.0, -5.0)
                .with_rotation(Quat::from_rotation_y(std::f32::consts::FRAC_PI_2)),
        );
        // The thin axis now faces +x, so a ray down -z crosses the 4-unit
        // extent instead of the 0.2-unit one.
        let t = ray_volume_intersection(Vec3::ZERO, Vec3::NEG_Z, &volume, &transform);
        assert!(t.is_some());
    }

    #[test]
    fn ray_down_the_axis_hits_the_cone_apex() {
        let (volume, transform) = floor_volume();
        // Apex sits at world origin; the camera rests 5 units above it.
        let t = ray_volume_intersection(Vec3::new(0.0, 5.0, 0.0), Vec3::NEG_Y, &volume, &transform);
        assert!((t.unwrap() - 5.0).abs() < 1e-3);
    }

    #[test]
    fn cone_slope_is_hit_at_its_surface() {
        let (volume, transform) = floor_volume();
        // Surface point 40 units out sits at y = -5; straight-line distance
        // from the origin of the ray is sqrt(40^2 + 10^2).
        let target = Vec3::new(40.0, -5.0, 0.0);
        let origin = Vec3::new(0.0, 5.0, 0.0);
        let t = ray_volume_intersection(origin, (target - origin).normalize(), &volume, &transform);
        assert!((t.unwrap() - 1700.0f32.sqrt()).abs() < 1e-2);
    }

    #[test]
    fn floor_cone_does_not_occlude_pedestal_bases() {
        // Pedestal base of an exhibit at (15, 6, -10): world centre
        // (15.3, 0.5, -10), extents 2x6x2, so its lower half sits below
        // y = 0 but above the sloping floor surface.
        let mut world = World::new();
        let floor = world.spawn_empty().id();
        let pedestal = world.spawn_empty().id();
        let (floor_shape, floor_transform) = floor_volume();
        let pedestal_shape = PickVolume::Cuboid {
            size: Vec3::new(2.0, 6.0, 2.0),
        };
        let pedestal_transform = GlobalTransform::from_translation(Vec3::new(15.3, 0.5, -10.0));

        let origin = Vec3::new(0.0, 5.0, 0.0);
        let target = Vec3::new(14.35, -1.0, -9.6);
        let hit = pick_nearest(
            origin,
            (target - origin).normalize(),
            [
                (floor, &floor_transform, &floor_shape),
                (pedestal, &pedestal_transform, &pedestal_shape),
            ],
        )
        .unwrap();
        assert_eq!(hit.entity, pedestal);
    }

    #[test]
    fn nearest_of_several_wins() {
        let mut world = World::new();
        let near = world.spawn_empty().id();
        let far = world.spawn_empty().id();
        let near_transform = GlobalTransform::from_translation(Vec3::new(0.0, 0.0, -5.0));
        let far_transform = GlobalTransform::from_translation(Vec3::new(0.0, 0.0, -20.0));
        let volume = unit_volume();

        let hit = pick_nearest(
            Vec3::ZERO,
            Vec3::NEG_Z,
            [
                (far, &far_transform, &volume),
                (near, &near_transform, &volume),
            ],
        )
        .unwrap();
        assert_eq!(hit.entity, near);
        assert!((hit.distance - 4.0).abs() < 1e-4);
    }
}
