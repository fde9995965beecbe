use crate::engine::assets::gallery_manifest::ProjectDefinition;
use crate::engine::scene::labels::PendingLabel;
use crate::engine::scene::registry::{Exhibit, ProjectRegistry};
use bevy::prelude::*;
use constants::palette::{
    CAPTION_COLOR, LABEL_COLOR, PEDESTAL_BASE_COLOR, PEDESTAL_PLAQUE_COLOR,
};
use constants::scene_settings::{
    BACKING_PANEL_OFFSET, BACKING_PANEL_SIZE, CAPTION_OFFSETS, CAPTION_SIZE, EXHIBIT_TITLE_OFFSET,
    EXHIBIT_TITLE_SCALE, IMAGE_PANEL_OFFSET, IMAGE_PANEL_SIZE, PEDESTAL_BASE_OFFSET,
    PEDESTAL_BASE_SIZE, PEDESTAL_PLAQUE_OFFSET, PEDESTAL_PLAQUE_SIZE, PEDESTAL_PLAQUE_TILT,
};
use std::f32::consts::{FRAC_PI_2, PI};

/// What a pickable scene node means to the navigation controller, resolved
/// once at construction instead of re-derived from ancestor names at click
/// time. Both variants carry the exhibit ROOT entity, so pedestal clicks
/// resolve to the same exhibit as panel clicks.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneNodeTag {
    Exhibit(Entity),
    Pedestal(Entity),
}

impl SceneNodeTag {
    pub fn exhibit_root(&self) -> Entity {
        match self {
            SceneNodeTag::Exhibit(root) | SceneNodeTag::Pedestal(root) => *root,
        }
    }
}

/// Pickable volume in the entity's local space, positioned by its global
/// transform, used for click ray intersection.
#[derive(Component, Clone, Copy, Debug)]
pub enum PickVolume {
    /// Axis-aligned box.
    Cuboid { size: Vec3 },
    /// Finite cone, apex up, matching the floor mesh exactly so geometry
    /// above the cone surface never occludes clicks behind it.
    Cone { radius: f32, height: f32 },
}

/// Marker on every exhibit group's root entity; its translation is the
/// exhibit position the navigation controller steers towards.
#[derive(Component)]
pub struct ExhibitRoot;

/// Spawn one exhibit group from its manifest definition and register it.
/// Title and caption labels attach later, once the font sheet resolves.
pub fn spawn_exhibit(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    registry: &mut ProjectRegistry,
    project: &ProjectDefinition,
    wood_texture: Handle<Image>,
    sand_texture: Handle<Image>,
    image_texture: Option<Handle<Image>>,
) -> Entity {
    let rotation = if project.mirrored {
        Quat::from_rotation_y(PI)
    } else {
        Quat::IDENTITY
    };

    let root = commands
        .spawn((
            Transform::from_translation(project.position.to_vec3()).with_rotation(rotation),
            Visibility::default(),
            ExhibitRoot,
        ))
        .id();

    let wood = materials.add(StandardMaterial {
        base_color_texture: Some(wood_texture),
        unlit: true,
        ..default()
    });

    commands.entity(root).with_children(|parent| {
        // Backing panel.
        parent.spawn((
            Mesh3d(meshes.add(Cuboid::from_size(BACKING_PANEL_SIZE))),
            MeshMaterial3d(wood.clone()),
            Transform::from_translation(BACKING_PANEL_OFFSET),
            PickVolume::Cuboid {
                size: BACKING_PANEL_SIZE,
            },
            SceneNodeTag::Exhibit(root),
        ));

        // Preview image panel, when the project ships one.
        if let Some(image) = image_texture {
            parent.spawn((
                Mesh3d(meshes.add(Cuboid::from_size(IMAGE_PANEL_SIZE))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color_texture: Some(image),
                    unlit: true,
                    ..default()
                })),
                Transform::from_translation(IMAGE_PANEL_OFFSET),
                PickVolume::Cuboid {
                    size: IMAGE_PANEL_SIZE,
                },
                SceneNodeTag::Exhibit(root),
            ));
        }

        // Title label, generated once the font arrives.
        parent.spawn((
            Transform::from_translation(EXHIBIT_TITLE_OFFSET)
                .with_rotation(Quat::from_rotation_y(FRAC_PI_2 + PI))
                .with_scale(Vec3::splat(EXHIBIT_TITLE_SCALE)),
            Visibility::default(),
            PendingLabel {
                text: project.name.clone(),
                size: project.title_size,
                color: LABEL_COLOR,
            },
        ));

        // Pedestal sub-group. Its meshes carry the Pedestal tag so clicks
        // resolve to the parent exhibit, never the pedestal's own offsets.
        parent
            .spawn((Transform::IDENTITY, Visibility::default()))
            .with_children(|pedestal| {
                pedestal.spawn((
                    Mesh3d(meshes.add(Cuboid::from_size(PEDESTAL_BASE_SIZE))),
                    MeshMaterial3d(materials.add(StandardMaterial {
                        base_color: PEDESTAL_BASE_COLOR,
                        base_color_texture: Some(sand_texture),
                        unlit: true,
                        ..default()
                    })),
                    Transform::from_translation(PEDESTAL_BASE_OFFSET),
                    PickVolume::Cuboid {
                        size: PEDESTAL_BASE_SIZE,
                    },
                    SceneNodeTag::Pedestal(root),
                ));

                pedestal.spawn((
                    Mesh3d(meshes.add(Cuboid::from_size(PEDESTAL_PLAQUE_SIZE))),
                    MeshMaterial3d(materials.add(StandardMaterial {
                        base_color: PEDESTAL_PLAQUE_COLOR,
                        unlit: true,
                        ..default()
                    })),
                    Transform::from_translation(PEDESTAL_PLAQUE_OFFSET).with_rotation(
                        Quat::from_euler(EulerRot::XYZ, FRAC_PI_2, 0.0, FRAC_PI_2)
                            * Quat::from_rotation_x(PEDESTAL_PLAQUE_TILT),
                    ),
                    PickVolume::Cuboid {
                        size: PEDESTAL_PLAQUE_SIZE,
                    },
                    SceneNodeTag::Pedestal(root),
                ));

                for (caption, offset) in project.captions.iter().zip(CAPTION_OFFSETS) {
                    pedestal.spawn((
                        Transform::from_translation(offset)
                            .with_rotation(Quat::from_rotation_y(FRAC_PI_2 + PI)),
                        Visibility::default(),
                        PendingLabel {
                            text: caption.clone(),
                            size: CAPTION_SIZE,
                            color: CAPTION_COLOR,
                        },
                    ));
                }
            });
    });

    registry.register(Exhibit {
        display_name: project.name.clone(),
        root,
        target_url: project.url.clone(),
    });

    root
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::gallery_manifest::PositionData;

    fn project(name: &str, x: f32, mirrored: bool) -> ProjectDefinition {
        ProjectDefinition {
            name: name.to_string(),
            title_size: 1.0,
            image: Some("images/example.png".to_string()),
            url: format!("https://{name}.example"),
            captions: vec!["line one".into(), "line two".into()],
            position: PositionData { x, y: 6.0, z: -10.0 },
            mirrored,
        }
    }

    fn spawn_in_world(world: &mut World, projects: &[ProjectDefinition]) {
        world.init_resource::<ProjectRegistry>();
        world.insert_resource(Assets::<Mesh>::default());
        world.insert_resource(Assets::<StandardMaterial>::default());

        world.resource_scope(|world, mut registry: Mut<ProjectRegistry>| {
            world.resource_scope(|world, mut meshes: Mut<Assets<Mesh>>| {
                world.resource_scope(|world, mut materials: Mut<Assets<StandardMaterial>>| {
                    let mut queue = bevy::ecs::world::CommandQueue::default();
                    let mut commands = Commands::new(&mut queue, world);
                    for project in projects {
                        spawn_exhibit(
                            &mut commands,
                            &mut meshes,
                            &mut materials,
                            &mut registry,
                            project,
                            Handle::default(),
                            Handle::default(),
                            Some(Handle::default()),
                        );
                    }
                    queue.apply(world);
                });
            });
        });
    }

    #[test]
    fn registry_has_one_entry_per_exhibit() {
        let mut world = World::new();
        spawn_in_world(
            &mut world,
            &[project("alpha", 15.0, false), project("beta", -10.0, true)],
        );

        let mut root_query = world.query_filtered::<Entity, With<ExhibitRoot>>();
        let roots: Vec<Entity> = root_query.iter(&world).collect();
        assert_eq!(roots.len(), 2);

        let registry = world.resource::<ProjectRegistry>();
        assert_eq!(registry.len(), 2);
        for root in roots {
            assert!(registry.by_root(root).is_some());
        }
    }

    #[test]
    fn pedestal_nodes_tag_the_exhibit_root() {
        let mut world = World::new();
        spawn_in_world(&mut world, &[project("gamma", 15.0, false)]);

        let mut root_query = world.query_filtered::<Entity, With<ExhibitRoot>>();
        let root = root_query.single(&world).unwrap();

        let mut tag_query = world.query::<&SceneNodeTag>();
        let tags: Vec<SceneNodeTag> = tag_query.iter(&world).copied().collect();
        // Backing panel + image panel + pedestal base + plaque.
        assert_eq!(tags.len(), 4);
        assert!(tags.iter().all(|tag| tag.exhibit_root() == root));
        assert!(
            tags.iter()
                .any(|tag| matches!(tag, SceneNodeTag::Pedestal(_)))
        );
    }

    #[test]
    fn mirrored_exhibits_face_the_other_way() {
        let mut world = World::new();
        spawn_in_world(&mut world, &[project("delta", -10.0, true)]);

        let mut transform_query = world.query_filtered::<&Transform, With<ExhibitRoot>>();
        let transform = *transform_query.single(&world).unwrap();
        let forward = transform * Vec3::X;
        assert!((forward.x - (transform.translation.x - 1.0)).abs() < 1e-5);
    }
}
