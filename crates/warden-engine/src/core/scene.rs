use glam::Vec2;

use crate::api::state::Frame;
use crate::api::types::{EntityKey, SceneId};
use crate::components::entity::{Entity, Renderable};
use crate::core::events::Event;
use crate::renderer::traits::Renderer;

/// A room: ordered entity storage plus the player's entry point.
///
/// Entity order is collision-resolution order, so removal keeps it stable.
pub struct Scene {
    id: SceneId,
    spawn: Vec2,
    entities: Vec<Entity>,
}

impl Scene {
    pub fn new(id: SceneId, spawn: Vec2) -> Self {
        Self {
            id,
            spawn,
            entities: Vec::with_capacity(64),
        }
    }

    pub fn id(&self) -> SceneId {
        self.id
    }

    /// Where the player is placed on entering this scene.
    pub fn spawn(&self) -> Vec2 {
        self.spawn
    }

    /// Add an entity to the scene. Panics on a duplicate key.
    pub fn spawn_entity(&mut self, entity: Entity) {
        assert!(
            self.get(&entity.key).is_none(),
            "duplicate entity key `{}` in scene `{}`",
            entity.key,
            self.id
        );
        self.entities.push(entity);
    }

    /// Builder form of [`Scene::spawn_entity`].
    pub fn with(mut self, entity: Entity) -> Self {
        self.spawn_entity(entity);
        self
    }

    /// Remove an entity by key. Returns the removed entity if found.
    pub fn despawn(&mut self, key: &EntityKey) -> Option<Entity> {
        let idx = self.entities.iter().position(|e| &e.key == key)?;
        Some(self.entities.remove(idx))
    }

    /// Get a reference to an entity by key.
    pub fn get(&self, key: &EntityKey) -> Option<&Entity> {
        self.entities.iter().find(|e| &e.key == key)
    }

    /// Get a mutable reference to an entity by key.
    pub fn get_mut(&mut self, key: &EntityKey) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| &e.key == key)
    }

    /// Iterate over all entities.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Iterate over all entities mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut()
    }

    /// Number of entities in the scene.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Update every entity in order, then drop the ones that removed themselves.
    pub fn update(&mut self, frame: &mut Frame<'_>) {
        for entity in self.entities.iter_mut() {
            entity.update(frame);
        }
        self.entities.retain(|e| {
            if e.is_removed() {
                log::debug!("scene `{}`: entity `{}` removed", self.id, e.key);
            }
            !e.is_removed()
        });
    }

    pub fn render(&self, renderer: &mut dyn Renderer) {
        for entity in &self.entities {
            entity.render(renderer);
        }
    }
}

/// Owns every scene of a session and tracks the active one.
///
/// The active scene only changes through [`SceneManager::transition_to`],
/// either called directly or via [`Frame::request_transition`] during update.
pub struct SceneManager {
    scenes: Vec<Scene>,
    active: usize,
}

impl SceneManager {
    /// The first scene becomes active. Panics on an empty list or duplicate ids.
    pub fn new(scenes: Vec<Scene>) -> Self {
        assert!(!scenes.is_empty(), "scene manager needs at least one scene");
        for (i, scene) in scenes.iter().enumerate() {
            assert!(
                scenes[..i].iter().all(|s| s.id != scene.id),
                "duplicate scene id `{}`",
                scene.id
            );
        }
        Self { scenes, active: 0 }
    }

    pub fn active(&self) -> &Scene {
        &self.scenes[self.active]
    }

    pub fn active_mut(&mut self) -> &mut Scene {
        &mut self.scenes[self.active]
    }

    pub fn active_id(&self) -> SceneId {
        self.active().id
    }

    pub fn get(&self, id: SceneId) -> Option<&Scene> {
        self.scenes.iter().find(|s| s.id == id)
    }

    pub fn scene_ids(&self) -> impl Iterator<Item = SceneId> + '_ {
        self.scenes.iter().map(|s| s.id)
    }

    /// Make `to` the active scene. Returns the previously active id.
    /// Panics on an unknown id.
    pub fn transition_to(&mut self, to: SceneId) -> SceneId {
        let from = self.active_id();
        let Some(idx) = self.scenes.iter().position(|s| s.id == to) else {
            panic!("unknown scene `{to}`");
        };
        self.active = idx;
        log::info!("scene transition `{}` -> `{}`", from, to);
        from
    }

    /// Update the active scene, then apply a transition requested during the
    /// pass. Returns the new scene id if one was applied.
    pub fn update(&mut self, frame: &mut Frame<'_>) -> Option<SceneId> {
        self.active_mut().update(frame);
        let to = frame.take_transition()?;
        let from = self.transition_to(to);
        frame.events.emit(Event::SceneChanged { from, to });
        Some(to)
    }

    pub fn render(&self, renderer: &mut dyn Renderer) {
        self.active().render(renderer);
    }
}
