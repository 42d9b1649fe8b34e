use glam::Vec2;
use jail_escape::flags::CELL_DOOR_OPEN;
use jail_escape::items::{CELL_KEY, TORCH};
use jail_escape::scenes::jail::{JAIL, PLAYER_INITIAL_POS};
use jail_escape::scenes::jail_tunnel::{JAIL_TUNNEL, TUNNEL_ENTRY_POS};
use jail_escape::JailEscape;
use warden_engine::{
    Collidable, CollisionType, CommandBuffer, Door, EntityKey, Event, GameRunner, InputEvent,
};

fn runner() -> GameRunner<JailEscape> {
    GameRunner::new(JailEscape::new())
}

fn buffer() -> CommandBuffer {
    CommandBuffer::new(320.0, 240.0, 16.0)
}

fn door_key() -> EntityKey {
    EntityKey::from("jail-door")
}

#[test]
fn starts_in_the_cell() {
    let runner = runner();
    assert_eq!(runner.state().scenes.active_id(), JAIL);
    assert_eq!(runner.player().pos, PLAYER_INITIAL_POS);
    assert_eq!(runner.state().world.item_count(), 0);
}

#[test]
fn closed_door_blocks_the_player() {
    let mut runner = runner();
    runner.player_mut().pos = Vec2::new(6.0, 7.0);
    runner.push_input(InputEvent::key_down("ArrowRight"));

    let mut hit_door = false;
    for _ in 0..20 {
        runner.update();
        assert!(runner.player().pos.x + 0.5 <= 7.0 + 1e-4, "player entered the door at {:?}", runner.player().pos);
        hit_door |= runner.state().events.frame_events().iter().any(|e| {
            matches!(e, Event::SolidCollision { entity, .. } if entity.as_str() == "jail-door")
        });
    }
    assert!(hit_door);
}

#[test]
fn shadow_reports_without_blocking() {
    let mut runner = runner();
    runner.player_mut().pos = Vec2::new(4.0, 8.0);
    runner.update();

    assert_eq!(runner.player().pos, Vec2::new(4.0, 8.0));
    assert_eq!(
        runner.state().events.frame_events(),
        &[Event::OpaqueCollision { entity: "cell-shadow".into() }]
    );
}

#[test]
fn key_door_and_exit() {
    let mut runner = runner();

    // Without the key the door prompt stays hidden.
    runner.player_mut().pos = Vec2::new(6.0, 7.0);
    runner.update();
    let mut buf = buffer();
    runner.render(&mut buf);
    assert!(!buf.texts().any(|t| t == "Open door"));

    // Take the key.
    runner.player_mut().pos = Vec2::new(2.0, 6.0);
    runner.push_input(InputEvent::key_down("e"));
    runner.update();
    assert!(runner.state().world.has_item(CELL_KEY.key));
    assert!(runner.state().scenes.active().get(&"cell-key".into()).is_none());
    assert_eq!(
        runner.state().events.frame_events(),
        &[Event::ItemCollected { item: CELL_KEY.key }]
    );

    let mut buf = buffer();
    runner.render(&mut buf);
    assert!(buf.texts().any(|t| t == "Items: Cell key"));

    // Open the door while still holding the action key.
    runner.player_mut().pos = Vec2::new(6.0, 7.0);
    runner.update();
    {
        let state = runner.state();
        assert!(state.world.has_flag(CELL_DOOR_OPEN));
        let door = state.scenes.active().get(&door_key()).unwrap();
        assert!(door.behavior_as::<Door>().unwrap().is_open());
        assert_eq!(door.collision_type(), CollisionType::None);
        assert!(door.render.is_none());
        assert_eq!(
            state.events.frame_events(),
            &[Event::DoorOpened { entity: door_key() }]
        );
    }

    // Staying at the open door does not fire it again.
    runner.update();
    assert!(runner.state().events.frame_events().is_empty());

    // Walk out through the east exit.
    runner.push_input(InputEvent::key_up("e"));
    runner.player_mut().pos = Vec2::new(19.0, 7.0);
    runner.update();
    assert_eq!(runner.state().scenes.active_id(), JAIL_TUNNEL);
    assert_eq!(runner.player().pos, TUNNEL_ENTRY_POS);
    assert_eq!(
        runner.state().events.frame_events(),
        &[Event::SceneChanged { from: JAIL, to: JAIL_TUNNEL }]
    );
}

#[test]
fn exit_is_locked_until_the_door_opens() {
    let mut runner = runner();
    runner.player_mut().pos = Vec2::new(19.0, 7.0);
    runner.update();
    assert_eq!(runner.state().scenes.active_id(), JAIL);
}

#[test]
fn spikes_kill_and_restart_resets_everything() {
    let mut runner = runner();
    runner.state_mut().world.add_item(TORCH);
    runner.state_mut().world.set_flag(CELL_DOOR_OPEN);
    runner.state_mut().scenes.transition_to(JAIL_TUNNEL);
    runner.player_mut().pos = Vec2::new(12.0, 6.5);

    runner.update();
    assert!(runner.state().world.is_dead);

    // Restart is ignored until the death is processed, then only on the key.
    runner.update();
    assert!(runner.player().is_killed());
    assert_eq!(runner.state().events.frame_events(), &[Event::PlayerDied]);

    let mut buf = buffer();
    runner.render(&mut buf);
    assert!(buf.texts().any(|t| t == "You are dead"));
    assert!(buf.texts().any(|t| t == "Press R to restart"));

    runner.push_input(InputEvent::key_down("r"));
    runner.update();

    let state = runner.state();
    assert!(!state.world.is_dead);
    assert_eq!(state.world.item_count(), 0);
    assert!(!state.world.has_flag(CELL_DOOR_OPEN));
    assert_eq!(state.scenes.active_id(), JAIL);
    assert!(state.scenes.active().get(&"cell-key".into()).is_some());
    assert_eq!(
        state.scenes.active().get(&door_key()).unwrap().collision_type(),
        CollisionType::Solid
    );
    assert_eq!(state.events.frame_events(), &[Event::Restarted]);
    assert_eq!(runner.player().pos, PLAYER_INITIAL_POS);
    assert!(!runner.player().is_killed());
}
