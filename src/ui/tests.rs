//! UI domain: tests for touch pointer edges.

use bevy::ecs::system::{RunSystemOnce, SystemState};
use bevy::prelude::*;

use super::touch_controls::{
    ButtonEdge, PointerPhase, TouchButton, apply_edge, paint_touch_buttons, pointer_edge,
    route_pointer,
};
use crate::controller::{Axis, ButtonLatch, ControlButton};

/// Feed pointer phases through the same path the button observers use.
fn run_pointer(world: &mut World, button: ControlButton, phase: PointerPhase) {
    let mut state = SystemState::<(ResMut<ButtonLatch>, Query<&mut TouchButton>)>::new(world);
    let (mut latch, mut touches) = state.get_mut(world);
    route_pointer(button, phase, &mut latch, &mut touches);
    state.apply(world);
}

fn touch_world() -> World {
    let mut world = World::new();
    world.init_resource::<ButtonLatch>();
    for button in ControlButton::ALL {
        world.spawn(TouchButton::new(button));
    }
    world
}

#[test]
fn test_held_button_press_and_release() {
    assert_eq!(
        pointer_edge(ControlButton::Left, PointerPhase::Down),
        Some(ButtonEdge::Press)
    );
    assert_eq!(
        pointer_edge(ControlButton::Left, PointerPhase::Up),
        Some(ButtonEdge::Release)
    );
    assert_eq!(pointer_edge(ControlButton::Left, PointerPhase::Click), None);
}

#[test]
fn test_held_button_releases_on_pointer_exit() {
    assert_eq!(
        pointer_edge(ControlButton::Right, PointerPhase::Exit),
        Some(ButtonEdge::Release)
    );
}

#[test]
fn test_pulse_button_fires_on_click_without_hover() {
    // A lifted finger leaves nothing hovered; the click still lands
    assert_eq!(pointer_edge(ControlButton::Jump, PointerPhase::Down), None);
    assert_eq!(pointer_edge(ControlButton::Jump, PointerPhase::Up), None);
    assert_eq!(pointer_edge(ControlButton::Jump, PointerPhase::Exit), None);
    assert_eq!(
        pointer_edge(ControlButton::Jump, PointerPhase::Click),
        Some(ButtonEdge::Click)
    );
}

#[test]
fn test_tap_fires_each_pulse_button() {
    let mut world = touch_world();
    for button in [
        ControlButton::Jump,
        ControlButton::PrimaryAttack,
        ControlButton::SecondaryAttack,
    ] {
        run_pointer(&mut world, button, PointerPhase::Down);
        run_pointer(&mut world, button, PointerPhase::Up);
        run_pointer(&mut world, button, PointerPhase::Click);
        run_pointer(&mut world, button, PointerPhase::Exit);
    }

    let snapshot = world.resource::<ButtonLatch>().snapshot(false);
    assert!(snapshot.jump);
    assert!(snapshot.primary_attack);
    assert!(snapshot.secondary_attack);
}

#[test]
fn test_second_finger_tap_keeps_direction_held() {
    let mut world = touch_world();

    run_pointer(&mut world, ControlButton::Left, PointerPhase::Down);
    run_pointer(&mut world, ControlButton::Jump, PointerPhase::Down);
    run_pointer(&mut world, ControlButton::Jump, PointerPhase::Up);
    run_pointer(&mut world, ControlButton::Jump, PointerPhase::Click);

    let snapshot = world.resource::<ButtonLatch>().snapshot(false);
    assert_eq!(snapshot.axis, Axis::Left);
    assert!(snapshot.jump);

    run_pointer(&mut world, ControlButton::Left, PointerPhase::Up);
    assert_eq!(
        world.resource::<ButtonLatch>().snapshot(false).axis,
        Axis::Neutral
    );
}

#[test]
fn test_pressed_look_follows_pointer() {
    let mut world = touch_world();
    let left = world
        .query::<(Entity, &TouchButton)>()
        .iter(&world)
        .find(|(_, touch)| touch.button == ControlButton::Left)
        .map(|(entity, _)| entity)
        .expect("left button spawned");
    world
        .entity_mut(left)
        .insert(BackgroundColor(Color::NONE));

    run_pointer(&mut world, ControlButton::Left, PointerPhase::Down);
    world
        .run_system_once(paint_touch_buttons)
        .expect("paint system runs");
    let pressed = world.get::<BackgroundColor>(left).map(|color| color.0);

    run_pointer(&mut world, ControlButton::Left, PointerPhase::Exit);
    world
        .run_system_once(paint_touch_buttons)
        .expect("paint system runs");
    let released = world.get::<BackgroundColor>(left).map(|color| color.0);

    assert_ne!(pressed, Some(Color::NONE));
    assert_ne!(pressed, released);
}

#[test]
fn test_edges_reach_latch() {
    let mut latch = ButtonLatch::default();

    apply_edge(&mut latch, ControlButton::Right, ButtonEdge::Press);
    apply_edge(&mut latch, ControlButton::SecondaryAttack, ButtonEdge::Click);
    let snapshot = latch.snapshot(false);
    assert_eq!(snapshot.axis, Axis::Right);
    assert!(snapshot.secondary_attack);

    apply_edge(&mut latch, ControlButton::Right, ButtonEdge::Release);
    assert_eq!(latch.snapshot(false).axis, Axis::Neutral);
}
