//! Tests for the mode controller driving a recording LED driver.

mod common;

use common::{N, at, controller_with, lit_pixels, red};
use myrtio_ring_composer::{
    BrightnessLevel, Command, LightState, Mode, NamedColor, RenderAction, color::OFF,
};

fn red_level_3() -> LightState {
    LightState::new()
        .with_color(NamedColor::Red)
        .with_brightness(BrightnessLevel::new(3).unwrap())
}

#[test]
fn boot_draws_initial_state_once() {
    let controller = controller_with(LightState::default());

    let frames = &controller.renderer().driver().frames;
    assert_eq!(frames.len(), 1);
    assert_eq!(controller.renderer().pixels(), &[NamedColor::Yellow.rgb(); N]);
    assert_eq!(controller.renderer().brightness(), BrightnessLevel::new(3).unwrap());
}

#[test]
fn runstart_scenario_moves_single_red_pixel() {
    let mut controller = controller_with(red_level_3());

    controller.handle_command(at(1_000), Command::StartChase);

    controller.tick(at(1_100), None);
    let pixels = controller.renderer().pixels();
    assert_eq!(pixels[0], red());
    assert!(pixels[1..].iter().all(|pixel| *pixel == OFF));
    assert!(matches!(
        controller.state().mode,
        Mode::Chasing { index: 1, .. }
    ));

    controller.tick(at(1_200), None);
    let pixels = controller.renderer().pixels();
    assert_eq!(pixels[1], red());
    assert_eq!(pixels[0], OFF);
}

#[test]
fn chase_lights_exactly_one_pixel_per_frame_and_wraps() {
    let mut controller = controller_with(red_level_3());
    controller.handle_command(at(0), Command::StartChase);

    for i in 0..(2 * N) {
        controller.tick(at((i as u64 + 1) * 100), None);
        let frame = controller.renderer().driver().last_frame().unwrap();
        assert_eq!(lit_pixels(frame), [i % N]);
    }
}

#[test]
fn chase_does_not_redraw_between_periods() {
    let mut controller = controller_with(red_level_3());
    controller.handle_command(at(0), Command::StartChase);
    let frames_before = controller.renderer().driver().frames.len();

    for ms in [10, 50, 99] {
        assert_eq!(controller.tick(at(ms), None), RenderAction::Idle);
    }

    assert_eq!(controller.renderer().driver().frames.len(), frames_before);
}

#[test]
fn stop_chase_restores_solid_ring() {
    let mut controller = controller_with(red_level_3());
    controller.handle_command(at(0), Command::StartChase);
    controller.tick(at(100), None);

    controller.handle_command(at(150), Command::StopChase);

    assert_eq!(controller.state().mode, Mode::Static);
    assert_eq!(controller.renderer().pixels(), &[red(); N]);
}

#[test]
fn pulse_updates_renderer_brightness() {
    let mut controller = controller_with(red_level_3());
    controller.handle_command(at(0), Command::StartPulse);

    controller.tick(at(500), None);
    assert_eq!(controller.renderer().brightness(), BrightnessLevel::new(3).unwrap());
    assert_eq!(controller.state().brightness, BrightnessLevel::new(4).unwrap());

    controller.tick(at(1_000), None);
    assert_eq!(controller.renderer().brightness(), BrightnessLevel::new(4).unwrap());
}

#[test]
fn color_off_blanks_the_ring() {
    let mut controller = controller_with(red_level_3());
    controller.handle_command(at(0), Command::SetColor(NamedColor::Off));

    let frame = controller.renderer().driver().last_frame().unwrap();
    assert!(lit_pixels(frame).is_empty());
}
