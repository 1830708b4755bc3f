//! Sprites: tests for clip selection and playback.

use super::AnimationController;
use super::animation::AnimationClip;
use crate::movement::{AnimationParam, AnimationSink, AnimatorParams};

fn params(grounded: bool, rolling: bool, attacking: bool, vx: f32, vy: f32) -> AnimatorParams {
    let mut params = AnimatorParams::default();
    params.set_float(AnimationParam::HorizontalSpeed, vx);
    params.set_float(AnimationParam::VerticalSpeed, vy);
    params.set_bool(AnimationParam::IsGrounded, grounded);
    params.set_bool(AnimationParam::IsRolling, rolling);
    params.set_bool(AnimationParam::IsAttacking, attacking);
    params
}

#[test]
fn test_clip_priority() {
    assert_eq!(
        AnimationClip::from_params(&params(true, true, true, 5.0, 0.0)),
        AnimationClip::Roll
    );
    assert_eq!(
        AnimationClip::from_params(&params(false, false, true, 5.0, 3.0)),
        AnimationClip::Attack
    );
    assert_eq!(
        AnimationClip::from_params(&params(false, false, false, 5.0, 3.0)),
        AnimationClip::Jump
    );
    assert_eq!(
        AnimationClip::from_params(&params(false, false, false, 5.0, -3.0)),
        AnimationClip::Fall
    );
    assert_eq!(
        AnimationClip::from_params(&params(true, false, false, 5.0, 0.0)),
        AnimationClip::Run
    );
    assert_eq!(
        AnimationClip::from_params(&params(true, false, false, 0.0, 0.0)),
        AnimationClip::Idle
    );
}

#[test]
fn test_empty_params_fall() {
    // Nothing published yet reads as airborne
    assert_eq!(
        AnimationClip::from_params(&AnimatorParams::default()),
        AnimationClip::Fall
    );
}

#[test]
fn test_set_clip_only_resets_on_change() {
    let mut controller = AnimationController::default();
    controller.set_clip(AnimationClip::Run);
    controller.advance(0.2);
    assert_eq!(controller.current_frame, 1);

    controller.set_clip(AnimationClip::Run);
    assert_eq!(controller.current_frame, 1);

    controller.set_clip(AnimationClip::Idle);
    assert_eq!(controller.current_frame, 0);
    assert_eq!(controller.clip, AnimationClip::Idle);
}

#[test]
fn test_looping_clip_never_finishes() {
    let mut controller = AnimationController::default();
    controller.set_clip(AnimationClip::Run);
    for _ in 0..100 {
        assert!(!controller.advance(0.05).finished);
    }
    assert!(controller.current_frame < AnimationClip::Run.frame_count());
}

#[test]
fn test_roll_clip_cues_then_finishes_once() {
    let mut controller = AnimationController::default();
    controller.restart(AnimationClip::Roll);

    let mut cues = 0;
    let mut finishes = 0;
    let roll = AnimationClip::Roll;
    let clip_length = roll.frame_count() as f32 * roll.frame_duration();
    let mut elapsed = 0.0;
    while elapsed < clip_length * 3.0 {
        let events = controller.advance(0.01);
        cues += events.cue as u32;
        finishes += events.finished as u32;
        elapsed += 0.01;
    }

    assert_eq!(cues, 1);
    assert_eq!(finishes, 1);
    assert!(controller.finished);
    assert_eq!(controller.current_frame, AnimationClip::Roll.frame_count() - 1);
}

#[test]
fn test_large_step_still_reports_finish() {
    let mut controller = AnimationController::default();
    controller.restart(AnimationClip::Attack);
    let events = controller.advance(10.0);
    assert!(events.finished);
}

#[test]
fn test_restart_replays_finished_clip() {
    let mut controller = AnimationController::default();
    controller.restart(AnimationClip::Attack);
    controller.advance(10.0);
    assert!(controller.finished);

    controller.restart(AnimationClip::Attack);
    assert!(!controller.finished);
    assert_eq!(controller.current_frame, 0);
}
