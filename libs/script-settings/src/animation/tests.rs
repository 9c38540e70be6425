//! Tests for animation settings and frame sequencing.

use super::*;
use approx::assert_relative_eq;

fn settings(duration: f64, fps: f64, mode: AnimationMode) -> AnimationSettings {
    AnimationSettings::new(duration, fps, mode).unwrap()
}

#[test]
fn defaults_loop_one_second_at_thirty_fps() {
    let anim = AnimationSettings::default();
    assert_eq!(anim.mode(), AnimationMode::Loop);
    assert_eq!(anim.frame_count(), 30);
}

#[test]
fn loop_sequence_covers_every_frame_once() {
    let anim = settings(2.0, 24.0, AnimationMode::Loop);
    assert_eq!(anim.frame_count(), 48);
    let frames: Vec<u32> = anim.frames().collect();
    assert_eq!(frames, (0..48).collect::<Vec<_>>());
    assert_eq!(anim.period(), 48);
}

#[test]
fn ping_pong_sequence_returns_without_repeating_ends() {
    let anim = settings(2.0, 24.0, AnimationMode::PingPong);
    let frames: Vec<u32> = anim.frames().collect();
    let expected: Vec<u32> = (0..48).chain((1..47).rev()).collect();
    assert_eq!(frames, expected);
    assert_eq!(frames.len() as u64, anim.period());
    assert_eq!(frames[47], 47);
    assert_eq!(frames[48], 46);
    assert_eq!(*frames.last().unwrap(), 1);
}

#[test]
fn ping_pong_with_single_frame() {
    let anim = settings(0.01, 1.0, AnimationMode::PingPong);
    assert_eq!(anim.frame_count(), 1);
    assert_eq!(anim.frames().collect::<Vec<_>>(), vec![0]);
    assert_eq!(anim.period(), 1);
    assert_eq!(anim.frame_at(5), 0);
}

#[test]
fn ping_pong_with_two_frames_alternates() {
    let anim = settings(2.0, 1.0, AnimationMode::PingPong);
    let steps: Vec<u32> = (0..5).map(|s| anim.frame_at(s)).collect();
    assert_eq!(steps, vec![0, 1, 0, 1, 0]);
}

#[test]
fn frame_at_repeats_the_cycle() {
    let anim = settings(0.1, 40.0, AnimationMode::PingPong);
    let cycle: Vec<u32> = anim.frames().collect();
    for step in 0..30_u64 {
        assert_eq!(anim.frame_at(step), cycle[(step % anim.period()) as usize]);
    }

    let looped = settings(0.1, 40.0, AnimationMode::Loop);
    assert_eq!(looped.frame_at(4), 0);
    assert_eq!(looped.frame_at(7), 3);
}

#[test]
fn frame_count_rounds_to_nearest() {
    assert_eq!(settings(1.0, 29.6, AnimationMode::Loop).frame_count(), 30);
    assert_eq!(settings(1.0, 29.4, AnimationMode::Loop).frame_count(), 29);
}

#[test]
fn frame_time_is_index_over_fps() {
    let anim = settings(2.0, 24.0, AnimationMode::Loop);
    assert_relative_eq!(anim.frame_time(12), 0.5);
    assert_relative_eq!(anim.frame_time(0), 0.0);
}

#[test]
fn new_rejects_non_positive_values() {
    assert!(AnimationSettings::new(0.0, 24.0, AnimationMode::Loop).is_err());
    assert!(AnimationSettings::new(1.0, -24.0, AnimationMode::Loop).is_err());
    assert!(AnimationSettings::new(f64::NAN, 24.0, AnimationMode::Loop).is_err());
    assert!(AnimationSettings::new(1.0, f64::INFINITY, AnimationMode::Loop).is_err());
}

#[test]
fn failed_setter_keeps_previous_value() {
    let mut anim = AnimationSettings::default();
    anim.set_duration(3.0).unwrap();
    assert!(anim.set_duration(-1.0).is_err());
    assert_eq!(anim.duration(), 3.0);
    assert!(anim.set_fps(0.0).is_err());
    assert_eq!(anim.fps(), DEFAULT_ANIMATION_FPS);
}

#[test]
fn mode_parses_script_names_only() {
    assert_eq!("loop".parse::<AnimationMode>().unwrap(), AnimationMode::Loop);
    assert_eq!(
        "ping-pong".parse::<AnimationMode>().unwrap(),
        AnimationMode::PingPong
    );
    for bad in ["Loop", "pingpong", "ping_pong", ""] {
        let err = bad.parse::<AnimationMode>().unwrap_err();
        assert!(matches!(
            err,
            SettingsError::InvalidParameter { parameter: "mode", .. }
        ));
    }
}

#[test]
fn serde_uses_script_names() {
    let json = serde_json::to_string(&settings(2.0, 24.0, AnimationMode::PingPong)).unwrap();
    assert!(json.contains("\"ping-pong\""));

    let parsed: AnimationSettings =
        serde_json::from_str(r#"{"duration": 2.0, "fps": 12.0}"#).unwrap();
    assert_eq!(parsed.mode(), AnimationMode::Loop);
    assert_eq!(parsed.frame_count(), 24);
}

#[test]
fn serde_rejects_invalid_snapshots() {
    let result: Result<AnimationSettings, _> =
        serde_json::from_str(r#"{"duration": 0.0, "fps": 12.0, "mode": "loop"}"#);
    assert!(result.is_err());

    let result: Result<AnimationSettings, _> =
        serde_json::from_str(r#"{"duration": 1.0, "fps": 12.0, "mode": "bounce"}"#);
    assert!(result.is_err());
}
