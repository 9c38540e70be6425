//! Tests for the script globals surface and evaluation harness.

use super::*;
use crate::animation::AnimationMode;

#[test]
fn evaluation_starts_from_defaults() {
    let evaluated = evaluate(|globals| -> SettingsResult<()> {
        assert_eq!(*globals.settings(), SettingsStore::new());
        Ok(())
    })
    .unwrap();
    assert_eq!(evaluated.settings, SettingsStore::new());
}

#[test]
fn evaluations_do_not_share_state() {
    let first = evaluate(|globals| {
        globals.set_circular_segments(7.0)?;
        globals.set_animation_mode("ping-pong")
    })
    .unwrap();
    assert_eq!(first.settings.circular_segments(), 7);

    let second = evaluate(|globals| globals.resolve_segments(5.0)).unwrap();
    assert_eq!(second.output, 36);
    assert_eq!(second.settings.animation().mode(), AnimationMode::Loop);
}

#[test]
fn evaluate_in_resets_reused_store() {
    let mut store = SettingsStore::new();
    store.set_circular_segments(3);
    store.set_animation_fps(12.0).unwrap();

    let segments = evaluate_in(&mut store, |globals| globals.resolve_segments(100.0)).unwrap();
    assert_eq!(segments, 632);
    assert_eq!(store, SettingsStore::new());
}

#[test]
fn script_error_halts_evaluation() {
    let mut reached = false;
    let result = evaluate(|globals| {
        globals.set_min_circular_angle(0.0)?;
        reached = true;
        Ok::<_, SettingsError>(())
    });
    assert!(matches!(
        result,
        Err(SettingsError::InvalidParameter { parameter: "angle", .. })
    ));
    assert!(!reached);
}

#[test]
fn circular_segments_accepts_whole_numbers_only() {
    let mut store = SettingsStore::new();
    evaluate_in(&mut store, |globals| {
        for bad in [-1.0, 7.5, f64::NAN, f64::INFINITY, 1.0e12] {
            let err = globals.set_circular_segments(bad).unwrap_err();
            assert!(matches!(
                err,
                SettingsError::InvalidParameter { parameter: "segments", .. }
            ));
        }
        assert_eq!(globals.settings().circular_segments(), 0);

        globals.set_circular_segments(7.0)?;
        globals.set_circular_segments(0.0)?;
        assert!(!globals.settings().is_override_active());
        Ok::<_, SettingsError>(())
    })
    .unwrap();
}

#[test]
fn unknown_animation_mode_is_rejected() {
    let mut store = SettingsStore::new();
    evaluate_in(&mut store, |globals| {
        globals.set_animation_mode("ping-pong")?;
        let before = *globals.settings();

        let err = globals.set_animation_mode("bounce").unwrap_err();
        assert!(matches!(
            err,
            SettingsError::InvalidParameter { parameter: "mode", .. }
        ));
        assert_eq!(globals.settings().animation().mode(), AnimationMode::PingPong);
        assert_eq!(*globals.settings(), before);
        Ok::<_, SettingsError>(())
    })
    .unwrap();
    assert_eq!(store.animation().mode(), AnimationMode::PingPong);

    let result = evaluate(|globals| globals.set_animation_mode("bounce"));
    assert!(matches!(
        result,
        Err(SettingsError::InvalidParameter { parameter: "mode", .. })
    ));
}

#[test]
fn dispatch_applies_calls_in_order() {
    let calls: Vec<GlobalCall> = serde_json::from_str(
        r#"[
            {"call": "setMinCircularAngle", "arg": 5},
            {"call": "setMinCircularEdgeLength", "arg": 0.5},
            {"call": "setCircularSegments", "arg": 12},
            {"call": "setAnimationDuration", "arg": 2},
            {"call": "setAnimationFPS", "arg": 24},
            {"call": "setAnimationMode", "arg": "ping-pong"},
            {"call": "setCircularSegments", "arg": 0}
        ]"#,
    )
    .unwrap();

    let evaluated = evaluate(|globals| {
        for call in &calls {
            globals.dispatch(call)?;
        }
        Ok::<_, SettingsError>(())
    })
    .unwrap();

    let settings = evaluated.settings;
    assert_eq!(settings.min_circular_angle(), 5.0);
    assert_eq!(settings.min_circular_edge_length(), 0.5);
    assert_eq!(settings.circular_segments(), 0);
    assert_eq!(settings.animation().frame_count(), 48);
    assert_eq!(settings.animation().mode(), AnimationMode::PingPong);
}

#[test]
fn dispatch_reset_keeps_animation() {
    let evaluated = evaluate(|globals| {
        globals.dispatch(&GlobalCall::SetCircularSegments(9.0))?;
        globals.dispatch(&GlobalCall::SetAnimationFps(60.0))?;
        globals.dispatch(&GlobalCall::ResetToCircularDefaults)
    })
    .unwrap();
    assert!(evaluated.settings.circular().is_default());
    assert_eq!(evaluated.settings.animation().fps(), 60.0);
}

#[test]
fn unknown_call_name_fails_to_parse() {
    let result: Result<GlobalCall, _> =
        serde_json::from_str(r#"{"call": "setCircularFoo", "arg": 1}"#);
    assert!(result.is_err());
}

#[test]
fn call_names_match_global_names() {
    let calls = [
        GlobalCall::ResetToCircularDefaults,
        GlobalCall::SetAnimationDuration(1.0),
        GlobalCall::SetAnimationFps(1.0),
        GlobalCall::SetAnimationMode("loop".to_string()),
        GlobalCall::SetCircularSegments(1.0),
        GlobalCall::SetMinCircularAngle(1.0),
        GlobalCall::SetMinCircularEdgeLength(1.0),
    ];
    for call in &calls {
        let json = serde_json::to_value(call).unwrap();
        assert_eq!(json["call"], call.name());
        assert!(GLOBAL_NAMES.contains(&call.name()));
    }
}

#[test]
fn library_code_uses_explicit_store() {
    fn fine_detail(store: &mut SettingsStore) -> SettingsResult<()> {
        store.set_min_circular_edge_length(0.1)
    }

    let evaluated = evaluate(|globals| {
        fine_detail(globals.settings_mut())?;
        globals.resolve_segments(10.0)
    })
    .unwrap();
    assert_eq!(evaluated.output, 632);
}
