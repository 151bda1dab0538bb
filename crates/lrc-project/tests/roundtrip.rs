use lrc_core::GridSpacing;
use lrc_project::{MethodDef, Scenario, load, load_json, load_yaml, save_json, save_yaml};
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("lrcscope-{}-{}", std::process::id(), name))
}

#[test]
fn yaml_roundtrip() {
    let mut scenario = Scenario::default();
    scenario.name = "Roundtrip".to_string();
    scenario.step.method = MethodDef::Rk4;
    scenario.resonance.resistance_ohm = 0.25;

    let path = temp_path("roundtrip.yaml");
    save_yaml(&path, &scenario).expect("save yaml");
    let loaded = load_yaml(&path).expect("load yaml");
    std::fs::remove_file(&path).ok();

    assert_eq!(scenario, loaded);
}

#[test]
fn json_roundtrip() {
    let scenario = Scenario::default();
    let path = temp_path("roundtrip.json");
    save_json(&path, &scenario).expect("save json");
    let loaded = load(&path).expect("load by extension");
    let again = load_json(&path).expect("load json");
    std::fs::remove_file(&path).ok();

    assert_eq!(scenario, loaded);
    assert_eq!(loaded, again);
}

#[test]
fn partial_yaml_fills_defaults() {
    let yaml = r#"
name: Partial
sweep:
  resistances_ohm: [1.0]
  frequency:
    start: 0.01
    end: 100.0
    points: 200
    spacing: logarithmic
resonance:
  capacitance_init_f: 2.5
"#;
    let path = temp_path("partial.yaml");
    std::fs::write(&path, yaml).unwrap();
    let scenario = load_yaml(&path).expect("partial scenario loads");
    std::fs::remove_file(&path).ok();

    assert_eq!(scenario.name, "Partial");
    assert_eq!(scenario.sweep.resistances_ohm, vec![1.0]);
    assert_eq!(scenario.sweep.frequency.points, 200);
    assert_eq!(scenario.sweep.frequency.spacing, GridSpacing::Logarithmic);
    assert_eq!(scenario.sweep.inductance_h, 1.0);
    assert_eq!(scenario.resonance.capacitance_init_f, 2.5);
    assert_eq!(scenario.resonance.resistance_ohm, 0.1);
    assert_eq!(scenario.step, Scenario::default().step);
    assert_eq!(scenario.am, Scenario::default().am);
}

#[test]
fn invalid_yaml_is_rejected_on_load() {
    let yaml = "step:\n  capacitance_f: -1.0\n";
    let path = temp_path("invalid.yaml");
    std::fs::write(&path, yaml).unwrap();
    let result = load_yaml(&path);
    std::fs::remove_file(&path).ok();

    let err = result.expect_err("negative capacitance must be rejected");
    assert!(err.to_string().contains("step.capacitance_f"));
}
