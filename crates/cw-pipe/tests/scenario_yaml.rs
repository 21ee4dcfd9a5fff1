//! Scenario tables loaded from YAML.

use cw_pipe::{Scenario, district_heating_scenarios, evaluate_all};
use cw_solver::Iterations;

const TABLE: &str = r#"
- name: "Feeder, new steel, 60C"
  diameter: 0.1
  roughness: 0.00005
  velocity: 1.5
  density: 983.0
  viscosity: 0.000467
- name: "Main, old steel, 80C"
  diameter: 0.2
  roughness: 0.0002
  velocity: 2.0
  density: 971.0
  viscosity: 0.000355
"#;

#[test]
fn yaml_table_matches_builtin_feeder() {
    let scenarios: Vec<Scenario> = serde_yaml::from_str(TABLE).unwrap();
    assert_eq!(scenarios.len(), 2);

    let builtin = &district_heating_scenarios()[1];
    let loaded = &scenarios[0];
    assert!((loaded.diameter.value - builtin.diameter.value).abs() < 1e-15);
    assert!((loaded.roughness.value - builtin.roughness.value).abs() < 1e-15);

    let results = evaluate_all(&scenarios, Iterations::DEFAULT).unwrap();
    let expected = evaluate_all(std::slice::from_ref(builtin), Iterations::DEFAULT).unwrap();
    let rel = (results[0].friction_factor - expected[0].friction_factor).abs()
        / expected[0].friction_factor;
    assert!(rel < 1e-12);
}

#[test]
fn yaml_round_trip_of_builtin_table() {
    let builtin = district_heating_scenarios();
    let text = serde_yaml::to_string(&builtin).unwrap();
    let back: Vec<Scenario> = serde_yaml::from_str(&text).unwrap();
    assert_eq!(back.len(), builtin.len());
    assert_eq!(back[3].name, builtin[3].name);
}

#[test]
fn non_physical_scenario_is_rejected() {
    let table = r#"
- name: "zero diameter"
  diameter: 0.0
  roughness: 0.00005
  velocity: 1.0
  density: 983.0
  viscosity: 0.000467
"#;
    let scenarios: Vec<Scenario> = serde_yaml::from_str(table).unwrap();
    assert!(evaluate_all(&scenarios, Iterations::DEFAULT).is_err());
}
