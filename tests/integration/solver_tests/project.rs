use std::fs;

use flyer_vlm::{load_project, save_results, Analysis, ProjectResults};
use pretty_assertions::assert_eq;

use crate::common::assert_coefficients_finite;

const PROJECT: &str = r#"
aircraft:
  uid: glider
  refs: { area: 8.0, span: 8.0, chord: 1.0, gcenter: [0.25, 0, 0], rcenter: [0.25, 0, 0] }
  wings:
    - uid: main
      symmetry: 2
      segments:
        - uid: root
          vertices:
            a: [0.0, 0.0, 0.0]
            b: [0.0, 4.0, 0.0]
            c: [1.0, 4.0, 0.0]
            d: [1.0, 0.0, 0.0]
analysis:
  auto_chordwise: 4
conditions:
  - { airspeed: 30.0, density: 1.2, alpha: 2.0 }
aero_map:
  airspeed: [40.0]
  altitude: [0.0]
  alpha: [0.0, 4.0]
"#;

#[test]
fn test_project_round_trip_through_files() {
    let dir = tempfile::tempdir().unwrap();
    let project_path = dir.path().join("glider.yaml");
    fs::write(&project_path, PROJECT).unwrap();

    let project = load_project(&project_path).unwrap();
    let states = project.flight_states().unwrap();
    assert_eq!(states.len(), 3);

    let analysis = Analysis::new(&project.aircraft, project.analysis).unwrap();
    let results = analysis.sweep(&states).unwrap();
    for result in &results {
        assert_coefficients_finite(&result.coefficients);
    }
    assert!(results[2].coefficients.c_lift > results[0].coefficients.c_lift);

    let output = dir.path().join("glider.results.json");
    save_results(
        &output,
        &ProjectResults {
            aircraft: project.aircraft.uid.clone(),
            panel_count: analysis.lattice().len(),
            results,
        },
    )
    .unwrap();

    let saved: ProjectResults =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(saved.aircraft, "glider");
    assert_eq!(saved.panel_count, analysis.lattice().len());
    assert_eq!(saved.results.len(), 3);
    assert_eq!(saved.results[2].state.alpha, 4.0);
}

#[test]
fn test_missing_project_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_project(dir.path().join("absent.json")).is_err());
}
