use echoreport::cli::commands::SubmitArgs;
use echoreport::cli::submit::{handle_submit, load_submission};
use echoreport::cli::AppContext;
use echoreport::config::EchoConfig;
use echoreport::errors::EchoError;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const COMPLETE_YAML: &str = "\
patient:
  mrn: ANON-1001
  dob: 14/07/1961
scan:
  indication: Pre-op assessment
  quality: good
  views:
    plax: true
    psax: true
    a4c: true
ventricles:
  lv_size: normal
  lvidd: '4.9'
  lv_function: normal
  rv_size: normal
  tapse: '21'
  septum_shape: normal
valves:
  aortic: calcified
  mitral: normal
  tricuspid: normal
other:
  aortic_root: normal
  ivc: normal
  pericardial_fluid: none
  pleural_effusion: Not Present
conclusion:
  clinical_conclusion: Calcified aortic valve, otherwise normal study.
  requires_level2: true
  reporter_name: J. Trainee
";

fn context(dir: &TempDir) -> AppContext {
    AppContext {
        config: EchoConfig::default(),
        db_path: dir.path().join("echo_reports.db"),
        quiet: true,
    }
}

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_yaml_submission() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "scan.yaml", COMPLETE_YAML);
    let report = load_submission(&path).unwrap();

    assert_eq!(report.patient.mrn.as_deref(), Some("ANON-1001"));
    assert_eq!(report.valves.aortic.as_deref(), Some("calcified"));
    assert!(report.scan.views.a4c);
    assert!(!report.scan.views.subx);
    assert!(report.conclusion.requires_level2);
    assert!(!report.conclusion.physician_informed);
}

#[test]
fn test_load_json_submission() {
    let dir = TempDir::new().unwrap();
    let yaml_report = load_submission(&write(&dir, "scan.yaml", COMPLETE_YAML)).unwrap();
    let json = serde_json::to_string(&yaml_report).unwrap();
    let json_report = load_submission(&write(&dir, "scan.json", &json)).unwrap();
    assert_eq!(json_report, yaml_report);
}

#[test]
fn test_load_missing_submission() {
    let dir = TempDir::new().unwrap();
    let result = load_submission(&dir.path().join("nope.yaml"));
    assert!(matches!(result, Err(EchoError::NotFound(_))));
}

#[test]
fn test_submit_saves_every_file() {
    let dir = TempDir::new().unwrap();
    let ctx = context(&dir);
    let a = write(&dir, "a.yaml", COMPLETE_YAML);
    let b = write(&dir, "b.yaml", COMPLETE_YAML);

    handle_submit(&ctx, SubmitArgs {
        files: vec![a.display().to_string(), b.display().to_string()],
        force: false,
    })
    .unwrap();

    assert_eq!(ctx.open_store().unwrap().count().unwrap(), 2);
}

#[test]
fn test_submit_continues_after_a_failure() {
    let dir = TempDir::new().unwrap();
    let ctx = context(&dir);
    let broken = write(&dir, "broken.yaml", &COMPLETE_YAML.replace("  lv_size: normal\n", ""));
    let good = write(&dir, "good.yaml", COMPLETE_YAML);

    let result = handle_submit(&ctx, SubmitArgs {
        files: vec![broken.display().to_string(), good.display().to_string()],
        force: false,
    });

    assert!(matches!(result, Err(EchoError::Validation(_))));
    assert_eq!(ctx.open_store().unwrap().count().unwrap(), 1);
}

#[test]
fn test_force_saves_out_of_form_values_but_not_missing_ones() {
    let dir = TempDir::new().unwrap();
    let ctx = context(&dir);
    let odd = write(&dir, "odd.yaml", &COMPLETE_YAML.replace("ivc: normal", "ivc: plethoric"));
    let missing = write(&dir, "missing.yaml", &COMPLETE_YAML.replace("  lv_size: normal\n", ""));

    handle_submit(&ctx, SubmitArgs { files: vec![odd.display().to_string()], force: true }).unwrap();

    let result = handle_submit(&ctx, SubmitArgs { files: vec![missing.display().to_string()], force: true });
    assert!(matches!(result, Err(EchoError::Insert(_))));

    let store = ctx.open_store().unwrap();
    assert_eq!(store.count().unwrap(), 1);
    let saved = store.list(1, 0).unwrap().remove(0);
    assert_eq!(saved.details.other.ivc.as_deref(), Some("plethoric"));
}

#[test]
fn test_misspelled_field_is_rejected_not_dropped() {
    let dir = TempDir::new().unwrap();
    let ctx = context(&dir);
    let typo = write(&dir, "typo.yaml", &COMPLETE_YAML.replace("  rv_size: normal\n", "  rv_size: normal\n  rv_fuction: impaired\n"));

    assert!(matches!(load_submission(&typo), Err(EchoError::Yaml(_))));

    let result = handle_submit(&ctx, SubmitArgs { files: vec![typo.display().to_string()], force: true });
    assert!(matches!(result, Err(EchoError::Yaml(_))));
    assert_eq!(ctx.open_store().unwrap().count().unwrap(), 0);
}

#[test]
fn test_misspelled_section_is_rejected() {
    let dir = TempDir::new().unwrap();
    let typo = write(&dir, "typo.yaml", &COMPLETE_YAML.replace("conclusion:\n", "conclusions:\n"));
    assert!(matches!(load_submission(&typo), Err(EchoError::Yaml(_))));

    let json = write(&dir, "typo.json", r#"{"scan": {"quality": "good"}, "ventricle": {"lv_size": "small"}}"#);
    assert!(matches!(load_submission(&json), Err(EchoError::Json(_))));
}
