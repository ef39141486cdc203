use optgroup::console::{self, ConsoleOptions};
use optgroup::core::Selection;
use optgroup::core::definition::GroupDefinition;
use serde_json::Value;

const SYMPTOMS: &str = r#"
title = "Which symptoms do you have?"

[[options]]
kind = "plain"
title = "None"

[[options]]
kind = "multiple_choice"
title = "Some"
choices = [
  { title = "Fever", icon = "thermometer" },
  { title = "Cough" },
  { title = "Headache" },
]

[[options]]
kind = "plain"
title = "Rather not say"

[initial_selection]
kind = "single"
option = 2
"#;

fn run_script(script: &str) -> (Selection, Vec<Value>) {
    let model = GroupDefinition::from_toml_str(SYMPTOMS)
        .unwrap()
        .into_model()
        .unwrap();
    let mut out = Vec::new();
    let selection = console::run(model, script.as_bytes(), &mut out, ConsoleOptions::default())
        .unwrap();
    let reports = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    (selection, reports)
}

#[test]
fn test_definition_driven_session() {
    let (selection, reports) = run_script("show\nchoice 1 2\nchoice 1 0\nchoice 1 2\n");
    assert_eq!(selection, Selection::multi(1, [0]));
    assert_eq!(
        reports[0]["selection"],
        serde_json::json!({"kind": "single", "option": 2})
    );
    assert_eq!(reports[2]["selection"]["chosen"], serde_json::json!([0, 2]));
    assert_eq!(reports.last().unwrap()["final"], serde_json::json!(true));
}

#[test]
fn test_empty_input_reports_initial_selection() {
    let (selection, reports) = run_script("");
    assert_eq!(selection, Selection::single(2));
    assert_eq!(reports.len(), 1);
}

#[test]
fn test_rejected_taps_do_not_change_selection() {
    let (selection, reports) = run_script("choice 0 0\nplain 1\nplain 7\n");
    assert_eq!(selection, Selection::single(2));
    assert!(reports[..3].iter().all(|r| r["error"].is_string()));
}

#[test]
fn test_binary_garbage_between_taps() {
    let definition = GroupDefinition::from_toml_str(SYMPTOMS).unwrap();
    let options = ConsoleOptions {
        title: definition.title.clone(),
        ..Default::default()
    };
    let model = definition.into_model().unwrap();
    let mut out = Vec::new();
    let input: &[u8] = b"plain 0\n\xff\xfe bogus\noptions\nchoice 1 1\n";
    let selection = console::run(model, input, &mut out, options).unwrap();
    assert_eq!(selection, Selection::multi(1, [1]));

    let reports: Vec<Value> = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(reports.len(), 5);
    assert!(reports[1]["error"].is_string());
    assert_eq!(
        reports[2]["title"],
        serde_json::json!("Which symptoms do you have?")
    );
    assert_eq!(reports[4]["final"], serde_json::json!(true));
}
