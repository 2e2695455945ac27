// Exercises the `fengshui` binary end to end: listings, lookups, export, and
// catalog selection through --catalog and FENGSHUI_CATALOG.

mod support;

use anyhow::Result;
use serde_json::{Value, json};
use support::{fengshui_command, run_command, stdout_lines, write_json};
use tempfile::TempDir;

fn custom_document() -> Value {
    json!({
        "schema_version": "fengshui_catalog_v1",
        "categories": [{
            "key": "study",
            "items": [{
                "id": "studyLamp",
                "labelKey": "custom.studyLamp.label",
                "adviceKey": "custom.studyLamp.advice",
                "score": 2
            }]
        }]
    })
}

#[test]
fn categories_prints_keys_in_order() -> Result<()> {
    let mut cmd = fengshui_command();
    cmd.arg("categories");
    let output = run_command(cmd)?;
    assert_eq!(
        stdout_lines(&output),
        [
            "door",
            "entryway",
            "livingRoom",
            "bedroom",
            "study",
            "kitchen",
            "diningRoom",
            "bathroom",
            "overall",
        ]
    );
    Ok(())
}

#[test]
fn list_prints_tab_separated_items() -> Result<()> {
    let mut cmd = fengshui_command();
    cmd.args(["list", "bathroom"]);
    let lines = stdout_lines(&run_command(cmd)?);
    assert_eq!(lines.len(), 4);
    assert_eq!(
        lines[2],
        "toiletFaceDoor\t-3\tfengShuiItems.bathroom.toiletFaceDoor.label"
    );

    let mut all = fengshui_command();
    all.arg("list");
    assert_eq!(stdout_lines(&run_command(all)?).len(), 58);
    Ok(())
}

#[test]
fn list_unknown_category_fails() {
    let output = fengshui_command()
        .args(["list", "garage"])
        .output()
        .expect("run fengshui");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("category not found: garage"), "{stderr}");
}

#[test]
fn show_prints_item_with_category() -> Result<()> {
    let mut cmd = fengshui_command();
    cmd.args(["show", "doorSeeMirror"]);
    let output = run_command(cmd)?;
    let value: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["category"], json!("door"));
    assert_eq!(value["item"]["score"], json!(-2));
    assert_eq!(
        value["item"]["adviceKey"],
        json!("fengShuiItems.door.doorSeeMirror.advice")
    );

    let missing = fengshui_command()
        .args(["show", "doesNotExist"])
        .output()?;
    assert_eq!(missing.status.code(), Some(1));
    Ok(())
}

#[test]
fn export_then_validate_round_trips() -> Result<()> {
    let dir = TempDir::new()?;
    let mut export = fengshui_command();
    export.arg("export");
    let output = run_command(export)?;
    let path = dir.path().join("export.json");
    std::fs::write(&path, &output.stdout)?;

    let mut validate = fengshui_command();
    validate.arg("validate").arg(&path);
    let lines = stdout_lines(&run_command(validate)?);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with("ok (9 categories, 58 items)"), "{lines:?}");
    Ok(())
}

#[test]
fn catalog_flag_and_env_select_a_document() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("custom.json");
    write_json(&path, &custom_document())?;

    let mut flag = fengshui_command();
    flag.arg("--catalog").arg(&path).arg("categories");
    assert_eq!(stdout_lines(&run_command(flag)?), ["study"]);

    let mut env = fengshui_command();
    env.env("FENGSHUI_CATALOG", &path).args(["list", "study"]);
    assert_eq!(
        stdout_lines(&run_command(env)?),
        ["studyLamp\t2\tcustom.studyLamp.label"]
    );
    Ok(())
}

#[test]
fn catalog_flag_overrides_environment() -> Result<()> {
    let dir = TempDir::new()?;
    let flag_path = dir.path().join("flag.json");
    write_json(&flag_path, &custom_document())?;

    let mut env_document = custom_document();
    env_document["categories"][0]["key"] = json!("kitchen");
    env_document["categories"][0]["items"][0]["id"] = json!("kitchenLamp");
    let env_path = dir.path().join("env.json");
    write_json(&env_path, &env_document)?;

    let mut cmd = fengshui_command();
    cmd.env("FENGSHUI_CATALOG", &env_path)
        .arg("--catalog")
        .arg(&flag_path)
        .arg("categories");
    assert_eq!(stdout_lines(&run_command(cmd)?), ["study"]);
    Ok(())
}

#[test]
fn empty_environment_value_uses_builtin_catalog() -> Result<()> {
    let mut cmd = fengshui_command();
    cmd.env("FENGSHUI_CATALOG", "").arg("categories");
    let lines = stdout_lines(&run_command(cmd)?);
    assert_eq!(lines.len(), 9);
    assert_eq!(lines.first().map(String::as_str), Some("door"));
    assert_eq!(lines.last().map(String::as_str), Some("overall"));
    Ok(())
}

#[test]
fn validate_rejects_duplicate_ids() -> Result<()> {
    let dir = TempDir::new()?;
    let mut doc = custom_document();
    let item = doc["categories"][0]["items"][0].clone();
    doc["categories"][0]["items"]
        .as_array_mut()
        .expect("items array")
        .push(item);
    let path = dir.path().join("dup.json");
    write_json(&path, &doc)?;

    let output = fengshui_command().arg("validate").arg(&path).output()?;
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("duplicate item id studyLamp"), "{stderr}");
    Ok(())
}

#[test]
fn bad_usage_exits_nonzero() -> Result<()> {
    for args in [vec![], vec!["frobnicate"], vec!["show"], vec!["--bogus", "list"]] {
        let output = fengshui_command().args(&args).output()?;
        assert_eq!(output.status.code(), Some(1), "args {args:?}");
    }
    Ok(())
}
