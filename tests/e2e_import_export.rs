mod common;

use common::cli::{SgWorkspace, add, list_ids, run_ok, run_sg};
use serde_json::Value;
use std::fs;

#[test]
fn e2e_export_after_edits_contains_final_grid() {
    let workspace = SgWorkspace::initialized();
    let a = add(&workspace, "A", "https://a.example");
    let b = add(&workspace, "B", "https://b.example");

    run_ok(&workspace, ["move", "0", "1"], "move");
    run_ok(&workspace, ["delete", &a], "delete");
    run_ok(&workspace, ["export"], "export");

    let text = fs::read_to_string(workspace.root.join("bookmarks.json")).expect("read export");
    let doc: Value = serde_json::from_str(&text).expect("export is JSON");
    let items = doc.as_array().expect("export is an array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], b.as_str());
    assert_eq!(items[0]["title"], "B");
    assert!(items[0].get("position").is_none());
}

#[test]
fn e2e_export_is_pretty_printed() {
    let workspace = SgWorkspace::initialized();
    add(&workspace, "A", "https://a.example");

    let output = run_ok(&workspace, ["export", "--stdout"], "export_stdout");
    assert!(output.stdout.starts_with("[\n  {"));
}

#[test]
fn e2e_export_to_directory() {
    let workspace = SgWorkspace::initialized();
    add(&workspace, "A", "https://a.example");
    let out_dir = workspace.root.join("out");
    fs::create_dir(&out_dir).expect("create out dir");

    let out_arg = out_dir.to_string_lossy().into_owned();
    run_ok(&workspace, ["export", "-o", &out_arg], "export_dir");
    assert!(out_dir.join("bookmarks.json").is_file());
}

#[test]
fn e2e_import_replaces_whole_grid() {
    let source = SgWorkspace::initialized();
    let x = add(&source, "X", "https://x.example");
    let y = add(&source, "Y", "https://y.example");
    run_ok(&source, ["export"], "export");

    let target = SgWorkspace::initialized();
    add(&target, "Old", "https://old.example");

    let file = source.root.join("bookmarks.json");
    let file_arg = file.to_string_lossy().into_owned();
    let output = run_ok(&target, ["import", &file_arg], "import");
    assert!(output.stdout.contains("Imported 2 bookmark(s)"));
    assert_eq!(list_ids(&target), vec![x, y]);
}

#[test]
fn e2e_import_wrong_shape_leaves_grid() {
    let workspace = SgWorkspace::initialized();
    let b = add(&workspace, "B", "https://b.example");
    let before = fs::read_to_string(workspace.slot_path()).expect("read slot");

    let bad = workspace.root.join("bad.json");
    fs::write(&bad, r#""not an array""#).expect("write bad file");
    let bad_arg = bad.to_string_lossy().into_owned();

    let output = run_sg(&workspace, ["import", &bad_arg], "import_bad");
    assert!(!output.status.success());
    assert_eq!(list_ids(&workspace), vec![b]);
    assert_eq!(
        fs::read_to_string(workspace.slot_path()).expect("read slot"),
        before
    );
    assert!(!workspace.data_dir.join(".history").exists());
}

#[test]
fn e2e_import_malformed_json_fails() {
    let workspace = SgWorkspace::initialized();
    add(&workspace, "A", "https://a.example");

    let bad = workspace.root.join("broken.json");
    fs::write(&bad, "[{").expect("write broken file");
    let bad_arg = bad.to_string_lossy().into_owned();

    let output = run_sg(&workspace, ["import", &bad_arg], "import_broken");
    assert!(!output.status.success());
    assert_eq!(list_ids(&workspace).len(), 1);
}

#[test]
fn e2e_import_missing_file_fails() {
    let workspace = SgWorkspace::initialized();
    let output = run_sg(&workspace, ["import", "nope.json"], "import_missing");
    assert!(!output.status.success());
    assert!(output.stderr.contains("nope.json"));
}

#[test]
fn e2e_import_keeps_backup_in_history() {
    let workspace = SgWorkspace::initialized();
    let original = add(&workspace, "Keep", "https://keep.example");

    let doc = workspace.root.join("new.json");
    fs::write(
        &doc,
        r#"[{"id":"bm-new","title":"New","url":"https://new.example","color":"red"}]"#,
    )
    .expect("write import file");
    let doc_arg = doc.to_string_lossy().into_owned();

    run_ok(&workspace, ["import", &doc_arg], "import");
    assert_eq!(list_ids(&workspace), vec!["bm-new".to_string()]);

    let history = run_ok(&workspace, ["history", "--json"], "history").json();
    let backups = history.as_array().expect("history is an array");
    assert_eq!(backups.len(), 1);

    // Restoring the backup brings the old grid back
    let backup = backups[0]["path"].as_str().expect("backup path").to_string();
    run_ok(&workspace, ["import", "--no-backup", &backup], "restore");
    assert_eq!(list_ids(&workspace), vec![original]);
}

#[test]
fn e2e_import_no_backup_skips_history() {
    let workspace = SgWorkspace::initialized();
    add(&workspace, "A", "https://a.example");

    let doc = workspace.root.join("empty.json");
    fs::write(&doc, "[]").expect("write import file");
    let doc_arg = doc.to_string_lossy().into_owned();

    run_ok(&workspace, ["import", "--no-backup", &doc_arg], "import");
    assert!(list_ids(&workspace).is_empty());

    let history = run_ok(&workspace, ["history"], "history");
    assert!(history.stdout.contains("No import backups."));
}

#[test]
fn e2e_import_json_reports_count_and_backup() {
    let workspace = SgWorkspace::initialized();
    add(&workspace, "Old", "https://old.example");

    let doc = workspace.root.join("two.json");
    fs::write(
        &doc,
        r#"[{"id":"bm-1","title":"One","url":"https://1.example","color":"red"},
           {"id":"bm-2","title":"Two","url":"https://2.example","color":"blue"}]"#,
    )
    .expect("write import file");
    let doc_arg = doc.to_string_lossy().into_owned();

    let report = run_ok(&workspace, ["import", &doc_arg, "--json"], "import").json();
    assert_eq!(report["action"], "import");
    assert_eq!(report["count"], 2);
    assert!(report["path"].as_str().is_some_and(|p| p.contains(".history")));
    assert_eq!(list_ids(&workspace), vec!["bm-1".to_string(), "bm-2".to_string()]);
}
