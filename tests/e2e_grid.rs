mod common;

use common::cli::{SgWorkspace, add, list_ids, run_ok, run_sg};

#[test]
fn e2e_commands_require_init() {
    let workspace = SgWorkspace::new();
    let output = run_sg(&workspace, ["list"], "list_uninitialized");
    assert!(!output.status.success());
    assert!(
        output.stderr.contains("not initialized"),
        "stderr: {}",
        output.stderr
    );
}

#[test]
fn e2e_init_twice_needs_force() {
    let workspace = SgWorkspace::initialized();
    add(&workspace, "Rust", "https://rust-lang.org");

    let again = run_sg(&workspace, ["init"], "init_again");
    assert!(!again.status.success());
    assert!(again.stderr.contains("Already initialized"));
    assert_eq!(list_ids(&workspace).len(), 1);

    run_ok(&workspace, ["init", "--force"], "init_force");
    assert!(list_ids(&workspace).is_empty());
}

#[test]
fn e2e_add_appends_in_order() {
    let workspace = SgWorkspace::initialized();
    let a = add(&workspace, "A", "https://a.example");
    let b = add(&workspace, "B", "https://b.example");
    let c = add(&workspace, "C", "https://c.example");

    assert_ne!(a, b);
    assert!(a.starts_with("bm-"));
    assert_eq!(list_ids(&workspace), vec![a, b, c]);

    let text = run_ok(&workspace, ["list"], "list_text");
    assert!(text.stdout.contains("3 bookmark(s)"));
}

#[test]
fn e2e_add_uses_default_color() {
    let workspace = SgWorkspace::initialized();
    let id = add(&workspace, "Docs", "https://docs.rs");

    let shown = run_ok(&workspace, ["show", &id, "--json"], "show");
    let row = shown.json();
    assert_eq!(row["color"], "blue");
    assert_eq!(row["position"], 0);
    assert!(row.get("description").is_none());
}

#[test]
fn e2e_edit_changes_only_given_fields() {
    let workspace = SgWorkspace::initialized();
    let id = add(&workspace, "Old", "https://old.example");

    run_ok(
        &workspace,
        ["edit", &id, "--title", "New", "--description", "note"],
        "edit",
    );
    let row = run_ok(&workspace, ["show", &id, "--json"], "show").json();
    assert_eq!(row["title"], "New");
    assert_eq!(row["url"], "https://old.example");
    assert_eq!(row["description"], "note");

    run_ok(&workspace, ["edit", &id, "--clear-description"], "clear");
    let row = run_ok(&workspace, ["show", &id, "--json"], "show").json();
    assert!(row.get("description").is_none());
}

#[test]
fn e2e_edit_unknown_id_fails() {
    let workspace = SgWorkspace::initialized();
    add(&workspace, "A", "https://a.example");

    let output = run_sg(&workspace, ["edit", "bm-missing", "--title", "x"], "edit");
    assert!(!output.status.success());
    assert!(output.stderr.contains("bm-missing"));
}

#[test]
fn e2e_delete_removes_only_match() {
    let workspace = SgWorkspace::initialized();
    let a = add(&workspace, "A", "https://a.example");
    let b = add(&workspace, "B", "https://b.example");

    run_ok(&workspace, ["delete", &a], "delete");
    assert_eq!(list_ids(&workspace), vec![b.clone()]);

    let missing = run_sg(&workspace, ["rm", &a], "delete_again");
    assert!(!missing.status.success());
    assert_eq!(list_ids(&workspace), vec![b]);
}

#[test]
fn e2e_move_reorders_grid() {
    let workspace = SgWorkspace::initialized();
    let a = add(&workspace, "A", "https://a.example");
    let b = add(&workspace, "B", "https://b.example");
    let c = add(&workspace, "C", "https://c.example");

    run_ok(&workspace, ["move", "0", "2"], "move_forward");
    assert_eq!(list_ids(&workspace), vec![b.clone(), c.clone(), a.clone()]);

    run_ok(&workspace, ["mv", "2", "0"], "move_back");
    assert_eq!(list_ids(&workspace), vec![a, b, c]);
}

#[test]
fn e2e_move_out_of_range_is_ignored() {
    let workspace = SgWorkspace::initialized();
    let a = add(&workspace, "A", "https://a.example");
    let b = add(&workspace, "B", "https://b.example");

    let output = run_ok(&workspace, ["move", "0", "5"], "move_out_of_range");
    assert!(output.stdout.contains("Nothing moved"));
    assert_eq!(list_ids(&workspace), vec![a.clone(), b.clone()]);

    let json = run_ok(&workspace, ["move", "7", "0", "--json"], "move_json").json();
    assert_eq!(json["changed"], false);
    assert_eq!(list_ids(&workspace), vec![a, b]);
}

#[test]
fn e2e_up_and_down_respect_edges() {
    let workspace = SgWorkspace::initialized();
    let a = add(&workspace, "A", "https://a.example");
    let b = add(&workspace, "B", "https://b.example");
    let c = add(&workspace, "C", "https://c.example");

    run_ok(&workspace, ["up", "0"], "up_first");
    run_ok(&workspace, ["down", "2"], "down_last");
    assert_eq!(list_ids(&workspace), vec![a.clone(), b.clone(), c.clone()]);

    run_ok(&workspace, ["up", "2"], "up");
    assert_eq!(list_ids(&workspace), vec![a.clone(), c.clone(), b.clone()]);

    run_ok(&workspace, ["down", "0"], "down");
    assert_eq!(list_ids(&workspace), vec![c, a, b]);
}

#[test]
fn e2e_search_keeps_real_positions() {
    let workspace = SgWorkspace::initialized();
    add(&workspace, "Crates", "https://crates.io");
    let docs = add(&workspace, "Docs", "https://docs.rs");

    let rows = run_ok(&workspace, ["list", "--search", "DOCS", "--json"], "search").json();
    let rows = rows.as_array().expect("array");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"], docs.as_str());
    assert_eq!(rows[0]["position"], 1);
}

#[test]
fn e2e_corrupt_slot_loads_as_empty() {
    let workspace = SgWorkspace::initialized();
    std::fs::write(workspace.slot_path(), "{ not json").expect("write slot");

    let output = run_ok(&workspace, ["list"], "list_corrupt");
    assert!(output.stdout.contains("No bookmarks found."));
}

#[test]
fn e2e_data_dir_flag() {
    let workspace = SgWorkspace::new();
    let custom = workspace.root.join("elsewhere");
    let custom_arg = custom.to_string_lossy().into_owned();

    run_ok(&workspace, ["init", "--data-dir", &custom_arg], "init_custom");
    run_ok(
        &workspace,
        ["add", "A", "https://a.example", "--data-dir", &custom_arg],
        "add_custom",
    );
    assert!(custom.join("bookmarks.json").is_file());
    assert!(!workspace.data_dir.exists());
}
