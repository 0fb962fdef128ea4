//! Tests for the table store.

use std::fs;

use tempfile::TempDir;

use super::*;
use crate::models::{Artifact, Visitor};

fn visitor(id: &str, name: &str, species: &str, status: &str) -> Visitor {
    Visitor {
        id: id.to_string(),
        name: name.to_string(),
        species: species.to_string(),
        status: status.to_string(),
    }
}

/// Helper function to create a table inside a fresh temporary directory
fn create_test_table<R: Record>(file: &str) -> (TempDir, Table<R>) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let table = Table::new(temp_dir.path().join("tables").join(file));
    (temp_dir, table)
}

#[test]
fn test_load_creates_missing_table_with_header() {
    let (_temp_dir, table) = create_test_table::<Visitor>("visitors.csv");

    let rows = table.load().expect("Failed to load table");
    assert!(rows.is_empty());

    let contents = fs::read_to_string(table.path()).expect("Failed to read table");
    assert_eq!(contents, "id,name,species,status\r\n");
}

#[test]
fn test_load_rewrites_zero_length_table() {
    let (_temp_dir, table) = create_test_table::<Artifact>("artifacts.csv");
    fs::create_dir_all(table.path().parent().unwrap()).unwrap();
    fs::write(table.path(), "").unwrap();

    assert!(table.load().expect("Failed to load table").is_empty());
    let contents = fs::read_to_string(table.path()).unwrap();
    assert_eq!(contents, "code,description,rarity,status\r\n");
}

#[test]
fn test_ensure_is_idempotent() {
    let (_temp_dir, table) = create_test_table::<Visitor>("visitors.csv");
    table.append(&visitor("1", "Ada", "human", "active")).unwrap();

    table.ensure().unwrap();
    table.ensure().unwrap();

    assert_eq!(table.load().unwrap().len(), 1);
}

#[test]
fn test_append_then_load_preserves_order() {
    let (_temp_dir, table) = create_test_table::<Visitor>("visitors.csv");
    table.append(&visitor("1", "Ada", "human", "active")).unwrap();
    table.append(&visitor("2", "R2", "android", "retired")).unwrap();

    let rows = table.load().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].name, "Ada");
    assert_eq!(rows[1].species, "android");
}

#[test]
fn test_save_load_is_byte_stable() {
    let (_temp_dir, table) = create_test_table::<Visitor>("visitors.csv");
    table
        .save(&[
            visitor("1", "Ada, Countess", "human", "active"),
            visitor("2", "Quote \"Q\"", "Wookiee", "Active"),
            visitor("x", "", "", "deleted"),
        ])
        .unwrap();
    let before = fs::read(table.path()).unwrap();

    let rows = table.load().unwrap();
    table.save(&rows).unwrap();

    let after = fs::read(table.path()).unwrap();
    assert_eq!(before, after);
    assert_eq!(rows[0].name, "Ada, Countess");
    assert_eq!(rows[1].name, "Quote \"Q\"");
}

#[test]
fn test_missing_columns_are_filled_with_empty_strings() {
    let (_temp_dir, table) = create_test_table::<Visitor>("visitors.csv");
    fs::create_dir_all(table.path().parent().unwrap()).unwrap();
    fs::write(table.path(), "id,name,status\n4,Lee,active\n5,Kim\n").unwrap();

    let rows = table.load().unwrap();
    assert_eq!(rows[0], visitor("4", "Lee", "", "active"));
    assert_eq!(rows[1], visitor("5", "Kim", "", ""));

    table.save(&rows).unwrap();
    let contents = fs::read_to_string(table.path()).unwrap();
    assert_eq!(
        contents,
        "id,name,species,status\r\n4,Lee,,active\r\n5,Kim,,\r\n"
    );
}

#[test]
fn test_columns_matched_by_header_name() {
    let (_temp_dir, table) = create_test_table::<Artifact>("artifacts.csv");
    fs::create_dir_all(table.path().parent().unwrap()).unwrap();
    fs::write(
        table.path(),
        "status,code,rarity,description\nStored,ART1,High,Star map\n",
    )
    .unwrap();

    let rows = table.load().unwrap();
    assert_eq!(rows[0].code, "ART1");
    assert_eq!(rows[0].description, "Star map");
    assert_eq!(rows[0].rarity, "High");
    assert_eq!(rows[0].status, "Stored");
}

#[test]
fn test_append_to_reordered_header_keeps_fields_aligned() {
    let (_temp_dir, table) = create_test_table::<Visitor>("visitors.csv");
    fs::create_dir_all(table.path().parent().unwrap()).unwrap();
    fs::write(table.path(), "name,id,species,status\nAda,1,human,active\n").unwrap();

    table.append(&visitor("2", "Bo", "android", "active")).unwrap();

    let rows = table.load().unwrap();
    assert_eq!(rows[0], visitor("1", "Ada", "human", "active"));
    assert_eq!(rows[1], visitor("2", "Bo", "android", "active"));

    let contents = fs::read_to_string(table.path()).unwrap();
    assert_eq!(
        contents,
        "id,name,species,status\r\n1,Ada,human,active\r\n2,Bo,android,active\r\n"
    );
}

#[test]
fn test_append_to_header_missing_columns() {
    let (_temp_dir, table) = create_test_table::<Visitor>("visitors.csv");
    fs::create_dir_all(table.path().parent().unwrap()).unwrap();
    fs::write(table.path(), "id,name\r\n1,Ada\r\n").unwrap();

    table.append(&visitor("2", "Bo", "human", "retired")).unwrap();

    let rows = table.load().unwrap();
    assert_eq!(rows[0], visitor("1", "Ada", "", ""));
    assert_eq!(rows[1], visitor("2", "Bo", "human", "retired"));
}

#[test]
fn test_append_with_canonical_header_leaves_existing_bytes() {
    let (_temp_dir, table) = create_test_table::<Visitor>("visitors.csv");
    fs::create_dir_all(table.path().parent().unwrap()).unwrap();
    fs::write(table.path(), "id,name,species,status\r\n1,Ada,human,active\r\n").unwrap();

    table.append(&visitor("2", "Bo", "human", "active")).unwrap();

    let contents = fs::read_to_string(table.path()).unwrap();
    assert!(contents.starts_with("id,name,species,status\r\n1,Ada,human,active\r\n"));
    assert!(contents.ends_with("2,Bo,human,active\r\n"));
}

#[test]
fn test_save_overwrites_previous_rows() {
    let (_temp_dir, table) = create_test_table::<Visitor>("visitors.csv");
    table.append(&visitor("1", "Ada", "human", "active")).unwrap();
    table.append(&visitor("2", "Bo", "human", "active")).unwrap();

    let mut rows = table.load().unwrap();
    rows.retain(|v| v.id != "1");
    table.save(&rows).unwrap();

    let rows = table.load().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, "2");
}
