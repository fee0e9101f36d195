use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

const HEADER: &str =
    "order_id,customer_id,product_id,country,category,payment_method,quantity,unit_price,order_date";

fn write_csv(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn report_renders_the_dashboard() {
    let file = write_csv(&format!(
        "{HEADER}\n\
         1,A,P1,France,Toys,Card,2,10.0,45000\n\
         2,B,P1,France,Toys,Cash,1,5.0,45000\n"
    ));

    Command::cargo_bin("salescope")
        .unwrap()
        .arg("report")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Sales:     $25"))
        .stdout(predicate::str::contains("Total Orders:    2"))
        .stdout(predicate::str::contains("Sales by Country"))
        .stdout(predicate::str::contains("Sales by Payment Method"))
        .stdout(predicate::str::contains("France"));
}

#[test]
fn json_format_emits_series_objects() {
    let file = write_csv(&format!(
        "{HEADER}\n\
         1,A,P1,France,Toys,Card,2,10.0,45000\n"
    ));

    let output = Command::cargo_bin("salescope")
        .unwrap()
        .arg("report")
        .arg(file.path())
        .args(["--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["summary"]["total_sales"], 20);
    assert_eq!(value["sales_by_country"]["labels"][0], "France");
    assert_eq!(value["sales_by_country"]["values"][0], 20.0);
    assert_eq!(value["sales_by_month"]["ordering"], "key_ascending");
    assert_eq!(value["sales_by_category"]["ordering"], "value_descending");
}

#[test]
fn missing_dataset_names_the_load_stage() {
    Command::cargo_bin("salescope")
        .unwrap()
        .args(["report", "no/such/file.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("load stage failed"));
}

#[test]
fn missing_column_names_the_load_stage() {
    let file = write_csv("order_id,customer_id\n1,A\n");

    Command::cargo_bin("salescope")
        .unwrap()
        .arg("report")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("load stage failed"))
        .stderr(predicate::str::contains("Missing required column"));
}

#[test]
fn invalid_row_names_the_derive_stage_and_order() {
    let file = write_csv(&format!(
        "{HEADER}\n\
         7,A,P1,France,Toys,Card,-1,10.0,45000\n"
    ));

    Command::cargo_bin("salescope")
        .unwrap()
        .arg("report")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("derive stage failed"))
        .stderr(predicate::str::contains("order 7"));
}
