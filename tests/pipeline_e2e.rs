// tests/pipeline_e2e.rs
//
// Full fetch → parse → extract → write runs against canned pages.
//
use std::fs;
use std::path::Path;

use tempfile::TempDir;
use wiki_scrape::config::options::RunOptions;
use wiki_scrape::core::Fetch;
use wiki_scrape::csv::parse_rows;
use wiki_scrape::progress::{Recorder, Status};
use wiki_scrape::runner;
use wiki_scrape::Error;

const URL: &str = "https://en.wikipedia.org/wiki/Test_page";

/// Serves a fixed body, or a fixed HTTP status.
enum Canned {
    Page(&'static str),
    Status(u16),
}

impl Fetch for Canned {
    fn fetch(&self, url: &str) -> wiki_scrape::Result<Vec<u8>> {
        match self {
            Canned::Page(html) => Ok(html.as_bytes().to_vec()),
            Canned::Status(status) => Err(Error::HttpStatus { url: url.into(), status: *status }),
        }
    }
}

const PAGE: &str = r#"<!DOCTYPE html>
<html><body>
  <p>Intro text</p>
  <p>   </p>
  <h2>Background</h2>
  <div class="sticky-table-scroll">
    <table class="wikitable">
      <caption>Deaths by country</caption>
      <tr><th>Country</th><th>Deaths</th></tr>
      <tr><td>USA</td><td>1000</td></tr>
      <tr><td>France</td><td>500</td></tr>
    </table>
  </div>
</body></html>"#;

fn opts(dir: &Path) -> RunOptions {
    RunOptions::new(URL).with_out_dir(dir)
}

fn read(dir: &Path, name: &str) -> String {
    fs::read_to_string(dir.join(name)).unwrap()
}

fn csv_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<_> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|n| n.ends_with(".csv"))
        .collect();
    names.sort();
    names
}

#[test]
fn writes_paragraphs_headers_and_captioned_table() {
    let tmp = TempDir::new().unwrap();
    let mut rec = Recorder::new();

    let summary = runner::run(&opts(tmp.path()), &Canned::Page(PAGE), &mut rec).unwrap();

    assert_eq!(summary.paragraphs, 2);
    assert_eq!(summary.headers, 1);
    assert_eq!(summary.tables, 1);
    assert_eq!(summary.files_written.len(), 3);

    assert_eq!(read(tmp.path(), "paragraphs.csv"), "Index,Paragraph\n1,Intro text\n2,\n");
    assert_eq!(read(tmp.path(), "headers.csv"), "Index,Header\n1,Background\n");
    assert_eq!(
        read(tmp.path(), "Deaths_by_country.csv"),
        "Index,Country,Deaths\n1,USA,1000\n2,France,500\n"
    );
    assert_eq!(
        csv_files(tmp.path()),
        vec!["Deaths_by_country.csv", "headers.csv", "paragraphs.csv"]
    );
}

#[test]
fn status_lines_follow_pipeline_order() {
    let tmp = TempDir::new().unwrap();
    let mut rec = Recorder::new();
    runner::run(&opts(tmp.path()), &Canned::Page(PAGE), &mut rec).unwrap();

    let lines = rec.rendered();
    assert_eq!(lines.first().unwrap(), &format!("[SUCCESS] Page fetched successfully: {URL}"));
    assert_eq!(lines[1], "[INFO] Found 2 paragraphs.");
    assert_eq!(lines[2], "[INFO] Found 1 headers.");
    assert_eq!(lines[3], "[INFO] Extracted 2 rows from table: Deaths by country");
    assert!(lines[4].starts_with("[SUCCESS] Data saved to "));
    assert!(lines[4].ends_with("paragraphs.csv"));
    assert!(lines[5].ends_with("headers.csv"));
    assert_eq!(lines[6], "[INFO] Saved table 'Deaths by country' to Deaths_by_country.csv");
    assert_eq!(lines.last().unwrap(), "[INFO] Scraping complete!");
    assert_eq!(rec.files.len(), 3);
}

#[test]
fn http_404_halts_before_any_file() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("out");
    let mut rec = Recorder::new();

    let err = runner::run(&opts(&out), &Canned::Status(404), &mut rec).unwrap_err();

    assert!(err.is_fetch());
    assert!(matches!(err, Error::HttpStatus { status: 404, .. }));
    assert!(!out.exists());
    assert_eq!(rec.rendered(), vec!["[ERROR] Failed to fetch page. Status Code: 404"]);
}

#[test]
fn page_without_marked_tables_still_writes_text_files() {
    let tmp = TempDir::new().unwrap();
    let mut rec = Recorder::new();
    let page = "<html><body><h1>Title</h1><p>Only text.</p>\
                <table class=\"wikitable\"><tr><th>A</th></tr><tr><td>1</td></tr></table></body></html>";

    let summary = runner::run(&opts(tmp.path()), &Canned::Page(page), &mut rec).unwrap();

    assert_eq!(summary.tables, 0);
    assert!(rec.contains(Status::Info, "No tables found on the page."));
    assert_eq!(csv_files(tmp.path()), vec!["headers.csv", "paragraphs.csv"]);
}

#[test]
fn empty_page_warns_and_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    let mut rec = Recorder::new();

    let summary = runner::run(&opts(tmp.path()), &Canned::Page("<html></html>"), &mut rec).unwrap();

    assert!(summary.files_written.is_empty());
    assert!(csv_files(tmp.path()).is_empty());
    let warnings = rec.lines.iter().filter(|(st, _)| *st == Status::Warning).count();
    assert_eq!(warnings, 2);
    assert!(rec.contains(Status::Warning, "No data to save."));
}

#[test]
fn rerun_produces_identical_bytes() {
    let a = TempDir::new().unwrap();
    let b = TempDir::new().unwrap();
    let mut rec = Recorder::new();

    runner::run(&opts(a.path()), &Canned::Page(PAGE), &mut rec).unwrap();
    runner::run(&opts(b.path()), &Canned::Page(PAGE), &mut rec).unwrap();
    // Second run into the same directory overwrites in place.
    runner::run(&opts(a.path()), &Canned::Page(PAGE), &mut rec).unwrap();

    for name in csv_files(a.path()) {
        assert_eq!(fs::read(a.path().join(&name)).unwrap(), fs::read(b.path().join(&name)).unwrap(), "{name}");
    }
    assert_eq!(csv_files(a.path()), csv_files(b.path()));
}

#[test]
fn ragged_rows_round_trip_without_padding() {
    let tmp = TempDir::new().unwrap();
    let page = r#"<table class="sticky-table-scroll"><caption>Ragged rows</caption>
        <tr><th>A</th><th>B</th><th>C</th></tr>
        <tr><td>x, y</td></tr>
        <tr><td>1</td><td>"2"</td><td>3</td></tr>
      </table>"#;

    runner::run(&opts(tmp.path()), &Canned::Page(page), &mut Recorder::new()).unwrap();

    let rows = parse_rows(&read(tmp.path(), "Ragged_rows.csv"), ',');
    assert_eq!(
        rows,
        vec![
            vec!["Index", "A", "B", "C"],
            vec!["1", "x, y"],
            vec!["2", "1", "\"2\"", "3"],
        ]
    );
}

#[test]
fn output_directory_is_created_on_demand() {
    let tmp = TempDir::new().unwrap();
    let nested = tmp.path().join("a").join("b");

    runner::run(&opts(&nested), &Canned::Page(PAGE), &mut Recorder::new()).unwrap();

    assert!(nested.join("paragraphs.csv").is_file());
    assert!(nested.join("Deaths_by_country.csv").is_file());
}

#[test]
fn colliding_table_names_keep_the_last_table() {
    let tmp = TempDir::new().unwrap();
    let page = r#"<table class="sticky-table-scroll"><caption>Deaths by country</caption>
        <tr><th>Country</th><th>Deaths</th></tr><tr><td>USA</td><td>1000</td></tr></table>
      <table class="sticky-table-scroll"><caption>Deaths_by country</caption>
        <tr><th>Region</th><th>Deaths</th></tr><tr><td>Europe</td><td>700</td></tr></table>"#;
    let mut rec = Recorder::new();

    let summary = runner::run(&opts(tmp.path()), &Canned::Page(page), &mut rec).unwrap();

    assert_eq!(summary.tables, 2);
    let tables: Vec<_> = csv_files(tmp.path())
        .into_iter()
        .filter(|n| n != "paragraphs.csv" && n != "headers.csv")
        .collect();
    assert_eq!(tables, vec!["Deaths_by_country.csv"]);
    assert_eq!(
        read(tmp.path(), "Deaths_by_country.csv"),
        "Index,Region,Deaths\n1,Europe,700\n"
    );
    assert!(rec.contains(Status::Info, "Saved table 'Deaths_by country' to Deaths_by_country.csv"));
}

#[test]
fn custom_marker_class_selects_other_tables() {
    let tmp = TempDir::new().unwrap();
    let page = r#"<table class="wikitable"><caption>Plain</caption>
        <tr><th>A</th></tr><tr><td>1</td></tr></table>
      <table class="sticky-table-scroll"><caption>Sticky</caption>
        <tr><th>B</th></tr><tr><td>2</td></tr></table>"#;
    let opts = opts(tmp.path()).with_table_class("wikitable");

    let summary = runner::run(&opts, &Canned::Page(page), &mut Recorder::new()).unwrap();

    assert_eq!(summary.tables, 1);
    assert_eq!(read(tmp.path(), "Plain.csv"), "Index,A\n1,1\n");
    assert!(!tmp.path().join("Sticky.csv").exists());
}
