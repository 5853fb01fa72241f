//! End-to-end tests for `bundle-banner apply` and `render`
//!
//! Each test builds a fresh "has-banner" app, runs the binary against its standalone
//! bundle and checks where the banner landed.

use predicates::prelude::*;
use std::fs;

mod common;
use common::assertions::{assert_banner_spliced, assert_parts_in_order};
use common::fixtures::{self, BUNDLE_PARTS};
use common::get_bin;

const DEFAULT_BANNER: &str = "/*!\n * fizz-buzz v1.0.0\n *\n * FizzBuzz as a service\n *\n * Copyright (c) John Doe. MIT license.\n */\n";

/// Default banner.txt rendered against the alternate metadata
const DEFAULT_BANNER_ALT_PKG: &str =
    "/*!\n * Alternate World v9.87.654\n *\n *\n *\n * Copyright (c) .  license.\n */\n";

#[test]
fn test_apply_uses_default_banner_file() {
    let app = fixtures::create_has_banner_app().expect("Failed to create test fixture");
    let original = app.read_bundle();

    get_bin()
        .arg("apply")
        .arg(&app.bundle)
        .arg("--project-root")
        .arg(&app.root)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());

    let bundle = app.read_bundle();
    assert_banner_spliced(&bundle, DEFAULT_BANNER, &original);

    let mut parts = vec![("banner", "/*!\n * fizz-buzz v1.0.0")];
    parts.extend_from_slice(&BUNDLE_PARTS);
    assert_parts_in_order(&bundle, &parts);
}

#[test]
fn test_apply_uses_alternate_banner_file() {
    let app = fixtures::create_has_banner_app().expect("Failed to create test fixture");
    let original = app.read_bundle();

    get_bin()
        .arg("apply")
        .arg(&app.bundle)
        .args(["--file", "alt-banner.txt"])
        .arg("--project-root")
        .arg(&app.root)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());

    let bundle = app.read_bundle();
    assert_banner_spliced(
        &bundle,
        "/*!\n * ALTERNATE BANNER\n * fizz-buzz v1.0.0\n */\n",
        &original,
    );
    assert!(!bundle.contains("FizzBuzz as a service"));
}

#[test]
fn test_apply_uses_alternate_package_file() {
    let app = fixtures::create_has_banner_app().expect("Failed to create test fixture");
    let original = app.read_bundle();

    get_bin()
        .arg("apply")
        .arg(&app.bundle)
        .args(["--file", "alt-banner.txt", "--pkg", "alt-package.json"])
        .arg("--project-root")
        .arg(&app.root)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let bundle = app.read_bundle();
    assert_banner_spliced(
        &bundle,
        "/*!\n * ALTERNATE BANNER\n * Alternate World v9.87.654\n */\n",
        &original,
    );
}

#[test]
fn test_apply_alternate_package_file_keeps_default_banner() {
    let app = fixtures::create_has_banner_app().expect("Failed to create test fixture");
    let original = app.read_bundle();

    get_bin()
        .arg("apply")
        .arg(&app.bundle)
        .args(["--pkg", "alt-package.json"])
        .arg("--project-root")
        .arg(&app.root)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());

    let bundle = app.read_bundle();
    assert_banner_spliced(&bundle, DEFAULT_BANNER_ALT_PKG, &original);
    assert!(!bundle.contains("fizz-buzz"));
}

#[test]
fn test_apply_package_file_in_other_directory_keeps_default_banner() {
    let app = fixtures::create_has_banner_app().expect("Failed to create test fixture");
    let original = app.read_bundle();
    fs::create_dir(app.path("meta")).unwrap();
    fs::write(app.path("meta/package.json"), fixtures::ALT_PACKAGE_JSON).unwrap();

    get_bin()
        .arg("apply")
        .arg(&app.bundle)
        .args(["--pkg", "meta/package.json"])
        .arg("--project-root")
        .arg(&app.root)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());

    assert_banner_spliced(&app.read_bundle(), DEFAULT_BANNER_ALT_PKG, &original);
}

#[test]
fn test_apply_ignores_byte_order_marks() {
    let app = fixtures::create_has_banner_app().expect("Failed to create test fixture");
    let original = app.read_bundle();
    fs::write(app.path("package.json"), format!("\u{feff}{}", fixtures::PACKAGE_JSON)).unwrap();
    fs::write(app.path("banner.txt"), format!("\u{feff}{}", fixtures::BANNER_TXT)).unwrap();

    get_bin()
        .arg("apply")
        .arg(&app.bundle)
        .arg("--project-root")
        .arg(&app.root)
        .assert()
        .success();

    assert_banner_spliced(&app.read_bundle(), DEFAULT_BANNER, &original);
}

#[test]
fn test_apply_inline_template_overrides_banner_files() {
    let app = fixtures::create_has_banner_app().expect("Failed to create test fixture");
    let original = app.read_bundle();

    get_bin()
        .arg("apply")
        .arg(&app.bundle)
        .args([
            "--file",
            "alt-banner.txt",
            "--template",
            "This package was written by <%= pkg.author.name %>",
        ])
        .arg("--project-root")
        .arg(&app.root)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let bundle = app.read_bundle();
    assert_banner_spliced(
        &bundle,
        "/*!\n * This package was written by John Doe\n */\n",
        &original,
    );
    assert_parts_in_order(&bundle, &BUNDLE_PARTS);
}

#[test]
fn test_apply_stdin_to_stdout() {
    let app = fixtures::create_has_banner_app().expect("Failed to create test fixture");
    let original = fixtures::standalone_bundle();

    let output = get_bin()
        .args(["apply", "-", "--comment-style", "line", "--template"])
        .arg("<%= pkg.name %> v<%= pkg.version %>")
        .arg("--project-root")
        .arg(&app.root)
        .write_stdin(original.clone())
        .output()
        .expect("Failed to run binary");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_banner_spliced(&stdout, "// fizz-buzz v1.0.0\n", &original);

    // Nothing on disk changes
    assert_eq!(app.read_bundle(), original);
}

#[test]
fn test_apply_to_output_file_leaves_input_untouched() {
    let app = fixtures::create_has_banner_app().expect("Failed to create test fixture");
    let original = app.read_bundle();
    let out = app.path("dist/bundle.banner.js");

    get_bin()
        .arg("apply")
        .arg(&app.bundle)
        .arg("-o")
        .arg(&out)
        .arg("--project-root")
        .arg(&app.root)
        .assert()
        .success();

    assert_eq!(app.read_bundle(), original);
    let spliced = fs::read_to_string(&out).unwrap();
    assert_banner_spliced(&spliced, DEFAULT_BANNER, &original);
}

#[test]
fn test_apply_without_any_banner_leaves_bundle_unchanged() {
    let app = fixtures::create_app_without_banner().expect("Failed to create test fixture");
    let original = app.read_bundle();

    get_bin()
        .arg("apply")
        .arg(&app.bundle)
        .arg("--project-root")
        .arg(&app.root)
        .assert()
        .success()
        .stderr(predicate::str::is_empty());

    assert_eq!(app.read_bundle(), original);
}

#[test]
fn test_apply_reads_project_config_file() {
    let app = fixtures::create_has_banner_app().expect("Failed to create test fixture");
    fs::write(
        app.path(".bundle-banner.toml"),
        "pkg = \"alt-package.json\"\ncomment-style = \"line\"\n",
    )
    .unwrap();

    get_bin()
        .arg("apply")
        .arg(&app.bundle)
        .args(["--file", "alt-banner.txt"])
        .arg("--project-root")
        .arg(&app.root)
        .assert()
        .success();

    assert!(app
        .read_bundle()
        .starts_with("// ALTERNATE BANNER\n// Alternate World v9.87.654\n(function(f)"));
}

#[test]
fn test_apply_missing_explicit_file_fails_without_writing() {
    let app = fixtures::create_has_banner_app().expect("Failed to create test fixture");
    let original = app.read_bundle();

    get_bin()
        .arg("apply")
        .arg(&app.bundle)
        .args(["--file", "missing-banner.txt"])
        .arg("--project-root")
        .arg(&app.root)
        .assert()
        .code(66)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("missing-banner.txt"));

    assert_eq!(app.read_bundle(), original);
}

#[test]
fn test_apply_missing_package_file_fails() {
    let app = fixtures::create_has_banner_app().expect("Failed to create test fixture");

    get_bin()
        .arg("apply")
        .arg(&app.bundle)
        .args(["--pkg", "nope.json"])
        .arg("--project-root")
        .arg(&app.root)
        .assert()
        .code(66)
        .stderr(predicate::str::contains("nope.json"));
}

#[test]
fn test_apply_malformed_template_fails() {
    let app = fixtures::create_has_banner_app().expect("Failed to create test fixture");
    let original = app.read_bundle();

    get_bin()
        .arg("apply")
        .arg(&app.bundle)
        .args(["--template", "<%= pkg.name"])
        .arg("--project-root")
        .arg(&app.root)
        .assert()
        .code(65)
        .stderr(predicate::str::contains("unclosed"));

    assert_eq!(app.read_bundle(), original);
}

#[test]
fn test_apply_unknown_variable_fails() {
    let app = fixtures::create_has_banner_app().expect("Failed to create test fixture");

    get_bin()
        .arg("apply")
        .arg(&app.bundle)
        .args(["--template", "<%= author.name %>"])
        .arg("--project-root")
        .arg(&app.root)
        .assert()
        .code(65)
        .stderr(predicate::str::contains("author"))
        .stderr(predicate::str::contains("pkg"));
}

#[test]
fn test_apply_invalid_package_json_fails() {
    let app = fixtures::create_has_banner_app().expect("Failed to create test fixture");
    fs::write(app.path("broken.json"), "{ \"name\": ").unwrap();

    get_bin()
        .arg("apply")
        .arg(&app.bundle)
        .args(["--pkg", "broken.json"])
        .arg("--project-root")
        .arg(&app.root)
        .assert()
        .code(65)
        .stderr(predicate::str::contains("broken.json"));
}

#[test]
fn test_apply_invalid_config_file_fails() {
    let app = fixtures::create_has_banner_app().expect("Failed to create test fixture");
    fs::write(app.path(".bundle-banner.toml"), "banner = \"x\"\n").unwrap();

    get_bin()
        .arg("apply")
        .arg(&app.bundle)
        .arg("--project-root")
        .arg(&app.root)
        .assert()
        .code(78)
        .stderr(predicate::str::contains(".bundle-banner.toml"));
}

#[test]
fn test_render_prints_inline_template() {
    let app = fixtures::create_has_banner_app().expect("Failed to create test fixture");

    get_bin()
        .arg("render")
        .args([
            "--template",
            "This package was written by <%= pkg.author.name %>",
        ])
        .arg("--project-root")
        .arg(&app.root)
        .assert()
        .success()
        .stdout("/*!\n * This package was written by John Doe\n */\n");
}

#[test]
fn test_render_honours_source_date_epoch() {
    let app = fixtures::create_has_banner_app().expect("Failed to create test fixture");

    get_bin()
        .env("SOURCE_DATE_EPOCH", "1704067200")
        .arg("render")
        .args(["--comment-style", "hash", "--template"])
        .arg("(c) <%= now.year %> <%= pkg.name %>, built <%= now.date %>")
        .arg("--project-root")
        .arg(&app.root)
        .assert()
        .success()
        .stdout("# (c) 2024 fizz-buzz, built 2024-01-01\n");
}

#[test]
fn test_render_finds_package_file_in_ancestor() {
    let app = fixtures::create_has_banner_app().expect("Failed to create test fixture");

    // dist/ has no package.json of its own
    get_bin()
        .arg("render")
        .args(["--template", "<%= pkg.name %>"])
        .arg("--project-root")
        .arg(app.path("dist"))
        .assert()
        .success()
        .stdout("/*!\n * fizz-buzz\n */\n");
}
