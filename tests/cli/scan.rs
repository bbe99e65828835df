use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{CliTest, output_text};

const RES: &str = "app/src/main/res";

fn sample_project() -> Result<CliTest> {
    let test = CliTest::new()?;
    test.write_strings(
        &format!("{RES}/values"),
        &[("greeting", "Hello"), ("farewell", "Bye")],
    )?;
    test.write_strings(&format!("{RES}/values-fr"), &[("greeting", "Bonjour")])?;
    test.write_strings(&format!("{RES}/values-de"), &[])?;
    Ok(test)
}

#[test]
fn test_json_report() -> Result<()> {
    let test = sample_project()?;

    assert_cmd_snapshot!(test.command(), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    [
      {
        "name": "farewell",
        "value": "Bye",
        "missing_locales": [
          "de",
          "fr"
        ]
      },
      {
        "name": "greeting",
        "value": "Hello",
        "missing_locales": [
          "de"
        ]
      }
    ]

    ----- stderr -----
    ✘ Checked 3 resource files across 3 locales - 2 strings missing translations
    "#);

    Ok(())
}

#[test]
fn test_markdown_report() -> Result<()> {
    let test = sample_project()?;

    assert_cmd_snapshot!(
        test.command()
            .args(["--output-format", "markdown", "--markdown-title", "Translations"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    # Translations

    | # | Name       | Default Value | Missing Locales |
    | - | ---------- | ------------- | --------------- |
    | 1 | `farewell` | Bye           | de, fr          |
    | 2 | `greeting` | Hello         | de              |

    _Generated using missing-translations._


    ----- stderr -----
    ✘ Checked 3 resource files across 3 locales - 2 strings missing translations
    "
    );

    Ok(())
}

#[test]
fn test_fully_translated_project() -> Result<()> {
    let test = CliTest::new()?;
    test.write_strings("res/values", &[("title", "Title")])?;
    test.write_strings("res/values-fr", &[("title", "Titre")])?;

    let output = test.command().arg("--strict").output()?;
    let (stdout, stderr) = output_text(&output)?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout, "[]\n");
    assert!(stderr.contains("no missing translations"));

    Ok(())
}

#[test]
fn test_strict_fails_on_missing() -> Result<()> {
    let test = sample_project()?;

    let output = test.command().arg("--strict").output()?;
    assert_eq!(output.status.code(), Some(1));

    Ok(())
}

#[test]
fn test_project_dir_flag() -> Result<()> {
    let test = CliTest::new()?;
    test.write_strings("android/res/values", &[("title", "Title")])?;
    test.write_strings("android/res/values-es", &[])?;

    let output = test
        .command()
        .args(["--project-dir", "android"])
        .output()?;
    let (stdout, _) = output_text(&output)?;

    let report: Value = serde_json::from_str(&stdout)?;
    assert_eq!(report[0]["missing_locales"], json!(["es"]));

    Ok(())
}

#[test]
fn test_gitignored_directories_are_skipped() -> Result<()> {
    let test = sample_project()?;
    test.write_file(".gitignore", "build/\n")?;
    test.write_strings("app/build/intermediates/res/values-it", &[])?;

    let output = test.command().output()?;
    let (stdout, _) = output_text(&output)?;

    assert!(!stdout.contains("\"it\""));

    let output = test.command().args(["--ignore-mode", "none"]).output()?;
    let (stdout, _) = output_text(&output)?;

    assert!(stdout.contains("\"it\""));

    Ok(())
}

#[test]
fn test_config_file() -> Result<()> {
    let test = sample_project()?;
    test.write_file(
        ".missing-translations.json",
        r#"{ "outputFormat": "markdown", "markdownTitle": "Configured", "ignores": ["**/values-de"] }"#,
    )?;

    let output = test.command().output()?;
    let (stdout, _) = output_text(&output)?;

    assert!(stdout.starts_with("# Configured\n"));
    assert!(stdout.contains("| 1 | `farewell` | Bye           | fr              |"));
    assert!(!stdout.contains("greeting"));

    Ok(())
}

#[test]
fn test_non_translatable_strings() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "res/values/strings.xml",
        r#"<resources>
    <string name="app_id" translatable="false">com.example</string>
    <string name="title">Title</string>
</resources>"#,
    )?;
    test.write_strings("res/values-fr", &[("title", "Titre")])?;

    let output = test.command().output()?;
    let (stdout, _) = output_text(&output)?;

    assert_eq!(stdout, "[]\n");

    Ok(())
}

#[test]
fn test_missing_default_locale() -> Result<()> {
    let test = CliTest::new()?;
    test.write_strings("res/values-fr", &[("title", "Titre")])?;

    assert_cmd_snapshot!(test.command(), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: unable to find string resources for default locale
    ");

    Ok(())
}

#[test]
fn test_malformed_resource_file() -> Result<()> {
    let test = CliTest::with_file("res/values/strings.xml", "<manifest/>\n")?;

    assert_cmd_snapshot!(test.command(), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: unable to parse XML file at ./res/values/strings.xml: expected element type <resources> but have <manifest>
    ");

    Ok(())
}

#[test]
fn test_unterminated_resource_file() -> Result<()> {
    let test = CliTest::with_file("res/values/strings.xml", "<resources><string name=\"a\">")?;

    let output = test.command().output()?;
    let (_, stderr) = output_text(&output)?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.starts_with("Error: unable to parse XML file at ./res/values/strings.xml"));

    Ok(())
}

#[test]
fn test_missing_project_dir() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().args(["--project-dir", "nope"]).output()?;
    let (_, stderr) = output_text(&output)?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("Error: unable to read directory nope"));

    Ok(())
}

#[test]
fn test_invalid_output_format() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().args(["--output-format", "yaml"]).output()?;

    assert_eq!(output.status.code(), Some(2));

    Ok(())
}
