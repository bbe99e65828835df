use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, output_text};

fn project() -> Result<CliTest> {
    let test = CliTest::new()?;
    test.write_strings("res/values", &[("title", "Title")])?;
    test.write_strings("res/values-fr", &[])?;
    Ok(test)
}

#[test]
fn test_github_output_file() -> Result<()> {
    let test = project()?;
    let output_file = test.root().join("github_output");

    let output = test
        .command()
        .arg("--github-actions")
        .env("GITHUB_OUTPUT", &output_file)
        .output()?;
    let (stdout, _) = output_text(&output)?;

    assert_eq!(output.status.code(), Some(0));
    let published = test.read_file("github_output")?;
    assert_eq!(
        published,
        format!(
            "report<<MISSING_TRANSLATIONS_EOF\n{}MISSING_TRANSLATIONS_EOF\n",
            stdout
        )
    );

    Ok(())
}

#[test]
fn test_github_output_file_keeps_markdown_trailing_newline() -> Result<()> {
    let test = project()?;
    let output_file = test.root().join("github_output");

    let output = test
        .command()
        .args(["--github-actions", "--output-format", "markdown"])
        .env("GITHUB_OUTPUT", &output_file)
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    let published = test.read_file("github_output")?;
    assert!(published.ends_with("_Generated using missing-translations._\n\nMISSING_TRANSLATIONS_EOF\n"));

    Ok(())
}

#[test]
fn test_legacy_set_output_command() -> Result<()> {
    let test = project()?;

    assert_cmd_snapshot!(test.command().arg("--github-actions"), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    ::set-output name=report::[%0A  {%0A    "name"%3A "title"%2C%0A    "value"%3A "Title"%2C%0A    "missing_locales"%3A [%0A      "fr"%0A    ]%0A  }%0A]

    [
      {
        "name": "title",
        "value": "Title",
        "missing_locales": [
          "fr"
        ]
      }
    ]

    ----- stderr -----
    warning: GITHUB_OUTPUT is not set, falling back to the deprecated set-output command
    ✘ Checked 2 resource files across 2 locales - 1 string missing translations
    "#);

    Ok(())
}
