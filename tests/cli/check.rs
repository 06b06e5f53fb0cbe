use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run, stdout};

#[test]
fn test_check_clean_document() -> Result<()> {
    let test = CliTest::with_sample_tokens()?;

    let output = run(test.check_command())?;

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "\u{2713} Checked 6 tokens - no issues found\n"
    );

    Ok(())
}

#[test]
fn test_check_reports_reference_issues() -> Result<()> {
    let test = CliTest::with_file(
        "tokens.json",
        r#"{
  "ld": {
    "color": {
      "brand": { "$type": "color", "$value": "{ld.color.blu}" }
    },
    "a": { "$value": "{ld.b}" },
    "b": { "$value": "{ld.a}" }
  }
}
"#,
    )?;

    let output = run(test.check_command())?;
    assert_eq!(output.status.code(), Some(1));

    let expected = format!(
        r#"warning: "ld.color.brand"  unresolved-reference
  --> {path}:4
  = note: {{ld.color.blu}} does not resolve
  = hint: check the reference path for typos; paths are absolute from the document root

error: "ld.a"  circular-reference
  --> {path}:6
  = note: ld.a -> ld.b -> ld.a

error: "ld.b"  circular-reference
  --> {path}:7
  = note: ld.b -> ld.a -> ld.b

{mark} 3 problems (2 errors, 1 warning)
"#,
        path = "./tokens.json",
        mark = "\u{2718}"
    );
    assert_eq!(stdout(&output), expected);

    Ok(())
}

#[test]
fn test_check_namespace_does_not_limit_scope() -> Result<()> {
    let test = CliTest::with_file(
        "tokens.json",
        r#"{ "other": { "x": { "$value": "{missing}" } } }"#,
    )?;

    let output = run(test.check_command())?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("\"other.x\"  unresolved-reference"));

    Ok(())
}
