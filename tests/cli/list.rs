use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, run, stderr, stdout};

#[test]
fn test_list_all_categories() -> Result<()> {
    let test = CliTest::with_sample_tokens()?;

    let output = run(test.list_command())?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let expected = r#"colors (2)
  ld.color.blue.500       #336699                 color
  ld.color.brand.500      #336699                 color

spacing (1)
  ld.spacing.padding.200  8                       spacing

borderRadius (1)
  ld.radius.md            6                       borderRadius

typography (1)
  ld.font.size.body       14                      fontSizes

effects (1)
  ld.shadow.card          {"x":0,"y":1,"blur":2}  boxShadow
"#;
    assert_eq!(stdout(&output), expected);

    Ok(())
}

#[test]
fn test_list_selected_category_as_json() -> Result<()> {
    let test = CliTest::with_sample_tokens()?;

    let mut cmd = test.list_command();
    cmd.args(["--category", "colors", "--json"]);
    let output = run(cmd)?;
    assert!(output.status.success());

    let json: Value = serde_json::from_str(&stdout(&output))?;
    let object = json.as_object().unwrap();
    assert_eq!(object.keys().collect::<Vec<_>>(), vec!["colors"]);
    assert_eq!(json["colors"][1]["path"], "ld.color.brand.500");
    assert_eq!(json["colors"][1]["name"], "500");
    assert_eq!(json["colors"][1]["value"], "#336699");
    assert_eq!(json["colors"][1]["type"], "color");

    Ok(())
}

#[test]
fn test_list_filter_glob() -> Result<()> {
    let test = CliTest::with_sample_tokens()?;

    let mut cmd = test.list_command();
    cmd.args(["--filter", "ld.color.brand.*", "--json"]);
    let output = run(cmd)?;

    let json: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(json["colors"].as_array().unwrap().len(), 1);
    assert_eq!(json["spacing"].as_array().unwrap().len(), 0);

    Ok(())
}

#[test]
fn test_list_respects_config_ignores() -> Result<()> {
    let test = CliTest::with_sample_tokens()?;
    test.write_file(".tokenrc.json", r#"{ "ignores": ["ld.color.blue.*"] }"#)?;

    let mut cmd = test.list_command();
    cmd.arg("--json");
    let json: Value = serde_json::from_str(&stdout(&run(cmd)?))?;

    let colors = json["colors"].as_array().unwrap();
    assert_eq!(colors.len(), 1);
    assert_eq!(colors[0]["path"], "ld.color.brand.500");
    // The ignored token can still be referenced
    assert_eq!(colors[0]["value"], "#336699");

    Ok(())
}

#[test]
fn test_list_missing_namespace_is_empty() -> Result<()> {
    let test = CliTest::with_sample_tokens()?;

    let mut cmd = test.list_command();
    cmd.args(["--namespace", "brand"]);
    let output = run(cmd)?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "No tokens found\n");

    Ok(())
}

#[test]
fn test_list_custom_tokens_file() -> Result<()> {
    let test = CliTest::with_file(
        "design/tokens.json",
        r#"{ "ld": { "font": { "weight": { "$type": "fontWeights", "$value": 600 } } } }"#,
    )?;

    let mut cmd = test.list_command();
    cmd.args(["--tokens-file", "design/tokens.json", "--json"]);
    let json: Value = serde_json::from_str(&stdout(&run(cmd)?))?;

    assert_eq!(json["typography"][0]["value"], 600);

    Ok(())
}

#[test]
fn test_list_missing_tokens_file_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.list_command())?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Error: Token file not found"));

    Ok(())
}

#[test]
fn test_list_invalid_json_is_an_error() -> Result<()> {
    let test = CliTest::with_file("tokens.json", "{ not json")?;

    let output = run(test.list_command())?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to parse token file"));

    Ok(())
}
