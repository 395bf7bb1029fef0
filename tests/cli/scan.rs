use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_scan_lists_recognized_files() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("corpus/a.en", "x\n")?;
    test.write_file("corpus/a.fr", "x\n")?;
    test.write_file("corpus/notes.md", "x\n")?;
    test.write_file("corpus/README", "x\n")?;

    assert_cmd_snapshot!(test.scan_command().arg("corpus"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
      README    skipped
      a.en      recognized
      a.fr      recognized
      notes.md  skipped

    note: unrecognized extensions: (none), .md (add them with --extension or in .bitmxrc.json)
    ✓ 2 of 4 files in corpus recognized

    ----- stderr -----
    ");
    Ok(())
}

#[test]
fn test_scan_with_extra_extension() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("corpus/a.en", "x\n")?;
    test.write_file("corpus/notes.md", "x\n")?;

    assert_cmd_snapshot!(test.scan_command().args(["corpus", "--extension", "md"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
      a.en      recognized
      notes.md  recognized

    ✓ 2 of 2 files in corpus recognized

    ----- stderr -----
    ");
    Ok(())
}

#[test]
fn test_scan_uses_config_from_parent_directory() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".bitmxrc.json", r#"{ "extensions": [".src"] }"#)?;
    test.write_file("corpus/a.src", "x\n")?;
    test.write_file("corpus/a.en", "x\n")?;

    assert_cmd_snapshot!(test.scan_command().arg("corpus"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
      a.en   skipped
      a.src  recognized

    note: unrecognized extensions: .en (add them with --extension or in .bitmxrc.json)
    ✓ 1 of 2 files in corpus recognized (extensions from .bitmxrc.json)

    ----- stderr -----
    ");
    Ok(())
}

#[test]
fn test_scan_empty_directory() -> Result<()> {
    let test = CliTest::new()?;
    std::fs::create_dir(test.root().join("corpus"))?;

    assert_cmd_snapshot!(test.scan_command().arg("corpus"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ 0 of 0 files in corpus recognized

    ----- stderr -----
    ");
    Ok(())
}

#[test]
fn test_scan_invalid_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".bitmxrc.json", r#"{ "extensions": ["md"] }"#)?;
    let _guard = test.root_settings().bind_to_scope();

    assert_cmd_snapshot!(test.scan_command(), @r#"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Invalid config file: "[ROOT]/.bitmxrc.json": Invalid entry in 'extensions': "md": extension "md" must start with '.'
    "#);
    Ok(())
}

#[test]
fn test_scan_missing_directory() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.scan_command().arg("nope"), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Failed to scan directory: nope: nope is not a directory
    ");
    Ok(())
}
