use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, parse_tmx, unit};

fn write_pair(test: &CliTest, source: &str, target: &str) -> Result<()> {
    test.write_file("corpus/book.en", source)?;
    test.write_file("corpus/book.fr", target)
}

#[test]
fn test_convert_writes_default_output() -> Result<()> {
    let test = CliTest::new()?;
    write_pair(&test, "Hello\nGoodbye\n", "Bonjour\nAu revoir\n")?;

    assert_cmd_snapshot!(
        test.convert_command()
            .args(["corpus/book.en", "corpus/book.fr", "-s", "en", "-t", "fr"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created corpus/book_en_fr.tmx (2 translation units)

    ----- stderr -----
    "
    );

    let units = parse_tmx(&test.read_file("corpus/book_en_fr.tmx")?)?;
    assert_eq!(
        units,
        vec![
            unit(("Hello", "en"), ("Bonjour", "fr")),
            unit(("Goodbye", "en"), ("Au revoir", "fr")),
        ]
    );
    Ok(())
}

#[test]
fn test_convert_explicit_output() -> Result<()> {
    let test = CliTest::new()?;
    write_pair(&test, "Yes\n", "Oui\n")?;

    assert_cmd_snapshot!(
        test.convert_command()
            .args(["corpus/book.en", "corpus/book.fr"])
            .args(["--source-lang", "en-GB", "--target-lang", "fr-CA"])
            .args(["--output", "memory.tmx"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created memory.tmx (1 translation unit)

    ----- stderr -----
    "
    );
    assert!(!test.root().join("corpus/book_en-GB_fr-CA.tmx").exists());

    let xml = test.read_file("memory.tmx")?;
    assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    assert!(xml.contains(r#"srclang="en-GB""#));
    assert_eq!(parse_tmx(&xml)?, vec![unit(("Yes", "en-GB"), ("Oui", "fr-CA"))]);
    Ok(())
}

#[test]
fn test_convert_length_mismatch() -> Result<()> {
    let test = CliTest::new()?;
    write_pair(&test, "one\ntwo\nthree\n", "un\ndeux\n")?;

    assert_cmd_snapshot!(
        test.convert_command()
            .args(["corpus/book.en", "corpus/book.fr", "-s", "en", "-t", "fr"]),
        @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    ✘ error: The source and target files do not have the same number of lines.
      = source: 3 lines, target: 2 lines
    "
    );
    assert!(!test.root().join("corpus/book_en_fr.tmx").exists());
    Ok(())
}

#[test]
fn test_convert_length_mismatch_keeps_existing_output() -> Result<()> {
    let test = CliTest::new()?;
    write_pair(&test, "one\ntwo\n", "un\n")?;
    test.write_file("corpus/book_en_fr.tmx", "previous run")?;

    let output = test
        .convert_command()
        .args(["corpus/book.en", "corpus/book.fr", "-s", "en", "-t", "fr"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(test.read_file("corpus/book_en_fr.tmx")?, "previous run");
    Ok(())
}

#[test]
fn test_convert_rejects_invalid_language_tag() -> Result<()> {
    let test = CliTest::new()?;
    write_pair(&test, "a\n", "b\n")?;

    assert_cmd_snapshot!(
        test.convert_command()
            .args(["corpus/book.en", "corpus/book.fr", "-s", "EN", "-t", "fr"]),
        @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    error: invalid value 'EN' for '--source-lang <CODE>': invalid language code 'EN' (expected e.g. 'en' or 'en-US')

    For more information, try '--help'.
    "
    );

    for bad in ["english", "en_US", "en-us"] {
        let output = test
            .convert_command()
            .args(["corpus/book.en", "corpus/book.fr", "-s", "en", "-t", bad])
            .output()?;
        assert_eq!(output.status.code(), Some(2), "tag {bad} should be rejected");
    }
    assert!(!test.root().join("corpus/book_en_fr.tmx").exists());
    Ok(())
}

#[test]
fn test_convert_missing_input() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("corpus/book.en", "a\n")?;

    assert_cmd_snapshot!(
        test.convert_command()
            .args(["corpus/book.en", "corpus/book.fr", "-s", "en", "-t", "fr"]),
        @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: file not found: corpus/book.fr
    "
    );
    Ok(())
}

#[test]
fn test_convert_rejects_control_characters() -> Result<()> {
    let test = CliTest::new()?;
    write_pair(&test, "bell\u{7}\n", "cloche\n")?;

    let output = test
        .convert_command()
        .args(["corpus/book.en", "corpus/book.fr", "-s", "en", "-t", "fr"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(!test.root().join("corpus/book_en_fr.tmx").exists());
    Ok(())
}

#[test]
fn test_convert_escapes_and_keeps_blank_lines() -> Result<()> {
    let test = CliTest::new()?;
    write_pair(
        &test,
        "  Tom & Jerry  \r\n\r\n<b>bold</b>\r\n",
        "Tom et Jerry\n\n<b>gras</b>\n",
    )?;

    assert_cmd_snapshot!(
        test.convert_command()
            .args(["corpus/book.en", "corpus/book.fr", "-s", "en", "-t", "fr"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created corpus/book_en_fr.tmx (3 translation units)

    ----- stderr -----
    "
    );

    let xml = test.read_file("corpus/book_en_fr.tmx")?;
    assert!(!xml.contains("CDATA"));
    assert_eq!(
        parse_tmx(&xml)?,
        vec![
            unit(("Tom & Jerry", "en"), ("Tom et Jerry", "fr")),
            unit(("", "en"), ("", "fr")),
            unit(("<b>bold</b>", "en"), ("<b>gras</b>", "fr")),
        ]
    );
    Ok(())
}

#[test]
fn test_convert_verbose_logs_to_stderr() -> Result<()> {
    let test = CliTest::new()?;
    write_pair(&test, "a\n", "b\n")?;

    assert_cmd_snapshot!(
        test.convert_command()
            .args(["corpus/book.en", "corpus/book.fr", "-s", "en", "-t", "fr", "-v"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created corpus/book_en_fr.tmx (1 translation unit)

    ----- stderr -----
    debug: read 1 lines from corpus/book.en
    debug: read 1 lines from corpus/book.fr
    debug: built 1 translation units (en -> fr)
    debug: wrote 1 units to corpus/book_en_fr.tmx
    info: created corpus/book_en_fr.tmx with 1 translation units
    "
    );
    Ok(())
}
