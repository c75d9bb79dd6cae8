//! Integration tests for `GetDesign` command-line validation

use secrecy::ExposeSecret;
use std::path::Path;
use stitchkit::cli::{dispatch, parse, usage};
use stitchkit::domain::{FileType, ValidationError};
use test_case::test_case;

fn tokens(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

const VALID: &str = "GetDesign srv1 -d db -u bob -p pw -x /out -f png -s rose";

#[test]
fn test_valid_command_resolves_every_parameter() {
    let command = parse(&tokens(VALID)).unwrap();

    assert_eq!(command.server_name(), "srv1");
    assert_eq!(command.database(), "db");
    assert_eq!(command.user(), "bob");
    assert_eq!(command.password().expose_secret().as_ref(), "pw");
    assert_eq!(command.export_path(), Path::new("/out"));
    assert_eq!(command.file_type(), FileType::Png);
    assert_eq!(command.design_pattern(), "ROSE");
}

#[test]
fn test_flags_in_any_order_and_case() {
    let command =
        parse(&tokens("getdesign srv1 -S rose -F PXF -X /out -P pw -U bob -D db")).unwrap();

    assert_eq!(command.file_type(), FileType::Pxf);
    assert_eq!(command.design_pattern(), "ROSE");
    assert_eq!(command.database(), "db");
}

#[test_case("" ; "no arguments")]
#[test_case("GetDesign" ; "command only")]
fn test_too_few_arguments(line: &str) {
    assert_eq!(parse(&tokens(line)).unwrap_err(), ValidationError::Usage);
}

#[test]
fn test_unknown_command() {
    let err = parse(&tokens("Export srv1 -d db -u bob -p pw -x /out -f png -s rose")).unwrap_err();
    assert_eq!(err, ValidationError::UnknownCommand("Export".to_string()));
}

#[test]
fn test_blank_server_name() {
    let args = [
        "GetDesign", " ", "-d", "db", "-u", "bob", "-p", "pw", "-x", "/out", "-f", "png", "-s",
        "rose",
    ];
    assert_eq!(
        parse(&args[..]).unwrap_err(),
        ValidationError::MissingArgument("ServerName")
    );
}

#[test_case("GetDesign srv1 -d db -u bob -p pw -x /out -f png", 10 ; "missing pair")]
#[test_case("GetDesign srv1 -d db -u bob -p pw -x /out -f png -s", 11 ; "dangling flag")]
#[test_case("GetDesign srv1 -d db -u bob -p pw -x /out -f png -s rose -q x", 14 ; "extra pair")]
fn test_wrong_flag_count(line: &str, actual: usize) {
    assert_eq!(
        parse(&tokens(line)).unwrap_err(),
        ValidationError::FlagCount {
            expected: 12,
            actual
        }
    );
}

#[test]
fn test_unknown_flag() {
    let err = parse(&tokens("GetDesign srv1 -d db -u bob -p pw -e /out -f png -s rose")).unwrap_err();
    assert_eq!(err, ValidationError::UnknownFlag("-e".to_string()));
}

#[test_case("GetDesign srv1 -d db -d db2 -p pw -x /out -f png -s rose", "-u" ; "repeated flag")]
#[test_case("GetDesign srv1 -d db -u bob -p pw -x /out -s rose -s rose", "-f" ; "file type repeated away")]
fn test_missing_flag(line: &str, flag: &'static str) {
    assert_eq!(
        parse(&tokens(line)).unwrap_err(),
        ValidationError::MissingFlag(flag)
    );
}

#[test]
fn test_blank_flag_value_is_missing() {
    let args = [
        "GetDesign", "srv1", "-d", "db", "-u", "", "-p", "pw", "-x", "/out", "-f", "png", "-s",
        "rose",
    ];
    assert_eq!(
        parse(&args[..]).unwrap_err(),
        ValidationError::MissingFlag("-u")
    );
}

#[test_case("bmp")]
#[test_case("jpeg")]
fn test_invalid_file_type(value: &str) {
    let line = format!("GetDesign srv1 -d db -u bob -p pw -x /out -f {value} -s rose");
    match parse(&tokens(&line)).unwrap_err() {
        ValidationError::InvalidFileType { value: got, allowed } => {
            assert_eq!(got, value);
            assert!(allowed.contains("pxf"));
            assert!(allowed.contains("pcf"));
            assert!(allowed.contains("png"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_dispatch_prints_error_then_usage() {
    let mut out = Vec::new();
    let command = dispatch(&tokens("GetDesign srv1 -d db"), &mut out).unwrap();
    assert!(command.is_none());

    let text = String::from_utf8(out).unwrap();
    let (error, rest) = text.split_once("\n\n").unwrap();
    assert_eq!(
        error,
        "Incorrect number of flags provided (expected 12 tokens, got 2)."
    );
    assert_eq!(rest.trim_end(), usage());
}

#[test]
fn test_dispatch_echoes_parameters() {
    let mut out = Vec::new();
    let command = dispatch(&tokens(VALID), &mut out).unwrap();
    assert!(command.is_some());

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 9);
    assert_eq!(lines[0], "Running command with parameters:");
    assert!(lines.iter().any(|l| l.trim() == "Password:    pw"));
    assert!(lines.iter().any(|l| l.trim() == "File Type:   png"));
}

#[test]
fn test_usage_documents_every_flag() {
    let text = usage();
    for flag in stitchkit::cli::REQUIRED_FLAGS {
        assert!(text.contains(&format!("  {flag} ")), "usage missing {flag}");
    }
}
