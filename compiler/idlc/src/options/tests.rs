use pretty_assertions::assert_eq;

use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

#[test]
fn test_path_only() {
    assert_eq!(
        Options::from_args(&args(&["model.idl"])),
        Ok(Options {
            path: "model.idl".into(),
            tokens: false,
        })
    );
}

#[test]
fn test_tokens_flag_any_position() {
    let expected = Ok(Options {
        path: "model.idl".into(),
        tokens: true,
    });
    assert_eq!(Options::from_args(&args(&["--tokens", "model.idl"])), expected);
    assert_eq!(Options::from_args(&args(&["model.idl", "-t"])), expected);
}

#[test]
fn test_usage_errors() {
    assert_eq!(Options::from_args(&[]), Err(UsageError::MissingPath));
    assert_eq!(
        Options::from_args(&args(&["a.idl", "b.idl"])),
        Err(UsageError::UnexpectedArgument("b.idl".into()))
    );
    assert_eq!(
        Options::from_args(&args(&["--verbose", "a.idl"])),
        Err(UsageError::UnknownOption("--verbose".into()))
    );
}
