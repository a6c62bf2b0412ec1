use copy_repo::cli::parse_invocation;
use copy_repo::errors::CopyRepoError;

#[test]
fn test_bare_invocation_is_accepted() {
    assert!(parse_invocation(["copy-repo"]).is_ok());
}

#[test]
fn test_any_argument_is_a_usage_error() {
    for args in [
        vec!["copy-repo", "src"],
        vec!["copy-repo", "--help"],
        vec!["copy-repo", "-h"],
        vec!["copy-repo", "--version"],
        vec!["copy-repo", "--verbose"],
    ] {
        let result = parse_invocation(args.clone());
        assert!(
            matches!(result, Err(CopyRepoError::UsageError)),
            "Expected usage error for {:?}, got {:?}",
            args,
            result
        );
    }
}

#[test]
fn test_usage_message() {
    assert_eq!(CopyRepoError::UsageError.to_string(), "Usage: copy-repo");
}
