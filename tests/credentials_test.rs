//! Connecting with a profile that has no usable credentials
//!
//! Kept in its own test binary: it rewrites the process environment so the
//! AWS credential chain sees no keys, no shared files and no instance metadata.

use std::env;
use std::fs;

use clap::Parser;

use ssmgr::cli::commands::execute_command;
use ssmgr::cli::{Cli, CliError};
use ssmgr::exitcode;
use ssmgr::infrastructure::InfraError;

fn isolate_aws_environment(dir: &tempfile::TempDir) {
    for var in [
        "AWS_ACCESS_KEY_ID",
        "AWS_SECRET_ACCESS_KEY",
        "AWS_SESSION_TOKEN",
        "AWS_PROFILE",
        "AWS_DEFAULT_PROFILE",
        "AWS_WEB_IDENTITY_TOKEN_FILE",
        "AWS_ROLE_ARN",
        "AWS_CONTAINER_CREDENTIALS_RELATIVE_URI",
        "AWS_CONTAINER_CREDENTIALS_FULL_URI",
        "SSMGR_REGION",
        "SSMGR_ENDPOINT_URL",
    ] {
        env::remove_var(var);
    }

    let config = dir.path().join("aws-config");
    let credentials = dir.path().join("aws-credentials");
    fs::write(&config, "").unwrap();
    fs::write(&credentials, "").unwrap();

    env::set_var("AWS_CONFIG_FILE", &config);
    env::set_var("AWS_SHARED_CREDENTIALS_FILE", &credentials);
    env::set_var("AWS_EC2_METADATA_DISABLED", "true");
    env::set_var("HOME", dir.path());
    env::set_var("XDG_CONFIG_HOME", dir.path());
}

#[test]
fn given_profile_without_credentials_when_creating_then_fails_before_any_request() {
    let dir = tempfile::tempdir().unwrap();
    isolate_aws_environment(&dir);
    let cli = Cli::try_parse_from([
        "ssmgr",
        "create",
        "-p",
        "no-such-profile",
        "-r",
        "us-east-1",
        "-n",
        "/app/token",
        "-v",
        "v",
        "-t",
        "Plain",
    ])
    .unwrap();

    let err = execute_command(&cli).unwrap_err();

    assert!(
        matches!(err, CliError::Infra(InfraError::Credentials { ref profile, .. }) if profile == "no-such-profile"),
        "unexpected error: {err:?}"
    );
    assert_eq!(err.exit_code(), exitcode::NOPERM);
    assert_ne!(err.exit_code(), exitcode::OK);
}
