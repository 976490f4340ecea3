//! Tests for argument parsing, command execution and configuration

use clap::Parser;
use interface_cli::{execute, Cli, CliConfig, CliError, CommandOutput, LogFormat, OutputFormat};
use test_utils::PatientFixtures;

fn run(args: &[&str]) -> Result<CommandOutput, CliError> {
    let cli = Cli::try_parse_from(args).expect("arguments should parse");
    execute(&cli.command)
}

mod generate_tests {
    use super::*;

    #[test]
    fn test_generate_with_national_id() {
        let output = run(&[
            "hiv-code",
            "generate",
            "--first-name",
            "Camilo",
            "--first-surname",
            "Muñoz",
            "--second-surname",
            "Cayun",
            "--birth-date",
            PatientFixtures::birth_date(),
            "--id",
            PatientFixtures::national_id(),
        ])
        .unwrap();

        assert!(output.is_success());
        assert_eq!(
            output.render(OutputFormat::Text).unwrap(),
            PatientFixtures::expected_code()
        );
    }

    #[test]
    fn test_generate_without_second_surname_or_id() {
        let output = run(&[
            "hiv-code",
            "generate",
            "--first-name",
            "Camilo",
            "--first-surname",
            "Muñoz",
            "--no-second-surname",
            "--birth-date",
            "08-09-1987",
            "--no-id",
        ])
        .unwrap();

        assert_eq!(output.render(OutputFormat::Text).unwrap(), "CM# 080987 ABC-D");
    }

    #[test]
    fn test_generate_json_output() {
        let output = run(&[
            "hiv-code",
            "generate",
            "--first-name",
            "Camilo",
            "--first-surname",
            "Muñoz",
            "--second-surname",
            "Cayun",
            "--birth-date",
            "08-09-1987",
            "--no-id",
        ])
        .unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&output.render(OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json["code"], "CMC 080987 ABC-D");
        assert_eq!(json["id_part"], "ABC-D");
        assert!(json.get("warnings").is_none());
    }

    #[test]
    fn test_generate_wrong_check_character() {
        let err = run(&[
            "hiv-code",
            "generate",
            "--first-name",
            "Camilo",
            "--first-surname",
            "Muñoz",
            "--second-surname",
            "Cayun",
            "--birth-date",
            "08-09-1987",
            "--id",
            PatientFixtures::wrong_check_national_id(),
        ])
        .unwrap_err();

        assert_eq!(err.error_type(), "identity_error");
        assert!(err.to_response().details.is_none());
    }

    #[test]
    fn test_generate_missing_id_is_validation_error() {
        let err = run(&[
            "hiv-code",
            "generate",
            "--first-name",
            "Camilo",
            "--first-surname",
            "Muñoz",
            "--no-second-surname",
            "--birth-date",
            "08-09-1987",
        ])
        .unwrap_err();

        let response = err.to_response();
        assert_eq!(response.error, "validation_error");
        assert_eq!(
            response.details,
            Some(vec![
                "national identity number is required unless marked as absent".to_string()
            ])
        );
    }

    #[test]
    fn test_bad_date_reported_before_missing_id() {
        let err = run(&[
            "hiv-code",
            "generate",
            "--first-name",
            "Camilo",
            "--first-surname",
            "Muñoz",
            "--no-second-surname",
            "--birth-date",
            "30-02-2020",
        ])
        .unwrap_err();

        assert_eq!(err.error_type(), "format_error");
    }

    #[test]
    fn test_conflicting_flags_rejected() {
        let result = Cli::try_parse_from([
            "hiv-code",
            "generate",
            "--first-name",
            "Camilo",
            "--first-surname",
            "Muñoz",
            "--birth-date",
            "08-09-1987",
            "--id",
            "16.823.628-K",
            "--no-id",
        ]);
        assert!(result.is_err());
    }
}

mod check_tests {
    use super::*;

    #[test]
    fn test_initials_command() {
        let output = run(&["hiv-code", "initials", "Camilo", "Muñoz", "--no-second-surname"]).unwrap();
        assert_eq!(output.render(OutputFormat::Text).unwrap(), "CM#");
    }

    #[test]
    fn test_check_date_invalid_is_not_success() {
        let output = run(&["hiv-code", "check-date", "30-02-2020"]).unwrap();
        assert!(!output.is_success());
    }

    #[test]
    fn test_check_id_json() {
        let output = run(&["hiv-code", "check-id", "16.823.628-1", "--output", "json"]).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&output.render(OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json["valid"], false);
        assert_eq!(json["normalized"], "16823628-1");
        assert!(json.get("code_suffix").is_none());
    }

    #[test]
    fn test_global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from([
            "hiv-code",
            "check-id",
            "16.823.628-K",
            "--output",
            "json",
            "--log-format",
            "json",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.log_format, Some(LogFormat::Json));
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
    }
}

mod config_tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::from_vars(Vec::new()).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_environment_values() {
        let config = CliConfig::from_vars(vec![
            ("HIVCODE_LOG_LEVEL".to_string(), "debug".to_string()),
            ("HIVCODE_LOG_FORMAT".to_string(), "json".to_string()),
            ("HIVCODE_OUTPUT".to_string(), "json".to_string()),
        ])
        .unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_invalid_output_rejected() {
        let result = CliConfig::from_vars(vec![(
            "HIVCODE_OUTPUT".to_string(),
            "yaml".to_string(),
        )]);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_environment_reported_as_config_error() {
        let err: CliError = CliConfig::from_vars(vec![(
            "HIVCODE_LOG_FORMAT".to_string(),
            "xml".to_string(),
        )])
        .unwrap_err()
        .into();

        let response = err.to_response();
        assert_eq!(response.error, "config_error");
        assert!(response.message.starts_with("Configuration error"));
        assert!(response.details.is_none());
    }

    #[test]
    fn test_flags_override_environment() {
        let config = CliConfig::default().with_overrides(Some("trace"), None, Some(OutputFormat::Json));
        assert_eq!(config.log_level, "trace");
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.output, OutputFormat::Json);
    }
}
