//! Context Resolution Tests
//!
//! Validates the single resolution path for deployment context values:
//! CLI flags over config-file context, with environment-variable fallbacks
//! for account and region. Tests that touch process environment variables
//! are serialized.

use indexmap::IndexMap;
use pretty_assertions::assert_eq;
use serial_test::serial;

use allure_hosting::config::Config;
use allure_hosting::context::{DeploymentContext, ACCOUNT_ENV, REGION_ENV, UNKNOWN_ACCOUNT};

fn pairs(values: &[(&str, &str)]) -> IndexMap<String, String> {
    values
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

mod precedence_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cli_flag_beats_config_file_value() {
        let file = pairs(&[
            ("project", "file-project"),
            ("domainName", "file.example.com"),
        ]);
        let cli = vec!["project=cli-project".to_string()];

        let ctx = DeploymentContext::resolve(&cli, &file).unwrap();
        assert_eq!(ctx.project.as_deref(), Some("cli-project"));
        assert_eq!(ctx.domain_name.as_deref(), Some("file.example.com"));
    }

    #[test]
    fn test_config_file_context_feeds_resolution() {
        let config = Config::from_str(
            r#"
            [context]
            project = "myapp"
            acmCertArn = "arn:aws:acm:us-east-1:1:cert/abc"
            "#,
        )
        .unwrap();

        let ctx = DeploymentContext::resolve(&[], &config.context).unwrap();
        assert_eq!(ctx.project.as_deref(), Some("myapp"));
        assert_eq!(
            ctx.acm_cert_arn.as_deref(),
            Some("arn:aws:acm:us-east-1:1:cert/abc")
        );
    }

    #[test]
    fn test_malformed_cli_pair_is_rejected() {
        let err =
            DeploymentContext::resolve(&["project".to_string()], &IndexMap::new()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}

mod environment_fallback_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    #[serial]
    fn test_region_context_beats_environment_variable() {
        std::env::set_var(REGION_ENV, "us-east-1");
        let ctx = DeploymentContext::from_map(&pairs(&[("region", "eu-west-1")]));
        assert_eq!(ctx.environment().region.as_deref(), Some("eu-west-1"));
        std::env::remove_var(REGION_ENV);
    }

    #[test]
    #[serial]
    fn test_region_falls_back_to_environment_variable() {
        std::env::set_var(REGION_ENV, "us-east-1");
        let ctx = DeploymentContext::default();
        assert_eq!(ctx.environment().region.as_deref(), Some("us-east-1"));
        std::env::remove_var(REGION_ENV);
    }

    #[test]
    #[serial]
    fn test_region_unset_everywhere_stays_unset() {
        std::env::remove_var(REGION_ENV);
        let ctx = DeploymentContext::default();
        assert_eq!(ctx.environment().region, None);
    }

    #[test]
    #[serial]
    fn test_account_comes_from_environment_variable() {
        std::env::set_var(ACCOUNT_ENV, "123456789012");
        let ctx = DeploymentContext::default();
        assert_eq!(ctx.environment().account, "123456789012");
        std::env::remove_var(ACCOUNT_ENV);
    }

    #[test]
    #[serial]
    fn test_account_placeholder_when_unresolvable() {
        std::env::remove_var(ACCOUNT_ENV);
        let ctx = DeploymentContext::default();
        assert_eq!(ctx.environment().account, UNKNOWN_ACCOUNT);
    }

    #[test]
    #[serial]
    fn test_empty_environment_variable_is_treated_as_unset() {
        std::env::set_var(ACCOUNT_ENV, "");
        let ctx = DeploymentContext::default();
        assert_eq!(ctx.environment().account, UNKNOWN_ACCOUNT);
        std::env::remove_var(ACCOUNT_ENV);
    }
}
