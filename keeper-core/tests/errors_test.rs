//! Tests for the Keeper error types.

use keeper_core::errors::*;

#[test]
fn test_pipeline_error_codes_come_from_the_subsystem() {
    let cases: Vec<(PipelineError, &str)> = vec![
        (
            ConfigError::FileNotFound {
                path: "keeper.toml".into(),
            }
            .into(),
            error_code::CONFIG_ERROR,
        ),
        (
            RuleError::UnknownAssetType {
                asset_type: "Hologram".into(),
                index: 1,
            }
            .into(),
            error_code::UNKNOWN_ASSET_TYPE,
        ),
        (
            GraphError::UnknownAsset("/Game/Missing".into()).into(),
            error_code::GRAPH_ERROR,
        ),
    ];

    for (error, code) in cases {
        assert_eq!(error.error_code(), code, "{error}");
    }
}

#[test]
fn test_every_pipeline_error_code_is_a_subsystem_code() {
    let subsystem_codes = [
        error_code::CONFIG_ERROR,
        error_code::RULE_ERROR,
        error_code::UNKNOWN_ASSET_TYPE,
        error_code::GRAPH_ERROR,
        error_code::CACHE_ERROR,
        error_code::REPORT_ERROR,
    ];
    let mut result = PipelineResult::new(());
    result.add_error(GraphError::LoadFailed {
        asset: "/Game/Broken".into(),
        message: "corrupt package".into(),
    });
    result.add_error(ConfigError::ValidationFailed {
        field: "reachability.strategy".into(),
        message: "unknown".into(),
    });

    assert_eq!(result.error_count(), 2);
    assert!(!result.is_clean());
    for error in &result.errors {
        assert!(subsystem_codes.contains(&error.error_code()));
    }
}
