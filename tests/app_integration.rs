use fxm::core::{Money, MoneyError};
use fxm::providers::FixerProvider;
use rust_decimal::Decimal;
use std::fs;
use tracing::info;

mod test_utils {
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub async fn create_rates_mock_server(base: &str, symbols: &str, body: &str) -> MockServer {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/latest"))
            .and(query_param("base", base))
            .and(query_param("symbols", symbols))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&mock_server)
            .await;

        mock_server
    }

    pub fn write_config(dir: &tempfile::TempDir, base_url: &str, currency: &str) -> String {
        let path = dir.path().join("config.yaml");
        let content = format!(
            r#"
providers:
  rates:
    base_url: {base_url}
currency: "{currency}"
"#
        );
        std::fs::write(&path, content).expect("Failed to write config file");
        path.to_str().unwrap().to_string()
    }
}

#[test_log::test(tokio::test)]
async fn test_money_convert_against_mock_provider() {
    let mock_server =
        test_utils::create_rates_mock_server("USD", "EUR", r#"{"base":"USD","rates":{"EUR":0.5}}"#)
            .await;
    let provider = FixerProvider::new(&mock_server.uri());

    let original = Money::new("10", "USD").unwrap();
    let converted = original.convert("EUR", &provider).await.unwrap();
    info!(%original, %converted, "Converted through mock provider");

    assert_eq!(converted.amount(), Decimal::from(5));
    assert_eq!(converted.currency().code(), "EUR");
    assert_eq!(converted.to_string(), "€5");
    assert_eq!(original.to_string(), "$10");
}

#[test_log::test(tokio::test)]
async fn test_money_convert_missing_rate_yields_zero() {
    let mock_server =
        test_utils::create_rates_mock_server("USD", "EUR", r#"{"base":"USD","rates":{}}"#).await;
    let provider = FixerProvider::new(&mock_server.uri());

    let converted = Money::new("10", "USD")
        .unwrap()
        .convert("EUR", &provider)
        .await
        .unwrap();
    assert!(converted.amount().is_zero());
    assert_eq!(converted.currency().code(), "EUR");
}

#[test_log::test(tokio::test)]
async fn test_money_convert_malformed_response() {
    let mock_server = test_utils::create_rates_mock_server("USD", "EUR", "Service Unavailable").await;
    let provider = FixerProvider::new(&mock_server.uri());

    let result = Money::new("10", "USD")
        .unwrap()
        .convert("EUR", &provider)
        .await;
    assert!(matches!(result, Err(MoneyError::MalformedResponse(_))));
}

#[test_log::test(tokio::test)]
async fn test_full_app_flow_convert() {
    let mock_server =
        test_utils::create_rates_mock_server("GBP", "JPY", r#"{"base":"GBP","rates":{"JPY":190.25}}"#)
            .await;
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let config_path = test_utils::write_config(&temp_dir, &mock_server.uri(), "GBP");

    let output = fxm::execute(
        fxm::AppCommand::Convert {
            value: "2".to_string(),
            from: None,
            to: "JPY".to_string(),
        },
        Some(&config_path),
    )
    .await
    .expect("Convert command failed");

    assert!(output.contains("£2"));
    assert!(output.contains("¥380.5"));

    let result = fxm::run_command(
        fxm::AppCommand::Convert {
            value: "2".to_string(),
            from: Some("GBP".to_string()),
            to: "JPY".to_string(),
        },
        Some(&config_path),
    )
    .await;
    assert!(result.is_ok(), "run_command failed with: {:?}", result.err());
}

#[test_log::test(tokio::test)]
async fn test_full_app_flow_show_uses_config_currency() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let config_path = test_utils::write_config(&temp_dir, "http://127.0.0.1:1", "ILS");

    let output = fxm::execute(
        fxm::AppCommand::Show {
            value: "99.90".to_string(),
            currency: None,
        },
        Some(&config_path),
    )
    .await
    .unwrap();
    assert!(output.contains("₪99.9"));
}

#[test_log::test(tokio::test)]
async fn test_full_app_flow_unknown_target_makes_no_request() {
    let mock_server = wiremock::MockServer::start().await;
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let config_path = test_utils::write_config(&temp_dir, &mock_server.uri(), "USD");

    let result = fxm::execute(
        fxm::AppCommand::Convert {
            value: "1".to_string(),
            from: None,
            to: "XXX".to_string(),
        },
        Some(&config_path),
    )
    .await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<MoneyError>(),
        Some(MoneyError::UnknownCurrency(_))
    ));
    let requests = mock_server.received_requests().await.unwrap_or_default();
    assert!(requests.is_empty());
}

#[test_log::test(tokio::test)]
async fn test_invalid_config_is_rejected() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.yaml");
    fs::write(&config_path, "currency: [not, a, code]\n").unwrap();

    let result = fxm::execute(
        fxm::AppCommand::Show {
            value: "1".to_string(),
            currency: None,
        },
        Some(config_path.to_str().unwrap()),
    )
    .await;
    assert!(result.is_err());
}

#[test_log::test(tokio::test)]
async fn test_currencies_needs_no_config() {
    let output = fxm::execute(fxm::AppCommand::Currencies, Some("/nonexistent/config.yaml"))
        .await
        .unwrap();
    assert!(output.contains("EUR"));
    assert!(output.contains("₹"));
}
