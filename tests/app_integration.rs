use std::fs;

mod test_utils {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub async fn mock_quote_server(market: &str, mock_response: &str, status: u16) -> MockServer {
        let mock_server = MockServer::start().await;
        let url_path = format!("/dolares/{market}");

        Mock::given(method("GET"))
            .and(path(&url_path))
            .respond_with(ResponseTemplate::new(status).set_body_string(mock_response))
            .mount(&mock_server)
            .await;

        mock_server
    }

    pub fn write_config(base_url: &str) -> tempfile::NamedTempFile {
        let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        let config_content = format!(
            r#"
providers:
  dolarapi:
    base_url: {base_url}
market: "oficial"
side: "sell"
"#
        );
        std::fs::write(config_file.path(), config_content).expect("Failed to write config file");
        config_file
    }
}

#[test_log::test(tokio::test)]
async fn test_convert_flow_with_live_quote() {
    let mock_response = r#"{
        "moneda": "USD",
        "casa": "oficial",
        "nombre": "Oficial",
        "compra": 1190.0,
        "venta": 1210.0,
        "fechaActualizacion": "2025-08-06T12:00:00.000Z"
    }"#;
    let mock_server = test_utils::mock_quote_server("oficial", mock_response, 200).await;
    let config_file = test_utils::write_config(&mock_server.uri());

    let result = cambio::run_command(
        cambio::AppCommand::Convert {
            amount: 10000.0,
            manual_rate: None,
            market: None,
            side: None,
        },
        Some(config_file.path().to_str().unwrap()),
    )
    .await;

    assert!(result.is_ok(), "Convert failed with: {:?}", result.err());
}

#[test_log::test(tokio::test)]
async fn test_convert_with_manual_rate_needs_no_service() {
    // The mock server has no mounted routes; any request would come back 404
    // and fail the command. The manual path must never issue one.
    let mock_server = wiremock::MockServer::start().await;
    let config_file = test_utils::write_config(&mock_server.uri());

    let result = cambio::run_command(
        cambio::AppCommand::Convert {
            amount: 5000.0,
            manual_rate: Some(1200.0),
            market: None,
            side: None,
        },
        Some(config_file.path().to_str().unwrap()),
    )
    .await;

    assert!(result.is_ok(), "Convert failed with: {:?}", result.err());
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[test_log::test(tokio::test)]
async fn test_convert_rejects_bad_amount_before_any_request() {
    let mock_server = wiremock::MockServer::start().await;
    let config_file = test_utils::write_config(&mock_server.uri());

    let result = cambio::run_command(
        cambio::AppCommand::Convert {
            amount: -10.0,
            manual_rate: None,
            market: None,
            side: None,
        },
        Some(config_file.path().to_str().unwrap()),
    )
    .await;

    let err = result.unwrap_err();
    assert!(
        err.to_string().contains("amount must be a positive finite number"),
        "{err}"
    );
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[test_log::test(tokio::test)]
async fn test_convert_surfaces_service_outage() {
    let mock_server = test_utils::mock_quote_server("oficial", "Server Error", 500).await;
    let config_file = test_utils::write_config(&mock_server.uri());

    let result = cambio::run_command(
        cambio::AppCommand::Convert {
            amount: 10000.0,
            manual_rate: None,
            market: None,
            side: None,
        },
        Some(config_file.path().to_str().unwrap()),
    )
    .await;

    let err = result.unwrap_err();
    assert!(err.to_string().contains("quote lookup failed"), "{err}");
}

#[test_log::test(tokio::test)]
async fn test_convert_rejects_a_quote_with_no_usable_rate() {
    let mock_response = r#"{"casa": "oficial", "nombre": "Oficial", "compra": null, "venta": null}"#;
    let mock_server = test_utils::mock_quote_server("oficial", mock_response, 200).await;
    let config_file = test_utils::write_config(&mock_server.uri());

    let result = cambio::run_command(
        cambio::AppCommand::Convert {
            amount: 10000.0,
            manual_rate: None,
            market: None,
            side: None,
        },
        Some(config_file.path().to_str().unwrap()),
    )
    .await;

    let err = result.unwrap_err();
    assert!(err.to_string().contains("no usable rate"), "{err}");
}

#[test_log::test(tokio::test)]
async fn test_rate_flow_with_market_override() {
    let mock_response = r#"{
        "casa": "blue",
        "nombre": "Blue",
        "compra": 1300.0,
        "venta": 1320.0,
        "fechaActualizacion": "2025-08-06T12:00:00.000Z"
    }"#;
    let mock_server = test_utils::mock_quote_server("blue", mock_response, 200).await;
    let config_file = test_utils::write_config(&mock_server.uri());

    let result = cambio::run_command(
        cambio::AppCommand::Rate {
            market: Some("blue".to_string()),
            side: Some(cambio::core::Side::Average),
        },
        Some(config_file.path().to_str().unwrap()),
    )
    .await;

    assert!(result.is_ok(), "Rate failed with: {:?}", result.err());
}

#[test_log::test(tokio::test)]
async fn test_markets_flow() {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, ResponseTemplate};

    let mock_response = r#"[
        {"casa": "oficial", "nombre": "Oficial", "compra": 1190.0, "venta": 1210.0},
        {"casa": "blue", "nombre": "Blue", "compra": 1300.0, "venta": 1320.0}
    ]"#;
    let mock_server = wiremock::MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/dolares"))
        .respond_with(ResponseTemplate::new(200).set_body_string(mock_response))
        .mount(&mock_server)
        .await;
    let config_file = test_utils::write_config(&mock_server.uri());

    let result = cambio::run_command(
        cambio::AppCommand::Markets,
        Some(config_file.path().to_str().unwrap()),
    )
    .await;

    assert!(result.is_ok(), "Markets failed with: {:?}", result.err());
}

#[test_log::test(tokio::test)]
async fn test_explicit_config_path_must_exist() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope.yaml");

    let result = cambio::run_command(
        cambio::AppCommand::Markets,
        Some(missing.to_str().unwrap()),
    )
    .await;

    let err = result.unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"), "{err}");
}

#[test_log::test(tokio::test)]
async fn test_single_sided_quote_still_converts() {
    let mock_response = r#"{"casa": "oficial", "nombre": "Oficial", "venta": 1210.0}"#;
    let mock_server = test_utils::mock_quote_server("oficial", mock_response, 200).await;

    // side=buy with no bid present: selection falls back to the ask.
    let config_file = tempfile::NamedTempFile::new().unwrap();
    fs::write(
        config_file.path(),
        format!(
            "providers:\n  dolarapi:\n    base_url: {}\nmarket: \"oficial\"\nside: \"buy\"\n",
            mock_server.uri()
        ),
    )
    .unwrap();

    let result = cambio::run_command(
        cambio::AppCommand::Convert {
            amount: 1000.0,
            manual_rate: None,
            market: None,
            side: None,
        },
        Some(config_file.path().to_str().unwrap()),
    )
    .await;

    assert!(result.is_ok(), "Convert failed with: {:?}", result.err());
}
