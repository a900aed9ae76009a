use httpmock::prelude::*;
use tc_kimlik::config::toml_config::DEFAULT_SOAP_ACTION;
use tc_kimlik::{
    DirectoryConfig, DirectoryService, KimlikError, RemoteVerifier, SoapDirectoryService,
    VerificationRequest,
};

const SERVICE_PATH: &str = "/Service/KPSPublic.asmx";

fn result_envelope(value: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?><soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xmlns:xsd="http://www.w3.org/2001/XMLSchema"><soap:Body><TCKimlikNoDogrulaResponse xmlns="http://tckimlik.nvi.gov.tr/WS"><TCKimlikNoDogrulaResult>{}</TCKimlikNoDogrulaResult></TCKimlikNoDogrulaResponse></soap:Body></soap:Envelope>"#,
        value
    )
}

fn directory_for(server: &MockServer) -> SoapDirectoryService<DirectoryConfig> {
    SoapDirectoryService::new(DirectoryConfig::default().with_endpoint(server.url(SERVICE_PATH)))
}

#[tokio::test]
async fn test_posts_envelope_and_reads_true() {
    let server = MockServer::start();
    let expected_action = format!("\"{}\"", DEFAULT_SOAP_ACTION);
    let soap_mock = server.mock(|when, then| {
        when.method(POST)
            .path(SERVICE_PATH)
            .header("SOAPAction", expected_action.as_str())
            .header("Content-Type", "text/xml; charset=utf-8")
            .body_contains("<TCKimlikNo>10000000146</TCKimlikNo>")
            .body_contains("<Ad>İLKNUR</Ad>")
            .body_contains("<Soyad>IŞIK</Soyad>")
            .body_contains("<DogumYili>1988</DogumYili>");
        then.status(200)
            .header("Content-Type", "text/xml; charset=utf-8")
            .body(result_envelope("true"));
    });

    let verifier = RemoteVerifier::new(directory_for(&server));
    let verified = verifier
        .verify("10000000146", "ilknur", "ışık", 1988)
        .await
        .unwrap();

    soap_mock.assert();
    assert!(verified);
}

#[tokio::test]
async fn test_reads_false() {
    let server = MockServer::start();
    let soap_mock = server.mock(|when, then| {
        when.method(POST).path(SERVICE_PATH);
        then.status(200).body(result_envelope("false"));
    });

    let directory = directory_for(&server);
    let request = VerificationRequest::new("10000000146", "ALİ", "VELİ", 1990);
    let verified = directory.verify(&request).await.unwrap();

    soap_mock.assert();
    assert!(!verified);
}

#[tokio::test]
async fn test_user_agent_is_sent_when_configured() {
    let server = MockServer::start();
    let soap_mock = server.mock(|when, then| {
        when.method(POST)
            .path(SERVICE_PATH)
            .header("User-Agent", "kimlik-check/2.0");
        then.status(200).body(result_envelope("true"));
    });

    let config = DirectoryConfig {
        user_agent: Some("kimlik-check/2.0".to_string()),
        ..DirectoryConfig::default().with_endpoint(server.url(SERVICE_PATH))
    };
    let directory = SoapDirectoryService::new(config);
    let request = VerificationRequest::new("10000000146", "ALİ", "VELİ", 1990);

    assert!(directory.verify(&request).await.unwrap());
    soap_mock.assert();
}

#[tokio::test]
async fn test_soap_fault_is_reported() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path(SERVICE_PATH);
        then.status(500).body(
            r#"<?xml version="1.0" encoding="utf-8"?><soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/"><soap:Body><soap:Fault><faultcode>soap:Client</faultcode><faultstring>Server was unable to read request.</faultstring><detail /></soap:Fault></soap:Body></soap:Envelope>"#,
        );
    });

    let directory = directory_for(&server);
    let request = VerificationRequest::new("abc", "ALİ", "VELİ", 1990);
    let err = directory.verify(&request).await.unwrap_err();
    match err {
        KimlikError::SoapFault { code, message } => {
            assert_eq!(code, "soap:Client");
            assert_eq!(message, "Server was unable to read request.");
        }
        other => panic!("expected SoapFault, got {:?}", other),
    }

    // Through the verifier the fault text survives inside the wrapped error.
    let verifier = RemoteVerifier::new(directory_for(&server));
    let wrapped = verifier.verify("abc", "ali", "veli", 1990).await.unwrap_err();
    assert!(matches!(wrapped, KimlikError::DirectoryUnavailable { .. }));
    assert!(wrapped
        .to_string()
        .contains("Server was unable to read request."));
}

#[tokio::test]
async fn test_http_error_without_fault_is_wrapped() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path(SERVICE_PATH);
        then.status(503).body("Service Unavailable");
    });

    let verifier = RemoteVerifier::new(directory_for(&server));
    let err = verifier
        .verify("10000000146", "ali", "veli", 1990)
        .await
        .unwrap_err();

    assert!(matches!(err, KimlikError::DirectoryUnavailable { .. }));
    assert!(err.to_string().contains("HTTP 503"));
}

#[tokio::test]
async fn test_unparsable_body_is_wrapped() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path(SERVICE_PATH);
        then.status(200).body("<html><body>maintenance</body></html>");
    });

    let verifier = RemoteVerifier::new(directory_for(&server));
    let err = verifier
        .verify("10000000146", "ali", "veli", 1990)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("missing TCKimlikNoDogrulaResult"));
}

#[tokio::test]
async fn test_connection_failure_is_wrapped() {
    // Nothing listens on port 9 of the loopback interface in the test environment.
    let config = DirectoryConfig::default().with_endpoint("http://127.0.0.1:9/KPSPublic.asmx");
    let verifier = RemoteVerifier::new(SoapDirectoryService::new(config));

    let err = verifier
        .verify("10000000146", "ali", "veli", 1990)
        .await
        .unwrap_err();

    match err {
        KimlikError::DirectoryUnavailable { message } => {
            assert!(message.starts_with("HTTP request failed"))
        }
        other => panic!("expected DirectoryUnavailable, got {:?}", other),
    }
}
