use crate::core::{ConfigProvider, DirectoryService, VerificationRequest};
use crate::utils::error::{KimlikError, Result};
use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;

const SERVICE_NAMESPACE: &str = "http://tckimlik.nvi.gov.tr/WS";

/// [`DirectoryService`] backed by the KPSPublic SOAP 1.1 endpoint.
///
/// A fresh HTTP client is built for every call, so concurrent verifications
/// share nothing.
pub struct SoapDirectoryService<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> SoapDirectoryService<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    fn build_client(&self) -> Result<Client> {
        let mut builder = Client::builder();
        if let Some(agent) = self.config.user_agent() {
            builder = builder.user_agent(agent.to_string());
        }
        Ok(builder.build()?)
    }
}

#[async_trait]
impl<C: ConfigProvider> DirectoryService for SoapDirectoryService<C> {
    async fn verify(&self, request: &VerificationRequest) -> Result<bool> {
        let client = self.build_client()?;
        let envelope = build_envelope(request);

        tracing::debug!("POST {} ({} bytes)", self.config.endpoint(), envelope.len());
        let response = client
            .post(self.config.endpoint())
            .header("Content-Type", "text/xml; charset=utf-8")
            .header("SOAPAction", format!("\"{}\"", self.config.soap_action()))
            .body(envelope)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        tracing::debug!("Directory response status: {}", status);

        // Faults come back with HTTP 500, so look for one before judging the status.
        if let Some(fault) = parse_fault(&body)? {
            return Err(fault);
        }

        if !status.is_success() {
            return Err(KimlikError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        parse_result(&body)
    }
}

pub fn build_envelope(request: &VerificationRequest) -> String {
    format!(
        concat!(
            r#"<?xml version="1.0" encoding="utf-8"?>"#,
            r#"<soap:Envelope xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" "#,
            r#"xmlns:xsd="http://www.w3.org/2001/XMLSchema" "#,
            r#"xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">"#,
            "<soap:Body>",
            r#"<TCKimlikNoDogrula xmlns="{namespace}">"#,
            "<TCKimlikNo>{number}</TCKimlikNo>",
            "<Ad>{first_name}</Ad>",
            "<Soyad>{last_name}</Soyad>",
            "<DogumYili>{birth_year}</DogumYili>",
            "</TCKimlikNoDogrula>",
            "</soap:Body>",
            "</soap:Envelope>"
        ),
        namespace = SERVICE_NAMESPACE,
        number = escape_xml(&request.identity_number),
        first_name = escape_xml(&request.first_name),
        last_name = escape_xml(&request.last_name),
        birth_year = request.birth_year,
    )
}

fn escape_xml(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&apos;"),
            c => result.push(c),
        }
    }
    result
}

fn unescape_xml(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

fn pattern(expr: &str) -> Result<Regex> {
    Regex::new(expr).map_err(|e| KimlikError::InvalidResponse {
        message: format!("bad response pattern: {}", e),
    })
}

/// Extracts the boolean from `<TCKimlikNoDogrulaResult>`, any namespace prefix.
pub fn parse_result(body: &str) -> Result<bool> {
    let re = pattern(
        r"<(?:[\w.-]+:)?TCKimlikNoDogrulaResult(?:\s[^>]*)?>\s*([^<]*?)\s*</(?:[\w.-]+:)?TCKimlikNoDogrulaResult>",
    )?;

    let value = re
        .captures(body)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| KimlikError::InvalidResponse {
            message: "missing TCKimlikNoDogrulaResult element".to_string(),
        })?;

    match value {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => Err(KimlikError::InvalidResponse {
            message: format!("unexpected TCKimlikNoDogrulaResult value '{}'", other),
        }),
    }
}

/// Returns the SOAP fault carried by `body`, if any.
pub fn parse_fault(body: &str) -> Result<Option<KimlikError>> {
    let fault = pattern(r"<(?:[\w.-]+:)?Fault[\s>]")?;
    if !fault.is_match(body) {
        return Ok(None);
    }

    let code = pattern(r"(?s)<faultcode[^>]*>(.*?)</faultcode>")?;
    let message = pattern(r"(?s)<faultstring[^>]*>(.*?)</faultstring>")?;
    let capture = |re: &Regex| {
        re.captures(body)
            .and_then(|caps| caps.get(1))
            .map(|m| unescape_xml(m.as_str().trim()))
    };

    Ok(Some(KimlikError::SoapFault {
        code: capture(&code).unwrap_or_else(|| "unknown".to_string()),
        message: capture(&message).unwrap_or_else(|| "no fault string".to_string()),
    }))
}
