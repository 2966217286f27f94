//! Core types for the generation domain

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::generation::GenerationError;

/// Payload type name marking a response without a body
pub const VOID_PAYLOAD: &str = "undefined";

/// Payload type name marking the generic error body shape
pub const ERROR_PAYLOAD: &str = "Error";

/// HTTP methods that have a request kind in the requests runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// Name of the request kind type in the requests runtime, e.g. `IGetApiRequestType`
    pub fn request_type_name(&self) -> &'static str {
        match self {
            HttpMethod::Get => "IGetApiRequestType",
            HttpMethod::Post => "IPostApiRequestType",
            HttpMethod::Put => "IPutApiRequestType",
            HttpMethod::Delete => "IDeleteApiRequestType",
        }
    }

}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Get => write!(f, "get"),
            HttpMethod::Post => write!(f, "post"),
            HttpMethod::Put => write!(f, "put"),
            HttpMethod::Delete => write!(f, "delete"),
        }
    }
}

impl FromStr for HttpMethod {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "get" => Ok(HttpMethod::Get),
            "post" => Ok(HttpMethod::Post),
            "put" => Ok(HttpMethod::Put),
            "delete" => Ok(HttpMethod::Delete),
            _ => Err(GenerationError::InvalidMethod(s.to_string())),
        }
    }
}

impl TryFrom<String> for HttpMethod {
    type Error = GenerationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Where a parameter travels in the request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ParameterLocation {
    Query,
    Header,
    Path,
    Body,
}

impl fmt::Display for ParameterLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterLocation::Query => write!(f, "query"),
            ParameterLocation::Header => write!(f, "header"),
            ParameterLocation::Path => write!(f, "path"),
            ParameterLocation::Body => write!(f, "body"),
        }
    }
}

impl FromStr for ParameterLocation {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "query" => Ok(ParameterLocation::Query),
            "header" => Ok(ParameterLocation::Header),
            "path" => Ok(ParameterLocation::Path),
            "body" => Ok(ParameterLocation::Body),
            _ => Err(GenerationError::InvalidParameterLocation(s.to_string())),
        }
    }
}

impl TryFrom<String> for ParameterLocation {
    type Error = GenerationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// One operation parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterInfo {
    /// Parameter name; a trailing `?` marks it optional
    pub name: String,
    /// Type reference text
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(rename = "in")]
    pub location: ParameterLocation,
    /// Wire header name for header parameters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_name: Option<String>,
}

impl ParameterInfo {
    /// Whether the name carries the optional marker
    pub fn is_optional(&self) -> bool {
        self.name.contains('?')
    }

    /// The name with the optional marker removed
    pub fn property_name(&self) -> String {
        self.name.replace('?', "")
    }
}

/// One possible response of an operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseSpec {
    /// Three digit status code; written as a string or a number in the input
    #[serde(deserialize_with = "deserialize_status_code")]
    pub status_code: String,
    /// Type reference text, or one of the `undefined` / `Error` sentinels
    pub payload_type: String,
    #[serde(default)]
    pub header_names: Vec<String>,
}

impl ResponseSpec {
    pub fn new(status_code: &str, payload_type: &str, header_names: &[&str]) -> Self {
        Self {
            status_code: status_code.to_string(),
            payload_type: payload_type.to_string(),
            header_names: header_names.iter().map(|h| h.to_string()).collect(),
        }
    }

    /// A 2xx status written with exactly three characters
    pub fn is_success(&self) -> bool {
        self.status_code.chars().count() == 3 && self.status_code.starts_with('2')
    }

    pub fn is_void(&self) -> bool {
        self.payload_type == VOID_PAYLOAD
    }

    pub fn is_basic_error(&self) -> bool {
        self.payload_type == ERROR_PAYLOAD
    }
}

fn deserialize_status_code<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StatusCode {
        Text(String),
        Number(u64),
    }

    Ok(match StatusCode::deserialize(deserializer)? {
        StatusCode::Text(code) => code,
        StatusCode::Number(code) => code.to_string(),
    })
}

/// One HTTP operation as produced by the upstream parser
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationInfo {
    pub method: HttpMethod,
    pub operation_id: String,
    #[serde(default)]
    pub parameters: Vec<ParameterInfo>,
    #[serde(default)]
    pub responses: Vec<ResponseSpec>,
    /// Accepted request header names
    #[serde(default)]
    pub headers: Vec<String>,
    /// Type names referenced by the generated code of this operation
    #[serde(default)]
    pub imported_types: Vec<String>,
    #[serde(default)]
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub produces: Option<String>,
}

impl OperationInfo {
    pub fn new(method: HttpMethod, operation_id: &str) -> Self {
        Self {
            method,
            operation_id: operation_id.to_string(),
            parameters: Vec::new(),
            responses: Vec::new(),
            headers: Vec::new(),
            imported_types: Vec::new(),
            path: String::new(),
            consumes: None,
            produces: None,
        }
    }

    pub fn with_response(mut self, response: ResponseSpec) -> Self {
        self.responses.push(response);
        self
    }

    pub fn with_parameter(mut self, name: &str, type_name: &str, location: ParameterLocation) -> Self {
        self.parameters.push(ParameterInfo {
            name: name.to_string(),
            type_name: type_name.to_string(),
            location,
            header_name: None,
        });
        self
    }

    pub fn with_imported_type(mut self, name: &str) -> Self {
        self.imported_types.push(name.to_string());
        self
    }

    /// The first response, in declaration order, whose status is a 3-character 2xx code
    pub fn success_response(&self) -> Option<&ResponseSpec> {
        self.responses.iter().find(|r| r.is_success())
    }
}

/// Generated artifact
#[derive(Debug, Clone)]
pub struct Artifact {
    pub path: PathBuf,
    pub content: String,
}

/// Result of generation
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub artifacts: Vec<Artifact>,
    pub operations_rendered: usize,
    pub decoder_blocks: usize,
}
