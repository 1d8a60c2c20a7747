//! JSON request files holding one measurement or a list of them.

use serde::{Deserialize, Serialize};

use crate::dimension::MeasurementRequest;

/// Contents of a request file: one request or a list drawn in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestFile {
    Many(Vec<MeasurementRequest>),
    One(Box<MeasurementRequest>),
}

impl RequestFile {
    pub fn into_requests(self) -> Vec<MeasurementRequest> {
        match self {
            RequestFile::Many(requests) => requests,
            RequestFile::One(request) => vec![*request],
        }
    }
}

/// Parses request JSON. Missing style objects and fields take their defaults.
pub fn parse_requests_json(json: &str) -> std::io::Result<Vec<MeasurementRequest>> {
    let file: RequestFile = serde_json::from_str(json)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    Ok(file.into_requests())
}

pub fn read_requests_json(path: &str) -> std::io::Result<Vec<MeasurementRequest>> {
    let contents = super::read_to_string(path)?;
    parse_requests_json(&contents)
}

pub fn write_requests_json(path: &str, requests: &[MeasurementRequest]) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(requests).map_err(std::io::Error::other)?;
    super::write_string(path, &json)
}
