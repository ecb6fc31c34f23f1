//! Batch mode: run every request of a JSON file independently.

use super::request::{execute, Request, Response};
use crate::error::NetError;
use serde::Serialize;
use std::error::Error;
use std::path::Path;

/// Outcome of one request in a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutcome {
    /// Position of the request in the file.
    pub index: usize,
    pub request: Request,
    pub result: Result<Response, NetError>,
}

impl Serialize for BatchOutcome {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("BatchOutcome", 3)?;
        state.serialize_field("index", &self.index)?;
        state.serialize_field("op", self.request.op())?;
        match &self.result {
            Ok(response) => state.serialize_field("response", response)?,
            Err(e) => state.serialize_field("error", &e.to_string())?,
        }
        state.end()
    }
}

/// Parse a JSON array of requests.
///
/// Errors name the JSON path of the offending value, e.g. `[2].mask_prefix`.
pub fn parse_requests(json: &str) -> Result<Vec<Request>, Box<dyn Error>> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    let requests: Vec<Request> = serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| format!("Error parsing requests: path={} error={}", e.path(), e))?;
    Ok(requests)
}

/// Read and parse a request file.
pub fn read_requests<P: AsRef<Path>>(path: P) -> Result<Vec<Request>, Box<dyn Error>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(format!("Request file does not exist: {}", path.display()).into());
    }
    log::info!("Reading requests from {}", path.display());
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("Error reading request file {}: {e}", path.display()))?;
    parse_requests(&json)
}

/// Run every request. A failing request is recorded and the rest still run.
pub fn run_batch(requests: &[Request], subnet_limit: usize) -> Vec<BatchOutcome> {
    let outcomes: Vec<BatchOutcome> = requests
        .iter()
        .enumerate()
        .map(|(index, request)| {
            let result = execute(request, subnet_limit);
            if let Err(e) = &result {
                log::warn!("request #{index} ({}) failed: {e}", request.op());
            }
            BatchOutcome {
                index,
                request: request.clone(),
                result,
            }
        })
        .collect();

    log::info!(
        "batch done: {} requests, {} failed",
        outcomes.len(),
        outcomes.iter().filter(|o| o.result.is_err()).count()
    );
    outcomes
}
