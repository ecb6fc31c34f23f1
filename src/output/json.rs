//! Pretty printed JSON output.

use crate::processing::{BatchOutcome, Response};
use std::error::Error;

pub fn render_json(response: &Response) -> Result<String, Box<dyn Error>> {
    let mut json = serde_json::to_string_pretty(response)
        .map_err(|e| format!("Error serializing JSON: {e}"))?;
    json.push('\n');
    Ok(json)
}

pub fn render_batch_json(outcomes: &[BatchOutcome]) -> Result<String, Box<dyn Error>> {
    let mut json = serde_json::to_string_pretty(outcomes)
        .map_err(|e| format!("Error serializing JSON: {e}"))?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::{execute, run_batch, Request};
    use serde_json::{json, Value};

    #[test]
    fn test_render_details_json() {
        let response = execute(
            &Request::Details {
                ip_address: "192.168.1.1".to_string(),
                mask_prefix: 24,
            },
            10,
        )
        .unwrap();
        let value: Value = serde_json::from_str(&render_json(&response).unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "ip": {
                    "address": "192.168.1.1",
                    "ip_class": "C",
                    "ip_status": "Private"
                },
                "network": {
                    "ip": "192.168.1.0",
                    "hosts": 254,
                    "broadcast": "192.168.1.255",
                    "subnet_mask": "255.255.255.0"
                }
            })
        );
    }

    #[test]
    fn test_render_batch_json() {
        let outcomes = run_batch(
            &[
                Request::Binary {
                    ip_address: "10.0.0.1".to_string(),
                },
                Request::Binary {
                    ip_address: "10.0.0".to_string(),
                },
            ],
            10,
        );
        let value: Value = serde_json::from_str(&render_batch_json(&outcomes).unwrap()).unwrap();
        assert_eq!(
            value[0]["response"]["ip_address_binary"],
            "00001010000000000000000000000001"
        );
        assert_eq!(value[1]["error"], "invalid IP address format: '10.0.0'");
    }
}
