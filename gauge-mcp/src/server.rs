//! JSON-RPC handling for the MCP tools

use std::io::{BufRead, Write};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use tracing::{debug, info, warn};
use gauge::{ConvertError, RateSource, Session};

use crate::error::AppError;

pub const PROTOCOL_VERSION: &str = "2025-11-25";
const SERVER_NAME: &str = "gauge";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

const PARSE_ERROR: i32 = -32700;
const METHOD_NOT_FOUND: i32 = -32601;
const INVALID_PARAMS: i32 = -32602;

// MCP Protocol types
#[derive(Debug, Deserialize)]
pub struct McpRequest {
    #[allow(dead_code)]
    jsonrpc: String,
    id: Option<JsonValue>,
    method: String,
    #[serde(default)]
    params: Option<JsonValue>,
}

#[derive(Debug, Serialize)]
pub struct McpResponse {
    jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<McpError>,
}

#[derive(Debug, Serialize)]
pub struct McpError {
    code: i32,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<JsonValue>,
}

impl McpError {
    fn invalid_params(message: impl Into<String>) -> Self {
        McpError { code: INVALID_PARAMS, message: message.into(), data: None }
    }
}

impl McpResponse {
    fn new(id: Option<JsonValue>, result: Result<JsonValue, McpError>) -> Self {
        match result {
            Ok(r) => McpResponse { jsonrpc: "2.0".to_string(), id, result: Some(r), error: None },
            Err(e) => McpResponse { jsonrpc: "2.0".to_string(), id, result: None, error: Some(e) },
        }
    }

    fn to_line(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            format!(
                r#"{{"jsonrpc":"2.0","error":{{"code":-32603,"message":"cannot encode response: {}"}}}}"#,
                e.to_string().replace('"', "'")
            )
        })
    }
}

/// One MCP connection wrapping one conversion session
pub struct Server<S> {
    session: Session<S>,
}

impl<S: RateSource> Server<S> {
    pub fn new(session: Session<S>) -> Self {
        Self { session }
    }

    /// Handle one input line; `None` for notifications
    pub fn handle_line(&mut self, line: &str) -> Option<String> {
        let request: McpRequest = match serde_json::from_str(line) {
            Ok(r) => r,
            Err(e) => {
                warn!(error = %e, "unparseable request");
                let error = McpError { code: PARSE_ERROR, message: format!("Parse error: {}", e), data: None };
                return Some(McpResponse::new(None, Err(error)).to_line());
            }
        };

        debug!(method = %request.method, "processing");
        let response = self.handle_request(&request);

        // Notifications (no id) get no response
        if request.id.is_none() {
            debug!(method = %request.method, "notification processed");
            return None;
        }
        Some(response.to_line())
    }

    pub fn handle_request(&mut self, request: &McpRequest) -> McpResponse {
        let result = match request.method.as_str() {
            // Lifecycle
            "initialize" => handle_initialize(&request.params),
            "initialized" | "notifications/initialized" => Ok(json!({})),
            "ping" => Ok(json!({})),

            // Tools
            "tools/list" => Ok(tools_list()),
            "tools/call" => self.handle_tool_call(&request.params),

            _ => Err(McpError {
                code: METHOD_NOT_FOUND,
                message: format!("Method not found: {}", request.method),
                data: None,
            }),
        };

        McpResponse::new(request.id.clone(), result)
    }

    fn handle_tool_call(&mut self, params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
        let params = params.as_ref().ok_or_else(|| McpError::invalid_params("Missing params"))?;

        let name = params.get("name")
            .and_then(|v| v.as_str())
            .ok_or_else(|| McpError::invalid_params("Missing tool name"))?;

        let args = params.get("arguments").cloned().unwrap_or(json!({}));

        match name {
            "list_categories" => Ok(self.tool_list_categories()),
            "units_for" => self.tool_units_for(&args),
            "convert" => self.tool_convert(&args),
            "history" => Ok(self.tool_history()),
            "unit_definitions" => Ok(self.tool_unit_definitions()),
            _ => Err(McpError::invalid_params(format!("Unknown tool: {}", name))),
        }
    }

    fn tool_list_categories(&self) -> JsonValue {
        let categories = self.session.list_categories();
        json!({
            "content": [{ "type": "text", "text": categories.join("\n") }],
            "categories": categories,
            "isError": false
        })
    }

    fn tool_units_for(&self, args: &JsonValue) -> Result<JsonValue, McpError> {
        let category = str_arg(args, "category")?;
        Ok(match self.session.units_for(category) {
            Ok(units) => json!({
                "content": [{ "type": "text", "text": units.join("\n") }],
                "category": category,
                "units": units,
                "isError": false
            }),
            Err(e) => tool_error(&e),
        })
    }

    fn tool_convert(&mut self, args: &JsonValue) -> Result<JsonValue, McpError> {
        let category = str_arg(args, "category")?;
        let from = str_arg(args, "from")?;
        let to = str_arg(args, "to")?;
        let value = number_arg(args, "value")?;

        Ok(match self.session.convert(category, from, to, value) {
            Ok(result) => {
                let rendered = self.session.display(&result);
                json!({
                    "content": [{ "type": "text", "text": format!("Converted Value: {} {}", rendered, to) }],
                    "result": rendered,
                    "unit": to,
                    "isError": false
                })
            }
            Err(e) => tool_error(&e),
        })
    }

    fn tool_history(&self) -> JsonValue {
        let entries = self.session.history_list();
        let text = if entries.is_empty() {
            "No conversions yet".to_string()
        } else {
            entries.join("\n\n")
        };
        json!({
            "content": [{ "type": "text", "text": text }],
            "entries": entries,
            "isError": false
        })
    }

    fn tool_unit_definitions(&self) -> JsonValue {
        let definitions = self.session.unit_definitions();
        let text = definitions.iter().map(|d| d.to_string()).collect::<Vec<_>>().join("\n");
        json!({
            "content": [{ "type": "text", "text": text }],
            "definitions": definitions,
            "isError": false
        })
    }
}

/// Read requests line by line until EOF, writing one response line each
pub fn serve<S, R, W>(server: &mut Server<S>, reader: R, mut writer: W) -> Result<(), AppError>
where
    S: RateSource,
    R: BufRead,
    W: Write,
{
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        debug!(bytes = line.len(), "received");
        if let Some(response) = server.handle_line(line) {
            writeln!(writer, "{}", response)?;
            writer.flush()?;
        }
    }

    info!("client disconnected (EOF)");
    Ok(())
}

fn handle_initialize(params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let client_info = params.as_ref()
        .and_then(|p| p.get("clientInfo"))
        .and_then(|c| c.get("name"))
        .and_then(|n| n.as_str())
        .unwrap_or("unknown");

    // Use client's protocol version for compatibility
    let client_protocol = params.as_ref()
        .and_then(|p| p.get("protocolVersion"))
        .and_then(|v| v.as_str())
        .unwrap_or(PROTOCOL_VERSION);

    info!(client = client_info, protocol = client_protocol, "client connected");

    Ok(json!({
        "protocolVersion": client_protocol,
        "serverInfo": {
            "name": SERVER_NAME,
            "version": SERVER_VERSION,
            "description": "Unit and currency converter with a rolling history"
        },
        "capabilities": {
            "tools": {
                "listChanged": false
            }
        },
        "instructions": "Use list_categories and units_for to pick units, then convert. Currency rates are fetched live. history shows the last 10 conversions."
    }))
}

fn tools_list() -> JsonValue {
    json!({
        "tools": [
            {
                "name": "list_categories",
                "description": "List conversion categories in display order.",
                "inputSchema": {
                    "type": "object",
                    "properties": {}
                }
            },
            {
                "name": "units_for",
                "description": "List the units of a category in display order. The first unit is the default.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "category": {
                            "type": "string",
                            "description": "Category name, e.g. \"Length\" or \"Currency\""
                        }
                    },
                    "required": ["category"]
                }
            },
            {
                "name": "convert",
                "description": "Convert a value between two units of a category and record it in the history.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "category": { "type": "string", "description": "Category name" },
                        "from": { "type": "string", "description": "Source unit or currency code" },
                        "to": { "type": "string", "description": "Target unit or currency code" },
                        "value": { "type": "number", "minimum": 0, "description": "Value to convert" }
                    },
                    "required": ["category", "from", "to", "value"]
                }
            },
            {
                "name": "history",
                "description": "Show the last 10 conversions, oldest first.",
                "inputSchema": {
                    "type": "object",
                    "properties": {}
                }
            },
            {
                "name": "unit_definitions",
                "description": "Short glossary of common SI units.",
                "inputSchema": {
                    "type": "object",
                    "properties": {}
                }
            }
        ]
    })
}

/// Conversion failures are tool results, not protocol errors
fn tool_error(e: &ConvertError) -> JsonValue {
    let report = e.report();
    json!({
        "content": [{ "type": "text", "text": report.to_string() }],
        "error": report.to_json(),
        "isError": true
    })
}

fn str_arg<'a>(args: &'a JsonValue, name: &str) -> Result<&'a str, McpError> {
    args.get(name)
        .and_then(|v| v.as_str())
        .ok_or_else(|| McpError::invalid_params(format!("Missing {} argument", name)))
}

/// Numbers, or numeric strings such as "12.5"
fn number_arg(args: &JsonValue, name: &str) -> Result<f64, McpError> {
    let value = args.get(name)
        .ok_or_else(|| McpError::invalid_params(format!("Missing {} argument", name)))?;

    value.as_f64()
        .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok()))
        .ok_or_else(|| McpError::invalid_params(format!("{} must be a number, got {}", name, value)))
}
