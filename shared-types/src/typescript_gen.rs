use ts_rs::TS;

/// Every type the API puts on the wire, in dependency order.
pub const API_TYPES: &[&str] = &[
    "ChatRole",
    "SaveChatRequest",
    "SaveChatResponse",
    "ChatMessage",
    "ErrorResponse",
    "HealthResponse",
];

/// Renders the named wire types as one TypeScript module body, without the
/// per-file import lines ts-rs emits.
pub fn generate_typescript_definitions(
    type_names: &[&str],
) -> Result<String, Box<dyn std::error::Error>> {
    if type_names.is_empty() {
        return Err("No type names provided".into());
    }

    let definitions = type_names
        .iter()
        .map(|name| export_type(name).map(|raw| strip_ts_header(&raw)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(definitions
        .into_iter()
        .filter(|def| !def.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n"))
}

fn export_type(name: &str) -> Result<String, Box<dyn std::error::Error>> {
    use crate::*;

    let exported = match name {
        "ChatRole" => ChatRole::export_to_string()?,
        "SaveChatRequest" => SaveChatRequest::export_to_string()?,
        "SaveChatResponse" => SaveChatResponse::export_to_string()?,
        "ChatMessage" => ChatMessage::export_to_string()?,
        "ErrorResponse" => ErrorResponse::export_to_string()?,
        "HealthResponse" => HealthResponse::export_to_string()?,
        unknown => {
            return Err(format!(
                "Unknown type '{}', expected one of: {}",
                unknown,
                API_TYPES.join(", ")
            )
            .into())
        }
    };

    Ok(exported)
}

fn strip_ts_header(raw: &str) -> String {
    raw.lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| {
            let trimmed = line.trim_start();
            !(trimmed.starts_with("import type")
                || trimmed.starts_with("// This file was generated"))
        })
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
