use std::path::Path;

use serde::Deserialize;

use crate::lib::errors::ConfigError;

pub const DEFAULT_SERVER_NAME: &str = "telegram";
pub const DEFAULT_CLI_NAME: &str = "telegram-mcp";
pub const DEFAULT_IMAGE: &str = "bayramannakov/telegram-mcp:latest";
pub const DEFAULT_SCOPE: McpScope = McpScope::User;

/// Claude Code configuration scope passed to `claude mcp add -s`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum McpScope {
    Local,
    User,
    Project,
}

impl McpScope {
    pub const fn as_str(&self) -> &'static str {
        match self {
            McpScope::Local => "local",
            McpScope::User => "user",
            McpScope::Project => "project",
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "local" => Some(McpScope::Local),
            "user" => Some(McpScope::User),
            "project" => Some(McpScope::Project),
            _ => None,
        }
    }
}

/// How the MCP server is named and launched in the rendered snippets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSection {
    /// Key under `mcpServers` in claude_desktop_config.json.
    pub name: String,
    /// Name registered with `claude mcp add`.
    pub cli_name: String,
    pub scope: McpScope,
    /// Docker image that runs the MCP server.
    pub image: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            name: DEFAULT_SERVER_NAME.to_string(),
            cli_name: DEFAULT_CLI_NAME.to_string(),
            scope: DEFAULT_SCOPE,
            image: DEFAULT_IMAGE.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawServerSection {
    pub name: Option<String>,
    pub cli_name: Option<String>,
    pub scope: Option<String>,
    pub image: Option<String>,
}

pub fn parse_server_section(
    raw: Option<RawServerSection>,
    path: &Path,
) -> Result<ServerSection, ConfigError> {
    let raw = raw.unwrap_or_default();
    let name = non_blank(raw.name, DEFAULT_SERVER_NAME, "server.name", path)?;
    let cli_name = non_blank(raw.cli_name, DEFAULT_CLI_NAME, "server.cli_name", path)?;
    let image = non_blank(raw.image, DEFAULT_IMAGE, "server.image", path)?;
    let scope = match raw.scope {
        None => DEFAULT_SCOPE,
        Some(value) => McpScope::parse(&value).ok_or_else(|| ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "server.scope",
            message: format!("`{value}` is not one of local, user, project"),
        })?,
    };

    Ok(ServerSection {
        name,
        cli_name,
        scope,
        image,
    })
}

fn non_blank(
    value: Option<String>,
    default: &str,
    field: &'static str,
    path: &Path,
) -> Result<String, ConfigError> {
    match value {
        None => Ok(default.to_string()),
        Some(value) if value.trim().is_empty() || value.chars().any(char::is_whitespace) => {
            Err(ConfigError::InvalidField {
                path: path.to_path_buf(),
                field,
                message: "Value must be non-empty and contain no whitespace".into(),
            })
        }
        Some(value) => Ok(value),
    }
}
