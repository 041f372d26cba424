//! Claude Desktop / Claude Code configuration rendering.
use std::{collections::BTreeMap, io::Write};

use serde::Serialize;

use crate::{
    config::ServerSection,
    telegram::{ApiCredentials, SessionToken},
};

pub const ENV_API_ID: &str = "TELEGRAM_API_ID";
pub const ENV_API_HASH: &str = "TELEGRAM_API_HASH";
pub const ENV_SESSION_STRING: &str = "TELEGRAM_SESSION_STRING";

pub const PLACEHOLDER_API_ID: &str = "YOUR_API_ID";
pub const PLACEHOLDER_API_HASH: &str = "YOUR_API_HASH";
pub const PLACEHOLDER_SESSION_STRING: &str = "YOUR_SESSION_STRING";

pub(crate) const RULE_WIDTH: usize = 58;

/// Values substituted into both templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateValues {
    pub api_id: String,
    pub api_hash: String,
    pub session_string: String,
}

impl TemplateValues {
    pub fn from_login(credentials: &ApiCredentials, session: &SessionToken) -> Self {
        Self {
            api_id: credentials.api_id.to_string(),
            api_hash: credentials.api_hash.clone(),
            session_string: session.as_str().to_string(),
        }
    }

    pub fn placeholders() -> Self {
        Self {
            api_id: PLACEHOLDER_API_ID.into(),
            api_hash: PLACEHOLDER_API_HASH.into(),
            session_string: PLACEHOLDER_SESSION_STRING.into(),
        }
    }

    /// `KEY=value` assignments in launch order.
    pub fn env_assignments(&self) -> [String; 3] {
        [
            format!("{ENV_API_ID}={}", self.api_id),
            format!("{ENV_API_HASH}={}", self.api_hash),
            format!("{ENV_SESSION_STRING}={}", self.session_string),
        ]
    }
}

#[derive(Debug, Serialize)]
struct DesktopConfig<'a> {
    #[serde(rename = "mcpServers")]
    mcp_servers: BTreeMap<&'a str, DesktopServer<'a>>,
}

#[derive(Debug, Serialize)]
struct DesktopServer<'a> {
    command: &'a str,
    args: Vec<String>,
}

/// Both snippets, ready to print.
#[derive(Debug, Clone)]
pub struct RenderedConfig {
    /// Pretty-printed claude_desktop_config.json fragment.
    pub desktop_json: String,
    /// One-line `claude mcp add` invocation.
    pub cli_command: String,
}

/// `docker run` arguments shared by both snippets.
fn docker_args(server: &ServerSection, values: &TemplateValues) -> Vec<String> {
    let mut args: Vec<String> = ["run", "--rm", "-i"].iter().map(|s| s.to_string()).collect();
    for assignment in values.env_assignments() {
        args.push("-e".into());
        args.push(assignment);
    }
    args.push(server.image.clone());
    args
}

pub fn render_config(
    server: &ServerSection,
    values: &TemplateValues,
) -> serde_json::Result<RenderedConfig> {
    let args = docker_args(server, values);

    let desktop = DesktopConfig {
        mcp_servers: BTreeMap::from([(
            server.name.as_str(),
            DesktopServer {
                command: "docker",
                args: args.clone(),
            },
        )]),
    };
    let desktop_json = serde_json::to_string_pretty(&desktop)?;

    let cli_command = format!(
        "claude mcp add {name} -s {scope} -- docker {args}",
        name = server.cli_name,
        scope = server.scope.as_str(),
        args = args.join(" ")
    );

    Ok(RenderedConfig {
        desktop_json,
        cli_command,
    })
}

pub(crate) fn write_banner(out: &mut dyn Write, title: &str) -> std::io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out, "{rule}")?;
    writeln!(out, "  {title}")?;
    writeln!(out, "{rule}")
}

pub(crate) fn write_rule(out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))
}

/// Print both snippets with the surrounding instructions.
pub fn print_config(out: &mut dyn Write, rendered: &RenderedConfig) -> std::io::Result<()> {
    writeln!(out)?;
    write_banner(out, "Option A: Claude Desktop")?;
    writeln!(out)?;
    writeln!(out, "Paste this into your claude_desktop_config.json:")?;
    writeln!(out)?;
    write_rule(out)?;
    writeln!(out, "{}", rendered.desktop_json)?;
    write_rule(out)?;
    writeln!(out)?;
    writeln!(out, "Config file location:")?;
    writeln!(
        out,
        "  Mac:     ~/Library/Application Support/Claude/claude_desktop_config.json"
    )?;
    writeln!(out, "  Windows: %APPDATA%\\Claude\\claude_desktop_config.json")?;
    writeln!(out)?;

    write_banner(out, "Option B: Claude Code (CLI)")?;
    writeln!(out)?;
    writeln!(out, "Run this command in your terminal:")?;
    writeln!(out)?;
    write_rule(out)?;
    writeln!(out, "{}", rendered.cli_command)?;
    write_rule(out)?;
    writeln!(out)?;
    writeln!(out, "Then restart Claude Code and test:")?;
    writeln!(out, "  \"Show my unread Telegram messages\"")?;
    writeln!(out)?;
    out.flush()
}
