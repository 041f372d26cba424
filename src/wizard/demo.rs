use std::io::{self, Write};

use crate::{
    config::ServerSection,
    wizard::render::{print_config, render_config, write_banner, write_rule, TemplateValues},
};

/// Print a scripted session followed by the placeholder configuration. Makes no network calls.
pub fn show_demo(out: &mut dyn Write, server: &ServerSection) -> io::Result<()> {
    writeln!(out)?;
    write_banner(out, "Telegram MCP Setup Wizard (DEMO MODE)")?;
    writeln!(out)?;
    writeln!(out, "Step 1: Enter your Telegram API credentials")?;
    writeln!(out, "        (from https://my.telegram.org)")?;
    writeln!(out)?;
    writeln!(out, "API ID (number): 12345678")?;
    writeln!(out, "API Hash (string): abc123def456ghi789jkl012")?;
    writeln!(out)?;
    write_rule(out)?;
    writeln!(out, "Step 2: Connect your Telegram account")?;
    write_rule(out)?;
    writeln!(out)?;
    writeln!(out, "Phone number: +1234567890")?;
    writeln!(out, "Enter code: 12345")?;
    writeln!(out)?;
    write_banner(out, "SUCCESS! Here's your config.")?;

    let rendered = render_config(server, &TemplateValues::placeholders()).map_err(io::Error::from)?;
    print_config(out, &rendered)
}
