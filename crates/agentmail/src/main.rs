//! agentmail - Email accounts for AI agents
//!
//! A thin CLI over the AgentMail API: every subcommand performs exactly one
//! API call and prints the JSON response.

use clap::Parser;

mod commands;
mod output;

use commands::Cli;

const USAGE: &str = "\
AgentMail CLI - Email accounts for AI agents

Usage:
  agentmail [--api-key <key>] <command> <subcommand> [options]

Commands:
  inboxes      list | get | create | delete
  threads      list | get
  messages     send | reply | forward | update
  attachments  get

Examples:
  agentmail inboxes list --limit 5
  agentmail inboxes create --username mybot --display-name \"My Bot\"
  agentmail messages send inbox_123 --to user@example.com --subject Hello --text Hi
  agentmail threads list inbox_123 --labels '[\"unread\"]'

Environment:
  AGENTMAIL_API_KEY  Your AgentMail API key (required unless --api-key is given)

Get your API key from https://agentmail.to
Run 'agentmail --help' for all options.
";

fn main() {
    agentmail_core::logging::init();

    if std::env::args_os().len() <= 1 {
        print!("{USAGE}");
        return;
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version go to stdout and succeed
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    let result = cli.execute().and_then(|data| output::emit(&data));
    if let Err(e) = result {
        output::emit_error(&e);
        std::process::exit(1);
    }
}
