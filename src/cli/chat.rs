// src/cli/chat.rs — Interactive REPL

use std::io::{self, BufRead, Write};

use crate::core::orchestrator::Orchestrator;

/// Run the interactive chat loop. Each run gets its own synthetic session,
/// so favorites and history accumulate across turns until exit.
pub fn run_chat(bot: &Orchestrator) -> anyhow::Result<()> {
    let session_id = uuid::Uuid::new_v4().to_string();

    eprintln!(
        "hodlbot v{} | session {} | type 'quit' to exit\n",
        env!("CARGO_PKG_VERSION"),
        &session_id[..8],
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("you> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == "quit" || input == "exit" || input == "/quit" {
            break;
        }

        let reply = bot.process(input, &session_id);
        println!("bot> {}\n", strip_tags(&reply.text));
    }
    Ok(())
}

/// Turn `<br>` into newlines and drop other HTML tags for terminal output.
fn strip_tags(text: &str) -> String {
    let text = text.replace("<br>", "\n");
    let mut out = String::with_capacity(text.len());
    let mut in_tag = false;
    for ch in text.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}
