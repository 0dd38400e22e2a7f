use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::env::ChatSettings;
use crate::core::chat::{ChatCompletion, ChatSession, TurnOutcome, format_message};
use crate::errors::AppResult;
use crate::providers::openai::OpenAiClient;
use crate::ui::messages::{error, header, info};
use std::io::{self, BufRead, Write};

const QUIT: &str = "/quit";

pub fn handle(cmd: &Commands, cfg: &Config, settings: &ChatSettings) -> AppResult<()> {
    if let Commands::Chat { ask } = cmd {
        let client = OpenAiClient::new(settings.clone());
        let session = ChatSession::new(&cfg.chat_model);

        header("Chat with AI");
        match ask {
            Some(prompt) => {
                let turn = session.submit(prompt, &client);
                print!("{}", turn.session.transcript(cfg.wrap_width));
                if let TurnOutcome::Failed { error: msg } = &turn.outcome {
                    error(msg);
                }
            }
            None => {
                info(format!("Type a question and press Enter; {QUIT} to leave."));
                let stdin = io::stdin();
                run_loop(session, stdin.lock(), &client, cfg.wrap_width)?;
            }
        }
    }
    Ok(())
}

/// Interactive loop over `input` lines until `/quit` or end of input.
/// Returns the final session so callers can inspect the conversation.
///
/// Lines are appended to the draft, which only a turn with `clear_input`
/// empties; whitespace from an ignored line stays part of the next prompt.
pub fn run_loop<R: BufRead, C: ChatCompletion + ?Sized>(
    mut session: ChatSession,
    input: R,
    client: &C,
    width: usize,
) -> AppResult<ChatSession> {
    let mut lines = input.lines();
    let mut buffer = String::new();

    loop {
        print!("Your question> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        buffer.push_str(&line?);

        if buffer.trim() == QUIT {
            break;
        }

        let turn = session.submit(&buffer, client);
        session = turn.session;

        match &turn.outcome {
            TurnOutcome::Ignored => {}
            TurnOutcome::Replied(_) => {
                if let Some(last) = session.history().last() {
                    print!("{}", format_message(last, width));
                }
            }
            TurnOutcome::Failed { error: msg } => error(msg),
        }

        if turn.clear_input {
            buffer.clear();
        }
    }

    println!();
    Ok(session)
}
