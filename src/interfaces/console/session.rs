use super::command::{Command, HELP};
use super::console::ConsoleUI;
use crate::application::counter::Counter;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    Lines(Vec<String>),
    Rejected {
        reason: String,
        raw_input: Option<String>,
    },
    Quit,
}

pub async fn execute(counter: &Counter, command: Command) -> Reply {
    match command {
        Command::Empty => Reply::Lines(Vec::new()),
        Command::Add(words) => {
            let before = counter.total_words();
            match counter.add_words(&words).await {
                Ok(()) => Reply::Lines(vec![format!(
                    "added {} word(s), total {}",
                    words.len(),
                    counter.total_words()
                )]),
                Err(e) => {
                    log::debug!(
                        "console.add_rejected counted_before_failure={}",
                        counter.total_words().saturating_sub(before)
                    );
                    Reply::Rejected {
                        reason: e.reason().to_string(),
                        raw_input: e.raw_input().map(str::to_string),
                    }
                }
            }
        }
        Command::Count(word) => {
            let count = counter.get_count(word.as_str()).await;
            let canonical = counter.resolver().resolve(&word).await;
            Reply::Lines(vec![format!("{} ({}) = {}", word, canonical, count)])
        }
        Command::Resolve(words) => {
            let resolved = counter.resolver().resolve_batch(&words).await;
            let lines = words
                .iter()
                .filter_map(|w| resolved.get(w).map(|c| format!("{} -> {}", w, c)))
                .collect();
            Reply::Lines(lines)
        }
        Command::Learn(foreign, english) => {
            counter
                .resolver()
                .add_custom_translation(foreign.as_str(), english.as_str());
            Reply::Lines(vec![format!(
                "{} now counts as {}",
                foreign.trim().to_lowercase(),
                english.trim().to_lowercase()
            )])
        }
        Command::Top(n) => {
            let top = counter.top(n);
            if top.is_empty() {
                return Reply::Lines(vec!["nothing counted yet".to_string()]);
            }
            Reply::Lines(
                top.into_iter()
                    .enumerate()
                    .map(|(i, (word, count))| format!("{:>3}. {:<20} {}", i + 1, word, count))
                    .collect(),
            )
        }
        Command::Stats => {
            let stats = counter.resolver().stats();
            Reply::Lines(vec![
                format!(
                    "words={} unique={} empty={}",
                    counter.total_words(),
                    counter.unique_word_count(),
                    counter.is_empty()
                ),
                format!(
                    "cache={} translated={} dictionary={}",
                    stats.cache_size, stats.successful_translations, stats.static_translations
                ),
                format!(
                    "hits cache={} remote={} static={} identity={}",
                    stats.cache_hits,
                    stats.remote_hits,
                    stats.static_hits,
                    stats.identity_fallbacks
                ),
            ])
        }
        Command::Reset => {
            counter.reset();
            Reply::Lines(vec![format!("counter reset, total {}", counter.total_words())])
        }
        Command::Help => Reply::Lines(
            HELP.iter()
                .map(|(usage, about)| format!("{:<28} {}", usage, about))
                .collect(),
        ),
        Command::Quit => Reply::Quit,
    }
}

/// Reads commands from stdin until `quit` or end of input.
pub async fn run(counter: Arc<Counter>) -> std::io::Result<()> {
    ConsoleUI::print_banner("lexicount", "multilingual word counter, type help");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        ConsoleUI::print_prompt()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(usage) => {
                ConsoleUI::print_error(&usage);
                continue;
            }
        };

        match execute(&counter, command).await {
            Reply::Lines(output) => {
                for line in output {
                    ConsoleUI::print_info(&line);
                }
            }
            Reply::Rejected { reason, raw_input } => {
                ConsoleUI::print_rejection(&reason, raw_input.as_deref());
            }
            Reply::Quit => break,
        }
    }

    ConsoleUI::print_success(&format!("bye, {} words counted", counter.total_words()));
    Ok(())
}
