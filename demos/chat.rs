//! Interactive terminal chat demo.
//!
//! Run with: cargo run --example chat
//! Requires: GOOGLE_API_KEY (or GOOGLE_API_KEY_1..GOOGLE_API_KEY_5) in the
//! environment or a .env file.
//!
//! Commands: 'quit' to exit, 'reset' to start over, 'save' to store the
//! conversation under conversation_history/.

use anyhow::Result;
use asha::history::save_conversation;
use asha::prelude::*;
use std::io::{self, BufRead, Write};
use std::path::Path;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = AppConfig::from_env()?.with_log_dir("logs");
    let engine = ChatEngine::from_config(&config)?;
    let mut session = ChatSession::new(engine);

    println!("ASHA — your AI career companion");
    println!("Tell me about your career situation, and I'll tailor my guidance.");
    println!("Type 'quit' to exit, 'reset' to start over, 'save' to store the conversation.\n");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("You: ");
        stdout.flush()?;

        let mut input = String::new();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();

        match input {
            "" => continue,
            "quit" | "exit" => break,
            "reset" => {
                session.reset();
                println!("Conversation cleared.\n");
                continue;
            }
            "save" => {
                let path =
                    save_conversation(Path::new("conversation_history"), session.messages(), None)?;
                println!("Saved to {}\n", path.display());
                continue;
            }
            _ => {}
        }

        let reply = session.send(input).await;
        println!("\nASHA: {}\n", reply);
    }

    println!("\nGoodbye! Session stats:");
    println!("  Turns: {}", session.messages().len() / 2);
    println!("  API calls: {}", session.engine().api_calls());
    if let Some(stats) = session.engine().cache_stats() {
        println!(
            "  Cache: {} hits, {} misses ({:.0}% hit rate)",
            stats.hits,
            stats.misses,
            stats.hit_rate() * 100.0
        );
    }

    Ok(())
}
