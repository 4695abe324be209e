//! Interactive advisor session
//!
//! Type messages as a student would. `insights` prints the aggregate
//! view for the session user, `detail <text>` asks the knowledge index
//! to expand on the last topic, and `quit` exits.
//!
//! Run with: cargo run --example guidance_repl

use std::io::{self, BufRead, Write};

use anyhow::Result;

use disha_agent::{CareerAdvisor, UserInsights};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let advisor = CareerAdvisor::new()?;
    let user = "demo";
    let mut last_reply: Option<disha_agent::AdvisorReply> = None;

    println!("disha career advisor");
    println!("type a message, `insights`, `detail <question>`, or `quit`");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();

        match line {
            "" => continue,
            "quit" | "exit" => break,
            "insights" => match advisor.insights(user) {
                UserInsights::NoData => println!("(no interactions yet)"),
                UserInsights::Summary(summary) => {
                    println!("{}", serde_json::to_string_pretty(&summary)?);
                }
            },
            _ => {
                if let Some(question) = line.strip_prefix("detail ") {
                    match &last_reply {
                        Some(reply) => match advisor.detailed_answer(reply.intent, question) {
                            Some(answer) => println!("{}", answer),
                            None => println!("(no detailed knowledge for `{}`)", reply.intent),
                        },
                        None => println!("(ask something first)"),
                    }
                    continue;
                }

                let reply = advisor.respond(user, line);
                println!(
                    "[{} {:.2} {}{}]",
                    reply.intent,
                    reply.confidence,
                    reply.emotion,
                    if reply.context_aware { " ctx" } else { "" }
                );
                println!("{}", reply.response);
                last_reply = Some(reply);
            }
        }
    }

    Ok(())
}
