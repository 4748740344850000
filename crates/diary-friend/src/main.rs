//! The diary friend terminal app.

#[macro_use]
extern crate tracing;

use std::env;
use std::io::Write as _;
use std::time::Duration;

use diary_friend::render;
use diary_friend_core::credentials::{
    CredentialProvider, EnvKey, ExplicitKey, SecretsFile, resolve_api_key,
};
use diary_friend_core::session::Session;
use diary_friend_core::spectrum::Spectrum;
use diary_friend_core::{Analyzer, emotion};
use diary_friend_openai_model::{OpenAIConfigBuilder, OpenAIProvider};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use tokio::io::{self, AsyncBufReadExt};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut providers: Vec<Box<dyn CredentialProvider>> =
        vec![Box::new(ExplicitKey::new(api_key_arg()))];
    providers.push(Box::new(EnvKey::new("OPENAI_API_KEY")));
    if let Some(path) = SecretsFile::default_path() {
        providers.push(Box::new(SecretsFile::new(path)));
    }
    let api_key = match resolve_api_key(&providers) {
        Ok(api_key) => api_key,
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };

    let mut config = OpenAIConfigBuilder::with_api_key(api_key);
    if let Ok(model) = env::var("OPENAI_MODEL") {
        config = config.with_model(model);
    }
    if let Ok(base_url) = env::var("OPENAI_BASE_URL") {
        config = config.with_base_url(base_url);
    }
    let analyzer = Analyzer::new(OpenAIProvider::new(config.build()));

    println!("{}", "AI Diary Friend 🤖📔".bold());
    println!(
        "Write about your day and I will read it, rate the mood, and cheer \
         you on. Finish the entry with an empty line. Afterwards we can \
         keep chatting — /new starts a new entry, /quit leaves."
    );

    let mut session = Session::new();

    'outer: loop {
        println!("\n📔 {}", "Today's diary:".bold());
        let Some(entry) = read_entry().await else {
            break;
        };

        let bar = spinner("🤔 Reading your diary...");
        let result = analyzer.analyze(&entry).await;
        bar.finish_and_clear();

        match result {
            Ok(new_session) => session = new_session,
            Err(err) => {
                println!("{}", format!("⚠️  {err}").bright_red());
                continue;
            }
        }

        if let Some(analysis) = session.analysis() {
            let emotion = emotion::classify(analysis.score);
            println!("\n{}", "Mood gauge".bold());
            println!(
                "{}",
                render::paint_gauge(&Spectrum::for_score(analysis.score))
            );
            println!("Feeling: {}\n", emotion.label().bold());
        }
        if let Some(feedback) = session.transcript().turns().last() {
            println!("{}", render::paint_turn(feedback));
        }

        loop {
            print!("> ");
            std::io::stdout().flush().unwrap();

            let Some(line) = read_line().await else {
                break 'outer;
            };
            let line = line.trim().to_owned();
            match line.as_str() {
                "/quit" => break 'outer,
                "/new" => continue 'outer,
                _ => {}
            }
            if line.is_empty() {
                continue;
            }

            let bar = spinner("💬 Thinking...");
            let outcome = analyzer.submit(session, &line).await;
            bar.finish_and_clear();

            session = outcome.session;
            if let Some(err) = outcome.error {
                println!("{}", format!("⚠️  {err}").bright_red());
                continue;
            }
            if let Some(reply) = session.transcript().turns().last() {
                println!("{}", render::paint_turn(reply));
            }
        }
    }
}

/// Reads a multi-line diary entry, terminated by an empty line. Returns
/// `None` on end of input.
async fn read_entry() -> Option<String> {
    let mut entry = String::new();
    loop {
        let line = read_line().await?;
        let trimmed = line.trim_end();
        if trimmed.is_empty() {
            // Refuse an empty entry; keep waiting for content.
            if entry.trim().is_empty() {
                continue;
            }
            return Some(entry);
        }
        if !entry.is_empty() {
            entry.push('\n');
        }
        entry.push_str(trimmed);
    }
}

async fn read_line() -> Option<String> {
    let mut stdin = io::BufReader::new(io::stdin());
    let mut line = String::new();

    match stdin.read_line(&mut line).await {
        Ok(count) => {
            if count == 0 {
                return None;
            }
            Some(line)
        }
        Err(err) => {
            error!("error reading input: {}", err);
            None
        }
    }
}

fn spinner(msg: &str) -> ProgressBar {
    let style = ProgressStyle::with_template("{spinner} {wide_msg}")
        .unwrap()
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");
    let bar = ProgressBar::new_spinner();
    bar.set_style(style);
    bar.set_message(msg.to_owned());
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}

fn api_key_arg() -> Option<String> {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--api-key" {
            return args.next();
        }
    }
    None
}
