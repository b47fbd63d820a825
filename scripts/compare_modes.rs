//! Run with: cargo run --bin compare_modes -- [text] [source] [target]
//!
//! Sends the same text through the chat and completion endpoints of the
//! upstream at BACKEND_URL and prints latency and output for each.

use mt_proxy::config::Settings;
use mt_proxy::services::llm::{LlmClient, TranslationJob, TranslationMode};
use std::time::Instant;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let mut args = std::env::args().skip(1);
    let text = args
        .next()
        .unwrap_or_else(|| "今天天气很好，我们一起去公园散步吧。".to_string());
    let source_lang = args.next().unwrap_or_else(|| "中文".to_string());
    let target_lang = args.next().unwrap_or_else(|| "英文".to_string());

    let settings = Settings::from_env()?;
    let client = LlmClient::new(&settings);

    println!("\n🌐 Comparing translation modes against {}\n", client.base_url());
    println!("Text ({} → {}): \"{}\"\n", source_lang, target_lang, text);
    println!("{:-<80}", "");

    for mode in [TranslationMode::Chat, TranslationMode::Completion] {
        let job = TranslationJob {
            text: &text,
            source_lang: &source_lang,
            target_lang: &target_lang,
            temperature: 0.0,
            max_tokens: 512,
            mode,
        };

        print!("{:<12}", mode.as_str());
        let start = Instant::now();
        match client.translate(&job).await {
            Ok(translated) => {
                println!("✅ {}ms", start.elapsed().as_millis());
                println!("   {}\n", translated.replace('\n', " "));
            }
            Err(e) => {
                println!("❌ {}\n", e);
            }
        }
    }

    Ok(())
}
