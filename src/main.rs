use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use voice_options::infrastructure::config::{Config, LogFormat};
use voice_options::infrastructure::http::SpeakRequest;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    let text = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    if text.is_empty() {
        tracing::warn!("No text given, the speech service will reject an empty request");
    }

    let options = config.default_options(text);
    tracing::info!(
        voice_id = %options.voice_id,
        locale = options.voice_id.locale(),
        text_type = %options.text_type,
        output_format = %options.output_format,
        "Request options ready"
    );

    let request = SpeakRequest::new(config.base_url.clone());
    println!("{}", request.url_for(&options)?);
    println!("{}", options.to_json()?);

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "voice_options=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "voice_options=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .init();
    }
}
