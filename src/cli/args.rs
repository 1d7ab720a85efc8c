use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "translate")]
#[command(about = "Translate text using the Google Translate v2 API")]
#[command(version)]
pub struct Args {
    /// Google API key (defaults to $GOOGLEAPIKEY)
    #[arg(short = 'k', long)]
    pub key: Option<String>,

    /// Destination language code (ISO 639-1, e.g. en, ja, de)
    #[arg(short = 't', long = "to", default_value = "en")]
    pub to: String,

    /// Source language code; auto-detected by default
    #[arg(short = 'f', long = "from")]
    pub from: Option<String>,

    /// Text to translate; arguments are joined with single spaces
    #[arg(required = true, value_name = "TEXT")]
    pub text: Vec<String>,
}
