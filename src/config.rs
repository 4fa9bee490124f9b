use std::path::PathBuf;

const INPUT_ENV: &'static str = "SDP_INSPECT_INPUT";
const OUTPUT_ENV: &'static str = "SDP_INSPECT_OUTPUT";

pub struct Config {
    pub input: Option<PathBuf>,
    pub output: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputFormat {
    Json,
    Sdp,
}

impl Config {
    pub fn initialize() -> Self {
        let input = std::env::var(INPUT_ENV).ok().map(PathBuf::from);
        let output = std::env::var(OUTPUT_ENV)
            .map(|output| {
                OutputFormat::by_value(&output)
                    .expect(&format!("{OUTPUT_ENV} should be either json or sdp"))
            })
            .unwrap_or(OutputFormat::Json);

        Config { input, output }
    }
}

impl OutputFormat {
    fn by_value(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "sdp" => Some(Self::Sdp),
            _ => None,
        }
    }
}
