use std::io::Read;
use std::process::ExitCode;

use log::{debug, error};

use semantic_sdp::SDPInfo;

use crate::config::{Config, OutputFormat};

mod config;

fn main() -> ExitCode {
    env_logger::init();
    let config = Config::initialize();

    let input = match read_input(&config) {
        Ok(input) => input,
        Err(err) => {
            error!(target: "SDP Inspect", "Failed to read session description: {}", err);
            return ExitCode::from(1);
        }
    };

    let sdp_info = match SDPInfo::process(&input) {
        Ok(sdp_info) => sdp_info,
        Err(err) => {
            error!(target: "SDP Inspect", "Failed to process session description: {}", err);
            return ExitCode::from(1);
        }
    };
    debug!(target: "SDP Inspect", "Processed {} media lines and {} streams", sdp_info.get_medias().len(), sdp_info.get_streams().len());

    match config.output {
        OutputFormat::Sdp => print!("{}", sdp_info),
        OutputFormat::Json => match sdp_info
            .plain()
            .and_then(|plain| Ok(serde_json::to_string_pretty(&plain)?))
        {
            Ok(json) => println!("{}", json),
            Err(err) => {
                error!(target: "SDP Inspect", "Failed to project session description: {}", err);
                return ExitCode::from(1);
            }
        },
    }

    ExitCode::SUCCESS
}

fn read_input(config: &Config) -> std::io::Result<String> {
    match &config.input {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}
