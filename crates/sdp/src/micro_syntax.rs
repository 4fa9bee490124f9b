//! Helpers for the small grammars embedded inside attribute values: the
//! `key=value;key` parameter lists of `a=fmtp` / `a=rid`, and the stream
//! lists of `a=simulcast`.

use indexmap::IndexMap;

/// One entry of a simulcast stream list, `~` marks a paused stream.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulcastStreamEntry {
    pub scid: String,
    pub paused: bool,
}

/// Parses `key=value;key2=value2` pairs in declaration order.
///
/// Whitespace around keys and values is trimmed and an entry without `=`
/// yields an empty value.
pub fn parse_params(input: &str) -> IndexMap<String, String> {
    input
        .split(";")
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| match entry.split_once("=") {
            Some((key, value)) => (key.trim().to_string(), value.trim().to_string()),
            None => (entry.to_string(), String::new()),
        })
        .collect()
}

pub fn write_params(params: &IndexMap<String, String>) -> String {
    params
        .iter()
        .map(|(key, value)| {
            if value.is_empty() {
                key.clone()
            } else {
                format!("{key}={value}")
            }
        })
        .collect::<Vec<_>>()
        .join(";")
}

/// Parses `1,~2;3` into `[[1, ~2], [3]]`: `;` separates streams and `,`
/// separates the alternatives of a single stream.
pub fn parse_simulcast_stream_list(input: &str) -> Vec<Vec<SimulcastStreamEntry>> {
    input
        .split(";")
        .filter(|alternatives| !alternatives.trim().is_empty())
        .map(|alternatives| {
            alternatives
                .split(",")
                .map(str::trim)
                .filter(|entry| !entry.is_empty())
                .map(|entry| match entry.strip_prefix("~") {
                    Some(scid) => SimulcastStreamEntry {
                        scid: scid.to_string(),
                        paused: true,
                    },
                    None => SimulcastStreamEntry {
                        scid: entry.to_string(),
                        paused: false,
                    },
                })
                .collect()
        })
        .collect()
}

pub fn write_simulcast_stream_list(list: &[Vec<SimulcastStreamEntry>]) -> String {
    list.iter()
        .map(|alternatives| {
            alternatives
                .iter()
                .map(|entry| {
                    if entry.paused {
                        format!("~{}", entry.scid)
                    } else {
                        entry.scid.clone()
                    }
                })
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join(";")
}
