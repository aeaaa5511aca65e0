//! Environment variable record parser
//!
//! Syntax
//!
//!     EV_ <name>: <type> [<min>|<max>] "<unit>" <initial> <id> <access> <node>{,<node>};

use once_cell::sync::Lazy;
use regex::Regex;

use super::LineParser;
use crate::dbc::builder::DbcBuilder;
use crate::dbc::line_provider::NextLineProvider;
use crate::dbc::model::{EnvDataType, EnvironmentVariable};
use crate::dbc::observer::ParseFailureObserver;

const ENV_VAR_PREFIX: &str = "EV_";

static ENV_VAR_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^EV_\s+([a-zA-Z_]\w*)\s*:\s*([012])\s*\[\s*([^|]*?)\s*\|\s*([^\]]*?)\s*\]\s*"([^"]*)"\s*(\S+)\s+(\d+)\s+(\w+)\s+([^;]*);"#,
    )
    .unwrap()
});

/// Parser for the `EV_` record.
pub struct EnvironmentVariableLineParser;

impl LineParser for EnvironmentVariableLineParser {
    fn try_parse(
        &self,
        line: &str,
        builder: &mut dyn DbcBuilder,
        _reader: &mut dyn NextLineProvider,
        observer: &mut dyn ParseFailureObserver,
    ) -> bool {
        let clean = line.trim();
        let Some(after_prefix) = clean.strip_prefix(ENV_VAR_PREFIX) else {
            return false;
        };
        if !after_prefix.starts_with(|c: char| c.is_whitespace()) {
            return false;
        }

        match parse_environment_variable(clean) {
            Some(variable) => builder.add_environment_variable(variable),
            None => observer.environment_variable_syntax_error(),
        }
        true
    }
}

fn parse_environment_variable(record: &str) -> Option<EnvironmentVariable> {
    let caps = ENV_VAR_LINE.captures(record)?;
    let data_type = match &caps[2] {
        "0" => EnvDataType::Integer,
        "1" => EnvDataType::Float,
        _ => EnvDataType::Text,
    };
    let nodes = caps[9]
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect();

    Some(EnvironmentVariable {
        name: caps[1].to_string(),
        data_type,
        min: caps[3].parse().ok()?,
        max: caps[4].parse().ok()?,
        unit: caps[5].to_string(),
        initial_value: caps[6].parse().ok()?,
        ev_id: caps[7].parse().ok()?,
        access: caps[8].to_string(),
        nodes,
        comment: None,
    })
}
