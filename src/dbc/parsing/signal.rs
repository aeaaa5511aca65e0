//! Signal record parser
//!
//! Syntax
//!
//!     SG_ <name> [M|m<k>] : <start>|<length>@<byte-order><sign> (<factor>,<offset>) [<min>|<max>] "<unit>" <receiver>{,<receiver>}
//!
//! A signal attaches to the most recently declared message; the builder
//! owns that association. The prefix test requires whitespace after `SG_`,
//! which keeps this parser disjoint from `SG_MUL_VAL_` records.

use once_cell::sync::Lazy;
use regex::Regex;

use super::LineParser;
use crate::dbc::builder::DbcBuilder;
use crate::dbc::line_provider::NextLineProvider;
use crate::dbc::model::{ByteOrder, Signal, ValueSign};
use crate::dbc::observer::ParseFailureObserver;

const SIGNAL_PREFIX: &str = "SG_";

static SIGNAL_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^SG_\s+([a-zA-Z_]\w*)\s*(M|m\d+)?\s*:\s*(\d+)\|(\d+)@([01])([+-])\s*\(\s*([^,\s][^,]*?)\s*,\s*([^)]+?)\s*\)\s*\[\s*([^|]*?)\s*\|\s*([^\]]*?)\s*\]\s*"([^"]*)"\s*(.*)$"#,
    )
    .unwrap()
});

/// Parser for the `SG_` record.
pub struct SignalLineParser;

impl LineParser for SignalLineParser {
    fn try_parse(
        &self,
        line: &str,
        builder: &mut dyn DbcBuilder,
        _reader: &mut dyn NextLineProvider,
        observer: &mut dyn ParseFailureObserver,
    ) -> bool {
        let clean = line.trim();
        let Some(after_prefix) = clean.strip_prefix(SIGNAL_PREFIX) else {
            return false;
        };
        if !after_prefix.starts_with(|c: char| c.is_whitespace()) {
            return false;
        }

        match parse_signal(clean) {
            Some(signal) => builder.add_signal(signal),
            None => observer.signal_syntax_error(),
        }
        true
    }
}

fn parse_signal(record: &str) -> Option<Signal> {
    let caps = SIGNAL_LINE.captures(record)?;
    let byte_order = match &caps[5] {
        "0" => ByteOrder::BigEndian,
        _ => ByteOrder::LittleEndian,
    };
    let value_sign = match &caps[6] {
        "+" => ValueSign::Unsigned,
        _ => ValueSign::Signed,
    };
    let receivers = caps[12]
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect();

    Some(Signal {
        name: caps[1].to_string(),
        multiplexing: caps.get(2).map(|m| m.as_str().to_string()),
        start_bit: caps[3].parse().ok()?,
        length: caps[4].parse().ok()?,
        byte_order,
        value_sign,
        factor: caps[7].parse().ok()?,
        offset: caps[8].parse().ok()?,
        min: caps[9].parse().ok()?,
        max: caps[10].parse().ok()?,
        unit: caps[11].to_string(),
        receivers,
        comment: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dbc::line_provider::TextLineProvider;
    use crate::dbc::testing::{BuilderCall, RecordingBuilder, RecordingObserver};

    fn try_parse(line: &str) -> (bool, RecordingBuilder, RecordingObserver) {
        let mut builder = RecordingBuilder::new();
        let mut observer = RecordingObserver::new();
        let mut reader = TextLineProvider::new("");
        let claimed = SignalLineParser.try_parse(line, &mut builder, &mut reader, &mut observer);
        (claimed, builder, observer)
    }

    fn parsed_signal(line: &str) -> Signal {
        let (claimed, builder, observer) = try_parse(line);
        assert!(claimed);
        assert_eq!(observer.total(), 0);
        let BuilderCall::Signal(signal) = &builder.calls[0] else {
            panic!("expected a signal call");
        };
        signal.clone()
    }

    #[test]
    fn test_signal_line_is_parsed() {
        let signal =
            parsed_signal(r#" SG_ EngineSpeed : 24|16@1+ (0.125,0) [0|8031.875] "rpm" Gateway,Dash"#);
        assert_eq!(signal.name, "EngineSpeed");
        assert_eq!(signal.multiplexing, None);
        assert_eq!(signal.start_bit, 24);
        assert_eq!(signal.length, 16);
        assert_eq!(signal.byte_order, ByteOrder::LittleEndian);
        assert_eq!(signal.value_sign, ValueSign::Unsigned);
        assert!((signal.factor - 0.125).abs() < 1e-12);
        assert!((signal.max - 8031.875).abs() < 1e-12);
        assert_eq!(signal.unit, "rpm");
        assert_eq!(signal.receivers, vec!["Gateway", "Dash"]);
    }

    #[test]
    fn test_multiplexed_signal() {
        let signal = parsed_signal(r#"SG_ Mode m2 : 0|8@0- (1,-128) [-128|127] "" Vector__XXX"#);
        assert_eq!(signal.multiplexing.as_deref(), Some("m2"));
        assert_eq!(signal.byte_order, ByteOrder::BigEndian);
        assert_eq!(signal.value_sign, ValueSign::Signed);
        assert!((signal.offset + 128.0).abs() < 1e-12);
    }

    #[test]
    fn test_multiplexor_signal() {
        let signal = parsed_signal(r#"SG_ Selector M : 0|2@1+ (1,0) [0|3] "" RX1"#);
        assert_eq!(signal.multiplexing.as_deref(), Some("M"));
    }

    #[test]
    fn test_multiplexed_value_table_record_is_not_claimed() {
        let (claimed, _, _) = try_parse("SG_MUL_VAL_ 100 Mode Selector 2-2;");
        assert!(!claimed);
    }

    #[test]
    fn test_malformed_signal_is_observed() {
        let (claimed, builder, observer) = try_parse("SG_ Broken : 0|8@1+ (1,0) rpm");
        assert!(claimed);
        assert!(builder.calls.is_empty());
        assert_eq!(observer.signal_errors, 1);
    }
}
