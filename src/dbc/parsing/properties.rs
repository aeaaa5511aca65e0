//! Global custom property record parser
//!
//! Syntax
//!
//!     BA_ "<name>" <value>;
//!
//! Only the file-level form feeds the model; `BA_` records carrying a
//! subject token (`BU_`/`BO_`/`SG_`/`EV_`) target an entity attribute and
//! are claimed but skipped. Quoted string values participate in the
//! multi-line continuation protocol like comment payloads do.

use once_cell::sync::Lazy;
use regex::Regex;

use super::multiline::assemble_record;
use super::LineParser;
use crate::dbc::builder::DbcBuilder;
use crate::dbc::line_provider::NextLineProvider;
use crate::dbc::model::{CustomProperty, PropertyValue};
use crate::dbc::observer::ParseFailureObserver;

const PROPERTY_PREFIX: &str = "BA_";

static PROPERTY_HEAD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?s)^BA_\s+"([^"]+)"\s+(.*)$"#).unwrap());

/// Parser for the `BA_` record (file-level form).
pub struct PropertiesLineParser;

impl LineParser for PropertiesLineParser {
    fn try_parse(
        &self,
        line: &str,
        builder: &mut dyn DbcBuilder,
        reader: &mut dyn NextLineProvider,
        observer: &mut dyn ParseFailureObserver,
    ) -> bool {
        let clean = line.trim();
        let Some(after_prefix) = clean.strip_prefix(PROPERTY_PREFIX) else {
            return false;
        };
        // Whitespace keeps this disjoint from BA_DEF_ and BA_DEF_DEF_.
        if !after_prefix.starts_with(|c: char| c.is_whitespace()) {
            return false;
        }

        let record = assemble_record(clean, reader);
        let Some(caps) = PROPERTY_HEAD.captures(&record) else {
            // Quote-free stubs pass silently; a quote that the head cannot
            // delimit is a structural violation.
            if record.contains('"') {
                observer.property_syntax_error();
            }
            return true;
        };
        let name = caps[1].to_string();
        let rest = caps[2].trim();

        // Entity-targeted attribute: not a global property.
        if matches!(
            rest.split_whitespace().next(),
            Some("BU_") | Some("BO_") | Some("SG_") | Some("EV_")
        ) {
            return true;
        }

        if let Some(after_quote) = rest.strip_prefix('"') {
            match after_quote.find('"') {
                Some(end) => {
                    let tail = after_quote[end + 1..].trim_start();
                    if tail.is_empty() || tail.starts_with(';') {
                        let value = PropertyValue::Text(after_quote[..end].to_string());
                        builder.add_global_property(CustomProperty::new(name, value));
                    } else {
                        observer.property_syntax_error();
                    }
                }
                // Input ended before the closing quote: best-effort value.
                None => {
                    let value = PropertyValue::Text(after_quote.to_string());
                    builder.add_global_property(CustomProperty::new(name, value));
                }
            }
            return true;
        }
        if rest.contains('"') {
            observer.property_syntax_error();
            return true;
        }

        // Bare values must be numeric; anything else is a stub, accepted
        // silently.
        let bare = rest.trim_end_matches(';').trim();
        if let Ok(number) = bare.parse::<f64>() {
            builder.add_global_property(CustomProperty::new(name, PropertyValue::Number(number)));
        }
        true
    }
}
