//! Whole-file parsing tests
//!
//! Drives the dispatch engine over complete DBC sources and asserts on the
//! finalized model: record routing, comment attachment, merge policy, and
//! the engine's never-fail propagation contract.

use dbc_parser::dbc::loader::DbcLoader;
use dbc_parser::dbc::model::{ByteOrder, EnvDataType, PropertyValue};
use dbc_parser::dbc::observer::CountingFailureObserver;
use dbc_parser::dbc::parsing;

const SAMPLE: &str = r#"VERSION "1.0"

NS_ :
    CM_
    BA_

BS_:

BU_: Gateway Dash Vector__XXX

BO_ 256 EngineData: 8 Gateway
 SG_ EngineSpeed : 24|16@1+ (0.125,0) [0|8031.875] "rpm" Dash
 SG_ EngineTemp : 0|8@1+ (1,-40) [-40|215] "degC" Dash

BO_ 512 DashStatus: 4 Dash
 SG_ BacklightOn : 0|1@1+ (1,0) [0|1] "" Gateway

EV_ AmbientTemp: 1 [-60|60] "degC" 20 14 DUMMY_NODE_VECTOR0 Gateway;

CM_ BU_ Gateway "Central gateway";
CM_ BO_ 256 "Engine master data";
CM_ SG_ 256 EngineSpeed "This is the first line
this is the second line";
CM_ EV_ AmbientTemp "Outside air";
CM_ "Database exported for testing";

BA_ "BusType" "CAN";
BA_ "Baudrate" 500000;
"#;

#[test]
fn full_file_builds_the_expected_model() {
    let mut observer = CountingFailureObserver::new();
    let dbc = DbcLoader::from_string(SAMPLE).parse_with(&mut observer);

    assert_eq!(observer.total(), 0);

    assert_eq!(dbc.nodes().len(), 3);
    assert_eq!(
        dbc.node_by_name("Gateway").unwrap().comment.as_deref(),
        Some("Central gateway")
    );

    assert_eq!(dbc.messages().len(), 2);
    let engine_data = dbc.message_by_id(256).unwrap();
    assert_eq!(engine_data.name, "EngineData");
    assert_eq!(engine_data.size, 8);
    assert_eq!(engine_data.transmitter, "Gateway");
    assert_eq!(engine_data.comment.as_deref(), Some("Engine master data"));
    assert_eq!(engine_data.signals.len(), 2);

    let speed = engine_data.signal_by_name("EngineSpeed").unwrap();
    assert_eq!(speed.byte_order, ByteOrder::LittleEndian);
    assert_eq!(speed.unit, "rpm");
    assert_eq!(
        speed.comment.as_deref(),
        Some("This is the first line\nthis is the second line")
    );

    // Signals attach to the message that precedes them.
    let dash_status = dbc.message_by_id(512).unwrap();
    assert_eq!(dash_status.signals.len(), 1);
    assert_eq!(dash_status.signals[0].name, "BacklightOn");

    assert_eq!(dbc.environment_variables().len(), 1);
    let ambient = &dbc.environment_variables()[0];
    assert_eq!(ambient.data_type, EnvDataType::Float);
    assert_eq!(ambient.comment.as_deref(), Some("Outside air"));

    assert_eq!(dbc.file_comment(), Some("Database exported for testing"));

    assert_eq!(dbc.global_properties().len(), 2);
    assert_eq!(
        dbc.global_properties()[1].value,
        PropertyValue::Number(500000.0)
    );
}

#[test]
fn unrecognized_record_kinds_are_skipped() {
    // VAL_ and BO_TX_BU_ have no registered parser; they must not derail
    // the records around them.
    let source = "BU_: ECU1\nVAL_ 256 Mode 0 \"off\" 1 \"on\";\nBO_TX_BU_ 256 : ECU1;\nBO_ 256 M: 8 ECU1\n";
    let mut observer = CountingFailureObserver::new();
    let dbc = parsing::parse_with_observer(source, &mut observer);

    assert_eq!(observer.total(), 0);
    assert_eq!(dbc.nodes().len(), 1);
    assert_eq!(dbc.messages().len(), 1);
}

#[test]
fn malformed_records_never_abort_the_parse() {
    let source = "BO_ junk Status: 8 ECU1\nCM_ SG_ 865 \"Test with incorrect \"syntax\"\";\nBU_: ECU1\n";
    let mut observer = CountingFailureObserver::new();
    let dbc = parsing::parse_with_observer(source, &mut observer);

    assert_eq!(observer.message_errors, 1);
    assert_eq!(observer.comment_errors, 1);
    // The node record after the broken ones still lands.
    assert_eq!(dbc.nodes().len(), 1);
}

#[test]
fn later_comment_for_same_subject_wins() {
    let source = "BU_: ECU1\nCM_ BU_ ECU1 \"first\";\nCM_ BU_ ECU1 \"second\";\n";
    let dbc = parsing::parse(source);
    assert_eq!(
        dbc.node_by_name("ECU1").unwrap().comment.as_deref(),
        Some("second")
    );
}

#[test]
fn crlf_sources_parse_identically() {
    let lf = "BU_: ECU1\nBO_ 1 M: 8 ECU1\n";
    let crlf = "BU_: ECU1\r\nBO_ 1 M: 8 ECU1\r\n";
    assert_eq!(parsing::parse(lf), parsing::parse(crlf));
}

#[test]
fn model_serializes_for_export_collaborators() {
    let dbc = parsing::parse(SAMPLE);
    let json = serde_json::to_value(&dbc).expect("model must serialize");

    assert_eq!(json["messages"].as_array().unwrap().len(), 2);
    assert_eq!(json["messages"][0]["name"], "EngineData");
    assert_eq!(json["file_comment"], "Database exported for testing");
}
