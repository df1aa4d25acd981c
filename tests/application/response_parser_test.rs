use sowdoc::application::services::parse_analysis_response;

#[test]
fn given_bare_json_when_parsing_then_returns_object() {
    let value = parse_analysis_response(r#"{"projectName":"Acme"}"#).unwrap();
    assert_eq!(value["projectName"], "Acme");
}

#[test]
fn given_fenced_json_when_parsing_then_reads_block_contents() {
    let reply = "Here you go:\n```json\n{\"clientName\": \"Acme Corp\"}\n```\nThanks";
    let value = parse_analysis_response(reply).unwrap();
    assert_eq!(value["clientName"], "Acme Corp");
}

#[test]
fn given_prose_around_object_when_parsing_then_takes_widest_braces() {
    let reply = "The analysis is {\"scope\": {\"inScope\": [\"VPC\"]}} as requested.";
    let value = parse_analysis_response(reply).unwrap();
    assert_eq!(value["scope"]["inScope"][0], "VPC");
}

#[test]
fn given_no_json_when_parsing_then_reports_length() {
    let err = parse_analysis_response("I could not analyze this document.").unwrap_err();
    assert_eq!(err.length, 34);
}
