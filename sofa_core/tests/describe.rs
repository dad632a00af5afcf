use sofa_core::Cushion;

#[test]
fn display_renders_fields_in_fixed_order() {
    let cushion = Cushion {
        user: Some("jane".into()),
        pwd: Some("s3cret".into()),
        base: Some("https://jane.cloudant.com".into()),
        kind: Some("cloudant".into()),
        port: 443,
    };

    assert_eq!(
        cushion.to_string(),
        "<cushion>\n  user: jane\n  pwd: s3cret\n  base: https://jane.cloudant.com\n  type: cloudant\n  port: 443"
    );
}

#[test]
fn display_renders_absent_fields_as_empty() {
    let cushion = Cushion {
        kind: Some("localhost".into()),
        ..Cushion::default()
    };

    assert_eq!(
        cushion.to_string(),
        "<cushion>\n  user: \n  pwd: \n  base: \n  type: localhost\n  port: 5984"
    );
}
