use super::*;

const DATA_REPOSITORY_FORM: &str = r#"
    <form id='dataRepository'>
      <input id='mysql' name='driverType' type='radio' value='mysql' checked>
      <input id='oracle' name='driverType' type='radio' value='oracle'>
      <input id='dataRepositoryURL' name='dataRepositoryURL' type='text' value='jdbc:mysql://localhost/esoe'>
      <input id='dataRepositoryUsername' name='dataRepositoryUsername' type='text'>
    </form>
"#;

#[test]
fn last_endpoint_element_wins() -> Result<()> {
    let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
        <endpoints>
          <endpoint acs="/first/sso" sls="/first/logout" ccs="/first/cache"/>
          <endpoint acs="/second/sso" sls="/second/logout" ccs="/second/cache"/>
        </endpoints>"#;

    let mut doc = Document::from_html(SERVICE_NODE_FORM)?;
    let report = ResponseBinder::service_endpoints().apply_str(&mut doc, xml);
    assert_eq!(report.elements, 2);
    assert_eq!(report.written, 6);
    assert!(report.missing_fields.is_empty());
    assert_eq!(report.parse_error, None);
    doc.assert_value("AssertionConsumerService", "/second/sso")?;
    doc.assert_value("SingleLogoutService", "/second/logout")?;
    doc.assert_value("CacheClearService", "/second/cache")?;
    Ok(())
}

#[test]
fn missing_attribute_clears_its_field() -> Result<()> {
    let mut doc = Document::from_html(SERVICE_NODE_FORM)?;
    set_value(&mut doc, "SingleLogoutService", "/left/over");
    let report =
        ResponseBinder::service_endpoints().apply_str(&mut doc, "<endpoint acs='/only/acs'/>");
    assert_eq!(report.written, 3);
    doc.assert_value("AssertionConsumerService", "/only/acs")?;
    doc.assert_value("SingleLogoutService", "")?;
    doc.assert_value("CacheClearService", "")?;
    Ok(())
}

#[test]
fn response_without_matching_elements_changes_nothing() -> Result<()> {
    let mut doc = Document::from_html(SERVICE_NODE_FORM)?;
    set_value(&mut doc, "AssertionConsumerService", "/kept");
    let report = ResponseBinder::service_endpoints()
        .apply_str(&mut doc, "<endpoints><error message='unknown node'/></endpoints>");
    assert_eq!(report, BindReport::default());
    doc.assert_value("AssertionConsumerService", "/kept")?;
    Ok(())
}

#[test]
fn driver_binder_fills_the_repository_url() -> Result<()> {
    let mut doc = Document::from_html(DATA_REPOSITORY_FORM)?;
    set_value(&mut doc, "driverType", "oracle");
    let response =
        XmlResponse::parse("<driver defaultURL='jdbc:oracle:thin:@localhost:1521:esoe'/>")?;
    let report = ResponseBinder::data_repository_driver().apply(&mut doc, &response);
    assert_eq!(report.written, 1);
    doc.assert_value("dataRepositoryURL", "jdbc:oracle:thin:@localhost:1521:esoe")?;
    doc.assert_checked("oracle", true)?;
    doc.assert_value("dataRepositoryUsername", "")?;
    Ok(())
}

#[test]
fn missing_target_field_is_reported_and_others_still_written() -> Result<()> {
    let html = "<input id='AssertionConsumerService' type='text'>";

    let mut doc = Document::from_html(html)?;
    let report = ResponseBinder::service_endpoints()
        .apply_str(&mut doc, "<endpoint acs='/a' sls='/b' ccs='/c'/>");
    assert_eq!(report.written, 1);
    assert_eq!(
        report.missing_fields,
        vec!["SingleLogoutService", "CacheClearService"]
    );
    doc.assert_value("AssertionConsumerService", "/a")?;
    Ok(())
}

#[test]
fn unsupported_target_is_reported_apart_from_missing() -> Result<()> {
    let html = r#"
        <input id='AssertionConsumerService' type='email' value='a@b.c'>
        <input id='SingleLogoutService' type='text'>
        "#;

    let mut doc = Document::from_html(html)?;
    doc.enable_trace(true);
    doc.set_trace_sink(false);
    let report = ResponseBinder::service_endpoints()
        .apply_str(&mut doc, "<endpoint acs='/a' sls='/b' ccs='/c'/>");
    assert_eq!(report.written, 1);
    assert_eq!(report.unsupported_fields, vec!["AssertionConsumerService"]);
    assert_eq!(report.missing_fields, vec!["CacheClearService"]);
    doc.assert_value("SingleLogoutService", "/b")?;
    assert_eq!(
        doc.dump_element("AssertionConsumerService")?,
        "<input id=\"AssertionConsumerService\" type=\"email\" value=\"a@b.c\">"
    );

    let logs = doc.take_trace_logs();
    assert_eq!(
        logs.last().map(String::as_str),
        Some("[bind] <endpoint> elements=1 written=1 missing=1 unsupported=1")
    );
    Ok(())
}

#[test]
fn malformed_response_binds_what_was_read() -> Result<()> {
    let mut doc = Document::from_html(SERVICE_NODE_FORM)?;
    doc.enable_trace(true);
    doc.set_trace_sink(false);
    let report = ResponseBinder::service_endpoints().apply_str(
        &mut doc,
        "<endpoints><endpoint acs='/partial' sls='/s' ccs='/c'/><endpoint acs=",
    );
    assert!(matches!(report.parse_error, Some(Error::XmlParse(_))));
    assert_eq!(report.elements, 1);
    doc.assert_value("AssertionConsumerService", "/partial")?;

    let logs = doc.take_trace_logs();
    assert!(logs.iter().any(|line| line.contains("response is malformed")));
    assert!(logs
        .iter()
        .any(|line| line.starts_with("[bind] <endpoint> elements=1 written=3")));
    Ok(())
}

#[test]
fn custom_binder_uses_its_own_mapping() -> Result<()> {
    let html = r#"
        <input id='esoeOrganizationName' type='text'>
        <select id='esoeOrganizationURL'>
          <option value='https://a.example.edu'>A</option>
          <option value='https://b.example.edu'>B</option>
        </select>
        "#;

    let binder = ResponseBinder::new("organization")
        .bind_attribute("name", "esoeOrganizationName")
        .bind_attribute("url", "esoeOrganizationURL");
    binder.validate()?;
    assert_eq!(binder.tag(), "organization");
    assert_eq!(binder.bindings().len(), 2);

    let mut doc = Document::from_html(html)?;
    binder.apply_str(
        &mut doc,
        "<organization name='QUT &amp; friends' url='https://b.example.edu'/>",
    );
    doc.assert_value("esoeOrganizationName", "QUT & friends")?;
    assert_eq!(doc.selected_index("esoeOrganizationURL")?, Some(1));
    Ok(())
}

#[test]
fn empty_binder_configuration_is_rejected() {
    assert!(matches!(
        ResponseBinder::new(" ").validate(),
        Err(Error::InvalidConfig(_))
    ));
    assert!(matches!(
        ResponseBinder::new("endpoint")
            .bind_attribute("", "AssertionConsumerService")
            .validate(),
        Err(Error::InvalidConfig(_))
    ));
    assert!(ResponseBinder::service_endpoints().validate().is_ok());
    assert!(ResponseBinder::data_repository_driver().validate().is_ok());
}

#[test]
fn binders_keep_no_state_between_calls() -> Result<()> {
    let binder = ResponseBinder::service_endpoints();
    let mut first = Document::from_html(SERVICE_NODE_FORM)?;
    let mut second = Document::from_html(SERVICE_NODE_FORM)?;
    let a = binder.apply_str(&mut first, "<endpoint acs='/1' sls='/2' ccs='/3'/>");
    let b = binder.apply_str(&mut second, "<endpoint acs='/1' sls='/2' ccs='/3'/>");
    assert_eq!(a, b);
    assert_eq!(binder, ResponseBinder::service_endpoints());
    Ok(())
}
