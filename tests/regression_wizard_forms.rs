use form_binder::form_element::{set_value, unpack};
use form_binder::{ControlKind, Document, Error, FieldValue, InputKind, ResponseBinder, XmlResponse};

#[test]
fn contact_step_restores_a_saved_session() -> form_binder::Result<()> {
    let html = r#"
    <form id="contact" method="post">
      <select id="ContactType" name="ContactType">
        <option value="technical">Technical</option>
        <option value="support">Support</option>
        <option value="administrative">Administrative</option>
      </select>
      <input id="GivenName" name="GivenName" type="text">
      <input id="SurName" name="SurName" type="text">
      <input id="EmailAddress" name="EmailAddress" type="text">
      <input id="TelephoneNumber" name="TelephoneNumber" type="text">
      <input id="contactID" name="contactID" type="hidden">
      <input type="submit" value="Save">
    </form>
    "#;

    let mut doc = Document::from_html(html)?;
    let report = unpack(
        &mut doc,
        vec![
            ("ContactType", FieldValue::from("administrative")),
            ("GivenName", FieldValue::from("Ada")),
            ("SurName", FieldValue::from("Lovelace")),
            ("EmailAddress", FieldValue::from("ada@example.edu")),
            ("TelephoneNumber", FieldValue::Null),
            ("contactID", FieldValue::from(17u64)),
        ],
    );
    assert!(report.all_applied());
    assert_eq!(doc.selected_index("ContactType")?, Some(2));
    doc.assert_value("GivenName", "Ada")?;
    doc.assert_value("SurName", "Lovelace")?;
    doc.assert_value("TelephoneNumber", "")?;
    doc.assert_value("contactID", "17")?;
    Ok(())
}

#[test]
fn driver_change_refreshes_the_repository_url() -> form_binder::Result<()> {
    let html = r#"
    <form id="dataRepository">
      <label><input id="driverMysql" name="driverType" type="radio" value="mysql" checked> MySQL</label>
      <label><input id="driverOracle" name="driverType" type="radio" value="oracle"> Oracle</label>
      <input id="dataRepositoryURL" name="dataRepositoryURL" type="text" value="jdbc:mysql://localhost:3306/esoe">
      <input id="dataRepositoryUsername" name="dataRepositoryUsername" type="text" value="esoe">
      <input id="dataRepositoryPassword" name="dataRepositoryPassword" type="password">
    </form>
    "#;

    let mut doc = Document::from_html(html)?;
    assert!(set_value(&mut doc, "driverType", "oracle"));
    let report = ResponseBinder::data_repository_driver().apply_str(
        &mut doc,
        r#"<?xml version="1.0"?><driver defaultURL="jdbc:oracle:thin:@localhost:1521:esoe"/>"#,
    );
    assert_eq!(report.elements, 1);
    assert_eq!(report.parse_error, None);
    doc.assert_checked("driverOracle", true)?;
    doc.assert_checked("driverMysql", false)?;
    doc.assert_value("dataRepositoryURL", "jdbc:oracle:thin:@localhost:1521:esoe")?;
    doc.assert_value("dataRepositoryUsername", "esoe")?;
    Ok(())
}

#[test]
fn ldap_step_tolerates_legacy_markup() -> form_binder::Result<()> {
    let html = r#"
    <TABLE>
      <TR><TD>Server<TD><INPUT ID=ldapServer NAME=ldapServer TYPE=TEXT>
      <TR><TD>Port<TD><INPUT ID=ldapServerPort NAME=ldapServerPort VALUE=389>
      <TR><TD>SSL<TD><INPUT ID=ldapSSL NAME=ldapSSL TYPE=CHECKBOX>
    </TABLE>
    "#;

    let mut doc = Document::from_html(html)?;
    assert_eq!(
        doc.control_kind("ldapServerPort"),
        Some(ControlKind::Input(InputKind::Text))
    );
    assert!(set_value(&mut doc, "ldapServer", "ldap.example.edu"));
    assert!(set_value(&mut doc, "ldapServerPort", 636));
    assert!(set_value(&mut doc, "ldapSSL", "on"));
    doc.assert_value("ldapServer", "ldap.example.edu")?;
    doc.assert_value("ldapServerPort", "636")?;
    doc.assert_checked("ldapSSL", true)?;
    Ok(())
}

#[test]
fn endpoint_response_is_read_once_and_reusable() -> form_binder::Result<()> {
    let response = XmlResponse::parse(
        r#"<endpoints>
             <endpoint acs="/spep/sso" sls="/spep/sso" ccs="/spep/spcc"/>
           </endpoints>"#,
    )?;
    assert_eq!(response.get_elements_by_tag_name("endpoint").count(), 1);

    let html = r#"
    <input id="AssertionConsumerService" type="text">
    <input id="SingleLogoutService" type="text">
    <input id="CacheClearService" type="text">
    "#;
    let binder = ResponseBinder::service_endpoints();
    for _ in 0..2 {
        let mut doc = Document::from_html(html)?;
        let report = binder.apply(&mut doc, &response);
        assert_eq!(report.written, 3);
        doc.assert_value("CacheClearService", "/spep/spcc")?;
    }
    Ok(())
}

#[test]
fn strict_response_parsing_reports_truncation() {
    assert!(matches!(
        XmlResponse::parse("<endpoints><endpoint acs='/a'/>"),
        Err(Error::XmlParse(_))
    ));
}
