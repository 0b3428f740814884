//! Published-document XML serialization: converting model types to XML.
//!
//! This module provides the [`XmlSerialize`] trait and implementations for
//! the output document graph. Serialization uses an explicit writer so that
//! element order is fixed by code, not by field declaration order or
//! reflection: downstream consumers parse the document structurally and
//! depend on `Title`, `Countries`, `PublishedDate`, `ContactInformation`
//! appearing in exactly that order.

use std::io::{self, Write};

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesText, Event};

use pubstack_model::{ContactBlock, PersonGroup, PersonRecord, PublishedDocument};
use pubstack_model::timestamp::format_timestamp;

use crate::error::XmlError;

/// Root element name of the published document.
pub const ROOT_ELEMENT: &str = "PublishedItem";

/// Number of spaces per indentation level in the rendered document.
const INDENT_SIZE: usize = 4;

/// Trait for serializing published-document types to XML.
///
/// Implementors write their content as child elements inside the current XML
/// context. The XML declaration and root element are handled by the top-level
/// [`to_xml`] function.
///
/// Uses `io::Result` because `quick_xml::Writer` closures require
/// `io::Result<()>`.
pub trait XmlSerialize {
    /// Serialize this value as XML child elements into the given writer.
    ///
    /// # Errors
    ///
    /// Returns `io::Error` if writing to the underlying writer fails.
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()>;
}

/// Render a published document as a complete XML text.
///
/// Produces:
/// - the XML declaration (`<?xml version="1.0" encoding="UTF-8"?>`)
/// - a `PublishedItem` root element
/// - the document content, pretty-printed with 4-space indentation
///
/// # Errors
///
/// Returns [`XmlError`] if writing fails. Writing to an in-memory buffer
/// cannot fail under normal operation, so an error here is an internal fault.
pub fn to_xml(doc: &PublishedDocument) -> Result<String, XmlError> {
    let mut buf = Vec::with_capacity(1024);
    let mut writer = Writer::new_with_indent(&mut buf, b' ', INDENT_SIZE);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    writer
        .create_element(ROOT_ELEMENT)
        .write_inner_content(|w| doc.serialize_xml(w))?;

    Ok(String::from_utf8(buf)?)
}

/// Write a simple `<tag>text</tag>` element.
fn write_text_element<W: Write>(writer: &mut Writer<W>, tag: &str, text: &str) -> io::Result<()> {
    writer
        .create_element(tag)
        .write_text_content(BytesText::new(text))?;
    Ok(())
}

impl XmlSerialize for PublishedDocument {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_text_element(writer, "Title", &self.title)?;
        write_text_element(writer, "Countries", &self.countries)?;
        write_text_element(writer, "PublishedDate", &format_timestamp(&self.published_date))?;
        self.contact_information.serialize_xml(writer)?;
        Ok(())
    }
}

impl XmlSerialize for ContactBlock {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer
            .create_element("ContactInformation")
            .write_inner_content(|w| self.person_group.serialize_xml(w))?;
        Ok(())
    }
}

impl XmlSerialize for PersonGroup {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer
            .create_element("PersonGroup")
            .with_attribute(("sequence", self.sequence.to_string().as_str()))
            .write_inner_content(|w| {
                write_text_element(w, "Name", &self.name)?;
                if self.members.is_empty() {
                    // Consumers rely on the empty element being present.
                    w.create_element("PersonGroupMember").write_empty()?;
                } else {
                    w.create_element("PersonGroupMember").write_inner_content(|w2| {
                        for person in &self.members {
                            person.serialize_xml(w2)?;
                        }
                        Ok(())
                    })?;
                }
                Ok(())
            })?;
        Ok(())
    }
}

impl XmlSerialize for PersonRecord {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer.create_element("Person").write_inner_content(|w| {
            write_text_element(w, "FamilyName", &self.family_name)?;
            write_text_element(w, "GivenName", &self.given_name)?;
            write_text_element(w, "DisplayName", &self.display_name)?;
            write_text_element(w, "JobTitle", &self.job_title)?;
            w.create_element("ContactInfo").write_inner_content(|w2| {
                for number in &self.phone_numbers {
                    w2.create_element("Phone").write_inner_content(|w3| {
                        write_text_element(w3, "Number", number)
                    })?;
                }
                for address in &self.email_addresses {
                    w2.create_element("Email").write_inner_content(|w3| {
                        write_text_element(w3, "Address", address)
                    })?;
                }
                Ok(())
            })?;
            Ok(())
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn person(given: &str, family: &str) -> PersonRecord {
        PersonRecord {
            family_name: family.to_owned(),
            given_name: given.to_owned(),
            display_name: format!("{given} {family}"),
            job_title: "Analyst".to_owned(),
            phone_numbers: Vec::new(),
            email_addresses: Vec::new(),
        }
    }

    fn document(members: Vec<PersonRecord>) -> PublishedDocument {
        PublishedDocument {
            title: "Test Document".to_owned(),
            countries: "US,CA".to_owned(),
            published_date: NaiveDate::from_ymd_opt(2024, 6, 15)
                .expect("valid date")
                .and_hms_opt(0, 0, 0)
                .expect("valid time"),
            contact_information: ContactBlock {
                person_group: PersonGroup {
                    sequence: 1,
                    name: "Analytical Contacts".to_owned(),
                    members,
                },
            },
        }
    }

    #[test]
    fn test_should_begin_with_xml_declaration() {
        let xml = to_xml(&document(Vec::new())).expect("serialize");
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    }

    #[test]
    fn test_should_render_document_elements_in_order() {
        let xml = to_xml(&document(vec![person("John", "Doe")])).expect("serialize");

        let title = xml.find("<Title>Test Document</Title>").expect("title");
        let countries = xml.find("<Countries>US,CA</Countries>").expect("countries");
        let date = xml
            .find("<PublishedDate>2024-06-15T00:00:00</PublishedDate>")
            .expect("date");
        let contact = xml.find("<ContactInformation>").expect("contact block");

        assert!(title < countries);
        assert!(countries < date);
        assert!(date < contact);
    }

    #[test]
    fn test_should_render_person_group_with_sequence_attribute() {
        let xml = to_xml(&document(vec![person("John", "Doe")])).expect("serialize");
        assert!(xml.contains("<PersonGroup sequence=\"1\">"));
        assert!(xml.contains("<Name>Analytical Contacts</Name>"));
    }

    #[test]
    fn test_should_render_person_children_in_order() {
        let mut p = person("John", "Doe");
        p.phone_numbers.push("+1-555-123-4567".to_owned());
        p.email_addresses.push("john.doe@example.com".to_owned());
        let xml = to_xml(&document(vec![p])).expect("serialize");

        let family = xml.find("<FamilyName>Doe</FamilyName>").expect("family");
        let given = xml.find("<GivenName>John</GivenName>").expect("given");
        let display = xml.find("<DisplayName>John Doe</DisplayName>").expect("display");
        let job = xml.find("<JobTitle>Analyst</JobTitle>").expect("job");
        let info = xml.find("<ContactInfo>").expect("contact info");

        assert!(family < given && given < display && display < job && job < info);
        assert!(xml.contains("<Phone>"));
        assert!(xml.contains("<Number>+1-555-123-4567</Number>"));
        assert!(xml.contains("<Email>"));
        assert!(xml.contains("<Address>john.doe@example.com</Address>"));
    }

    #[test]
    fn test_should_render_phones_before_emails() {
        let mut p = person("John", "Doe");
        p.phone_numbers.push("111".to_owned());
        p.email_addresses.push("a@b.c".to_owned());
        let xml = to_xml(&document(vec![p])).expect("serialize");

        let phone = xml.find("<Phone>").expect("phone");
        let email = xml.find("<Email>").expect("email");
        assert!(phone < email);
    }

    #[test]
    fn test_should_render_empty_member_element_for_empty_group() {
        let xml = to_xml(&document(Vec::new())).expect("serialize");
        assert!(xml.contains("<PersonGroupMember/>"));
        assert!(!xml.contains("<Person>"));
    }

    #[test]
    fn test_should_indent_with_four_spaces() {
        let xml = to_xml(&document(Vec::new())).expect("serialize");
        assert!(xml.contains("\n    <Title>"));
        assert!(xml.contains("\n    <ContactInformation>"));
        assert!(xml.contains("\n        <PersonGroup sequence=\"1\">"));
    }

    #[test]
    fn test_should_escape_special_characters() {
        let mut doc = document(vec![person("J<hn", "D&e")]);
        doc.title = "Research & Markets <2024>".to_owned();
        let xml = to_xml(&doc).expect("serialize");

        assert!(xml.contains("<Title>Research &amp; Markets &lt;2024&gt;</Title>"));
        assert!(xml.contains("<FamilyName>D&amp;e</FamilyName>"));
        assert!(xml.contains("<GivenName>J&lt;hn</GivenName>"));
    }

    #[test]
    fn test_should_render_empty_countries_element() {
        let mut doc = document(Vec::new());
        doc.countries = String::new();
        let xml = to_xml(&doc).expect("serialize");
        assert!(xml.contains("<Countries></Countries>"));
    }
}
