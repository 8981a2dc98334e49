use std::fmt::Display;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::items::{Document, Element};
use crate::Error;

/// Reads `input` into a [`Document`].
///
/// Open elements live on an explicit stack, so nesting depth is only bounded
/// by memory. End tag names, attribute uniqueness and entity references are
/// checked by the reader.
pub fn parse(input: impl AsRef<str>) -> Result<Document, Error> {
    let mut reader = Reader::from_str(input.as_ref());
    let mut open: Vec<Element> = vec![];
    let mut root: Option<Element> = None;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| located(reader.error_position(), e))?;

        match event {
            Event::Start(start) => {
                let element =
                    start_element(&start).map_err(|e| located(reader.buffer_position(), e))?;
                open.push(element);
            }
            Event::Empty(start) => {
                let element =
                    start_element(&start).map_err(|e| located(reader.buffer_position(), e))?;
                attach(element, &mut open, &mut root)
                    .map_err(|e| located(reader.buffer_position(), e))?;
            }
            Event::End(_) => {
                let element = open.pop().ok_or_else(|| {
                    located(reader.buffer_position(), "end tag without a start tag")
                })?;
                attach(element, &mut open, &mut root)
                    .map_err(|e| located(reader.buffer_position(), e))?;
            }
            Event::Text(text) => {
                let text = text
                    .unescape()
                    .map_err(|e| located(reader.buffer_position(), e))?;
                match open.last_mut() {
                    Some(parent) => parent
                        .text
                        .get_or_insert_with(String::new)
                        .push_str(&text),
                    None if text.trim().is_empty() => {}
                    None => {
                        return Err(located(
                            reader.buffer_position(),
                            "text outside the root element",
                        ));
                    }
                }
            }
            Event::CData(data) => {
                let parent = open.last_mut().ok_or_else(|| {
                    located(reader.buffer_position(), "CDATA outside the root element")
                })?;
                parent
                    .text
                    .get_or_insert_with(String::new)
                    .push_str(&String::from_utf8_lossy(&data));
            }
            Event::Eof => break,
            // declaration, comments, processing instructions, DOCTYPE
            _ => {}
        }
    }

    if let Some(unclosed) = open.last() {
        return Err(located(
            reader.buffer_position(),
            format!("`<{}>` is never closed", unclosed.tag),
        ));
    }

    root.map(Document::new)
        .ok_or_else(|| Error::ParseError("XML: document has no root element".to_string()))
}

fn start_element(start: &BytesStart<'_>) -> Result<Element, quick_xml::Error> {
    let mut element = Element::new(String::from_utf8_lossy(start.name().as_ref()));

    for attribute in start.attributes() {
        let attribute = attribute?;
        let name = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let value = attribute.unescape_value()?.into_owned();
        element.attributes.insert(name, value);
    }

    Ok(element)
}

/// Hands a closed element to its parent, or makes it the root.
fn attach(
    element: Element,
    open: &mut [Element],
    root: &mut Option<Element>,
) -> Result<(), String> {
    match open.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_none() => *root = Some(element),
        None => return Err(format!("second root element `<{}>`", element.tag)),
    }
    Ok(())
}

fn located(position: u64, message: impl Display) -> Error {
    Error::ParseError(format!("XML: {message} at byte {position}"))
}
