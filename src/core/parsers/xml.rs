use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};

use crate::core::{StringEntry, error::ResourceError};

const ROOT_TAG: &[u8] = b"resources";
const STRING_TAG: &[u8] = b"string";

/// Parse a resource document and keep only translatable `<string>` entries.
///
/// Entries marked `translatable="false"` never leave the parser: they can
/// neither be reported missing nor satisfy another locale.
pub fn parse_string_resources(content: &[u8]) -> Result<Vec<StringEntry>, ResourceError> {
    let mut entries = read_string_entries(content)?;
    entries.retain(|entry| entry.translatable);
    Ok(entries)
}

/// Read every `<string>` that is an immediate child of `<resources>`.
///
/// The entry value is the element's own character data (entities unescaped,
/// CDATA included); text inside nested markup such as `<b>` or `<xliff:g>` is
/// not part of the value. Other resource types (`<plurals>`,
/// `<string-array>`, ...) are skipped.
pub fn read_string_entries(content: &[u8]) -> Result<Vec<StringEntry>, ResourceError> {
    let mut reader = Reader::from_reader(content);
    let mut entries = Vec::new();
    let mut pending: Option<StringEntry> = None;
    let mut depth = 0usize;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                match depth {
                    0 => expect_root(&e)?,
                    1 if is_string_tag(&e) => pending = Some(entry_from_start(&e)?),
                    _ => {}
                }
                depth += 1;
            }
            Event::Empty(e) => match depth {
                // `<resources/>`
                0 => {
                    expect_root(&e)?;
                    return Ok(entries);
                }
                1 if is_string_tag(&e) => entries.push(entry_from_start(&e)?),
                _ => {}
            },
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                match depth {
                    0 => return Ok(entries),
                    1 => entries.extend(pending.take()),
                    _ => {}
                }
            }
            Event::Text(text) if depth == 2 => {
                if let Some(entry) = pending.as_mut() {
                    entry.value.push_str(&text.unescape()?);
                }
            }
            Event::CData(cdata) if depth == 2 => {
                if let Some(entry) = pending.as_mut() {
                    entry.value.push_str(&String::from_utf8_lossy(&cdata));
                }
            }
            Event::Eof if depth == 0 => return Err(ResourceError::MissingRoot),
            Event::Eof => return Err(ResourceError::Unterminated),
            _ => {}
        }
    }
}

fn expect_root(start: &BytesStart) -> Result<(), ResourceError> {
    if start.local_name().as_ref() == ROOT_TAG {
        Ok(())
    } else {
        Err(ResourceError::UnexpectedRoot(
            String::from_utf8_lossy(start.name().as_ref()).into_owned(),
        ))
    }
}

fn is_string_tag(start: &BytesStart) -> bool {
    start.local_name().as_ref() == STRING_TAG
}

fn entry_from_start(start: &BytesStart) -> Result<StringEntry, ResourceError> {
    let mut name = None;
    let mut translatable = None;

    for attr in start.attributes() {
        let attr = attr?;
        match attr.key.local_name().as_ref() {
            b"name" => name = Some(attr.unescape_value()?.into_owned()),
            b"translatable" => translatable = Some(attr.unescape_value()?.into_owned()),
            _ => {}
        }
    }

    let name = name
        .filter(|n| !n.is_empty())
        .ok_or(ResourceError::MissingName)?;

    Ok(StringEntry::new(name, String::new())
        .with_translatable(StringEntry::translatable_from_attr(translatable.as_deref())))
}
