// SPDX-License-Identifier: MPL-2.0
//! Discovery of country paths in a map document.
//!
//! A country is any `<path>` element with an `id` that sits somewhere below a
//! `<g>` element, i.e. what the CSS selector `g path` matches. Paths placed
//! directly under the root are decoration (frames, sea) and are skipped.

use crate::error::{Error, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::HashSet;

/// Returns the ids of `g path` elements in document order, without duplicates.
pub fn grouped_path_ids(svg: &[u8]) -> Result<Vec<String>> {
    let mut reader = Reader::from_reader(svg);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut group_depth = 0usize;
    let mut seen = HashSet::new();
    let mut ids = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.local_name().as_ref() {
                b"g" => group_depth += 1,
                b"path" if group_depth > 0 => push_id(e, &mut seen, &mut ids)?,
                _ => {}
            },
            // `<g/>` opens and closes at once, so only paths matter here.
            Ok(Event::Empty(ref e)) => {
                if group_depth > 0 && e.local_name().as_ref() == b"path" {
                    push_id(e, &mut seen, &mut ids)?;
                }
            }
            Ok(Event::End(ref e)) => {
                if e.local_name().as_ref() == b"g" {
                    group_depth = group_depth.saturating_sub(1);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(Error::Svg(format!(
                    "malformed SVG at byte {}: {}",
                    reader.buffer_position(),
                    e
                )))
            }
            _ => {}
        }
        buf.clear();
    }

    Ok(ids)
}

fn push_id(element: &BytesStart<'_>, seen: &mut HashSet<String>, ids: &mut Vec<String>) -> Result<()> {
    let Some(attr) = element
        .try_get_attribute("id")
        .map_err(|e| Error::Svg(e.to_string()))?
    else {
        return Ok(());
    };
    let id = attr
        .unescape_value()
        .map_err(|e| Error::Svg(e.to_string()))?
        .into_owned();
    if !id.is_empty() && seen.insert(id.clone()) {
        ids.push(id);
    }
    Ok(())
}
