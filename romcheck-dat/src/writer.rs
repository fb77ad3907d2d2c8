//! Logiqx XML serialization for DAT files.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::dat::{DatFile, DatGame, DatHeader, DatRom};
use crate::error::DatError;

const DOCTYPE: &str = r#"datafile PUBLIC "-//Logiqx//DTD ROM Management Datafile//EN" "http://www.logiqx.com/Dats/datafile.dtd""#;

/// Serialize a DAT to Logiqx XML (UTF-8, tab indented).
pub fn to_xml_string(dat: &DatFile) -> Result<String, DatError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b'\t', 1);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::DocType(BytesText::from_escaped(DOCTYPE)))?;
    writer.write_event(Event::Start(BytesStart::new("datafile")))?;

    write_header(&mut writer, &dat.header)?;
    for game in &dat.games {
        write_game(&mut writer, game)?;
    }

    writer.write_event(Event::End(BytesEnd::new("datafile")))?;

    let mut xml = String::from_utf8(writer.into_inner())?;
    xml.push('\n');
    Ok(xml)
}

fn write_header(writer: &mut Writer<Vec<u8>>, header: &DatHeader) -> Result<(), DatError> {
    writer.write_event(Event::Start(BytesStart::new("header")))?;

    let comment = match &header.source {
        Some(source) if header.comment.is_empty() => source_comment(source),
        _ => header.comment.clone(),
    };

    let fields = [
        ("name", header.name.as_str()),
        ("description", header.description.as_str()),
        ("version", header.version.as_str()),
        ("date", header.date.as_str()),
        ("author", header.author.as_str()),
        ("homepage", header.homepage.as_str()),
        ("url", header.url.as_str()),
        ("comment", comment.as_str()),
    ];
    for (tag, value) in fields {
        if !value.is_empty() {
            write_text_element(writer, tag, value)?;
        }
    }

    writer.write_event(Event::End(BytesEnd::new("header")))?;
    Ok(())
}

/// Comment recorded on derived DATs that don't set one explicitly.
fn source_comment(source: &DatHeader) -> String {
    if source.version.is_empty() {
        format!("Derived from {}", source.name)
    } else {
        format!("Derived from {} ({})", source.name, source.version)
    }
}

fn write_game(writer: &mut Writer<Vec<u8>>, game: &DatGame) -> Result<(), DatError> {
    let mut start = BytesStart::new("game");
    start.push_attribute(("name", game.name.as_str()));
    if let Some(parent) = &game.clone_of {
        start.push_attribute(("cloneof", parent.as_str()));
    }
    if game.bios {
        start.push_attribute(("isbios", "yes"));
    }
    if game.device {
        start.push_attribute(("isdevice", "yes"));
    }
    writer.write_event(Event::Start(start))?;

    let description = if game.description.is_empty() {
        &game.name
    } else {
        &game.description
    };
    write_text_element(writer, "description", description)?;

    for rom in &game.roms {
        write_rom(writer, rom)?;
    }

    writer.write_event(Event::End(BytesEnd::new("game")))?;
    Ok(())
}

fn write_rom(writer: &mut Writer<Vec<u8>>, rom: &DatRom) -> Result<(), DatError> {
    let size = rom.size.to_string();
    let mut elem = BytesStart::new("rom");
    elem.push_attribute(("name", rom.name.as_str()));
    elem.push_attribute(("size", size.as_str()));
    if !rom.crc.is_empty() {
        elem.push_attribute(("crc", rom.crc.as_str()));
    }
    if let Some(md5) = &rom.md5 {
        elem.push_attribute(("md5", md5.as_str()));
    }
    if let Some(sha1) = &rom.sha1 {
        elem.push_attribute(("sha1", sha1.as_str()));
    }
    if let Some(status) = &rom.status {
        elem.push_attribute(("status", status.as_str()));
    }
    writer.write_event(Event::Empty(elem))?;
    Ok(())
}

fn write_text_element(
    writer: &mut Writer<Vec<u8>>,
    tag: &str,
    text: &str,
) -> Result<(), DatError> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}
