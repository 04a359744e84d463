//! Reading back the text structure of a saved presentation.
//!
//! Only what is needed to check a generated deck: slide order, titles,
//! text box paragraphs and table cell text.

use crate::common::xml::predefined_entity;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::relationship_type as rt;
use crate::ooxml::opc::{PackURI, PhysPkgReader};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::path::Path;

/// Text content of one slide.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlideSummary {
    /// Text of the title placeholder, if the slide has one
    pub title: Option<String>,
    /// Text of each non-placeholder shape, paragraphs joined with `\n`
    pub texts: Vec<String>,
    /// Cell text of each table, row by row
    pub tables: Vec<Vec<Vec<String>>>,
}

impl SlideSummary {
    /// The title, or the first paragraph of the first text shape.
    pub fn heading(&self) -> Option<&str> {
        self.title.as_deref().or_else(|| {
            self.texts
                .first()
                .map(|text| text.split('\n').next().unwrap_or_default())
        })
    }

    pub fn table_count(&self) -> usize {
        self.tables.len()
    }
}

/// One `Relationship` element: (Id, Type, Target).
type RelEntry = (String, String, String);

fn attr_value(e: &BytesStart<'_>, key: &[u8]) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr.map_err(|e| OoxmlError::Xml(e.to_string()))?;
        if attr.key.as_ref() == key {
            let value = attr
                .unescape_value()
                .map_err(|e| OoxmlError::Xml(e.to_string()))?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

fn parse_rels(xml: &[u8]) -> Result<Vec<RelEntry>> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut rels = Vec::new();
    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"Relationship" => {
                let id = attr_value(&e, b"Id")?.unwrap_or_default();
                let reltype = attr_value(&e, b"Type")?.unwrap_or_default();
                let target = attr_value(&e, b"Target")?.unwrap_or_default();
                rels.push((id, reltype, target));
            },
            Event::Eof => break,
            _ => {},
        }
    }
    Ok(rels)
}

/// rIds of `<p:sldId>` entries in presentation order.
fn parse_slide_rids(xml: &[u8]) -> Result<Vec<String>> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut rids = Vec::new();
    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"sldId" => {
                if let Some(r_id) = attr_value(&e, b"r:id")? {
                    rids.push(r_id);
                }
            },
            Event::Eof => break,
            _ => {},
        }
    }
    Ok(rids)
}

/// Where text currently being read belongs.
#[derive(Default)]
struct ShapeState {
    is_title: bool,
    paragraphs: Vec<String>,
}

fn parse_slide(xml: &[u8]) -> Result<SlideSummary> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(false);

    let mut summary = SlideSummary::default();
    let mut shape: Option<ShapeState> = None;
    let mut table: Option<Vec<Vec<String>>> = None;
    let mut cell: Option<Vec<String>> = None;
    let mut paragraph: Option<String> = None;
    let mut in_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"sp" => shape = Some(ShapeState::default()),
                b"ph" => {
                    if let Some(state) = shape.as_mut() {
                        state.is_title = is_title_placeholder(&e)?;
                    }
                },
                b"tbl" => table = Some(Vec::new()),
                b"tr" => {
                    if let Some(rows) = table.as_mut() {
                        rows.push(Vec::new());
                    }
                },
                b"tc" => cell = Some(Vec::new()),
                b"p" => paragraph = Some(String::new()),
                b"t" => in_text = true,
                _ => {},
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"ph" => {
                    if let Some(state) = shape.as_mut() {
                        state.is_title = is_title_placeholder(&e)?;
                    }
                },
                b"p" => push_paragraph(String::new(), &mut shape, &mut cell),
                _ => {},
            },
            Event::Text(e) if in_text => {
                if let Some(para) = paragraph.as_mut() {
                    let t = std::str::from_utf8(e.as_ref())
                        .map_err(|e| OoxmlError::Xml(e.to_string()))?;
                    para.push_str(t);
                }
            },
            Event::GeneralRef(e) if in_text => {
                if let Some(para) = paragraph.as_mut() {
                    let resolved = match e.resolve_char_ref() {
                        Ok(Some(ch)) => Some(ch),
                        _ => predefined_entity(&e),
                    };
                    let ch = resolved.ok_or_else(|| {
                        OoxmlError::Xml(format!(
                            "unknown entity &{};",
                            String::from_utf8_lossy(&e)
                        ))
                    })?;
                    para.push(ch);
                }
            },
            Event::End(e) => match e.local_name().as_ref() {
                b"t" => in_text = false,
                b"p" => {
                    if let Some(para) = paragraph.take() {
                        push_paragraph(para, &mut shape, &mut cell);
                    }
                },
                b"tc" => {
                    if let (Some(paras), Some(row)) =
                        (cell.take(), table.as_mut().and_then(|rows| rows.last_mut()))
                    {
                        row.push(paras.join("\n"));
                    }
                },
                b"tbl" => {
                    if let Some(rows) = table.take() {
                        summary.tables.push(rows);
                    }
                },
                b"sp" => {
                    if let Some(state) = shape.take() {
                        let text = state.paragraphs.join("\n");
                        if state.is_title {
                            summary.title = Some(text);
                        } else {
                            summary.texts.push(text);
                        }
                    }
                },
                _ => {},
            },
            Event::Eof => break,
            _ => {},
        }
    }

    Ok(summary)
}

fn push_paragraph(para: String, shape: &mut Option<ShapeState>, cell: &mut Option<Vec<String>>) {
    if let Some(paras) = cell.as_mut() {
        paras.push(para);
    } else if let Some(state) = shape.as_mut() {
        state.paragraphs.push(para);
    }
}

fn is_title_placeholder(e: &BytesStart<'_>) -> Result<bool> {
    Ok(matches!(
        attr_value(e, b"type")?.as_deref(),
        Some("title") | Some("ctrTitle")
    ))
}

/// Summarize every slide of a .pptx package held in memory, in
/// presentation order.
pub fn read_slide_summaries(bytes: Vec<u8>) -> Result<Vec<SlideSummary>> {
    let mut phys = PhysPkgReader::from_bytes(bytes)?;

    let pkg_rels = phys
        .rels_xml_for(&PackURI::new("/")?)?
        .ok_or_else(|| OoxmlError::InvalidFormat("package has no relationships".to_string()))?;
    let (_, _, main_target) = parse_rels(&pkg_rels)?
        .into_iter()
        .find(|(_, reltype, _)| reltype == rt::OFFICE_DOCUMENT)
        .ok_or_else(|| OoxmlError::InvalidFormat("no main document part".to_string()))?;
    let pres_uri = PackURI::from_rel_ref("/", &main_target)?;

    let pres_xml = phys.blob_for(&pres_uri)?;
    let pres_rels = match phys.rels_xml_for(&pres_uri)? {
        Some(xml) => parse_rels(&xml)?,
        None => Vec::new(),
    };

    let mut summaries = Vec::new();
    for r_id in parse_slide_rids(&pres_xml)? {
        let (_, _, target) = pres_rels
            .iter()
            .find(|(id, reltype, _)| *id == r_id && reltype == rt::SLIDE)
            .ok_or_else(|| {
                OoxmlError::InvalidFormat(format!("slide relationship {} not found", r_id))
            })?;
        let slide_uri = PackURI::from_rel_ref(pres_uri.base_uri(), target)?;
        summaries.push(parse_slide(&phys.blob_for(&slide_uri)?)?);
    }

    Ok(summaries)
}

/// Summarize every slide of the .pptx file at `path`.
pub fn open_summaries<P: AsRef<Path>>(path: P) -> Result<Vec<SlideSummary>> {
    read_slide_summaries(std::fs::read(path)?)
}
