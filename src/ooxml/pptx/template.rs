//! Presentation template module.
//!
//! Provides the fixed parts every generated .pptx carries: one slide
//! master, the "Title Only" and "Blank" layouts, an Office theme and the
//! presentation/view/table-style properties. The parts are kept minified
//! so the archive bytes only depend on the deck content.

use crate::common::xml::{escape_attr, escape_text};
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::namespace;
use crate::ooxml::pptx::writer::SlideLayout;
use std::fmt::Write as FmtWrite;

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n";

/// Empty group shape properties opening every shape tree.
const GROUP_SHAPE_PROPS: &str = concat!(
    r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#,
    r#"<p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/>"#,
    r#"<a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#,
);

const FONT_REFS_MAJOR: &str =
    r#"<a:latin typeface="+mj-lt"/><a:ea typeface="+mj-ea"/><a:cs typeface="+mj-cs"/>"#;
const FONT_REFS_MINOR: &str =
    r#"<a:latin typeface="+mn-lt"/><a:ea typeface="+mn-ea"/><a:cs typeface="+mn-cs"/>"#;

/// First ID of the master/layout ID space (`ST_SlideMasterId` minimum).
pub const SLIDE_MASTER_ID: u32 = 2_147_483_648;

fn write_root_open(xml: &mut String, element: &str, extra_attrs: &str) -> Result<()> {
    xml.push_str(XML_DECLARATION);
    write!(
        xml,
        r#"<{} xmlns:a="{}" xmlns:r="{}" xmlns:p="{}"{}>"#,
        element,
        namespace::DML_MAIN,
        namespace::OFC_RELATIONSHIPS,
        namespace::PML_MAIN,
        extra_attrs
    )?;
    Ok(())
}

/// Paragraph level properties `lvlNpPr` for `levels` outline levels, each
/// indented half an inch further than the previous one.
fn write_level_styles(xml: &mut String, levels: u8, size: u32) -> Result<()> {
    for lvl in 1..=levels {
        let margin = u32::from(lvl - 1) * 457_200;
        write!(
            xml,
            r#"<a:lvl{lvl}pPr marL="{margin}" algn="l" defTabSz="914400" rtl="0" eaLnBrk="1" latinLnBrk="0" hangingPunct="1"><a:defRPr sz="{size}" kern="1200"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill>{FONT_REFS_MINOR}</a:defRPr></a:lvl{lvl}pPr>"#
        )?;
    }
    Ok(())
}

/// `presentation.xml`: master and slide ID lists, slide size and default
/// text styles.
///
/// `slides` pairs each slide ID with the rId the presentation part uses to
/// reference it.
pub fn presentation_xml(
    master_rid: &str,
    slides: &[(u32, String)],
    slide_width: i64,
    slide_height: i64,
) -> Result<String> {
    let mut xml = String::with_capacity(2048);
    write_root_open(&mut xml, "p:presentation", r#" saveSubsetFonts="1""#)?;

    write!(
        xml,
        r#"<p:sldMasterIdLst><p:sldMasterId id="{}" r:id="{}"/></p:sldMasterIdLst>"#,
        SLIDE_MASTER_ID, master_rid
    )?;

    if !slides.is_empty() {
        xml.push_str("<p:sldIdLst>");
        for (slide_id, r_id) in slides {
            write!(xml, r#"<p:sldId id="{}" r:id="{}"/>"#, slide_id, r_id)?;
        }
        xml.push_str("</p:sldIdLst>");
    }

    write!(
        xml,
        r#"<p:sldSz cx="{}" cy="{}"/>"#,
        slide_width, slide_height
    )?;
    xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);

    xml.push_str(r#"<p:defaultTextStyle><a:defPPr><a:defRPr lang="en-US"/></a:defPPr>"#);
    write_level_styles(&mut xml, 5, 1800)?;
    xml.push_str("</p:defaultTextStyle>");

    xml.push_str("</p:presentation>");
    Ok(xml)
}

/// The slide master. `layout_rids[i]` references the layout part of
/// `SlideLayout::ALL[i]`.
pub fn slide_master_xml(layout_rids: &[String]) -> Result<String> {
    let mut xml = String::with_capacity(6144);
    write_root_open(&mut xml, "p:sldMaster", "")?;

    xml.push_str("<p:cSld>");
    xml.push_str(r#"<p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg>"#);
    xml.push_str("<p:spTree>");
    xml.push_str(GROUP_SHAPE_PROPS);

    // Title placeholder
    xml.push_str(concat!(
        r#"<p:sp><p:nvSpPr><p:cNvPr id="2" name="Title Placeholder 1"/>"#,
        r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr><p:nvPr><p:ph type="title"/></p:nvPr></p:nvSpPr>"#,
        r#"<p:spPr><a:xfrm><a:off x="457200" y="274638"/><a:ext cx="8229600" cy="1143000"/></a:xfrm>"#,
        r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom></p:spPr>"#,
        r#"<p:txBody><a:bodyPr vert="horz" lIns="91440" tIns="45720" rIns="91440" bIns="45720" rtlCol="0" anchor="ctr"><a:normAutofit/></a:bodyPr>"#,
        r#"<a:lstStyle/><a:p><a:r><a:rPr lang="en-US"/><a:t>Click to edit Master title style</a:t></a:r>"#,
        r#"<a:endParaRPr lang="en-US"/></a:p></p:txBody></p:sp>"#,
    ));

    // Body placeholder
    xml.push_str(concat!(
        r#"<p:sp><p:nvSpPr><p:cNvPr id="3" name="Text Placeholder 2"/>"#,
        r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr><p:nvPr><p:ph type="body" idx="1"/></p:nvPr></p:nvSpPr>"#,
        r#"<p:spPr><a:xfrm><a:off x="457200" y="1600200"/><a:ext cx="8229600" cy="4525963"/></a:xfrm>"#,
        r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom></p:spPr>"#,
        r#"<p:txBody><a:bodyPr vert="horz" lIns="91440" tIns="45720" rIns="91440" bIns="45720" rtlCol="0"><a:normAutofit/></a:bodyPr>"#,
        r#"<a:lstStyle/><a:p><a:pPr lvl="0"/><a:r><a:rPr lang="en-US"/><a:t>Click to edit Master text styles</a:t></a:r></a:p></p:txBody></p:sp>"#,
    ));

    xml.push_str("</p:spTree>");
    xml.push_str("</p:cSld>");

    xml.push_str(concat!(
        r#"<p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" "#,
        r#"accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/>"#,
    ));

    xml.push_str("<p:sldLayoutIdLst>");
    for (offset, r_id) in layout_rids.iter().enumerate() {
        write!(
            xml,
            r#"<p:sldLayoutId id="{}" r:id="{}"/>"#,
            SLIDE_MASTER_ID + 1 + offset as u32,
            r_id
        )?;
    }
    xml.push_str("</p:sldLayoutIdLst>");

    xml.push_str("<p:txStyles>");
    write!(
        xml,
        r#"<p:titleStyle><a:lvl1pPr algn="ctr" defTabSz="914400" rtl="0" eaLnBrk="1" latinLnBrk="0" hangingPunct="1"><a:spcBef><a:spcPct val="0"/></a:spcBef><a:buNone/><a:defRPr sz="4400" kern="1200"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill>{}</a:defRPr></a:lvl1pPr></p:titleStyle>"#,
        FONT_REFS_MAJOR
    )?;
    write!(
        xml,
        r#"<p:bodyStyle><a:lvl1pPr marL="342900" indent="-342900" algn="l" defTabSz="914400" rtl="0" eaLnBrk="1" latinLnBrk="0" hangingPunct="1"><a:spcBef><a:spcPct val="20000"/></a:spcBef><a:buFont typeface="Arial"/><a:buChar char="&#8226;"/><a:defRPr sz="3200" kern="1200"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill>{fonts}</a:defRPr></a:lvl1pPr><a:lvl2pPr marL="742950" indent="-285750" algn="l" defTabSz="914400" rtl="0" eaLnBrk="1" latinLnBrk="0" hangingPunct="1"><a:spcBef><a:spcPct val="20000"/></a:spcBef><a:buFont typeface="Arial"/><a:buChar char="&#8211;"/><a:defRPr sz="2800" kern="1200"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill>{fonts}</a:defRPr></a:lvl2pPr></p:bodyStyle>"#,
        fonts = FONT_REFS_MINOR
    )?;
    xml.push_str(r#"<p:otherStyle><a:defPPr><a:defRPr lang="en-US"/></a:defPPr>"#);
    write_level_styles(&mut xml, 5, 1800)?;
    xml.push_str("</p:otherStyle>");
    xml.push_str("</p:txStyles>");

    xml.push_str("</p:sldMaster>");
    Ok(xml)
}

/// A slide layout part.
pub fn slide_layout_xml(layout: SlideLayout) -> Result<String> {
    let mut xml = String::with_capacity(1024);
    write_root_open(
        &mut xml,
        "p:sldLayout",
        &format!(r#" type="{}" preserve="1""#, layout.type_attr()),
    )?;

    write!(xml, r#"<p:cSld name="{}">"#, escape_attr(layout.name()))?;
    xml.push_str("<p:spTree>");
    xml.push_str(GROUP_SHAPE_PROPS);
    if layout.has_title() {
        xml.push_str(concat!(
            r#"<p:sp><p:nvSpPr><p:cNvPr id="2" name="Title 1"/>"#,
            r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr><p:nvPr><p:ph type="title"/></p:nvPr></p:nvSpPr>"#,
            r#"<p:spPr/><p:txBody><a:bodyPr/><a:lstStyle/>"#,
            r#"<a:p><a:r><a:rPr lang="en-US"/><a:t>Click to edit Master title style</a:t></a:r>"#,
            r#"<a:endParaRPr lang="en-US"/></a:p></p:txBody></p:sp>"#,
        ));
    }
    xml.push_str("</p:spTree>");
    xml.push_str("</p:cSld>");
    xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
    xml.push_str("</p:sldLayout>");
    Ok(xml)
}

/// The Office theme: color scheme, Calibri font scheme and a flat format
/// scheme.
pub fn theme_xml() -> Result<String> {
    let mut xml = String::with_capacity(4096);
    xml.push_str(XML_DECLARATION);
    write!(xml, r#"<a:theme xmlns:a="{}" name="Office Theme">"#, namespace::DML_MAIN)?;
    xml.push_str("<a:themeElements>");

    xml.push_str(r#"<a:clrScheme name="Office">"#);
    xml.push_str(r#"<a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1>"#);
    xml.push_str(r#"<a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1>"#);
    let scheme = [
        ("dk2", "1F497D"),
        ("lt2", "EEECE1"),
        ("accent1", "4F81BD"),
        ("accent2", "C0504D"),
        ("accent3", "9BBB59"),
        ("accent4", "8064A2"),
        ("accent5", "4BACC6"),
        ("accent6", "F79646"),
        ("hlink", "0000FF"),
        ("folHlink", "800080"),
    ];
    for (slot, hex) in scheme {
        write!(xml, r#"<a:{slot}><a:srgbClr val="{hex}"/></a:{slot}>"#)?;
    }
    xml.push_str("</a:clrScheme>");

    xml.push_str(r#"<a:fontScheme name="Office">"#);
    for kind in ["majorFont", "minorFont"] {
        write!(
            xml,
            r#"<a:{kind}><a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/></a:{kind}>"#
        )?;
    }
    xml.push_str("</a:fontScheme>");

    xml.push_str(r#"<a:fmtScheme name="Office">"#);
    const PH_FILL: &str = r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#;
    xml.push_str("<a:fillStyleLst>");
    for _ in 0..3 {
        xml.push_str(PH_FILL);
    }
    xml.push_str("</a:fillStyleLst>");
    xml.push_str("<a:lnStyleLst>");
    for width in [9525, 25400, 38100] {
        write!(
            xml,
            r#"<a:ln w="{width}" cap="flat" cmpd="sng" algn="ctr">{PH_FILL}<a:prstDash val="solid"/></a:ln>"#
        )?;
    }
    xml.push_str("</a:lnStyleLst>");
    xml.push_str("<a:effectStyleLst>");
    for _ in 0..3 {
        xml.push_str("<a:effectStyle><a:effectLst/></a:effectStyle>");
    }
    xml.push_str("</a:effectStyleLst>");
    xml.push_str("<a:bgFillStyleLst>");
    for _ in 0..3 {
        xml.push_str(PH_FILL);
    }
    xml.push_str("</a:bgFillStyleLst>");
    xml.push_str("</a:fmtScheme>");

    xml.push_str("</a:themeElements>");
    xml.push_str("<a:objectDefaults/><a:extraClrSchemeLst/>");
    xml.push_str("</a:theme>");
    Ok(xml)
}

pub fn pres_props_xml() -> Result<String> {
    let mut xml = String::with_capacity(256);
    write_root_open(&mut xml, "p:presentationPr", "")?;
    xml.push_str("</p:presentationPr>");
    Ok(xml)
}

pub fn view_props_xml() -> Result<String> {
    let mut xml = String::with_capacity(512);
    write_root_open(&mut xml, "p:viewPr", "")?;
    xml.push_str(concat!(
        r#"<p:normalViewPr><p:restoredLeft sz="15620"/><p:restoredTop sz="94660"/></p:normalViewPr>"#,
        r#"<p:gridSpacing cx="76200" cy="76200"/>"#,
    ));
    xml.push_str("</p:viewPr>");
    Ok(xml)
}

/// Table style list naming the default style tables refer to.
pub fn table_styles_xml(default_style: &str) -> Result<String> {
    let mut xml = String::with_capacity(256);
    xml.push_str(XML_DECLARATION);
    write!(
        xml,
        r#"<a:tblStyleLst xmlns:a="{}" def="{}"/>"#,
        namespace::DML_MAIN,
        escape_attr(default_style)
    )?;
    Ok(xml)
}

/// Core document properties. No timestamps are written.
pub fn core_props_xml(title: Option<&str>, creator: Option<&str>) -> Result<String> {
    let mut xml = String::with_capacity(512);
    xml.push_str(XML_DECLARATION);
    xml.push_str(concat!(
        r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" "#,
        r#"xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" "#,
        r#"xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#,
    ));
    if let Some(title) = title {
        write!(xml, "<dc:title>{}</dc:title>", escape_text(title))?;
    }
    if let Some(creator) = creator {
        write!(xml, "<dc:creator>{}</dc:creator>", escape_text(creator))?;
    }
    xml.push_str("<cp:revision>1</cp:revision>");
    xml.push_str("</cp:coreProperties>");
    Ok(xml)
}

/// Extended (application) properties.
pub fn app_props_xml(slide_count: usize) -> Result<String> {
    let mut xml = String::with_capacity(512);
    xml.push_str(XML_DECLARATION);
    xml.push_str(concat!(
        r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" "#,
        r#"xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#,
    ));
    write!(xml, "<Application>{}</Application>", env!("CARGO_PKG_NAME"))?;
    xml.push_str("<PresentationFormat>On-screen Show (4:3)</PresentationFormat>");
    write!(xml, "<Slides>{}</Slides>", slide_count)?;
    xml.push_str("</Properties>");
    Ok(xml)
}
