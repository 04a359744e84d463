/// Presentation writer for PPTX.
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
use crate::ooxml::opc::{self, OpcPackage, PackURI, PackageWriter, Part};
use crate::ooxml::pptx::template;
use std::path::Path;
use tracing::{debug, info};

use super::slide::{MutableSlide, SlideLayout};
use super::table::MEDIUM_STYLE_2_ACCENT_1;

/// First slide ID; `ST_SlideId` values start at 256.
const FIRST_SLIDE_ID: u32 = 256;

/// A mutable PowerPoint presentation for writing.
///
/// Provides methods to add slides, set dimensions and document properties,
/// and serialize the result to a .pptx package.
#[derive(Debug, Clone)]
pub struct MutablePresentation {
    /// Slides in the presentation
    pub(crate) slides: Vec<MutableSlide>,
    /// Slide width in EMUs (English Metric Units, 914400 EMU = 1 inch)
    slide_width: i64,
    /// Slide height in EMUs
    slide_height: i64,
    /// Document title (core properties)
    title: Option<String>,
    /// Document author (core properties)
    creator: Option<String>,
}

impl MutablePresentation {
    /// Create a new empty presentation with default dimensions.
    ///
    /// Default size is 10" x 7.5" (standard 4:3 aspect ratio).
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            slide_width: 9144000,  // 10 inches
            slide_height: 6858000, // 7.5 inches
            title: None,
            creator: None,
        }
    }

    /// Add a new slide using `layout` and return it.
    pub fn add_slide(&mut self, layout: SlideLayout) -> &mut MutableSlide {
        let idx = self.slides.len();
        let slide_id = FIRST_SLIDE_ID + idx as u32;
        self.slides.push(MutableSlide::new(slide_id, layout));
        &mut self.slides[idx]
    }

    /// Get the number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn slides(&self) -> &[MutableSlide] {
        &self.slides
    }

    /// Get a slide by index (0-based).
    pub fn slide(&self, index: usize) -> Option<&MutableSlide> {
        self.slides.get(index)
    }

    /// Get the slide width in EMUs.
    pub fn slide_width(&self) -> i64 {
        self.slide_width
    }

    /// Set the slide width in EMUs.
    pub fn set_slide_width(&mut self, width: i64) {
        self.slide_width = width;
    }

    /// Get the slide height in EMUs.
    pub fn slide_height(&self) -> i64 {
        self.slide_height
    }

    /// Set the slide height in EMUs.
    pub fn set_slide_height(&mut self, height: i64) {
        self.slide_height = height;
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    pub fn creator(&self) -> Option<&str> {
        self.creator.as_deref()
    }

    pub fn set_creator(&mut self, creator: &str) {
        self.creator = Some(creator.to_string());
    }

    /// Check the deck before serialization.
    ///
    /// Every table cell must hold text. Slide, row and column in the
    /// returned error are 1-based.
    pub fn validate(&self) -> Result<()> {
        for (slide_idx, slide) in self.slides.iter().enumerate() {
            for table in slide.tables() {
                if let Some((row, col)) = table.first_empty_cell() {
                    return Err(OoxmlError::IncompleteTable {
                        slide: slide_idx + 1,
                        row: row + 1,
                        col: col + 1,
                    });
                }
            }
        }
        Ok(())
    }

    /// Assemble the OPC package: presentation, master, layouts, theme,
    /// properties and one part per slide.
    pub fn to_package(&self) -> Result<OpcPackage> {
        self.validate()?;

        let mut pkg = OpcPackage::new();

        let pres_uri = PackURI::new("/ppt/presentation.xml")?;
        let master_uri = PackURI::new("/ppt/slideMasters/slideMaster1.xml")?;
        let theme_uri = PackURI::new("/ppt/theme/theme1.xml")?;
        let pres_props_uri = PackURI::new("/ppt/presProps.xml")?;
        let view_props_uri = PackURI::new("/ppt/viewProps.xml")?;
        let table_styles_uri = PackURI::new("/ppt/tableStyles.xml")?;
        let core_uri = PackURI::new("/docProps/core.xml")?;
        let app_uri = PackURI::new("/docProps/app.xml")?;
        let layout_uris = SlideLayout::ALL
            .iter()
            .map(|layout| PackURI::indexed("/ppt/slideLayouts/slideLayout", layout.part_index(), "xml"))
            .collect::<opc::Result<Vec<_>>>()?;

        // Presentation part; its XML needs the rIds assigned below.
        let mut pres_part = Part::new(pres_uri.clone(), ct::PML_PRESENTATION_MAIN, Vec::new());
        let master_rid = pres_part.relate_to(rt::SLIDE_MASTER, &master_uri);

        let mut slide_refs = Vec::with_capacity(self.slides.len());
        let mut slide_parts = Vec::with_capacity(self.slides.len());
        for (idx, slide) in self.slides.iter().enumerate() {
            let slide_uri = PackURI::indexed("/ppt/slides/slide", idx + 1, "xml")?;
            let r_id = pres_part.relate_to(rt::SLIDE, &slide_uri);
            slide_refs.push((slide.slide_id(), r_id));

            let mut part = Part::new(slide_uri, ct::PML_SLIDE, slide.to_xml()?.into_bytes());
            part.relate_to(
                rt::SLIDE_LAYOUT,
                &layout_uris[slide.layout().part_index() - 1],
            );
            debug!(
                slide = idx + 1,
                layout = slide.layout().name(),
                shapes = slide.shape_count(),
                "packaged slide"
            );
            slide_parts.push(part);
        }

        pres_part.relate_to(rt::PRES_PROPS, &pres_props_uri);
        pres_part.relate_to(rt::VIEW_PROPS, &view_props_uri);
        pres_part.relate_to(rt::THEME, &theme_uri);
        pres_part.relate_to(rt::TABLE_STYLES, &table_styles_uri);
        pres_part.set_blob(
            template::presentation_xml(
                &master_rid,
                &slide_refs,
                self.slide_width,
                self.slide_height,
            )?
            .into_bytes(),
        );
        pkg.add_part(pres_part)?;
        pkg.relate_to(rt::OFFICE_DOCUMENT, &pres_uri);

        // Slide master, related to its layouts and the theme.
        let mut master_part = Part::new(master_uri.clone(), ct::PML_SLIDE_MASTER, Vec::new());
        let layout_rids: Vec<String> = layout_uris
            .iter()
            .map(|uri| master_part.relate_to(rt::SLIDE_LAYOUT, uri))
            .collect();
        master_part.relate_to(rt::THEME, &theme_uri);
        master_part.set_blob(template::slide_master_xml(&layout_rids)?.into_bytes());
        pkg.add_part(master_part)?;

        for (layout, uri) in SlideLayout::ALL.iter().zip(&layout_uris) {
            let mut part = Part::new(
                uri.clone(),
                ct::PML_SLIDE_LAYOUT,
                template::slide_layout_xml(*layout)?.into_bytes(),
            );
            part.relate_to(rt::SLIDE_MASTER, &master_uri);
            pkg.add_part(part)?;
        }

        pkg.add_part(Part::new(theme_uri, ct::OFC_THEME, template::theme_xml()?.into_bytes()))?;
        pkg.add_part(Part::new(
            pres_props_uri,
            ct::PML_PRES_PROPS,
            template::pres_props_xml()?.into_bytes(),
        ))?;
        pkg.add_part(Part::new(
            view_props_uri,
            ct::PML_VIEW_PROPS,
            template::view_props_xml()?.into_bytes(),
        ))?;
        pkg.add_part(Part::new(
            table_styles_uri,
            ct::PML_TABLE_STYLES,
            template::table_styles_xml(MEDIUM_STYLE_2_ACCENT_1)?.into_bytes(),
        ))?;

        for part in slide_parts {
            pkg.add_part(part)?;
        }

        pkg.add_part(Part::new(
            core_uri.clone(),
            ct::OPC_CORE_PROPERTIES,
            template::core_props_xml(self.title(), self.creator())?.into_bytes(),
        ))?;
        pkg.relate_to(rt::CORE_PROPERTIES, &core_uri);
        pkg.add_part(Part::new(
            app_uri.clone(),
            ct::OFC_EXTENDED_PROPERTIES,
            template::app_props_xml(self.slides.len())?.into_bytes(),
        ))?;
        pkg.relate_to(rt::EXTENDED_PROPERTIES, &app_uri);

        Ok(pkg)
    }

    /// Serialize the presentation to .pptx bytes.
    ///
    /// The same deck always yields the same bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let pkg = self.to_package()?;
        Ok(PackageWriter::to_bytes(&pkg)?)
    }

    /// Write the presentation to `path`, replacing any existing file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.to_bytes()?;
        std::fs::write(path, &bytes)?;
        info!(
            path = %path.display(),
            slides = self.slides.len(),
            bytes = bytes.len(),
            "saved presentation"
        );
        Ok(())
    }
}

impl Default for MutablePresentation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::PhysPkgReader;
    use crate::ooxml::pptx::writer::{MutableTable, TextFrame};

    #[test]
    fn test_create_presentation() {
        let pres = MutablePresentation::new();
        assert_eq!(pres.slide_count(), 0);
        assert_eq!(pres.slide_width(), 9144000);
        assert_eq!(pres.slide_height(), 6858000);
    }

    #[test]
    fn test_add_slide() {
        let mut pres = MutablePresentation::new();
        pres.add_slide(SlideLayout::Blank);
        let slide = pres.add_slide(SlideLayout::TitleOnly);
        slide.set_title("Test Title");
        assert_eq!(slide.title(), Some("Test Title"));
        assert_eq!(slide.slide_id(), 257);
        assert_eq!(pres.slide_count(), 2);
        assert_eq!(pres.slide(0).unwrap().layout(), SlideLayout::Blank);
    }

    #[test]
    fn test_validate_reports_empty_cell() {
        let mut pres = MutablePresentation::new();
        pres.add_slide(SlideLayout::Blank);
        let table = MutableTable::from_text([["a", "b"], ["c", ""]]).unwrap();
        pres.add_slide(SlideLayout::TitleOnly)
            .add_table(0, 0, 100, 100, table);

        match pres.validate() {
            Err(OoxmlError::IncompleteTable { slide, row, col }) => {
                assert_eq!((slide, row, col), (2, 2, 2));
            },
            other => panic!("expected IncompleteTable, got {:?}", other),
        }
        assert!(pres.to_bytes().is_err());
    }

    #[test]
    fn test_package_layout() {
        let mut pres = MutablePresentation::new();
        pres.set_title("Deck");
        let slide = pres.add_slide(SlideLayout::TitleOnly);
        slide.set_title("Hello");
        slide.add_text_box(0, 0, 100, 100, TextFrame::from_lines(["World"]));
        pres.add_slide(SlideLayout::Blank);

        let pkg = pres.to_package().unwrap();
        let main = pkg.main_document_part().unwrap();
        assert_eq!(main.partname().as_str(), "/ppt/presentation.xml");
        assert_eq!(main.rels().of_type(rt::SLIDE).count(), 2);

        let xml = std::str::from_utf8(main.blob()).unwrap();
        let master_rid = main.rels().of_type(rt::SLIDE_MASTER).next().unwrap().r_id();
        assert!(xml.contains(&format!(r#"r:id="{}""#, master_rid)));
        assert!(xml.contains(r#"<p:sldId id="256""#));

        let slide2 = pkg
            .part(&PackURI::new("/ppt/slides/slide2.xml").unwrap())
            .unwrap();
        let layout = slide2.rels().of_type(rt::SLIDE_LAYOUT).next().unwrap();
        assert_eq!(layout.target_ref(), "../slideLayouts/slideLayout2.xml");
    }

    #[test]
    fn test_to_bytes_is_deterministic() {
        let mut pres = MutablePresentation::new();
        pres.add_slide(SlideLayout::TitleOnly).set_title("Same");
        assert_eq!(pres.to_bytes().unwrap(), pres.to_bytes().unwrap());
    }

    #[test]
    fn test_save_and_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.pptx");

        let mut pres = MutablePresentation::new();
        pres.add_slide(SlideLayout::TitleOnly).set_title("Saved");
        pres.save(&path).unwrap();

        let reader = PhysPkgReader::open(&path).unwrap();
        let names = reader.member_names();
        for expected in [
            "[Content_Types].xml",
            "_rels/.rels",
            "ppt/presentation.xml",
            "ppt/_rels/presentation.xml.rels",
            "ppt/slideMasters/slideMaster1.xml",
            "ppt/slideLayouts/slideLayout1.xml",
            "ppt/theme/theme1.xml",
            "ppt/slides/slide1.xml",
            "ppt/slides/_rels/slide1.xml.rels",
            "docProps/core.xml",
        ] {
            assert!(names.iter().any(|n| n == expected), "missing {expected}");
        }
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("deck.pptx");
        let mut pres = MutablePresentation::new();
        pres.add_slide(SlideLayout::Blank);
        assert!(pres.save(&path).is_err());
        assert!(!path.exists());
    }
}
