//! The twelve slides, as data.
//!
//! Each slide is a [`SlideSpec`]: an optional title, an optional solid
//! background and a list of positioned elements. Positions and sizes are in
//! inches, font sizes in points. [`super::render`] turns each description into a
//! slide.

use crate::common::RGBColor;
use crate::deck::palette::*;

/// Position and size of an element, in inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

pub const fn frame(left: f64, top: f64, width: f64, height: f64) -> Frame {
    Frame {
        left,
        top,
        width,
        height,
    }
}

/// A run inside a paragraph. Unset fields follow the paragraph.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Run {
    pub text: &'static str,
    pub bold: Option<bool>,
    pub color: Option<RGBColor>,
}

pub fn run(text: &'static str) -> Run {
    Run {
        text,
        ..Run::default()
    }
}

impl Run {
    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    pub fn color(mut self, color: RGBColor) -> Self {
        self.color = Some(color);
        self
    }
}

/// A paragraph: its runs and the font they share.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Para {
    pub runs: Vec<Run>,
    pub size: Option<f64>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub color: Option<RGBColor>,
    pub centered: bool,
    pub space_after: Option<f64>,
    pub level: u8,
}

/// A paragraph starting with one run of `text`.
pub fn para(text: &'static str) -> Para {
    Para {
        runs: vec![run(text)],
        ..Para::default()
    }
}

impl Para {
    pub fn size(mut self, pt: f64) -> Self {
        self.size = Some(pt);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = Some(true);
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = Some(true);
        self
    }

    pub fn color(mut self, color: RGBColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn center(mut self) -> Self {
        self.centered = true;
        self
    }

    pub fn space_after(mut self, pt: f64) -> Self {
        self.space_after = Some(pt);
        self
    }

    pub fn level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    /// Append a run after the existing ones.
    pub fn then(mut self, run: Run) -> Self {
        self.runs.push(run);
        self
    }

    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text).collect()
    }
}

/// Recolors body cells of one column.
///
/// Applies to every body cell of `column`, or only to those containing
/// `contains` when it is set. Header cells are never touched.
#[derive(Debug, Clone, PartialEq)]
pub struct CellRule {
    pub column: usize,
    pub contains: Option<&'static str>,
    pub color: RGBColor,
    pub bold: bool,
}

/// A table with a styled header row.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSpec {
    pub frame: Frame,
    /// Column widths in inches
    pub column_widths: Vec<f64>,
    pub header: Vec<&'static str>,
    pub header_size: f64,
    pub body_size: f64,
    pub rows: Vec<Vec<&'static str>>,
    pub rules: Vec<CellRule>,
}

/// One positioned element on a slide.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// A borderless text box
    TextBox {
        frame: Frame,
        word_wrap: bool,
        paragraphs: Vec<Para>,
    },
    /// A filled rectangle with an outline and text inside
    Panel {
        frame: Frame,
        fill: RGBColor,
        outline: RGBColor,
        /// Inner top margin in inches
        margin_top: f64,
        /// Inner left margin in inches
        margin_left: Option<f64>,
        paragraphs: Vec<Para>,
    },
    Table(TableSpec),
}

/// Outline width of panels, in points.
pub const PANEL_OUTLINE_PT: f64 = 3.0;

fn text_box(frame: Frame, paragraphs: Vec<Para>) -> Element {
    Element::TextBox {
        frame,
        word_wrap: false,
        paragraphs,
    }
}

fn wrapped_text_box(frame: Frame, paragraphs: Vec<Para>) -> Element {
    Element::TextBox {
        frame,
        word_wrap: true,
        paragraphs,
    }
}

/// A slide: what the console outline calls it, and what it shows.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideSpec {
    /// Label printed in the console outline
    pub outline: &'static str,
    /// Text of the title placeholder; slides without one use a blank layout
    pub title: Option<&'static str>,
    pub background: Option<RGBColor>,
    pub elements: Vec<Element>,
}

/// All slides in presentation order.
pub fn slides() -> Vec<SlideSpec> {
    vec![
        title_slide(),
        executive_summary(),
        real_world_test(),
        cost_breakdown(),
        agentic_search(),
        llms_make_vectors_redundant(),
        why_bm25_wins(),
        head_to_head(),
        when_vectors_help(),
        bottom_line(),
        recommendations(),
        questions(),
    ]
}

/// Body text boxes of the title-only slides.
const BODY: Frame = frame(1.0, 1.8, 8.0, 5.0);

fn title_slide() -> SlideSpec {
    SlideSpec {
        outline: "Title slide",
        title: None,
        background: Some(BRIGHT_BLUE),
        elements: vec![
            text_box(
                frame(0.5, 2.0, 9.0, 1.5),
                vec![
                    para("Vector Search: Unnecessary Cost")
                        .size(54.0)
                        .bold()
                        .color(WHITE)
                        .center(),
                ],
            ),
            text_box(
                frame(0.5, 3.7, 9.0, 1.0),
                vec![
                    para("Why BM25 + Agentic Search Wins for B2B Enterprise")
                        .size(32.0)
                        .color(CLOUDS)
                        .center(),
                ],
            ),
        ],
    }
}

fn executive_summary() -> SlideSpec {
    let mut paragraphs = vec![
        para("Recommendation: Use BM25-Only Search")
            .size(28.0)
            .bold()
            .color(GREEN)
            .space_after(12.0),
        para("Vector/semantic search provides ZERO measurable quality improvement over BM25 for technical documentation, while adding:")
            .size(18.0)
            .space_after(12.0),
    ];
    paragraphs.extend(
        [
            "✗ Higher costs (vs. free)",
            "✗ 50-130x worse latency",
            "✗ External API dependencies",
            "✗ Operational complexity",
        ]
        .map(|item| para(item).size(20.0).color(RED)),
    );

    SlideSpec {
        outline: "Executive Summary",
        title: Some("Executive Summary"),
        background: None,
        elements: vec![wrapped_text_box(frame(1.0, 1.8, 8.0, 4.5), paragraphs)],
    }
}

fn real_world_test() -> SlideSpec {
    let panel = |left: f64, fill: RGBColor, outline: RGBColor, paragraphs: Vec<Para>| {
        Element::Panel {
            frame: frame(left, 2.7, 3.8, 3.0),
            fill,
            outline,
            margin_top: 0.2,
            margin_left: Some(0.2),
            paragraphs,
        }
    };

    SlideSpec {
        outline: "Real-World Test Results",
        title: Some("Real-World Test: Identical Results"),
        background: None,
        elements: vec![
            text_box(
                frame(1.0, 1.5, 8.0, 1.0),
                vec![
                    para(r#"Query: "Describe differences between Windows and Linux TCP/IP stacks""#)
                        .size(18.0)
                        .italic(),
                ],
            ),
            panel(
                1.0,
                LIGHT_GREEN,
                GREEN,
                vec![
                    para("BM25-Only").size(24.0).bold(),
                    para("✓ Top result: Correct").size(18.0).color(GREEN),
                    para("Latency: <10ms").size(18.0),
                    para("Cost: $0").size(18.0),
                ],
            ),
            panel(
                5.2,
                LIGHT_RED,
                RED,
                vec![
                    para("Vector Hybrid").size(24.0).bold(),
                    para("✓ Same answer").size(18.0).color(GREEN),
                    para("Latency: 500-1,300ms").size(18.0).color(RED),
                    para("Cost: $2/year + API").size(18.0).color(RED),
                ],
            ),
        ],
    }
}

fn cost_breakdown() -> SlideSpec {
    SlideSpec {
        outline: "Cost Breakdown",
        title: Some("Cost Breakdown: What Vector Search Actually Costs"),
        background: None,
        elements: vec![Element::Table(TableSpec {
            frame: frame(1.5, 2.0, 7.0, 4.0),
            column_widths: vec![3.0, 2.0, 2.0],
            header: vec!["Cost Component", "BM25", "Vector Hybrid"],
            header_size: 16.0,
            body_size: 14.0,
            rows: vec![
                vec!["Initial Indexing", "$0", "$0.013"],
                vec!["Per Query Cost", "$0", "$0.000002-0.000006"],
                vec!["Annual Cost (1K queries/day)", "$0", "~$2/year"],
                vec!["Query Latency", "<10ms", "500-1,300ms"],
                vec!["Storage", "267KB", "13MB + 267KB"],
            ],
            rules: vec![
                CellRule {
                    column: 1,
                    contains: None,
                    color: GREEN,
                    bold: true,
                },
                CellRule {
                    column: 2,
                    contains: None,
                    color: RED,
                    bold: false,
                },
            ],
        })],
    }
}

fn agentic_search() -> SlideSpec {
    SlideSpec {
        outline: "What is Agentic Search",
        title: Some("Understanding Agentic Search"),
        background: None,
        elements: vec![wrapped_text_box(
            BODY,
            vec![
                para("Traditional Search: ")
                    .size(18.0)
                    .bold()
                    .then(run("End-user types query → System searches → Results").bold(false))
                    .space_after(12.0),
                para("Agentic Search: ")
                    .size(18.0)
                    .bold()
                    .then(run("User asks LLM → ").bold(false))
                    .then(
                        run("LLM formulates optimized search queries")
                            .color(BRIGHT_BLUE)
                            .bold(true),
                    )
                    .then(run(" → System searches → LLM synthesizes answer").bold(false))
                    .space_after(20.0),
                para("The Key Insight")
                    .size(24.0)
                    .bold()
                    .color(BRIGHT_BLUE)
                    .space_after(8.0),
                para("The LLM already performs semantic-to-keyword translation!")
                    .size(20.0)
                    .bold()
                    .space_after(12.0),
                para(r#"User: "How do Windows and Linux handle TCP/IP differently?""#)
                    .size(16.0)
                    .italic(),
                para(r#"LLM: "Windows Linux TCP socket differences Winsock closesocket fork CreateProcess""#)
                    .size(16.0)
                    .color(GREEN)
                    .bold()
                    .space_after(12.0),
                para("This is already the perfect BM25 query. Vector search adds nothing.")
                    .size(18.0)
                    .bold()
                    .color(RED),
            ],
        )],
    }
}

fn llms_make_vectors_redundant() -> SlideSpec {
    let mut paragraphs = vec![
        para("What LLMs Do Automatically:")
            .size(24.0)
            .bold()
            .space_after(12.0),
    ];
    paragraphs.extend(
        [
            "✓ Keyword extraction - Identify salient technical terms",
            "✓ Terminology precision - Use exact API names, not paraphrases",
            "✓ Query reformulation - Retry with different terms if needed",
            "✓ Multi-query strategies - Issue parallel queries from different angles",
        ]
        .map(|item| para(item).size(18.0).space_after(6.0)),
    );
    paragraphs.extend([
        para("").space_after(12.0),
        para("Vector search bridges semantic gaps:").size(18.0).bold(),
        para(r#""car repair" → "automotive maintenance""#)
            .size(16.0)
            .italic(),
        para("BUT: With LLM agents, the LLM already bridges these gaps before calling search!")
            .size(18.0)
            .bold()
            .color(RED),
    ]);

    SlideSpec {
        outline: "Why LLMs Make Vector Search Redundant",
        title: Some("Why LLMs Make Vector Search Redundant"),
        background: None,
        elements: vec![text_box(BODY, paragraphs)],
    }
}

fn why_bm25_wins() -> SlideSpec {
    let mut paragraphs = vec![
        para("1. Precise Terminology Matching")
            .size(22.0)
            .bold()
            .space_after(8.0),
        para("Technical docs use exact terms: Winsock, closesocket, WSAStartup, fork(), POSIX")
            .size(16.0)
            .space_after(6.0),
        para("These are not synonyms - they're literal API names")
            .size(16.0)
            .bold()
            .space_after(16.0),
        para("2. No Semantic Ambiguity")
            .size(22.0)
            .bold()
            .space_after(8.0),
    ];
    paragraphs.extend(
        [
            "• fork() doesn't mean 'split' - it's a system call",
            "• socket has one technical meaning",
            "• Precision matters more than semantic similarity",
        ]
        .map(|item| para(item).size(16.0)),
    );

    SlideSpec {
        outline: "Why BM25 Wins for Technical Docs",
        title: Some("Why BM25 Dominates for Technical Documentation"),
        background: None,
        elements: vec![text_box(BODY, paragraphs)],
    }
}

fn head_to_head() -> SlideSpec {
    SlideSpec {
        outline: "Head-to-Head Performance",
        title: Some("Head-to-Head Performance"),
        background: None,
        elements: vec![Element::Table(TableSpec {
            frame: frame(0.8, 1.8, 8.4, 4.5),
            column_widths: vec![2.2, 2.2, 2.2, 1.8],
            header: vec!["Metric", "BM25-Only", "Hybrid (BM25+Vector)", "Winner"],
            header_size: 14.0,
            body_size: 13.0,
            rows: vec![
                vec!["Top-1 Accuracy", "✓ Correct", "✓ Correct", "Tie"],
                vec!["Top-5 Relevance", "High", "High", "Tie"],
                vec!["Query Latency", "<10ms", "500-1300ms", "BM25"],
                vec!["Cost per Query", "$0", "~$0.000006", "BM25"],
                vec!["Complexity", "Low", "Medium", "BM25"],
                vec!["Failure Modes", "Disk I/O", "Disk I/O + API", "BM25"],
            ],
            rules: vec![CellRule {
                column: 3,
                contains: Some("BM25"),
                color: GREEN,
                bold: true,
            }],
        })],
    }
}

fn when_vectors_help() -> SlideSpec {
    let mut paragraphs = vec![
        para("Vector search provides benefits when:")
            .size(20.0)
            .space_after(12.0),
    ];
    paragraphs.extend(
        [
            "✓ Natural language from end-users (not LLM-mediated)",
            "✓ Inconsistent terminology across documents",
            "✓ Cross-lingual search requirements",
            "✓ Conceptual similarity over keyword matching",
            "✓ Large, diverse corpus (1000s+ documents with varied terminology)",
        ]
        .map(|item| para(item).size(16.0)),
    );
    paragraphs.extend([
        para("").space_after(20.0),
        para("None of these apply to agentic search over technical reference documentation.")
            .size(20.0)
            .bold()
            .color(RED),
    ]);

    SlideSpec {
        outline: "When You Actually Need Vectors",
        title: Some("When Vector Search Actually Adds Value"),
        background: None,
        elements: vec![text_box(BODY, paragraphs)],
    }
}

fn bottom_line() -> SlideSpec {
    SlideSpec {
        outline: "The Bottom Line",
        title: None,
        background: None,
        elements: vec![
            text_box(
                frame(1.0, 1.5, 8.0, 1.5),
                vec![para("The Bottom Line").size(44.0).bold().center()],
            ),
            text_box(
                frame(2.0, 2.8, 6.0, 1.0),
                vec![
                    para("∞ ROI")
                        .size(72.0)
                        .bold()
                        .color(BRIGHT_BLUE)
                        .center(),
                ],
            ),
            text_box(
                frame(1.0, 4.0, 8.0, 0.7),
                vec![
                    para("BM25 delivers equivalent quality at zero cost")
                        .size(24.0)
                        .center(),
                ],
            ),
            Element::Panel {
                frame: frame(1.5, 5.0, 7.0, 1.5),
                fill: LIGHT_GREEN,
                outline: GREEN,
                margin_top: 0.2,
                margin_left: None,
                paragraphs: vec![
                    para("For Agentic Search Over Technical Documentation:")
                        .size(18.0)
                        .bold()
                        .center(),
                    para("Vector search is an unnecessary cost that provides zero value.")
                        .size(22.0)
                        .bold()
                        .color(RED)
                        .center(),
                ],
            },
        ],
    }
}

fn recommendations() -> SlideSpec {
    let mut paragraphs = vec![
        para("Immediate Actions:")
            .size(24.0)
            .bold()
            .color(GREEN)
            .space_after(12.0),
        para("1. Deploy BM25-only search for the MCP server").size(18.0),
        para("2. Monitor query performance metrics").size(18.0),
    ];
    paragraphs.extend(
        [
            "• Query success rate",
            "• Result relevance (spot-checks)",
            "• Failed queries",
        ]
        .map(|item| para(item).size(16.0).level(1)),
    );
    paragraphs.extend([
        para("").space_after(12.0),
        para("Reconsider If/When:")
            .size(24.0)
            .bold()
            .space_after(12.0),
    ]);
    paragraphs.extend(
        [
            "• >5% query failure rate on relevant content",
            "• User queries use synonyms not in documentation",
            "• Corpus grows to 1000+ documents with varied terminology",
        ]
        .map(|item| para(item).size(16.0)),
    );

    SlideSpec {
        outline: "Recommendations",
        title: Some("Recommendations"),
        background: None,
        elements: vec![text_box(BODY, paragraphs)],
    }
}

fn questions() -> SlideSpec {
    SlideSpec {
        outline: "Questions/Closing",
        title: None,
        background: Some(DARK_BLUE),
        elements: vec![
            text_box(
                frame(1.0, 2.0, 8.0, 1.0),
                vec![para("Questions?").size(60.0).bold().color(WHITE).center()],
            ),
            text_box(
                frame(1.0, 4.0, 8.0, 2.0),
                vec![
                    para("Key Takeaway:")
                        .size(20.0)
                        .color(CLOUDS)
                        .center()
                        .space_after(12.0),
                    para("BM25 + LLM Agents = Free, Fast, and Effective")
                        .size(26.0)
                        .color(GREEN)
                        .center()
                        .space_after(8.0),
                    para("Vector Search = Expensive, Slow, and Redundant")
                        .size(26.0)
                        .color(RED)
                        .center(),
                ],
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twelve_slides_in_order() {
        let outline: Vec<_> = slides().iter().map(|s| s.outline).collect();
        assert_eq!(
            outline,
            vec![
                "Title slide",
                "Executive Summary",
                "Real-World Test Results",
                "Cost Breakdown",
                "What is Agentic Search",
                "Why LLMs Make Vector Search Redundant",
                "Why BM25 Wins for Technical Docs",
                "Head-to-Head Performance",
                "When You Actually Need Vectors",
                "The Bottom Line",
                "Recommendations",
                "Questions/Closing",
            ]
        );
    }

    #[test]
    fn test_blank_slides_have_no_title() {
        let untitled: Vec<usize> = slides()
            .iter()
            .enumerate()
            .filter(|(_, s)| s.title.is_none())
            .map(|(i, _)| i + 1)
            .collect();
        assert_eq!(untitled, vec![1, 10, 12]);
    }

    #[test]
    fn test_tables_are_rectangular() {
        for spec in slides() {
            for element in &spec.elements {
                if let Element::Table(table) = element {
                    let cols = table.header.len();
                    assert_eq!(table.column_widths.len(), cols);
                    assert!(table.rows.iter().all(|row| row.len() == cols));
                    let total: f64 = table.column_widths.iter().sum();
                    assert!((total - table.frame.width).abs() < 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_mixed_run_paragraph() {
        let spec = agentic_search();
        let Element::TextBox { paragraphs, .. } = &spec.elements[0] else {
            panic!("expected a text box");
        };
        assert_eq!(
            paragraphs[1].text(),
            "Agentic Search: User asks LLM → LLM formulates optimized search queries → System searches → LLM synthesizes answer"
        );
        assert_eq!(paragraphs[1].runs.len(), 4);
    }
}
