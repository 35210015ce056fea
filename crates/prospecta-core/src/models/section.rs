//! The fixed outline of a market research report.

/// Title of every generated report.
pub const REPORT_TITLE: &str = "Market Research Report";

/// Body substituted for a section whose generation failed.
pub const SECTION_ERROR_SENTINEL: &str = "Error generating this section.";

/// One titled subdivision of the report and the instruction sent to the
/// model to produce it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub instruction: &'static str,
}

/// The eight sections, in report order.
pub const REPORT_SECTIONS: [Section; 8] = [
    Section {
        title: "Executive Summary",
        instruction: "Write a concise executive summary of this market research.",
    },
    Section {
        title: "Industry Overview",
        instruction: "Describe the industry background and macro trends relevant to this business.",
    },
    Section {
        title: "Target Market Analysis",
        instruction: "Analyze the demographics, behaviors, and needs of the target audience. \
                      Include a table of segments if available.",
    },
    Section {
        title: "Competitive Landscape",
        instruction: "List the main competitors and compare their market positioning using a table.",
    },
    Section {
        title: "Trends & Opportunities",
        instruction: "Describe current trends and opportunities in the market.",
    },
    Section {
        title: "Market Entry Strategy",
        instruction: "What go-to-market strategy is ideal based on this context?",
    },
    Section {
        title: "Growth Forecast",
        instruction: "Estimate a 3-year financial and customer growth outlook using a chart-style table.",
    },
    Section {
        title: "Final Observations",
        instruction: "Summarize the feasibility and recommend next steps.",
    },
];
