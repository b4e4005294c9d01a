//! Rendering for human surfaces (Markdown, terminal lines).
//!
//! Renderers take a [`RenderableReport`], never the wire report, so output format
//! changes do not ripple into the report schema.

#![forbid(unsafe_code)]

mod markdown;
mod model;
mod text;

pub use markdown::render_markdown;
pub use model::{
    RenderableContext, RenderableIssue, RenderablePolicyMatch, RenderableRecommendation,
    RenderableReport, RenderableSection, RenderableStatus, RenderableTierCount,
};
pub use text::render_text_lines;
