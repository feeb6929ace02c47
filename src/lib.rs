//! # cv-forge – Multi-step CV builder with PDF export
//!
//! This crate provides the full model-to-PDF pipeline behind a step-by-step
//! CV builder. The pipeline stages are:
//!
//! 1. **Model** – the structured CV document and its sections ([`model`])
//! 2. **Edit** – typed editor actions applied per section ([`editor`])
//! 3. **Render** – project document + template into a display tree ([`render`])
//! 4. **Layout** – compute flexbox geometry with Taffy ([`layout`])
//! 5. **Paginate** – slice the surface into A4 bands ([`pagination`])
//! 6. **Export** – emit PDF bytes via printpdf ([`pdf`], [`export`])
//!
//! The [`session`] module ties the pieces together for interactive use:
//! wizard navigation, template selection, change subscriptions and one-call
//! export.

pub mod editor;
pub mod export;
pub mod fonts;
pub mod layout;
pub mod model;
pub mod pagination;
pub mod pdf;
pub mod render;
pub mod samples;
pub mod session;
pub mod surface;
pub mod template;
pub mod view;
pub mod wizard;

// Re-exports for convenience
pub use editor::EditorAction;
pub use export::{export_document, ExportConfig, ExportError, ExportedFile};
pub use model::ResumeDocument;
pub use render::render;
pub use session::BuilderSession;
pub use template::TemplateVariant;
pub use wizard::{Step, Wizard};
