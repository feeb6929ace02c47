//! Builder session – owns the document, template choice, and wizard position
//! for one editing sitting.
//!
//! Every document mutation funnels through [`BuilderSession::dispatch`], which
//! applies the action and notifies subscribers. A subscriber may watch a
//! single section or the whole document; only subscribers matching the
//! section an action touched are called.

use crate::editor::{self, EditorAction};
use crate::export::{self, ExportConfig, ExportError, ExportedFile};
use crate::model::{ResumeDocument, Section};
use crate::render;
use crate::template::TemplateVariant;
use crate::view::ViewNode;
use crate::wizard::Wizard;

pub type SubscriberId = usize;

type Callback = Box<dyn FnMut(&ResumeDocument)>;

struct Subscriber {
    id: SubscriberId,
    /// `None` watches every section.
    filter: Option<Section>,
    callback: Callback,
}

/// Message shown to the user when export fails. Export problems are reported,
/// never raised out of the session.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportNotice {
    pub message: String,
}

const EXPORT_FAILED_MESSAGE: &str = "There was an error generating the PDF. Please try again.";

/// Placeholder strings used by the preview pane while fields are empty.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    pub display_name: String,
    pub display_email: String,
    pub display_phone: String,
    pub education_entries: usize,
    pub experience_entries: usize,
    pub project_entries: usize,
}

pub struct BuilderSession {
    document: ResumeDocument,
    template: TemplateVariant,
    wizard: Wizard,
    subscribers: Vec<Subscriber>,
    next_id: SubscriberId,
}

impl Default for BuilderSession {
    fn default() -> Self {
        Self::new()
    }
}

impl BuilderSession {
    pub fn new() -> Self {
        BuilderSession {
            document: ResumeDocument::new(),
            template: TemplateVariant::default(),
            wizard: Wizard::new(),
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// Start from an existing document, e.g. one restored from JSON.
    pub fn with_document(document: ResumeDocument) -> Self {
        BuilderSession {
            document,
            ..Self::new()
        }
    }

    pub fn document(&self) -> &ResumeDocument {
        &self.document
    }

    pub fn template(&self) -> TemplateVariant {
        self.template
    }

    pub fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    pub fn wizard_mut(&mut self) -> &mut Wizard {
        &mut self.wizard
    }

    /// Apply one editor action and notify subscribers watching the touched
    /// section. Out-of-range actions are silent no-ops, but still notify,
    /// matching the whole-section replacement model.
    pub fn dispatch(&mut self, action: EditorAction) {
        let changed = editor::apply(&mut self.document, action);
        self.notify(changed);
    }

    /// Switch the template variant. Decoration only; no document change, no
    /// subscriber notification.
    pub fn select_template(&mut self, template: TemplateVariant) {
        self.template = template;
    }

    /// Register a callback for changes to `filter`, or every change when
    /// `filter` is `None`. Returns a handle for [`Self::unsubscribe`].
    pub fn subscribe(
        &mut self,
        filter: Option<Section>,
        callback: impl FnMut(&ResumeDocument) + 'static,
    ) -> SubscriberId {
        let id = self.next_id;
        self.next_id += 1;
        self.subscribers.push(Subscriber {
            id,
            filter,
            callback: Box::new(callback),
        });
        id
    }

    /// Remove a subscriber. Unknown ids are ignored.
    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.subscribers.retain(|s| s.id != id);
    }

    fn notify(&mut self, changed: Section) {
        for sub in &mut self.subscribers {
            if sub.filter.is_none() || sub.filter == Some(changed) {
                (sub.callback)(&self.document);
            }
        }
    }

    /// Display tree for the live preview, using the active template.
    pub fn render_preview(&self) -> ViewNode {
        render::render(&self.document, self.template)
    }

    /// Compact preview-header facts with placeholders for unfilled fields.
    pub fn summary(&self) -> SessionSummary {
        let identity = &self.document.identity;
        let placeholder = |value: &str, fallback: &str| {
            if value.is_empty() {
                fallback.to_string()
            } else {
                value.to_string()
            }
        };
        SessionSummary {
            display_name: placeholder(&identity.full_name, render::NAME_PLACEHOLDER),
            display_email: placeholder(&identity.email, "your.email@example.com"),
            display_phone: placeholder(&identity.phone, "+255 XXX XXX XXX"),
            education_entries: self.document.education.len(),
            experience_entries: self.document.experience.len(),
            project_entries: self.document.projects.len(),
        }
    }

    /// Export with the session's document and template.
    pub fn export(&self, config: &ExportConfig) -> Result<ExportedFile, ExportError> {
        export::export_document(&self.document, self.template, config)
    }

    /// Export, converting any failure into the user-facing notice. The
    /// session stays fully usable after a failed export.
    pub fn export_or_notice(&self, config: &ExportConfig) -> Result<ExportedFile, ExportNotice> {
        self.export(config).map_err(|e| {
            log::warn!("export failed: {e}");
            ExportNotice {
                message: EXPORT_FAILED_MESSAGE.to_string(),
            }
        })
    }
}
