//! Step navigator – a linear state machine over the wizard's fixed steps.
//!
//! Six data-entry sections followed by the template-selection step. Movement
//! is clamped at both ends; any in-range step can be jumped to directly (no
//! completion gating). Preview is an orthogonal display state, not a step.

use crate::model::Section;

/// One entry in the fixed ordered step sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Identity,
    Education,
    Experience,
    Skills,
    Projects,
    References,
    Template,
}

pub const STEP_COUNT: usize = Step::ALL.len();

impl Step {
    pub const ALL: [Step; 7] = [
        Step::Identity,
        Step::Education,
        Step::Experience,
        Step::Skills,
        Step::Projects,
        Step::References,
        Step::Template,
    ];

    /// Display title for step listings and headers.
    pub fn title(&self) -> &'static str {
        match self {
            Step::Identity => "Personal Info",
            Step::Education => "Education",
            Step::Experience => "Experience",
            Step::Skills => "Skills",
            Step::Projects => "Projects",
            Step::References => "References",
            Step::Template => "Template",
        }
    }

    /// The document section a step edits; `None` for the template step.
    pub fn section(&self) -> Option<Section> {
        match self {
            Step::Identity => Some(Section::Identity),
            Step::Education => Some(Section::Education),
            Step::Experience => Some(Section::Experience),
            Step::Skills => Some(Section::Skills),
            Step::Projects => Some(Section::Projects),
            Step::References => Some(Section::References),
            Step::Template => None,
        }
    }
}

/// Navigation state: the active step index plus the preview flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wizard {
    current: usize,
    preview: bool,
}

impl Wizard {
    /// Start at the first step with preview off.
    pub fn new() -> Self {
        Self {
            current: 0,
            preview: false,
        }
    }

    pub fn current_step(&self) -> usize {
        self.current
    }

    pub fn step(&self) -> Step {
        Step::ALL[self.current]
    }

    /// Advance one step; clamped at the last step (no wraparound).
    pub fn next(&mut self) {
        if self.current < STEP_COUNT - 1 {
            self.current += 1;
        }
    }

    /// Go back one step; clamped at the first step.
    pub fn previous(&mut self) {
        if self.current > 0 {
            self.current -= 1;
        }
    }

    /// Jump to any in-range step unconditionally – no completion gating.
    /// Out-of-range indices are ignored.
    pub fn jump_to(&mut self, index: usize) {
        if index < STEP_COUNT {
            self.current = index;
        }
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current == STEP_COUNT - 1
    }

    /// Suspend the step view and show the fully rendered document.
    pub fn enter_preview(&mut self) {
        self.preview = true;
    }

    /// Return to the step that was active before preview.
    pub fn leave_preview(&mut self) {
        self.preview = false;
    }

    pub fn preview_mode(&self) -> bool {
        self.preview
    }

    /// Completion percentage for a progress bar: `(step + 1) / N × 100`.
    pub fn progress(&self) -> f32 {
        (self.current + 1) as f32 / STEP_COUNT as f32 * 100.0
    }
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}
