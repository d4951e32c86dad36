//! Narrative enrichment boundary.
//!
//! A [`NarrativeProvider`] turns a finished canvas into free-text narrative
//! fields (strategic focus, final notes, input/impact/capability lists).
//! Providers are infallible by contract: a failed call, malformed response or
//! missing credential becomes clearly-marked sentinel text, never an error —
//! the numeric result the pipeline already computed must stay displayable.
//!
//! The crate ships only the seam and the unconfigured fallback; a live
//! generative-text client implements the trait downstream.

use crate::canvas::FinalCanvas;

/// Free-text values produced by an enrichment provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanvasNarrative {
    pub strategic_focus: String,
    pub risks_and_mitigations: String,
    pub data_and_infra_requirements: String,
    pub organizational_considerations: String,
    pub resources: String,
    pub personnel: String,
    pub external_support: String,
    pub hard_benefits: String,
    pub soft_benefits: String,
    pub skills: String,
    pub technology: String,
}

impl CanvasNarrative {
    /// A narrative whose strategic focus carries the given reason and whose
    /// remaining fields are "N/A" sentinels. Used when a provider cannot run
    /// (missing credentials) so the canvas stays renderable.
    pub fn unavailable(reason: &str) -> Self {
        let na = || "N/A".to_string();
        CanvasNarrative {
            strategic_focus: reason.to_string(),
            risks_and_mitigations: na(),
            data_and_infra_requirements: na(),
            organizational_considerations: na(),
            resources: na(),
            personnel: na(),
            external_support: na(),
            hard_benefits: na(),
            soft_benefits: na(),
            skills: na(),
            technology: na(),
        }
    }

    /// Sentinels for a provider that was configured but failed mid-call
    /// (network error, malformed response).
    pub fn generation_failed() -> Self {
        CanvasNarrative {
            strategic_focus: "Error generating focus.".to_string(),
            risks_and_mitigations: "Error generating risks.".to_string(),
            data_and_infra_requirements: "Error generating requirements.".to_string(),
            organizational_considerations: "Error generating considerations.".to_string(),
            resources: "Error".to_string(),
            personnel: "Error".to_string(),
            external_support: "Error".to_string(),
            hard_benefits: "Error".to_string(),
            soft_benefits: "Error".to_string(),
            skills: "Error".to_string(),
            technology: "Error".to_string(),
        }
    }
}

/// Opaque narrative-text collaborator invoked after the core pipeline.
pub trait NarrativeProvider {
    /// Produce narrative text for the given canvas. Must not fail: error
    /// conditions are reported through sentinel strings in the returned
    /// narrative.
    fn generate(&self, canvas: &FinalCanvas) -> CanvasNarrative;
}

/// Default provider used when no generative-text service is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredProvider;

impl NarrativeProvider for UnconfiguredProvider {
    fn generate(&self, _canvas: &FinalCanvas) -> CanvasNarrative {
        CanvasNarrative::unavailable("Narrative generation unavailable: no provider configured.")
    }
}

/// Write the narrative fields onto the canvas, replacing the pending
/// placeholders. Numeric sections are untouched.
pub fn apply_narrative(canvas: &mut FinalCanvas, narrative: CanvasNarrative) {
    canvas.business_context.strategic_focus = narrative.strategic_focus;
    canvas.final_notes.risks_and_mitigations = narrative.risks_and_mitigations;
    canvas.final_notes.data_and_infra_requirements = narrative.data_and_infra_requirements;
    canvas.final_notes.organizational_considerations = narrative.organizational_considerations;
    canvas.inputs.resources = narrative.resources;
    canvas.inputs.personnel = narrative.personnel;
    canvas.inputs.external_support = narrative.external_support;
    canvas.impacts.hard_benefits = narrative.hard_benefits;
    canvas.impacts.soft_benefits = narrative.soft_benefits;
    canvas.capabilities.skills = narrative.skills;
    canvas.capabilities.technology = narrative.technology;
}
