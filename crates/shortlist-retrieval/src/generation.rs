//! Answer-context assembly and the generation fallback.
//!
//! Generation itself is an external collaborator behind `IAnswerGenerator`;
//! this module owns the context block format and the rule that a generator
//! failure degrades the narrative, never the shortlist.

use tracing::warn;

use shortlist_core::constants::FALLBACK_ANSWER;
use shortlist_core::models::ScoredCandidate;
use shortlist_core::traits::IAnswerGenerator;

/// Assemble the prose-generation context from the ranked shortlist.
pub fn build_context(query: &str, candidates: &[ScoredCandidate]) -> String {
    let mut lines = vec![format!("User request:\n{query}\n"), "Candidates:".to_string()];
    for candidate in candidates {
        lines.push(format!(
            "Name: {}\nExperience: {} years\nSkills: {}\nProjects: {}\nAvailability: {}\n---",
            candidate.name,
            candidate.experience_years,
            candidate.skills.join(", "),
            candidate.projects.join(", "),
            candidate.availability,
        ));
    }
    lines.join("\n")
}

/// Run the generator, absorbing any failure into the fixed fallback reply.
pub fn answer_or_fallback(generator: &dyn IAnswerGenerator, context: &str) -> String {
    match generator.generate(context) {
        Ok(answer) => answer,
        Err(error) => {
            warn!(
                generator = generator.name(),
                %error,
                "generation failed, using fallback reply"
            );
            FALLBACK_ANSWER.to_string()
        }
    }
}
