use crate::llm_client::prompts::GROUNDING_INSTRUCTION;

/// Builds the resume-vs-JD analysis prompt.
pub fn build_analysis_prompt(resume_text: &str, job_description: &str) -> String {
    format!(
        r#"Compare the candidate's resume with the job description below.

Return a JSON object with exactly these fields:
- "match_score": integer 0-100, how well the resume fits the role
- "summary": two sentences describing the overall fit
- "strengths": array of strings, requirements the resume clearly covers
- "gaps": array of strings, requirements the resume does not cover
- "suggested_improvements": array of strings, concrete resume edits
- "keywords": array of strings, important JD terms missing from the resume

{GROUNDING_INSTRUCTION}

<resume>
{resume_text}
</resume>

<job_description>
{job_description}
</job_description>"#
    )
}
