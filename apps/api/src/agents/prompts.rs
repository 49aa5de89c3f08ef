// LLM prompt templates for the hiring agents.
// Placeholders in `{braces}` are filled before sending. Templates with more than one
// placeholder go through `fill_template` so substituted text is never rescanned.

use crate::llm_client::prompts::JSON_ONLY_SYSTEM;

/// System prompt for job description analysis.
pub const JOB_ANALYSIS_SYSTEM: &str = JSON_ONLY_SYSTEM;

/// Replace `{job_text}` before sending.
pub const JOB_ANALYSIS_PROMPT_TEMPLATE: &str = r#"You analyze job descriptions for recruiters.

From the job description below extract:
1. The role / position title
2. Up to 10 hard skills
3. Tools, frameworks and technologies
4. Minimum years of experience (estimate from seniority if not stated)
5. Soft skills (teamwork, communication, leadership, ...)

Return a JSON object with this EXACT schema:
{
  "role": "...",
  "skills": ["skill1", "skill2"],
  "tools": ["tool1", "tool2"],
  "experience_years": 0,
  "soft_skills": ["soft1", "soft2"]
}

JOB DESCRIPTION:
{job_text}"#;

pub const RESUME_PARSE_SYSTEM: &str = JSON_ONLY_SYSTEM;

/// Replace `{resume_text}` before sending.
pub const RESUME_PARSE_PROMPT_TEMPLATE: &str = r#"You parse resumes into structured records.

Extract from the resume text below:
1. Full name
2. Email
3. Phone number
4. Technical skills only
5. Education entries
6. Work experience (company, role, duration)
7. Projects (title and a one-line description)

Use an empty string for contact fields that are not present.

Return a JSON object with this EXACT schema:
{
  "name": "...",
  "email": "...",
  "phone": "...",
  "skills": ["..."],
  "education": ["..."],
  "experience": [
    {"company": "...", "role": "...", "duration": "..."}
  ],
  "projects": [
    {"title": "...", "description": "..."}
  ]
}

RESUME TEXT:
{resume_text}"#;

pub const RANKING_SYSTEM: &str = "You are a hiring evaluator. \
    You MUST respond with a single valid JSON object only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Replace `{job_json}` and `{candidate_json}` before sending.
pub const RANKING_PROMPT_TEMPLATE: &str = r#"Evaluate the candidate against the job description.

Instructions:
1. Assign a suitability score from 0 to 100, where 100 is a perfect match.
2. Explain the score in 3-4 sentences covering the key matching and missing points.
3. Weigh skills, relevant projects, experience and education.

JOB DESCRIPTION:
{job_json}

CANDIDATE RESUME:
{candidate_json}

Output format (STRICTLY):
{
  "score": 0,
  "summary": "..."
}"#;

pub const EMAIL_SYSTEM: &str = JSON_ONLY_SYSTEM;

/// Replace `{candidate_json}`, `{role}`, `{score}` and `{decision}` before sending.
pub const EMAIL_PROMPT_TEMPLATE: &str = r#"You write professional recruiting emails.

Write an email to the candidate below.

CANDIDATE:
{candidate_json}

JOB ROLE: {role}
SCORE: {score}
DECISION: {decision}

Guidelines:
- If the decision is "invite", write a polite interview invitation.
- If the decision is "rejection", write a polite rejection.
- Keep the tone formal and concise.

Return a JSON object with this EXACT schema:
{
  "subject": "...",
  "body": "..."
}"#;


/// Fills `{key}` placeholders in a single pass over `template`.
///
/// Substituted values are copied verbatim, so a value that itself contains
/// `{key}` text (resume content, job titles) reaches the model unchanged.
/// Braces that do not name a known key are kept as written.
pub fn fill_template(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after_brace = &rest[open + 1..];
        let matched = vars.iter().find_map(|(key, value)| {
            after_brace
                .strip_prefix(key)
                .and_then(|tail| tail.strip_prefix('}'))
                .map(|tail| (*value, tail))
        });
        match matched {
            Some((value, tail)) => {
                out.push_str(value);
                rest = tail;
            }
            None => {
                out.push('{');
                rest = after_brace;
            }
        }
    }
    out.push_str(rest);
    out
}
