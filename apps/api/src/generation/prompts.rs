// All LLM prompt constants for the Generation module.

/// System prompt for structured question generation; enforces JSON-only output.
pub const STRUCTURED_SYSTEM: &str = "You are an expert technical interviewer. \
    Your responses must be in valid JSON format. \
    Return a JSON object with a single key \"questions\" holding an array of question strings. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Structured generation prompt template.
/// Replace: {amount}, {type}, {role}, {level}, {techstack}, {additional_info}
pub const STRUCTURED_PROMPT_TEMPLATE: &str = r#"Generate exactly {amount} interview questions for a candidate interviewing for the role of {role} at {level} level.

The interview type is "{type}":
- "technical": focus on role-specific knowledge, problem-solving, and scenario questions
- "behavioral": focus on experience, teamwork, motivation, and situational questions
- "mixed": blend technical and behavioral questions roughly evenly

Theme the questions around these technologies: {techstack}.

Additional context from the candidate (may be empty): {additional_info}

Rules for questions:
1. Questions should match the formality and depth expected for the role and level
2. Questions should incorporate relevant terminology from the listed technologies
3. Don't use special characters like '/' or '*' as they may break the voice assistant
4. Questions should be clear, conversational, and engaging

Return the response in the following JSON format:
{
  "questions": [
    "<question 1>",
    "<question 2>",
    ...
  ]
}"#;

/// System prompt for free-text generation; the model infers all interview
/// fields from the description.
pub const FREEFORM_SYSTEM: &str = "You are an expert interviewer with deep knowledge \
    across various fields (academia, industry, professional organizations). \
    Your responses must be in valid JSON format. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Free-text generation prompt template. Replace `{info}` before sending.
pub const FREEFORM_PROMPT_TEMPLATE: &str = r#"First, analyze the provided information and extract the following key details:

- Type of interview (e.g., "Technical", "Behavioral", "Mixed") with default being "Technical"
- Role being interviewed for (e.g., "Frontend Engineer", "Medical Resident", "Marketing Coordinator", "Club President", "Research Assistant")
- Level of position:
  * For professional roles: use "Entry", "Junior", "Mid", "Senior", "Lead"
  * For academic roles: use "Undergraduate", "Graduate", "Postgraduate"
  * For club/volunteer positions or roles without hierarchy: use null
- Tags (single-word keywords with first letter capitalized, like "React" for Frontend, "Marketing" for coordinator, "Research" for academic)
- Amount of questions requested (default to 5 if not specified)

Then, based on these extracted details:
1. Generate a description of the interview that:
   - Explains the purpose and scope of the interview
   - Highlights the key skills and qualities being assessed
   - Describes the interview format and what to expect
   - IMPORTANT: Does NOT reveal or hint at any specific questions
   - Maintains a professional yet encouraging tone
   - Is between 4-5 sentences long
2. Generate appropriate interview questions

Return the response in the following JSON format:
{
  "type": "<Properly Capitalized Type>",
  "role": "<Properly Capitalized Role>",
  "level": "<Properly Capitalized Level or null>",
  "tags": ["<Capitalized_Tag1>", "<Capitalized_Tag2>", ...],
  "amount": <number of questions>,
  "description": "<A professional description of the interview>",
  "questions": [
    "<question 1>",
    "<question 2>",
    ...
  ]
}

Formatting rules:
1. There are only 3 types of interviews: "Technical", "Behavioral" or "Mixed".
2. Role should be properly capitalized (e.g., "Frontend Engineer", "Marketing Coordinator"). If the company is mentioned, then add the company's name in front of the role (eg: Amazon Frontend Engineer).
3. Level should be properly capitalized single words (e.g., "Entry", "Junior", "Mid", "Senior", "Lead") or null for non-hierarchical positions.
4. Tags must be single words with first letter capitalized (e.g., "React", "Marketing", "Biology").
5. Tags should be simple and fundamental to the role (prefer "React" over "ReactComponents").

Important rules for questions:
1. Questions should match the formality and depth expected for the role
2. Questions should incorporate relevant terminology from the identified tags
3. Don't use special characters like '/' or '*' as they may break the voice assistant
4. Questions should be clear, conversational, and engaging
5. Include a mix of:
   - Role-specific knowledge questions
   - Experience-based questions
   - Scenario-based questions
   - Problem-solving questions relevant to the field
6. For academic or professional positions, focus on both theoretical knowledge and practical application
7. For club or organization interviews, focus on motivation, time management, and project ideas

Here is the information to analyze:
{info}"#;
