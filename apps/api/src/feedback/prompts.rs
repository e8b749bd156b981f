// All LLM prompt constants for the Feedback module.

/// System prompt for feedback generation; fixes the rubric and the JSON shape.
pub const FEEDBACK_SYSTEM: &str = "You are an expert interview evaluator. \
    Provide detailed, constructive feedback in the specified JSON format. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Feedback rubric prompt template.
/// Replace: {role}, {level}, {techstack}, {conversation}
pub const FEEDBACK_PROMPT_TEMPLATE: &str = r#"Based on the following interview conversation, provide detailed feedback on the candidate's performance.

Interview Details:
- Role: {role}
- Level: {level}
- Tech Stack: {techstack}

Interview Conversation:
{conversation}

Please evaluate the candidate in the following 5 areas and provide a score out of 10 and detailed comments for each:

1. Communication Skills - How clearly and effectively did they communicate?
2. Technical Knowledge - How well did they demonstrate relevant technical expertise?
3. Problem Solving - How effectively did they approach and solve problems?
4. Cultural Fit - How well would they fit with typical team dynamics and company culture?
5. Confidence and Clarity - How confident and clear were they in their responses?

Return your evaluation in the following JSON format:
{
  "communication_skills": {
    "score": <number between 0-10>,
    "comments": "<detailed feedback on communication skills>",
    "areas_for_improvement": ["<specific improvement area>", ...]
  },
  "technical_knowledge": {
    "score": <number between 0-10>,
    "comments": "<detailed feedback on technical knowledge>",
    "areas_for_improvement": ["<specific improvement area>", ...]
  },
  "problem_solving": {
    "score": <number between 0-10>,
    "comments": "<detailed feedback on problem solving abilities>",
    "areas_for_improvement": ["<specific improvement area>", ...]
  },
  "cultural_fit": {
    "score": <number between 0-10>,
    "comments": "<detailed feedback on cultural fit>",
    "areas_for_improvement": ["<specific improvement area>", ...]
  },
  "confidence_and_clarity": {
    "score": <number between 0-10>,
    "comments": "<detailed feedback on confidence and clarity>",
    "areas_for_improvement": ["<specific improvement area>", ...]
  }
}"#;
