//! The conversation workflow graph handed to the external voice runtime.
//!
//! The graph is static configuration: a linear greeting → question-asking →
//! conclusion → hang-up sequence. The runtime interprets it; the only
//! runtime customization on our side is substituting `{{ name }}`,
//! `{{ userid }}` and `{{ questions }}` into node prompts at session start.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::generation::question_gen::sanitize_for_voice;

pub const NAME_PLACEHOLDER: &str = "{{ name }}";
pub const USERID_PLACEHOLDER: &str = "{{ userid }}";
pub const QUESTIONS_PLACEHOLDER: &str = "{{ questions }}";

/// Model settings for a conversation node, in the runtime's wire shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    pub model: String,
    pub provider: String,
    #[serde(rename = "maxTokens")]
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagePlan {
    #[serde(rename = "firstMessage")]
    pub first_message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSpec {
    #[serde(rename = "type")]
    pub tool_type: String,
}

/// A node of the conversation graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    Start {
        name: String,
    },
    Say {
        name: String,
        exact: String,
    },
    Conversation {
        name: String,
        prompt: String,
        model: ModelConfig,
        #[serde(rename = "messagePlan")]
        message_plan: MessagePlan,
    },
    Tool {
        name: String,
        tool: ToolSpec,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeCondition {
    #[serde(rename = "type")]
    pub condition_type: String,
    pub prompt: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<EdgeCondition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workflow {
    pub name: String,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    #[serde(rename = "globalPrompt")]
    pub global_prompt: String,
}

fn conversation_model(temperature: f32) -> ModelConfig {
    ModelConfig {
        model: "gpt-4".to_string(),
        provider: "openai".to_string(),
        max_tokens: 1000,
        temperature,
    }
}

/// The predeclared interview graph, placeholders intact.
pub fn interview_workflow() -> Workflow {
    Workflow {
        name: format!("interview-prep-{USERID_PLACEHOLDER}"),
        nodes: vec![
            Node::Start {
                name: "start_node".to_string(),
            },
            Node::Say {
                name: "greeting".to_string(),
                exact: format!(
                    "Hello {NAME_PLACEHOLDER}! Welcome to your interview session. \
                     I'll be conducting this interview today. Please take your time with \
                     each question and answer as thoroughly as you can. Are you ready to begin?"
                ),
            },
            Node::Conversation {
                name: "interview_conversation".to_string(),
                prompt: format!(
                    "You are a professional interviewer conducting an interview. \
                     You MUST ask the following specific questions and ONLY these questions:\n\n\
                     {QUESTIONS_PLACEHOLDER}\n\n\
                     IMPORTANT RULES:\n\
                     1. Ask ONLY the questions listed above - do not make up or add any other questions\n\
                     2. Ask the questions in the exact order they are listed\n\
                     3. Ask one question at a time and wait for a complete answer before moving to the next\n\
                     4. You may ask brief clarifying follow-up questions to get more detail on their answer\n\
                     5. Do not ask general interview questions like 'tell me about yourself' unless it's specifically in the list above\n\
                     6. Stick strictly to the provided questions\n\
                     7. Once all questions are answered, move to conclude the interview\n\n\
                     Start with the first question from the list above."
                ),
                model: conversation_model(0.1),
                message_plan: MessagePlan {
                    first_message: "Let me ask you the first question from your interview."
                        .to_string(),
                },
            },
            Node::Conversation {
                name: "interview_conclusion".to_string(),
                prompt: "Conclude the interview professionally. Thank the candidate for \
                         their time, let them know they did well, and inform them that they \
                         will receive feedback shortly. Be encouraging and positive."
                    .to_string(),
                model: conversation_model(0.7),
                message_plan: MessagePlan {
                    first_message: String::new(),
                },
            },
            Node::Tool {
                name: "hangup".to_string(),
                tool: ToolSpec {
                    tool_type: "endCall".to_string(),
                },
            },
        ],
        edges: vec![
            Edge {
                from: "start_node".to_string(),
                to: "greeting".to_string(),
                condition: None,
            },
            Edge {
                from: "greeting".to_string(),
                to: "interview_conversation".to_string(),
                condition: Some(EdgeCondition {
                    condition_type: "ai".to_string(),
                    prompt: "user is ready to begin the interview".to_string(),
                }),
            },
            Edge {
                from: "interview_conversation".to_string(),
                to: "interview_conclusion".to_string(),
                condition: Some(EdgeCondition {
                    condition_type: "ai".to_string(),
                    prompt: "all interview questions have been asked and answered".to_string(),
                }),
            },
            Edge {
                from: "interview_conclusion".to_string(),
                to: "hangup".to_string(),
                condition: Some(EdgeCondition {
                    condition_type: "ai".to_string(),
                    prompt: "interview has been concluded".to_string(),
                }),
            },
        ],
        global_prompt: "You are a professional interviewer conducting a job interview. \
            Your role is to ask interview questions in a natural, conversational manner and \
            evaluate the candidate's responses. Maintain a professional but friendly tone \
            throughout the interview. Ask questions one at a time, allow the candidate to \
            fully respond, and ask appropriate follow-up questions when needed. Remember that \
            this is a voice conversation - do not use any special characters or formatting."
            .to_string(),
    }
}

/// Renders the question list as a numbered block, voice-safe.
pub fn format_questions(questions: &[String]) -> String {
    questions
        .iter()
        .enumerate()
        .map(|(i, q)| format!("{}. {}", i + 1, sanitize_for_voice(q)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Substitutes the three placeholders throughout the graph and returns the
/// rendered workflow ready for the voice runtime.
pub fn render_workflow(display_name: &str, user_id: Uuid, questions: &[String]) -> Workflow {
    let mut workflow = interview_workflow();
    let user_id = user_id.to_string();
    let questions = format_questions(questions);

    let substitute = |text: &str| -> String {
        text.replace(NAME_PLACEHOLDER, display_name)
            .replace(USERID_PLACEHOLDER, &user_id)
            .replace(QUESTIONS_PLACEHOLDER, &questions)
    };

    workflow.name = substitute(&workflow.name);
    workflow.global_prompt = substitute(&workflow.global_prompt);
    for node in &mut workflow.nodes {
        match node {
            Node::Say { exact, .. } => *exact = substitute(exact),
            Node::Conversation {
                prompt,
                message_plan,
                ..
            } => {
                *prompt = substitute(prompt);
                message_plan.first_message = substitute(&message_plan.first_message);
            }
            Node::Start { .. } | Node::Tool { .. } => {}
        }
    }

    workflow
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_questions() -> Vec<String> {
        vec![
            "What is a goroutine?".to_string(),
            "Explain HTTP/2 server push".to_string(),
        ]
    }

    #[test]
    fn test_static_graph_is_linear_greeting_to_hangup() {
        let workflow = interview_workflow();
        assert_eq!(workflow.nodes.len(), 5);
        assert_eq!(workflow.edges.len(), 4);
        assert_eq!(workflow.edges[0].from, "start_node");
        assert_eq!(workflow.edges[3].to, "hangup");
    }

    #[test]
    fn test_render_substitutes_all_placeholders() {
        let user_id = Uuid::new_v4();
        let workflow = render_workflow("Ada", user_id, &sample_questions());
        let json = serde_json::to_string(&workflow).unwrap();
        assert!(!json.contains("{{"), "unsubstituted placeholder in {json}");
        assert!(json.contains("Hello Ada!"));
        assert!(json.contains(&user_id.to_string()));
        assert!(json.contains("1. What is a goroutine?"));
    }

    #[test]
    fn test_format_questions_numbers_and_sanitizes() {
        let block = format_questions(&sample_questions());
        assert_eq!(
            block,
            "1. What is a goroutine?\n2. Explain HTTP2 server push"
        );
    }

    #[test]
    fn test_workflow_serializes_runtime_field_names() {
        let workflow = render_workflow("Ada", Uuid::new_v4(), &sample_questions());
        let value = serde_json::to_value(&workflow).unwrap();
        assert!(value.get("globalPrompt").is_some());
        let conversation = &value["nodes"][2];
        assert_eq!(conversation["type"], "conversation");
        assert!(conversation["messagePlan"].get("firstMessage").is_some());
        assert!(conversation["model"].get("maxTokens").is_some());
        let hangup = &value["nodes"][4];
        assert_eq!(hangup["tool"]["type"], "endCall");
    }

    #[test]
    fn test_unconditioned_edge_omits_condition_key() {
        let workflow = interview_workflow();
        let value = serde_json::to_value(&workflow).unwrap();
        assert!(value["edges"][0].get("condition").is_none());
        assert_eq!(value["edges"][1]["condition"]["type"], "ai");
    }
}
