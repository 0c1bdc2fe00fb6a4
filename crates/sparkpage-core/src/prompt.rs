//! Prompt construction for the page generation request.
//!
//! A single fixed instruction template embeds the user's raw idea and
//! spells out the exact JSON shape the model must reply with.

/// Placeholder replaced with the user's idea; appears exactly once in the
/// template and never in the built prompt.
const USER_INPUT_TOKEN: &str = "{USER_INPUT}";

const PROMPT_TEMPLATE: &str = r#"You are an expert Product Manager and Brand Strategist. Your task is to take a user's raw app idea and transform it into a complete, structured, and compelling project presentation.
The user's idea is: "{USER_INPUT}"
Generate a JSON object that strictly follows this structure. Do not add any extra text, comments, or explanations outside of the JSON object. Your entire response must be only the JSON object itself.
{
  "appName": "A creative and catchy name for the app",
  "tagline": "A short, memorable tagline that captures the app's essence",
  "heroIllustration": "A simple keyword for a hero illustration (e.g., 'rocket', 'idea', 'connection')",
  "features": [
    {
      "title": "Feature 1 Title",
      "description": "A concise description of the first key feature.",
      "illustration": "A simple keyword for an illustration (e.g., 'zap', 'shield', 'chart')"
    },
    {
      "title": "Feature 2 Title",
      "description": "A concise description of the second key feature.",
      "illustration": "A simple keyword for an illustration (e.g., 'collaboration', 'automation', 'search')"
    },
    {
      "title": "Feature 3 Title",
      "description": "A concise description of the third key feature.",
      "illustration": "A simple keyword for an illustration (e.g., 'design', 'code', 'analytics')"
    }
  ],
  "problemStatement": {
    "title": "The Problem",
    "description": "A clear and relatable description of the problem the app solves.",
    "illustration": "A simple keyword for an illustration (e.g., 'problem', 'confusion', 'target')"
  },
  "solutionStatement": {
    "title": "Our Solution",
    "description": "A compelling explanation of how the app solves the problem.",
    "illustration": "A simple keyword for an illustration (e.g., 'solution', 'clarity', 'check-circle')"
  },
  "targetAudience": {
    "title": "Who It's For",
    "description": "A profile of the ideal user for this application.",
    "illustration": "A simple keyword for an illustration (e.g., 'users', 'team', 'developer')"
  },
  "cta": {
    "title": "Ready to Get Started?",
    "description": "A final, engaging call-to-action to encourage users.",
    "buttonText": "Launch Now"
  }
}"#;

/// Build the generation prompt for a raw app idea.
///
/// Pure substitution into the fixed template; the idea is embedded
/// verbatim inside the quoted slot.
pub fn build_prompt(idea: &str) -> String {
    PROMPT_TEMPLATE.replace(USER_INPUT_TOKEN, idea)
}
