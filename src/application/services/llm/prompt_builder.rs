//! Prompt building functions for backlog grooming requests

/// Build the system prompt that establishes the product-manager persona
pub fn build_system_prompt() -> String {
    "You are a senior product manager turning messy backlog notes into structured \
     user stories. Return ONLY valid JSON."
        .to_string()
}

/// Build the user instruction wrapping the raw backlog text.
///
/// The text is embedded as-is. Every `BacklogItem` field is named with its
/// type so the model's output lands on the expected shape.
pub fn build_grooming_prompt(backlog_text: &str) -> String {
    let mut prompt = String::new();

    prompt.push_str(
        "Take the following messy backlog notes and convert them into an array of backlog items.\n\n",
    );

    prompt.push_str("For each item, return an object with:\n");
    prompt.push_str("- title (string)\n");
    prompt.push_str("- user_story (string: 'As a..., I want..., so that...')\n");
    prompt.push_str("- acceptance_criteria (array of strings)\n");
    prompt.push_str("- priority (one of 'High', 'Medium', 'Low')\n");
    prompt.push_str("- tags (array of short strings)\n\n");

    prompt.push_str(
        "Choose priority from the implied urgency or importance. Auto-detect tags such as \
         \"bug\", \"performance\", \"feature request\", \"UX\", \"security\", \"infra\".\n\n",
    );

    prompt.push_str("Respond with a JSON object like:\n");
    prompt.push_str("{ \"items\": [ ... ] }\n\n");

    prompt.push_str("Backlog text:\n");
    prompt.push_str(backlog_text);
    prompt.push('\n');

    prompt
}
