// src/prompt.rs

use crate::errors::FolioResult;
use crate::profile::Profile;

/// Builds the system instruction sent with every completion call.
pub fn system_instruction(profile: &Profile) -> FolioResult<String> {
    Ok(format!(
        "You are an AI assistant for {name}'s portfolio website.
Here is the complete profile data: {data}.

Your goal is to answer questions about {name} professionally, concisely, and enthusiastically.
- If asked about skills, list them from the data.
- If asked about experience, summarize the relevant roles.
- If asked why {first} should be hired, generate a persuasive pitch based on the combination of skills and experience in the data.
- Keep answers short (under 3 sentences) unless asked for details.
- Use emojis occasionally.",
        name = profile.name,
        first = profile.first_name(),
        data = profile.to_context_json()?,
    ))
}

pub fn summary_prompt(profile: &Profile) -> String {
    format!(
        "Generate a powerful, 2-sentence 'Elevator Pitch' for {} that highlights the journey to becoming a {}. Make it sound impressive.",
        profile.name, profile.role
    )
}

pub fn greeting(profile: &Profile) -> String {
    format!(
        "Hi! I'm {}'s AI Assistant. Ask me anything about skills, experience, or projects! 🤖",
        profile.first_name()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_instruction_embeds_profile() {
        let profile = Profile::builtin();
        let instruction = system_instruction(&profile).unwrap();
        let data = profile.to_context_json().unwrap();
        assert!(data.starts_with('{') && data.contains("\"experiences\""));
        assert!(instruction.contains(&format!("profile data: {}.", data)));
        assert!(instruction.contains("under 3 sentences"));
        assert!(instruction.contains("emojis"));
    }

    #[test]
    fn test_summary_prompt_asks_for_two_sentences() {
        let prompt = summary_prompt(&Profile::builtin());
        assert!(prompt.contains("2-sentence"));
        assert!(prompt.contains("Harmish Bhavsar"));
    }
}
