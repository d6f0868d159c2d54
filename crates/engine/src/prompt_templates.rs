//! The story prompt template.
//!
//! The template text is fixed. Field values are substituted verbatim: no
//! trimming and no escaping.

use storysmith_domain::StoryRequest;

/// Render the storyteller prompt for a request.
///
/// Pure: identical requests always render byte-identical prompts.
pub fn build_story_prompt(request: &StoryRequest) -> String {
    render_story_prompt(
        &request.char_name,
        &request.char_type,
        &request.char_persona,
        &request.char_location,
        request.story_length,
        &request.story_premise.joined(),
    )
}

fn render_story_prompt(
    character_name: &str,
    character_type: &str,
    character_persona: &str,
    character_location: &str,
    story_length: u32,
    story_premise: &str,
) -> String {
    format!(
        "You are a creative storyteller. Write an engaging story with approximately {story_length} sentences based on the following details:

    Character Details:
    - Name: {character_name}
    - Type: {character_type}
    - Personality: {character_persona}
    - Location: {character_location}
    - Story Theme(s): {story_premise}

    Story Structure Requirements:
    - Create a compelling narrative with a clear beginning, middle, and end
    - Include character development and engaging dialogue
    - Build tension and resolution appropriate to the themes
    - Write approximately {story_length} sentences total
    - Ensure the story flows naturally and maintains reader interest
    - Include vivid descriptions of the setting and characters

    Make the story creative, engaging, and well-paced. Focus on quality storytelling rather than strict chapter divisions."
    )
}
