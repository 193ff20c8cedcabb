//! Prompt templates for the creator assistant.

use trendscope_core::KeywordSummaryRequest;

/// Daily briefing prompt. Answered in JSON mode.
pub const DAILY_BRIEFING: &str = r#"You are an AI assistant for short-form content creators.
Provide a concise, engaging, and optimistic one-paragraph daily briefing.
The briefing should summarize significant shifts, new emerging trends, or interesting observations in the short-form video landscape (TikTok, Instagram Reels, YouTube Shorts).
Mention 2-3 specific examples of trends, sounds, or content styles.
Keep it under 100 words. Start with a friendly greeting like "Good morning, Creator!" or "Hello Trendsetter!".
Output a JSON object with two keys: "greeting" (string) and "summary" (string).
Example: {"greeting": "Hey Digital Storyteller!", "summary": "Nostalgic gaming content is booming on Reels, while TikTok's latest dance challenge #GalaxyGlide is taking off. YouTube Shorts is seeing a rise in quick educational explainers on sustainable living. Time to get creative!"}"#;

fn or_placeholder<'a>(value: Option<&'a str>, placeholder: &'a str) -> &'a str {
    value.filter(|v| !v.is_empty()).unwrap_or(placeholder)
}

fn join_or_placeholder(items: &[String], placeholder: &str) -> String {
    if items.is_empty() {
        placeholder.to_string()
    } else {
        items.join(", ")
    }
}

/// Keyword summary prompt. Missing context is spelled out as "unavailable",
/// "unknown" or "none provided".
pub fn keyword_summary(request: &KeywordSummaryRequest) -> String {
    format!(
        r#"Analyze the keyword "{keyword}" for short-form content creation.
Current trend data suggests: {trend}.
Competition level is approximately: {competition}.
Related keywords include: {related}.
Common questions people ask related to this topic are: {questions}.

Provide a concise (around 100-120 words) AI summary. This summary should:
1. Highlight its current relevance and trajectory (e.g., peaking, emerging, declining).
2. Identify the primary platform(s) where it is trending or has potential.
3. Suggest one or two significant untapped niche angles or unique perspectives for content.
4. Maintain an encouraging and insightful tone for content creators.

Focus on actionable insights."#,
        keyword = request.keyword,
        trend = or_placeholder(request.trend_data.as_deref(), "unavailable"),
        competition = or_placeholder(request.competition.as_deref(), "unknown"),
        related = join_or_placeholder(&request.related_keywords, "none provided"),
        questions = join_or_placeholder(&request.sample_questions, "none provided"),
    )
}

/// Content ideas prompt. Answered in JSON mode.
pub fn content_ideas(keyword: &str, summary: &str) -> String {
    format!(
        r#"You are a creative strategist for short-form video content.
Based on the keyword "{keyword}" and the following AI-generated market summary:
"{summary}"

Generate 3-5 specific, actionable, and creative short-form video ideas.
Each idea MUST include:
1. "hook": A compelling, short opening (max 15 words) to grab attention.
2. "format": A suggested content format (e.g., Storytelling with reveal, Quick tutorial, Time-lapse/Process, Challenge, Myth-busting, Reaction, Duet, Educational explainer, Behind-the-scenes).
3. "fullIdea" (optional but recommended): A brief elaboration of the concept (max 30 words).

Output MUST be a valid JSON array of objects, where each object has "hook", "format", and optionally "fullIdea" string properties.
Ensure the JSON is well-formed. Do not include any text outside the JSON array.

Example JSON structure:
[
  {{"hook": "I asked AI to draw my childhood fear...", "format": "Storytelling with reveal", "fullIdea": "Show the prompt, the AI generation process, and your reaction to the final image."}},
  {{"hook": "3 prompts YOU NEED for amazing AI portraits!", "format": "Quick tutorial", "fullIdea": "Quickly demonstrate 3 effective prompts and the stunning results they produce."}},
  {{"hook": "Watch AI create a music video from lyrics.", "format": "Time-lapse/Process", "fullIdea": "Show lyrics, AI generating images for each line, and compile into a short music visualizer."}}
]"#
    )
}
