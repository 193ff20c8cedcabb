//! Template text for keyword analysis records.
//!
//! Everything here is a pure function of the keyword, except platform
//! scores which draw from the injected generator.

use rand::Rng;

use trendscope_core::{
    AudienceInsights, CompetitionLevel, ContentIdea, Platform, PlatformDetail, PlatformInsights,
    TopContentExample,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Per-platform insights with randomized relevance scores.
///
/// TikTok scores fall in [70, 99], Instagram in [65, 94], YouTube Shorts in
/// [60, 89].
pub fn platform_insights<R: Rng + ?Sized>(rng: &mut R, keyword: &str) -> PlatformInsights {
    PlatformInsights {
        tiktok: PlatformDetail {
            score: Some(rng.gen_range(70..=99)),
            nuances: vec![
                format!(
                    "\"{}\" is huge on TikTok, especially with trending sound X.",
                    keyword
                ),
                "Focus on quick cuts and engaging captions.".to_string(),
                "User-generated content performs well.".to_string(),
            ],
            trending_sounds: Some(strings(&["ViralSound123", "UpbeatTrackABC"])),
            popular_effects: Some(strings(&["GreenScreenDeluxe", "CloneTrail"])),
            common_formats: Some(strings(&[
                "Challenge participation",
                "Before & After",
                "Storytime lip-sync",
            ])),
            visual_aesthetics: None,
        },
        instagram: PlatformDetail {
            score: Some(rng.gen_range(65..=94)),
            nuances: vec![
                format!(
                    "Aesthetic visuals are key for \"{}\" on Instagram Reels.",
                    keyword
                ),
                "Collaborations with other creators can boost visibility.".to_string(),
                "Use relevant hashtags strategically.".to_string(),
            ],
            trending_sounds: Some(strings(&["ReelsTrendingAudio", "ChillVibesOnly"])),
            popular_effects: None,
            common_formats: Some(strings(&[
                "Tutorials/How-tos",
                "Product showcases",
                "Inspirational montages",
            ])),
            visual_aesthetics: Some(strings(&["Cinematic LUTs", "Minimalist Clean", "Retro VHS"])),
        },
        youtube: PlatformDetail {
            score: Some(rng.gen_range(60..=89)),
            nuances: vec![
                format!(
                    "Searchability is crucial for \"{}\" on YouTube Shorts.",
                    keyword
                ),
                "Longer-form content tie-ins can work.".to_string(),
                "Clear value proposition in the first 3 seconds.".to_string(),
            ],
            trending_sounds: Some(strings(&["Shorts Library Hit", "NCS Remix"])),
            popular_effects: None,
            common_formats: Some(strings(&[
                "Quick tips",
                "Myth busting",
                "Mini-documentaries",
            ])),
            visual_aesthetics: None,
        },
    }
}

/// Related keywords, emerging niches and common questions for a keyword.
pub fn audience_insights(keyword: &str) -> AudienceInsights {
    AudienceInsights {
        related_keywords: vec![
            format!("{} tutorial", keyword),
            format!("best {} tools", keyword),
            format!("{} fails", keyword),
            format!("{} 2024", keyword),
            format!("how to {}", keyword),
        ],
        emerging_niches: vec![
            format!("{} for beginners", keyword),
            format!("advanced {} techniques", keyword),
            format!("ethical {}", keyword),
            format!("{} in education", keyword),
            format!("AI {}", keyword),
        ],
        question_radar: vec![
            format!("Is {} hard to learn?", keyword),
            format!("How much does {} cost?", keyword),
            format!("What is the future of {}?", keyword),
            format!("Can I make money with {}?", keyword),
        ],
    }
}

fn thumbnail_url(keyword: &str, n: usize) -> String {
    format!(
        "https://via.placeholder.com/300x180.png?text={}+Example+{}",
        urlencoding::encode(keyword),
        n
    )
}

/// Four example videos that performed well for the keyword.
pub fn top_performing_content(keyword: &str) -> Vec<TopContentExample> {
    let examples = [
        (
            "tp1",
            format!("My CRAZY {} Journey!", keyword),
            Platform::TikTok,
            "CreatorMax",
        ),
        (
            "tp2",
            format!("The ULTIMATE {} Hack You NEED!", keyword),
            Platform::YouTubeShorts,
            "TechGuru",
        ),
        (
            "tp3",
            format!("Aesthetic {} Day in My Life", keyword),
            Platform::Instagram,
            "StyleByAI",
        ),
        (
            "tp4",
            format!("Trying {} for the First Time (EPIC FAIL!)", keyword),
            Platform::TikTok,
            "NoobPlays",
        ),
    ];

    examples
        .into_iter()
        .enumerate()
        .map(|(i, (id, title, platform, creator))| TopContentExample {
            id: id.to_string(),
            title,
            thumbnail_url: thumbnail_url(keyword, i + 1),
            platform,
            creator: Some(creator.to_string()),
        })
        .collect()
}

/// Ideas shown before any AI-generated ideas replace them.
pub fn seed_content_ideas(keyword: &str) -> Vec<ContentIdea> {
    vec![
        ContentIdea::new(
            format!("Can YOU guess this {} sound?", keyword),
            "Interactive Quiz",
        ),
        ContentIdea::new(
            format!("My top 3 {} secrets REVEALED!", keyword),
            "Quick Tips",
        )
        .with_full_idea("Share valuable insights quickly."),
        ContentIdea::new(
            format!("Transforming X to Y with {}!", keyword),
            "Transformation Time-lapse",
        )
        .with_full_idea("Show a cool before/after process."),
    ]
}

/// Placeholder summary shown until the AI summary arrives.
pub fn placeholder_summary(keyword: &str, competition: CompetitionLevel) -> String {
    format!(
        "Mock AI Summary for \"{keyword}\": This topic is currently buzzing, especially on TikTok. \
         While general showcases are common, there's a niche in {keyword} for educational purposes \
         or comedic takes. Competition is {}.",
        competition.as_str().to_lowercase()
    )
}
