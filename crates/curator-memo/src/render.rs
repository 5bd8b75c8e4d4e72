//! Markdown rendering of the memo.
//!
//! Section order is fixed: hot signals, themes, macro shifts, niche cards,
//! project recommendations, pitch, next actions.

use curator_types::{NicheCard, ProjectIdea, TopicMomentum};

use crate::sections::MemoSections;

/// Hot signals listed in the memo.
pub const HOT_SIGNAL_DISPLAY_LIMIT: usize = 10;

/// Supporting signal titles listed per topic.
const TOPIC_EXAMPLE_LIMIT: usize = 3;

/// Fixed seven-day checklist closing every memo.
pub const NEXT_ACTIONS: [&str; 10] = [
    "Map next 20 open calls that mention AI/archives/performance",
    "Email top 5 venues asking for programming priorities",
    "Draft 2-page concept note per project scale",
    "Mock up production budget bands (micro/mid/large)",
    "Secure rights review for any datasets to be used",
    "Line up 3 potential collaborators (technologist, dramaturg, archivist)",
    "Collect 5 more signals per emerging niche",
    "Schedule pitch calls with two biennale curators",
    "Storyboard promo photography and teaser video",
    "Define consent + disclosure language for audiences",
];

/// Render the complete memo document.
pub fn render_memo(sections: &MemoSections) -> String {
    let mut parts: Vec<String> = vec!["# Curatorial Opportunity Memo".to_string()];

    parts.push("\n## Hot Signals (90D)".to_string());
    for signal in sections.hot_signals.iter().take(HOT_SIGNAL_DISPLAY_LIMIT) {
        parts.push(format!(
            "- {} ({}, {}): {}",
            signal.title, signal.source, signal.published_at, signal.summary
        ));
    }

    parts.push("\n## Themes (1Y)".to_string());
    parts.push(render_topic_block("", &sections.themes));

    parts.push("\n## Macro Shifts (3Y)".to_string());
    parts.push(render_topic_block("", &sections.macro_shifts));

    parts.push("\n## Niche Cards (Top 5)".to_string());
    parts.push(
        sections
            .niche_cards
            .iter()
            .map(render_niche_card)
            .collect::<Vec<_>>()
            .join("\n"),
    );

    parts.push("\n## Project Recommendations (Micro/Mid/Large)".to_string());
    parts.extend(sections.projects.iter().map(render_project));

    if let Some(project) = sections.lead_project() {
        parts.push("\n## Pitch (150 words)".to_string());
        parts.push(render_pitch(project));
    }

    parts.push("\n## Next Actions (7 days)".to_string());
    parts.push(render_actions());

    parts.join("\n")
}

/// Topic list under an optional header line.
pub fn render_topic_block(header: &str, topics: &[TopicMomentum]) -> String {
    let mut lines = vec![header.to_string()];
    for topic in topics {
        let examples: Vec<&str> = topic
            .signals
            .iter()
            .take(TOPIC_EXAMPLE_LIMIT)
            .map(|s| s.title.as_str())
            .collect();
        lines.push(format!(
            "- **{}** (momentum {}): {}",
            topic.name,
            topic.display_weight(),
            examples.join(", ")
        ));
    }
    lines.join("\n")
}

pub fn render_niche_card(card: &NicheCard) -> String {
    [
        format!("**Niche:** {}", card.niche),
        format!("**Why now:** {}", card.why_now),
        format!("**Audience:** {}", card.audience),
        format!("**Where it lives (venues/calls):** {}", card.venues.join(", ")),
        format!(
            "**Competition keywords:** {}",
            card.competition_keywords.join(", ")
        ),
        format!("**Differentiation / edge:** {}", card.differentiation),
        format!("**Commissioning angle:** {}", card.commissioning_angle),
        format!("**Risks:** {}", card.risks),
        format!("**Mitigation:** {}", card.mitigation),
        String::new(),
    ]
    .join("\n")
}

pub fn render_project(project: &ProjectIdea) -> String {
    let rationale = project
        .score_rationale
        .iter()
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n");
    [
        format!("## Project {}: {}", project.scale, project.title),
        format!("**Hook (1 sentence):** {}", project.hook),
        format!("**Medium / format:** {}", project.medium_format),
        format!("**Duration / footprint:** {}", project.duration_footprint),
        format!("**Why now (trend links):** {}", project.why_now),
        format!("**Production needs:** {}", project.production_needs),
        format!(
            "**Target venues / calls (3–7):** {}",
            project.target_venues.join(", ")
        ),
        format!("**Promo angle (1 paragraph):** {}", project.promo_angle),
        format!("**Score (0–100):** {}", project.score),
        "**Score rationale (bullets):**".to_string(),
        rationale,
        String::new(),
    ]
    .join("\n")
}

/// One-paragraph pitch for the lead project.
pub fn render_pitch(project: &ProjectIdea) -> String {
    [
        format!(
            "{} invites audiences into a transparent lab exploring {}.",
            project.title, project.hook
        ),
        format!(
            "It blends {}, giving visitors a participatory, research-driven experience.",
            project.medium_format
        ),
        project.why_now.clone(),
        "We have a nimble team, rights-cleared materials, and modular staging to keep production feasible.".to_string(),
        "Looking for partners to commission/host a debut, with co-branded documentation for their audiences.".to_string(),
    ]
    .join(" ")
}

pub fn render_actions() -> String {
    NEXT_ACTIONS
        .iter()
        .map(|step| format!("- {step}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Trim trailing whitespace and end the document with exactly one newline.
pub fn finalize_document(memo: &str) -> String {
    format!("{}\n", memo.trim_end())
}
