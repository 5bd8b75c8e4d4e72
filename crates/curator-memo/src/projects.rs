//! Scaled project recommendations.
//!
//! One idea per [`Scale`], each built on a ranked topic and scored with a
//! fixed heuristic:
//!
//! ```text
//! score = clamp(0, 100, appetite + feasibility + distinctiveness + funding_fit - risk_penalty)
//!
//! where:
//!   appetite        = min(25, 10 + floor(weight * 3))
//!   feasibility     = 18 (Micro) | 20 (Mid) | 16 (Large)
//!   distinctiveness = 20
//!   funding_fit     = 14
//!   risk_penalty    = 5 (Large) | 3 (otherwise)
//! ```

use curator_types::{Preferences, ProjectIdea, Scale, TopicMomentum};
use tracing::debug;

const DISTINCTIVENESS: i64 = 20;
const FUNDING_FIT: i64 = 14;
const APPETITE_BASE: i64 = 10;
const APPETITE_CAP: i64 = 25;

/// Topic used when no ranked topic is available at all.
pub const FALLBACK_TOPIC: &str = "emerging practice";

fn feasibility(scale: Scale) -> i64 {
    match scale {
        Scale::Micro => 18,
        Scale::Mid => 20,
        Scale::Large => 16,
    }
}

fn risk_penalty(scale: Scale) -> i64 {
    match scale {
        Scale::Micro | Scale::Mid => 3,
        Scale::Large => 5,
    }
}

fn title_verb(scale: Scale) -> &'static str {
    match scale {
        Scale::Micro => "Tracing",
        Scale::Mid => "Amplifying",
        Scale::Large => "Reframing",
    }
}

/// Composite project score in `0..=100`.
pub fn score_project(scale: Scale, topic_weight: f64) -> u8 {
    let appetite = (APPETITE_BASE as f64 + (topic_weight * 3.0).floor())
        .min(APPETITE_CAP as f64) as i64;
    let score =
        appetite + feasibility(scale) + DISTINCTIVENESS + FUNDING_FIT - risk_penalty(scale);
    score.clamp(0, 100) as u8
}

/// Capitalize the first letter of every alphabetic run, lower-case the rest.
///
/// `"ai-copyright"` becomes `"Ai-Copyright"`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_alphabetic = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if previous_alphabetic {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            previous_alphabetic = true;
        } else {
            out.push(c);
            previous_alphabetic = false;
        }
    }
    out
}

/// Project title for a topic at a scale, e.g. `"Tracing Archive-Practice"`.
pub fn project_title(topic: &TopicMomentum, scale: Scale) -> String {
    format!("{} {}", title_verb(scale), title_case(&topic.name))
}

/// Recommend one project per scale, in `Micro`, `Mid`, `Large` order.
///
/// The first three topics are used; fewer are reused cyclically, so a
/// single topic backs all three ideas. With no topics at all a neutral
/// [`FALLBACK_TOPIC`] of weight 0 is used.
pub fn recommend_projects(topics: &[TopicMomentum], preferences: &Preferences) -> Vec<ProjectIdea> {
    let fallback;
    let pool: &[TopicMomentum] = if topics.is_empty() {
        fallback = [TopicMomentum::new(FALLBACK_TOPIC, 0.0, Vec::new())];
        &fallback
    } else {
        topics
    };

    let medium_focus = preferences.medium_focus_label();
    let geography = preferences.geography_label();

    let ideas: Vec<ProjectIdea> = Scale::ALL
        .iter()
        .zip(pool.iter().cycle())
        .map(|(&scale, topic)| project_idea(scale, topic, &medium_focus, &geography))
        .collect();

    debug!(
        topics = topics.len(),
        scores = ?ideas.iter().map(|p| p.score).collect::<Vec<_>>(),
        "recommended projects"
    );
    ideas
}

fn project_idea(
    scale: Scale,
    topic: &TopicMomentum,
    medium_focus: &str,
    geography: &str,
) -> ProjectIdea {
    let score_rationale = vec![
        format!("Recent momentum score {}", topic.display_weight()),
        format!("Aligns with {medium_focus} focus"),
        format!("Playable across {geography} venues"),
        "Differentiated by transparent process + community proof".to_string(),
    ];

    ProjectIdea {
        scale,
        title: project_title(topic, scale),
        hook: format!(
            "{scale} concept that spotlights {} through live research-performance.",
            topic.name
        ),
        medium_format: medium_focus.to_string(),
        duration_footprint: "Micro: pop-up / Mid: touring set / Large: multi-site installation"
            .to_string(),
        why_now: format!(
            "{} rising in programming over last year; funders seeking credible, transparent AI/arts work.",
            title_case(&topic.name)
        ),
        production_needs:
            "Creative technologist, dramaturg, rights-cleared datasets, disclosure plan".to_string(),
        target_venues: vec![
            "digital art festivals".to_string(),
            "media labs".to_string(),
            "museum project spaces".to_string(),
            "policy-forward biennales".to_string(),
        ],
        promo_angle: "Positioned as a living lab where audiences test narratives alongside artists; strong documentation for partners.".to_string(),
        score: score_project(scale, topic.weight),
        score_rationale,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn topic(name: &str, weight: f64) -> TopicMomentum {
        TopicMomentum::new(name, weight, Vec::new())
    }

    #[test]
    fn test_score_project_formula() {
        // appetite = 10 + floor(2.0 * 3) = 16
        assert_eq!(score_project(Scale::Micro, 2.0), 65);
        assert_eq!(score_project(Scale::Mid, 2.0), 67);
        assert_eq!(score_project(Scale::Large, 2.0), 61);
        // appetite floors: 0.99 * 3 = 2.97 -> 2
        assert_eq!(score_project(Scale::Micro, 0.99), 61);
        // appetite caps at 25
        assert_eq!(score_project(Scale::Mid, 40.0), 76);
    }

    #[test]
    fn test_score_always_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let weight: f64 = rng.random_range(0.0..500.0);
            for scale in Scale::ALL {
                assert!(score_project(scale, weight) <= 100);
            }
        }
    }

    #[test]
    fn test_score_saturates_for_extreme_weights() {
        assert_eq!(score_project(Scale::Micro, f64::INFINITY), 74);
        assert_eq!(score_project(Scale::Large, f64::MAX), 70);
        assert_eq!(score_project(Scale::Mid, 1e300), 76);
        assert_eq!(score_project(Scale::Micro, f64::NEG_INFINITY), 0);
    }

    #[test]
    fn test_single_topic_backs_all_scales() {
        let ideas = recommend_projects(&[topic("opera", 2.0)], &Preferences::default());
        assert_eq!(ideas.len(), 3);

        let scales: Vec<Scale> = ideas.iter().map(|p| p.scale).collect();
        assert_eq!(scales, Scale::ALL.to_vec());

        let titles: Vec<&str> = ideas.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Tracing Opera", "Amplifying Opera", "Reframing Opera"]
        );
        let scores: Vec<u8> = ideas.iter().map(|p| p.score).collect();
        assert_eq!(scores, vec![65, 67, 61]);
        assert!(ideas.iter().all(|p| p.hook.contains("opera")));
    }

    #[test]
    fn test_two_topics_cycle() {
        let ideas = recommend_projects(
            &[topic("climate", 1.0), topic("policy", 0.5)],
            &Preferences::default(),
        );
        let titles: Vec<&str> = ideas.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Tracing Climate", "Amplifying Policy", "Reframing Climate"]
        );
    }

    #[test]
    fn test_extra_topics_are_ignored() {
        let topics = [
            topic("one", 1.0),
            topic("two", 1.0),
            topic("three", 1.0),
            topic("four", 1.0),
        ];
        let ideas = recommend_projects(&topics, &Preferences::default());
        assert_eq!(ideas.len(), 3);
        assert_eq!(ideas[2].title, "Reframing Three");
    }

    #[test]
    fn test_empty_topics_use_fallback() {
        let ideas = recommend_projects(&[], &Preferences::default());
        assert_eq!(ideas.len(), 3);
        assert_eq!(ideas[0].title, "Tracing Emerging Practice");
        assert_eq!(ideas[0].score, 59);
    }

    #[test]
    fn test_rationale_uses_preferences() {
        let prefs = Preferences {
            medium_focus: vec!["Sound".to_string(), "XR".to_string()],
            geography: Some("Baltic".to_string()),
        };
        let ideas = recommend_projects(&[topic("listening", 1.5)], &prefs);
        assert_eq!(
            ideas[0].score_rationale,
            vec![
                "Recent momentum score 1.5",
                "Aligns with sound / xr focus",
                "Playable across Baltic venues",
                "Differentiated by transparent process + community proof",
            ]
        );
        assert_eq!(ideas[0].medium_format, "sound / xr");
    }

    #[test]
    fn test_rationale_defaults() {
        let ideas = recommend_projects(&[topic("opera", 2.0)], &Preferences::default());
        assert_eq!(ideas[1].score_rationale[0], "Recent momentum score 2.0");
        assert_eq!(
            ideas[1].score_rationale[1],
            "Aligns with performance + audiovisual + archive sampling focus"
        );
        assert_eq!(ideas[1].score_rationale[2], "Playable across global venues");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("ai-copyright"), "Ai-Copyright");
        assert_eq!(title_case("provenance transparency"), "Provenance Transparency");
        assert_eq!(title_case("OPERA"), "Opera");
        assert_eq!(title_case(""), "");
    }
}
