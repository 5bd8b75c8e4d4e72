//! End-to-end pipeline tests for the curator.
//!
//! Load a realistic batch, build every section and render the memo.

use pretty_assertions::assert_eq;

use curator_memo::render_memo;
use curator_topics::{horizon_split, topic_weights};
use curator_types::{Preferences, Scale};
use e2e_tests::{reference_date, run_pipeline, sample_signals};

#[test]
fn test_sample_batch_horizons_are_nested() {
    let signals = sample_signals();
    let split = horizon_split(&signals, reference_date());

    assert_eq!(split.recent.len(), 6);
    assert_eq!(split.year.len(), 12);
    assert_eq!(split.long.len(), 12);
    for signal in &split.recent {
        assert!(split.year.contains(signal));
    }
    for signal in &split.year {
        assert!(split.long.contains(signal));
    }
}

#[test]
fn test_sample_batch_topic_ranking() {
    let (sections, _) = run_pipeline(&sample_signals(), reference_date(), &Preferences::default());

    let themes: Vec<&str> = sections.themes.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(
        &themes[..5],
        &[
            "public-space",
            "archive-practice",
            "climate-urgency",
            "provenance-transparency",
            "listening-spatial",
        ]
    );
    assert_eq!(sections.themes.len(), 8);
    assert_eq!(sections.themes[0].display_weight(), "1.26");
    assert_eq!(sections.themes[0].signals.len(), 4);

    assert_eq!(sections.hot_topics[0].name, "public-space");
    assert!(sections.macro_shifts.len() <= 6);
    assert_eq!(sections.macro_shifts[0].name, "public-space");
}

#[test]
fn test_sample_batch_niche_cards() {
    let (sections, _) = run_pipeline(&sample_signals(), reference_date(), &Preferences::default());

    let niches: Vec<&str> = sections
        .niche_cards
        .iter()
        .map(|c| c.niche.as_str())
        .collect();
    assert_eq!(
        niches,
        vec![
            "public-space",
            "archive-practice",
            "climate-urgency",
            "provenance-transparency",
            "listening-spatial",
        ]
    );
    assert!(sections.niche_cards.iter().all(|c| !c.is_placeholder()));

    // Lead venue comes from the earliest supporting signal in input order.
    assert_eq!(sections.niche_cards[0].venues[0], "Sónar");
}

#[test]
fn test_sample_batch_projects() {
    let (sections, _) = run_pipeline(&sample_signals(), reference_date(), &Preferences::default());

    let summary: Vec<(Scale, &str, u8)> = sections
        .projects
        .iter()
        .map(|p| (p.scale, p.title.as_str(), p.score))
        .collect();
    assert_eq!(
        summary,
        vec![
            (Scale::Micro, "Tracing Public-Space", 62),
            (Scale::Mid, "Amplifying Archive-Practice", 64),
            (Scale::Large, "Reframing Climate-Urgency", 57),
        ]
    );
    assert!(sections.projects.iter().all(|p| p.score <= 100));
    assert_eq!(
        sections.projects[0].score_rationale[0],
        "Recent momentum score 1.26"
    );
}

#[test]
fn test_preferences_flow_into_projects() {
    let preferences = Preferences {
        medium_focus: vec!["Sound".to_string(), "XR".to_string()],
        geography: Some("Nordics".to_string()),
    };
    let (sections, memo) = run_pipeline(&sample_signals(), reference_date(), &preferences);

    let rationale = &sections.projects[1].score_rationale;
    assert_eq!(rationale[1], "Aligns with sound / xr focus");
    assert_eq!(rationale[2], "Playable across Nordics venues");
    assert!(memo.contains("- Aligns with sound / xr focus"));
}

#[test]
fn test_memo_document_layout() {
    let (sections, memo) = run_pipeline(&sample_signals(), reference_date(), &Preferences::default());

    let headings = [
        "# Curatorial Opportunity Memo",
        "## Hot Signals (90D)",
        "## Themes (1Y)",
        "## Macro Shifts (3Y)",
        "## Niche Cards (Top 5)",
        "## Project Recommendations (Micro/Mid/Large)",
        "## Project Micro: Tracing Public-Space",
        "## Project Mid: Amplifying Archive-Practice",
        "## Project Large: Reframing Climate-Urgency",
        "## Pitch (150 words)",
        "## Next Actions (7 days)",
    ];
    let mut cursor = 0;
    for heading in headings {
        let found = memo[cursor..]
            .find(heading)
            .unwrap_or_else(|| panic!("missing or out of order: {heading}"));
        cursor += found + heading.len();
    }

    assert!(memo.contains(
        "- UNESCO updates AI ethics guidance for cultural institutions (UNESCO, 2024-05-20): "
    ));
    assert!(!memo.contains("Research lab maps missing images in public datasets (Digital"));
    assert!(memo.contains("Tracing Public-Space invites audiences into a transparent lab"));
    assert_eq!(memo.matches("**Niche:**").count(), 5);
    assert!(memo.ends_with("- Define consent + disclosure language for audiences\n"));
    assert!(!memo.ends_with("\n\n"));

    assert!(render_memo(&sections).starts_with("# Curatorial Opportunity Memo\n"));
}

#[test]
fn test_pipeline_is_deterministic() {
    let signals = sample_signals();
    let (first_sections, first_memo) =
        run_pipeline(&signals, reference_date(), &Preferences::default());
    let (second_sections, second_memo) =
        run_pipeline(&signals, reference_date(), &Preferences::default());

    assert_eq!(first_sections, second_sections);
    assert_eq!(first_memo, second_memo);
    assert_eq!(
        serde_json::to_string(&first_sections).unwrap(),
        serde_json::to_string(&second_sections).unwrap()
    );
}

#[test]
fn test_signal_order_only_breaks_ties() {
    let signals = sample_signals();
    let mut reversed = signals.clone();
    reversed.reverse();

    let forward = topic_weights(&signals, reference_date());
    let backward = topic_weights(&reversed, reference_date());
    for (topic, weight) in forward.iter() {
        let other = backward.get(topic).unwrap();
        assert!((weight - other).abs() < 1e-9, "{topic}: {weight} vs {other}");
    }

    let (sections, _) = run_pipeline(&reversed, reference_date(), &Preferences::default());
    assert_eq!(sections.themes[0].name, "public-space");
}

#[test]
fn test_sections_json_shape() {
    let (sections, _) = run_pipeline(&sample_signals(), reference_date(), &Preferences::default());
    let json = serde_json::to_value(&sections).unwrap();

    assert_eq!(json["reference_date"], "2024-06-30");
    assert_eq!(json["hot_signals"].as_array().unwrap().len(), 6);
    assert_eq!(json["niche_cards"].as_array().unwrap().len(), 5);
    assert_eq!(json["projects"][2]["scale"], "Large");
    assert_eq!(json["themes"][0]["weight"], 1.26);
}
