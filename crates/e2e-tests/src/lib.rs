//! End-to-end test infrastructure for the curator.
//!
//! Provides a shared signal batch, a fixed reference date and helpers for
//! running the full load-to-render pipeline.

use std::path::PathBuf;

use chrono::NaiveDate;

use curator_memo::{build_sections, finalize_document, render_memo, MemoSections};
use curator_types::{parse_signals, Preferences, Signal};

/// Twelve art-world signals spread over the nine months before
/// [`reference_date`].
pub const SAMPLE_SIGNALS: &str = r#"[
  {
    "title": "UNESCO updates AI ethics guidance for cultural institutions",
    "source": "UNESCO",
    "published_at": "2024-05-20",
    "summary": "Revised framework asks museums and festivals to disclose AI provenance and licensing, emphasizing community consent.",
    "url": "https://unesco.org/ai-ethics",
    "tags": ["ai-copyright", "provenance-transparency"]
  },
  {
    "title": "Venice Biennale side program spotlights climate urgency in coastal cities",
    "source": "Venice Biennale",
    "published_at": "2024-04-18",
    "summary": "New commissions pair sound walks with environmental data to reveal rising sea impacts on neighborhoods.",
    "url": "https://example.com/venice-climate",
    "tags": ["climate-urgency", "listening-spatial"]
  },
  {
    "title": "Open call: diaspora archives for performance artists",
    "source": "Performance Space New York",
    "published_at": "2024-06-04",
    "summary": "Residency invites artists to work with diaspora family archives, offering dramaturgy support and public showings.",
    "tags": ["diaspora", "archive-practice"]
  },
  {
    "title": "Research lab maps missing images in public datasets",
    "source": "Digital Public Library",
    "published_at": "2024-03-12",
    "summary": "Fellowship cohort documents gaps in visual records across regions and proposes community-led digitization.",
    "tags": ["missing-images", "archive-practice"]
  },
  {
    "title": "Policy brief: European funding shifts toward provenance transparency",
    "source": "Creative Europe",
    "published_at": "2023-12-01",
    "summary": "New funding lines prioritize traceable AI systems and open cultural data infrastructure.",
    "tags": ["provenance-transparency", "policy"]
  },
  {
    "title": "XR festival tests participatory public-space performances",
    "source": "Sónar",
    "published_at": "2024-01-20",
    "summary": "Festival pilots multi-city AR interventions with citizen co-design sessions, focused on accessibility.",
    "tags": ["participatory", "public-space", "accessibility"]
  },
  {
    "title": "Art-tech lab explores decolonial methods for AI training",
    "source": "Serpentine",
    "published_at": "2023-10-15",
    "summary": "Workshops critique dataset extraction and propose artist-led annotation circles using consent protocols.",
    "tags": ["decolonial-method", "ai-copyright"]
  },
  {
    "title": "Open data commons releases spatial audio field kit",
    "source": "Open Data Commons",
    "published_at": "2024-02-05",
    "summary": "Toolkit standardizes community capture of spatial audio for public art and archives.",
    "tags": ["listening-spatial", "public-space"]
  },
  {
    "title": "University study links accessibility gaps in immersive arts",
    "source": "MIT",
    "published_at": "2024-05-01",
    "summary": "Survey of 30 XR exhibitions finds low adoption of multi-sensory access plans and calls for new standards.",
    "tags": ["accessibility", "public-space"]
  },
  {
    "title": "Museum pilots provenance-first AI label on digital collections",
    "source": "Tate",
    "published_at": "2024-04-02",
    "summary": "Labels show training data lineage and licenses, helping audiences understand AI-assisted restorations.",
    "tags": ["provenance-transparency", "archive-practice"]
  },
  {
    "title": "Biennale program explores participatory listening stations",
    "source": "Sydney Biennale",
    "published_at": "2024-01-28",
    "summary": "Community groups co-create spatial audio maps of neighborhood care infrastructures.",
    "tags": ["participatory", "listening-spatial"]
  },
  {
    "title": "City arts fund backs public-space performances on climate resilience",
    "source": "NYC Cultural Affairs",
    "published_at": "2024-06-10",
    "summary": "Grants support artists staging street performances with local climate researchers and youth groups.",
    "tags": ["public-space", "climate-urgency"]
  }
]"#;

/// Reference date the sample batch is evaluated against.
pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 30).expect("valid reference date")
}

/// Parse [`SAMPLE_SIGNALS`].
pub fn sample_signals() -> Vec<Signal> {
    parse_signals(SAMPLE_SIGNALS).expect("sample signals are valid")
}

/// Run the pipeline and return both the sections and the finished document.
pub fn run_pipeline(
    signals: &[Signal],
    reference_date: NaiveDate,
    preferences: &Preferences,
) -> (MemoSections, String) {
    let sections = build_sections(signals, reference_date, preferences);
    let memo = finalize_document(&render_memo(&sections));
    (sections, memo)
}

/// Write `contents` into a fresh temp dir and return the dir and file path.
///
/// The [`tempfile::TempDir`] must be kept alive for as long as the file is used.
pub fn write_temp_file(name: &str, contents: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("Failed to write temp file");
    (dir, path)
}
