//! # curator-memo
//!
//! Assembles a Curatorial Opportunity Memo from ranked topics.
//!
//! ## Pipeline
//! 1. Split signals into 90-day / 1-year / 3-year horizons
//! 2. Rank topics per horizon (10 / 8 / 6)
//! 3. Build five niche cards from the 1-year window
//! 4. Recommend Micro / Mid / Large projects from the strongest topics
//! 5. Render the sections as Markdown
//!
//! Every step is a pure function of (signals, reference date, preferences),
//! so identical inputs always produce identical output.

pub mod niche;
pub mod projects;
pub mod render;
pub mod sections;

pub use niche::{build_niche_cards, is_niche_weight, DEFAULT_NICHE_LIMIT};
pub use projects::{project_title, recommend_projects, score_project, title_case};
pub use render::{finalize_document, render_memo, NEXT_ACTIONS};
pub use sections::{build_sections, MemoSections};
