use std::collections::HashSet;
use std::sync::LazyLock;

use chrono::{DateTime, Datelike};
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::motion::MotionSettings;

const CONTENT_FILE: &str = "portfolio.json";
const FALLBACK_YEAR: i32 = 2026;

static GLOBAL_CONTENT: LazyLock<Result<PortfolioContent, ContentError>> = LazyLock::new(load);

#[derive(Embed)]
#[folder = "content"]
pub struct ContentAssets;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("content file {0} is missing")]
    Missing(String),
    #[error("couldn't parse content: {0}")]
    Parse(String),
    #[error("duplicate {kind} id {id}")]
    DuplicateId { kind: &'static str, id: u32 },
    #[error("skill {name} has level {level}, expected 0-100")]
    LevelOutOfRange { name: String, level: u8 },
    #[error("no {0} entries")]
    Empty(&'static str),
    #[error("invalid motion settings: {0}")]
    InvalidMotion(&'static str),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub status: String,
    pub greeting: String,
    pub role_line: String,
    pub summary: String,
    pub email_url: String,
    pub availability: String,
    pub location: String,
    pub remote_note: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JourneyStep {
    pub icon: String,
    pub label: String,
    pub tone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroStat {
    pub value: String,
    pub label: String,
}

/// Percent offsets pinning an element inside its positioned container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub top: Option<f64>,
    pub bottom: Option<f64>,
    pub left: Option<f64>,
    pub right: Option<f64>,
}

impl Anchor {
    pub fn css(&self) -> String {
        [
            ("top", self.top),
            ("bottom", self.bottom),
            ("left", self.left),
            ("right", self.right),
        ]
        .iter()
        .filter_map(|(side, pct)| pct.map(|p| format!("{side}: {p}%;")))
        .collect::<Vec<_>>()
        .join(" ")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloatingTag {
    pub id: u32,
    pub icon: String,
    pub label: String,
    pub color: String,
    pub anchor: Anchor,
    /// Seconds before the tag pops in.
    pub delay: f64,
    /// Seconds per bobbing cycle.
    pub duration: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dot {
    pub top: f64,
    pub left: f64,
    pub size: u32,
    pub delay: f64,
    pub duration: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub id: u32,
    pub role: String,
    pub company: String,
    pub location: String,
    pub period: String,
    pub color: String,
    pub accent_color: String,
    pub description: String,
    pub highlights: Vec<String>,
    pub skills: Vec<String>,
    pub impact: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductSkill {
    pub icon: String,
    pub label: String,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechSkill {
    pub name: String,
    pub level: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseStudy {
    pub id: u32,
    pub title: String,
    pub category: String,
    pub icon: String,
    pub color: String,
    pub accent_color: String,
    pub description: String,
    pub role: String,
    pub metrics: Vec<Metric>,
    pub highlights: Vec<String>,
    pub insight: String,
    /// External write-up, when one is published.
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub icon: String,
    pub url: String,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioContent {
    pub profile: Profile,
    pub journey: Vec<JourneyStep>,
    pub stats: Vec<HeroStat>,
    pub floating_tags: Vec<FloatingTag>,
    pub dots: Vec<Dot>,
    pub experience: Vec<ExperienceEntry>,
    pub product_skills: Vec<ProductSkill>,
    pub tech_skills: Vec<TechSkill>,
    pub case_studies: Vec<CaseStudy>,
    pub social_links: Vec<SocialLink>,
    #[serde(default)]
    pub motion: MotionSettings,
}

fn check_unique(kind: &'static str, ids: impl Iterator<Item = u32>) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ContentError::DuplicateId { kind, id });
        }
    }
    Ok(())
}

impl PortfolioContent {
    pub fn from_json(text: &str) -> Result<Self, ContentError> {
        let content: PortfolioContent =
            serde_json::from_str(text).map_err(|e| ContentError::Parse(e.to_string()))?;
        content.validate()?;
        Ok(content)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if self.experience.is_empty() {
            return Err(ContentError::Empty("experience"));
        }
        check_unique("experience", self.experience.iter().map(|e| e.id))?;
        check_unique("case study", self.case_studies.iter().map(|c| c.id))?;
        check_unique("floating tag", self.floating_tags.iter().map(|t| t.id))?;

        if let Some(skill) = self.tech_skills.iter().find(|s| s.level > 100) {
            return Err(ContentError::LevelOutOfRange {
                name: skill.name.clone(),
                level: skill.level,
            });
        }

        let motion = &self.motion;
        if !(motion.repulsion.radius > 0.0) {
            return Err(ContentError::InvalidMotion("repulsion radius must be positive"));
        }
        if !(motion.repulsion.max_shift >= 0.0) {
            return Err(ContentError::InvalidMotion("max shift must not be negative"));
        }
        if !(motion.spring.stiffness > 0.0 && motion.spring.mass > 0.0) {
            return Err(ContentError::InvalidMotion(
                "spring stiffness and mass must be positive",
            ));
        }
        // an undamped spring never comes to rest
        if motion.spring.damping.is_some_and(|d| !(d > 0.0)) {
            return Err(ContentError::InvalidMotion("spring damping must be positive"));
        }
        if !motion.spring.is_stable() {
            return Err(ContentError::InvalidMotion("spring too stiff for the solver"));
        }
        Ok(())
    }

    pub fn experience_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.experience.iter().map(|e| e.id)
    }
}

fn load() -> Result<PortfolioContent, ContentError> {
    let file = ContentAssets::get(CONTENT_FILE)
        .ok_or_else(|| ContentError::Missing(CONTENT_FILE.to_string()))?;
    let text = std::str::from_utf8(&file.data).map_err(|e| ContentError::Parse(e.to_string()))?;
    PortfolioContent::from_json(text)
}

/// The embedded portfolio content, parsed once per process.
pub fn content() -> Result<&'static PortfolioContent, ContentError> {
    GLOBAL_CONTENT.as_ref().map_err(Clone::clone)
}

pub fn copyright_year() -> i32 {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|t| t.year())
        .unwrap_or(FALLBACK_YEAR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn embedded_json() -> Value {
        let file = ContentAssets::get(CONTENT_FILE).expect("content file should be embedded");
        serde_json::from_slice(&file.data).expect("content should be valid json")
    }

    fn parse(value: &Value) -> Result<PortfolioContent, ContentError> {
        PortfolioContent::from_json(&value.to_string())
    }

    #[test]
    fn test_embedded_content_loads() {
        let content = content().expect("embedded content should validate");

        let ids: Vec<u32> = content.experience_ids().collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(content.experience[0].role, "Associate Engineer II");
        assert_eq!(content.case_studies.len(), 4);
        assert_eq!(content.floating_tags.len(), 10);
        assert_eq!(content.tech_skills.len(), 6);
        assert!(content.case_studies.iter().all(|c| c.link.is_none()));
        assert_eq!(content.motion, MotionSettings::default());
    }

    #[test]
    fn test_social_links_forwarded_verbatim() {
        let content = content().unwrap();
        let phone = content
            .social_links
            .iter()
            .find(|l| l.name == "Phone")
            .unwrap();
        assert_eq!(phone.url, "tel:+917838006151");
        assert_eq!(content.profile.email_url, content.social_links[3].url);
    }

    #[test]
    fn test_duplicate_experience_id_rejected() {
        let mut json = embedded_json();
        json["experience"][2]["id"] = Value::from(1);
        assert_eq!(
            parse(&json).unwrap_err(),
            ContentError::DuplicateId {
                kind: "experience",
                id: 1
            }
        );
    }

    #[test]
    fn test_duplicate_case_study_id_rejected() {
        let mut json = embedded_json();
        json["case_studies"][1]["id"] = Value::from(4);
        assert!(matches!(
            parse(&json),
            Err(ContentError::DuplicateId {
                kind: "case study",
                id: 4
            })
        ));
    }

    #[test]
    fn test_skill_level_out_of_range() {
        let mut json = embedded_json();
        json["tech_skills"][0]["level"] = Value::from(101);
        assert_eq!(
            parse(&json).unwrap_err(),
            ContentError::LevelOutOfRange {
                name: "Angular".to_string(),
                level: 101
            }
        );
    }

    #[test]
    fn test_empty_experience_rejected() {
        let mut json = embedded_json();
        json["experience"] = Value::Array(vec![]);
        assert_eq!(parse(&json).unwrap_err(), ContentError::Empty("experience"));
    }

    #[test]
    fn test_invalid_motion_rejected() {
        let mut json = embedded_json();
        json["motion"]["repulsion"]["radius"] = Value::from(0.0);
        assert!(matches!(parse(&json), Err(ContentError::InvalidMotion(_))));

        let mut json = embedded_json();
        json["motion"]["spring"]["damping"] = Value::from(-1.0);
        assert!(matches!(parse(&json), Err(ContentError::InvalidMotion(_))));

        let mut json = embedded_json();
        json["motion"]["spring"]["damping"] = Value::from(0.0);
        assert!(matches!(parse(&json), Err(ContentError::InvalidMotion(_))));
    }

    #[test]
    fn test_unstable_spring_rejected() {
        let mut json = embedded_json();
        json["motion"]["spring"]["stiffness"] = Value::from(100_000.0);
        assert!(matches!(
            parse(&json),
            Err(ContentError::InvalidMotion("spring too stiff for the solver"))
        ));

        let mut json = embedded_json();
        json["motion"]["spring"]["damping"] = Value::from(16.0);
        assert!(parse(&json).is_ok());
    }

    #[test]
    fn test_motion_section_is_optional() {
        let mut json = embedded_json();
        json.as_object_mut().unwrap().remove("motion");
        let content = parse(&json).unwrap();
        assert_eq!(content.motion, MotionSettings::default());
    }

    #[test]
    fn test_case_study_link_parsed() {
        let mut json = embedded_json();
        json["case_studies"][0]["link"] = Value::from("https://example.com/merifile.pdf");
        let content = parse(&json).unwrap();
        assert_eq!(
            content.case_studies[0].link.as_deref(),
            Some("https://example.com/merifile.pdf")
        );
        assert!(content.case_studies[1].link.is_none());
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            PortfolioContent::from_json("{ \"profile\": "),
            Err(ContentError::Parse(_))
        ));
    }

    #[test]
    fn test_anchor_css() {
        let anchor = Anchor {
            top: Some(15.0),
            left: Some(8.0),
            ..Anchor::default()
        };
        assert_eq!(anchor.css(), "top: 15%; left: 8%;");

        let anchor = Anchor {
            bottom: Some(20.5),
            right: Some(2.0),
            ..Anchor::default()
        };
        assert_eq!(anchor.css(), "bottom: 20.5%; right: 2%;");
    }

    #[test]
    fn test_copyright_year() {
        assert!(copyright_year() >= 2024);
    }

    #[test]
    fn test_content_icons_have_glyphs() {
        let css = include_str!("../input.css");
        let content = content().unwrap();
        let icons = content
            .journey
            .iter()
            .map(|j| j.icon.as_str())
            .chain(content.floating_tags.iter().map(|t| t.icon.as_str()))
            .chain(content.product_skills.iter().map(|s| s.icon.as_str()))
            .chain(content.case_studies.iter().map(|c| c.icon.as_str()))
            .chain(content.social_links.iter().map(|l| l.icon.as_str()));
        for class in icons
            .flat_map(str::split_whitespace)
            .filter(|c| c.starts_with("extra-"))
        {
            assert!(
                css.contains(&format!(".{class} {{ --icon:")),
                "no glyph defined for {class}"
            );
        }
    }
}
