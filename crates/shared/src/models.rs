use serde::Deserialize;

/// Problem difficulty as encoded by the upstream catalog (1=Easy, 2=Medium,
/// 3=Hard). Any other level is a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "u8")]
pub enum Difficulty {
    Easy = 1,
    Medium = 2,
    Hard = 3,
}

impl TryFrom<u8> for Difficulty {
    type Error = String;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            1 => Ok(Self::Easy),
            2 => Ok(Self::Medium),
            3 => Ok(Self::Hard),
            other => Err(format!("unknown difficulty level: {}", other)),
        }
    }
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

/// One problem from the upstream catalog, normalized. Immutable once fetched.
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub level: Difficulty,
    pub tags: Vec<String>,
}

/// What to pick for a single run. Built fresh from the day context.
#[derive(Debug, Clone)]
pub struct SelectionCriteria {
    pub difficulty: Difficulty,
    pub tag: String,
    pub count: usize,
}

impl SelectionCriteria {
    /// Early phase runs get two Easy problems to warm up; after that it is
    /// one Medium problem per day.
    pub fn for_context(context: &DayContext) -> Self {
        let (difficulty, count) = if context.is_early_phase {
            (Difficulty::Easy, 2)
        } else {
            (Difficulty::Medium, 1)
        };

        Self {
            difficulty,
            tag: context.rotation_tag.clone(),
            count,
        }
    }
}

/// Where a run falls relative to the schedule epoch.
#[derive(Debug, Clone)]
pub struct DayContext {
    pub day_offset: i64,
    pub is_early_phase: bool,
    pub rotation_tag: String,
}

/// A selected problem enriched with the display fields the sinks publish.
#[derive(Debug, Clone)]
pub struct SelectedProblem {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub level: Difficulty,
    pub display_difficulty: String,
    pub url: String,
    pub tag: String,
}

impl SelectedProblem {
    pub fn from_problem(problem: &Problem, tag: &str) -> Self {
        Self {
            id: problem.id,
            title: problem.title.clone(),
            slug: problem.slug.clone(),
            level: problem.level,
            display_difficulty: problem.level.label().to_string(),
            url: format!("https://leetcode.com/problems/{}/", problem.slug),
            tag: tag.to_string(),
        }
    }
}
