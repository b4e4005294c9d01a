use listguard_types::Tier;

#[derive(Clone, Debug, PartialEq)]
pub struct MatcherConfig {
    /// Tokens kept on each side of a match.
    pub context_tokens: usize,
    /// Characters kept on each side when no token boundary covers the match.
    pub char_window: usize,
    /// Glob patterns over normalized terms that are never reported.
    pub allow: Vec<String>,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            context_tokens: 10,
            char_window: 50,
            allow: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RelevanceConfig {
    /// Ratio above which a section is listed as matched.
    pub match_threshold: f64,
    /// Ratio above which a high/critical section becomes an issue.
    pub flag_threshold: f64,
    pub max_keywords: usize,
    /// Shortest keyword kept, in characters.
    pub min_keyword_len: usize,
    pub extra_stop_words: Vec<String>,
}

impl Default for RelevanceConfig {
    fn default() -> Self {
        Self {
            match_threshold: 0.3,
            flag_threshold: 0.6,
            max_keywords: 10,
            min_keyword_len: 4,
            extra_stop_words: Vec::new(),
        }
    }
}

/// Score penalties, applied once per issue group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreWeights {
    pub critical: u32,
    pub high: u32,
    pub medium: u32,
    pub low: u32,
    pub warning: u32,
    /// Applied once when any critical or high group exists.
    pub severe_penalty: u32,
}

impl ScoreWeights {
    pub fn penalty(&self, tier: Tier) -> u32 {
        match tier {
            Tier::Critical => self.critical,
            Tier::High => self.high,
            Tier::Medium => self.medium,
            Tier::Low => self.low,
            Tier::Warning => self.warning,
        }
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            critical: 40,
            high: 30,
            medium: 15,
            low: 5,
            warning: 2,
            severe_penalty: 20,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EffectiveConfig {
    pub profile: String,
    /// Overall tier at or above which the run is considered failing.
    pub fail_on: Tier,
    pub matcher: MatcherConfig,
    pub relevance: RelevanceConfig,
    pub weights: ScoreWeights,
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        Self {
            profile: "standard".to_string(),
            fail_on: Tier::High,
            matcher: MatcherConfig::default(),
            relevance: RelevanceConfig::default(),
            weights: ScoreWeights::default(),
        }
    }
}

impl EffectiveConfig {
    pub fn fails(&self, overall: Option<Tier>) -> bool {
        overall.is_some_and(|tier| tier >= self.fail_on)
    }
}
