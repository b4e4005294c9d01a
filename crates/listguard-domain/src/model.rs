use listguard_types::{AiVerdict, PolicySection, Rule};

/// One analysis request, borrowed for the duration of the call.
///
/// `rules` is the already-merged set (store rules plus fallback rules).
#[derive(Clone, Copy, Debug)]
pub struct ListingInput<'a> {
    pub text: &'a str,
    pub rules: &'a [Rule],
    pub policies: &'a [PolicySection],
    /// Verdict from the AI augmentation service, when one was obtained.
    pub ai: Option<&'a AiVerdict>,
}

impl<'a> ListingInput<'a> {
    pub fn new(text: &'a str, rules: &'a [Rule], policies: &'a [PolicySection]) -> Self {
        Self {
            text,
            rules,
            policies,
            ai: None,
        }
    }

    pub fn with_ai(mut self, verdict: Option<&'a AiVerdict>) -> Self {
        self.ai = verdict;
        self
    }
}
