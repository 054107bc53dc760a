use regex::Regex;

pub const BREATHING_REPLY: &str = "It sounds like a lot is weighing on you right now. \
    Let's slow things down with a short breathing exercise: in for four counts, \
    hold for four, out for four. Repeat a few times and see how you feel.";

pub const JOURNALING_REPLY: &str = "I'm sorry you're feeling low. Sometimes putting \
    the feeling into words helps; would you like to write about it in your journal?";

pub const CRISIS_REPLY: &str = "If you are thinking about hurting yourself, please \
    reach out for support right now. You can call or text 988 (Suicide & Crisis \
    Lifeline) at any time to talk with someone. You matter, and you don't have to \
    go through this alone.";

pub const DEFAULT_REPLY: &str = "Thanks for sharing. I'm here whenever you want to \
    talk. A quick mood check-in can also be a good way to keep track of how today \
    feels.";

struct Rule {
    pattern: Regex,
    response: &'static str,
}

impl Rule {
    fn new(pattern: &str, response: &'static str) -> Self {
        Self {
            // Patterns are compile-time literals; a failure here is a bug in
            // the table, not a runtime condition.
            pattern: Regex::new(pattern).expect("responder rule pattern must compile"),
            response,
        }
    }
}

/// Fixed-rule supportive responder. Rules are tried top to bottom against the
/// whole input (case-insensitive, matching anywhere) and the first hit wins;
/// no rule matching falls through to [`DEFAULT_REPLY`]. Rule order is part of
/// the contract: the crisis rule currently sits last, mirroring the shipped
/// behaviour, so input that also contains stress or sadness keywords gets
/// those replies instead. Flagged for product review in DESIGN.md; do not
/// reorder casually.
pub struct Responder {
    rules: Vec<Rule>,
}

impl Responder {
    pub fn new() -> Self {
        let rules = vec![
            Rule::new(
                r"(?i)stress|anxi|overwhelm|panic|worr|nervous|tense",
                BREATHING_REPLY,
            ),
            Rule::new(
                r"(?i)sad|depress|down|unhappy|lonely|cry|miserable",
                JOURNALING_REPLY,
            ),
            Rule::new(
                r"(?i)hurt myself|self[- ]?harm|suicid|kill myself|end my life|end it all",
                CRISIS_REPLY,
            ),
        ];

        Self { rules }
    }

    /// Pure with respect to its input; no store or session involved.
    pub fn reply(&self, text: &str) -> &'static str {
        for rule in &self.rules {
            if rule.pattern.is_match(text) {
                return rule.response;
            }
        }
        DEFAULT_REPLY
    }
}

impl Default for Responder {
    fn default() -> Self {
        Self::new()
    }
}
