use rand::seq::SliceRandom;
use rand::Rng;

use crate::analysis::risk::RiskTier;

const PCT_PLACEHOLDER: &str = "{pct}";

const HIGH_MESSAGES: &[&str] = &[
    "Pack your bags. The robots are already writing your LinkedIn goodbye post.",
    "Automation progress: {pct}% (still need you to refill the coffee pods).",
    "Good news: You'll have more time for hobbies. Bad news: No income for said hobbies.",
];

const MEDIUM_MESSAGES: &[&str] = &[
    "You're in the danger zone, but there's still time to learn Python.",
    "{pct}% automated. Think of it as job security with an expiration date.",
    "The machines are coming, but they're stuck in traffic.",
];

const LOW_MESSAGES: &[&str] = &[
    "Congrats! AI can't replicate your unique blend of empathy and chaos.",
    "Only {pct}% automated. You're basically job-immortal (for now).",
    "The robots tried to take your job but got overwhelmed by the human drama.",
];

pub fn messages_for(tier: RiskTier) -> &'static [&'static str] {
    match tier {
        RiskTier::High => HIGH_MESSAGES,
        RiskTier::Medium => MEDIUM_MESSAGES,
        RiskTier::Low => LOW_MESSAGES,
    }
}

/// Picks a message for `tier` and fills in the integer part of the risk score.
pub fn doom_message<R: Rng + ?Sized>(tier: RiskTier, risk_score: f64, rng: &mut R) -> String {
    let template = messages_for(tier)
        .choose(rng)
        .copied()
        .unwrap_or_default();
    template.replace(PCT_PLACEHOLDER, &(risk_score.trunc() as i64).to_string())
}
