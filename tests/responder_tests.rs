use solace::{
    Responder, BREATHING_REPLY, CRISIS_REPLY, DEFAULT_REPLY, JOURNALING_REPLY,
};

#[test]
fn anxiety_keywords_get_the_breathing_reply() {
    let responder = Responder::new();
    assert_eq!(responder.reply("I feel so anxious today"), BREATHING_REPLY);
    assert_eq!(responder.reply("work has me stressed out"), BREATHING_REPLY);
    assert_eq!(responder.reply("COMPLETELY OVERWHELMED"), BREATHING_REPLY);
}

#[test]
fn sadness_keywords_get_the_journaling_reply() {
    let responder = Responder::new();
    assert_eq!(responder.reply("feeling pretty sad tonight"), JOURNALING_REPLY);
    assert_eq!(responder.reply("I've been so lonely lately"), JOURNALING_REPLY);
}

#[test]
fn crisis_keywords_get_the_crisis_reply() {
    let responder = Responder::new();
    assert_eq!(responder.reply("I want to hurt myself"), CRISIS_REPLY);
    assert_eq!(responder.reply("thinking about suicide"), CRISIS_REPLY);
}

#[test]
fn unmatched_and_empty_input_get_the_default_reply() {
    let responder = Responder::new();
    assert_eq!(responder.reply("just saying hi"), DEFAULT_REPLY);
    assert_eq!(responder.reply(""), DEFAULT_REPLY);
}

// Documents the current rule precedence: the crisis rule sits last, so input
// that also matches an earlier category gets that category's reply. If product
// review reorders the rules, this test should flip with it.
#[test]
fn earlier_rules_shadow_the_crisis_rule() {
    let responder = Responder::new();
    assert_eq!(
        responder.reply("so stressed I might hurt myself"),
        BREATHING_REPLY
    );
    assert_eq!(
        responder.reply("too sad, thinking about ending it all"),
        JOURNALING_REPLY
    );
}

#[test]
fn replies_are_deterministic_for_the_same_input() {
    let responder = Responder::new();
    let first = responder.reply("anxious about tomorrow");
    assert_eq!(responder.reply("anxious about tomorrow"), first);
}
