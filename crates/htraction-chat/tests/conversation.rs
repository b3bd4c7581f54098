use htraction_chat::Conversation;
use htraction_chat::assistant::{FALLBACK, GREETING};
use htraction_chat::responder::CannedResponder;
use htraction_core::models::chat::ChatRole;

#[test]
fn opens_with_greeting() {
    let conversation = Conversation::investor();
    let messages = conversation.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].id, 1);
    assert_eq!(messages[0].role, ChatRole::Assistant);
    assert_eq!(messages[0].content, GREETING);
}

#[test]
fn send_appends_user_message_and_reply() {
    let mut conversation = Conversation::investor();
    let reply = conversation.send("Who are the founders?").unwrap();
    assert_eq!(reply.id, 3);
    assert_eq!(reply.role, ChatRole::Assistant);
    assert!(reply.content.contains("Founding Team"));

    let messages = conversation.messages();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[1].role, ChatRole::User);
    assert_eq!(messages[1].content, "Who are the founders?");
}

#[test]
fn blank_input_is_ignored() {
    let mut conversation = Conversation::investor();
    assert!(conversation.send("").is_none());
    assert!(conversation.send("   \n").is_none());
    assert_eq!(conversation.messages().len(), 1);
}

#[test]
fn ids_stay_sequential() {
    let mut conversation = Conversation::investor();
    conversation.send("hello");
    conversation.send("show me fintech startups");
    let ids: Vec<u32> = conversation.messages().iter().map(|m| m.id).collect();
    assert_eq!(ids, [1, 2, 3, 4, 5]);
    assert_eq!(conversation.messages()[2].content, FALLBACK);
}

#[test]
fn responder_can_be_extended_mid_conversation() {
    let mut conversation = Conversation::new("hi", CannedResponder::new("?"));
    assert_eq!(conversation.send("pipeline").unwrap().content, "?");
    conversation
        .responder_mut()
        .extend([htraction_chat::responder::CannedResponse {
            keyword: "pipeline".into(),
            reply: "4 companies".into(),
        }])
        .unwrap();
    assert_eq!(conversation.send("pipeline").unwrap().content, "4 companies");
}

#[test]
fn extended_replies_rank_after_builtin_ones() {
    let mut conversation = Conversation::investor();
    let added = conversation
        .extend_responses(
            r#"{ "fallback": "unused", "responses": [
                { "keyword": "pricing", "reply": "Plans start at $99." },
                { "keyword": "star ai", "reply": "ignored" }
            ] }"#,
        )
        .unwrap();
    assert_eq!(added, 2);

    let reply = conversation.send("What about pricing?").unwrap();
    assert_eq!(reply.content, "Plans start at $99.");
    let reply = conversation.send("Tell me about Star AI").unwrap();
    assert_ne!(reply.content, "ignored");
    assert_eq!(conversation.responder().fallback(), FALLBACK);
}
