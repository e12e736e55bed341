use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use rstest::*;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use codetionary::commands::learning::respond;
use codetionary::utils::openrouter::{CompletionError, MODEL, OpenRouterClient};
use codetionary::utils::prompts::{CommandKind, Invocation};
use codetionary::utils::render::Reply;

use crate::common::fixtures::*;
use crate::common::mocks::MockCompleter;
use crate::test_utils;

fn completer_returning(text: String) -> MockCompleter {
    let mut completer = MockCompleter::new();
    completer
        .expect_complete()
        .withf(|model: &str, _prompt: &str| model == MODEL)
        .times(1)
        .returning(move |_, _| Ok(text.clone()));
    completer
}

fn failing_completer() -> MockCompleter {
    let mut completer = MockCompleter::new();
    completer
        .expect_complete()
        .times(1)
        .returning(|_, _| Err(CompletionError::Empty));
    completer
}

#[tokio::test]
async fn learn_short_answer_is_sent_directly() {
    test_utils::init();
    let completer = completer_returning(RECURSION_ANSWER.to_string());

    let reply = respond(&completer, &learn_recursion()).await;

    assert_eq!(reply, Reply::Text(RECURSION_ANSWER.to_string()));
}

#[tokio::test]
async fn code_long_answer_is_split_into_three_parts() {
    test_utils::init();
    let answer = long_completion(3400);
    let completer = completer_returning(answer.clone());

    let reply = respond(&completer, &code_sorting_python()).await;

    assert_matches!(reply, Reply::Sections { title, parts, .. } => {
        assert_eq!(title, "Code Examples");
        let sizes: Vec<usize> = parts.iter().map(|p| p.chars().count()).collect();
        assert_eq!(sizes, vec![1500, 1500, 400]);
        assert_eq!(parts.concat(), answer);
    });
}

#[tokio::test]
async fn roadmap_prompt_carries_every_field() {
    test_utils::init();
    let mut completer = MockCompleter::new();
    completer
        .expect_complete()
        .withf(|_model: &str, prompt: &str| {
            [
                "Ada",
                "Backend Engineering",
                "University of Waterloo",
                "Second year",
                "Toronto, Canada",
                "distributed systems, compilers",
                "Codetionary",
            ]
            .iter()
            .all(|field| prompt.contains(field))
        })
        .times(1)
        .returning(|_, _| Ok("Step 1: learn Rust.".to_string()));

    let reply = respond(&completer, &sample_roadmap()).await;

    assert_eq!(reply, Reply::Text("Step 1: learn Rust.".to_string()));
}

#[rstest]
#[case::roadmap(sample_roadmap(), CommandKind::Roadmap)]
#[case::learn(learn_recursion(), CommandKind::Learn)]
#[case::code(code_sorting_python(), CommandKind::Code)]
#[tokio::test]
async fn failures_become_the_command_apology(
    #[case] invocation: Invocation,
    #[case] kind: CommandKind,
) {
    test_utils::init();
    let completer = failing_completer();

    let reply = respond(&completer, &invocation).await;

    assert_eq!(reply, Reply::Text(kind.apology().to_string()));
}

#[tokio::test]
async fn server_error_from_endpoint_yields_apology() {
    test_utils::init();
    let server = MockServer::start().await;
    let client = OpenRouterClient::new(&server.uri(), Some("sk-or-test".to_string()));

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let reply = respond(&client, &code_sorting_python()).await;

    assert_eq!(
        reply,
        Reply::Text("Sorry, I couldn't fetch code examples. Please try again later!".to_string())
    );
    server.verify().await;
}

#[tokio::test]
async fn endpoint_answer_is_relayed_verbatim() {
    test_utils::init();
    let server = MockServer::start().await;
    let client = OpenRouterClient::new(&server.uri(), Some("sk-or-test".to_string()));

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("Authorization", "Bearer sk-or-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "role": "assistant", "content": RECURSION_ANSWER } }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let reply = respond(&client, &learn_recursion()).await;

    assert_eq!(reply, Reply::Text(RECURSION_ANSWER.to_string()));
    server.verify().await;
}

#[tokio::test]
async fn missing_api_key_yields_apology() {
    test_utils::init();
    let client = OpenRouterClient::new("http://127.0.0.1:9", None);

    let reply = respond(&client, &learn_recursion()).await;

    assert_eq!(reply, Reply::Text(CommandKind::Learn.apology().to_string()));
}
